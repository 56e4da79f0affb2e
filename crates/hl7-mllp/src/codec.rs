use bytes::{BufMut, BytesMut};

/// Start-of-block byte opening every frame (vertical tab).
pub const START_BLOCK: u8 = 0x0B;

/// End-of-block byte closing the payload (file separator).
pub const END_BLOCK: u8 = 0x1C;

/// Trailer byte following the end-of-block marker (carriage return).
pub const TRAILER: u8 = 0x0D;

/// Framing overhead per message: start block + end block + trailer.
pub const FRAME_OVERHEAD: usize = 3;

/// Encode one message payload as a complete MLLP frame.
///
/// Wire format:
/// ```text
/// ┌────────────┬──────────────────┬────────────┬──────────────┐
/// │ Start (1B) │ Payload          │ End (1B)   │ Trailer (1B) │
/// │ 0x0B       │ (message bytes)  │ 0x1C       │ 0x0D         │
/// └────────────┴──────────────────┴────────────┴──────────────┘
/// ```
///
/// This is the minimal variant of the lower layer protocol: no length
/// prefix, no checksum, and no payload escaping. Payload bytes that collide
/// with the delimiters are not disambiguated at this layer.
///
/// An empty payload is valid and yields the three framing bytes alone.
pub fn encode_frame(payload: &[u8], dst: &mut BytesMut) {
    dst.reserve(FRAME_OVERHEAD + payload.len());
    dst.put_u8(START_BLOCK);
    dst.put_slice(payload);
    dst.put_u8(END_BLOCK);
    dst.put_u8(TRAILER);
}

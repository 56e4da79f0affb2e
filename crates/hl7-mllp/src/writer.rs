use std::io::{ErrorKind, Write};

use bytes::BytesMut;
use tracing::{debug, trace, warn};

use crate::codec::encode_frame;
use crate::config::WriterConfig;
use crate::encoding::TextEncoding;
use crate::error::{MllpError, Result};

const INITIAL_BUFFER_CAPACITY: usize = 4 * 1024;

/// Writes MLLP-framed messages to any `Write` sink.
///
/// Every message is assembled into a complete frame in memory and handed to
/// the sink as a single write followed by one flush. That single-write
/// contract is the point of this type rather than an optimization: legacy HL7
/// receivers expect the whole frame to arrive in one network segment, and
/// separate writes for start block, payload, and trailer would let the
/// transport split them across packets.
///
/// A writer drives one sink at a time: `set_sink` replaces the active sink
/// wholesale and `close` releases it. Writing with no sink attached fails
/// with [`MllpError::SinkNotSet`]. The writer never opens the sink itself,
/// and external closure surfaces as an ordinary I/O failure on the next
/// write.
///
/// Calls block until the sink has taken the frame and the flush has returned.
/// There is no cross-call buffering and no internal retry; a failed write
/// means the frame was not delivered, and the sink is left in place for the
/// caller to retry or replace. Writers are not synchronized: use one writer
/// per sink, or serialize access externally.
pub struct MllpWriter<W> {
    sink: Option<W>,
    buf: BytesMut,
    config: WriterConfig,
}

impl<W: Write> MllpWriter<W> {
    /// Create a writer over an attached sink with default configuration.
    pub fn new(sink: W) -> Self {
        Self::with_config(sink, WriterConfig::default())
    }

    /// Create a writer over an attached sink with explicit configuration.
    pub fn with_config(sink: W, config: WriterConfig) -> Self {
        Self {
            sink: Some(sink),
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
            config,
        }
    }

    /// Create a writer with no sink attached.
    ///
    /// Writing fails with [`MllpError::SinkNotSet`] until a sink is set.
    pub fn detached() -> Self {
        Self::detached_with_config(WriterConfig::default())
    }

    /// Create a detached writer with explicit configuration.
    pub fn detached_with_config(config: WriterConfig) -> Self {
        Self {
            sink: None,
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
            config,
        }
    }

    /// Attach a sink, replacing any previously active one.
    ///
    /// Frames written after replacement go to the new sink only; the old
    /// sink is dropped without receiving further bytes.
    pub fn set_sink(&mut self, sink: W) {
        self.sink = Some(sink);
    }

    /// Frame and write one message using the configured default encoding.
    ///
    /// Blocks until the sink has accepted the complete frame and the flush
    /// has finished. An empty message is valid and produces a bare
    /// three-byte frame.
    pub fn write_message(&mut self, text: &str) -> Result<()> {
        self.write_message_with(text, self.config.default_encoding)
    }

    /// Frame and write one message, overriding the default encoding for this
    /// call only.
    ///
    /// Characters the encoding cannot represent are substituted, as a
    /// `tracing` warning reports.
    pub fn write_message_with(&mut self, text: &str, encoding: TextEncoding) -> Result<()> {
        let (payload, substituted) = encoding.encode(text);
        if substituted {
            warn!(
                encoding = encoding.name(),
                "substituted characters the encoding cannot represent"
            );
        }

        self.buf.clear();
        encode_frame(&payload, &mut self.buf);
        self.write_and_flush()?;

        trace!(
            frame_len = self.buf.len(),
            encoding = encoding.name(),
            "wrote mllp frame"
        );
        Ok(())
    }

    /// Release the active sink, if any.
    ///
    /// The sink is dropped, which closes destinations that close on drop
    /// (sockets, files). The release happens at most once; calling `close`
    /// again is a no-op, and later writes fail with
    /// [`MllpError::SinkNotSet`] until a fresh sink is attached.
    pub fn close(&mut self) {
        if self.sink.take().is_some() {
            debug!("released output sink");
        }
    }

    /// Borrow the attached sink.
    pub fn get_ref(&self) -> Option<&W> {
        self.sink.as_ref()
    }

    /// Mutably borrow the attached sink.
    pub fn get_mut(&mut self) -> Option<&mut W> {
        self.sink.as_mut()
    }

    /// Consume the writer and return the attached sink.
    pub fn into_inner(self) -> Option<W> {
        self.sink
    }

    /// Current writer configuration.
    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Hand the buffered frame to the sink and flush it.
    ///
    /// The whole frame goes out in one write call; the loop resumes only
    /// after a short write, so the frame stays contiguous on the stream
    /// either way. `WouldBlock` propagates because sink-level write timeouts
    /// surface as exactly that kind.
    fn write_and_flush(&mut self) -> Result<()> {
        let sink = self.sink.as_mut().ok_or(MllpError::SinkNotSet)?;

        let mut offset = 0usize;
        while offset < self.buf.len() {
            match sink.write(&self.buf[offset..]) {
                Ok(0) => return Err(MllpError::SinkClosed),
                Ok(n) => offset += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(MllpError::Io(err)),
            }
        }

        loop {
            match sink.flush() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(MllpError::Io(err)),
            }
        }
    }
}

//! MLLP (Minimal Lower Layer Protocol) framing writer for HL7 v2 messages.
//!
//! MLLP is the de-facto wrapper hospitals use to move pipe-delimited HL7 v2
//! messages over raw TCP. Each message travels as one frame:
//!
//! ```text
//! ┌──────┬─────────────────┬──────┬──────┐
//! │ 0x0B │ message payload │ 0x1C │ 0x0D │
//! └──────┴─────────────────┴──────┴──────┘
//! ```
//!
//! There is no length prefix, no checksum, and no escaping. The payload is
//! the message text in a configurable byte encoding (UTF-8 unless told
//! otherwise), and the whole frame is handed to the sink in a single write
//! so receivers that read one segment per frame keep working.
//!
//! [`MllpWriter`] frames messages over any [`std::io::Write`] sink:
//!
//! ```
//! use hl7_mllp::MllpWriter;
//!
//! let mut writer = MllpWriter::new(Vec::new());
//! writer.write_message("MSH|^~\\&|HIS|RIH|EKG|EKG|199904140038||ADT^A01|12345|P|2.2")?;
//!
//! let frame = writer.into_inner().unwrap();
//! assert_eq!(frame[0], 0x0B);
//! assert_eq!(&frame[frame.len() - 2..], &[0x1C, 0x0D]);
//! # Ok::<(), hl7_mllp::MllpError>(())
//! ```
//!
//! Reading and acknowledging frames is the receiving side's job and lives
//! outside this crate, as do connection management and retry policy.

pub mod codec;
pub mod config;
pub mod encoding;
pub mod error;
pub mod writer;

pub use codec::{encode_frame, END_BLOCK, FRAME_OVERHEAD, START_BLOCK, TRAILER};
pub use config::WriterConfig;
pub use encoding::TextEncoding;
pub use error::{MllpError, Result};
pub use writer::MllpWriter;

/// Errors that can occur while framing and writing messages.
#[derive(Debug, thiserror::Error)]
pub enum MllpError {
    /// No output sink is attached: the writer was never given one, or
    /// `close` released it. Attach a sink before writing again.
    #[error("no output sink attached")]
    SinkNotSet,

    /// The charset label does not resolve to a supported encoding.
    #[error("unsupported charset {label:?}")]
    UnsupportedCharset { label: String },

    /// An I/O error occurred while writing or flushing a frame. The frame
    /// must be treated as not delivered.
    #[error("MLLP I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The sink stopped accepting bytes before the full frame was written.
    #[error("sink closed (frame not delivered)")]
    SinkClosed,
}

pub type Result<T> = std::result::Result<T, MllpError>;

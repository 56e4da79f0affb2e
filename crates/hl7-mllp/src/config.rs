use tracing::debug;

use crate::encoding::TextEncoding;
use crate::error::Result;

/// Configuration for MLLP writers.
///
/// The default encoding is resolved once, up front, and threaded through the
/// writer explicitly; a per-call encoding passed to the writer takes
/// precedence over it. The writer itself never consults ambient state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriterConfig {
    /// Encoding applied when a message is written without an explicit one.
    /// Defaults to UTF-8.
    pub default_encoding: TextEncoding,
}

impl WriterConfig {
    /// Environment variable naming the process-wide default charset.
    pub const CHARSET_VAR: &'static str = "HL7_MLLP_CHARSET";

    /// Build a configuration from the process environment.
    ///
    /// Honors [`Self::CHARSET_VAR`]; when the variable is unset, the default
    /// encoding is UTF-8. A label that does not resolve is an error rather
    /// than a silent fallback.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(Self::CHARSET_VAR) {
            Some(value) => {
                let default_encoding = TextEncoding::for_label(&value.to_string_lossy())?;
                debug!(
                    charset = default_encoding.name(),
                    "using charset from environment"
                );
                Ok(Self { default_encoding })
            }
            None => Ok(Self::default()),
        }
    }
}

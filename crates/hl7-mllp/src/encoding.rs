use std::borrow::Cow;
use std::fmt;

use encoding_rs::Encoding;

use crate::error::{MllpError, Result};

/// A resolved character encoding for message payloads.
///
/// Labels resolve through the WHATWG table in `encoding_rs`. UTF-16 gets
/// native treatment: `encoding_rs` only decodes UTF-16 (its encoder emits
/// UTF-8 per the Encoding Standard), so the UTF-16 variants here encode
/// straight from the message's code units. No byte order mark is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextEncoding(Repr);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Repr {
    Whatwg(&'static Encoding),
    Utf16Le,
    Utf16Be,
}

impl TextEncoding {
    /// UTF-8, used when neither configuration nor the caller picks a charset.
    pub fn utf_8() -> Self {
        TextEncoding(Repr::Whatwg(encoding_rs::UTF_8))
    }

    /// Resolve a charset label such as `"UTF-8"`, `"ISO-8859-1"`, or
    /// `"utf-16"`.
    ///
    /// Matching is ASCII case-insensitive and ignores surrounding whitespace.
    /// Unknown labels fail with [`MllpError::UnsupportedCharset`], as does
    /// the WHATWG `replacement` encoding, which cannot carry a payload.
    pub fn for_label(label: &str) -> Result<Self> {
        let unsupported = || MllpError::UnsupportedCharset {
            label: label.to_owned(),
        };
        let encoding = Encoding::for_label(label.as_bytes()).ok_or_else(unsupported)?;
        if encoding == encoding_rs::UTF_16LE {
            Ok(TextEncoding(Repr::Utf16Le))
        } else if encoding == encoding_rs::UTF_16BE {
            Ok(TextEncoding(Repr::Utf16Be))
        } else if encoding == encoding_rs::REPLACEMENT {
            Err(unsupported())
        } else {
            Ok(TextEncoding(Repr::Whatwg(encoding)))
        }
    }

    /// Canonical name of this encoding.
    pub fn name(&self) -> &'static str {
        match self.0 {
            Repr::Whatwg(encoding) => encoding.name(),
            Repr::Utf16Le => "UTF-16LE",
            Repr::Utf16Be => "UTF-16BE",
        }
    }

    /// Encode `text`, substituting characters the encoding cannot represent.
    ///
    /// Returns the encoded bytes and whether any substitution happened.
    /// UTF-16 covers all of Unicode, so its flag is always `false`.
    pub fn encode<'a>(&self, text: &'a str) -> (Cow<'a, [u8]>, bool) {
        match self.0 {
            Repr::Whatwg(encoding) => {
                let (bytes, _, substituted) = encoding.encode(text);
                (bytes, substituted)
            }
            Repr::Utf16Le => (Cow::Owned(encode_utf16(text, u16::to_le_bytes)), false),
            Repr::Utf16Be => (Cow::Owned(encode_utf16(text, u16::to_be_bytes)), false),
        }
    }
}

impl Default for TextEncoding {
    fn default() -> Self {
        Self::utf_8()
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn encode_utf16(text: &str, unit_to_bytes: fn(u16) -> [u8; 2]) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() * 2);
    for unit in text.encode_utf16() {
        out.extend_from_slice(&unit_to_bytes(unit));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_utf8() {
        assert_eq!(TextEncoding::default(), TextEncoding::utf_8());
        assert_eq!(TextEncoding::default().name(), "UTF-8");
    }

    #[test]
    fn labels_resolve_case_insensitively_with_whitespace() {
        assert_eq!(
            TextEncoding::for_label(" Utf-8 ").unwrap(),
            TextEncoding::utf_8()
        );
        assert_eq!(
            TextEncoding::for_label("ISO-8859-1").unwrap().name(),
            "windows-1252"
        );
        assert_eq!(
            TextEncoding::for_label("latin1").unwrap(),
            TextEncoding::for_label("windows-1252").unwrap()
        );
    }

    #[test]
    fn utf16_labels_map_to_explicit_byte_orders() {
        assert_eq!(TextEncoding::for_label("utf-16").unwrap().name(), "UTF-16LE");
        assert_eq!(TextEncoding::for_label("unicode").unwrap().name(), "UTF-16LE");
        assert_eq!(
            TextEncoding::for_label("UTF-16BE").unwrap().name(),
            "UTF-16BE"
        );
    }

    #[test]
    fn unknown_label_is_rejected() {
        let err = TextEncoding::for_label("ebcdic-cp-us").unwrap_err();
        assert!(matches!(
            err,
            MllpError::UnsupportedCharset { label } if label == "ebcdic-cp-us"
        ));
    }

    #[test]
    fn replacement_labels_are_rejected() {
        assert!(TextEncoding::for_label("hz-gb-2312").is_err());
        assert!(TextEncoding::for_label("replacement").is_err());
    }

    #[test]
    fn utf8_borrows_and_roundtrips() {
        let (bytes, substituted) = TextEncoding::utf_8().encode("café");
        assert_eq!(bytes.as_ref(), "café".as_bytes());
        assert!(!substituted);
        assert!(matches!(bytes, Cow::Borrowed(_)));
    }

    #[test]
    fn single_byte_encoding_produces_single_bytes() {
        let latin1 = TextEncoding::for_label("ISO-8859-1").unwrap();
        let (bytes, substituted) = latin1.encode("café");
        assert_eq!(bytes.as_ref(), &[0x63, 0x61, 0x66, 0xE9]);
        assert!(!substituted);
    }

    #[test]
    fn unmappable_characters_are_flagged() {
        let latin1 = TextEncoding::for_label("ISO-8859-1").unwrap();
        let (_, substituted) = latin1.encode("x → y");
        assert!(substituted);
    }

    #[test]
    fn utf16le_encodes_code_units() {
        let utf16 = TextEncoding::for_label("utf-16").unwrap();
        let (bytes, substituted) = utf16.encode("foo");
        assert_eq!(bytes.as_ref(), &[0x66, 0x00, 0x6F, 0x00, 0x6F, 0x00]);
        assert!(!substituted);
    }

    #[test]
    fn utf16be_encodes_surrogate_pairs() {
        let utf16be = TextEncoding::for_label("utf-16be").unwrap();
        let (bytes, _) = utf16be.encode("\u{1D11E}");
        assert_eq!(bytes.as_ref(), &[0xD8, 0x34, 0xDD, 0x1E]);
    }

    #[test]
    fn no_byte_order_mark_is_emitted() {
        let utf16 = TextEncoding::for_label("utf-16").unwrap();
        let (bytes, _) = utf16.encode("A");
        assert_eq!(bytes.as_ref(), &[0x41, 0x00]);
    }
}

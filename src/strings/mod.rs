//! Text encodings used for catalog names
//!
//! HFS stores names in a legacy 8-bit (or double-byte) Mac script encoding
//! chosen by whoever formatted the volume; HFS+ and HFSX always use UTF-16.

mod mac_japanese;
mod mac_japanese_table;
mod mac_roman;
mod unicode;

pub use mac_japanese::MacJapanese;
pub use mac_roman::MacRoman;
pub use unicode::{case_fold, compare_binary, compare_case_folding, Utf16Be};

use std::sync::Arc;
use thiserror::Error;

/// Failure converting between bytes and text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("{charset}: cannot decode byte 0x{byte:02X} at position {position}")]
    Unmappable {
        charset: &'static str,
        position: usize,
        byte: u8,
    },

    #[error("{charset}: cannot encode character U+{unit:04X} at position {position}")]
    Unencodable {
        charset: &'static str,
        position: usize,
        unit: u32,
    },

    #[error("{charset}: malformed input ({reason})")]
    Malformed {
        charset: &'static str,
        reason: String,
    },
}

/// Bidirectional byte/text transform
pub trait StringCodec: Send + Sync {
    /// Decode encoded bytes into text
    fn decode(&self, data: &[u8]) -> Result<String, CodecError>;

    /// Encode text into bytes
    fn encode(&self, text: &str) -> Result<Vec<u8>, CodecError>;

    /// Name of the character set, as accepted by [`codec_for_name`]
    fn charset_name(&self) -> &'static str;
}

/// Look up a codec for HFS names by character set name
///
/// Matching is case-insensitive and ignores `-`/`_`, so `"mac-roman"` and
/// `"MacRoman"` are the same.
pub fn codec_for_name(name: &str) -> Option<Arc<dyn StringCodec>> {
    let normalized: String = name
        .chars()
        .filter(|c| *c != '-' && *c != '_' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();

    match normalized.as_str() {
        "macroman" | "roman" => Some(Arc::new(MacRoman)),
        "macjapanese" | "japanese" => Some(Arc::new(MacJapanese::with_fallback(Arc::new(MacRoman)))),
        "utf16be" | "utf16" => Some(Arc::new(Utf16Be)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codec_for_name() {
        assert_eq!(codec_for_name("MacRoman").map(|c| c.charset_name()), Some("MacRoman"));
        assert_eq!(codec_for_name("mac-japanese").map(|c| c.charset_name()), Some("MacJapanese"));
        assert_eq!(codec_for_name("UTF-16BE").map(|c| c.charset_name()), Some("UTF-16BE"));
        assert!(codec_for_name("EBCDIC").is_none());
    }
}

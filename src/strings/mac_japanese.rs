//! MacJapanese, the Shift-JIS derived script used by Japanese Mac OS
//!
//! Double-byte codes come from Apple's mapping table: JIS X 0208 in
//! Shift-JIS layout plus Apple's extension and vertical-form rows. Some codes
//! stand for several UTF-16 units. Lead bytes 0xF0-0xFC form the
//! user-defined area and map arithmetically onto the private use block
//! U+E000..U+E98B. Single bytes differ from plain Shift-JIS in a few
//! Mac-specific slots.

use super::{CodecError, StringCodec};
use super::mac_japanese_table::DOUBLE_BYTE;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

const USER_AREA_FIRST: u16 = 0xE000;
const USER_AREA_LAST: u16 = 0xE98B;
/// Trail bytes per user-area lead byte (0x40-0x7E, 0x80-0xFC)
const USER_AREA_ROW: u16 = 0xBC;

/// Longest text sequence, in UTF-16 units, that a single code may stand for
const MAX_SEQUENCE_UNITS: usize = 5;

/// MacJapanese codec with an optional fallback for unmapped single bytes
#[derive(Clone, Default)]
pub struct MacJapanese {
    fallback: Option<Arc<dyn StringCodec>>,
}

impl std::fmt::Debug for MacJapanese {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MacJapanese")
            .field("fallback", &self.fallback.as_ref().map(|c| c.charset_name()))
            .finish()
    }
}

impl MacJapanese {
    /// Codec without a fallback: unmapped input is an error
    pub fn new() -> Self {
        Self { fallback: None }
    }

    /// Codec that hands unmapped single bytes and characters to `fallback`
    pub fn with_fallback(fallback: Arc<dyn StringCodec>) -> Self {
        Self {
            fallback: Some(fallback),
        }
    }

    fn is_user_area_trail(trail: u8) -> bool {
        (0x40..=0xFC).contains(&trail) && trail != 0x7F
    }

    /// Decode a user-defined area code (lead 0xF0-0xFC) to its private use unit
    fn decode_user_area(lead: u8, trail: u8) -> Option<u16> {
        if !(0xF0..=0xFC).contains(&lead) || !Self::is_user_area_trail(trail) {
            return None;
        }
        let row = u16::from(lead - 0xF0);
        let column = u16::from(trail) - if trail >= 0x80 { 0x41 } else { 0x40 };
        Some(USER_AREA_FIRST + row * USER_AREA_ROW + column)
    }

    /// Encode a private use unit in U+E000..U+E98B to its user-defined area code
    fn encode_user_area(unit: u16) -> Option<u16> {
        if !(USER_AREA_FIRST..=USER_AREA_LAST).contains(&unit) {
            return None;
        }
        let index = unit - USER_AREA_FIRST;
        let lead = 0xF0 + index / USER_AREA_ROW;
        let column = index % USER_AREA_ROW;
        let trail = 0x40 + column + u16::from(column > 0x3E);
        Some((lead << 8) | trail)
    }

    /// Double-byte table lookup
    fn decode_double(lead: u8, trail: u8) -> Option<&'static str> {
        let code = u16::from_be_bytes([lead, trail]);
        DOUBLE_BYTE
            .binary_search_by_key(&code, |&(c, _)| c)
            .ok()
            .map(|index| DOUBLE_BYTE[index].1)
    }

    /// Single-byte table lookup, appending the mapped text to `out`
    fn decode_single(byte: u8, out: &mut String) -> bool {
        let c = match byte {
            0x5C => '\u{00A5}',
            0x00..=0x7F => char::from(byte),
            0x80 => '\\',
            0xA0 => '\u{00A0}',
            0xA1..=0xDF => match char::from_u32(0xFF61 + u32::from(byte - 0xA1)) {
                Some(c) => c,
                None => return false,
            },
            0xFD => '\u{00A9}',
            0xFE => '\u{2122}',
            0xFF => {
                // Horizontal ellipsis, tagged as the alternate glyph
                out.push_str("\u{2026}\u{F87F}");
                return true;
            }
            _ => return false,
        };
        out.push(c);
        true
    }

    /// Reverse table: unit sequence to 1- or 2-byte code
    fn encode_table() -> &'static HashMap<Vec<u16>, u16> {
        static ENCODE_TABLE: OnceLock<HashMap<Vec<u16>, u16>> = OnceLock::new();
        ENCODE_TABLE.get_or_init(|| {
            let mut table = HashMap::with_capacity(DOUBLE_BYTE.len() + 256);
            for byte in 0x20..=0xFFu8 {
                let mut text = String::new();
                if Self::decode_single(byte, &mut text) {
                    table.entry(text.encode_utf16().collect()).or_insert(u16::from(byte));
                }
            }
            for &(code, text) in DOUBLE_BYTE {
                table.entry(text.encode_utf16().collect()).or_insert(code);
            }
            table
        })
    }

    fn push_code(out: &mut Vec<u8>, code: u16) {
        if code > 0xFF {
            out.extend_from_slice(&code.to_be_bytes());
        } else {
            out.push(code as u8);
        }
    }
}

impl StringCodec for MacJapanese {
    fn decode(&self, data: &[u8]) -> Result<String, CodecError> {
        let mut out = String::with_capacity(data.len());
        let mut i = 0;

        while i < data.len() {
            let lead = data[i];

            if let Some(&trail) = data.get(i + 1) {
                if let Some(unit) = Self::decode_user_area(lead, trail) {
                    // U+E000..U+E98B are all valid scalar values
                    if let Some(c) = char::from_u32(u32::from(unit)) {
                        out.push(c);
                        i += 2;
                        continue;
                    }
                }
                if let Some(text) = Self::decode_double(lead, trail) {
                    out.push_str(text);
                    i += 2;
                    continue;
                }
            }

            if !Self::decode_single(lead, &mut out) {
                match &self.fallback {
                    Some(fallback) => out.push_str(&fallback.decode(&[lead])?),
                    None => {
                        return Err(CodecError::Unmappable {
                            charset: self.charset_name(),
                            position: i,
                            byte: lead,
                        })
                    }
                }
            }
            i += 1;
        }

        Ok(out)
    }

    fn encode(&self, text: &str) -> Result<Vec<u8>, CodecError> {
        let units: Vec<u16> = text.encode_utf16().collect();
        let mut out = Vec::with_capacity(units.len() * 2);
        let mut i = 0;

        'outer: while i < units.len() {
            let unit = units[i];

            if unit < 0x20 {
                out.push(unit as u8);
                i += 1;
                continue;
            }
            if let Some(code) = Self::encode_user_area(unit) {
                Self::push_code(&mut out, code);
                i += 1;
                continue;
            }

            let table = Self::encode_table();
            let longest = MAX_SEQUENCE_UNITS.min(units.len() - i);
            for len in (1..=longest).rev() {
                if let Some(&code) = table.get(&units[i..i + len]) {
                    Self::push_code(&mut out, code);
                    i += len;
                    continue 'outer;
                }
            }

            // Hand the whole character (one or two units) to the fallback
            let width = if (0xD800..0xDC00).contains(&unit) && i + 1 < units.len() { 2 } else { 1 };
            let fallback_bytes = match (&self.fallback, String::from_utf16(&units[i..i + width])) {
                (Some(fallback), Ok(c)) => fallback.encode(&c).ok(),
                _ => None,
            };
            match fallback_bytes {
                Some(bytes) => {
                    out.extend_from_slice(&bytes);
                    i += width;
                }
                None => {
                    return Err(CodecError::Unencodable {
                        charset: self.charset_name(),
                        position: i,
                        unit: u32::from(unit),
                    });
                }
            }
        }

        Ok(out)
    }

    fn charset_name(&self) -> &'static str {
        "MacJapanese"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strings::MacRoman;

    fn codec() -> MacJapanese {
        MacJapanese::with_fallback(Arc::new(MacRoman))
    }

    #[test]
    fn test_user_area_first_code() {
        let codec = codec();
        assert_eq!(codec.encode("\u{E000}").unwrap(), vec![0xF0, 0x40]);
        assert_eq!(codec.decode(&[0xF0, 0x40]).unwrap(), "\u{E000}");
    }

    #[test]
    fn test_user_area_row_boundaries() {
        let codec = codec();
        // Last column before the 0x7F gap, first after it, last code overall
        assert_eq!(codec.encode("\u{E03E}").unwrap(), vec![0xF0, 0x7E]);
        assert_eq!(codec.encode("\u{E03F}").unwrap(), vec![0xF0, 0x80]);
        assert_eq!(codec.encode("\u{E0BC}").unwrap(), vec![0xF1, 0x40]);
        assert_eq!(codec.encode("\u{E98B}").unwrap(), vec![0xFC, 0xFC]);
        assert_eq!(codec.decode(&[0xFC, 0xFC]).unwrap(), "\u{E98B}");
    }

    #[test]
    fn test_user_area_round_trip() {
        let codec = codec();
        for unit in USER_AREA_FIRST..=USER_AREA_LAST {
            let text = String::from_utf16(&[unit]).unwrap();
            let bytes = codec.encode(&text).unwrap();
            assert_eq!(codec.decode(&bytes).unwrap(), text, "U+{:04X}", unit);
        }
    }

    #[test]
    fn test_mac_specific_single_bytes() {
        let codec = codec();
        assert_eq!(
            codec.decode(&[0x5C, 0x80, 0xFD, 0xFE, 0xFF]).unwrap(),
            "\u{00A5}\\\u{00A9}\u{2122}\u{2026}\u{F87F}"
        );
        assert_eq!(codec.encode("\u{00A5}\\").unwrap(), vec![0x5C, 0x80]);
        assert_eq!(codec.encode("\u{2026}\u{F87F}").unwrap(), vec![0xFF]);
        assert_eq!(codec.decode(&[0xB1]).unwrap(), "\u{FF71}");
    }

    #[test]
    fn test_double_byte_kana_and_kanji() {
        let codec = codec();
        // HIRAGANA LETTER A, then the kanji for "sun"
        assert_eq!(codec.decode(&[0x82, 0xA0, 0x93, 0xFA]).unwrap(), "\u{3042}\u{65E5}");
        assert_eq!(codec.encode("\u{3042}\u{65E5}").unwrap(), vec![0x82, 0xA0, 0x93, 0xFA]);
        // Apple keeps the JIS wave dash and minus sign
        assert_eq!(codec.decode(&[0x81, 0x60, 0x81, 0x7C]).unwrap(), "\u{301C}\u{2212}");
    }

    #[test]
    fn test_apple_extension_rows() {
        let codec = MacJapanese::new();
        assert_eq!(codec.decode(&[0x85, 0x40]).unwrap(), "\u{2460}");
        assert_eq!(codec.decode(&[0x86, 0x40]).unwrap(), "\u{339C}");
        // Vertical ideographic comma
        assert_eq!(codec.decode(&[0xEB, 0x41]).unwrap(), "\u{3001}\u{F87E}");
        assert_eq!(codec.encode("\u{3001}\u{F87E}").unwrap(), vec![0xEB, 0x41]);
        assert_eq!(codec.encode("\u{3001}").unwrap(), vec![0x81, 0x41]);
    }

    #[test]
    fn test_multi_unit_codes_match_greedily() {
        let codec = MacJapanese::new();
        // Roman numeral XIII, grouped by a four-unit prefix
        let thirteen = "\u{F862}XIII";
        assert_eq!(codec.decode(&[0x85, 0xAB]).unwrap(), thirteen);
        assert_eq!(codec.encode(thirteen).unwrap(), vec![0x85, 0xAB]);
        // Five units: squared "yuugen gaisha"
        let company = "\u{F862}\u{6709}\u{9650}\u{4F1A}\u{793E}";
        assert_eq!(codec.encode(company).unwrap(), vec![0x87, 0xFB]);
        // Longest match wins, the rest encodes on its own
        let text = format!("{}{}", company, "A");
        assert_eq!(codec.encode(&text).unwrap(), vec![0x87, 0xFB, 0x41]);
        assert_eq!(codec.decode(&[0x87, 0xFB, 0x41]).unwrap(), text);
    }

    #[test]
    fn test_every_table_entry_round_trips() {
        let codec = MacJapanese::new();
        for &(code, text) in DOUBLE_BYTE {
            let bytes = code.to_be_bytes();
            assert_eq!(codec.decode(&bytes).unwrap(), text, "code 0x{:04X}", code);
            assert_eq!(codec.encode(text).unwrap(), bytes.to_vec(), "code 0x{:04X}", code);
        }
        for byte in 0x20..=0xFFu8 {
            let mut text = String::new();
            if MacJapanese::decode_single(byte, &mut text) {
                assert_eq!(codec.encode(&text).unwrap(), vec![byte], "byte 0x{:02X}", byte);
            }
        }
    }

    #[test]
    fn test_unmapped_lead_uses_fallback() {
        // 0x81 alone has no single-byte meaning; Mac Roman maps it to U+00C5
        assert_eq!(codec().decode(&[0x81]).unwrap(), "\u{00C5}");
        let err = MacJapanese::new().decode(&[0x41, 0x81]).unwrap_err();
        assert_eq!(
            err,
            CodecError::Unmappable {
                charset: "MacJapanese",
                position: 1,
                byte: 0x81
            }
        );
    }

    #[test]
    fn test_unencodable_without_fallback() {
        let err = MacJapanese::new().encode("\u{0E01}").unwrap_err();
        assert!(matches!(err, CodecError::Unencodable { position: 0, unit: 0x0E01, .. }));
        // Thai is not in Mac Roman either
        assert!(codec().encode("\u{0E01}").is_err());
    }
}

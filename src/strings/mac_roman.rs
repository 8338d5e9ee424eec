//! Mac OS Roman, the default script for HFS volume and file names

use super::{CodecError, StringCodec};

/// Mac Roman high-half (0x80-0xFF) to Unicode mapping.
static MAC_ROMAN_TABLE: [char; 128] = [
    '\u{00C4}', '\u{00C5}', '\u{00C7}', '\u{00C9}', '\u{00D1}', '\u{00D6}', '\u{00DC}', '\u{00E1}',
    '\u{00E0}', '\u{00E2}', '\u{00E4}', '\u{00E3}', '\u{00E5}', '\u{00E7}', '\u{00E9}', '\u{00E8}',
    '\u{00EA}', '\u{00EB}', '\u{00ED}', '\u{00EC}', '\u{00EE}', '\u{00EF}', '\u{00F1}', '\u{00F3}',
    '\u{00F2}', '\u{00F4}', '\u{00F6}', '\u{00F5}', '\u{00FA}', '\u{00F9}', '\u{00FB}', '\u{00FC}',
    '\u{2020}', '\u{00B0}', '\u{00A2}', '\u{00A3}', '\u{00A7}', '\u{2022}', '\u{00B6}', '\u{00DF}',
    '\u{00AE}', '\u{00A9}', '\u{2122}', '\u{00B4}', '\u{00A8}', '\u{2260}', '\u{00C6}', '\u{00D8}',
    '\u{221E}', '\u{00B1}', '\u{2264}', '\u{2265}', '\u{00A5}', '\u{00B5}', '\u{2202}', '\u{2211}',
    '\u{220F}', '\u{03C0}', '\u{222B}', '\u{00AA}', '\u{00BA}', '\u{03A9}', '\u{00E6}', '\u{00F8}',
    '\u{00BF}', '\u{00A1}', '\u{00AC}', '\u{221A}', '\u{0192}', '\u{2248}', '\u{2206}', '\u{00AB}',
    '\u{00BB}', '\u{2026}', '\u{00A0}', '\u{00C0}', '\u{00C3}', '\u{00D5}', '\u{0152}', '\u{0153}',
    '\u{2013}', '\u{2014}', '\u{201C}', '\u{201D}', '\u{2018}', '\u{2019}', '\u{00F7}', '\u{25CA}',
    '\u{00FF}', '\u{0178}', '\u{2044}', '\u{20AC}', '\u{2039}', '\u{203A}', '\u{FB01}', '\u{FB02}',
    '\u{2021}', '\u{00B7}', '\u{201A}', '\u{201E}', '\u{2030}', '\u{00C2}', '\u{00CA}', '\u{00C1}',
    '\u{00CB}', '\u{00C8}', '\u{00CD}', '\u{00CE}', '\u{00CF}', '\u{00CC}', '\u{00D3}', '\u{00D4}',
    '\u{F8FF}', '\u{00D2}', '\u{00DA}', '\u{00DB}', '\u{00D9}', '\u{0131}', '\u{02C6}', '\u{02DC}',
    '\u{00AF}', '\u{02D8}', '\u{02D9}', '\u{02DA}', '\u{00B8}', '\u{02DD}', '\u{02DB}', '\u{02C7}',
];

/// Single-byte Mac Roman codec
///
/// Decoding is total: every byte value has a mapping. Encoding fails for
/// characters outside the 256-entry repertoire.
#[derive(Debug, Clone, Copy, Default)]
pub struct MacRoman;

impl MacRoman {
    /// Map one byte to its character
    pub fn decode_byte(byte: u8) -> char {
        if byte < 0x80 {
            byte as char
        } else {
            MAC_ROMAN_TABLE[(byte - 0x80) as usize]
        }
    }

    /// Map one character to its byte, if Mac Roman has it
    pub fn encode_char(c: char) -> Option<u8> {
        if (c as u32) < 0x80 {
            return Some(c as u8);
        }
        MAC_ROMAN_TABLE
            .iter()
            .position(|&entry| entry == c)
            .map(|index| 0x80 + index as u8)
    }
}

impl StringCodec for MacRoman {
    fn decode(&self, data: &[u8]) -> Result<String, CodecError> {
        Ok(data.iter().map(|&b| Self::decode_byte(b)).collect())
    }

    fn encode(&self, text: &str) -> Result<Vec<u8>, CodecError> {
        text.chars()
            .enumerate()
            .map(|(position, c)| {
                Self::encode_char(c).ok_or(CodecError::Unencodable {
                    charset: self.charset_name(),
                    position,
                    unit: c as u32,
                })
            })
            .collect()
    }

    fn charset_name(&self) -> &'static str {
        "MacRoman"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_bytes_round_trip() {
        for byte in 0..=255u8 {
            let text = MacRoman.decode(&[byte]).unwrap();
            assert_eq!(text.chars().count(), 1);
            assert_eq!(MacRoman.encode(&text).unwrap(), vec![byte], "byte 0x{:02X}", byte);
        }
    }

    #[test]
    fn test_decode_known_characters() {
        assert_eq!(MacRoman.decode(b"Macintosh HD").unwrap(), "Macintosh HD");
        assert_eq!(MacRoman.decode(&[0x8A, 0xA5, 0xF0]).unwrap(), "\u{00E4}\u{2022}\u{F8FF}");
    }

    #[test]
    fn test_encode_rejects_unmapped() {
        let err = MacRoman.encode("ok\u{3042}").unwrap_err();
        assert_eq!(
            err,
            CodecError::Unencodable {
                charset: "MacRoman",
                position: 2,
                unit: 0x3042
            }
        );
    }
}

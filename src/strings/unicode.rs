//! UTF-16 names and the HFS+ name orderings
//!
//! HFS+ catalog names are stored as big-endian UTF-16 in canonically
//! decomposed form. Two orderings exist: binary (HFSX only) and the
//! case-insensitive "fast Unicode compare" used by every HFS+ volume.

use super::{CodecError, StringCodec};
use std::cmp::Ordering;

/// Big-endian UTF-16 codec for HFS+ name bytes
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf16Be;

impl Utf16Be {
    /// Split big-endian bytes into code units
    pub fn units_from_bytes(data: &[u8]) -> Result<Vec<u16>, CodecError> {
        if data.len() % 2 != 0 {
            return Err(CodecError::Malformed {
                charset: "UTF-16BE",
                reason: format!("odd byte count {}", data.len()),
            });
        }
        Ok(data
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect())
    }

    /// Decode code units, rejecting unpaired surrogates
    pub fn decode_units(units: &[u16]) -> Result<String, CodecError> {
        let mut out = String::with_capacity(units.len());
        for (position, decoded) in char::decode_utf16(units.iter().copied()).enumerate() {
            match decoded {
                Ok(c) => out.push(c),
                Err(err) => {
                    return Err(CodecError::Malformed {
                        charset: "UTF-16BE",
                        reason: format!("unpaired surrogate 0x{:04X} near unit {}", err.unpaired_surrogate(), position),
                    })
                }
            }
        }
        Ok(out)
    }
}

impl StringCodec for Utf16Be {
    fn decode(&self, data: &[u8]) -> Result<String, CodecError> {
        Self::decode_units(&Self::units_from_bytes(data)?)
    }

    fn encode(&self, text: &str) -> Result<Vec<u8>, CodecError> {
        Ok(text.encode_utf16().flat_map(u16::to_be_bytes).collect())
    }

    fn charset_name(&self) -> &'static str {
        "UTF-16BE"
    }
}

/// Irregular entries of the HFS+ lower-case table
///
/// Only letters without a canonical decomposition appear: names are stored
/// decomposed, so precomposed capitals never reach the comparison.
const FOLD_PAIRS: &[(u16, u16)] = &[
    (0x00C6, 0x00E6), (0x00D0, 0x00F0), (0x00D8, 0x00F8), (0x00DE, 0x00FE),
    (0x0110, 0x0111), (0x0126, 0x0127), (0x0132, 0x0133), (0x013F, 0x0140),
    (0x0141, 0x0142), (0x014A, 0x014B), (0x0152, 0x0153), (0x0166, 0x0167),
    (0x0181, 0x0253), (0x0182, 0x0183), (0x0184, 0x0185), (0x0186, 0x0254),
    (0x0187, 0x0188), (0x0189, 0x0256), (0x018A, 0x0257), (0x018B, 0x018C),
    (0x018E, 0x01DD), (0x018F, 0x0259), (0x0190, 0x025B), (0x0191, 0x0192),
    (0x0193, 0x0260), (0x0194, 0x0263), (0x0196, 0x0269), (0x0197, 0x0268),
    (0x0198, 0x0199), (0x019C, 0x026F), (0x019D, 0x0272), (0x019F, 0x0275),
    (0x01A2, 0x01A3), (0x01A4, 0x01A5), (0x01A7, 0x01A8), (0x01A9, 0x0283),
    (0x01AC, 0x01AD), (0x01AE, 0x0288), (0x01B1, 0x028A), (0x01B2, 0x028B),
    (0x01B3, 0x01B4), (0x01B5, 0x01B6), (0x01B7, 0x0292), (0x01B8, 0x01B9),
    (0x01BC, 0x01BD), (0x01C4, 0x01C6), (0x01C5, 0x01C6), (0x01C7, 0x01C9),
    (0x01C8, 0x01C9), (0x01CA, 0x01CC), (0x01CB, 0x01CC), (0x01E4, 0x01E5),
    (0x01F1, 0x01F3), (0x01F2, 0x01F3),
    (0x0402, 0x0452), (0x040F, 0x045F),
    (0x04C3, 0x04C4), (0x04C7, 0x04C8), (0x04CB, 0x04CC),
];

/// Contiguous runs of the lower-case table: `first..=last` shift by `delta`
const FOLD_RUNS: &[(u16, u16, u16)] = &[
    (0x0041, 0x005A, 0x20),
    (0x0391, 0x03A1, 0x20),
    (0x03A3, 0x03A9, 0x20),
    (0x0404, 0x0406, 0x50),
    (0x0408, 0x040B, 0x50),
    (0x0410, 0x0418, 0x20),
    (0x041A, 0x042F, 0x20),
    (0x0531, 0x0556, 0x30),
    (0x10A0, 0x10C5, 0x30),
    (0x2160, 0x216F, 0x10),
    (0xFF21, 0xFF3A, 0x20),
];

/// Runs where each even unit folds to the odd unit after it
const FOLD_ALTERNATING: &[(u16, u16)] = &[
    (0x03E2, 0x03EE),
    (0x0460, 0x0474),
    (0x0478, 0x0480),
    (0x0490, 0x04BE),
];

/// Units skipped entirely by the case-folding comparison
const IGNORABLE_RUNS: &[(u16, u16)] = &[(0x200C, 0x200F), (0x202A, 0x202E), (0x206A, 0x206F), (0xFEFF, 0xFEFF)];

const fn build_fold_table() -> [u16; 0x10000] {
    let mut table = [0u16; 0x10000];
    let mut unit = 0;
    while unit < table.len() {
        table[unit] = unit as u16;
        unit += 1;
    }
    // NUL sorts after everything else
    table[0] = 0xFFFF;

    let mut i = 0;
    while i < FOLD_RUNS.len() {
        let (first, last, delta) = FOLD_RUNS[i];
        let mut u = first as usize;
        while u <= last as usize {
            table[u] = u as u16 + delta;
            u += 1;
        }
        i += 1;
    }
    i = 0;
    while i < FOLD_ALTERNATING.len() {
        let (first, last) = FOLD_ALTERNATING[i];
        let mut u = first as usize;
        while u <= last as usize {
            table[u] = u as u16 + 1;
            u += 2;
        }
        i += 1;
    }
    i = 0;
    while i < FOLD_PAIRS.len() {
        let (upper, lower) = FOLD_PAIRS[i];
        table[upper as usize] = lower;
        i += 1;
    }
    i = 0;
    while i < IGNORABLE_RUNS.len() {
        let (first, last) = IGNORABLE_RUNS[i];
        let mut u = first as usize;
        while u <= last as usize {
            table[u] = 0;
            u += 1;
        }
        i += 1;
    }
    table
}

/// HFS+ lower-case table, fixed by the on-disk format
static FOLD_TABLE: [u16; 0x10000] = build_fold_table();

/// Case-fold a single UTF-16 unit for name comparison
///
/// Returns 0 for units that the comparison ignores.
pub fn case_fold(unit: u16) -> u16 {
    FOLD_TABLE[usize::from(unit)]
}

/// Case-insensitive HFS+ name ordering ("fast Unicode compare")
pub fn compare_case_folding(a: &[u16], b: &[u16]) -> Ordering {
    let mut left = a.iter().map(|&u| case_fold(u)).filter(|&u| u != 0);
    let mut right = b.iter().map(|&u| case_fold(u)).filter(|&u| u != 0);
    loop {
        match (left.next(), right.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l != r => return l.cmp(&r),
            _ => {}
        }
    }
}

/// Binary HFSX name ordering: unsigned comparison of UTF-16 units
pub fn compare_binary(a: &[u16], b: &[u16]) -> Ordering {
    a.cmp(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn test_round_trip_arbitrary_text() {
        for text in ["", "Read Me", "Résumé", "日本語のファイル", "emoji \u{1F600} ok", "a\u{0000}b"] {
            let bytes = Utf16Be.encode(text).unwrap();
            assert_eq!(Utf16Be.decode(&bytes).unwrap(), text);
        }
    }

    #[test]
    fn test_decode_rejects_bad_input() {
        assert!(Utf16Be.decode(&[0x00]).is_err());
        assert!(Utf16Be.decode(&[0xD8, 0x00, 0x00, 0x41]).is_err());
    }

    #[test]
    fn test_case_folding_equality() {
        assert_eq!(compare_case_folding(&units("ReadMe.TXT"), &units("readme.txt")), Ordering::Equal);
        assert_eq!(compare_case_folding(&units("\u{0391}\u{03A9}"), &units("\u{03B1}\u{03C9}")), Ordering::Equal);
        assert_ne!(compare_binary(&units("ReadMe"), &units("readme")), Ordering::Equal);
    }

    #[test]
    fn test_case_folding_ignorables_and_nul() {
        assert_eq!(compare_case_folding(&units("ab\u{200D}c"), &units("abc")), Ordering::Equal);
        assert_eq!(compare_case_folding(&units("a\u{0000}"), &units("az")), Ordering::Greater);
        assert_eq!(case_fold(0), 0xFFFF);
        assert_eq!(case_fold(0xFEFF), 0);
    }

    #[test]
    fn test_case_folding_order() {
        assert_eq!(compare_case_folding(&units("abc"), &units("ABD")), Ordering::Less);
        assert_eq!(compare_case_folding(&units("ab"), &units("ABC")), Ordering::Less);
        assert_eq!(compare_case_folding(&[], &units("a")), Ordering::Less);
        // Precomposed letters are left alone
        assert_eq!(case_fold(0x00C9), 0x00C9);
        assert_eq!(case_fold(u16::from(b'E')), u16::from(b'e'));
    }

    #[test]
    fn test_fold_table_is_the_fixed_hfs_plus_table() {
        // Georgian capitals fold to the Mkhedruli letters
        assert_eq!(case_fold(0x10A0), 0x10D0);
        assert_eq!(case_fold(0x10C5), 0x10F5);
        // Later Unicode case pairs are not part of the table
        assert_eq!(case_fold(0x13A0), 0x13A0);
        assert_eq!(case_fold(0x1E9E), 0x1E9E);
        assert_eq!(case_fold(0x2C00), 0x2C00);
        assert_eq!(case_fold(0x04D8), 0x04D8);
        // Letters without a decomposition fold, decomposable ones stay
        assert_eq!(case_fold(0x0110), 0x0111);
        assert_eq!(case_fold(0x01C5), 0x01C6);
        assert_eq!(case_fold(0x0419), 0x0419);
        assert_eq!(case_fold(0x0416), 0x0436);
        assert_eq!(case_fold(0x0490), 0x0491);
        assert_eq!(case_fold(0x2165), 0x2175);
        assert_eq!(case_fold(0xFF21), 0xFF41);
        assert_eq!(case_fold(0x0131), 0x0131);
    }

    #[test]
    fn test_georgian_names_compare_equal() {
        let upper = [0x10A0u16, 0x10A1];
        let lower = [0x10D0u16, 0x10D1];
        assert_eq!(compare_case_folding(&upper, &lower), Ordering::Equal);
    }
}

//! HFS+ and HFSX capability set

use super::{FormatKind, VolumeFormat};
use crate::error::{HfsError, Result};
use crate::strings::{StringCodec, Utf16Be};
use crate::types::btree::{HeaderRecord, KEY_COMPARE_BINARY, KEY_COMPARE_CASE_FOLDING};
use crate::types::catalog::{CatalogBody, CatalogKey, CatalogName, NameOrdering};
use crate::types::extents::ExtentKey;
use crate::types::hfsplus::{self, HfsPlusVolumeHeader, MAX_NAME_LEN};
use crate::types::volume::VolumeHeader;
use crate::types::{Cnid, ExtentDescriptor, ForkType, ReservedCnid};
use std::sync::Arc;
use unicode_normalization::UnicodeNormalization;

/// HFS+ (always case-folding) or HFSX (ordering chosen per volume)
pub struct HfsPlusFormat {
    kind: FormatKind,
}

impl HfsPlusFormat {
    pub fn hfs_plus() -> Self {
        Self {
            kind: FormatKind::HfsPlus,
        }
    }

    pub fn hfsx() -> Self {
        Self { kind: FormatKind::Hfsx }
    }

    fn expected_version(&self) -> u16 {
        if self.kind == FormatKind::Hfsx {
            5
        } else {
            4
        }
    }
}

impl VolumeFormat for HfsPlusFormat {
    fn kind(&self) -> FormatKind {
        self.kind
    }

    fn parse_volume_header(&self, data: &[u8]) -> Result<VolumeHeader> {
        let header = HfsPlusVolumeHeader::parse(data, self.kind.signature())?;
        if header.version != self.expected_version() {
            log::warn!(
                "{} volume header has version {}, expected {}",
                self.kind,
                header.version,
                self.expected_version()
            );
        }
        log::debug!(
            "{} header: {} blocks of {} bytes, {} free, journal block {}",
            self.kind,
            header.total_blocks,
            header.block_size,
            header.free_blocks,
            header.journal_info_block
        );
        Ok(header.to_volume_header())
    }

    fn parse_catalog_key(&self, data: &[u8]) -> Result<(CatalogKey, usize)> {
        hfsplus::parse_catalog_key(data)
    }

    fn parse_catalog_body(&self, data: &[u8], _block_size: u32) -> Result<CatalogBody> {
        hfsplus::parse_catalog_body(data)
    }

    fn parse_extent_key(&self, data: &[u8]) -> Result<(ExtentKey, usize)> {
        hfsplus::parse_extent_key(data)
    }

    fn parse_extent_record(&self, data: &[u8]) -> Result<Vec<ExtentDescriptor>> {
        hfsplus::parse_extent_record(data)
    }

    fn extent_key(&self, fork_type: ForkType, file_id: Cnid, start_block: u64) -> Result<ExtentKey> {
        let start = u32::try_from(start_block).map_err(|_| {
            HfsError::corrupt(format!("fork of CNID {} reaches block {}", file_id, start_block))
        })?;
        Ok(ExtentKey::new(fork_type, file_id, start))
    }

    /// Names are stored in canonical decomposition
    fn encode_name(&self, name: &str) -> Result<CatalogName> {
        let units: Vec<u16> = name.nfd().collect::<String>().encode_utf16().collect();
        if units.len() > MAX_NAME_LEN {
            return Err(HfsError::usage(format!(
                "HFS+ names are at most {} UTF-16 units, \"{}\" has {}",
                MAX_NAME_LEN,
                name,
                units.len()
            )));
        }
        Ok(CatalogName::Unicode(units))
    }

    fn decode_name(&self, name: &CatalogName) -> Result<String> {
        match name {
            CatalogName::Unicode(units) => Ok(Utf16Be::decode_units(units)?),
            CatalogName::Bytes(_) => Err(HfsError::corrupt("byte-encoded name in an HFS+ catalog")),
        }
    }

    fn empty_name(&self) -> CatalogName {
        CatalogName::Unicode(Vec::new())
    }

    fn reserved_cnid(&self, id: ReservedCnid) -> Option<Cnid> {
        Some(match id {
            ReservedCnid::RootParent => 1,
            ReservedCnid::RootFolder => 2,
            ReservedCnid::ExtentsFile => 3,
            ReservedCnid::CatalogFile => 4,
            ReservedCnid::BadBlocksFile => 5,
            ReservedCnid::AllocationFile => 6,
            ReservedCnid::StartupFile => 7,
            ReservedCnid::AttributesFile => 8,
            ReservedCnid::RepairCatalogFile => 14,
            ReservedCnid::BogusExtentFile => 15,
            ReservedCnid::FirstUser => 16,
        })
    }

    fn name_ordering(&self, header: &HeaderRecord) -> Result<NameOrdering> {
        if self.kind == FormatKind::HfsPlus {
            return Ok(NameOrdering::CaseFolding);
        }
        match header.key_compare_type {
            KEY_COMPARE_CASE_FOLDING => Ok(NameOrdering::CaseFolding),
            KEY_COMPARE_BINARY => Ok(NameOrdering::Binary),
            other => Err(HfsError::corrupt(format!(
                "HFSX catalog has unknown key compare type 0x{:02X}",
                other
            ))),
        }
    }

    fn string_codec(&self) -> Arc<dyn StringCodec> {
        Arc::new(Utf16Be)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_with_compare(compare: u8) -> HeaderRecord {
        let mut header = HeaderRecord::parse(&[0u8; 106]).unwrap();
        header.key_compare_type = compare;
        header
    }

    #[test]
    fn test_hfsx_ordering_selection() {
        let hfsx = HfsPlusFormat::hfsx();
        assert_eq!(hfsx.name_ordering(&header_with_compare(0xBC)).unwrap(), NameOrdering::Binary);
        assert_eq!(hfsx.name_ordering(&header_with_compare(0xCF)).unwrap(), NameOrdering::CaseFolding);
        assert!(hfsx.name_ordering(&header_with_compare(0x00)).unwrap_err().is_format_error());
    }

    #[test]
    fn test_hfs_plus_always_case_folds() {
        let format = HfsPlusFormat::hfs_plus();
        assert_eq!(format.name_ordering(&header_with_compare(0xBC)).unwrap(), NameOrdering::CaseFolding);
    }

    #[test]
    fn test_encode_name_decomposes() {
        let format = HfsPlusFormat::hfs_plus();
        let name = format.encode_name("\u{00E9}t\u{00E9}").unwrap();
        assert_eq!(name, CatalogName::Unicode(vec![0x65, 0x301, 0x74, 0x65, 0x301]));
        assert_eq!(format.decode_name(&name).unwrap(), "e\u{0301}te\u{0301}");
    }

    #[test]
    fn test_reserved_cnids() {
        let format = HfsPlusFormat::hfsx();
        assert_eq!(format.reserved_cnid(ReservedCnid::AllocationFile), Some(6));
        assert_eq!(format.reserved_cnid(ReservedCnid::FirstUser), Some(16));
    }
}

//! HFS capability set

use super::{FormatKind, VolumeFormat};
use crate::error::{HfsError, Result};
use crate::strings::StringCodec;
use crate::types::btree::HeaderRecord;
use crate::types::catalog::{CatalogBody, CatalogKey, CatalogName, NameOrdering};
use crate::types::extents::ExtentKey;
use crate::types::hfs::{self, MasterDirectoryBlock, MAX_NAME_LEN};
use crate::types::volume::VolumeHeader;
use crate::types::{Cnid, ExtentDescriptor, ForkType, ReservedCnid};
use std::sync::Arc;

/// HFS: 16-bit block numbers, byte names in a legacy script
pub struct HfsFormat {
    codec: Arc<dyn StringCodec>,
}

impl HfsFormat {
    pub fn new(codec: Arc<dyn StringCodec>) -> Self {
        Self { codec }
    }
}

impl VolumeFormat for HfsFormat {
    fn kind(&self) -> FormatKind {
        FormatKind::Hfs
    }

    fn parse_volume_header(&self, data: &[u8]) -> Result<VolumeHeader> {
        let mdb = MasterDirectoryBlock::parse(data)?;
        log::debug!(
            "HFS MDB: {} blocks of {} bytes, allocation area at sector {}, bitmap at sector {}",
            mdb.alloc_blocks,
            mdb.alloc_block_size,
            mdb.first_alloc_block,
            mdb.bitmap_start
        );
        Ok(mdb.to_volume_header())
    }

    fn parse_catalog_key(&self, data: &[u8]) -> Result<(CatalogKey, usize)> {
        hfs::parse_catalog_key(data)
    }

    fn parse_catalog_body(&self, data: &[u8], block_size: u32) -> Result<CatalogBody> {
        hfs::parse_catalog_body(data, block_size)
    }

    fn parse_extent_key(&self, data: &[u8]) -> Result<(ExtentKey, usize)> {
        hfs::parse_extent_key(data)
    }

    fn parse_extent_record(&self, data: &[u8]) -> Result<Vec<ExtentDescriptor>> {
        hfs::parse_extent_record(data)
    }

    fn extent_key(&self, fork_type: ForkType, file_id: Cnid, start_block: u64) -> Result<ExtentKey> {
        let start = u16::try_from(start_block).map_err(|_| {
            HfsError::corrupt(format!(
                "fork of CNID {} reaches block {}, beyond HFS's 16-bit block numbers",
                file_id, start_block
            ))
        })?;
        Ok(ExtentKey::new(fork_type, file_id, u32::from(start)))
    }

    fn encode_name(&self, name: &str) -> Result<CatalogName> {
        let bytes = self.codec.encode(name)?;
        if bytes.len() > MAX_NAME_LEN {
            return Err(HfsError::usage(format!(
                "HFS names are at most {} bytes, \"{}\" encodes to {}",
                MAX_NAME_LEN,
                name,
                bytes.len()
            )));
        }
        Ok(CatalogName::Bytes(bytes))
    }

    fn decode_name(&self, name: &CatalogName) -> Result<String> {
        match name {
            CatalogName::Bytes(bytes) => Ok(self.codec.decode(bytes)?),
            CatalogName::Unicode(_) => Err(HfsError::corrupt("UTF-16 name in an HFS catalog")),
        }
    }

    fn empty_name(&self) -> CatalogName {
        CatalogName::Bytes(Vec::new())
    }

    fn reserved_cnid(&self, id: ReservedCnid) -> Option<Cnid> {
        match id {
            ReservedCnid::RootParent => Some(1),
            ReservedCnid::RootFolder => Some(2),
            ReservedCnid::ExtentsFile => Some(3),
            ReservedCnid::CatalogFile => Some(4),
            ReservedCnid::BadBlocksFile => Some(5),
            ReservedCnid::FirstUser => Some(16),
            _ => None,
        }
    }

    fn name_ordering(&self, _header: &HeaderRecord) -> Result<NameOrdering> {
        Ok(NameOrdering::Binary)
    }

    fn string_codec(&self) -> Arc<dyn StringCodec> {
        Arc::clone(&self.codec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strings::{MacJapanese, MacRoman};

    #[test]
    fn test_name_round_trip_uses_codec() {
        let format = HfsFormat::new(Arc::new(MacRoman));
        let name = format.encode_name("Caf\u{00E9}").unwrap();
        assert_eq!(name, CatalogName::Bytes(vec![b'C', b'a', b'f', 0x8E]));
        assert_eq!(format.decode_name(&name).unwrap(), "Caf\u{00E9}");

        let japanese = HfsFormat::new(Arc::new(MacJapanese::new()));
        let name = japanese.encode_name("\u{3042}").unwrap();
        assert_eq!(name, CatalogName::Bytes(vec![0x82, 0xA0]));
    }

    #[test]
    fn test_name_length_limit() {
        let format = HfsFormat::new(Arc::new(MacRoman));
        assert!(format.encode_name(&"x".repeat(31)).is_ok());
        assert!(matches!(format.encode_name(&"x".repeat(32)), Err(HfsError::Usage(_))));
    }

    #[test]
    fn test_extent_key_range() {
        let format = HfsFormat::new(Arc::new(MacRoman));
        assert_eq!(format.extent_key(ForkType::Data, 20, 3).unwrap().start_block, 3);
        assert!(format.extent_key(ForkType::Data, 20, 70_000).unwrap_err().is_format_error());
    }

    #[test]
    fn test_reserved_cnids() {
        let format = HfsFormat::new(Arc::new(MacRoman));
        assert_eq!(format.reserved_cnid(ReservedCnid::CatalogFile), Some(4));
        assert_eq!(format.reserved_cnid(ReservedCnid::AllocationFile), None);
    }
}

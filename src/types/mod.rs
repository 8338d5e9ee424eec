//! Fixed-layout on-disk structures
//!
//! All multi-byte integers are big-endian. Decoders take a byte slice that
//! starts at the structure and check its length before touching it.

pub mod btree;
pub mod catalog;
pub mod extents;
pub mod hfs;
pub mod hfsplus;
pub mod volume;

use crate::error::{HfsError, Result};
use byteorder::{BigEndian, ByteOrder};

/// Catalog node ID
pub type Cnid = u32;

/// Seconds between 1904-01-01 (Mac epoch) and 1970-01-01
pub const MAC_EPOCH_OFFSET: i64 = 2_082_844_800;

/// Convert a Mac timestamp (seconds since 1904) to Unix seconds
pub fn mac_time_to_unix(seconds: u32) -> i64 {
    i64::from(seconds) - MAC_EPOCH_OFFSET
}

/// Catalog node IDs with a fixed meaning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReservedCnid {
    RootParent,
    RootFolder,
    ExtentsFile,
    CatalogFile,
    BadBlocksFile,
    AllocationFile,
    StartupFile,
    AttributesFile,
    RepairCatalogFile,
    BogusExtentFile,
    FirstUser,
}

/// Which of a file's two byte streams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ForkType {
    Data,
    Resource,
}

impl ForkType {
    /// On-disk fork type byte used in extent keys
    pub fn as_u8(self) -> u8 {
        match self {
            ForkType::Data => 0x00,
            ForkType::Resource => 0xFF,
        }
    }

    pub fn from_u8(value: u8) -> Result<Self> {
        match value {
            0x00 => Ok(ForkType::Data),
            0xFF => Ok(ForkType::Resource),
            other => Err(HfsError::corrupt(format!("invalid fork type 0x{:02X}", other))),
        }
    }
}

impl std::fmt::Display for ForkType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ForkType::Data => write!(f, "data"),
            ForkType::Resource => write!(f, "resource"),
        }
    }
}

/// A contiguous run of allocation blocks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtentDescriptor {
    pub start_block: u32,
    pub block_count: u32,
}

impl ExtentDescriptor {
    pub fn new(start_block: u32, block_count: u32) -> Self {
        Self {
            start_block,
            block_count,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.block_count == 0
    }

    /// One past the last block, widened so corrupt values can't overflow
    pub fn end_block(&self) -> u64 {
        u64::from(self.start_block) + u64::from(self.block_count)
    }

    /// HFS+ descriptor: u32 start, u32 count
    pub fn parse_hfsplus(data: &[u8]) -> Self {
        Self::new(BigEndian::read_u32(&data[0..4]), BigEndian::read_u32(&data[4..8]))
    }

    /// HFS descriptor: u16 start, u16 count
    pub fn parse_hfs(data: &[u8]) -> Self {
        Self::new(
            u32::from(BigEndian::read_u16(&data[0..2])),
            u32::from(BigEndian::read_u16(&data[2..4])),
        )
    }
}

/// Size and inline extents of one fork
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForkData {
    /// Length of the fork's content in bytes
    pub logical_size: u64,
    pub clump_size: u32,
    /// Allocated blocks, including any held in the overflow tree
    pub total_blocks: u32,
    /// Inline extents (3 for HFS, 8 for HFS+)
    pub extents: Vec<ExtentDescriptor>,
}

/// Size of an HFS+ fork data record
pub const HFSPLUS_FORK_DATA_SIZE: usize = 80;

impl ForkData {
    /// Parse an 80-byte HFS+ fork data record
    pub fn parse_hfsplus(data: &[u8]) -> Result<Self> {
        require_len(data, HFSPLUS_FORK_DATA_SIZE, "HFS+ fork data")?;
        Ok(Self {
            logical_size: BigEndian::read_u64(&data[0..8]),
            clump_size: BigEndian::read_u32(&data[8..12]),
            total_blocks: BigEndian::read_u32(&data[12..16]),
            extents: (0..8)
                .map(|i| ExtentDescriptor::parse_hfsplus(&data[16 + i * 8..24 + i * 8]))
                .collect(),
        })
    }

    /// Build from HFS catalog/MDB fields: sizes plus a 12-byte extent record
    pub fn from_hfs(logical_size: u32, physical_size: u32, block_size: u32, extent_record: &[u8]) -> Result<Self> {
        require_len(extent_record, 12, "HFS extent record")?;
        Ok(Self {
            logical_size: u64::from(logical_size),
            clump_size: 0,
            total_blocks: if block_size == 0 { 0 } else { physical_size / block_size },
            extents: (0..3)
                .map(|i| ExtentDescriptor::parse_hfs(&extent_record[i * 4..i * 4 + 4]))
                .collect(),
        })
    }

    /// Inline extents up to the first empty descriptor
    pub fn used_extents(&self) -> impl Iterator<Item = &ExtentDescriptor> {
        self.extents.iter().take_while(|e| !e.is_empty())
    }
}

/// Fail with a corruption error unless `data` holds at least `len` bytes
pub(crate) fn require_len(data: &[u8], len: usize, what: &str) -> Result<()> {
    if data.len() < len {
        return Err(HfsError::corrupt(format!(
            "{} truncated: need {} bytes, have {}",
            what,
            len,
            data.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hfsplus_fork_data() {
        let mut raw = vec![0u8; 80];
        raw[0..8].copy_from_slice(&12_345u64.to_be_bytes());
        raw[12..16].copy_from_slice(&4u32.to_be_bytes());
        raw[16..20].copy_from_slice(&100u32.to_be_bytes());
        raw[20..24].copy_from_slice(&3u32.to_be_bytes());
        raw[24..28].copy_from_slice(&200u32.to_be_bytes());
        raw[28..32].copy_from_slice(&1u32.to_be_bytes());

        let fork = ForkData::parse_hfsplus(&raw).unwrap();
        assert_eq!(fork.logical_size, 12_345);
        assert_eq!(fork.total_blocks, 4);
        assert_eq!(fork.extents.len(), 8);
        assert_eq!(fork.used_extents().count(), 2);
        assert_eq!(fork.extents[1], ExtentDescriptor::new(200, 1));
        assert!(ForkData::parse_hfsplus(&raw[..79]).is_err());
    }

    #[test]
    fn test_fork_type_bytes() {
        assert_eq!(ForkType::from_u8(0xFF).unwrap(), ForkType::Resource);
        assert_eq!(ForkType::Data.as_u8(), 0);
        assert!(ForkType::from_u8(1).is_err());
    }

    #[test]
    fn test_mac_time() {
        assert_eq!(mac_time_to_unix(2_082_844_800), 0);
    }
}

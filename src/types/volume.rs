//! Format-neutral view of the volume header

use super::ForkData;

/// Volume attribute bit: the volume has a journal
pub const VOLUME_ATTR_JOURNALED: u32 = 1 << 13;
/// Volume attribute bit: the volume was cleanly unmounted
pub const VOLUME_ATTR_UNMOUNTED: u32 = 1 << 8;
/// Volume attribute bit: software write lock
pub const VOLUME_ATTR_SOFTWARE_LOCK: u32 = 1 << 15;

/// Where the allocation bitmap lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitmapLocation {
    /// HFS: contiguous bitmap at a byte offset from the volume start
    Inline { offset: u64 },
    /// HFS+/HFSX: data fork of the allocation file
    Fork(ForkData),
}

/// HFS+ volume embedded inside an HFS wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbeddedVolume {
    pub signature: u16,
    /// First wrapper allocation block of the embedded volume
    pub start_block: u32,
    pub block_count: u32,
}

/// Volume dates in Mac seconds since 1904
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VolumeDates {
    pub created: u32,
    pub modified: u32,
    pub backed_up: u32,
    /// HFS+ only
    pub checked: u32,
}

/// Volume header fields shared by HFS, HFS+ and HFSX
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeHeader {
    pub signature: u16,
    /// 4 for HFS+, 5 for HFSX, 0 for HFS
    pub version: u16,
    pub attributes: u32,
    pub dates: VolumeDates,
    /// Allocation block size in bytes
    pub block_size: u32,
    pub total_blocks: u32,
    pub free_blocks: u32,
    pub file_count: u32,
    pub folder_count: u32,
    pub next_catalog_id: u32,
    pub write_count: u32,
    /// HFS+ journal info block, 0 when there is none
    pub journal_info_block: u32,
    /// Byte offset of allocation block 0 from the volume start
    pub allocation_start: u64,
    pub bitmap: BitmapLocation,
    pub extents_file: ForkData,
    pub catalog_file: ForkData,
    pub attributes_file: Option<ForkData>,
    pub startup_file: Option<ForkData>,
    /// HFS volume name in the volume's script; HFS+ keeps it in the catalog
    pub raw_volume_name: Option<Vec<u8>>,
    /// HFS wrapper around an HFS+ volume
    pub embedded: Option<EmbeddedVolume>,
}

impl VolumeHeader {
    pub fn is_journaled(&self) -> bool {
        self.attributes & VOLUME_ATTR_JOURNALED != 0 && self.journal_info_block != 0
    }

    pub fn was_cleanly_unmounted(&self) -> bool {
        self.attributes & VOLUME_ATTR_UNMOUNTED != 0
    }

    /// Byte offset of an allocation block from the volume start
    pub fn block_offset(&self, block: u64) -> u64 {
        self.allocation_start + block * u64::from(self.block_size)
    }
}

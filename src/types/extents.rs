//! Extents-overflow tree keys

use super::{Cnid, ForkType};
use std::cmp::Ordering;

/// Key of an extents-overflow record
///
/// `start_block` is the fork-relative index of the first block the record's
/// extents cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtentKey {
    pub fork_type: ForkType,
    pub file_id: Cnid,
    pub start_block: u32,
}

impl ExtentKey {
    pub fn new(fork_type: ForkType, file_id: Cnid, start_block: u32) -> Self {
        Self {
            fork_type,
            file_id,
            start_block,
        }
    }
}

impl Ord for ExtentKey {
    /// File ID, then fork type byte, then start block: the order records are
    /// stored in on disk
    fn cmp(&self, other: &Self) -> Ordering {
        self.file_id
            .cmp(&other.file_id)
            .then_with(|| self.fork_type.as_u8().cmp(&other.fork_type.as_u8()))
            .then_with(|| self.start_block.cmp(&other.start_block))
    }
}

impl PartialOrd for ExtentKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_ordering() {
        let data_16 = ExtentKey::new(ForkType::Data, 16, 8);
        let rsrc_16 = ExtentKey::new(ForkType::Resource, 16, 0);
        let data_17 = ExtentKey::new(ForkType::Data, 17, 0);
        assert!(data_16 < rsrc_16);
        assert!(rsrc_16 < data_17);
        assert!(ExtentKey::new(ForkType::Data, 16, 3) < data_16);
    }
}

//! Allocation bitmap
//!
//! One bit per allocation block, most significant bit first: block 0 is bit
//! 7 of byte 0. HFS keeps the bitmap in a fixed run of sectors; HFS+/HFSX
//! store it as the data fork of the allocation file (CNID 6).

use crate::error::{HfsError, Result};
use crate::extents::{ExtentsOverflowFile, ForkMap, VolumeIo};
use crate::types::volume::{BitmapLocation, VolumeHeader};
use crate::types::{ExtentDescriptor, ForkType};

/// Bytes read per pass when counting
const SCAN_CHUNK: usize = 4096;

/// CNID of the HFS+ allocation file
const ALLOCATION_FILE_ID: u32 = 6;

#[derive(Debug)]
enum Bitmap {
    Inline { offset: u64 },
    Fork(ForkMap),
}

#[derive(Debug)]
pub struct AllocationFile {
    bitmap: Bitmap,
    total_blocks: u32,
}

impl AllocationFile {
    pub fn open(header: &VolumeHeader, io: &mut VolumeIo, overflow: &ExtentsOverflowFile) -> Result<Self> {
        let bitmap_bytes = u64::from(header.total_blocks).div_ceil(8);
        let bitmap = match &header.bitmap {
            BitmapLocation::Inline { offset } => Bitmap::Inline { offset: *offset },
            BitmapLocation::Fork(fork) => {
                let geometry = *io.geometry();
                let mut map = ForkMap::from_fork_data(ALLOCATION_FILE_ID, ForkType::Data, fork, &geometry)?;
                overflow.complete(io, &mut map)?;
                if map.logical_size() < bitmap_bytes {
                    return Err(HfsError::corrupt(format!(
                        "allocation file holds {} bytes, {} blocks need {}",
                        map.logical_size(),
                        header.total_blocks,
                        bitmap_bytes
                    )));
                }
                Bitmap::Fork(map)
            }
        };
        Ok(Self {
            bitmap,
            total_blocks: header.total_blocks,
        })
    }

    pub fn total_blocks(&self) -> u32 {
        self.total_blocks
    }

    fn read_bitmap(&self, io: &mut VolumeIo, byte_offset: u64, buf: &mut [u8]) -> Result<()> {
        match &self.bitmap {
            Bitmap::Inline { offset } => io.read_at(offset + byte_offset, buf),
            Bitmap::Fork(map) => io.read_fork(map, byte_offset, buf),
        }
    }

    fn check_block(&self, block: u64) -> Result<()> {
        if block >= u64::from(self.total_blocks) {
            return Err(HfsError::usage(format!(
                "block {} is outside the volume ({} blocks)",
                block, self.total_blocks
            )));
        }
        Ok(())
    }

    pub fn is_allocated(&self, io: &mut VolumeIo, block: u32) -> Result<bool> {
        self.check_block(u64::from(block))?;
        let mut byte = [0u8; 1];
        self.read_bitmap(io, u64::from(block / 8), &mut byte)?;
        Ok(byte[0] & (0x80 >> (block % 8)) != 0)
    }

    /// True when every block of `extent` is marked in use
    pub fn is_extent_allocated(&self, io: &mut VolumeIo, extent: &ExtentDescriptor) -> Result<bool> {
        if extent.is_empty() {
            return Ok(true);
        }
        self.check_block(extent.end_block() - 1)?;
        Ok(self.count_set(io, u64::from(extent.start_block), extent.end_block())? == u64::from(extent.block_count))
    }

    /// Set bits among blocks `start..end`
    fn count_set(&self, io: &mut VolumeIo, start: u64, end: u64) -> Result<u64> {
        let mut count = 0;
        let mut chunk = vec![0u8; SCAN_CHUNK];
        let mut block = start;
        while block < end {
            let first_byte = block / 8;
            let last_byte = (end - 1) / 8;
            let len = ((last_byte - first_byte + 1) as usize).min(SCAN_CHUNK);
            let buf = &mut chunk[..len];
            self.read_bitmap(io, first_byte, buf)?;

            for (i, byte) in buf.iter().enumerate() {
                let byte_block = (first_byte + i as u64) * 8;
                if byte_block >= end {
                    break;
                }
                let mut bits = *byte;
                // Mask out blocks before `block` and from `end` on
                if byte_block < block {
                    bits &= 0xFFu8 >> (block - byte_block);
                }
                if byte_block + 8 > end {
                    bits &= 0xFFu8 << (byte_block + 8 - end);
                }
                count += u64::from(bits.count_ones());
            }
            block = (first_byte + len as u64) * 8;
        }
        Ok(count)
    }

    pub fn count_allocated(&self, io: &mut VolumeIo) -> Result<u64> {
        self.count_set(io, 0, u64::from(self.total_blocks))
    }

    pub fn count_free(&self, io: &mut VolumeIo) -> Result<u64> {
        Ok(u64::from(self.total_blocks) - self.count_allocated(io)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{HfsPlusFormat, VolumeFormat};
    use crate::testing::ImageBuilder;
    use std::sync::Arc;

    fn open(image: &ImageBuilder) -> (VolumeIo, AllocationFile, VolumeHeader) {
        let mut io = image.volume_io();
        let header = image.volume_header();
        let format: Arc<dyn VolumeFormat> = Arc::new(HfsPlusFormat::hfs_plus());
        let overflow = ExtentsOverflowFile::open(&header.extents_file, format, &mut io, None).unwrap();
        let allocation = AllocationFile::open(&header, &mut io, &overflow).unwrap();
        (io, allocation, header)
    }

    #[test]
    fn test_file_blocks_are_allocated() {
        let mut image = ImageBuilder::hfs_plus(512, 512);
        image.add_file(2, "a", 3 * 512, &[(300, 3)], 3);
        let (mut io, allocation, _) = open(&image);
        assert!(allocation.is_allocated(&mut io, 0).unwrap());
        assert!(allocation.is_allocated(&mut io, 300).unwrap());
        assert!(allocation.is_allocated(&mut io, 302).unwrap());
        assert!(!allocation.is_allocated(&mut io, 303).unwrap());
        assert!(!allocation.is_allocated(&mut io, 299).unwrap());
        assert!(allocation.is_extent_allocated(&mut io, &ExtentDescriptor::new(300, 3)).unwrap());
        assert!(!allocation.is_extent_allocated(&mut io, &ExtentDescriptor::new(299, 3)).unwrap());
    }

    #[test]
    fn test_free_count_matches_header() {
        let mut image = ImageBuilder::hfs_plus(512, 512);
        image.add_file_with_data(2, "a", &[7u8; 5000]);
        let (mut io, allocation, header) = open(&image);
        assert_eq!(allocation.count_free(&mut io).unwrap(), u64::from(header.free_blocks));
        assert_eq!(
            allocation.count_allocated(&mut io).unwrap() + u64::from(header.free_blocks),
            u64::from(header.total_blocks)
        );
    }

    #[test]
    fn test_block_past_end_is_usage_error() {
        let image = ImageBuilder::hfs_plus(512, 512);
        let (mut io, allocation, header) = open(&image);
        assert!(matches!(
            allocation.is_allocated(&mut io, header.total_blocks),
            Err(HfsError::Usage(_))
        ));
        assert!(allocation.is_allocated(&mut io, header.total_blocks - 1).unwrap());
    }
}

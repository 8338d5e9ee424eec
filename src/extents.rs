//! Fork extent resolution
//!
//! A fork's first extents live in its catalog record (or the volume header
//! for special files); the rest are in the extents-overflow B-tree, keyed by
//! the fork-relative block each record starts at. [`ForkMap`] accumulates the
//! runs found so far and only asks the overflow tree for more when a read
//! goes past them.

use crate::btree::{BTreeFile, TreeSchema};
use crate::error::{HfsError, Result};
use crate::format::VolumeFormat;
use crate::io::ByteSource;
use crate::types::extents::ExtentKey;
use crate::types::{Cnid, ExtentDescriptor, ForkData, ForkType};
use std::cmp::Ordering;
use std::sync::Arc;

/// Allocation block geometry of an open volume
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub block_size: u32,
    /// Byte offset of allocation block 0 from the volume start
    pub allocation_start: u64,
    pub total_blocks: u32,
}

impl Geometry {
    pub fn block_offset(&self, block: u64) -> u64 {
        self.allocation_start + block * u64::from(self.block_size)
    }
}

/// A volume's byte source paired with its block geometry
pub struct VolumeIo {
    source: Box<dyn ByteSource>,
    geometry: Geometry,
}

impl VolumeIo {
    pub fn new(source: Box<dyn ByteSource>, geometry: Geometry) -> Self {
        Self { source, geometry }
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn source(&self) -> &dyn ByteSource {
        self.source.as_ref()
    }

    pub fn source_mut(&mut self) -> &mut dyn ByteSource {
        self.source.as_mut()
    }

    pub fn into_source(self) -> Box<dyn ByteSource> {
        self.source
    }

    /// Read at an absolute volume offset
    pub fn read_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<()> {
        self.source.read_exact_at(offset, buf)
    }

    /// Fill `buf` from consecutive physical ranges
    pub fn read_ranges(&mut self, ranges: &[PhysicalRange], buf: &mut [u8]) -> Result<()> {
        let mut filled = 0usize;
        for range in ranges {
            let end = filled + range.length as usize;
            if end > buf.len() {
                return Err(HfsError::usage(format!(
                    "ranges cover more than the {} byte buffer",
                    buf.len()
                )));
            }
            self.source.read_exact_at(range.offset, &mut buf[filled..end])?;
            filled = end;
        }
        Ok(())
    }

    /// Read from a fork whose runs are already mapped
    pub fn read_fork(&mut self, fork: &ForkMap, offset: u64, buf: &mut [u8]) -> Result<()> {
        let ranges = fork.physical_ranges(offset, buf.len() as u64, &self.geometry)?;
        self.read_ranges(&ranges, buf)
    }
}

impl std::fmt::Debug for VolumeIo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VolumeIo").field("geometry", &self.geometry).finish()
    }
}

/// Byte range on the volume
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalRange {
    /// Absolute byte offset from the volume start
    pub offset: u64,
    pub length: u64,
}

/// An extent placed at its position within the fork
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappedExtent {
    /// Fork-relative index of the extent's first block
    pub fork_block: u64,
    pub extent: ExtentDescriptor,
}

impl MappedExtent {
    fn end_fork_block(&self) -> u64 {
        self.fork_block + u64::from(self.extent.block_count)
    }
}

/// Resolved extents of one fork
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForkMap {
    file_id: Cnid,
    fork_type: ForkType,
    logical_size: u64,
    total_blocks: u32,
    runs: Vec<MappedExtent>,
    mapped_blocks: u64,
}

impl ForkMap {
    /// Start a map from a fork's inline extents
    pub fn from_fork_data(file_id: Cnid, fork_type: ForkType, fork: &ForkData, geometry: &Geometry) -> Result<Self> {
        let mut map = Self {
            file_id,
            fork_type,
            logical_size: fork.logical_size,
            total_blocks: fork.total_blocks,
            runs: Vec::new(),
            mapped_blocks: 0,
        };
        map.append(&fork.extents, geometry)?;
        Ok(map)
    }

    pub fn file_id(&self) -> Cnid {
        self.file_id
    }

    pub fn fork_type(&self) -> ForkType {
        self.fork_type
    }

    pub fn logical_size(&self) -> u64 {
        self.logical_size
    }

    pub fn runs(&self) -> &[MappedExtent] {
        &self.runs
    }

    /// Number of fork blocks covered by the runs found so far
    pub fn mapped_blocks(&self) -> u64 {
        self.mapped_blocks
    }

    /// Blocks needed to hold the fork's logical size
    pub fn required_blocks(&self, block_size: u32) -> u64 {
        self.logical_size.div_ceil(u64::from(block_size))
    }

    /// True once every byte of the fork has a physical location
    pub fn is_complete(&self, block_size: u32) -> bool {
        self.mapped_blocks >= self.required_blocks(block_size)
    }

    /// Append extents up to the first empty one; returns how many were added
    fn append(&mut self, extents: &[ExtentDescriptor], geometry: &Geometry) -> Result<usize> {
        let mut added = 0;
        for extent in extents.iter().take_while(|e| !e.is_empty()) {
            if extent.end_block() > u64::from(geometry.total_blocks) {
                return Err(HfsError::corrupt(format!(
                    "CNID {} {} fork extent {}+{} ends past the volume's {} blocks",
                    self.file_id, self.fork_type, extent.start_block, extent.block_count, geometry.total_blocks
                )));
            }
            self.runs.push(MappedExtent {
                fork_block: self.mapped_blocks,
                extent: *extent,
            });
            self.mapped_blocks += u64::from(extent.block_count);
            added += 1;
        }
        Ok(added)
    }

    /// Run covering fork block `fork_block`, if mapped
    pub fn locate(&self, fork_block: u64) -> Option<&MappedExtent> {
        let index = self.runs.partition_point(|run| run.end_fork_block() <= fork_block);
        self.runs.get(index).filter(|run| run.fork_block <= fork_block)
    }

    fn check_bounds(&self, offset: u64, length: u64) -> Result<()> {
        let in_bounds = offset < self.logical_size && length <= self.logical_size - offset;
        if !in_bounds && !(length == 0 && offset <= self.logical_size) {
            return Err(HfsError::EndOfFork {
                offset: offset.saturating_add(length),
                length: self.logical_size,
            });
        }
        Ok(())
    }

    /// Translate a fork byte range using only the runs already mapped
    pub fn physical_ranges(&self, offset: u64, length: u64, geometry: &Geometry) -> Result<Vec<PhysicalRange>> {
        self.check_bounds(offset, length)?;

        let block_size = u64::from(geometry.block_size);
        let mut ranges: Vec<PhysicalRange> = Vec::new();
        let mut position = offset;
        let mut remaining = length;
        while remaining > 0 {
            let fork_block = position / block_size;
            let run = self.locate(fork_block).ok_or_else(|| {
                HfsError::corrupt(format!(
                    "CNID {} {} fork has no extent for block {}",
                    self.file_id, self.fork_type, fork_block
                ))
            })?;
            let within = position - run.fork_block * block_size;
            let available = u64::from(run.extent.block_count) * block_size - within;
            let take = available.min(remaining);
            let physical = geometry.block_offset(u64::from(run.extent.start_block)) + within;

            // Adjacent runs merge into one range
            match ranges.last_mut() {
                Some(last) if last.offset + last.length == physical => last.length += take,
                _ => ranges.push(PhysicalRange {
                    offset: physical,
                    length: take,
                }),
            }
            position += take;
            remaining -= take;
        }
        Ok(ranges)
    }
}

/// Key and record shapes of the extents-overflow tree
pub struct ExtentsSchema {
    format: Arc<dyn VolumeFormat>,
}

impl TreeSchema for ExtentsSchema {
    type Key = ExtentKey;
    type Record = (ExtentKey, Vec<ExtentDescriptor>);

    fn parse_key(&self, data: &[u8]) -> Result<(ExtentKey, usize)> {
        self.format.parse_extent_key(data)
    }

    fn parse_record(&self, key: ExtentKey, data: &[u8]) -> Result<Self::Record> {
        Ok((key, self.format.parse_extent_record(data)?))
    }

    fn compare(&self, a: &ExtentKey, b: &ExtentKey) -> Ordering {
        a.cmp(b)
    }
}

/// The extents-overflow file
///
/// Its own extents must all be inline in the volume header; it cannot
/// overflow into itself.
pub struct ExtentsOverflowFile {
    tree: BTreeFile,
    schema: ExtentsSchema,
}

impl ExtentsOverflowFile {
    pub fn open(
        fork: &ForkData,
        format: Arc<dyn VolumeFormat>,
        io: &mut VolumeIo,
        max_node_visits: Option<u64>,
    ) -> Result<Self> {
        let file_id = extents_file_id(format.as_ref());
        let geometry = *io.geometry();
        let map = ForkMap::from_fork_data(file_id, ForkType::Data, fork, &geometry)?;
        if !map.is_complete(geometry.block_size) {
            return Err(HfsError::corrupt(format!(
                "extents overflow file maps {} of its {} blocks inline",
                map.mapped_blocks(),
                map.required_blocks(geometry.block_size)
            )));
        }
        let tree = BTreeFile::open("extents", map, io, format.as_ref(), max_node_visits)?;
        Ok(Self {
            tree,
            schema: ExtentsSchema { format },
        })
    }

    pub fn tree(&self) -> &BTreeFile {
        &self.tree
    }

    /// Extent record for `fork_type` of `file_id` starting at fork block `start_block`
    pub fn find(
        &self,
        io: &mut VolumeIo,
        fork_type: ForkType,
        file_id: Cnid,
        start_block: u64,
    ) -> Result<Option<Vec<ExtentDescriptor>>> {
        let key = self.schema.format.extent_key(fork_type, file_id, start_block)?;
        Ok(self.tree.find(io, &self.schema, &key)?.map(|(_, extents)| extents))
    }

    /// Pull overflow records into `map` until it covers fork block `fork_block`
    ///
    /// Each record is looked up by the first block it should cover, so
    /// already-mapped runs are never scanned again.
    pub fn extend_to(&self, io: &mut VolumeIo, map: &mut ForkMap, fork_block: u64) -> Result<()> {
        let geometry = *io.geometry();
        while map.mapped_blocks() <= fork_block {
            let next = map.mapped_blocks();
            let extents = self.find(io, map.fork_type(), map.file_id(), next)?.ok_or_else(|| {
                HfsError::corrupt(format!(
                    "no overflow extents for CNID {} {} fork starting at block {}",
                    map.file_id(),
                    map.fork_type(),
                    next
                ))
            })?;
            if map.append(&extents, &geometry)? == 0 {
                return Err(HfsError::corrupt(format!(
                    "empty overflow extent record for CNID {} {} fork at block {}",
                    map.file_id(),
                    map.fork_type(),
                    next
                )));
            }
            log::trace!(
                "CNID {} {} fork: mapped {} blocks via overflow",
                map.file_id(),
                map.fork_type(),
                map.mapped_blocks()
            );
        }
        Ok(())
    }

    /// Map every block of the fork
    pub fn complete(&self, io: &mut VolumeIo, map: &mut ForkMap) -> Result<()> {
        let required = map.required_blocks(io.geometry().block_size);
        if required > 0 {
            self.extend_to(io, map, required - 1)?;
        }
        Ok(())
    }

    /// Every overflow record, in key order
    pub fn records(&self, io: &mut VolumeIo) -> Result<Vec<(ExtentKey, Vec<ExtentDescriptor>)>> {
        self.tree.leaves(io, &self.schema).collect()
    }
}

fn extents_file_id(format: &dyn VolumeFormat) -> Cnid {
    format
        .reserved_cnid(crate::types::ReservedCnid::ExtentsFile)
        .unwrap_or(3)
}

/// Physical ranges for `length` bytes at `offset` of the fork
///
/// Consults the overflow tree only when the range reaches past the runs
/// mapped so far.
pub fn resolve(
    io: &mut VolumeIo,
    overflow: &ExtentsOverflowFile,
    map: &mut ForkMap,
    offset: u64,
    length: u64,
) -> Result<Vec<PhysicalRange>> {
    map.check_bounds(offset, length)?;
    if length > 0 {
        let block_size = u64::from(io.geometry().block_size);
        let last_block = (offset + length - 1) / block_size;
        if last_block >= map.mapped_blocks() {
            overflow.extend_to(io, map, last_block)?;
        }
    }
    let geometry = *io.geometry();
    map.physical_ranges(offset, length, &geometry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::HfsPlusFormat;
    use crate::testing::ImageBuilder;

    fn geometry(total_blocks: u32) -> Geometry {
        Geometry {
            block_size: 512,
            allocation_start: 0,
            total_blocks,
        }
    }

    fn fork(logical_size: u64, extents: &[(u32, u32)]) -> ForkData {
        ForkData {
            logical_size,
            clump_size: 0,
            total_blocks: extents.iter().map(|e| e.1).sum(),
            extents: extents.iter().map(|&(s, c)| ExtentDescriptor::new(s, c)).collect(),
        }
    }

    #[test]
    fn test_locate_and_translate_inline_runs() {
        let geo = geometry(100);
        let map = ForkMap::from_fork_data(20, ForkType::Data, &fork(2048, &[(10, 2), (40, 2)]), &geo).unwrap();
        assert_eq!(map.mapped_blocks(), 4);
        assert_eq!(map.locate(3).unwrap().extent.start_block, 40);
        assert!(map.locate(4).is_none());

        let ranges = map.physical_ranges(1000, 100, &geo).unwrap();
        assert_eq!(
            ranges,
            vec![
                PhysicalRange { offset: 10 * 512 + 1000, length: 24 },
                PhysicalRange { offset: 40 * 512, length: 76 },
            ]
        );
    }

    #[test]
    fn test_adjacent_runs_merge() {
        let geo = geometry(100);
        let map = ForkMap::from_fork_data(20, ForkType::Data, &fork(2048, &[(10, 2), (12, 2)]), &geo).unwrap();
        let ranges = map.physical_ranges(0, 2048, &geo).unwrap();
        assert_eq!(ranges, vec![PhysicalRange { offset: 5120, length: 2048 }]);
    }

    #[test]
    fn test_end_of_fork() {
        let geo = geometry(100);
        let map = ForkMap::from_fork_data(20, ForkType::Data, &fork(1000, &[(10, 2)]), &geo).unwrap();
        assert!(matches!(
            map.physical_ranges(1000, 1, &geo),
            Err(HfsError::EndOfFork { length: 1000, .. })
        ));
        assert!(matches!(map.physical_ranges(2000, 1, &geo), Err(HfsError::EndOfFork { .. })));
        assert!(matches!(map.physical_ranges(990, 20, &geo), Err(HfsError::EndOfFork { .. })));
        assert!(map.physical_ranges(1000, 0, &geo).unwrap().is_empty());
    }

    #[test]
    fn test_extent_past_volume_end_is_corrupt() {
        let err = ForkMap::from_fork_data(20, ForkType::Data, &fork(1024, &[(99, 2)]), &geometry(100)).unwrap_err();
        assert!(err.is_format_error());
    }

    #[test]
    fn test_resolve_through_overflow_records() {
        // Ten one-block extents, eight inline and two in the overflow tree
        let extents: Vec<(u32, u32)> = (0..10).map(|i| (200 + i * 3, 1)).collect();
        let mut image = ImageBuilder::hfs_plus(512, 512);
        image.add_file(2, "big.bin", 10 * 512, &extents[..8], 10);
        image.add_overflow(ForkType::Data, image.last_cnid(), 8, &extents[8..]);
        let mut io = image.volume_io();
        let header = image.volume_header();

        let format = Arc::new(HfsPlusFormat::hfs_plus());
        let overflow = ExtentsOverflowFile::open(&header.extents_file, format, &mut io, None).unwrap();
        let cnid = image.last_cnid();
        let inline = fork(10 * 512, &extents[..8]);
        let mut map = ForkMap::from_fork_data(cnid, ForkType::Data, &inline, io.geometry()).unwrap();
        assert_eq!(map.mapped_blocks(), 8);

        let ranges = resolve(&mut io, &overflow, &mut map, 9 * 512 + 10, 5).unwrap();
        assert_eq!(ranges, vec![PhysicalRange { offset: (200 + 9 * 3) * 512 + 10, length: 5 }]);
        assert_eq!(map.mapped_blocks(), 10);
        assert_eq!(map.runs().len(), 10);

        // Same answer once mapped; nothing appended twice
        let again = resolve(&mut io, &overflow, &mut map, 9 * 512 + 10, 5).unwrap();
        assert_eq!(again, ranges);
        assert_eq!(map.runs().len(), 10);

        assert!(matches!(
            resolve(&mut io, &overflow, &mut map, 10 * 512, 1),
            Err(HfsError::EndOfFork { .. })
        ));
    }

    #[test]
    fn test_missing_overflow_record_is_corrupt() {
        let mut image = ImageBuilder::hfs_plus(512, 512);
        image.add_file(2, "short.bin", 4 * 512, &[(300, 2)], 4);
        let mut io = image.volume_io();
        let header = image.volume_header();
        let format = Arc::new(HfsPlusFormat::hfs_plus());
        let overflow = ExtentsOverflowFile::open(&header.extents_file, format, &mut io, None).unwrap();
        let mut map =
            ForkMap::from_fork_data(image.last_cnid(), ForkType::Data, &fork(4 * 512, &[(300, 2)]), io.geometry())
                .unwrap();
        let err = resolve(&mut io, &overflow, &mut map, 3 * 512, 1).unwrap_err();
        assert!(err.is_format_error());
    }
}

//! Synthetic HFS, HFS+ and HFSX images for tests
//!
//! [`ImageBuilder`] lays out a small volume (header, bitmap, extents and
//! catalog trees, file contents) from a list of folders and files, encoding
//! keys and records the same way real volumes do.

use crate::config::ReaderConfig;
use crate::extents::{Geometry, VolumeIo};
use crate::format::{format_for, FormatKind, VolumeFormat, VOLUME_HEADER_OFFSET};
use crate::io::StreamSource;
use crate::strings::{MacRoman, StringCodec};
use crate::types::btree::{ATTR_BIG_KEYS, ATTR_VARIABLE_INDEX_KEYS, KEY_COMPARE_CASE_FOLDING};
use crate::types::catalog::{CatalogKey, CatalogName, NameOrdering};
use crate::types::extents::ExtentKey;
use crate::types::volume::{VolumeHeader, VOLUME_ATTR_UNMOUNTED};
use crate::types::{Cnid, ForkType};
use crate::volume::Volume;
use std::io::Cursor;
use std::sync::Arc;

/// Tree shape fields written to a header node
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeShape {
    pub depth: u16,
    pub root: u32,
    pub first_leaf: u32,
    pub last_leaf: u32,
    pub leaf_records: u32,
    pub max_key_length: u16,
    pub compare_type: u8,
    pub attributes: u32,
}

fn put_u16(buf: &mut [u8], offset: usize, value: u16) {
    buf[offset..offset + 2].copy_from_slice(&value.to_be_bytes());
}

fn put_u32(buf: &mut [u8], offset: usize, value: u32) {
    buf[offset..offset + 4].copy_from_slice(&value.to_be_bytes());
}

fn put_u64(buf: &mut [u8], offset: usize, value: u64) {
    buf[offset..offset + 8].copy_from_slice(&value.to_be_bytes());
}

/// Serialize one node: descriptor, records, offset table
pub fn node(node_size: usize, kind: i8, height: u8, back: u32, forward: u32, records: &[Vec<u8>]) -> Vec<u8> {
    let mut data = vec![0u8; node_size];
    put_u32(&mut data, 0, forward);
    put_u32(&mut data, 4, back);
    data[8] = kind as u8;
    data[9] = height;
    put_u16(&mut data, 10, records.len() as u16);

    let mut offset = 14;
    for (i, record) in records.iter().enumerate() {
        data[offset..offset + record.len()].copy_from_slice(record);
        put_u16(&mut data, node_size - 2 * (i + 1), offset as u16);
        offset += record.len();
    }
    put_u16(&mut data, node_size - 2 * (records.len() + 1), offset as u16);
    assert!(
        offset <= node_size - 2 * (records.len() + 1),
        "records overflow a {}-byte node",
        node_size
    );
    data
}

pub fn leaf_node(node_size: usize, back: u32, forward: u32, records: &[Vec<u8>]) -> Vec<u8> {
    node(node_size, -1, 1, back, forward, records)
}

pub fn index_node(node_size: usize, records: &[Vec<u8>]) -> Vec<u8> {
    node(node_size, 0, 2, 0, 0, records)
}

/// Header node for a tree of `total_nodes` nodes
pub fn header_node(node_size: usize, shape: &TreeShape, total_nodes: u32) -> Vec<u8> {
    let mut header = vec![0u8; 106];
    put_u16(&mut header, 0, shape.depth);
    put_u32(&mut header, 2, shape.root);
    put_u32(&mut header, 6, shape.leaf_records);
    put_u32(&mut header, 10, shape.first_leaf);
    put_u32(&mut header, 14, shape.last_leaf);
    put_u16(&mut header, 18, node_size as u16);
    put_u16(&mut header, 20, shape.max_key_length);
    put_u32(&mut header, 22, total_nodes);
    put_u32(&mut header, 26, 0);
    put_u32(&mut header, 32, node_size as u32);
    header[37] = shape.compare_type;
    put_u32(&mut header, 38, shape.attributes);

    let user = vec![0u8; 128];
    let map = vec![0u8; node_size - 14 - 106 - 128 - 8];
    node(node_size, 1, 0, 0, 0, &[header, user, map])
}

/// Header node followed by `nodes` (numbered from 1)
pub fn btree_file(node_size: usize, shape: &TreeShape, nodes: &[Vec<u8>]) -> Vec<u8> {
    let total = nodes.len() as u32 + 1;
    let mut file = header_node(node_size, shape, total);
    for n in nodes {
        assert_eq!(n.len(), node_size);
        file.extend_from_slice(n);
    }
    file
}

/// Pack sorted `(key, data)` records into a complete tree file
///
/// Index records reuse each child's first key followed by the child pointer.
pub fn pack_tree(node_size: usize, shape: TreeShape, records: &[(Vec<u8>, Vec<u8>)], max_per_node: usize) -> Vec<u8> {
    fn group(node_size: usize, records: Vec<Vec<u8>>, max_per_node: usize) -> Vec<Vec<Vec<u8>>> {
        let mut groups: Vec<Vec<Vec<u8>>> = Vec::new();
        let mut current: Vec<Vec<u8>> = Vec::new();
        let mut used = 14;
        for record in records {
            let fits = used + record.len() + 2 * (current.len() + 2) <= node_size;
            if !current.is_empty() && (!fits || current.len() >= max_per_node) {
                groups.push(std::mem::take(&mut current));
                used = 14;
            }
            used += record.len();
            current.push(record);
        }
        if !current.is_empty() {
            groups.push(current);
        }
        groups
    }

    let mut shape = shape;
    if records.is_empty() {
        return btree_file(node_size, &shape, &[]);
    }

    let leaves = group(
        node_size,
        records.iter().map(|(k, d)| [k.clone(), d.clone()].concat()).collect(),
        max_per_node,
    );
    let mut nodes: Vec<Vec<u8>> = Vec::new();
    // (first key, node number) of each node on the level being built
    let mut level: Vec<(Vec<u8>, u32)> = Vec::new();
    let mut record_index = 0;
    let leaf_count = leaves.len() as u32;
    for (i, group) in leaves.iter().enumerate() {
        let number = i as u32 + 1;
        let back = if i == 0 { 0 } else { number - 1 };
        let forward = if number == leaf_count { 0 } else { number + 1 };
        nodes.push(leaf_node(node_size, back, forward, group));
        level.push((records[record_index].0.clone(), number));
        record_index += group.len();
    }

    let mut height = 1u8;
    while level.len() > 1 {
        height += 1;
        let index_records: Vec<Vec<u8>> = level
            .iter()
            .map(|(key, child)| [key.clone(), child.to_be_bytes().to_vec()].concat())
            .collect();
        let keys: Vec<Vec<u8>> = level.iter().map(|(k, _)| k.clone()).collect();
        let groups = group(node_size, index_records, max_per_node);
        let mut next = Vec::new();
        let mut key_index = 0;
        for group in &groups {
            let number = nodes.len() as u32 + 1;
            nodes.push(node(node_size, 0, height, 0, 0, group));
            next.push((keys[key_index].clone(), number));
            key_index += group.len();
        }
        level = next;
    }

    shape.depth = u16::from(height);
    shape.root = level[0].1;
    shape.first_leaf = 1;
    shape.last_leaf = leaf_count;
    shape.leaf_records = records.len() as u32;
    btree_file(node_size, &shape, &nodes)
}

#[derive(Debug, Clone, Default)]
struct ForkSpec {
    logical_size: u64,
    total_blocks: u32,
    extents: Vec<(u32, u32)>,
}

#[derive(Debug, Clone)]
enum Entry {
    Folder {
        parent: Cnid,
        name: String,
        cnid: Cnid,
    },
    File {
        parent: Cnid,
        name: String,
        cnid: Cnid,
        data: ForkSpec,
        resource: ForkSpec,
    },
}

impl Entry {
    fn parent(&self) -> Cnid {
        match self {
            Entry::Folder { parent, .. } | Entry::File { parent, .. } => *parent,
        }
    }
}

/// Builds a small volume image in memory
pub struct ImageBuilder {
    kind: FormatKind,
    block_size: u32,
    node_size: usize,
    compare_type: u8,
    volume_name: String,
    hfs_codec: Arc<dyn StringCodec>,
    entries: Vec<Entry>,
    overflow: Vec<(ForkType, Cnid, u32, Vec<(u32, u32)>)>,
    contents: Vec<(u32, Vec<u8>)>,
    next_cnid: Cnid,
    data_cursor: u32,
    max_per_node: usize,
    file_threads: bool,
}

impl ImageBuilder {
    fn new(kind: FormatKind, block_size: u32, node_size: usize) -> Self {
        Self {
            kind,
            block_size,
            node_size,
            compare_type: 0,
            volume_name: "Test Volume".to_string(),
            hfs_codec: Arc::new(MacRoman),
            entries: Vec::new(),
            overflow: Vec::new(),
            contents: Vec::new(),
            next_cnid: 16,
            data_cursor: 600,
            max_per_node: usize::MAX,
            file_threads: true,
        }
    }

    pub fn hfs_plus(block_size: u32, node_size: usize) -> Self {
        Self::new(FormatKind::HfsPlus, block_size, node_size)
    }

    pub fn hfsx(block_size: u32, node_size: usize, compare_type: u8) -> Self {
        let mut builder = Self::new(FormatKind::Hfsx, block_size, node_size);
        builder.compare_type = compare_type;
        builder
    }

    /// HFS always uses 512-byte nodes
    pub fn hfs(block_size: u32) -> Self {
        Self::new(FormatKind::Hfs, block_size, 512)
    }

    pub fn kind(&self) -> FormatKind {
        self.kind
    }

    pub fn set_volume_name(&mut self, name: &str) {
        self.volume_name = name.to_string();
    }

    pub fn set_hfs_codec(&mut self, codec: Arc<dyn StringCodec>) {
        self.hfs_codec = codec;
    }

    /// Limit records per node so small catalogs still get index levels
    pub fn set_max_records_per_node(&mut self, max: usize) {
        self.max_per_node = max;
    }

    /// Omit file thread records, which HFS does not require
    pub fn set_file_threads(&mut self, enabled: bool) {
        self.file_threads = enabled;
    }

    pub fn last_cnid(&self) -> Cnid {
        self.next_cnid - 1
    }

    fn allocate_cnid(&mut self) -> Cnid {
        let cnid = self.next_cnid;
        self.next_cnid += 1;
        cnid
    }

    pub fn add_folder(&mut self, parent: Cnid, name: &str) -> Cnid {
        let cnid = self.allocate_cnid();
        self.entries.push(Entry::Folder {
            parent,
            name: name.to_string(),
            cnid,
        });
        cnid
    }

    /// File whose data fork extents are given explicitly; nothing is written
    pub fn add_file(&mut self, parent: Cnid, name: &str, logical_size: u64, extents: &[(u32, u32)], total_blocks: u32) -> Cnid {
        let cnid = self.allocate_cnid();
        self.entries.push(Entry::File {
            parent,
            name: name.to_string(),
            cnid,
            data: ForkSpec {
                logical_size,
                total_blocks,
                extents: extents.to_vec(),
            },
            resource: ForkSpec::default(),
        });
        cnid
    }

    /// Extents-overflow record for blocks of a fork starting at `start_block`
    pub fn add_overflow(&mut self, fork_type: ForkType, cnid: Cnid, start_block: u32, extents: &[(u32, u32)]) {
        self.overflow.push((fork_type, cnid, start_block, extents.to_vec()));
    }

    fn blocks_for(&self, len: usize) -> u32 {
        (len as u64).div_ceil(u64::from(self.block_size)) as u32
    }

    fn store_contiguous(&mut self, data: &[u8]) -> ForkSpec {
        let blocks = self.blocks_for(data.len());
        let start = self.data_cursor;
        self.data_cursor += blocks + 1;
        if blocks > 0 {
            self.contents.push((start, data.to_vec()));
        }
        ForkSpec {
            logical_size: data.len() as u64,
            total_blocks: blocks,
            extents: if blocks > 0 { vec![(start, blocks)] } else { Vec::new() },
        }
    }

    /// File with contiguous data and resource forks
    pub fn add_file_with_forks(&mut self, parent: Cnid, name: &str, data: &[u8], resource: &[u8]) -> Cnid {
        let data = self.store_contiguous(data);
        let resource = self.store_contiguous(resource);
        let cnid = self.allocate_cnid();
        self.entries.push(Entry::File {
            parent,
            name: name.to_string(),
            cnid,
            data,
            resource,
        });
        cnid
    }

    pub fn add_file_with_data(&mut self, parent: Cnid, name: &str, data: &[u8]) -> Cnid {
        self.add_file_with_forks(parent, name, data, &[])
    }

    /// File whose data fork is one extent per block, with gaps between them
    ///
    /// Extents beyond the inline record go to the overflow tree.
    pub fn add_fragmented_file(&mut self, parent: Cnid, name: &str, data: &[u8]) -> Cnid {
        let block_size = self.block_size as usize;
        let mut extents = Vec::new();
        for chunk in data.chunks(block_size) {
            let start = self.data_cursor;
            self.data_cursor += 2;
            self.contents.push((start, chunk.to_vec()));
            extents.push((start, 1));
        }
        let per_record = self.extents_per_record();
        let cnid = self.allocate_cnid();
        let inline: Vec<(u32, u32)> = extents.iter().take(per_record).copied().collect();
        for (i, chunk) in extents.chunks(per_record).enumerate().skip(1) {
            self.add_overflow(ForkType::Data, cnid, (i * per_record) as u32, chunk);
        }
        self.entries.push(Entry::File {
            parent,
            name: name.to_string(),
            cnid,
            data: ForkSpec {
                logical_size: data.len() as u64,
                total_blocks: extents.len() as u32,
                extents: inline,
            },
            resource: ForkSpec::default(),
        });
        cnid
    }

    fn extents_per_record(&self) -> usize {
        if self.kind == FormatKind::Hfs {
            3
        } else {
            8
        }
    }

    fn format(&self) -> Arc<dyn VolumeFormat> {
        format_for(self.kind, self.hfs_codec.clone())
    }

    fn ordering(&self) -> NameOrdering {
        match self.kind {
            FormatKind::Hfs => NameOrdering::Binary,
            FormatKind::HfsPlus => NameOrdering::CaseFolding,
            FormatKind::Hfsx if self.compare_type == KEY_COMPARE_CASE_FOLDING => NameOrdering::CaseFolding,
            FormatKind::Hfsx => NameOrdering::Binary,
        }
    }

    fn encode_name(&self, name: &str) -> CatalogName {
        self.format().encode_name(name).unwrap()
    }

    fn catalog_key_bytes(&self, parent: Cnid, name: &CatalogName) -> Vec<u8> {
        match name {
            CatalogName::Bytes(bytes) => {
                let mut key = vec![(6 + bytes.len()) as u8, 0];
                key.extend_from_slice(&parent.to_be_bytes());
                key.push(bytes.len() as u8);
                key.extend_from_slice(bytes);
                if key.len() % 2 == 1 {
                    key.push(0);
                }
                key
            }
            CatalogName::Unicode(units) => {
                let mut key = ((6 + 2 * units.len()) as u16).to_be_bytes().to_vec();
                key.extend_from_slice(&parent.to_be_bytes());
                key.extend_from_slice(&(units.len() as u16).to_be_bytes());
                for unit in units {
                    key.extend_from_slice(&unit.to_be_bytes());
                }
                key
            }
        }
    }

    fn thread_record(&self, folder: bool, parent: Cnid, name: &CatalogName) -> Vec<u8> {
        match name {
            CatalogName::Bytes(bytes) => {
                let mut record = vec![0u8; 46];
                record[0] = if folder { 3 } else { 4 };
                put_u32(&mut record, 10, parent);
                record[14] = bytes.len() as u8;
                record[15..15 + bytes.len()].copy_from_slice(bytes);
                record
            }
            CatalogName::Unicode(units) => {
                let mut record = vec![0u8; 10 + 2 * units.len()];
                put_u16(&mut record, 0, if folder { 3 } else { 4 });
                put_u32(&mut record, 4, parent);
                put_u16(&mut record, 8, units.len() as u16);
                for (i, unit) in units.iter().enumerate() {
                    put_u16(&mut record, 10 + 2 * i, *unit);
                }
                record
            }
        }
    }

    fn folder_record(&self, cnid: Cnid, valence: u32) -> Vec<u8> {
        if self.kind == FormatKind::Hfs {
            let mut record = vec![0u8; 70];
            record[0] = 1;
            put_u16(&mut record, 4, valence as u16);
            put_u32(&mut record, 6, cnid);
            put_u32(&mut record, 10, 3_000_000_000);
            put_u32(&mut record, 14, 3_000_000_100);
            record
        } else {
            let mut record = vec![0u8; 88];
            put_u16(&mut record, 0, 1);
            put_u32(&mut record, 4, valence);
            put_u32(&mut record, 8, cnid);
            put_u32(&mut record, 12, 3_000_000_000);
            put_u32(&mut record, 16, 3_000_000_100);
            put_u16(&mut record, 42, 0o40755);
            record
        }
    }

    fn file_record(&self, cnid: Cnid, data: &ForkSpec, resource: &ForkSpec) -> Vec<u8> {
        if self.kind == FormatKind::Hfs {
            let mut record = vec![0u8; 102];
            record[0] = 2;
            record[4..8].copy_from_slice(b"TEXT");
            record[8..12].copy_from_slice(b"ttxt");
            put_u32(&mut record, 20, cnid);
            let physical = |fork: &ForkSpec| fork.total_blocks * self.block_size;
            put_u32(&mut record, 26, data.logical_size as u32);
            put_u32(&mut record, 30, physical(data));
            put_u32(&mut record, 36, resource.logical_size as u32);
            put_u32(&mut record, 40, physical(resource));
            put_u32(&mut record, 44, 3_000_000_000);
            put_u32(&mut record, 48, 3_000_000_200);
            for (i, &(start, count)) in data.extents.iter().take(3).enumerate() {
                put_u16(&mut record, 74 + i * 4, start as u16);
                put_u16(&mut record, 76 + i * 4, count as u16);
            }
            for (i, &(start, count)) in resource.extents.iter().take(3).enumerate() {
                put_u16(&mut record, 86 + i * 4, start as u16);
                put_u16(&mut record, 88 + i * 4, count as u16);
            }
            record
        } else {
            let mut record = vec![0u8; 248];
            put_u16(&mut record, 0, 2);
            put_u32(&mut record, 8, cnid);
            put_u32(&mut record, 12, 3_000_000_000);
            put_u32(&mut record, 16, 3_000_000_200);
            put_u16(&mut record, 42, 0o100644);
            record[48..52].copy_from_slice(b"TEXT");
            record[52..56].copy_from_slice(b"ttxt");
            write_hfsplus_fork(&mut record[88..168], data);
            write_hfsplus_fork(&mut record[168..248], resource);
            record
        }
    }

    fn extent_record_bytes(&self, fork_type: ForkType, cnid: Cnid, start: u32, extents: &[(u32, u32)]) -> (Vec<u8>, Vec<u8>) {
        if self.kind == FormatKind::Hfs {
            let mut key = vec![7, fork_type.as_u8()];
            key.extend_from_slice(&cnid.to_be_bytes());
            key.extend_from_slice(&(start as u16).to_be_bytes());
            let mut record = vec![0u8; 12];
            for (i, &(s, c)) in extents.iter().take(3).enumerate() {
                put_u16(&mut record, i * 4, s as u16);
                put_u16(&mut record, i * 4 + 2, c as u16);
            }
            (key, record)
        } else {
            let mut key = vec![0, 10, fork_type.as_u8(), 0];
            key.extend_from_slice(&cnid.to_be_bytes());
            key.extend_from_slice(&start.to_be_bytes());
            let mut record = vec![0u8; 64];
            for (i, &(s, c)) in extents.iter().take(8).enumerate() {
                put_u32(&mut record, i * 8, s);
                put_u32(&mut record, i * 8 + 4, c);
            }
            (key, record)
        }
    }

    fn catalog_tree(&self) -> Vec<u8> {
        let ordering = self.ordering();
        let root_name = self.encode_name(&self.volume_name);
        let empty = root_name.empty_like();
        let valence = |cnid: Cnid| self.entries.iter().filter(|e| e.parent() == cnid).count() as u32;

        let mut records: Vec<(CatalogKey, Vec<u8>)> = vec![
            (CatalogKey::new(1, root_name.clone()), self.folder_record(2, valence(2))),
            (CatalogKey::new(2, empty.clone()), self.thread_record(true, 1, &root_name)),
        ];
        for entry in &self.entries {
            match entry {
                Entry::Folder { parent, name, cnid } => {
                    let name = self.encode_name(name);
                    records.push((CatalogKey::new(*parent, name.clone()), self.folder_record(*cnid, valence(*cnid))));
                    records.push((CatalogKey::new(*cnid, empty.clone()), self.thread_record(true, *parent, &name)));
                }
                Entry::File {
                    parent,
                    name,
                    cnid,
                    data,
                    resource,
                } => {
                    let name = self.encode_name(name);
                    records.push((CatalogKey::new(*parent, name.clone()), self.file_record(*cnid, data, resource)));
                    if self.file_threads {
                        records.push((CatalogKey::new(*cnid, empty.clone()), self.thread_record(false, *parent, &name)));
                    }
                }
            }
        }
        records.sort_by(|a, b| a.0.compare(&b.0, ordering));

        let encoded: Vec<(Vec<u8>, Vec<u8>)> = records
            .iter()
            .map(|(key, body)| (self.catalog_key_bytes(key.parent_id, &key.name), body.clone()))
            .collect();
        let shape = if self.kind == FormatKind::Hfs {
            TreeShape {
                max_key_length: 37,
                ..TreeShape::default()
            }
        } else {
            TreeShape {
                max_key_length: 516,
                compare_type: if self.kind == FormatKind::Hfsx { self.compare_type } else { 0 },
                attributes: ATTR_BIG_KEYS | ATTR_VARIABLE_INDEX_KEYS,
                ..TreeShape::default()
            }
        };
        pack_tree(self.node_size, shape, &encoded, self.max_per_node)
    }

    fn extents_tree(&self) -> Vec<u8> {
        let mut records: Vec<(ExtentKey, Vec<u8>, Vec<u8>)> = self
            .overflow
            .iter()
            .map(|(fork_type, cnid, start, extents)| {
                let (key, record) = self.extent_record_bytes(*fork_type, *cnid, *start, extents);
                (ExtentKey::new(*fork_type, *cnid, *start), key, record)
            })
            .collect();
        records.sort_by(|a, b| a.0.cmp(&b.0));
        let encoded: Vec<(Vec<u8>, Vec<u8>)> = records.into_iter().map(|(_, k, r)| (k, r)).collect();
        let shape = if self.kind == FormatKind::Hfs {
            TreeShape {
                max_key_length: 7,
                ..TreeShape::default()
            }
        } else {
            TreeShape {
                max_key_length: 10,
                attributes: ATTR_BIG_KEYS,
                ..TreeShape::default()
            }
        };
        pack_tree(self.node_size, shape, &encoded, self.max_per_node)
    }

    /// Every allocated block: file extents and overflow extents
    fn file_extents(&self) -> Vec<(u32, u32)> {
        let mut extents = Vec::new();
        for entry in &self.entries {
            if let Entry::File { data, resource, .. } = entry {
                extents.extend(data.extents.iter().copied());
                extents.extend(resource.extents.iter().copied());
            }
        }
        for (_, _, _, overflow) in &self.overflow {
            extents.extend(overflow.iter().copied());
        }
        extents
    }

    fn folder_and_file_counts(&self) -> (u32, u32) {
        let folders = self.entries.iter().filter(|e| matches!(e, Entry::Folder { .. })).count() as u32;
        (folders, self.entries.len() as u32 - folders)
    }

    /// Serialize the whole volume
    pub fn build(&self) -> Vec<u8> {
        match self.kind {
            FormatKind::Hfs => self.build_hfs(),
            _ => self.build_hfs_plus(),
        }
    }

    fn total_blocks(&self, special_end: u32) -> u32 {
        let data_end = self
            .file_extents()
            .iter()
            .map(|&(s, c)| s + c)
            .chain(std::iter::once(self.data_cursor))
            .max()
            .unwrap_or(0);
        let first_data = self.file_extents().iter().map(|e| e.0).min().unwrap_or(u32::MAX);
        assert!(special_end <= first_data, "special files overlap file data at block {}", first_data);
        data_end.max(special_end) + 8
    }

    fn build_hfs_plus(&self) -> Vec<u8> {
        let bs = self.block_size;
        let catalog = self.catalog_tree();
        let extents = self.extents_tree();

        let reserved = (4096 / bs).max(1);
        let provisional_total = self.total_blocks(0) + 64;
        let bitmap_blocks = self.blocks_for((provisional_total as usize).div_ceil(8));
        let bitmap_start = reserved;
        let extents_start = bitmap_start + bitmap_blocks;
        let extents_blocks = self.blocks_for(extents.len());
        let catalog_start = extents_start + extents_blocks;
        let catalog_blocks = self.blocks_for(catalog.len());
        let special_end = catalog_start + catalog_blocks;
        let total = self.total_blocks(special_end).max(provisional_total);
        assert!((total as usize).div_ceil(8) <= (bitmap_blocks * bs) as usize);

        let mut allocated = vec![(0, reserved), (bitmap_start, bitmap_blocks), (extents_start, extents_blocks), (catalog_start, catalog_blocks), (total - 2, 2)];
        allocated.extend(self.file_extents());
        let bitmap = bitmap_bytes(total, &allocated, (bitmap_blocks * bs) as usize);
        let used = count_set_bits(&bitmap, total);

        let mut image = vec![0u8; (u64::from(total) * u64::from(bs)) as usize];
        let at = |block: u32| (u64::from(block) * u64::from(bs)) as usize;
        image[at(bitmap_start)..at(bitmap_start) + bitmap.len()].copy_from_slice(&bitmap);
        image[at(extents_start)..at(extents_start) + extents.len()].copy_from_slice(&extents);
        image[at(catalog_start)..at(catalog_start) + catalog.len()].copy_from_slice(&catalog);
        for (block, data) in &self.contents {
            image[at(*block)..at(*block) + data.len()].copy_from_slice(data);
        }

        let (folders, files) = self.folder_and_file_counts();
        let mut header = vec![0u8; 512];
        put_u16(&mut header, 0, self.kind.signature());
        put_u16(&mut header, 2, if self.kind == FormatKind::Hfsx { 5 } else { 4 });
        put_u32(&mut header, 4, VOLUME_ATTR_UNMOUNTED);
        put_u32(&mut header, 16, 3_000_000_000);
        put_u32(&mut header, 20, 3_000_000_500);
        put_u32(&mut header, 32, files);
        put_u32(&mut header, 36, folders);
        put_u32(&mut header, 40, bs);
        put_u32(&mut header, 44, total);
        put_u32(&mut header, 48, total - used);
        put_u32(&mut header, 64, self.next_cnid);
        put_u32(&mut header, 68, 1);
        write_hfsplus_fork(
            &mut header[112..192],
            &ForkSpec {
                logical_size: u64::from(bitmap_blocks * bs),
                total_blocks: bitmap_blocks,
                extents: vec![(bitmap_start, bitmap_blocks)],
            },
        );
        write_hfsplus_fork(
            &mut header[192..272],
            &ForkSpec {
                logical_size: u64::from(extents_blocks * bs),
                total_blocks: extents_blocks,
                extents: vec![(extents_start, extents_blocks)],
            },
        );
        write_hfsplus_fork(
            &mut header[272..352],
            &ForkSpec {
                logical_size: u64::from(catalog_blocks * bs),
                total_blocks: catalog_blocks,
                extents: vec![(catalog_start, catalog_blocks)],
            },
        );
        let offset = VOLUME_HEADER_OFFSET as usize;
        image[offset..offset + 512].copy_from_slice(&header);
        let alternate = image.len() - 1024;
        image[alternate..alternate + 512].copy_from_slice(&header);
        image
    }

    fn build_hfs(&self) -> Vec<u8> {
        let bs = self.block_size;
        let catalog = self.catalog_tree();
        let extents = self.extents_tree();

        let extents_blocks = self.blocks_for(extents.len());
        let catalog_blocks = self.blocks_for(catalog.len());
        let special_end = extents_blocks + catalog_blocks;
        let total = self.total_blocks(special_end);
        let bitmap_sectors = (total as usize).div_ceil(8).div_ceil(512) as u32;
        let bitmap_sector = 3u32;
        let first_alloc_sector = bitmap_sector + bitmap_sectors;
        let allocation_start = first_alloc_sector as usize * 512;

        let mut allocated = vec![(0, extents_blocks), (extents_blocks, catalog_blocks)];
        allocated.extend(self.file_extents());
        let bitmap = bitmap_bytes(total, &allocated, bitmap_sectors as usize * 512);
        let used = count_set_bits(&bitmap, total);

        let mut image = vec![0u8; allocation_start + total as usize * bs as usize + 1024];
        let at = |block: u32| allocation_start + block as usize * bs as usize;
        image[bitmap_sector as usize * 512..bitmap_sector as usize * 512 + bitmap.len()].copy_from_slice(&bitmap);
        image[at(0)..at(0) + extents.len()].copy_from_slice(&extents);
        image[at(extents_blocks)..at(extents_blocks) + catalog.len()].copy_from_slice(&catalog);
        for (block, data) in &self.contents {
            image[at(*block)..at(*block) + data.len()].copy_from_slice(data);
        }

        let name = match self.encode_name(&self.volume_name) {
            CatalogName::Bytes(bytes) => bytes,
            CatalogName::Unicode(_) => unreachable!(),
        };
        let (folders, files) = self.folder_and_file_counts();
        let mut mdb = vec![0u8; 512];
        put_u16(&mut mdb, 0, self.kind.signature());
        put_u32(&mut mdb, 2, 3_000_000_000);
        put_u32(&mut mdb, 6, 3_000_000_500);
        put_u16(&mut mdb, 10, VOLUME_ATTR_UNMOUNTED as u16);
        put_u16(&mut mdb, 12, self.entries.iter().filter(|e| e.parent() == 2).count() as u16);
        put_u16(&mut mdb, 14, bitmap_sector as u16);
        put_u16(&mut mdb, 18, total as u16);
        put_u32(&mut mdb, 20, bs);
        put_u32(&mut mdb, 24, bs * 4);
        put_u16(&mut mdb, 28, first_alloc_sector as u16);
        put_u32(&mut mdb, 30, self.next_cnid);
        put_u16(&mut mdb, 34, (total - used) as u16);
        mdb[36] = name.len() as u8;
        mdb[37..37 + name.len()].copy_from_slice(&name);
        put_u32(&mut mdb, 70, 1);
        put_u32(&mut mdb, 84, files);
        put_u32(&mut mdb, 88, folders);
        put_u32(&mut mdb, 130, extents_blocks * bs);
        put_u16(&mut mdb, 134, 0);
        put_u16(&mut mdb, 136, extents_blocks as u16);
        put_u32(&mut mdb, 146, catalog_blocks * bs);
        put_u16(&mut mdb, 150, extents_blocks as u16);
        put_u16(&mut mdb, 152, catalog_blocks as u16);
        image[1024..1536].copy_from_slice(&mdb);
        image
    }

    pub fn source(&self) -> StreamSource<Cursor<Vec<u8>>> {
        StreamSource::new(Cursor::new(self.build())).unwrap()
    }

    pub fn volume_header(&self) -> VolumeHeader {
        let image = self.build();
        let offset = VOLUME_HEADER_OFFSET as usize;
        self.format().parse_volume_header(&image[offset..offset + 512]).unwrap()
    }

    pub fn volume_io(&self) -> VolumeIo {
        let header = self.volume_header();
        let geometry = Geometry {
            block_size: header.block_size,
            allocation_start: header.allocation_start,
            total_blocks: header.total_blocks,
        };
        VolumeIo::new(Box::new(self.source()), geometry)
    }

    pub fn open(&self) -> Volume {
        self.open_with(&ReaderConfig::default())
    }

    pub fn open_with(&self, config: &ReaderConfig) -> Volume {
        Volume::open(self.kind, Box::new(self.source()), config).unwrap()
    }
}

fn write_hfsplus_fork(buf: &mut [u8], fork: &ForkSpec) {
    put_u64(buf, 0, fork.logical_size);
    put_u32(buf, 12, fork.total_blocks);
    for (i, &(start, count)) in fork.extents.iter().take(8).enumerate() {
        put_u32(buf, 16 + i * 8, start);
        put_u32(buf, 20 + i * 8, count);
    }
}

fn bitmap_bytes(total: u32, allocated: &[(u32, u32)], len: usize) -> Vec<u8> {
    let mut bitmap = vec![0u8; len];
    for &(start, count) in allocated {
        for block in start..start + count {
            if block < total {
                bitmap[(block / 8) as usize] |= 0x80 >> (block % 8);
            }
        }
    }
    bitmap
}

fn count_set_bits(bitmap: &[u8], total: u32) -> u32 {
    (0..total)
        .filter(|&b| bitmap[(b / 8) as usize] & (0x80 >> (b % 8)) != 0)
        .count() as u32
}

/// HFS wrapper volume embedding `embedded` at wrapper allocation block 2
pub fn hfs_wrapper(embedded: &[u8], block_size: u32) -> Vec<u8> {
    let count = (embedded.len() as u64).div_ceil(u64::from(block_size)) as u32;
    let total = count + 4;
    let first_alloc_sector = 4u32;
    let allocation_start = first_alloc_sector as usize * 512;
    let mut image = vec![0u8; allocation_start + total as usize * block_size as usize];
    let start = allocation_start + 2 * block_size as usize;
    image[start..start + embedded.len()].copy_from_slice(embedded);

    let mut mdb = vec![0u8; 512];
    put_u16(&mut mdb, 0, 0x4244);
    put_u16(&mut mdb, 14, 3);
    put_u16(&mut mdb, 18, total as u16);
    put_u32(&mut mdb, 20, block_size);
    put_u16(&mut mdb, 28, first_alloc_sector as u16);
    mdb[36] = 7;
    mdb[37..44].copy_from_slice(b"Wrapper");
    put_u16(&mut mdb, 124, 0x482B);
    put_u16(&mut mdb, 126, 2);
    put_u16(&mut mdb, 128, count as u16);
    image[1024..1536].copy_from_slice(&mdb);
    image
}

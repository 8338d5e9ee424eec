//! Generic B-tree reader
//!
//! Catalog and extents-overflow trees share one node format. What differs
//! is how keys and records decode and how keys compare; a [`TreeSchema`]
//! supplies those, and [`BTreeFile`] does the traversal.

use crate::error::{HfsError, Result};
use crate::extents::{ForkMap, VolumeIo};
use crate::format::VolumeFormat;
use crate::types::btree::{record_ranges, HeaderRecord, NodeDescriptor, NodeKind, NODE_DESCRIPTOR_SIZE};
use byteorder::{BigEndian, ByteOrder};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Smallest node size; node 0 is read with this before the real size is known
const MIN_NODE_SIZE: usize = 512;

/// Key/record decoding and key ordering for one kind of tree
pub trait TreeSchema {
    type Key;
    type Record;

    /// Decode a key at the start of `data`; returns it and the offset just past it
    fn parse_key(&self, data: &[u8]) -> Result<(Self::Key, usize)>;

    /// Decode a leaf record's data
    fn parse_record(&self, key: Self::Key, data: &[u8]) -> Result<Self::Record>;

    fn compare(&self, a: &Self::Key, b: &Self::Key) -> Ordering;
}

/// A node read from a tree file
#[derive(Debug)]
pub struct Node {
    pub number: u32,
    pub descriptor: NodeDescriptor,
    data: Vec<u8>,
    ranges: Vec<(usize, usize)>,
}

impl Node {
    pub fn parse(number: u32, data: Vec<u8>) -> Result<Self> {
        let descriptor = NodeDescriptor::parse(&data)?;
        let ranges = record_ranges(&data, descriptor.num_records)
            .map_err(|e| HfsError::corrupt(format!("node {}: {}", number, e)))?;
        Ok(Self {
            number,
            descriptor,
            data,
            ranges,
        })
    }

    pub fn record_count(&self) -> usize {
        self.ranges.len()
    }

    pub fn record(&self, index: usize) -> &[u8] {
        let (start, end) = self.ranges[index];
        &self.data[start..end]
    }

    pub fn records(&self) -> impl Iterator<Item = &[u8]> {
        self.ranges.iter().map(move |&(start, end)| &self.data[start..end])
    }
}

/// A B-tree stored in a (fully mapped) special file
#[derive(Debug)]
pub struct BTreeFile {
    name: &'static str,
    fork: ForkMap,
    header: HeaderRecord,
    max_node_visits: u64,
}

impl BTreeFile {
    /// Read and validate the header node
    ///
    /// `max_node_visits` bounds leaf-chain walks; it defaults to the tree's
    /// node count.
    pub fn open(
        name: &'static str,
        fork: ForkMap,
        io: &mut VolumeIo,
        format: &dyn VolumeFormat,
        max_node_visits: Option<u64>,
    ) -> Result<Self> {
        if fork.logical_size() < MIN_NODE_SIZE as u64 {
            return Err(HfsError::corrupt(format!(
                "{} file is only {} bytes",
                name,
                fork.logical_size()
            )));
        }

        let mut first = vec![0u8; MIN_NODE_SIZE];
        io.read_fork(&fork, 0, &mut first)?;
        let descriptor = NodeDescriptor::parse(&first)?;
        if descriptor.kind != NodeKind::Header {
            return Err(HfsError::corrupt(format!(
                "{} node 0 is a {:?} node, expected the header node",
                name, descriptor.kind
            )));
        }
        let header = format.parse_header_record(&first[NODE_DESCRIPTOR_SIZE..])?;
        header.validate_node_size()?;

        let tree_bytes = u64::from(header.total_nodes) * u64::from(header.node_size);
        if tree_bytes > fork.logical_size() {
            return Err(HfsError::corrupt(format!(
                "{} tree claims {} nodes of {} bytes but the file holds {} bytes",
                name,
                header.total_nodes,
                header.node_size,
                fork.logical_size()
            )));
        }
        if header.tree_depth > 0 && header.root_node >= header.total_nodes {
            return Err(HfsError::corrupt(format!(
                "{} root node {} is outside the tree ({} nodes)",
                name, header.root_node, header.total_nodes
            )));
        }

        log::debug!(
            "{} tree: depth {}, root {}, {} leaf records, node size {}, {} nodes ({} free), compare type 0x{:02X}",
            name,
            header.tree_depth,
            header.root_node,
            header.leaf_records,
            header.node_size,
            header.total_nodes,
            header.free_nodes,
            header.key_compare_type
        );

        let max_node_visits = max_node_visits.unwrap_or_else(|| u64::from(header.total_nodes).max(1));
        Ok(Self {
            name,
            fork,
            header,
            max_node_visits,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn header(&self) -> &HeaderRecord {
        &self.header
    }

    pub fn node_size(&self) -> usize {
        usize::from(self.header.node_size)
    }

    /// Extents backing the tree file
    pub fn fork(&self) -> &ForkMap {
        &self.fork
    }

    pub fn read_node(&self, io: &mut VolumeIo, number: u32) -> Result<Node> {
        if number >= self.header.total_nodes {
            return Err(HfsError::corrupt(format!(
                "{} node {} is outside the tree ({} nodes)",
                self.name, number, self.header.total_nodes
            )));
        }
        let node_size = self.node_size();
        let mut data = vec![0u8; node_size];
        io.read_fork(&self.fork, u64::from(number) * node_size as u64, &mut data)?;
        Node::parse(number, data)
    }

    /// Walk index nodes down to the leaf that would hold `key`
    ///
    /// Returns `None` when the tree is empty, or when `key` sorts before every
    /// key and `leftmost_if_smaller` is false.
    fn find_leaf<S: TreeSchema>(
        &self,
        io: &mut VolumeIo,
        schema: &S,
        key: &S::Key,
        leftmost_if_smaller: bool,
    ) -> Result<Option<Node>> {
        if self.header.tree_depth == 0 || self.header.total_nodes == 0 {
            return Ok(None);
        }

        let mut visited = HashSet::new();
        let mut number = self.header.root_node;
        loop {
            if !visited.insert(number) {
                return Err(HfsError::corrupt(format!(
                    "{} tree has a cycle through node {}",
                    self.name, number
                )));
            }
            let node = self.read_node(io, number)?;
            match node.descriptor.kind {
                NodeKind::Leaf => return Ok(Some(node)),
                NodeKind::Index => {}
                other => {
                    return Err(HfsError::corrupt(format!(
                        "{} node {} is a {:?} node inside the index",
                        self.name, number, other
                    )))
                }
            }

            let mut entries = Vec::with_capacity(node.record_count());
            for record in node.records() {
                let (record_key, offset) = schema.parse_key(record)?;
                if record.len() < offset + 4 {
                    return Err(HfsError::corrupt(format!(
                        "{} index node {} has a record without a child pointer",
                        self.name, number
                    )));
                }
                entries.push((record_key, BigEndian::read_u32(&record[offset..offset + 4])));
            }

            // Rightmost key <= search key
            let index = entries.partition_point(|(k, _)| schema.compare(k, key) != Ordering::Greater);
            number = match index {
                0 if leftmost_if_smaller && !entries.is_empty() => entries[0].1,
                0 => return Ok(None),
                i => entries[i - 1].1,
            };
        }
    }

    /// Look up the leaf record whose key equals `key`
    pub fn find<S: TreeSchema>(&self, io: &mut VolumeIo, schema: &S, key: &S::Key) -> Result<Option<S::Record>> {
        let leaf = match self.find_leaf(io, schema, key, false)? {
            Some(leaf) => leaf,
            None => return Ok(None),
        };
        for record in leaf.records() {
            let (record_key, offset) = schema.parse_key(record)?;
            match schema.compare(&record_key, key) {
                Ordering::Less => continue,
                Ordering::Equal => return parse_leaf_record(schema, record_key, record, offset).map(Some),
                Ordering::Greater => break,
            }
        }
        Ok(None)
    }

    /// Iterate every leaf record in key order
    pub fn leaves<'a, S: TreeSchema>(&'a self, io: &'a mut VolumeIo, schema: &'a S) -> LeafIter<'a, S> {
        LeafIter {
            tree: self,
            io,
            schema,
            next_node: self.header.first_leaf_node,
            pending: Vec::new().into_iter(),
            visits: 0,
            failed: false,
        }
    }

    /// Iterate leaf records starting at the first one whose key is >= `key`
    pub fn seek<'a, S: TreeSchema>(
        &'a self,
        io: &'a mut VolumeIo,
        schema: &'a S,
        key: &S::Key,
    ) -> Result<LeafIter<'a, S>> {
        let leaf = match self.find_leaf(io, schema, key, true)? {
            Some(leaf) => leaf,
            None => {
                return Ok(LeafIter {
                    tree: self,
                    io,
                    schema,
                    next_node: 0,
                    pending: Vec::new().into_iter(),
                    visits: 0,
                    failed: false,
                })
            }
        };

        let mut pending = Vec::new();
        for record in leaf.records() {
            let (record_key, offset) = schema.parse_key(record)?;
            if schema.compare(&record_key, key) == Ordering::Less {
                continue;
            }
            pending.push(parse_leaf_record(schema, record_key, record, offset)?);
        }

        Ok(LeafIter {
            tree: self,
            io,
            schema,
            next_node: self.next_leaf(&leaf),
            pending: pending.into_iter(),
            visits: 1,
            failed: false,
        })
    }

    fn next_leaf(&self, node: &Node) -> u32 {
        if node.number == self.header.last_leaf_node {
            0
        } else {
            node.descriptor.forward_link
        }
    }
}

fn parse_leaf_record<S: TreeSchema>(schema: &S, key: S::Key, record: &[u8], offset: usize) -> Result<S::Record> {
    if offset > record.len() {
        return Err(HfsError::corrupt(format!(
            "leaf record key runs past the record ({} > {})",
            offset,
            record.len()
        )));
    }
    schema.parse_record(key, &record[offset..])
}

/// Forward walk over leaf records following node forward links
pub struct LeafIter<'a, S: TreeSchema> {
    tree: &'a BTreeFile,
    io: &'a mut VolumeIo,
    schema: &'a S,
    next_node: u32,
    pending: std::vec::IntoIter<S::Record>,
    visits: u64,
    failed: bool,
}

impl<S: TreeSchema> LeafIter<'_, S> {
    fn load_next(&mut self) -> Result<()> {
        self.visits += 1;
        if self.visits > self.tree.max_node_visits {
            return Err(HfsError::corrupt(format!(
                "{} leaf chain is longer than {} nodes; forward links loop",
                self.tree.name, self.tree.max_node_visits
            )));
        }

        let node = self.tree.read_node(self.io, self.next_node)?;
        if node.descriptor.kind != NodeKind::Leaf {
            return Err(HfsError::corrupt(format!(
                "{} leaf chain reached {:?} node {}",
                self.tree.name, node.descriptor.kind, node.number
            )));
        }

        let mut records = Vec::with_capacity(node.record_count());
        for record in node.records() {
            let (key, offset) = self.schema.parse_key(record)?;
            records.push(parse_leaf_record(self.schema, key, record, offset)?);
        }
        self.next_node = self.tree.next_leaf(&node);
        self.pending = records.into_iter();
        Ok(())
    }
}

impl<S: TreeSchema> Iterator for LeafIter<'_, S> {
    type Item = Result<S::Record>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(record) = self.pending.next() {
                return Some(Ok(record));
            }
            if self.failed || self.next_node == 0 {
                return None;
            }
            if let Err(err) = self.load_next() {
                self.failed = true;
                return Some(Err(err));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extents::Geometry;
    use crate::format::HfsPlusFormat;
    use crate::io::StreamSource;
    use crate::testing::{btree_file, index_node, leaf_node, TreeShape};
    use crate::types::{ExtentDescriptor, ForkData, ForkType};
    use std::io::Cursor;

    /// Keys are (u32) numbers; records are a u32 payload
    struct NumberSchema;

    impl TreeSchema for NumberSchema {
        type Key = u32;
        type Record = (u32, u32);

        fn parse_key(&self, data: &[u8]) -> Result<(u32, usize)> {
            Ok((BigEndian::read_u32(&data[2..6]), 6))
        }

        fn parse_record(&self, key: u32, data: &[u8]) -> Result<(u32, u32)> {
            Ok((key, BigEndian::read_u32(&data[0..4])))
        }

        fn compare(&self, a: &u32, b: &u32) -> Ordering {
            a.cmp(b)
        }
    }

    fn key(n: u32) -> Vec<u8> {
        let mut k = vec![0, 4];
        k.extend_from_slice(&n.to_be_bytes());
        k
    }

    fn leaf_record(n: u32) -> Vec<u8> {
        let mut r = key(n);
        r.extend_from_slice(&(n * 100).to_be_bytes());
        r
    }

    fn index_record(n: u32, child: u32) -> Vec<u8> {
        let mut r = key(n);
        r.extend_from_slice(&child.to_be_bytes());
        r
    }

    /// Header node, index root (node 1), leaves at nodes 2 and 3
    fn two_leaf_tree() -> (VolumeIo, BTreeFile) {
        let node_size = 512;
        let nodes = vec![
            index_node(node_size, &[index_record(10, 2), index_record(50, 3)]),
            leaf_node(node_size, 0, 3, &[leaf_record(10), leaf_record(20), leaf_record(30)]),
            leaf_node(node_size, 2, 0, &[leaf_record(50), leaf_record(60)]),
        ];
        let shape = TreeShape {
            depth: 2,
            root: 1,
            first_leaf: 2,
            last_leaf: 3,
            leaf_records: 5,
            ..TreeShape::default()
        };
        let image = btree_file(node_size, &shape, &nodes);
        let len = image.len() as u64;
        let source = StreamSource::new(Cursor::new(image)).unwrap();
        let geometry = Geometry {
            block_size: 512,
            allocation_start: 0,
            total_blocks: (len / 512) as u32,
        };
        let mut io = VolumeIo::new(Box::new(source), geometry);
        let fork = ForkData {
            logical_size: len,
            clump_size: 0,
            total_blocks: (len / 512) as u32,
            extents: vec![ExtentDescriptor::new(0, (len / 512) as u32)],
        };
        let map = ForkMap::from_fork_data(99, ForkType::Data, &fork, &geometry).unwrap();
        let tree = BTreeFile::open("test", map, &mut io, &HfsPlusFormat::hfs_plus(), None).unwrap();
        (io, tree)
    }

    #[test]
    fn test_find_in_second_leaf_descends_past_separator() {
        let (mut io, tree) = two_leaf_tree();
        assert_eq!(tree.find(&mut io, &NumberSchema, &60).unwrap(), Some((60, 6000)));
        assert_eq!(tree.find(&mut io, &NumberSchema, &50).unwrap(), Some((50, 5000)));
        assert_eq!(tree.find(&mut io, &NumberSchema, &20).unwrap(), Some((20, 2000)));
    }

    #[test]
    fn test_find_absent_keys() {
        let (mut io, tree) = two_leaf_tree();
        // Smaller than every key, between keys, and past the end
        assert_eq!(tree.find(&mut io, &NumberSchema, &5).unwrap(), None);
        assert_eq!(tree.find(&mut io, &NumberSchema, &40).unwrap(), None);
        assert_eq!(tree.find(&mut io, &NumberSchema, &99).unwrap(), None);
    }

    #[test]
    fn test_leaves_in_order_and_restartable() {
        let (mut io, tree) = two_leaf_tree();
        let keys: Vec<u32> = tree.leaves(&mut io, &NumberSchema).map(|r| r.unwrap().0).collect();
        assert_eq!(keys, vec![10, 20, 30, 50, 60]);
        let again = tree.leaves(&mut io, &NumberSchema).count();
        assert_eq!(again, 5);
    }

    #[test]
    fn test_seek_positions_at_first_key_not_less() {
        let (mut io, tree) = two_leaf_tree();
        let from_25: Vec<u32> = tree.seek(&mut io, &NumberSchema, &25).unwrap().map(|r| r.unwrap().0).collect();
        assert_eq!(from_25, vec![30, 50, 60]);
        let from_40: Vec<u32> = tree.seek(&mut io, &NumberSchema, &40).unwrap().map(|r| r.unwrap().0).collect();
        assert_eq!(from_40, vec![50, 60]);
        let from_1: Vec<u32> = tree.seek(&mut io, &NumberSchema, &1).unwrap().map(|r| r.unwrap().0).collect();
        assert_eq!(from_1.len(), 5);
    }

    #[test]
    fn test_leaf_chain_cycle_is_corruption() {
        let node_size = 512;
        let nodes = vec![
            leaf_node(node_size, 0, 2, &[leaf_record(1)]),
            leaf_node(node_size, 1, 1, &[leaf_record(2)]),
        ];
        // last leaf 0 never matches, so only the visit guard stops the walk
        let shape = TreeShape {
            depth: 1,
            root: 1,
            first_leaf: 1,
            last_leaf: 0,
            leaf_records: 2,
            ..TreeShape::default()
        };
        let image = btree_file(node_size, &shape, &nodes);
        let len = image.len() as u64;
        let geometry = Geometry {
            block_size: 512,
            allocation_start: 0,
            total_blocks: (len / 512) as u32,
        };
        let mut io = VolumeIo::new(Box::new(StreamSource::new(Cursor::new(image)).unwrap()), geometry);
        let fork = ForkData {
            logical_size: len,
            clump_size: 0,
            total_blocks: (len / 512) as u32,
            extents: vec![ExtentDescriptor::new(0, (len / 512) as u32)],
        };
        let map = ForkMap::from_fork_data(99, ForkType::Data, &fork, &geometry).unwrap();
        let tree = BTreeFile::open("cyclic", map, &mut io, &HfsPlusFormat::hfs_plus(), None).unwrap();
        let results: Vec<_> = tree.leaves(&mut io, &NumberSchema).collect();
        assert!(results.last().unwrap().as_ref().unwrap_err().is_format_error());
        assert!(results.len() < 10);
    }

    #[test]
    fn test_overfull_node_is_corruption() {
        let (mut io, tree) = two_leaf_tree();
        let mut data = vec![0u8; 512];
        data[8] = 0xFF;
        data[10..12].copy_from_slice(&400u16.to_be_bytes());
        assert!(Node::parse(7, data).unwrap_err().is_format_error());
        assert!(tree.read_node(&mut io, 9).unwrap_err().is_format_error());
    }
}

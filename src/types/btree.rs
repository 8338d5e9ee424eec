//! B-tree node descriptor and header record
//!
//! Layouts are shared by HFS and HFS+; HFS simply leaves the trailing header
//! fields (clump size, tree type, compare type, attributes) reserved.

use super::require_len;
use crate::error::{HfsError, Result};
use byteorder::{BigEndian, ByteOrder};

/// Size of the node descriptor at the start of every node
pub const NODE_DESCRIPTOR_SIZE: usize = 14;

/// Size of the header record following node 0's descriptor
pub const HEADER_RECORD_SIZE: usize = 106;

/// Case-folding catalog key comparison (HFSX)
pub const KEY_COMPARE_CASE_FOLDING: u8 = 0xCF;
/// Binary catalog key comparison (HFSX)
pub const KEY_COMPARE_BINARY: u8 = 0xBC;

/// Header attribute: key length field is 16 bits
pub const ATTR_BIG_KEYS: u32 = 0x0000_0002;
/// Header attribute: index keys are variable length
pub const ATTR_VARIABLE_INDEX_KEYS: u32 = 0x0000_0004;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Leaf,
    Index,
    Header,
    Map,
}

impl NodeKind {
    pub fn from_i8(value: i8) -> Result<Self> {
        match value {
            -1 => Ok(NodeKind::Leaf),
            0 => Ok(NodeKind::Index),
            1 => Ok(NodeKind::Header),
            2 => Ok(NodeKind::Map),
            other => Err(HfsError::corrupt(format!("unknown B-tree node kind {}", other))),
        }
    }
}

/// Node descriptor (first 14 bytes of a node)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeDescriptor {
    /// Next node of the same kind, 0 if none
    pub forward_link: u32,
    /// Previous node of the same kind, 0 if none
    pub backward_link: u32,
    pub kind: NodeKind,
    /// Level in the tree; leaves are 1
    pub height: u8,
    pub num_records: u16,
}

impl NodeDescriptor {
    pub fn parse(data: &[u8]) -> Result<Self> {
        require_len(data, NODE_DESCRIPTOR_SIZE, "B-tree node descriptor")?;
        Ok(Self {
            forward_link: BigEndian::read_u32(&data[0..4]),
            backward_link: BigEndian::read_u32(&data[4..8]),
            kind: NodeKind::from_i8(data[8] as i8)?,
            height: data[9],
            num_records: BigEndian::read_u16(&data[10..12]),
        })
    }
}

/// B-tree header record (node 0, record 0)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderRecord {
    pub tree_depth: u16,
    pub root_node: u32,
    pub leaf_records: u32,
    pub first_leaf_node: u32,
    pub last_leaf_node: u32,
    pub node_size: u16,
    pub max_key_length: u16,
    pub total_nodes: u32,
    pub free_nodes: u32,
    pub clump_size: u32,
    pub btree_type: u8,
    /// Catalog name ordering on HFSX; zero elsewhere
    pub key_compare_type: u8,
    pub attributes: u32,
}

impl HeaderRecord {
    pub fn parse(data: &[u8]) -> Result<Self> {
        require_len(data, 42, "B-tree header record")?;
        Ok(Self {
            tree_depth: BigEndian::read_u16(&data[0..2]),
            root_node: BigEndian::read_u32(&data[2..6]),
            leaf_records: BigEndian::read_u32(&data[6..10]),
            first_leaf_node: BigEndian::read_u32(&data[10..14]),
            last_leaf_node: BigEndian::read_u32(&data[14..18]),
            node_size: BigEndian::read_u16(&data[18..20]),
            max_key_length: BigEndian::read_u16(&data[20..22]),
            total_nodes: BigEndian::read_u32(&data[22..26]),
            free_nodes: BigEndian::read_u32(&data[26..30]),
            clump_size: BigEndian::read_u32(&data[32..36]),
            btree_type: data[36],
            key_compare_type: data[37],
            attributes: BigEndian::read_u32(&data[38..42]),
        })
    }

    /// Node sizes are powers of two from 512 to 32768 bytes
    pub fn validate_node_size(&self) -> Result<()> {
        let size = self.node_size;
        if !size.is_power_of_two() || !(512..=32768).contains(&size) {
            return Err(HfsError::corrupt(format!("invalid B-tree node size {}", size)));
        }
        Ok(())
    }
}

/// Byte ranges of the records in a node
///
/// Offsets are stored as u16 values at the end of the node, in reverse:
/// offset of record 0 in the last two bytes, then record 1, and so on, with
/// one extra offset marking the start of free space.
pub fn record_ranges(node: &[u8], num_records: u16) -> Result<Vec<(usize, usize)>> {
    let node_size = node.len();
    let count = usize::from(num_records);
    let table_size = (count + 1) * 2;
    if NODE_DESCRIPTOR_SIZE + table_size > node_size {
        return Err(HfsError::corrupt(format!(
            "node claims {} records, more than fit in {} bytes",
            num_records, node_size
        )));
    }
    let table_start = node_size - table_size;

    let offset_at = |i: usize| usize::from(BigEndian::read_u16(&node[node_size - 2 - 2 * i..node_size - 2 * i]));
    let mut ranges = Vec::with_capacity(count);
    for i in 0..count {
        let start = offset_at(i);
        let end = offset_at(i + 1);
        if start < NODE_DESCRIPTOR_SIZE || end < start || end > table_start {
            return Err(HfsError::corrupt(format!(
                "record {} spans invalid range {}..{} in {}-byte node",
                i, start, end, node_size
            )));
        }
        ranges.push((start, end));
    }
    Ok(ranges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_descriptor() {
        let mut raw = [0u8; 14];
        raw[0..4].copy_from_slice(&7u32.to_be_bytes());
        raw[8] = 0xFF;
        raw[9] = 1;
        raw[10..12].copy_from_slice(&3u16.to_be_bytes());
        let desc = NodeDescriptor::parse(&raw).unwrap();
        assert_eq!(desc.forward_link, 7);
        assert_eq!(desc.kind, NodeKind::Leaf);
        assert_eq!(desc.num_records, 3);

        raw[8] = 5;
        assert!(NodeDescriptor::parse(&raw).is_err());
    }

    #[test]
    fn test_record_ranges() {
        let mut node = vec![0u8; 512];
        // Two records at 14..20 and 20..30, free space from 30
        node[510..512].copy_from_slice(&14u16.to_be_bytes());
        node[508..510].copy_from_slice(&20u16.to_be_bytes());
        node[506..508].copy_from_slice(&30u16.to_be_bytes());
        assert_eq!(record_ranges(&node, 2).unwrap(), vec![(14, 20), (20, 30)]);
    }

    #[test]
    fn test_record_ranges_rejects_overfull_node() {
        let node = vec![0u8; 512];
        assert!(record_ranges(&node, 300).is_err());
        // Offsets of zero point into the descriptor
        assert!(record_ranges(&node, 1).is_err());
    }

    #[test]
    fn test_node_size_validation() {
        let mut header = HeaderRecord::parse(&[0u8; 106]).unwrap();
        header.node_size = 4096;
        assert!(header.validate_node_size().is_ok());
        header.node_size = 1000;
        assert!(header.validate_node_size().is_err());
        header.node_size = 256;
        assert!(header.validate_node_size().is_err());
    }
}

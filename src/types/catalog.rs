//! Format-neutral catalog keys and leaf records

use super::{Cnid, ForkData, ForkType};
use crate::strings::{compare_binary, compare_case_folding};
use std::cmp::Ordering;

/// How catalog names are ordered within a tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameOrdering {
    /// Unsigned comparison of the encoded units
    Binary,
    /// HFS+ case-insensitive "fast Unicode compare"
    CaseFolding,
}

/// A catalog name in its on-disk encoding
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogName {
    /// HFS: bytes in the volume's legacy script
    Bytes(Vec<u8>),
    /// HFS+/HFSX: UTF-16 units, canonically decomposed
    Unicode(Vec<u16>),
}

impl CatalogName {
    /// The empty name used by thread keys and listing start positions
    pub fn empty_like(&self) -> Self {
        match self {
            CatalogName::Bytes(_) => CatalogName::Bytes(Vec::new()),
            CatalogName::Unicode(_) => CatalogName::Unicode(Vec::new()),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            CatalogName::Bytes(b) => b.is_empty(),
            CatalogName::Unicode(u) => u.is_empty(),
        }
    }

    /// Compare two names under `ordering`
    ///
    /// HFS byte names always compare binary. Mixing encodings never happens
    /// within one volume; it orders byte names first.
    pub fn compare(&self, other: &CatalogName, ordering: NameOrdering) -> Ordering {
        match (self, other) {
            (CatalogName::Bytes(a), CatalogName::Bytes(b)) => a.cmp(b),
            (CatalogName::Unicode(a), CatalogName::Unicode(b)) => match ordering {
                NameOrdering::Binary => compare_binary(a, b),
                NameOrdering::CaseFolding => compare_case_folding(a, b),
            },
            (CatalogName::Bytes(_), CatalogName::Unicode(_)) => Ordering::Less,
            (CatalogName::Unicode(_), CatalogName::Bytes(_)) => Ordering::Greater,
        }
    }
}

/// Catalog B-tree key: (parent CNID, name)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogKey {
    pub parent_id: Cnid,
    pub name: CatalogName,
}

impl CatalogKey {
    pub fn new(parent_id: Cnid, name: CatalogName) -> Self {
        Self { parent_id, name }
    }

    pub fn compare(&self, other: &CatalogKey, ordering: NameOrdering) -> Ordering {
        self.parent_id
            .cmp(&other.parent_id)
            .then_with(|| self.name.compare(&other.name, ordering))
    }
}

/// Finder type/creator and flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FinderInfo {
    pub file_type: [u8; 4],
    pub creator: [u8; 4],
    pub flags: u16,
}

impl FinderInfo {
    /// Parse the first 10 bytes of an FInfo/FileInfo record
    pub fn parse(data: &[u8]) -> Self {
        let mut file_type = [0u8; 4];
        let mut creator = [0u8; 4];
        file_type.copy_from_slice(&data[0..4]);
        creator.copy_from_slice(&data[4..8]);
        Self {
            file_type,
            creator,
            flags: u16::from_be_bytes([data[8], data[9]]),
        }
    }

    /// Four-character code rendered for display
    pub fn type_code(&self) -> String {
        self.file_type.iter().map(|&b| crate::strings::MacRoman::decode_byte(b)).collect()
    }

    pub fn creator_code(&self) -> String {
        self.creator.iter().map(|&b| crate::strings::MacRoman::decode_byte(b)).collect()
    }
}

/// BSD ownership and mode (HFS+ only)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BsdInfo {
    pub owner_id: u32,
    pub group_id: u32,
    pub admin_flags: u8,
    pub owner_flags: u8,
    pub file_mode: u16,
    /// Inode number, link count or device, depending on the file type
    pub special: u32,
}

/// Timestamps in Mac seconds since 1904
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogDates {
    pub created: u32,
    pub content_modified: u32,
    /// HFS+ only
    pub attributes_modified: u32,
    /// HFS+ only
    pub accessed: u32,
    pub backed_up: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderRecord {
    pub folder_id: Cnid,
    pub flags: u16,
    /// Number of direct children
    pub valence: u32,
    pub dates: CatalogDates,
    pub bsd: Option<BsdInfo>,
    pub text_encoding: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub file_id: Cnid,
    pub flags: u16,
    pub dates: CatalogDates,
    pub finder_info: FinderInfo,
    pub bsd: Option<BsdInfo>,
    pub text_encoding: u32,
    pub data_fork: ForkData,
    pub resource_fork: ForkData,
}

impl FileRecord {
    pub fn fork(&self, fork_type: ForkType) -> &ForkData {
        match fork_type {
            ForkType::Data => &self.data_fork,
            ForkType::Resource => &self.resource_fork,
        }
    }
}

/// Maps a CNID back to its parent and name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadRecord {
    pub parent_id: Cnid,
    pub name: CatalogName,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogBody {
    Folder(FolderRecord),
    File(FileRecord),
    FolderThread(ThreadRecord),
    FileThread(ThreadRecord),
}

/// A catalog leaf record with its key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogLeaf {
    pub key: CatalogKey,
    pub body: CatalogBody,
}

impl CatalogLeaf {
    /// CNID of the folder or file this record describes
    pub fn cnid(&self) -> Option<Cnid> {
        match &self.body {
            CatalogBody::Folder(f) => Some(f.folder_id),
            CatalogBody::File(f) => Some(f.file_id),
            _ => None,
        }
    }

    pub fn is_thread(&self) -> bool {
        matches!(self.body, CatalogBody::FolderThread(_) | CatalogBody::FileThread(_))
    }

    pub fn is_folder(&self) -> bool {
        matches!(self.body, CatalogBody::Folder(_))
    }

    pub fn as_file(&self) -> Option<&FileRecord> {
        match &self.body {
            CatalogBody::File(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_folder(&self) -> Option<&FolderRecord> {
        match &self.body {
            CatalogBody::Folder(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_thread(&self) -> Option<&ThreadRecord> {
        match &self.body {
            CatalogBody::FolderThread(t) | CatalogBody::FileThread(t) => Some(t),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unicode(s: &str) -> CatalogName {
        CatalogName::Unicode(s.encode_utf16().collect())
    }

    #[test]
    fn test_key_order_parent_first() {
        let a = CatalogKey::new(2, unicode("zzz"));
        let b = CatalogKey::new(3, unicode("aaa"));
        assert_eq!(a.compare(&b, NameOrdering::CaseFolding), Ordering::Less);
    }

    #[test]
    fn test_empty_name_sorts_first() {
        let thread = CatalogKey::new(16, unicode(""));
        let child = CatalogKey::new(16, unicode("a"));
        assert_eq!(thread.compare(&child, NameOrdering::Binary), Ordering::Less);
        assert_eq!(thread.compare(&child, NameOrdering::CaseFolding), Ordering::Less);
    }

    #[test]
    fn test_case_folding_vs_binary() {
        let upper = CatalogKey::new(2, unicode("Applications"));
        let lower = CatalogKey::new(2, unicode("applications"));
        assert_eq!(upper.compare(&lower, NameOrdering::CaseFolding), Ordering::Equal);
        assert_eq!(upper.compare(&lower, NameOrdering::Binary), Ordering::Less);
    }

    #[test]
    fn test_byte_names_compare_unsigned() {
        let a = CatalogName::Bytes(vec![0x41]);
        let b = CatalogName::Bytes(vec![0xC0]);
        assert_eq!(a.compare(&b, NameOrdering::Binary), Ordering::Less);
    }
}

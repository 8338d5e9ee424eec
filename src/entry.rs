//! File entry structures for volume browsing

use crate::types::catalog::{CatalogBody, CatalogLeaf};
use crate::types::{mac_time_to_unix, Cnid, ForkData};

/// A single file or folder on a volume
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// File/folder name
    pub name: String,
    /// Full path from root (e.g., "/System Folder/Finder")
    pub path: String,
    /// Entry type (file or directory)
    pub entry_type: EntryType,
    /// Data fork size in bytes (0 for directories)
    pub size: u64,
    /// Resource fork size in bytes
    pub resource_size: u64,
    /// Catalog node ID
    pub location: Cnid,
    /// Content modification time, Unix seconds
    pub modified: i64,
    /// Four-character type and creator codes of files
    pub type_creator: Option<(String, String)>,
    /// Data fork extents of files, so reads need no catalog lookup
    pub data_fork: Option<ForkData>,
    /// Children entries (only populated for directories when expanded)
    pub children: Option<Vec<FileEntry>>,
}

/// Type of filesystem entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    File,
    Directory,
}

impl FileEntry {
    /// Build an entry from a file or folder record
    ///
    /// Thread records describe no entry and yield `None`.
    pub fn from_leaf(name: String, path: String, leaf: &CatalogLeaf) -> Option<Self> {
        match &leaf.body {
            CatalogBody::File(file) => Some(Self {
                name,
                path,
                entry_type: EntryType::File,
                size: file.data_fork.logical_size,
                resource_size: file.resource_fork.logical_size,
                location: file.file_id,
                modified: mac_time_to_unix(file.dates.content_modified),
                type_creator: Some((file.finder_info.type_code(), file.finder_info.creator_code())),
                data_fork: Some(file.data_fork.clone()),
                children: None,
            }),
            CatalogBody::Folder(folder) => Some(Self {
                name,
                path,
                entry_type: EntryType::Directory,
                size: 0,
                resource_size: 0,
                location: folder.folder_id,
                modified: mac_time_to_unix(folder.dates.content_modified),
                type_creator: None,
                data_fork: None,
                children: None,
            }),
            _ => None,
        }
    }

    /// Create root directory entry
    pub fn root(location: Cnid) -> Self {
        Self {
            name: String::new(),
            path: "/".to_string(),
            entry_type: EntryType::Directory,
            size: 0,
            resource_size: 0,
            location,
            modified: 0,
            type_creator: None,
            data_fork: None,
            children: None,
        }
    }

    /// Path of a child named `name` inside this directory
    pub fn child_path(&self, name: &str) -> String {
        if self.path.ends_with('/') {
            format!("{}{}", self.path, name)
        } else {
            format!("{}/{}", self.path, name)
        }
    }

    pub fn is_directory(&self) -> bool {
        self.entry_type == EntryType::Directory
    }

    pub fn is_file(&self) -> bool {
        self.entry_type == EntryType::File
    }

    /// Get a display-friendly size string
    pub fn size_string(&self) -> String {
        if self.is_directory() {
            return String::new();
        }

        if self.size < 1024 {
            format!("{} B", self.size)
        } else if self.size < 1024 * 1024 {
            format!("{:.1} KB", self.size as f64 / 1024.0)
        } else if self.size < 1024 * 1024 * 1024 {
            format!("{:.1} MB", self.size as f64 / (1024.0 * 1024.0))
        } else {
            format!("{:.2} GB", self.size as f64 / (1024.0 * 1024.0 * 1024.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_path() {
        let root = FileEntry::root(2);
        assert_eq!(root.child_path("Documents"), "/Documents");
        let mut docs = FileEntry::root(17);
        docs.path = "/Documents".into();
        assert_eq!(docs.child_path("Letter"), "/Documents/Letter");
    }

    #[test]
    fn test_size_string() {
        let mut entry = FileEntry::root(20);
        assert_eq!(entry.size_string(), "");
        entry.entry_type = EntryType::File;
        entry.size = 512;
        assert_eq!(entry.size_string(), "512 B");
        entry.size = 3 * 1024 * 1024 / 2;
        assert_eq!(entry.size_string(), "1.5 MB");
    }
}

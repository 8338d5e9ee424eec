//! Filesystem trait for volume browsing

use crate::entry::{EntryType, FileEntry};
use crate::error::{HfsError, Result};
use crate::fork::ForkReader;
use crate::types::ForkType;
use crate::volume::{Volume, ROOT_FOLDER_ID};

/// Entry-oriented view of a volume
pub trait Filesystem: Send {
    /// Get the root directory entry
    fn root(&mut self) -> Result<FileEntry>;

    /// List contents of a directory
    fn list_directory(&mut self, entry: &FileEntry) -> Result<Vec<FileEntry>>;

    /// Read entire data fork contents
    fn read_file(&mut self, entry: &FileEntry) -> Result<Vec<u8>>;

    /// Read partial data fork contents, clamped to the fork's end
    fn read_file_range(&mut self, entry: &FileEntry, offset: u64, length: usize) -> Result<Vec<u8>>;

    /// Get the volume label/name
    fn volume_name(&self) -> Option<&str>;
}

impl Volume {
    fn open_entry_data(&mut self, entry: &FileEntry) -> Result<ForkReader<'_>> {
        if entry.entry_type != EntryType::File {
            return Err(HfsError::NotAFile(entry.path.clone()));
        }
        match &entry.data_fork {
            Some(fork) => self.open_fork_data(entry.location, ForkType::Data, fork),
            None => self.open_file(&entry.path, ForkType::Data),
        }
    }
}

impl Filesystem for Volume {
    fn root(&mut self) -> Result<FileEntry> {
        let leaf = self.entry_at_path("/")?;
        let mut root = FileEntry::from_leaf(String::new(), "/".to_string(), &leaf)
            .unwrap_or_else(|| FileEntry::root(ROOT_FOLDER_ID));
        root.name = Volume::volume_name(self).to_string();
        Ok(root)
    }

    fn list_directory(&mut self, entry: &FileEntry) -> Result<Vec<FileEntry>> {
        if entry.entry_type != EntryType::Directory {
            return Err(HfsError::NotADirectory(entry.path.clone()));
        }

        let mut entries = Vec::new();
        for leaf in self.list_children(entry.location)? {
            let name = self.display_name(&leaf)?;
            let path = entry.child_path(&name);
            if let Some(child) = FileEntry::from_leaf(name, path, &leaf) {
                entries.push(child);
            }
        }
        log::debug!("Listed {} entries in {}", entries.len(), entry.path);
        Ok(entries)
    }

    fn read_file(&mut self, entry: &FileEntry) -> Result<Vec<u8>> {
        self.open_entry_data(entry)?.read_all()
    }

    fn read_file_range(&mut self, entry: &FileEntry, offset: u64, length: usize) -> Result<Vec<u8>> {
        let mut reader = self.open_entry_data(entry)?;
        let available = reader.len().saturating_sub(offset);
        let actual_length = std::cmp::min(length as u64, available) as usize;
        if actual_length == 0 {
            return Ok(Vec::new());
        }
        reader.read_at(offset, actual_length)
    }

    fn volume_name(&self) -> Option<&str> {
        let name = Volume::volume_name(self);
        if name.is_empty() {
            None
        } else {
            Some(name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ImageBuilder;

    #[test]
    fn test_browse_tree() {
        let mut image = ImageBuilder::hfs_plus(512, 512);
        let folder = image.add_folder(2, "System Folder");
        image.add_file_with_data(folder, "Finder", &[0x4E; 2000]);
        image.add_file_with_forks(2, "Icon", b"", b"rsrc");
        let mut volume = image.open();

        let root = volume.root().unwrap();
        assert_eq!(root.name, "Test Volume");
        assert_eq!(Filesystem::volume_name(&volume), Some("Test Volume"));

        let top = volume.list_directory(&root).unwrap();
        assert_eq!(top.len(), 2);
        let icon = top.iter().find(|e| e.name == "Icon").unwrap();
        assert_eq!((icon.size, icon.resource_size), (0, 4));
        assert!(volume.read_file(icon).unwrap().is_empty());

        let system = top.iter().find(|e| e.is_directory()).unwrap();
        let inner = volume.list_directory(system).unwrap();
        assert_eq!(inner[0].path, "/System Folder/Finder");
        assert_eq!(volume.read_file(&inner[0]).unwrap().len(), 2000);
        assert_eq!(volume.read_file_range(&inner[0], 1990, 100).unwrap().len(), 10);
        assert!(volume.read_file_range(&inner[0], 5000, 10).unwrap().is_empty());

        assert!(matches!(volume.list_directory(&inner[0]), Err(HfsError::NotADirectory(_))));
        assert!(matches!(volume.read_file(system), Err(HfsError::NotAFile(_))));
    }

    #[test]
    fn test_read_hfs_file_without_thread() {
        let mut image = ImageBuilder::hfs(512);
        image.set_file_threads(false);
        image.add_file_with_data(2, "Letter", b"Dear reader");
        let mut volume = image.open();

        let root = volume.root().unwrap();
        let entries = volume.list_directory(&root).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(volume.read_file(&entries[0]).unwrap(), b"Dear reader");
        assert_eq!(volume.read_file_range(&entries[0], 5, 100).unwrap(), b"reader");

        // Entries built by hand fall back to their path
        let mut by_path = entries[0].clone();
        by_path.data_fork = None;
        assert_eq!(volume.read_file(&by_path).unwrap(), b"Dear reader");
    }
}

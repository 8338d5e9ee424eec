//! Catalog file
//!
//! Every file and folder has a record keyed by (parent CNID, name), and a
//! thread record keyed by (its own CNID, empty name) pointing back at that
//! key. Children of a folder are therefore contiguous in the leaf chain,
//! right after the folder's thread record.

use crate::btree::{BTreeFile, LeafIter, TreeSchema};
use crate::error::{HfsError, Result};
use crate::extents::{ExtentsOverflowFile, ForkMap, VolumeIo};
use crate::format::VolumeFormat;
use crate::types::catalog::{CatalogBody, CatalogKey, CatalogLeaf, CatalogName, NameOrdering, ThreadRecord};
use crate::types::{Cnid, ForkData, ForkType, ReservedCnid};
use std::cmp::Ordering;
use std::sync::Arc;

/// Key and record shapes of the catalog tree
pub struct CatalogSchema {
    format: Arc<dyn VolumeFormat>,
    ordering: NameOrdering,
    block_size: u32,
}

impl TreeSchema for CatalogSchema {
    type Key = CatalogKey;
    type Record = CatalogLeaf;

    fn parse_key(&self, data: &[u8]) -> Result<(CatalogKey, usize)> {
        self.format.parse_catalog_key(data)
    }

    fn parse_record(&self, key: CatalogKey, data: &[u8]) -> Result<CatalogLeaf> {
        Ok(CatalogLeaf {
            key,
            body: self.format.parse_catalog_body(data, self.block_size)?,
        })
    }

    fn compare(&self, a: &CatalogKey, b: &CatalogKey) -> Ordering {
        a.compare(b, self.ordering)
    }
}

pub struct CatalogFile {
    tree: BTreeFile,
    schema: CatalogSchema,
}

impl CatalogFile {
    /// Open the catalog tree, mapping its whole fork up front
    pub fn open(
        fork: &ForkData,
        format: Arc<dyn VolumeFormat>,
        io: &mut VolumeIo,
        overflow: &ExtentsOverflowFile,
        max_node_visits: Option<u64>,
    ) -> Result<Self> {
        let geometry = *io.geometry();
        let file_id = format.reserved_cnid(ReservedCnid::CatalogFile).unwrap_or(4);
        let mut map = ForkMap::from_fork_data(file_id, ForkType::Data, fork, &geometry)?;
        overflow.complete(io, &mut map)?;

        let tree = BTreeFile::open("catalog", map, io, format.as_ref(), max_node_visits)?;
        let ordering = format.name_ordering(tree.header())?;
        log::debug!("Catalog names compare {:?}", ordering);
        Ok(Self {
            tree,
            schema: CatalogSchema {
                format,
                ordering,
                block_size: geometry.block_size,
            },
        })
    }

    pub fn tree(&self) -> &BTreeFile {
        &self.tree
    }

    pub fn ordering(&self) -> NameOrdering {
        self.schema.ordering
    }

    /// Record stored under exactly this key
    pub fn find(&self, io: &mut VolumeIo, key: &CatalogKey) -> Result<Option<CatalogLeaf>> {
        self.tree.find(io, &self.schema, key)
    }

    /// File or folder record named `name` inside `parent`
    pub fn lookup(&self, io: &mut VolumeIo, parent: Cnid, name: &CatalogName) -> Result<Option<CatalogLeaf>> {
        let key = CatalogKey::new(parent, name.clone());
        Ok(self.find(io, &key)?.filter(|leaf| !leaf.is_thread()))
    }

    /// Thread record of `cnid`
    pub fn thread(&self, io: &mut VolumeIo, cnid: Cnid) -> Result<Option<ThreadRecord>> {
        let key = CatalogKey::new(cnid, self.schema.format.empty_name());
        match self.find(io, &key)? {
            None => Ok(None),
            Some(CatalogLeaf {
                body: CatalogBody::FolderThread(thread) | CatalogBody::FileThread(thread),
                ..
            }) => Ok(Some(thread)),
            Some(other) => Err(HfsError::corrupt(format!(
                "record keyed as the thread of CNID {} is not a thread ({:?})",
                cnid, other.body
            ))),
        }
    }

    /// File or folder record of `cnid`, found through its thread
    pub fn lookup_cnid(&self, io: &mut VolumeIo, cnid: Cnid) -> Result<Option<CatalogLeaf>> {
        let thread = match self.thread(io, cnid)? {
            Some(thread) => thread,
            None => return Ok(None),
        };
        let leaf = self.lookup(io, thread.parent_id, &thread.name)?;
        match leaf {
            Some(leaf) if leaf.cnid() != Some(cnid) => Err(HfsError::corrupt(format!(
                "thread of CNID {} points at a record for CNID {:?}",
                cnid,
                leaf.cnid()
            ))),
            other => Ok(other),
        }
    }

    /// File and folder records whose parent is `cnid`, in catalog order
    pub fn children(&self, io: &mut VolumeIo, cnid: Cnid) -> Result<Vec<CatalogLeaf>> {
        let start = CatalogKey::new(cnid, self.schema.format.empty_name());
        let mut children = Vec::new();
        for leaf in self.tree.seek(io, &self.schema, &start)? {
            let leaf = leaf?;
            if leaf.key.parent_id != cnid {
                break;
            }
            if !leaf.is_thread() {
                children.push(leaf);
            }
        }
        Ok(children)
    }

    /// Every leaf record, threads included
    pub fn leaves<'a>(&'a self, io: &'a mut VolumeIo) -> LeafIter<'a, CatalogSchema> {
        self.tree.leaves(io, &self.schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::format_for;
    use crate::strings::MacRoman;
    use crate::testing::ImageBuilder;

    fn open(image: &ImageBuilder) -> (VolumeIo, CatalogFile, Arc<dyn VolumeFormat>) {
        let mut io = image.volume_io();
        let header = image.volume_header();
        let format = format_for(image.kind(), Arc::new(MacRoman));
        let overflow = ExtentsOverflowFile::open(&header.extents_file, format.clone(), &mut io, None).unwrap();
        let catalog = CatalogFile::open(&header.catalog_file, format.clone(), &mut io, &overflow, None).unwrap();
        (io, catalog, format)
    }

    fn name(format: &Arc<dyn VolumeFormat>, s: &str) -> CatalogName {
        format.encode_name(s).unwrap()
    }

    #[test]
    fn test_lookup_every_inserted_name_multi_level() {
        let mut image = ImageBuilder::hfs_plus(512, 512);
        image.set_max_records_per_node(3);
        let names: Vec<String> = (0..40).map(|i| format!("file {:02}", i)).collect();
        let ids: Vec<Cnid> = names.iter().map(|n| image.add_file_with_data(2, n, n.as_bytes())).collect();
        let (mut io, catalog, format) = open(&image);
        assert!(catalog.tree().header().tree_depth >= 3);

        for (n, id) in names.iter().zip(&ids) {
            let leaf = catalog.lookup(&mut io, 2, &name(&format, n)).unwrap().unwrap();
            assert_eq!(leaf.cnid(), Some(*id));
        }
        assert!(catalog.lookup(&mut io, 2, &name(&format, "file 99")).unwrap().is_none());
        assert!(catalog.lookup(&mut io, 7, &name(&format, "file 01")).unwrap().is_none());
    }

    #[test]
    fn test_case_folding_lookup() {
        let mut image = ImageBuilder::hfs_plus(512, 512);
        let id = image.add_folder(2, "Documents");
        let (mut io, catalog, format) = open(&image);
        assert_eq!(catalog.ordering(), NameOrdering::CaseFolding);
        let leaf = catalog.lookup(&mut io, 2, &name(&format, "DOCUMENTS")).unwrap().unwrap();
        assert_eq!(leaf.cnid(), Some(id));
    }

    #[test]
    fn test_binary_hfsx_is_case_sensitive() {
        let mut image = ImageBuilder::hfsx(512, 512, crate::types::btree::KEY_COMPARE_BINARY);
        let lower = image.add_file_with_data(2, "readme", b"lower");
        let upper = image.add_file_with_data(2, "README", b"upper");
        let (mut io, catalog, format) = open(&image);
        assert_eq!(catalog.ordering(), NameOrdering::Binary);
        assert_eq!(catalog.lookup(&mut io, 2, &name(&format, "readme")).unwrap().unwrap().cnid(), Some(lower));
        assert_eq!(catalog.lookup(&mut io, 2, &name(&format, "README")).unwrap().unwrap().cnid(), Some(upper));
        assert!(catalog.lookup(&mut io, 2, &name(&format, "ReadMe")).unwrap().is_none());
    }

    #[test]
    fn test_children_skip_threads_and_stop_at_next_parent() {
        let mut image = ImageBuilder::hfs_plus(512, 512);
        image.set_max_records_per_node(2);
        let folder = image.add_folder(2, "dir");
        for i in 0..7 {
            image.add_file_with_data(folder, &format!("child {}", i), b"x");
        }
        image.add_file_with_data(2, "sibling", b"y");
        let (mut io, catalog, _) = open(&image);

        let children = catalog.children(&mut io, folder).unwrap();
        assert_eq!(children.len(), 7);
        assert!(children.iter().all(|c| c.key.parent_id == folder && !c.is_thread()));
        // root holds "dir" and "sibling"
        assert_eq!(catalog.children(&mut io, 2).unwrap().len(), 2);
        assert!(catalog.children(&mut io, 9999).unwrap().is_empty());
    }

    #[test]
    fn test_lookup_cnid_via_thread() {
        let mut image = ImageBuilder::hfs(512);
        let folder = image.add_folder(2, "System Folder");
        let file = image.add_file_with_data(folder, "Finder", b"finder");
        let (mut io, catalog, _) = open(&image);

        let leaf = catalog.lookup_cnid(&mut io, file).unwrap().unwrap();
        assert_eq!(leaf.key.parent_id, folder);
        assert!(leaf.as_file().is_some());
        let thread = catalog.thread(&mut io, folder).unwrap().unwrap();
        assert_eq!(thread.parent_id, 2);
        assert!(catalog.lookup_cnid(&mut io, 4242).unwrap().is_none());
    }

    #[test]
    fn test_leaf_walk_is_sorted() {
        let mut image = ImageBuilder::hfs_plus(512, 512);
        image.set_max_records_per_node(4);
        for n in ["zeta", "Alpha", "beta", "Gamma", "delta"] {
            image.add_file_with_data(2, n, b"");
        }
        let (mut io, catalog, _) = open(&image);
        let ordering = catalog.ordering();
        let keys: Vec<CatalogKey> = catalog.leaves(&mut io).map(|l| l.unwrap().key).collect();
        assert_eq!(keys.len() as u32, catalog.tree().header().leaf_records);
        assert!(keys.windows(2).all(|w| w[0].compare(&w[1], ordering) == Ordering::Less));
    }
}

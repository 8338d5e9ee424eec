//! Open HFS, HFS+ and HFSX volumes
//!
//! [`Volume`] ties the pieces together: it reads the volume header through
//! the format's capability set, opens the extents-overflow and catalog trees
//! and the allocation bitmap, and answers name, path and fork queries.

use crate::allocation::AllocationFile;
use crate::catalog::CatalogFile;
use crate::config::{CacheConfig, ReaderConfig};
use crate::error::{HfsError, Result};
use crate::extents::{self, ExtentsOverflowFile, ForkMap, Geometry, PhysicalRange, VolumeIo};
use crate::fork::ForkReader;
use crate::format::{format_for, FormatKind, VolumeFormat, VOLUME_HEADER_OFFSET};
use crate::io::{BlockCache, ByteSource, CacheStats, SubRangeSource};
use crate::strings::StringCodec;
use crate::types::catalog::{CatalogLeaf, CatalogName, FileRecord, ThreadRecord};
use crate::types::extents::ExtentKey;
use crate::types::hfs::MasterDirectoryBlock;
use crate::types::volume::{BitmapLocation, VolumeHeader};
use crate::types::{Cnid, ExtentDescriptor, ForkData, ForkType, ReservedCnid};
use std::collections::HashSet;
use std::sync::Arc;

/// CNID of the root folder
pub const ROOT_FOLDER_ID: Cnid = 2;
/// Parent CNID of the root folder
pub const ROOT_PARENT_ID: Cnid = 1;

/// An open, read-only HFS-family volume
pub struct Volume {
    format: Arc<dyn VolumeFormat>,
    header: VolumeHeader,
    io: VolumeIo,
    extents: ExtentsOverflowFile,
    catalog: CatalogFile,
    allocation: AllocationFile,
    config: ReaderConfig,
    volume_name: String,
    closed: bool,
}

impl std::fmt::Debug for Volume {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Volume")
            .field("kind", &self.format.kind())
            .field("name", &self.volume_name)
            .field("geometry", self.io.geometry())
            .finish()
    }
}

fn with_cache(source: Box<dyn ByteSource>, cache: &CacheConfig) -> Result<Box<dyn ByteSource>> {
    if !cache.enabled {
        return Ok(source);
    }
    Ok(Box::new(BlockCache::new(source, cache.block_size, cache.capacity)?))
}

impl Volume {
    /// Open a volume of a known format
    ///
    /// Fails with a signature error if the header at offset 1024 is not the
    /// one `kind` expects.
    pub fn open(kind: FormatKind, source: Box<dyn ByteSource>, config: &ReaderConfig) -> Result<Self> {
        let codec = config.hfs_codec()?;
        let source = with_cache(source, &config.cache)?;
        Self::from_source(kind, source, config, codec)
    }

    /// Open whatever HFS-family volume the signature at offset 1024 names
    ///
    /// An HFS wrapper around an embedded HFS+ volume opens the embedded one.
    pub fn open_detected(mut source: Box<dyn ByteSource>, config: &ReaderConfig) -> Result<Self> {
        let raw = source.read_bytes(VOLUME_HEADER_OFFSET, 512)?;
        let kind = FormatKind::detect(&raw).ok_or_else(|| {
            HfsError::Unsupported(format!(
                "no HFS, HFS+ or HFSX signature at offset {} (found 0x{:02X}{:02X})",
                VOLUME_HEADER_OFFSET, raw[0], raw[1]
            ))
        })?;

        if kind == FormatKind::Hfs {
            let mdb = MasterDirectoryBlock::parse(&raw)?;
            if let Some(embedded) = mdb.to_volume_header().embedded {
                let inner_kind = FormatKind::from_signature(embedded.signature)
                    .filter(|k| *k != FormatKind::Hfs)
                    .ok_or_else(|| {
                        HfsError::Unsupported(format!(
                            "HFS wrapper embeds a volume with signature 0x{:04X}",
                            embedded.signature
                        ))
                    })?;
                let block_size = u64::from(mdb.alloc_block_size);
                let offset = u64::from(mdb.first_alloc_block) * 512 + u64::from(embedded.start_block) * block_size;
                let length = u64::from(embedded.block_count) * block_size;
                log::info!(
                    "HFS wrapper embeds an {} volume at byte {} ({} bytes)",
                    inner_kind,
                    offset,
                    length
                );
                let inner: Box<dyn ByteSource> = Box::new(SubRangeSource::new(source, offset, length)?);
                return Self::open(inner_kind, inner, config);
            }
        }
        Self::open(kind, source, config)
    }

    fn from_source(
        kind: FormatKind,
        mut source: Box<dyn ByteSource>,
        config: &ReaderConfig,
        codec: Arc<dyn StringCodec>,
    ) -> Result<Self> {
        let format = format_for(kind, codec);
        let raw = source.read_bytes(VOLUME_HEADER_OFFSET, 512)?;
        let header = format.parse_volume_header(&raw)?;

        let geometry = Geometry {
            block_size: header.block_size,
            allocation_start: header.allocation_start,
            total_blocks: header.total_blocks,
        };
        if let Some(length) = source.length() {
            let end = geometry.block_offset(u64::from(header.total_blocks));
            if end > length {
                log::warn!(
                    "{} volume claims {} bytes but the source holds {}; reads past the end will fail",
                    kind,
                    end,
                    length
                );
            }
        }

        let mut io = VolumeIo::new(source, geometry);
        let extents = ExtentsOverflowFile::open(&header.extents_file, format.clone(), &mut io, config.max_node_visits)?;
        let catalog = CatalogFile::open(&header.catalog_file, format.clone(), &mut io, &extents, config.max_node_visits)?;
        let allocation = AllocationFile::open(&header, &mut io, &extents)?;

        let volume_name = match &header.raw_volume_name {
            Some(raw) => format.decode_name(&CatalogName::Bytes(raw.clone()))?,
            None => match catalog.thread(&mut io, ROOT_FOLDER_ID)? {
                Some(thread) => format.decode_name(&thread.name)?,
                None => {
                    log::warn!("Root folder has no thread record; volume name unknown");
                    String::new()
                }
            },
        };

        if header.is_journaled() {
            log::warn!(
                "Volume '{}' is journaled (journal info block {}); the journal is not replayed",
                volume_name,
                header.journal_info_block
            );
        }
        log::info!(
            "Opened {} volume '{}': {} blocks of {} bytes, {} free, {} files, {} folders",
            kind,
            volume_name,
            header.total_blocks,
            header.block_size,
            header.free_blocks,
            header.file_count,
            header.folder_count
        );

        Ok(Self {
            format,
            header,
            io,
            extents,
            catalog,
            allocation,
            config: config.clone(),
            volume_name,
            closed: false,
        })
    }

    /// Reopen the same source with a different HFS name codec
    pub fn with_string_codec(self, codec: Arc<dyn StringCodec>) -> Result<Self> {
        let kind = self.format.kind();
        let config = self.config.clone();
        let source = self.io.into_source();
        Self::from_source(kind, source, &config, codec)
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            return Err(HfsError::usage("volume is closed"));
        }
        Ok(())
    }

    pub fn header(&self) -> &VolumeHeader {
        &self.header
    }

    pub fn format_kind(&self) -> FormatKind {
        self.format.kind()
    }

    pub fn format(&self) -> &dyn VolumeFormat {
        self.format.as_ref()
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn geometry(&self) -> &Geometry {
        self.io.geometry()
    }

    pub fn volume_name(&self) -> &str {
        &self.volume_name
    }

    pub fn catalog(&self) -> &CatalogFile {
        &self.catalog
    }

    /// Decode a record's name for display
    pub fn display_name(&self, leaf: &CatalogLeaf) -> Result<String> {
        self.format.decode_name(&leaf.key.name)
    }

    /// File or folder named `name` inside folder `parent`
    pub fn lookup(&mut self, parent: Cnid, name: &str) -> Result<Option<CatalogLeaf>> {
        self.ensure_open()?;
        let key = self.format.catalog_key(parent, name)?;
        self.catalog.lookup(&mut self.io, key.parent_id, &key.name)
    }

    /// Lookup by an already encoded name
    pub fn lookup_name(&mut self, parent: Cnid, name: &CatalogName) -> Result<Option<CatalogLeaf>> {
        self.ensure_open()?;
        self.catalog.lookup(&mut self.io, parent, name)
    }

    /// File or folder record of `cnid`
    pub fn lookup_cnid(&mut self, cnid: Cnid) -> Result<Option<CatalogLeaf>> {
        self.ensure_open()?;
        self.catalog.lookup_cnid(&mut self.io, cnid)
    }

    pub fn thread(&mut self, cnid: Cnid) -> Result<Option<ThreadRecord>> {
        self.ensure_open()?;
        self.catalog.thread(&mut self.io, cnid)
    }

    /// Record at a slash-separated path; "/" is the root folder
    pub fn entry_at_path(&mut self, path: &str) -> Result<CatalogLeaf> {
        self.ensure_open()?;
        let mut current = ROOT_FOLDER_ID;
        let mut walked = String::new();
        let mut leaf = None;

        for component in path.split('/').filter(|c| !c.is_empty()) {
            if let Some(previous) = &leaf {
                if !CatalogLeaf::is_folder(previous) {
                    return Err(HfsError::NotADirectory(walked));
                }
            }
            walked.push('/');
            walked.push_str(component);

            let key = self.format.catalog_key(current, component)?;
            let found = self
                .catalog
                .lookup(&mut self.io, key.parent_id, &key.name)?
                .ok_or_else(|| HfsError::NotFound(walked.clone()))?;
            current = found
                .cnid()
                .ok_or_else(|| HfsError::corrupt(format!("{} has no CNID", walked)))?;
            leaf = Some(found);
        }

        match leaf {
            Some(leaf) => Ok(leaf),
            None => self
                .catalog
                .lookup_cnid(&mut self.io, ROOT_FOLDER_ID)?
                .ok_or_else(|| HfsError::corrupt("root folder record is missing")),
        }
    }

    /// CNID at a slash-separated path
    pub fn resolve_path(&mut self, path: &str) -> Result<Cnid> {
        if path.split('/').all(|c| c.is_empty()) {
            self.ensure_open()?;
            return Ok(ROOT_FOLDER_ID);
        }
        let leaf = self.entry_at_path(path)?;
        leaf.cnid()
            .ok_or_else(|| HfsError::corrupt(format!("{} resolves to a thread record", path)))
    }

    /// Files and folders directly inside folder `cnid`
    pub fn list_children(&mut self, cnid: Cnid) -> Result<Vec<CatalogLeaf>> {
        self.ensure_open()?;
        self.catalog.children(&mut self.io, cnid)
    }

    /// Every catalog leaf record, threads included, in key order
    pub fn leaf_records(&mut self) -> Result<Vec<CatalogLeaf>> {
        self.ensure_open()?;
        self.catalog.leaves(&mut self.io).collect()
    }

    /// Every extents-overflow record, in key order
    pub fn overflow_records(&mut self) -> Result<Vec<(ExtentKey, Vec<ExtentDescriptor>)>> {
        self.ensure_open()?;
        self.extents.records(&mut self.io)
    }

    /// Absolute path of `cnid`, rebuilt from thread records
    pub fn path_of(&mut self, cnid: Cnid) -> Result<String> {
        self.ensure_open()?;
        let mut components = Vec::new();
        let mut visited = HashSet::new();
        let mut current = cnid;
        while current != ROOT_FOLDER_ID {
            if !visited.insert(current) {
                return Err(HfsError::corrupt(format!("thread records of CNID {} form a loop", cnid)));
            }
            let thread = self
                .catalog
                .thread(&mut self.io, current)?
                .ok_or_else(|| HfsError::NotFound(format!("thread record of CNID {}", current)))?;
            components.push(self.format.decode_name(&thread.name)?);
            current = thread.parent_id;
            if current == ROOT_PARENT_ID {
                break;
            }
        }
        components.reverse();
        Ok(format!("/{}", components.join("/")))
    }

    fn special_fork(&self, cnid: Cnid) -> Option<Option<&ForkData>> {
        let reserved = [
            ReservedCnid::ExtentsFile,
            ReservedCnid::CatalogFile,
            ReservedCnid::AllocationFile,
            ReservedCnid::StartupFile,
            ReservedCnid::AttributesFile,
        ];
        let which = reserved
            .into_iter()
            .find(|id| self.format.reserved_cnid(*id) == Some(cnid))?;
        Some(match which {
            ReservedCnid::ExtentsFile => Some(&self.header.extents_file),
            ReservedCnid::CatalogFile => Some(&self.header.catalog_file),
            ReservedCnid::AllocationFile => match &self.header.bitmap {
                BitmapLocation::Fork(fork) => Some(fork),
                BitmapLocation::Inline { .. } => None,
            },
            ReservedCnid::StartupFile => self.header.startup_file.as_ref(),
            ReservedCnid::AttributesFile => self.header.attributes_file.as_ref(),
            _ => None,
        })
    }

    /// Extent map of a fork, starting from its inline extents
    fn fork_map(&mut self, cnid: Cnid, fork_type: ForkType) -> Result<ForkMap> {
        let geometry = *self.io.geometry();
        if let Some(special) = self.special_fork(cnid) {
            let fork = special
                .filter(|_| fork_type == ForkType::Data)
                .ok_or_else(|| HfsError::NotFound(format!("{} fork of special file CNID {}", fork_type, cnid)))?
                .clone();
            return ForkMap::from_fork_data(cnid, fork_type, &fork, &geometry);
        }

        let leaf = self
            .catalog
            .lookup_cnid(&mut self.io, cnid)?
            .ok_or_else(|| HfsError::NotFound(format!("CNID {}", cnid)))?;
        let file = leaf
            .as_file()
            .ok_or_else(|| HfsError::NotAFile(format!("CNID {}", cnid)))?;
        ForkMap::from_fork_data(cnid, fork_type, file.fork(fork_type), &geometry)
    }

    /// Physical byte ranges holding `length` bytes at `offset` of a fork
    pub fn resolve_extents(&mut self, cnid: Cnid, fork_type: ForkType, offset: u64, length: u64) -> Result<Vec<PhysicalRange>> {
        self.ensure_open()?;
        let mut map = self.fork_map(cnid, fork_type)?;
        extents::resolve(&mut self.io, &self.extents, &mut map, offset, length)
    }

    /// Fill `buf` from `offset` of a fork, extending its map as needed
    pub(crate) fn read_mapped(&mut self, map: &mut ForkMap, offset: u64, buf: &mut [u8]) -> Result<()> {
        self.ensure_open()?;
        let ranges = extents::resolve(&mut self.io, &self.extents, map, offset, buf.len() as u64)?;
        self.io.read_ranges(&ranges, buf)
    }

    /// Open a fork for reading
    ///
    /// Non-special CNIDs are found through their thread record. Use
    /// [`Volume::open_record_fork`] when the file record is already at hand.
    pub fn open_fork(&mut self, cnid: Cnid, fork_type: ForkType) -> Result<ForkReader<'_>> {
        self.ensure_open()?;
        let map = self.fork_map(cnid, fork_type)?;
        self.open_map(map)
    }

    /// Open a fork of a file record, without a catalog lookup
    pub fn open_record_fork(&mut self, file: &FileRecord, fork_type: ForkType) -> Result<ForkReader<'_>> {
        self.open_fork_data(file.file_id, fork_type, file.fork(fork_type))
    }

    /// Open a fork from its inline fork data
    ///
    /// Extents past the inline ones come from the overflow tree keyed by
    /// `file_id`.
    pub fn open_fork_data(&mut self, file_id: Cnid, fork_type: ForkType, fork: &ForkData) -> Result<ForkReader<'_>> {
        self.ensure_open()?;
        let map = ForkMap::from_fork_data(file_id, fork_type, fork, self.io.geometry())?;
        self.open_map(map)
    }

    fn open_map(&mut self, mut map: ForkMap) -> Result<ForkReader<'_>> {
        if self.config.verify_extents {
            self.extents.complete(&mut self.io, &mut map)?;
            let free = self.unallocated_runs(&map)?;
            if !free.is_empty() {
                log::warn!(
                    "CNID {} {} fork has {} extents over free blocks: {:?}",
                    map.file_id(),
                    map.fork_type(),
                    free.len(),
                    free
                );
            }
        }
        Ok(ForkReader::new(self, map))
    }

    /// Open a fork of the file at `path`
    pub fn open_file(&mut self, path: &str, fork_type: ForkType) -> Result<ForkReader<'_>> {
        let leaf = self.entry_at_path(path)?;
        let file = leaf.as_file().ok_or_else(|| HfsError::NotAFile(path.to_string()))?;
        self.open_record_fork(file, fork_type)
    }

    fn unallocated_runs(&mut self, map: &ForkMap) -> Result<Vec<ExtentDescriptor>> {
        let mut free = Vec::new();
        for run in map.runs() {
            if !self.allocation.is_extent_allocated(&mut self.io, &run.extent)? {
                free.push(run.extent);
            }
        }
        Ok(free)
    }

    /// Extents of a fork that cover blocks the bitmap marks free
    pub fn verify_fork(&mut self, cnid: Cnid, fork_type: ForkType) -> Result<Vec<ExtentDescriptor>> {
        self.ensure_open()?;
        let mut map = self.fork_map(cnid, fork_type)?;
        self.extents.complete(&mut self.io, &mut map)?;
        self.unallocated_runs(&map)
    }

    pub fn is_allocated(&mut self, block: u32) -> Result<bool> {
        self.ensure_open()?;
        self.allocation.is_allocated(&mut self.io, block)
    }

    pub fn count_free_blocks(&mut self) -> Result<u64> {
        self.ensure_open()?;
        self.allocation.count_free(&mut self.io)
    }

    pub fn count_allocated_blocks(&mut self) -> Result<u64> {
        self.ensure_open()?;
        self.allocation.count_allocated(&mut self.io)
    }

    /// Block cache counters, when caching is enabled
    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.io.source().cache_stats()
    }

    /// Release the source; every later call fails with a usage error
    pub fn close(&mut self) {
        if !self.closed {
            self.io.source_mut().close();
            self.closed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::StreamSource;
    use crate::strings::{MacJapanese, MacRoman};
    use crate::testing::{hfs_wrapper, ImageBuilder};
    use crate::types::btree::{KEY_COMPARE_BINARY, KEY_COMPARE_CASE_FOLDING};
    use std::io::{Cursor, Read};

    fn sample(mut image: ImageBuilder) -> (ImageBuilder, Cnid, Cnid) {
        let docs = image.add_folder(2, "Documents");
        let letter = image.add_file_with_data(docs, "Letter", b"Dear reader");
        image.add_file_with_data(docs, "Notes", b"");
        image.add_folder(docs, "Archive");
        image.add_file_with_data(2, "ReadMe", b"top level");
        (image, docs, letter)
    }

    #[test]
    fn test_open_summary() {
        let (image, _, _) = sample(ImageBuilder::hfs_plus(4096, 4096));
        let mut volume = image.open();
        assert_eq!(volume.format_kind(), FormatKind::HfsPlus);
        assert_eq!(volume.volume_name(), "Test Volume");
        assert_eq!(volume.header().block_size, 4096);
        assert_eq!(volume.header().file_count, 3);
        assert_eq!(volume.header().folder_count, 2);
        assert_eq!(volume.count_free_blocks().unwrap(), u64::from(volume.header().free_blocks));
        assert!(!volume.header().is_journaled());
    }

    #[test]
    fn test_paths_and_listing() {
        let (image, docs, letter) = sample(ImageBuilder::hfs_plus(512, 512));
        let mut volume = image.open();

        assert_eq!(volume.resolve_path("/").unwrap(), ROOT_FOLDER_ID);
        assert_eq!(volume.resolve_path("/Documents").unwrap(), docs);
        assert_eq!(volume.resolve_path("/documents/LETTER").unwrap(), letter);
        assert_eq!(volume.path_of(letter).unwrap(), "/Documents/Letter");

        let names: Vec<String> = volume
            .list_children(docs)
            .unwrap()
            .iter()
            .map(|leaf| volume.display_name(leaf).unwrap())
            .collect();
        assert_eq!(names, vec!["Archive", "Letter", "Notes"]);
        assert_eq!(volume.list_children(ROOT_FOLDER_ID).unwrap().len(), 2);
    }

    #[test]
    fn test_path_errors() {
        let (image, _, _) = sample(ImageBuilder::hfs_plus(512, 512));
        let mut volume = image.open();
        match volume.resolve_path("/Documents/Missing") {
            Err(HfsError::NotFound(path)) => assert_eq!(path, "/Documents/Missing"),
            other => panic!("expected NotFound, got {:?}", other),
        }
        match volume.resolve_path("/ReadMe/inner") {
            Err(HfsError::NotADirectory(path)) => assert_eq!(path, "/ReadMe"),
            other => panic!("expected NotADirectory, got {:?}", other),
        }
        assert!(volume.lookup(ROOT_FOLDER_ID, "nothing here").unwrap().is_none());
    }

    #[test]
    fn test_hfs_volume() {
        let (mut image, docs, letter) = sample(ImageBuilder::hfs(1024));
        image.set_volume_name("Macintosh HD");
        let mut volume = image.open();
        assert_eq!(volume.format_kind(), FormatKind::Hfs);
        assert_eq!(volume.volume_name(), "Macintosh HD");
        assert_eq!(volume.resolve_path("/Documents/Letter").unwrap(), letter);
        // HFS names compare bytewise here
        assert!(volume.lookup(docs, "letter").unwrap().is_none());

        let mut reader = volume.open_file("/Documents/Letter", ForkType::Data).unwrap();
        let mut text = String::new();
        reader.read_to_string(&mut text).unwrap();
        assert_eq!(text, "Dear reader");
        assert!(volume.is_allocated(0).unwrap());
        assert_eq!(volume.count_free_blocks().unwrap(), u64::from(volume.header().free_blocks));
    }

    #[test]
    fn test_hfs_files_without_thread_records() {
        let mut image = ImageBuilder::hfs(512);
        image.set_file_threads(false);
        let letter = image.add_file_with_forks(ROOT_FOLDER_ID, "Letter", b"Dear reader", b"rsrc");
        let frag = image.add_fragmented_file(ROOT_FOLDER_ID, "Chapters", &vec![0x5A; 6 * 512]);
        let config = ReaderConfig {
            verify_extents: true,
            ..ReaderConfig::default()
        };
        let mut volume = image.open_with(&config);

        assert!(volume.lookup(ROOT_FOLDER_ID, "Letter").unwrap().is_some());
        assert!(volume.thread(letter).unwrap().is_none());

        let mut text = String::new();
        volume.open_file("/Letter", ForkType::Data).unwrap().read_to_string(&mut text).unwrap();
        assert_eq!(text, "Dear reader");
        let rsrc = volume.open_file("/Letter", ForkType::Resource).unwrap().read_all().unwrap();
        assert_eq!(rsrc, b"rsrc");

        let chapters = volume.open_file("/Chapters", ForkType::Data).unwrap().read_all().unwrap();
        assert_eq!(chapters, vec![0x5Au8; 6 * 512]);
        assert!(volume.thread(frag).unwrap().is_none());

        // CNID-only calls still need the thread
        assert!(matches!(volume.open_fork(letter, ForkType::Data), Err(HfsError::NotFound(_))));
    }

    #[test]
    fn test_hfs_mac_japanese_names() {
        let mut image = ImageBuilder::hfs(512);
        image.set_hfs_codec(Arc::new(MacJapanese::with_fallback(Arc::new(MacRoman))));
        let id = image.add_file_with_data(2, "日本語", b"nihongo");
        let config = ReaderConfig {
            hfs_encoding: "MacJapanese".into(),
            ..ReaderConfig::default()
        };
        let mut volume = image.open_with(&config);
        assert_eq!(volume.resolve_path("/日本語").unwrap(), id);

        // The same bytes read as MacRoman give a different name
        let mut roman = volume.with_string_codec(Arc::new(MacRoman)).unwrap();
        let children = roman.list_children(ROOT_FOLDER_ID).unwrap();
        assert_ne!(roman.display_name(&children[0]).unwrap(), "日本語");
    }

    #[test]
    fn test_hfsx_compare_types() {
        let mut binary = ImageBuilder::hfsx(512, 512, KEY_COMPARE_BINARY);
        binary.add_file_with_data(2, "Makefile", b"all:");
        let mut volume = binary.open();
        assert!(volume.lookup(ROOT_FOLDER_ID, "Makefile").unwrap().is_some());
        assert!(volume.lookup(ROOT_FOLDER_ID, "makefile").unwrap().is_none());

        let mut folding = ImageBuilder::hfsx(512, 512, KEY_COMPARE_CASE_FOLDING);
        folding.add_file_with_data(2, "Makefile", b"all:");
        let mut volume = folding.open();
        assert!(volume.lookup(ROOT_FOLDER_ID, "makefile").unwrap().is_some());
    }

    #[test]
    fn test_signature_mismatch() {
        let image = ImageBuilder::hfs_plus(512, 512);
        let err = Volume::open(FormatKind::Hfsx, Box::new(image.source()), &ReaderConfig::default()).unwrap_err();
        assert!(matches!(
            err,
            HfsError::BadSignature {
                expected: 0x4858,
                actual: 0x482B,
                ..
            }
        ));
        let err = Volume::open(FormatKind::Hfs, Box::new(image.source()), &ReaderConfig::default()).unwrap_err();
        assert!(err.is_format_error());
    }

    #[test]
    fn test_detect_plain_and_wrapped() {
        let (image, _, letter) = sample(ImageBuilder::hfs_plus(512, 512));
        let volume = Volume::open_detected(Box::new(image.source()), &ReaderConfig::default()).unwrap();
        assert_eq!(volume.format_kind(), FormatKind::HfsPlus);

        let wrapped = hfs_wrapper(&image.build(), 512);
        let source = StreamSource::new(Cursor::new(wrapped)).unwrap();
        let mut volume = Volume::open_detected(Box::new(source), &ReaderConfig::default()).unwrap();
        assert_eq!(volume.format_kind(), FormatKind::HfsPlus);
        assert_eq!(volume.resolve_path("/Documents/Letter").unwrap(), letter);

        let junk = StreamSource::new(Cursor::new(vec![0u8; 4096])).unwrap();
        assert!(matches!(
            Volume::open_detected(Box::new(junk), &ReaderConfig::default()),
            Err(HfsError::Unsupported(_))
        ));
    }

    #[test]
    fn test_cached_and_uncached_agree() {
        let mut image = ImageBuilder::hfs_plus(512, 512);
        image.set_max_records_per_node(3);
        for i in 0..12 {
            image.add_file_with_data(2, &format!("f{}", i), format!("contents {}", i).as_bytes());
        }
        let frag = image.add_fragmented_file(2, "frag", &vec![0xA5; 9000]);

        let uncached = ReaderConfig {
            cache: CacheConfig {
                enabled: false,
                ..CacheConfig::default()
            },
            ..ReaderConfig::default()
        };
        let small_cache = ReaderConfig {
            cache: CacheConfig {
                enabled: true,
                block_size: 1024,
                capacity: 4,
            },
            ..ReaderConfig::default()
        };
        let mut plain = image.open_with(&uncached);
        let mut cached = image.open_with(&small_cache);
        assert!(plain.cache_stats().is_none());

        assert_eq!(plain.leaf_records().unwrap(), cached.leaf_records().unwrap());
        let a = plain.open_fork(frag, ForkType::Data).unwrap().read_all().unwrap();
        let b = cached.open_fork(frag, ForkType::Data).unwrap().read_all().unwrap();
        assert_eq!(a, b);
        let stats = cached.cache_stats().unwrap();
        assert!(stats.hits > 0 && stats.misses > 0);
    }

    #[test]
    fn test_resolve_extents_and_special_files() {
        let mut image = ImageBuilder::hfs_plus(512, 512);
        let frag = image.add_fragmented_file(2, "frag", &vec![1u8; 12 * 512]);
        let mut volume = image.open();

        let ranges = volume.resolve_extents(frag, ForkType::Data, 10 * 512, 600).unwrap();
        assert_eq!(ranges.len(), 2);
        assert_eq!(ranges.iter().map(|r| r.length).sum::<u64>(), 600);
        assert_eq!(volume.overflow_records().unwrap().len(), 1);

        let catalog_size = volume.header().catalog_file.logical_size;
        let catalog = volume.resolve_extents(4, ForkType::Data, 0, catalog_size).unwrap();
        assert_eq!(catalog.iter().map(|r| r.length).sum::<u64>(), catalog_size);
        assert!(matches!(
            volume.resolve_extents(frag, ForkType::Data, 12 * 512, 1),
            Err(HfsError::EndOfFork { .. })
        ));
        assert!(matches!(
            volume.resolve_extents(ROOT_FOLDER_ID, ForkType::Data, 0, 1),
            Err(HfsError::NotAFile(_))
        ));
    }

    #[test]
    fn test_verify_fork_reports_free_extents() {
        let mut image = ImageBuilder::hfs_plus(512, 512);
        let good = image.add_file_with_data(2, "good", &[3u8; 1500]);
        let mut volume = image.open();
        assert!(volume.verify_fork(good, ForkType::Data).unwrap().is_empty());
        assert!(volume.verify_fork(4, ForkType::Data).unwrap().is_empty());
    }

    #[test]
    fn test_truncated_image_is_io_error() {
        let (image, _, _) = sample(ImageBuilder::hfs_plus(512, 512));
        let mut bytes = image.build();
        bytes.truncate(3 * 512);

        let uncached = ReaderConfig {
            cache: CacheConfig {
                enabled: false,
                ..CacheConfig::default()
            },
            ..ReaderConfig::default()
        };
        for config in [ReaderConfig::default(), uncached] {
            let source = StreamSource::new(Cursor::new(bytes.clone())).unwrap();
            let err = Volume::open(FormatKind::HfsPlus, Box::new(source), &config).err().unwrap();
            assert!(matches!(err, HfsError::Io(ref e) if e.kind() == std::io::ErrorKind::UnexpectedEof), "{:?}", err);
        }
    }

    #[test]
    fn test_closed_volume_rejects_calls() {
        let image = ImageBuilder::hfs_plus(512, 512);
        let mut volume = image.open();
        volume.close();
        assert!(matches!(volume.resolve_path("/x"), Err(HfsError::Usage(_))));
        assert!(matches!(volume.list_children(2), Err(HfsError::Usage(_))));
    }

    #[test]
    fn test_file_backed_image() {
        let (image, _, letter) = sample(ImageBuilder::hfs_plus(512, 512));
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, &image.build()).unwrap();

        let source = StreamSource::open(file.path()).unwrap();
        let mut volume = Volume::open(FormatKind::HfsPlus, Box::new(source), &ReaderConfig::default()).unwrap();
        let mut reader = volume.open_fork(letter, ForkType::Data).unwrap();
        assert_eq!(reader.read_all().unwrap(), b"Dear reader");
    }
}

//! HFS (Hierarchical File System) on-disk structures
//!
//! Reference: Inside Macintosh: Files, chapter 2, "Data Organization on Volumes"

use super::catalog::{CatalogBody, CatalogDates, CatalogKey, CatalogName, FileRecord, FinderInfo, FolderRecord, ThreadRecord};
use super::extents::ExtentKey;
use super::volume::{BitmapLocation, EmbeddedVolume, VolumeDates, VolumeHeader};
use super::{require_len, ExtentDescriptor, ForkData, ForkType};
use crate::error::{HfsError, Result};
use byteorder::{BigEndian, ByteOrder};

/// HFS volume signature ("BD")
pub const HFS_SIGNATURE: u16 = 0x4244;

/// Size of the MDB fields we decode
pub const MDB_SIZE: usize = 162;

/// Longest HFS volume name
pub const MAX_VOLUME_NAME_LEN: usize = 27;
/// Longest HFS file or folder name
pub const MAX_NAME_LEN: usize = 31;

/// Catalog record types (first byte of the record)
pub const CATALOG_DIRECTORY: u8 = 1;
pub const CATALOG_FILE: u8 = 2;
pub const CATALOG_DIRECTORY_THREAD: u8 = 3;
pub const CATALOG_FILE_THREAD: u8 = 4;

/// HFS Master Directory Block (MDB)
/// Located at byte 1024 from the start of the volume
#[derive(Debug, Clone)]
pub struct MasterDirectoryBlock {
    /// Volume signature (0x4244 for HFS, "BD")
    pub signature: u16,
    /// Date and time of volume creation
    pub create_date: u32,
    /// Date and time of last modification
    pub modify_date: u32,
    /// Volume attributes
    pub attributes: u16,
    /// First 512-byte sector of the volume bitmap
    pub bitmap_start: u16,
    /// Number of allocation blocks
    pub alloc_blocks: u16,
    /// Size of allocation blocks in bytes
    pub alloc_block_size: u32,
    pub clump_size: u32,
    /// First 512-byte sector of allocation block 0
    pub first_alloc_block: u16,
    pub next_catalog_id: u32,
    pub free_blocks: u16,
    /// Volume name bytes (Pascal string body, volume script)
    pub volume_name: Vec<u8>,
    pub backup_date: u32,
    pub write_count: u32,
    pub file_count: u32,
    pub folder_count: u32,
    /// Signature of an embedded HFS+ volume, 0 if none
    pub embed_signature: u16,
    pub embed_extent: ExtentDescriptor,
    pub extents_file: ForkData,
    pub catalog_file: ForkData,
}

impl MasterDirectoryBlock {
    /// Parse the MDB from bytes starting at volume offset 1024
    pub fn parse(buffer: &[u8]) -> Result<Self> {
        require_len(buffer, MDB_SIZE, "HFS master directory block")?;

        let signature = BigEndian::read_u16(&buffer[0..2]);
        if signature != HFS_SIGNATURE {
            return Err(HfsError::BadSignature {
                format: "HFS",
                expected: HFS_SIGNATURE,
                actual: signature,
            });
        }

        let alloc_block_size = BigEndian::read_u32(&buffer[20..24]);
        if alloc_block_size == 0 || alloc_block_size % 512 != 0 {
            return Err(HfsError::corrupt(format!(
                "HFS allocation block size {} is not a multiple of 512",
                alloc_block_size
            )));
        }

        // Volume name (bytes 36-63), Pascal string
        let name_length = buffer[36] as usize;
        if name_length > MAX_VOLUME_NAME_LEN {
            return Err(HfsError::corrupt(format!("invalid volume name length: {}", name_length)));
        }
        let volume_name = buffer[37..37 + name_length].to_vec();

        let extents_file = ForkData::from_hfs(
            BigEndian::read_u32(&buffer[130..134]),
            BigEndian::read_u32(&buffer[130..134]),
            alloc_block_size,
            &buffer[134..146],
        )?;
        let catalog_file = ForkData::from_hfs(
            BigEndian::read_u32(&buffer[146..150]),
            BigEndian::read_u32(&buffer[146..150]),
            alloc_block_size,
            &buffer[150..162],
        )?;

        Ok(MasterDirectoryBlock {
            signature,
            create_date: BigEndian::read_u32(&buffer[2..6]),
            modify_date: BigEndian::read_u32(&buffer[6..10]),
            attributes: BigEndian::read_u16(&buffer[10..12]),
            bitmap_start: BigEndian::read_u16(&buffer[14..16]),
            alloc_blocks: BigEndian::read_u16(&buffer[18..20]),
            alloc_block_size,
            clump_size: BigEndian::read_u32(&buffer[24..28]),
            first_alloc_block: BigEndian::read_u16(&buffer[28..30]),
            next_catalog_id: BigEndian::read_u32(&buffer[30..34]),
            free_blocks: BigEndian::read_u16(&buffer[34..36]),
            volume_name,
            backup_date: BigEndian::read_u32(&buffer[64..68]),
            write_count: BigEndian::read_u32(&buffer[70..74]),
            file_count: BigEndian::read_u32(&buffer[84..88]),
            folder_count: BigEndian::read_u32(&buffer[88..92]),
            embed_signature: BigEndian::read_u16(&buffer[124..126]),
            embed_extent: ExtentDescriptor::parse_hfs(&buffer[126..130]),
            extents_file,
            catalog_file,
        })
    }

    pub fn to_volume_header(&self) -> VolumeHeader {
        VolumeHeader {
            signature: self.signature,
            version: 0,
            attributes: u32::from(self.attributes),
            dates: VolumeDates {
                created: self.create_date,
                modified: self.modify_date,
                backed_up: self.backup_date,
                checked: 0,
            },
            block_size: self.alloc_block_size,
            total_blocks: u32::from(self.alloc_blocks),
            free_blocks: u32::from(self.free_blocks),
            file_count: self.file_count,
            folder_count: self.folder_count,
            next_catalog_id: self.next_catalog_id,
            write_count: self.write_count,
            journal_info_block: 0,
            allocation_start: u64::from(self.first_alloc_block) * 512,
            bitmap: BitmapLocation::Inline {
                offset: u64::from(self.bitmap_start) * 512,
            },
            extents_file: self.extents_file.clone(),
            catalog_file: self.catalog_file.clone(),
            attributes_file: None,
            startup_file: None,
            raw_volume_name: Some(self.volume_name.clone()),
            embedded: (self.embed_signature != 0 && !self.embed_extent.is_empty()).then_some(EmbeddedVolume {
                signature: self.embed_signature,
                start_block: self.embed_extent.start_block,
                block_count: self.embed_extent.block_count,
            }),
        }
    }
}

/// Parse an HFS catalog key; returns the key and the offset of the record data
pub fn parse_catalog_key(data: &[u8]) -> Result<(CatalogKey, usize)> {
    require_len(data, 1, "HFS catalog key")?;
    let key_length = data[0] as usize;
    if key_length < 6 || data.len() < 1 + key_length {
        return Err(HfsError::corrupt(format!("invalid HFS catalog key length {}", key_length)));
    }
    let parent_id = BigEndian::read_u32(&data[2..6]);
    let name_length = data[6] as usize;
    if name_length > MAX_NAME_LEN || 7 + name_length > 1 + key_length {
        return Err(HfsError::corrupt(format!(
            "HFS catalog name length {} overruns key length {}",
            name_length, key_length
        )));
    }
    let name = CatalogName::Bytes(data[7..7 + name_length].to_vec());
    // Record data starts on a word boundary
    let data_offset = (1 + key_length + 1) & !1;
    Ok((CatalogKey::new(parent_id, name), data_offset))
}

/// Parse an HFS catalog leaf record body
pub fn parse_catalog_body(data: &[u8], block_size: u32) -> Result<CatalogBody> {
    require_len(data, 2, "HFS catalog record")?;
    match data[0] {
        CATALOG_DIRECTORY => {
            require_len(data, 70, "HFS directory record")?;
            Ok(CatalogBody::Folder(FolderRecord {
                folder_id: BigEndian::read_u32(&data[6..10]),
                flags: BigEndian::read_u16(&data[2..4]),
                valence: u32::from(BigEndian::read_u16(&data[4..6])),
                dates: CatalogDates {
                    created: BigEndian::read_u32(&data[10..14]),
                    content_modified: BigEndian::read_u32(&data[14..18]),
                    attributes_modified: 0,
                    accessed: 0,
                    backed_up: BigEndian::read_u32(&data[18..22]),
                },
                bsd: None,
                text_encoding: 0,
            }))
        }
        CATALOG_FILE => {
            require_len(data, 102, "HFS file record")?;
            Ok(CatalogBody::File(FileRecord {
                file_id: BigEndian::read_u32(&data[20..24]),
                flags: u16::from(data[2]),
                dates: CatalogDates {
                    created: BigEndian::read_u32(&data[44..48]),
                    content_modified: BigEndian::read_u32(&data[48..52]),
                    attributes_modified: 0,
                    accessed: 0,
                    backed_up: BigEndian::read_u32(&data[52..56]),
                },
                finder_info: FinderInfo::parse(&data[4..20]),
                bsd: None,
                text_encoding: 0,
                data_fork: ForkData::from_hfs(
                    BigEndian::read_u32(&data[26..30]),
                    BigEndian::read_u32(&data[30..34]),
                    block_size,
                    &data[74..86],
                )?,
                resource_fork: ForkData::from_hfs(
                    BigEndian::read_u32(&data[36..40]),
                    BigEndian::read_u32(&data[40..44]),
                    block_size,
                    &data[86..98],
                )?,
            }))
        }
        kind @ (CATALOG_DIRECTORY_THREAD | CATALOG_FILE_THREAD) => {
            require_len(data, 15, "HFS thread record")?;
            let name_length = data[14] as usize;
            if name_length > MAX_NAME_LEN {
                return Err(HfsError::corrupt(format!("HFS thread name length {}", name_length)));
            }
            require_len(data, 15 + name_length, "HFS thread record")?;
            let thread = ThreadRecord {
                parent_id: BigEndian::read_u32(&data[10..14]),
                name: CatalogName::Bytes(data[15..15 + name_length].to_vec()),
            };
            Ok(if kind == CATALOG_DIRECTORY_THREAD {
                CatalogBody::FolderThread(thread)
            } else {
                CatalogBody::FileThread(thread)
            })
        }
        other => Err(HfsError::corrupt(format!("unknown HFS catalog record type {}", other))),
    }
}

/// Parse an HFS extents-overflow key; returns the key and the data offset
pub fn parse_extent_key(data: &[u8]) -> Result<(ExtentKey, usize)> {
    require_len(data, 8, "HFS extent key")?;
    let key_length = data[0] as usize;
    if key_length != 7 {
        return Err(HfsError::corrupt(format!("invalid HFS extent key length {}", key_length)));
    }
    let key = ExtentKey::new(
        ForkType::from_u8(data[1])?,
        BigEndian::read_u32(&data[2..6]),
        u32::from(BigEndian::read_u16(&data[6..8])),
    );
    Ok((key, 8))
}

/// Parse an HFS extent record (three u16 descriptors)
pub fn parse_extent_record(data: &[u8]) -> Result<Vec<ExtentDescriptor>> {
    require_len(data, 12, "HFS extent record")?;
    Ok((0..3).map(|i| ExtentDescriptor::parse_hfs(&data[i * 4..i * 4 + 4])).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mdb_bytes() -> Vec<u8> {
        let mut data = vec![0u8; 512];
        data[0] = 0x42; // 'B'
        data[1] = 0x44; // 'D'
        data[14..16].copy_from_slice(&3u16.to_be_bytes());
        data[18..20].copy_from_slice(&1000u16.to_be_bytes());
        data[20..24].copy_from_slice(&1024u32.to_be_bytes());
        data[28..30].copy_from_slice(&5u16.to_be_bytes());
        data[34..36].copy_from_slice(&400u16.to_be_bytes());
        data[36] = 7;
        data[37..44].copy_from_slice(b"TestVol");
        data[130..134].copy_from_slice(&4096u32.to_be_bytes());
        data[134..138].copy_from_slice(&[0, 2, 0, 4]);
        data[146..150].copy_from_slice(&8192u32.to_be_bytes());
        data[150..154].copy_from_slice(&[0, 6, 0, 8]);
        data
    }

    #[test]
    fn test_parse_mdb() {
        let mdb = MasterDirectoryBlock::parse(&mdb_bytes()).unwrap();
        assert_eq!(mdb.volume_name, b"TestVol".to_vec());
        assert_eq!(mdb.alloc_blocks, 1000);
        assert_eq!(mdb.catalog_file.extents[0], ExtentDescriptor::new(6, 8));
        assert_eq!(mdb.catalog_file.total_blocks, 8);

        let header = mdb.to_volume_header();
        assert_eq!(header.allocation_start, 5 * 512);
        assert_eq!(header.bitmap, BitmapLocation::Inline { offset: 3 * 512 });
        assert_eq!(header.free_blocks, 400);
        assert!(header.embedded.is_none());
    }

    #[test]
    fn test_invalid_signature() {
        let mut data = mdb_bytes();
        data[0] = 0x48;
        data[1] = 0x2B;
        match MasterDirectoryBlock::parse(&data) {
            Err(HfsError::BadSignature { expected, actual, .. }) => {
                assert_eq!(expected, HFS_SIGNATURE);
                assert_eq!(actual, 0x482B);
            }
            other => panic!("unexpected result: {:?}", other.map(|m| m.signature)),
        }
    }

    #[test]
    fn test_parse_catalog_key_alignment() {
        // keyLength 10: reserved, parent 2, name "abc" plus a pad byte
        let raw = [10u8, 0, 0, 0, 0, 2, 3, b'a', b'b', b'c', 0, 0, 0xAA];
        let (key, offset) = parse_catalog_key(&raw).unwrap();
        assert_eq!(key.parent_id, 2);
        assert_eq!(key.name, CatalogName::Bytes(b"abc".to_vec()));
        assert_eq!(offset, 12);
    }

    #[test]
    fn test_parse_thread_record() {
        let mut raw = vec![0u8; 46];
        raw[0] = CATALOG_DIRECTORY_THREAD;
        raw[10..14].copy_from_slice(&1u32.to_be_bytes());
        raw[14] = 4;
        raw[15..19].copy_from_slice(b"Disk");
        match parse_catalog_body(&raw, 512).unwrap() {
            CatalogBody::FolderThread(t) => {
                assert_eq!(t.parent_id, 1);
                assert_eq!(t.name, CatalogName::Bytes(b"Disk".to_vec()));
            }
            other => panic!("unexpected body {:?}", other),
        }
    }

    #[test]
    fn test_parse_extent_key() {
        let raw = [7u8, 0xFF, 0, 0, 0, 20, 0, 9];
        let (key, offset) = parse_extent_key(&raw).unwrap();
        assert_eq!(key, ExtentKey::new(ForkType::Resource, 20, 9));
        assert_eq!(offset, 8);
    }
}

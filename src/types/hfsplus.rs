//! HFS+ (Mac OS Extended) and HFSX on-disk structures
//!
//! Reference: https://developer.apple.com/library/archive/technotes/tn/tn1150.html

use super::catalog::{BsdInfo, CatalogBody, CatalogDates, CatalogKey, CatalogName, FileRecord, FinderInfo, FolderRecord, ThreadRecord};
use super::extents::ExtentKey;
use super::volume::{BitmapLocation, VolumeDates, VolumeHeader};
use super::{require_len, ExtentDescriptor, ForkData, ForkType, HFSPLUS_FORK_DATA_SIZE};
use crate::error::{HfsError, Result};
use byteorder::{BigEndian, ByteOrder};

/// HFS+ volume signature ("H+")
pub const HFSPLUS_SIGNATURE: u16 = 0x482B;
/// HFSX volume signature ("HX")
pub const HFSX_SIGNATURE: u16 = 0x4858;

/// Size of the volume header
pub const VOLUME_HEADER_SIZE: usize = 512;

/// Longest HFS+ name in UTF-16 units
pub const MAX_NAME_LEN: usize = 255;

/// Catalog record types (first two bytes of the record)
pub const FOLDER_RECORD: i16 = 1;
pub const FILE_RECORD: i16 = 2;
pub const FOLDER_THREAD_RECORD: i16 = 3;
pub const FILE_THREAD_RECORD: i16 = 4;

/// Size of a folder record
pub const FOLDER_RECORD_SIZE: usize = 88;
/// Size of a file record
pub const FILE_RECORD_SIZE: usize = 248;

/// HFS+ Volume Header
/// Located at byte 1024 from the start of the volume
#[derive(Debug, Clone)]
pub struct HfsPlusVolumeHeader {
    /// Volume signature (0x482B for HFS+, 0x4858 for HFSX)
    pub signature: u16,
    /// Version (4 for HFS+, 5 for HFSX)
    pub version: u16,
    /// Volume attributes
    pub attributes: u32,
    /// Implementation that last mounted the volume
    pub last_mounted_version: u32,
    /// Journal info block
    pub journal_info_block: u32,
    pub create_date: u32,
    pub modify_date: u32,
    pub backup_date: u32,
    pub checked_date: u32,
    /// Number of files on volume
    pub file_count: u32,
    /// Number of folders on volume
    pub folder_count: u32,
    /// Block size in bytes
    pub block_size: u32,
    /// Total number of blocks
    pub total_blocks: u32,
    /// Number of free blocks
    pub free_blocks: u32,
    pub next_catalog_id: u32,
    pub write_count: u32,
    pub allocation_file: ForkData,
    pub extents_file: ForkData,
    pub catalog_file: ForkData,
    pub attributes_file: ForkData,
    pub startup_file: ForkData,
}

impl HfsPlusVolumeHeader {
    /// Parse the header from bytes starting at volume offset 1024
    ///
    /// `expected` is the signature of the variant being opened.
    pub fn parse(buffer: &[u8], expected: u16) -> Result<Self> {
        require_len(buffer, VOLUME_HEADER_SIZE, "HFS+ volume header")?;

        let signature = BigEndian::read_u16(&buffer[0..2]);
        if signature != expected {
            return Err(HfsError::BadSignature {
                format: if expected == HFSX_SIGNATURE { "HFSX" } else { "HFS+" },
                expected,
                actual: signature,
            });
        }

        let block_size = BigEndian::read_u32(&buffer[40..44]);
        if !block_size.is_power_of_two() || block_size < 512 {
            return Err(HfsError::corrupt(format!("invalid HFS+ block size {}", block_size)));
        }

        let fork = |offset: usize| ForkData::parse_hfsplus(&buffer[offset..offset + HFSPLUS_FORK_DATA_SIZE]);

        Ok(HfsPlusVolumeHeader {
            signature,
            version: BigEndian::read_u16(&buffer[2..4]),
            attributes: BigEndian::read_u32(&buffer[4..8]),
            last_mounted_version: BigEndian::read_u32(&buffer[8..12]),
            journal_info_block: BigEndian::read_u32(&buffer[12..16]),
            create_date: BigEndian::read_u32(&buffer[16..20]),
            modify_date: BigEndian::read_u32(&buffer[20..24]),
            backup_date: BigEndian::read_u32(&buffer[24..28]),
            checked_date: BigEndian::read_u32(&buffer[28..32]),
            file_count: BigEndian::read_u32(&buffer[32..36]),
            folder_count: BigEndian::read_u32(&buffer[36..40]),
            block_size,
            total_blocks: BigEndian::read_u32(&buffer[44..48]),
            free_blocks: BigEndian::read_u32(&buffer[48..52]),
            next_catalog_id: BigEndian::read_u32(&buffer[64..68]),
            write_count: BigEndian::read_u32(&buffer[68..72]),
            allocation_file: fork(112)?,
            extents_file: fork(192)?,
            catalog_file: fork(272)?,
            attributes_file: fork(352)?,
            startup_file: fork(432)?,
        })
    }

    pub fn to_volume_header(&self) -> VolumeHeader {
        let present = |fork: &ForkData| (fork.logical_size > 0).then(|| fork.clone());
        VolumeHeader {
            signature: self.signature,
            version: self.version,
            attributes: self.attributes,
            dates: VolumeDates {
                created: self.create_date,
                modified: self.modify_date,
                backed_up: self.backup_date,
                checked: self.checked_date,
            },
            block_size: self.block_size,
            total_blocks: self.total_blocks,
            free_blocks: self.free_blocks,
            file_count: self.file_count,
            folder_count: self.folder_count,
            next_catalog_id: self.next_catalog_id,
            write_count: self.write_count,
            journal_info_block: self.journal_info_block,
            allocation_start: 0,
            bitmap: BitmapLocation::Fork(self.allocation_file.clone()),
            extents_file: self.extents_file.clone(),
            catalog_file: self.catalog_file.clone(),
            attributes_file: present(&self.attributes_file),
            startup_file: present(&self.startup_file),
            raw_volume_name: None,
            embedded: None,
        }
    }
}

fn read_unicode_name(data: &[u8], what: &str) -> Result<Vec<u16>> {
    require_len(data, 2, what)?;
    let length = BigEndian::read_u16(&data[0..2]) as usize;
    if length > MAX_NAME_LEN {
        return Err(HfsError::corrupt(format!("{} length {} exceeds 255", what, length)));
    }
    require_len(data, 2 + length * 2, what)?;
    Ok((0..length)
        .map(|i| BigEndian::read_u16(&data[2 + i * 2..4 + i * 2]))
        .collect())
}

/// Parse an HFS+ catalog key; returns the key and the offset of the record data
pub fn parse_catalog_key(data: &[u8]) -> Result<(CatalogKey, usize)> {
    require_len(data, 2, "HFS+ catalog key")?;
    let key_length = BigEndian::read_u16(&data[0..2]) as usize;
    if key_length < 6 || data.len() < 2 + key_length {
        return Err(HfsError::corrupt(format!("invalid HFS+ catalog key length {}", key_length)));
    }
    let parent_id = BigEndian::read_u32(&data[2..6]);
    let name = read_unicode_name(&data[6..2 + key_length], "HFS+ catalog key name")?;
    Ok((CatalogKey::new(parent_id, CatalogName::Unicode(name)), 2 + key_length))
}

fn parse_dates(data: &[u8]) -> CatalogDates {
    CatalogDates {
        created: BigEndian::read_u32(&data[12..16]),
        content_modified: BigEndian::read_u32(&data[16..20]),
        attributes_modified: BigEndian::read_u32(&data[20..24]),
        accessed: BigEndian::read_u32(&data[24..28]),
        backed_up: BigEndian::read_u32(&data[28..32]),
    }
}

fn parse_bsd_info(data: &[u8]) -> BsdInfo {
    BsdInfo {
        owner_id: BigEndian::read_u32(&data[0..4]),
        group_id: BigEndian::read_u32(&data[4..8]),
        admin_flags: data[8],
        owner_flags: data[9],
        file_mode: BigEndian::read_u16(&data[10..12]),
        special: BigEndian::read_u32(&data[12..16]),
    }
}

/// Parse an HFS+ catalog leaf record body
pub fn parse_catalog_body(data: &[u8]) -> Result<CatalogBody> {
    require_len(data, 2, "HFS+ catalog record")?;
    match BigEndian::read_i16(&data[0..2]) {
        FOLDER_RECORD => {
            require_len(data, FOLDER_RECORD_SIZE, "HFS+ folder record")?;
            Ok(CatalogBody::Folder(FolderRecord {
                folder_id: BigEndian::read_u32(&data[8..12]),
                flags: BigEndian::read_u16(&data[2..4]),
                valence: BigEndian::read_u32(&data[4..8]),
                dates: parse_dates(data),
                bsd: Some(parse_bsd_info(&data[32..48])),
                text_encoding: BigEndian::read_u32(&data[80..84]),
            }))
        }
        FILE_RECORD => {
            require_len(data, FILE_RECORD_SIZE, "HFS+ file record")?;
            Ok(CatalogBody::File(FileRecord {
                file_id: BigEndian::read_u32(&data[8..12]),
                flags: BigEndian::read_u16(&data[2..4]),
                dates: parse_dates(data),
                finder_info: FinderInfo::parse(&data[48..64]),
                bsd: Some(parse_bsd_info(&data[32..48])),
                text_encoding: BigEndian::read_u32(&data[80..84]),
                data_fork: ForkData::parse_hfsplus(&data[88..168])?,
                resource_fork: ForkData::parse_hfsplus(&data[168..248])?,
            }))
        }
        kind @ (FOLDER_THREAD_RECORD | FILE_THREAD_RECORD) => {
            require_len(data, 10, "HFS+ thread record")?;
            let thread = ThreadRecord {
                parent_id: BigEndian::read_u32(&data[4..8]),
                name: CatalogName::Unicode(read_unicode_name(&data[8..], "HFS+ thread name")?),
            };
            Ok(if kind == FOLDER_THREAD_RECORD {
                CatalogBody::FolderThread(thread)
            } else {
                CatalogBody::FileThread(thread)
            })
        }
        other => Err(HfsError::corrupt(format!("unknown HFS+ catalog record type {}", other))),
    }
}

/// Parse an HFS+ extents-overflow key; returns the key and the data offset
pub fn parse_extent_key(data: &[u8]) -> Result<(ExtentKey, usize)> {
    require_len(data, 12, "HFS+ extent key")?;
    let key_length = BigEndian::read_u16(&data[0..2]);
    if key_length != 10 {
        return Err(HfsError::corrupt(format!("invalid HFS+ extent key length {}", key_length)));
    }
    let key = ExtentKey::new(
        ForkType::from_u8(data[2])?,
        BigEndian::read_u32(&data[4..8]),
        BigEndian::read_u32(&data[8..12]),
    );
    Ok((key, 12))
}

/// Parse an HFS+ extent record (eight u32 descriptors)
pub fn parse_extent_record(data: &[u8]) -> Result<Vec<ExtentDescriptor>> {
    require_len(data, 64, "HFS+ extent record")?;
    Ok((0..8).map(|i| ExtentDescriptor::parse_hfsplus(&data[i * 8..i * 8 + 8])).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_bytes(signature: u16) -> Vec<u8> {
        let mut data = vec![0u8; 512];
        data[0..2].copy_from_slice(&signature.to_be_bytes());
        data[2..4].copy_from_slice(&4u16.to_be_bytes());
        data[4..8].copy_from_slice(&(1u32 << 13).to_be_bytes());
        data[12..16].copy_from_slice(&77u32.to_be_bytes());
        data[40..44].copy_from_slice(&4096u32.to_be_bytes());
        data[44..48].copy_from_slice(&256u32.to_be_bytes());
        data[48..52].copy_from_slice(&100u32.to_be_bytes());
        // Catalog fork: 8192 bytes in blocks 10..12
        data[272..280].copy_from_slice(&8192u64.to_be_bytes());
        data[284..288].copy_from_slice(&2u32.to_be_bytes());
        data[288..292].copy_from_slice(&10u32.to_be_bytes());
        data[292..296].copy_from_slice(&2u32.to_be_bytes());
        data
    }

    #[test]
    fn test_parse_hfsplus_header() {
        let header = HfsPlusVolumeHeader::parse(&header_bytes(HFSPLUS_SIGNATURE), HFSPLUS_SIGNATURE).unwrap();
        assert_eq!(header.block_size, 4096);
        assert_eq!(header.total_blocks, 256);
        assert_eq!(header.catalog_file.extents[0], ExtentDescriptor::new(10, 2));

        let common = header.to_volume_header();
        assert!(common.is_journaled());
        assert_eq!(common.free_blocks, 100);
        assert!(common.attributes_file.is_none());
        assert_eq!(common.catalog_file.logical_size, 8192);
    }

    #[test]
    fn test_hfsx_signature_mismatch() {
        let err = HfsPlusVolumeHeader::parse(&header_bytes(HFSPLUS_SIGNATURE), HFSX_SIGNATURE).unwrap_err();
        assert!(matches!(err, HfsError::BadSignature { format: "HFSX", .. }));
    }

    #[test]
    fn test_rejects_bad_block_size() {
        let mut raw = header_bytes(HFSPLUS_SIGNATURE);
        raw[40..44].copy_from_slice(&3000u32.to_be_bytes());
        assert!(HfsPlusVolumeHeader::parse(&raw, HFSPLUS_SIGNATURE).is_err());
    }

    #[test]
    fn test_parse_catalog_key() {
        let mut raw = vec![0u8, 10, 0, 0, 0, 2, 0, 2];
        raw.extend_from_slice(&[0, b'h', 0, b'i']);
        let (key, offset) = parse_catalog_key(&raw).unwrap();
        assert_eq!(key.parent_id, 2);
        assert_eq!(key.name, CatalogName::Unicode(vec![u16::from(b'h'), u16::from(b'i')]));
        assert_eq!(offset, 12);
    }

    #[test]
    fn test_catalog_key_name_overrun() {
        // Name claims 5 units but the key only has room for 2
        let raw = [0u8, 10, 0, 0, 0, 2, 0, 5, 0, b'h', 0, b'i', 0, 0, 0, 0];
        assert!(parse_catalog_key(&raw).is_err());
    }

    #[test]
    fn test_parse_file_record() {
        let mut raw = vec![0u8; FILE_RECORD_SIZE];
        raw[0..2].copy_from_slice(&FILE_RECORD.to_be_bytes());
        raw[8..12].copy_from_slice(&42u32.to_be_bytes());
        raw[48..52].copy_from_slice(b"TEXT");
        raw[52..56].copy_from_slice(b"ttxt");
        raw[88..96].copy_from_slice(&5u64.to_be_bytes());
        raw[168..176].copy_from_slice(&9u64.to_be_bytes());
        match parse_catalog_body(&raw).unwrap() {
            CatalogBody::File(file) => {
                assert_eq!(file.file_id, 42);
                assert_eq!(file.finder_info.type_code(), "TEXT");
                assert_eq!(file.data_fork.logical_size, 5);
                assert_eq!(file.resource_fork.logical_size, 9);
            }
            other => panic!("unexpected body {:?}", other),
        }
    }
}

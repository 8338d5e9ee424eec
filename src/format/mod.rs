//! Per-format capability sets
//!
//! The B-tree engine, catalog and extents resolver only ever talk to a
//! [`VolumeFormat`]; the HFS and HFS+/HFSX differences (struct layouts, key
//! shapes, name encoding, reserved CNIDs) live behind it.

mod hfs;
mod hfsplus;

pub use hfs::HfsFormat;
pub use hfsplus::HfsPlusFormat;

use crate::error::Result;
use crate::strings::StringCodec;
use crate::types::btree::HeaderRecord;
use crate::types::catalog::{CatalogBody, CatalogKey, CatalogName, NameOrdering};
use crate::types::extents::ExtentKey;
use crate::types::hfs::HFS_SIGNATURE;
use crate::types::hfsplus::{HFSPLUS_SIGNATURE, HFSX_SIGNATURE};
use crate::types::volume::VolumeHeader;
use crate::types::{Cnid, ExtentDescriptor, ForkType, ReservedCnid};
use std::sync::Arc;

/// Byte offset of the volume header / MDB from the start of the volume
pub const VOLUME_HEADER_OFFSET: u64 = 1024;

/// HFS-family format variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatKind {
    Hfs,
    HfsPlus,
    Hfsx,
}

impl FormatKind {
    /// Signature at offset 1024 identifying the variant
    pub fn signature(&self) -> u16 {
        match self {
            FormatKind::Hfs => HFS_SIGNATURE,
            FormatKind::HfsPlus => HFSPLUS_SIGNATURE,
            FormatKind::Hfsx => HFSX_SIGNATURE,
        }
    }

    /// Get a human-readable name for the format
    pub fn display_name(&self) -> &'static str {
        match self {
            FormatKind::Hfs => "HFS",
            FormatKind::HfsPlus => "HFS+",
            FormatKind::Hfsx => "HFSX",
        }
    }

    /// Identify the variant from its signature
    pub fn from_signature(signature: u16) -> Option<Self> {
        match signature {
            HFS_SIGNATURE => Some(FormatKind::Hfs),
            HFSPLUS_SIGNATURE => Some(FormatKind::HfsPlus),
            HFSX_SIGNATURE => Some(FormatKind::Hfsx),
            _ => None,
        }
    }

    /// Identify the variant from the first bytes of the volume header
    pub fn detect(header: &[u8]) -> Option<Self> {
        if header.len() < 2 {
            return None;
        }
        Self::from_signature(u16::from_be_bytes([header[0], header[1]]))
    }

    /// Parse a format name as used in configuration and on the command line
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "hfs" => Some(FormatKind::Hfs),
            "hfs+" | "hfsplus" => Some(FormatKind::HfsPlus),
            "hfsx" => Some(FormatKind::Hfsx),
            _ => None,
        }
    }
}

impl std::fmt::Display for FormatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Struct decoders, key builders and naming rules for one format variant
pub trait VolumeFormat: Send + Sync {
    fn kind(&self) -> FormatKind;

    /// Parse and validate the volume header read from offset 1024
    fn parse_volume_header(&self, data: &[u8]) -> Result<VolumeHeader>;

    /// Parse a B-tree header record
    fn parse_header_record(&self, data: &[u8]) -> Result<HeaderRecord> {
        HeaderRecord::parse(data)
    }

    /// Decode a catalog key; returns the key and the offset of what follows it
    fn parse_catalog_key(&self, data: &[u8]) -> Result<(CatalogKey, usize)>;

    /// Decode a catalog leaf record body
    fn parse_catalog_body(&self, data: &[u8], block_size: u32) -> Result<CatalogBody>;

    /// Decode an extents-overflow key; returns the key and the data offset
    fn parse_extent_key(&self, data: &[u8]) -> Result<(ExtentKey, usize)>;

    /// Decode an extents-overflow record
    fn parse_extent_record(&self, data: &[u8]) -> Result<Vec<ExtentDescriptor>>;

    /// Build the extents-overflow search key, checking the start block fits
    fn extent_key(&self, fork_type: ForkType, file_id: Cnid, start_block: u64) -> Result<ExtentKey>;

    /// Encode a display name into this format's catalog name representation
    fn encode_name(&self, name: &str) -> Result<CatalogName>;

    /// Decode a catalog name for display
    fn decode_name(&self, name: &CatalogName) -> Result<String>;

    /// Empty catalog name (thread keys, listing start positions)
    fn empty_name(&self) -> CatalogName;

    /// Value of a reserved CNID, if this format defines it
    fn reserved_cnid(&self, id: ReservedCnid) -> Option<Cnid>;

    /// Name ordering of the catalog tree described by `header`
    fn name_ordering(&self, header: &HeaderRecord) -> Result<NameOrdering>;

    /// Codec applied to names, for callers that need raw access
    fn string_codec(&self) -> Arc<dyn StringCodec>;

    /// Build a catalog key from a display name
    fn catalog_key(&self, parent_id: Cnid, name: &str) -> Result<CatalogKey> {
        Ok(CatalogKey::new(parent_id, self.encode_name(name)?))
    }
}

/// Capability set for `kind`
///
/// `hfs_codec` is only used by HFS, whose names are stored in a legacy script.
pub fn format_for(kind: FormatKind, hfs_codec: Arc<dyn StringCodec>) -> Arc<dyn VolumeFormat> {
    match kind {
        FormatKind::Hfs => Arc::new(HfsFormat::new(hfs_codec)),
        FormatKind::HfsPlus => Arc::new(HfsPlusFormat::hfs_plus()),
        FormatKind::Hfsx => Arc::new(HfsPlusFormat::hfsx()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect() {
        assert_eq!(FormatKind::detect(&[0x42, 0x44]), Some(FormatKind::Hfs));
        assert_eq!(FormatKind::detect(b"H+\x00\x04"), Some(FormatKind::HfsPlus));
        assert_eq!(FormatKind::detect(b"HX"), Some(FormatKind::Hfsx));
        assert_eq!(FormatKind::detect(b"ER"), None);
        assert_eq!(FormatKind::detect(&[0x42]), None);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(FormatKind::from_name("HFS+"), Some(FormatKind::HfsPlus));
        assert_eq!(FormatKind::from_name("hfsx"), Some(FormatKind::Hfsx));
        assert_eq!(FormatKind::from_name("ntfs"), None);
        assert_eq!(FormatKind::Hfsx.to_string(), "HFSX");
    }
}

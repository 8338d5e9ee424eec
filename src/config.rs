//! Reader configuration
//!
//! Handles loading and managing configuration from hfs-volume.json

use crate::error::{HfsError, Result};
use crate::strings::{codec_for_name, StringCodec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

/// Name of the configuration file looked up at startup
pub const CONFIG_FILE_NAME: &str = "hfs-volume.json";

/// Global reader config
static READER_CONFIG: OnceLock<ReaderConfig> = OnceLock::new();

/// Get the global reader config
pub fn get_config() -> &'static ReaderConfig {
    READER_CONFIG.get_or_init(ReaderConfig::load)
}

/// Root reader configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    #[serde(default)]
    pub cache: CacheConfig,
    /// Script of HFS names ("MacRoman" or "MacJapanese")
    #[serde(default = "default_hfs_encoding")]
    pub hfs_encoding: String,
    /// Warn when a fork's extents cover blocks the bitmap marks free
    #[serde(default)]
    pub verify_extents: bool,
    /// Override of the B-tree leaf walk guard (defaults to the tree's node count)
    #[serde(default)]
    pub max_node_visits: Option<u64>,
}

/// Block cache configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    #[serde(default = "default_cache_enabled")]
    pub enabled: bool,
    #[serde(default = "default_cache_block_size")]
    pub block_size: usize,
    #[serde(default = "default_cache_capacity")]
    pub capacity: usize,
}

fn default_hfs_encoding() -> String {
    "MacRoman".to_string()
}

fn default_cache_enabled() -> bool {
    true
}

fn default_cache_block_size() -> usize {
    64 * 1024
}

fn default_cache_capacity() -> usize {
    64
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_cache_enabled(),
            block_size: default_cache_block_size(),
            capacity: default_cache_capacity(),
        }
    }
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            cache: CacheConfig::default(),
            hfs_encoding: default_hfs_encoding(),
            verify_extents: false,
            max_node_visits: None,
        }
    }
}

impl ReaderConfig {
    /// Load configuration from hfs-volume.json
    pub fn load() -> Self {
        // Try to load from current directory first
        if let Ok(config) = Self::load_from_path(CONFIG_FILE_NAME) {
            log::info!("Loaded config from ./{}", CONFIG_FILE_NAME);
            return config;
        }

        // Try to load from executable directory
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let config_path = exe_dir.join(CONFIG_FILE_NAME);
                if let Ok(config) = Self::load_from_path(&config_path) {
                    log::info!("Loaded config from {}", config_path.display());
                    return config;
                }
            }
        }

        log::info!("No {} found, using defaults", CONFIG_FILE_NAME);
        Self::default()
    }

    pub fn load_from_path(path: impl Into<PathBuf>) -> std::result::Result<Self, Box<dyn std::error::Error>> {
        let path = path.into();
        let content = fs::read_to_string(&path)?;
        let config: ReaderConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Codec for HFS names named by `hfs_encoding`
    pub fn hfs_codec(&self) -> Result<Arc<dyn StringCodec>> {
        codec_for_name(&self.hfs_encoding)
            .ok_or_else(|| HfsError::usage(format!("unknown HFS name encoding '{}'", self.hfs_encoding)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ReaderConfig::default();
        assert!(config.cache.enabled);
        assert_eq!(config.cache.block_size, 65536);
        assert_eq!(config.cache.capacity, 64);
        assert_eq!(config.hfs_codec().unwrap().charset_name(), "MacRoman");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"cache": {{"capacity": 8}}, "hfs_encoding": "MacJapanese"}}"#).unwrap();
        let config = ReaderConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.cache.capacity, 8);
        assert_eq!(config.cache.block_size, 65536);
        assert!(!config.verify_extents);
        assert_eq!(config.hfs_codec().unwrap().charset_name(), "MacJapanese");
    }

    #[test]
    fn test_unknown_encoding_is_usage_error() {
        let config = ReaderConfig {
            hfs_encoding: "EBCDIC".into(),
            ..ReaderConfig::default()
        };
        assert!(matches!(config.hfs_codec(), Err(HfsError::Usage(_))));
    }
}

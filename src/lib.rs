//! HFS Volume Library
//!
//! Read-only interpretation of classic HFS, HFS+ and HFSX volume images:
//! volume headers, the catalog and extents-overflow B-trees, the allocation
//! bitmap, and fork contents.

pub mod allocation;
pub mod btree;
pub mod catalog;
pub mod config;
pub mod entry;
pub mod error;
pub mod extents;
pub mod filesystem;
pub mod fork;
pub mod format;
pub mod io;
pub mod strings;
pub mod types;
pub mod volume;

#[cfg(test)]
mod testing;

pub use config::ReaderConfig;
pub use entry::{EntryType, FileEntry};
pub use error::{HfsError, Result};
pub use filesystem::Filesystem;
pub use fork::ForkReader;
pub use format::FormatKind;
pub use io::{BlockCache, ByteSource, StreamSource, SubRangeSource};
pub use types::{Cnid, ForkType};
pub use volume::Volume;

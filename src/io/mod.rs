//! Byte-level I/O: backing sources and the block cache

mod cache;
mod source;

pub use cache::{BlockCache, CacheStats, Clock, ManualClock, SystemClock, TIME_TO_KEEP_IN_CACHE_MS};
pub use source::{ByteSource, StreamSource, SubRangeSource};

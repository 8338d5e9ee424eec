//! Block-level read cache in front of a backing byte source
//!
//! Every block ever touched gets a tracking record (access count, last access
//! time). A small fixed array of slots holds the records whose data is
//! resident, kept roughly in descending priority order. A miss always
//! recycles the last slot, so one slot effectively belongs to the most
//! recently missed block and sequential scans don't thrash the hot set.

use crate::error::{HfsError, Result};
use crate::io::ByteSource;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Age after which a cached block yields its slot regardless of access count
pub const TIME_TO_KEEP_IN_CACHE_MS: u64 = 5000;

/// Millisecond clock used for cache aging
pub trait Clock: Send {
    fn now_millis(&self) -> u64;
}

/// Wall clock measured from cache creation
#[derive(Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Clock that only moves when told to
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, millis: u64) {
        self.now.fetch_add(millis, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> u64 {
        self.now.load(Ordering::SeqCst)
    }
}

/// Hit/miss counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
}

/// Tracking record for one block
#[derive(Debug)]
struct BlockStore {
    access_count: u64,
    last_access: u64,
    data: Option<Vec<u8>>,
}

/// Caching reader over a [`ByteSource`]
pub struct BlockCache<S> {
    backing: Option<S>,
    block_size: usize,
    virtual_fp: u64,
    length: Option<u64>,
    /// Every block referenced so far
    block_map: HashMap<u64, BlockStore>,
    /// Block numbers with resident data, highest priority first
    slots: Vec<Option<u64>>,
    clock: Box<dyn Clock>,
    stats: CacheStats,
}

impl<S: ByteSource> BlockCache<S> {
    /// Wrap `backing` with `capacity` slots of `block_size` bytes
    pub fn new(backing: S, block_size: usize, capacity: usize) -> Result<Self> {
        Self::with_clock(backing, block_size, capacity, Box::new(SystemClock::default()))
    }

    /// Same as [`BlockCache::new`] with an explicit clock
    pub fn with_clock(backing: S, block_size: usize, capacity: usize, clock: Box<dyn Clock>) -> Result<Self> {
        if block_size == 0 {
            return Err(HfsError::usage("block cache block size must be positive"));
        }
        if capacity == 0 {
            return Err(HfsError::usage("block cache capacity must be positive"));
        }

        let length = backing.length().filter(|&len| len > 0);
        let capacity = match length {
            Some(len) if (capacity as u64) * (block_size as u64) > len => {
                len.div_ceil(block_size as u64) as usize
            }
            _ => capacity,
        };
        log::debug!(
            "Block cache: {} slots of {} bytes (source length {:?})",
            capacity,
            block_size,
            length
        );

        Ok(Self {
            backing: Some(backing),
            block_size,
            virtual_fp: 0,
            length,
            block_map: HashMap::new(),
            slots: vec![None; capacity],
            clock,
            stats: CacheStats::default(),
        })
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Number of slots after capping to the source length
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// Current virtual file pointer
    pub fn position(&self) -> u64 {
        self.virtual_fp
    }

    fn ensure_open(&self) -> Result<()> {
        if self.backing.is_none() {
            return Err(HfsError::usage("block cache is closed"));
        }
        Ok(())
    }

    /// Fill every slot with the leading blocks of the source
    pub fn preload(&mut self) -> Result<()> {
        self.ensure_open()?;
        let saved = self.virtual_fp;
        for block_number in 0..self.slots.len() as u64 {
            let pos = block_number * self.block_size as u64;
            if self.length.is_some_and(|len| pos >= len) {
                break;
            }
            self.cached_block(pos)?;
        }
        self.virtual_fp = saved;
        log::debug!("Block cache preloaded {} blocks", self.slots.iter().flatten().count());
        Ok(())
    }

    /// Ensure the block holding `fp` is resident and return its number
    fn cached_block(&mut self, fp: u64) -> Result<u64> {
        let block_number = fp / self.block_size as u64;
        let now = self.clock.now_millis();

        let store = self.block_map.entry(block_number).or_insert(BlockStore {
            access_count: 0,
            last_access: 0,
            data: None,
        });
        store.access_count += 1;
        store.last_access = now;

        if store.data.is_some() {
            self.stats.hits += 1;
            return Ok(block_number);
        }
        self.stats.misses += 1;
        log::trace!("Block cache miss for block {}", block_number);

        let last = self.slots.len() - 1;
        let recycled = match self.slots[last].take() {
            Some(evicted) => self.block_map.get_mut(&evicted).and_then(|s| s.data.take()),
            None => None,
        };

        let block_pos = block_number * self.block_size as u64;
        let data_size = match self.length {
            Some(len) if len > block_pos => (len - block_pos).min(self.block_size as u64) as usize,
            _ => self.block_size,
        };
        let mut data = match recycled {
            Some(mut buffer) if buffer.len() == data_size => {
                buffer.fill(0);
                buffer
            }
            _ => vec![0u8; data_size],
        };

        let backing = self
            .backing
            .as_mut()
            .ok_or_else(|| HfsError::usage("block cache is closed"))?;
        backing.seek(block_pos)?;
        let mut filled = 0;
        while filled < data.len() {
            let n = backing.read(&mut data[filled..])?;
            if n == 0 {
                break;
            }
            filled += n;
        }
        if filled < data.len() {
            if self.length.is_some() {
                return Err(HfsError::unexpected_eof(format!(
                    "short read of block {}: {} of {} bytes",
                    block_number,
                    filled,
                    data.len()
                )));
            }
            // Unknown length: the stream ends inside this block
            data.truncate(filled);
        }

        if let Some(store) = self.block_map.get_mut(&block_number) {
            store.data = Some(data);
        }
        self.slots[last] = Some(block_number);
        self.bubble_into_position(last, now);

        Ok(block_number)
    }

    /// Move the entry at `start` toward the front while it outranks its neighbor
    ///
    /// Neighbors lose their place when the slot is empty, when they have been
    /// accessed fewer times, or when they are older than the time to live. The
    /// pass always runs to the front of the array.
    fn bubble_into_position(&mut self, start: usize, now: u64) {
        for i in (1..=start).rev() {
            let low = match self.slots[i].and_then(|bn| self.block_map.get(&bn)) {
                Some(store) => store,
                None => continue,
            };
            let swap = match self.slots[i - 1].and_then(|bn| self.block_map.get(&bn)) {
                None => true,
                Some(high) => {
                    low.access_count > high.access_count
                        || now.saturating_sub(high.last_access) >= TIME_TO_KEEP_IN_CACHE_MS
                }
            };
            if swap {
                self.slots.swap(i, i - 1);
            }
        }
    }

    /// Read exactly `buf.len()` bytes at the current position
    pub fn read_fully(&mut self, buf: &mut [u8]) -> Result<()> {
        let mut filled = 0;
        while filled < buf.len() {
            let n = ByteSource::read(self, &mut buf[filled..])?;
            filled += n;
        }
        Ok(())
    }

    /// Block numbers currently resident, in slot order
    #[cfg(test)]
    fn resident_blocks(&self) -> Vec<Option<u64>> {
        self.slots.clone()
    }
}

impl<S: ByteSource> ByteSource for BlockCache<S> {
    fn seek(&mut self, pos: u64) -> Result<()> {
        self.ensure_open()?;
        if let Some(len) = self.length {
            if pos > len {
                return Err(HfsError::unexpected_eof(format!("seek to {} beyond length {}", pos, len)));
            }
        }
        self.virtual_fp = pos;
        Ok(())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        self.ensure_open()?;
        if buf.is_empty() {
            return Ok(0);
        }
        if self.length.is_some_and(|len| self.virtual_fp >= len) {
            return Err(HfsError::unexpected_eof(format!("read after end of file at offset {}", self.virtual_fp)));
        }
        let mut written = 0;
        while written < buf.len() {
            let block_number = self.cached_block(self.virtual_fp)?;
            let pos_in_block = (self.virtual_fp % self.block_size as u64) as usize;
            let data = self
                .block_map
                .get(&block_number)
                .and_then(|s| s.data.as_deref())
                .ok_or_else(|| HfsError::corrupt(format!("block {} vanished from cache", block_number)))?;

            let bytes_left_in_block = data.len().saturating_sub(pos_in_block);
            if bytes_left_in_block == 0 {
                return Err(HfsError::unexpected_eof(format!("read after end of file at offset {}", self.virtual_fp)));
            }
            let n = bytes_left_in_block.min(buf.len() - written);
            buf[written..written + n].copy_from_slice(&data[pos_in_block..pos_in_block + n]);
            written += n;
            self.virtual_fp += n as u64;

            if self.length.is_some_and(|len| self.virtual_fp >= len) {
                break;
            }
        }
        Ok(written)
    }

    fn length(&self) -> Option<u64> {
        self.length
    }

    fn close(&mut self) {
        if let Some(mut backing) = self.backing.take() {
            backing.close();
        }
        self.block_map.clear();
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }

    fn cache_stats(&self) -> Option<CacheStats> {
        Some(self.stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::StreamSource;
    use std::io::Cursor;

    fn pattern(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i * 7 + i / 251) as u8).collect()
    }

    fn cache_over(data: Vec<u8>, block_size: usize, capacity: usize, clock: ManualClock) -> BlockCache<StreamSource<Cursor<Vec<u8>>>> {
        let source = StreamSource::new(Cursor::new(data)).unwrap();
        BlockCache::with_clock(source, block_size, capacity, Box::new(clock)).unwrap()
    }

    #[test]
    fn test_rejects_bad_arguments() {
        let source = || StreamSource::new(Cursor::new(vec![0u8; 64])).unwrap();
        assert!(matches!(BlockCache::new(source(), 0, 4), Err(HfsError::Usage(_))));
        assert!(matches!(BlockCache::new(source(), 16, 0), Err(HfsError::Usage(_))));
    }

    #[test]
    fn test_capacity_capped_to_length() {
        let cache = cache_over(vec![0u8; 100], 16, 64, ManualClock::new());
        assert_eq!(cache.capacity(), 7);
    }

    #[test]
    fn test_reads_match_uncached_source() {
        let data = pattern(10_000);
        let mut cache = cache_over(data.clone(), 64, 4, ManualClock::new());
        let reads = [(0u64, 10usize), (60, 10), (9_990, 10), (1_000, 500), (63, 1), (0, 10), (5_000, 129), (130, 3_000)];
        for (offset, len) in reads {
            let got = cache.read_bytes(offset, len).unwrap();
            assert_eq!(got, data[offset as usize..offset as usize + len].to_vec(), "offset {}", offset);
        }
        let stats = cache.stats();
        assert!(stats.hits > 0 && stats.misses > 0);
    }

    #[test]
    fn test_partial_last_block() {
        let data = pattern(100);
        let mut cache = cache_over(data.clone(), 64, 2, ManualClock::new());
        assert_eq!(cache.read_bytes(90, 10).unwrap(), data[90..].to_vec());
        assert!(cache.read_bytes(95, 10).is_err());
    }

    #[test]
    fn test_reads_beyond_known_length_are_io_errors() {
        let mut cache = cache_over(pattern(100), 64, 2, ManualClock::new());
        let is_eof = |err: HfsError| matches!(err, HfsError::Io(ref e) if e.kind() == std::io::ErrorKind::UnexpectedEof);
        assert!(cache.seek(100).is_ok());
        assert!(is_eof(cache.seek(101).unwrap_err()));
        assert!(is_eof(cache.read_bytes(4096, 16).unwrap_err()));
        assert!(is_eof(cache.read_bytes(95, 10).unwrap_err()));
    }

    #[test]
    fn test_read_past_end_of_unknown_length_stream() {
        let source = StreamSource::with_unknown_length(Cursor::new(pattern(100)));
        let mut cache = BlockCache::with_clock(source, 64, 2, Box::new(ManualClock::new())).unwrap();
        assert_eq!(cache.read_bytes(96, 4).unwrap(), pattern(100)[96..].to_vec());
        let err = cache.read_bytes(100, 1).unwrap_err();
        assert!(matches!(err, HfsError::Io(ref e) if e.kind() == std::io::ErrorKind::UnexpectedEof));
    }

    #[test]
    fn test_hit_does_not_touch_backing() {
        let mut cache = cache_over(pattern(256), 64, 4, ManualClock::new());
        cache.read_bytes(0, 8).unwrap();
        cache.read_bytes(8, 8).unwrap();
        assert_eq!(cache.stats(), CacheStats { hits: 1, misses: 1 });
    }

    #[test]
    fn test_frequent_block_stays_resident() {
        let mut cache = cache_over(pattern(64 * 16), 64, 3, ManualClock::new());
        for _ in 0..5 {
            cache.read_bytes(0, 1).unwrap();
        }
        // Scan other blocks; block 0 outranks them all and keeps its place
        for block in 1..10u64 {
            cache.read_bytes(block * 64, 1).unwrap();
        }
        assert_eq!(cache.resident_blocks()[0], Some(0));
        let misses = cache.stats().misses;
        cache.read_bytes(0, 1).unwrap();
        assert_eq!(cache.stats().misses, misses);
    }

    #[test]
    fn test_stale_block_is_demoted_despite_count() {
        let clock = ManualClock::new();
        let mut cache = cache_over(pattern(64 * 16), 64, 2, clock.clone());
        for _ in 0..10 {
            cache.read_bytes(0, 1).unwrap();
        }
        assert_eq!(cache.resident_blocks()[0], Some(0));

        clock.advance(TIME_TO_KEEP_IN_CACHE_MS);
        // Block 0 is hot but stale: the newly missed block takes the front slot
        cache.read_bytes(64, 1).unwrap();
        assert_eq!(cache.resident_blocks(), vec![Some(1), Some(0)]);

        // The next miss recycles the last slot, evicting block 0
        cache.read_bytes(128, 1).unwrap();
        assert!(!cache.resident_blocks().contains(&Some(0)));
        let misses = cache.stats().misses;
        cache.read_bytes(0, 1).unwrap();
        assert_eq!(cache.stats().misses, misses + 1);
    }

    #[test]
    fn test_fresh_hot_block_is_not_demoted() {
        let clock = ManualClock::new();
        let mut cache = cache_over(pattern(64 * 16), 64, 2, clock.clone());
        for _ in 0..10 {
            cache.read_bytes(0, 1).unwrap();
        }
        clock.advance(TIME_TO_KEEP_IN_CACHE_MS - 1);
        cache.read_bytes(64, 1).unwrap();
        assert_eq!(cache.resident_blocks(), vec![Some(0), Some(1)]);
    }

    #[test]
    fn test_preload_and_close() {
        let mut cache = cache_over(pattern(64 * 8), 64, 4, ManualClock::new());
        cache.preload().unwrap();
        assert_eq!(cache.resident_blocks().iter().flatten().count(), 4);
        let misses = cache.stats().misses;
        cache.read_bytes(64 * 3, 64).unwrap();
        assert_eq!(cache.stats().misses, misses);

        cache.close();
        assert!(matches!(cache.read_bytes(0, 1), Err(HfsError::Usage(_))));
        assert!(matches!(cache.seek(0), Err(HfsError::Usage(_))));
    }
}

//! Backing byte sources for volume images
//!
//! A [`ByteSource`] is the seekable byte range a volume is read from. The
//! reader never opens devices itself; callers hand it a file, an in-memory
//! buffer or a window onto a larger image.

use crate::error::{HfsError, Result};
use crate::io::CacheStats;
use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

/// Seekable, readable byte range of fixed or unknown length
pub trait ByteSource: Send {
    /// Move the read position to `pos` (absolute)
    fn seek(&mut self, pos: u64) -> Result<()>;

    /// Read up to `buf.len()` bytes at the current position
    ///
    /// Returns the number of bytes read; 0 means end of data.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize>;

    /// Total length in bytes, if known
    fn length(&self) -> Option<u64>;

    /// Release the underlying resource; later calls fail with a usage error
    fn close(&mut self) {}

    /// Hit/miss counters, for sources that cache
    fn cache_stats(&self) -> Option<CacheStats> {
        None
    }

    /// Fill `buf` from absolute offset `offset`
    fn read_exact_at(&mut self, offset: u64, buf: &mut [u8]) -> Result<()> {
        self.seek(offset)?;
        let mut filled = 0;
        while filled < buf.len() {
            let n = self.read(&mut buf[filled..])?;
            if n == 0 {
                return Err(HfsError::unexpected_eof(format!(
                    "short read at offset {}: wanted {} bytes, got {}",
                    offset,
                    buf.len(),
                    filled
                )));
            }
            filled += n;
        }
        Ok(())
    }

    /// Read `length` bytes at absolute offset `offset`
    fn read_bytes(&mut self, offset: u64, length: usize) -> Result<Vec<u8>> {
        let mut buffer = vec![0u8; length];
        self.read_exact_at(offset, &mut buffer)?;
        Ok(buffer)
    }
}

impl<S: ByteSource + ?Sized> ByteSource for Box<S> {
    fn seek(&mut self, pos: u64) -> Result<()> {
        (**self).seek(pos)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        (**self).read(buf)
    }

    fn length(&self) -> Option<u64> {
        (**self).length()
    }

    fn close(&mut self) {
        (**self).close()
    }

    fn cache_stats(&self) -> Option<CacheStats> {
        (**self).cache_stats()
    }
}

/// Byte source over any `Read + Seek` stream
pub struct StreamSource<R> {
    inner: Option<R>,
    length: Option<u64>,
}

impl<R: Read + Seek + Send> StreamSource<R> {
    /// Wrap a stream, measuring its length by seeking to the end
    pub fn new(mut inner: R) -> Result<Self> {
        let length = inner.seek(SeekFrom::End(0))?;
        inner.seek(SeekFrom::Start(0))?;
        Ok(Self {
            inner: Some(inner),
            length: Some(length),
        })
    }

    /// Wrap a stream whose length cannot be determined up front
    pub fn with_unknown_length(inner: R) -> Self {
        Self {
            inner: Some(inner),
            length: None,
        }
    }

    fn stream(&mut self) -> Result<&mut R> {
        self.inner
            .as_mut()
            .ok_or_else(|| HfsError::usage("byte source is closed"))
    }
}

impl StreamSource<BufReader<File>> {
    /// Open an image file
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Self::new(BufReader::new(file))
    }
}

impl<R: Read + Seek + Send> ByteSource for StreamSource<R> {
    fn seek(&mut self, pos: u64) -> Result<()> {
        self.stream()?.seek(SeekFrom::Start(pos))?;
        Ok(())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        Ok(self.stream()?.read(buf)?)
    }

    fn length(&self) -> Option<u64> {
        self.length
    }

    fn close(&mut self) {
        self.inner = None;
    }
}

/// Window onto `[offset, offset + length)` of another source
///
/// Used when the volume lives inside a partitioned image or an HFS wrapper.
pub struct SubRangeSource<S> {
    inner: S,
    offset: u64,
    length: u64,
    position: u64,
}

impl<S: ByteSource> SubRangeSource<S> {
    pub fn new(inner: S, offset: u64, length: u64) -> Result<Self> {
        if let Some(total) = inner.length() {
            let end = offset
                .checked_add(length)
                .ok_or_else(|| HfsError::usage("sub-range end overflows"))?;
            if end > total {
                return Err(HfsError::usage(format!(
                    "sub-range {}..{} exceeds source length {}",
                    offset, end, total
                )));
            }
        }
        Ok(Self {
            inner,
            offset,
            length,
            position: 0,
        })
    }

    /// Give back the wrapped source
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: ByteSource> ByteSource for SubRangeSource<S> {
    fn seek(&mut self, pos: u64) -> Result<()> {
        if pos > self.length {
            return Err(HfsError::unexpected_eof(format!(
                "seek to {} beyond sub-range length {}",
                pos, self.length
            )));
        }
        self.position = pos;
        Ok(())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let remaining = self.length - self.position;
        let wanted = (buf.len() as u64).min(remaining) as usize;
        if wanted == 0 {
            return Ok(0);
        }
        self.inner.seek(self.offset + self.position)?;
        let n = self.inner.read(&mut buf[..wanted])?;
        self.position += n as u64;
        Ok(n)
    }

    fn length(&self) -> Option<u64> {
        Some(self.length)
    }

    fn close(&mut self) {
        self.inner.close()
    }

    fn cache_stats(&self) -> Option<CacheStats> {
        self.inner.cache_stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    #[test]
    fn test_stream_source_reads() {
        let mut source = StreamSource::new(Cursor::new((0..=255u8).collect::<Vec<_>>())).unwrap();
        assert_eq!(source.length(), Some(256));
        assert_eq!(source.read_bytes(250, 6).unwrap(), vec![250, 251, 252, 253, 254, 255]);
        assert!(source.read_bytes(252, 8).is_err());
    }

    #[test]
    fn test_closed_source_is_usage_error() {
        let mut source = StreamSource::new(Cursor::new(vec![0u8; 16])).unwrap();
        source.close();
        assert!(matches!(source.read_bytes(0, 1), Err(HfsError::Usage(_))));
    }

    #[test]
    fn test_sub_range_source() {
        let inner = StreamSource::new(Cursor::new((0..100u8).collect::<Vec<_>>())).unwrap();
        let mut window = SubRangeSource::new(inner, 10, 20).unwrap();
        assert_eq!(window.length(), Some(20));
        assert_eq!(window.read_bytes(0, 3).unwrap(), vec![10, 11, 12]);
        assert_eq!(window.read_bytes(18, 2).unwrap(), vec![28, 29]);
        assert!(window.read_bytes(18, 3).is_err());
        assert!(matches!(window.read_bytes(40, 1), Err(HfsError::Io(_))));
        assert!(SubRangeSource::new(window.into_inner(), 90, 20).is_err());
    }

    #[test]
    fn test_file_source() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"0123456789").unwrap();
        file.flush().unwrap();
        let mut source = StreamSource::open(file.path()).unwrap();
        assert_eq!(source.length(), Some(10));
        assert_eq!(source.read_bytes(4, 3).unwrap(), b"456".to_vec());
    }
}

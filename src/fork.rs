//! Byte-stream access to a file's data or resource fork

use crate::error::{HfsError, Result};
use crate::extents::ForkMap;
use crate::types::{Cnid, ForkType};
use crate::volume::Volume;
use std::io::{self, Read, Seek, SeekFrom};

/// Reader over one fork of an open volume
///
/// Holds the volume mutably for its lifetime; extents beyond the inline
/// ones are pulled from the overflow tree as reads reach them.
pub struct ForkReader<'v> {
    volume: &'v mut Volume,
    map: ForkMap,
    position: u64,
}

impl<'v> ForkReader<'v> {
    pub(crate) fn new(volume: &'v mut Volume, map: ForkMap) -> Self {
        Self {
            volume,
            map,
            position: 0,
        }
    }

    /// Logical length of the fork in bytes
    pub fn len(&self) -> u64 {
        self.map.logical_size()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn file_id(&self) -> Cnid {
        self.map.file_id()
    }

    pub fn fork_type(&self) -> ForkType {
        self.map.fork_type()
    }

    /// Read exactly `length` bytes at `offset` without moving the position
    pub fn read_at(&mut self, offset: u64, length: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; length];
        self.volume.read_mapped(&mut self.map, offset, &mut buf)?;
        Ok(buf)
    }

    /// Whole fork contents
    pub fn read_all(&mut self) -> Result<Vec<u8>> {
        let len = usize::try_from(self.len())
            .map_err(|_| HfsError::Unsupported(format!("fork of {} bytes does not fit in memory", self.len())))?;
        self.read_at(0, len)
    }
}

impl Read for ForkReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let len = self.len();
        if buf.is_empty() || self.position >= len {
            return Ok(0);
        }
        let n = (buf.len() as u64).min(len - self.position) as usize;
        self.volume.read_mapped(&mut self.map, self.position, &mut buf[..n])?;
        self.position += n as u64;
        Ok(n)
    }
}

impl Seek for ForkReader<'_> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let target = match pos {
            SeekFrom::Start(offset) => Some(offset),
            SeekFrom::End(delta) => self.len().checked_add_signed(delta),
            SeekFrom::Current(delta) => self.position.checked_add_signed(delta),
        };
        match target {
            Some(position) => {
                self.position = position;
                Ok(position)
            }
            None => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "seek to a negative or overflowing position",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::error::HfsError;
    use crate::testing::ImageBuilder;
    use crate::types::ForkType;
    use std::io::{Read, Seek, SeekFrom};

    fn pattern(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i * 7 % 251) as u8).collect()
    }

    #[test]
    fn test_read_contiguous_fork() {
        let data = pattern(3000);
        let mut image = ImageBuilder::hfs_plus(512, 512);
        let cnid = image.add_file_with_data(2, "data.bin", &data);
        let mut volume = image.open();

        let mut reader = volume.open_fork(cnid, ForkType::Data).unwrap();
        assert_eq!(reader.len(), 3000);
        let mut out = Vec::new();
        reader.read_to_end(&mut out).unwrap();
        assert_eq!(out, data);
        // At end: zero bytes, not an error
        assert_eq!(reader.read(&mut [0u8; 16]).unwrap(), 0);
    }

    #[test]
    fn test_read_fragmented_fork_through_overflow() {
        let data = pattern(20 * 512 - 100);
        let mut image = ImageBuilder::hfs_plus(512, 512);
        let cnid = image.add_fragmented_file(2, "frag.bin", &data);
        let mut volume = image.open();

        let mut reader = volume.open_fork(cnid, ForkType::Data).unwrap();
        let mut out = Vec::new();
        reader.read_to_end(&mut out).unwrap();
        assert_eq!(out.len(), data.len());
        assert!(out == data);
    }

    #[test]
    fn test_seek_and_partial_reads() {
        let data = pattern(5000);
        let mut image = ImageBuilder::hfs(512);
        let cnid = image.add_fragmented_file(2, "hfs frag", &data);
        let mut volume = image.open();

        let mut reader = volume.open_fork(cnid, ForkType::Data).unwrap();
        reader.seek(SeekFrom::Start(4000)).unwrap();
        let mut buf = [0u8; 100];
        reader.read_exact(&mut buf).unwrap();
        assert_eq!(&buf[..], &data[4000..4100]);

        reader.seek(SeekFrom::End(-10)).unwrap();
        let mut tail = Vec::new();
        reader.read_to_end(&mut tail).unwrap();
        assert_eq!(tail, &data[4990..]);
        assert!(reader.seek(SeekFrom::Current(-6000)).is_err());
        assert_eq!(reader.read_at(1, 3).unwrap(), &data[1..4]);
    }

    #[test]
    fn test_resource_fork_and_end_of_fork() {
        let mut image = ImageBuilder::hfs_plus(512, 512);
        let cnid = image.add_file_with_forks(2, "Icon", b"data fork", b"resource fork bytes");
        let mut volume = image.open();

        let mut reader = volume.open_fork(cnid, ForkType::Resource).unwrap();
        assert_eq!(reader.read_all().unwrap(), b"resource fork bytes");
        assert!(matches!(reader.read_at(19, 1), Err(HfsError::EndOfFork { .. })));
        assert!(matches!(reader.read_at(30, 1), Err(HfsError::EndOfFork { .. })));
    }
}

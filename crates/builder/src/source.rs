// Chunk: docs/chunks/builder_sources - Building from sized readable sources

//! Readable sources that know how many bytes they have left.
//!
//! [`StringBuilder::from_source`] sizes its content region from
//! [`SizedReadable::remaining_len`] and then reads exactly that many bytes.
//!
//! [`StringBuilder::from_source`]: crate::StringBuilder::from_source

use std::fs::File;
use std::io::{self, Cursor, Read, Seek};

/// A reader that can report the number of bytes remaining before EOF.
pub trait SizedReadable: Read {
    /// Returns the number of bytes between the current position and EOF.
    ///
    /// # Errors
    ///
    /// Returns an error if the length cannot be determined.
    fn remaining_len(&mut self) -> io::Result<u64>;
}

impl SizedReadable for File {
    fn remaining_len(&mut self) -> io::Result<u64> {
        let total = self.metadata()?.len();
        let position = self.stream_position()?;
        Ok(total.saturating_sub(position))
    }
}

impl<T: AsRef<[u8]>> SizedReadable for Cursor<T> {
    fn remaining_len(&mut self) -> io::Result<u64> {
        let total = self.get_ref().as_ref().len() as u64;
        Ok(total.saturating_sub(self.position()))
    }
}

impl SizedReadable for &[u8] {
    fn remaining_len(&mut self) -> io::Result<u64> {
        Ok(self.len() as u64)
    }
}

impl<R: SizedReadable + ?Sized> SizedReadable for &mut R {
    fn remaining_len(&mut self) -> io::Result<u64> {
        (**self).remaining_len()
    }
}

/// Reads into `buf` until it is full or the reader hits EOF.
///
/// Returns the number of bytes read.
pub(crate) fn read_up_to<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{SeekFrom, Write};

    #[test]
    fn test_slice_remaining_len() {
        let mut src: &[u8] = b"hello";
        assert_eq!(src.remaining_len().unwrap(), 5);
        let mut one = [0u8; 1];
        src.read_exact(&mut one).unwrap();
        assert_eq!(src.remaining_len().unwrap(), 4);
    }

    #[test]
    fn test_cursor_remaining_len() {
        let mut cursor = Cursor::new(b"hello world".to_vec());
        cursor.set_position(6);
        assert_eq!(cursor.remaining_len().unwrap(), 5);
        cursor.set_position(100);
        assert_eq!(cursor.remaining_len().unwrap(), 0);
    }

    #[test]
    fn test_file_remaining_len() {
        let mut file = tempfile::tempfile().unwrap();
        file.write_all(b"0123456789").unwrap();
        file.seek(SeekFrom::Start(3)).unwrap();
        assert_eq!(file.remaining_len().unwrap(), 7);
    }

    #[test]
    fn test_read_up_to_stops_at_eof() {
        let mut src: &[u8] = b"abc";
        let mut buf = [0u8; 8];
        assert_eq!(read_up_to(&mut src, &mut buf).unwrap(), 3);
        assert_eq!(&buf[..3], b"abc");
    }

    #[test]
    fn test_read_up_to_fills_buffer() {
        let mut src: &[u8] = b"abcdef";
        let mut buf = [0u8; 4];
        assert_eq!(read_up_to(&mut src, &mut buf).unwrap(), 4);
        assert_eq!(&buf, b"abcd");
    }
}

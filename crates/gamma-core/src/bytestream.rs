/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A simple implementation of a bytestream reader
//!
//! Useful for header parsing in image readers, it's put
//! here to minimize code reuse

/// An encapsulation of a byte stream reader
///
/// This provides an interface similar to [std::io::Cursor] but
/// it never fails, reads past the end of the stream return `0`
/// and callers are expected to check [`eof`](Self::eof) or [`has`](Self::has).
pub struct ZByteReader<'a> {
    /// Data stream
    stream:   &'a [u8],
    position: usize
}

impl<'a> ZByteReader<'a> {
    /// Create a new instance of the byte stream
    pub const fn new(buf: &'a [u8]) -> ZByteReader<'a> {
        ZByteReader {
            stream:   buf,
            position: 0
        }
    }
    /// Skip `num` bytes ahead of the stream.
    ///
    /// Skipping past the end saturates at the stream end
    pub fn skip(&mut self, num: usize) {
        self.position = self.position.saturating_add(num).min(self.stream.len());
    }
    /// Undo a buffer read by moving the position pointer `num`
    /// bytes behind.
    ///
    /// This operation will saturate at zero
    pub fn rewind(&mut self, num: usize) {
        self.position = self.position.saturating_sub(num);
    }

    /// Return whether the underlying buffer
    /// has `num` bytes available for reading
    #[inline]
    pub const fn has(&self, num: usize) -> bool {
        self.position.saturating_add(num) <= self.stream.len()
    }
    /// Get number of bytes available in the stream
    #[inline]
    pub const fn get_bytes_left(&self) -> usize {
        // Must be saturating to prevent underflow
        self.stream.len().saturating_sub(self.position)
    }
    /// Get length of the underlying buffer.
    #[inline]
    pub const fn len(&self) -> usize {
        self.stream.len()
    }
    /// Return true if the underlying buffer stream is empty
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.stream.is_empty()
    }
    /// Get current position of the buffer.
    #[inline]
    pub const fn get_position(&self) -> usize {
        self.position
    }
    /// Return true whether or not we read to the end of the
    /// buffer and have no more bytes left.
    #[inline]
    pub const fn eof(&self) -> bool {
        self.position >= self.len()
    }
    /// Get number of bytes remaining in the stream
    #[inline]
    pub const fn remaining(&self) -> usize {
        self.get_bytes_left()
    }
    /// Get a single byte from the stream, or `0` at the end of the stream
    #[inline(always)]
    pub fn get_u8(&mut self) -> u8 {
        match self.stream.get(self.position) {
            Some(byte) => {
                self.position += 1;
                *byte
            }
            None => 0
        }
    }
    /// Get a single byte from the stream or an error at the end of the stream
    #[inline(always)]
    pub fn get_u8_err(&mut self) -> Result<u8, &'static str> {
        match self.stream.get(self.position) {
            Some(byte) => {
                self.position += 1;
                Ok(*byte)
            }
            None => Err("No more bytes")
        }
    }
    /// Look ahead `position` bytes from the current position and
    /// return a reference to `num_bytes` from that position
    ///
    /// This does not advance the stream
    pub fn peek_at(&self, position: usize, num_bytes: usize) -> Result<&'a [u8], &'static str> {
        let start = self.position.saturating_add(position);
        let end = start.saturating_add(num_bytes);

        self.stream.get(start..end).ok_or("Not enough bytes")
    }
    /// Return a reference to the next `size` bytes and advance past them
    pub fn get_as_ref(&mut self, size: usize) -> Result<&'a [u8], &'static str> {
        let bytes = self.peek_at(0, size)?;
        self.position += size;

        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use crate::bytestream::ZByteReader;

    #[test]
    fn reads_past_end_return_zero() {
        let mut reader = ZByteReader::new(&[1, 2]);

        assert_eq!(reader.get_u8(), 1);
        assert_eq!(reader.get_u8(), 2);
        assert!(reader.eof());
        assert_eq!(reader.get_u8(), 0);
        assert!(reader.get_u8_err().is_err());
    }

    #[test]
    fn rewind_and_skip_saturate() {
        let mut reader = ZByteReader::new(b"P6\n");

        reader.rewind(10);
        assert_eq!(reader.get_position(), 0);

        reader.skip(100);
        assert_eq!(reader.get_position(), 3);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn get_as_ref_advances() {
        let mut reader = ZByteReader::new(b"abcdef");
        reader.skip(1);

        assert_eq!(reader.get_as_ref(3).unwrap(), b"bcd");
        assert_eq!(reader.get_position(), 4);
        assert!(reader.get_as_ref(3).is_err());
        assert!(reader.has(2));
        assert!(!reader.has(3));
    }
}

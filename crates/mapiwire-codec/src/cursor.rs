//! Cursor over a borrowed byte buffer.
//!
//! Every decoder in this crate is a fixed sequence of cursor reads. Reads
//! are bounds-checked before touching the buffer and all multi-byte
//! integers are little-endian regardless of the host.

use crate::{Error, Result};

/// Sequential reader over a borrowed byte buffer.
///
/// The position never exceeds the buffer length. A failed read leaves the
/// position where it was.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at offset 0.
    #[must_use]
    pub const fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    /// Creates a cursor at an arbitrary offset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `pos` is past the end of `input`.
    pub fn at(input: &'a [u8], pos: usize) -> Result<Self> {
        if pos > input.len() {
            return Err(Error::OutOfBounds {
                offset: pos,
                requested: 0,
                available: 0,
            });
        }
        Ok(Self { input, pos })
    }

    /// Returns the current position in the input.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Returns the unread part of the input.
    #[must_use]
    pub fn remaining(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }

    /// Returns the number of unread bytes.
    #[must_use]
    pub const fn remaining_len(&self) -> usize {
        self.input.len() - self.pos
    }

    /// Returns true if every byte has been consumed.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Borrows the next `n` bytes and advances past them.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if fewer than `n` bytes remain.
    pub fn read_slice(&mut self, n: usize) -> Result<&'a [u8]> {
        let available = self.remaining_len();
        let end = match self.pos.checked_add(n) {
            Some(end) if n <= available => end,
            _ => {
                return Err(Error::OutOfBounds {
                    offset: self.pos,
                    requested: n,
                    available,
                });
            }
        };
        let slice = &self.input[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    /// Copies the next `n` bytes into an owned buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if fewer than `n` bytes remain.
    pub fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        self.read_slice(n).map(<[u8]>::to_vec)
    }

    /// Reads a fixed-size array, e.g. a GUID.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if fewer than `N` bytes remain.
    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_slice(N)?);
        Ok(out)
    }

    /// Reads one byte.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] at end of input.
    pub fn read_u8(&mut self) -> Result<u8> {
        self.read_array::<1>().map(|[b]| b)
    }

    /// Reads a little-endian `u16`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if fewer than 2 bytes remain.
    pub fn read_u16(&mut self) -> Result<u16> {
        self.read_array().map(u16::from_le_bytes)
    }

    /// Reads a little-endian `u32`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if fewer than 4 bytes remain.
    pub fn read_u32(&mut self) -> Result<u32> {
        self.read_array().map(u32::from_le_bytes)
    }

    /// Reads a little-endian `i32`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if fewer than 4 bytes remain.
    pub fn read_i32(&mut self) -> Result<i32> {
        self.read_array().map(i32::from_le_bytes)
    }

    /// Reads a little-endian `u64`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if fewer than 8 bytes remain.
    pub fn read_u64(&mut self) -> Result<u64> {
        self.read_array().map(u64::from_le_bytes)
    }

    /// Reads a little-endian `i64`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if fewer than 8 bytes remain.
    pub fn read_i64(&mut self) -> Result<i64> {
        self.read_array().map(i64::from_le_bytes)
    }

    /// Reads a null-terminated UTF-16LE string.
    ///
    /// The terminator is consumed but not returned. On error the cursor
    /// does not move.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if no terminator is found and
    /// [`Error::InvalidUtf16`] on an unpaired surrogate.
    pub fn read_utf16_nul(&mut self) -> Result<String> {
        let start = self.pos;
        let mut scan = self.clone();
        let mut units = Vec::new();

        loop {
            match scan.read_u16()? {
                0 => break,
                unit => units.push(unit),
            }
        }

        let s = String::from_utf16(&units).map_err(|_| Error::InvalidUtf16 { offset: start })?;
        self.pos = scan.pos;
        Ok(s)
    }
}

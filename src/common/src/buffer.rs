//! Fixed-capacity ASCII byte buffers.
//!
//! The kernel has no heap, so every line of text it keeps lives in one of
//! these. Appends are checked and report [`BufferError`] instead of writing
//! past the end; callers decide whether that means "drop the byte" or
//! "truncate".

use crate::error::BufferError;
use core::fmt;

/// A bounded sequence of up to `N` ASCII bytes.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct AsciiBuf<const N: usize> {
    bytes: [u8; N],
    len: usize,
}

impl<const N: usize> AsciiBuf<N> {
    /// Maximum number of bytes the buffer can hold.
    pub const CAPACITY: usize = N;

    /// Creates an empty buffer.
    pub const fn new() -> Self {
        Self {
            bytes: [0; N],
            len: 0,
        }
    }

    /// Number of bytes currently stored.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if nothing is stored.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if no further byte fits.
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Appends one byte.
    pub fn try_push(&mut self, byte: u8) -> Result<(), BufferError> {
        if !byte.is_ascii() {
            return Err(BufferError::NotAscii);
        }
        if self.is_full() {
            return Err(BufferError::Full);
        }
        self.bytes[self.len] = byte;
        self.len += 1;
        Ok(())
    }

    /// Appends as many bytes of `s` as fit.
    ///
    /// Returns `Err(BufferError::Full)` if `s` was cut short; the bytes that
    /// did fit stay in the buffer.
    pub fn try_extend(&mut self, s: &str) -> Result<(), BufferError> {
        for byte in s.bytes() {
            self.try_push(byte)?;
        }
        Ok(())
    }

    /// Replaces the contents with `s`, truncating to the capacity.
    pub fn replace(&mut self, s: &str) -> Result<(), BufferError> {
        self.clear();
        self.try_extend(s)
    }

    /// Removes and returns the last byte.
    pub fn pop(&mut self) -> Option<u8> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let byte = self.bytes[self.len];
        self.bytes[self.len] = 0;
        Some(byte)
    }

    /// Empties the buffer and zeroes its storage.
    pub fn clear(&mut self) {
        self.bytes = [0; N];
        self.len = 0;
    }

    /// The stored bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// The stored bytes as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII is ever stored, which is always valid UTF-8.
        core::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }
}

impl<const N: usize> Default for AsciiBuf<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for AsciiBuf<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsciiBuf")
            .field("contents", &self.as_str())
            .field("capacity", &N)
            .finish()
    }
}

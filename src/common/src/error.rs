//! System-wide error types for MiniOS.

use core::fmt;

/// Bounded buffer error types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BufferError {
    /// No room left for the byte(s)
    Full,
    /// Byte outside the 7-bit ASCII range
    NotAscii,
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::Full => write!(f, "buffer full"),
            BufferError::NotAscii => write!(f, "byte is not ASCII"),
        }
    }
}

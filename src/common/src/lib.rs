//! Types shared between the MiniOS kernel crates.

#![cfg_attr(not(test), no_std)]

pub mod buffer;
pub mod error;
pub mod modifiers;

pub use buffer::AsciiBuf;
pub use error::BufferError;
pub use modifiers::Modifiers;

//! Architecture-specific implementations.
//!
//! This module provides the bare-metal side of the hardware seams.
//! Currently supported: x86_64.

#[cfg(target_arch = "x86_64")]
pub mod x86_64;

#[cfg(target_arch = "x86_64")]
pub use self::x86_64::*;

//! System-on-Chip (SoC) Components.
//!
//! This module organizes the storage the front end fetches from: the
//! [`AddressableMemory`] trait and the flat, bounds-checked [`Memory`] that
//! implements it.

/// Bounds- and alignment-checked main memory.
pub mod memory;

/// Addressable memory trait and access widths.
pub mod traits;

pub use memory::Memory;
pub use traits::{AddressableMemory, Width};

//! Core architectural state.
//!
//! This module contains the register storage consumed by execution logic. The
//! pipeline, execution units, and orchestration that drive it live outside this
//! crate.

/// Architecture-specific components (register cells and register files).
pub mod arch;

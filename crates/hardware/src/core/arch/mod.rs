//! RISC-V architectural register storage.
//!
//! This module contains the storage the front end exposes to execution logic.
//! It includes the following modules:
//! 1. **Register:** The single 64-bit storage cell.
//! 2. **GPRs:** General-Purpose Register file implementation.
//! 3. **FPRs:** Floating-Point Register file implementation.

/// Floating-Point Register file implementation.
pub mod fpr;

/// General-Purpose Register file implementation.
pub mod gpr;

/// Single 64-bit register cell.
pub mod register;

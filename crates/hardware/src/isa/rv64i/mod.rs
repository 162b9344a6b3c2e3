//! RV64I base integer encodings.
//!
//! Constants the decoder matches against when classifying integer words and
//! checking their funct fields. Nothing here describes execution.
//!
//! # Structure
//!
//! - `opcodes`: Major opcodes, each of which fixes the encoding format.
//! - `funct3`: Load/store widths, branch conditions, and ALU selectors.
//! - `funct7`: Alternate-encoding selectors for OP/OP-32 and the 6-bit shift selector.

/// funct3 values of loads, stores, branches, ALU operations, JALR, and FENCE.
pub mod funct3;

/// funct7 and shift-immediate funct6 selectors.
pub mod funct7;

/// RV64I major opcodes.
pub mod opcodes;

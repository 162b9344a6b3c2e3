//! RV64M multiply/divide encodings.
//!
//! M words reuse the OP and OP-32 major opcodes; a funct7 of `M_EXTENSION`
//! selects them, and funct3 names the operation. OP-32 only defines the
//! `mulw`, `divw`, `divuw`, `remw`, and `remuw` forms.

/// funct3 operation selectors (MUL through REMU).
pub mod funct3;

/// The funct7 value that marks an M word.
pub mod opcodes;

//! RISC-V Application Binary Interface (ABI) register names.
//!
//! Defines the canonical mapping between register indices and their ABI names.
//! Every consumer that prints or parses register names (disassembler, register
//! dumps, the CLI) goes through this module.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::common::error::RegisterError;

/// Symbolic name of one of the 32 general-purpose registers.
///
/// Discriminants equal the architectural index, so `RegisterAlias::A0 as u8 == 10`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum RegisterAlias {
    /// `x0`, hardwired to zero.
    Zero = 0,
    /// `x1`, return address.
    Ra,
    /// `x2`, stack pointer.
    Sp,
    /// `x3`, global pointer.
    Gp,
    /// `x4`, thread pointer.
    Tp,
    /// `x5`, temporary / alternate link register.
    T0,
    /// `x6`, temporary.
    T1,
    /// `x7`, temporary.
    T2,
    /// `x8`, saved register / frame pointer.
    S0,
    /// `x9`, saved register.
    S1,
    /// `x10`, argument / return value.
    A0,
    /// `x11`, argument / return value.
    A1,
    /// `x12`, argument.
    A2,
    /// `x13`, argument.
    A3,
    /// `x14`, argument.
    A4,
    /// `x15`, argument.
    A5,
    /// `x16`, argument.
    A6,
    /// `x17`, argument / system call number.
    A7,
    /// `x18`, saved register.
    S2,
    /// `x19`, saved register.
    S3,
    /// `x20`, saved register.
    S4,
    /// `x21`, saved register.
    S5,
    /// `x22`, saved register.
    S6,
    /// `x23`, saved register.
    S7,
    /// `x24`, saved register.
    S8,
    /// `x25`, saved register.
    S9,
    /// `x26`, saved register.
    S10,
    /// `x27`, saved register.
    S11,
    /// `x28`, temporary.
    T3,
    /// `x29`, temporary.
    T4,
    /// `x30`, temporary.
    T5,
    /// `x31`, temporary.
    T6,
}

/// ABI register names for x0–x31.
const REG_NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// ABI register names for f0–f31.
const FREG_NAMES: [&str; 32] = [
    "ft0", "ft1", "ft2", "ft3", "ft4", "ft5", "ft6", "ft7", "fs0", "fs1", "fa0", "fa1", "fa2",
    "fa3", "fa4", "fa5", "fa6", "fa7", "fs2", "fs3", "fs4", "fs5", "fs6", "fs7", "fs8", "fs9",
    "fs10", "fs11", "ft8", "ft9", "ft10", "ft11",
];

/// Mask selecting the 5-bit register field.
const REG_FIELD_MASK: u32 = 0x1F;

impl RegisterAlias {
    /// Every alias in index order.
    pub const ALL: [Self; 32] = [
        Self::Zero,
        Self::Ra,
        Self::Sp,
        Self::Gp,
        Self::Tp,
        Self::T0,
        Self::T1,
        Self::T2,
        Self::S0,
        Self::S1,
        Self::A0,
        Self::A1,
        Self::A2,
        Self::A3,
        Self::A4,
        Self::A5,
        Self::A6,
        Self::A7,
        Self::S2,
        Self::S3,
        Self::S4,
        Self::S5,
        Self::S6,
        Self::S7,
        Self::S8,
        Self::S9,
        Self::S10,
        Self::S11,
        Self::T3,
        Self::T4,
        Self::T5,
        Self::T6,
    ];

    /// Frame pointer, an alternate ABI name for `s0`.
    pub const FP: Self = Self::S0;

    /// Builds an alias from a 5-bit register field.
    ///
    /// Bits above bit 4 are ignored, so any extracted field maps onto a valid register.
    #[inline(always)]
    pub const fn from_field(bits: u32) -> Self {
        Self::ALL[(bits & REG_FIELD_MASK) as usize]
    }

    /// Builds an alias from an untrusted index.
    ///
    /// # Errors
    ///
    /// Returns [`RegisterError::InvalidIndex`] if `idx` is not in 0..=31.
    pub const fn from_index(idx: u32) -> Result<Self, RegisterError> {
        if idx > REG_FIELD_MASK {
            return Err(RegisterError::InvalidIndex(idx));
        }
        Ok(Self::ALL[idx as usize])
    }

    /// Returns the architectural index (0-31).
    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the ABI name (`"zero"`, `"ra"`, `"a0"`, ...).
    pub const fn name(self) -> &'static str {
        REG_NAMES[self as usize]
    }
}

impl fmt::Display for RegisterAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<RegisterAlias> for usize {
    fn from(reg: RegisterAlias) -> Self {
        reg.index()
    }
}

impl TryFrom<u32> for RegisterAlias {
    type Error = RegisterError;

    fn try_from(idx: u32) -> Result<Self, Self::Error> {
        Self::from_index(idx)
    }
}

impl FromStr for RegisterAlias {
    type Err = RegisterError;

    /// Parses an ABI name (`a0`), the `fp` alias, or a numeric name (`x10`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        if name == "fp" {
            return Ok(Self::FP);
        }
        if let Some(pos) = REG_NAMES.iter().position(|n| *n == name) {
            return Ok(Self::ALL[pos]);
        }
        parse_numbered(&name, 'x')
            .and_then(|idx| Self::from_index(idx).ok())
            .ok_or_else(|| RegisterError::UnknownName(s.to_string()))
    }
}

/// Index of one of the 32 floating-point registers.
///
/// Used by the R4 (fused multiply-add) format and by floating-point loads and
/// stores. The value is always in 0..=31.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FpRegister(u8);

impl FpRegister {
    /// Builds a register from a 5-bit register field, ignoring higher bits.
    #[inline(always)]
    pub const fn from_field(bits: u32) -> Self {
        Self((bits & REG_FIELD_MASK) as u8)
    }

    /// Builds a register from an untrusted index.
    ///
    /// # Errors
    ///
    /// Returns [`RegisterError::InvalidIndex`] if `idx` is not in 0..=31.
    pub const fn from_index(idx: u32) -> Result<Self, RegisterError> {
        if idx > REG_FIELD_MASK {
            return Err(RegisterError::InvalidIndex(idx));
        }
        Ok(Self(idx as u8))
    }

    /// Returns the architectural index (0-31).
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the ABI name (`"ft0"`, `"fa0"`, ...).
    pub const fn name(self) -> &'static str {
        FREG_NAMES[self.0 as usize]
    }
}

impl fmt::Display for FpRegister {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for FpRegister {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl FromStr for FpRegister {
    type Err = RegisterError;

    /// Parses an ABI name (`fa0`) or a numeric name (`f10`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        if let Some(pos) = FREG_NAMES.iter().position(|n| *n == name) {
            return Ok(Self(pos as u8));
        }
        parse_numbered(&name, 'f')
            .and_then(|idx| Self::from_index(idx).ok())
            .ok_or_else(|| RegisterError::UnknownName(s.to_string()))
    }
}

/// Parses names of the form `<prefix><decimal>`, e.g. `x17`.
fn parse_numbered(name: &str, prefix: char) -> Option<u32> {
    let digits = name.strip_prefix(prefix)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

//! Semantic oracle: expected results under the target library's integer
//! conventions.
//!
//! Division truncates toward zero and modulo carries the dividend's sign,
//! matching systems-language fixed-width behavior rather than floor
//! division. Bitwise and shift results are reported as the raw unsigned
//! bits of the operands' two's-complement forms, never as negative values.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive, Zero};
use serde::{Deserialize, Serialize};

use crate::codec::to_twos_complement;
use crate::error::OracleError;

/// Largest shift amount the oracle accepts. Keeps representation widths
/// tractable; the generator draws amounts from `[0, MAX_SHIFT]`.
pub const MAX_SHIFT: u32 = 16;

/// Symbolic operator tag carried in serialized vectors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Op {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    #[serde(rename = "/")]
    Div,
    #[serde(rename = "%")]
    Rem,
    #[serde(rename = "&")]
    BitAnd,
    #[serde(rename = "|")]
    BitOr,
    #[serde(rename = "^")]
    BitXor,
    #[serde(rename = "<<")]
    Shl,
    #[serde(rename = ">>")]
    Shr,
}

impl Op {
    /// All supported operators, in suite order.
    pub const ALL: [Op; 10] = [
        Op::Add,
        Op::Sub,
        Op::Mul,
        Op::Div,
        Op::Rem,
        Op::BitAnd,
        Op::BitOr,
        Op::BitXor,
        Op::Shl,
        Op::Shr,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::Rem => "%",
            Op::BitAnd => "&",
            Op::BitOr => "|",
            Op::BitXor => "^",
            Op::Shl => "<<",
            Op::Shr => ">>",
        }
    }

    /// Whether a zero right-hand operand must be filtered out upstream.
    pub fn requires_nonzero_rhs(self) -> bool {
        matches!(self, Op::Div | Op::Rem)
    }

    /// Whether the right-hand operand is a bounded shift amount.
    pub fn is_shift(self) -> bool {
        matches!(self, Op::Shl | Op::Shr)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Op {
    type Err = OracleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Op::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| OracleError::InvalidArgument(format!("unknown operator: {s:?}")))
    }
}

/// Compute the expected result of `a op b`.
///
/// Arithmetic is exact and unbounded. `num-bigint` division already
/// truncates toward zero with a dividend-sign remainder, so `/` and `%`
/// need no adjustment — only the zero-divisor guard. Bitwise and shift
/// operands are independently converted to their unsigned two's-complement
/// forms first; the narrower operand zero-extends.
pub fn evaluate(op: Op, a: &BigInt, b: &BigInt) -> Result<BigInt, OracleError> {
    match op {
        Op::Add => Ok(a + b),
        Op::Sub => Ok(a - b),
        Op::Mul => Ok(a * b),
        Op::Div => {
            nonzero(b)?;
            Ok(a / b)
        }
        Op::Rem => {
            nonzero(b)?;
            Ok(a % b)
        }
        Op::BitAnd => Ok(BigInt::from(to_twos_complement(a) & to_twos_complement(b))),
        Op::BitOr => Ok(BigInt::from(to_twos_complement(a) | to_twos_complement(b))),
        Op::BitXor => Ok(BigInt::from(to_twos_complement(a) ^ to_twos_complement(b))),
        Op::Shl => {
            let amount = shift_amount(b)?;
            // Width growth: the result is the exact unsigned value, wider
            // by `amount` bits.
            Ok(BigInt::from(to_twos_complement(a) << amount))
        }
        Op::Shr => {
            let amount = shift_amount(b)?;
            Ok(BigInt::from(to_twos_complement(a) >> amount))
        }
    }
}

fn nonzero(b: &BigInt) -> Result<(), OracleError> {
    if b.is_zero() {
        Err(OracleError::DivisionByZero)
    } else {
        Ok(())
    }
}

fn shift_amount(b: &BigInt) -> Result<u32, OracleError> {
    if b.is_negative() {
        return Err(OracleError::InvalidArgument(format!(
            "shift amount must be non-negative, got {b}"
        )));
    }
    match b.to_u32() {
        Some(amount) if amount <= MAX_SHIFT => Ok(amount),
        _ => Err(OracleError::InvalidArgument(format!(
            "shift amount must be at most {MAX_SHIFT}, got {b}"
        ))),
    }
}

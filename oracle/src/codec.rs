//! Two's-complement text codec.
//!
//! Decimal is plain signed text. Hex and binary encode the value's unsigned
//! two's-complement form at 8-bit granularity, uppercase, zero-padded to a
//! whole number of bytes. Non-negative values carry one extra zero byte so
//! that a positive value can never collide textually with the
//! two's-complement encoding of a negative one — the consuming library
//! reads the sign purely from the top bit of the top byte.

use std::fmt;
use std::str::FromStr;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::One;
use serde::{Deserialize, Serialize};

use crate::error::OracleError;

/// Encoding granularity in bits: hex/bin texts always cover whole bytes.
pub const GRANULARITY_BITS: u64 = 8;

/// Text encoding of operands and expected results.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Decimal,
    Hex,
    Bin,
}

impl Format {
    /// The tag used in serialized vectors.
    pub fn tag(self) -> &'static str {
        match self {
            Format::Decimal => "decimal",
            Format::Hex => "hex",
            Format::Bin => "bin",
        }
    }

    fn digits_per_byte(self) -> usize {
        match self {
            Format::Decimal => 0,
            Format::Hex => 2,
            Format::Bin => 8,
        }
    }

    fn radix(self) -> u32 {
        match self {
            Format::Decimal => 10,
            Format::Hex => 16,
            Format::Bin => 2,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Format {
    type Err = OracleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "decimal" => Ok(Format::Decimal),
            "hex" => Ok(Format::Hex),
            "bin" => Ok(Format::Bin),
            other => Err(OracleError::InvalidFormat(other.to_string())),
        }
    }
}

/// Representation width for a negative value of the given magnitude: the
/// smallest multiple of 8 bits with `magnitude <= 2^(N-1)`, so the encoded
/// form always has its sign bit set.
fn twos_complement_width(magnitude: &BigUint) -> u64 {
    let bits = magnitude.bits().max(1);
    let width = (bits + GRANULARITY_BITS - 1) / GRANULARITY_BITS * GRANULARITY_BITS;
    if *magnitude > (BigUint::one() << (width - 1)) {
        width + GRANULARITY_BITS
    } else {
        width
    }
}

/// Unsigned two's-complement form of a signed value: the value itself when
/// non-negative, `2^N - |value|` at the minimal byte-rounded width otherwise.
pub fn to_twos_complement(value: &BigInt) -> BigUint {
    let magnitude = value.magnitude();
    if value.sign() == Sign::Minus {
        let width = twos_complement_width(magnitude);
        (BigUint::one() << width) - magnitude
    } else {
        magnitude.clone()
    }
}

/// Encode a signed value in the given format.
pub fn encode(value: &BigInt, format: Format) -> String {
    match format {
        Format::Decimal => value.to_str_radix(10),
        Format::Hex | Format::Bin => encode_twos_complement(value, format),
    }
}

fn encode_twos_complement(value: &BigInt, format: Format) -> String {
    let per_byte = format.digits_per_byte();
    if value.sign() == Sign::Minus {
        let width = twos_complement_width(value.magnitude());
        let unsigned = (BigUint::one() << width) - value.magnitude();
        let digits = unsigned.to_str_radix(format.radix()).to_uppercase();
        let total = (width / GRANULARITY_BITS) as usize * per_byte;
        format!("{:0>total$}", digits, total = total)
    } else {
        let digits = value.magnitude().to_str_radix(format.radix()).to_uppercase();
        let padded = (digits.len() + per_byte - 1) / per_byte * per_byte;
        // Extra zero byte: the positive sign-disambiguation pad.
        format!("{:0>total$}", digits, total = padded + per_byte)
    }
}

/// Decode text produced by [`encode`] back into a signed value.
pub fn decode(text: &str, format: Format) -> Result<BigInt, OracleError> {
    match format {
        Format::Decimal => decode_decimal(text),
        Format::Hex | Format::Bin => decode_twos_complement(text, format),
    }
}

fn decode_decimal(text: &str) -> Result<BigInt, OracleError> {
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => (Sign::Minus, rest),
        None => (Sign::Plus, text),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(OracleError::InvalidArgument(format!(
            "malformed decimal text: {text:?}"
        )));
    }
    let magnitude = BigUint::parse_bytes(digits.as_bytes(), 10).ok_or_else(|| {
        OracleError::InvalidArgument(format!("malformed decimal text: {text:?}"))
    })?;
    Ok(BigInt::from_biguint(sign, magnitude))
}

fn decode_twos_complement(text: &str, format: Format) -> Result<BigInt, OracleError> {
    let per_byte = format.digits_per_byte();
    if text.is_empty() || text.len() % per_byte != 0 {
        return Err(OracleError::InvalidArgument(format!(
            "{format} text must cover a whole number of bytes: {text:?}"
        )));
    }
    let unsigned = BigUint::parse_bytes(text.as_bytes(), format.radix()).ok_or_else(|| {
        OracleError::InvalidArgument(format!("malformed {format} text: {text:?}"))
    })?;
    let width = (text.len() / per_byte) as u64 * GRANULARITY_BITS;
    // Negative iff the sign bit of the parsed unsigned form is set.
    if unsigned >= (BigUint::one() << (width - 1)) {
        Ok(BigInt::from(unsigned) - (BigInt::one() << width))
    } else {
        Ok(BigInt::from(unsigned))
    }
}

//! Reference oracle and test-vector generator for arbitrary-precision
//! integer libraries.
//!
//! Produces randomized input/output triples — two operands, an operator
//! tag, and the expected result — serialized by the caller as a portable
//! file that an external harness replays against the library under test.
//! Expected results follow systems-language integer conventions: truncating
//! division, sign-of-dividend modulo, and bitwise/shift results reported as
//! unsigned two's-complement bit patterns.

pub mod codec;
pub mod error;
pub mod eval;
pub mod rand_source;
pub mod vector;

pub use codec::{decode, encode, Format};
pub use error::OracleError;
pub use eval::{evaluate, Op, MAX_SHIFT};
pub use rand_source::RandomIntSource;
pub use vector::{GeneratorConfig, TestVector, VectorGenerator};

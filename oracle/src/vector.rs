//! Test-vector records and batch generation.

use num_bigint::BigInt;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::codec::{encode, Format};
use crate::error::OracleError;
use crate::eval::{evaluate, Op, MAX_SHIFT};
use crate::rand_source::RandomIntSource;

/// One generated case: operands, operator tag, and the oracle's expected
/// result, all text-encoded in `format`. Immutable once created; records
/// are only ever appended to the output sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestVector {
    pub function: Op,
    pub format: Format,
    pub args: [String; 2],
    pub expected: String,
}

/// Batch generation parameters.
#[derive(Clone, Copy, Debug)]
pub struct GeneratorConfig {
    /// Vectors per operator.
    pub count: usize,
    /// Magnitude bit-length for every operand draw.
    pub bit_length: u64,
    /// Upper bound for `<<` / `>>` right-hand operands.
    pub max_shift: u32,
    /// Fixed RNG seed; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 10,
            bit_length: 128,
            max_shift: MAX_SHIFT,
            seed: None,
        }
    }
}

/// Single-threaded batch generator. The random source is the only mutable
/// state and is owned here, accessed sequentially.
pub struct VectorGenerator {
    source: RandomIntSource,
    config: GeneratorConfig,
}

impl VectorGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        let source = match config.seed {
            Some(seed) => RandomIntSource::from_seed(seed),
            None => RandomIntSource::from_entropy(),
        };
        Self { source, config }
    }

    /// Generate `config.count` vectors for one operator in one format.
    pub fn generate_op(&mut self, op: Op, format: Format) -> Result<Vec<TestVector>, OracleError> {
        let mut vectors = Vec::with_capacity(self.config.count);
        for _ in 0..self.config.count {
            let a = self.source.next(self.config.bit_length)?;
            let b = self.draw_rhs(op)?;
            let result = evaluate(op, &a, &b)?;
            vectors.push(TestVector {
                function: op,
                format,
                args: [encode(&a, format), encode(&b, format)],
                expected: encode(&result, format),
            });
        }
        Ok(vectors)
    }

    /// Right-hand operand with the operator's precondition already applied:
    /// shifts draw a bounded amount, `/` and `%` resample until nonzero.
    /// Filtering upstream keeps `DivisionByZero` out of the generation path
    /// and the per-operator count exact.
    fn draw_rhs(&mut self, op: Op) -> Result<BigInt, OracleError> {
        if op.is_shift() {
            return Ok(self.source.next_shift(self.config.max_shift));
        }
        loop {
            let b = self.source.next(self.config.bit_length)?;
            if !(op.requires_nonzero_rhs() && b.is_zero()) {
                return Ok(b);
            }
        }
    }

    /// Default suite: arithmetic operators in decimal, bitwise and shift
    /// operators in `bitwise_format` (hex in [`generate_suite`]).
    pub fn generate_suite_in(
        &mut self,
        bitwise_format: Format,
    ) -> Result<Vec<TestVector>, OracleError> {
        let mut vectors = Vec::new();
        for op in Op::ALL {
            let format = if op.is_shift() || matches!(op, Op::BitAnd | Op::BitOr | Op::BitXor) {
                bitwise_format
            } else {
                Format::Decimal
            };
            vectors.extend(self.generate_op(op, format)?);
        }
        Ok(vectors)
    }

    /// Default suite with bitwise and shift vectors in hex.
    pub fn generate_suite(&mut self) -> Result<Vec<TestVector>, OracleError> {
        self.generate_suite_in(Format::Hex)
    }
}

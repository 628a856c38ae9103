//! Errors raised by field construction and element arithmetic.

use fqext_integers::Integer;
use thiserror::Error;

/// Errors that can occur in finite field operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("operands belong to different fields")]
    FieldMismatch,

    #[error("division by zero")]
    DivisionByZero,

    #[error("element is not a square")]
    NotASquare,

    #[error("cannot map a degree {from} field into a degree {to} field")]
    IncompatibleDegrees { from: usize, to: usize },

    #[error("no root of the degree {degree} source modulus found in the target field")]
    RootNotFound { degree: usize },

    #[error("characteristic {left} does not match characteristic {right}")]
    CharacteristicMismatch { left: Integer, right: Integer },

    #[error("element does not lie in the subfield")]
    NotInSubfield,

    #[error("invalid modulus: {0}")]
    InvalidModulus(String),

    #[error("characteristic {0} is not prime")]
    InvalidCharacteristic(Integer),

    #[error("no defining polynomial available for GF({characteristic}^{degree})")]
    UnsupportedDegree { characteristic: Integer, degree: usize },

    #[error("expected {expected} coefficients, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    #[error("negative coefficient index {0}")]
    NegativeIndex(i64),
}

/// Result alias for field operations.
pub type FieldResult<T> = Result<T, FieldError>;

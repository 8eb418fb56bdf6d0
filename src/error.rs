// ============================================================================
// Errors
// Failure conditions reported by the registry and the money operators
// ============================================================================

use crate::numeric::Signal;
use thiserror::Error;

/// Result type for registry and money operations
pub type MoneyResult<T> = std::result::Result<T, MoneyError>;

/// Registry and arithmetic errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// The code does not resolve to any currency in the set
    #[error("currency not found: {code}")]
    NotFound { code: String },

    /// A numeric code matched several currencies and could not be narrowed
    /// down, or a dataset violated the registry invariants
    #[error("ambiguous currency code {code}: {reason}")]
    AmbiguousCode { code: String, reason: String },

    /// Operands of a money-required operation use different currencies
    #[error("mismatched currency: {left} vs {right}")]
    MismatchedCurrency { left: String, right: String },

    /// The operand is of a kind the operation does not accept
    #[error("wrong operand type for {operation}: expected {expected}")]
    WrongOperandType {
        operation: &'static str,
        expected: &'static str,
    },

    /// A decimal condition that the active context traps
    #[error("arithmetic error: {0}")]
    Arithmetic(Signal),

    /// Mint input that cannot be represented as an exact decimal
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Decimal context configuration is out of range
    #[error("invalid context: {0}")]
    InvalidContext(String),

    /// A currency source produced records that could not be read
    #[error("invalid dataset {dataset}: {reason}")]
    InvalidDataset { dataset: String, reason: String },

    /// An operation result was unwrapped as a shape it does not have
    #[error("unexpected outcome: expected {expected}, found {found}")]
    UnexpectedOutcome {
        expected: &'static str,
        found: &'static str,
    },
}

impl From<Signal> for MoneyError {
    fn from(signal: Signal) -> Self {
        MoneyError::Arithmetic(signal)
    }
}

impl MoneyError {
    pub(crate) fn not_found(code: impl ToString) -> Self {
        MoneyError::NotFound {
            code: code.to_string(),
        }
    }

    pub(crate) fn ambiguous(code: impl ToString, reason: impl Into<String>) -> Self {
        MoneyError::AmbiguousCode {
            code: code.to_string(),
            reason: reason.into(),
        }
    }
}

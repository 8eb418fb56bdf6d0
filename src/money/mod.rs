// ============================================================================
// Money Module
// Currency-checked arithmetic over decimal amounts
// ============================================================================

#[allow(clippy::module_inception)]
mod money;
mod ops;

pub use money::{Money, QuantizeTarget};
pub use ops::{MathOp, OpDescriptor, Operand, OperandKind, Outcome, ReturnShape, OPERATIONS};

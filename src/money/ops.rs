// ============================================================================
// Money Operations
// Declarative operation table and the dispatcher that executes it
// ============================================================================
//
// Every uniform Money operation is described once in OPERATIONS: what kind
// of operand it takes, whether that operand must share the receiver's
// currency, and what shape the result has. Money::apply reads the
// descriptor, checks the operand, evaluates the amount arithmetic and wraps
// the result. The typed methods and std::ops impls are thin front-ends.

use super::money::Money;
use crate::error::{MoneyError, MoneyResult};
use crate::numeric::{Amount, Context, Rounding};
use rust_decimal::Decimal;

// ============================================================================
// Descriptors
// ============================================================================

/// Every operation handled by [`Money::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MathOp {
    // Unary
    Neg,
    Pos,
    Abs,
    Floor,
    Ceil,
    Trunc,
    Round,
    ToInteger,
    ToFloat,
    Normalize,
    NextMinus,
    NextPlus,
    IsFinite,
    IsInfinite,
    IsNan,
    IsQnan,
    IsSnan,
    IsSigned,
    IsZero,
    // Scalar operand
    Mul,
    Shift,
    Scaleb,
    Rotate,
    // Money operand, same currency
    Add,
    Sub,
    Compare,
    CompareSignal,
    CompareTotal,
    CompareTotalMag,
    SameQuantum,
    Max,
    MaxMag,
    Min,
    MinMag,
    CopySign,
    NextToward,
    // Money or scalar operand
    Div,
    FloorDiv,
    Rem,
    RemainderNear,
    DivMod,
    // Augmented
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    FloorDivAssign,
    RemAssign,
}

/// What an operation accepts as its second operand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandKind {
    None,
    Scalar,
    /// Money in the receiver's currency
    Money,
    /// Either Money in the receiver's currency or a scalar
    Either,
}

/// Shape of an operation's result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnShape {
    /// Money in the receiver's currency
    Money,
    /// Dimensionless amount
    Scalar,
    Bool,
    Integer,
    Float,
    /// Scalar for a Money operand, Money for a scalar operand
    Overloaded,
    /// Quotient and remainder
    MoneyPair,
    /// New amount for the receiver
    SelfMoney,
}

/// Static description of one operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpDescriptor {
    pub op: MathOp,
    pub name: &'static str,
    pub operand: OperandKind,
    pub returns: ReturnShape,
    pub augmented: bool,
}

const fn unary(op: MathOp, name: &'static str, returns: ReturnShape) -> OpDescriptor {
    OpDescriptor {
        op,
        name,
        operand: OperandKind::None,
        returns,
        augmented: false,
    }
}

const fn binary(
    op: MathOp,
    name: &'static str,
    operand: OperandKind,
    returns: ReturnShape,
) -> OpDescriptor {
    OpDescriptor {
        op,
        name,
        operand,
        returns,
        augmented: false,
    }
}

const fn augmented(op: MathOp, name: &'static str, operand: OperandKind) -> OpDescriptor {
    OpDescriptor {
        op,
        name,
        operand,
        returns: ReturnShape::SelfMoney,
        augmented: true,
    }
}

use MathOp as Op;
use OperandKind as K;
use ReturnShape as R;

/// The operation table, indexed by `MathOp as usize`.
pub static OPERATIONS: [OpDescriptor; 47] = [
    unary(Op::Neg, "neg", R::Money),
    unary(Op::Pos, "pos", R::Money),
    unary(Op::Abs, "abs", R::Money),
    unary(Op::Floor, "floor", R::Money),
    unary(Op::Ceil, "ceil", R::Money),
    unary(Op::Trunc, "trunc", R::Money),
    unary(Op::Round, "round", R::Money),
    unary(Op::ToInteger, "to_integer", R::Integer),
    unary(Op::ToFloat, "to_f64", R::Float),
    unary(Op::Normalize, "normalize", R::Money),
    unary(Op::NextMinus, "next_minus", R::Money),
    unary(Op::NextPlus, "next_plus", R::Money),
    unary(Op::IsFinite, "is_finite", R::Bool),
    unary(Op::IsInfinite, "is_infinite", R::Bool),
    unary(Op::IsNan, "is_nan", R::Bool),
    unary(Op::IsQnan, "is_qnan", R::Bool),
    unary(Op::IsSnan, "is_snan", R::Bool),
    unary(Op::IsSigned, "is_signed", R::Bool),
    unary(Op::IsZero, "is_zero", R::Bool),
    binary(Op::Mul, "mul", K::Scalar, R::Money),
    binary(Op::Shift, "shift", K::Scalar, R::Money),
    binary(Op::Scaleb, "scaleb", K::Scalar, R::Money),
    binary(Op::Rotate, "rotate", K::Scalar, R::Money),
    binary(Op::Add, "add", K::Money, R::Money),
    binary(Op::Sub, "sub", K::Money, R::Money),
    binary(Op::Compare, "compare", K::Money, R::Scalar),
    binary(Op::CompareSignal, "compare_signal", K::Money, R::Scalar),
    binary(Op::CompareTotal, "compare_total", K::Money, R::Scalar),
    binary(Op::CompareTotalMag, "compare_total_mag", K::Money, R::Scalar),
    binary(Op::SameQuantum, "same_quantum", K::Money, R::Bool),
    binary(Op::Max, "max", K::Money, R::Money),
    binary(Op::MaxMag, "max_mag", K::Money, R::Money),
    binary(Op::Min, "min", K::Money, R::Money),
    binary(Op::MinMag, "min_mag", K::Money, R::Money),
    binary(Op::CopySign, "copy_sign", K::Money, R::Money),
    binary(Op::NextToward, "next_toward", K::Money, R::Money),
    binary(Op::Div, "div", K::Either, R::Overloaded),
    binary(Op::FloorDiv, "floor_div", K::Either, R::Overloaded),
    binary(Op::Rem, "rem", K::Either, R::Money),
    binary(Op::RemainderNear, "remainder_near", K::Either, R::Money),
    binary(Op::DivMod, "divmod", K::Either, R::MoneyPair),
    augmented(Op::AddAssign, "add_assign", K::Money),
    augmented(Op::SubAssign, "sub_assign", K::Money),
    augmented(Op::MulAssign, "mul_assign", K::Scalar),
    augmented(Op::DivAssign, "div_assign", K::Scalar),
    augmented(Op::FloorDivAssign, "floor_div_assign", K::Scalar),
    augmented(Op::RemAssign, "rem_assign", K::Scalar),
];

impl MathOp {
    #[inline]
    pub fn descriptor(self) -> &'static OpDescriptor {
        &OPERATIONS[self as usize]
    }

    /// The operation whose logic an augmented form applies
    pub fn base(self) -> MathOp {
        match self {
            Op::AddAssign => Op::Add,
            Op::SubAssign => Op::Sub,
            Op::MulAssign => Op::Mul,
            Op::DivAssign => Op::Div,
            Op::FloorDivAssign => Op::FloorDiv,
            Op::RemAssign => Op::Rem,
            other => other,
        }
    }
}

// ============================================================================
// Operands and Outcomes
// ============================================================================

/// The second operand handed to [`Money::apply`].
#[derive(Debug, Clone, Copy)]
pub enum Operand<'a> {
    None,
    Scalar(Amount),
    Money(&'a Money),
}

impl<'a> From<&'a Money> for Operand<'a> {
    fn from(money: &'a Money) -> Self {
        Operand::Money(money)
    }
}

macro_rules! impl_scalar_operand {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Operand<'_> {
                fn from(v: $t) -> Self {
                    Operand::Scalar(Amount::from(v))
                }
            }
        )*
    };
}

impl_scalar_operand!(Amount, Decimal, i32, i64, u32, u64);

impl Operand<'_> {
    fn kind_name(&self) -> &'static str {
        match self {
            Operand::None => "nothing",
            Operand::Scalar(_) => "a scalar",
            Operand::Money(_) => "money",
        }
    }
}

/// The result of [`Money::apply`], shaped by the descriptor.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Money(Money),
    Scalar(Amount),
    Bool(bool),
    Integer(i128),
    Float(f64),
    /// `divmod`: the quotient is Money for a scalar divisor, a scalar for a
    /// Money divisor
    DivMod {
        quotient: Box<Outcome>,
        remainder: Money,
    },
}

impl Outcome {
    fn shape(&self) -> &'static str {
        match self {
            Outcome::Money(_) => "money",
            Outcome::Scalar(_) => "scalar",
            Outcome::Bool(_) => "bool",
            Outcome::Integer(_) => "integer",
            Outcome::Float(_) => "float",
            Outcome::DivMod { .. } => "quotient and remainder",
        }
    }

    fn unexpected(&self, expected: &'static str) -> MoneyError {
        MoneyError::UnexpectedOutcome {
            expected,
            found: self.shape(),
        }
    }

    pub fn into_money(self) -> MoneyResult<Money> {
        match self {
            Outcome::Money(m) => Ok(m),
            other => Err(other.unexpected("money")),
        }
    }

    pub fn into_scalar(self) -> MoneyResult<Amount> {
        match self {
            Outcome::Scalar(a) => Ok(a),
            other => Err(other.unexpected("scalar")),
        }
    }

    pub fn into_bool(self) -> MoneyResult<bool> {
        match self {
            Outcome::Bool(b) => Ok(b),
            other => Err(other.unexpected("bool")),
        }
    }

    pub fn into_integer(self) -> MoneyResult<i128> {
        match self {
            Outcome::Integer(i) => Ok(i),
            other => Err(other.unexpected("integer")),
        }
    }

    pub fn into_float(self) -> MoneyResult<f64> {
        match self {
            Outcome::Float(f) => Ok(f),
            other => Err(other.unexpected("float")),
        }
    }

    pub fn into_pair(self) -> MoneyResult<(Outcome, Money)> {
        match self {
            Outcome::DivMod {
                quotient,
                remainder,
            } => Ok((*quotient, remainder)),
            other => Err(other.unexpected("quotient and remainder")),
        }
    }
}

// ============================================================================
// Dispatcher
// ============================================================================

/// Raw amount-level result before wrapping
enum Raw {
    Amount(Amount),
    Bool(bool),
    Integer(i128),
    Float(f64),
    Pair(Amount, Amount),
}

fn evaluate(op: MathOp, x: Amount, y: Amount, ctx: &Context) -> MoneyResult<Raw> {
    let amount = match op.base() {
        Op::Neg => x.neg().plus(ctx)?,
        Op::Pos => x.plus(ctx)?,
        Op::Abs => x.abs().plus(ctx)?,
        Op::Floor => x.round_integral(Rounding::Floor, ctx)?,
        Op::Ceil => x.round_integral(Rounding::Ceiling, ctx)?,
        Op::Trunc => x.round_integral(Rounding::Down, ctx)?,
        Op::Round => x.round_integral(Rounding::HalfEven, ctx)?,
        Op::ToInteger => return Ok(Raw::Integer(x.to_i128()?)),
        Op::ToFloat => return Ok(Raw::Float(x.to_f64())),
        Op::Normalize => x.normalize(ctx)?,
        Op::NextMinus => x.next_minus(ctx)?,
        Op::NextPlus => x.next_plus(ctx)?,
        Op::IsFinite => return Ok(Raw::Bool(x.is_finite())),
        Op::IsInfinite => return Ok(Raw::Bool(x.is_infinite())),
        Op::IsNan => return Ok(Raw::Bool(x.is_nan())),
        Op::IsQnan => return Ok(Raw::Bool(x.is_qnan())),
        Op::IsSnan => return Ok(Raw::Bool(x.is_snan())),
        Op::IsSigned => return Ok(Raw::Bool(x.is_signed())),
        Op::IsZero => return Ok(Raw::Bool(x.is_zero())),
        Op::Mul => x.mul(y, ctx)?,
        Op::Shift => x.shift(y, ctx)?,
        Op::Scaleb => x.scaleb(y, ctx)?,
        Op::Rotate => x.rotate(y, ctx)?,
        Op::Add => x.add(y, ctx)?,
        Op::Sub => x.sub(y, ctx)?,
        Op::Compare => x.compare(y, ctx)?,
        Op::CompareSignal => x.compare_signal(y, ctx)?,
        Op::CompareTotal => x.compare_total(y),
        Op::CompareTotalMag => x.compare_total_mag(y),
        Op::SameQuantum => return Ok(Raw::Bool(x.same_quantum(y))),
        Op::Max => x.max(y, ctx)?,
        Op::MaxMag => x.max_mag(y, ctx)?,
        Op::Min => x.min(y, ctx)?,
        Op::MinMag => x.min_mag(y, ctx)?,
        Op::CopySign => x.copy_sign(y),
        Op::NextToward => x.next_toward(y, ctx)?,
        Op::Div => x.div(y, ctx)?,
        Op::FloorDiv => x.div_integer(y, ctx)?,
        Op::Rem => x.rem(y, ctx)?,
        Op::RemainderNear => x.rem_near(y, ctx)?,
        Op::DivMod => return Ok(Raw::Pair(x.div_integer(y, ctx)?, x.rem(y, ctx)?)),
        Op::AddAssign
        | Op::SubAssign
        | Op::MulAssign
        | Op::DivAssign
        | Op::FloorDivAssign
        | Op::RemAssign => unreachable!("augmented operations are evaluated through their base"),
    };
    Ok(Raw::Amount(amount))
}

impl Money {
    /// Execute any table-driven operation.
    ///
    /// The operand is checked against the descriptor first: a missing or
    /// wrong kind of operand fails with `WrongOperandType`, and Money in a
    /// different currency fails with `MismatchedCurrency`, both before any
    /// arithmetic happens.
    ///
    /// # Example
    /// ```
    /// use moneymint::currency::Currency;
    /// use moneymint::money::{MathOp, Outcome};
    /// use moneymint::numeric::{Amount, Context};
    /// use std::sync::Arc;
    ///
    /// let eur = Arc::new(Currency::new("EUR", 978).with_denominator(100));
    /// let a = eur.mint(100)?;
    /// let b = eur.mint(50)?;
    /// let ratio = a.apply(MathOp::Div, (&b).into(), &Context::default())?;
    /// assert_eq!(ratio, Outcome::Scalar(Amount::from(2)));
    /// # Ok::<_, moneymint::MoneyError>(())
    /// ```
    pub fn apply(&self, op: MathOp, operand: Operand<'_>, ctx: &Context) -> MoneyResult<Outcome> {
        ctx.validate()?;
        let desc = op.descriptor();

        let (rhs, rhs_is_money) = match (desc.operand, operand) {
            (K::None, Operand::None) => (Amount::NAN, false),
            (K::Scalar | K::Either, Operand::Scalar(amount)) => (amount, false),
            (K::Money | K::Either, Operand::Money(other)) => {
                self.ensure_same_currency(other)?;
                (other.amount(), true)
            },
            (kind, given) => {
                let expected = match kind {
                    K::None => "no operand",
                    K::Scalar => "a scalar",
                    K::Money => "money",
                    K::Either => "money or a scalar",
                };
                tracing::trace!(operation = desc.name, given = given.kind_name(), "rejected operand");
                return Err(MoneyError::WrongOperandType {
                    operation: desc.name,
                    expected,
                });
            },
        };

        let raw = evaluate(op, self.amount(), rhs, ctx)?;
        let outcome = match (desc.returns, raw) {
            (R::Money | R::SelfMoney, Raw::Amount(a)) => Outcome::Money(self.with_amount(a)),
            (R::Scalar, Raw::Amount(a)) => Outcome::Scalar(a),
            (R::Overloaded, Raw::Amount(a)) if rhs_is_money => Outcome::Scalar(a),
            (R::Overloaded, Raw::Amount(a)) => Outcome::Money(self.with_amount(a)),
            (R::Bool, Raw::Bool(b)) => Outcome::Bool(b),
            (R::Integer, Raw::Integer(i)) => Outcome::Integer(i),
            (R::Float, Raw::Float(f)) => Outcome::Float(f),
            (R::MoneyPair, Raw::Pair(q, r)) => {
                let quotient = if rhs_is_money {
                    Outcome::Scalar(q)
                } else {
                    Outcome::Money(self.with_amount(q))
                };
                Outcome::DivMod {
                    quotient: Box::new(quotient),
                    remainder: self.with_amount(r),
                }
            },
            _ => unreachable!("operation table and evaluator disagree on {}", desc.name),
        };
        Ok(outcome)
    }
}

//! Lazy binary expression nodes.

use std::fmt;
use std::ops::Add;

use crate::complex::write_parts;
use crate::eval::Evaluator;
use crate::eval::Sum;
use crate::traits::ComplexKind;
use crate::traits::ComplexLike;
use crate::traits::Operand;

/// A pending `lhs <F> rhs`.
///
/// Reads like a complex value: [`ComplexLike::re`] and [`ComplexLike::im`]
/// recompute from the operands on every call, nothing is cached. Stored
/// values enter the tree by reference (`&z + &w`), so a node borrows its
/// leaves and cannot outlive them. Nested nodes and scalars are held by
/// value.
///
/// Nodes have no default: an expression without operands means nothing.
#[derive(Debug, Clone, Copy)]
#[must_use = "an expression computes nothing until it is read or materialized"]
pub struct BinOp<F, L, R> {
    op: F,
    lhs: L,
    rhs: R,
}

impl<F: Default, L, R> BinOp<F, L, R> {
    /// Pairs two operands under a fresh evaluator. Nothing is computed.
    pub fn new(lhs: L, rhs: R) -> Self {
        BinOp {
            op: F::default(),
            lhs,
            rhs,
        }
    }
}

impl<F, L, R> BinOp<F, L, R> {
    /// The left operand.
    pub fn lhs(&self) -> &L {
        &self.lhs
    }

    /// The right operand.
    pub fn rhs(&self) -> &R {
        &self.rhs
    }
}

// The scalar type comes from the left operand; the bound on `R` makes the
// right operand agree with it.
impl<F, L, R> Operand for BinOp<F, L, R>
where
    L: Operand,
    R: Operand<Scalar = L::Scalar>,
{
    type Scalar = L::Scalar;
    type Kind = ComplexKind;

    const IS_EXPRESSION: bool = true;
}

impl<F, L, R> ComplexLike for BinOp<F, L, R>
where
    F: Evaluator<L, R>,
    L: Operand,
    R: Operand<Scalar = L::Scalar>,
{
    #[inline]
    fn re(&self) -> L::Scalar {
        self.op.re(&self.lhs, &self.rhs)
    }

    #[inline]
    fn im(&self) -> L::Scalar {
        self.op.im(&self.lhs, &self.rhs)
    }
}

impl<F, L, R, Rhs> Add<Rhs> for BinOp<F, L, R>
where
    Self: ComplexLike,
    Rhs: Operand<Scalar = <Self as Operand>::Scalar>,
    Sum: Evaluator<Self, Rhs>,
{
    type Output = BinOp<Sum, Self, Rhs>;

    #[inline]
    fn add(self, rhs: Rhs) -> Self::Output {
        BinOp::new(self, rhs)
    }
}

impl<'a, F, L, R, Rhs> Add<Rhs> for &'a BinOp<F, L, R>
where
    BinOp<F, L, R>: ComplexLike,
    Rhs: Operand<Scalar = <BinOp<F, L, R> as Operand>::Scalar>,
    Sum: Evaluator<Self, Rhs>,
{
    type Output = BinOp<Sum, Self, Rhs>;

    #[inline]
    fn add(self, rhs: Rhs) -> Self::Output {
        BinOp::new(self, rhs)
    }
}

/// Formats the value the expression evaluates to.
impl<F, L, R> fmt::Display for BinOp<F, L, R>
where
    Self: ComplexLike,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_parts(f, self.re(), self.im())
    }
}

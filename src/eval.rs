//! Evaluators: the arithmetic carried by an expression node.

use crate::traits::ComplexKind;
use crate::traits::ComplexLike;
use crate::traits::Operand;
use crate::traits::ScalarKind;
use crate::traits::ScalarOperand;

/// Computes the parts of `lhs <op> rhs` straight from the operands.
pub trait Evaluator<L: Operand, R> {
    fn re(&self, lhs: &L, rhs: &R) -> L::Scalar;
    fn im(&self, lhs: &L, rhs: &R) -> L::Scalar;
}

/// Addition. Zero-sized, so nodes pay nothing to carry it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Sum;

/// One addition rule per pair of operand kinds.
///
/// Implemented on `(L::Kind, R::Kind)` tuples so the case is picked by the
/// type checker. There is no rule for two scalars: that sum is ordinary
/// arithmetic and never becomes a node.
pub trait SumRule<L: Operand, R> {
    fn re(lhs: &L, rhs: &R) -> L::Scalar;
    fn im(lhs: &L, rhs: &R) -> L::Scalar;
}

impl<L, R> SumRule<L, R> for (ScalarKind, ComplexKind)
where
    L: ScalarOperand,
    R: ComplexLike<Scalar = L::Scalar>,
{
    #[inline]
    fn re(lhs: &L, rhs: &R) -> L::Scalar {
        lhs.value() + rhs.re()
    }

    #[inline]
    fn im(_lhs: &L, rhs: &R) -> L::Scalar {
        rhs.im()
    }
}

impl<L, R> SumRule<L, R> for (ComplexKind, ScalarKind)
where
    L: ComplexLike,
    R: ScalarOperand<Scalar = L::Scalar>,
{
    #[inline]
    fn re(lhs: &L, rhs: &R) -> L::Scalar {
        lhs.re() + rhs.value()
    }

    #[inline]
    fn im(lhs: &L, _rhs: &R) -> L::Scalar {
        lhs.im()
    }
}

impl<L, R> SumRule<L, R> for (ComplexKind, ComplexKind)
where
    L: ComplexLike,
    R: ComplexLike<Scalar = L::Scalar>,
{
    #[inline]
    fn re(lhs: &L, rhs: &R) -> L::Scalar {
        lhs.re() + rhs.re()
    }

    #[inline]
    fn im(lhs: &L, rhs: &R) -> L::Scalar {
        lhs.im() + rhs.im()
    }
}

impl<L, R> Evaluator<L, R> for Sum
where
    L: Operand,
    R: Operand<Scalar = L::Scalar>,
    (L::Kind, R::Kind): SumRule<L, R>,
{
    #[inline]
    fn re(&self, lhs: &L, rhs: &R) -> L::Scalar {
        <(L::Kind, R::Kind) as SumRule<L, R>>::re(lhs, rhs)
    }

    #[inline]
    fn im(&self, lhs: &L, rhs: &R) -> L::Scalar {
        <(L::Kind, R::Kind) as SumRule<L, R>>::im(lhs, rhs)
    }
}

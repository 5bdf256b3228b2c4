//! Compile-time classification of the things that can sit in an expression.
//!
//! Every operand of `+` is one of three shapes: a bare scalar, a stored
//! [`Complex`] value, or a pending [`BinOp`](crate::BinOp). [`Operand`] answers
//! which shape a type has and which scalar it computes with. None of this has
//! a runtime footprint.

use std::fmt::Debug;
use std::fmt::Display;

use num_traits::NumCast;
use num_traits::Zero;

use crate::complex::Complex;

/// The primitive numeric type backing one component of a complex value.
pub trait Scalar: Copy + Default + PartialOrd + Display + Debug + Zero + NumCast {}

/// Type-level tag telling the evaluator how to read an operand.
pub trait Kind {
    const IS_SCALAR: bool;
}

/// Tag for bare scalars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalarKind;

/// Tag for anything with a real and an imaginary part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplexKind;

impl Kind for ScalarKind {
    const IS_SCALAR: bool = true;
}

impl Kind for ComplexKind {
    const IS_SCALAR: bool = false;
}

/// Anything that may appear on either side of `+`.
pub trait Operand {
    /// Scalar type the operand ultimately computes with.
    type Scalar: Scalar;
    type Kind: Kind;

    /// `true` for bare scalars.
    const IS_SCALAR: bool = <Self::Kind as Kind>::IS_SCALAR;
    /// `true` for composed, not yet evaluated expressions.
    const IS_EXPRESSION: bool = false;
}

/// A bare scalar operand.
pub trait ScalarOperand: Operand<Kind = ScalarKind> {
    fn value(&self) -> Self::Scalar;
}

/// An operand with real and imaginary parts, stored or computed.
pub trait ComplexLike: Operand<Kind = ComplexKind> {
    fn re(&self) -> Self::Scalar;
    fn im(&self) -> Self::Scalar;

    /// Evaluates both parts into a stored value.
    fn eval(&self) -> Complex<Self::Scalar> {
        Complex::new(self.re(), self.im())
    }
}

// A borrowed operand is a non-owning leaf and reads exactly like the value.
impl<'a, O: Operand + ?Sized> Operand for &'a O {
    type Scalar = O::Scalar;
    type Kind = O::Kind;

    const IS_SCALAR: bool = O::IS_SCALAR;
    const IS_EXPRESSION: bool = O::IS_EXPRESSION;
}

impl<'a, O: ScalarOperand + ?Sized> ScalarOperand for &'a O {
    #[inline]
    fn value(&self) -> Self::Scalar {
        (**self).value()
    }
}

impl<'a, O: ComplexLike + ?Sized> ComplexLike for &'a O {
    #[inline]
    fn re(&self) -> Self::Scalar {
        (**self).re()
    }

    #[inline]
    fn im(&self) -> Self::Scalar {
        (**self).im()
    }
}

/// Registers numeric types as scalars.
///
/// Besides the classifier impls this provides `scalar + complex` and
/// `scalar + expression`, which the orphan rule does not let the crate write
/// generically. Any type meeting the [`Scalar`] bounds can be registered from
/// another crate:
///
/// ```
/// use std::fmt;
/// use std::ops::Add;
///
/// use lazyplex::{Complex, ComplexLike};
/// use num_traits::{NumCast, ToPrimitive, Zero};
///
/// #[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
/// struct Cents(i64);
///
/// impl Add for Cents {
///     type Output = Cents;
///
///     fn add(self, rhs: Cents) -> Cents {
///         Cents(self.0 + rhs.0)
///     }
/// }
///
/// impl Zero for Cents {
///     fn zero() -> Self {
///         Cents(0)
///     }
///
///     fn is_zero(&self) -> bool {
///         self.0 == 0
///     }
/// }
///
/// impl ToPrimitive for Cents {
///     fn to_i64(&self) -> Option<i64> {
///         Some(self.0)
///     }
///
///     fn to_u64(&self) -> Option<u64> {
///         self.0.to_u64()
///     }
/// }
///
/// impl NumCast for Cents {
///     fn from<N: ToPrimitive>(n: N) -> Option<Self> {
///         n.to_i64().map(Cents)
///     }
/// }
///
/// impl fmt::Display for Cents {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{}c", self.0)
///     }
/// }
///
/// lazyplex::impl_scalar!(Cents);
///
/// let z = Complex::new(Cents(150), Cents(-25));
/// let e = Cents(50) + &z;
/// assert_eq!(e.re(), Cents(200));
/// assert_eq!(e.to_string(), "200c - 25cj");
/// ```
#[macro_export]
macro_rules! impl_scalar {
    ($($t:ty),* $(,)?) => {$(
        impl $crate::Scalar for $t {}

        impl $crate::Operand for $t {
            type Scalar = $t;
            type Kind = $crate::ScalarKind;
        }

        impl $crate::ScalarOperand for $t {
            #[inline]
            fn value(&self) -> $t {
                *self
            }
        }

        impl ::std::ops::Add<$crate::Complex<$t>> for $t {
            type Output = $crate::BinOp<$crate::Sum, $t, $crate::Complex<$t>>;

            #[inline]
            fn add(self, rhs: $crate::Complex<$t>) -> Self::Output {
                $crate::BinOp::new(self, rhs)
            }
        }

        impl<'a> ::std::ops::Add<&'a $crate::Complex<$t>> for $t {
            type Output = $crate::BinOp<$crate::Sum, $t, &'a $crate::Complex<$t>>;

            #[inline]
            fn add(self, rhs: &'a $crate::Complex<$t>) -> Self::Output {
                $crate::BinOp::new(self, rhs)
            }
        }

        impl<F, L, R> ::std::ops::Add<$crate::BinOp<F, L, R>> for $t
        where
            $crate::BinOp<F, L, R>: $crate::ComplexLike<Scalar = $t>,
        {
            type Output = $crate::BinOp<$crate::Sum, $t, $crate::BinOp<F, L, R>>;

            #[inline]
            fn add(self, rhs: $crate::BinOp<F, L, R>) -> Self::Output {
                $crate::BinOp::new(self, rhs)
            }
        }

        impl<'a, F, L, R> ::std::ops::Add<&'a $crate::BinOp<F, L, R>> for $t
        where
            $crate::BinOp<F, L, R>: $crate::ComplexLike<Scalar = $t>,
        {
            type Output = $crate::BinOp<$crate::Sum, $t, &'a $crate::BinOp<F, L, R>>;

            #[inline]
            fn add(self, rhs: &'a $crate::BinOp<F, L, R>) -> Self::Output {
                $crate::BinOp::new(self, rhs)
            }
        }
    )*};
}

impl_scalar!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

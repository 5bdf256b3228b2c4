use std::fmt;
use std::ops::Add;

use num_traits::NumCast;
use num_traits::ToPrimitive;

use crate::binop::BinOp;
use crate::error::CastError;
use crate::error::Component;
use crate::eval::Evaluator;
use crate::eval::Sum;
use crate::traits::ComplexKind;
use crate::traits::ComplexLike;
use crate::traits::Operand;
use crate::traits::Scalar;

/// A stored complex number `re + im·j`.
///
/// This is both the leaf and the materialization target of every
/// expression. Adding to it builds a [`BinOp`] instead of a new value;
/// components are only computed when the result is read or turned back into
/// a `Complex`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Complex<T> {
    pub re: T,
    pub im: T,
}

impl<T: Scalar> Complex<T> {
    pub fn new(re: T, im: T) -> Self {
        Complex { re, im }
    }

    /// Materializes `src`, widening its scalar into `T`.
    ///
    /// The result owns its components and keeps no link to `src`.
    pub fn from_expr<E>(src: &E) -> Self
    where
        E: ComplexLike + ?Sized,
        E::Scalar: Into<T>,
    {
        Complex {
            re: src.re().into(),
            im: src.im().into(),
        }
    }

    /// Materializes `src` through a checked numeric cast.
    ///
    /// Fails when either component has no representation in `T`, e.g. a
    /// non-finite float or an out-of-range value cast to an integer.
    pub fn try_from_expr<E>(src: &E) -> Result<Self, CastError>
    where
        E: ComplexLike + ?Sized,
    {
        Ok(Complex {
            re: cast_part(src.re(), Component::Real)?,
            im: cast_part(src.im(), Component::Imaginary)?,
        })
    }

    /// Overwrites both components with the value of `src`.
    pub fn assign<E>(&mut self, src: &E) -> &mut Self
    where
        E: ComplexLike + ?Sized,
        E::Scalar: Into<T>,
    {
        let (re, im) = (src.re().into(), src.im().into());
        self.re = re;
        self.im = im;
        self
    }
}

// A finite value that only fits as an infinity does not fit.
fn cast_part<S: Scalar, T: Scalar>(value: S, part: Component) -> Result<T, CastError> {
    let cast: T = <T as NumCast>::from(value).ok_or_else(|| cast_error::<S, T>(value, part))?;
    if is_finite(value) && !is_finite(cast) {
        return Err(cast_error::<S, T>(value, part));
    }
    Ok(cast)
}

fn cast_error<S: Scalar, T: Scalar>(value: S, part: Component) -> CastError {
    CastError {
        part,
        value: value.to_string(),
        target: std::any::type_name::<T>(),
    }
}

fn is_finite<N: ToPrimitive>(n: N) -> bool {
    n.to_f64().map_or(true, f64::is_finite)
}

impl<T: Scalar> Operand for Complex<T> {
    type Scalar = T;
    type Kind = ComplexKind;
}

impl<T: Scalar> ComplexLike for Complex<T> {
    #[inline]
    fn re(&self) -> T {
        self.re
    }

    #[inline]
    fn im(&self) -> T {
        self.im
    }
}

impl<T, F, L, R> From<BinOp<F, L, R>> for Complex<T>
where
    T: Scalar,
    BinOp<F, L, R>: ComplexLike<Scalar = T>,
{
    fn from(expr: BinOp<F, L, R>) -> Self {
        expr.eval()
    }
}

impl<T, Rhs> Add<Rhs> for Complex<T>
where
    T: Scalar,
    Rhs: Operand<Scalar = T>,
    Sum: Evaluator<Self, Rhs>,
{
    type Output = BinOp<Sum, Self, Rhs>;

    #[inline]
    fn add(self, rhs: Rhs) -> Self::Output {
        BinOp::new(self, rhs)
    }
}

impl<'a, T, Rhs> Add<Rhs> for &'a Complex<T>
where
    T: Scalar,
    Rhs: Operand<Scalar = T>,
    Sum: Evaluator<Self, Rhs>,
{
    type Output = BinOp<Sum, Self, Rhs>;

    #[inline]
    fn add(self, rhs: Rhs) -> Self::Output {
        BinOp::new(self, rhs)
    }
}

/// `"<re>"`, `"<re> + <im>j"` or `"<re> - <|im|>j"`.
pub(crate) fn write_parts<T: Scalar>(f: &mut fmt::Formatter<'_>, re: T, im: T) -> fmt::Result {
    write!(f, "{}", re)?;
    if im == T::zero() {
        return Ok(());
    }
    if im > T::zero() {
        return write!(f, " + {}j", im);
    }
    // The magnitude is the scalar's own text without its sign; negating
    // would overflow on the minimum of a signed integer.
    let text = im.to_string();
    write!(f, " - {}j", text.strip_prefix('-').unwrap_or(&text))
}

impl<T: Scalar> fmt::Display for Complex<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_parts(f, self.re, self.im)
    }
}

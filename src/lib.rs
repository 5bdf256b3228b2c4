//! Complex numbers whose sums are built as typed expression trees.
//!
//! `&x + &y + 2.0` does not compute anything: it builds a
//! [`BinOp`] holding its operands. Components are evaluated when the tree is
//! read through [`ComplexLike::re`] / [`ComplexLike::im`] or materialized into
//! a [`Complex`], with no intermediate values in between.
//!
//! ```
//! use lazyplex::Complex;
//!
//! let x = Complex::new(1.0, 2.0);
//! let y = Complex::new(3.0, -4.0);
//! let sum: Complex<f64> = (&x + &y + 0.5_f64).into();
//! assert_eq!(sum.to_string(), "4.5 - 2j");
//! ```

mod binop;
mod complex;
mod error;
mod eval;
mod traits;

pub use binop::BinOp;
pub use complex::Complex;
pub use error::CastError;
pub use error::Component;
pub use eval::Evaluator;
pub use eval::Sum;
pub use eval::SumRule;
pub use traits::ComplexKind;
pub use traits::ComplexLike;
pub use traits::Kind;
pub use traits::Operand;
pub use traits::Scalar;
pub use traits::ScalarKind;
pub use traits::ScalarOperand;

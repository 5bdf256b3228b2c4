//! Errors of checked materialization.

use std::fmt;

use thiserror::Error;

/// Which part of a complex value an error is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Real,
    Imaginary,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Real => f.write_str("real"),
            Component::Imaginary => f.write_str("imaginary"),
        }
    }
}

/// A component could not be represented in the target scalar type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot represent {part} part {value} as {target}")]
pub struct CastError {
    pub part: Component,
    /// The offending value, as formatted by its source scalar.
    pub value: String,
    pub target: &'static str,
}

//! Demonstration Error Module

use std::fmt;

use entities_fraction::{Fraction, FractionError};

/// Errors reported by the `fraction` binary
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoError {
    /// Invalid argument combination
    Usage(String),
    /// An input could not be read as a fraction
    Input { text: String, source: FractionError },
    /// An operation on parsed fractions failed
    Fraction(FractionError),
    /// `--op pow` with an exponent that is not a whole number
    InexactPower { base: Fraction, exponent: Fraction },
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DemoError::Usage(message) => write!(f, "{}", message),
            DemoError::Input { text, source } => write!(f, "Cannot read {:?}: {}", text, source),
            DemoError::Fraction(err) => write!(f, "{}", err),
            DemoError::InexactPower { base, exponent } => {
                write!(f, "{} ^ {} has no exact fraction value", base, exponent)
            }
        }
    }
}

impl std::error::Error for DemoError {}

impl From<FractionError> for DemoError {
    fn from(err: FractionError) -> Self {
        DemoError::Fraction(err)
    }
}

//! Fraction Error Module
//!
//! Error type shared by every fallible fraction operation.

/*
 * SPDX-License-Identifier: Apache-2.0
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use std::fmt;

use malachite::Integer;

/// Result alias used throughout the crate.
pub type FractionResult<T> = Result<T, FractionError>;

/// Fraction operation errors
///
/// Every error is deterministic: the same inputs always produce the same
/// error, so none of them is worth retrying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FractionError {
    /// The value cannot be rescaled exactly to the requested denominator.
    InvalidDenominator {
        numerator: Integer,
        denominator: Integer,
        requested: Integer,
    },
    /// Zero denominator, reciprocal of zero, or division by zero.
    DivisionByZero,
    /// Malformed text or a non-finite float.
    InvalidFormat(String),
    /// An operand kind the operation does not accept.
    UnsupportedOperandType {
        operation: &'static str,
        operand: &'static str,
    },
    /// An integer exponent beyond `u64` on a base other than 0, 1 or -1.
    /// The result would need more than 2^64 bits.
    ExponentTooLarge(Integer),
}

impl fmt::Display for FractionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FractionError::InvalidDenominator { numerator, denominator, requested } => {
                write!(
                    f,
                    "Cannot rescale {}/{} to denominator {}",
                    numerator, denominator, requested
                )
            }
            FractionError::DivisionByZero => {
                write!(f, "Division by zero")
            }
            FractionError::InvalidFormat(input) => {
                write!(f, "Invalid fraction string: {:?}", input)
            }
            FractionError::UnsupportedOperandType { operation, operand } => {
                write!(f, "Unsupported operand type for {}: {}", operation, operand)
            }
            FractionError::ExponentTooLarge(exponent) => {
                write!(f, "Exponent {} is too large for an exact power", exponent)
            }
        }
    }
}

impl std::error::Error for FractionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(FractionError::DivisionByZero.to_string(), "Division by zero");
        assert_eq!(
            FractionError::InvalidFormat("1//2".to_string()).to_string(),
            "Invalid fraction string: \"1//2\""
        );
        assert_eq!(
            FractionError::InvalidDenominator {
                numerator: Integer::from(1),
                denominator: Integer::from(3),
                requested: Integer::from(4),
            }
            .to_string(),
            "Cannot rescale 1/3 to denominator 4"
        );
        assert_eq!(
            FractionError::UnsupportedOperandType { operation: "add", operand: "float" }.to_string(),
            "Unsupported operand type for add: float"
        );
    }

    #[test]
    fn test_is_std_error() {
        let exponent = Integer::from(u64::MAX) + Integer::from(1);
        let err: Box<dyn std::error::Error> = Box::new(FractionError::ExponentTooLarge(exponent));
        assert_eq!(
            err.to_string(),
            "Exponent 18446744073709551616 is too large for an exact power"
        );
    }
}

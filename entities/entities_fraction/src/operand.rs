//! Operand Coercion Module
//!
//! Binary operations accept more than one kind of right- or left-hand side.
//! [`Operand`] is the tagged union of the accepted kinds, and
//! [`Operand::to_fraction`] is the single coercion helper every arithmetic
//! operation shares.
//!
//! | Kind       | Arithmetic | Comparison |
//! |------------|------------|------------|
//! | `Fraction` | exact      | exact      |
//! | `Integer`  | as `n/1`   | as `n/1`   |
//! | `Float`    | rejected   | via `value` (lossy) |

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

use malachite::Integer;

use crate::error::{FractionError, FractionResult};
use crate::fraction::Fraction;

/// One side of a binary fraction operation.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Fraction(Fraction),
    Integer(Integer),
    /// Only meaningful for comparison.
    Float(f64),
}

impl Operand {
    /// Name of the operand kind, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Operand::Fraction(_) => "fraction",
            Operand::Integer(_) => "integer",
            Operand::Float(_) => "float",
        }
    }

    /// Coerce to an exact fraction for `operation`.
    ///
    /// # Returns
    ///
    /// * `Ok(Fraction)` for fractions and integers
    /// * `Err(FractionError::UnsupportedOperandType)` for floats
    pub fn to_fraction(&self, operation: &'static str) -> FractionResult<Fraction> {
        match self {
            Operand::Fraction(fraction) => Ok(fraction.clone()),
            Operand::Integer(value) => Ok(Fraction::from_integer(value.clone())),
            Operand::Float(_) => Err(FractionError::UnsupportedOperandType {
                operation,
                operand: self.type_name(),
            }),
        }
    }

    /// Owning form of [`to_fraction`](Self::to_fraction).
    pub fn into_fraction(self, operation: &'static str) -> FractionResult<Fraction> {
        match self {
            Operand::Fraction(fraction) => Ok(fraction),
            Operand::Integer(value) => Ok(Fraction::from_integer(value)),
            Operand::Float(_) => self.to_fraction(operation),
        }
    }
}

impl From<Fraction> for Operand {
    fn from(fraction: Fraction) -> Self {
        Operand::Fraction(fraction)
    }
}

impl From<&Fraction> for Operand {
    fn from(fraction: &Fraction) -> Self {
        Operand::Fraction(fraction.clone())
    }
}

impl From<&Integer> for Operand {
    fn from(value: &Integer) -> Self {
        Operand::Integer(value.clone())
    }
}

macro_rules! impl_integer_operand {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operand {
                fn from(value: $ty) -> Self {
                    Operand::Integer(Integer::from(value))
                }
            }
        )*
    };
}

impl_integer_operand!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, Integer);

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Float(value)
    }
}

impl From<f32> for Operand {
    fn from(value: f32) -> Self {
        Operand::Float(f64::from(value))
    }
}

/// Coerce both sides of an arithmetic operation.
pub(crate) fn coerce_pair(
    operation: &'static str,
    a: Operand,
    b: Operand,
) -> FractionResult<(Fraction, Fraction)> {
    Ok((a.into_fraction(operation)?, b.into_fraction(operation)?))
}

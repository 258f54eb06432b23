//! Fraction Arithmetic Module
//!
//! Arithmetic over [`Operand`]s. Every function accepts a fraction or an
//! integer on either side, in explicit order, so the "reflected" case
//! (`3 - x`) needs no separate entry point.
//!
//! # Reduction
//!
//! Every `Fraction` returned from this module is in lowest terms.
//!
//! # Examples
//!
//! ```rust
//! use entities_fraction::{Fraction, add, divide, subtract};
//!
//! let half = Fraction::new(1, 2).unwrap();
//! let third = Fraction::new(1, 3).unwrap();
//!
//! assert_eq!(add(&half, &third).unwrap().to_string(), "5/6");
//! assert_eq!(subtract(1, &half).unwrap().to_string(), "1/2");
//! assert!(divide(&half, 0).is_err());
//! ```

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

use log::debug;
use malachite::base::num::arithmetic::traits::Parity;
use malachite::Integer;

use crate::common::make_common;
use crate::error::{FractionError, FractionResult};
use crate::fraction::Fraction;
use crate::integer::pow;
use crate::operand::{Operand, coerce_pair};

/// Result of [`power`].
///
/// An integer exponent keeps the result exact. A fraction exponent does not:
/// the result is `base.value().powf(exponent.value())`, an `f64`. The enum
/// makes that change of result type explicit at the call site.
#[derive(Clone, Debug, PartialEq)]
pub enum Power {
    Exact(Fraction),
    Approximate(f64),
}

impl Power {
    pub fn as_fraction(&self) -> Option<&Fraction> {
        match self {
            Power::Exact(fraction) => Some(fraction),
            Power::Approximate(_) => None,
        }
    }

    pub fn into_fraction(self) -> Option<Fraction> {
        match self {
            Power::Exact(fraction) => Some(fraction),
            Power::Approximate(_) => None,
        }
    }

    pub fn to_f64(&self) -> f64 {
        match self {
            Power::Exact(fraction) => fraction.value(),
            Power::Approximate(value) => *value,
        }
    }
}

/// `a + b`
pub fn add(a: impl Into<Operand>, b: impl Into<Operand>) -> FractionResult<Fraction> {
    let result = coerce_pair("add", a.into(), b.into()).map(|(a, b)| add_fractions(&a, &b));
    logged("add", result)
}

fn add_fractions(a: &Fraction, b: &Fraction) -> Fraction {
    let (a, b) = make_common(a, b);
    Fraction::from_canonical_reduced(a.numerator() + b.numerator(), a.denominator().clone())
}

/// `a - b`
pub fn subtract(a: impl Into<Operand>, b: impl Into<Operand>) -> FractionResult<Fraction> {
    let result = coerce_pair("subtract", a.into(), b.into()).map(|(a, b)| subtract_fractions(&a, &b));
    logged("subtract", result)
}

fn subtract_fractions(a: &Fraction, b: &Fraction) -> Fraction {
    let (a, b) = make_common(a, b);
    Fraction::from_canonical_reduced(a.numerator() - b.numerator(), a.denominator().clone())
}

/// `a * b`
pub fn multiply(a: impl Into<Operand>, b: impl Into<Operand>) -> FractionResult<Fraction> {
    let result = coerce_pair("multiply", a.into(), b.into()).map(|(a, b)| multiply_fractions(&a, &b));
    logged("multiply", result)
}

fn multiply_fractions(a: &Fraction, b: &Fraction) -> Fraction {
    Fraction::from_canonical_reduced(
        a.numerator() * b.numerator(),
        a.denominator() * b.denominator(),
    )
}

/// `a / b`, computed as `a * (1 / b)`.
///
/// Fails with [`FractionError::DivisionByZero`] when `b` is zero.
pub fn divide(a: impl Into<Operand>, b: impl Into<Operand>) -> FractionResult<Fraction> {
    let result = coerce_pair("divide", a.into(), b.into()).and_then(|(a, b)| divide_fractions(&a, &b));
    logged("divide", result)
}

fn divide_fractions(a: &Fraction, b: &Fraction) -> FractionResult<Fraction> {
    Ok(multiply_fractions(a, &b.reciprocal()?))
}

/// `base ^ exponent`
///
/// * integer exponent `n >= 0`: `Power::Exact(numerator^n / denominator^n)`
/// * integer exponent `n < 0`: `power(reciprocal(base), -n)`; zero base
///   fails with [`FractionError::DivisionByZero`]
/// * fraction exponent: `Power::Approximate(base.value() ^ exponent.value())`
/// * float on either side: [`FractionError::UnsupportedOperandType`]
///
/// An integer exponent whose magnitude does not fit in `u64` is only
/// computable for the bases `0`, `1` and `-1`; any other base fails with
/// [`FractionError::ExponentTooLarge`].
///
/// ```rust
/// use entities_fraction::{Fraction, Power, power};
///
/// let half = Fraction::new(1, 2).unwrap();
/// assert_eq!(power(&half, 2).unwrap(), Power::Exact(Fraction::new(1, 4).unwrap()));
/// assert_eq!(power(&half, -3).unwrap(), Power::Exact(Fraction::from(8)));
///
/// let quarter = Fraction::new(1, 4).unwrap();
/// assert_eq!(power(&quarter, &half).unwrap(), Power::Approximate(0.25f64.powf(0.5)));
/// ```
pub fn power(base: impl Into<Operand>, exponent: impl Into<Operand>) -> FractionResult<Power> {
    let base = base.into().into_fraction("power")?;

    let result = match exponent.into() {
        Operand::Integer(exponent) => integer_power(&base, &exponent).map(Power::Exact),
        Operand::Fraction(exponent) => Ok(Power::Approximate(base.value().powf(exponent.value()))),
        exponent @ Operand::Float(_) => Err(FractionError::UnsupportedOperandType {
            operation: "power",
            operand: exponent.type_name(),
        }),
    };

    if let Err(err) = &result {
        debug!("power of {} failed: {}", base, err);
    }

    result
}

fn integer_power(base: &Fraction, exponent: &Integer) -> FractionResult<Fraction> {
    let base = (if *exponent < 0 { base.reciprocal()? } else { base.clone() }).reduced();

    let Ok(magnitude) = u64::try_from(exponent.unsigned_abs_ref()) else {
        return unit_power(&base, exponent);
    };

    // A reduced base stays reduced when raised to a power.
    Ok(Fraction::from_canonical(
        pow(base.numerator(), magnitude),
        pow(base.denominator(), magnitude),
    ))
}

// `base` is reduced and already inverted for a negative exponent.
fn unit_power(base: &Fraction, exponent: &Integer) -> FractionResult<Fraction> {
    if *base.denominator() != 1 || *base.numerator() > 1 || *base.numerator() < -1 {
        return Err(FractionError::ExponentTooLarge(exponent.clone()));
    }

    if base.is_negative() && exponent.even() {
        return Ok(Fraction::ONE);
    }

    Ok(base.clone())
}

/// `floor(a / b)` as an integer.
pub fn floor_divide(a: impl Into<Operand>, b: impl Into<Operand>) -> FractionResult<Integer> {
    div_mod(a, b).map(|(quotient, _)| quotient)
}

/// `a - b * floor(a / b)`
///
/// The result has the sign of `b` (or is zero), matching floor division.
///
/// ```rust
/// use entities_fraction::{Fraction, modulo};
///
/// let seven_halves = Fraction::new(7, 2).unwrap();
/// assert_eq!(modulo(&seven_halves, 1).unwrap().to_string(), "1/2");
/// assert_eq!(modulo(-7, 2).unwrap().to_string(), "1");
/// ```
pub fn modulo(a: impl Into<Operand>, b: impl Into<Operand>) -> FractionResult<Fraction> {
    div_mod(a, b).map(|(_, remainder)| remainder)
}

/// `(floor_divide(a, b), modulo(a, b))` in one pass.
pub fn div_mod(a: impl Into<Operand>, b: impl Into<Operand>) -> FractionResult<(Integer, Fraction)> {
    let result = coerce_pair("div_mod", a.into(), b.into()).and_then(|(a, b)| div_mod_fractions(&a, &b));
    logged("div_mod", result)
}

fn div_mod_fractions(a: &Fraction, b: &Fraction) -> FractionResult<(Integer, Fraction)> {
    let quotient = divide_fractions(a, b)?.whole_part();
    let remainder = subtract_fractions(a, &multiply_fractions(b, &Fraction::from_integer(quotient.clone())));
    Ok((quotient, remainder))
}

fn logged<T>(operation: &str, result: FractionResult<T>) -> FractionResult<T> {
    if let Err(err) = &result {
        debug!("fraction {} failed: {}", operation, err);
    }

    result
}

/// Method forms of the arithmetic functions.
///
/// These read naturally in chains: `a.plus(b)?.times(c)?`.
impl Fraction {
    pub fn plus(&self, other: impl Into<Operand>) -> FractionResult<Fraction> {
        add(self, other)
    }

    pub fn minus(&self, other: impl Into<Operand>) -> FractionResult<Fraction> {
        subtract(self, other)
    }

    pub fn times(&self, other: impl Into<Operand>) -> FractionResult<Fraction> {
        multiply(self, other)
    }

    pub fn divided_by(&self, other: impl Into<Operand>) -> FractionResult<Fraction> {
        divide(self, other)
    }

    /// Exact integer power; see [`power`] for fraction exponents.
    pub fn pow(&self, exponent: impl Into<Integer>) -> FractionResult<Fraction> {
        logged("power", integer_power(self, &exponent.into()))
    }
}

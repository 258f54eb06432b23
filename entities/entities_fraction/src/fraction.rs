//! Fraction Value Module
//!
//! Defines [`Fraction`], an exact rational number stored as two
//! arbitrary-precision `malachite::Integer` fields, together with its
//! construction rules and derived properties.
//!
//! # Representation
//!
//! - The denominator is always positive. A negative denominator passed to a
//!   constructor flips the sign of both fields.
//! - A zero denominator is rejected with [`FractionError::DivisionByZero`].
//!   There is no "undefined" fraction, so every other operation can assume
//!   a valid denominator.
//! - Construction from raw parts does not reduce unless asked to
//!   ([`Fraction::new_reduced`]). Arithmetic results are always reduced.
//!
//! # Examples
//!
//! ```rust
//! use entities_fraction::{Fraction, Integer};
//!
//! let f = Fraction::new(4, -8).unwrap();
//! assert_eq!(*f.numerator(), -4);
//! assert_eq!(*f.denominator(), 8);
//! assert!(!f.is_reduced());
//!
//! let r = f.reduced();
//! assert_eq!(r.to_string(), "-1/2");
//! assert_eq!(r.whole_part(), Integer::from(-1));
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

use malachite::base::num::arithmetic::traits::DivisibleBy;
use malachite::base::num::basic::traits::{One, Zero};
use malachite::base::num::conversion::traits::RoundingFrom;
use malachite::base::rounding_modes::RoundingMode;
use malachite::{Integer, Natural, Rational};

use crate::error::{FractionError, FractionResult};
use crate::integer::{floor_div_mod, gcd};

/// Exact rational number.
///
/// Equality, ordering and hashing compare the represented value, so
/// `1/2 == 2/4`; use [`Fraction::strictly_equals`] to compare the stored
/// fields instead.
///
/// # Examples
///
/// ```rust
/// use entities_fraction::Fraction;
///
/// let half = Fraction::new(1, 2).unwrap();
/// let third = Fraction::new(1, 3).unwrap();
/// assert_eq!((&half + &third).to_string(), "5/6");
/// assert!(half > third);
/// ```
#[derive(Clone, Debug)]
pub struct Fraction {
    numerator: Integer,
    // > 0
    denominator: Integer,
}

impl Fraction {
    /// `0/1`
    pub const ZERO: Self = Self { numerator: Integer::ZERO, denominator: Integer::ONE };

    /// `1/1`
    pub const ONE: Self = Self { numerator: Integer::ONE, denominator: Integer::ONE };

    /// Create a fraction from a numerator and denominator without reducing it.
    ///
    /// # Arguments
    ///
    /// * `numerator` - The numerator, any sign
    /// * `denominator` - The denominator, any non-zero value
    ///
    /// # Returns
    ///
    /// * `Ok(Fraction)` with a positive denominator
    /// * `Err(FractionError::DivisionByZero)` if `denominator` is zero
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_fraction::{Fraction, FractionError};
    ///
    /// let f = Fraction::new(3, -4).unwrap();
    /// assert_eq!(f.to_string(), "-3/4");
    /// assert_eq!(Fraction::new(1, 0), Err(FractionError::DivisionByZero));
    /// ```
    pub fn new(numerator: impl Into<Integer>, denominator: impl Into<Integer>) -> FractionResult<Self> {
        let (numerator, denominator) = (numerator.into(), denominator.into());

        if denominator == 0 {
            return Err(FractionError::DivisionByZero);
        }

        if denominator < 0 {
            return Ok(Self { numerator: -numerator, denominator: -denominator });
        }

        Ok(Self { numerator, denominator })
    }

    /// Create a fraction and reduce it to lowest terms immediately.
    ///
    /// ```rust
    /// use entities_fraction::Fraction;
    ///
    /// let f = Fraction::new_reduced(4, 8).unwrap();
    /// assert_eq!(f.to_string(), "1/2");
    /// ```
    pub fn new_reduced(numerator: impl Into<Integer>, denominator: impl Into<Integer>) -> FractionResult<Self> {
        let mut fraction = Self::new(numerator, denominator)?;
        fraction.reduce();
        Ok(fraction)
    }

    /// `value/1`
    pub fn from_integer(value: impl Into<Integer>) -> Self {
        Self { numerator: value.into(), denominator: Integer::ONE }
    }

    // Callers guarantee `denominator > 0`.
    pub(crate) fn from_canonical(numerator: Integer, denominator: Integer) -> Self {
        Self { numerator, denominator }
    }

    pub(crate) fn from_canonical_reduced(numerator: Integer, denominator: Integer) -> Self {
        let mut fraction = Self::from_canonical(numerator, denominator);
        fraction.reduce();
        fraction
    }

    /// Build a fraction from a whole part and a fractional part.
    ///
    /// The result is `whole * d + n` over `d`, where `n/d` is
    /// `fractional_part`. The sign of `whole` is expected to agree with the
    /// sign of `fractional_part`; this is not checked. With a floor-based
    /// whole part, `from_mixed_number(f.whole_part(), &f.fractional_part())`
    /// gives back `f` for every fraction.
    ///
    /// ```rust
    /// use entities_fraction::Fraction;
    ///
    /// let third = Fraction::new(1, 3).unwrap();
    /// let f = Fraction::from_mixed_number(2, &third);
    /// assert_eq!(f.to_string(), "7/3");
    /// ```
    pub fn from_mixed_number(whole: impl Into<Integer>, fractional_part: &Fraction) -> Self {
        let whole: Integer = whole.into();
        let numerator = whole * &fractional_part.denominator + &fractional_part.numerator;
        Self::from_canonical(numerator, fractional_part.denominator.clone())
    }

    /// Convert a finite `f64` to the fraction it represents exactly.
    ///
    /// Binary floats are dyadic rationals, so the result is exact: `0.1`
    /// becomes `3602879701896397/36028797018963968`.
    ///
    /// # Returns
    ///
    /// * `Ok(Fraction)` in lowest terms
    /// * `Err(FractionError::InvalidFormat)` for NaN or infinity
    ///
    /// ```rust
    /// use entities_fraction::Fraction;
    ///
    /// let f = Fraction::from_f64(-0.75).unwrap();
    /// assert_eq!(f.to_string(), "-3/4");
    /// ```
    pub fn from_f64(value: f64) -> FractionResult<Self> {
        if !value.is_finite() {
            return Err(FractionError::InvalidFormat(value.to_string()));
        }

        let exact = Rational::try_from(value)
            .map_err(|_| FractionError::InvalidFormat(value.to_string()))?;
        let (magnitude, denominator) = exact.into_numerator_and_denominator();
        let magnitude = Integer::from(magnitude);
        let numerator = if value < 0.0 { -magnitude } else { magnitude };

        Ok(Self::from_canonical(numerator, Integer::from(denominator)))
    }

    pub fn numerator(&self) -> &Integer {
        &self.numerator
    }

    /// Always positive.
    pub fn denominator(&self) -> &Integer {
        &self.denominator
    }

    /// The closest `f64` to `numerator / denominator`.
    ///
    /// The quotient is computed exactly and rounded once, so the result is
    /// correctly rounded however large the fields are.
    pub fn value(&self) -> f64 {
        let exact = Rational::from_integers_ref(&self.numerator, &self.denominator);
        let (value, _ordering) = f64::rounding_from(&exact, RoundingMode::Nearest);
        value
    }

    /// Integer part, rounded toward negative infinity.
    ///
    /// ```rust
    /// use entities_fraction::Fraction;
    ///
    /// assert_eq!(Fraction::new(7, 2).unwrap().whole_part(), 3);
    /// assert_eq!(Fraction::new(-3, 2).unwrap().whole_part(), -2);
    /// assert_eq!(Fraction::new(-1, 2).unwrap().whole_part(), -1);
    /// ```
    pub fn whole_part(&self) -> Integer {
        floor_div_mod(&self.numerator, &self.denominator).0
    }

    /// What remains after removing [`whole_part`](Self::whole_part), over the
    /// same denominator. Always in `[0, 1)`.
    pub fn fractional_part(&self) -> Fraction {
        let (_, remainder) = floor_div_mod(&self.numerator, &self.denominator);
        Self::from_canonical(remainder, self.denominator.clone())
    }

    pub fn is_whole(&self) -> bool {
        (&self.numerator).divisible_by(&self.denominator)
    }

    /// `|numerator| > denominator`
    pub fn is_improper(&self) -> bool {
        self.numerator.unsigned_abs_ref() > self.denominator.unsigned_abs_ref()
    }

    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    pub fn is_positive(&self) -> bool {
        self.numerator > 0
    }

    pub fn is_negative(&self) -> bool {
        self.numerator < 0
    }

    /// `-1`, `0` or `1`
    pub fn signum(&self) -> i64 {
        if self.is_negative() {
            -1
        } else if self.is_positive() {
            1
        } else {
            0
        }
    }

    /// `denominator/numerator`
    ///
    /// Fails with [`FractionError::DivisionByZero`] when the fraction is zero.
    pub fn reciprocal(&self) -> FractionResult<Fraction> {
        if self.is_zero() {
            return Err(FractionError::DivisionByZero);
        }

        Self::new(self.denominator.clone(), self.numerator.clone())
    }

    pub fn abs(&self) -> Fraction {
        Self::from_canonical(Integer::from(self.numerator.unsigned_abs_ref().clone()), self.denominator.clone())
    }

    /// Largest integer not greater than the value. Same as [`whole_part`](Self::whole_part).
    pub fn floor(&self) -> Integer {
        self.whole_part()
    }

    /// Smallest integer not less than the value.
    pub fn ceil(&self) -> Integer {
        let (quotient, remainder) = floor_div_mod(&self.numerator, &self.denominator);
        if remainder == 0 {
            quotient
        } else {
            quotient + Integer::ONE
        }
    }

    /// Integer part, rounded toward zero.
    pub fn trunc(&self) -> Integer {
        &self.numerator / &self.denominator
    }

    /// Nearest integer; ties round away from zero like [`f64::round`].
    pub fn round(&self) -> Integer {
        let (quotient, remainder) = floor_div_mod(&self.numerator, &self.denominator);
        let twice_remainder = remainder * Integer::from(2);

        if twice_remainder > self.denominator || (twice_remainder == self.denominator && quotient >= 0) {
            quotient + Integer::ONE
        } else {
            quotient
        }
    }

    /// True iff `gcd(|numerator|, denominator) == 1`.
    ///
    /// ```rust
    /// use entities_fraction::Fraction;
    ///
    /// assert!(!Fraction::new(4, 8).unwrap().is_reduced());
    /// assert!(Fraction::new(1, 2).unwrap().is_reduced());
    /// ```
    pub fn is_reduced(&self) -> bool {
        gcd(&self.numerator, &self.denominator) == Natural::ONE
    }

    /// Reduce in place to lowest terms.
    ///
    /// Returns `true` if the fraction was already reduced (nothing changed).
    pub fn reduce(&mut self) -> bool {
        let divisor = gcd(&self.numerator, &self.denominator);

        if divisor == Natural::ONE {
            return true;
        }

        let divisor = Integer::from(divisor);
        self.numerator /= &divisor;
        self.denominator /= &divisor;
        false
    }

    /// Lowest-terms copy of this fraction. `self` is left untouched.
    pub fn reduced(&self) -> Fraction {
        let mut reduced = self.clone();
        reduced.reduce();
        reduced
    }

    /// Whether the value can be written exactly over `denominator`.
    pub fn is_valid_denominator(&self, denominator: impl Into<Integer>) -> bool {
        self.rescales_to(&denominator.into())
    }

    fn rescales_to(&self, denominator: &Integer) -> bool {
        *denominator != 0 && (&self.numerator * denominator).divisible_by(&self.denominator)
    }

    /// Rewrite the same value over another denominator.
    ///
    /// A negative `denominator` is accepted and canonicalized, so the
    /// result's denominator is `|denominator|`.
    ///
    /// # Returns
    ///
    /// * `Ok(Fraction)` equal in value to `self`
    /// * `Err(FractionError::DivisionByZero)` if `denominator` is zero
    /// * `Err(FractionError::InvalidDenominator)` if the value cannot be
    ///   expressed exactly over `denominator`
    ///
    /// ```rust
    /// use entities_fraction::Fraction;
    ///
    /// let half = Fraction::new(1, 2).unwrap();
    /// assert_eq!(half.change_denominator(8).unwrap().to_string(), "4/8");
    /// assert!(half.change_denominator(3).is_err());
    /// ```
    pub fn change_denominator(&self, denominator: impl Into<Integer>) -> FractionResult<Fraction> {
        let denominator = denominator.into();

        if denominator == 0 {
            return Err(FractionError::DivisionByZero);
        }

        if !self.rescales_to(&denominator) {
            return Err(FractionError::InvalidDenominator {
                numerator: self.numerator.clone(),
                denominator: self.denominator.clone(),
                requested: denominator,
            });
        }

        let numerator = &self.numerator * &denominator / &self.denominator;
        Self::new(numerator, denominator)
    }

    /// In-place form of [`change_denominator`](Self::change_denominator).
    /// On error `self` is left unchanged.
    pub fn change_denominator_in_place(&mut self, denominator: impl Into<Integer>) -> FractionResult<()> {
        *self = self.change_denominator(denominator)?;
        Ok(())
    }

    /// Field-by-field equality: `1/2` is not strictly equal to `2/4`.
    pub fn strictly_equals(&self, other: &Fraction) -> bool {
        self.numerator == other.numerator && self.denominator == other.denominator
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::ZERO
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Fraction {
                fn from(value: $ty) -> Self {
                    Self::from_integer(value)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, Integer);

impl From<&Fraction> for f64 {
    fn from(fraction: &Fraction) -> f64 {
        fraction.value()
    }
}

impl From<Fraction> for f64 {
    fn from(fraction: Fraction) -> f64 {
        fraction.value()
    }
}

impl TryFrom<f64> for Fraction {
    type Error = FractionError;

    fn try_from(value: f64) -> FractionResult<Self> {
        Self::from_f64(value)
    }
}

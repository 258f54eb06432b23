//! Fraction Comparison Module
//!
//! Ordering and equality for fractions, integers and floats.
//!
//! Fraction/fraction and fraction/integer comparisons are exact: both sides
//! are unified onto a common denominator and the numerators compared.
//! Comparisons involving an `f64` go through [`Fraction::value`] and are
//! therefore lossy: `1/3 == 0.3333333333333333` holds only because that
//! float is the closest one to 1/3. NaN compares unordered with everything.
//!
//! The standard traits follow the exact value relation:
//! `PartialEq`, `Eq`, `PartialOrd`, `Ord` and `Hash` all treat `1/2` and
//! `2/4` as the same value. Field-by-field equality is available through
//! [`are_equal`] with `strict = true`.

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

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use malachite::base::num::conversion::traits::RoundingFrom;
use malachite::base::rounding_modes::RoundingMode;

use crate::common::make_common;
use crate::fraction::Fraction;
use crate::operand::Operand;

/// Compare two operands.
///
/// Returns `None` only when a float operand is NaN.
///
/// ```rust
/// use entities_fraction::{Fraction, compare};
/// use std::cmp::Ordering;
///
/// let half = Fraction::new(1, 2).unwrap();
/// let third = Fraction::new(1, 3).unwrap();
/// assert_eq!(compare(&half, &third), Some(Ordering::Greater));
/// assert_eq!(compare(&half, 1), Some(Ordering::Less));
/// assert_eq!(compare(&half, 0.5), Some(Ordering::Equal));
/// assert_eq!(compare(&half, f64::NAN), None);
/// ```
pub fn compare(a: impl Into<Operand>, b: impl Into<Operand>) -> Option<Ordering> {
    let (a, b) = (a.into(), b.into());

    match (a.to_fraction("compare"), b.to_fraction("compare")) {
        (Ok(a), Ok(b)) => Some(compare_exact(&a, &b)),
        _ => approximate(&a).partial_cmp(&approximate(&b)),
    }
}

/// Equality of two fractions.
///
/// With `strict`, the stored numerator and denominator must match, so
/// `1/2` and `2/4` differ. Without it the fractions are unified first and
/// only the values are compared.
pub fn are_equal(a: &Fraction, b: &Fraction, strict: bool) -> bool {
    if strict {
        a.strictly_equals(b)
    } else {
        compare_exact(a, b) == Ordering::Equal
    }
}

pub(crate) fn compare_exact(a: &Fraction, b: &Fraction) -> Ordering {
    let (a, b) = make_common(a, b);
    a.numerator().cmp(b.numerator())
}

fn approximate(operand: &Operand) -> f64 {
    match operand {
        Operand::Fraction(fraction) => fraction.value(),
        Operand::Integer(value) => f64::rounding_from(value, RoundingMode::Nearest).0,
        Operand::Float(value) => *value,
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        are_equal(self, other, false)
    }
}

impl Eq for Fraction {}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_exact(self, other)
    }
}

impl Hash for Fraction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Equal values share one reduced form.
        let reduced = self.reduced();
        reduced.numerator().hash(state);
        reduced.denominator().hash(state);
    }
}

impl PartialEq<i64> for Fraction {
    fn eq(&self, other: &i64) -> bool {
        *self == Fraction::from_integer(*other)
    }
}

impl PartialEq<Fraction> for i64 {
    fn eq(&self, other: &Fraction) -> bool {
        other == self
    }
}

impl PartialOrd<i64> for Fraction {
    fn partial_cmp(&self, other: &i64) -> Option<Ordering> {
        Some(compare_exact(self, &Fraction::from_integer(*other)))
    }
}

impl PartialOrd<Fraction> for i64 {
    fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
        Some(compare_exact(&Fraction::from_integer(*self), other))
    }
}

impl PartialEq<f64> for Fraction {
    fn eq(&self, other: &f64) -> bool {
        self.value() == *other
    }
}

impl PartialEq<Fraction> for f64 {
    fn eq(&self, other: &Fraction) -> bool {
        *self == other.value()
    }
}

impl PartialOrd<f64> for Fraction {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.value().partial_cmp(other)
    }
}

impl PartialOrd<Fraction> for f64 {
    fn partial_cmp(&self, other: &Fraction) -> Option<Ordering> {
        self.partial_cmp(&other.value())
    }
}

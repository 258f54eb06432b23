//! Common-Denominator Unification
//!
//! The one routine that rescales two fractions onto their least common
//! denominator. Addition, subtraction and every comparison go through here.

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

use crate::fraction::Fraction;
use crate::integer::lcm;

/// True iff both fractions are stored over the same denominator.
pub fn has_common_denominator(a: &Fraction, b: &Fraction) -> bool {
    a.denominator() == b.denominator()
}

/// `lcm(a.denominator, b.denominator)`
pub fn least_common_denominator(a: &Fraction, b: &Fraction) -> Integer {
    lcm(a.denominator(), b.denominator())
}

/// Rescale `a` and `b` onto their least common denominator.
///
/// If the denominators already match, both are returned unchanged (not
/// reduced). Values are preserved; only the representation changes.
///
/// ```rust
/// use entities_fraction::{Fraction, make_common};
///
/// let a = Fraction::new(1, 4).unwrap();
/// let b = Fraction::new(1, 6).unwrap();
/// let (a, b) = make_common(&a, &b);
/// assert_eq!(a.to_string(), "3/12");
/// assert_eq!(b.to_string(), "2/12");
/// ```
pub fn make_common(a: &Fraction, b: &Fraction) -> (Fraction, Fraction) {
    if has_common_denominator(a, b) {
        return (a.clone(), b.clone());
    }

    let lcd = least_common_denominator(a, b);
    (rescale(a, &lcd), rescale(b, &lcd))
}

fn rescale(fraction: &Fraction, lcd: &Integer) -> Fraction {
    let numerator = fraction.numerator() * (lcd / fraction.denominator());
    Fraction::from_canonical(numerator, lcd.clone())
}

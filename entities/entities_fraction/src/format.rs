//! Fraction Formatting
//!
//! Two textual forms:
//!
//! - canonical (`Display`): `"7/3"`, or `"2"` when the value is whole
//! - mixed number ([`Fraction::mixed`]): `"2 1/3"` for improper values
//!
//! The whole part of a mixed number is floored, so negative values render
//! as `"-3 2/3"` for `-7/3`. That is the form
//! [`Fraction::from_string`] reads back to the same value.

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

use crate::fraction::Fraction;

/// Whole values print their value, so an unreduced `4/2` prints `"2"`
/// rather than its stored numerator.
impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_whole() {
            write!(f, "{}", self.whole_part())
        } else {
            write!(f, "{}/{}", self.numerator(), self.denominator())
        }
    }
}

/// Mixed-number view of a fraction, created by [`Fraction::mixed`].
#[derive(Clone, Copy, Debug)]
pub struct MixedNumber<'a>(&'a Fraction);

impl fmt::Display for MixedNumber<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fraction = self.0;

        if fraction.is_improper() && !fraction.is_whole() {
            write!(f, "{} {}", fraction.whole_part(), fraction.fractional_part())
        } else {
            write!(f, "{}", fraction)
        }
    }
}

impl Fraction {
    /// Display adapter for the mixed-number form.
    ///
    /// ```rust
    /// use entities_fraction::Fraction;
    ///
    /// assert_eq!(Fraction::new(7, 3).unwrap().mixed().to_string(), "2 1/3");
    /// assert_eq!(Fraction::new(-7, 3).unwrap().mixed().to_string(), "-3 2/3");
    /// assert_eq!(Fraction::new(1, 3).unwrap().mixed().to_string(), "1/3");
    /// assert_eq!(Fraction::new(6, 3).unwrap().mixed().to_string(), "2");
    /// ```
    pub fn mixed(&self) -> MixedNumber<'_> {
        MixedNumber(self)
    }

    pub fn to_mixed_string(&self) -> String {
        self.mixed().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(numerator: i64, denominator: i64) -> Fraction {
        Fraction::new(numerator, denominator).unwrap()
    }

    #[test]
    fn test_canonical() {
        assert_eq!(frac(1, 2).to_string(), "1/2");
        assert_eq!(frac(-1, 2).to_string(), "-1/2");
        assert_eq!(frac(1, -2).to_string(), "-1/2");
        assert_eq!(frac(5, 1).to_string(), "5");
        assert_eq!(frac(0, 3).to_string(), "0");
        assert_eq!(frac(-6, 3).to_string(), "-2");
    }

    #[test]
    fn test_canonical_keeps_unreduced_fields() {
        assert_eq!(frac(4, 8).to_string(), "4/8");
        // whole values print their value, not the stored numerator
        assert_eq!(frac(4, 2).to_string(), "2");
    }

    #[test]
    fn test_mixed() {
        assert_eq!(frac(7, 3).to_mixed_string(), "2 1/3");
        assert_eq!(frac(-3, 2).to_mixed_string(), "-2 1/2");
        assert_eq!(frac(3, 4).to_mixed_string(), "3/4");
        assert_eq!(frac(-3, 4).to_mixed_string(), "-3/4");
        assert_eq!(frac(8, 4).to_mixed_string(), "2");
        assert_eq!(frac(10, 4).to_mixed_string(), "2 2/4");
    }

    #[test]
    fn test_beyond_i64() {
        let f = Fraction::from_string("30000000000000000001/3").unwrap();
        assert_eq!(f.to_string(), "30000000000000000001/3");
        assert_eq!(f.to_mixed_string(), "10000000000000000000 1/3");
        assert_eq!(Fraction::from_string("60000000000000000000/3").unwrap().to_string(), "20000000000000000000");
    }

    #[test]
    fn test_mixed_in_format_args() {
        let f = frac(11, 4);
        assert_eq!(format!("{} = {}", f, f.mixed()), "11/4 = 2 3/4");
    }
}

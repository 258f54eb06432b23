//! Fraction Parsing
//!
//! Reads the two textual forms produced by [`format`](crate::format):
//!
//! ```text
//! fraction := int | int "/" nat
//! mixed    := int " " int "/" nat
//! int      := ["-"] nat
//! nat      := digit+
//! ```
//!
//! Components have no size limit. The whole part and the fractional part
//! are separated by exactly one space; no other whitespace is accepted.

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

use std::str::FromStr;

use log::{debug, trace};
use malachite::Integer;

use crate::error::{FractionError, FractionResult};
use crate::fraction::Fraction;

impl Fraction {
    /// Parse a fraction, a whole number or a mixed number.
    ///
    /// The result is not reduced; call [`reduced`](Fraction::reduced) if
    /// lowest terms are needed.
    ///
    /// # Returns
    ///
    /// * `Ok(Fraction)` on success
    /// * `Err(FractionError::InvalidFormat)` for any other shape
    /// * `Err(FractionError::DivisionByZero)` for a zero denominator
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_fraction::Fraction;
    ///
    /// let f = Fraction::from_string("2 1/3").unwrap();
    /// assert_eq!(f.to_string(), "7/3");
    ///
    /// let g: Fraction = "-4/8".parse().unwrap();
    /// assert_eq!(g.to_string(), "-4/8");
    ///
    /// assert!(Fraction::from_string("1/2/3").is_err());
    /// assert!(Fraction::from_string(" 1/2").is_err());
    /// ```
    pub fn from_string(text: &str) -> FractionResult<Self> {
        trace!("Fraction::from_string({:?})", text);

        let result = match text.split_once(' ') {
            None => parse_fraction(text, text),
            Some((whole, fractional)) => parse_mixed(whole, fractional, text),
        };

        if let Err(err) = &result {
            debug!("rejected fraction string {:?}: {}", text, err);
        }

        result
    }
}

impl FromStr for Fraction {
    type Err = FractionError;

    fn from_str(text: &str) -> FractionResult<Self> {
        Self::from_string(text)
    }
}

fn parse_fraction(token: &str, text: &str) -> FractionResult<Fraction> {
    if token.contains('/') {
        parse_pair(token, text)
    } else {
        Ok(Fraction::from_integer(parse_integer(token, text)?))
    }
}

fn parse_mixed(whole: &str, fractional: &str, text: &str) -> FractionResult<Fraction> {
    let whole = parse_integer(whole, text)?;
    let fractional = parse_pair(fractional, text)?;
    Ok(Fraction::from_mixed_number(whole, &fractional))
}

fn parse_pair(token: &str, text: &str) -> FractionResult<Fraction> {
    let (numerator, denominator) = token.split_once('/').ok_or_else(|| invalid(text))?;
    Fraction::new(parse_integer(numerator, text)?, parse_natural(denominator, text)?)
}

fn parse_integer(token: &str, text: &str) -> FractionResult<Integer> {
    match token.strip_prefix('-') {
        Some(digits) => parse_natural(digits, text).map(|magnitude| -magnitude),
        None => parse_natural(token, text),
    }
}

fn parse_natural(token: &str, text: &str) -> FractionResult<Integer> {
    if token.is_empty() || !token.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(invalid(text));
    }

    Integer::from_str(token).map_err(|_| invalid(text))
}

fn invalid(text: &str) -> FractionError {
    FractionError::InvalidFormat(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(text: &str) -> (i64, i64) {
        let f = Fraction::from_string(text).unwrap();
        (
            i64::try_from(f.numerator()).unwrap(),
            i64::try_from(f.denominator()).unwrap(),
        )
    }

    fn is_invalid(text: &str) -> bool {
        matches!(Fraction::from_string(text), Err(FractionError::InvalidFormat(_)))
    }

    #[test]
    fn test_plain_fraction() {
        assert_eq!(parts("1/2"), (1, 2));
        assert_eq!(parts("-3/4"), (-3, 4));
        assert_eq!(parts("4/8"), (4, 8));
        assert_eq!(parts("-0/5"), (0, 5));
        assert_eq!(parts("007/010"), (7, 10));
    }

    #[test]
    fn test_components_beyond_i64() {
        let f = Fraction::from_string("10000000000000000000/3").unwrap();
        assert_eq!(*f.numerator(), Integer::from(10_000_000_000_000_000_000u64));
        assert_eq!(*f.denominator(), 3);

        let g = Fraction::from_string("-1/99999999999999999999").unwrap();
        assert!(g.is_negative());
        assert_eq!(g.to_string(), "-1/99999999999999999999");

        let below_min = Fraction::from_string("-9223372036854775809").unwrap();
        assert_eq!(below_min.whole_part(), Integer::from(i64::MIN) - Integer::from(1));
    }

    #[test]
    fn test_whole_number() {
        assert_eq!(parts("5"), (5, 1));
        assert_eq!(parts("-12"), (-12, 1));
    }

    #[test]
    fn test_mixed_number() {
        assert_eq!(parts("2 1/3"), (7, 3));
        assert_eq!(parts("-2 -1/3"), (-7, 3));
        assert_eq!(parts("-3 2/3"), (-7, 3));
        assert_eq!(parts("0 3/4"), (3, 4));
    }

    #[test]
    fn test_invalid_shapes() {
        assert!(is_invalid(""));
        assert!(is_invalid("   "));
        assert!(is_invalid("1/2/3"));
        assert!(is_invalid("1 2 3/4"));
        assert!(is_invalid("2 3"));
        assert!(is_invalid("a/2"));
        assert!(is_invalid("1/b"));
        assert!(is_invalid("1.5"));
        assert!(is_invalid("1/"));
        assert!(is_invalid("/2"));
        assert!(is_invalid("1 / 2"));
        assert!(is_invalid("x 1/2"));
        assert!(is_invalid("- 1/2"));
        assert!(is_invalid("--1"));
    }

    #[test]
    fn test_rejects_lenient_forms() {
        assert!(is_invalid("+3"));
        assert!(is_invalid("+1/2"));
        assert!(is_invalid("3/-4"));
        assert!(is_invalid("3/+4"));
        assert!(is_invalid("1\t1/2"));
        assert!(is_invalid("1  1/2"));
        assert!(is_invalid("  5/6  "));
        assert!(is_invalid("5/6\n"));
        assert!(is_invalid("-"));
    }

    #[test]
    fn test_zero_denominator() {
        assert_eq!(Fraction::from_string("1/0"), Err(FractionError::DivisionByZero));
        assert_eq!(Fraction::from_string("2 1/0"), Err(FractionError::DivisionByZero));
    }

    #[test]
    fn test_invalid_format_keeps_input() {
        assert_eq!(
            Fraction::from_string("one/two"),
            Err(FractionError::InvalidFormat("one/two".to_string()))
        );
    }

    #[test]
    fn test_from_str() {
        let f: Fraction = "7/3".parse().unwrap();
        assert_eq!(f.to_string(), "7/3");
        assert!("seven".parse::<Fraction>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for text in ["1/2", "-7/3", "5", "0", "-1"] {
            assert_eq!(Fraction::from_string(text).unwrap().to_string(), text);
        }
    }

    #[test]
    fn test_mixed_display_round_trip() {
        for (n, d) in [(7, 3), (-7, 3), (-1, 2), (9, 4), (-9, 4)] {
            let f = Fraction::new(n, d).unwrap();
            let back = Fraction::from_string(&f.to_mixed_string()).unwrap();
            assert_eq!(back, f, "{}", f.to_mixed_string());
        }
    }
}

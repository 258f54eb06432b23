//! Integer Primitives
//!
//! GCD, LCM, floor division and powers on the arbitrary-precision fields of
//! a fraction.
//!
//! The number-theoretic work is delegated to `malachite`, which implements
//! `Gcd`, `Lcm`, `DivMod` and `Pow` for `Natural` and `Integer`. The helpers
//! here only adapt signs.

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

use malachite::base::num::arithmetic::traits::{DivMod, Gcd, Lcm, Pow};
use malachite::{Integer, Natural};

/// Greatest common divisor of `|a|` and `|b|`.
///
/// `gcd(0, d) == |d|`, so a zero numerator reduces to `0/1`.
pub fn gcd(a: &Integer, b: &Integer) -> Natural {
    a.unsigned_abs_ref().gcd(b.unsigned_abs_ref())
}

/// Least common multiple of `|a|` and `|b|`.
pub fn lcm(a: &Integer, b: &Integer) -> Integer {
    Integer::from(a.unsigned_abs_ref().lcm(b.unsigned_abs_ref()))
}

/// Floor division and its remainder for a positive divisor.
///
/// The quotient rounds toward negative infinity, so the remainder always
/// lies in `[0, divisor)`.
pub fn floor_div_mod(dividend: &Integer, divisor: &Integer) -> (Integer, Integer) {
    debug_assert!(*divisor > 0);
    dividend.div_mod(divisor)
}

pub(crate) fn pow(base: &Integer, exponent: u64) -> Integer {
    base.pow(exponent)
}

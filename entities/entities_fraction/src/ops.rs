//! Operator Overloads
//!
//! `+`, `-`, `*`, `/`, `%` and unary `-` for `Fraction` and `&Fraction`
//! with a fraction or an `i64` on either side, plus the compound assignment
//! forms.
//!
//! # Panics
//!
//! Like the primitive integer operators, these panic on division by zero.
//! Use the functions in [`arithmetic`](crate::arithmetic) to get a `Result`
//! instead.

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

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

use crate::arithmetic::{add, divide, modulo, multiply, subtract};
use crate::error::FractionResult;
use crate::fraction::Fraction;

fn unwrap_operator(result: FractionResult<Fraction>, operator: &str) -> Fraction {
    match result {
        Ok(fraction) => fraction,
        Err(err) => panic!("attempt to apply `{}` to fractions failed: {}", operator, err),
    }
}

macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $checked:path, $symbol:literal) => {
        impl $trait for Fraction {
            type Output = Fraction;

            fn $method(self, rhs: Fraction) -> Fraction {
                unwrap_operator($checked(self, rhs), $symbol)
            }
        }

        impl<'a> $trait<&'a Fraction> for &'a Fraction {
            type Output = Fraction;

            fn $method(self, rhs: &'a Fraction) -> Fraction {
                unwrap_operator($checked(self, rhs), $symbol)
            }
        }

        impl $trait<i64> for Fraction {
            type Output = Fraction;

            fn $method(self, rhs: i64) -> Fraction {
                unwrap_operator($checked(self, rhs), $symbol)
            }
        }

        impl $trait<i64> for &Fraction {
            type Output = Fraction;

            fn $method(self, rhs: i64) -> Fraction {
                unwrap_operator($checked(self, rhs), $symbol)
            }
        }

        impl $trait<Fraction> for i64 {
            type Output = Fraction;

            fn $method(self, rhs: Fraction) -> Fraction {
                unwrap_operator($checked(self, rhs), $symbol)
            }
        }

        impl $assign_trait for Fraction {
            fn $assign_method(&mut self, rhs: Fraction) {
                *self = unwrap_operator($checked(&*self, rhs), $symbol);
            }
        }

        impl $assign_trait<&Fraction> for Fraction {
            fn $assign_method(&mut self, rhs: &Fraction) {
                *self = unwrap_operator($checked(&*self, rhs), $symbol);
            }
        }

        impl $assign_trait<i64> for Fraction {
            fn $assign_method(&mut self, rhs: i64) {
                *self = unwrap_operator($checked(&*self, rhs), $symbol);
            }
        }
    };
}

impl_binary_operator!(Add, add, AddAssign, add_assign, add, "+");
impl_binary_operator!(Sub, sub, SubAssign, sub_assign, subtract, "-");
impl_binary_operator!(Mul, mul, MulAssign, mul_assign, multiply, "*");
impl_binary_operator!(Div, div, DivAssign, div_assign, divide, "/");
impl_binary_operator!(Rem, rem, RemAssign, rem_assign, modulo, "%");

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        -&self
    }
}

impl Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Fraction {
        Fraction::from_canonical(-self.numerator(), self.denominator().clone())
    }
}

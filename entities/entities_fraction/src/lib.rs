//! Entities Layer: Fraction
//!
//! Provides an exact rational number value type:
//! - Construction with sign canonicalization and optional reduction
//! - Arbitrary-precision numerator and denominator (`malachite::Integer`)
//! - Arithmetic over fractions and integers
//! - Common-denominator unification and exact comparison
//! - Parsing and formatting of fractions and mixed numbers
//!
//! Zero denominators are rejected at construction, arithmetic results are
//! always in lowest terms, and whole parts round toward negative infinity.
//!
//! # Examples
//!
//! ```rust
//! use entities_fraction::{Fraction, Power, power};
//!
//! let f = Fraction::from_string("4/8").unwrap();
//! assert!(!f.is_reduced());
//! assert_eq!(f.reduced().to_string(), "1/2");
//!
//! let sum = Fraction::new(1, 2).unwrap() + Fraction::new(1, 3).unwrap();
//! assert_eq!(sum.to_string(), "5/6");
//!
//! let squared = power(Fraction::new(1, 2).unwrap(), 2).unwrap();
//! assert_eq!(squared, Power::Exact(Fraction::new(1, 4).unwrap()));
//!
//! let big = Fraction::from_string("10000000000000000000/3").unwrap();
//! assert_eq!(big.whole_part().to_string(), "3333333333333333333");
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

pub mod arithmetic;
pub mod common;
pub mod compare;
pub mod error;
pub mod format;
pub mod fraction;
pub mod integer;
pub mod operand;
pub mod ops;
pub mod parse;

pub use arithmetic::{add, div_mod, divide, floor_divide, modulo, multiply, power, subtract, Power};
pub use common::{has_common_denominator, least_common_denominator, make_common};
pub use compare::{are_equal, compare};
pub use error::{FractionError, FractionResult};
pub use format::MixedNumber;
pub use fraction::Fraction;
pub use operand::Operand;

pub use malachite::Integer;

// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Genmath
//!
//! Generic numeric algorithms over the capability traits of `genmath_core`.
//! Every function is pure and synchronous, declares the smallest capability
//! bound it needs, and instantiates for fixed-width integers, floats and (with
//! the `bigint` feature) arbitrary-precision integers alike.
//!
//! ## Modules
//!
//! - `bits`: Right- and left-justified one-bit runs (`mask_right`,
//!   `mask_right_shifted`, `mask_left`) that never shift by the full width.
//! - `rounding`: The boundary rounding engine. Locates the two multiples of a
//!   step bracketing a value and resolves between them with a `RoundingMode`.
//! - `detent`: Snapping to intervals, positions and zero within a tolerance,
//!   built on the same resolver as `rounding`.
//! - `roots`: Integer power, square root and n-th root by Newton iteration,
//!   with exactness checks and `try_*` variants.
//! - `modular`: Euclidean modulus, (extended) GCD, modular inverse, and
//!   overflow-free modular multiplication and exponentiation.
//! - `cache`: `PowerCache`, a caller-owned memo for repeated integer powers.
//! - `special`: Gamma, log-Gamma, error function and the standard normal
//!   distribution (density, CDF and inverse CDF).
//!
//! The foundation modules `error`, `math` (closed intervals) and `num`
//! (capabilities, checked arithmetic) are re-exported from `genmath_core`.
//!
//! ## Example
//!
//! ```rust
//! use genmath::rounding::{RoundingMode, round_to_multiple};
//! use genmath::roots::integer_sqrt;
//!
//! assert_eq!(round_to_multiple(17, 10, false, RoundingMode::TowardZero), Ok(10));
//! assert_eq!(integer_sqrt(26u64), Ok(5));
//! ```

pub use genmath_core::{error, math, num};

pub mod bits;
pub mod cache;
pub mod detent;
pub mod modular;
pub mod roots;
pub mod rounding;
pub mod special;

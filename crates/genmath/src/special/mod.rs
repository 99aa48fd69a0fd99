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

//! # Special Functions
//!
//! Double-precision approximations of the Gamma function, the error function
//! and the standard normal distribution.
//!
//! The functions are generic over [`FloatingPoint`], but the coefficients are
//! tuned for `f64`; evaluating in `f32` rounds every coefficient and loses the
//! corresponding accuracy.
//!
//! | Function               | Method                                   | Accuracy          |
//! |------------------------|------------------------------------------|-------------------|
//! | [`gamma`]              | Cook's rational on `(1, 2)` + Stirling   | ~1e-15 relative   |
//! | [`log_gamma`]          | Stirling series for `x >= 12`            | ~1e-15 relative   |
//! | [`erf`], [`erfc`]      | Abramowitz & Stegun 7.1.26               | 1.5e-7 absolute   |
//! | [`normal_cdf`]         | via [`erf`]                              | 7.5e-8 absolute   |
//! | [`normal_cdf_inverse`] | Abramowitz & Stegun 26.2.23              | 4.5e-4 absolute   |

mod erf;
mod gamma;
mod normal;

pub use erf::{erf, erfc};
pub use gamma::{gamma, log_gamma};
pub use normal::{normal_cdf, normal_cdf_inverse, normal_pdf};

use genmath_core::num::capability::FloatingPoint;

/// Converts an `f64` literal into `F`.
///
/// Every supported float type can represent an approximation of any finite
/// `f64`, so the NaN fallback is never taken for the literals used here.
#[inline]
pub(crate) fn lit<F>(value: f64) -> F
where
    F: FloatingPoint,
{
    F::from_f64(value).unwrap_or_else(F::nan)
}

/// Evaluates the polynomial `coefficients[0] + coefficients[1] * x + ...`.
#[inline]
pub(crate) fn polynomial<F>(x: F, coefficients: &[f64]) -> F
where
    F: FloatingPoint,
{
    coefficients
        .iter()
        .rev()
        .fold(F::zero(), |acc, &c| acc * x + lit::<F>(c))
}

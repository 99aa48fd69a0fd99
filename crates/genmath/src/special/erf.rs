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

//! Error function, Abramowitz & Stegun formula 7.1.26.

use super::{lit, polynomial};
use genmath_core::num::capability::FloatingPoint;

const P: f64 = 0.327_591_1;

/// Coefficients `a1..a5`, preceded by the zero constant term.
const A: [f64; 6] = [
    0.0,
    0.254_829_592,
    -0.284_496_736,
    1.421_413_741,
    -1.453_152_027,
    1.061_405_429,
];

/// The error function, with absolute error below `1.5e-7`.
///
/// # Examples
///
/// ```rust
/// # use genmath::special::erf;
/// assert_eq!(erf(0.0_f64), 0.0);
/// assert!((erf(1.0_f64) - 0.842_700_79).abs() < 2e-7);
/// ```
pub fn erf<F>(x: F) -> F
where
    F: FloatingPoint,
{
    if x.is_zero() {
        return x;
    }

    let magnitude = x.abs();
    let t = (F::one() + lit::<F>(P) * magnitude).recip();
    let y = F::one() - polynomial(t, &A) * (-magnitude * magnitude).exp();
    if x.is_sign_negative() { -y } else { y }
}

/// The complementary error function `1 - erf(x)`.
#[inline]
pub fn erfc<F>(x: F) -> F
where
    F: FloatingPoint,
{
    F::one() - erf(x)
}

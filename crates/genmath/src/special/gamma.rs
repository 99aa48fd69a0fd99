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

//! Gamma and log-Gamma for positive real arguments.
//!
//! Below `12` the Gamma function is evaluated directly: a series near zero
//! and W. J. Cody's rational approximation on `(1, 2)` (as popularized by
//! John D. Cook), extended to `[0.001, 12)` with `Γ(x + 1) = x Γ(x)`. From
//! `12` on, both functions use the Stirling series for `ln Γ`.

use super::{lit, polynomial};
use genmath_core::error::{MathError, MathResult};
use genmath_core::num::capability::FloatingPoint;

const EULER_MASCHERONI: f64 = 0.577_215_664_901_532_860_606_512_090;

/// `ln(2π) / 2`.
const HALF_LN_TWO_PI: f64 = 0.918_938_533_204_672_741_780_329_736_405_62;

/// Largest argument whose Gamma value is a finite `f64`.
const GAMMA_OVERFLOW_THRESHOLD: f64 = 171.624;

/// Numerator coefficients on `(1, 2)`, highest power of `x - 1` first.
const NUMERATOR: [f64; 8] = [
    -1.716_185_138_865_494_925_338_11E+0,
    2.476_565_080_557_591_991_083_14E+1,
    -3.798_042_564_709_456_350_975_77E+2,
    6.293_311_553_128_184_426_610_52E+2,
    8.669_662_027_904_132_112_950_64E+2,
    -3.145_127_296_884_836_752_543_57E+4,
    -3.614_441_341_869_117_298_070_69E+4,
    6.645_614_382_024_054_406_278_55E+4,
];

/// Denominator coefficients on `(1, 2)`, highest power of `x - 1` first.
const DENOMINATOR: [f64; 8] = [
    -3.084_023_001_197_389_752_543_53E+1,
    3.153_506_269_796_041_615_291_44E+2,
    -1.015_156_367_490_219_141_661_46E+3,
    -3.107_771_671_572_311_094_404_44E+3,
    2.253_811_842_098_015_103_301_12E+4,
    4.755_846_277_527_881_107_678_15E+3,
    -1.346_599_598_649_693_063_924_56E+5,
    -1.151_322_596_755_534_834_972_11E+5,
];

/// Stirling series coefficients `B(2k) / (2k (2k - 1))`.
const STIRLING: [f64; 8] = [
    1.0 / 12.0,
    -1.0 / 360.0,
    1.0 / 1260.0,
    -1.0 / 1680.0,
    1.0 / 1188.0,
    -691.0 / 360_360.0,
    1.0 / 156.0,
    -3617.0 / 122_400.0,
];

#[inline]
fn check_argument<F>(x: F) -> MathResult<()>
where
    F: FloatingPoint,
{
    if x > F::zero() {
        Ok(())
    } else {
        Err(MathError::NonPositiveArgument)
    }
}

/// Γ on `[0.001, 12)`.
fn gamma_rational<F>(x: F) -> F
where
    F: FloatingPoint,
{
    let one = F::one();
    let below_one = x < one;

    // Reduce to y in [1, 2).
    let (mut y, shifts) = if below_one {
        (x + one, 0)
    } else {
        let shifts = (x.floor() - one).to_u32().unwrap_or(0);
        (x - lit::<F>(f64::from(shifts)), shifts)
    };

    let z = y - one;
    let (numerator, denominator) = NUMERATOR.iter().zip(DENOMINATOR.iter()).fold(
        (F::zero(), one),
        |(num, den), (&p, &q)| ((num + lit::<F>(p)) * z, den * z + lit::<F>(q)),
    );
    let mut result = numerator / denominator + one;

    if below_one {
        // Γ(x) = Γ(x + 1) / x
        return result / x;
    }
    for _ in 0..shifts {
        result = result * y;
        y = y + one;
    }
    result
}

/// The Gamma function for `x > 0`.
///
/// Arguments above `171.624` overflow `f64` and saturate to `+∞`.
///
/// # Errors
///
/// [`MathError::NonPositiveArgument`] if `x <= 0` or `x` is NaN.
///
/// # Examples
///
/// ```rust
/// # use genmath::special::gamma;
/// assert!((gamma(5.0_f64).unwrap() - 24.0).abs() < 1e-12);
/// assert_eq!(gamma(200.0_f64), Ok(f64::INFINITY));
/// ```
pub fn gamma<F>(x: F) -> MathResult<F>
where
    F: FloatingPoint,
{
    check_argument(x)?;

    if x < lit(0.001) {
        // 1/Γ(x) = x + γx² + O(x³)
        return Ok(F::one() / (x * (F::one() + lit::<F>(EULER_MASCHERONI) * x)));
    }
    if x < lit(12.0) {
        return Ok(gamma_rational(x));
    }
    if x > lit(GAMMA_OVERFLOW_THRESHOLD) {
        tracing::debug!(argument = ?x, "gamma saturated to infinity");
        return Ok(F::infinity());
    }
    Ok(stirling_log_gamma(x).exp())
}

/// `ln Γ(x)` from the Stirling series; accurate for `x >= 12`.
fn stirling_log_gamma<F>(x: F) -> F
where
    F: FloatingPoint,
{
    let z = (x * x).recip();
    let series = polynomial(z, &STIRLING) / x;
    (x - lit(0.5)) * x.ln() - x + lit(HALF_LN_TWO_PI) + series
}

/// The natural logarithm of the Gamma function for `x > 0`.
///
/// Unlike [`gamma`] this stays finite for large arguments.
///
/// # Errors
///
/// [`MathError::NonPositiveArgument`] if `x <= 0` or `x` is NaN.
///
/// # Examples
///
/// ```rust
/// # use genmath::special::log_gamma;
/// let ln_fact_99 = log_gamma(100.0_f64).unwrap();
/// assert!((ln_fact_99 - 359.134_205_369_575_4).abs() < 1e-10);
/// ```
pub fn log_gamma<F>(x: F) -> MathResult<F>
where
    F: FloatingPoint,
{
    check_argument(x)?;
    if x < lit(12.0) {
        return Ok(gamma(x)?.abs().ln());
    }
    Ok(stirling_log_gamma(x))
}

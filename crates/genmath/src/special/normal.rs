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

//! The standard normal distribution.

use super::{erf, lit, polynomial};
use genmath_core::error::{MathError, MathResult};
use genmath_core::num::capability::{FloatingPoint, two};

/// Numerator `c0 + c1 t + c2 t²` of Abramowitz & Stegun 26.2.23.
const NUMERATOR: [f64; 3] = [2.515_517, 0.802_853, 0.010_328];

/// Denominator `1 + d1 t + d2 t² + d3 t³` of Abramowitz & Stegun 26.2.23.
const DENOMINATOR: [f64; 4] = [1.0, 1.432_788, 0.189_269, 0.001_308];

/// The density of the standard normal distribution.
#[inline]
pub fn normal_pdf<F>(x: F) -> F
where
    F: FloatingPoint,
{
    let two = two::<F>();
    (-x * x / two).exp() / (two * F::PI()).sqrt()
}

/// The cumulative distribution function of the standard normal distribution.
///
/// # Examples
///
/// ```rust
/// # use genmath::special::normal_cdf;
/// assert_eq!(normal_cdf(0.0_f64), 0.5);
/// assert!((normal_cdf(1.96_f64) - 0.975).abs() < 1e-4);
/// ```
#[inline]
pub fn normal_cdf<F>(x: F) -> F
where
    F: FloatingPoint,
{
    lit::<F>(0.5) * (F::one() + erf(x * F::FRAC_1_SQRT_2()))
}

/// The upper tail quantile for `q` in `(0, 0.5]`.
#[inline]
fn upper_tail<F>(q: F) -> F
where
    F: FloatingPoint,
{
    let t = (-two::<F>() * q.ln()).sqrt();
    t - polynomial(t, &NUMERATOR) / polynomial(t, &DENOMINATOR)
}

/// The quantile function of the standard normal distribution.
///
/// Uses a rational approximation with absolute error below `4.5e-4`.
///
/// # Errors
///
/// [`MathError::ProbabilityOutOfRange`] unless `0 < p < 1`.
///
/// # Examples
///
/// ```rust
/// # use genmath::special::normal_cdf_inverse;
/// assert!(normal_cdf_inverse(0.5_f64).unwrap().abs() < 4.5e-4);
/// assert!(normal_cdf_inverse(1.0_f64).is_err());
/// ```
pub fn normal_cdf_inverse<F>(p: F) -> MathResult<F>
where
    F: FloatingPoint,
{
    if !(p > F::zero() && p < F::one()) {
        return Err(MathError::ProbabilityOutOfRange);
    }
    if p < lit(0.5) {
        Ok(-upper_tail(p))
    } else {
        Ok(upper_tail(F::one() - p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_pdf() {
        assert!((normal_pdf(0.0_f64) - 0.398_942_280_401_432_7).abs() < 1e-15);
        assert!((normal_pdf(1.0_f64) - 0.241_970_724_519_143_37).abs() < 1e-15);
        assert_eq!(normal_pdf(2.0_f64), normal_pdf(-2.0));
    }

    #[test]
    fn test_normal_cdf() {
        assert_eq!(normal_cdf(0.0_f64), 0.5);
        assert!((normal_cdf(1.0_f64) - 0.841_344_746_068_542_9).abs() < 1e-7);
        assert!((normal_cdf(-1.0_f64) - 0.158_655_253_931_457_05).abs() < 1e-7);
        assert!((normal_cdf(1.959_963_984_540_054_f64) - 0.975).abs() < 1e-7);
        assert_eq!(normal_cdf(f64::INFINITY), 1.0);
        assert_eq!(normal_cdf(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_normal_cdf_inverse() {
        let reference: [(f64, f64); 6] = [
            (0.5, 0.0),
            (0.975, 1.959_963_984_540_054),
            (0.025, -1.959_963_984_540_054),
            (0.841_344_746_068_542_9, 1.0),
            (0.001, -3.090_232_306_167_813_5),
            (0.999_999, 4.753_424_308_822_899),
        ];
        for (p, expected) in reference {
            let actual = normal_cdf_inverse(p).unwrap();
            assert!(
                (actual - expected).abs() < 4.5e-4,
                "quantile({p}) = {actual}, expected {expected}"
            );
        }
    }

    #[test]
    fn test_normal_cdf_inverse_domain() {
        for p in [0.0_f64, 1.0, -0.5, 1.5, f64::NAN, f64::INFINITY] {
            assert_eq!(normal_cdf_inverse(p), Err(MathError::ProbabilityOutOfRange));
        }
    }

    #[test]
    fn test_round_trip_through_cdf() {
        for i in 1..20 {
            let p = f64::from(i) / 20.0;
            let x = normal_cdf_inverse(p).unwrap();
            assert!((normal_cdf(x) - p).abs() < 2e-4, "p = {p}");
        }
    }
}

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

//! # Integer Roots
//!
//! Exact integer exponentiation and floor roots computed with Newton's method.
//! All arithmetic is checked: a result that does not fit the integer type is
//! reported as [`MathError::Overflow`] instead of wrapping.
//!
//! The Newton iterations start above the true root, at a power of two derived
//! from the bit length of the radicand, and decrease monotonically until the
//! next iterate stops decreasing. The last decreasing iterate is the floor of
//! the root.

use genmath_core::error::{MathError, MathResult};
use genmath_core::num::capability::{IntegerNumber, constant, two};

/// Raises `base` to `exponent` by repeated squaring.
///
/// `0^0` is `1`.
///
/// # Errors
///
/// - [`MathError::NegativeExponent`] if `exponent` is negative.
/// - [`MathError::Overflow`] if the result does not fit `T`.
///
/// # Examples
///
/// ```rust
/// # use genmath::roots::integer_pow;
/// assert_eq!(integer_pow(3i64, 4), Ok(81));
/// assert!(integer_pow(2u8, 8).is_err());
/// ```
pub fn integer_pow<T>(base: T, exponent: T) -> MathResult<T>
where
    T: IntegerNumber,
{
    if exponent.is_negative_val() {
        return Err(MathError::NegativeExponent);
    }

    let mut result = T::one();
    let mut base = base;
    let mut exponent = exponent;
    while !exponent.is_zero() {
        if !exponent.is_even_val() {
            result = result
                .checked_mul_val(base.clone())
                .ok_or(MathError::Overflow)?;
        }
        exponent = exponent >> 1u32;
        if !exponent.is_zero() {
            base = base
                .clone()
                .checked_mul_val(base)
                .ok_or(MathError::Overflow)?;
        }
    }
    Ok(result)
}

/// `base^exponent`, or `None` on overflow.
fn checked_pow<T>(base: T, exponent: u32) -> Option<T>
where
    T: IntegerNumber,
{
    let mut result = T::one();
    let mut base = base;
    let mut exponent = exponent;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = result.checked_mul_val(base.clone())?;
        }
        exponent >>= 1;
        if exponent > 0 {
            base = base.clone().checked_mul_val(base)?;
        }
    }
    Some(result)
}

/// `1 << shift` for a shift derived from a bit length.
#[inline]
fn power_of_two<T>(shift: u64) -> MathResult<T>
where
    T: IntegerNumber,
{
    let shift = u32::try_from(shift).map_err(|_| MathError::Overflow)?;
    Ok(T::one() << shift)
}

/// Computes `floor(sqrt(y))`.
///
/// # Errors
///
/// [`MathError::NegativeRadicand`] if `y` is negative.
///
/// # Examples
///
/// ```rust
/// # use genmath::roots::integer_sqrt;
/// assert_eq!(integer_sqrt(26u32), Ok(5));
/// assert_eq!(integer_sqrt(u64::MAX), Ok(u64::from(u32::MAX)));
/// ```
pub fn integer_sqrt<T>(y: T) -> MathResult<T>
where
    T: IntegerNumber,
{
    if y.is_negative_val() {
        return Err(MathError::NegativeRadicand);
    }
    if y < two() {
        return Ok(y);
    }

    let two = two::<T>();
    let mut x = power_of_two::<T>(y.bit_length().div_ceil(2))?;
    let mut iterations = 0u32;
    loop {
        iterations += 1;
        let next = x
            .clone()
            .checked_add_val(y.clone() / x.clone())
            .ok_or(MathError::Overflow)?
            / two.clone();
        if next >= x {
            tracing::trace!(iterations, "integer square root converged");
            return Ok(x);
        }
        x = next;
    }
}

/// Computes `floor(y^(1/n))`.
///
/// # Errors
///
/// - [`MathError::InvalidRootDegree`] if `n < 2`.
/// - [`MathError::NegativeRadicand`] if `y` is negative.
///
/// # Examples
///
/// ```rust
/// # use genmath::roots::integer_nth_root;
/// assert_eq!(integer_nth_root(1000u32, 3), Ok(10));
/// assert_eq!(integer_nth_root(999u32, 3), Ok(9));
/// ```
pub fn integer_nth_root<T>(y: T, n: u32) -> MathResult<T>
where
    T: IntegerNumber,
{
    if n < 2 {
        return Err(MathError::InvalidRootDegree(n));
    }
    if y.is_negative_val() {
        return Err(MathError::NegativeRadicand);
    }
    if y < two() {
        return Ok(y);
    }

    let bits = y.bit_length();
    // y < 2^bits <= 2^n, so the root lies in [1, 2).
    if u64::from(n) >= bits {
        return Ok(T::one());
    }

    let degree = constant::<T>(n).ok_or(MathError::Overflow)?;
    let degree_less_one = constant::<T>(n - 1).ok_or(MathError::Overflow)?;
    let mut x = power_of_two::<T>(bits.div_ceil(u64::from(n)))?;
    let mut iterations = 0u32;
    loop {
        iterations += 1;
        // x^(n-1) > y whenever the power overflows, so the quotient is zero.
        let quotient = match checked_pow(x.clone(), n - 1) {
            Some(power) => y.clone() / power,
            None => T::zero(),
        };
        let next = degree_less_one
            .clone()
            .checked_mul_val(x.clone())
            .and_then(|scaled| scaled.checked_add_val(quotient))
            .ok_or(MathError::Overflow)?
            / degree.clone();
        if next >= x {
            tracing::trace!(iterations, degree = n, "integer nth root converged");
            return Ok(x);
        }
        x = next;
    }
}

/// Returns `true` if `y == x^n` exactly.
///
/// A power that does not fit `T` cannot equal `y`, so overflow yields `false`.
#[inline]
pub fn is_perfect_root<T>(y: &T, n: u32, x: T) -> bool
where
    T: IntegerNumber,
{
    checked_pow(x, n).is_some_and(|power| power == *y)
}

/// Returns `true` if `y` is the square of an integer.
///
/// # Errors
///
/// [`MathError::NegativeRadicand`] if `y` is negative.
pub fn is_perfect_square<T>(y: T) -> MathResult<bool>
where
    T: IntegerNumber,
{
    let root = integer_sqrt(y.clone())?;
    Ok(is_perfect_root(&y, 2, root))
}

/// [`integer_pow`] with failures reported as `None`.
pub fn try_integer_pow<T>(base: T, exponent: T) -> Option<T>
where
    T: IntegerNumber,
{
    integer_pow(base, exponent)
        .inspect_err(|error| tracing::debug!(%error, "integer power rejected"))
        .ok()
}

/// [`integer_sqrt`] with failures reported as `None`.
pub fn try_integer_sqrt<T>(y: T) -> Option<T>
where
    T: IntegerNumber,
{
    integer_sqrt(y)
        .inspect_err(|error| tracing::debug!(%error, "integer square root rejected"))
        .ok()
}

/// [`integer_nth_root`] with failures reported as `None`.
pub fn try_integer_nth_root<T>(y: T, n: u32) -> Option<T>
where
    T: IntegerNumber,
{
    integer_nth_root(y, n)
        .inspect_err(|error| tracing::debug!(%error, degree = n, "integer nth root rejected"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_pow() {
        assert_eq!(integer_pow(2i32, 10), Ok(1024));
        assert_eq!(integer_pow(-3i32, 3), Ok(-27));
        assert_eq!(integer_pow(0u32, 0), Ok(1));
        assert_eq!(integer_pow(0u32, 5), Ok(0));
        assert_eq!(integer_pow(7u64, 1), Ok(7));
        assert_eq!(integer_pow(2u8, 7), Ok(128));
        assert_eq!(integer_pow(2u8, 8), Err(MathError::Overflow));
        assert_eq!(integer_pow(2i8, 7), Err(MathError::Overflow));
        assert_eq!(integer_pow(-2i8, 7), Ok(-128));
        assert_eq!(integer_pow(2i32, -1), Err(MathError::NegativeExponent));
    }

    #[test]
    fn test_integer_pow_does_not_square_past_the_last_bit() {
        // 16^1 would overflow u8 if the base were squared once more.
        assert_eq!(integer_pow(16u8, 1), Ok(16));
        assert_eq!(integer_pow(15u8, 2), Ok(225));
    }

    #[test]
    fn test_integer_sqrt_small_values() {
        let expected = [0u32, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3];
        for (y, root) in expected.into_iter().enumerate() {
            assert_eq!(integer_sqrt(y as u32), Ok(root), "sqrt({y})");
        }
        assert_eq!(integer_sqrt(26), Ok(5));
        assert_eq!(integer_sqrt(35), Ok(5));
        assert_eq!(integer_sqrt(36), Ok(6));
    }

    #[test]
    fn test_integer_sqrt_extremes() {
        assert_eq!(integer_sqrt(u8::MAX), Ok(15));
        assert_eq!(integer_sqrt(i8::MAX), Ok(11));
        assert_eq!(integer_sqrt(u64::MAX), Ok(4_294_967_295));
        assert_eq!(integer_sqrt(i64::MAX), Ok(3_037_000_499));
        assert_eq!(integer_sqrt(u128::MAX), Ok(u128::from(u64::MAX)));
    }

    #[test]
    fn test_integer_sqrt_negative() {
        assert_eq!(integer_sqrt(-4i32), Err(MathError::NegativeRadicand));
        assert_eq!(try_integer_sqrt(-4i32), None);
        assert_eq!(try_integer_sqrt(49i32), Some(7));
    }

    #[test]
    fn test_integer_nth_root() {
        assert_eq!(integer_nth_root(27u32, 3), Ok(3));
        assert_eq!(integer_nth_root(26u32, 3), Ok(2));
        assert_eq!(integer_nth_root(28u32, 3), Ok(3));
        assert_eq!(integer_nth_root(1u32 << 20, 5), Ok(16));
        assert_eq!(integer_nth_root(u64::MAX, 2), Ok(u64::from(u32::MAX)));
        assert_eq!(integer_nth_root(u64::MAX, 3), Ok(2_642_245));
        assert_eq!(integer_nth_root(u64::MAX, 63), Ok(2));
        assert_eq!(integer_nth_root(u64::MAX, 64), Ok(1));
        assert_eq!(integer_nth_root(u8::MAX, 7), Ok(2));
        assert_eq!(integer_nth_root(i8::MAX, 3), Ok(5));
        assert_eq!(integer_nth_root(0u32, 5), Ok(0));
        assert_eq!(integer_nth_root(1u32, 5), Ok(1));
    }

    #[test]
    fn test_integer_nth_root_preconditions() {
        assert_eq!(integer_nth_root(8u32, 1), Err(MathError::InvalidRootDegree(1)));
        assert_eq!(integer_nth_root(8u32, 0), Err(MathError::InvalidRootDegree(0)));
        assert_eq!(integer_nth_root(-8i32, 3), Err(MathError::NegativeRadicand));
        assert_eq!(try_integer_nth_root(8u32, 1), None);
        assert_eq!(try_integer_nth_root(8u32, 3), Some(2));
    }

    #[test]
    fn test_perfect_roots() {
        assert!(is_perfect_root(&125u32, 3, 5));
        assert!(!is_perfect_root(&124u32, 3, 5));
        assert!(!is_perfect_root(&0u8, 2, 16));
        assert_eq!(is_perfect_square(144u32), Ok(true));
        assert_eq!(is_perfect_square(145u32), Ok(false));
        assert_eq!(is_perfect_square(0u32), Ok(true));
        assert_eq!(is_perfect_square(-1i32), Err(MathError::NegativeRadicand));
    }

    #[test]
    fn test_try_integer_pow() {
        assert_eq!(try_integer_pow(10u16, 4), Some(10_000));
        assert_eq!(try_integer_pow(10u16, 5), None);
        assert_eq!(try_integer_pow(10i16, -1), None);
    }

    #[cfg(feature = "bigint")]
    #[test]
    fn test_bigint_roots() {
        use num_bigint::{BigInt, BigUint};

        let ten = BigUint::from(10u32);
        let big = integer_pow(ten.clone(), BigUint::from(50u32)).unwrap();
        assert_eq!(integer_sqrt(big.clone()), Ok(ten.pow(25)));
        assert_eq!(integer_nth_root(big.clone(), 5), Ok(ten.pow(10)));
        assert_eq!(
            integer_sqrt(big.clone() - BigUint::from(1u32)),
            Ok(ten.pow(25) - BigUint::from(1u32))
        );
        assert_eq!(is_perfect_square(big), Ok(true));

        assert_eq!(
            integer_sqrt(BigInt::from(-1)),
            Err(MathError::NegativeRadicand)
        );
    }
}

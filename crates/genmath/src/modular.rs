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

//! # Modular Arithmetic
//!
//! Euclidean remainders, greatest common divisors and modular inverses,
//! multiplication and exponentiation.
//!
//! [`mul_mod`] and [`pow_mod`] never form a product that exceeds the modulus
//! by more than a factor of two: when `a * b` does not fit the type they fall
//! back to double-and-add, which keeps every intermediate below `m`. Any
//! modulus representable in `T` is therefore safe.

use genmath_core::error::{MathError, MathResult};
use genmath_core::num::capability::{IntegerNumber, SignedInteger};

/// The result of the extended Euclidean algorithm.
///
/// Holds `gcd(a, b)` and Bézout coefficients with `a * x + b * y == gcd`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bezout<T> {
    /// The non-negative greatest common divisor.
    pub gcd: T,
    /// The coefficient of `a`.
    pub x: T,
    /// The coefficient of `b`.
    pub y: T,
}

/// Euclidean remainder of `a` divided by `b`.
///
/// The result lies in `[0, |b|)` regardless of the signs of `a` and `b`.
///
/// # Errors
///
/// [`MathError::DivisionByZero`] if `b` is zero.
///
/// # Examples
///
/// ```rust
/// # use genmath::modular::euclid_mod;
/// assert_eq!(euclid_mod(-7, 3), Ok(2));
/// assert_eq!(euclid_mod(-7, -3), Ok(2));
/// assert_eq!(euclid_mod(7, -3), Ok(1));
/// ```
pub fn euclid_mod<T>(a: T, b: T) -> MathResult<T>
where
    T: IntegerNumber,
{
    if b.is_zero() {
        return Err(MathError::DivisionByZero);
    }
    // Only `MIN % -1` fails, and its remainder is zero.
    let r = a.checked_rem_val(b.clone()).unwrap_or_else(T::zero);
    if r.is_negative_val() {
        Ok(if b.is_negative_val() { r - b } else { r + b })
    } else {
        Ok(r)
    }
}

/// The greatest common divisor of `a` and `b`, always non-negative.
///
/// `gcd(0, 0)` is `0`.
///
/// # Errors
///
/// [`MathError::Overflow`] if the divisor is `|MIN|` of a signed type, which is
/// not representable.
pub fn gcd<T>(a: T, b: T) -> MathResult<T>
where
    T: IntegerNumber,
{
    let (mut a, mut b) = (a, b);
    while !b.is_zero() {
        let r = a.checked_rem_val(b.clone()).unwrap_or_else(T::zero);
        a = b;
        b = r;
    }
    a.checked_abs_val().ok_or(MathError::Overflow)
}

/// The least common multiple of `a` and `b`, always non-negative.
///
/// # Errors
///
/// [`MathError::Overflow`] if the result does not fit `T`.
pub fn lcm<T>(a: T, b: T) -> MathResult<T>
where
    T: IntegerNumber,
{
    if a.is_zero() || b.is_zero() {
        return Ok(T::zero());
    }
    let divisor = gcd(a.clone(), b.clone())?;
    let a = a.checked_abs_val().ok_or(MathError::Overflow)?;
    let b = b.checked_abs_val().ok_or(MathError::Overflow)?;
    (a / divisor)
        .checked_mul_val(b)
        .ok_or(MathError::Overflow)
}

/// Extended Euclidean algorithm.
///
/// The returned gcd is non-negative.
///
/// # Errors
///
/// [`MathError::Overflow`] if a coefficient does not fit `T`.
///
/// # Examples
///
/// ```rust
/// # use genmath::modular::gcd_ext;
/// let b = gcd_ext(240i64, 46).unwrap();
/// assert_eq!(b.gcd, 2);
/// assert_eq!(240 * b.x + 46 * b.y, 2);
/// ```
pub fn gcd_ext<T>(a: T, b: T) -> MathResult<Bezout<T>>
where
    T: SignedInteger,
{
    let step = |previous: T, quotient: &T, current: &T| -> MathResult<T> {
        quotient
            .clone()
            .checked_mul_val(current.clone())
            .and_then(|product| previous.checked_sub_val(product))
            .ok_or(MathError::Overflow)
    };

    let (mut old_r, mut r) = (a, b);
    let (mut old_x, mut x) = (T::one(), T::zero());
    let (mut old_y, mut y) = (T::zero(), T::one());

    while !r.is_zero() {
        let quotient = old_r
            .clone()
            .checked_div_val(r.clone())
            .ok_or(MathError::Overflow)?;
        let next_r = step(old_r, &quotient, &r)?;
        old_r = std::mem::replace(&mut r, next_r);
        let next_x = step(old_x, &quotient, &x)?;
        old_x = std::mem::replace(&mut x, next_x);
        let next_y = step(old_y, &quotient, &y)?;
        old_y = std::mem::replace(&mut y, next_y);
    }

    if old_r.is_negative_val() {
        let negate = |value: T| value.checked_neg_val().ok_or(MathError::Overflow);
        return Ok(Bezout {
            gcd: negate(old_r)?,
            x: negate(old_x)?,
            y: negate(old_y)?,
        });
    }

    Ok(Bezout {
        gcd: old_r,
        x: old_x,
        y: old_y,
    })
}

/// The multiplicative inverse of `a` modulo `m`.
///
/// Negative operands are normalized first: `m` is replaced by `|m|` and `a` by
/// its Euclidean remainder. Returns `Ok(None)` if `a` and `m` are not coprime.
/// The inverse is reported in `[0, |m|)`; modulo one every value is its own
/// inverse class, so the result is `0`.
///
/// # Errors
///
/// - [`MathError::DivisionByZero`] if `m` is zero.
/// - [`MathError::Overflow`] if `|m|` does not fit `T`.
///
/// # Examples
///
/// ```rust
/// # use genmath::modular::mod_inverse;
/// assert_eq!(mod_inverse(4, 7), Ok(Some(2)));
/// assert_eq!(mod_inverse(-3, 7), Ok(Some(2)));
/// assert_eq!(mod_inverse(4, 8), Ok(None));
/// ```
pub fn mod_inverse<T>(a: T, m: T) -> MathResult<Option<T>>
where
    T: SignedInteger,
{
    if m.is_zero() {
        return Err(MathError::DivisionByZero);
    }
    let m = m.checked_abs_val().ok_or(MathError::Overflow)?;
    let a = euclid_mod(a, m.clone())?;

    let bezout = gcd_ext(a, m.clone())?;
    if !bezout.gcd.is_one() {
        return Ok(None);
    }
    euclid_mod(bezout.x, m).map(Some)
}

/// [`mod_inverse`] with failures and missing inverses reported as `None`.
pub fn try_mod_inverse<T>(a: T, m: T) -> Option<T>
where
    T: SignedInteger,
{
    mod_inverse(a, m)
        .inspect_err(|error| tracing::debug!(%error, "modular inverse rejected"))
        .ok()
        .flatten()
}

#[inline]
fn check_operands<T>(operands: &[&T], m: &T) -> MathResult<()>
where
    T: IntegerNumber,
{
    if m.is_negative_val() || operands.iter().any(|operand| operand.is_negative_val()) {
        return Err(MathError::NegativeOperand);
    }
    if m.is_zero() {
        return Err(MathError::DivisionByZero);
    }
    Ok(())
}

/// `(x + y) mod m` for `x, y` in `[0, m)`, without overflowing.
#[inline]
fn add_mod<T>(x: T, y: T, m: &T) -> T
where
    T: IntegerNumber,
{
    let gap = m.clone() - y.clone();
    if x >= gap { x - gap } else { x + y }
}

/// `(a * b) mod m` for reduced operands, without overflowing.
fn mul_mod_reduced<T>(a: T, b: T, m: &T) -> T
where
    T: IntegerNumber,
{
    if let Some(product) = a.clone().checked_mul_val(b.clone()) {
        return product % m.clone();
    }

    let mut result = T::zero();
    let mut addend = a;
    let mut multiplier = b;
    while !multiplier.is_zero() {
        if !multiplier.is_even_val() {
            result = add_mod(result, addend.clone(), m);
        }
        addend = add_mod(addend.clone(), addend, m);
        multiplier = multiplier >> 1u32;
    }
    result
}

/// Computes `(a * b) mod m` for non-negative operands.
///
/// # Errors
///
/// - [`MathError::NegativeOperand`] if any argument is negative.
/// - [`MathError::DivisionByZero`] if `m` is zero.
///
/// # Examples
///
/// ```rust
/// # use genmath::modular::mul_mod;
/// assert_eq!(mul_mod(u64::MAX - 1, u64::MAX - 2, u64::MAX), Ok(2));
/// ```
pub fn mul_mod<T>(a: T, b: T, m: T) -> MathResult<T>
where
    T: IntegerNumber,
{
    check_operands(&[&a, &b], &m)?;
    let a = a % m.clone();
    let b = b % m.clone();
    Ok(mul_mod_reduced(a, b, &m))
}

/// Computes `a^b mod m` for non-negative operands by repeated squaring.
///
/// `0^0` is `1` (reduced modulo `m`).
///
/// # Errors
///
/// - [`MathError::NegativeOperand`] if any argument is negative.
/// - [`MathError::DivisionByZero`] if `m` is zero.
///
/// # Examples
///
/// ```rust
/// # use genmath::modular::pow_mod;
/// assert_eq!(pow_mod(4u32, 13, 497), Ok(445));
/// ```
pub fn pow_mod<T>(a: T, b: T, m: T) -> MathResult<T>
where
    T: IntegerNumber,
{
    check_operands(&[&a, &b], &m)?;
    if m.is_one() {
        return Ok(T::zero());
    }

    let mut result = T::one();
    let mut base = a % m.clone();
    let mut exponent = b;
    while !exponent.is_zero() {
        if !exponent.is_even_val() {
            result = mul_mod_reduced(result, base.clone(), &m);
        }
        exponent = exponent >> 1u32;
        if !exponent.is_zero() {
            base = mul_mod_reduced(base.clone(), base, &m);
        }
    }
    Ok(result)
}

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

//! # Boundary Rounding
//!
//! Snaps a value to a multiple of a positive `step`.
//!
//! Rounding happens in two stages:
//!
//! 1. [`bracket_multiples`] finds the multiples `toward_zero` and
//!    `away_from_zero` that enclose the value. For negative values "away from
//!    zero" is the more negative multiple. With `proper = true` an exact
//!    multiple is not allowed to be its own bracket; its neighbours one step
//!    to either side are returned instead.
//! 2. A [`RoundingMode`] chooses between the two:
//!    - the directed modes (`TowardZero`, `AwayFromZero`, `ToNegativeInfinity`,
//!      `ToPositiveInfinity`) always pick the bracket on their side,
//!    - `ToEven` and `ToOdd` pick the nearer bracket and, on a tie, the one
//!      that is an even (respectively odd) multiple of the step.
//!
//! The same resolver backs the detent functions in [`crate::detent`], so tie
//! breaking is identical everywhere.
//!
//! ## Example
//!
//! ```rust
//! use genmath::rounding::{RoundingMode, round_to_multiple};
//!
//! assert_eq!(round_to_multiple(15, 10, false, RoundingMode::ToEven), Ok(20));
//! assert_eq!(round_to_multiple(25, 10, false, RoundingMode::ToEven), Ok(20));
//! assert_eq!(round_to_multiple(-15, 10, false, RoundingMode::AwayFromZero), Ok(-20));
//! assert_eq!(round_to_multiple(1.3, 0.5, false, RoundingMode::ToPositiveInfinity), Ok(1.5));
//! ```

use genmath_core::error::{MathError, MathResult};
use genmath_core::num::capability::{Number, Ordered, two};
use genmath_core::num::ops::checked_arithmetic::{CheckedAddVal, CheckedRemVal, CheckedSubVal};

/// Policy for choosing between the two bracketing candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundingMode {
    /// Nearest candidate; ties go to the even multiple.
    #[default]
    ToEven,
    /// The candidate farther from zero.
    AwayFromZero,
    /// The candidate closer to zero.
    TowardZero,
    /// The smaller candidate.
    ToNegativeInfinity,
    /// The larger candidate.
    ToPositiveInfinity,
    /// Nearest candidate; ties go to the odd multiple.
    ToOdd,
}

impl RoundingMode {
    /// Every rounding mode, in declaration order.
    pub const ALL: [RoundingMode; 6] = [
        RoundingMode::ToEven,
        RoundingMode::AwayFromZero,
        RoundingMode::TowardZero,
        RoundingMode::ToNegativeInfinity,
        RoundingMode::ToPositiveInfinity,
        RoundingMode::ToOdd,
    ];

    /// Returns `true` for modes that ignore the distance to the candidates.
    #[inline]
    pub const fn is_directed(self) -> bool {
        matches!(
            self,
            RoundingMode::AwayFromZero
                | RoundingMode::TowardZero
                | RoundingMode::ToNegativeInfinity
                | RoundingMode::ToPositiveInfinity
        )
    }
}

impl std::fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RoundingMode::ToEven => "to-even",
            RoundingMode::AwayFromZero => "away-from-zero",
            RoundingMode::TowardZero => "toward-zero",
            RoundingMode::ToNegativeInfinity => "to-negative-infinity",
            RoundingMode::ToPositiveInfinity => "to-positive-infinity",
            RoundingMode::ToOdd => "to-odd",
        };
        f.write_str(name)
    }
}

/// The two candidates enclosing a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bracket<T> {
    toward_zero: T,
    away_from_zero: T,
}

impl<T> Bracket<T>
where
    T: Ordered,
{
    /// Creates a bracket from its two candidates.
    #[inline]
    pub fn new(toward_zero: T, away_from_zero: T) -> Self {
        Self {
            toward_zero,
            away_from_zero,
        }
    }

    /// The candidate closer to zero.
    #[inline]
    pub fn toward_zero(&self) -> &T {
        &self.toward_zero
    }

    /// The candidate farther from zero.
    #[inline]
    pub fn away_from_zero(&self) -> &T {
        &self.away_from_zero
    }

    /// The smaller candidate.
    #[inline]
    pub fn lower(&self) -> &T {
        if self.away_from_zero < self.toward_zero {
            &self.away_from_zero
        } else {
            &self.toward_zero
        }
    }

    /// The larger candidate.
    #[inline]
    pub fn upper(&self) -> &T {
        if self.away_from_zero < self.toward_zero {
            &self.toward_zero
        } else {
            &self.away_from_zero
        }
    }

    /// Returns `true` if both candidates coincide.
    #[inline]
    pub fn is_exact(&self) -> bool {
        self.toward_zero == self.away_from_zero
    }

    /// Consumes the bracket, returning `(toward_zero, away_from_zero)`.
    #[inline]
    pub fn into_parts(self) -> (T, T) {
        (self.toward_zero, self.away_from_zero)
    }
}

/// Finds the two multiples of `step` enclosing `value`.
///
/// If `value` is itself a multiple and `proper` is `false`, both candidates
/// equal `value`. If `proper` is `true`, an exact multiple yields its two
/// neighbours instead; zero counts as non-negative, so its neighbours are
/// `-step` (toward zero) and `step` (away from zero).
///
/// # Errors
///
/// - [`MathError::NonPositiveStep`] if `step` is not strictly positive.
/// - [`MathError::Overflow`] if a candidate is not representable in `T`.
///
/// # Examples
///
/// ```rust
/// # use genmath::rounding::bracket_multiples;
/// let b = bracket_multiples(-17, 10, false).unwrap();
/// assert_eq!((*b.toward_zero(), *b.away_from_zero()), (-10, -20));
///
/// let b = bracket_multiples(20, 10, true).unwrap();
/// assert_eq!((*b.lower(), *b.upper()), (10, 30));
/// ```
pub fn bracket_multiples<T>(value: T, step: T, proper: bool) -> MathResult<Bracket<T>>
where
    T: Number + CheckedAddVal + CheckedSubVal + CheckedRemVal,
{
    if !step.is_positive_val() {
        return Err(MathError::NonPositiveStep);
    }

    let remainder = value
        .clone()
        .checked_rem_val(step.clone())
        .ok_or(MathError::Overflow)?;
    let negative = value.is_negative_val();
    // Truncating remainder: same sign as `value`, magnitude below `step`.
    let toward_zero = value - remainder.clone();

    if remainder.is_zero() {
        if !proper {
            return Ok(Bracket::new(toward_zero.clone(), toward_zero));
        }
        let below = toward_zero
            .clone()
            .checked_sub_val(step.clone())
            .ok_or(MathError::Overflow)?;
        let above = toward_zero
            .checked_add_val(step)
            .ok_or(MathError::Overflow)?;
        return Ok(if negative {
            Bracket::new(above, below)
        } else {
            Bracket::new(below, above)
        });
    }

    let away_from_zero = if negative {
        toward_zero.clone().checked_sub_val(step)
    } else {
        toward_zero.clone().checked_add_val(step)
    }
    .ok_or(MathError::Overflow)?;

    Ok(Bracket::new(toward_zero, away_from_zero))
}

#[inline]
fn distance<T>(a: &T, b: &T) -> T
where
    T: Number,
{
    if a >= b {
        a.clone() - b.clone()
    } else {
        b.clone() - a.clone()
    }
}

/// How far the index `candidate / unit` is from the nearest even integer.
///
/// `0` for even multiples and `1` for odd ones; for floating point candidates
/// the quotient may be slightly off an integer, which this tolerates.
#[inline]
fn distance_to_even<T>(candidate: &T, unit: &T) -> T
where
    T: Number,
{
    let two = two::<T>();
    let index = candidate.clone() / unit.clone();
    let residue = (index % two.clone()).abs_val();
    let complement = two - residue.clone();
    if complement < residue {
        complement
    } else {
        residue
    }
}

/// Chooses between the candidates of `bracket` according to `mode`.
///
/// `unit` defines what "even" means: a candidate is even if `candidate / unit`
/// is an even integer. Ties in the parity comparison fall back to the
/// candidate toward zero.
pub(crate) fn resolve<T>(value: &T, bracket: Bracket<T>, unit: &T, mode: RoundingMode) -> T
where
    T: Number,
{
    if bracket.is_exact() {
        return bracket.toward_zero;
    }

    match mode {
        RoundingMode::TowardZero => bracket.toward_zero,
        RoundingMode::AwayFromZero => bracket.away_from_zero,
        RoundingMode::ToNegativeInfinity => bracket.lower().clone(),
        RoundingMode::ToPositiveInfinity => bracket.upper().clone(),
        RoundingMode::ToEven | RoundingMode::ToOdd => {
            let to_toward = distance(value, &bracket.toward_zero);
            let to_away = distance(value, &bracket.away_from_zero);
            if to_toward < to_away {
                return bracket.toward_zero;
            }
            if to_away < to_toward {
                return bracket.away_from_zero;
            }

            let toward_parity = distance_to_even(&bracket.toward_zero, unit);
            let away_parity = distance_to_even(&bracket.away_from_zero, unit);
            let prefer_away = match mode {
                RoundingMode::ToEven => away_parity < toward_parity,
                _ => away_parity > toward_parity,
            };
            if prefer_away {
                bracket.away_from_zero
            } else {
                bracket.toward_zero
            }
        }
    }
}

/// Rounds `value` to a multiple of `step` using `mode`.
///
/// A value that already is a multiple is returned unchanged unless `proper`
/// is `true`, in which case it rounds to one of its neighbours.
///
/// # Errors
///
/// See [`bracket_multiples`].
///
/// # Examples
///
/// ```rust
/// # use genmath::rounding::{RoundingMode, round_to_multiple};
/// assert_eq!(round_to_multiple(17, 10, false, RoundingMode::AwayFromZero), Ok(20));
/// assert_eq!(round_to_multiple(17, 10, false, RoundingMode::TowardZero), Ok(10));
/// assert_eq!(round_to_multiple(20, 10, false, RoundingMode::ToOdd), Ok(20));
/// ```
pub fn round_to_multiple<T>(value: T, step: T, proper: bool, mode: RoundingMode) -> MathResult<T>
where
    T: Number + CheckedAddVal + CheckedSubVal + CheckedRemVal,
{
    let bracket = bracket_multiples(value.clone(), step.clone(), proper)?;
    Ok(resolve(&value, bracket, &step, mode))
}

/// The largest multiple of `step` not greater than `value`.
#[inline]
pub fn floor_to_multiple<T>(value: T, step: T) -> MathResult<T>
where
    T: Number + CheckedAddVal + CheckedSubVal + CheckedRemVal,
{
    round_to_multiple(value, step, false, RoundingMode::ToNegativeInfinity)
}

/// The smallest multiple of `step` not less than `value`.
#[inline]
pub fn ceil_to_multiple<T>(value: T, step: T) -> MathResult<T>
where
    T: Number + CheckedAddVal + CheckedSubVal + CheckedRemVal,
{
    round_to_multiple(value, step, false, RoundingMode::ToPositiveInfinity)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(value: i64, mode: RoundingMode) -> i64 {
        round_to_multiple(value, 10, false, mode).unwrap()
    }

    #[test]
    fn test_bracket_positive_and_negative() {
        let b = bracket_multiples(17, 10, false).unwrap();
        assert_eq!(b.into_parts(), (10, 20));

        let b = bracket_multiples(-17, 10, false).unwrap();
        assert_eq!(b.into_parts(), (-10, -20));
        assert_eq!(*b.lower(), -20);
        assert_eq!(*b.upper(), -10);

        let b = bracket_multiples(3, 10, false).unwrap();
        assert_eq!(b.into_parts(), (0, 10));
    }

    #[test]
    fn test_bracket_exact_multiple() {
        let b = bracket_multiples(30, 10, false).unwrap();
        assert!(b.is_exact());
        assert_eq!(*b.toward_zero(), 30);

        let b = bracket_multiples(30, 10, true).unwrap();
        assert!(!b.is_exact());
        assert_eq!(b.into_parts(), (20, 40));

        let b = bracket_multiples(-30, 10, true).unwrap();
        assert_eq!(b.into_parts(), (-20, -40));

        let b = bracket_multiples(0, 10, true).unwrap();
        assert_eq!(b.into_parts(), (-10, 10));
    }

    #[test]
    fn test_bracket_rejects_non_positive_step() {
        assert_eq!(bracket_multiples(5, 0, false), Err(MathError::NonPositiveStep));
        assert_eq!(bracket_multiples(5, -2, false), Err(MathError::NonPositiveStep));
        assert_eq!(
            bracket_multiples(5.0, f64::NAN, false),
            Err(MathError::NonPositiveStep)
        );
    }

    #[test]
    fn test_bracket_overflow_is_reported() {
        assert_eq!(bracket_multiples(255u8, 10, false), Err(MathError::Overflow));
        assert_eq!(bracket_multiples(250u8, 10, true), Err(MathError::Overflow));
        assert_eq!(bracket_multiples(0u8, 10, true), Err(MathError::Overflow));
        assert!(bracket_multiples(250u8, 10, false).unwrap().is_exact());
    }

    #[test]
    fn test_non_tie_modes() {
        assert_eq!(round(17, RoundingMode::AwayFromZero), 20);
        assert_eq!(round(17, RoundingMode::TowardZero), 10);
        assert_eq!(round(17, RoundingMode::ToNegativeInfinity), 10);
        assert_eq!(round(17, RoundingMode::ToPositiveInfinity), 20);
        assert_eq!(round(17, RoundingMode::ToEven), 20);
        assert_eq!(round(17, RoundingMode::ToOdd), 20);
        assert_eq!(round(12, RoundingMode::ToEven), 10);
        assert_eq!(round(12, RoundingMode::ToOdd), 10);
        assert_eq!(round(12, RoundingMode::AwayFromZero), 20);
    }

    #[test]
    fn test_tie_positive_every_mode() {
        assert_eq!(round(15, RoundingMode::ToEven), 20);
        assert_eq!(round(15, RoundingMode::ToOdd), 10);
        assert_eq!(round(15, RoundingMode::AwayFromZero), 20);
        assert_eq!(round(15, RoundingMode::TowardZero), 10);
        assert_eq!(round(15, RoundingMode::ToNegativeInfinity), 10);
        assert_eq!(round(15, RoundingMode::ToPositiveInfinity), 20);

        assert_eq!(round(25, RoundingMode::ToEven), 20);
        assert_eq!(round(25, RoundingMode::ToOdd), 30);
    }

    #[test]
    fn test_tie_negative_every_mode() {
        assert_eq!(round(-15, RoundingMode::ToEven), -20);
        assert_eq!(round(-15, RoundingMode::ToOdd), -10);
        assert_eq!(round(-15, RoundingMode::AwayFromZero), -20);
        assert_eq!(round(-15, RoundingMode::TowardZero), -10);
        assert_eq!(round(-15, RoundingMode::ToNegativeInfinity), -20);
        assert_eq!(round(-15, RoundingMode::ToPositiveInfinity), -10);
    }

    #[test]
    fn test_exact_multiple_is_unchanged_in_every_mode() {
        for mode in RoundingMode::ALL {
            assert_eq!(round(40, mode), 40);
            assert_eq!(round(-40, mode), -40);
            assert_eq!(round(0, mode), 0);
        }
    }

    #[test]
    fn test_proper_excludes_exact_hit() {
        let r = |mode| round_to_multiple(20, 10, true, mode).unwrap();
        assert_eq!(r(RoundingMode::AwayFromZero), 30);
        assert_eq!(r(RoundingMode::TowardZero), 10);
        assert_eq!(r(RoundingMode::ToNegativeInfinity), 10);
        assert_eq!(r(RoundingMode::ToPositiveInfinity), 30);
        // Both neighbours are odd multiples; the parity tie falls back toward zero.
        assert_eq!(r(RoundingMode::ToEven), 10);

        let r = |mode| round_to_multiple(30, 10, true, mode).unwrap();
        assert_eq!(r(RoundingMode::ToEven), 20);
        assert_eq!(r(RoundingMode::ToOdd), 20);
    }

    #[test]
    fn test_unsigned_rounding() {
        assert_eq!(round_to_multiple(25u32, 10, false, RoundingMode::ToEven), Ok(20));
        assert_eq!(round_to_multiple(35u32, 10, false, RoundingMode::ToEven), Ok(40));
        assert_eq!(round_to_multiple(7u8, 4, false, RoundingMode::TowardZero), Ok(4));
    }

    #[test]
    fn test_float_rounding() {
        let r = |v: f64, mode| round_to_multiple(v, 1.0, false, mode).unwrap();
        assert_eq!(r(2.5, RoundingMode::ToEven), 2.0);
        assert_eq!(r(3.5, RoundingMode::ToEven), 4.0);
        assert_eq!(r(2.5, RoundingMode::ToOdd), 3.0);
        assert_eq!(r(-2.5, RoundingMode::ToEven), -2.0);
        assert_eq!(r(-2.5, RoundingMode::AwayFromZero), -3.0);
        assert_eq!(r(2.4, RoundingMode::ToOdd), 2.0);

        assert_eq!(
            round_to_multiple(0.125, 0.25, false, RoundingMode::ToEven),
            Ok(0.0)
        );
        assert_eq!(
            round_to_multiple(0.375, 0.25, false, RoundingMode::ToEven),
            Ok(0.5)
        );
    }

    #[test]
    fn test_floor_and_ceil() {
        assert_eq!(floor_to_multiple(17, 5), Ok(15));
        assert_eq!(ceil_to_multiple(17, 5), Ok(20));
        assert_eq!(floor_to_multiple(-17, 5), Ok(-20));
        assert_eq!(ceil_to_multiple(-17, 5), Ok(-15));
        assert_eq!(ceil_to_multiple(15, 5), Ok(15));
    }

    #[cfg(feature = "bigint")]
    #[test]
    fn test_bigint_rounding() {
        use num_bigint::BigInt;

        let base: BigInt = BigInt::from(10i32).pow(40u32);
        let value: BigInt = base.clone() + BigInt::from(5i32);
        let step = BigInt::from(10i32);
        let rounded = round_to_multiple(value.clone(), step.clone(), false, RoundingMode::ToEven);
        assert_eq!(rounded, Ok(base.clone()));
        let rounded = round_to_multiple(value, step, false, RoundingMode::ToOdd);
        assert_eq!(rounded, Ok(base + BigInt::from(10i32)));
    }

    #[test]
    fn test_mode_helpers() {
        assert_eq!(RoundingMode::default(), RoundingMode::ToEven);
        assert!(RoundingMode::TowardZero.is_directed());
        assert!(!RoundingMode::ToOdd.is_directed());
        assert_eq!(RoundingMode::ToNegativeInfinity.to_string(), "to-negative-infinity");
    }
}

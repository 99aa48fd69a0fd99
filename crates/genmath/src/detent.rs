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

//! # Detents
//!
//! A detent pulls a value onto a nearby anchor once it comes within a
//! tolerance, like the notch of a rotary knob. Anchors are zero, a single
//! position or the two edges of an interval.
//!
//! Capturing works the same way for every anchor: each edge within the
//! tolerance is a candidate, and if both edges of an interval qualify the
//! choice is made by the rounding resolver of [`crate::rounding`], using the
//! edge closer to zero as the `toward_zero` candidate. A position is an
//! interval of width zero and zero is the position `0`, so all three share one
//! code path.

use crate::rounding::{Bracket, RoundingMode, resolve};
use genmath_core::error::{MathError, MathResult};
use genmath_core::math::interval::ClosedInterval;
use genmath_core::num::capability::Number;
use genmath_core::num::ops::checked_arithmetic::CheckedSubVal;

/// Tolerance and tie-break policy for snapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnapOptions<T> {
    tolerance: T,
    mode: RoundingMode,
}

impl<T> SnapOptions<T>
where
    T: Number + Copy,
{
    /// Creates options with the given capture tolerance and [`RoundingMode::ToEven`].
    ///
    /// # Errors
    ///
    /// [`MathError::NegativeTolerance`] if `tolerance` is negative or NaN.
    pub fn new(tolerance: T) -> MathResult<Self> {
        if !(tolerance >= T::zero()) {
            return Err(MathError::NegativeTolerance);
        }
        Ok(Self {
            tolerance,
            mode: RoundingMode::default(),
        })
    }

    /// Replaces the rounding mode used when both edges of an interval capture.
    #[inline]
    pub fn with_mode(mut self, mode: RoundingMode) -> Self {
        self.mode = mode;
        self
    }

    /// The largest distance at which a detent still captures a value.
    #[inline]
    pub fn tolerance(&self) -> T {
        self.tolerance
    }

    /// The rounding mode that breaks ties between two capturing edges.
    #[inline]
    pub fn mode(&self) -> RoundingMode {
        self.mode
    }
}

/// An anchor values can snap to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Detent<T>
where
    T: Number + Copy,
{
    /// The origin.
    Zero,
    /// A single point.
    Position(T),
    /// Both edges of a closed interval.
    Interval(ClosedInterval<T>),
}

impl<T> Detent<T>
where
    T: Number + CheckedSubVal + Copy,
{
    /// The anchor as a closed interval; points have width zero.
    #[inline]
    pub fn anchor(&self) -> ClosedInterval<T> {
        match *self {
            Detent::Zero => ClosedInterval::point(T::zero()),
            Detent::Position(position) => ClosedInterval::point(position),
            Detent::Interval(interval) => interval,
        }
    }

    /// Returns the snapped value if this detent captures `value`.
    #[inline]
    pub fn capture(&self, value: T, options: &SnapOptions<T>) -> Option<T> {
        capture(value, self.anchor(), options)
    }

    /// Snaps `value` onto this detent, or returns it unchanged if it is out of reach.
    #[inline]
    pub fn snap(&self, value: T, options: &SnapOptions<T>) -> T {
        self.capture(value, options).unwrap_or(value)
    }
}

/// `|a - b|`, or `None` if it is not representable.
#[inline]
fn checked_distance<T>(a: T, b: T) -> Option<T>
where
    T: Number + CheckedSubVal + Copy,
{
    if a >= b {
        a.checked_sub_val(b)
    } else {
        b.checked_sub_val(a)
    }
}

/// Orders the edges of an interval as `(toward_zero, away_from_zero)`.
///
/// Avoids `abs`, which is not representable for the minimum of a signed type.
/// Equal magnitudes keep `low` toward zero.
#[inline]
fn order_by_magnitude<T>(low: T, high: T) -> (T, T)
where
    T: Number + CheckedSubVal + Copy,
{
    if !high.is_positive_val() {
        return (high, low);
    }
    if !low.is_negative_val() {
        return (low, high);
    }
    let high_is_nearer = match (
        checked_distance(high, T::zero()),
        checked_distance(low, T::zero()),
    ) {
        (Some(to_high), Some(to_low)) => to_high < to_low,
        (Some(_), None) => true,
        _ => false,
    };
    if high_is_nearer { (high, low) } else { (low, high) }
}

fn capture<T>(value: T, anchor: ClosedInterval<T>, options: &SnapOptions<T>) -> Option<T>
where
    T: Number + CheckedSubVal + Copy,
{
    let within = |edge: T| {
        checked_distance(value, edge).is_some_and(|distance| distance <= options.tolerance)
    };
    let (low, high) = (anchor.low(), anchor.high());

    match (within(low), within(high)) {
        (false, false) => None,
        (true, false) => Some(low),
        (false, true) => Some(high),
        (true, true) => {
            let (toward_zero, away_from_zero) = order_by_magnitude(low, high);
            let bracket = Bracket::new(toward_zero, away_from_zero);
            Some(resolve(&value, bracket, &T::one(), options.mode))
        }
    }
}

/// Snaps `value` onto the nearer edge of `interval` if it is within the tolerance.
///
/// # Examples
///
/// ```rust
/// # use genmath::detent::{SnapOptions, snap_to_interval};
/// # use genmath::math::interval::ClosedInterval;
/// let options = SnapOptions::new(3).unwrap();
/// let interval = ClosedInterval::new(10, 20);
/// assert_eq!(snap_to_interval(12, interval, &options), 10);
/// assert_eq!(snap_to_interval(15, interval, &options), 15);
/// ```
#[inline]
pub fn snap_to_interval<T>(value: T, interval: ClosedInterval<T>, options: &SnapOptions<T>) -> T
where
    T: Number + CheckedSubVal + Copy,
{
    Detent::Interval(interval).snap(value, options)
}

/// Snaps `value` onto `position` if it is within the tolerance.
#[inline]
pub fn snap_to_position<T>(value: T, position: T, options: &SnapOptions<T>) -> T
where
    T: Number + CheckedSubVal + Copy,
{
    Detent::Position(position).snap(value, options)
}

/// Snaps `value` onto zero if it is within the tolerance.
#[inline]
pub fn snap_to_zero<T>(value: T, options: &SnapOptions<T>) -> T
where
    T: Number + CheckedSubVal + Copy,
{
    Detent::Zero.snap(value, options)
}

/// Snaps `value` onto the capturing detent that moves it the least.
///
/// Detents earlier in the slice win ties. If no detent captures `value` it is
/// returned unchanged.
///
/// # Examples
///
/// ```rust
/// # use genmath::detent::{Detent, SnapOptions, snap_to_nearest};
/// let options = SnapOptions::new(0.1).unwrap();
/// let detents = [Detent::Zero, Detent::Position(0.5), Detent::Position(1.0)];
/// assert_eq!(snap_to_nearest(0.45, &detents, &options), 0.5);
/// assert_eq!(snap_to_nearest(0.25, &detents, &options), 0.25);
/// ```
pub fn snap_to_nearest<T>(value: T, detents: &[Detent<T>], options: &SnapOptions<T>) -> T
where
    T: Number + CheckedSubVal + Copy,
{
    let mut best: Option<(T, T)> = None;
    for detent in detents {
        let Some(snapped) = detent.capture(value, options) else {
            continue;
        };
        let Some(moved) = checked_distance(value, snapped) else {
            continue;
        };
        match best {
            Some((_, best_moved)) if best_moved <= moved => {}
            _ => best = Some((snapped, moved)),
        }
    }
    best.map_or(value, |(snapped, _)| snapped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(tolerance: i32) -> SnapOptions<i32> {
        SnapOptions::new(tolerance).unwrap()
    }

    #[test]
    fn test_options_validation() {
        assert_eq!(SnapOptions::new(-1), Err(MathError::NegativeTolerance));
        assert_eq!(SnapOptions::new(f64::NAN), Err(MathError::NegativeTolerance));

        let o = SnapOptions::new(0.5).unwrap().with_mode(RoundingMode::ToOdd);
        assert_eq!(o.tolerance(), 0.5);
        assert_eq!(o.mode(), RoundingMode::ToOdd);
        assert_eq!(SnapOptions::new(0u8).unwrap().mode(), RoundingMode::ToEven);
    }

    #[test]
    fn test_snap_to_zero() {
        let o = options(2);
        assert_eq!(snap_to_zero(2, &o), 0);
        assert_eq!(snap_to_zero(-1, &o), 0);
        assert_eq!(snap_to_zero(3, &o), 3);
        assert_eq!(snap_to_zero(0, &o), 0);
    }

    #[test]
    fn test_snap_to_position() {
        let o = options(5);
        assert_eq!(snap_to_position(96, 100, &o), 100);
        assert_eq!(snap_to_position(105, 100, &o), 100);
        assert_eq!(snap_to_position(94, 100, &o), 94);
        assert_eq!(snap_to_position(7u8, 3, &SnapOptions::new(4).unwrap()), 3);
    }

    #[test]
    fn test_snap_to_interval_single_edge() {
        let o = options(3);
        let interval = ClosedInterval::new(10, 20);
        assert_eq!(snap_to_interval(8, interval, &o), 10);
        assert_eq!(snap_to_interval(12, interval, &o), 10);
        assert_eq!(snap_to_interval(19, interval, &o), 20);
        assert_eq!(snap_to_interval(24, interval, &o), 24);
        assert_eq!(snap_to_interval(15, interval, &o), 15);
    }

    #[test]
    fn test_snap_to_interval_both_edges_nearest_wins() {
        let o = options(5);
        let interval = ClosedInterval::new(10, 14);
        assert_eq!(snap_to_interval(11, interval, &o), 10);
        assert_eq!(snap_to_interval(13, interval, &o), 14);
    }

    #[test]
    fn test_snap_to_interval_tie_uses_mode() {
        let tie = |mode| {
            let int_options = options(5).with_mode(mode);
            let float_options = SnapOptions::new(1.0).unwrap().with_mode(mode);
            (
                snap_to_interval(11, ClosedInterval::new(10, 12), &int_options),
                snap_to_interval(1.5, ClosedInterval::new(1.0, 2.0), &float_options),
            )
        };
        // Both integer edges are even, so the parity tie falls back toward zero.
        assert_eq!(tie(RoundingMode::ToEven), (10, 2.0));
        assert_eq!(tie(RoundingMode::ToOdd), (10, 1.0));
        assert_eq!(tie(RoundingMode::TowardZero), (10, 1.0));
        assert_eq!(tie(RoundingMode::AwayFromZero), (12, 2.0));

        // Directed modes ignore the distance once both edges capture.
        let o = options(5).with_mode(RoundingMode::ToPositiveInfinity);
        assert_eq!(snap_to_interval(11, ClosedInterval::new(10, 13), &o), 13);
    }

    #[test]
    fn test_snap_negative_interval_tie() {
        let interval = ClosedInterval::new(-12, -10);
        let o = options(2).with_mode(RoundingMode::AwayFromZero);
        assert_eq!(snap_to_interval(-11, interval, &o), -12);
        let o = o.with_mode(RoundingMode::ToNegativeInfinity);
        assert_eq!(snap_to_interval(-11, interval, &o), -12);
        let o = o.with_mode(RoundingMode::TowardZero);
        assert_eq!(snap_to_interval(-11, interval, &o), -10);
    }

    #[test]
    fn test_unrepresentable_distance_does_not_capture() {
        let o = SnapOptions::new(i8::MAX).unwrap();
        assert_eq!(snap_to_position(-100i8, 100, &o), -100);
        assert_eq!(snap_to_position(-20i8, 100, &o), 100);
    }

    #[test]
    fn test_snap_interval_at_type_minimum() {
        let interval = ClosedInterval::new(i32::MIN, i32::MIN + 2);
        let o = options(4);
        assert_eq!(snap_to_interval(i32::MIN + 1, interval, &o), i32::MIN + 2);
        let o = o.with_mode(RoundingMode::AwayFromZero);
        assert_eq!(snap_to_interval(i32::MIN + 1, interval, &o), i32::MIN);

        let interval = ClosedInterval::new(i8::MIN, 1);
        let o = SnapOptions::new(i8::MAX).unwrap().with_mode(RoundingMode::TowardZero);
        assert_eq!(snap_to_interval(-1i8, interval, &o), 1);
    }

    #[test]
    fn test_order_by_magnitude() {
        assert_eq!(order_by_magnitude(-5, -2), (-2, -5));
        assert_eq!(order_by_magnitude(2, 5), (2, 5));
        assert_eq!(order_by_magnitude(-3, 7), (-3, 7));
        assert_eq!(order_by_magnitude(-7, 3), (3, -7));
        assert_eq!(order_by_magnitude(-4, 4), (-4, 4));
        assert_eq!(order_by_magnitude(i8::MIN, 100), (100, i8::MIN));
        assert_eq!(order_by_magnitude(0, 0), (0, 0));
    }

    #[test]
    fn test_snap_to_nearest() {
        let o = options(4);
        let detents = [
            Detent::Zero,
            Detent::Position(10),
            Detent::Interval(ClosedInterval::new(20, 30)),
        ];
        assert_eq!(snap_to_nearest(3, &detents, &o), 0);
        assert_eq!(snap_to_nearest(7, &detents, &o), 10);
        assert_eq!(snap_to_nearest(17, &detents, &o), 20);
        assert_eq!(snap_to_nearest(33, &detents, &o), 30);
        assert_eq!(snap_to_nearest(25, &detents, &o), 25);
        assert_eq!(snap_to_nearest(5, &[], &o), 5);
    }

    #[test]
    fn test_snap_to_nearest_first_wins_on_ties() {
        let o = options(5);
        let detents = [Detent::Position(0), Detent::Position(10)];
        assert_eq!(snap_to_nearest(5, &detents, &o), 0);
        let detents = [Detent::Position(10), Detent::Position(0)];
        assert_eq!(snap_to_nearest(5, &detents, &o), 10);
    }

    #[test]
    fn test_float_detents() {
        let o = SnapOptions::new(0.05).unwrap();
        assert_eq!(snap_to_zero(0.03, &o), 0.0);
        assert_eq!(snap_to_zero(-0.04, &o), 0.0);
        assert_eq!(snap_to_position(0.98, 1.0, &o), 1.0);
        assert_eq!(snap_to_position(0.9, 1.0, &o), 0.9);
    }

    #[test]
    fn test_detent_anchor() {
        assert_eq!(Detent::<i32>::Zero.anchor(), ClosedInterval::point(0));
        assert_eq!(Detent::Position(4).anchor(), ClosedInterval::point(4));
        let interval = ClosedInterval::new(1, 2);
        assert_eq!(Detent::Interval(interval).anchor(), interval);
    }
}

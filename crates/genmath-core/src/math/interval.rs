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

use crate::error::{MathError, MathResult};
use crate::num::capability::{Number, Ordered, two};
use crate::num::ops::checked_arithmetic::CheckedSubVal;
use smallvec::SmallVec;
use std::{
    iter::FusedIterator,
    ops::{BitAnd, BitOr, Bound, RangeBounds, RangeInclusive},
};

/// A closed interval `[low, high]` over an ordered numeric type.
///
/// An interval with `low < high` is *proper*; one with `low == high` is
/// *degenerate* (a single point). Set operations that cannot produce a single
/// interval report the empty result as `None`, and operations producing several
/// pieces yield them through [`IntervalPieces`].
///
/// Overlap is strict: intervals that only touch at an end point are disjoint.
///
/// # Invariants
///
/// `low <= high` always holds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ClosedInterval<T>
where
    T: Ordered + Copy,
{
    low: T,
    high: T,
}

/// The sub-intervals produced by a difference operation.
///
/// Holds at most two intervals, ordered by their lower bound. Like any
/// consuming iterator it cannot be restarted; collect it if the pieces are
/// needed more than once.
///
/// # Examples
///
/// ```rust
/// # use genmath_core::math::interval::ClosedInterval;
/// let a = ClosedInterval::new(0, 10);
/// let hole = ClosedInterval::new(4, 6);
/// let pieces: Vec<_> = a.left_difference(hole).collect();
/// assert_eq!(pieces, vec![ClosedInterval::new(0, 4), ClosedInterval::new(6, 10)]);
/// ```
pub struct IntervalPieces<T>
where
    T: Ordered + Copy,
{
    inner: smallvec::IntoIter<ClosedInterval<T>, 2>,
}

impl<T> IntervalPieces<T>
where
    T: Ordered + Copy,
{
    #[inline]
    fn from_pieces(pieces: SmallVec<ClosedInterval<T>, 2>) -> Self {
        Self {
            inner: pieces.into_iter(),
        }
    }
}

impl<T> Iterator for IntervalPieces<T>
where
    T: Ordered + Copy,
{
    type Item = ClosedInterval<T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IntervalPieces<T> where T: Ordered + Copy {}

impl<T> FusedIterator for IntervalPieces<T> where T: Ordered + Copy {}

impl<T> ClosedInterval<T>
where
    T: Ordered + Copy,
{
    /// Creates a new `ClosedInterval`.
    ///
    /// # Panics
    ///
    /// Panics if `low > high` or the bounds are unordered (`NaN`).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use genmath_core::math::interval::ClosedInterval;
    /// let iv = ClosedInterval::new(0, 10);
    /// assert_eq!(iv.low(), 0);
    /// assert_eq!(iv.high(), 10);
    /// ```
    #[inline]
    pub fn new(low: T, high: T) -> Self {
        assert!(
            low <= high,
            "Invalid interval: low must be less than or equal to high"
        );
        Self { low, high }
    }

    /// Creates a new `ClosedInterval` if `low <= high`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use genmath_core::math::interval::ClosedInterval;
    /// # use genmath_core::error::MathError;
    /// assert!(ClosedInterval::try_new(0.5, 1.5).is_ok());
    /// assert_eq!(ClosedInterval::try_new(2, 1), Err(MathError::InvalidInterval));
    /// ```
    #[inline]
    pub fn try_new(low: T, high: T) -> MathResult<Self> {
        if low <= high {
            Ok(Self { low, high })
        } else {
            Err(MathError::InvalidInterval)
        }
    }

    /// Creates a new `ClosedInterval` without checking the bounds in release builds.
    ///
    /// The caller must ensure `low <= high`.
    #[inline]
    pub fn new_unchecked(low: T, high: T) -> Self {
        debug_assert!(
            low <= high,
            "Invalid interval: low must be less than or equal to high"
        );
        Self { low, high }
    }

    /// Creates the degenerate interval `[value, value]`.
    #[inline]
    pub fn point(value: T) -> Self {
        Self {
            low: value,
            high: value,
        }
    }

    /// Returns the lower bound.
    #[inline]
    pub const fn low(&self) -> T {
        self.low
    }

    /// Returns the upper bound.
    #[inline]
    pub const fn high(&self) -> T {
        self.high
    }

    /// Returns `true` if `low < high`.
    #[inline]
    pub fn is_proper(&self) -> bool {
        self.low < self.high
    }

    /// Returns `true` if the interval is a single point.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.low == self.high
    }

    /// Returns `true` if the intervals share more than an end point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use genmath_core::math::interval::ClosedInterval;
    /// let a = ClosedInterval::new(0, 10);
    /// assert!(a.overlaps(ClosedInterval::new(5, 15)));
    /// assert!(!a.overlaps(ClosedInterval::new(10, 20)));
    /// ```
    #[inline]
    pub fn overlaps(&self, other: Self) -> bool {
        self.low < other.high && other.low < self.high
    }

    /// Returns `true` if the intervals meet at an end point.
    #[inline]
    pub fn touches(&self, other: Self) -> bool {
        self.high == other.low || other.high == self.low
    }

    /// Returns `true` if `low <= value <= high`.
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.low <= value && value <= self.high
    }

    /// Returns `true` if `other` lies entirely within `self`.
    #[inline]
    pub fn contains_interval(&self, other: Self) -> bool {
        self.low <= other.low && other.high <= self.high
    }

    /// Intersection of two intervals, or `None` if they do not overlap.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use genmath_core::math::interval::ClosedInterval;
    /// let a = ClosedInterval::new(0, 10);
    /// assert_eq!(a.intersect(ClosedInterval::new(5, 15)), Some(ClosedInterval::new(5, 10)));
    /// assert_eq!(a.intersect(ClosedInterval::new(10, 15)), None);
    /// ```
    #[inline]
    pub fn intersect(&self, other: Self) -> Option<Self> {
        if self.overlaps(other) {
            Some(Self::new_unchecked(
                max_of(self.low, other.low),
                min_of(self.high, other.high),
            ))
        } else {
            None
        }
    }

    /// Union of two intervals, or `None` if they do not overlap.
    ///
    /// A disjoint union is not a single interval; use [`ClosedInterval::span`]
    /// or [`crate::math::set::union_all`] for the enclosing span instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use genmath_core::math::interval::ClosedInterval;
    /// let a = ClosedInterval::new(0, 10);
    /// assert_eq!(a.union(ClosedInterval::new(5, 15)), Some(ClosedInterval::new(0, 15)));
    /// assert_eq!(a.union(ClosedInterval::new(12, 15)), None);
    /// ```
    #[inline]
    pub fn union(&self, other: Self) -> Option<Self> {
        if self.overlaps(other) {
            Some(self.span(other))
        } else {
            None
        }
    }

    /// The smallest interval enclosing both operands, regardless of overlap.
    #[inline]
    pub fn span(&self, other: Self) -> Self {
        Self::new_unchecked(min_of(self.low, other.low), max_of(self.high, other.high))
    }

    /// The parts of `self` not covered by `other` (`self \ other`).
    ///
    /// Yields zero pieces if `other` covers `self`, one if `other` clips a side
    /// or is disjoint, and two if `other` lies strictly inside `self`.
    /// Zero-width pieces are never yielded.
    pub fn left_difference(&self, other: Self) -> IntervalPieces<T> {
        let mut pieces = SmallVec::new();
        if !self.overlaps(other) {
            if self.is_proper() {
                pieces.push(*self);
            }
            return IntervalPieces::from_pieces(pieces);
        }

        if self.low < other.low {
            pieces.push(Self::new_unchecked(self.low, other.low));
        }
        if other.high < self.high {
            pieces.push(Self::new_unchecked(other.high, self.high));
        }
        IntervalPieces::from_pieces(pieces)
    }

    /// The parts of `other` not covered by `self` (`other \ self`).
    #[inline]
    pub fn right_difference(&self, other: Self) -> IntervalPieces<T> {
        other.left_difference(*self)
    }

    /// The parts covered by exactly one of the operands, ordered by lower bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use genmath_core::math::interval::ClosedInterval;
    /// let a = ClosedInterval::new(0, 10);
    /// let b = ClosedInterval::new(5, 15);
    /// let pieces: Vec<_> = a.symmetric_difference(b).collect();
    /// assert_eq!(pieces, vec![ClosedInterval::new(0, 5), ClosedInterval::new(10, 15)]);
    /// assert_eq!(a.symmetric_difference(a).count(), 0);
    /// ```
    pub fn symmetric_difference(&self, other: Self) -> IntervalPieces<T> {
        let mut pieces = SmallVec::new();
        if !self.overlaps(other) {
            let (first, second) = if other.low < self.low {
                (other, *self)
            } else {
                (*self, other)
            };
            for piece in [first, second] {
                if piece.is_proper() {
                    pieces.push(piece);
                }
            }
            return IntervalPieces::from_pieces(pieces);
        }

        let left = Self::new_unchecked(min_of(self.low, other.low), max_of(self.low, other.low));
        let right = Self::new_unchecked(
            min_of(self.high, other.high),
            max_of(self.high, other.high),
        );
        for piece in [left, right] {
            if piece.is_proper() {
                pieces.push(piece);
            }
        }
        IntervalPieces::from_pieces(pieces)
    }
}

impl<T> ClosedInterval<T>
where
    T: Number + CheckedSubVal + Copy,
{
    /// Returns `high - low`, or `None` if the width is not representable in `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use genmath_core::math::interval::ClosedInterval;
    /// assert_eq!(ClosedInterval::new(-3, 4).width(), Some(7));
    /// assert_eq!(ClosedInterval::new(i8::MIN, i8::MAX).width(), None);
    /// ```
    #[inline]
    pub fn width(&self) -> Option<T> {
        self.high.checked_sub_val(self.low)
    }

    /// Returns the midpoint without overflowing.
    ///
    /// For integers with an odd width the result is one of the two central
    /// values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use genmath_core::math::interval::ClosedInterval;
    /// assert_eq!(ClosedInterval::new(250u8, 254).midpoint(), 252);
    /// assert_eq!(ClosedInterval::new(-1.0, 2.0).midpoint(), 0.5);
    /// assert_eq!(ClosedInterval::new(-127i8, 127).midpoint(), 0);
    /// ```
    #[inline]
    pub fn midpoint(&self) -> T {
        let two = two::<T>();
        match self.width() {
            Some(width) => self.low + width / two,
            // Only reachable when the bounds have opposite signs, so the halves
            // and the remainder correction all fit.
            None => self.low / two + self.high / two + (self.low % two + self.high % two) / two,
        }
    }
}

#[inline(always)]
fn min_of<T: Ordered>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

#[inline(always)]
fn max_of<T: Ordered>(a: T, b: T) -> T {
    if a < b { b } else { a }
}

impl<T> BitAnd for ClosedInterval<T>
where
    T: Ordered + Copy,
{
    type Output = Option<Self>;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersect(rhs)
    }
}

impl<T> BitOr for ClosedInterval<T>
where
    T: Ordered + Copy,
{
    type Output = Option<Self>;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<T> Default for ClosedInterval<T>
where
    T: Ordered + Copy + num_traits::Zero,
{
    #[inline]
    fn default() -> Self {
        Self::point(T::zero())
    }
}

impl<T> std::fmt::Display for ClosedInterval<T>
where
    T: Ordered + Copy + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

impl<T> RangeBounds<T> for ClosedInterval<T>
where
    T: Ordered + Copy,
{
    fn start_bound(&self) -> Bound<&T> {
        Bound::Included(&self.low)
    }

    fn end_bound(&self) -> Bound<&T> {
        Bound::Included(&self.high)
    }
}

impl<T> From<RangeInclusive<T>> for ClosedInterval<T>
where
    T: Ordered + Copy,
{
    /// # Panics
    ///
    /// Panics if the range is empty (`start > end`).
    #[inline]
    fn from(range: RangeInclusive<T>) -> Self {
        let (low, high) = range.into_inner();
        Self::new(low, high)
    }
}

impl<T> From<ClosedInterval<T>> for RangeInclusive<T>
where
    T: Ordered + Copy,
{
    #[inline]
    fn from(iv: ClosedInterval<T>) -> Self {
        iv.low..=iv.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(low: i64, high: i64) -> ClosedInterval<i64> {
        ClosedInterval::new(low, high)
    }

    #[test]
    fn test_construction() {
        let a = iv(10, 20);
        assert_eq!(a.low(), 10);
        assert_eq!(a.high(), 20);
        assert!(a.is_proper());
        assert!(!a.is_degenerate());

        let p = ClosedInterval::point(7);
        assert!(p.is_degenerate());
        assert!(!p.is_proper());
    }

    #[test]
    fn test_try_new() {
        assert!(ClosedInterval::try_new(5, 10).is_ok());
        assert!(ClosedInterval::try_new(5, 5).is_ok());
        assert_eq!(
            ClosedInterval::try_new(10, 5),
            Err(MathError::InvalidInterval)
        );
        assert_eq!(
            ClosedInterval::try_new(f64::NAN, 1.0),
            Err(MathError::InvalidInterval)
        );
    }

    #[test]
    #[should_panic(expected = "Invalid interval")]
    fn test_new_panic() {
        ClosedInterval::new(10, 5);
    }

    #[test]
    fn test_overlaps_is_strict() {
        let a = iv(0, 10);
        assert!(a.overlaps(iv(-5, 5)));
        assert!(a.overlaps(iv(2, 8)));
        assert!(a.overlaps(a));
        assert!(!a.overlaps(iv(-5, 0)));
        assert!(!a.overlaps(iv(10, 15)));
        assert!(!a.overlaps(iv(11, 15)));
        assert!(a.touches(iv(10, 15)));
        assert!(!a.touches(iv(9, 15)));
    }

    #[test]
    fn test_contains() {
        let a = iv(0, 10);
        assert!(a.contains(0));
        assert!(a.contains(10));
        assert!(!a.contains(11));
        assert!(a.contains_interval(iv(0, 10)));
        assert!(a.contains_interval(iv(3, 4)));
        assert!(!a.contains_interval(iv(-1, 4)));
    }

    #[test]
    fn test_intersect() {
        let a = iv(0, 10);
        assert_eq!(a.intersect(iv(5, 15)), Some(iv(5, 10)));
        assert_eq!(a.intersect(iv(2, 8)), Some(iv(2, 8)));
        assert_eq!(a.intersect(iv(10, 20)), None);
        assert_eq!(a.intersect(iv(12, 20)), None);
        assert_eq!(a & iv(-3, 3), Some(iv(0, 3)));
    }

    #[test]
    fn test_intersect_commutes() {
        let cases = [
            (iv(0, 10), iv(5, 15)),
            (iv(0, 10), iv(10, 20)),
            (iv(-4, 4), iv(-1, 1)),
            (iv(3, 3), iv(0, 9)),
        ];
        for (a, b) in cases {
            assert_eq!(a.intersect(b), b.intersect(a));
        }
    }

    #[test]
    fn test_union_and_span() {
        let a = iv(0, 10);
        assert_eq!(a.union(iv(5, 15)), Some(iv(0, 15)));
        assert_eq!(a.union(iv(2, 8)), Some(a));
        assert_eq!(a.union(iv(10, 20)), None);
        assert_eq!(a | iv(12, 20), None);
        assert_eq!(a.span(iv(12, 20)), iv(0, 20));
    }

    #[test]
    fn test_left_difference() {
        let base = iv(0, 10);

        let diff: Vec<_> = base.left_difference(iv(12, 15)).collect();
        assert_eq!(diff, vec![base]);

        assert_eq!(base.left_difference(iv(-5, 15)).count(), 0);
        assert_eq!(base.left_difference(base).count(), 0);

        let diff: Vec<_> = base.left_difference(iv(8, 15)).collect();
        assert_eq!(diff, vec![iv(0, 8)]);

        let diff: Vec<_> = base.left_difference(iv(-5, 2)).collect();
        assert_eq!(diff, vec![iv(2, 10)]);

        let diff: Vec<_> = base.left_difference(iv(4, 6)).collect();
        assert_eq!(diff, vec![iv(0, 4), iv(6, 10)]);
    }

    #[test]
    fn test_right_difference() {
        let a = iv(4, 6);
        let diff: Vec<_> = a.right_difference(iv(0, 10)).collect();
        assert_eq!(diff, vec![iv(0, 4), iv(6, 10)]);
        assert_eq!(iv(0, 10).right_difference(a).count(), 0);
    }

    #[test]
    fn test_symmetric_difference() {
        let a = iv(0, 10);

        let diff: Vec<_> = a.symmetric_difference(iv(20, 30)).collect();
        assert_eq!(diff, vec![a, iv(20, 30)]);

        let diff: Vec<_> = iv(20, 30).symmetric_difference(a).collect();
        assert_eq!(diff, vec![a, iv(20, 30)]);

        let diff: Vec<_> = a.symmetric_difference(iv(0, 4)).collect();
        assert_eq!(diff, vec![iv(4, 10)]);

        let diff: Vec<_> = a.symmetric_difference(iv(3, 6)).collect();
        assert_eq!(diff, vec![iv(0, 3), iv(6, 10)]);

        assert_eq!(a.symmetric_difference(a).count(), 0);
        let p = ClosedInterval::point(3);
        assert_eq!(p.symmetric_difference(p).count(), 0);
    }

    #[test]
    fn test_pieces_iterator_is_fused_and_exact() {
        let mut pieces = iv(0, 10).left_difference(iv(4, 6));
        assert_eq!(pieces.len(), 2);
        assert_eq!(pieces.next(), Some(iv(0, 4)));
        assert_eq!(pieces.len(), 1);
        assert_eq!(pieces.next(), Some(iv(6, 10)));
        assert_eq!(pieces.next(), None);
        assert_eq!(pieces.next(), None);
    }

    #[test]
    fn test_width_and_midpoint() {
        assert_eq!(iv(-10, -4).width(), Some(6));
        assert_eq!(iv(-10, -4).midpoint(), -7);
        assert_eq!(iv(0, 3).midpoint(), 1);
        let f = ClosedInterval::new(0.25, 1.25);
        assert_eq!(f.width(), Some(1.0));
        assert_eq!(f.midpoint(), 0.75);
    }

    #[test]
    fn test_width_and_midpoint_over_full_range() {
        let full = ClosedInterval::new(i8::MIN, i8::MAX);
        assert_eq!(full.width(), None);
        assert_eq!(full.midpoint(), -1);
        assert_eq!(ClosedInterval::new(-127i8, 127).midpoint(), 0);
        assert_eq!(ClosedInterval::new(i64::MIN, i64::MAX - 1).midpoint(), -1);
        assert_eq!(ClosedInterval::new(0u8, u8::MAX).width(), Some(u8::MAX));
        assert_eq!(ClosedInterval::new(0u8, u8::MAX).midpoint(), 127);

        let wide = ClosedInterval::new(-f64::MAX, f64::MAX);
        assert_eq!(wide.width(), None);
        assert_eq!(wide.midpoint(), 0.0);
    }

    #[test]
    fn test_float_intervals() {
        let a = ClosedInterval::new(0.0, 1.0);
        let b = ClosedInterval::new(0.5, 2.0);
        assert_eq!(a.intersect(b), Some(ClosedInterval::new(0.5, 1.0)));
        assert_eq!(a.union(b), Some(ClosedInterval::new(0.0, 2.0)));
    }

    #[test]
    fn test_traits_display_default_ranges() {
        assert_eq!(format!("{}", iv(10, 20)), "[10, 20]");
        let d: ClosedInterval<i32> = Default::default();
        assert_eq!(d, ClosedInterval::point(0));

        let from_range = ClosedInterval::from(3..=9);
        assert_eq!(from_range, ClosedInterval::new(3, 9));
        let back: RangeInclusive<i32> = from_range.into();
        assert_eq!(back, 3..=9);

        match from_range.end_bound() {
            Bound::Included(&x) => assert_eq!(x, 9),
            _ => panic!("Wrong end bound"),
        }
        assert!(RangeBounds::contains(&from_range, &9));
    }
}

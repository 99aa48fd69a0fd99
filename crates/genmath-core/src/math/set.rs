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

//! Helpers over collections of closed intervals.

use crate::math::interval::ClosedInterval;
use crate::num::capability::Ordered;
use std::cmp::Ordering;

/// The smallest interval enclosing every interval in `intervals`.
///
/// Unlike [`ClosedInterval::union`], overlap is not required. Returns `None`
/// for an empty input.
///
/// # Examples
///
/// ```rust
/// # use genmath_core::math::{interval::ClosedInterval, set::union_all};
/// let parts = [ClosedInterval::new(5, 6), ClosedInterval::new(-2, 0), ClosedInterval::new(9, 12)];
/// assert_eq!(union_all(parts), Some(ClosedInterval::new(-2, 12)));
/// ```
pub fn union_all<T, I>(intervals: I) -> Option<ClosedInterval<T>>
where
    T: Ordered + Copy,
    I: IntoIterator<Item = ClosedInterval<T>>,
{
    intervals.into_iter().reduce(|acc, iv| acc.span(iv))
}

/// Checks whether the given intervals are pairwise non-overlapping and sorted
/// by their lower bound. Touching intervals count as disjoint.
#[inline(always)]
pub fn are_disjoint_and_sorted<T>(intervals: &[ClosedInterval<T>]) -> bool
where
    T: Ordered + Copy,
{
    intervals.windows(2).all(|w| w[0].high() <= w[1].low())
}

/// Merges overlapping intervals into a sorted list of disjoint intervals.
///
/// This is the multi-interval union: the result covers exactly the points
/// covered by the input. Intervals that only touch stay separate, matching the
/// strict overlap rule of [`ClosedInterval::overlaps`].
///
/// # Examples
///
/// ```rust
/// # use genmath_core::math::{interval::ClosedInterval, set::normalize};
/// let merged = normalize(vec![
///     ClosedInterval::new(8, 12),
///     ClosedInterval::new(0, 5),
///     ClosedInterval::new(3, 6),
/// ]);
/// assert_eq!(merged, vec![ClosedInterval::new(0, 6), ClosedInterval::new(8, 12)]);
/// ```
pub fn normalize<T>(mut intervals: Vec<ClosedInterval<T>>) -> Vec<ClosedInterval<T>>
where
    T: Ordered + Copy,
{
    intervals.sort_by(|a, b| {
        a.low()
            .partial_cmp(&b.low())
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.high().partial_cmp(&b.high()).unwrap_or(Ordering::Equal))
    });

    let mut merged: Vec<ClosedInterval<T>> = Vec::with_capacity(intervals.len());
    for iv in intervals {
        match merged.last_mut() {
            Some(last) if absorbs(*last, iv) => *last = last.span(iv),
            _ => merged.push(iv),
        }
    }

    debug_assert!(are_disjoint_and_sorted(&merged));
    merged
}

/// Whether `next` merges into `last` during [`normalize`].
///
/// Besides strict overlap, a point lying on an end of the other interval (or
/// two equal points) is absorbed instead of kept as a separate piece.
#[inline]
fn absorbs<T>(last: ClosedInterval<T>, next: ClosedInterval<T>) -> bool
where
    T: Ordered + Copy,
{
    last.overlaps(next) || last.contains_interval(next) || next.contains_interval(last)
}

/// Binary search for the first interval whose lower bound is `>= key`.
///
/// # Panics
///
/// In debug builds, panics if `intervals` is not disjoint and sorted.
#[inline(always)]
pub fn lower_bound_low<T>(intervals: &[ClosedInterval<T>], key: T) -> usize
where
    T: Ordered + Copy,
{
    debug_assert!(
        are_disjoint_and_sorted(intervals),
        "called `lower_bound_low` with intervals that are not disjoint and sorted"
    );

    let mut lo: usize = 0;
    let mut hi: usize = intervals.len();

    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);
        if intervals[mid].low() < key {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Membership test against a disjoint, sorted interval list in `O(log n)`.
pub fn contains_in_sorted<T>(intervals: &[ClosedInterval<T>], value: T) -> bool
where
    T: Ordered + Copy,
{
    let idx = lower_bound_low(intervals, value);
    if intervals.get(idx).is_some_and(|iv| iv.low() == value) {
        return true;
    }
    idx > 0 && intervals[idx - 1].contains(value)
}

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

//! # Power Cache
//!
//! Caller-owned memoization of [`integer_pow`] results keyed by
//! `(radix, exponent)`. Useful when the same powers are requested repeatedly,
//! for example powers of ten while rescaling many values.
//!
//! The cache is a plain value: share it by reference, keep one per thread, or
//! wrap it in a lock, as the caller prefers.

use crate::roots::integer_pow;
use genmath_core::error::MathResult;
use genmath_core::num::capability::IntegerNumber;
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// A memo table of integer powers.
#[derive(Debug, Clone)]
pub struct PowerCache<T>
where
    T: IntegerNumber + Hash + Eq,
{
    powers: FxHashMap<(T, T), T>,
    hits: u64,
    misses: u64,
}

impl<T> Default for PowerCache<T>
where
    T: IntegerNumber + Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PowerCache<T>
where
    T: IntegerNumber + Hash + Eq,
{
    /// Creates an empty cache.
    #[inline]
    pub fn new() -> Self {
        Self {
            powers: FxHashMap::default(),
            hits: 0,
            misses: 0,
        }
    }

    /// Creates an empty cache with room for `capacity` powers.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            powers: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            hits: 0,
            misses: 0,
        }
    }

    /// Returns `radix^exponent`, computing and storing it on first use.
    ///
    /// Failed computations are not stored.
    ///
    /// # Errors
    ///
    /// See [`integer_pow`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use genmath::cache::PowerCache;
    /// let mut cache = PowerCache::new();
    /// assert_eq!(cache.pow(10u64, 6), Ok(1_000_000));
    /// assert_eq!(cache.pow(10u64, 6), Ok(1_000_000));
    /// assert_eq!((cache.hits(), cache.misses()), (1, 1));
    /// ```
    pub fn pow(&mut self, radix: T, exponent: T) -> MathResult<T> {
        let key = (radix, exponent);
        if let Some(power) = self.powers.get(&key) {
            self.hits += 1;
            tracing::trace!(radix = ?key.0, exponent = ?key.1, "power cache hit");
            return Ok(power.clone());
        }

        self.misses += 1;
        tracing::trace!(radix = ?key.0, exponent = ?key.1, "power cache miss");
        let power = integer_pow(key.0.clone(), key.1.clone())?;
        self.powers.insert(key, power.clone());
        Ok(power)
    }

    /// The number of stored powers.
    #[inline]
    pub fn len(&self) -> usize {
        self.powers.len()
    }

    /// Returns `true` if no power is stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.powers.is_empty()
    }

    /// Drops every stored power. The hit and miss counters are kept.
    #[inline]
    pub fn clear(&mut self) {
        self.powers.clear();
    }

    /// The number of lookups answered from the cache.
    #[inline]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// The number of lookups that had to compute the power.
    #[inline]
    pub fn misses(&self) -> u64 {
        self.misses
    }
}

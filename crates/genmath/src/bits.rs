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

//! # Bit Masks
//!
//! Runs of one bits over any `BinaryInteger`.
//!
//! Masks are assembled from shifts strictly smaller than the bit width of the
//! type, since shifting a primitive by its full width is an overflow. A mask
//! wider than the type is rejected with [`MathError::MaskTooWide`]; left
//! justification needs a fixed width and fails with
//! [`MathError::UnboundedWidth`] for arbitrary-precision integers.

use genmath_core::error::{MathError, MathResult};
use genmath_core::num::capability::BinaryInteger;

#[inline]
fn ensure_fits<T>(bits: u32) -> MathResult<()>
where
    T: BinaryInteger,
{
    match T::BIT_WIDTH {
        Some(width) if bits > width => Err(MathError::MaskTooWide { count: bits, width }),
        _ => Ok(()),
    }
}

/// `count` one bits in the lowest positions. Requires `count <= BIT_WIDTH`.
#[inline]
fn ones<T>(count: u32) -> T
where
    T: BinaryInteger,
{
    match count {
        0 => T::zero(),
        1 => T::one(),
        _ => {
            // The top bit is or-ed in separately; `(1 << (count - 1)) - 1`
            // overflows for signed types when `count` is the full width.
            let lower = ((T::one() << (count - 2)) - T::one()) << 1u32 | T::one();
            lower | (T::one() << (count - 1))
        }
    }
}

/// Returns a value whose `count` least significant bits are set.
///
/// # Errors
///
/// [`MathError::MaskTooWide`] if `count` exceeds the bit width of `T`.
///
/// # Examples
///
/// ```rust
/// # use genmath::bits::mask_right;
/// assert_eq!(mask_right::<u8>(4), Ok(0b1111));
/// assert_eq!(mask_right::<i8>(8), Ok(-1));
/// assert!(mask_right::<u8>(9).is_err());
/// ```
pub fn mask_right<T>(count: u32) -> MathResult<T>
where
    T: BinaryInteger,
{
    ensure_fits::<T>(count)?;
    Ok(ones(count))
}

/// Returns `count` set bits preceded by `trailing_zeros` clear bits.
///
/// # Errors
///
/// [`MathError::MaskTooWide`] if `count + trailing_zeros` exceeds the bit width of `T`.
///
/// # Examples
///
/// ```rust
/// # use genmath::bits::mask_right_shifted;
/// assert_eq!(mask_right_shifted::<u16>(3, 4), Ok(0b0111_0000));
/// ```
pub fn mask_right_shifted<T>(count: u32, trailing_zeros: u32) -> MathResult<T>
where
    T: BinaryInteger,
{
    ensure_fits::<T>(count.saturating_add(trailing_zeros))?;
    if count == 0 {
        return Ok(T::zero());
    }
    Ok(ones::<T>(count) << trailing_zeros)
}

/// Returns a value whose `count` most significant bits are set.
///
/// # Errors
///
/// - [`MathError::UnboundedWidth`] if `T` has no fixed bit width.
/// - [`MathError::MaskTooWide`] if `count` exceeds the bit width of `T`.
///
/// # Examples
///
/// ```rust
/// # use genmath::bits::mask_left;
/// assert_eq!(mask_left::<u8>(4), Ok(0b1111_0000));
/// assert_eq!(mask_left::<u32>(0), Ok(0));
/// ```
pub fn mask_left<T>(count: u32) -> MathResult<T>
where
    T: BinaryInteger,
{
    let width = T::BIT_WIDTH.ok_or(MathError::UnboundedWidth)?;
    ensure_fits::<T>(count)?;
    if count == 0 {
        return Ok(T::zero());
    }
    Ok(ones::<T>(count) << (width - count))
}

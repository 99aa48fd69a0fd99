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

//! # Numeric Capabilities
//!
//! Compile-time capability groups that generic algorithms declare as bounds.
//! An algorithm names the smallest intersection it needs and instantiates
//! statically for every type that satisfies it; there is no runtime dispatch.
//!
//! | Capability          | Provides                                                   |
//! |---------------------|------------------------------------------------------------|
//! | `Ordered`           | comparison (`<`, `==`, ...)                                |
//! | `HasIdentities`     | `zero()` / `one()`                                          |
//! | `Arithmetic`        | `+ - * / %` and identities (`num_traits::Num`)              |
//! | `SignQueries`       | sign predicates and absolute value                         |
//! | `Number`            | the intersection of the four groups above                  |
//! | `CheckedArithmetic` | `checked_{add,sub,mul,div,rem}_val` returning `Option`     |
//! | `BinaryInteger`     | shifts, bit operations, parity and width queries           |
//! | `IntegerNumber`     | `BinaryInteger + CheckedArithmetic + FromPrimitive`        |
//! | `SignedInteger`     | `IntegerNumber` with (checked) unary minus                 |
//! | `FloatingPoint`     | `num_traits::Float` (sqrt, powf, ln, exp, trig, ...)       |
//!
//! Primitive integers, `f32`/`f64` and, with the `bigint` feature,
//! `BigInt`/`BigUint` implement every group that applies to them.

use crate::num::ops::checked_arithmetic::{
    CheckedAddVal, CheckedDivVal, CheckedMulVal, CheckedNegVal, CheckedRemVal, CheckedSubVal,
};
use core::fmt::Debug;
use core::ops::{BitAnd, BitOr, Neg, Shl, Shr};
use num_traits::{Float, FloatConst, FromPrimitive, Num, One, Zero};

/// Types with an order and an equality relation.
///
/// Floating point `NaN` is outside the contract of every algorithm bounded by
/// this trait.
pub trait Ordered: PartialOrd + Sized {}

impl<T> Ordered for T where T: PartialOrd + Sized {}

/// Types with additive and multiplicative identities.
pub trait HasIdentities: Zero + One {}

impl<T> HasIdentities for T where T: Zero + One {}

/// Types closed under `+`, `-`, `*`, `/` and `%`.
pub trait Arithmetic: Num + HasIdentities + Clone {}

impl<T> Arithmetic for T where T: Num + Clone {}

/// Sign predicates and magnitude.
///
/// The methods carry a `_val` suffix so they never collide with the inherent
/// methods of the primitives or with `num_traits::Signed`.
pub trait SignQueries: Sized {
    /// Returns `true` if the value is strictly below zero.
    fn is_negative_val(&self) -> bool;

    /// Returns `true` if the value is strictly above zero.
    fn is_positive_val(&self) -> bool;

    /// Returns the magnitude of the value.
    ///
    /// # Panics
    ///
    /// Like the primitive `abs`, panics in debug builds for the minimum value
    /// of a signed integer type.
    fn abs_val(&self) -> Self;

    /// Returns the magnitude of the value, or `None` if it is not representable.
    fn checked_abs_val(&self) -> Option<Self>;
}

macro_rules! impl_sign_queries_signed {
    ($($t:ty),* $(,)?) => {
        $(
            impl SignQueries for $t {
                #[inline(always)]
                fn is_negative_val(&self) -> bool {
                    *self < 0
                }

                #[inline(always)]
                fn is_positive_val(&self) -> bool {
                    *self > 0
                }

                #[inline(always)]
                fn abs_val(&self) -> Self {
                    self.abs()
                }

                #[inline(always)]
                fn checked_abs_val(&self) -> Option<Self> {
                    self.checked_abs()
                }
            }
        )*
    };
}

macro_rules! impl_sign_queries_unsigned {
    ($($t:ty),* $(,)?) => {
        $(
            impl SignQueries for $t {
                #[inline(always)]
                fn is_negative_val(&self) -> bool {
                    false
                }

                #[inline(always)]
                fn is_positive_val(&self) -> bool {
                    *self > 0
                }

                #[inline(always)]
                fn abs_val(&self) -> Self {
                    *self
                }

                #[inline(always)]
                fn checked_abs_val(&self) -> Option<Self> {
                    Some(*self)
                }
            }
        )*
    };
}

macro_rules! impl_sign_queries_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl SignQueries for $t {
                #[inline(always)]
                fn is_negative_val(&self) -> bool {
                    *self < 0.0
                }

                #[inline(always)]
                fn is_positive_val(&self) -> bool {
                    *self > 0.0
                }

                #[inline(always)]
                fn abs_val(&self) -> Self {
                    self.abs()
                }

                #[inline(always)]
                fn checked_abs_val(&self) -> Option<Self> {
                    Some(self.abs())
                }
            }
        )*
    };
}

impl_sign_queries_signed!(i8, i16, i32, i64, i128, isize);
impl_sign_queries_unsigned!(u8, u16, u32, u64, u128, usize);
impl_sign_queries_float!(f32, f64);

/// The everyday numeric bound: ordered, closed under arithmetic, sign-aware.
pub trait Number: Ordered + Arithmetic + SignQueries + Debug {}

impl<T> Number for T where T: Ordered + Arithmetic + SignQueries + Debug {}

/// Arithmetic that reports overflow, underflow and division by zero as `None`.
pub trait CheckedArithmetic:
    CheckedAddVal + CheckedSubVal + CheckedMulVal + CheckedDivVal + CheckedRemVal
{
}

impl<T> CheckedArithmetic for T where
    T: CheckedAddVal + CheckedSubVal + CheckedMulVal + CheckedDivVal + CheckedRemVal
{
}

/// Integers with a binary representation.
///
/// Shifts take the amount as `u32`, matching the primitive shift operators.
/// Callers must keep shift amounts below [`BinaryInteger::BIT_WIDTH`] when it
/// is `Some`.
pub trait BinaryInteger:
    Number
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
{
    /// The number of representable bits, or `None` for arbitrary precision.
    const BIT_WIDTH: Option<u32>;

    /// The number of significant bits of a non-negative value (`0` for zero).
    ///
    /// Negative values of fixed-width types report the full width.
    fn bit_length(&self) -> u64;

    /// Returns `true` if the lowest bit is clear.
    fn is_even_val(&self) -> bool;

    /// Returns `true` if the value is a positive power of two.
    fn is_power_of_two_val(&self) -> bool;
}

macro_rules! impl_binary_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl BinaryInteger for $t {
                const BIT_WIDTH: Option<u32> = Some(<$t>::BITS);

                #[inline(always)]
                fn bit_length(&self) -> u64 {
                    u64::from(<$t>::BITS - self.leading_zeros())
                }

                #[inline(always)]
                fn is_even_val(&self) -> bool {
                    *self & 1 == 0
                }

                #[inline(always)]
                fn is_power_of_two_val(&self) -> bool {
                    *self > 0 && (*self & (*self - 1)) == 0
                }
            }
        )*
    };
}

impl_binary_integer!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Integers usable by the exact algorithms (roots, modular arithmetic, masks).
pub trait IntegerNumber: BinaryInteger + CheckedArithmetic + FromPrimitive {}

impl<T> IntegerNumber for T where T: BinaryInteger + CheckedArithmetic + FromPrimitive {}

/// Integers that can hold negative values.
pub trait SignedInteger: IntegerNumber + Neg<Output = Self> + CheckedNegVal {}

impl<T> SignedInteger for T where T: IntegerNumber + Neg<Output = Self> + CheckedNegVal {}

/// IEEE-754 style floating point numbers.
pub trait FloatingPoint: Number + Float + FloatConst + FromPrimitive {}

impl<T> FloatingPoint for T where T: Number + Float + FloatConst + FromPrimitive {}

#[cfg(feature = "bigint")]
mod bigint {
    use super::*;
    use num_bigint::{BigInt, BigUint, Sign};
    use num_traits::Signed;

    impl SignQueries for BigInt {
        #[inline]
        fn is_negative_val(&self) -> bool {
            self.sign() == Sign::Minus
        }

        #[inline]
        fn is_positive_val(&self) -> bool {
            self.sign() == Sign::Plus
        }

        #[inline]
        fn abs_val(&self) -> Self {
            Signed::abs(self)
        }

        #[inline]
        fn checked_abs_val(&self) -> Option<Self> {
            Some(Signed::abs(self))
        }
    }

    impl SignQueries for BigUint {
        #[inline]
        fn is_negative_val(&self) -> bool {
            false
        }

        #[inline]
        fn is_positive_val(&self) -> bool {
            !self.is_zero()
        }

        #[inline]
        fn abs_val(&self) -> Self {
            self.clone()
        }

        #[inline]
        fn checked_abs_val(&self) -> Option<Self> {
            Some(self.clone())
        }
    }

    impl BinaryInteger for BigInt {
        const BIT_WIDTH: Option<u32> = None;

        #[inline]
        fn bit_length(&self) -> u64 {
            self.bits()
        }

        #[inline]
        fn is_even_val(&self) -> bool {
            !self.bit(0)
        }

        #[inline]
        fn is_power_of_two_val(&self) -> bool {
            self.sign() == Sign::Plus && self.magnitude().count_ones() == 1
        }
    }

    impl BinaryInteger for BigUint {
        const BIT_WIDTH: Option<u32> = None;

        #[inline]
        fn bit_length(&self) -> u64 {
            self.bits()
        }

        #[inline]
        fn is_even_val(&self) -> bool {
            !self.bit(0)
        }

        #[inline]
        fn is_power_of_two_val(&self) -> bool {
            self.count_ones() == 1
        }
    }
}

/// Converts a small integer into `T`.
///
/// Used for literal constants (`2`, `n - 1`, ...) inside generic code. Returns
/// `None` if `T` cannot represent `value`.
#[inline]
pub fn constant<T>(value: u32) -> Option<T>
where
    T: FromPrimitive,
{
    T::from_u32(value)
}

/// Returns `1 + 1` in `T`.
#[inline]
pub fn two<T>() -> T
where
    T: HasIdentities,
{
    T::one() + T::one()
}

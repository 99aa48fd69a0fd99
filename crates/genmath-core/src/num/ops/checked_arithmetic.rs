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

//! By-value checked arithmetic.
//!
//! Each trait mirrors the matching inherent `checked_*` method of the primitive
//! integers but consumes its operands, which keeps generic code free of
//! reference juggling and lets arbitrary-precision integers participate.
//!
//! Implementations exist for:
//!
//! - every primitive integer (delegating to the inherent methods),
//! - `f32` and `f64`, where a result counts as checked when it is finite and the
//!   divisor (for `/` and `%`) is non-zero,
//! - `BigInt` and `BigUint` with the `bigint` feature, where only division by
//!   zero, unsigned underflow and negating a non-zero `BigUint` fail.

use core::ops::{Add, Div, Mul, Rem, Shl, Shr, Sub};

/// Checked addition by value.
///
/// # Examples
///
/// ```rust
/// # use genmath_core::num::ops::checked_arithmetic::CheckedAddVal;
/// assert_eq!(200u8.checked_add_val(100), None);
/// assert_eq!(200u8.checked_add_val(50), Some(250));
/// ```
pub trait CheckedAddVal: Sized + Add<Self, Output = Self> {
    /// Returns `None` if the sum is not representable.
    fn checked_add_val(self, v: Self) -> Option<Self>;
}

/// Checked subtraction by value.
///
/// # Examples
///
/// ```rust
/// # use genmath_core::num::ops::checked_arithmetic::CheckedSubVal;
/// assert_eq!(50u8.checked_sub_val(100), None);
/// assert_eq!((-100i8).checked_sub_val(28), Some(-128));
/// ```
pub trait CheckedSubVal: Sized + Sub<Self, Output = Self> {
    /// Returns `None` if the difference is not representable.
    fn checked_sub_val(self, v: Self) -> Option<Self>;
}

/// Checked multiplication by value.
///
/// # Examples
///
/// ```rust
/// # use genmath_core::num::ops::checked_arithmetic::CheckedMulVal;
/// assert_eq!(20u8.checked_mul_val(10), Some(200));
/// assert_eq!(20u8.checked_mul_val(20), None);
/// assert_eq!(f64::MAX.checked_mul_val(2.0), None);
/// ```
pub trait CheckedMulVal: Sized + Mul<Self, Output = Self> {
    /// Returns `None` if the product is not representable.
    fn checked_mul_val(self, v: Self) -> Option<Self>;
}

/// Checked division by value.
///
/// # Examples
///
/// ```rust
/// # use genmath_core::num::ops::checked_arithmetic::CheckedDivVal;
/// assert_eq!(100u8.checked_div_val(0), None);
/// assert_eq!(i32::MIN.checked_div_val(-1), None);
/// assert_eq!(1.0f64.checked_div_val(0.0), None);
/// ```
pub trait CheckedDivVal: Sized + Div<Self, Output = Self> {
    /// Returns `None` on division by zero or overflow.
    fn checked_div_val(self, v: Self) -> Option<Self>;
}

/// Checked remainder by value.
///
/// # Examples
///
/// ```rust
/// # use genmath_core::num::ops::checked_arithmetic::CheckedRemVal;
/// assert_eq!(10u8.checked_rem_val(0), None);
/// assert_eq!((-7i32).checked_rem_val(3), Some(-1));
/// ```
pub trait CheckedRemVal: Sized + Rem<Self, Output = Self> {
    /// Returns `None` on division by zero or overflow.
    fn checked_rem_val(self, v: Self) -> Option<Self>;
}

/// Checked negation by value.
///
/// # Examples
///
/// ```rust
/// # use genmath_core::num::ops::checked_arithmetic::CheckedNegVal;
/// assert_eq!((-128i8).checked_neg_val(), None);
/// assert_eq!(0u32.checked_neg_val(), Some(0));
/// assert_eq!(1u32.checked_neg_val(), None);
/// ```
pub trait CheckedNegVal: Sized {
    /// Returns `None` if the negation is not representable.
    fn checked_neg_val(self) -> Option<Self>;
}

/// Checked left shift by value.
///
/// Like the primitive `checked_shl`, only the shift amount is checked: bits
/// shifted out of the type are lost.
///
/// # Examples
///
/// ```rust
/// # use genmath_core::num::ops::checked_arithmetic::CheckedShlVal;
/// assert_eq!(1u8.checked_shl_val(8), None);
/// assert_eq!(1u8.checked_shl_val(3), Some(8));
/// ```
pub trait CheckedShlVal: Sized + Shl<u32, Output = Self> {
    /// Returns `None` if `rhs` is not smaller than the bit width.
    fn checked_shl_val(self, rhs: u32) -> Option<Self>;
}

/// Checked right shift by value.
///
/// # Examples
///
/// ```rust
/// # use genmath_core::num::ops::checked_arithmetic::CheckedShrVal;
/// assert_eq!(1u8.checked_shr_val(8), None);
/// assert_eq!(16u8.checked_shr_val(3), Some(2));
/// ```
pub trait CheckedShrVal: Sized + Shr<u32, Output = Self> {
    /// Returns `None` if `rhs` is not smaller than the bit width.
    fn checked_shr_val(self, rhs: u32) -> Option<Self>;
}

macro_rules! impl_checked_for_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl CheckedAddVal for $t {
                #[inline(always)]
                fn checked_add_val(self, v: $t) -> Option<$t> {
                    <$t>::checked_add(self, v)
                }
            }

            impl CheckedSubVal for $t {
                #[inline(always)]
                fn checked_sub_val(self, v: $t) -> Option<$t> {
                    <$t>::checked_sub(self, v)
                }
            }

            impl CheckedMulVal for $t {
                #[inline(always)]
                fn checked_mul_val(self, v: $t) -> Option<$t> {
                    <$t>::checked_mul(self, v)
                }
            }

            impl CheckedDivVal for $t {
                #[inline(always)]
                fn checked_div_val(self, v: $t) -> Option<$t> {
                    <$t>::checked_div(self, v)
                }
            }

            impl CheckedRemVal for $t {
                #[inline(always)]
                fn checked_rem_val(self, v: $t) -> Option<$t> {
                    <$t>::checked_rem(self, v)
                }
            }

            impl CheckedNegVal for $t {
                #[inline(always)]
                fn checked_neg_val(self) -> Option<$t> {
                    <$t>::checked_neg(self)
                }
            }

            impl CheckedShlVal for $t {
                #[inline(always)]
                fn checked_shl_val(self, rhs: u32) -> Option<$t> {
                    <$t>::checked_shl(self, rhs)
                }
            }

            impl CheckedShrVal for $t {
                #[inline(always)]
                fn checked_shr_val(self, rhs: u32) -> Option<$t> {
                    <$t>::checked_shr(self, rhs)
                }
            }
        )*
    };
}

impl_checked_for_int!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

#[inline(always)]
fn finite<F: num_traits::Float>(x: F) -> Option<F> {
    if x.is_finite() { Some(x) } else { None }
}

macro_rules! impl_checked_for_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl CheckedAddVal for $t {
                #[inline(always)]
                fn checked_add_val(self, v: $t) -> Option<$t> {
                    finite(self + v)
                }
            }

            impl CheckedSubVal for $t {
                #[inline(always)]
                fn checked_sub_val(self, v: $t) -> Option<$t> {
                    finite(self - v)
                }
            }

            impl CheckedMulVal for $t {
                #[inline(always)]
                fn checked_mul_val(self, v: $t) -> Option<$t> {
                    finite(self * v)
                }
            }

            impl CheckedDivVal for $t {
                #[inline(always)]
                fn checked_div_val(self, v: $t) -> Option<$t> {
                    if v == 0.0 { None } else { finite(self / v) }
                }
            }

            impl CheckedRemVal for $t {
                #[inline(always)]
                fn checked_rem_val(self, v: $t) -> Option<$t> {
                    if v == 0.0 { None } else { finite(self % v) }
                }
            }

            impl CheckedNegVal for $t {
                #[inline(always)]
                fn checked_neg_val(self) -> Option<$t> {
                    Some(-self)
                }
            }
        )*
    };
}

impl_checked_for_float!(f32, f64);

#[cfg(feature = "bigint")]
mod bigint {
    use super::*;
    use num_bigint::{BigInt, BigUint};
    use num_traits::Zero;

    macro_rules! impl_checked_for_big {
        ($($t:ty),* $(,)?) => {
            $(
                impl CheckedAddVal for $t {
                    #[inline]
                    fn checked_add_val(self, v: $t) -> Option<$t> {
                        Some(self + v)
                    }
                }

                impl CheckedMulVal for $t {
                    #[inline]
                    fn checked_mul_val(self, v: $t) -> Option<$t> {
                        Some(self * v)
                    }
                }

                impl CheckedDivVal for $t {
                    #[inline]
                    fn checked_div_val(self, v: $t) -> Option<$t> {
                        if v.is_zero() { None } else { Some(self / v) }
                    }
                }

                impl CheckedRemVal for $t {
                    #[inline]
                    fn checked_rem_val(self, v: $t) -> Option<$t> {
                        if v.is_zero() { None } else { Some(self % v) }
                    }
                }

                impl CheckedShlVal for $t {
                    #[inline]
                    fn checked_shl_val(self, rhs: u32) -> Option<$t> {
                        Some(self << rhs)
                    }
                }

                impl CheckedShrVal for $t {
                    #[inline]
                    fn checked_shr_val(self, rhs: u32) -> Option<$t> {
                        Some(self >> rhs)
                    }
                }
            )*
        };
    }

    impl_checked_for_big!(BigInt, BigUint);

    impl CheckedSubVal for BigInt {
        #[inline]
        fn checked_sub_val(self, v: BigInt) -> Option<BigInt> {
            Some(self - v)
        }
    }

    impl CheckedSubVal for BigUint {
        #[inline]
        fn checked_sub_val(self, v: BigUint) -> Option<BigUint> {
            if self < v { None } else { Some(self - v) }
        }
    }

    impl CheckedNegVal for BigInt {
        #[inline]
        fn checked_neg_val(self) -> Option<BigInt> {
            Some(-self)
        }
    }

    impl CheckedNegVal for BigUint {
        #[inline]
        fn checked_neg_val(self) -> Option<BigUint> {
            if self.is_zero() { Some(self) } else { None }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_overflow_is_reported() {
        assert_eq!(i64::MAX.checked_add_val(1), None);
        assert_eq!(i64::MIN.checked_sub_val(1), None);
        assert_eq!(u32::MAX.checked_mul_val(2), None);
        assert_eq!(i8::MIN.checked_rem_val(-1), None);
        assert_eq!(i8::MIN.checked_neg_val(), None);
        assert_eq!(7u16.checked_div_val(0), None);
    }

    #[test]
    fn test_integer_in_range_results() {
        assert_eq!(120i8.checked_add_val(7), Some(127));
        assert_eq!(0u64.checked_sub_val(0), Some(0));
        assert_eq!((-12i32).checked_div_val(5), Some(-2));
        assert_eq!((-12i32).checked_rem_val(5), Some(-2));
        assert_eq!(1i128.checked_shl_val(127), Some(i128::MIN));
        assert_eq!(u128::MAX.checked_shr_val(127), Some(1));
    }

    #[test]
    fn test_float_checks_finiteness() {
        assert_eq!(1.5f64.checked_add_val(2.0), Some(3.5));
        assert_eq!(f64::MAX.checked_add_val(f64::MAX), None);
        assert_eq!(f32::MAX.checked_mul_val(10.0), None);
        assert_eq!(3.0f64.checked_rem_val(0.0), None);
        assert_eq!(7.5f64.checked_rem_val(2.0), Some(1.5));
        assert_eq!(f64::NAN.checked_sub_val(1.0), None);
        assert_eq!(2.0f32.checked_neg_val(), Some(-2.0));
    }

    #[cfg(feature = "bigint")]
    #[test]
    fn test_bigint_never_overflows() {
        use num_bigint::{BigInt, BigUint};

        let big = BigInt::from(u128::MAX);
        let square = big.clone().checked_mul_val(big.clone()).unwrap();
        assert!(square > big);
        assert_eq!(BigInt::from(5).checked_div_val(BigInt::from(0)), None);
        assert_eq!(
            BigInt::from(-7).checked_rem_val(BigInt::from(3)),
            Some(BigInt::from(-1))
        );
        assert_eq!(
            BigUint::from(3u32).checked_sub_val(BigUint::from(4u32)),
            None
        );
        assert_eq!(BigUint::from(1u32).checked_neg_val(), None);
        assert_eq!(
            BigInt::from(1).checked_shl_val(200).unwrap() >> 200u32,
            BigInt::from(1)
        );
    }
}

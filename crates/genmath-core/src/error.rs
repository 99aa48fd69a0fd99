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

//! # Error Types
//!
//! A single, copyable error enum shared by every fallible operation in the
//! workspace. Each variant names one precondition class; none of them carries
//! heap data, so errors are cheap to construct, compare and propagate with `?`.

use thiserror::Error;

/// The error type for precondition violations and representability limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum MathError {
    /// An intermediate or final result does not fit the numeric type.
    #[error("arithmetic overflow")]
    Overflow,
    /// A divisor or modulus was zero.
    #[error("division by zero")]
    DivisionByZero,
    /// A rounding step was zero, negative or not a number.
    #[error("step must be strictly positive")]
    NonPositiveStep,
    /// A detent tolerance was negative or not a number.
    #[error("tolerance must not be negative")]
    NegativeTolerance,
    /// A root was requested for a negative radicand.
    #[error("radicand must not be negative")]
    NegativeRadicand,
    /// An integer power was requested with a negative exponent.
    #[error("exponent must not be negative")]
    NegativeExponent,
    /// A root degree below two was requested.
    #[error("root degree must be at least 2, got {0}")]
    InvalidRootDegree(u32),
    /// An operand that must be non-negative was negative.
    #[error("operand must not be negative")]
    NegativeOperand,
    /// A bit mask does not fit into the width of the numeric type.
    #[error("mask of {count} bits does not fit into {width} bits")]
    MaskTooWide {
        /// The number of bits requested.
        count: u32,
        /// The width of the numeric type.
        width: u32,
    },
    /// The numeric type has no fixed bit width (arbitrary precision).
    #[error("numeric type has no fixed bit width")]
    UnboundedWidth,
    /// A function argument must be strictly positive.
    #[error("argument must be strictly positive")]
    NonPositiveArgument,
    /// A probability was outside the open unit interval.
    #[error("probability must lie in the open interval (0, 1)")]
    ProbabilityOutOfRange,
    /// An interval was constructed with `low > high` (or an unordered bound).
    #[error("invalid interval: low must not exceed high")]
    InvalidInterval,
}

/// Convenience alias used throughout the workspace.
pub type MathResult<T> = Result<T, MathError>;

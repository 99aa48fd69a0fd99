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

//! # Genmath Core
//!
//! Foundational numerics for the `genmath` workspace: the capability traits
//! every generic algorithm is bounded by, by-value checked arithmetic, closed
//! interval algebra and the shared error type.
//!
//! ## Modules
//!
//! - `num`: Capability groups (`Ordered`, `Arithmetic`, `SignQueries`,
//!   `BinaryInteger`, `FloatingPoint`, ...) and checked arithmetic traits
//!   returning `Option<T>`, implemented for primitive integers, `f32`/`f64`
//!   and, with the `bigint` feature, `BigInt`/`BigUint`.
//! - `math`: `ClosedInterval<T>` with intersection, union, span, left/right
//!   and symmetric differences, plus helpers over interval collections.
//! - `error`: `MathError`, one variant per precondition class.
//!
//! ## Features
//!
//! - `bigint` (default): arbitrary-precision support through `num-bigint`.

pub mod error;
pub mod math;
pub mod num;

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

//! # Numeric Foundations
//!
//! The capability taxonomy every generic algorithm in the workspace is bounded
//! by, together with the by-value checked arithmetic it builds on.
//!
//! ## Submodules
//!
//! - `capability`: Capability groups (`Ordered`, `Arithmetic`, `SignQueries`,
//!   `BinaryInteger`, `FloatingPoint`, ...) with blanket implementations, so
//!   any type satisfying the underlying `num_traits` bounds qualifies
//!   automatically.
//! - `ops`: Checked arithmetic traits (by value) for addition, subtraction,
//!   multiplication, division, remainder, negation and shifts, returning
//!   `Option<T>` instead of wrapping or panicking.

pub mod capability;
pub mod ops;

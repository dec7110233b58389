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

//! # Range Core
//!
//! Generic ranges over any totally ordered type, with per-bound inclusivity.
//! A range is a single pair of bounds; comparisons are made one pair at a
//! time and never fail.
//!
//! ## Modules
//!
//! - `math`: The `Range<T>` value type, the `Inclusivity` of its bounds, and
//!   the `RangeShape<T>` trait providing point containment, range
//!   containment, intersection and union to any range-shaped type, including
//!   `std::ops::Range` and `std::ops::RangeInclusive`.
//!
//! ## Example
//!
//! ```rust
//! use range_core::math::inclusivity::Inclusivity;
//! use range_core::math::range::{Range, RangeShape};
//!
//! let morning = Range::with_inclusivity(6, 12, Inclusivity::MinInclusiveMaxExclusive);
//! let lunch = Range::new(12, 13);
//!
//! assert!(!morning.contains(&12));
//! assert!(morning.intersects(&lunch));
//! assert_eq!(morning.union(&lunch).to_string(), "[6, 13]");
//! ```

pub mod math;

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

use crate::math::inclusivity::Inclusivity;
use num_traits::Bounded;
use std::{
    cmp::{max, min},
    ops::{BitOr, Bound, RangeInclusive},
};

/// Anything shaped like a range: a minimum, a maximum and the inclusivity of
/// each bound.
///
/// The comparison operations are provided methods, so every implementor gets
/// [`contains`](RangeShape::contains), [`contains_range`](RangeShape::contains_range),
/// [`intersects`](RangeShape::intersects) and [`union`](RangeShape::union) for
/// free, and shapes of different types can be compared with each other.
///
/// No ordering between `minimum` and `maximum` is assumed. A shape whose
/// minimum lies above its maximum contains no value.
pub trait RangeShape<T>
where
    T: Ord,
{
    /// The lower bound.
    fn minimum(&self) -> &T;

    /// The upper bound.
    fn maximum(&self) -> &T;

    /// Which of the two bounds belong to the range.
    fn inclusivity(&self) -> Inclusivity;

    /// Returns `true` if `value` lies within the range, honouring the
    /// inclusivity of each bound.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use range_core::math::inclusivity::Inclusivity;
    /// # use range_core::math::range::{Range, RangeShape};
    ///
    /// let closed = Range::new(0, 10);
    /// assert!(closed.contains(&0));
    /// assert!(closed.contains(&10));
    ///
    /// let open = Range::with_inclusivity(0, 10, Inclusivity::MinExclusiveMaxExclusive);
    /// assert!(!open.contains(&0));
    /// assert!(open.contains(&5));
    /// assert!(!open.contains(&10));
    /// ```
    #[inline]
    fn contains(&self, value: &T) -> bool {
        let (min_inclusive, max_inclusive) = self.inclusivity().flags();

        let test_min = if min_inclusive {
            self.minimum() <= value
        } else {
            self.minimum() < value
        };
        let test_max = if max_inclusive {
            self.maximum() >= value
        } else {
            self.maximum() > value
        };

        test_min && test_max
    }

    /// Returns `true` if any boundary point of either range lies within the
    /// other range.
    ///
    /// This is not a subset test: it holds whenever `other` reaches into
    /// `self` at one of its bounds, or `self` reaches into `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use range_core::math::range::{Range, RangeShape};
    ///
    /// let a = Range::new(0, 10);
    /// assert!(a.contains_range(&Range::new(2, 8)));
    /// // Only the minimum of the other range lies in `a`.
    /// assert!(a.contains_range(&Range::new(5, 15)));
    /// assert!(!a.contains_range(&Range::new(11, 15)));
    /// ```
    #[inline]
    fn contains_range<R>(&self, other: &R) -> bool
    where
        R: RangeShape<T> + ?Sized,
    {
        self.contains(other.minimum())
            || self.contains(other.maximum())
            || other.contains(self.minimum())
            || other.contains(self.maximum())
    }

    /// Returns `true` if the two ranges intersect.
    ///
    /// Evaluates the same boundary-point test as
    /// [`contains_range`](RangeShape::contains_range): either range may
    /// completely contain the other.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use range_core::math::range::{Range, RangeShape};
    ///
    /// let a = Range::new(0, 5);
    /// assert!(a.intersects(&Range::new(5, 10))); // Shared point 5
    /// assert!(!a.intersects(&Range::new(10, 15)));
    /// ```
    #[inline]
    fn intersects<R>(&self, other: &R) -> bool
    where
        R: RangeShape<T> + ?Sized,
    {
        self.contains(other.minimum())
            || self.contains(other.maximum())
            || other.contains(self.minimum())
            || other.contains(self.maximum())
    }

    /// Returns the smallest range spanning both minima and both maxima.
    ///
    /// The result always uses the default inclusivity (both bounds
    /// inclusive); the inclusivity of the inputs is not carried over.
    /// Disjoint inputs still produce a single enclosing range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use range_core::math::range::{Range, RangeShape};
    ///
    /// let a = Range::new(0, 5);
    /// assert_eq!(a.union(&Range::new(3, 10)), Range::new(0, 10));
    /// assert_eq!(a.union(&Range::new(10, 15)), Range::new(0, 15));
    /// ```
    #[inline]
    fn union<R>(&self, other: &R) -> Range<T>
    where
        R: RangeShape<T> + ?Sized,
        T: Clone,
    {
        Range::new(
            min(self.minimum(), other.minimum()).clone(),
            max(self.maximum(), other.maximum()).clone(),
        )
    }
}

/// Returns `true` if `value` lies within `range`.
#[inline]
pub fn contains<T, R>(range: &R, value: &T) -> bool
where
    T: Ord,
    R: RangeShape<T> + ?Sized,
{
    range.contains(value)
}

/// Returns `true` if any boundary point of either range lies within the other.
#[inline]
pub fn contains_range<T, A, B>(range: &A, other: &B) -> bool
where
    T: Ord,
    A: RangeShape<T> + ?Sized,
    B: RangeShape<T> + ?Sized,
{
    range.contains_range(other)
}

/// Returns `true` if the two ranges intersect.
#[inline]
pub fn intersects<T, A, B>(range: &A, other: &B) -> bool
where
    T: Ord,
    A: RangeShape<T> + ?Sized,
    B: RangeShape<T> + ?Sized,
{
    range.intersects(other)
}

/// Returns the smallest fully inclusive range enclosing both inputs.
#[inline]
pub fn union<T, A, B>(range: &A, other: &B) -> Range<T>
where
    T: Ord + Clone,
    A: RangeShape<T> + ?Sized,
    B: RangeShape<T> + ?Sized,
{
    range.union(other)
}

/// An immutable range over an ordered type with per-bound inclusivity.
///
/// Construction does not check that `minimum <= maximum`; a reversed range is
/// a valid value that simply contains nothing.
///
/// # Examples
///
/// ```rust
/// # use range_core::math::inclusivity::Inclusivity;
/// # use range_core::math::range::{Range, RangeShape};
///
/// let r = Range::with_inclusivity(1, 4, Inclusivity::MinInclusiveMaxExclusive);
/// assert_eq!(r.to_string(), "[1, 4)");
/// assert!(r.contains(&1));
/// assert!(!r.contains(&4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range<T>
where
    T: Ord,
{
    minimum: T,
    maximum: T,
    inclusivity: Inclusivity,
}

impl<T> Range<T>
where
    T: Ord,
{
    /// Creates a range including both bounds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use range_core::math::inclusivity::Inclusivity;
    /// # use range_core::math::range::Range;
    ///
    /// let r = Range::new(0, 10);
    /// assert_eq!(r.inclusivity(), Inclusivity::MinInclusiveMaxInclusive);
    /// ```
    #[inline]
    pub const fn new(minimum: T, maximum: T) -> Self {
        Self::with_inclusivity(minimum, maximum, Inclusivity::MinInclusiveMaxInclusive)
    }

    /// Creates a range with the given inclusivity.
    #[inline]
    pub const fn with_inclusivity(minimum: T, maximum: T, inclusivity: Inclusivity) -> Self {
        Self {
            minimum,
            maximum,
            inclusivity,
        }
    }

    /// Returns the lower bound.
    #[inline]
    pub const fn minimum(&self) -> &T {
        &self.minimum
    }

    /// Returns the upper bound.
    #[inline]
    pub const fn maximum(&self) -> &T {
        &self.maximum
    }

    #[inline]
    pub const fn inclusivity(&self) -> Inclusivity {
        self.inclusivity
    }

    /// Returns `true` if `value` lies within the range. Same as
    /// [`RangeShape::contains`].
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        RangeShape::contains(self, value)
    }

    /// Consumes the range, returning `(minimum, maximum)`.
    #[inline]
    pub fn into_bounds(self) -> (T, T) {
        (self.minimum, self.maximum)
    }
}

impl<T> Range<T>
where
    T: Ord + Bounded,
{
    /// Creates the inclusive range covering every value of `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use range_core::math::range::{Range, RangeShape};
    ///
    /// let all = Range::<u8>::full();
    /// assert!(all.contains(&0));
    /// assert!(all.contains(&u8::MAX));
    /// ```
    #[inline]
    pub fn full() -> Self {
        Self::new(T::min_value(), T::max_value())
    }
}

impl<T> RangeShape<T> for Range<T>
where
    T: Ord,
{
    #[inline]
    fn minimum(&self) -> &T {
        &self.minimum
    }

    #[inline]
    fn maximum(&self) -> &T {
        &self.maximum
    }

    #[inline]
    fn inclusivity(&self) -> Inclusivity {
        self.inclusivity
    }
}

// `start..end` includes its start and excludes its end.
impl<T> RangeShape<T> for std::ops::Range<T>
where
    T: Ord,
{
    #[inline]
    fn minimum(&self) -> &T {
        &self.start
    }

    #[inline]
    fn maximum(&self) -> &T {
        &self.end
    }

    #[inline]
    fn inclusivity(&self) -> Inclusivity {
        Inclusivity::MinInclusiveMaxExclusive
    }
}

impl<T> RangeShape<T> for RangeInclusive<T>
where
    T: Ord,
{
    #[inline]
    fn minimum(&self) -> &T {
        self.start()
    }

    #[inline]
    fn maximum(&self) -> &T {
        self.end()
    }

    #[inline]
    fn inclusivity(&self) -> Inclusivity {
        Inclusivity::MinInclusiveMaxInclusive
    }
}

impl<T> BitOr for Range<T>
where
    T: Ord + Clone,
{
    type Output = Range<T>;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(&rhs)
    }
}

impl<T> std::fmt::Display for Range<T>
where
    T: Ord + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (min_inclusive, max_inclusive) = self.inclusivity.flags();
        let open = if min_inclusive { '[' } else { '(' };
        let close = if max_inclusive { ']' } else { ')' };
        write!(f, "{}{}, {}{}", open, self.minimum, self.maximum, close)
    }
}

impl<T> std::ops::RangeBounds<T> for Range<T>
where
    T: Ord,
{
    fn start_bound(&self) -> Bound<&T> {
        if self.inclusivity.is_min_inclusive() {
            Bound::Included(&self.minimum)
        } else {
            Bound::Excluded(&self.minimum)
        }
    }

    fn end_bound(&self) -> Bound<&T> {
        if self.inclusivity.is_max_inclusive() {
            Bound::Included(&self.maximum)
        } else {
            Bound::Excluded(&self.maximum)
        }
    }
}

impl<T> From<std::ops::Range<T>> for Range<T>
where
    T: Ord,
{
    #[inline]
    fn from(range: std::ops::Range<T>) -> Self {
        Self::with_inclusivity(range.start, range.end, Inclusivity::MinInclusiveMaxExclusive)
    }
}

impl<T> From<RangeInclusive<T>> for Range<T>
where
    T: Ord,
{
    #[inline]
    fn from(range: RangeInclusive<T>) -> Self {
        let (minimum, maximum) = range.into_inner();
        Self::new(minimum, maximum)
    }
}

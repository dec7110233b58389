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

use crate::math::error::InvalidInclusivityError;

/// Which bounds of a range belong to it.
///
/// Each variant has a stable two-bit encoding, exposed through
/// [`Inclusivity::bits`] and `TryFrom<u8>`: bit 0 is set when the maximum is
/// inclusive, bit 1 when the minimum is inclusive.
///
/// | Variant                    | Bits   | Notation |
/// |----------------------------|--------|----------|
/// | `MinExclusiveMaxExclusive` | `0b00` | `(a, b)` |
/// | `MinExclusiveMaxInclusive` | `0b01` | `(a, b]` |
/// | `MinInclusiveMaxExclusive` | `0b10` | `[a, b)` |
/// | `MinInclusiveMaxInclusive` | `0b11` | `[a, b]` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Inclusivity {
    MinExclusiveMaxExclusive,
    MinExclusiveMaxInclusive,
    MinInclusiveMaxExclusive,
    #[default]
    MinInclusiveMaxInclusive,
}

impl Inclusivity {
    /// Builds the variant matching the given per-bound flags.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use range_core::math::inclusivity::Inclusivity;
    ///
    /// assert_eq!(
    ///     Inclusivity::from_flags(true, false),
    ///     Inclusivity::MinInclusiveMaxExclusive
    /// );
    /// ```
    #[inline]
    pub const fn from_flags(min_inclusive: bool, max_inclusive: bool) -> Self {
        match (min_inclusive, max_inclusive) {
            (false, false) => Self::MinExclusiveMaxExclusive,
            (false, true) => Self::MinExclusiveMaxInclusive,
            (true, false) => Self::MinInclusiveMaxExclusive,
            (true, true) => Self::MinInclusiveMaxInclusive,
        }
    }

    /// Returns `(min_inclusive, max_inclusive)`.
    #[inline]
    pub const fn flags(self) -> (bool, bool) {
        match self {
            Self::MinExclusiveMaxExclusive => (false, false),
            Self::MinExclusiveMaxInclusive => (false, true),
            Self::MinInclusiveMaxExclusive => (true, false),
            Self::MinInclusiveMaxInclusive => (true, true),
        }
    }

    /// Returns `true` if the minimum bound belongs to the range.
    #[inline]
    pub const fn is_min_inclusive(self) -> bool {
        self.flags().0
    }

    /// Returns `true` if the maximum bound belongs to the range.
    #[inline]
    pub const fn is_max_inclusive(self) -> bool {
        self.flags().1
    }

    /// Returns the two-bit encoding of this variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use range_core::math::inclusivity::Inclusivity;
    ///
    /// assert_eq!(Inclusivity::MinInclusiveMaxInclusive.bits(), 0b11);
    /// assert_eq!(Inclusivity::MinExclusiveMaxInclusive.bits(), 0b01);
    /// ```
    #[inline]
    pub const fn bits(self) -> u8 {
        let (min_inclusive, max_inclusive) = self.flags();
        ((min_inclusive as u8) << 1) | (max_inclusive as u8)
    }
}

impl TryFrom<u8> for Inclusivity {
    type Error = InvalidInclusivityError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        match bits {
            0b00 => Ok(Self::MinExclusiveMaxExclusive),
            0b01 => Ok(Self::MinExclusiveMaxInclusive),
            0b10 => Ok(Self::MinInclusiveMaxExclusive),
            0b11 => Ok(Self::MinInclusiveMaxInclusive),
            _ => Err(InvalidInclusivityError::new(bits)),
        }
    }
}

impl From<Inclusivity> for u8 {
    #[inline]
    fn from(inclusivity: Inclusivity) -> Self {
        inclusivity.bits()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Inclusivity; 4] = [
        Inclusivity::MinExclusiveMaxExclusive,
        Inclusivity::MinExclusiveMaxInclusive,
        Inclusivity::MinInclusiveMaxExclusive,
        Inclusivity::MinInclusiveMaxInclusive,
    ];

    #[test]
    fn test_default_is_fully_inclusive() {
        assert_eq!(Inclusivity::default(), Inclusivity::MinInclusiveMaxInclusive);
    }

    #[test]
    fn test_bit_layout() {
        // bit 0: max inclusive, bit 1: min inclusive
        assert_eq!(Inclusivity::MinExclusiveMaxExclusive.bits(), 0);
        assert_eq!(Inclusivity::MinExclusiveMaxInclusive.bits(), 1);
        assert_eq!(Inclusivity::MinInclusiveMaxExclusive.bits(), 2);
        assert_eq!(Inclusivity::MinInclusiveMaxInclusive.bits(), 3);

        for inclusivity in ALL {
            let bits = inclusivity.bits();
            assert_eq!(inclusivity.is_max_inclusive(), bits & 1 == 1);
            assert_eq!(inclusivity.is_min_inclusive(), bits & 2 == 2);
        }
    }

    #[test]
    fn test_extreme_variants() {
        assert_eq!(Inclusivity::MinInclusiveMaxInclusive.flags(), (true, true));
        assert_eq!(Inclusivity::MinExclusiveMaxExclusive.flags(), (false, false));
    }

    #[test]
    fn test_from_flags_matches_flags() {
        for inclusivity in ALL {
            let (min, max) = inclusivity.flags();
            assert_eq!(Inclusivity::from_flags(min, max), inclusivity);
        }
    }

    #[test]
    fn test_try_from_u8() {
        for inclusivity in ALL {
            assert_eq!(Inclusivity::try_from(inclusivity.bits()), Ok(inclusivity));
            assert_eq!(u8::from(inclusivity), inclusivity.bits());
        }

        for bits in 4..=u8::MAX {
            let err = Inclusivity::try_from(bits).unwrap_err();
            assert_eq!(err.bits(), bits);
        }
    }
}

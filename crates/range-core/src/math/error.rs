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

/// Returned when a raw integer does not name a valid inclusivity flag set.
///
/// Only the low two bits carry meaning (bit 0: maximum inclusive, bit 1:
/// minimum inclusive), so any value above `3` is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InvalidInclusivityError {
    bits: u8,
}

impl InvalidInclusivityError {
    #[inline]
    pub(crate) const fn new(bits: u8) -> Self {
        Self { bits }
    }

    /// Returns the rejected raw value.
    #[inline]
    pub const fn bits(&self) -> u8 {
        self.bits
    }
}

impl std::fmt::Display for InvalidInclusivityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid inclusivity flags {:#04b}: only the two lowest bits may be set",
            self.bits
        )
    }
}

impl std::error::Error for InvalidInclusivityError {}

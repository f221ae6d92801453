//! Unsigned integer widths usable as flag storage.
//!
//! `FlagBits` is implemented for every unsigned primitive so that a
//! `FlagSet<T>` behaves identically whether it is backed by a `u8` or a
//! `u128`. The trait is sealed; downstream crates cannot add widths.

use std::fmt;
use std::hash::Hash;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

mod sealed {
    pub trait Sealed {}
}

/// A fixed-width unsigned integer that can hold a set of single-bit flags.
pub trait FlagBits:
    sealed::Sealed
    + Copy
    + Eq
    + Ord
    + Hash
    + Default
    + fmt::Debug
    + fmt::Display
    + fmt::Binary
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + BitAndAssign
    + BitOrAssign
    + BitXorAssign
    + Send
    + Sync
    + 'static
{
    /// All bits clear.
    const ZERO: Self;
    /// Only the least significant bit set.
    const ONE: Self;
    /// Width of the type in bits.
    const BITS: u32;

    /// The value with only bit `index` set, or `None` if `index >= BITS`.
    fn bit(index: u32) -> Option<Self>;

    /// Number of set bits.
    fn count_ones(self) -> u32;

    /// Index of the lowest set bit. Equal to `BITS` for zero.
    fn trailing_zeros(self) -> u32;

    /// Lossless widening used for error reporting.
    fn to_u128(self) -> u128;

    /// True if exactly one bit is set.
    #[inline]
    fn is_single_bit(self) -> bool {
        self.count_ones() == 1
    }

    /// True if no bit is set.
    #[inline]
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Iterate over the single-bit components of `self`, lowest bit first.
    #[inline]
    fn single_bits(self) -> SingleBits<Self> {
        SingleBits { rest: self }
    }
}

macro_rules! impl_flag_bits {
    ($($ty:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl FlagBits for $ty {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const BITS: u32 = <$ty>::BITS;

                #[inline]
                fn bit(index: u32) -> Option<Self> {
                    Self::ONE.checked_shl(index)
                }

                #[inline]
                fn count_ones(self) -> u32 {
                    <$ty>::count_ones(self)
                }

                #[inline]
                fn trailing_zeros(self) -> u32 {
                    <$ty>::trailing_zeros(self)
                }

                #[inline]
                #[allow(clippy::cast_lossless)]
                fn to_u128(self) -> u128 {
                    // Every unsigned primitive, including usize, fits in u128.
                    self as u128
                }
            }
        )*
    };
}

impl_flag_bits!(u8, u16, u32, u64, u128, usize);

/// Iterator returned by [`FlagBits::single_bits`].
#[derive(Debug, Clone)]
pub struct SingleBits<T> {
    rest: T,
}

impl<T: FlagBits> Iterator for SingleBits<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.rest.is_zero() {
            return None;
        }
        let bit = T::bit(self.rest.trailing_zeros())?;
        self.rest &= !bit;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.rest.count_ones() as usize;
        (n, Some(n))
    }
}

impl<T: FlagBits> ExactSizeIterator for SingleBits<T> {}

impl<T: FlagBits> std::iter::FusedIterator for SingleBits<T> {}

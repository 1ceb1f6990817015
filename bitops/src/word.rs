use std::fmt::{Binary, Debug};
use std::ops::{BitAnd, BitOr, BitXor, Not, Shl};

/// Fixed-width unsigned word that single-bit operations can run on.
///
/// Only unsigned types implement this, so masks never go through a signed
/// shift or sign extension.
pub trait BitWord:
    Copy
    + Eq
    + Debug
    + Binary
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
    + Shl<u32, Output = Self>
{
    /// Number of bits in the word.
    const WIDTH: u32;
    const ZERO: Self;
    const ONE: Self;
}

macro_rules! impl_bit_word {
    ($($ty:ty),+) => {
        $(impl BitWord for $ty {
            const WIDTH: u32 = <$ty>::BITS;
            const ZERO: Self = 0;
            const ONE: Self = 1;
        })+
    };
}

impl_bit_word!(u8, u16, u32, u64);

//! Single-bit queries and mutations over fixed-width unsigned words.
//!
//! The plain functions ignore out-of-range indices: mutations hand the value
//! back untouched and `test_bit` reports `false`. The `try_*` functions
//! return [`Error::InvalidIndex`] instead.

use log::trace;

use crate::error::Error;
use crate::mask;
use crate::word::BitWord;

fn invalid<T: BitWord>(index: u32) -> Error {
    Error::InvalidIndex {
        index,
        width: T::WIDTH,
    }
}

fn ignored<T: BitWord>(op: &str, index: u32) {
    trace!("{op}: ignoring bit index {index} for {}-bit word", T::WIDTH);
}

/// Return `value` with bit `index` forced to 0.
pub fn clear_bit<T: BitWord>(value: T, index: u32) -> T {
    let mut value = value;
    clear_bit_in_place(&mut value, index);
    value
}

/// Return `value` with bit `index` forced to 1.
pub fn set_bit<T: BitWord>(value: T, index: u32) -> T {
    let mut value = value;
    set_bit_in_place(&mut value, index);
    value
}

/// Return `value` with bit `index` flipped.
pub fn toggle_bit<T: BitWord>(value: T, index: u32) -> T {
    let mut value = value;
    toggle_bit_in_place(&mut value, index);
    value
}

/// Whether bit `index` of `value` is 1. Bits past the width read as 0.
pub fn test_bit<T: BitWord>(value: T, index: u32) -> bool {
    match mask::for_index::<T>(index) {
        Some(m) => value & m != T::ZERO,
        None => false,
    }
}

/// Clear bit `index` of `value` in place. Returns `false`, leaving `value`
/// untouched, when `index` is out of range.
pub fn clear_bit_in_place<T: BitWord>(value: &mut T, index: u32) -> bool {
    match mask::for_index::<T>(index) {
        Some(m) => {
            mask::clr(value, m);
            true
        }
        None => {
            ignored::<T>("clear_bit", index);
            false
        }
    }
}

pub fn set_bit_in_place<T: BitWord>(value: &mut T, index: u32) -> bool {
    match mask::for_index::<T>(index) {
        Some(m) => {
            mask::set(value, m);
            true
        }
        None => {
            ignored::<T>("set_bit", index);
            false
        }
    }
}

pub fn toggle_bit_in_place<T: BitWord>(value: &mut T, index: u32) -> bool {
    match mask::for_index::<T>(index) {
        Some(m) => {
            mask::xor(value, m);
            true
        }
        None => {
            ignored::<T>("toggle_bit", index);
            false
        }
    }
}

pub fn try_clear_bit<T: BitWord>(value: T, index: u32) -> Result<T, Error> {
    let m = mask::for_index::<T>(index).ok_or_else(|| invalid::<T>(index))?;
    Ok(value & !m)
}

pub fn try_set_bit<T: BitWord>(value: T, index: u32) -> Result<T, Error> {
    let m = mask::for_index::<T>(index).ok_or_else(|| invalid::<T>(index))?;
    Ok(value | m)
}

pub fn try_toggle_bit<T: BitWord>(value: T, index: u32) -> Result<T, Error> {
    let m = mask::for_index::<T>(index).ok_or_else(|| invalid::<T>(index))?;
    Ok(value ^ m)
}

pub fn try_test_bit<T: BitWord>(value: T, index: u32) -> Result<bool, Error> {
    let m = mask::for_index::<T>(index).ok_or_else(|| invalid::<T>(index))?;
    Ok(value & m != T::ZERO)
}

/// Method forms of the functions in this module, available on every
/// [`BitWord`].
pub trait BitOps: BitWord {
    fn clear_bit(self, index: u32) -> Self {
        clear_bit(self, index)
    }

    fn set_bit(self, index: u32) -> Self {
        set_bit(self, index)
    }

    fn toggle_bit(self, index: u32) -> Self {
        toggle_bit(self, index)
    }

    fn test_bit(self, index: u32) -> bool {
        test_bit(self, index)
    }

    fn try_clear_bit(self, index: u32) -> Result<Self, Error> {
        try_clear_bit(self, index)
    }

    fn try_set_bit(self, index: u32) -> Result<Self, Error> {
        try_set_bit(self, index)
    }

    fn try_toggle_bit(self, index: u32) -> Result<Self, Error> {
        try_toggle_bit(self, index)
    }

    fn try_test_bit(self, index: u32) -> Result<bool, Error> {
        try_test_bit(self, index)
    }
}

impl<T: BitWord> BitOps for T {}

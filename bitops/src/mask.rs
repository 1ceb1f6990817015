use crate::word::BitWord;

/// Single-bit mask for `index`, LSB-first. `None` when `index` does not fit
/// in `T`.
pub fn for_index<T: BitWord>(index: u32) -> Option<T> {
    if index < T::WIDTH {
        Some(T::ONE << index)
    } else {
        None
    }
}

pub fn set<T: BitWord>(word: &mut T, mask: T) {
    *word = *word | mask;
}

pub fn clr<T: BitWord>(word: &mut T, mask: T) {
    *word = *word & !mask;
}

pub fn xor<T: BitWord>(word: &mut T, mask: T) {
    *word = *word ^ mask;
}

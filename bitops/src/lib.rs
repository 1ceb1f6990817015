pub mod api;
pub mod error;
pub mod mask;
pub mod ops;
pub mod policy;
pub mod word;

pub use error::Error;
pub use ops::{
    clear_bit, clear_bit_in_place, set_bit, set_bit_in_place, test_bit, toggle_bit,
    toggle_bit_in_place, try_clear_bit, try_set_bit, try_test_bit, try_toggle_bit, BitOps,
};
pub use policy::{apply, BitOp, IndexPolicy};
pub use word::BitWord;

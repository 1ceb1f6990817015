use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::mask;
use crate::word::BitWord;

/// What to do with a bit index that does not fit in the word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexPolicy {
    /// Leave the value unchanged.
    #[default]
    Ignore,
    /// Fail with [`Error::InvalidIndex`].
    Reject,
}

/// Single-bit mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BitOp {
    Clear,
    Set,
    Toggle,
}

/// Run `op` on bit `index` of `value`, handling an out-of-range index as
/// `policy` says.
pub fn apply<T: BitWord>(
    value: T,
    index: u32,
    op: BitOp,
    policy: IndexPolicy,
) -> Result<T, Error> {
    let Some(m) = mask::for_index::<T>(index) else {
        return match policy {
            IndexPolicy::Ignore => Ok(value),
            IndexPolicy::Reject => {
                debug!(
                    "{op:?}: rejecting bit index {index} for {}-bit word",
                    T::WIDTH
                );
                Err(Error::InvalidIndex {
                    index,
                    width: T::WIDTH,
                })
            }
        };
    };
    let mut value = value;
    match op {
        BitOp::Clear => mask::clr(&mut value, m),
        BitOp::Set => mask::set(&mut value, m),
        BitOp::Toggle => mask::xor(&mut value, m),
    }
    Ok(value)
}

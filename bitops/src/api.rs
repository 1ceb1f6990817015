//! WebAssembly bindings for the u8 and u32 bit operations.
//!
//! Only compiled when targeting `wasm32`. Out-of-range indices are ignored,
//! as with the plain functions in [`crate::ops`].

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::prelude::*;

use crate::ops;

#[wasm_bindgen]
pub fn clear_bit_u32(value: u32, index: u32) -> u32 {
    ops::clear_bit(value, index)
}

#[wasm_bindgen]
pub fn set_bit_u32(value: u32, index: u32) -> u32 {
    ops::set_bit(value, index)
}

#[wasm_bindgen]
pub fn toggle_bit_u32(value: u32, index: u32) -> u32 {
    ops::toggle_bit(value, index)
}

#[wasm_bindgen]
pub fn test_bit_u32(value: u32, index: u32) -> bool {
    ops::test_bit(value, index)
}

#[wasm_bindgen]
pub fn clear_bit_u8(value: u8, index: u32) -> u8 {
    ops::clear_bit(value, index)
}

#[wasm_bindgen]
pub fn set_bit_u8(value: u8, index: u32) -> u8 {
    ops::set_bit(value, index)
}

#[wasm_bindgen]
pub fn toggle_bit_u8(value: u8, index: u32) -> u8 {
    ops::toggle_bit(value, index)
}

#[wasm_bindgen]
pub fn test_bit_u8(value: u8, index: u32) -> bool {
    ops::test_bit(value, index)
}

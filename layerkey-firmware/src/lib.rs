#![no_std]
pub mod dispatcher;
pub mod engine;
pub mod firmware_functions;
pub mod keymap;
pub mod layer_stack;
pub mod peripherals;
pub mod report;
pub mod scan;
pub mod settings;
pub mod state;
pub mod storage;
pub mod tap_hold;
pub mod tri_layer;

#[cfg(any(test, feature = "test-utils"))]
pub mod flash_test_stub;

#[cfg(test)]
mod time_driver_test_stub;

#[macro_use]
mod macros;

pub(crate) const KEY_BITS_SIZE: usize = 32;

fn add_bit<const SIZE: usize>(bits: &mut [u8], kc: u8) -> bool {
    let i = (kc >> 3) as usize;
    if i >= SIZE || i >= bits.len() {
        crate::warn!("invalid key! {}", kc);
        return false;
    }
    let bp = 1 << (kc & 7);
    let old = bits[i];
    bits[i] |= bp;
    old & bp == 0
}

fn del_bit<const SIZE: usize>(bits: &mut [u8], kc: u8) -> bool {
    let i = (kc >> 3) as usize;
    if i >= SIZE || i >= bits.len() {
        crate::warn!("invalid key! {}", kc);
        return false;
    }
    let bp = 1 << (kc & 7);
    let old = bits[i];
    bits[i] &= !bp;
    old & bp != 0
}

fn add_key_bit(keys_down: &mut [u8], kc: u8) -> bool {
    add_bit::<KEY_BITS_SIZE>(keys_down, kc)
}

fn del_key_bit(keys_down: &mut [u8], kc: u8) -> bool {
    del_bit::<KEY_BITS_SIZE>(keys_down, kc)
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod test;

//! Let's Split keymaps. Both use the 4x12 logical matrix with the two halves side by side.
#![no_std]
pub mod lets_split_noah;
pub mod lets_split_serial;

pub const ROWS: usize = 4;
pub const COLS: usize = 12;

#[cfg(test)]
pub(crate) mod test_engine;

/// How long (ms) a dual-role key may be held and still count as a tap.
pub const TAPPING_TERM_DEFAULT: u16 = 200;

/// Number of taps of a tap-toggle key needed to toggle its layer.
pub const TAPPING_TOGGLE_DEFAULT: u8 = 5;

/// Highest layer id a keymap may use; layer membership is a 32 bit mask.
pub const MAX_LAYER_ID: u8 = 31;

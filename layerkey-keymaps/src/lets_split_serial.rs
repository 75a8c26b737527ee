//! The stock serial Let's Split layout: QWERTY with lower and raise layers, and an adjust layer
//! reached by holding both.

use layerkey_common::keycodes::kc;
use layerkey_firmware::{
    dispatcher::{CustomKeycode, FirmwareAction},
    keymap::{custom, k, mo, s, Action, Keymap, LayerDef, Plane, NO, TRNS},
    settings::Settings,
    tri_layer::TriLayer,
};

use crate::{COLS, ROWS};

pub const QWERTY: u8 = 0;
pub const LOWER: u8 = 3;
pub const RAISE: u8 = 4;
pub const ADJUST: u8 = 16;

const LWR: Action = mo(LOWER);
const RSE: Action = mo(RAISE);
const ADJ: Action = mo(ADJUST);
const SET_QWERTY: Action = custom(CustomKeycode::SetDefaultLayer(QWERTY));
const RESET: Action = custom(CustomKeycode::Firmware(FirmwareAction::Bootloader));
const AG_NORM: Action = custom(CustomKeycode::SwapAltGui(false));
const AG_SWAP: Action = custom(CustomKeycode::SwapAltGui(true));

#[rustfmt::skip]
const QWERTY_PLANE: Plane<ROWS, COLS> = [
    [k(kc::GRAVE),  k(kc::Q), k(kc::W), k(kc::E),    k(kc::R), k(kc::T),    k(kc::Y),     k(kc::U), k(kc::I),     k(kc::O),   k(kc::P),      k(kc::BSPACE)],
    [k(kc::LCTRL),  k(kc::A), k(kc::S), k(kc::D),    k(kc::F), k(kc::G),    k(kc::H),     k(kc::J), k(kc::K),     k(kc::L),   k(kc::SCOLON), k(kc::ENTER)],
    [k(kc::LSHIFT), k(kc::Z), k(kc::X), k(kc::C),    k(kc::V), k(kc::B),    k(kc::N),     k(kc::M), k(kc::COMMA), k(kc::DOT), k(kc::SLASH),  k(kc::RSHIFT)],
    [ADJ,           NO,       NO,       k(kc::LALT), LWR,      k(kc::LGUI), k(kc::SPACE), RSE,      NO,           NO,         NO,            NO],
];

#[rustfmt::skip]
const LOWER_PLANE: Plane<ROWS, COLS> = [
    [s(kc::GRAVE), s(kc::N1), s(kc::N2), s(kc::N3), s(kc::N4), TRNS, TRNS,        k(kc::MINUS),      k(kc::EQUAL),        k(kc::LBRACKET), k(kc::RBRACKET), k(kc::DELETE)],
    [TRNS,         s(kc::N5), s(kc::N6), s(kc::N7), s(kc::N8), TRNS, k(kc::LEFT), k(kc::DOWN),       k(kc::UP),           k(kc::RIGHT),    k(kc::QUOTE),    k(kc::SCOLON)],
    [TRNS,         s(kc::N9), s(kc::N0), TRNS,      TRNS,      TRNS, TRNS,        s(kc::NONUS_HASH), s(kc::NONUS_BSLASH), TRNS,            k(kc::BSLASH),   TRNS],
    [TRNS,         TRNS,      TRNS,      TRNS,      TRNS,      TRNS, k(kc::TAB),  TRNS,              k(kc::MNXT),         k(kc::VOLD),     k(kc::VOLU),     k(kc::MPLY)],
];

#[rustfmt::skip]
const RAISE_PLANE: Plane<ROWS, COLS> = [
    [s(kc::GRAVE), k(kc::N1), k(kc::N2), k(kc::N3), k(kc::N4), TRNS, TRNS,        k(kc::MINUS),      k(kc::EQUAL),        k(kc::LBRACKET), k(kc::RBRACKET), k(kc::DELETE)],
    [TRNS,         k(kc::N5), k(kc::N6), k(kc::N7), k(kc::N8), TRNS, k(kc::LEFT), k(kc::DOWN),       k(kc::UP),           k(kc::RIGHT),    k(kc::QUOTE),    k(kc::SCOLON)],
    [TRNS,         k(kc::N9), k(kc::N0), TRNS,      TRNS,      TRNS, TRNS,        k(kc::NONUS_HASH), k(kc::NONUS_BSLASH), TRNS,            k(kc::BSLASH),   TRNS],
    [TRNS,         TRNS,      TRNS,      TRNS,      TRNS,      TRNS, k(kc::TAB),  TRNS,              k(kc::MNXT),         k(kc::VOLD),     k(kc::VOLU),     k(kc::MPLY)],
];

#[rustfmt::skip]
const ADJUST_PLANE: Plane<ROWS, COLS> = [
    [RESET, k(kc::F1), k(kc::F2),  k(kc::F3),  k(kc::F4),  TRNS,    TRNS,    TRNS,       TRNS, TRNS, TRNS, k(kc::DELETE)],
    [TRNS,  k(kc::F5), k(kc::F6),  k(kc::F7),  k(kc::F8),  AG_NORM, AG_SWAP, SET_QWERTY, TRNS, TRNS, TRNS, TRNS],
    [TRNS,  k(kc::F9), k(kc::F10), k(kc::F11), k(kc::F12), TRNS,    TRNS,    TRNS,       TRNS, TRNS, TRNS, TRNS],
    [TRNS,  TRNS,      TRNS,       TRNS,       TRNS,       TRNS,    TRNS,    TRNS,       TRNS, TRNS, TRNS, TRNS],
];

pub static KEYMAP: Keymap<ROWS, COLS, 4> = Keymap::new([
    LayerDef::new(QWERTY, QWERTY_PLANE),
    LayerDef::new(LOWER, LOWER_PLANE),
    LayerDef::new(RAISE, RAISE_PLANE),
    LayerDef::new(ADJUST, ADJUST_PLANE),
]);

pub const TRI_LAYERS: [TriLayer; 1] = [TriLayer::new(LOWER, RAISE, ADJUST)];

pub const SETTINGS: Settings = Settings::new();

#[cfg(test)]
#[path = "lets_split_serial_test.rs"]
mod test;

//! Noah's layout: QWERTY or Colemak base with space cadet shifts, mod-tap control keys, brace
//! taps on the alt keys and a Plover steno mode.

use layerkey_common::keycodes::{kc, mods, plover};
use layerkey_firmware::{
    dispatcher::{AppMacro, CustomKeycode, FirmwareAction},
    keymap::{custom, k, lt, m, mo, mt, s, Action, Key, Keymap, LayerDef, Plane, NO, TRNS},
    peripherals::PeripheralAction,
    settings::Settings,
    tri_layer::TriLayer,
};

use crate::{COLS, ROWS};

pub const QWERTY: u8 = 0;
pub const COLEMAK: u8 = 1;
pub const STENO: u8 = 2;
pub const LOWER: u8 = 3;
pub const RAISE: u8 = 4;
pub const NAV: u8 = 5;
pub const GUI: u8 = 6;
pub const KEYBOARD: u8 = 7;

const LWR: Action = mo(LOWER);
const RSE: Action = mo(RAISE);

const CTL_ESC: Action = mt(mods::LCTRL, k(kc::ESCAPE));
const CTL_ENT: Action = mt(mods::RCTRL, k(kc::ENTER));
const LSPO: Action = mt(mods::LSHIFT, s(kc::N9));
const RSPC: Action = mt(mods::RSHIFT, s(kc::N0));
const GUI_LBRC: Action = lt(GUI, k(kc::LBRACKET));
const GUI_RBRC: Action = lt(GUI, k(kc::RBRACKET));
const HYP_LBRC: Action = mt(mods::HYPER, k(kc::LBRACKET));
const HYP_RBRC: Action = mt(mods::HYPER, k(kc::RBRACKET));
const NAV_SCLN: Action = lt(NAV, k(kc::SCOLON));
const NAV_O: Action = lt(NAV, k(kc::O));

const LALT_BRACE: Action = custom(CustomKeycode::ModWithTap {
    mods: mods::LALT,
    tap: Key::with_mods(kc::LBRACKET, mods::LSHIFT),
});
const RALT_BRACE: Action = custom(CustomKeycode::ModWithTap {
    mods: mods::RALT,
    tap: Key::with_mods(kc::RBRACKET, mods::LSHIFT),
});

const SET_QWERTY: Action = custom(CustomKeycode::SetDefaultLayer(QWERTY));
const SET_COLEMAK: Action = custom(CustomKeycode::SetDefaultLayer(COLEMAK));
const STENO_ON: Action = custom(CustomKeycode::Steno {
    layer: STENO,
    enable: true,
});
const PV_EXIT: Action = custom(CustomKeycode::Steno {
    layer: STENO,
    enable: false,
});
const PV_LOOK: Action = custom(CustomKeycode::Macro(AppMacro::PloverLookup));
const RESET: Action = custom(CustomKeycode::Firmware(FirmwareAction::Bootloader));

const fn periph(action: PeripheralAction) -> Action {
    custom(CustomKeycode::Peripheral(action))
}

const BL_TOGG: Action = periph(PeripheralAction::BacklightToggle);

const ALT_GUI: u8 = mods::LALT | mods::LGUI;
const CTL_GUI: u8 = mods::LCTRL | mods::LGUI;
const CTL_ALT_GUI: u8 = mods::LCTRL | mods::LALT | mods::LGUI;
const SFT_CTL_GUI: u8 = mods::LSHIFT | mods::LCTRL | mods::LGUI;

#[rustfmt::skip]
const QWERTY_PLANE: Plane<ROWS, COLS> = [
    [k(kc::TAB), k(kc::Q), k(kc::W),   k(kc::E),    k(kc::R), k(kc::T),     k(kc::Y),      k(kc::U), k(kc::I),     k(kc::O),   k(kc::P),     k(kc::QUOTE)],
    [CTL_ESC,    k(kc::A), k(kc::S),   k(kc::D),    k(kc::F), k(kc::G),     k(kc::H),      k(kc::J), k(kc::K),     k(kc::L),   NAV_SCLN,     CTL_ENT],
    [LSPO,       k(kc::Z), k(kc::X),   k(kc::C),    k(kc::V), k(kc::B),     k(kc::N),      k(kc::M), k(kc::COMMA), k(kc::DOT), k(kc::SLASH), RSPC],
    [GUI_LBRC,   HYP_LBRC, LALT_BRACE, k(kc::LGUI), LWR,      k(kc::SPACE), k(kc::BSPACE), RSE,      k(kc::RGUI),  RALT_BRACE, HYP_RBRC,     GUI_RBRC],
];

#[rustfmt::skip]
const COLEMAK_PLANE: Plane<ROWS, COLS> = [
    [k(kc::TAB), k(kc::Q), k(kc::W),   k(kc::F),    k(kc::P), k(kc::G),     k(kc::J),      k(kc::L), k(kc::U),     k(kc::Y),   k(kc::SCOLON), k(kc::QUOTE)],
    [CTL_ESC,    k(kc::A), k(kc::R),   k(kc::S),    k(kc::T), k(kc::D),     k(kc::H),      k(kc::N), k(kc::E),     k(kc::I),   NAV_O,         CTL_ENT],
    [LSPO,       k(kc::Z), k(kc::X),   k(kc::C),    k(kc::V), k(kc::B),     k(kc::K),      k(kc::M), k(kc::COMMA), k(kc::DOT), k(kc::SLASH),  RSPC],
    [GUI_LBRC,   HYP_LBRC, LALT_BRACE, k(kc::LGUI), LWR,      k(kc::SPACE), k(kc::BSPACE), RSE,      k(kc::RGUI),  RALT_BRACE, HYP_RBRC,      GUI_RBRC],
];

const PV_NUM: Action = k(plover::NUM);

#[rustfmt::skip]
const STENO_PLANE: Plane<ROWS, COLS> = [
    [PV_NUM,  PV_NUM,          PV_NUM,          PV_NUM,          PV_NUM,          PV_NUM,            PV_NUM,            PV_NUM,          PV_NUM,          PV_NUM,          PV_NUM,          PV_NUM],
    [NO,      k(plover::LS),   k(plover::LT),   k(plover::LP),   k(plover::LH),   k(plover::STAR),   k(plover::STAR),   k(plover::RF),   k(plover::RP),   k(plover::RL),   k(plover::RT),   k(plover::RD)],
    [NO,      k(plover::LS),   k(plover::LK),   k(plover::LW),   k(plover::LR),   k(plover::STAR),   k(plover::STAR),   k(plover::RR),   k(plover::RB),   k(plover::RG),   k(plover::RS),   k(plover::RZ)],
    [PV_EXIT, NO,              NO,              k(plover::A),    k(plover::O),    NO,                NO,                k(plover::E),    k(plover::U),    NO,              NO,              PV_LOOK],
];

#[rustfmt::skip]
const LOWER_PLANE: Plane<ROWS, COLS> = [
    [m(mods::LGUI, kc::GRAVE), k(kc::F1),    k(kc::F2),    k(kc::F3),    k(kc::F4),     k(kc::F5),     k(kc::F6),     k(kc::F7), k(kc::F8),   k(kc::F9),  k(kc::F10), s(kc::N3)],
    [CTL_ESC,                  k(kc::N1),    k(kc::N2),    k(kc::N3),    k(kc::N4),     k(kc::N5),     k(kc::N6),     k(kc::N7), k(kc::N8),   k(kc::N9),  k(kc::N0),  CTL_ENT],
    [LSPO,                     k(kc::MINUS), k(kc::EQUAL), k(kc::GRAVE), k(kc::BSLASH), k(kc::A),      k(kc::B),      k(kc::C),  k(kc::D),    k(kc::E),   k(kc::F),   RSPC],
    [GUI_LBRC,                 HYP_LBRC,     LALT_BRACE,   k(kc::LGUI),  LWR,           k(kc::BSPACE), k(kc::BSPACE), RSE,       k(kc::RGUI), RALT_BRACE, HYP_RBRC,   GUI_RBRC],
];

#[rustfmt::skip]
const RAISE_PLANE: Plane<ROWS, COLS> = [
    [TRNS, k(kc::F11),    k(kc::F12),    k(kc::F13),    k(kc::F14),     k(kc::F15),    k(kc::F16),              k(kc::F17),                            k(kc::F18), k(kc::F19),   k(kc::F20),   s(kc::N3)],
    [TRNS, s(kc::N1),     s(kc::N2),     s(kc::N3),     s(kc::N4),      s(kc::N5),     s(kc::N6),               s(kc::N7),                             s(kc::N8),  k(kc::QUOTE), s(kc::QUOTE), TRNS],
    [TRNS, s(kc::MINUS),  s(kc::EQUAL),  s(kc::GRAVE),  s(kc::BSLASH),  NO,            m(mods::LALT, kc::MINUS), m(mods::LALT | mods::LSHIFT, kc::MINUS), NO,         NO,           NO,           TRNS],
    [TRNS, TRNS,          TRNS,          TRNS,          TRNS,           k(kc::DELETE), k(kc::DELETE),           TRNS,                                  TRNS,       TRNS,         TRNS,         TRNS],
];

#[rustfmt::skip]
const NAV_PLANE: Plane<ROWS, COLS> = [
    [NO,   NO,   NO,         NO,         NO,           NO,        NO,         NO,         NO,       NO,          NO,       NO],
    [TRNS, NO,   k(kc::HOME), k(kc::PGUP), k(kc::PGDOWN), k(kc::END), k(kc::LEFT), k(kc::DOWN), k(kc::UP), k(kc::RIGHT), NAV_SCLN, TRNS],
    [TRNS, NO,   NO,         NO,         NO,           NO,        NO,         NO,         NO,       NO,          NO,       TRNS],
    [TRNS, TRNS, TRNS,       TRNS,       NO,           NO,        NO,         NO,         TRNS,     TRNS,        TRNS,     TRNS],
];

#[rustfmt::skip]
const GUI_PLANE: Plane<ROWS, COLS> = [
    [TRNS, k(kc::BTN2),     k(kc::MS_UP),   k(kc::BTN1),     k(kc::WH_DOWN), NO,              NO,              m(CTL_ALT_GUI, kc::LEFT),  m(CTL_GUI, kc::LEFT),     m(ALT_GUI, kc::UP),   m(CTL_GUI, kc::RIGHT),     TRNS],
    [TRNS, k(kc::MS_LEFT),  k(kc::MS_DOWN), k(kc::MS_RIGHT), k(kc::WH_UP),   NO,              NO,              m(ALT_GUI, kc::F),         m(ALT_GUI, kc::LEFT),     m(ALT_GUI, kc::C),    m(ALT_GUI, kc::RIGHT),     TRNS],
    [TRNS, k(kc::WH_LEFT),  k(kc::BTN3),    k(kc::WH_RIGHT), NO,             NO,              NO,              m(CTL_ALT_GUI, kc::RIGHT), m(SFT_CTL_GUI, kc::LEFT), m(ALT_GUI, kc::DOWN), m(SFT_CTL_GUI, kc::RIGHT), TRNS],
    [TRNS, k(kc::MPRV),     k(kc::MPLY),    k(kc::MNXT),     k(kc::SCROLLLOCK), k(kc::SLEEP), k(kc::SLEEP),    k(kc::PAUSE),              k(kc::MUTE),              k(kc::VOLD),          k(kc::VOLU),               TRNS],
];

#[rustfmt::skip]
const KEYBOARD_PLANE: Plane<ROWS, COLS> = [
    [NO, RESET,                                        NO,                                           NO,                                NO,                                 NO,                               NO,                                NO,  NO,      NO,                                         NO,                                          NO],
    [NO, SET_QWERTY,                                   SET_COLEMAK,                                  STENO_ON,                          NO,                                 NO,                               NO,                                NO,  NO,      NO,                                         NO,                                          NO],
    [NO, periph(PeripheralAction::VoiceDecrease),      periph(PeripheralAction::VoiceIncrease),      periph(PeripheralAction::MusicOn), periph(PeripheralAction::MusicOff), periph(PeripheralAction::MidiOn), periph(PeripheralAction::MidiOff), NO,  NO,      periph(PeripheralAction::AudioOn),          periph(PeripheralAction::AudioOff),          NO],
    [NO, NO,                                           NO,                                           NO,                                LWR,                                BL_TOGG,                          BL_TOGG,                           RSE, BL_TOGG, periph(PeripheralAction::BacklightDecrease), periph(PeripheralAction::BacklightIncrease), NO],
];

pub static KEYMAP: Keymap<ROWS, COLS, 8> = Keymap::new([
    LayerDef::new(QWERTY, QWERTY_PLANE),
    LayerDef::new(COLEMAK, COLEMAK_PLANE),
    LayerDef::new(STENO, STENO_PLANE),
    LayerDef::new(LOWER, LOWER_PLANE),
    LayerDef::new(RAISE, RAISE_PLANE),
    LayerDef::new(NAV, NAV_PLANE),
    LayerDef::new(GUI, GUI_PLANE),
    LayerDef::new(KEYBOARD, KEYBOARD_PLANE),
]);

pub const TRI_LAYERS: [TriLayer; 1] = [TriLayer::new(LOWER, RAISE, KEYBOARD)];

pub const SETTINGS: Settings = Settings::new();

#[cfg(test)]
#[path = "lets_split_noah_test.rs"]
mod test;

pub mod key_range {
    pub const BASIC_MIN: u16 = 0x4;
    pub const BASIC_1: u16 = 0x1e;
    pub const BASIC_0: u16 = 0x27;
    pub const BASIC_MAX: u16 = 0xff;
    pub const MODIFIER_MIN: u16 = 0xe0;
    pub const MODIFIER_MAX: u16 = 0xe7;
    pub const CONSUMER_MIN: u16 = 0x100;
    pub const CONSUMER_MAX: u16 = 0x3a0;
    pub const SYS_CTL_MIN: u16 = 0x3a1;
    pub const SYS_CTL_MAX: u16 = 0x3d5;
    pub const MOUSE_MIN: u16 = 0x400;
    pub const MOUSE_MAX: u16 = MOUSE_MIN + 0xff;

    pub const SYS_CTL_BASE: u16 = 0x81;

    pub const fn is_modifier(code: u16) -> bool {
        code >= MODIFIER_MIN && code <= MODIFIER_MAX
    }

    /// The modifier mask bit for a modifier keycode; 0 for any other code.
    pub const fn modifier_bit(code: u16) -> u8 {
        if is_modifier(code) {
            1 << (code - MODIFIER_MIN)
        } else {
            0
        }
    }
}

/// Modifier masks. Bit `n` corresponds to keycode `0xe0 + n`.
pub mod mods {
    pub const LCTRL: u8 = 0x01;
    pub const LSHIFT: u8 = 0x02;
    pub const LALT: u8 = 0x04;
    pub const LGUI: u8 = 0x08;
    pub const RCTRL: u8 = 0x10;
    pub const RSHIFT: u8 = 0x20;
    pub const RALT: u8 = 0x40;
    pub const RGUI: u8 = 0x80;

    pub const HYPER: u8 = LCTRL | LSHIFT | LALT | LGUI;
}

pub mod kc {
    use super::key_range::{CONSUMER_MIN, MOUSE_MIN, SYS_CTL_MIN};

    pub const A: u16 = 0x04;
    pub const B: u16 = 0x05;
    pub const C: u16 = 0x06;
    pub const D: u16 = 0x07;
    pub const E: u16 = 0x08;
    pub const F: u16 = 0x09;
    pub const G: u16 = 0x0a;
    pub const H: u16 = 0x0b;
    pub const I: u16 = 0x0c;
    pub const J: u16 = 0x0d;
    pub const K: u16 = 0x0e;
    pub const L: u16 = 0x0f;
    pub const M: u16 = 0x10;
    pub const N: u16 = 0x11;
    pub const O: u16 = 0x12;
    pub const P: u16 = 0x13;
    pub const Q: u16 = 0x14;
    pub const R: u16 = 0x15;
    pub const S: u16 = 0x16;
    pub const T: u16 = 0x17;
    pub const U: u16 = 0x18;
    pub const V: u16 = 0x19;
    pub const W: u16 = 0x1a;
    pub const X: u16 = 0x1b;
    pub const Y: u16 = 0x1c;
    pub const Z: u16 = 0x1d;

    pub const N1: u16 = 0x1e;
    pub const N2: u16 = 0x1f;
    pub const N3: u16 = 0x20;
    pub const N4: u16 = 0x21;
    pub const N5: u16 = 0x22;
    pub const N6: u16 = 0x23;
    pub const N7: u16 = 0x24;
    pub const N8: u16 = 0x25;
    pub const N9: u16 = 0x26;
    pub const N0: u16 = 0x27;

    pub const ENTER: u16 = 0x28;
    pub const ESCAPE: u16 = 0x29;
    pub const BSPACE: u16 = 0x2a;
    pub const TAB: u16 = 0x2b;
    pub const SPACE: u16 = 0x2c;
    pub const MINUS: u16 = 0x2d;
    pub const EQUAL: u16 = 0x2e;
    pub const LBRACKET: u16 = 0x2f;
    pub const RBRACKET: u16 = 0x30;
    pub const BSLASH: u16 = 0x31;
    pub const NONUS_HASH: u16 = 0x32;
    pub const SCOLON: u16 = 0x33;
    pub const QUOTE: u16 = 0x34;
    pub const GRAVE: u16 = 0x35;
    pub const COMMA: u16 = 0x36;
    pub const DOT: u16 = 0x37;
    pub const SLASH: u16 = 0x38;
    pub const CAPSLOCK: u16 = 0x39;

    pub const F1: u16 = 0x3a;
    pub const F2: u16 = 0x3b;
    pub const F3: u16 = 0x3c;
    pub const F4: u16 = 0x3d;
    pub const F5: u16 = 0x3e;
    pub const F6: u16 = 0x3f;
    pub const F7: u16 = 0x40;
    pub const F8: u16 = 0x41;
    pub const F9: u16 = 0x42;
    pub const F10: u16 = 0x43;
    pub const F11: u16 = 0x44;
    pub const F12: u16 = 0x45;

    pub const PSCREEN: u16 = 0x46;
    pub const SCROLLLOCK: u16 = 0x47;
    pub const PAUSE: u16 = 0x48;
    pub const INSERT: u16 = 0x49;
    pub const HOME: u16 = 0x4a;
    pub const PGUP: u16 = 0x4b;
    pub const DELETE: u16 = 0x4c;
    pub const END: u16 = 0x4d;
    pub const PGDOWN: u16 = 0x4e;
    pub const RIGHT: u16 = 0x4f;
    pub const LEFT: u16 = 0x50;
    pub const DOWN: u16 = 0x51;
    pub const UP: u16 = 0x52;

    pub const NONUS_BSLASH: u16 = 0x64;
    pub const APPLICATION: u16 = 0x65;

    pub const F13: u16 = 0x68;
    pub const F14: u16 = 0x69;
    pub const F15: u16 = 0x6a;
    pub const F16: u16 = 0x6b;
    pub const F17: u16 = 0x6c;
    pub const F18: u16 = 0x6d;
    pub const F19: u16 = 0x6e;
    pub const F20: u16 = 0x6f;

    pub const LCTRL: u16 = 0xe0;
    pub const LSHIFT: u16 = 0xe1;
    pub const LALT: u16 = 0xe2;
    pub const LGUI: u16 = 0xe3;
    pub const RCTRL: u16 = 0xe4;
    pub const RSHIFT: u16 = 0xe5;
    pub const RALT: u16 = 0xe6;
    pub const RGUI: u16 = 0xe7;

    pub const MUTE: u16 = CONSUMER_MIN + 0xe2;
    pub const VOLU: u16 = CONSUMER_MIN + 0xe9;
    pub const VOLD: u16 = CONSUMER_MIN + 0xea;
    pub const MNXT: u16 = CONSUMER_MIN + 0xb5;
    pub const MPRV: u16 = CONSUMER_MIN + 0xb6;
    pub const MPLY: u16 = CONSUMER_MIN + 0xcd;
    pub const BRIU: u16 = CONSUMER_MIN + 0x6f;
    pub const BRID: u16 = CONSUMER_MIN + 0x70;

    pub const POWER: u16 = SYS_CTL_MIN;
    pub const SLEEP: u16 = SYS_CTL_MIN + 1;
    pub const WAKE: u16 = SYS_CTL_MIN + 2;

    pub const BTN1: u16 = MOUSE_MIN;
    pub const BTN2: u16 = MOUSE_MIN + 1;
    pub const BTN3: u16 = MOUSE_MIN + 2;
    pub const MS_UP: u16 = MOUSE_MIN + 8;
    pub const MS_DOWN: u16 = MOUSE_MIN + 9;
    pub const MS_LEFT: u16 = MOUSE_MIN + 10;
    pub const MS_RIGHT: u16 = MOUSE_MIN + 11;
    pub const WH_UP: u16 = MOUSE_MIN + 12;
    pub const WH_DOWN: u16 = MOUSE_MIN + 13;
    pub const WH_LEFT: u16 = MOUSE_MIN + 14;
    pub const WH_RIGHT: u16 = MOUSE_MIN + 15;
}

/// Plover steno chords as seen on a QWERTY host layout.
pub mod plover {
    use super::kc;

    pub const NUM: u16 = kc::N1;
    pub const LS: u16 = kc::Q;
    pub const LT: u16 = kc::W;
    pub const LP: u16 = kc::E;
    pub const LH: u16 = kc::R;
    pub const LK: u16 = kc::S;
    pub const LW: u16 = kc::D;
    pub const LR: u16 = kc::F;
    pub const STAR: u16 = kc::Y;
    pub const RF: u16 = kc::U;
    pub const RP: u16 = kc::I;
    pub const RL: u16 = kc::O;
    pub const RT: u16 = kc::P;
    pub const RD: u16 = kc::LBRACKET;
    pub const RR: u16 = kc::J;
    pub const RB: u16 = kc::K;
    pub const RG: u16 = kc::L;
    pub const RS: u16 = kc::SCOLON;
    pub const RZ: u16 = kc::QUOTE;
    pub const A: u16 = kc::C;
    pub const O: u16 = kc::V;
    pub const E: u16 = kc::N;
    pub const U: u16 = kc::M;
}

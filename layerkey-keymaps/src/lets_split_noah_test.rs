extern crate std;
use std::vec::Vec;

use layerkey_firmware::report::KeyEvent;

use crate::test_engine::{down, up, Harness, Reports};

use super::*;

fn chord(codes: &[u16]) -> Vec<KeyEvent> {
    codes
        .iter()
        .map(|c| down(*c))
        .chain(codes.iter().map(|c| up(*c)))
        .collect()
}

fn keyboard_layer_tap(t: &mut Harness<'_, 8>, row: u8, column: u8) {
    t.press(3, 4);
    t.press(3, 7);
    assert!(t.is_active(KEYBOARD));
    t.tap(row, column);
    t.release(3, 4);
    t.release(3, 7);
}

#[test]
fn keymap_is_valid() {
    assert_eq!(KEYMAP.validate(), Ok(()));
}

#[test]
fn space_cadet_shift() {
    let reports = Reports::default();
    let mut t = Harness::new(&KEYMAP, &TRI_LAYERS, SETTINGS, &reports);

    t.tap(2, 0);
    assert_eq!(
        t.read(),
        [
            KeyEvent::Modifiers(mods::LSHIFT, true),
            down(kc::N9),
            up(kc::N9),
            KeyEvent::Modifiers(mods::LSHIFT, false)
        ]
    );

    t.press(2, 0);
    t.wait(250);
    t.tap(1, 1);
    t.release(2, 0);
    assert_eq!(
        t.read(),
        [
            KeyEvent::Modifiers(mods::LSHIFT, true),
            down(kc::A),
            up(kc::A),
            KeyEvent::Modifiers(mods::LSHIFT, false)
        ]
    );
}

#[test]
fn alt_brace_tap_and_hold() {
    let reports = Reports::default();
    let mut t = Harness::new(&KEYMAP, &TRI_LAYERS, SETTINGS, &reports);

    t.tap(3, 2);
    assert_eq!(
        t.read(),
        [
            KeyEvent::Modifiers(mods::LALT, true),
            KeyEvent::Modifiers(mods::LALT, false),
            KeyEvent::Modifiers(mods::LSHIFT, true),
            down(kc::LBRACKET),
            up(kc::LBRACKET),
            KeyEvent::Modifiers(mods::LSHIFT, false)
        ]
    );

    t.press(3, 2);
    t.tap(1, 1);
    t.release(3, 2);
    assert_eq!(
        t.read(),
        [
            KeyEvent::Modifiers(mods::LALT, true),
            down(kc::A),
            up(kc::A),
            KeyEvent::Modifiers(mods::LALT, false)
        ]
    );
}

#[test]
fn navigation_layer_tap() {
    let reports = Reports::default();
    let mut t = Harness::new(&KEYMAP, &TRI_LAYERS, SETTINGS, &reports);

    t.press(1, 10);
    t.press(1, 6);
    assert!(t.is_active(NAV));
    t.release(1, 6);
    t.release(1, 10);
    assert!(!t.is_active(NAV));
    assert_eq!(t.read(), [down(kc::LEFT), up(kc::LEFT)]);

    t.tap(1, 10);
    assert_eq!(t.read(), [down(kc::SCOLON), up(kc::SCOLON)]);
}

#[test]
fn steno_mode() {
    let reports = Reports::default();
    let mut t = Harness::new(&KEYMAP, &TRI_LAYERS, SETTINGS, &reports);

    keyboard_layer_tap(&mut t, 1, 3);
    assert!(t.is_active(STENO));
    assert!(!t.is_active(LOWER));
    assert!(!t.is_active(KEYBOARD));
    assert_eq!(
        t.read(),
        chord(&[kc::E, kc::R, kc::F, kc::V, kc::I, kc::K])
    );

    t.tap(1, 1);
    assert_eq!(t.read(), [down(plover::LS), up(plover::LS)]);

    t.tap(3, 11);
    assert_eq!(
        t.read(),
        chord(&[kc::E, kc::R, kc::F, kc::V, kc::K, kc::L])
    );

    t.tap(3, 0);
    assert!(!t.is_active(STENO));
    assert_eq!(t.read(), chord(&[kc::E, kc::R, kc::F, kc::V, kc::U]));

    t.tap(1, 1);
    assert_eq!(t.read(), [down(kc::A), up(kc::A)]);
}

#[test]
fn colemak_default_layer() {
    let reports = Reports::default();
    let mut t = Harness::new(&KEYMAP, &TRI_LAYERS, SETTINGS, &reports);

    keyboard_layer_tap(&mut t, 1, 2);
    assert_eq!(t.engine.state().layers().default_layer(), COLEMAK);
    assert!(t.read().is_empty());

    t.tap(0, 3);
    t.tap(1, 10);
    assert_eq!(
        t.read(),
        [down(kc::F), up(kc::F), down(kc::O), up(kc::O)]
    );

    keyboard_layer_tap(&mut t, 1, 1);
    t.tap(0, 3);
    assert_eq!(t.read(), [down(kc::E), up(kc::E)]);
}

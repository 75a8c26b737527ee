use layerkey_common::keycodes::mods;
use layerkey_firmware::report::KeyEvent;

use crate::test_engine::{down, up, Harness, Reports};

use super::*;

#[test]
fn keymap_is_valid() {
    assert_eq!(KEYMAP.validate(), Ok(()));
}

#[test]
fn lower_and_raise_reach_adjust() {
    let reports = Reports::default();
    let mut t = Harness::new(&KEYMAP, &TRI_LAYERS, SETTINGS, &reports);

    t.press(3, 4);
    assert!(t.is_active(LOWER));
    t.tap(0, 1);
    assert_eq!(
        t.read(),
        [
            KeyEvent::Modifiers(mods::LSHIFT, true),
            down(kc::N1),
            up(kc::N1),
            KeyEvent::Modifiers(mods::LSHIFT, false)
        ]
    );

    t.press(3, 7);
    assert!(t.is_active(ADJUST));
    t.tap(0, 1);
    assert_eq!(t.read(), [down(kc::F1), up(kc::F1)]);

    t.release(3, 4);
    assert!(!t.is_active(ADJUST));
    assert!(t.is_active(RAISE));
    t.tap(0, 1);
    assert_eq!(t.read(), [down(kc::N1), up(kc::N1)]);

    t.release(3, 7);
    t.tap(0, 1);
    assert_eq!(t.read(), [down(kc::Q), up(kc::Q)]);
}

#[test]
fn adjust_key_alone() {
    let reports = Reports::default();
    let mut t = Harness::new(&KEYMAP, &TRI_LAYERS, SETTINGS, &reports);

    t.press(3, 0);
    assert!(t.is_active(ADJUST));
    assert!(!t.is_active(LOWER));
    t.tap(1, 1);
    t.release(3, 0);
    assert!(!t.is_active(ADJUST));
    assert_eq!(t.read(), [down(kc::F5), up(kc::F5)]);
}

#[test]
fn alt_gui_swap() {
    let reports = Reports::default();
    let mut t = Harness::new(&KEYMAP, &TRI_LAYERS, SETTINGS, &reports);

    t.press(3, 0);
    t.tap(1, 6);
    t.release(3, 0);
    assert!(t.read().is_empty());

    t.tap(3, 3);
    assert_eq!(
        t.read(),
        [
            KeyEvent::Modifiers(mods::LGUI, true),
            KeyEvent::Modifiers(mods::LGUI, false)
        ]
    );

    t.press(3, 0);
    t.tap(1, 5);
    t.release(3, 0);
    t.tap(3, 3);
    assert_eq!(
        t.read(),
        [
            KeyEvent::Modifiers(mods::LALT, true),
            KeyEvent::Modifiers(mods::LALT, false)
        ]
    );
}

#[test]
fn qwerty_key_sets_default_layer() {
    let reports = Reports::default();
    let mut t = Harness::new(&KEYMAP, &TRI_LAYERS, SETTINGS, &reports);

    t.press(3, 0);
    t.tap(1, 7);
    t.release(3, 0);
    assert_eq!(t.engine.state().layers().default_layer(), QWERTY);
    assert!(t.read().is_empty());
}

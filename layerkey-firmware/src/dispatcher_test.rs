extern crate std;
use std::vec::Vec;

use layerkey_common::keycodes::{kc, mods};

use crate::{keymap::mo, tri_layer::TriLayer};

use super::*;

#[derive(Debug, PartialEq)]
enum Call {
    Register(u16),
    Unregister(u16),
    RegisterMods(u8),
    UnregisterMods(u8),
    Tap(Key),
    Persist(u8),
    Song(Song),
    Peripheral(PeripheralAction),
    Firmware(FirmwareAction),
    SwapAltGui(bool),
}

#[derive(Default)]
struct Recorder(Vec<Call>);
impl Effects for Recorder {
    fn register(&mut self, code: u16) {
        self.0.push(Call::Register(code));
    }
    fn unregister(&mut self, code: u16) {
        self.0.push(Call::Unregister(code));
    }
    fn register_mods(&mut self, mods: u8) {
        self.0.push(Call::RegisterMods(mods));
    }
    fn unregister_mods(&mut self, mods: u8) {
        self.0.push(Call::UnregisterMods(mods));
    }
    fn tap(&mut self, key: Key) {
        self.0.push(Call::Tap(key));
    }
    fn persist_default_layer(&mut self, layer: u8) {
        self.0.push(Call::Persist(layer));
    }
    fn play_song(&mut self, song: Song) {
        self.0.push(Call::Song(song));
    }
    fn peripheral(&mut self, action: PeripheralAction) {
        self.0.push(Call::Peripheral(action));
    }
    fn firmware(&mut self, action: FirmwareAction) {
        self.0.push(Call::Firmware(action));
    }
    fn swap_alt_gui(&mut self, swap: bool) {
        self.0.push(Call::SwapAltGui(swap));
    }
}

const TAPPED: TapRecord = TapRecord {
    taps: 1,
    interrupted: false,
};

fn press(state: &mut KeyboardState, fx: &mut Recorder, action: Action) -> bool {
    handle(state, fx, &action, true, TapRecord::default())
}

fn release(state: &mut KeyboardState, fx: &mut Recorder, action: Action, record: TapRecord) -> bool {
    handle(state, fx, &action, false, record)
}

#[test]
fn plain_keys_continue() {
    let mut state = KeyboardState::default();
    let mut fx = Recorder::default();

    assert!(press(&mut state, &mut fx, Action::Key(Key::new(kc::A))));
    assert!(press(&mut state, &mut fx, Action::NoOp));
    assert!(fx.0.is_empty());
}

#[test]
fn momentary_layers_with_tri_layer() {
    let mut state = KeyboardState::default();
    state.add_tri_layer(TriLayer::new(3, 4, 16));
    let mut fx = Recorder::default();

    assert!(!press(&mut state, &mut fx, mo(3)));
    assert!(!press(&mut state, &mut fx, mo(4)));
    assert!(state.layers().is_active(16));

    assert!(!release(&mut state, &mut fx, mo(3), TapRecord::default()));
    assert!(!state.layers().is_active(16));
    assert!(state.layers().is_active(4));

    assert!(!release(&mut state, &mut fx, mo(4), TapRecord::default()));
    assert_eq!(state.layers().state(), 1);
    assert!(fx.0.is_empty());
}

#[test]
fn toggle_on_press_only() {
    let mut state = KeyboardState::default();
    let mut fx = Recorder::default();

    assert!(!press(&mut state, &mut fx, Action::LayerToggle(5)));
    assert!(!release(&mut state, &mut fx, Action::LayerToggle(5), TAPPED));
    assert!(state.layers().is_active(5));
    press(&mut state, &mut fx, Action::LayerToggle(5));
    assert!(!state.layers().is_active(5));
}

#[test]
fn set_default_layer() {
    let mut state = KeyboardState::default();
    let mut fx = Recorder::default();
    let action = Action::Custom(CustomKeycode::SetDefaultLayer(1));

    assert!(!press(&mut state, &mut fx, action));
    assert!(!release(&mut state, &mut fx, action, TAPPED));
    assert_eq!(state.layers().default_layer(), 1);
    assert_eq!(
        fx.0,
        [Call::Song(Song::DefaultLayer(1)), Call::Persist(1)]
    );

    press(&mut state, &mut fx, action);
    assert_eq!(state.layers().default_layer(), 1);
}

#[test]
fn application_macro() {
    let mut state = KeyboardState::default();
    let mut fx = Recorder::default();
    let action = Action::Custom(CustomKeycode::Macro(AppMacro::PloverLookup));

    assert!(!press(&mut state, &mut fx, action));
    assert!(!release(&mut state, &mut fx, action, TAPPED));
    assert_eq!(
        fx.0,
        [
            Call::Register(kc::E),
            Call::Register(kc::R),
            Call::Register(kc::F),
            Call::Register(kc::V),
            Call::Register(kc::K),
            Call::Register(kc::L),
            Call::Unregister(kc::E),
            Call::Unregister(kc::R),
            Call::Unregister(kc::F),
            Call::Unregister(kc::V),
            Call::Unregister(kc::K),
            Call::Unregister(kc::L),
        ]
    );
}

#[test]
fn steno_mode() {
    let mut state = KeyboardState::default();
    let mut fx = Recorder::default();
    state.layer_on(3);

    press(&mut state, &mut fx, Action::Custom(CustomKeycode::Steno { layer: 2, enable: true }));
    assert_eq!(state.layers().state(), 1 | 1 << 2);
    assert_eq!(fx.0[0], Call::Song(Song::StenoOn));
    assert_eq!(fx.0.len(), 1 + PLOVER_RESUME.len());

    fx.0.clear();
    press(&mut state, &mut fx, Action::Custom(CustomKeycode::Steno { layer: 2, enable: false }));
    assert_eq!(state.layers().state(), 1);
    assert_eq!(fx.0[0], Call::Song(Song::StenoOff));
    assert_eq!(fx.0[1], Call::Register(plover::LP));
    assert_eq!(fx.0.last(), Some(&Call::Unregister(plover::RF)));
}

#[test]
fn mod_with_tap() {
    let mut state = KeyboardState::default();
    let mut fx = Recorder::default();
    let brace = Key::with_mods(kc::LBRACKET, mods::LSHIFT);
    let action = Action::Custom(CustomKeycode::ModWithTap {
        mods: mods::LALT,
        tap: brace,
    });

    press(&mut state, &mut fx, action);
    release(&mut state, &mut fx, action, TAPPED);
    assert_eq!(
        fx.0,
        [
            Call::RegisterMods(mods::LALT),
            Call::UnregisterMods(mods::LALT),
            Call::Tap(brace)
        ]
    );

    fx.0.clear();
    press(&mut state, &mut fx, action);
    release(
        &mut state,
        &mut fx,
        action,
        TapRecord {
            taps: 1,
            interrupted: true,
        },
    );
    release(&mut state, &mut fx, action, TapRecord::default());
    assert!(!fx.0.contains(&Call::Tap(brace)));
}

#[test]
fn forwarded_actions() {
    let mut state = KeyboardState::default();
    let mut fx = Recorder::default();

    let reset = Action::Custom(CustomKeycode::Firmware(FirmwareAction::Bootloader));
    press(&mut state, &mut fx, reset);
    assert!(fx.0.is_empty());
    release(&mut state, &mut fx, reset, TAPPED);

    let backlight = Action::Custom(CustomKeycode::Peripheral(PeripheralAction::BacklightToggle));
    press(&mut state, &mut fx, backlight);
    release(&mut state, &mut fx, backlight, TAPPED);

    let swap = Action::Custom(CustomKeycode::SwapAltGui(true));
    press(&mut state, &mut fx, swap);
    release(&mut state, &mut fx, swap, TAPPED);

    assert_eq!(
        fx.0,
        [
            Call::Firmware(FirmwareAction::Bootloader),
            Call::Peripheral(PeripheralAction::BacklightToggle),
            Call::SwapAltGui(true),
        ]
    );
}

#[test]
fn music_mode_plays_scale() {
    let mut state = KeyboardState::default();
    let mut fx = Recorder::default();

    let music_on = Action::Custom(CustomKeycode::Peripheral(PeripheralAction::MusicOn));
    press(&mut state, &mut fx, music_on);
    release(&mut state, &mut fx, music_on, TAPPED);

    let music_off = Action::Custom(CustomKeycode::Peripheral(PeripheralAction::MusicOff));
    press(&mut state, &mut fx, music_off);

    assert_eq!(
        fx.0,
        [
            Call::Peripheral(PeripheralAction::MusicOn),
            Call::Song(Song::MusicScale),
            Call::Peripheral(PeripheralAction::MusicOff),
        ]
    );
}

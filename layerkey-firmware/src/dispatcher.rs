use layerkey_common::keycodes::plover;

use crate::{
    keymap::{Action, Key},
    peripherals::{PeripheralAction, Song},
    state::KeyboardState,
    tap_hold::TapRecord,
};

/// Keyboard specific keycodes. These are the only keys whose behavior is owned by the keymap
/// rather than the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CustomKeycode {
    /// Persist and switch the base layer.
    SetDefaultLayer(u8),
    Macro(AppMacro),
    /// Enter or leave stenography mode on `layer`.
    Steno { layer: u8, enable: bool },
    /// Hold `mods`; tap `tap` when released quickly without interruption.
    ModWithTap { mods: u8, tap: Key },
    SwapAltGui(bool),
    Peripheral(PeripheralAction),
    Firmware(FirmwareAction),
}
impl CustomKeycode {
    pub(crate) fn referenced_layer(&self) -> Option<u8> {
        match *self {
            CustomKeycode::SetDefaultLayer(layer) | CustomKeycode::Steno { layer, .. } => {
                Some(layer)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FirmwareAction {
    Reset,
    Bootloader,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MacroStep {
    Register(u16),
    Unregister(u16),
}

/// Fixed keystroke sequences sent to the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AppMacro {
    /// Plover chord `PHRO*PB`: resume output.
    PloverResume,
    /// Plover chord `PHRO*F`: suspend output.
    PloverSuspend,
    /// Plover chord `PHRO*BG`: open the lookup window.
    PloverLookup,
}

macro_rules! chord {
    ($($k:ident),*) => {
        &[$(MacroStep::Register(plover::$k),)* $(MacroStep::Unregister(plover::$k),)*]
    };
}

const PLOVER_RESUME: &[MacroStep] = chord!(LP, LH, LR, O, RP, RB);
const PLOVER_SUSPEND: &[MacroStep] = chord!(LP, LH, LR, O, RF);
const PLOVER_LOOKUP: &[MacroStep] = chord!(LP, LH, LR, O, RB, RG);

impl AppMacro {
    pub fn sequence(&self) -> &'static [MacroStep] {
        match self {
            AppMacro::PloverResume => PLOVER_RESUME,
            AppMacro::PloverSuspend => PLOVER_SUSPEND,
            AppMacro::PloverLookup => PLOVER_LOOKUP,
        }
    }
}

/// The side effects a key handler may request.
pub trait Effects {
    fn register(&mut self, code: u16);
    fn unregister(&mut self, code: u16);
    fn register_mods(&mut self, mods: u8);
    fn unregister_mods(&mut self, mods: u8);
    /// Press and release `key` including its weak modifiers.
    fn tap(&mut self, key: Key);
    fn persist_default_layer(&mut self, layer: u8);
    fn play_song(&mut self, song: Song);
    fn peripheral(&mut self, action: PeripheralAction);
    fn firmware(&mut self, action: FirmwareAction);
    fn swap_alt_gui(&mut self, swap: bool);
}

fn send_macro(fx: &mut impl Effects, mac: AppMacro) {
    for step in mac.sequence() {
        match *step {
            MacroStep::Register(code) => fx.register(code),
            MacroStep::Unregister(code) => fx.unregister(code),
        }
    }
}

/// Run the layer and custom behavior of `action`. Returns `false` when the key has been fully
/// handled and `true` when normal key processing should continue.
pub fn handle(
    state: &mut KeyboardState,
    fx: &mut impl Effects,
    action: &Action,
    pressed: bool,
    record: TapRecord,
) -> bool {
    match *action {
        Action::LayerMomentary(layer) => {
            if pressed {
                state.layer_on(layer);
            } else {
                state.layer_off(layer);
            }
            crate::debug!("momentary layer {} {}", layer, pressed);
            false
        }
        Action::LayerToggle(layer) => {
            if pressed {
                let on = state.layer_toggle(layer);
                crate::debug!("toggle layer {} {}", layer, on);
            }
            false
        }
        Action::Custom(custom) => {
            handle_custom(state, fx, custom, pressed, record);
            false
        }
        _ => true,
    }
}

fn handle_custom(
    state: &mut KeyboardState,
    fx: &mut impl Effects,
    custom: CustomKeycode,
    pressed: bool,
    record: TapRecord,
) {
    match custom {
        CustomKeycode::SetDefaultLayer(layer) => {
            if pressed {
                fx.play_song(Song::DefaultLayer(layer));
                fx.persist_default_layer(layer);
                state.set_default_layer(layer);
                crate::debug!("default layer {}", layer);
            }
        }
        CustomKeycode::Macro(mac) => {
            if pressed {
                send_macro(fx, mac);
            }
        }
        CustomKeycode::Steno { layer, enable } => {
            if !pressed {
                return;
            }
            if enable {
                state.clear_layers();
                fx.play_song(Song::StenoOn);
                state.layer_on(layer);
                send_macro(fx, AppMacro::PloverResume);
            } else {
                fx.play_song(Song::StenoOff);
                send_macro(fx, AppMacro::PloverSuspend);
                state.layer_off(layer);
            }
        }
        CustomKeycode::ModWithTap { mods, tap } => {
            if pressed {
                fx.register_mods(mods);
            } else {
                fx.unregister_mods(mods);
                if record.taps > 0 && !record.interrupted {
                    fx.tap(tap);
                }
            }
        }
        CustomKeycode::SwapAltGui(swap) => {
            if pressed {
                fx.swap_alt_gui(swap);
            }
        }
        CustomKeycode::Peripheral(action) => {
            if pressed {
                fx.peripheral(action);
                if action == PeripheralAction::MusicOn {
                    fx.play_song(Song::MusicScale);
                }
            }
        }
        CustomKeycode::Firmware(action) => {
            if !pressed {
                fx.firmware(action);
            }
        }
    }
}

#[cfg(test)]
#[path = "dispatcher_test.rs"]
mod test;

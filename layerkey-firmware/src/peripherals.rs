//! Cosmetic outputs: tones and indicator LEDs. Calls are fire-and-forget; there is no completion
//! signal and no error channel.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Song {
    Startup,
    Goodbye,
    /// Played when the persisted default layer changes to the given layer.
    DefaultLayer(u8),
    StenoOn,
    StenoOff,
    MusicScale,
}

/// Audio, music mode, MIDI and backlight keys. The engine only forwards these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PeripheralAction {
    AudioOn,
    AudioOff,
    MusicOn,
    MusicOff,
    MidiOn,
    MidiOff,
    VoiceIncrease,
    VoiceDecrease,
    BacklightToggle,
    BacklightIncrease,
    BacklightDecrease,
}

pub trait Peripherals {
    fn play_song(&mut self, _song: Song) {}

    /// `None` turns every layer LED off.
    fn set_layer_led(&mut self, _layer: Option<u8>) {}

    fn peripheral(&mut self, _action: PeripheralAction) {}
}

#[derive(Debug, Default)]
pub struct NoPeripherals;
impl Peripherals for NoPeripherals {}

extern crate std;
use std::vec::Vec;

use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use layerkey_firmware::{
    engine::Engine,
    keymap::Keymap,
    peripherals::NoPeripherals,
    report::{KeyEvent, ReportChannel},
    scan::{ScanKey, TimedScanKey},
    settings::Settings,
    storage::NoStore,
    tri_layer::TriLayer,
};

use crate::{COLS, ROWS};

pub type Reports = ReportChannel<NoopRawMutex, 64>;

/// Drives a keymap through the engine one switch at a time, 10ms apart.
pub struct Harness<'c, const LAYERS: usize> {
    pub engine: Engine<'c, ROWS, COLS, LAYERS, NoopRawMutex, 64, NoStore, NoPeripherals>,
    reports: &'c Reports,
    now: u64,
}

impl<'c, const LAYERS: usize> Harness<'c, LAYERS> {
    pub fn new(
        keymap: &'c Keymap<ROWS, COLS, LAYERS>,
        tri_layers: &[TriLayer],
        settings: Settings,
        reports: &'c Reports,
    ) -> Self {
        let mut engine = Engine::new(
            keymap,
            tri_layers,
            settings,
            reports,
            NoStore,
            NoPeripherals,
        );
        engine.init();
        Self {
            engine,
            reports,
            now: 1000,
        }
    }

    pub fn press(&mut self, row: u8, column: u8) {
        self.switch(row, column, true);
    }

    pub fn release(&mut self, row: u8, column: u8) {
        self.switch(row, column, false);
    }

    pub fn tap(&mut self, row: u8, column: u8) {
        self.press(row, column);
        self.release(row, column);
    }

    /// Let time pass with no switch activity.
    pub fn wait(&mut self, ms: u64) {
        self.now += ms;
        self.engine.tick(self.now);
    }

    pub fn is_active(&self, layer: u8) -> bool {
        self.engine.state().layers().is_active(layer)
    }

    /// Everything reported since the last call.
    pub fn read(&self) -> Vec<KeyEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.reports.try_receive() {
            events.push(event);
        }
        events
    }

    fn switch(&mut self, row: u8, column: u8, is_down: bool) {
        self.now += 10;
        self.engine
            .key_switch(TimedScanKey(ScanKey::new(row, column, is_down), self.now));
    }
}

pub fn down(code: u16) -> KeyEvent {
    KeyEvent::Basic(code as u8, true)
}

pub fn up(code: u16) -> KeyEvent {
    KeyEvent::Basic(code as u8, false)
}

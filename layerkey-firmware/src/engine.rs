use embassy_futures::select::{select3, Either3};
use embassy_sync::{
    blocking_mutex::raw::{NoopRawMutex, RawMutex},
    signal::Signal,
};
use embassy_time::{Instant, Timer};

use crate::{
    dispatcher::{self, Effects, FirmwareAction},
    firmware_functions,
    keymap::{Action, Key, Keymap},
    peripherals::{PeripheralAction, Peripherals, Song},
    report::{KeyEvent, Registry, ReportChannel},
    scan::{ScanChannel, TimedScanKey},
    settings::Settings,
    state::KeyboardState,
    storage::DefaultLayerStore,
    tap_hold::{Phase, Resolution, TapHold, TapRecord},
    tri_layer::TriLayer,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlMessage {
    /// Stop the run loop after playing the goodbye song and releasing everything.
    Exit,
    /// Release every key and drop all non-default layers.
    ClearAll,
}

#[derive(Default)]
pub struct ControlSignal(Signal<NoopRawMutex, ControlMessage>);
impl ControlSignal {
    pub fn exit(&self) {
        self.0.signal(ControlMessage::Exit);
    }

    pub fn clear_all(&self) {
        self.0.signal(ControlMessage::ClearAll);
    }

    async fn wait(&self) -> ControlMessage {
        self.0.wait().await
    }
}

/// Send `events` in order. Once the channel overflows the report layer has been told to release
/// everything, so the registry is cleared and the remaining events are dropped.
fn report_all<M: RawMutex, const N: usize>(
    channel: &ReportChannel<M, N>,
    registry: &mut Registry,
    events: impl IntoIterator<Item = Option<KeyEvent>>,
) {
    for event in events.into_iter().flatten() {
        if !channel.report(event) {
            registry.clear();
            return;
        }
    }
}

/// The engine's side of [Effects]: borrows only the parts of the engine a handler may touch so
/// that the keyboard state can be handed to the dispatcher at the same time.
struct EngineEffects<'a, M: RawMutex, const N: usize, S, P> {
    registry: &'a mut Registry,
    report_channel: &'a ReportChannel<M, N>,
    store: &'a mut S,
    peripherals: &'a mut P,
}

impl<M: RawMutex, const N: usize, S: DefaultLayerStore, P: Peripherals>
    EngineEffects<'_, M, N, S, P>
{
    fn send(&mut self, events: impl IntoIterator<Item = Option<KeyEvent>>) {
        report_all(self.report_channel, self.registry, events);
    }

    fn key_down(&mut self, key: Key) {
        let events = self.registry.key_down(key);
        self.send(events);
    }

    fn key_up(&mut self, key: Key) {
        let events = self.registry.key_up(key);
        self.send(events);
    }
}

impl<M: RawMutex, const N: usize, S: DefaultLayerStore, P: Peripherals> Effects
    for EngineEffects<'_, M, N, S, P>
{
    fn register(&mut self, code: u16) {
        let event = self.registry.register(code);
        self.send([event]);
    }

    fn unregister(&mut self, code: u16) {
        let event = self.registry.unregister(code);
        self.send([event]);
    }

    fn register_mods(&mut self, mods: u8) {
        let event = self.registry.register_mods(mods);
        self.send([event]);
    }

    fn unregister_mods(&mut self, mods: u8) {
        let event = self.registry.unregister_mods(mods);
        self.send([event]);
    }

    fn tap(&mut self, key: Key) {
        self.key_down(key);
        self.key_up(key);
    }

    fn persist_default_layer(&mut self, layer: u8) {
        if let Err(err) = self.store.write_default_layer(layer) {
            crate::warn!("failed to save default layer {}: {:?}", layer, err);
        }
    }

    fn play_song(&mut self, song: Song) {
        self.peripherals.play_song(song);
    }

    fn peripheral(&mut self, action: PeripheralAction) {
        self.peripherals.peripheral(action);
    }

    fn firmware(&mut self, action: FirmwareAction) {
        firmware_functions::run(action);
    }

    fn swap_alt_gui(&mut self, swap: bool) {
        self.registry.set_swap_alt_gui(swap);
    }
}

pub struct Engine<
    'c,
    const ROWS: usize,
    const COLS: usize,
    const LAYERS: usize,
    M: RawMutex,
    const REPORT_BUFFER_SIZE: usize,
    S: DefaultLayerStore,
    P: Peripherals,
> {
    keymap: &'c Keymap<ROWS, COLS, LAYERS>,
    state: KeyboardState,
    tap_hold: TapHold<ROWS, COLS>,
    registry: Registry,
    active_actions: [[Action; COLS]; ROWS],
    report_channel: &'c ReportChannel<M, REPORT_BUFFER_SIZE>,
    store: S,
    peripherals: P,
    indicator: Option<u8>,
    settings: Settings,
    now: u64,
}

impl<
        'c,
        const ROWS: usize,
        const COLS: usize,
        const LAYERS: usize,
        M: RawMutex,
        const REPORT_BUFFER_SIZE: usize,
        S: DefaultLayerStore,
        P: Peripherals,
    > Engine<'c, ROWS, COLS, LAYERS, M, REPORT_BUFFER_SIZE, S, P>
{
    pub fn new(
        keymap: &'c Keymap<ROWS, COLS, LAYERS>,
        tri_layers: &[TriLayer],
        settings: Settings,
        report_channel: &'c ReportChannel<M, REPORT_BUFFER_SIZE>,
        store: S,
        peripherals: P,
    ) -> Self {
        if let Err(err) = keymap.validate() {
            crate::warn!("keymap invalid: {:?}", err);
        }
        let mut state = KeyboardState::default();
        for tri in tri_layers {
            state.add_tri_layer(*tri);
        }
        Self {
            keymap,
            state,
            tap_hold: TapHold::new(&settings),
            registry: Registry::default(),
            active_actions: [[Action::NoOp; COLS]; ROWS],
            report_channel,
            store,
            peripherals,
            indicator: None,
            settings,
            now: 0,
        }
    }

    /// Restore the saved default layer and greet the user.
    pub fn init(&mut self) {
        if let Some(layer) = self.store.read_default_layer() {
            if self.keymap.contains_layer(layer) {
                self.state.set_default_layer(layer);
            } else {
                crate::warn!("ignoring saved default layer {}", layer);
            }
        }
        self.peripherals.play_song(Song::Startup);
        self.indicator = None;
        self.peripherals.set_layer_led(None);
    }

    pub fn state(&self) -> &KeyboardState {
        &self.state
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn store(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn peripherals(&self) -> &P {
        &self.peripherals
    }

    pub fn now(&self) -> u64 {
        self.now
    }

    pub async fn run<SM: RawMutex, const SCANNER_BUFFER_SIZE: usize>(
        &mut self,
        scan_channel: &ScanChannel<SM, SCANNER_BUFFER_SIZE>,
        control: &ControlSignal,
    ) -> ControlMessage {
        loop {
            let deadline = self.tap_hold.deadline();
            let timer = async {
                match deadline {
                    Some(at) => Timer::at(Instant::from_millis(at)).await,
                    None => core::future::pending::<()>().await,
                }
            };

            let event = select3(scan_channel.receive(), timer, control.wait()).await;

            let now = Instant::now().as_millis();

            match event {
                Either3::First(scan_key) => self.key_switch(TimedScanKey(scan_key, now)),
                Either3::Second(_) => self.tick(now),
                Either3::Third(ControlMessage::Exit) => {
                    self.shutdown();
                    return ControlMessage::Exit;
                }
                Either3::Third(ControlMessage::ClearAll) => self.clear_all(),
            }
        }
    }

    /// Feed one switch transition through the engine.
    pub fn key_switch(&mut self, key: TimedScanKey) {
        self.now = self.now.max(key.time());
        while self.tap_hold.is_queue_full() {
            crate::warn!("tap-hold queue full; forcing hold");
            self.resolve_pending(Resolution::Hold);
            self.run_queue();
        }
        let _ = self.tap_hold.enqueue(key);
        self.run_queue();
        self.update_indicator();
    }

    /// Advance the clock, turning a pending key into a hold once its tapping term has passed.
    pub fn tick(&mut self, now: u64) {
        self.now = self.now.max(now);
        while let Some(deadline) = self.tap_hold.deadline() {
            if deadline > self.now {
                break;
            }
            self.resolve_pending(Resolution::Hold);
            self.run_queue();
        }
        self.update_indicator();
    }

    pub fn shutdown(&mut self) {
        self.peripherals.play_song(Song::Goodbye);
        self.clear_all();
    }

    fn clear_all(&mut self) {
        self.tap_hold.clear();
        self.registry.clear();
        self.active_actions = [[Action::NoOp; COLS]; ROWS];
        self.state.clear_layers();
        self.report_channel.clear_reports();
        let _ = self.report_channel.report(KeyEvent::Clear);
        self.update_indicator();
    }

    fn run_queue(&mut self) {
        loop {
            if self.tap_hold.pending().is_some() {
                match self.tap_hold.evaluate() {
                    Some(resolution) => self.resolve_pending(resolution),
                    None => return,
                }
            } else if let Some(event) = self.tap_hold.pop_front() {
                self.process(event);
            } else {
                return;
            }
        }
    }

    fn resolve_pending(&mut self, resolution: Resolution) {
        let Some((row, column)) = self.tap_hold.pending() else {
            return;
        };
        let action = self.active_actions[row][column];
        crate::debug!("{:?} at {},{} is {:?}", action, row, column, resolution);
        match resolution {
            Resolution::Tap => {
                self.tap_hold.finish(Phase::TapFired);
                if let Action::ModTap { tap, .. } | Action::LayerTap { tap, .. } = action {
                    self.key_down(tap);
                }
            }
            Resolution::Hold => {
                self.tap_hold.finish(Phase::HoldFired);
                match action {
                    Action::ModTap { mods, .. } => {
                        let event = self.registry.register_mods(mods);
                        self.send([event]);
                    }
                    Action::LayerTap { layer, .. } | Action::LayerTapToggle(layer) => {
                        self.state.layer_on(layer);
                    }
                    _ => {}
                }
            }
        }
    }

    fn process(&mut self, event: TimedScanKey) {
        let (row, column) = (event.0.row(), event.0.column());
        if row >= ROWS || column >= COLS {
            crate::warn!("switch out of range {},{}", row, column);
            return;
        }

        if event.is_down() {
            let record = self.tap_hold.key_down(row, column, event.time());
            let action = self.state.layers().resolve(self.keymap, row, column);
            self.active_actions[row][column] = action;

            if action.is_dual_role() {
                self.tap_hold.start(row, column);
            } else {
                self.dispatch(&action, true, record);
            }
            return;
        }

        let action = core::mem::take(&mut self.active_actions[row][column]);
        match self.tap_hold.phase(row, column) {
            Phase::HoldFired => {
                self.tap_hold.key_up(row, column, event.time());
                self.tap_hold.set_phase(row, column, Phase::Idle);
                match action {
                    Action::ModTap { mods, .. } => {
                        let event = self.registry.unregister_mods(mods);
                        self.send([event]);
                    }
                    Action::LayerTap { layer, .. } | Action::LayerTapToggle(layer) => {
                        self.state.layer_off(layer);
                    }
                    _ => {}
                }
            }
            Phase::TapFired => {
                let record = self.tap_hold.key_up(row, column, event.time());
                self.tap_hold.set_phase(row, column, Phase::Idle);
                match action {
                    Action::ModTap { tap, .. } | Action::LayerTap { tap, .. } => self.key_up(tap),
                    Action::LayerTapToggle(layer) => {
                        if record.taps >= self.settings.tap_toggle_count {
                            self.state.layer_toggle(layer);
                            self.tap_hold.reset_taps(row, column);
                        }
                    }
                    _ => {}
                }
            }
            Phase::Pending => {
                crate::warn!("release of undecided key {},{}", row, column);
            }
            Phase::Idle => {
                let record = self.tap_hold.key_up(row, column, event.time());
                self.dispatch(&action, false, record);
            }
        }
    }

    fn dispatch(&mut self, action: &Action, pressed: bool, record: TapRecord) {
        let mut fx = EngineEffects {
            registry: &mut self.registry,
            report_channel: self.report_channel,
            store: &mut self.store,
            peripherals: &mut self.peripherals,
        };
        if !dispatcher::handle(&mut self.state, &mut fx, action, pressed, record) {
            return;
        }
        if let Action::Key(key) = *action {
            if pressed {
                fx.key_down(key);
            } else {
                fx.key_up(key);
            }
        }
    }

    fn send(&mut self, events: impl IntoIterator<Item = Option<KeyEvent>>) {
        report_all(self.report_channel, &mut self.registry, events);
    }

    fn key_down(&mut self, key: Key) {
        let events = self.registry.key_down(key);
        self.send(events);
    }

    fn key_up(&mut self, key: Key) {
        let events = self.registry.key_up(key);
        self.send(events);
    }

    fn update_indicator(&mut self) {
        let top = self.state.layers().top_layer();
        if top != self.indicator {
            self.indicator = top;
            self.peripherals.set_layer_led(top);
        }
    }
}

#[cfg(test)]
#[path = "engine_test.rs"]
mod test;

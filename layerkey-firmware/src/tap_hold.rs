use heapless::{Deque, Vec};

use crate::{
    scan::{ScanKey, TimedScanKey},
    settings::{InterruptPolicy, Settings},
};

/// Events queued while a dual-role key is undecided.
pub const QUEUE_SIZE: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    #[default]
    Idle,
    Pending,
    TapFired,
    HoldFired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Resolution {
    Tap,
    Hold,
}

/// What a key handler sees about the press it is handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapRecord {
    pub taps: u8,
    pub interrupted: bool,
}

#[derive(Debug, Clone, Copy, Default)]
struct KeyRecord {
    phase: Phase,
    down: bool,
    pressed_at: u64,
    released_at: u64,
    interrupted: bool,
    taps: u8,
}

/// Per position tap/hold bookkeeping. Only one dual-role key is pending at a time; every switch
/// event that arrives while it is pending waits in the queue until it resolves.
pub struct TapHold<const ROWS: usize, const COLS: usize> {
    records: [[KeyRecord; COLS]; ROWS],
    pending: Option<(usize, usize)>,
    queue: Deque<TimedScanKey, QUEUE_SIZE>,
    term: u64,
    policy: InterruptPolicy,
}

impl<const ROWS: usize, const COLS: usize> TapHold<ROWS, COLS> {
    pub fn new(settings: &Settings) -> Self {
        Self {
            records: [[KeyRecord::default(); COLS]; ROWS],
            pending: None,
            queue: Deque::new(),
            term: settings.tapping_term as u64,
            policy: settings.interrupt_policy,
        }
    }

    pub fn phase(&self, row: usize, column: usize) -> Phase {
        self.records
            .get(row)
            .and_then(|r| r.get(column))
            .map(|r| r.phase)
            .unwrap_or_default()
    }

    pub fn set_phase(&mut self, row: usize, column: usize, phase: Phase) {
        if let Some(rec) = self.record_mut(row, column) {
            rec.phase = phase;
        }
    }

    pub fn tap_record(&self, row: usize, column: usize) -> TapRecord {
        self.records
            .get(row)
            .and_then(|r| r.get(column))
            .map(|r| TapRecord {
                taps: r.taps,
                interrupted: r.interrupted,
            })
            .unwrap_or_default()
    }

    pub fn reset_taps(&mut self, row: usize, column: usize) {
        if let Some(rec) = self.record_mut(row, column) {
            rec.taps = 0;
        }
    }

    /// Record a press. Any other key still held counts as interrupted; keys already released
    /// lose their tap streak. A press after the tapping term since the last release also starts
    /// a new streak.
    pub fn key_down(&mut self, row: usize, column: usize, now: u64) -> TapRecord {
        for (r, keys) in self.records.iter_mut().enumerate() {
            for (c, rec) in keys.iter_mut().enumerate() {
                if r == row && c == column {
                    continue;
                }
                if rec.down {
                    rec.interrupted = true;
                } else {
                    rec.taps = 0;
                }
            }
        }

        let term = self.term;
        let Some(rec) = self.record_mut(row, column) else {
            return TapRecord::default();
        };
        if now.saturating_sub(rec.released_at) >= term {
            rec.taps = 0;
        }
        rec.down = true;
        rec.pressed_at = now;
        rec.interrupted = false;
        TapRecord {
            taps: rec.taps,
            interrupted: false,
        }
    }

    /// Record a release. A quick, uninterrupted press that did not fire as a hold adds one to
    /// the tap count; anything else resets it.
    pub fn key_up(&mut self, row: usize, column: usize, now: u64) -> TapRecord {
        let term = self.term;
        let Some(rec) = self.record_mut(row, column) else {
            return TapRecord::default();
        };
        let quick = now.saturating_sub(rec.pressed_at) < term;
        if quick && !rec.interrupted && rec.phase != Phase::HoldFired {
            rec.taps = rec.taps.saturating_add(1);
        } else {
            rec.taps = 0;
        }
        rec.down = false;
        rec.released_at = now;
        TapRecord {
            taps: rec.taps,
            interrupted: rec.interrupted,
        }
    }

    pub fn start(&mut self, row: usize, column: usize) {
        debug_assert!(self.pending.is_none());
        self.set_phase(row, column, Phase::Pending);
        self.pending = Some((row, column));
    }

    pub fn pending(&self) -> Option<(usize, usize)> {
        self.pending
    }

    /// Leave the pending state, moving the key to `phase`.
    pub fn finish(&mut self, phase: Phase) -> Option<(usize, usize)> {
        let (row, column) = self.pending.take()?;
        self.set_phase(row, column, phase);
        Some((row, column))
    }

    /// When the pending key becomes a hold if nothing else decides it first.
    pub fn deadline(&self) -> Option<u64> {
        let (row, column) = self.pending?;
        Some(self.records[row][column].pressed_at + self.term)
    }

    pub fn enqueue(&mut self, key: TimedScanKey) -> bool {
        self.queue.push_back(key).is_ok()
    }

    pub fn pop_front(&mut self) -> Option<TimedScanKey> {
        self.queue.pop_front()
    }

    pub fn is_queue_full(&self) -> bool {
        self.queue.is_full()
    }

    /// Decide the pending key from the queued events, in arrival order. Interruption is judged
    /// before the tapping term so an event stamped inside the term always wins the race with the
    /// timer.
    pub fn evaluate(&self) -> Option<Resolution> {
        let (row, column) = self.pending?;
        let pressed_at = self.records[row][column].pressed_at;
        let pending_key = ScanKey::new(row as u8, column as u8, true);
        let mut pressed: Vec<ScanKey, QUEUE_SIZE> = Vec::new();

        for event in self.queue.iter() {
            let within_term = event.time().saturating_sub(pressed_at) < self.term;
            if event.0.same_key(pending_key) {
                if event.is_down() {
                    continue;
                }
                return Some(if within_term {
                    Resolution::Tap
                } else {
                    Resolution::Hold
                });
            }
            if !within_term {
                return Some(Resolution::Hold);
            }
            if event.is_down() {
                match self.policy {
                    InterruptPolicy::AnyPress => return Some(Resolution::Hold),
                    InterruptPolicy::PressRelease => {
                        let _ = pressed.push(event.0);
                    }
                }
            } else if pressed.iter().any(|k| k.same_key(event.0)) {
                return Some(Resolution::Hold);
            }
        }
        None
    }

    pub fn clear(&mut self) {
        for keys in self.records.iter_mut() {
            for rec in keys.iter_mut() {
                *rec = KeyRecord::default();
            }
        }
        self.pending = None;
        self.queue.clear();
    }

    fn record_mut(&mut self, row: usize, column: usize) -> Option<&mut KeyRecord> {
        self.records.get_mut(row).and_then(|r| r.get_mut(column))
    }
}

#[cfg(test)]
#[path = "tap_hold_test.rs"]
mod test;

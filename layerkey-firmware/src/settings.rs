use layerkey_common::globals;

/// What makes a pending dual-role key resolve as a hold before its tapping term expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptPolicy {
    /// Any other key pressed while the dual-role key is held.
    #[default]
    AnyPress,
    /// Another key pressed and released while the dual-role key is held.
    PressRelease,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Settings {
    /// Milliseconds a dual-role key may be held and still count as a tap.
    pub tapping_term: u16,
    /// Taps of a tap-toggle key needed to toggle its layer.
    pub tap_toggle_count: u8,
    pub interrupt_policy: InterruptPolicy,
}

impl Settings {
    pub const fn new() -> Self {
        Self {
            tapping_term: globals::TAPPING_TERM_DEFAULT,
            tap_toggle_count: globals::TAPPING_TOGGLE_DEFAULT,
            interrupt_policy: InterruptPolicy::AnyPress,
        }
    }

    pub const fn with_tapping_term(mut self, tapping_term: u16) -> Self {
        self.tapping_term = tapping_term;
        self
    }

    pub const fn with_tap_toggle_count(mut self, count: u8) -> Self {
        self.tap_toggle_count = count;
        self
    }

    pub const fn with_interrupt_policy(mut self, policy: InterruptPolicy) -> Self {
        self.interrupt_policy = policy;
        self
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

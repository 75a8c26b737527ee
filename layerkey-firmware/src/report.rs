use embassy_sync::{blocking_mutex::raw::RawMutex, channel::Channel};
use layerkey_common::keycodes::{key_range, mods};

use crate::{add_bit, add_key_bit, del_bit, del_key_bit, keymap::Key, KEY_BITS_SIZE};

const MOUSE_BITS_SIZE: usize = 2;

/// Outbound messages for the HID report layer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyEvent {
    Basic(u8, bool),
    Modifiers(u8, bool),
    Consumer(u16),
    SysCtl(u16),
    Mouse(u8, bool),
    Clear,
}

pub struct ReportChannel<M: RawMutex, const N: usize>(pub(crate) Channel<M, KeyEvent, N>);
impl<M: RawMutex, const N: usize> Default for ReportChannel<M, N> {
    fn default() -> Self {
        Self(Channel::new())
    }
}
impl<M: RawMutex, const N: usize> ReportChannel<M, N> {
    pub async fn receive(&self) -> KeyEvent {
        self.0.receive().await
    }

    pub fn try_receive(&self) -> Option<KeyEvent> {
        self.0.try_receive().ok()
    }

    /// Queue `message`. If the report layer has fallen behind, drop everything queued and ask it
    /// to release all keys instead. Returns `false` when that happened; the caller must forget
    /// what it has registered.
    pub(crate) fn report(&self, message: KeyEvent) -> bool {
        if self.0.try_send(message).is_ok() {
            return true;
        }
        crate::warn!("report channel full; clearing");
        self.clear_reports();
        let _ = self.0.try_send(KeyEvent::Clear);
        false
    }

    pub(crate) fn clear_reports(&self) {
        self.0.clear();
    }
}

/// Tracks which codes are registered so that registering twice, or unregistering a code that is
/// not registered, reports nothing.
#[derive(Debug, Default)]
pub struct Registry {
    keys: [u8; KEY_BITS_SIZE],
    mods: u8,
    weak_mods: u8,
    consumer: u16,
    sys_ctl: u16,
    mouse: [u8; MOUSE_BITS_SIZE],
    swap_alt_gui: bool,
}

impl Registry {
    pub fn register(&mut self, code: u16) -> Option<KeyEvent> {
        let code = self.swap_code(code);
        match code {
            key_range::MODIFIER_MIN..=key_range::MODIFIER_MAX => {
                self.set_mods(self.mods | key_range::modifier_bit(code), self.weak_mods)
            }
            key_range::BASIC_MIN..=key_range::BASIC_MAX => {
                add_key_bit(&mut self.keys, code as u8).then_some(KeyEvent::Basic(code as u8, true))
            }
            key_range::CONSUMER_MIN..=key_range::CONSUMER_MAX => {
                let usage = code - key_range::CONSUMER_MIN;
                (self.consumer != usage).then(|| {
                    self.consumer = usage;
                    KeyEvent::Consumer(usage)
                })
            }
            key_range::SYS_CTL_MIN..=key_range::SYS_CTL_MAX => {
                let usage = code - key_range::SYS_CTL_MIN + key_range::SYS_CTL_BASE;
                (self.sys_ctl != usage).then(|| {
                    self.sys_ctl = usage;
                    KeyEvent::SysCtl(usage)
                })
            }
            key_range::MOUSE_MIN..=key_range::MOUSE_MAX => {
                let n = (code - key_range::MOUSE_MIN) as u8;
                add_bit::<MOUSE_BITS_SIZE>(&mut self.mouse, n).then_some(KeyEvent::Mouse(n, true))
            }
            _ => None,
        }
    }

    pub fn unregister(&mut self, code: u16) -> Option<KeyEvent> {
        let code = self.swap_code(code);
        match code {
            key_range::MODIFIER_MIN..=key_range::MODIFIER_MAX => {
                self.set_mods(self.mods & !key_range::modifier_bit(code), self.weak_mods)
            }
            key_range::BASIC_MIN..=key_range::BASIC_MAX => del_key_bit(&mut self.keys, code as u8)
                .then_some(KeyEvent::Basic(code as u8, false)),
            key_range::CONSUMER_MIN..=key_range::CONSUMER_MAX => {
                let usage = code - key_range::CONSUMER_MIN;
                (self.consumer == usage).then(|| {
                    self.consumer = 0;
                    KeyEvent::Consumer(0)
                })
            }
            key_range::SYS_CTL_MIN..=key_range::SYS_CTL_MAX => {
                let usage = code - key_range::SYS_CTL_MIN + key_range::SYS_CTL_BASE;
                (self.sys_ctl == usage).then(|| {
                    self.sys_ctl = 0;
                    KeyEvent::SysCtl(0)
                })
            }
            key_range::MOUSE_MIN..=key_range::MOUSE_MAX => {
                let n = (code - key_range::MOUSE_MIN) as u8;
                del_bit::<MOUSE_BITS_SIZE>(&mut self.mouse, n).then_some(KeyEvent::Mouse(n, false))
            }
            _ => None,
        }
    }

    pub fn register_mods(&mut self, mods: u8) -> Option<KeyEvent> {
        let mods = self.swap_mask(mods);
        self.set_mods(self.mods | mods, self.weak_mods)
    }

    pub fn unregister_mods(&mut self, mods: u8) -> Option<KeyEvent> {
        let mods = self.swap_mask(mods);
        self.set_mods(self.mods & !mods, self.weak_mods)
    }

    /// Weak modifiers are held only for the lifetime of the key that asked for them, without
    /// disturbing a physically held modifier of the same kind.
    pub fn add_weak_mods(&mut self, mods: u8) -> Option<KeyEvent> {
        let mods = self.swap_mask(mods);
        self.set_mods(self.mods, self.weak_mods | mods)
    }

    pub fn del_weak_mods(&mut self, mods: u8) -> Option<KeyEvent> {
        let mods = self.swap_mask(mods);
        self.set_mods(self.mods, self.weak_mods & !mods)
    }

    pub fn key_down(&mut self, key: Key) -> [Option<KeyEvent>; 2] {
        [self.add_weak_mods(key.mods), self.register(key.code)]
    }

    pub fn key_up(&mut self, key: Key) -> [Option<KeyEvent>; 2] {
        [self.unregister(key.code), self.del_weak_mods(key.mods)]
    }

    pub fn modifiers(&self) -> u8 {
        self.mods | self.weak_mods
    }

    pub fn is_registered(&self, code: u16) -> bool {
        let code = self.swap_code(code);
        match code {
            key_range::MODIFIER_MIN..=key_range::MODIFIER_MAX => {
                self.mods & key_range::modifier_bit(code) != 0
            }
            key_range::BASIC_MIN..=key_range::BASIC_MAX => {
                self.keys[(code >> 3) as usize] & (1 << (code & 7)) != 0
            }
            key_range::CONSUMER_MIN..=key_range::CONSUMER_MAX => {
                self.consumer == code - key_range::CONSUMER_MIN
            }
            _ => false,
        }
    }

    pub fn set_swap_alt_gui(&mut self, swap: bool) {
        self.swap_alt_gui = swap;
    }

    pub fn swap_alt_gui(&self) -> bool {
        self.swap_alt_gui
    }

    pub fn clear(&mut self) {
        let swap_alt_gui = self.swap_alt_gui;
        *self = Self::default();
        self.swap_alt_gui = swap_alt_gui;
    }

    fn set_mods(&mut self, mods: u8, weak_mods: u8) -> Option<KeyEvent> {
        let before = self.mods | self.weak_mods;
        self.mods = mods;
        self.weak_mods = weak_mods;
        let after = mods | weak_mods;
        let added = after & !before;
        let removed = before & !after;
        if added != 0 {
            Some(KeyEvent::Modifiers(added, true))
        } else if removed != 0 {
            Some(KeyEvent::Modifiers(removed, false))
        } else {
            None
        }
    }

    fn swap_code(&self, code: u16) -> u16 {
        if !self.swap_alt_gui || !key_range::is_modifier(code) {
            return code;
        }
        let bit = self.swap_mask(key_range::modifier_bit(code));
        key_range::MODIFIER_MIN + bit.trailing_zeros() as u16
    }

    fn swap_mask(&self, m: u8) -> u8 {
        if !self.swap_alt_gui {
            return m;
        }
        let alt = m & (mods::LALT | mods::RALT);
        let gui = m & (mods::LGUI | mods::RGUI);
        (m & !(alt | gui)) | (alt << 1) | (gui >> 1)
    }
}

#[cfg(test)]
#[path = "report_test.rs"]
mod test;

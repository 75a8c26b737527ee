use heapless::Vec;
use layerkey_common::globals::MAX_LAYER_ID;

use crate::keymap::{Action, Keymap};

const LAYER_SLOTS: usize = MAX_LAYER_ID as usize + 1;

/// The set of active layers. Membership is a bit mask; resolution priority is activation order
/// with the most recently activated layer on top. The default layer sits below every other layer
/// and can be swapped but never removed.
#[derive(Debug, Clone, Default)]
pub struct LayerStack {
    active: u32,
    order: Vec<u8, LAYER_SLOTS>,
    default_layer: u8,
}

impl LayerStack {
    pub fn new(default_layer: u8) -> Self {
        let mut stack = Self::default();
        stack.set_default(default_layer);
        stack
    }

    pub fn default_layer(&self) -> u8 {
        self.default_layer
    }

    pub fn set_default(&mut self, layer: u8) -> bool {
        if layer > MAX_LAYER_ID {
            crate::warn!("default layer out of range {}", layer);
            return false;
        }
        self.default_layer = layer;
        true
    }

    pub fn is_active(&self, layer: u8) -> bool {
        layer == self.default_layer || (layer <= MAX_LAYER_ID && self.active & (1 << layer) != 0)
    }

    /// Add `layer` to the active set, or move it to the top if already active.
    pub fn activate(&mut self, layer: u8) -> bool {
        if layer > MAX_LAYER_ID {
            crate::warn!("layer out of range {}", layer);
            return false;
        }
        self.remove_from_order(layer);
        // order can never be full here: it holds at most one entry per layer id
        let _ = self.order.push(layer);
        self.active |= 1 << layer;
        true
    }

    /// Remove `layer` from the active set. The default layer stays present regardless.
    pub fn deactivate(&mut self, layer: u8) -> bool {
        if layer > MAX_LAYER_ID || self.active & (1 << layer) == 0 {
            return false;
        }
        self.remove_from_order(layer);
        self.active &= !(1 << layer);
        true
    }

    /// Flip `layer`'s membership; returns the new state.
    pub fn toggle(&mut self, layer: u8) -> bool {
        if layer <= MAX_LAYER_ID && self.active & (1 << layer) != 0 {
            self.deactivate(layer);
            false
        } else {
            self.activate(layer)
        }
    }

    /// Drop every layer except the default one.
    pub fn clear(&mut self) {
        self.order.clear();
        self.active = 0;
    }

    /// Bit mask of every active layer including the default layer.
    pub fn state(&self) -> u32 {
        self.active | (1 << self.default_layer)
    }

    /// The highest numbered layer activated on top of the default layer.
    pub fn top_layer(&self) -> Option<u8> {
        if self.active == 0 {
            None
        } else {
            Some(31 - self.active.leading_zeros() as u8)
        }
    }

    /// Layers in resolution order: most recently activated first, the default layer last.
    pub fn priority(&self) -> impl Iterator<Item = u8> + '_ {
        self.order
            .iter()
            .rev()
            .copied()
            .filter(|l| *l != self.default_layer)
            .chain(core::iter::once(self.default_layer))
    }

    /// The live action at a position: the first non-transparent entry walking down the priority
    /// order. A transparent (or missing) entry on the default layer resolves to `NoOp`.
    pub fn resolve<const ROWS: usize, const COLS: usize, const LAYERS: usize>(
        &self,
        keymap: &Keymap<ROWS, COLS, LAYERS>,
        row: usize,
        column: usize,
    ) -> Action {
        for layer in self.priority() {
            match keymap.get(layer, row, column) {
                Some(Action::Transparent) | None => {}
                Some(action) => return action,
            }
        }
        Action::NoOp
    }

    fn remove_from_order(&mut self, layer: u8) {
        if let Some(i) = self.order.iter().position(|l| *l == layer) {
            self.order.remove(i);
        }
    }
}

#[cfg(test)]
#[path = "layer_stack_test.rs"]
mod test;

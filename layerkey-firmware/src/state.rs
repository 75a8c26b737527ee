use heapless::Vec;

use crate::{layer_stack::LayerStack, tri_layer::TriLayer};

pub const MAX_TRI_LAYERS: usize = 4;

/// Everything a key handler may change, passed explicitly rather than held in globals.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    layers: LayerStack,
    tri_layers: Vec<TriLayer, MAX_TRI_LAYERS>,
}

impl KeyboardState {
    pub fn new(default_layer: u8) -> Self {
        Self {
            layers: LayerStack::new(default_layer),
            tri_layers: Vec::new(),
        }
    }

    pub fn add_tri_layer(&mut self, tri: TriLayer) -> bool {
        if self.tri_layers.push(tri).is_err() {
            crate::warn!("too many tri-layers");
            return false;
        }
        tri.update(&mut self.layers);
        true
    }

    pub fn tri_layers(&self) -> &[TriLayer] {
        &self.tri_layers
    }

    pub fn layers(&self) -> &LayerStack {
        &self.layers
    }

    pub fn layers_mut(&mut self) -> &mut LayerStack {
        &mut self.layers
    }

    pub fn layer_on(&mut self, layer: u8) {
        self.layers.activate(layer);
        self.update_tri_layers(layer);
    }

    pub fn layer_off(&mut self, layer: u8) {
        self.layers.deactivate(layer);
        self.update_tri_layers(layer);
    }

    pub fn layer_toggle(&mut self, layer: u8) -> bool {
        let on = self.layers.toggle(layer);
        self.update_tri_layers(layer);
        on
    }

    pub fn set_default_layer(&mut self, layer: u8) -> bool {
        self.layers.set_default(layer)
    }

    pub fn clear_layers(&mut self) {
        self.layers.clear();
    }

    fn update_tri_layers(&mut self, layer: u8) {
        for tri in self.tri_layers.iter().filter(|t| t.involves(layer)) {
            tri.update(&mut self.layers);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn tri_layer_follows_layer_changes() {
        let mut state = KeyboardState::default();
        assert!(state.add_tri_layer(TriLayer::new(3, 4, 16)));

        state.layer_on(3);
        assert!(!state.layers().is_active(16));
        state.layer_on(4);
        assert!(state.layers().is_active(16));
        assert_eq!(state.layers().top_layer(), Some(16));

        state.layer_off(3);
        assert!(!state.layers().is_active(16));

        assert!(state.layer_toggle(3));
        assert!(state.layers().is_active(16));
        assert!(!state.layer_toggle(4));
        assert!(!state.layers().is_active(16));
    }

    #[test]
    fn unrelated_layers_leave_combined_alone() {
        let mut state = KeyboardState::new(0);
        state.add_tri_layer(TriLayer::new(3, 4, 16));

        state.layer_on(16);
        state.layer_on(5);
        assert!(state.layers().is_active(16));

        state.clear_layers();
        assert_eq!(state.layers().state(), 1);
        assert!(state.set_default_layer(2));
        assert_eq!(state.layers().state(), 1 << 2);
    }
}

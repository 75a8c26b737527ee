use crate::layer_stack::LayerStack;

/// A layer whose activation is derived as `a AND b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TriLayer {
    pub a: u8,
    pub b: u8,
    pub combined: u8,
}

impl TriLayer {
    pub const fn new(a: u8, b: u8, combined: u8) -> Self {
        Self { a, b, combined }
    }

    pub fn involves(&self, layer: u8) -> bool {
        layer == self.a || layer == self.b
    }

    /// Set `combined` active iff both `a` and `b` are, overriding any explicit activation.
    pub fn update(&self, layers: &mut LayerStack) {
        if layers.is_active(self.a) && layers.is_active(self.b) {
            if !layers.is_active(self.combined) {
                layers.activate(self.combined);
            }
        } else {
            layers.deactivate(self.combined);
        }
    }
}

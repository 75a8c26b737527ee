use layerkey_common::{globals::MAX_LAYER_ID, keycodes::mods};

use crate::dispatcher::CustomKeycode;

/// A keycode plus the weak modifiers to hold while it is registered, e.g. shift + `1` for `!`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Key {
    pub code: u16,
    pub mods: u8,
}
impl Key {
    pub const fn new(code: u16) -> Self {
        Self { code, mods: 0 }
    }

    pub const fn with_mods(code: u16, mods: u8) -> Self {
        Self { code, mods }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    Key(Key),
    /// Defer to the next lower priority active layer.
    Transparent,
    #[default]
    NoOp,
    ModTap {
        mods: u8,
        tap: Key,
    },
    LayerTap {
        layer: u8,
        tap: Key,
    },
    /// Momentary while held, toggles the layer after enough taps.
    LayerTapToggle(u8),
    LayerToggle(u8),
    LayerMomentary(u8),
    Custom(CustomKeycode),
}
impl Action {
    pub fn is_dual_role(&self) -> bool {
        matches!(
            self,
            Action::ModTap { .. } | Action::LayerTap { .. } | Action::LayerTapToggle(_)
        )
    }

    fn referenced_layer(&self) -> Option<u8> {
        match *self {
            Action::LayerTap { layer, .. }
            | Action::LayerTapToggle(layer)
            | Action::LayerToggle(layer)
            | Action::LayerMomentary(layer) => Some(layer),
            Action::Custom(custom) => custom.referenced_layer(),
            _ => None,
        }
    }
}

pub const TRNS: Action = Action::Transparent;
pub const NO: Action = Action::NoOp;

pub const fn k(code: u16) -> Action {
    Action::Key(Key::new(code))
}

/// `code` with left shift held.
pub const fn s(code: u16) -> Action {
    m(mods::LSHIFT, code)
}

pub const fn m(mods: u8, code: u16) -> Action {
    Action::Key(Key::with_mods(code, mods))
}

pub const fn mo(layer: u8) -> Action {
    Action::LayerMomentary(layer)
}

pub const fn tg(layer: u8) -> Action {
    Action::LayerToggle(layer)
}

pub const fn tt(layer: u8) -> Action {
    Action::LayerTapToggle(layer)
}

pub const fn mt(mods: u8, tap: Action) -> Action {
    match tap {
        Action::Key(tap) => Action::ModTap { mods, tap },
        _ => Action::NoOp,
    }
}

pub const fn lt(layer: u8, tap: Action) -> Action {
    match tap {
        Action::Key(tap) => Action::LayerTap { layer, tap },
        _ => Action::NoOp,
    }
}

pub const fn custom(code: CustomKeycode) -> Action {
    Action::Custom(code)
}

pub type Plane<const ROWS: usize, const COLS: usize> = [[Action; COLS]; ROWS];

#[derive(Debug, Clone, Copy)]
pub struct LayerDef<const ROWS: usize, const COLS: usize> {
    id: u8,
    plane: Plane<ROWS, COLS>,
}
impl<const ROWS: usize, const COLS: usize> LayerDef<ROWS, COLS> {
    pub const fn new(id: u8, plane: Plane<ROWS, COLS>) -> Self {
        Self { id, plane }
    }

    pub fn id(&self) -> u8 {
        self.id
    }
}

#[derive(Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeymapError {
    DuplicateLayer(u8),
    LayerOutOfRange(u8),
    MissingBaseLayer,
    TransparentBase { row: usize, column: usize },
    UnknownLayer { layer: u8, row: usize, column: usize },
}

/// A static, fully dense table of actions. Every defined layer has an action for every
/// position; layer ids need not be contiguous.
#[derive(Debug)]
pub struct Keymap<const ROWS: usize, const COLS: usize, const LAYERS: usize> {
    layers: [LayerDef<ROWS, COLS>; LAYERS],
}

impl<const ROWS: usize, const COLS: usize, const LAYERS: usize> Keymap<ROWS, COLS, LAYERS> {
    pub const fn new(layers: [LayerDef<ROWS, COLS>; LAYERS]) -> Self {
        Self { layers }
    }

    pub fn layer(&self, id: u8) -> Option<&Plane<ROWS, COLS>> {
        self.layers.iter().find(|l| l.id == id).map(|l| &l.plane)
    }

    pub fn contains_layer(&self, id: u8) -> bool {
        self.layer(id).is_some()
    }

    pub fn layer_ids(&self) -> impl Iterator<Item = u8> + '_ {
        self.layers.iter().map(|l| l.id)
    }

    pub fn get(&self, layer: u8, row: usize, column: usize) -> Option<Action> {
        self.layer(layer)
            .and_then(|plane| plane.get(row))
            .and_then(|r| r.get(column))
            .copied()
    }

    /// Check the configuration invariants. Errors here degrade at run time rather than abort:
    /// unknown layers resolve as absent and a transparent base entry resolves to `NoOp`.
    pub fn validate(&self) -> Result<(), KeymapError> {
        let mut seen = 0u32;
        for layer in self.layers.iter() {
            if layer.id > MAX_LAYER_ID {
                return Err(KeymapError::LayerOutOfRange(layer.id));
            }
            let bit = 1 << layer.id;
            if seen & bit != 0 {
                return Err(KeymapError::DuplicateLayer(layer.id));
            }
            seen |= bit;
        }

        let Some(base) = self.layer(0) else {
            return Err(KeymapError::MissingBaseLayer);
        };
        for (row, r) in base.iter().enumerate() {
            if let Some(column) = r.iter().position(|a| *a == Action::Transparent) {
                return Err(KeymapError::TransparentBase { row, column });
            }
        }

        for layer in self.layers.iter() {
            for (row, r) in layer.plane.iter().enumerate() {
                for (column, action) in r.iter().enumerate() {
                    if let Some(id) = action.referenced_layer() {
                        if id > MAX_LAYER_ID || seen & (1 << id) == 0 {
                            return Err(KeymapError::UnknownLayer {
                                layer: id,
                                row,
                                column,
                            });
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "keymap_test.rs"]
mod test;

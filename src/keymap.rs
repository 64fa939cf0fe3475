//! Layer tables and layer state.
//!
//! Every board carries the same four layers: base, navigation/numbers,
//! symbols, and function.  A keymap is a fixed table indexed by (layer,
//! position); layer state is a bitmask with the base layer always active.

use crate::keys::{Key, LAYERS};
use crate::Mods;

pub mod kyria;
pub mod piantor;

/// A keymap: one `Key` per physical position, per layer.
#[derive(Clone, Copy)]
pub struct Keymap<const N: usize> {
    layers: &'static [[Key; N]; LAYERS],
}

impl<const N: usize> Keymap<N> {
    pub const fn new(layers: &'static [[Key; N]; LAYERS]) -> Self {
        Keymap { layers }
    }

    /// The key at a single layer and position.  Out-of-range positions are
    /// unmapped.
    pub fn get(&self, layer: u8, pos: u8) -> Key {
        match self.layers.get(layer as usize) {
            Some(table) => table.get(pos as usize).copied().unwrap_or(Key::None),
            None => Key::None,
        }
    }

    /// Resolve a position through the active layers, honoring transparency.
    pub fn resolve(&self, state: LayerState, pos: u8) -> Key {
        for layer in (0..LAYERS as u8).rev() {
            if !state.is_active(layer) {
                continue;
            }
            match self.get(layer, pos) {
                Key::Transparent => continue,
                key => return key,
            }
        }
        Key::None
    }
}

/// Which layers are active.  The base layer always is.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LayerState(u8);

impl Default for LayerState {
    fn default() -> Self {
        LayerState(1)
    }
}

impl LayerState {
    pub fn is_active(self, layer: u8) -> bool {
        self.0 & (1 << layer) != 0
    }

    /// Turn a momentary layer on or off.  The base layer can't be turned off.
    pub fn set(&mut self, layer: u8, on: bool) {
        if on {
            self.0 |= 1 << layer;
        } else if layer != 0 {
            self.0 &= !(1 << layer);
        }
    }

    /// Holding both `lower` and `raise` activates `adjust`.
    pub fn update_tri_layer(&mut self, lower: u8, raise: u8, adjust: u8) {
        let on = self.is_active(lower) && self.is_active(raise);
        self.set(adjust, on);
    }

    /// The highest active layer.
    pub fn highest(self) -> u8 {
        7 - self.0.leading_zeros() as u8
    }
}

/// A key override: while `trigger_mods` are held, `trigger` types
/// `replacement` instead, with the trigger mods suppressed.
#[derive(Clone, Copy, Debug)]
pub struct Override {
    pub trigger_mods: Mods,
    pub trigger: Key,
    pub replacement: Key,
}

impl Override {
    pub const fn shifted(trigger: Key, replacement: Key) -> Self {
        Override {
            trigger_mods: Mods::SHIFT,
            trigger,
            replacement,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swiss;

    #[test]
    fn layer_state_basics() {
        let mut state = LayerState::default();
        assert!(state.is_active(0));
        assert_eq!(state.highest(), 0);

        state.set(2, true);
        assert_eq!(state.highest(), 2);
        state.set(2, false);
        assert_eq!(state.highest(), 0);

        // The base layer stays on no matter what.
        state.set(0, false);
        assert!(state.is_active(0));
    }

    #[test]
    fn tri_layer() {
        let mut state = LayerState::default();
        state.set(1, true);
        state.update_tri_layer(1, 2, 3);
        assert!(!state.is_active(3));

        state.set(2, true);
        state.update_tri_layer(1, 2, 3);
        assert!(state.is_active(3));
        assert_eq!(state.highest(), 3);

        state.set(1, false);
        state.update_tri_layer(1, 2, 3);
        assert!(!state.is_active(3));
    }

    #[test]
    fn transparent_falls_through() {
        let keymap = piantor::keymap();
        let mut state = LayerState::default();
        state.set(3, true);

        // Thumb keys are transparent everywhere above the base layer.
        assert_eq!(keymap.resolve(state, 38), swiss::SPC);
    }
}

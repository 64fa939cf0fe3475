//! splitkb Kyria rev3.
//!
//! 50 keys, flat-indexed row by row across both halves.  The third row has
//! the four extra keys around the rotation cluster (all unused here), the
//! bottom row is the ten thumb keys.  Two rotary encoders, one per half.

use crate::keymap::{Keymap, Override};
use crate::keys::{media, Key, LAYERS};
use crate::swiss::*;
use crate::Side;

pub const NKEYS: usize = 50;

/// Lower and raise held together give the function layer.
pub const TRI_LAYER: (u8, u8, u8) = (1, 2, 3);

/// Banner line for the master-half OLED.
pub const OLED_BANNER: &str = "Kyria rev3.0";

const L1: Key = Key::Layer(1);
const L2: Key = Key::Layer(2);
const SNK: Key = Key::Unicode('🐍');
const TMB: Key = Key::Unicode('👍');

#[rustfmt::skip]
static KEYMAP: [[Key; NKEYS]; LAYERS] = [
    // Base
    [
        LALT, Q,    W,    E,    R,    T,                            Z,    U,    I,    O,    P,    LALT,
        LSFT, A,    S,    D,    F,    G,                            H,    J,    K,    L,    SLSH, RSFT,
        LCTL, Y,    X,    C,    V,    B,    XX,   XX,   XX,   XX,   N,    M,    COMM, DOT,  MINS, LCTL,
                          LGUI, ESC,  L2,   SPC,  TAB,  BSPC, ENT,  L1,   DEL,  LGUI,
    ],
    // Navigation and numbers
    [
        __,   ADIA, N7,   N8,   N9,   XX,                           HOME, PGDN, PGUP, END,  INS,  __,
        __,   ODIA, N4,   N5,   N6,   N0,                           LEFT, DOWN, UP,   RGHT, BSPC, __,
        __,   UDIA, N1,   N2,   N3,   XX,   __,   __,   __,   __,   XX,   XX,   __,   __,   __,   __,
                          __,   __,   __,   __,   __,   __,   __,   __,   __,   __,
    ],
    // Symbols
    [
        __,   DEG,  QUES, LCBR, RCBR, INVQ,                         CIRC, LPRN, RPRN, DLR,  XX,   __,
        __,   PIPE, AT,   AMPR, HASH, PERC,                         PLUS, ASTR, EQL,  QUOT, DQUO, __,
        __,   DIAE, EXLM, LABK, RABK, INVE, __,   __,   __,   __,   TILD, LBRC, RBRC, ACUT, GRV,  __,
                          __,   __,   __,   __,   __,   __,   __,   __,   __,   __,
    ],
    // Function and media
    [
        __,   SNK,  F7,   F8,   F9,   F10,                          XX,   BRID, BRIU, XX,   XX,   __,
        __,   TMB,  F4,   F5,   F6,   F11,                          MPRV, VOLD, VOLU, MNXT, XX,   __,
        __,   XX,   F1,   F2,   F3,   F12,  __,   __,   __,   __,   XX,   MPLY, XX,   XX,   XX,   __,
                          __,   __,   __,   __,   __,   __,   __,   __,   __,   __,
    ],
];

pub fn keymap() -> Keymap<NKEYS> {
    Keymap::new(&KEYMAP)
}

/// Shift turns slash into backslash.
pub static OVERRIDES: &[Override] = &[Override::shifted(SLSH, BSLS)];

/// The rotary encoders: volume on the left half, page up/down on the right.
pub fn encoder_update(side: Side, clockwise: bool) -> Key {
    match (side, clockwise) {
        (Side::Left, true) => Key::Consumer(media::VOLUME_UP),
        (Side::Left, false) => Key::Consumer(media::VOLUME_DOWN),
        (Side::Right, true) => PGDN,
        (Side::Right, false) => PGUP,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::LayerState;

    #[test]
    fn base_layer_shape() {
        let keymap = keymap();
        let state = LayerState::default();
        assert_eq!(keymap.resolve(state, 1), Q);
        assert_eq!(keymap.resolve(state, 42), L2);
        // Out of range is unmapped, not a panic.
        assert_eq!(keymap.get(0, 200), Key::None);
    }

    #[test]
    fn encoders() {
        assert_eq!(encoder_update(Side::Left, true), VOLU);
        assert_eq!(encoder_update(Side::Right, false), PGUP);
    }
}

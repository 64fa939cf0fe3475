//! beekeeb Piantor, split 3x6+3.
//!
//! 42 keys, flat-indexed row by row, left half then right half, thumbs last.

use usbd_human_interface_device::page::Keyboard;

use crate::keymap::{Keymap, Override};
use crate::keys::{Key, LAYERS};
use crate::swiss::*;
use crate::Mods;

pub const NKEYS: usize = 42;

/// Lower and raise held together give the function layer.
pub const TRI_LAYER: (u8, u8, u8) = (1, 2, 3);

const L1: Key = Key::Layer(1);
/// Tap for Tab, hold for the symbol layer.
const TAB_L2: Key = Key::LayerTap(2, Keyboard::Tab);
/// Gui+L locks the screen.
const LOCK: Key = Key::Chord(Keyboard::L, Mods::GUI);
const SNK: Key = Key::Unicode('🐍');
const TMB: Key = Key::Unicode('👍');

#[rustfmt::skip]
static KEYMAP: [[Key; NKEYS]; LAYERS] = [
    // Base
    [
        LALT, Q,    W,    E,    R,    T,        Z,    U,    I,    O,    P,    LALT,
        LSFT, A,    S,    D,    F,    G,        H,    J,    K,    L,    SLSH, RSFT,
        LCTL, Y,    X,    C,    V,    B,        N,    M,    COMM, DOT,  MINS, LCTL,
                    ESC,  TAB_L2, SPC,          ENT,  L1,   BSPC,
    ],
    // Navigation and numbers
    [
        __,   ADIA, N7,   N8,   N9,   LGUI,     HOME, PGDN, PGUP, END,  INS,  __,
        __,   ODIA, N4,   N5,   N6,   N0,       LEFT, DOWN, UP,   RGHT, BSPC, __,
        __,   UDIA, N1,   N2,   N3,   LOCK,     XX,   XX,   __,   __,   __,   __,
                    __,   __,   __,             __,   __,   __,
    ],
    // Symbols
    [
        __,   DEG,  QUES, LCBR, RCBR, INVQ,     CIRC, LPRN, RPRN, DLR,  XX,   __,
        __,   PIPE, AT,   AMPR, HASH, PERC,     PLUS, ASTR, EQL,  QUOT, DQUO, __,
        __,   DIAE, EXLM, LABK, RABK, INVE,     TILD, LBRC, RBRC, ACUT, GRV,  __,
                    __,   __,   __,             __,   __,   __,
    ],
    // Function and media
    [
        __,   SNK,  F7,   F8,   F9,   F10,      XX,   BRID, BRIU, XX,   XX,   __,
        __,   TMB,  F4,   F5,   F6,   F11,      MPRV, VOLD, VOLU, MNXT, XX,   __,
        __,   XX,   F1,   F2,   F3,   F12,      XX,   MPLY, XX,   XX,   XX,   __,
                    __,   __,   __,             __,   __,   __,
    ],
];

pub fn keymap() -> Keymap<NKEYS> {
    Keymap::new(&KEYMAP)
}

/// Shift turns slash into backslash and backspace into delete.
pub static OVERRIDES: &[Override] = &[
    Override::shifted(SLSH, BSLS),
    Override::shifted(BSPC, DEL),
];

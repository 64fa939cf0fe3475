//! The Swiss German (QWERTZ) host layout.
//!
//! The host interprets our scancodes through its own layout, so the layer
//! tables have to speak Swiss German: Y and Z swap places, the umlauts sit on
//! the US bracket/semicolon/quote positions, and most symbols are chords with
//! Shift or AltGr.  This module is the full keycap vocabulary the keymaps
//! are written in.

use usbd_human_interface_device::page::Keyboard;

use crate::keys::{media, Key, Special};
use crate::Mods;

// Placeholders: `__` is transparent, `XX` is nothing.
pub const __: Key = Key::Transparent;
pub const XX: Key = Key::None;

// Letters.  Y and Z are swapped relative to the US positions.
pub const A: Key = Key::Plain(Keyboard::A);
pub const B: Key = Key::Plain(Keyboard::B);
pub const C: Key = Key::Plain(Keyboard::C);
pub const D: Key = Key::Plain(Keyboard::D);
pub const E: Key = Key::Plain(Keyboard::E);
pub const F: Key = Key::Plain(Keyboard::F);
pub const G: Key = Key::Plain(Keyboard::G);
pub const H: Key = Key::Plain(Keyboard::H);
pub const I: Key = Key::Plain(Keyboard::I);
pub const J: Key = Key::Plain(Keyboard::J);
pub const K: Key = Key::Plain(Keyboard::K);
pub const L: Key = Key::Plain(Keyboard::L);
pub const M: Key = Key::Plain(Keyboard::M);
pub const N: Key = Key::Plain(Keyboard::N);
pub const O: Key = Key::Plain(Keyboard::O);
pub const P: Key = Key::Plain(Keyboard::P);
pub const Q: Key = Key::Plain(Keyboard::Q);
pub const R: Key = Key::Plain(Keyboard::R);
pub const S: Key = Key::Plain(Keyboard::S);
pub const T: Key = Key::Plain(Keyboard::T);
pub const U: Key = Key::Plain(Keyboard::U);
pub const V: Key = Key::Plain(Keyboard::V);
pub const W: Key = Key::Plain(Keyboard::W);
pub const X: Key = Key::Plain(Keyboard::X);
pub const Y: Key = Key::Plain(Keyboard::Z);
pub const Z: Key = Key::Plain(Keyboard::Y);

// Digits.
pub const N1: Key = Key::Plain(Keyboard::Keyboard1);
pub const N2: Key = Key::Plain(Keyboard::Keyboard2);
pub const N3: Key = Key::Plain(Keyboard::Keyboard3);
pub const N4: Key = Key::Plain(Keyboard::Keyboard4);
pub const N5: Key = Key::Plain(Keyboard::Keyboard5);
pub const N6: Key = Key::Plain(Keyboard::Keyboard6);
pub const N7: Key = Key::Plain(Keyboard::Keyboard7);
pub const N8: Key = Key::Plain(Keyboard::Keyboard8);
pub const N9: Key = Key::Plain(Keyboard::Keyboard9);
pub const N0: Key = Key::Plain(Keyboard::Keyboard0);

// Punctuation that lives on its own keys.
pub const COMM: Key = Key::Plain(Keyboard::Comma);
pub const DOT: Key = Key::Plain(Keyboard::Dot);
pub const MINS: Key = Key::Plain(Keyboard::ForwardSlash);
pub const QUOT: Key = Key::Plain(Keyboard::Minus);
pub const DLR: Key = Key::Plain(Keyboard::NonUSHash);
pub const LABK: Key = Key::Plain(Keyboard::NonUSBackslash);

// Shifted symbols.
pub const PLUS: Key = Key::Chord(Keyboard::Keyboard1, Mods::SHIFT);
pub const DQUO: Key = Key::Chord(Keyboard::Keyboard2, Mods::SHIFT);
pub const ASTR: Key = Key::Chord(Keyboard::Keyboard3, Mods::SHIFT);
pub const PERC: Key = Key::Chord(Keyboard::Keyboard5, Mods::SHIFT);
pub const AMPR: Key = Key::Chord(Keyboard::Keyboard6, Mods::SHIFT);
pub const SLSH: Key = Key::Chord(Keyboard::Keyboard7, Mods::SHIFT);
pub const LPRN: Key = Key::Chord(Keyboard::Keyboard8, Mods::SHIFT);
pub const RPRN: Key = Key::Chord(Keyboard::Keyboard9, Mods::SHIFT);
pub const EQL: Key = Key::Chord(Keyboard::Keyboard0, Mods::SHIFT);
pub const QUES: Key = Key::Chord(Keyboard::Minus, Mods::SHIFT);
pub const UNDS: Key = Key::Chord(Keyboard::ForwardSlash, Mods::SHIFT);
pub const EXLM: Key = Key::Chord(Keyboard::RightBrace, Mods::SHIFT);
pub const RABK: Key = Key::Chord(Keyboard::NonUSBackslash, Mods::SHIFT);
pub const DEG: Key = Key::Chord(Keyboard::Grave, Mods::SHIFT);

// AltGr symbols.
pub const AT: Key = Key::Chord(Keyboard::Keyboard2, Mods::ALTGR);
pub const HASH: Key = Key::Chord(Keyboard::Keyboard3, Mods::ALTGR);
pub const PIPE: Key = Key::Chord(Keyboard::Keyboard7, Mods::ALTGR);
pub const LBRC: Key = Key::Chord(Keyboard::LeftBrace, Mods::ALTGR);
pub const RBRC: Key = Key::Chord(Keyboard::RightBrace, Mods::ALTGR);
pub const LCBR: Key = Key::Chord(Keyboard::Apostrophe, Mods::ALTGR);
pub const RCBR: Key = Key::Chord(Keyboard::NonUSHash, Mods::ALTGR);
pub const BSLS: Key = Key::Chord(Keyboard::NonUSBackslash, Mods::ALTGR);

// Keys the engine intercepts.
pub const ADIA: Key = Key::Special(Special::Adia);
pub const ODIA: Key = Key::Special(Special::Odia);
pub const UDIA: Key = Key::Special(Special::Udia);
pub const ENYA: Key = Key::Special(Special::Enya);
pub const INVQ: Key = Key::Special(Special::InvQues);
pub const INVE: Key = Key::Special(Special::InvExlm);
pub const CIRC: Key = Key::Special(Special::Circ);
pub const DIAE: Key = Key::Special(Special::Diae);
pub const TILD: Key = Key::Special(Special::Tild);
pub const ACUT: Key = Key::Special(Special::Acut);
pub const GRV: Key = Key::Special(Special::Grave);

// Modifiers and the usual control keys, named for the tables.
pub const LCTL: Key = Key::Plain(Keyboard::LeftControl);
pub const LSFT: Key = Key::Plain(Keyboard::LeftShift);
pub const LALT: Key = Key::Plain(Keyboard::LeftAlt);
pub const LGUI: Key = Key::Plain(Keyboard::LeftGUI);
pub const RSFT: Key = Key::Plain(Keyboard::RightShift);
pub const ESC: Key = Key::Plain(Keyboard::Escape);
pub const TAB: Key = Key::Plain(Keyboard::Tab);
pub const SPC: Key = Key::Plain(Keyboard::Space);
pub const ENT: Key = Key::Plain(Keyboard::ReturnEnter);
pub const BSPC: Key = Key::Plain(Keyboard::DeleteBackspace);
pub const DEL: Key = Key::Plain(Keyboard::DeleteForward);
pub const INS: Key = Key::Plain(Keyboard::Insert);
pub const HOME: Key = Key::Plain(Keyboard::Home);
pub const END: Key = Key::Plain(Keyboard::End);
pub const PGUP: Key = Key::Plain(Keyboard::PageUp);
pub const PGDN: Key = Key::Plain(Keyboard::PageDown);
pub const LEFT: Key = Key::Plain(Keyboard::LeftArrow);
pub const DOWN: Key = Key::Plain(Keyboard::DownArrow);
pub const UP: Key = Key::Plain(Keyboard::UpArrow);
pub const RGHT: Key = Key::Plain(Keyboard::RightArrow);

pub const F1: Key = Key::Plain(Keyboard::F1);
pub const F2: Key = Key::Plain(Keyboard::F2);
pub const F3: Key = Key::Plain(Keyboard::F3);
pub const F4: Key = Key::Plain(Keyboard::F4);
pub const F5: Key = Key::Plain(Keyboard::F5);
pub const F6: Key = Key::Plain(Keyboard::F6);
pub const F7: Key = Key::Plain(Keyboard::F7);
pub const F8: Key = Key::Plain(Keyboard::F8);
pub const F9: Key = Key::Plain(Keyboard::F9);
pub const F10: Key = Key::Plain(Keyboard::F10);
pub const F11: Key = Key::Plain(Keyboard::F11);
pub const F12: Key = Key::Plain(Keyboard::F12);

// Media, on the consumer page.
pub const MPRV: Key = Key::Consumer(media::SCAN_PREV);
pub const MPLY: Key = Key::Consumer(media::PLAY_PAUSE);
pub const MNXT: Key = Key::Consumer(media::SCAN_NEXT);
pub const VOLU: Key = Key::Consumer(media::VOLUME_UP);
pub const VOLD: Key = Key::Consumer(media::VOLUME_DOWN);
pub const BRIU: Key = Key::Consumer(media::BRIGHTNESS_UP);
pub const BRID: Key = Key::Consumer(media::BRIGHTNESS_DOWN);

/// The chord a special key types when the engine declines to rewrite it.
///
/// The umlauts and dead keys exist on the layout, so they can always be sent
/// as-is.  ñ, ¿ and ¡ have no Swiss key at all; for them there is nothing
/// sensible to fall back to.
pub fn fallback_chord(special: Special) -> Option<(Keyboard, Mods)> {
    match special {
        Special::Adia => Some((Keyboard::Apostrophe, Mods::empty())),
        Special::Odia => Some((Keyboard::Semicolon, Mods::empty())),
        Special::Udia => Some((Keyboard::LeftBrace, Mods::empty())),
        Special::Circ => Some((Keyboard::Equal, Mods::empty())),
        Special::Diae => Some((Keyboard::RightBrace, Mods::empty())),
        Special::Grave => Some((Keyboard::Equal, Mods::SHIFT)),
        Special::Tild => Some((Keyboard::Equal, Mods::ALTGR)),
        Special::Acut => Some((Keyboard::Minus, Mods::ALTGR)),
        Special::Enya | Special::InvQues | Special::InvExlm => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn qwertz_swap() {
        assert_eq!(Y, Key::Plain(Keyboard::Z));
        assert_eq!(Z, Key::Plain(Keyboard::Y));
    }

    #[test]
    fn symbol_chords() {
        // Spot checks against the sg layout: + is Shift+1, @ is AltGr+2,
        // minus sits on the US slash key.
        assert_eq!(PLUS, Key::Chord(Keyboard::Keyboard1, Mods::SHIFT));
        assert_eq!(AT, Key::Chord(Keyboard::Keyboard2, Mods::ALTGR));
        assert_eq!(MINS, Key::Plain(Keyboard::ForwardSlash));
    }

    #[test]
    fn dead_keys_have_fallbacks() {
        assert_eq!(
            fallback_chord(Special::Circ),
            Some((Keyboard::Equal, Mods::empty()))
        );
        assert_eq!(
            fallback_chord(Special::Grave),
            Some((Keyboard::Equal, Mods::SHIFT))
        );
        assert_eq!(fallback_chord(Special::InvQues), None);
    }
}

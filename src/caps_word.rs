//! Caps word continuation rules.
//!
//! Caps word is the framework's "shift until the word ends" feature; turning
//! it on and off is its business.  What is ours is the per-key decision of
//! whether a word is still going: letters and the minus key keep it alive
//! and get shifted, digits and editing keys keep it alive unshifted, and
//! everything else ends it.

use usbd_human_interface_device::page::Keyboard;

use crate::keys::{Key, Special};
use crate::Mods;

/// What a keypress does to an active caps word.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Continuation {
    /// Still in the word; type this key with shift applied.
    Shifted,
    /// Still in the word; type this key as-is.
    Plain,
    /// The word is over.
    Stop,
}

pub fn on_press(key: Key) -> Continuation {
    match key {
        Key::Plain(code) if is_letter(code) => Continuation::Shifted,
        // The minus key doubles as a hyphen inside identifiers; keep it
        // shifted so SCREAMING_SNAKE comes out right on the Swiss layout.
        Key::Plain(Keyboard::ForwardSlash) => Continuation::Shifted,

        Key::Plain(code) if is_digit(code) => Continuation::Plain,
        Key::Plain(Keyboard::DeleteBackspace) | Key::Plain(Keyboard::DeleteForward) => {
            Continuation::Plain
        }
        // Underscore (Shift+minus on the Swiss layout).
        Key::Chord(Keyboard::ForwardSlash, mods) if mods == Mods::SHIFT => Continuation::Plain,

        _ => Continuation::Stop,
    }
}

/// Whether a special key keeps the word going.  None of them do; the umlauts
/// would arguably qualify, but no German word I shout contains one.
pub fn on_special(_special: Special) -> Continuation {
    Continuation::Stop
}

fn is_letter(code: Keyboard) -> bool {
    (Keyboard::A..=Keyboard::Z).contains(&code)
}

fn is_digit(code: Keyboard) -> bool {
    (Keyboard::Keyboard1..=Keyboard::Keyboard0).contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swiss;

    #[test]
    fn letters_shift() {
        assert_eq!(on_press(swiss::A), Continuation::Shifted);
        assert_eq!(on_press(swiss::Z), Continuation::Shifted);
        assert_eq!(on_press(swiss::MINS), Continuation::Shifted);
    }

    #[test]
    fn editing_continues_plain() {
        assert_eq!(on_press(swiss::N1), Continuation::Plain);
        assert_eq!(on_press(swiss::BSPC), Continuation::Plain);
        assert_eq!(on_press(swiss::UNDS), Continuation::Plain);
    }

    #[test]
    fn word_enders() {
        assert_eq!(on_press(swiss::SPC), Continuation::Stop);
        assert_eq!(on_press(swiss::ADIA), Continuation::Stop);
        assert_eq!(on_press(swiss::COMM), Continuation::Stop);
    }
}

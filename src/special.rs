//! OS-conditional key rewriting.
//!
//! The Swiss layout has no uppercase umlauts, no ñ, and no ¿/¡, and its dead
//! keys need a commit keystroke that differs between hosts.  This module is
//! the dispatch table: (special key, shift state, host OS) in, a short
//! synthetic keystroke sequence out.  `None` means "not ours, process the
//! key normally".

use arrayvec::ArrayVec;
use usbd_human_interface_device::page::Keyboard;

use crate::keys::Special;
use crate::unicode;
use crate::{HostOs, Mods};

/// One synthetic keystroke: press with these mods, release.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Tap {
    pub code: Keyboard,
    pub mods: Mods,
}

impl Tap {
    pub const fn plain(code: Keyboard) -> Self {
        Tap {
            code,
            mods: Mods::empty(),
        }
    }

    pub const fn with(code: Keyboard, mods: Mods) -> Self {
        Tap { code, mods }
    }
}

/// A rewrite: taps typed in order, with `hold` kept down across the whole
/// sequence.  Alt codes need the hold; most sequences don't.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Rewrite {
    pub hold: Mods,
    pub taps: ArrayVec<Tap, 12>,
}

impl Rewrite {
    pub fn seq(taps: &[Tap]) -> Self {
        Rewrite {
            hold: Mods::empty(),
            taps: taps.iter().copied().collect(),
        }
    }

    pub fn held(hold: Mods, taps: &[Tap]) -> Self {
        Rewrite {
            hold,
            taps: taps.iter().copied().collect(),
        }
    }
}

/// The dispatch table.
pub fn rewrite(special: Special, shifted: bool, os: HostOs) -> Option<Rewrite> {
    match special {
        // Unshifted umlauts are ordinary Swiss keys; only the uppercase
        // forms need composing (dead diaeresis, then the shifted letter).
        Special::Adia if shifted => Some(diaeresis(Keyboard::A)),
        Special::Odia if shifted => Some(diaeresis(Keyboard::O)),
        Special::Udia if shifted => Some(diaeresis(Keyboard::U)),
        Special::Adia | Special::Odia | Special::Udia => None,

        // Dead tilde then n, on any host.
        Special::Enya => Some(Rewrite::seq(&[
            Tap::with(Keyboard::Equal, Mods::ALTGR),
            Tap::with(
                Keyboard::N,
                if shifted { Mods::SHIFT } else { Mods::empty() },
            ),
        ])),

        Special::InvQues => inverted(os, '¿', &ALT_CODE_0191),
        Special::InvExlm => inverted(os, '¡', &ALT_CODE_0161),

        Special::Circ => dead_key(os, Keyboard::Equal, Mods::empty()),
        Special::Diae => dead_key(os, Keyboard::RightBrace, Mods::empty()),
        Special::Tild => dead_key(os, Keyboard::Equal, Mods::ALTGR),
        Special::Acut => dead_key(os, Keyboard::Minus, Mods::ALTGR),
        Special::Grave => dead_key(os, Keyboard::Equal, Mods::SHIFT),
    }
}

fn diaeresis(letter: Keyboard) -> Rewrite {
    Rewrite::seq(&[
        Tap::plain(Keyboard::RightBrace),
        Tap::with(letter, Mods::SHIFT),
    ])
}

// Windows alt codes for ¿ and ¡.
static ALT_CODE_0191: [Tap; 4] = [
    Tap::plain(Keyboard::Keypad0),
    Tap::plain(Keyboard::Keypad1),
    Tap::plain(Keyboard::Keypad9),
    Tap::plain(Keyboard::Keypad1),
];
static ALT_CODE_0161: [Tap; 4] = [
    Tap::plain(Keyboard::Keypad0),
    Tap::plain(Keyboard::Keypad1),
    Tap::plain(Keyboard::Keypad6),
    Tap::plain(Keyboard::Keypad1),
];

fn inverted(os: HostOs, ch: char, alt_code: &[Tap; 4]) -> Option<Rewrite> {
    match os {
        HostOs::Linux => unicode::rewrite(ch, os),
        HostOs::Windows => Some(Rewrite::held(Mods::ALT, alt_code)),
        _ => None,
    }
}

/// Commit a dead key: double-tap on Linux, dead key then space on Windows.
/// Anywhere else the caller falls back to sending the dead key itself.
fn dead_key(os: HostOs, code: Keyboard, mods: Mods) -> Option<Rewrite> {
    match os {
        HostOs::Linux => Some(Rewrite::held(mods, &[Tap::plain(code), Tap::plain(code)])),
        HostOs::Windows => Some(Rewrite::seq(&[
            Tap::with(code, mods),
            Tap::plain(Keyboard::Space),
        ])),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn umlauts_only_when_shifted() {
        assert_eq!(rewrite(Special::Adia, false, HostOs::Linux), None);
        let up = rewrite(Special::Adia, true, HostOs::Unknown).unwrap();
        assert_eq!(
            up.taps.as_slice(),
            &[
                Tap::plain(Keyboard::RightBrace),
                Tap::with(Keyboard::A, Mods::SHIFT),
            ][..]
        );
    }

    #[test]
    fn enya_ignores_os() {
        for os in [HostOs::Linux, HostOs::Windows, HostOs::Unknown] {
            assert!(rewrite(Special::Enya, false, os).is_some());
        }
    }

    #[test]
    fn alt_codes_hold_alt() {
        let rw = rewrite(Special::InvQues, false, HostOs::Windows).unwrap();
        assert_eq!(rw.hold, Mods::ALT);
        assert_eq!(rw.taps.len(), 4);
    }
}

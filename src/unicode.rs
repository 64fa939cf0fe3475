//! Typing raw Unicode code points.
//!
//! Hosts don't take code points over HID, so each OS has an input method we
//! drive with keystrokes: IBus on Linux (Ctrl+Shift+U, hex, space), the hex
//! numpad on Windows (Alt held, keypad plus, hex).  macOS would want its own
//! dance with the option key; until I need it, unknown hosts just decline.

use arrayvec::ArrayVec;
use usbd_human_interface_device::page::Keyboard;

use crate::special::{Rewrite, Tap};
use crate::{HostOs, Mods};

/// Build the keystroke sequence that types `ch` on the given host.
pub fn rewrite(ch: char, os: HostOs) -> Option<Rewrite> {
    match os {
        HostOs::Linux => Some(linux_ibus(ch)),
        HostOs::Windows => Some(windows_hex(ch)),
        _ => None,
    }
}

fn linux_ibus(ch: char) -> Rewrite {
    let mut taps = ArrayVec::new();
    taps.push(Tap::with(Keyboard::U, Mods::CONTROL | Mods::SHIFT));
    hex_taps(ch as u32, &mut taps);
    taps.push(Tap::plain(Keyboard::Space));
    Rewrite {
        hold: Mods::empty(),
        taps,
    }
}

fn windows_hex(ch: char) -> Rewrite {
    let mut taps = ArrayVec::new();
    taps.push(Tap::plain(Keyboard::KeypadAdd));
    hex_taps(ch as u32, &mut taps);
    Rewrite {
        hold: Mods::ALT,
        taps,
    }
}

/// Append the hex digits of `value`, most significant first, no leading
/// zeros.
fn hex_taps(value: u32, taps: &mut ArrayVec<Tap, 12>) {
    let nibbles = ((32 - value.leading_zeros()).max(1) + 3) / 4;
    for i in (0..nibbles).rev() {
        taps.push(Tap::plain(hex_key((value >> (i * 4)) & 0xF)));
    }
}

fn hex_key(nibble: u32) -> Keyboard {
    match nibble {
        0 => Keyboard::Keyboard0,
        1 => Keyboard::Keyboard1,
        2 => Keyboard::Keyboard2,
        3 => Keyboard::Keyboard3,
        4 => Keyboard::Keyboard4,
        5 => Keyboard::Keyboard5,
        6 => Keyboard::Keyboard6,
        7 => Keyboard::Keyboard7,
        8 => Keyboard::Keyboard8,
        9 => Keyboard::Keyboard9,
        0xA => Keyboard::A,
        0xB => Keyboard::B,
        0xC => Keyboard::C,
        0xD => Keyboard::D,
        0xE => Keyboard::E,
        _ => Keyboard::F,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(rw: &Rewrite) -> alloc::vec::Vec<Keyboard> {
        rw.taps.iter().map(|t| t.code).collect()
    }

    #[test]
    fn linux_sequence() {
        // ¿ is U+00BF.
        let rw = rewrite('¿', HostOs::Linux).unwrap();
        assert_eq!(rw.hold, Mods::empty());
        assert_eq!(rw.taps[0], Tap::with(Keyboard::U, Mods::CONTROL | Mods::SHIFT));
        assert_eq!(
            &codes(&rw)[1..],
            &[Keyboard::B, Keyboard::F, Keyboard::Space][..]
        );
    }

    #[test]
    fn windows_sequence() {
        // 🐍 is U+1F40D.
        let rw = rewrite('🐍', HostOs::Windows).unwrap();
        assert_eq!(rw.hold, Mods::ALT);
        assert_eq!(
            codes(&rw),
            vec![
                Keyboard::KeypadAdd,
                Keyboard::Keyboard1,
                Keyboard::F,
                Keyboard::Keyboard4,
                Keyboard::Keyboard0,
                Keyboard::D,
            ]
        );
    }

    #[test]
    fn unknown_host_declines() {
        assert_eq!(rewrite('x', HostOs::Unknown), None);
        assert_eq!(rewrite('x', HostOs::MacOs), None);
    }
}

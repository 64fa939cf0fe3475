//! The full rewrite dispatch table, enumerated: every special key, both
//! shift states, every host class.

use swisskeys::keys::Special;
use swisskeys::special::{rewrite, Rewrite, Tap};
use swisskeys::{HostOs, Mods};
use usbd_human_interface_device::page::Keyboard;

const ALL_OS: [HostOs; 4] = [
    HostOs::Linux,
    HostOs::Windows,
    HostOs::MacOs,
    HostOs::Unknown,
];

const UMLAUTS: [(Special, Keyboard); 3] = [
    (Special::Adia, Keyboard::A),
    (Special::Odia, Keyboard::O),
    (Special::Udia, Keyboard::U),
];

const DEAD_KEYS: [(Special, Keyboard, Mods); 5] = [
    (Special::Circ, Keyboard::Equal, Mods::empty()),
    (Special::Diae, Keyboard::RightBrace, Mods::empty()),
    (Special::Tild, Keyboard::Equal, Mods::ALTGR),
    (Special::Acut, Keyboard::Minus, Mods::ALTGR),
    (Special::Grave, Keyboard::Equal, Mods::SHIFT),
];

fn taps(rw: &Rewrite) -> &[Tap] {
    rw.taps.as_slice()
}

#[test]
fn umlauts() {
    for (special, letter) in UMLAUTS {
        for os in ALL_OS {
            // Lowercase umlauts are on the layout; not intercepted.
            assert_eq!(rewrite(special, false, os), None);

            // Uppercase is dead diaeresis then the shifted letter, the same
            // on every host.
            let rw = rewrite(special, true, os).unwrap();
            assert!(rw.hold.is_empty());
            assert_eq!(
                taps(&rw),
                &[
                    Tap::plain(Keyboard::RightBrace),
                    Tap::with(letter, Mods::SHIFT),
                ][..]
            );
        }
    }
}

#[test]
fn enya() {
    for os in ALL_OS {
        for shifted in [false, true] {
            // Dead tilde then n, shift following the letter.
            let rw = rewrite(Special::Enya, shifted, os).unwrap();
            assert!(rw.hold.is_empty());
            assert_eq!(taps(&rw)[0], Tap::with(Keyboard::Equal, Mods::ALTGR));
            let n = taps(&rw)[1];
            assert_eq!(n.code, Keyboard::N);
            assert_eq!(n.mods.contains(Mods::SHIFT), shifted);
        }
    }
}

#[test]
fn inverted_punctuation() {
    for (special, hex, alt_code) in [
        (
            Special::InvQues,
            [Keyboard::B, Keyboard::F],
            // 0191
            [
                Keyboard::Keypad0,
                Keyboard::Keypad1,
                Keyboard::Keypad9,
                Keyboard::Keypad1,
            ],
        ),
        (
            Special::InvExlm,
            [Keyboard::A, Keyboard::Keyboard1],
            // 0161
            [
                Keyboard::Keypad0,
                Keyboard::Keypad1,
                Keyboard::Keypad6,
                Keyboard::Keypad1,
            ],
        ),
    ] {
        for shifted in [false, true] {
            // Linux types the code point through IBus.
            let rw = rewrite(special, shifted, HostOs::Linux).unwrap();
            assert!(rw.hold.is_empty());
            assert_eq!(
                taps(&rw)[0],
                Tap::with(Keyboard::U, Mods::CONTROL | Mods::SHIFT)
            );
            assert_eq!(taps(&rw)[1].code, hex[0]);
            assert_eq!(taps(&rw)[2].code, hex[1]);
            assert_eq!(taps(&rw)[3], Tap::plain(Keyboard::Space));

            // Windows types the decimal alt code with Alt held throughout.
            let rw = rewrite(special, shifted, HostOs::Windows).unwrap();
            assert_eq!(rw.hold, Mods::ALT);
            let codes: Vec<Keyboard> = taps(&rw).iter().map(|t| t.code).collect();
            assert_eq!(codes, alt_code);

            // Anywhere else the key passes through untouched.
            assert_eq!(rewrite(special, shifted, HostOs::MacOs), None);
            assert_eq!(rewrite(special, shifted, HostOs::Unknown), None);
        }
    }
}

#[test]
fn dead_keys() {
    for (special, code, mods) in DEAD_KEYS {
        for shifted in [false, true] {
            // Linux commits a dead key by striking it twice, with its own
            // mods held across both taps.
            let rw = rewrite(special, shifted, HostOs::Linux).unwrap();
            assert_eq!(rw.hold, mods);
            assert_eq!(taps(&rw), &[Tap::plain(code), Tap::plain(code)][..]);

            // Windows commits with a following space.
            let rw = rewrite(special, shifted, HostOs::Windows).unwrap();
            assert!(rw.hold.is_empty());
            assert_eq!(
                taps(&rw),
                &[Tap::with(code, mods), Tap::plain(Keyboard::Space)][..]
            );

            // Elsewhere the caller falls back to the plain dead key.
            assert_eq!(rewrite(special, shifted, HostOs::MacOs), None);
            assert_eq!(rewrite(special, shifted, HostOs::Unknown), None);
        }
    }
}

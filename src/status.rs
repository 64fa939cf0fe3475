//! Status surfaces: OLED text and the indicator LEDs.
//!
//! The display and LED drivers belong to the firmware; this module just
//! formats what they show and reacts to host lock state.

use core::fmt::Write;

use arrayvec::ArrayString;
use smart_leds::RGB8;
use usbd_human_interface_device::page::Keyboard;

use crate::special::Tap;

/// Host keyboard lock state, as reported in the LED output report.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct LedState {
    pub num_lock: bool,
    pub caps_lock: bool,
    pub scroll_lock: bool,
}

/// The number layer lives under a layer key, so NumLock being off only
/// breaks things.  Tap it back on whenever the host clears it.
pub fn led_update(leds: LedState) -> Option<Tap> {
    if leds.num_lock {
        None
    } else {
        Some(Tap::plain(Keyboard::KeypadNumLockAndClear))
    }
}

/// Caps word indicator color for the underglow.  Off when inactive.
pub fn caps_word_color(active: bool) -> RGB8 {
    if active {
        RGB8::new(0x60, 0x30, 0x00)
    } else {
        RGB8::new(0, 0, 0)
    }
}

fn layer_name(layer: u8) -> &'static str {
    match layer {
        0 => "Zero",
        1 => "Uno",
        2 => "Due",
        3 => "Tres",
        _ => "Undefined",
    }
}

/// Render the master-half OLED contents.
pub fn render_oled(banner: &str, layer: u8, leds: LedState) -> ArrayString<64> {
    let mut out = ArrayString::new();
    let _ = writeln!(out, "{}", banner);
    let _ = writeln!(out, "Layer: {}", layer_name(layer));
    let _ = writeln!(
        out,
        "{} {} {}",
        if leds.num_lock { "NUMLCK" } else { "      " },
        if leds.caps_lock { "CAPLCK" } else { "      " },
        if leds.scroll_lock { "SCRLCK" } else { "      " },
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numlock_reasserted() {
        let mut leds = LedState::default();
        assert_eq!(
            led_update(leds),
            Some(Tap::plain(Keyboard::KeypadNumLockAndClear))
        );
        leds.num_lock = true;
        assert_eq!(led_update(leds), None);
    }

    #[test]
    fn oled_lines() {
        let leds = LedState {
            num_lock: true,
            ..LedState::default()
        };
        let text = render_oled("Kyria rev3.0", 1, leds);
        assert!(text.starts_with("Kyria rev3.0\n"));
        assert!(text.contains("Layer: Uno"));
        assert!(text.contains("NUMLCK"));
        assert!(!text.contains("CAPLCK"));
    }

    #[test]
    fn caps_word_led() {
        assert_eq!(caps_word_color(false), RGB8::new(0, 0, 0));
        assert_ne!(caps_word_color(true), RGB8::new(0, 0, 0));
    }
}

//! Logical key codes.
//!
//! The layer tables don't store HID keycodes directly.  On a Swiss German
//! host layout most symbols are chords (`+` is Shift+1, `@` is AltGr+2), some
//! keys switch layers, and a handful get rewritten per host OS before
//! anything is sent at all.  `Key` is the per-position code that captures all
//! of that; turning one into actual HID traffic is the engine's job.

use usbd_human_interface_device::page::Keyboard;

use crate::Mods;

/// Number of layers on all of my boards.
pub const LAYERS: usize = 4;

/// A logical key, as stored in a layer table.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Key {
    /// Unmapped position.  Pressing it does nothing.
    None,
    /// Fall through to the next lower active layer.
    Transparent,
    /// A plain HID keycode, sent as-is.
    Plain(Keyboard),
    /// A keycode that needs modifiers held on the host's Swiss German layout.
    Chord(Keyboard, Mods),
    /// Momentarily activate a layer while held.
    Layer(u8),
    /// Tap for the keycode, hold for the layer.
    LayerTap(u8, Keyboard),
    /// Type a single Unicode code point through the host's input method.
    Unicode(char),
    /// Keys that are rewritten depending on shift state and host OS.
    Special(Special),
    /// A consumer-page usage (media and brightness keys).
    Consumer(u16),
}

/// Keys the engine intercepts before normal processing.
///
/// The umlauts are ordinary Swiss keys when unshifted; their uppercase forms
/// don't exist on the layout and have to be composed.  The rest are either
/// absent from the layout entirely (ñ ¿ ¡) or dead keys whose committed form
/// depends on the host OS.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Special {
    /// ä, and Ä when shifted.
    Adia,
    /// ö, and Ö when shifted.
    Odia,
    /// ü, and Ü when shifted.
    Udia,
    /// ñ and Ñ.
    Enya,
    /// ¿
    InvQues,
    /// ¡
    InvExlm,
    /// ^ (dead on the Swiss layout)
    Circ,
    /// ¨ (dead)
    Diae,
    /// ~ (dead)
    Tild,
    /// ´ (dead)
    Acut,
    /// ` (dead)
    Grave,
}

/// Consumer-page usages used on the function layer.
pub mod media {
    pub const BRIGHTNESS_UP: u16 = 0x006F;
    pub const BRIGHTNESS_DOWN: u16 = 0x0070;
    pub const SCAN_NEXT: u16 = 0x00B5;
    pub const SCAN_PREV: u16 = 0x00B6;
    pub const PLAY_PAUSE: u16 = 0x00CD;
    pub const VOLUME_UP: u16 = 0x00E9;
    pub const VOLUME_DOWN: u16 = 0x00EA;
}

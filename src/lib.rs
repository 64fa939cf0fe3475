//! Swiss German keymaps for split ergonomic keyboards
//!
//! The scanning, transport and drivers live in the firmware proper; this
//! crate holds everything that makes the boards *mine*: the layer tables for
//! the Kyria and the Piantor, the Swiss German (QWERTZ) host-layout chords,
//! and the per-keystroke processing that rewrites accented characters into
//! whatever the detected host OS understands.

#![cfg_attr(not(any(feature = "std", test)), no_std)]

#[cfg(not(any(feature = "std", test)))]
extern crate core as std;

extern crate alloc;

use alloc::vec::Vec;

use arraydeque::ArrayDeque;
use arrayvec::ArrayVec;
use bitflags::bitflags;
use usbd_human_interface_device::page::Keyboard;

pub mod caps_word;
pub mod engine;
pub mod keymap;
pub mod keys;
pub mod special;
pub mod status;
pub mod swiss;
pub mod unicode;

#[cfg(test)]
mod testlog;

cfg_if::cfg_if! {
    if #[cfg(feature = "defmt")] {
        mod log {
            pub use defmt::{info, warn};
        }
    } else if #[cfg(feature = "log")] {
        mod log {
            pub use log::{info, warn};
        }
    } else {
        compile_error!("either the `log` or the `defmt` feature must be enabled");
    }
}

/// Which side of the keyboard are we.
#[derive(Eq, PartialEq, Clone, Copy, Debug)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn is_left(&self) -> bool {
        match *self {
            Side::Left => true,
            Side::Right => false,
        }
    }
}

/// Key events indicate keys going up or down, by physical position.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum KeyEvent {
    Press(u8),
    Release(u8),
}

#[cfg(feature = "defmt")]
impl defmt::Format for KeyEvent {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            KeyEvent::Press(k) => defmt::write!(fmt, "KeyEvent::Press({})", k),
            KeyEvent::Release(k) => defmt::write!(fmt, "KeyEvent::Release({})", k),
        }
    }
}

impl KeyEvent {
    pub fn key(&self) -> u8 {
        match self {
            KeyEvent::Press(k) => *k,
            KeyEvent::Release(k) => *k,
        }
    }

    pub fn is_press(&self) -> bool {
        match self {
            KeyEvent::Press(_) => true,
            KeyEvent::Release(_) => false,
        }
    }

    pub fn is_release(&self) -> bool {
        match self {
            KeyEvent::Press(_) => false,
            KeyEvent::Release(_) => true,
        }
    }
}

/// Indicates keypresses that should be sent to the host.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum KeyAction {
    /// Press a single key, with the given modifiers held.
    KeyPress(Keyboard, Mods),
    /// Hold only the given modifiers, nothing else.
    ModOnly(Mods),
    /// Release whatever the previous KeyPress/ModOnly had down.
    KeyRelease,
    /// Report exactly this set of keys.
    KeySet(Vec<Keyboard>),
    /// A consumer-page usage.  Zero clears the consumer report.
    Consumer(u16),
}

bitflags! {
    /// A modifier map. This indicates what modifiers should be held down when
    /// this keypress is sent.
    #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
    pub struct Mods: u8 {
        const SHIFT = 0b0000_0001;
        const CONTROL = 0b0000_0010;
        const ALT = 0b0000_0100;
        const GUI = 0b0000_1000;
        /// AltGr. Tracked apart from ALT because the Swiss German layout
        /// reaches a lot of its symbols through it.
        const ALTGR = 0b0001_0000;
    }
}

impl Mods {
    /// The HID keycodes that hold these modifiers down.
    pub fn keys(self) -> ArrayVec<Keyboard, 5> {
        let mut keys = ArrayVec::new();
        if self.contains(Mods::CONTROL) {
            keys.push(Keyboard::LeftControl);
        }
        if self.contains(Mods::SHIFT) {
            keys.push(Keyboard::LeftShift);
        }
        if self.contains(Mods::ALT) {
            keys.push(Keyboard::LeftAlt);
        }
        if self.contains(Mods::GUI) {
            keys.push(Keyboard::LeftGUI);
        }
        if self.contains(Mods::ALTGR) {
            keys.push(Keyboard::RightAlt);
        }
        keys
    }

    /// The modifier bit a plain HID keycode stands for, if it is one.
    pub fn from_key(key: Keyboard) -> Option<Mods> {
        match key {
            Keyboard::LeftControl | Keyboard::RightControl => Some(Mods::CONTROL),
            Keyboard::LeftShift | Keyboard::RightShift => Some(Mods::SHIFT),
            Keyboard::LeftAlt => Some(Mods::ALT),
            Keyboard::LeftGUI | Keyboard::RightGUI => Some(Mods::GUI),
            Keyboard::RightAlt => Some(Mods::ALTGR),
            _ => None,
        }
    }
}

/// The host OS class the framework's detector reported.  Detection itself is
/// a framework concern; we only branch on the result.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum HostOs {
    Linux,
    Windows,
    MacOs,
    #[default]
    Unknown,
}

#[cfg(feature = "defmt")]
impl defmt::Format for HostOs {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            HostOs::Linux => defmt::write!(fmt, "linux"),
            HostOs::Windows => defmt::write!(fmt, "windows"),
            HostOs::MacOs => defmt::write!(fmt, "macos"),
            HostOs::Unknown => defmt::write!(fmt, "unknown"),
        }
    }
}

/// An event is something that happens in a handler to indicate some action
/// likely needs to be performed on it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Event {
    /// A keypress to hand to the HID report builder.
    Key(KeyAction),

    /// The highest active layer changed (OLED status wants this).
    Layer(u8),

    /// Caps word turned on or off (status LED wants this).
    CapsWord(bool),
}

/// A generalized event queue.  Events are discarded if the queue is full.
pub trait EventQueue {
    fn push(&mut self, val: Event);
}

/// A fixed-capacity event queue for the firmware loop.
pub struct EventBuffer {
    queue: ArrayDeque<Event, 32>,
}

impl EventBuffer {
    pub fn new() -> Self {
        EventBuffer {
            queue: ArrayDeque::new(),
        }
    }

    pub fn pop(&mut self) -> Option<Event> {
        self.queue.pop_front()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Default for EventBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl EventQueue for EventBuffer {
    fn push(&mut self, val: Event) {
        if self.queue.push_back(val).is_err() {
            crate::log::warn!("Event queue full, discarding");
        }
    }
}

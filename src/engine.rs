//! The keymap engine.
//!
//! Sits between the matrix scanner and the HID report builder.  Key events
//! come in by physical position; what comes out is a stream of [`Event`]s:
//! report snapshots for ordinary typing, ordered tap sequences for the
//! rewritten keys, and state changes the status displays care about.
//!
//! Ordinary keys are reported as full [`KeyAction::KeySet`] snapshots, so
//! rollover falls out naturally.  Rewrites instead replace the report for
//! the duration of the sequence; whatever the user is physically holding is
//! reasserted afterwards.

use alloc::vec::Vec;

use usbd_human_interface_device::page::Keyboard;

use crate::caps_word::{self, Continuation};
use crate::keymap::{Keymap, LayerState, Override};
use crate::keys::{Key, Special};
use crate::log::info;
use crate::special::{self, Rewrite};
use crate::swiss;
use crate::unicode;
use crate::{Event, EventQueue, HostOs, KeyAction, KeyEvent, Mods};

/// Ticks before a held layer-tap key settles as a layer hold.
pub const TAPPING_TERM: u32 = 200;

/// What a pressed position is currently doing, so release can undo it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
enum Down {
    #[default]
    None,
    /// A reported key, with chord mods added and override mods suppressed.
    Key {
        code: Keyboard,
        extra: Mods,
        suppress: Mods,
    },
    /// A held modifier key.
    Modifier(Mods),
    /// A momentary layer.
    Layer(u8),
    /// A held consumer usage.
    Consumer(u16),
    /// An intercepted key; the sequence already went out.
    Sequence,
}

/// A layer-tap key waiting to be decided.
#[derive(Clone, Copy, Debug)]
struct PendingTap {
    pos: u8,
    layer: u8,
    code: Keyboard,
    age: u32,
}

/// Per-keystroke processing for one board.
pub struct KeymapManager<const N: usize> {
    keymap: Keymap<N>,
    overrides: &'static [Override],
    tri_layer: Option<(u8, u8, u8)>,

    layers: LayerState,
    reported_layer: u8,
    mods: Mods,
    down: [Down; N],
    pending: Option<PendingTap>,
    caps_word: bool,
    host_os: HostOs,
}

impl<const N: usize> KeymapManager<N> {
    pub fn new(
        keymap: Keymap<N>,
        overrides: &'static [Override],
        tri_layer: Option<(u8, u8, u8)>,
    ) -> Self {
        KeymapManager {
            keymap,
            overrides,
            tri_layer,
            layers: LayerState::default(),
            reported_layer: 0,
            mods: Mods::empty(),
            down: [Down::None; N],
            pending: None,
            caps_word: false,
            host_os: HostOs::default(),
        }
    }

    /// Post-init hook: the framework's OS detector reported its verdict.
    pub fn set_host_os(&mut self, os: HostOs) {
        info!("Host OS: {:?}", os);
        self.host_os = os;
    }

    pub fn host_os(&self) -> HostOs {
        self.host_os
    }

    /// Caps word activation comes from the framework (double-tap shift on my
    /// boards); deactivation also happens here, when a word ends.
    pub fn set_caps_word(&mut self, active: bool, events: &mut dyn EventQueue) {
        if self.caps_word != active {
            self.caps_word = active;
            events.push(Event::CapsWord(active));
        }
    }

    pub fn caps_word(&self) -> bool {
        self.caps_word
    }

    /// Advance time by one tick.  Only the layer-tap timer cares.
    pub fn tick(&mut self, events: &mut dyn EventQueue) {
        if let Some(mut pending) = self.pending {
            pending.age = pending.age.saturating_add(1);
            if pending.age >= TAPPING_TERM {
                self.pending = None;
                self.settle_hold(pending, events);
            } else {
                self.pending = Some(pending);
            }
        }
    }

    /// Handle a single key event.
    pub fn handle_event(&mut self, event: KeyEvent, events: &mut dyn EventQueue) {
        match event {
            KeyEvent::Press(pos) => self.press(pos, events),
            KeyEvent::Release(pos) => self.release(pos, events),
        }
    }

    /// Tap a key that didn't come from the matrix (rotary encoders).
    pub fn tap_key(&mut self, key: Key, events: &mut dyn EventQueue) {
        match key {
            Key::Plain(code) => self.send_tap(code, self.effective_mods(), events),
            Key::Chord(code, mods) => self.send_tap(code, self.effective_mods() | mods, events),
            Key::Consumer(usage) => {
                events.push(Event::Key(KeyAction::Consumer(usage)));
                events.push(Event::Key(KeyAction::Consumer(0)));
            }
            _ => (),
        }
    }

    fn press(&mut self, pos: u8, events: &mut dyn EventQueue) {
        if pos as usize >= N {
            return;
        }

        // A second key going down decides a pending layer-tap as a hold, so
        // the new key resolves on the target layer.
        if let Some(pending) = self.pending {
            if pending.pos != pos {
                self.pending = None;
                self.settle_hold(pending, events);
            }
        }

        match self.keymap.resolve(self.layers, pos) {
            Key::None | Key::Transparent => (),
            Key::Layer(layer) => {
                self.down[pos as usize] = Down::Layer(layer);
                self.set_layer(layer, true, events);
            }
            Key::LayerTap(layer, code) => {
                self.down[pos as usize] = Down::None;
                self.pending = Some(PendingTap {
                    pos,
                    layer,
                    code,
                    age: 0,
                });
            }
            Key::Plain(code) => {
                if let Some(modifier) = Mods::from_key(code) {
                    self.mods |= modifier;
                    self.down[pos as usize] = Down::Modifier(modifier);
                    self.show(events);
                } else {
                    let weak = self.caps_word_weak(Key::Plain(code), events);
                    self.report_key(pos, code, weak, events);
                }
            }
            Key::Chord(code, mods) => {
                let weak = self.caps_word_weak(Key::Chord(code, mods), events);
                self.report_key(pos, code, mods | weak, events);
            }
            Key::Special(special) => self.press_special(pos, special, events),
            Key::Unicode(ch) => {
                self.end_caps_word(events);
                self.down[pos as usize] = Down::Sequence;
                if let Some(rewrite) = unicode::rewrite(ch, self.host_os) {
                    self.send_rewrite(&rewrite, events);
                }
            }
            Key::Consumer(usage) => {
                self.down[pos as usize] = Down::Consumer(usage);
                events.push(Event::Key(KeyAction::Consumer(usage)));
            }
        }
    }

    fn release(&mut self, pos: u8, events: &mut dyn EventQueue) {
        if pos as usize >= N {
            return;
        }

        // A layer-tap released before the term (and before any other key)
        // is a tap.
        if let Some(pending) = self.pending {
            if pending.pos == pos {
                self.pending = None;
                let weak = self.caps_word_weak(Key::Plain(pending.code), events);
                self.send_tap(pending.code, self.effective_mods() | weak, events);
                return;
            }
        }

        match core::mem::take(&mut self.down[pos as usize]) {
            Down::None | Down::Sequence => (),
            Down::Key { .. } => self.show(events),
            Down::Modifier(_) => {
                // Recompute rather than subtract: the outer columns carry
                // the same modifier on both halves.
                self.mods = self
                    .down
                    .iter()
                    .fold(Mods::empty(), |acc, down| match down {
                        Down::Modifier(modifier) => acc | *modifier,
                        _ => acc,
                    });
                self.show(events);
            }
            Down::Layer(layer) => self.set_layer(layer, false, events),
            Down::Consumer(_) => events.push(Event::Key(KeyAction::Consumer(0))),
        }
    }

    fn press_special(&mut self, pos: u8, special: Special, events: &mut dyn EventQueue) {
        if self.caps_word && caps_word::on_special(special) == Continuation::Stop {
            self.end_caps_word(events);
        }

        let shifted = self.mods.contains(Mods::SHIFT);
        if let Some(rewrite) = special::rewrite(special, shifted, self.host_os) {
            self.down[pos as usize] = Down::Sequence;
            self.send_rewrite(&rewrite, events);
        } else if let Some((code, mods)) = swiss::fallback_chord(special) {
            // Not intercepted: the key exists on the layout, type it.
            self.report_key(pos, code, mods, events);
        } else {
            // No rewrite and nothing to fall back to (unknown OS).
            self.down[pos as usize] = Down::Sequence;
        }
    }

    /// Consult caps word for an ordinary keypress.  Returns the weak mods to
    /// apply to this key.
    fn caps_word_weak(&mut self, key: Key, events: &mut dyn EventQueue) -> Mods {
        if !self.caps_word {
            return Mods::empty();
        }
        match caps_word::on_press(key) {
            Continuation::Shifted => Mods::SHIFT,
            Continuation::Plain => Mods::empty(),
            Continuation::Stop => {
                self.end_caps_word(events);
                Mods::empty()
            }
        }
    }

    fn end_caps_word(&mut self, events: &mut dyn EventQueue) {
        if self.caps_word {
            self.caps_word = false;
            events.push(Event::CapsWord(false));
        }
    }

    /// Register an ordinary key, applying overrides, and report.
    fn report_key(&mut self, pos: u8, code: Keyboard, extra: Mods, events: &mut dyn EventQueue) {
        let mut down = Down::Key {
            code,
            extra,
            suppress: Mods::empty(),
        };
        for ov in self.overrides {
            if ov.trigger != Key::Plain(code) && ov.trigger != Key::Chord(code, extra) {
                continue;
            }
            if !self.mods.contains(ov.trigger_mods) {
                continue;
            }
            if let Some((new_code, new_mods)) = chord_of(ov.replacement) {
                down = Down::Key {
                    code: new_code,
                    extra: new_mods,
                    suppress: ov.trigger_mods,
                };
            }
            break;
        }
        self.down[pos as usize] = down;
        self.show(events);
    }

    fn set_layer(&mut self, layer: u8, on: bool, events: &mut dyn EventQueue) {
        self.layers.set(layer, on);
        if let Some((lower, raise, adjust)) = self.tri_layer {
            self.layers.update_tri_layer(lower, raise, adjust);
        }
        let highest = self.layers.highest();
        if highest != self.reported_layer {
            info!("Layer: {}", highest);
            self.reported_layer = highest;
            events.push(Event::Layer(highest));
        }
    }

    /// The modifiers the host should currently see.
    fn effective_mods(&self) -> Mods {
        let mut mods = self.mods;
        for down in self.down.iter() {
            if let Down::Key {
                extra, suppress, ..
            } = down
            {
                mods = (mods - *suppress) | *extra;
            }
        }
        mods
    }

    /// Report the full current key set.
    fn show(&self, events: &mut dyn EventQueue) {
        let mut keys: Vec<Keyboard> = self.effective_mods().keys().into_iter().collect();
        for down in self.down.iter() {
            if let Down::Key { code, .. } = down {
                keys.push(*code);
            }
        }
        events.push(Event::Key(KeyAction::KeySet(keys)));
    }

    /// One synthetic tap, then put the physically held keys back.
    fn send_tap(&self, code: Keyboard, mods: Mods, events: &mut dyn EventQueue) {
        events.push(Event::Key(KeyAction::KeyPress(code, mods)));
        events.push(Event::Key(KeyAction::KeyRelease));
        self.restore_report(events);
    }

    /// Type a rewrite sequence, then put the physically held keys back.
    fn send_rewrite(&self, rewrite: &Rewrite, events: &mut dyn EventQueue) {
        if rewrite.hold.is_empty() {
            for tap in &rewrite.taps {
                events.push(Event::Key(KeyAction::KeyPress(tap.code, tap.mods)));
                events.push(Event::Key(KeyAction::KeyRelease));
            }
        } else {
            // Keep the hold mods asserted between taps; alt codes break if
            // Alt lifts mid-sequence.
            events.push(Event::Key(KeyAction::ModOnly(rewrite.hold)));
            for tap in &rewrite.taps {
                events.push(Event::Key(KeyAction::KeyPress(
                    tap.code,
                    rewrite.hold | tap.mods,
                )));
                events.push(Event::Key(KeyAction::ModOnly(rewrite.hold)));
            }
            events.push(Event::Key(KeyAction::KeyRelease));
        }
        self.restore_report(events);
    }

    fn restore_report(&self, events: &mut dyn EventQueue) {
        let held = self
            .down
            .iter()
            .any(|down| matches!(down, Down::Key { .. }));
        if held || !self.effective_mods().is_empty() {
            self.show(events);
        }
    }

    fn settle_hold(&mut self, pending: PendingTap, events: &mut dyn EventQueue) {
        self.down[pending.pos as usize] = Down::Layer(pending.layer);
        self.set_layer(pending.layer, true, events);
    }
}

/// The plain chord a key types, if it is that kind of key.
fn chord_of(key: Key) -> Option<(Keyboard, Mods)> {
    match key {
        Key::Plain(code) => Some((code, Mods::empty())),
        Key::Chord(code, mods) => Some((code, mods)),
        _ => None,
    }
}

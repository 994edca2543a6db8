/// Host-side input and timing helpers for the terminal front end.
///
/// Terminal key events are turned into the per-tick `Input` the simulation
/// expects, and wall-clock frame times into whole-millisecond steps.

use std::collections::HashMap;
use std::time::Duration;

use crossterm::event::KeyCode;

use crate::entities::Input;

/// A key counts as held if its last press/repeat arrived within this many
/// frames.  Only used on terminals that never report key releases.
pub const HOLD_WINDOW: u64 = 4;

const LEFT_KEYS: [KeyCode; 3] = [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
const RIGHT_KEYS: [KeyCode; 3] = [KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')];
const FIRE_KEY: KeyCode = KeyCode::Char(' ');

// ── Key tracking ─────────────────────────────────────────────────────────────

/// Movement is level-triggered (held keys), fire is press-triggered: every
/// `Press` of Space queues one shot and repeats are ignored.  Queued shots
/// come out on alternate samples so the simulation sees a fresh
/// not-pressed → pressed edge for each one.
#[derive(Debug, Default)]
pub struct KeyTracker {
    /// Terminal reports `Release`; held keys then never expire on their own.
    release_events: bool,
    key_frame: HashMap<KeyCode, u64>,
    pending_shots: u32,
    fired_last_sample: bool,
}

impl KeyTracker {
    pub fn new(release_events: bool) -> Self {
        Self {
            release_events,
            ..Self::default()
        }
    }

    pub fn press(&mut self, code: KeyCode, frame: u64) {
        self.key_frame.insert(code, frame);
        if code == FIRE_KEY {
            self.pending_shots += 1;
        }
    }

    pub fn repeat(&mut self, code: KeyCode, frame: u64) {
        self.key_frame.insert(code, frame);
    }

    pub fn release(&mut self, code: KeyCode) {
        self.key_frame.remove(&code);
    }

    pub fn is_held(&self, code: KeyCode, frame: u64) -> bool {
        match self.key_frame.get(&code) {
            Some(_) if self.release_events => true,
            Some(&last) => frame.saturating_sub(last) <= HOLD_WINDOW,
            None => false,
        }
    }

    fn any_held(&self, keys: &[KeyCode], frame: u64) -> bool {
        keys.iter().any(|&k| self.is_held(k, frame))
    }

    /// The input for one tick.  Consumes at most one queued shot.
    pub fn sample(&mut self, frame: u64) -> Input {
        let fire = self.pending_shots > 0 && !self.fired_last_sample;
        if fire {
            self.pending_shots -= 1;
        }
        self.fired_last_sample = fire;
        Input {
            left: self.any_held(&LEFT_KEYS, frame),
            right: self.any_held(&RIGHT_KEYS, frame),
            fire,
        }
    }
}

// ── Frame timing ─────────────────────────────────────────────────────────────

/// Converts frame durations into whole-millisecond steps, carrying the
/// sub-millisecond remainder into the next frame so the game clock keeps
/// pace with real time.
#[derive(Debug)]
pub struct FrameClock {
    max_step: Duration,
    carry: Duration,
}

impl FrameClock {
    /// `max_step` caps a single frame; time lost to a stall is dropped.
    pub fn new(max_step: Duration) -> Self {
        Self {
            max_step,
            carry: Duration::ZERO,
        }
    }

    pub fn step(&mut self, frame_time: Duration) -> u64 {
        let total = frame_time.min(self.max_step) + self.carry;
        let whole_ms = total.as_millis() as u64;
        self.carry = total - Duration::from_millis(whole_ms);
        whole_ms
    }
}

//! Intent tracker for terminal environments.
//!
//! Turns press/repeat/release key events into the held/edge intent snapshot
//! the engine consumes. Terminals without the keyboard enhancement protocol
//! never report releases; for those, an intent that sees no press or repeat
//! for `key_release_timeout_ms` is released automatically. The first release
//! event observed switches the timeout off for good.

use arrayvec::ArrayVec;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::intent_for_key;
use crate::types::{Intent, Intents};

// A held key auto-repeats well within this on common terminals, so a tap
// still reads as a short hold rather than a stuck key.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: f64 = 150.0;

#[derive(Debug, Clone)]
pub struct IntentTracker {
    intents: Intents,
    /// Time since the last press/repeat, per intent.
    idle_ms: [f64; 5],
    release_events_seen: bool,
    key_release_timeout_ms: f64,
}

impl IntentTracker {
    pub fn new() -> Self {
        Self {
            intents: Intents::default(),
            idle_ms: [0.0; 5],
            release_events_seen: false,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: f64) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> f64 {
        self.key_release_timeout_ms
    }

    pub fn release_events_seen(&self) -> bool {
        self.release_events_seen
    }

    /// Feed one key event. Returns the intent it affected.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<Intent> {
        let intent = intent_for_key(key.code)?;
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.press(intent),
            KeyEventKind::Release => {
                self.release_events_seen = true;
                self.intents.release(intent);
            }
        }
        Some(intent)
    }

    pub fn press(&mut self, intent: Intent) {
        self.idle_ms[intent.index()] = 0.0;
        self.intents.press(intent);
    }

    /// Advance idle timers and auto-release stale intents.
    ///
    /// Returns the intents released by the timeout.
    pub fn update(&mut self, elapsed_ms: f64) -> ArrayVec<Intent, 5> {
        let mut released = ArrayVec::<Intent, 5>::new();
        if self.release_events_seen {
            return released;
        }

        for intent in Intent::ALL {
            if !self.intents.get(intent).is_down() {
                continue;
            }
            let idle = &mut self.idle_ms[intent.index()];
            *idle += elapsed_ms.max(0.0);
            if *idle > self.key_release_timeout_ms {
                self.intents.release(intent);
                released.push(intent);
            }
        }

        released
    }

    pub fn intents(&self) -> &Intents {
        &self.intents
    }

    pub fn intents_mut(&mut self) -> &mut Intents {
        &mut self.intents
    }

    /// Clear every edge; call once per frame after the game step.
    pub fn end_step(&mut self) {
        self.intents.end_step();
    }

    /// Release everything, e.g. on focus loss.
    pub fn reset(&mut self) {
        self.intents.release_all();
        self.idle_ms = [0.0; 5];
    }
}

impl Default for IntentTracker {
    fn default() -> Self {
        Self::new()
    }
}

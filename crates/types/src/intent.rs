//! Player intents - the closed input vocabulary of the engine
//!
//! Each intent carries two bits: whether it is currently held, and whether it
//! became held since the previous step (the edge). The input collaborator
//! sets them from key events once per frame; the engine only clears edges it
//! consumed and stops repeats (see [`IntentState::stop`]).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The five intents understood by the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Intent {
    Left,
    Right,
    Rotate,
    Drop,
    /// Pause/resume toggle, consumed by the presentation flow.
    Action,
}

impl Intent {
    pub const ALL: [Intent; 5] = [
        Intent::Left,
        Intent::Right,
        Intent::Rotate,
        Intent::Drop,
        Intent::Action,
    ];

    pub fn index(self) -> usize {
        match self {
            Intent::Left => 0,
            Intent::Right => 1,
            Intent::Rotate => 2,
            Intent::Drop => 3,
            Intent::Action => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Left => "left",
            Intent::Right => "right",
            Intent::Rotate => "rotate",
            Intent::Drop => "drop",
            Intent::Action => "action",
        }
    }
}

impl FromStr for Intent {
    type Err = UnknownIntent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Intent::Left),
            "right" => Ok(Intent::Right),
            "rotate" => Ok(Intent::Rotate),
            "drop" => Ok(Intent::Drop),
            "action" => Ok(Intent::Action),
            _ => Err(UnknownIntent(s.to_owned())),
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lookup of an intent name outside the fixed vocabulary.
///
/// The vocabulary is closed, so hitting this is a programming error in the
/// caller rather than a runtime condition to recover from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownIntent(pub String);

impl fmt::Display for UnknownIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown intent `{}` (expected one of left, right, rotate, drop, action)",
            self.0
        )
    }
}

impl std::error::Error for UnknownIntent {}

/// Held/edge state of a single intent.
///
/// `down` mirrors the physical key and is only changed by [`press`](Self::press)
/// and [`release`](Self::release). `held` can additionally be dropped by
/// [`stop`](Self::stop); it then stays false until the key is released and
/// pressed again, which is how rotation and drop avoid auto-repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IntentState {
    held: bool,
    edge: bool,
    down: bool,
}

impl IntentState {
    /// Key went (or is still) down. Only a transition sets `held` and the edge.
    pub fn press(&mut self) {
        if !self.down {
            self.down = true;
            self.held = true;
            self.edge = true;
        }
    }

    pub fn release(&mut self) {
        self.down = false;
        self.held = false;
    }

    pub fn held(&self) -> bool {
        self.held
    }

    /// Became held since the previous step.
    pub fn edge(&self) -> bool {
        self.edge
    }

    pub fn is_down(&self) -> bool {
        self.down
    }

    pub fn clear_edge(&mut self) {
        self.edge = false;
    }

    /// Drop the held state until the key is released and pressed again.
    pub fn stop(&mut self) {
        self.held = false;
        self.edge = false;
    }
}

/// Intent snapshot passed to every engine step.
///
/// # Examples
///
/// ```
/// use blockfall_types::{Intent, Intents};
///
/// let mut intents = Intents::default();
/// intents.press(Intent::Left);
/// assert!(intents.left.held() && intents.left.edge());
///
/// intents.end_step();
/// assert!(intents.left.held() && !intents.left.edge());
///
/// assert!(intents.by_name("jump").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Intents {
    pub left: IntentState,
    pub right: IntentState,
    pub rotate: IntentState,
    pub drop: IntentState,
    pub action: IntentState,
}

impl Intents {
    pub fn get(&self, intent: Intent) -> &IntentState {
        match intent {
            Intent::Left => &self.left,
            Intent::Right => &self.right,
            Intent::Rotate => &self.rotate,
            Intent::Drop => &self.drop,
            Intent::Action => &self.action,
        }
    }

    pub fn get_mut(&mut self, intent: Intent) -> &mut IntentState {
        match intent {
            Intent::Left => &mut self.left,
            Intent::Right => &mut self.right,
            Intent::Rotate => &mut self.rotate,
            Intent::Drop => &mut self.drop,
            Intent::Action => &mut self.action,
        }
    }

    /// Look an intent up by its name.
    pub fn by_name(&self, name: &str) -> Result<&IntentState, UnknownIntent> {
        let intent: Intent = name.parse()?;
        Ok(self.get(intent))
    }

    pub fn press(&mut self, intent: Intent) {
        self.get_mut(intent).press();
    }

    pub fn release(&mut self, intent: Intent) {
        self.get_mut(intent).release();
    }

    /// Forget every edge; called once after each step.
    pub fn end_step(&mut self) {
        for intent in Intent::ALL {
            self.get_mut(intent).clear_edge();
        }
    }

    /// Release everything (e.g. when the terminal loses focus).
    pub fn release_all(&mut self) {
        for intent in Intent::ALL {
            self.get_mut(intent).release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_only_latches_on_transition() {
        let mut st = IntentState::default();
        st.press();
        assert!(st.held() && st.edge());

        st.clear_edge();
        st.press();
        assert!(st.held());
        assert!(!st.edge(), "repeat press must not raise a new edge");
    }

    #[test]
    fn stop_holds_until_released_and_pressed_again() {
        let mut st = IntentState::default();
        st.press();
        st.stop();
        assert!(!st.held());
        assert!(st.is_down());

        // Auto-repeat while the key is still down.
        st.press();
        assert!(!st.held());

        st.release();
        st.press();
        assert!(st.held() && st.edge());
    }

    #[test]
    fn unknown_intent_names_are_rejected() {
        let intents = Intents::default();
        let err = intents.by_name("hold").unwrap_err();
        assert_eq!(err, UnknownIntent("hold".to_owned()));
        assert!(err.to_string().contains("hold"));
    }

    #[test]
    fn every_intent_name_roundtrips() {
        for intent in Intent::ALL {
            assert_eq!(intent.as_str().parse::<Intent>(), Ok(intent));
            assert_eq!(Intent::ALL[intent.index()], intent);
        }
    }

    #[test]
    fn end_step_clears_edges_but_keeps_held() {
        let mut intents = Intents::default();
        intents.press(Intent::Drop);
        intents.press(Intent::Rotate);
        intents.end_step();
        assert!(intents.drop.held());
        assert!(intents.rotate.held());
        assert!(!intents.drop.edge());
        assert!(!intents.rotate.edge());
    }
}

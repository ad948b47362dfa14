//! Presentation flow: which screen is up and when the engine runs.
//!
//! ```text
//! Title -> Play <-> Pause
//!           |  \
//!           |   LineClear -> (Sprint level-up) LevelTransition -> Play
//!           |            \-> Play
//!           GameOver -> Title
//! ```
//!
//! Every screen keeps an animation timer that restarts when the screen is
//! entered. The engine is only advanced while in `Play`.

use log::debug;
use rand::Rng;

use crate::core::Engine;
use crate::types::{
    GameMode, Intents, GAME_OVER_SCREEN_MS, LEVEL_TRANSITION_MS, LINE_CLEAR_FLASH_MS,
    LINE_CLEAR_PHASE_MS,
};

const TITLE_BLINK_ON_MS: f64 = 750.0;
const PAUSE_BLINK_ON_MS: f64 = 500.0;
const BLINK_PERIOD_MS: f64 = 1000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Title,
    Play,
    Pause,
    LineClear,
    LevelTransition,
    GameOver,
}

impl Screen {
    /// Whether the falling piece and its ghost are drawn on this screen.
    pub fn shows_pieces(self) -> bool {
        matches!(
            self,
            Screen::Play | Screen::Pause | Screen::LineClear | Screen::LevelTransition
        )
    }
}

/// Phase of the line-clear flash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashPhase {
    Light,
    Dark,
    Blank,
}

/// What the view needs to know about the flow for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenState {
    pub screen: Screen,
    pub prompt_visible: bool,
    pub flash: Option<FlashPhase>,
    /// Frame rate readout for the side panel, when enabled.
    pub fps: Option<u32>,
}

impl ScreenState {
    pub fn new(screen: Screen) -> Self {
        Self {
            screen,
            prompt_visible: false,
            flash: None,
            fps: None,
        }
    }

    pub fn with_fps(mut self, fps: u32) -> Self {
        self.fps = Some(fps);
        self
    }
}

#[derive(Debug, Clone)]
pub struct Flow {
    screen: Screen,
    timer_ms: f64,
}

impl Flow {
    pub fn new() -> Self {
        Self {
            screen: Screen::Title,
            timer_ms: 0.0,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn timer_ms(&self) -> f64 {
        self.timer_ms
    }

    fn enter(&mut self, screen: Screen) {
        debug!("screen {:?} -> {:?}", self.screen, screen);
        self.screen = screen;
        self.timer_ms = 0.0;
    }

    /// Advance the current screen by `elapsed_ms`.
    pub fn step<R: Rng>(&mut self, engine: &mut Engine<R>, elapsed_ms: f64, intents: &mut Intents) {
        let dt = if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
            elapsed_ms
        } else {
            0.0
        };
        self.timer_ms += dt;

        match self.screen {
            Screen::Title => {
                if intents.action.held() {
                    intents.action.stop();
                    engine.new_game();
                    self.enter(Screen::Play);
                } else {
                    self.wrap_blink();
                }
            }
            Screen::Play => {
                if intents.action.held() {
                    intents.action.stop();
                    self.enter(Screen::Pause);
                    return;
                }
                engine.update(dt, intents);
                if engine.is_game_over() {
                    self.enter(Screen::GameOver);
                } else if !engine.pending_cleared_rows().is_empty() {
                    self.enter(Screen::LineClear);
                }
            }
            Screen::LineClear => {
                if engine.pending_cleared_rows().is_empty() || self.timer_ms >= LINE_CLEAR_FLASH_MS {
                    engine.clear_pending_rows();
                    if engine.mode() == GameMode::Sprint && engine.level_just_increased() {
                        self.enter(Screen::LevelTransition);
                    } else {
                        self.enter(Screen::Play);
                    }
                }
            }
            Screen::LevelTransition => {
                if self.timer_ms >= LEVEL_TRANSITION_MS {
                    self.enter(Screen::Play);
                }
            }
            Screen::Pause => {
                if intents.action.held() {
                    intents.action.stop();
                    self.enter(Screen::Play);
                } else {
                    self.wrap_blink();
                }
            }
            Screen::GameOver => {
                if self.timer_ms > GAME_OVER_SCREEN_MS {
                    self.enter(Screen::Title);
                }
            }
        }
    }

    fn wrap_blink(&mut self) {
        if self.timer_ms >= BLINK_PERIOD_MS {
            self.timer_ms %= BLINK_PERIOD_MS;
        }
    }

    /// "Press ENTER" prompt on the title or pause screen.
    pub fn prompt_visible(&self) -> bool {
        match self.screen {
            Screen::Title => self.timer_ms < TITLE_BLINK_ON_MS,
            Screen::Pause => self.timer_ms < PAUSE_BLINK_ON_MS,
            _ => false,
        }
    }

    /// Current flash phase while on the line-clear screen.
    pub fn flash_phase(&self) -> Option<FlashPhase> {
        if self.screen != Screen::LineClear {
            return None;
        }
        Some(if self.timer_ms < LINE_CLEAR_PHASE_MS {
            FlashPhase::Light
        } else if self.timer_ms < 2.0 * LINE_CLEAR_PHASE_MS {
            FlashPhase::Dark
        } else {
            FlashPhase::Blank
        })
    }

    pub fn state(&self) -> ScreenState {
        ScreenState {
            screen: self.screen,
            prompt_visible: self.prompt_visible(),
            flash: self.flash_phase(),
            fps: None,
        }
    }
}

impl Default for Flow {
    fn default() -> Self {
        Self::new()
    }
}

//! Screen flow driven end to end: title, play, line clear, transition, game over

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

use blockfall::core::{Engine, EngineConfig};
use blockfall::input::IntentTracker;
use blockfall::term::{FlashPhase, Flow, Screen};
use blockfall::types::{GameMode, Intent, Intents, PieceKind, Rotation};

fn engine(mode: GameMode, seed: u64) -> Engine {
    Engine::new(EngineConfig::default().with_mode(mode).with_seed(seed)).unwrap()
}

fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind,
        state: KeyEventState::NONE,
    }
}

/// Press Action on the title screen and land in a fresh game.
fn start(flow: &mut Flow, engine: &mut Engine, intents: &mut Intents) {
    assert_eq!(flow.screen(), Screen::Title);
    intents.press(Intent::Action);
    flow.step(engine, 16.0, intents);
    intents.release(Intent::Action);
    intents.end_step();
    assert_eq!(flow.screen(), Screen::Play);
}

/// Stand an I piece upright and walk it against the left wall.
fn upright_i_at_left_wall(engine: &mut Engine) {
    engine.replace_falling(PieceKind::I);
    let mut intents = Intents::default();
    intents.press(Intent::Rotate);
    engine.update(100.0, &mut intents);
    intents.release(Intent::Rotate);
    intents.end_step();
    assert_ne!(engine.falling().rotation(), Rotation::North);

    intents.press(Intent::Left);
    while engine.falling().cells()[0].0 > 0 {
        engine.update(80.0, &mut intents);
        intents.end_step();
    }
}

#[test]
fn test_sprint_time_up_goes_to_game_over_then_title() {
    let mut engine = engine(GameMode::Sprint, 1);
    let mut flow = Flow::new();
    let mut intents = Intents::default();
    start(&mut flow, &mut engine, &mut intents);

    flow.step(&mut engine, 30_000.0, &mut intents);
    assert!(engine.is_game_over());
    assert_eq!(flow.screen(), Screen::GameOver);

    flow.step(&mut engine, 2000.0, &mut intents);
    assert_eq!(flow.screen(), Screen::GameOver);
    flow.step(&mut engine, 1.0, &mut intents);
    assert_eq!(flow.screen(), Screen::Title);

    // A second start resets the finished game.
    start(&mut flow, &mut engine, &mut intents);
    assert!(!engine.is_game_over());
    assert_eq!(engine.score(), 0);
}

#[test]
fn test_normal_line_clear_flashes_then_resumes_play() {
    let mut engine = engine(GameMode::Normal, 2);
    let mut flow = Flow::new();
    let mut intents = Intents::default();
    start(&mut flow, &mut engine, &mut intents);

    engine.board_mut().fill_row_except(21, PieceKind::T, &[4, 5]);
    engine.replace_falling(PieceKind::O);

    intents.press(Intent::Drop);
    while flow.screen() == Screen::Play {
        flow.step(&mut engine, 16.0, &mut intents);
        intents.end_step();
    }
    assert_eq!(flow.screen(), Screen::LineClear);
    assert_eq!(flow.flash_phase(), Some(FlashPhase::Light));
    assert_eq!(engine.pending_cleared_rows(), &[21]);
    // Normal level 1 ends after one line, but only Sprint shows a transition.
    assert!(engine.level_just_increased());

    let score = engine.score();
    flow.step(&mut engine, 299.0, &mut intents);
    assert_eq!(flow.screen(), Screen::LineClear);
    assert_eq!(flow.state().flash, Some(FlashPhase::Blank));
    assert_eq!(engine.score(), score, "engine is frozen during the flash");

    flow.step(&mut engine, 1.0, &mut intents);
    assert_eq!(flow.screen(), Screen::Play);
    assert!(engine.pending_cleared_rows().is_empty());
}

#[test]
fn test_sprint_level_up_shows_transition() {
    let mut engine = engine(GameMode::Sprint, 8);
    let mut flow = Flow::new();
    let mut intents = Intents::default();
    start(&mut flow, &mut engine, &mut intents);

    engine.board_mut().clear();
    for y in 17..22 {
        engine.board_mut().fill_row_except(y, PieceKind::L, &[0]);
    }

    // First four lines straight through the engine.
    upright_i_at_left_wall(&mut engine);
    let mut drop = Intents::default();
    drop.press(Intent::Drop);
    while drop.drop.held() {
        engine.update(16.0, &mut drop);
        drop.end_step();
    }
    assert_eq!(engine.lines(), 4);
    engine.clear_pending_rows();

    // The fifth line goes through the flow.
    upright_i_at_left_wall(&mut engine);
    intents.press(Intent::Drop);
    while flow.screen() == Screen::Play {
        flow.step(&mut engine, 16.0, &mut intents);
        intents.end_step();
    }
    assert_eq!(flow.screen(), Screen::LineClear);
    assert_eq!(engine.level(), 2);

    flow.step(&mut engine, 300.0, &mut intents);
    assert_eq!(flow.screen(), Screen::LevelTransition);

    flow.step(&mut engine, 999.0, &mut intents);
    assert_eq!(flow.screen(), Screen::LevelTransition);
    flow.step(&mut engine, 1.0, &mut intents);
    assert_eq!(flow.screen(), Screen::Play);
}

#[test]
fn test_pause_prompt_blinks() {
    let mut engine = engine(GameMode::Normal, 3);
    let mut flow = Flow::new();
    let mut intents = Intents::default();
    start(&mut flow, &mut engine, &mut intents);

    intents.press(Intent::Action);
    flow.step(&mut engine, 16.0, &mut intents);
    intents.release(Intent::Action);
    assert_eq!(flow.screen(), Screen::Pause);
    assert!(flow.prompt_visible());

    flow.step(&mut engine, 500.0, &mut intents);
    assert!(!flow.prompt_visible());
    flow.step(&mut engine, 500.0, &mut intents);
    assert!(flow.prompt_visible());
}

#[test]
fn test_key_events_drive_the_engine() {
    let mut engine = engine(GameMode::Normal, 4);
    let mut flow = Flow::new();
    let mut tracker = IntentTracker::new();

    tracker.handle_key_event(key(KeyCode::Enter, KeyEventKind::Press));
    flow.step(&mut engine, 16.0, tracker.intents_mut());
    tracker.end_step();
    assert_eq!(flow.screen(), Screen::Play);
    tracker.handle_key_event(key(KeyCode::Enter, KeyEventKind::Release));

    // Terminal with release events: a tap moves exactly one column.
    engine.replace_falling(PieceKind::T);
    tracker.handle_key_event(key(KeyCode::Char('a'), KeyEventKind::Press));
    flow.step(&mut engine, 10.0, tracker.intents_mut());
    tracker.end_step();
    assert_eq!(engine.falling().x(), 3);

    tracker.handle_key_event(key(KeyCode::Char('a'), KeyEventKind::Release));
    for _ in 0..4 {
        tracker.update(100.0);
        flow.step(&mut engine, 100.0, tracker.intents_mut());
        tracker.end_step();
    }
    assert_eq!(engine.falling().x(), 3);
}

#[test]
fn test_key_without_release_times_out() {
    let mut engine = engine(GameMode::Normal, 5);
    let mut tracker = IntentTracker::new().with_key_release_timeout_ms(150.0);
    engine.replace_falling(PieceKind::T);

    tracker.handle_key_event(key(KeyCode::Right, KeyEventKind::Press));
    engine.update(10.0, tracker.intents_mut());
    tracker.end_step();
    assert_eq!(engine.falling().x(), 5);

    // No release ever arrives; the tracker lets go after the timeout.
    let released = tracker.update(200.0);
    assert_eq!(released.as_slice(), &[Intent::Right]);
    for _ in 0..3 {
        engine.update(100.0, tracker.intents_mut());
        tracker.end_step();
    }
    assert_eq!(engine.falling().x(), 5);
}

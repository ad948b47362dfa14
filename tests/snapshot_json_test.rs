//! Snapshots and intents as JSON, the shape a replay or remote viewer reads

use blockfall::core::{Engine, EngineConfig, GameSnapshot};
use blockfall::types::{GameMode, Intent, Intents, PieceKind};

#[test]
fn test_snapshot_json_roundtrip() {
    let mut engine = Engine::new(EngineConfig::default().with_mode(GameMode::Sprint).with_seed(11)).unwrap();
    let mut intents = Intents::default();
    intents.press(Intent::Drop);
    for _ in 0..40 {
        engine.update(16.0, &mut intents);
        intents.end_step();
    }

    let snap = engine.snapshot();
    let json = serde_json::to_string(&snap).unwrap();
    let back: GameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, snap);
}

#[test]
fn test_snapshot_json_layout() {
    let mut engine = Engine::new(EngineConfig::default().with_size(6, 4).with_seed(2)).unwrap();
    engine.board_mut().set(5, 3, Some(PieceKind::Z));
    engine.replace_falling(PieceKind::O);

    let v = serde_json::to_value(engine.snapshot()).unwrap();
    assert_eq!(v["mode"], "Normal");
    assert_eq!(v["width"], 6);
    assert_eq!(v["height"], 4);
    assert_eq!(v["board"].as_array().unwrap().len(), 24);
    // Kinds are stored as index + 1.
    assert_eq!(v["board"][23], PieceKind::Z.index() + 1);
    assert_eq!(v["falling"]["kind"], "O");
    assert_eq!(v["falling"]["cells"][0], serde_json::json!([1, 0]));
    assert!(v["time_remaining_ms"].is_null());
    assert_eq!(v["game_over"], false);
    assert_eq!(v["move_progress"], 0.0);
    assert_eq!(v["descending"], false);
}

#[test]
fn test_intents_json_roundtrip() {
    let mut intents = Intents::default();
    intents.press(Intent::Left);
    intents.press(Intent::Rotate);
    intents.rotate.stop();

    let json = serde_json::to_string(&intents).unwrap();
    let back: Intents = serde_json::from_str(&json).unwrap();
    assert_eq!(back, intents);
    assert!(back.left.held());
    assert!(!back.rotate.held());
    assert!(back.rotate.is_down());
}

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use blockfall::core::rng::seeded;
use blockfall::core::{Board, Engine, EngineConfig, Piece};
use blockfall::types::{GameMode, Intent, Intents, PieceKind};

fn engine(mode: GameMode) -> Engine {
    Engine::new(EngineConfig::default().with_mode(mode).with_seed(12345)).unwrap()
}

fn bench_update(c: &mut Criterion) {
    let mut engine = engine(GameMode::Normal);
    let mut intents = Intents::default();

    c.bench_function("engine_update_16ms", |b| {
        b.iter(|| {
            engine.update(black_box(16.0), &mut intents);
            if engine.is_game_over() {
                engine.new_game();
            }
        })
    });
}

fn bench_drop_until_lock(c: &mut Criterion) {
    let mut engine = engine(GameMode::Normal);

    c.bench_function("drop_until_lock", |b| {
        b.iter(|| {
            let mut intents = Intents::default();
            intents.press(Intent::Drop);
            let score = engine.score();
            while engine.score() == score {
                engine.update(1.0, &mut intents);
            }
            if engine.is_game_over() {
                engine.new_game();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new(12, 22);
            for y in 18..22 {
                board.fill_row_except(y, PieceKind::I, &[]);
            }
            let full = board.search_full_lines();
            board.delete_lines(black_box(&full));
        })
    });
}

fn bench_insert_garbage(c: &mut Criterion) {
    let mut rng = seeded(7);
    let mut board = Board::new(12, 22);

    c.bench_function("insert_10_lines", |b| {
        b.iter(|| {
            board.insert_lines(black_box(10), &mut rng);
        })
    });
}

fn bench_translate(c: &mut Criterion) {
    let board = Board::new(12, 22);
    let mut piece = Piece::new(PieceKind::T, 4);
    let mut dx = 1;

    c.bench_function("translate", |b| {
        b.iter(|| {
            if !piece.translate(&board, dx, 0) {
                dx = -dx;
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let board = Board::new(12, 22);
    let mut piece = Piece::new(PieceKind::J, 4);

    c.bench_function("rotate", |b| {
        b.iter(|| {
            piece.rotate(&board, black_box(1));
        })
    });
}

criterion_group!(
    benches,
    bench_update,
    bench_drop_until_lock,
    bench_line_clear,
    bench_insert_garbage,
    bench_translate,
    bench_rotate
);
criterion_main!(benches);

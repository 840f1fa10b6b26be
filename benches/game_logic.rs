use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_memory::core::{BoardConfig, BoardFactory, GameConfig, GameSession, GameSnapshot, SessionConfig};
use tui_memory::term::{FrameBuffer, GameView, Viewport};
use tui_memory::types::{Direction, GameCommand};

fn bench_build_board(c: &mut Criterion) {
    let mut factory = BoardFactory::new(BoardConfig::default(), 12345).unwrap();

    c.bench_function("build_board_4x5", |b| {
        b.iter(|| black_box(factory.build()));
    });
}

fn bench_flip_cycle(c: &mut Criterion) {
    let config = SessionConfig {
        reveal_pause_ms: 0,
        starting_seconds: i32::MAX / 2,
        pair_not_found_bonus: 0,
        ..SessionConfig::default()
    };

    c.bench_function("flip_mismatch_cycle", |b| {
        // A B / A B: (1,1) and (1,2) never match.
        let board = BoardFactory::layout(2, 2, &[1, 2, 1, 2]).unwrap();
        let mut session = GameSession::with_board(board, config.clone());
        session.start();

        b.iter(|| {
            session.apply(GameCommand::Flip);
            session.apply(GameCommand::Move(Direction::Right));
            session.apply(GameCommand::Flip);
            session.apply(GameCommand::Move(Direction::Left));
            session.drain_events().for_each(drop);
        })
    });
}

fn bench_tick(c: &mut Criterion) {
    let mut config = GameConfig::default();
    config.session.starting_seconds = i32::MAX / 2;
    let mut session = GameSession::new(&config, 12345).unwrap();
    session.start();

    c.bench_function("tick", |b| {
        b.iter(|| {
            session.apply(black_box(GameCommand::Tick));
            session.drain_events().for_each(drop);
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut session = GameSession::new(&GameConfig::default(), 12345).unwrap();
    session.start();
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("snapshot_and_render_80x24", |b| {
        b.iter(|| {
            session.snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(80, 24), &mut fb);
            black_box(&fb);
        })
    });
}

criterion_group!(
    benches,
    bench_build_board,
    bench_flip_cycle,
    bench_tick,
    bench_render
);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use conquest_bot::engine::Engine;
use conquest_bot::pathfind::shortest_path;
use conquest_bot::strategy::{attack_transfer, place_armies, select_starting_regions, Deadline};

#[path = "../tests/common/mod.rs"]
mod common;

use common::{SETTINGS, WORLD_CANDIDATES, WORLD_MAP};

/// Mid-game position on the world map: player1 holds Australia and part of
/// Asia, player2 sits on the other side of the border.
const MIDGAME_UPDATE: &str = "update_map 39 player1 4 40 player1 2 41 player1 3 42 player1 1 \
    38 player1 6 33 player1 2 37 player2 5 34 player2 3 32 player2 2 28 neutral 2 27 neutral 2 \
    30 neutral 2 35 neutral 2 36 neutral 2";

fn world_engine(extra: &[&str]) -> Engine {
    let mut engine = Engine::new();
    let mut sink = std::io::sink();
    for line in SETTINGS.iter().chain(WORLD_MAP.iter()).chain(extra) {
        engine.handle_line(line, &mut sink).unwrap();
    }
    engine
}

fn bench_setup(c: &mut Criterion) {
    c.bench_function("setup_world_map", |b| b.iter(|| world_engine(black_box(&[MIDGAME_UPDATE]))));
}

fn bench_shortest_path(c: &mut Criterion) {
    let engine = world_engine(&[]);
    c.bench_function("shortest_path_1_to_42", |b| {
        b.iter(|| shortest_path(black_box(&engine.state), black_box(1), black_box(42)))
    });
}

fn bench_pick(c: &mut Criterion) {
    let engine = world_engine(&[]);
    c.bench_function("pick_12_candidates", |b| {
        b.iter(|| {
            select_starting_regions(
                black_box(&engine.state),
                black_box(&WORLD_CANDIDATES),
                &Deadline::never(),
            )
        })
    });
}

fn bench_place(c: &mut Criterion) {
    let engine = world_engine(&[MIDGAME_UPDATE]);
    c.bench_function("place_armies_midgame", |b| {
        b.iter_batched(
            || engine.state.clone(),
            |mut state| {
                place_armies(&mut state, "player1", "player2", black_box(5), &Deadline::never())
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_attack(c: &mut Criterion) {
    let engine = world_engine(&[MIDGAME_UPDATE]);
    c.bench_function("attack_transfer_midgame", |b| {
        b.iter_batched(
            || engine.state.clone(),
            |mut state| attack_transfer(&mut state, "player1", "player2", &Deadline::never()),
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_full_round(c: &mut Criterion) {
    let lines = [MIDGAME_UPDATE, "go place_armies 2000", "go attack/transfer 2000"];
    let base = world_engine(&[]);
    c.bench_function("protocol_round", |b| {
        b.iter_batched(
            || (base.state.clone(), base.settings.clone()),
            |(state, settings)| {
                let mut engine = Engine::new();
                engine.state = state;
                engine.settings = settings;
                let mut out = Vec::new();
                for line in &lines {
                    engine.handle_line(black_box(line), &mut out).unwrap();
                }
                out
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_setup,
    bench_shortest_path,
    bench_pick,
    bench_place,
    bench_attack,
    bench_full_round,
);
criterion_main!(benches);

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tilesweep_core::*;

const TIERS: [(&str, Coord, CellCount); 4] = [
    ("beginner", 8, 10),
    ("intermediate", 16, 40),
    ("expert", 24, 99),
    ("dense", 32, 600),
];

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (name, dimension, mines) in TIERS {
        let config = GameConfig::new(dimension, mines).expect("tier config is valid");
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, &config| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                black_box(RandomBoardGenerator::new(seed).generate(config))
            })
        });
    }
    group.finish();
}

fn bench_flood_reveal(c: &mut Criterion) {
    let mut group = c.benchmark_group("flood_reveal");
    for dimension in [16, 64, 255] {
        let board = Board::from_mine_coords(dimension, &[(0, 0)]).expect("corner layout is valid");
        group.bench_with_input(
            BenchmarkId::from_parameter(dimension),
            &board,
            |b, board| {
                b.iter(|| {
                    let mut session = GameSession::new(board.clone());
                    black_box(session.reveal((dimension - 1, dimension - 1)))
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_generate, bench_flood_reveal);
criterion_main!(benches);

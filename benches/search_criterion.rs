use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use birch_tafl::game_state::tafl_rules::{starting_board, BoardVariant};
use birch_tafl::game_state::tafl_types::Team;
use birch_tafl::search::minimax::best;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    variant: BoardVariant,
    depths: &'static [u32],
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "brandubh",
        variant: BoardVariant::Brandubh,
        depths: &[1, 2, 3],
    },
    BenchCase {
        name: "tablut",
        variant: BoardVariant::Tablut,
        depths: &[1, 2],
    },
    BenchCase {
        name: "hnefatafl",
        variant: BoardVariant::Hnefatafl,
        depths: &[1, 2],
    },
];

fn bench_best_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("best_move");
    group.measurement_time(Duration::from_secs(10));

    for case in CASES {
        let board = starting_board(case.variant);
        for &depth in case.depths {
            group.bench_with_input(
                BenchmarkId::new(case.name, depth),
                &depth,
                |b, &depth| {
                    b.iter(|| {
                        best(black_box(&board), Team::Attackers, depth)
                            .expect("starting positions always have attacker moves")
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_best_move);
criterion_main!(benches);

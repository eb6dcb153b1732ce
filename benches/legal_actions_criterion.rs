use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;

use arbiter_chess::game_state::game_state::GameState;
use arbiter_chess::move_generation::legal_move_generator::FastLegalMoveGenerator;
use arbiter_chess::move_generation::perft::perft;
use arbiter_chess::utils::random_playout::play_random_game;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
    expected_nodes: &'static [usize],
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "position_1",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        expected_nodes: &[20, 400, 8902],
    },
    BenchCase {
        name: "position_2",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        expected_nodes: &[48, 2039],
    },
    BenchCase {
        name: "position_3",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        expected_nodes: &[14, 191, 2812],
    },
];

fn bench_legal_actions(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_actions");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));

    for case in CASES {
        let game = GameState::from_fen(case.fen).expect("benchmark FEN should parse");
        group.bench_with_input(BenchmarkId::new("annotated", case.name), &game, |b, game| {
            b.iter(|| {
                let actions = black_box(game)
                    .legal_actions(game.side_to_move)
                    .expect("generation should succeed");
                black_box(actions.len())
            });
        });
    }

    group.finish();
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft_fast");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in CASES {
        let game = GameState::from_fen(case.fen).expect("benchmark FEN should parse");

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let warmup = perft(&FastLegalMoveGenerator, &game, depth).expect("perft should run");
            assert_eq!(
                warmup.nodes, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes as u64));
            group.bench_with_input(
                BenchmarkId::new(case.name, depth),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let count = perft(&FastLegalMoveGenerator, black_box(&game), black_box(depth))
                            .expect("perft benchmark run should succeed");
                        assert_eq!(count.nodes, *expected);
                        black_box(count.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_random_midgames(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_midgames");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));

    let start = GameState::new_game();
    for seed in [3u64, 11, 29] {
        let mut rng = StdRng::seed_from_u64(seed);
        let game = play_random_game(&start, &mut rng, 30).expect("seeded playout should succeed");
        if game.is_game_over() {
            continue;
        }

        group.bench_with_input(BenchmarkId::new("seed", seed), &game, |b, game| {
            b.iter(|| {
                let actions = black_box(game)
                    .legal_actions(game.side_to_move)
                    .expect("generation should succeed");
                black_box(actions.len())
            });
        });
    }

    group.finish();
}

criterion_group!(
    legal_action_benches,
    bench_legal_actions,
    bench_perft,
    bench_random_midgames
);
criterion_main!(legal_action_benches);

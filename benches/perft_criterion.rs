use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use pawn_race::game_state::game_state::GameState;
use pawn_race::game_state::pawn_types::Colour;
use pawn_race::move_generation::perft::perft;

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    dim: i8,
    white_gap: i8,
    black_gap: i8,
    expected_nodes: &'static [u64],
}

const CASES_QUICK: &[BenchCase] = &[
    BenchCase {
        name: "race_8x8",
        dim: 8,
        white_gap: 3,
        black_gap: 4,
        expected_nodes: &[14, 196, 2553],
    },
    BenchCase {
        name: "race_6x6",
        dim: 6,
        white_gap: 2,
        black_gap: 2,
        expected_nodes: &[10, 91, 732],
    },
];

const CASES_STANDARD: &[BenchCase] = &[
    BenchCase {
        name: "race_8x8",
        dim: 8,
        white_gap: 3,
        black_gap: 4,
        expected_nodes: &[14, 196, 2553, 33_236, 403_810],
    },
    BenchCase {
        name: "race_6x6",
        dim: 6,
        white_gap: 2,
        black_gap: 2,
        expected_nodes: &[10, 91, 732, 5152, 31_748],
    },
    BenchCase {
        name: "race_6x6_edge_gaps",
        dim: 6,
        white_gap: 0,
        black_gap: 5,
        expected_nodes: &[10, 96, 840, 6817, 50_286],
    },
];

fn suite_name() -> &'static str {
    match std::env::var("PAWN_RACE_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => "standard",
        _ => "quick",
    }
}

fn selected_cases() -> &'static [BenchCase] {
    match suite_name() {
        "standard" => CASES_STANDARD,
        _ => CASES_QUICK,
    }
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("perft_{}", suite_name()));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(20);

    for case in selected_cases() {
        let game = GameState::new_race(case.dim, case.white_gap, case.black_gap)
            .expect("benchmark opening should build");

        for (depth_idx, expected_nodes) in case.expected_nodes.iter().enumerate() {
            let depth = (depth_idx + 1) as u8;

            // Correctness guard before benchmarking.
            let mut warmup_game = game.clone();
            let warmup = perft(&mut warmup_game, Colour::White, depth);
            assert_eq!(
                warmup.nodes as u64, *expected_nodes,
                "node mismatch in warmup for {} depth {}",
                case.name, depth
            );

            group.throughput(Throughput::Elements(*expected_nodes));
            let bench_name = format!("{}_d{}", case.name, depth);
            let mut bench_game = game.clone();

            group.bench_with_input(
                BenchmarkId::from_parameter(bench_name),
                expected_nodes,
                |b, expected| {
                    b.iter(|| {
                        let count = perft(black_box(&mut bench_game), Colour::White, black_box(depth));
                        assert_eq!(count.nodes as u64, *expected);
                        black_box(count.nodes)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);

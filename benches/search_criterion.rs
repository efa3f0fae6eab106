use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use pawn_race::engines::engine_minimax::choose_move;
use pawn_race::game_state::game_state::GameState;
use pawn_race::game_state::pawn_types::Colour;
use pawn_race::search::alpha_beta::SearchConfig;
use pawn_race::search::board_scoring::PawnRaceScorer;

struct SearchCase {
    name: &'static str,
    diagram: Option<&'static str>,
    depths: &'static [u8],
}

const CASES: &[SearchCase] = &[
    SearchCase {
        name: "race_opening_8x8",
        diagram: None,
        depths: &[2, 4, 6],
    },
    SearchCase {
        name: "midgame_contact",
        diagram: Some("......../.B..BB.B/B......./..B.W.../.W...W../W......./..W...WW/........ w"),
        depths: &[2, 4, 6],
    },
];

fn bench_search(c: &mut Criterion) {
    let scorer = PawnRaceScorer::default();

    let mut group = c.benchmark_group("choose_move");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(10);

    for case in CASES {
        let game = match case.diagram {
            Some(diagram) => GameState::from_diagram(diagram).expect("benchmark diagram should parse"),
            None => GameState::new_race(8, 3, 4).expect("benchmark opening should build"),
        };

        for &depth in case.depths {
            let config = SearchConfig {
                max_depth: depth,
                ..SearchConfig::default()
            };
            let mut bench_game = game.clone();
            let side = bench_game.side_to_move();

            group.bench_with_input(
                BenchmarkId::new(case.name, format!("d{depth}")),
                &config,
                |b, config| {
                    b.iter(|| {
                        let result = choose_move(black_box(&mut bench_game), side, &scorer, *config);
                        assert!(result.best_move.is_some());
                        black_box(result.best_score)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(search_benches, bench_search);
criterion_main!(search_benches);

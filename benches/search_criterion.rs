use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use rowan_chess::game_state::board::Board;
use rowan_chess::game_state::chess_types::Color;
use rowan_chess::move_generation::move_generator::LegalMoveGenerator;
use rowan_chess::search::board_scoring::StandardScorer;
use rowan_chess::search::minimax::{search, SearchConfig};

const MIDDLEGAME_LAYOUT: &str = "\
R-BQK--R
PP--BPPP
--NP-N--
--P-P-b-
---pp---
--n--n--
ppp--ppp
r--qkb-r";

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(10);

    let cases = [
        ("startpos", Board::new_game()),
        (
            "middlegame",
            Board::from_layout(MIDDLEGAME_LAYOUT).expect("benchmark layout should parse"),
        ),
    ];

    for (name, board) in cases {
        for depth in [1u8, 2, 3] {
            let config = SearchConfig::with_depth(depth);
            let mut bench_board = board.clone();
            let mut rng = StdRng::seed_from_u64(0x5eed);

            group.bench_with_input(
                BenchmarkId::new(name, format!("d{depth}")),
                &config,
                |b, config| {
                    b.iter(|| {
                        let result = search(
                            black_box(&mut bench_board),
                            Color::White,
                            &LegalMoveGenerator,
                            &StandardScorer,
                            config,
                            &mut rng,
                        )
                        .expect("search benchmark run should succeed");
                        black_box(result.best_move)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(search_benches, bench_search);
criterion_main!(search_benches);

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use othello_core::board::Board;
use othello_core::disc::Disc;
use othello_core::search::{Algorithm, Search, SearchOptions};

fn bench_select_move(c: &mut Criterion) {
    let board = Board::new(8);
    let cases = [
        ("minimax", Algorithm::Minimax, false, false),
        ("alphabeta", Algorithm::AlphaBeta, false, false),
        ("alphabeta_ordered", Algorithm::AlphaBeta, false, true),
        ("alphabeta_cached", Algorithm::AlphaBeta, true, true),
    ];

    let mut group = c.benchmark_group("select_move_depth4");
    for (name, algorithm, caching, ordering) in cases {
        let options = SearchOptions {
            algorithm,
            depth_limit: 4,
            caching,
            ordering,
        };
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut search = Search::new();
                black_box(search.run(black_box(&board), Disc::Dark, &options).score)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_select_move);
criterion_main!(benches);

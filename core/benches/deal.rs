use concentration_core::*;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_deal(c: &mut Criterion) {
    let mut group = c.benchmark_group("deal");
    for board_size in BoardSize::ALL {
        group.bench_function(board_size.label(), |b| {
            let mut seed = 0u64;
            b.iter(|| {
                seed = seed.wrapping_add(1);
                black_box(Game::new(black_box(board_size), seed))
            })
        });
    }
    group.finish();
}

fn bench_play_through(c: &mut Criterion) {
    c.bench_function("play_through_6x6", |b| {
        b.iter(|| {
            let mut game = Game::new(BoardSize::Large, 1);
            let pairs = BoardSize::Large.pairs() as u8;
            for n in 0..pairs {
                game.select(CardId(n)).ok();
                game.select(CardId(n + pairs)).ok();
            }
            black_box(game.is_complete())
        })
    });
}

criterion_group!(benches, bench_deal, bench_play_through);
criterion_main!(benches);

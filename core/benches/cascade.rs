use criterion::{Criterion, criterion_group, criterion_main};
use mineswep_core::*;
use std::hint::black_box;

fn cascade_benchmark(c: &mut Criterion) {
    let profile = Difficulty::Hard.profile();
    // the last 99 tiles hold every mine, so tile 0 floods the rest
    let first_mine = profile.tile_count() - profile.mine_count();
    let generator = FixedMineFieldGenerator::new(first_mine..profile.tile_count());
    let game = Game::with_generator(profile, generator).expect("hard profile is valid");

    c.bench_function("cascade hard board", |b| {
        b.iter_batched(
            || game.clone(),
            |mut game| black_box(game.reveal(black_box(0))),
            criterion::BatchSize::SmallInput,
        )
    });

    c.bench_function("random hard field", |b| {
        let mut generator = RandomMineFieldGenerator::new(0);
        b.iter(|| black_box(generator.generate(&profile)))
    });
}

criterion_group!(benches, cascade_benchmark);
criterion_main!(benches);

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sierpinski::chaos::{ChaosGame, UniformIndex};
use sierpinski::render::Renderer;
use sierpinski::scene::{start_point, triangle_anchors};

const BUFFER_WIDTH: u32 = 800;
const BUFFER_HEIGHT: u32 = 600;

fn create_game() -> ChaosGame<UniformIndex<rand::rngs::StdRng>> {
    ChaosGame::with_source(
        triangle_anchors(BUFFER_WIDTH, BUFFER_HEIGHT, 100.0),
        start_point(BUFFER_WIDTH, BUFFER_HEIGHT),
        UniformIndex::seeded(0),
    )
    .unwrap()
}

fn benchmark_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");

    for steps in [100usize, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, &steps| {
            b.iter_batched(
                create_game,
                |mut game| {
                    game.advance(black_box(steps));
                    game
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn benchmark_draw_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw_snapshot");

    for points in [1_000usize, 100_000] {
        let mut game = create_game();
        game.advance(points);
        let mut renderer = Renderer::new(BUFFER_WIDTH, BUFFER_HEIGHT);

        group.bench_with_input(BenchmarkId::from_parameter(points), &game, |b, game| {
            b.iter(|| {
                renderer.clear(0xFF000000);
                renderer.draw_snapshot(black_box(&game.snapshot()), 5, 2);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_advance, benchmark_draw_snapshot);
criterion_main!(benches);

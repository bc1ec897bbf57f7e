use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use holo_core::{Config, Framebuffer, Scene};

const SCREEN_WIDTH: usize = 160;
const SCREEN_HEIGHT: usize = 47;

fn benchmark_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame");

    for text in ["8", "12:34", "HELLO WORLD"] {
        let mut scene = Scene::new(&Config::default());
        let mut fb = Framebuffer::empty();
        scene
            .resize(&mut fb, SCREEN_WIDTH, SCREEN_HEIGHT, text.chars().count())
            .unwrap();

        group.bench_with_input(BenchmarkId::new("render", text), &text, |b, text| {
            b.iter(|| {
                scene.advance();
                scene.render(black_box(text), &mut fb)
            });
        });
    }

    group.finish();
}

fn benchmark_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("density");

    for density in [0.2f32, 0.1, 0.05] {
        let config = Config {
            density,
            ..Config::default()
        };
        let mut scene = Scene::new(&config);
        let mut fb = Framebuffer::empty();
        scene.resize(&mut fb, SCREEN_WIDTH, SCREEN_HEIGHT, 1).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(density), &density, |b, _| {
            b.iter(|| scene.render(black_box("8"), &mut fb));
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_frame, benchmark_density);
criterion_main!(benches);

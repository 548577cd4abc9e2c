use criterion::{black_box, criterion_group, criterion_main, Criterion};
use textburn::core::{render_into, sim, Frame, Scene, SimpleRng};
use textburn::term::{encode_diff_into, FireView, FrameBuffer, Viewport};
use textburn::types::{Dims, FireParams};

const TEXT: &str = "Lorem ipsum dolor sit amet,\nconsectetur adipiscing elit,\nsed do eiusmod tempor.";

fn bench_tick(c: &mut Criterion) {
    let mut scene = Scene::new(Dims::new(50, 200), TEXT);
    let params = FireParams::default();
    let mut rng = SimpleRng::new(12345);

    c.bench_function("tick_200x50", |b| {
        b.iter(|| {
            sim::tick(black_box(&mut scene), &params, &mut rng);
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut scene = Scene::new(Dims::new(50, 200), TEXT);
    let params = FireParams::default();
    let mut rng = SimpleRng::new(12345);
    for _ in 0..100 {
        sim::tick(&mut scene, &params, &mut rng);
    }
    let mut frame = Frame::new(scene.dims());

    c.bench_function("render_200x50", |b| {
        b.iter(|| {
            render_into(black_box(&scene), &mut frame);
        })
    });
}

fn bench_encode_diff(c: &mut Criterion) {
    let mut scene = Scene::new(Dims::new(50, 200), TEXT);
    let params = FireParams::default();
    let mut rng = SimpleRng::new(12345);
    let view = FireView::default();
    let vp = Viewport::new(200, 50);

    let prev = view.render(&Frame::from_scene(&scene), vp);
    sim::tick(&mut scene, &params, &mut rng);
    let next: FrameBuffer = view.render(&Frame::from_scene(&scene), vp);
    let mut out = Vec::with_capacity(64 * 1024);

    c.bench_function("encode_diff_200x50", |b| {
        b.iter(|| {
            out.clear();
            encode_diff_into(black_box(&prev), black_box(&next), &mut out).unwrap();
        })
    });
}

criterion_group!(benches, bench_tick, bench_render, bench_encode_diff);
criterion_main!(benches);

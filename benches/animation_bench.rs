use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use folio::animation::{EasingFunction, Placement, Timeline, Tween};
use folio::options::Options;
use folio::scene::{Scene, TransformProperty};

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::QuadraticOut;
    c.bench_function("quadratic_out_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.5))))
    });
}

fn timeline_advance_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("timeline_advance");
    let scene = Scene::from_options(&Options::default());
    let targets: Vec<_> = ["header", "leftPanel", "rightPanel", "navBar"]
        .iter()
        .filter_map(|name| scene.find(name))
        .collect();

    for count in [3, 30, 300] {
        let mut timeline = Timeline::new("bench");
        for i in 0..count {
            let target = targets[i % targets.len()];
            let _ = timeline.add(
                Tween::new(target, TransformProperty::Position)
                    .y(i as f32)
                    .duration(1.0),
                Placement::Relative(-0.5),
            );
        }

        group.bench_function(format!("{count}_steps"), |b| {
            b.iter_batched(
                || (timeline.clone(), scene.clone()),
                |(mut timeline, mut scene)| {
                    for _ in 0..60 {
                        timeline.advance(black_box(1.0 / 60.0), &mut scene);
                    }
                    black_box(scene)
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, easing_benchmark, timeline_advance_benchmark);
criterion_main!(benches);

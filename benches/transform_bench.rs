use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glyph_motion::animation::{AnimationMode, TextAnimator};
use glyph_motion::layout::MonospaceLayout;
use glyph_motion::util::easing::oscillate;

fn oscillate_benchmark(c: &mut Criterion) {
    c.bench_function("oscillate", |b| {
        b.iter(|| black_box(oscillate(black_box(25.0), black_box(1.7))))
    });
}

fn tick_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");

    for len in [16, 64, 256] {
        let text: String = "The quick brown fox jumps over the lazy dog. "
            .chars()
            .cycle()
            .take(len)
            .collect();
        for mode in [
            AnimationMode::Wave,
            AnimationMode::Jitter,
            AnimationMode::Dangle,
            AnimationMode::ChangeColor,
        ] {
            let mut layout = MonospaceLayout::new(&text);
            let mut animator = TextAnimator::seeded(7);
            let _ = animator.set_mode(mode, &mut layout);
            group.bench_function(format!("{mode}_{len}_chars"), |b| {
                b.iter(|| black_box(animator.tick(&mut layout)))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, oscillate_benchmark, tick_benchmark);
criterion_main!(benches);

//! Demo binary that runs each animation mode over sample text.

use std::path::Path;

use glyph_motion::animation::{
    AnimationMode, AnimationWorker, PollOutcome, TextAnimator, TickScheduler,
};
use glyph_motion::layout::{MonospaceLayout, TextLayout};
use glyph_motion::options::AnimationConfig;
use web_time::{Duration, Instant};

const DEFAULT_TEXT: &str = "Hello, glyphs!";
const RUN_PER_MODE: Duration = Duration::from_millis(1200);

/// Largest displacement of any glyph corner from its resting position.
fn max_offset(layout: &MonospaceLayout) -> f32 {
    layout
        .glyphs()
        .iter()
        .filter_map(|g| {
            let live = layout.quad(g.index)?;
            Some(
                live.iter()
                    .zip(&g.corners)
                    .map(|(a, b)| a.distance(*b))
                    .fold(0.0, f32::max),
            )
        })
        .fold(0.0, f32::max)
}

fn run_mode(
    animator: &mut TextAnimator,
    layout: &mut MonospaceLayout,
    mode: AnimationMode,
) {
    let _ = animator.set_mode(mode, layout);
    let mut scheduler = TickScheduler::new();
    let start = Instant::now();
    while start.elapsed() < RUN_PER_MODE {
        match scheduler.poll(animator, layout, Instant::now()) {
            PollOutcome::Stopped => break,
            PollOutcome::Waiting(wait) => std::thread::sleep(wait),
            PollOutcome::Ticked { status, .. } => log::info!(
                "{mode} tick {}: {status:?}, max offset {:.2}",
                animator.tick_count(),
                max_offset(layout),
            ),
        }
    }
}

fn load_config(arg: Option<&String>) -> AnimationConfig {
    let Some(path) = arg else {
        return AnimationConfig::default();
    };
    match AnimationConfig::load(Path::new(path)) {
        Ok(config) => {
            log::info!("Loaded tunables from {path}");
            config
        }
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    }
}

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let text = args.first().map_or(DEFAULT_TEXT, String::as_str);
    let config = load_config(args.get(1));

    let mut layout = MonospaceLayout::new(text);
    let mut animator = TextAnimator::new().with_config(config.clone());
    for mode in AnimationMode::ALL.into_iter().filter(|m| m.is_active()) {
        run_mode(&mut animator, &mut layout, mode);
    }
    animator.stop(&mut layout);

    // Same text again, driven from a background thread.
    let worker = match AnimationWorker::spawn(
        layout,
        TextAnimator::new().with_config(config),
    ) {
        Ok(worker) => worker,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };
    if let Err(e) = worker.set_mode(AnimationMode::ChangeColor) {
        log::error!("{e}");
        std::process::exit(1);
    }
    std::thread::sleep(RUN_PER_MODE);
    match worker.inspect(MonospaceLayout::color_commits) {
        Ok(commits) => log::info!("worker applied {commits} color changes"),
        Err(e) => log::error!("{e}"),
    }
}

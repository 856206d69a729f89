//! End-to-end stopwatch behavior through the `App` controller.

use lapwatch_engine::{Theme, ThemeMode};

use crate::common::Fixture;

#[tokio::test(start_paused = true)]
async fn display_decomposes_elapsed_time() {
    let mut fx = Fixture::new();
    fx.app.start();
    fx.advance(3_723_450).await;

    let parts = fx.app.stopwatch().display();
    assert_eq!(
        (parts.hours, parts.minutes, parts.seconds, parts.centis),
        (1, 2, 3, 45)
    );
    assert_eq!(parts.to_string(), "01:02:03.45");
}

#[tokio::test(start_paused = true)]
async fn pause_and_resume_accumulate() {
    let mut fx = Fixture::new();
    fx.app.start();
    fx.advance(2_000).await;
    fx.app.stop();
    assert_eq!(fx.app.stopwatch().elapsed_ms(), 2_000);

    // Paused wall time is not counted.
    fx.clock.advance(60_000);
    fx.app.start();
    fx.advance(1_000).await;
    assert_eq!(fx.app.stopwatch().elapsed_ms(), 3_000);
}

#[tokio::test(start_paused = true)]
async fn laps_are_numbered_and_listed_newest_first() {
    let mut fx = Fixture::new();
    fx.app.start();
    fx.advance(1_500).await;
    fx.app.lap();
    fx.advance(2_700).await;
    fx.app.lap();

    let laps: Vec<(u32, String)> = fx
        .app
        .stopwatch()
        .laps()
        .recent_first()
        .map(|l| (l.index(), l.label()))
        .collect();
    assert_eq!(
        laps,
        vec![(2, "00:04.20".to_string()), (1, "00:01.50".to_string())]
    );
}

#[tokio::test(start_paused = true)]
async fn reset_clears_time_and_laps() {
    let mut fx = Fixture::new();
    fx.app.start();
    fx.advance(5_000).await;
    fx.app.lap();
    fx.app.reset();

    let sw = fx.app.stopwatch();
    assert!(!sw.is_running());
    assert_eq!(sw.elapsed_ms(), 0);
    assert!(sw.laps().is_empty());
    assert_eq!(sw.display().to_string(), "00:00:00.00");
}

#[tokio::test(start_paused = true)]
async fn alert_fires_exactly_once_at_threshold() {
    let mut fx = Fixture::new();
    fx.app.set_alert_time(3);
    fx.app.start();

    for _ in 0..50 {
        fx.advance(100).await;
    }
    assert_eq!(fx.app.stopwatch().elapsed_ms(), 5_000);
    assert_eq!(fx.sink.count(), 1);
}

#[tokio::test(start_paused = true)]
async fn stopped_stopwatch_ignores_time() {
    let mut fx = Fixture::new();
    fx.app.start();
    fx.advance(1_000).await;
    fx.app.stop();

    fx.advance(10_000).await;
    assert_eq!(fx.app.stopwatch().elapsed_ms(), 1_000);
}

#[tokio::test(start_paused = true)]
async fn cycle_theme_steps_every_thirty_seconds() {
    let mut fx = Fixture::new();
    fx.app.set_theme_mode(ThemeMode::Cycle);
    fx.app.start();

    let mut seen = vec![fx.app.theme()];
    for _ in 0..95 {
        fx.advance(1_000).await;
        if seen.last() != Some(&fx.app.theme()) {
            seen.push(fx.app.theme());
        }
    }
    assert_eq!(
        seen,
        vec![Theme::Day, Theme::Night, Theme::Ocean, Theme::Sunset]
    );
}

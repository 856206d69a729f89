//! Shared test utilities and fixtures
//!
//! Builds an [`App`] wired to a manual clock, a file store in a temp dir and a
//! counting alert sink, so integration tests can drive time by hand.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use lapwatch_config::FileStore;
use lapwatch_engine::ui::UiOptions;
use lapwatch_engine::{AlertSink, AlertTone, App, AppInit, ManualClock};
use tempfile::TempDir;

/// On a whole minute of wall-clock time (2023-11-14 22:13:00 UTC).
pub const T0: u64 = 1_699_999_980_000;

#[derive(Clone, Default)]
pub struct CountingSink(Arc<AtomicUsize>);

impl CountingSink {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl AlertSink for CountingSink {
    fn play(&mut self, _tone: &AlertTone) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

pub struct Fixture {
    pub app: App,
    pub clock: ManualClock,
    pub sink: CountingSink,
    pub storage: PathBuf,
    options: UiOptions,
    // Keeps the storage directory alive for the fixture's lifetime.
    _dir: TempDir,
}

impl Fixture {
    /// A fresh app with empty storage.
    pub fn new() -> Self {
        Self::with_options(UiOptions::default())
    }

    pub fn with_options(options: UiOptions) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let storage = dir.path().join("storage.json");
        Self::build(dir, storage, options)
    }

    fn build(dir: TempDir, storage: PathBuf, options: UiOptions) -> Self {
        let clock = ManualClock::new(T0);
        let sink = CountingSink::default();
        let app = App::new(AppInit {
            clock: Arc::new(clock.clone()),
            store: Box::new(FileStore::new(storage.clone())),
            alert_sink: Box::new(sink.clone()),
            ui_options: options,
            city: None,
        });
        Self {
            app,
            clock,
            sink,
            storage,
            options,
            _dir: dir,
        }
    }

    /// Drop this app and start another on the same storage file.
    pub fn restart(self) -> Self {
        let Self {
            storage,
            options,
            _dir: dir,
            ..
        } = self;
        Self::build(dir, storage, options)
    }

    /// Advance the manual clock by `ms`, let the tick task fire, then run one frame.
    pub async fn advance(&mut self, ms: u64) {
        self.clock.advance(ms);
        tokio::time::sleep(Duration::from_millis(11)).await;
        self.app.tick();
    }
}

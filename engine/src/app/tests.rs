use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use lapwatch_config::{
    KeyValueStore, MemoryStore, PREFERENCES_KEY, StoreError, load_preferences,
};
use lapwatch_types::ui::{InputMode, UiOptions};
use lapwatch_types::{Preferences, Theme, ThemeMode};

use super::{App, AppInit};
use crate::alert::{AlertSink, AlertTone};
use crate::clock::ManualClock;

// On a whole minute of wall-clock time.
const T0: u64 = 1_699_999_980_000;

#[derive(Clone, Default)]
struct CountingSink(Arc<AtomicUsize>);

impl CountingSink {
    fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl AlertSink for CountingSink {
    fn play(&mut self, _tone: &AlertTone) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

/// Shares one map between the app and the test so writes can be inspected.
#[derive(Clone, Default)]
struct SharedStore(Arc<std::sync::Mutex<MemoryStore>>);

impl KeyValueStore for SharedStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.0.lock().map_or(Ok(None), |store| store.get(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        match self.0.lock() {
            Ok(mut store) => store.set(key, value),
            Err(_) => Ok(()),
        }
    }
}

struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Io {
            path: "/nowhere".into(),
            source: std::io::Error::other("disabled"),
        })
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Err(StoreError::Io {
            path: "/nowhere".into(),
            source: std::io::Error::other("disabled"),
        })
    }
}

struct Harness {
    app: App,
    clock: ManualClock,
    sink: CountingSink,
    store: SharedStore,
}

fn harness_with(store: SharedStore, ui_options: UiOptions) -> Harness {
    let clock = ManualClock::new(T0);
    let sink = CountingSink::default();
    let app = App::new(AppInit {
        clock: Arc::new(clock.clone()),
        store: Box::new(store.clone()),
        alert_sink: Box::new(sink.clone()),
        ui_options,
        city: None,
    });
    Harness {
        app,
        clock,
        sink,
        store,
    }
}

fn harness() -> Harness {
    harness_with(SharedStore::default(), UiOptions::default())
}

fn seeded_store(prefs: &Preferences) -> SharedStore {
    let mut store = SharedStore::default();
    let json = prefs.to_json().expect("serialize");
    store.set(PREFERENCES_KEY, &json).expect("seed");
    store
}

/// Let the stopwatch tick task fire, then drain it through the app.
async fn run_tick(app: &mut App) {
    tokio::time::sleep(Duration::from_millis(11)).await;
    app.tick();
}

#[tokio::test]
async fn defaults_when_store_is_empty() {
    let h = harness();
    assert_eq!(*h.app.preferences(), Preferences::default());
    // Auto at wall-clock second 0 is day.
    assert_eq!(h.app.theme(), Theme::Day);
    assert_eq!(h.app.live_clock().city().key, "tokyo");
}

#[tokio::test]
async fn unreadable_store_falls_back_to_defaults() {
    let app = App::new(AppInit {
        clock: Arc::new(ManualClock::new(T0)),
        store: Box::new(BrokenStore),
        alert_sink: Box::new(CountingSink::default()),
        ui_options: UiOptions::default(),
        city: Some("paris".to_string()),
    });
    assert_eq!(*app.preferences(), Preferences::default());
    assert_eq!(app.live_clock().city().key, "paris");
}

#[tokio::test]
async fn stored_fixed_theme_is_applied_at_startup() {
    let prefs = Preferences {
        theme: ThemeMode::Forest,
        ..Preferences::default()
    };
    let h = harness_with(seeded_store(&prefs), UiOptions::default());
    assert_eq!(h.app.theme(), Theme::Forest);
}

#[tokio::test]
async fn preference_changes_are_persisted() {
    let mut h = harness();
    h.app.set_theme_mode(ThemeMode::Ocean);
    h.app.toggle_sound();
    h.app.set_alert_time(90);
    h.app.toggle_pulse();
    h.app.toggle_particles();

    let stored = load_preferences(&h.store);
    assert_eq!(
        stored,
        Preferences {
            theme: ThemeMode::Ocean,
            sound_enabled: false,
            alert_time: 90,
            pulse_effect: true,
            particles_effect: true,
        }
    );
    assert_eq!(h.app.theme(), Theme::Ocean);
}

#[tokio::test]
async fn failed_save_keeps_in_memory_change_and_sets_notice() {
    let mut app = App::new(AppInit {
        clock: Arc::new(ManualClock::new(T0)),
        store: Box::new(BrokenStore),
        alert_sink: Box::new(CountingSink::default()),
        ui_options: UiOptions::default(),
        city: None,
    });
    app.toggle_sound();
    assert!(!app.preferences().sound_enabled);
    assert!(app.notice().is_some());
}

#[tokio::test]
async fn alert_time_adjusts_in_steps_with_floor() {
    let mut h = harness();
    h.app.adjust_alert_time(1);
    assert_eq!(h.app.preferences().alert_time, 65);
    h.app.set_alert_time(7);
    h.app.adjust_alert_time(-1);
    assert_eq!(h.app.preferences().alert_time, 5);
    h.app.adjust_alert_time(-3);
    assert_eq!(h.app.preferences().alert_time, 5);
}

#[tokio::test]
async fn zero_alert_time_becomes_default() {
    let mut h = harness();
    h.app.set_alert_time(0);
    assert_eq!(h.app.preferences().alert_time, 60);
}

#[tokio::test]
async fn alert_entry_commits_parsed_seconds() {
    let mut h = harness();
    h.app.begin_alert_entry();
    assert!(h.app.input_mode().is_text_entry());
    h.app.alert_backspace();
    h.app.alert_backspace();
    h.app.push_alert_char('4');
    h.app.push_alert_char('5');
    h.app.commit_alert_entry();

    assert_eq!(*h.app.input_mode(), InputMode::Normal);
    assert_eq!(h.app.preferences().alert_time, 45);
}

#[tokio::test]
async fn invalid_alert_entry_commits_default() {
    let mut h = harness();
    h.app.set_alert_time(30);
    h.app.begin_alert_entry();
    h.app.alert_backspace();
    h.app.alert_backspace();
    h.app.push_alert_char('x');
    h.app.commit_alert_entry();
    assert_eq!(h.app.preferences().alert_time, 60);
}

#[tokio::test]
async fn cancelled_alert_entry_changes_nothing() {
    let mut h = harness();
    h.app.begin_alert_entry();
    h.app.push_alert_char('9');
    h.app.cancel_alert_entry();
    assert_eq!(h.app.preferences().alert_time, 60);
    assert_eq!(*h.app.input_mode(), InputMode::Normal);
}

#[tokio::test(start_paused = true)]
async fn alert_plays_once_and_flashes() {
    let mut h = harness();
    h.app.set_alert_time(1);
    h.app.start();

    h.clock.advance(1_000);
    run_tick(&mut h.app).await;
    assert_eq!(h.sink.count(), 1);
    assert!(h.app.flash_intensity() > 0.9);

    h.clock.advance(500);
    run_tick(&mut h.app).await;
    assert_eq!(h.sink.count(), 1);
}

#[tokio::test(start_paused = true)]
async fn reduced_motion_plays_sound_without_flash() {
    let options = UiOptions {
        reduced_motion: true,
        ..UiOptions::default()
    };
    let mut h = harness_with(SharedStore::default(), options);
    h.app.set_alert_time(1);
    h.app.start();
    h.clock.advance(1_000);
    run_tick(&mut h.app).await;

    assert_eq!(h.sink.count(), 1);
    assert!(h.app.flash_intensity().abs() < f32::EPSILON);
}

#[tokio::test(start_paused = true)]
async fn muted_alert_never_plays() {
    let mut h = harness();
    h.app.set_alert_time(1);
    h.app.toggle_sound();
    h.app.start();
    h.clock.advance(1_000);
    run_tick(&mut h.app).await;
    assert_eq!(h.sink.count(), 0);
}

#[tokio::test(start_paused = true)]
async fn cycle_mode_rotates_and_reset_returns_to_first() {
    let mut h = harness();
    h.app.set_theme_mode(ThemeMode::Cycle);
    assert_eq!(h.app.theme(), Theme::Day);

    h.app.start();
    h.clock.advance(31_000);
    run_tick(&mut h.app).await;
    assert_eq!(h.app.theme(), Theme::Night);

    h.app.reset();
    assert_eq!(h.app.theme(), Theme::Day);
    assert_eq!(h.app.stopwatch().elapsed_ms(), 0);
}

#[tokio::test(start_paused = true)]
async fn auto_mode_follows_wall_clock_while_running() {
    let mut h = harness();
    h.app.start();
    h.clock.set(T0 + 40_000);
    run_tick(&mut h.app).await;
    assert_eq!(h.app.theme(), Theme::Night);
}

#[tokio::test]
async fn fixed_mode_survives_reset() {
    let mut h = harness();
    h.app.set_theme_mode(ThemeMode::Purple);
    h.app.reset();
    assert_eq!(h.app.theme(), Theme::Purple);
}

#[tokio::test]
async fn cycle_theme_mode_walks_picker_order() {
    let mut h = harness();
    h.app.cycle_theme_mode();
    assert_eq!(h.app.preferences().theme, ThemeMode::Cycle);
    h.app.cycle_theme_mode();
    assert_eq!(h.app.preferences().theme, ThemeMode::Day);
}

#[tokio::test]
async fn toggle_running_starts_and_stops() {
    let mut h = harness();
    h.app.toggle_running();
    assert!(h.app.stopwatch().is_running());
    h.clock.advance(2_500);
    let lap = h.app.lap().expect("lap while running");
    assert_eq!(lap.time_ms(), 2_500);
    h.app.toggle_running();
    assert!(!h.app.stopwatch().is_running());
    assert_eq!(h.app.stopwatch().elapsed_ms(), 2_500);

    h.app.clear_laps();
    assert!(h.app.stopwatch().laps().is_empty());
}

#[tokio::test]
async fn city_selection_updates_snapshot_immediately() {
    let mut h = harness();
    assert_eq!(h.app.clock_snapshot().location_short, "Tokyo");
    h.app.select_city("london");
    assert_eq!(h.app.clock_snapshot().location_short, "London");
    h.app.step_city(1);
    assert_eq!(h.app.clock_snapshot().location_short, "New York");
}

#[tokio::test(start_paused = true)]
async fn clock_snapshot_refreshes_on_poll() {
    let mut h = harness();
    let before = h.app.clock_snapshot().second.clone();
    h.clock.advance(1_000);
    tokio::time::sleep(Duration::from_millis(101)).await;
    h.app.tick();
    assert_ne!(h.app.clock_snapshot().second, before);
}

#[tokio::test]
async fn particles_follow_preference_and_bounds() {
    let mut h = harness();
    assert!(h.app.particle_field(80, 24).is_none());

    h.app.toggle_particles();
    let field = h.app.particle_field(80, 24).expect("field");
    assert_eq!(field.particles().len(), crate::particles::PARTICLE_COUNT);

    let resized = h.app.particle_field(40, 12).expect("field");
    assert_eq!(resized.bounds(), (40, 12));
    assert!(
        resized
            .particles()
            .iter()
            .all(|p| p.x <= 40.0 && p.y <= 12.0)
    );

    h.app.toggle_particles();
    assert!(h.app.particle_field(40, 12).is_none());
}

#[tokio::test]
async fn pulse_intensity_only_when_enabled() {
    let mut h = harness();
    assert!(h.app.pulse_intensity().is_none());
    h.app.toggle_pulse();
    h.app.advance_effects(Duration::from_secs(1));
    let dim = h.app.pulse_intensity().expect("pulse on");
    assert!(dim < 0.01);
}

#[tokio::test]
async fn settings_panel_and_quit_flags() {
    let mut h = harness();
    assert!(!h.app.settings_open());
    h.app.toggle_settings_panel();
    assert!(h.app.settings_open());
    assert!(!h.app.should_quit());
    h.app.request_quit();
    assert!(h.app.should_quit());
}

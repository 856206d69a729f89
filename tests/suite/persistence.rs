//! Preferences survive restarts and bad storage never breaks startup.

use std::fs;

use lapwatch_config::PREFERENCES_KEY;
use lapwatch_engine::{Preferences, Theme, ThemeMode};

use crate::common::Fixture;

#[tokio::test]
async fn preferences_round_trip_across_restart() {
    let mut fx = Fixture::new();
    fx.app.set_theme_mode(ThemeMode::Ocean);
    fx.app.set_alert_time(90);
    fx.app.toggle_particles();

    let fx = fx.restart();
    assert_eq!(
        *fx.app.preferences(),
        Preferences {
            theme: ThemeMode::Ocean,
            sound_enabled: true,
            alert_time: 90,
            pulse_effect: false,
            particles_effect: true,
        }
    );
    assert_eq!(fx.app.theme(), Theme::Ocean);
}

#[tokio::test]
async fn storage_file_holds_payload_under_preferences_key() {
    let mut fx = Fixture::new();
    fx.app.toggle_pulse();

    let raw = fs::read_to_string(&fx.storage).expect("storage written");
    let map: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(&raw).expect("storage is a JSON object");
    let payload = map
        .get(PREFERENCES_KEY)
        .and_then(serde_json::Value::as_str)
        .expect("payload stored as a string");
    let prefs = Preferences::from_json(payload).expect("payload parses");
    assert!(prefs.pulse_effect);
}

#[tokio::test]
async fn corrupt_storage_falls_back_to_defaults_and_recovers() {
    let fx = Fixture::new();
    fs::write(&fx.storage, "{ definitely not json").expect("write corrupt file");

    let mut fx = fx.restart();
    assert_eq!(*fx.app.preferences(), Preferences::default());

    fx.app.set_theme_mode(ThemeMode::Forest);
    assert!(fx.app.notice().is_none());
    let fx = fx.restart();
    assert_eq!(fx.app.preferences().theme, ThemeMode::Forest);
}

#[tokio::test]
async fn corrupt_payload_keeps_valid_fields() {
    let fx = Fixture::new();
    let storage = serde_json::json!({
        PREFERENCES_KEY: r#"{"theme":"sunset","alertTime":"later","soundEnabled":false}"#,
    });
    fs::write(&fx.storage, storage.to_string()).expect("write storage");

    let fx = fx.restart();
    let prefs = fx.app.preferences();
    assert_eq!(prefs.theme, ThemeMode::Sunset);
    assert_eq!(prefs.alert_time, 60);
    assert!(!prefs.sound_enabled);
}

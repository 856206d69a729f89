//! Loading and saving [`Preferences`] through a [`KeyValueStore`].
//!
//! Neither direction can fail from the caller's point of view: any storage or
//! decoding problem is logged and the defaults (on load) or the in-memory state
//! (on save) stay in effect.

use lapwatch_types::Preferences;

use crate::store::KeyValueStore;

/// Fixed storage key for the preference payload.
pub const PREFERENCES_KEY: &str = "timerPreferences";

#[must_use]
pub fn load_preferences(store: &dyn KeyValueStore) -> Preferences {
    let raw = match store.get(PREFERENCES_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Preferences::default(),
        Err(err) => {
            tracing::warn!("Failed to load preferences: {err}");
            return Preferences::default();
        }
    };

    match Preferences::from_json(&raw) {
        Ok(prefs) => prefs,
        Err(err) => {
            tracing::warn!("Stored preferences are malformed, using defaults: {err}");
            Preferences::default()
        }
    }
}

/// Persist `prefs`. Returns whether the write reached storage.
pub fn save_preferences(store: &mut dyn KeyValueStore, prefs: &Preferences) -> bool {
    let payload = match prefs.to_json() {
        Ok(payload) => payload,
        Err(err) => {
            tracing::warn!("Failed to encode preferences: {err}");
            return false;
        }
    };

    match store.set(PREFERENCES_KEY, &payload) {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!("Failed to save preferences: {err}");
            false
        }
    }
}

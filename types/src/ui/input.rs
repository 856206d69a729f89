//! Input modes for the key handler.

use crate::preferences::parse_alert_time;

/// Longest alert entry accepted, in characters.
const MAX_ALERT_DRAFT: usize = 6;

/// Text being typed into the alert-time field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertDraft {
    text: String,
}

impl AlertDraft {
    #[must_use]
    pub fn new(initial: &str) -> Self {
        Self {
            text: initial.to_string(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn push(&mut self, c: char) {
        if self.text.chars().count() < MAX_ALERT_DRAFT && !c.is_control() {
            self.text.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Seconds this draft commits to, using the default on invalid text.
    #[must_use]
    pub fn seconds(&self) -> u32 {
        parse_alert_time(&self.text)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InputMode {
    /// Global shortcuts are live.
    #[default]
    Normal,
    /// The alert-time field has focus; shortcuts are suppressed.
    AlertEntry(AlertDraft),
}

impl InputMode {
    #[must_use]
    pub fn is_text_entry(&self) -> bool {
        matches!(self, InputMode::AlertEntry(_))
    }
}

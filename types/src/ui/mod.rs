//! UI state types for the TUI layer.
//!
//! Pure data types with no IO, no async, no ratatui dependency.
//! Used by both the engine (state ownership) and tui (rendering/input).

mod animation;
mod flash;
mod input;
mod options;
mod pulse;

pub use animation::{AnimPhase, exponential_ramp};
pub use flash::FlashEffect;
pub use input::{AlertDraft, InputMode};
pub use options::UiOptions;
pub use pulse::PulseEffect;

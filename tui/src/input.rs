//! Input handling for the lapwatch TUI.

use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::debug;

use lapwatch_engine::App;
use lapwatch_engine::ui::InputMode;

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 256; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads terminal events on a blocking task and hands them to the frame loop.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close the receiver first so a send blocked on capacity returns.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop if caller exits early; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Apply every pending input event. Returns `true` once the app wants to quit.
pub fn handle_events(app: &mut App, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        if apply_event(app, ev) {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(app.should_quit())
}

/// Route one terminal event to the app. Returns `true` once the app wants to quit.
pub fn apply_event(app: &mut App, event: Event) -> bool {
    if let Event::Key(key) = event {
        // Handle press + repeat events (ignore releases)
        if matches!(key.kind, KeyEventKind::Release) {
            return app.should_quit();
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            app.request_quit();
            return true;
        }

        if app.input_mode().is_text_entry() {
            handle_alert_entry(app, key);
        } else {
            handle_normal_mode(app, key);
        }
    }
    app.should_quit()
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('r') if ctrl => app.reset(),
        // Other control chords are not shortcuts.
        _ if ctrl => {}
        KeyCode::Char(' ') => app.toggle_running(),
        KeyCode::Char('l') => {
            if let Some(lap) = app.lap() {
                debug!(index = lap.index(), "Lap key");
            }
        }
        KeyCode::Char('c') => app.clear_laps(),
        KeyCode::Char('t') => app.cycle_theme_mode(),
        KeyCode::Char('s') => app.toggle_sound(),
        KeyCode::Char('+' | '=') => app.adjust_alert_time(1),
        KeyCode::Char('-') => app.adjust_alert_time(-1),
        KeyCode::Char('a') => app.begin_alert_entry(),
        KeyCode::Char('p') => app.toggle_pulse(),
        KeyCode::Char('x') => app.toggle_particles(),
        KeyCode::Left => app.step_city(-1),
        KeyCode::Right => app.step_city(1),
        KeyCode::Char('?') => app.toggle_settings_panel(),
        KeyCode::Esc if app.settings_open() => app.toggle_settings_panel(),
        KeyCode::Char('q') => app.request_quit(),
        _ => {}
    }
}

fn handle_alert_entry(app: &mut App, key: KeyEvent) {
    debug_assert!(matches!(app.input_mode(), InputMode::AlertEntry(_)));
    match key.code {
        KeyCode::Enter => app.commit_alert_entry(),
        KeyCode::Esc => app.cancel_alert_entry(),
        KeyCode::Backspace => app.alert_backspace(),
        KeyCode::Char(c) => app.push_alert_char(c),
        _ => {}
    }
}

//! TUI rendering for lapwatch using ratatui.

mod digits;
mod effects;
mod input;
mod theme;

pub use digits::{DIGIT_HEIGHT, big_lines, big_width};
pub use effects::{blend, flash_color, pulse_color};
pub use input::{InputPump, apply_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph},
};

use lapwatch_engine::App;
use lapwatch_engine::ui::InputMode;

/// Height of the timer area: block digits, a blank row and the text readout.
const TIMER_HEIGHT: u16 = DIGIT_HEIGHT as u16 + 2;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &mut App) {
    let options = app.ui_options();
    let palette = palette(app.theme(), options);
    let glyphs = glyphs(options);

    let bg = flash_color(palette.bg, palette.flash, app.flash_intensity());
    let bg_block = Block::default().style(Style::default().bg(bg).fg(palette.text_primary));
    frame.render_widget(bg_block, frame.area());

    draw_particles(frame, app, &palette, &glyphs);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4),            // Live clock
            Constraint::Length(TIMER_HEIGHT), // Timer
            Constraint::Min(3),               // Laps
            Constraint::Length(1),            // Status bar
        ])
        .split(frame.area());

    draw_live_clock(frame, app, chunks[0], &palette);
    draw_timer(frame, app, chunks[1], &palette, &glyphs);
    draw_laps(frame, app, chunks[2], &palette, &glyphs);
    draw_status_bar(frame, app, chunks[3], &palette, &glyphs);

    if app.settings_open() {
        draw_settings_panel(frame, app, &palette, &glyphs);
    }
}

fn draw_particles(frame: &mut Frame, app: &mut App, palette: &Palette, glyphs: &Glyphs) {
    let area = frame.area();
    let Some(field) = app.particle_field(area.width, area.height) else {
        return;
    };
    let buf = frame.buffer_mut();
    for p in field.particles() {
        let x = (p.x as u16).min(area.width.saturating_sub(1));
        let y = (p.y as u16).min(area.height.saturating_sub(1));
        let size = match p.radius {
            r if r < 2.0 => 0,
            r if r < 3.0 => 1,
            _ => 2,
        };
        if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
            cell.set_symbol(glyphs.particles[size])
                .set_fg(blend(palette.bg, palette.particle, p.opacity));
        }
    }
}

fn draw_live_clock(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let snap = app.clock_snapshot();

    let title = Line::from(vec![
        Span::styled(format!(" {} ", snap.location_short), styles::title(palette)),
        Span::styled(format!("{} ", snap.city_time), styles::muted(palette)),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::border(palette))
        .title(title)
        .padding(Padding::horizontal(1));

    let lines = vec![
        Line::from(vec![
            Span::styled(
                snap.location_name,
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(snap.meta.clone(), styles::muted(palette)),
        ]),
        Line::from(vec![
            Span::styled(
                format!(
                    "{}-{}-{} {}:{}:{}",
                    snap.year, snap.month, snap.day, snap.hour, snap.minute, snap.second
                ),
                Style::default().fg(palette.accent),
            ),
            Span::raw("  "),
            Span::styled(snap.full_date.clone(), styles::muted(palette)),
            Span::raw("  "),
            Span::styled(snap.hero_date.clone(), styles::muted(palette)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_timer(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let parts = app.stopwatch().display();
    let readout = parts.to_string();

    let digit_color = match app.pulse_intensity() {
        Some(intensity) => pulse_color(palette.digits, palette.bg, intensity),
        None => palette.digits,
    };
    let digit_style = Style::default()
        .fg(digit_color)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = if big_width(&readout) <= usize::from(area.width) {
        big_lines(&readout, glyphs.digit_block)
            .into_iter()
            .map(|row| Line::from(Span::styled(row, digit_style)))
            .collect()
    } else {
        // Too narrow for block digits.
        vec![Line::from(""); DIGIT_HEIGHT]
    };
    lines.push(Line::from(""));

    let marker = if app.stopwatch().is_running() {
        glyphs.running
    } else {
        glyphs.paused
    };
    lines.push(Line::from(vec![
        Span::styled(format!("{marker} "), styles::key_highlight(palette)),
        Span::styled(readout, digit_style),
    ]));

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

fn draw_laps(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let laps = app.stopwatch().laps();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::border(palette))
        .title(Span::styled(
            format!(" Laps ({}) ", laps.len()),
            styles::title(palette),
        ))
        .padding(Padding::horizontal(1));

    let visible = usize::from(area.height.saturating_sub(2));
    let lines: Vec<Line> = if laps.is_empty() {
        vec![Line::from(Span::styled(
            "No laps recorded yet",
            styles::muted(palette),
        ))]
    } else {
        let latest = laps.latest().map(|l| l.index());
        laps.recent_first()
            .take(visible)
            .map(|lap| {
                let is_latest = Some(lap.index()) == latest;
                let (marker, style) = if is_latest {
                    (glyphs.latest_lap, styles::key_highlight(palette))
                } else {
                    (" ", Style::default().fg(palette.text_primary))
                };
                Line::from(vec![
                    Span::styled(format!("{marker} "), style),
                    Span::styled(format!("Lap {:<4}", lap.index()), style),
                    Span::styled(lap.label(), style),
                ])
            })
            .collect()
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_status_bar(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let hint = styles::key_hint(palette);
    let key = styles::key_highlight(palette);
    let sep = Span::styled(format!(" {} ", glyphs.separator), hint);

    let mut spans = vec![Span::raw(" ")];

    if let InputMode::AlertEntry(draft) = app.input_mode() {
        spans.extend([
            Span::styled("Alert seconds: ", key),
            Span::styled(
                format!("{}_", draft.text()),
                Style::default().fg(palette.text_primary),
            ),
            sep.clone(),
            Span::styled("Enter", key),
            Span::styled(" save ", hint),
            Span::styled("Esc", key),
            Span::styled(" cancel", hint),
        ]);
    } else {
        let prefs = app.preferences();
        let sound = if prefs.sound_enabled { "on" } else { "off" };
        spans.extend([
            Span::styled(format!("Alert {}s", prefs.alert_time), hint),
            sep.clone(),
            Span::styled(format!("Sound {sound}"), hint),
            sep.clone(),
            Span::styled(format!("Theme {}", prefs.theme), hint),
            sep.clone(),
            Span::styled("space", key),
            Span::styled(" start/stop ", hint),
            Span::styled("l", key),
            Span::styled(" lap ", hint),
            Span::styled("^R", key),
            Span::styled(" reset ", hint),
            Span::styled("?", key),
            Span::styled(" settings ", hint),
            Span::styled("q", key),
            Span::styled(" quit", hint),
        ]);
    }

    if let Some(notice) = app.notice() {
        spans.push(sep);
        spans.push(Span::styled(
            notice.to_string(),
            Style::default().fg(palette.warning),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_settings_panel(frame: &mut Frame, app: &App, palette: &Palette, glyphs: &Glyphs) {
    let area = frame.area();
    let width = 44.min(area.width.saturating_sub(4));
    let height = 13.min(area.height.saturating_sub(2));
    let panel = Rect {
        x: area.x + (area.width.saturating_sub(width) / 2),
        y: area.y + (area.height.saturating_sub(height) / 2),
        width,
        height,
    };

    frame.render_widget(Clear, panel);

    let prefs = app.preferences();
    let toggle = |on: bool| if on { glyphs.on } else { glyphs.off };
    let alert_value = match app.input_mode() {
        InputMode::AlertEntry(draft) => format!("{}_", draft.text()),
        InputMode::Normal => format!("{}s", prefs.alert_time),
    };

    let row = |label: &'static str, value: String, keys: &'static str| {
        Line::from(vec![
            Span::styled(format!("{label:<12}"), Style::default().fg(palette.text_primary)),
            Span::styled(format!("{value:<16}"), styles::key_highlight(palette)),
            Span::styled(keys, styles::key_hint(palette)),
        ])
    };

    let lines = vec![
        row(
            "Theme",
            format!("{} ({})", prefs.theme, app.theme()),
            "t",
        ),
        row("Sound", toggle(prefs.sound_enabled).to_string(), "s"),
        row("Alert", alert_value, "a  + -"),
        row("Pulse", toggle(prefs.pulse_effect).to_string(), "p"),
        row("Particles", toggle(prefs.particles_effect).to_string(), "x"),
        row(
            "City",
            app.live_clock().city().short.to_string(),
            glyphs.city_keys,
        ),
        Line::from(""),
        row("Clear laps", String::new(), "c"),
        Line::from(""),
        Line::from(Span::styled(
            "? or Esc to close",
            styles::muted(palette),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.accent))
        .title(Span::styled(" Settings ", styles::title(palette)))
        .style(Style::default().bg(palette.bg_panel))
        .padding(Padding::horizontal(1));

    frame.render_widget(Paragraph::new(lines).block(block), panel);
}

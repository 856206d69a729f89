//! Color palettes and glyphs for the lapwatch TUI.
//!
//! One palette per [`Theme`], with an optional high-contrast override that
//! ignores the selected theme.

use ratatui::style::{Color, Modifier, Style};

use lapwatch_engine::Theme;
use lapwatch_engine::ui::UiOptions;

/// Resolved palette used by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub bg_panel: Color,
    pub border: Color,
    pub text_primary: Color,
    pub text_muted: Color,
    /// Timer digits.
    pub digits: Color,
    /// Highlights: latest lap, focused field, key hints.
    pub accent: Color,
    /// Particle dots.
    pub particle: Color,
    /// Background while the alert flash is at full strength.
    pub flash: Color,
    pub warning: Color,
}

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb(r, g, b)
}

impl Palette {
    #[must_use]
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Day => Self {
                bg: rgb(244, 241, 234),
                bg_panel: rgb(232, 228, 218),
                border: rgb(196, 190, 176),
                text_primary: rgb(40, 40, 46),
                text_muted: rgb(118, 114, 106),
                digits: rgb(28, 28, 34),
                accent: rgb(214, 120, 40),
                particle: rgb(190, 150, 90),
                flash: rgb(255, 236, 170),
                warning: rgb(196, 60, 40),
            },
            Theme::Night => Self {
                bg: rgb(16, 18, 28),
                bg_panel: rgb(26, 29, 43),
                border: rgb(60, 66, 92),
                text_primary: rgb(220, 222, 236),
                text_muted: rgb(120, 126, 150),
                digits: rgb(236, 238, 250),
                accent: rgb(126, 156, 216),
                particle: rgb(150, 160, 210),
                flash: rgb(80, 92, 150),
                warning: rgb(255, 110, 110),
            },
            Theme::Ocean => Self {
                bg: rgb(8, 38, 58),
                bg_panel: rgb(14, 52, 76),
                border: rgb(40, 96, 128),
                text_primary: rgb(214, 238, 246),
                text_muted: rgb(120, 168, 190),
                digits: rgb(226, 248, 255),
                accent: rgb(64, 200, 220),
                particle: rgb(110, 190, 220),
                flash: rgb(40, 140, 170),
                warning: rgb(255, 150, 110),
            },
            Theme::Sunset => Self {
                bg: rgb(58, 24, 38),
                bg_panel: rgb(76, 34, 48),
                border: rgb(130, 66, 72),
                text_primary: rgb(252, 226, 210),
                text_muted: rgb(200, 150, 140),
                digits: rgb(255, 236, 220),
                accent: rgb(255, 140, 80),
                particle: rgb(250, 170, 110),
                flash: rgb(190, 80, 60),
                warning: rgb(255, 220, 100),
            },
            Theme::Forest => Self {
                bg: rgb(18, 36, 24),
                bg_panel: rgb(26, 50, 34),
                border: rgb(62, 96, 66),
                text_primary: rgb(220, 236, 214),
                text_muted: rgb(130, 160, 126),
                digits: rgb(232, 246, 226),
                accent: rgb(152, 187, 108),
                particle: rgb(140, 180, 110),
                flash: rgb(70, 120, 60),
                warning: rgb(230, 195, 132),
            },
            Theme::Purple => Self {
                bg: rgb(32, 20, 50),
                bg_panel: rgb(44, 30, 68),
                border: rgb(90, 70, 130),
                text_primary: rgb(234, 222, 250),
                text_muted: rgb(156, 140, 186),
                digits: rgb(244, 236, 255),
                accent: rgb(180, 140, 240),
                particle: rgb(170, 140, 220),
                flash: rgb(110, 80, 170),
                warning: rgb(255, 160, 180),
            },
            Theme::Pink => Self {
                bg: rgb(252, 232, 240),
                bg_panel: rgb(246, 216, 228),
                border: rgb(220, 170, 192),
                text_primary: rgb(70, 30, 50),
                text_muted: rgb(150, 100, 124),
                digits: rgb(90, 30, 60),
                accent: rgb(226, 80, 140),
                particle: rgb(236, 140, 180),
                flash: rgb(255, 190, 215),
                warning: rgb(190, 40, 60),
            },
            Theme::Minimal => Self {
                bg: rgb(255, 255, 255),
                bg_panel: rgb(245, 245, 245),
                border: rgb(200, 200, 200),
                text_primary: rgb(20, 20, 20),
                text_muted: rgb(120, 120, 120),
                digits: rgb(0, 0, 0),
                accent: rgb(60, 60, 60),
                particle: rgb(180, 180, 180),
                flash: rgb(225, 225, 225),
                warning: rgb(170, 30, 30),
            },
        }
    }

    #[must_use]
    pub const fn high_contrast() -> Self {
        Self {
            bg: Color::Black,
            bg_panel: Color::Black,
            border: Color::Gray,
            text_primary: Color::White,
            text_muted: Color::Gray,
            digits: Color::White,
            accent: Color::Yellow,
            particle: Color::DarkGray,
            flash: Color::White,
            warning: Color::Red,
        }
    }
}

#[must_use]
pub fn palette(theme: Theme, options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::for_theme(theme)
    }
}

/// ASCII/Unicode glyphs for markers and particles.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub running: &'static str,
    pub paused: &'static str,
    pub separator: &'static str,
    pub latest_lap: &'static str,
    pub on: &'static str,
    pub off: &'static str,
    pub city_keys: &'static str,
    /// Indexed by particle size, smallest first.
    pub particles: [&'static str; 3],
    /// Block used to draw the big digits.
    pub digit_block: &'static str,
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs {
            running: ">",
            paused: "||",
            separator: "|",
            latest_lap: ">",
            on: "[x]",
            off: "[ ]",
            city_keys: "<- ->",
            particles: [".", "o", "O"],
            digit_block: "#",
        }
    } else {
        Glyphs {
            running: "▶",
            paused: "⏸",
            separator: "│",
            latest_lap: "▸",
            on: "●",
            off: "○",
            city_keys: "← →",
            particles: ["·", "•", "●"],
            digit_block: "█",
        }
    }
}

/// Pre-defined styles for common UI elements.
pub mod styles {
    use super::{Modifier, Palette, Style};

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn muted(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_hint(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn key_highlight(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn border(palette: &Palette) -> Style {
        Style::default().fg(palette.border)
    }
}

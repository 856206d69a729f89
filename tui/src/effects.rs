//! Color modulation for the pulse and alert-flash effects.

use ratatui::style::Color;

/// Blend two colors; `t = 0` is `from`, `t = 1` is `to`.
///
/// Non-RGB colors cannot be mixed, so they snap at the halfway point.
#[must_use]
pub fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ if t < 0.5 => from,
        _ => to,
    }
}

/// Digit color for a pulse brightness in `[0, 1]`.
///
/// The digits never fade below 40% toward the background.
#[must_use]
pub fn pulse_color(digits: Color, bg: Color, intensity: f32) -> Color {
    let dim = (1.0 - intensity.clamp(0.0, 1.0)) * 0.6;
    blend(digits, bg, dim)
}

/// Background color while the alert flash is showing.
#[must_use]
pub fn flash_color(bg: Color, flash: Color, intensity: f32) -> Color {
    if intensity <= 0.0 {
        bg
    } else {
        blend(bg, flash, intensity)
    }
}

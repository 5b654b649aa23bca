// Three palettes, one per display mode. Everything that draws takes the
// active palette; no color literals belong anywhere else.

use ratatui::style::Color;
use taskdeck_core::models::DisplayMode;

pub struct Palette {
    pub bg: Color,
    pub bg_panel: Color,
    pub bg_selected: Color,
    pub text: Color,
    pub text_muted: Color,
    pub text_dim: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub border: Color,
    pub border_active: Color,
}

pub const LIGHT: Palette = Palette {
    bg: Color::Rgb(244, 244, 240),
    bg_panel: Color::Rgb(252, 252, 250),
    bg_selected: Color::Rgb(222, 228, 238),
    text: Color::Rgb(28, 32, 38),
    text_muted: Color::Rgb(100, 106, 116),
    text_dim: Color::Rgb(152, 158, 168),
    accent: Color::Rgb(37, 99, 235),
    success: Color::Rgb(22, 142, 80),
    warning: Color::Rgb(186, 124, 14),
    error: Color::Rgb(200, 42, 42),
    border: Color::Rgb(203, 207, 216),
    border_active: Color::Rgb(37, 99, 235),
};

/// Muted dark palette; the default look of the terminal generation this app
/// grew up with.
pub const DARK: Palette = Palette {
    bg: Color::Rgb(10, 10, 10),
    bg_panel: Color::Rgb(22, 22, 22),
    bg_selected: Color::Rgb(38, 38, 42),
    text: Color::Rgb(220, 220, 220),
    text_muted: Color::Rgb(128, 128, 128),
    text_dim: Color::Rgb(90, 90, 90),
    accent: Color::Rgb(86, 156, 214),
    success: Color::Rgb(106, 153, 85),
    warning: Color::Rgb(206, 145, 120),
    error: Color::Rgb(244, 112, 112),
    border: Color::Rgb(60, 60, 60),
    border_active: Color::Rgb(110, 110, 110),
};

pub const NEON: Palette = Palette {
    bg: Color::Rgb(6, 4, 18),
    bg_panel: Color::Rgb(16, 10, 34),
    bg_selected: Color::Rgb(42, 22, 72),
    text: Color::Rgb(232, 240, 255),
    text_muted: Color::Rgb(142, 132, 200),
    text_dim: Color::Rgb(96, 88, 150),
    accent: Color::Rgb(0, 229, 255),
    success: Color::Rgb(57, 255, 136),
    warning: Color::Rgb(255, 200, 40),
    error: Color::Rgb(255, 64, 129),
    border: Color::Rgb(70, 42, 120),
    border_active: Color::Rgb(255, 0, 230),
};

pub fn palette(mode: DisplayMode) -> &'static Palette {
    match mode {
        DisplayMode::Light => &LIGHT,
        DisplayMode::Dark => &DARK,
        DisplayMode::Neon => &NEON,
    }
}

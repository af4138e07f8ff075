//! Theming and color definitions.
//!
//! The catalog uses the Cochl indigo accent on top of the terminal's own
//! palette. Neutral text uses indexed grays picked per background so the UI
//! stays readable on light and dark terminals.

use std::sync::{Mutex, OnceLock};

use ratatui::style::{Color, Modifier, Style};

/// Terminal background brightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    Light,
    Dark,
}

static BACKGROUND_OVERRIDE: OnceLock<Mutex<Option<Background>>> = OnceLock::new();

/// Force a background mode, or `None` to fall back to `COLORFGBG`.
pub fn set_background_mode(mode: Option<Background>) {
    let lock = BACKGROUND_OVERRIDE.get_or_init(|| Mutex::new(None));
    if let Ok(mut guard) = lock.lock() {
        *guard = mode;
    }
}

pub fn background() -> Background {
    let lock = BACKGROUND_OVERRIDE.get_or_init(|| Mutex::new(None));
    if let Ok(guard) = lock.lock()
        && let Some(mode) = *guard
    {
        return mode;
    }
    background_from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
}

pub fn is_light_background() -> bool {
    background() == Background::Light
}

fn background_from_colorfgbg(colorfgbg: Option<&str>) -> Background {
    let Some(value) = colorfgbg else {
        return Background::Dark;
    };
    let bg_str = value.rsplit(';').next().unwrap_or(value);
    match bg_str.parse::<u8>() {
        Ok(bg) if bg >= 7 => Background::Light,
        _ => Background::Dark,
    }
}

// Tailwind-derived palette used by the previews and detail pages.
pub const INDIGO_100: Color = Color::Rgb(224, 231, 255);
pub const INDIGO_200: Color = Color::Rgb(199, 210, 254);
pub const INDIGO_300: Color = Color::Rgb(165, 180, 252);
pub const INDIGO_400: Color = Color::Rgb(129, 140, 248);
pub const INDIGO_500: Color = Color::Rgb(99, 102, 241);
pub const INDIGO_600: Color = Color::Rgb(79, 70, 229);
pub const BLUE_500: Color = Color::Rgb(59, 130, 246);
pub const BLUE_700: Color = Color::Rgb(29, 78, 216);
pub const RED_500: Color = Color::Rgb(239, 68, 68);
pub const RED_700: Color = Color::Rgb(185, 28, 28);
pub const TEAL_500: Color = Color::Rgb(20, 184, 166);
pub const GREEN_600: Color = Color::Rgb(22, 163, 74);
pub const GRAY_300: Color = Color::Rgb(209, 213, 219);

/// Accent text (active items, links, selected tabs).
pub fn accent() -> Style {
    Style::default().fg(if is_light_background() {
        INDIGO_600
    } else {
        INDIGO_400
    })
}

/// Body text.
pub fn text() -> Style {
    Style::default().fg(if is_light_background() {
        Color::Indexed(236)
    } else {
        Color::Indexed(252)
    })
}

/// Secondary text (descriptions, inactive items).
pub fn muted() -> Style {
    Style::default().fg(if is_light_background() {
        Color::Indexed(243)
    } else {
        Color::Indexed(245)
    })
}

/// Section and page headings.
pub fn heading() -> Style {
    text().add_modifier(Modifier::BOLD)
}

/// Preview thumbnail background.
pub fn surface() -> Style {
    Style::default().bg(if is_light_background() {
        Color::Rgb(238, 242, 255)
    } else {
        Color::Indexed(236)
    })
}

/// Highlight for the row or card under a focused cursor.
pub fn cursor(base: Style) -> Style {
    base.add_modifier(Modifier::REVERSED)
}

/// Pane and card borders.
pub fn border(focused: bool) -> Style {
    if focused {
        accent()
    } else {
        muted()
    }
}

pub fn status_bar() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Symbols that have an ASCII fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyphs {
    pub expanded: &'static str,
    pub collapsed: &'static str,
    pub back: &'static str,
    pub separator: &'static str,
    pub check: &'static str,
    pub cross: &'static str,
    pub bullet: &'static str,
    pub swatch: &'static str,
}

const UNICODE_GLYPHS: Glyphs = Glyphs {
    expanded: "\u{25be}",
    collapsed: "\u{25b8}",
    back: "\u{2190}",
    separator: "\u{203a}",
    check: "\u{2713}",
    cross: "\u{2717}",
    bullet: "\u{2022}",
    swatch: "\u{2588}\u{2588}",
};

const ASCII_GLYPHS: Glyphs = Glyphs {
    expanded: "v",
    collapsed: ">",
    back: "<-",
    separator: ">",
    check: "+",
    cross: "x",
    bullet: "*",
    swatch: "##",
};

pub const fn glyphs(ascii: bool) -> &'static Glyphs {
    if ascii { &ASCII_GLYPHS } else { &UNICODE_GLYPHS }
}

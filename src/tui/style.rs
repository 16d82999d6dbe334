//! Color scheme and styles.

use ratatui::style::{Color, Modifier, Style};

use crate::view::StyleClass;

/// Dashboard color palette.
pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Reset;
    pub const FG: Color = Color::White;
    pub const FG_DIM: Color = Color::DarkGray;

    pub const ACCENT: Color = Color::Cyan;

    // Phase colors
    pub const ACTIVE: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const CRITICAL: Color = Color::Red;
    pub const PROGRESS: Color = Color::Blue;
}

/// Pre-defined styles.
pub struct Styles;

impl Styles {
    /// Default text style.
    pub fn default() -> Style {
        Style::default().fg(Theme::FG).bg(Theme::BG)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Theme::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    /// Table header style.
    pub fn table_header() -> Style {
        Style::default().fg(Theme::FG).add_modifier(Modifier::BOLD)
    }

    pub fn accent() -> Style {
        Style::default().fg(Theme::ACCENT)
    }

    /// Dimmed text style.
    pub fn dim() -> Style {
        Style::default().fg(Theme::FG_DIM)
    }

    /// Maps a UI-agnostic [`StyleClass`] to a ratatui [`Style`].
    pub fn from_class(class: StyleClass) -> Style {
        match class {
            StyleClass::Normal => Self::default(),
            StyleClass::Title => Self::title(),
            StyleClass::Heading => Self::table_header(),
            StyleClass::Accent | StyleClass::Rule => Self::accent(),
            StyleClass::Active => Style::default().fg(Theme::ACTIVE),
            StyleClass::Warning => Style::default().fg(Theme::WARNING),
            StyleClass::Critical => Style::default().fg(Theme::CRITICAL),
            StyleClass::Progress => Style::default().fg(Theme::PROGRESS),
            StyleClass::Dimmed => Self::dim(),
        }
    }

    /// Style for a draw command, including the selected-row reverse video.
    pub fn for_command(class: StyleClass, reversed: bool) -> Style {
        let style = Self::from_class(class);
        if reversed {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        }
    }
}

//! UI-agnostic draw primitives.
//!
//! The composer emits these; the TUI maps them onto ratatui cells and styles.

use crate::model::Phase;

/// Style classification of a piece of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StyleClass {
    #[default]
    Normal,
    /// Screen title (TUI: cyan + bold).
    Title,
    /// Column headings (TUI: white + bold).
    Heading,
    /// Names and addresses (TUI: cyan).
    Accent,
    /// Horizontal rules (TUI: cyan).
    Rule,
    /// Healthy / enabled (TUI: green).
    Active,
    /// Waiting on someone (TUI: yellow).
    Warning,
    /// Broken / disabled (TUI: red).
    Critical,
    /// Work in progress (TUI: blue).
    Progress,
    /// Secondary information (TUI: dark gray).
    Dimmed,
}

impl StyleClass {
    pub fn for_phase(phase: &Phase) -> Self {
        match phase {
            Phase::PendingAccept => StyleClass::Warning,
            Phase::Ready => StyleClass::Active,
            Phase::Failed => StyleClass::Critical,
            Phase::Provisioning => StyleClass::Progress,
            Phase::Unrecognized(_) => StyleClass::Normal,
        }
    }
}

/// Styled text at a screen cell. Rows and columns are zero-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawCommand {
    pub row: u16,
    pub col: u16,
    pub text: String,
    pub style: StyleClass,
    /// Reverse video, used for the selected row.
    pub reversed: bool,
}

impl DrawCommand {
    pub fn text(row: u16, col: u16, text: impl Into<String>, style: StyleClass) -> Self {
        Self {
            row,
            col,
            text: text.into(),
            style,
            reversed: false,
        }
    }

    pub fn reversed(mut self) -> Self {
        self.reversed = true;
        self
    }
}

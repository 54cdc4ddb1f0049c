use crate::ui::mvi::UiState;

/// State of the MCP configuration popover.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PopoverState {
    #[default]
    Hidden,
    Visible {
        /// In-progress, possibly-invalid serialization of the record.
        buffer: String,
        /// Inline error from the last rejected save, cleared on edit.
        error: Option<String>,
    },
}

impl UiState for PopoverState {}

impl PopoverState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// The edit buffer, if the popover is open.
    pub fn buffer(&self) -> Option<&str> {
        match self {
            Self::Hidden => None,
            Self::Visible { buffer, .. } => Some(buffer),
        }
    }

    /// The inline error, if one is showing.
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Hidden => None,
            Self::Visible { error, .. } => error.as_deref(),
        }
    }
}

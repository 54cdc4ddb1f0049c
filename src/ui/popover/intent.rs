use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum PopoverIntent {
    /// Open the popover with the edit buffer seeded from `buffer`.
    Open { buffer: String },
    /// Replace the in-progress edit buffer. Clears any inline error.
    Edit { buffer: String },
    /// A save was rejected; keep the popover open and show `message`.
    Reject { message: String },
    /// Close the popover (cancel, successful save, or reset).
    Close,
}

impl Intent for PopoverIntent {}

use crate::ui::mvi::Reducer;
use crate::ui::popover::intent::PopoverIntent;
use crate::ui::popover::state::PopoverState;

pub struct PopoverReducer;

impl Reducer for PopoverReducer {
    type State = PopoverState;
    type Intent = PopoverIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PopoverIntent::Open { buffer } => PopoverState::Visible {
                buffer,
                error: None,
            },
            PopoverIntent::Edit { buffer } => match state {
                PopoverState::Visible { .. } => PopoverState::Visible {
                    buffer,
                    error: None,
                },
                // Edits only apply to an open popover
                hidden => hidden,
            },
            PopoverIntent::Reject { message } => match state {
                PopoverState::Visible { buffer, .. } => PopoverState::Visible {
                    buffer,
                    error: Some(message),
                },
                hidden => hidden,
            },
            PopoverIntent::Close => PopoverState::Hidden,
        }
    }
}

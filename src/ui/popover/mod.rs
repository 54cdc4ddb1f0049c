mod intent;
mod reducer;
mod state;

pub use intent::PopoverIntent;
pub use reducer::PopoverReducer;
pub use state::PopoverState;

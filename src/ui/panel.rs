//! MCP configuration panel controller.
//!
//! Owns the popover state and performs the side effects around the
//! pure reducer: loading the record into the edit buffer, saving or
//! resetting the store, and reporting outcomes through the injected
//! notifier. Each handler is one synchronous UI event.

use crate::config::ConfigStore;
use crate::notify::Notifier;
use crate::storage::Storage;
use crate::ui::mvi::Reducer;
use crate::ui::popover::{PopoverIntent, PopoverReducer, PopoverState};

pub struct ConfigPanel<S, N> {
    state: PopoverState,
    store: ConfigStore<S>,
    notifier: N,
}

impl<S: Storage, N: Notifier> ConfigPanel<S, N> {
    /// Panel starting closed over the given store and notifier.
    pub fn new(store: ConfigStore<S>, notifier: N) -> Self {
        Self {
            state: PopoverState::Hidden,
            store,
            notifier,
        }
    }

    /// Current popover state.
    pub fn state(&self) -> &PopoverState {
        &self.state
    }

    /// Access the underlying store.
    pub fn store(&self) -> &ConfigStore<S> {
        &self.store
    }

    /// Access the injected notifier.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Open the popover with the persisted record in the edit buffer,
    /// or close it if it is already open.
    pub fn toggle(&mut self) {
        if self.state.is_visible() {
            self.apply(PopoverIntent::Close);
        } else {
            let buffer = self.store.load().to_json_pretty();
            self.apply(PopoverIntent::Open { buffer });
        }
    }

    /// Replace the in-progress edit buffer.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.apply(PopoverIntent::Edit {
            buffer: text.into(),
        });
    }

    /// Parse and persist the edit buffer.
    ///
    /// On success the popover closes and the notifier reports it. On
    /// failure the popover stays open with the error inline and the
    /// persisted record is untouched.
    pub fn save(&mut self) {
        let Some(buffer) = self.state.buffer().map(str::to_owned) else {
            return;
        };
        match self.store.save(&buffer) {
            Ok(_) => {
                self.apply(PopoverIntent::Close);
                self.notifier.success("MCP configuration saved successfully");
            }
            Err(e) => {
                self.apply(PopoverIntent::Reject {
                    message: e.to_string(),
                });
            }
        }
    }

    /// Close the popover, discarding any edits.
    pub fn cancel(&mut self) {
        self.apply(PopoverIntent::Close);
    }

    /// Clear the persisted record back to the defaults and close.
    pub fn reset(&mut self) {
        match self.store.reset() {
            Ok(_) => {
                self.apply(PopoverIntent::Close);
                self.notifier
                    .success("MCP configuration has been reset to defaults");
            }
            Err(e) => {
                let message = e.to_string();
                self.apply(PopoverIntent::Reject {
                    message: message.clone(),
                });
                self.notifier.error(&message);
            }
        }
    }

    fn apply(&mut self, intent: PopoverIntent) {
        self.state = PopoverReducer::reduce(self.state.clone(), intent);
    }
}

//! # Vocabkit History
//!
//! Bounded undo/redo for the vocabulary editor, with a localized preview
//! of what each undo or redo is about to change.
//!
//! The editor records one [`HistoryEntry`] per committed edit. Undo and redo
//! replay the recorded state into the [`VocabularyStore`] with history
//! suppressed, so replays never record entries of their own.

pub mod describe;
pub mod entry;
mod replay;
pub mod stack;
pub mod store;
pub mod synonym;

#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;

use vocabkit_core::event::history::HistoryChanged;
use vocabkit_core::EventEmitter;
use vocabkit_localization::LocalizationService;

pub use entry::{
    ColorChange, ConfirmChange, ConfirmColorChange, Direction, HistoryEntry, PositionChange,
    VocabularyChange,
};
pub use stack::{UndoStack, UNDO_STACK_MAX};
pub use store::{StoreError, StoreResult, UpdateRequest, VocabularyStore};
pub use synonym::SynonymDiff;

/// Undo/redo history of one editing session
pub struct EditingHistory<S: VocabularyStore> {
    /// Recorded entries and pointer
    stack: UndoStack,
    /// Store replays write into
    store: S,
    /// Catalog used for previews
    localization: Arc<LocalizationService>,
    /// Bus notified after every stack change
    events: Option<Arc<EventEmitter>>,
    /// Last computed undo preview
    undo_message: String,
    /// Last computed redo preview
    redo_message: String,
}

impl<S: VocabularyStore> EditingHistory<S> {
    pub fn new(store: S, localization: Arc<LocalizationService>) -> Self {
        let none = describe::no_history(&localization);
        Self {
            stack: UndoStack::new(),
            store,
            localization,
            events: None,
            undo_message: none.clone(),
            redo_message: none,
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.stack = UndoStack::with_capacity(capacity);
        self
    }

    pub fn with_events(mut self, events: Arc<EventEmitter>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn stack(&self) -> &UndoStack {
        &self.stack
    }

    /// Forget every entry, e.g. when another vocabulary file is selected
    pub fn init_undo_stack(&mut self) {
        self.stack = self.stack.cleared();
        self.refresh_messages();
        tracing::debug!("undo stack cleared");
        self.notify();
    }

    /// Record a committed edit
    pub fn add_history(&mut self, entry: HistoryEntry) {
        tracing::debug!(action = entry.action(), "recording history entry");
        self.stack = self.stack.pushed(entry);
        self.notify();
    }

    /// Can undo?
    pub fn can_undo(&self) -> bool {
        self.stack.can_undo()
    }

    /// Can redo?
    pub fn can_redo(&self) -> bool {
        self.stack.can_redo()
    }

    /// Undo the entry before the pointer. Returns whether anything was replayed.
    pub fn exec_undo(&mut self) -> bool {
        self.exec(Direction::Undo)
    }

    /// Redo the entry at the pointer. Returns whether anything was replayed.
    pub fn exec_redo(&mut self) -> bool {
        self.exec(Direction::Redo)
    }

    fn exec(&mut self, direction: Direction) -> bool {
        self.set_message(direction);

        let Some(entry) = self.stack.entry(direction).cloned() else {
            tracing::debug!(direction = direction.as_str(), "nothing to replay");
            return false;
        };

        replay::replay(&mut self.store, &entry, direction);
        self.stack = self.stack.moved(direction);
        self.notify();
        true
    }

    /// Compute and cache the preview for `direction`
    pub fn set_message(&mut self, direction: Direction) -> &str {
        if self.stack.pointer().is_none() {
            self.undo_message = self.no_history_message();
            self.redo_message = self.undo_message.clone();
        }
        let message = self.preview(direction);
        match direction {
            Direction::Undo => {
                self.undo_message = message;
                &self.undo_message
            }
            Direction::Redo => {
                self.redo_message = message;
                &self.redo_message
            }
        }
    }

    /// Preview of what `direction` would do, without caching it
    pub fn preview(&self, direction: Direction) -> String {
        match self.stack.entry(direction) {
            Some(entry) => describe::describe(entry, direction, &self.store, &self.localization),
            None => self.no_history_message(),
        }
    }

    /// Recompute both cached previews
    pub fn refresh_messages(&mut self) {
        self.set_message(Direction::Undo);
        self.set_message(Direction::Redo);
    }

    pub fn undo_message(&self) -> &str {
        &self.undo_message
    }

    pub fn redo_message(&self) -> &str {
        &self.redo_message
    }

    /// The "no history available" sentinel in the current locale
    pub fn no_history_message(&self) -> String {
        describe::no_history(&self.localization)
    }

    fn notify(&self) {
        if let Some(events) = &self.events {
            events.emit(HistoryChanged {
                can_undo: self.stack.can_undo(),
                can_redo: self.stack.can_redo(),
                pointer: self.stack.pointer(),
                len: self.stack.len(),
            });
        }
    }
}

//! Editing session
//!
//! The facade the editor drives: every mutation goes through the store with
//! history enabled and the produced entry is pushed onto the undo stack.

use std::sync::Arc;

use history::{Direction, EditingHistory, StoreError, StoreResult, UpdateRequest, VocabularyStore};
use vocabkit_core::event::vocabulary::FileSelected;
use vocabkit_core::{Color, ColorAttribute, Coordinate, EventEmitter, NodeId, Settings};
use vocabkit_localization::{LanguageId, LocalizationService};

use crate::store::{InMemoryVocabulary, VocabularyFile};

/// One user's editing session over a set of vocabulary files
pub struct EditingSession {
    settings: Settings,
    events: Arc<EventEmitter>,
    history: EditingHistory<InMemoryVocabulary>,
}

impl EditingSession {
    pub fn new(settings: Settings) -> Self {
        telemetry::init_logging(&settings.telemetry);

        let localization = Arc::new(LocalizationService::with_builtin(LanguageId::new(
            settings.locale.language.clone(),
        )));
        let events = Arc::new(EventEmitter::new());
        let store = InMemoryVocabulary::new()
            .with_blank_prefix(settings.vocabulary.blank_prefix.clone());
        let history = EditingHistory::new(store, localization)
            .with_capacity(settings.history.capacity)
            .with_events(events.clone());

        tracing::info!(
            locale = %settings.locale.language,
            capacity = settings.history.capacity,
            "editing session started"
        );

        Self {
            settings,
            events,
            history,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn events(&self) -> &Arc<EventEmitter> {
        &self.events
    }

    pub fn history(&self) -> &EditingHistory<InMemoryVocabulary> {
        &self.history
    }

    pub fn vocabulary(&self) -> &InMemoryVocabulary {
        self.history.store()
    }

    /// Direct store access; changes made here are not recorded
    pub fn vocabulary_mut(&mut self) -> &mut InMemoryVocabulary {
        self.history.store_mut()
    }

    pub fn add_file(&mut self, file: VocabularyFile) {
        self.history.store_mut().add_file(file);
    }

    /// Show another file; its history starts empty
    pub fn open_file(&mut self, file_id: u32) -> Result<(), StoreError> {
        self.history.store_mut().select_file(file_id)?;
        self.history.init_undo_stack();
        self.events.emit(FileSelected { file_id });
        Ok(())
    }

    pub fn select_node(&mut self, id: &NodeId) -> Result<(), StoreError> {
        self.history.store_mut().set_current_node(id)
    }

    pub fn change_color(
        &mut self,
        id: &NodeId,
        attribute: ColorAttribute,
        color: Color,
    ) -> Result<(), StoreError> {
        let result = self.history.store_mut().update_color(id, attribute, color, false);
        self.record(result)
    }

    pub fn edit_vocabulary(&mut self, mut request: UpdateRequest) -> Result<(), StoreError> {
        if request.previous_current_term.is_none() {
            request.previous_current_term =
                self.history.store().current_node().map(|n| n.term.clone());
        }
        let result = self.history.store_mut().update_request(request, false);
        self.record(result)
    }

    pub fn toggle_confirm(&mut self, term: &str, confirmed: bool) -> Result<(), StoreError> {
        let result = self.history.store_mut().toggle_confirm(term, confirmed, false);
        self.record(result)
    }

    pub fn change_confirm_color(&mut self, color: Color) -> Result<(), StoreError> {
        let result = self.history.store_mut().select_confirm_color(color, false);
        self.record(result)
    }

    pub fn move_node(&mut self, id: &NodeId, position: Coordinate) -> Result<(), StoreError> {
        let result = self.history.store_mut().move_node(id, position, false);
        self.record(result)
    }

    fn record(&mut self, result: StoreResult) -> Result<(), StoreError> {
        if let Some(entry) = result? {
            self.history.add_history(entry);
        }
        Ok(())
    }

    pub fn undo(&mut self) -> bool {
        self.history.exec_undo()
    }

    pub fn redo(&mut self) -> bool {
        self.history.exec_redo()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// What the next undo or redo would change
    pub fn preview(&self, direction: Direction) -> String {
        self.history.preview(direction)
    }

    pub fn undo_message(&self) -> &str {
        self.history.undo_message()
    }

    pub fn redo_message(&self) -> &str {
        self.history.redo_message()
    }
}

impl Default for EditingSession {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

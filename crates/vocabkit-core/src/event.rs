//! Event system for cross-component communication
//!
//! A synchronous, type-keyed pub/sub bus. Presentation code subscribes
//! to the events it cares about; producers never know who listens.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use parking_lot::RwLock;

/// Base trait for all events
pub trait Event: Any + Send + Sync {
    /// Event name for debugging/logging
    fn name(&self) -> &'static str;
}

/// Type-erased event handler
type BoxedHandler = Box<dyn Fn(&dyn Any) + Send + Sync>;

/// Event emitter / event bus
pub struct EventEmitter {
    handlers: RwLock<HashMap<TypeId, Vec<BoxedHandler>>>,
}

impl EventEmitter {
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
        }
    }

    /// Subscribe to an event type
    pub fn on<E: Event + 'static, F>(&self, handler: F)
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        let type_id = TypeId::of::<E>();
        let boxed: BoxedHandler = Box::new(move |any| {
            if let Some(event) = any.downcast_ref::<E>() {
                handler(event);
            }
        });

        self.handlers
            .write()
            .entry(type_id)
            .or_default()
            .push(boxed);
    }

    /// Emit an event to all subscribers
    pub fn emit<E: Event + 'static>(&self, event: E) {
        let type_id = TypeId::of::<E>();

        if let Some(handlers) = self.handlers.read().get(&type_id) {
            tracing::trace!(event = event.name(), subscribers = handlers.len(), "emit");
            for handler in handlers {
                handler(&event);
            }
        }
    }
}

impl Default for EventEmitter {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// History Events
// ============================================================================

/// Undo/redo history events
pub mod history {
    use super::*;

    /// Published after every change to the history stack or pointer
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct HistoryChanged {
        pub can_undo: bool,
        pub can_redo: bool,
        /// `None` until the first entry of the session is recorded
        pub pointer: Option<usize>,
        pub len: usize,
    }

    impl Event for HistoryChanged {
        fn name(&self) -> &'static str { "history.changed" }
    }
}

/// Vocabulary file events
pub mod vocabulary {
    use super::*;

    pub struct FileSelected {
        pub file_id: u32,
    }

    impl Event for FileSelected {
        fn name(&self) -> &'static str { "vocabulary.file_selected" }
    }
}

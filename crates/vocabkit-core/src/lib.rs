//! # Vocabkit Core
//!
//! The foundational layer of Vocabkit - vocabulary model types,
//! settings, and the event bus shared by the editor components.

pub mod event;
pub mod model;
pub mod settings;

pub use event::{Event, EventEmitter};
pub use model::{Color, ColorAttribute, Coordinate, NodeId, TermSnapshot, VocabularyNode};
pub use settings::Settings;

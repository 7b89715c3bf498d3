//! Undo stack implementation
//!
//! The stack is a value: every mutation returns a new `UndoStack` and leaves
//! the receiver untouched. Entries are shared behind `Arc`, so copies are cheap.

use std::sync::Arc;

use crate::entry::{Direction, HistoryEntry};

/// Number of entries kept when no capacity is configured
pub const UNDO_STACK_MAX: usize = 10;

/// Bounded undo stack with a pointer separating past from future
#[derive(Debug, Clone)]
pub struct UndoStack {
    /// Stack entries, oldest first
    entries: Vec<Arc<HistoryEntry>>,
    /// Number of entries currently applied; `None` until the first push
    pointer: Option<usize>,
    /// Maximum size
    capacity: usize,
}

impl UndoStack {
    pub fn new() -> Self {
        Self::with_capacity(UNDO_STACK_MAX)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            pointer: None,
            capacity: capacity.max(1),
        }
    }

    /// Stack with `entry` committed at the pointer.
    ///
    /// Entries from the pointer onward are discarded first, then the oldest
    /// entry is evicted if the capacity is exceeded. The pointer ends at the tip.
    pub fn pushed(&self, entry: HistoryEntry) -> UndoStack {
        let mut entries = self.truncated().entries;
        entries.push(Arc::new(entry));

        if entries.len() > self.capacity {
            entries.remove(0);
        }

        UndoStack {
            pointer: Some(entries.len()),
            entries,
            capacity: self.capacity,
        }
    }

    /// Stack without the redo-able future
    pub fn truncated(&self) -> UndoStack {
        let keep = self.pointer.unwrap_or(0).min(self.entries.len());
        UndoStack {
            entries: self.entries[..keep].to_vec(),
            pointer: self.pointer,
            capacity: self.capacity,
        }
    }

    /// Stack with the pointer moved one step, clamped to `[0, len]`
    pub fn moved(&self, direction: Direction) -> UndoStack {
        let pointer = self.pointer.map(|p| match direction {
            Direction::Undo => p.saturating_sub(1),
            Direction::Redo => (p + 1).min(self.entries.len()),
        });

        UndoStack {
            entries: self.entries.clone(),
            pointer,
            capacity: self.capacity,
        }
    }

    /// Empty stack with the same capacity and an unset pointer
    pub fn cleared(&self) -> UndoStack {
        UndoStack::with_capacity(self.capacity)
    }

    /// Can undo?
    pub fn can_undo(&self) -> bool {
        matches!(self.pointer, Some(p) if p > 0)
    }

    /// Can redo?
    pub fn can_redo(&self) -> bool {
        matches!(self.pointer, Some(p) if p < self.entries.len())
    }

    /// Entry an undo or redo would replay
    pub fn entry(&self, direction: Direction) -> Option<&Arc<HistoryEntry>> {
        let pointer = self.pointer?;
        match direction {
            Direction::Undo => pointer.checked_sub(1).and_then(|i| self.entries.get(i)),
            Direction::Redo => self.entries.get(pointer),
        }
    }

    pub fn can(&self, direction: Direction) -> bool {
        match direction {
            Direction::Undo => self.can_undo(),
            Direction::Redo => self.can_redo(),
        }
    }

    /// Get number of undo steps available
    pub fn undo_count(&self) -> usize {
        self.pointer.unwrap_or(0)
    }

    /// Get number of redo steps available
    pub fn redo_count(&self) -> usize {
        self.entries.len() - self.undo_count().min(self.entries.len())
    }

    /// Get total history size
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Is stack empty?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get entries for display, oldest first
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().map(|e| e.as_ref())
    }

    /// Get current pointer
    pub fn pointer(&self) -> Option<usize> {
        self.pointer
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}

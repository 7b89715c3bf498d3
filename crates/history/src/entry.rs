//! History entry types

use serde::{Deserialize, Serialize};
use vocabkit_core::{Color, ColorAttribute, Coordinate, NodeId, TermSnapshot};

/// Which way through the history a request goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Undo,
    Redo,
}

impl Direction {
    /// The recorded value that replay writes back
    pub fn pick<'a, T: ?Sized>(self, previous: &'a T, following: &'a T) -> &'a T {
        match self {
            Direction::Undo => previous,
            Direction::Redo => following,
        }
    }

    /// `(before, after)` as seen by the user when the replay runs
    pub fn before_after<'a, T: ?Sized>(self, previous: &'a T, following: &'a T) -> (&'a T, &'a T) {
        match self {
            Direction::Undo => (following, previous),
            Direction::Redo => (previous, following),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Undo => "undo",
            Direction::Redo => "redo",
        }
    }
}

/// A recorded edit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum HistoryEntry {
    /// One of the two color attributes of a node
    Color(ColorChange),
    /// Field or synonym edit of a node and its synonym group
    Vocabulary(VocabularyChange),
    /// Confirmed flag of a node
    #[serde(rename = "confirm_changed")]
    Confirm(ConfirmChange),
    /// Color used to draw confirmed terms
    #[serde(rename = "confirm_color_changed")]
    ConfirmColor(ConfirmColorChange),
    /// Canvas position of a node
    Position(PositionChange),
}

impl HistoryEntry {
    pub fn color(
        target_id: NodeId,
        attribute: ColorAttribute,
        previous: Color,
        following: Color,
    ) -> Self {
        HistoryEntry::Color(ColorChange { target_id, attribute, previous, following })
    }

    pub fn vocabulary(
        target_id: NodeId,
        previous: Vec<TermSnapshot>,
        following: Vec<TermSnapshot>,
    ) -> Self {
        HistoryEntry::Vocabulary(VocabularyChange {
            target_id,
            target_lang_diff_id: None,
            previous,
            following,
        })
    }

    pub fn confirm(target_id: NodeId, previous: bool, following: bool) -> Self {
        HistoryEntry::Confirm(ConfirmChange { target_id, previous, following })
    }

    pub fn confirm_color(previous: Color, following: Color) -> Self {
        HistoryEntry::ConfirmColor(ConfirmColorChange { previous, following })
    }

    pub fn position(target_id: NodeId, previous: Coordinate, following: Coordinate) -> Self {
        HistoryEntry::Position(PositionChange { target_id, previous, following })
    }

    /// Node the entry applies to; `None` for global edits
    pub fn target_id(&self) -> Option<&NodeId> {
        match self {
            HistoryEntry::Color(c) => Some(&c.target_id),
            HistoryEntry::Vocabulary(v) => Some(&v.target_id),
            HistoryEntry::Confirm(c) => Some(&c.target_id),
            HistoryEntry::ConfirmColor(_) => None,
            HistoryEntry::Position(p) => Some(&p.target_id),
        }
    }

    /// Action tag, as used in the serialized form
    pub fn action(&self) -> &'static str {
        match self {
            HistoryEntry::Color(_) => "color",
            HistoryEntry::Vocabulary(_) => "vocabulary",
            HistoryEntry::Confirm(_) => "confirm_changed",
            HistoryEntry::ConfirmColor(_) => "confirm_color_changed",
            HistoryEntry::Position(_) => "position",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorChange {
    pub target_id: NodeId,
    pub attribute: ColorAttribute,
    pub previous: Color,
    pub following: Color,
}

/// Snapshot lists hold the edited node first, then the rest of its group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyChange {
    pub target_id: NodeId,
    /// Parallel-language counterpart present in both snapshots
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_lang_diff_id: Option<NodeId>,
    pub previous: Vec<TermSnapshot>,
    pub following: Vec<TermSnapshot>,
}

impl VocabularyChange {
    pub fn with_lang_diff(mut self, id: NodeId) -> Self {
        self.target_lang_diff_id = Some(id);
        self
    }

    /// Previous and following record of `id`, if present in each list
    pub fn records(&self, id: &NodeId) -> (Option<&TermSnapshot>, Option<&TermSnapshot>) {
        (
            self.previous.iter().find(|s| &s.id == id),
            self.following.iter().find(|s| &s.id == id),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmChange {
    pub target_id: NodeId,
    pub previous: bool,
    pub following: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmColorChange {
    pub previous: Color,
    pub following: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionChange {
    pub target_id: NodeId,
    pub previous: Coordinate,
    pub following: Coordinate,
}

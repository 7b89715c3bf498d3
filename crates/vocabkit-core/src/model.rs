//! Vocabulary model types shared by the store and the history engine

use std::fmt;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Opaque node identifier.
///
/// Ids are only ever compared; their textual form is not interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(SmolStr);

impl NodeId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(SmolStr::new(id))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<u64> for NodeId {
    fn from(n: u64) -> Self {
        Self(SmolStr::new(n.to_string()))
    }
}

/// Named color token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    Black,
    Red,
    Orange,
    Green,
    Blue,
    Purple,
    Yellow,
    Pink,
    Brown,
}

impl Color {
    pub const ALL: [Color; 9] = [
        Color::Black,
        Color::Red,
        Color::Orange,
        Color::Green,
        Color::Blue,
        Color::Purple,
        Color::Yellow,
        Color::Pink,
        Color::Brown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Yellow => "yellow",
            Self::Pink => "pink",
            Self::Brown => "brown",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Color {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or("Unknown color")
    }
}

/// Which of the two independent color attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorAttribute {
    Color1,
    Color2,
}

/// Position on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Frozen copy of the text fields of a node.
///
/// Missing fields deserialize as empty strings; an empty string means "no value".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermSnapshot {
    pub id: NodeId,
    #[serde(default)]
    pub term: String,
    #[serde(default)]
    pub preferred_label: String,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub broader_term: String,
    #[serde(default)]
    pub term_description: String,
}

impl TermSnapshot {
    pub fn new(id: impl Into<NodeId>, term: &str) -> Self {
        Self {
            id: id.into(),
            term: term.to_string(),
            preferred_label: String::new(),
            uri: String::new(),
            broader_term: String::new(),
            term_description: String::new(),
        }
    }

    pub fn with_preferred_label(mut self, label: &str) -> Self {
        self.preferred_label = label.to_string();
        self
    }

    pub fn with_uri(mut self, uri: &str) -> Self {
        self.uri = uri.to_string();
        self
    }

    pub fn with_broader_term(mut self, term: &str) -> Self {
        self.broader_term = term.to_string();
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.term_description = description.to_string();
        self
    }
}

/// A live vocabulary node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocabularyNode {
    pub id: NodeId,
    pub term: String,
    #[serde(default)]
    pub preferred_label: String,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub broader_term: String,
    #[serde(default)]
    pub term_description: String,
    #[serde(default)]
    pub confirmed: bool,
    #[serde(default)]
    pub color1: Color,
    #[serde(default)]
    pub color2: Color,
    #[serde(default)]
    pub position: Coordinate,
}

impl VocabularyNode {
    pub fn new(id: impl Into<NodeId>, term: &str) -> Self {
        Self::from_snapshot(&TermSnapshot::new(id, term))
    }

    /// Build a node from a snapshot, leaving the non-text attributes at their defaults
    pub fn from_snapshot(snapshot: &TermSnapshot) -> Self {
        Self {
            id: snapshot.id.clone(),
            term: snapshot.term.clone(),
            preferred_label: snapshot.preferred_label.clone(),
            uri: snapshot.uri.clone(),
            broader_term: snapshot.broader_term.clone(),
            term_description: snapshot.term_description.clone(),
            confirmed: false,
            color1: Color::default(),
            color2: Color::default(),
            position: Coordinate::default(),
        }
    }

    pub fn snapshot(&self) -> TermSnapshot {
        TermSnapshot {
            id: self.id.clone(),
            term: self.term.clone(),
            preferred_label: self.preferred_label.clone(),
            uri: self.uri.clone(),
            broader_term: self.broader_term.clone(),
            term_description: self.term_description.clone(),
        }
    }

    /// Overwrite the editable text fields (the term itself is the node's name and stays)
    pub fn apply_fields(&mut self, snapshot: &TermSnapshot) {
        self.preferred_label = snapshot.preferred_label.clone();
        self.uri = snapshot.uri.clone();
        self.broader_term = snapshot.broader_term.clone();
        self.term_description = snapshot.term_description.clone();
    }

    pub fn color(&self, attribute: ColorAttribute) -> Color {
        match attribute {
            ColorAttribute::Color1 => self.color1,
            ColorAttribute::Color2 => self.color2,
        }
    }

    pub fn set_color(&mut self, attribute: ColorAttribute, color: Color) {
        match attribute {
            ColorAttribute::Color1 => self.color1 = color,
            ColorAttribute::Color2 => self.color2 = color,
        }
    }

    /// Preferred label when set, otherwise the term
    pub fn display_name(&self) -> &str {
        if self.preferred_label.is_empty() {
            &self.term
        } else {
            &self.preferred_label
        }
    }
}

//! Boundary to the vocabulary store
//!
//! The history engine never owns nodes. It reads the live state through this
//! trait and writes back through the store's own mutators, always with
//! `suppress_history` set so a replay never records a new entry.

use vocabkit_core::{Color, ColorAttribute, NodeId, TermSnapshot, VocabularyNode};

use crate::entry::HistoryEntry;

/// Store error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),
    #[error("Term not found: {0}")]
    TermNotFound(String),
    #[error("No vocabulary file selected")]
    NoFileSelected,
    #[error("Vocabulary file not found: {0}")]
    FileNotFound(u32),
    #[error("Term already exists: {0}")]
    DuplicateTerm(String),
}

/// Result of a store mutation: the entry describing it, unless history was suppressed
pub type StoreResult = Result<Option<HistoryEntry>, StoreError>;

/// Reconciliation of a node and its synonym group in one request
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateRequest {
    /// Nodes to insert or overwrite, matched by id
    pub to_update: Vec<VocabularyNode>,
    /// Nodes to remove
    pub to_delete: Vec<NodeId>,
    /// Record of the node the edit is about
    pub current: TermSnapshot,
    /// Term of the node selected before the request
    pub previous_current_term: Option<String>,
}

impl UpdateRequest {
    pub fn new(current: TermSnapshot) -> Self {
        Self {
            to_update: Vec::new(),
            to_delete: Vec::new(),
            current,
            previous_current_term: None,
        }
    }

    pub fn with_update(mut self, node: VocabularyNode) -> Self {
        self.to_update.push(node);
        self
    }

    pub fn with_delete(mut self, id: NodeId) -> Self {
        self.to_delete.push(id);
        self
    }
}

/// Vocabulary store as seen by the history engine
pub trait VocabularyStore {
    /// Node currently selected in the editor
    fn current_node(&self) -> Option<&VocabularyNode>;

    /// Live nodes of the selected file
    fn nodes(&self) -> &[VocabularyNode];

    /// Mutable access to a live node of the selected file
    fn node_mut(&mut self, id: &NodeId) -> Option<&mut VocabularyNode>;

    /// Prefix of placeholder terms that are never displayed
    fn blank_prefix(&self) -> &str;

    fn update_color(
        &mut self,
        id: &NodeId,
        attribute: ColorAttribute,
        color: Color,
        suppress_history: bool,
    ) -> StoreResult;

    fn set_current_node_by_term(&mut self, term: &str, id: &NodeId) -> Result<(), StoreError>;

    fn toggle_confirm(
        &mut self,
        term: &str,
        confirmed: bool,
        suppress_history: bool,
    ) -> StoreResult;

    /// Set the color used for every confirmed term
    fn select_confirm_color(&mut self, color: Color, suppress_history: bool) -> StoreResult;

    /// Build a node from a recorded snapshot without inserting it
    fn create_from_reference(&mut self, reference: &TermSnapshot) -> VocabularyNode;

    fn update_request(&mut self, request: UpdateRequest, suppress_history: bool) -> StoreResult;

    fn find_node(&self, id: &NodeId) -> Option<&VocabularyNode> {
        self.nodes().iter().find(|n| &n.id == id)
    }

    fn find_node_by_term(&self, term: &str) -> Option<&VocabularyNode> {
        self.nodes().iter().find(|n| n.term == term)
    }

    /// Term of a live node, or an empty string
    fn term_of(&self, id: &NodeId) -> String {
        self.find_node(id).map(|n| n.term.clone()).unwrap_or_default()
    }
}

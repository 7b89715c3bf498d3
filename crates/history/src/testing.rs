//! Minimal in-memory store for unit tests

use vocabkit_core::{Color, ColorAttribute, NodeId, TermSnapshot, VocabularyNode};

use crate::entry::HistoryEntry;
use crate::store::{StoreError, StoreResult, UpdateRequest, VocabularyStore};

#[derive(Debug, Default)]
pub(crate) struct FakeStore {
    pub nodes: Vec<VocabularyNode>,
    pub current: Option<NodeId>,
    pub confirm_color: Color,
    /// Mutations made with history enabled
    pub recorded: usize,
}

impl FakeStore {
    pub fn with_nodes(nodes: Vec<VocabularyNode>) -> Self {
        Self { nodes, ..Default::default() }
    }

    pub fn node(&self, id: u64) -> &VocabularyNode {
        let id = NodeId::from(id);
        self.find_node(&id).unwrap()
    }

    fn record(&mut self, suppress_history: bool, entry: HistoryEntry) -> StoreResult {
        if suppress_history {
            Ok(None)
        } else {
            self.recorded += 1;
            Ok(Some(entry))
        }
    }
}

impl VocabularyStore for FakeStore {
    fn current_node(&self) -> Option<&VocabularyNode> {
        self.current.as_ref().and_then(|id| self.find_node(id))
    }

    fn nodes(&self) -> &[VocabularyNode] {
        &self.nodes
    }

    fn node_mut(&mut self, id: &NodeId) -> Option<&mut VocabularyNode> {
        self.nodes.iter_mut().find(|n| &n.id == id)
    }

    fn blank_prefix(&self) -> &str {
        "_blank_"
    }

    fn update_color(
        &mut self,
        id: &NodeId,
        attribute: ColorAttribute,
        color: Color,
        suppress_history: bool,
    ) -> StoreResult {
        let node = self.node_mut(id).ok_or_else(|| StoreError::NodeNotFound(id.clone()))?;
        let previous = node.color(attribute);
        node.set_color(attribute, color);
        self.record(suppress_history, HistoryEntry::color(id.clone(), attribute, previous, color))
    }

    fn set_current_node_by_term(&mut self, term: &str, _id: &NodeId) -> Result<(), StoreError> {
        let node = self
            .find_node_by_term(term)
            .ok_or_else(|| StoreError::TermNotFound(term.to_string()))?;
        self.current = Some(node.id.clone());
        Ok(())
    }

    fn toggle_confirm(
        &mut self,
        term: &str,
        confirmed: bool,
        suppress_history: bool,
    ) -> StoreResult {
        let node = self
            .nodes
            .iter_mut()
            .find(|n| n.term == term)
            .ok_or_else(|| StoreError::TermNotFound(term.to_string()))?;
        let previous = node.confirmed;
        node.confirmed = confirmed;
        let id = node.id.clone();
        self.record(suppress_history, HistoryEntry::confirm(id, previous, confirmed))
    }

    fn select_confirm_color(&mut self, color: Color, suppress_history: bool) -> StoreResult {
        let previous = std::mem::replace(&mut self.confirm_color, color);
        self.record(suppress_history, HistoryEntry::confirm_color(previous, color))
    }

    fn create_from_reference(&mut self, reference: &TermSnapshot) -> VocabularyNode {
        VocabularyNode::from_snapshot(reference)
    }

    fn update_request(&mut self, request: UpdateRequest, suppress_history: bool) -> StoreResult {
        let previous: Vec<TermSnapshot> = self.nodes.iter().map(|n| n.snapshot()).collect();

        for node in request.to_update {
            match self.nodes.iter_mut().find(|n| n.id == node.id) {
                Some(existing) => *existing = node,
                None => self.nodes.push(node),
            }
        }
        self.nodes.retain(|n| !request.to_delete.contains(&n.id));
        self.current = Some(request.current.id.clone());

        let following = self.nodes.iter().map(|n| n.snapshot()).collect();
        self.record(
            suppress_history,
            HistoryEntry::vocabulary(request.current.id, previous, following),
        )
    }
}

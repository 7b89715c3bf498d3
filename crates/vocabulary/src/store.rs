//! In-memory vocabulary store
//!
//! Holds every loaded vocabulary file, the selected one, the current node and
//! the confirm color. Mutators record a [`HistoryEntry`] unless asked not to.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use vocabkit_core::{Color, ColorAttribute, Coordinate, NodeId, TermSnapshot, VocabularyNode};

use history::{HistoryEntry, StoreError, StoreResult, UpdateRequest, VocabularyStore};

/// Placeholder prefix used when none is configured
pub const DEFAULT_BLANK_PREFIX: &str = "_blank_";

/// A vocabulary file loaded into the editor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VocabularyFile {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub nodes: Vec<VocabularyNode>,
}

impl VocabularyFile {
    pub fn new(id: u32, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            nodes: Vec::new(),
        }
    }

    pub fn with_node(mut self, node: VocabularyNode) -> Self {
        self.nodes.push(node);
        self
    }

    /// Parse a file from its JSON form
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Vocabulary store backing an editing session
#[derive(Debug, Clone)]
pub struct InMemoryVocabulary {
    /// Loaded files by id
    files: BTreeMap<u32, VocabularyFile>,
    /// File the editor shows
    selected: Option<u32>,
    /// Node selected in the editor
    current: Option<NodeId>,
    /// Color used to draw confirmed terms
    confirm_color: Color,
    /// Prefix of placeholder terms
    blank_prefix: String,
    /// Next numeric id handed out, per file
    next_ids: BTreeMap<u32, u64>,
}

impl InMemoryVocabulary {
    pub fn new() -> Self {
        Self {
            files: BTreeMap::new(),
            selected: None,
            current: None,
            confirm_color: Color::default(),
            blank_prefix: DEFAULT_BLANK_PREFIX.to_string(),
            next_ids: BTreeMap::new(),
        }
    }

    pub fn with_blank_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.blank_prefix = prefix.into();
        self
    }

    /// Load a file, replacing any file with the same id
    pub fn add_file(&mut self, file: VocabularyFile) {
        self.next_ids.remove(&file.id);
        for node in &file.nodes {
            self.reserve_id(file.id, &node.id);
        }
        tracing::debug!(file_id = file.id, nodes = file.nodes.len(), "vocabulary file loaded");
        self.files.insert(file.id, file);
    }

    /// Switch the selected file; clears the current node
    pub fn select_file(&mut self, id: u32) -> Result<(), StoreError> {
        if !self.files.contains_key(&id) {
            return Err(StoreError::FileNotFound(id));
        }
        self.selected = Some(id);
        self.current = None;
        Ok(())
    }

    pub fn selected_file(&self) -> Option<&VocabularyFile> {
        self.selected.and_then(|id| self.files.get(&id))
    }

    pub fn file(&self, id: u32) -> Option<&VocabularyFile> {
        self.files.get(&id)
    }

    pub fn confirm_color(&self) -> Color {
        self.confirm_color
    }

    pub fn set_current_node(&mut self, id: &NodeId) -> Result<(), StoreError> {
        if self.find_node(id).is_none() {
            return Err(StoreError::NodeNotFound(id.clone()));
        }
        self.current = Some(id.clone());
        Ok(())
    }

    /// Move a node on the canvas
    pub fn move_node(
        &mut self,
        id: &NodeId,
        position: Coordinate,
        suppress_history: bool,
    ) -> StoreResult {
        let node = self.selected_node_mut(id)?;
        let previous = std::mem::replace(&mut node.position, position);

        Ok(record(
            suppress_history || previous == position,
            HistoryEntry::position(id.clone(), previous, position),
        ))
    }

    fn selected_nodes(&self) -> Result<&Vec<VocabularyNode>, StoreError> {
        self.selected_file()
            .map(|f| &f.nodes)
            .ok_or(StoreError::NoFileSelected)
    }

    fn selected_nodes_mut(&mut self) -> Result<&mut Vec<VocabularyNode>, StoreError> {
        let id = self.selected.ok_or(StoreError::NoFileSelected)?;
        self.files
            .get_mut(&id)
            .map(|f| &mut f.nodes)
            .ok_or(StoreError::FileNotFound(id))
    }

    fn selected_node_mut(&mut self, id: &NodeId) -> Result<&mut VocabularyNode, StoreError> {
        self.selected_nodes_mut()?
            .iter_mut()
            .find(|n| &n.id == id)
            .ok_or_else(|| StoreError::NodeNotFound(id.clone()))
    }

    fn reserve_id(&mut self, file_id: u32, id: &NodeId) {
        if let Ok(n) = id.as_str().parse::<u64>() {
            let next = self.next_ids.entry(file_id).or_insert(1);
            *next = (*next).max(n.saturating_add(1));
        }
    }

    /// Ids are unique within a file; other files may reuse them
    fn id_in_use(&self, id: &NodeId) -> bool {
        self.nodes().iter().any(|n| &n.id == id)
    }

    /// Next free numeric id of `file_id`, or a suffixed `reference` once numbers run out
    fn allocate_id(&mut self, file_id: u32, reference: &NodeId) -> NodeId {
        let mut candidate = Some(self.next_ids.get(&file_id).copied().unwrap_or(1));
        while let Some(n) = candidate {
            let id = NodeId::from(n);
            candidate = n.checked_add(1);
            if !self.id_in_use(&id) {
                self.next_ids.insert(file_id, candidate.unwrap_or(u64::MAX));
                return id;
            }
        }

        tracing::warn!(file_id, "numeric node ids exhausted");
        (1..=u64::MAX)
            .map(|k| NodeId::new(format!("{}-{}", reference, k)))
            .find(|id| !self.id_in_use(id))
            .unwrap_or_else(|| reference.clone())
    }

    fn check_duplicates(
        &self,
        nodes: &[VocabularyNode],
        request: &UpdateRequest,
    ) -> Result<(), StoreError> {
        for node in &request.to_update {
            let clash = nodes.iter().any(|n| {
                n.term == node.term
                    && n.id != node.id
                    && !request.to_delete.contains(&n.id)
                    && !request.to_update.iter().any(|u| u.id == n.id && u.term != n.term)
            });
            if clash {
                return Err(StoreError::DuplicateTerm(node.term.clone()));
            }
        }
        Ok(())
    }
}

impl Default for InMemoryVocabulary {
    fn default() -> Self {
        Self::new()
    }
}

impl VocabularyStore for InMemoryVocabulary {
    fn current_node(&self) -> Option<&VocabularyNode> {
        self.current.as_ref().and_then(|id| self.find_node(id))
    }

    fn nodes(&self) -> &[VocabularyNode] {
        self.selected_file().map(|f| f.nodes.as_slice()).unwrap_or(&[])
    }

    fn node_mut(&mut self, id: &NodeId) -> Option<&mut VocabularyNode> {
        self.selected_node_mut(id).ok()
    }

    fn blank_prefix(&self) -> &str {
        &self.blank_prefix
    }

    fn update_color(
        &mut self,
        id: &NodeId,
        attribute: ColorAttribute,
        color: Color,
        suppress_history: bool,
    ) -> StoreResult {
        let node = self.selected_node_mut(id)?;
        let previous = node.color(attribute);
        node.set_color(attribute, color);

        Ok(record(
            suppress_history || previous == color,
            HistoryEntry::color(id.clone(), attribute, previous, color),
        ))
    }

    fn set_current_node_by_term(&mut self, term: &str, id: &NodeId) -> Result<(), StoreError> {
        let nodes = self.selected_nodes()?;
        let found = nodes
            .iter()
            .find(|n| &n.id == id && n.term == term)
            .or_else(|| nodes.iter().find(|n| n.term == term))
            .map(|n| n.id.clone())
            .ok_or_else(|| StoreError::TermNotFound(term.to_string()))?;

        self.current = Some(found);
        Ok(())
    }

    fn toggle_confirm(
        &mut self,
        term: &str,
        confirmed: bool,
        suppress_history: bool,
    ) -> StoreResult {
        let node = self
            .selected_nodes_mut()?
            .iter_mut()
            .find(|n| n.term == term)
            .ok_or_else(|| StoreError::TermNotFound(term.to_string()))?;
        let previous = std::mem::replace(&mut node.confirmed, confirmed);
        let id = node.id.clone();

        Ok(record(
            suppress_history || previous == confirmed,
            HistoryEntry::confirm(id, previous, confirmed),
        ))
    }

    fn select_confirm_color(&mut self, color: Color, suppress_history: bool) -> StoreResult {
        let previous = std::mem::replace(&mut self.confirm_color, color);
        Ok(record(
            suppress_history || previous == color,
            HistoryEntry::confirm_color(previous, color),
        ))
    }

    fn create_from_reference(&mut self, reference: &TermSnapshot) -> VocabularyNode {
        let mut node = VocabularyNode::from_snapshot(reference);
        let Some(file_id) = self.selected else {
            return node;
        };
        if self.id_in_use(&reference.id) {
            node.id = self.allocate_id(file_id, &reference.id);
            tracing::debug!(
                reference = %reference.id,
                id = %node.id,
                "reference id taken, allocated a new one"
            );
        } else {
            self.reserve_id(file_id, &reference.id);
        }
        node
    }

    fn update_request(&mut self, request: UpdateRequest, suppress_history: bool) -> StoreResult {
        let before = self.selected_nodes()?.clone();
        self.check_duplicates(&before, &request)?;

        let mut after = before.clone();
        for node in &request.to_update {
            match after.iter_mut().find(|n| n.id == node.id) {
                Some(existing) => *existing = node.clone(),
                None => after.push(node.clone()),
            }
        }
        after.retain(|n| !request.to_delete.contains(&n.id));

        let file_id = self.selected.ok_or(StoreError::NoFileSelected)?;
        for node in &request.to_update {
            self.reserve_id(file_id, &node.id);
        }
        *self.selected_nodes_mut()? = after.clone();

        let primary = request.current.id.clone();
        self.current = if after.iter().any(|n| n.id == primary) {
            Some(primary.clone())
        } else {
            request
                .previous_current_term
                .as_deref()
                .and_then(|term| after.iter().find(|n| n.term == term))
                .map(|n| n.id.clone())
        };

        tracing::debug!(
            target_id = %primary,
            updated = request.to_update.len(),
            deleted = request.to_delete.len(),
            "vocabulary updated"
        );

        if suppress_history {
            return Ok(None);
        }

        let ids = affected_ids(&primary, &before, &after, &request);
        let previous = snapshot_group(&before, &ids);
        let following = snapshot_group(&after, &ids);
        Ok(record(
            previous == following,
            HistoryEntry::vocabulary(primary, previous, following),
        ))
    }
}

fn record(skip: bool, entry: HistoryEntry) -> Option<HistoryEntry> {
    if skip { None } else { Some(entry) }
}

/// Ids whose records make up both sides of a vocabulary entry.
///
/// The primary comes first, followed by its synonym group and broader-term
/// node on either side of the edit and every node the request touched.
fn affected_ids(
    primary: &NodeId,
    before: &[VocabularyNode],
    after: &[VocabularyNode],
    request: &UpdateRequest,
) -> Vec<NodeId> {
    let mut ids = vec![primary.clone()];
    let mut push = |id: &NodeId| {
        if !ids.contains(id) {
            ids.push(id.clone());
        }
    };

    for nodes in [before, after] {
        let Some(current) = nodes.iter().find(|n| &n.id == primary) else {
            continue;
        };
        for node in nodes {
            let same_label = !current.preferred_label.is_empty()
                && node.preferred_label == current.preferred_label;
            let broader = !current.broader_term.is_empty() && node.term == current.broader_term;
            if same_label || broader {
                push(&node.id);
            }
        }
    }
    for node in &request.to_update {
        push(&node.id);
    }
    for id in &request.to_delete {
        push(id);
    }
    ids
}

/// Snapshots of `ids` present in `nodes`, in the order of `ids`
fn snapshot_group(nodes: &[VocabularyNode], ids: &[NodeId]) -> Vec<TermSnapshot> {
    ids.iter()
        .filter_map(|id| nodes.iter().find(|n| &n.id == id))
        .map(VocabularyNode::snapshot)
        .collect()
}

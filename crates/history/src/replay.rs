//! Replaying a recorded entry against the live store

use vocabkit_core::{NodeId, TermSnapshot, VocabularyNode};

use crate::entry::{Direction, HistoryEntry, VocabularyChange};
use crate::store::{UpdateRequest, VocabularyStore};

/// Write the state recorded by `entry` for `direction` back into `store`.
///
/// Every store call passes `suppress_history`, so nothing here is recorded.
/// A failed write is logged and otherwise ignored; the pointer still moves.
/// Confirm and position entries whose target node no longer exists are
/// skipped with a warning.
pub(crate) fn replay<S: VocabularyStore>(
    store: &mut S,
    entry: &HistoryEntry,
    direction: Direction,
) {
    tracing::debug!(
        action = entry.action(),
        direction = direction.as_str(),
        "replaying history entry"
    );

    match entry {
        HistoryEntry::Color(change) => {
            let color = *direction.pick(&change.previous, &change.following);
            if let Err(e) = store.update_color(&change.target_id, change.attribute, color, true) {
                tracing::warn!(error = %e, "color replay failed");
            }
        }
        HistoryEntry::Vocabulary(change) => replay_vocabulary(store, change, direction),
        HistoryEntry::Confirm(change) => {
            let term = store.term_of(&change.target_id);
            if term.is_empty() {
                tracing::warn!(target_id = %change.target_id, "target is not found");
                return;
            }
            if let Err(e) = store.set_current_node_by_term(&term, &change.target_id) {
                tracing::warn!(error = %e, "cannot select confirm target");
            }
            let confirmed = *direction.pick(&change.previous, &change.following);
            if let Err(e) = store.toggle_confirm(&term, confirmed, true) {
                tracing::warn!(error = %e, "confirm replay failed");
            }
        }
        HistoryEntry::ConfirmColor(change) => {
            let color = *direction.pick(&change.previous, &change.following);
            if let Err(e) = store.select_confirm_color(color, true) {
                tracing::warn!(error = %e, "confirm color replay failed");
            }
        }
        HistoryEntry::Position(change) => match store.node_mut(&change.target_id) {
            Some(node) => node.position = *direction.pick(&change.previous, &change.following),
            None => tracing::warn!(target_id = %change.target_id, "target is not found"),
        },
    }
}

/// Reconcile the live synonym group with the recorded one.
///
/// Nodes only in the restored list are recreated, nodes in both get their
/// text fields back, and nodes only in the replaced list are deleted.
fn replay_vocabulary<S: VocabularyStore>(
    store: &mut S,
    change: &VocabularyChange,
    direction: Direction,
) {
    let chosen = direction.pick(change.previous.as_slice(), change.following.as_slice());
    let other = match direction {
        Direction::Undo => change.following.as_slice(),
        Direction::Redo => change.previous.as_slice(),
    };

    let Some(current) = chosen
        .iter()
        .find(|s| s.id == change.target_id)
        .or_else(|| chosen.first())
        .or_else(|| other.first())
        .cloned()
    else {
        tracing::warn!(target_id = %change.target_id, "empty vocabulary entry");
        return;
    };

    let previous_current_term = store.current_node().map(|n| n.term.clone());

    let to_update: Vec<VocabularyNode> = chosen
        .iter()
        .map(|snapshot| restored_node(store, snapshot))
        .collect();

    let to_delete: Vec<NodeId> = other
        .iter()
        .filter(|s| !chosen.iter().any(|c| c.id == s.id))
        .filter_map(|s| {
            store
                .find_node(&s.id)
                .or_else(|| store.find_node_by_term(&s.term))
                .map(|n| n.id.clone())
        })
        .filter(|id| !chosen.iter().any(|c| &c.id == id))
        .collect();

    let request = UpdateRequest {
        to_update,
        to_delete,
        current,
        previous_current_term,
    };
    if let Err(e) = store.update_request(request, true) {
        tracing::warn!(error = %e, "vocabulary replay failed");
    }
}

fn restored_node<S: VocabularyStore>(store: &mut S, snapshot: &TermSnapshot) -> VocabularyNode {
    match store.find_node(&snapshot.id).cloned() {
        Some(mut node) => {
            node.apply_fields(snapshot);
            node
        }
        None => store.create_from_reference(snapshot),
    }
}

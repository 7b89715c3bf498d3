//! Synonym-set diff between two snapshot lists

use vocabkit_core::TermSnapshot;

use crate::entry::Direction;

/// Terms an undo or redo brings back into, or takes out of, the synonym group
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynonymDiff {
    pub added: Vec<String>,
    pub removed: Vec<String>,
}

impl SynonymDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    /// Drop placeholder terms starting with `prefix`
    pub fn without_placeholders(mut self, prefix: &str) -> Self {
        if !prefix.is_empty() {
            self.added.retain(|t| !t.starts_with(prefix));
            self.removed.retain(|t| !t.starts_with(prefix));
        }
        self
    }
}

/// Records of `list` that are true synonyms of its first record.
///
/// Excludes the first record itself, the record the broader term points at,
/// and anything outside the first record's preferred-label group.
pub fn pure_synonyms(list: &[TermSnapshot]) -> Vec<&TermSnapshot> {
    let Some(current) = list.first() else {
        return Vec::new();
    };

    list.iter()
        .filter(|s| s.term != current.term)
        .filter(|s| {
            current.broader_term.is_empty()
                || (s.term != current.broader_term && s.preferred_label != current.broader_term)
        })
        .filter(|s| {
            current.preferred_label.is_empty() || s.preferred_label == current.preferred_label
        })
        .collect()
}

/// Compare the synonym groups of `previous` and `following` for a replay in `direction`.
///
/// A term is "added" when it is in the group being restored but missing from
/// (or relabeled in) the group being replaced, and "removed" the other way round.
pub fn diff(
    previous: &[TermSnapshot],
    following: &[TermSnapshot],
    direction: Direction,
) -> SynonymDiff {
    let (Some(current_previous), Some(current_following)) = (previous.first(), following.first())
    else {
        return SynonymDiff::default();
    };

    let previous_group = pure_synonyms(previous);
    let following_group = pure_synonyms(following);

    let (restored, restored_current, replaced, replaced_current) = match direction {
        Direction::Undo => (&previous_group, current_previous, &following_group, current_following),
        Direction::Redo => (&following_group, current_following, &previous_group, current_previous),
    };

    let added = missing_from(restored, replaced, replaced_current);
    let removed = missing_from(replaced, restored, restored_current);

    SynonymDiff { added, removed }
}

/// Terms of `from` absent in `other`, or present there under a label other than `other_current`'s
fn missing_from(
    from: &[&TermSnapshot],
    other: &[&TermSnapshot],
    other_current: &TermSnapshot,
) -> Vec<String> {
    from.iter()
        .filter(|s| match other.iter().find(|o| o.term == s.term) {
            Some(found) => found.preferred_label != other_current.preferred_label,
            None => true,
        })
        .map(|s| s.term.clone())
        .collect()
}

//! Human-readable previews of what an undo or redo will do
//!
//! Rendering is pure: it reads the entry, the live store (for display names)
//! and the message catalog, and returns one line per clause.

use vocabkit_core::{Color, ColorAttribute, TermSnapshot};
use vocabkit_localization::catalog::keys;
use vocabkit_localization::{t, LocalizationService};

use crate::entry::{
    ColorChange, ConfirmChange, ConfirmColorChange, Direction, HistoryEntry, VocabularyChange,
};
use crate::store::VocabularyStore;
use crate::synonym;

/// Message shown when nothing can be undone or redone
pub fn no_history(l10n: &LocalizationService) -> String {
    t!(l10n, keys::HISTORY_NONE)
}

/// Describe replaying `entry` in `direction`
pub fn describe<S: VocabularyStore>(
    entry: &HistoryEntry,
    direction: Direction,
    store: &S,
    l10n: &LocalizationService,
) -> String {
    match entry {
        HistoryEntry::Color(change) => color_message(change, direction, store, l10n),
        HistoryEntry::Vocabulary(change) => vocabulary_message(change, direction, store, l10n),
        HistoryEntry::Confirm(change) => confirm_message(change, direction, store, l10n),
        HistoryEntry::ConfirmColor(change) => confirm_color_message(change, direction, l10n),
        HistoryEntry::Position(_) => position_message(direction, l10n),
    }
}

fn color_message<S: VocabularyStore>(
    change: &ColorChange,
    direction: Direction,
    store: &S,
    l10n: &LocalizationService,
) -> String {
    let attribute = match change.attribute {
        ColorAttribute::Color1 => t!(l10n, keys::COLOR_ATTRIBUTE_1),
        ColorAttribute::Color2 => t!(l10n, keys::COLOR_ATTRIBUTE_2),
    };
    let (before, after) = direction.before_after(&change.previous, &change.following);

    let header = t!(l10n, keys::COLOR_HEADER, .set("term", store.term_of(&change.target_id)));
    let line = t!(
        l10n,
        keys::COLOR_CHANGE,
        .set("attribute", attribute)
        .set("before", before.as_str())
        .set("after", after.as_str())
    );
    join_lines(header, [Some(line)])
}

fn confirm_color_message(
    change: &ConfirmColorChange,
    direction: Direction,
    l10n: &LocalizationService,
) -> String {
    let (before, after): (&Color, &Color) =
        direction.before_after(&change.previous, &change.following);
    let line = t!(
        l10n,
        keys::VALUE_CHANGE,
        .set("before", before.as_str())
        .set("after", after.as_str())
    );
    join_lines(t!(l10n, keys::CONFIRM_COLOR_HEADER), [Some(line)])
}

fn confirm_message<S: VocabularyStore>(
    change: &ConfirmChange,
    direction: Direction,
    store: &S,
    l10n: &LocalizationService,
) -> String {
    let header = match store.find_node(&change.target_id) {
        Some(node) if !node.preferred_label.is_empty() => {
            t!(l10n, keys::CONFIRM_HEADER_LABEL, .set("name", node.preferred_label.as_str()))
        }
        Some(node) => t!(l10n, keys::CONFIRM_HEADER_TERM, .set("name", node.term.as_str())),
        None => {
            tracing::warn!(target_id = %change.target_id, "confirm target is not found");
            t!(l10n, keys::CONFIRM_HEADER_UNKNOWN)
        }
    };

    let token = |confirmed: bool| {
        if confirmed {
            t!(l10n, keys::CONFIRMED)
        } else {
            t!(l10n, keys::UNCONFIRMED)
        }
    };
    let (before, after) = direction.before_after(&change.previous, &change.following);
    let line = t!(
        l10n,
        keys::VALUE_CHANGE,
        .set("before", token(*before))
        .set("after", token(*after))
    );
    join_lines(header, [Some(line)])
}

fn position_message(direction: Direction, l10n: &LocalizationService) -> String {
    match direction {
        Direction::Undo => t!(l10n, keys::POSITION_UNDO),
        Direction::Redo => t!(l10n, keys::POSITION_REDO),
    }
}

fn vocabulary_message<S: VocabularyStore>(
    change: &VocabularyChange,
    direction: Direction,
    store: &S,
    l10n: &LocalizationService,
) -> String {
    let (previous, following) = match change.records(&change.target_id) {
        (None, None) => {
            tracing::warn!(
                target_id = %change.target_id,
                "vocabulary target is in neither snapshot"
            );
            (change.previous.first(), change.following.first())
        }
        found => found,
    };

    let (previous, following) = match (previous, following) {
        (Some(previous), Some(following)) => (previous, following),
        (None, Some(created)) => {
            // the edit created the node
            let key = match direction {
                Direction::Undo => keys::ENTRY_REMOVED,
                Direction::Redo => keys::ENTRY_CREATED,
            };
            return t!(l10n, key, .set("term", created.term.as_str()));
        }
        (Some(removed), None) => {
            let key = match direction {
                Direction::Undo => keys::ENTRY_CREATED,
                Direction::Redo => keys::ENTRY_REMOVED,
            };
            return t!(l10n, key, .set("term", removed.term.as_str()));
        }
        (None, None) => return no_history(l10n),
    };

    let counterpart = change.target_lang_diff_id.as_ref().and_then(|id| match change.records(id) {
        (Some(p), Some(f)) => Some((p, f)),
        _ => None,
    });

    let header = t!(l10n, keys::VOCABULARY_HEADER, .set("term", previous.term.as_str()));

    let synonyms = synonym::diff(&change.previous, &change.following, direction)
        .without_placeholders(store.blank_prefix());
    let mut clauses = vec![
        synonym_clause(&synonyms.added, keys::SYNONYM_ADDED, l10n),
        synonym_clause(&synonyms.removed, keys::SYNONYM_REMOVED, l10n),
    ];

    let fields: [(&str, fn(&TermSnapshot) -> &str); 4] = [
        (keys::FIELD_PREFERRED_LABEL, |s| s.preferred_label.as_str()),
        (keys::FIELD_URI, |s| s.uri.as_str()),
        (keys::FIELD_BROADER_TERM, |s| s.broader_term.as_str()),
        (keys::FIELD_TERM_DESCRIPTION, |s| s.term_description.as_str()),
    ];
    for (key, field) in fields {
        clauses.push(field_clause(key, field(previous), field(following), direction, l10n));
        if let Some((p, f)) = counterpart {
            clauses.push(field_clause(key, field(p), field(f), direction, l10n));
        }
    }

    join_lines(header, clauses)
}

fn synonym_clause(terms: &[String], key: &str, l10n: &LocalizationService) -> Option<String> {
    if terms.is_empty() {
        return None;
    }
    let quoted: Vec<String> = terms.iter().map(|t| format!("\"{}\"", t)).collect();
    Some(t!(l10n, key, .set("terms", quoted.join(", "))))
}

/// Clause for one text field; `None` when the field is unchanged
fn field_clause(
    field_key: &str,
    previous: &str,
    following: &str,
    direction: Direction,
    l10n: &LocalizationService,
) -> Option<String> {
    if previous == following {
        return None;
    }

    let field = t!(l10n, field_key);
    let (old, new) = direction.before_after(previous, following);

    match (old.is_empty(), new.is_empty()) {
        (false, false) => Some(t!(
            l10n,
            keys::FIELD_REPLACED,
            .set("field", field)
            .set("before", old)
            .set("after", new)
        )),
        (true, false) => Some(t!(l10n, keys::FIELD_ADDED, .set("field", field).set("value", new))),
        (false, true) => Some(t!(
            l10n,
            keys::FIELD_REMOVED,
            .set("field", field)
            .set("value", old)
        )),
        (true, true) => None,
    }
}

fn join_lines(header: String, clauses: impl IntoIterator<Item = Option<String>>) -> String {
    let mut message = header;
    for clause in clauses.into_iter().flatten() {
        message.push('\n');
        message.push_str(&clause);
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeStore;
    use vocabkit_core::{NodeId, VocabularyNode};
    use vocabkit_localization::LanguageId;

    fn l10n() -> LocalizationService {
        LocalizationService::with_builtin(LanguageId::en_us())
    }

    fn rec(id: u64, term: &str, label: &str) -> TermSnapshot {
        TermSnapshot::new(id, term).with_preferred_label(label)
    }

    fn vocab(previous: Vec<TermSnapshot>, following: Vec<TermSnapshot>) -> HistoryEntry {
        HistoryEntry::vocabulary(NodeId::from(1u64), previous, following)
    }

    #[test]
    fn test_color_message_swaps_by_direction() {
        let store = FakeStore::with_nodes(vec![VocabularyNode::new(4u64, "cat")]);
        let entry = HistoryEntry::color(
            NodeId::from(4u64),
            ColorAttribute::Color2,
            Color::Black,
            Color::Red,
        );

        let undo = describe(&entry, Direction::Undo, &store, &l10n());
        assert_eq!(undo, "Color of \"cat\" will be changed.\nColor 2: \"red\" → \"black\"");

        let redo = describe(&entry, Direction::Redo, &store, &l10n());
        assert!(redo.ends_with("\"black\" → \"red\""));
    }

    #[test]
    fn test_confirm_color_message() {
        let entry = HistoryEntry::confirm_color(Color::Black, Color::Brown);
        let undo = describe(&entry, Direction::Undo, &FakeStore::default(), &l10n());
        assert_eq!(undo, "Color of confirmed terms will be changed.\n\"brown\" → \"black\"");
    }

    #[test]
    fn test_confirm_message_uses_label_then_term() {
        let mut node = VocabularyNode::new(2u64, "kitty");
        node.preferred_label = "cat".into();
        let store = FakeStore::with_nodes(vec![node, VocabularyNode::new(3u64, "dog")]);

        let entry = HistoryEntry::confirm(NodeId::from(2u64), false, true);
        let redo = describe(&entry, Direction::Redo, &store, &l10n());
        assert_eq!(
            redo,
            "Confirmation of preferred label \"cat\" will be changed.\n\
             \"Unconfirmed\" → \"Confirmed\""
        );

        let entry = HistoryEntry::confirm(NodeId::from(3u64), false, true);
        let undo = describe(&entry, Direction::Undo, &store, &l10n());
        assert!(undo.starts_with("Confirmation of term \"dog\""));
        assert!(undo.ends_with("\"Confirmed\" → \"Unconfirmed\""));
    }

    #[test]
    fn test_confirm_message_missing_target() {
        let entry = HistoryEntry::confirm(NodeId::from(99u64), true, false);
        let undo = describe(&entry, Direction::Undo, &FakeStore::default(), &l10n());
        assert!(undo.starts_with("Confirmation of a term will be changed."));
    }

    #[test]
    fn test_position_message_is_generic() {
        let entry = HistoryEntry::position(
            NodeId::from(7u64),
            vocabkit_core::Coordinate::new(1.0, 1.0),
            vocabkit_core::Coordinate::new(5.0, 9.0),
        );
        let undo = describe(&entry, Direction::Undo, &FakeStore::default(), &l10n());
        let redo = describe(&entry, Direction::Redo, &FakeStore::default(), &l10n());
        assert_eq!(undo, "Term position will be moved back.");
        assert_eq!(redo, "Term position will be moved forward.");
        assert!(!undo.contains('5'));
    }

    #[test]
    fn test_only_uri_changed() {
        let previous = vec![rec(1, "cat", "cat").with_uri("http://a")];
        let following = vec![rec(1, "cat", "cat").with_uri("http://b")];
        let entry = vocab(previous, following);
        let message = describe(&entry, Direction::Undo, &FakeStore::default(), &l10n());

        let lines: Vec<&str> = message.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Information of \"cat\" will be changed.");
        assert_eq!(lines[1], "URI: \"http://b\" → \"http://a\"");
        assert!(!message.contains("Synonyms"));
        assert!(!message.contains("Preferred label"));
        assert!(!message.contains("Broader term"));
        assert!(!message.contains("Term description"));
    }

    #[test]
    fn test_field_added_and_removed() {
        let previous = vec![rec(1, "cat", "cat")];
        let following = vec![rec(1, "cat", "cat").with_description("a small feline")];
        let entry = vocab(previous, following);

        let redo = describe(&entry, Direction::Redo, &FakeStore::default(), &l10n());
        assert!(redo.ends_with("Term description: \"a small feline\" added"));

        let undo = describe(&entry, Direction::Undo, &FakeStore::default(), &l10n());
        assert!(undo.ends_with("Term description: \"a small feline\" removed"));
    }

    #[test]
    fn test_synonym_clauses() {
        let previous = vec![rec(1, "A", "A"), rec(2, "B", "A")];
        let following = vec![rec(1, "A", "A"), rec(3, "C", "A")];
        let entry = vocab(previous, following);

        let undo = describe(&entry, Direction::Undo, &FakeStore::default(), &l10n());
        assert!(undo.contains("Synonyms added: \"B\""));
        assert!(undo.contains("Synonyms removed: \"C\""));

        let redo = describe(&entry, Direction::Redo, &FakeStore::default(), &l10n());
        assert!(redo.contains("Synonyms added: \"C\""));
        assert!(redo.contains("Synonyms removed: \"B\""));
    }

    #[test]
    fn test_created_and_removed_entry() {
        let created = vocab(vec![rec(5, "other", "")], vec![rec(1, "cat", "")]);
        let store = FakeStore::default();
        let removed_message = "Term: \"cat\" will be removed.";
        let created_message = "Term: \"cat\" will be created.";
        assert_eq!(describe(&created, Direction::Undo, &store, &l10n()), removed_message);
        assert_eq!(describe(&created, Direction::Redo, &store, &l10n()), created_message);

        let removed = vocab(vec![rec(1, "cat", "")], vec![]);
        assert_eq!(describe(&removed, Direction::Undo, &store, &l10n()), created_message);
        assert_eq!(describe(&removed, Direction::Redo, &store, &l10n()), removed_message);
    }

    #[test]
    fn test_language_counterpart_clauses() {
        let previous = vec![rec(1, "cat", "cat"), rec(8, "Katze", "Katze")];
        let following = vec![
            rec(1, "cat", "cat").with_broader_term("animal"),
            rec(8, "Katze", "Katze").with_broader_term("Tier"),
        ];
        let entry = match vocab(previous, following) {
            HistoryEntry::Vocabulary(v) => {
                HistoryEntry::Vocabulary(v.with_lang_diff(NodeId::from(8u64)))
            }
            other => other,
        };

        let redo = describe(&entry, Direction::Redo, &FakeStore::default(), &l10n());
        assert!(redo.contains("Broader term: \"animal\" added"));
        assert!(redo.contains("Broader term: \"Tier\" added"));
    }

    #[test]
    fn test_japanese_catalog() {
        let l10n = LocalizationService::with_builtin(LanguageId::ja_jp());
        let entry = HistoryEntry::confirm_color(Color::Black, Color::Brown);
        let redo = describe(&entry, Direction::Redo, &FakeStore::default(), &l10n);
        assert!(redo.starts_with("確定済み用語の色を変更します。"));
    }
}

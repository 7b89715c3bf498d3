//! # Vocabkit Vocabulary
//!
//! In-memory vocabulary files and the editing session that records every
//! edit into the undo history.

pub mod session;
pub mod store;

pub use session::EditingSession;
pub use store::{InMemoryVocabulary, VocabularyFile, DEFAULT_BLANK_PREFIX};

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use history::{Direction, HistoryEntry, UpdateRequest, VocabularyStore};
    use parking_lot::Mutex;
    use vocabkit_core::event::history::HistoryChanged;
    use vocabkit_core::event::vocabulary::FileSelected;
    use vocabkit_core::{Color, ColorAttribute, Coordinate, NodeId, Settings, VocabularyNode};

    fn node(id: u64, term: &str, label: &str) -> VocabularyNode {
        let mut node = VocabularyNode::new(id, term);
        node.preferred_label = label.to_string();
        node
    }

    fn session() -> EditingSession {
        let mut session = EditingSession::default();
        session.add_file(
            VocabularyFile::new(1, "animals")
                .with_node(node(1, "cat", "cat"))
                .with_node(node(2, "puss", "cat"))
                .with_node(node(3, "animal", "animal"))
                .with_node(node(7, "dog", "dog")),
        );
        session.add_file(VocabularyFile::new(2, "plants").with_node(node(20, "oak", "oak")));
        session.open_file(1).unwrap();
        session
    }

    fn snapshot(session: &EditingSession) -> Vec<VocabularyNode> {
        let mut nodes = session.vocabulary().nodes().to_vec();
        nodes.sort_by(|a, b| a.id.as_str().cmp(b.id.as_str()));
        nodes
    }

    #[test]
    fn test_color_round_trip() {
        let mut session = session();
        session.change_color(&NodeId::from(1u64), ColorAttribute::Color2, Color::Orange).unwrap();
        let edited = snapshot(&session);

        assert!(session.undo());
        let cat = session.vocabulary().find_node(&NodeId::from(1u64));
        assert_eq!(cat.map(|n| n.color2), Some(Color::Black));
        assert!(session.redo());
        assert_eq!(snapshot(&session), edited);
        assert_eq!(session.history().stack().pointer(), Some(1));
    }

    #[test]
    fn test_vocabulary_round_trip() {
        let mut session = session();
        let mut cat = node(1, "cat", "cat");
        cat.broader_term = "animal".into();
        cat.term_description = "a small feline".into();
        let request = UpdateRequest::new(cat.snapshot())
            .with_update(cat)
            .with_update(node(4, "kitty", "cat"))
            .with_delete(NodeId::from(2u64));
        session.edit_vocabulary(request).unwrap();
        let edited = snapshot(&session);

        let preview = session.preview(Direction::Undo);
        assert!(preview.starts_with("Information of \"cat\" will be changed."));
        assert!(preview.contains("Synonyms added: \"puss\""));
        assert!(preview.contains("Synonyms removed: \"kitty\""));
        assert!(preview.contains("Broader term: \"animal\" removed"));
        assert!(preview.contains("Term description: \"a small feline\" removed"));

        assert!(session.undo());
        let terms: Vec<_> = snapshot(&session).iter().map(|n| n.term.clone()).collect();
        assert_eq!(terms, ["cat", "puss", "animal", "dog"]);
        let cat = session.vocabulary().find_node_by_term("cat").cloned().unwrap();
        assert_eq!(cat.broader_term, "");

        assert!(session.redo());
        assert_eq!(snapshot(&session), edited);
        assert_eq!(session.history().stack().len(), 1);
    }

    #[test]
    fn test_created_term_round_trip() {
        let mut session = session();
        let bird = node(8, "bird", "");
        session
            .edit_vocabulary(UpdateRequest::new(bird.snapshot()).with_update(bird))
            .unwrap();

        assert_eq!(session.preview(Direction::Undo), "Term: \"bird\" will be removed.");
        session.undo();
        assert!(session.vocabulary().find_node_by_term("bird").is_none());

        assert_eq!(session.preview(Direction::Redo), "Term: \"bird\" will be created.");
        session.redo();
        let bird = session.vocabulary().find_node_by_term("bird").cloned().unwrap();
        assert_eq!(bird.id, NodeId::from(8u64));
    }

    #[test]
    fn test_confirm_and_confirm_color() {
        let mut session = session();
        session.toggle_confirm("dog", true).unwrap();
        session.change_confirm_color(Color::Pink).unwrap();

        assert_eq!(
            session.preview(Direction::Undo),
            "Color of confirmed terms will be changed.\n\"pink\" → \"black\""
        );
        session.undo();
        assert_eq!(session.vocabulary().confirm_color(), Color::Black);

        let preview = session.preview(Direction::Undo);
        assert!(preview.starts_with("Confirmation of preferred label \"dog\""));
        session.undo();
        assert_eq!(session.vocabulary().find_node_by_term("dog").map(|n| n.confirmed), Some(false));
        assert_eq!(session.vocabulary().current_node().map(|n| n.term.as_str()), Some("dog"));

        session.redo();
        session.redo();
        assert_eq!(session.vocabulary().find_node_by_term("dog").map(|n| n.confirmed), Some(true));
        assert_eq!(session.vocabulary().confirm_color(), Color::Pink);
    }

    #[test]
    fn test_move_node_with_deleted_target() {
        let mut session = session();
        let dog = NodeId::from(7u64);
        session.move_node(&dog, Coordinate::new(5.0, 9.0)).unwrap();

        // removed behind the history's back
        let delete = UpdateRequest::new(node(7, "dog", "dog").snapshot()).with_delete(dog.clone());
        session.vocabulary_mut().update_request(delete, true).unwrap();
        let before = snapshot(&session);

        assert!(session.undo());
        assert_eq!(snapshot(&session), before);
        assert_eq!(session.history().stack().pointer(), Some(0));
        assert!(session.can_redo());
    }

    #[test]
    fn test_recreated_node_keeps_id_shared_with_other_file() {
        let mut session = EditingSession::default();
        session.add_file(
            VocabularyFile::new(1, "animals")
                .with_node(node(1, "cat", "cat"))
                .with_node(node(2, "puss", "cat")),
        );
        session.add_file(
            VocabularyFile::new(2, "plants")
                .with_node(node(1, "oak", "oak"))
                .with_node(node(2, "elm", "elm")),
        );
        session.open_file(1).unwrap();

        let puss = NodeId::from(2u64);
        session.change_color(&puss, ColorAttribute::Color1, Color::Red).unwrap();
        let delete = UpdateRequest::new(node(1, "cat", "cat").snapshot()).with_delete(puss.clone());
        session.edit_vocabulary(delete).unwrap();
        assert!(session.vocabulary().find_node(&puss).is_none());

        assert!(session.undo());
        assert!(session.undo());
        let restored = session.vocabulary().find_node_by_term("puss").cloned().unwrap();
        assert_eq!(restored.id, puss);
        assert_eq!(restored.color1, Color::Black);

        assert!(session.redo());
        let restored = session.vocabulary().find_node_by_term("puss").cloned().unwrap();
        assert_eq!(restored.id, puss);
        assert_eq!(restored.color1, Color::Red);

        assert!(session.redo());
        assert!(session.vocabulary().find_node_by_term("puss").is_none());
        assert_eq!(session.vocabulary().nodes().len(), 1);

        let plants = session.vocabulary().file(2).unwrap();
        let terms: Vec<_> = plants.nodes.iter().map(|n| n.term.as_str()).collect();
        assert_eq!(terms, ["oak", "elm"]);
    }

    #[test]
    fn test_position_undo_only_touches_target() {
        let mut session = session();
        let dog = NodeId::from(7u64);
        session.move_node(&dog, Coordinate::new(5.0, 9.0)).unwrap();
        let others: Vec<_> = snapshot(&session).into_iter().filter(|n| n.id != dog).collect();

        assert_eq!(session.preview(Direction::Undo), "Term position will be moved back.");
        session.undo();

        let nodes = snapshot(&session);
        let position = nodes.iter().find(|n| n.id == dog).map(|n| n.position);
        assert_eq!(position, Some(Coordinate::default()));
        let rest: Vec<_> = nodes.into_iter().filter(|n| n.id != dog).collect();
        assert_eq!(rest, others);
    }

    #[test]
    fn test_replays_do_not_record() {
        let mut session = session();
        session.change_color(&NodeId::from(1u64), ColorAttribute::Color1, Color::Red).unwrap();
        session.toggle_confirm("cat", true).unwrap();
        session.move_node(&NodeId::from(2u64), Coordinate::new(1.0, 2.0)).unwrap();

        while session.undo() {}
        assert_eq!(session.history().stack().len(), 3);
        assert_eq!(session.history().stack().pointer(), Some(0));
        while session.redo() {}
        assert_eq!(session.history().stack().len(), 3);
        assert_eq!(session.history().stack().pointer(), Some(3));
    }

    #[test]
    fn test_open_file_resets_history() {
        let mut session = session();
        let selected = Arc::new(Mutex::new(Vec::new()));
        let sink = selected.clone();
        session.events().on(move |e: &FileSelected| sink.lock().push(e.file_id));

        session.change_color(&NodeId::from(1u64), ColorAttribute::Color1, Color::Red).unwrap();
        assert!(session.can_undo());

        session.open_file(2).unwrap();
        assert!(!session.can_undo());
        assert!(!session.can_redo());
        assert_eq!(session.history().stack().pointer(), None);
        assert_eq!(session.undo_message(), "No history available.");
        assert_eq!(*selected.lock(), [2]);

        assert!(session.open_file(9).is_err());
    }

    #[test]
    fn test_history_changed_published() {
        let mut session = session();
        let changes = Arc::new(Mutex::new(Vec::new()));
        let sink = changes.clone();
        session.events().on(move |e: &HistoryChanged| sink.lock().push((e.can_undo, e.can_redo)));

        session.change_color(&NodeId::from(1u64), ColorAttribute::Color1, Color::Red).unwrap();
        session.undo();
        session.redo();

        assert_eq!(*changes.lock(), [(true, false), (false, true), (true, false)]);
    }

    #[test]
    fn test_errors_propagate() {
        let mut session = session();
        assert!(session.toggle_confirm("wolf", true).is_err());
        assert!(session
            .change_color(&NodeId::from(99u64), ColorAttribute::Color1, Color::Red)
            .is_err());
        assert!(!session.can_undo());
    }

    #[test]
    fn test_placeholder_synonyms_hidden() {
        let mut session = session();
        let cat = node(1, "cat", "cat");
        let request = UpdateRequest::new(cat.snapshot())
            .with_update(cat)
            .with_update(node(5, "_blank_1", "cat"));
        session.edit_vocabulary(request).unwrap();

        let preview = session.preview(Direction::Redo);
        assert_eq!(preview, "No history available.");
        let preview = session.preview(Direction::Undo);
        assert!(!preview.contains("_blank_"));
    }

    #[test]
    fn test_japanese_session() {
        let mut settings = Settings::default();
        settings.locale.language = "ja-JP".into();
        settings.history.capacity = 2;
        let mut session = EditingSession::new(settings);
        session.add_file(VocabularyFile::new(1, "animals").with_node(node(1, "cat", "cat")));
        session.open_file(1).unwrap();

        for color in [Color::Red, Color::Blue, Color::Green] {
            session.change_color(&NodeId::from(1u64), ColorAttribute::Color1, color).unwrap();
        }
        assert_eq!(session.history().stack().len(), 2);
        let preview = session.preview(Direction::Undo);
        assert!(preview.starts_with("「cat」の色を変更します。"));

        let recorded: Vec<_> = session.history().stack().entries().cloned().collect();
        assert!(matches!(
            recorded.last(),
            Some(HistoryEntry::Color(c)) if c.previous == Color::Blue && c.following == Color::Green
        ));
    }
}

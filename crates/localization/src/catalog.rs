//! Built-in message catalogs for undo/redo previews

use crate::{LanguageId, MessageBundle};

/// Message keys used by the history engine
pub mod keys {
    pub const HISTORY_NONE: &str = "history.none";

    pub const COLOR_HEADER: &str = "history.color.header";
    pub const COLOR_ATTRIBUTE_1: &str = "history.color.attribute.color1";
    pub const COLOR_ATTRIBUTE_2: &str = "history.color.attribute.color2";
    pub const COLOR_CHANGE: &str = "history.color.change";

    pub const CONFIRM_COLOR_HEADER: &str = "history.confirm_color.header";

    pub const CONFIRM_HEADER_LABEL: &str = "history.confirm.header_label";
    pub const CONFIRM_HEADER_TERM: &str = "history.confirm.header_term";
    pub const CONFIRM_HEADER_UNKNOWN: &str = "history.confirm.header_unknown";
    pub const CONFIRMED: &str = "history.confirm.confirmed";
    pub const UNCONFIRMED: &str = "history.confirm.unconfirmed";

    pub const VALUE_CHANGE: &str = "history.value.change";

    pub const POSITION_UNDO: &str = "history.position.undo";
    pub const POSITION_REDO: &str = "history.position.redo";

    pub const ENTRY_CREATED: &str = "history.vocabulary.created";
    pub const ENTRY_REMOVED: &str = "history.vocabulary.removed";
    pub const VOCABULARY_HEADER: &str = "history.vocabulary.header";

    pub const SYNONYM_ADDED: &str = "history.synonym.added";
    pub const SYNONYM_REMOVED: &str = "history.synonym.removed";

    pub const FIELD_PREFERRED_LABEL: &str = "history.field.preferred_label";
    pub const FIELD_URI: &str = "history.field.uri";
    pub const FIELD_BROADER_TERM: &str = "history.field.broader_term";
    pub const FIELD_TERM_DESCRIPTION: &str = "history.field.term_description";
    pub const FIELD_REPLACED: &str = "history.field.replaced";
    pub const FIELD_ADDED: &str = "history.field.added";
    pub const FIELD_REMOVED: &str = "history.field.removed";
}

/// All catalogs shipped with Vocabkit
pub fn builtin_bundles() -> Vec<MessageBundle> {
    vec![en_us(), ja_jp()]
}

fn en_us() -> MessageBundle {
    use keys::*;

    MessageBundle::new(LanguageId::en_us())
        .with(HISTORY_NONE, "No history available.")
        .with(COLOR_HEADER, "Color of \"{term}\" will be changed.")
        .with(COLOR_ATTRIBUTE_1, "Color 1")
        .with(COLOR_ATTRIBUTE_2, "Color 2")
        .with(COLOR_CHANGE, "{attribute}: \"{before}\" → \"{after}\"")
        .with(CONFIRM_COLOR_HEADER, "Color of confirmed terms will be changed.")
        .with(CONFIRM_HEADER_LABEL, "Confirmation of preferred label \"{name}\" will be changed.")
        .with(CONFIRM_HEADER_TERM, "Confirmation of term \"{name}\" will be changed.")
        .with(CONFIRM_HEADER_UNKNOWN, "Confirmation of a term will be changed.")
        .with(CONFIRMED, "Confirmed")
        .with(UNCONFIRMED, "Unconfirmed")
        .with(VALUE_CHANGE, "\"{before}\" → \"{after}\"")
        .with(POSITION_UNDO, "Term position will be moved back.")
        .with(POSITION_REDO, "Term position will be moved forward.")
        .with(ENTRY_CREATED, "Term: \"{term}\" will be created.")
        .with(ENTRY_REMOVED, "Term: \"{term}\" will be removed.")
        .with(VOCABULARY_HEADER, "Information of \"{term}\" will be changed.")
        .with(SYNONYM_ADDED, "Synonyms added: {terms}")
        .with(SYNONYM_REMOVED, "Synonyms removed: {terms}")
        .with(FIELD_PREFERRED_LABEL, "Preferred label")
        .with(FIELD_URI, "URI")
        .with(FIELD_BROADER_TERM, "Broader term")
        .with(FIELD_TERM_DESCRIPTION, "Term description")
        .with(FIELD_REPLACED, "{field}: \"{before}\" → \"{after}\"")
        .with(FIELD_ADDED, "{field}: \"{value}\" added")
        .with(FIELD_REMOVED, "{field}: \"{value}\" removed")
}

fn ja_jp() -> MessageBundle {
    use keys::*;

    MessageBundle::new(LanguageId::ja_jp())
        .with(HISTORY_NONE, "履歴がありません。")
        .with(COLOR_HEADER, "「{term}」の色を変更します。")
        .with(COLOR_ATTRIBUTE_1, "色1")
        .with(COLOR_ATTRIBUTE_2, "色2")
        .with(COLOR_CHANGE, "{attribute}：\"{before}\" → \"{after}\"")
        .with(CONFIRM_COLOR_HEADER, "確定済み用語の色を変更します。")
        .with(CONFIRM_HEADER_LABEL, "代表語「{name}」の確定状態を変更します。")
        .with(CONFIRM_HEADER_TERM, "用語「{name}」の確定状態を変更します。")
        .with(CONFIRM_HEADER_UNKNOWN, "用語の確定状態を変更します。")
        .with(CONFIRMED, "確定")
        .with(UNCONFIRMED, "未確定")
        .with(VALUE_CHANGE, "\"{before}\" → \"{after}\"")
        .with(POSITION_UNDO, "用語の位置を元に戻します。")
        .with(POSITION_REDO, "用語の位置をやり直します。")
        .with(ENTRY_CREATED, "用語：「{term}」を作成します。")
        .with(ENTRY_REMOVED, "用語：「{term}」を削除します。")
        .with(VOCABULARY_HEADER, "「{term}」の情報を変更します。")
        .with(SYNONYM_ADDED, "同義語：{terms} を追加します。")
        .with(SYNONYM_REMOVED, "同義語：{terms} を削除します。")
        .with(FIELD_PREFERRED_LABEL, "代表語")
        .with(FIELD_URI, "URI")
        .with(FIELD_BROADER_TERM, "上位語")
        .with(FIELD_TERM_DESCRIPTION, "用語の説明")
        .with(FIELD_REPLACED, "{field}：\"{before}\" → \"{after}\"")
        .with(FIELD_ADDED, "{field}：\"{value}\" を追加します。")
        .with(FIELD_REMOVED, "{field}：\"{value}\" を削除します。")
}

//! Internationalization (i18n) Support for Vocabkit
//!
//! Message catalogs with a locale fallback chain and `{placeholder}`
//! interpolation.

pub mod catalog;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub use catalog::builtin_bundles;

/// Language identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguageId(pub String);

impl LanguageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn en_us() -> Self {
        Self("en-US".to_string())
    }

    pub fn ja_jp() -> Self {
        Self("ja-JP".to_string())
    }

    pub fn language_code(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }

    pub fn region_code(&self) -> Option<&str> {
        self.0.split('-').nth(1)
    }
}

impl Default for LanguageId {
    fn default() -> Self {
        Self::en_us()
    }
}

/// Localized message bundle
#[derive(Debug, Clone, Default)]
pub struct MessageBundle {
    pub language: LanguageId,
    pub messages: HashMap<String, String>,
}

impl MessageBundle {
    pub fn new(language: LanguageId) -> Self {
        Self {
            language,
            messages: HashMap::new(),
        }
    }

    pub fn with(mut self, key: &str, template: &str) -> Self {
        self.messages.insert(key.to_string(), template.to_string());
        self
    }
}

/// Message arguments for interpolation
#[derive(Debug, Clone, Default)]
pub struct MessageArgs {
    args: HashMap<String, MessageValue>,
}

/// Value types for message arguments
#[derive(Debug, Clone)]
pub enum MessageValue {
    String(String),
    Number(f64),
    Integer(i64),
    Boolean(bool),
}

impl MessageValue {
    fn render(&self) -> String {
        match self {
            MessageValue::String(s) => s.clone(),
            MessageValue::Number(n) => n.to_string(),
            MessageValue::Integer(n) => n.to_string(),
            MessageValue::Boolean(b) => b.to_string(),
        }
    }
}

impl MessageArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, key: impl Into<String>, value: impl Into<MessageValue>) -> Self {
        self.args.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&MessageValue> {
        self.args.get(key)
    }
}

impl From<String> for MessageValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for MessageValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<&String> for MessageValue {
    fn from(s: &String) -> Self {
        Self::String(s.clone())
    }
}

impl From<i64> for MessageValue {
    fn from(n: i64) -> Self {
        Self::Integer(n)
    }
}

impl From<f64> for MessageValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for MessageValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

/// Localization service
pub struct LocalizationService {
    current_locale: RwLock<LanguageId>,
    fallback_chain: RwLock<Vec<LanguageId>>,
    bundles: RwLock<HashMap<LanguageId, MessageBundle>>,
}

impl LocalizationService {
    pub fn new() -> Self {
        Self {
            current_locale: RwLock::new(LanguageId::en_us()),
            fallback_chain: RwLock::new(vec![LanguageId::en_us()]),
            bundles: RwLock::new(HashMap::new()),
        }
    }

    /// Service preloaded with the built-in catalogs
    pub fn with_builtin(locale: LanguageId) -> Self {
        let service = Self::new();
        for bundle in builtin_bundles() {
            service.register_bundle(bundle);
        }
        service.set_locale(locale);
        service
    }

    pub fn current_locale(&self) -> LanguageId {
        self.current_locale.read().clone()
    }

    pub fn set_locale(&self, locale: LanguageId) {
        *self.current_locale.write() = locale;
    }

    pub fn set_fallback_chain(&self, chain: Vec<LanguageId>) {
        *self.fallback_chain.write() = chain;
    }

    pub fn register_bundle(&self, bundle: MessageBundle) {
        let lang = bundle.language.clone();
        self.bundles.write().insert(lang, bundle);
    }

    pub fn get_message(&self, key: &str) -> Option<String> {
        self.get_message_with_args(key, &MessageArgs::new())
    }

    pub fn get_message_with_args(&self, key: &str, args: &MessageArgs) -> Option<String> {
        let current = self.current_locale.read().clone();
        let chain = self.fallback_chain.read().clone();

        if let Some(msg) = self.lookup_and_format(&current, key, args) {
            return Some(msg);
        }

        for fallback in &chain {
            if let Some(msg) = self.lookup_and_format(fallback, key, args) {
                return Some(msg);
            }
        }

        None
    }

    /// Like [`get_message_with_args`](Self::get_message_with_args), rendering
    /// unknown keys as `[key]`.
    pub fn format(&self, key: &str, args: &MessageArgs) -> String {
        self.get_message_with_args(key, args).unwrap_or_else(|| {
            tracing::warn!(key, "missing localized message");
            format!("[{}]", key)
        })
    }

    fn lookup_and_format(
        &self,
        lang: &LanguageId,
        key: &str,
        args: &MessageArgs,
    ) -> Option<String> {
        let bundles = self.bundles.read();
        let bundle = bundles.get(lang)?;
        let template = bundle.messages.get(key)?;
        Some(interpolate(template, args))
    }

    pub fn available_locales(&self) -> Vec<LanguageId> {
        self.bundles.read().keys().cloned().collect()
    }
}

impl Default for LocalizationService {
    fn default() -> Self {
        Self::new()
    }
}

/// Single pass over the template so substituted values are never re-expanded.
fn interpolate(template: &str, args: &MessageArgs) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        result.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                match args.get(name) {
                    Some(value) => result.push_str(&value.render()),
                    None => {
                        result.push('{');
                        result.push_str(name);
                        result.push('}');
                    }
                }
                rest = &after[close + 1..];
            }
            None => {
                result.push_str(&rest[open..]);
                rest = "";
            }
        }
    }
    result.push_str(rest);
    result
}

/// Convenience macro for localized strings
#[macro_export]
macro_rules! t {
    ($service:expr, $key:expr) => {
        $service.format($key, &$crate::MessageArgs::new())
    };
    ($service:expr, $key:expr, $($arg:tt)*) => {{
        let args = $crate::MessageArgs::new()$($arg)*;
        $service.format($key, &args)
    }};
}

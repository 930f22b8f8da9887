// SPDX-License-Identifier: PMPL-1.0-or-later

//! Localized field resolution over fixture values.
//!
//! Fixture fields come in three shapes: absent, a plain string that reads
//! the same in every language, or a mapping keyed by language code. The
//! resolver accepts any JSON shape and never fails; whatever it cannot read
//! as text becomes the empty string.

use super::Lang;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;

/// Language every mapping is expected to carry.
pub const FALLBACK_LANG: Lang = Lang::En;

/// Resolve `field` of `record` for `lang`.
///
/// Missing record, non-object record and missing field all give `""`.
pub fn resolve<'a>(record: Option<&'a Value>, field: &str, lang: Lang) -> Cow<'a, str> {
    match record.and_then(|r| r.get(field)) {
        Some(value) => localize(value, lang),
        None => Cow::Borrowed(""),
    }
}

/// Resolve a single field value for `lang`.
///
/// A plain string is returned verbatim. A mapping yields the entry for
/// `lang`, then the `en` entry, then `""`; empty entries count as missing.
pub fn localize(value: &Value, lang: Lang) -> Cow<'_, str> {
    match value {
        Value::Object(map) => localized_entry(map, lang).unwrap_or(Cow::Borrowed("")),
        other => scalar_text(other).unwrap_or(Cow::Borrowed("")),
    }
}

/// Resolve a list-valued field (`features`): a plain array, or a mapping
/// from language code to array. Non-text items are skipped.
pub fn localize_list(value: &Value, lang: Lang) -> Vec<&str> {
    let items = match value {
        Value::Array(items) => Some(items),
        Value::Object(map) => [lang.code(), FALLBACK_LANG.code()]
            .iter()
            .find_map(|code| map.get(*code).and_then(Value::as_array)),
        _ => None,
    };
    items
        .map(|items| items.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}

fn localized_entry<'a>(map: &'a Map<String, Value>, lang: Lang) -> Option<Cow<'a, str>> {
    map.get(lang.code())
        .and_then(scalar_text)
        .or_else(|| map.get(FALLBACK_LANG.code()).and_then(scalar_text))
}

fn scalar_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(text) if !text.is_empty() => Some(Cow::Borrowed(text.as_str())),
        Value::Number(number) if number.as_f64() != Some(0.0) => {
            Some(Cow::Owned(number.to_string()))
        }
        _ => None,
    }
}

/// A fixture field that may be localized.
///
/// Wraps the raw value so deserialization accepts every shape; reading goes
/// through [`LocalizedText::resolve`]. Mappings may carry extra non-language
/// keys such as `img` or `link`, exposed via [`LocalizedText::attr`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(Value);

impl LocalizedText {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn resolve(&self, lang: Lang) -> Cow<'_, str> {
        localize(&self.0, lang)
    }

    /// True when the field would render as something in some language.
    pub fn is_present(&self) -> bool {
        match &self.0 {
            Value::Object(map) => map.values().any(|v| scalar_text(v).is_some()),
            other => scalar_text(other).is_some(),
        }
    }

    /// A non-language key stored alongside the translations.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Whether `lang` has its own entry. Plain text counts for every language.
    pub fn has_entry(&self, lang: Lang) -> bool {
        match &self.0 {
            Value::Object(map) => map.get(lang.code()).and_then(scalar_text).is_some(),
            other => scalar_text(other).is_some(),
        }
    }
}

impl From<&str> for LocalizedText {
    fn from(text: &str) -> Self {
        Self(Value::String(text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_record_or_field_is_empty() {
        assert_eq!(resolve(None, "name", Lang::Es), "");
        let record = json!({ "name": { "en": "Gateway" } });
        assert_eq!(resolve(Some(&record), "title", Lang::Es), "");
    }

    #[test]
    fn plain_string_ignores_language() {
        let record = json!({ "gpa": "8.9" });
        assert_eq!(resolve(Some(&record), "gpa", Lang::En), "8.9");
        assert_eq!(resolve(Some(&record), "gpa", Lang::Es), "8.9");
    }

    #[test]
    fn mapping_prefers_active_then_english() {
        let record = json!({ "name": { "en": "Payment Gateway", "es": "Pasarela de pago" } });
        assert_eq!(resolve(Some(&record), "name", Lang::Es), "Pasarela de pago");

        let english_only = json!({ "name": { "en": "Payment Gateway" } });
        assert_eq!(
            resolve(Some(&english_only), "name", Lang::Es),
            "Payment Gateway"
        );
    }

    #[test]
    fn mapping_without_active_or_english_is_empty() {
        let record = json!({ "name": { "gl": "Pasarela" } });
        assert_eq!(resolve(Some(&record), "name", Lang::Es), "");
    }

    #[test]
    fn empty_entry_falls_through_to_english() {
        let record = json!({ "name": { "en": "Portfolio", "es": "" } });
        assert_eq!(resolve(Some(&record), "name", Lang::Es), "Portfolio");
    }

    #[test]
    fn odd_shapes_degrade_to_empty() {
        assert_eq!(localize(&json!(null), Lang::En), "");
        assert_eq!(localize(&json!(false), Lang::En), "");
        assert_eq!(localize(&json!(["a"]), Lang::En), "");
        assert_eq!(localize(&json!({ "en": { "nested": 1 } }), Lang::En), "");
        assert_eq!(localize(&json!(2024), Lang::Es), "2024");
        assert_eq!(resolve(Some(&json!("not an object")), "name", Lang::En), "");
    }

    #[test]
    fn list_fields_localize() {
        let features = json!({ "en": ["Fast", "Safe"], "es": ["Rápido"] });
        assert_eq!(localize_list(&features, Lang::Es), vec!["Rápido"]);
        assert_eq!(localize_list(&json!(["A", 3, "B"]), Lang::Es), vec!["A", "B"]);
        assert!(localize_list(&json!("text"), Lang::En).is_empty());
    }

    #[test]
    fn localized_text_attrs() {
        let place: LocalizedText = serde_json::from_value(json!({
            "en": "University of Vigo",
            "es": "Universidad de Vigo",
            "img": "uvigo.png"
        }))
        .unwrap();
        assert_eq!(place.resolve(Lang::Es), "Universidad de Vigo");
        assert_eq!(place.attr("img"), Some("uvigo.png"));
        assert_eq!(place.attr("link"), None);
        assert!(place.is_present());
        assert!(!LocalizedText::default().is_present());
    }
}

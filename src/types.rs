// SPDX-License-Identifier: PMPL-1.0-or-later

//! Portfolio records as stored in the data fixtures.
//!
//! Field names follow the fixture files (including the `colaboration` and
//! `expanded-description` spellings). Every field is optional so a sparse
//! record still loads; reading goes through the localized accessors.

use crate::i18n::{localize_list, Lang, LocalizedText, FALLBACK_LANG};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub greeting: LocalizedText,
    pub headline: LocalizedText,
    pub summary: LocalizedText,
    /// About-me paragraphs, in order.
    pub about: Vec<LocalizedText>,
    pub photo: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    /// Institution name; may carry `img` and `link`.
    pub place: LocalizedText,
    pub title: LocalizedText,
    pub dates: LocalizedText,
    pub description: LocalizedText,
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    /// Company name; may carry `img` and `link`.
    pub place: LocalizedText,
    pub role: LocalizedText,
    pub date: LocalizedText,
    pub description: LocalizedText,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillCategory {
    pub id: String,
    pub title: LocalizedText,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SpokenLanguage {
    pub name: LocalizedText,
    pub level: LocalizedText,
    pub level_class: String,
    pub flag: Option<String>,
    pub country_code: String,
}

impl SpokenLanguage {
    /// Proficiency bar fill, derived from the level label.
    pub fn proficiency(&self, lang: Lang) -> u8 {
        proficiency_for_level(&self.level.resolve(lang))
    }
}

/// Percentage shown for a level label such as "C1 (Advanced)".
pub fn proficiency_for_level(level: &str) -> u8 {
    if level.contains("Native") || level.contains("Nativo") {
        100
    } else if level.contains("C1") {
        85
    } else if level.contains("A1") {
        25
    } else {
        0
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    pub name: String,
    pub url: String,
    pub icon: Option<String>,
    pub color: Option<String>,
}

impl SocialLink {
    /// Single-letter badge used when the icon cannot be shown.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Contact {
    pub social_links: Vec<SocialLink>,
    pub phone: String,
    pub email: Option<String>,
    pub location: LocalizedText,
}

/// A partner organisation: localized name with optional `img` and `link`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collaboration(pub LocalizedText);

impl Collaboration {
    pub fn name(&self, lang: Lang) -> String {
        self.0.resolve(lang).into_owned()
    }

    pub fn logo(&self) -> Option<&str> {
        self.0.attr("img")
    }

    pub fn link(&self) -> Option<&str> {
        self.0.attr("link")
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub slug: Option<String>,
    pub name: LocalizedText,
    pub date: LocalizedText,
    pub description: LocalizedText,
    pub achievements: LocalizedText,
    pub category: LocalizedText,
    pub status: LocalizedText,
    /// Card image reference.
    pub img: Option<String>,
    pub technologies: Vec<String>,
    /// Source repository link.
    pub github: Option<String>,
    pub demo: Option<String>,
    #[serde(rename = "colaboration", alias = "collaboration")]
    pub collaborations: Vec<Collaboration>,
    /// Localized list or plain list.
    pub features: Value,
    /// Localized string or localized sequence of content blocks.
    #[serde(rename = "expanded-description")]
    pub expanded_description: Value,
}

impl Project {
    pub fn features(&self, lang: Lang) -> Vec<&str> {
        localize_list(&self.features, lang)
    }

    /// The expanded description for `lang`, still in fixture form.
    ///
    /// A mapping yields its entry for `lang`, else its `en` entry; a bare
    /// string or sequence is language-independent.
    pub fn localized_content(&self, lang: Lang) -> Option<&Value> {
        match &self.expanded_description {
            Value::Object(map) => [lang.code(), FALLBACK_LANG.code()]
                .iter()
                .filter_map(|code| map.get(*code))
                .find(|value| is_content(value)),
            other if is_content(other) => Some(other),
            _ => None,
        }
    }

    pub fn explicit_slug(&self) -> Option<&str> {
        self.slug.as_deref().filter(|s| !s.is_empty())
    }

    pub fn source_link(&self) -> Option<&str> {
        self.github.as_deref().filter(|s| !s.is_empty())
    }

    pub fn demo_link(&self) -> Option<&str> {
        self.demo.as_deref().filter(|s| !s.is_empty())
    }
}

fn is_content(value: &Value) -> bool {
    match value {
        Value::String(text) => !text.is_empty(),
        Value::Array(_) => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn project_reads_fixture_spelling() {
        let project: Project = serde_json::from_value(json!({
            "name": { "en": "Gateway" },
            "colaboration": [{ "en": "Acme Labs", "es": "Laboratorios Acme", "img": "acme.png" }],
            "expanded-description": { "en": ["Intro"], "es": "Texto" }
        }))
        .unwrap();

        assert_eq!(project.collaborations.len(), 1);
        assert_eq!(project.collaborations[0].name(Lang::Es), "Laboratorios Acme");
        assert_eq!(project.collaborations[0].logo(), Some("acme.png"));
        assert_eq!(project.localized_content(Lang::En), Some(&json!(["Intro"])));
        assert_eq!(project.localized_content(Lang::Es), Some(&json!("Texto")));
        assert_eq!(project.explicit_slug(), None);
    }

    #[test]
    fn missing_language_content_falls_back_to_english() {
        let project: Project = serde_json::from_value(json!({
            "expanded-description": { "en": "Only English" }
        }))
        .unwrap();
        assert_eq!(project.localized_content(Lang::Es), Some(&json!("Only English")));

        let empty = Project::default();
        assert_eq!(empty.localized_content(Lang::En), None);
    }

    #[test]
    fn proficiency_from_level_text() {
        assert_eq!(proficiency_for_level("Nativo"), 100);
        assert_eq!(proficiency_for_level("C1 (Advanced)"), 85);
        assert_eq!(proficiency_for_level("A1 (Principiante)"), 25);
        assert_eq!(proficiency_for_level("B2"), 0);
    }
}

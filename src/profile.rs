use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use thiserror::Error;

use crate::locale::Locale;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    #[error("Couldn't fetch profile: {0}")]
    Fetch(String),
    #[error("Couldn't parse profile: {0}")]
    Parse(String),
}

/// The whole site content, loaded once and never mutated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentDocument {
    pub name: String,
    pub contacts: Contacts,
    pub tech_stack: TechStack,
    pub i18n: Translations,
}

impl ContentDocument {
    pub fn bundle(&self, locale: Locale) -> &LocaleBundle {
        match locale {
            Locale::En => &self.i18n.en,
            Locale::Uk => &self.i18n.uk,
            Locale::Ru => &self.i18n.ru,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContactLink {
    pub display: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Contacts {
    pub phone: ContactLink,
    pub email: ContactLink,
    pub telegram: ContactLink,
    pub github: ContactLink,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Translations {
    pub en: LocaleBundle,
    pub uk: LocaleBundle,
    pub ru: LocaleBundle,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocaleBundle {
    pub roles: Vec<String>,
    pub location: String,
    pub about: String,
    pub hero_title: String,
    pub hero_desc: String,
    pub hero_focus: String,
    pub nav: Vec<String>,
    pub sections: SectionTitles,
    pub specialization: Vec<Specialization>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub lang_levels: Vec<LanguageLevel>,
    pub seo: Seo,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SectionTitles {
    pub experience: String,
    pub projects: String,
    pub stack: String,
    pub languages: String,
    pub cta_title: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Specialization {
    pub title: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub period: String,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub company: String,
    pub name: String,
    pub desc: String,
    pub tech: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LanguageLevel {
    pub name: String,
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Seo {
    pub title: String,
    pub description: String,
}

/// Technology category -> entries, in document order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TechStack(Vec<(String, Vec<String>)>);

impl TechStack {
    pub fn new(categories: Vec<(String, Vec<String>)>) -> Self {
        Self(categories)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }

    pub fn entries(&self, category: &str) -> Option<&[String]> {
        self.0
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, entries)| entries.as_slice())
    }

    pub fn contains(&self, category: &str) -> bool {
        self.entries(category).is_some()
    }

    pub fn first(&self) -> Option<&str> {
        self.categories().next()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for TechStack {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedCategories;

        impl<'de> Visitor<'de> for OrderedCategories {
            type Value = TechStack;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of category name to a list of entries")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut categories: Vec<(String, Vec<String>)> =
                    Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, entries)) = map.next_entry::<String, Vec<String>>()? {
                    // later duplicates win but keep the first position
                    match categories.iter().position(|(existing, _)| *existing == name) {
                        Some(i) => categories[i].1 = entries,
                        None => categories.push((name, entries)),
                    }
                }
                Ok(TechStack(categories))
            }
        }

        deserializer.deserialize_map(OrderedCategories)
    }
}

pub fn parse_profile(raw: &str) -> Result<ContentDocument, ProfileError> {
    serde_json::from_str(raw).map_err(|e| ProfileError::Parse(e.to_string()))
}

#[cfg(test)]
pub(crate) mod fixtures {
    use serde_json::json;

    pub fn bundle(tag: &str) -> serde_json::Value {
        json!({
            "roles": ["Mobile Lead", "Android"],
            "location": format!("Kyiv {tag}"),
            "about": format!("About {tag}"),
            "hero_title": "BUILDING<br/>MOBILE<br/>PRODUCTS",
            "hero_desc": format!("Desc {tag}"),
            "hero_focus": "at scale.",
            "nav": [
                format!("About {tag}"),
                format!("Experience {tag}"),
                format!("Projects {tag}"),
                format!("Stack {tag}"),
                format!("Contact {tag}")
            ],
            "sections": {
                "experience": "Experience",
                "projects": "Projects",
                "stack": "Stack",
                "languages": "Languages",
                "cta_title": "Let's talk"
            },
            "specialization": [
                { "title": "Android", "desc": "Native apps" },
                { "title": "Architecture", "desc": "Modular codebases" }
            ],
            "experience": [
                {
                    "company": "Acme",
                    "role": "Lead",
                    "period": "2021 - now",
                    "details": ["Shipped the app", "Grew the team"]
                }
            ],
            "projects": [
                { "company": "Acme", "name": "Wallet", "desc": "Payments", "tech": "Kotlin" }
            ],
            "lang_levels": [
                { "name": "English", "level": "C1" },
                { "name": "Ukrainian", "level": "Native" }
            ],
            "seo": { "title": format!("Title {tag}"), "description": format!("Seo {tag}") }
        })
    }

    pub fn document_with_stack(stack: serde_json::Value) -> String {
        json!({
            "name": "Nazar Kuzenko",
            "contacts": {
                "phone": { "display": "+380 00 000 0000", "url": "tel:+380000000000" },
                "email": { "display": "me@example.com", "url": "mailto:me@example.com" },
                "telegram": { "display": "@me", "url": "https://t.me/me" },
                "github": { "display": "me", "url": "https://github.com/me" }
            },
            "techStack": stack,
            "i18n": { "en": bundle("en"), "uk": bundle("uk"), "ru": bundle("ru") }
        })
        .to_string()
    }

    pub fn document() -> String {
        document_with_stack(json!({
            "Android": ["Kotlin — primary language", "Jetpack Compose"],
            "iOS": ["Swift — secondary language"],
            "Backend": ["Ktor — services"]
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn test_parse_document() {
        let doc = parse_profile(&document()).expect("fixture should parse");
        assert_eq!(doc.name, "Nazar Kuzenko");
        assert_eq!(doc.contacts.telegram.url, "https://t.me/me");
        assert_eq!(doc.bundle(Locale::Uk).location, "Kyiv uk");
        assert_eq!(doc.bundle(Locale::Ru).seo.title, "Title ru");
        assert_eq!(doc.bundle(Locale::En).experience[0].details.len(), 2);
    }

    #[test]
    fn test_tech_stack_keeps_document_order() {
        let doc = parse_profile(&document()).unwrap();
        let categories: Vec<&str> = doc.tech_stack.categories().collect();
        assert_eq!(categories, vec!["Android", "iOS", "Backend"]);
        assert_eq!(doc.tech_stack.first(), Some("Android"));
        assert_eq!(
            doc.tech_stack.entries("iOS"),
            Some(&["Swift — secondary language".to_string()][..])
        );
        assert!(doc.tech_stack.entries("Web").is_none());
    }

    #[test]
    fn test_duplicate_category_takes_last_value() {
        let raw = r#"{"A": ["one"], "B": ["two"], "A": ["three"]}"#;
        let stack: TechStack = serde_json::from_str(raw).unwrap();
        let categories: Vec<&str> = stack.categories().collect();
        assert_eq!(categories, vec!["A", "B"]);
        assert_eq!(stack.entries("A"), Some(&["three".to_string()][..]));
    }

    #[test]
    fn test_malformed_document() {
        let err = parse_profile("{ not json").unwrap_err();
        assert!(matches!(err, ProfileError::Parse(_)));

        // valid json, missing locale bundles
        let err = parse_profile(r#"{"name": "x"}"#).unwrap_err();
        assert!(matches!(err, ProfileError::Parse(_)));
    }
}

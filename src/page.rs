//! Page-wide interaction state and the derived data the section components render.

use std::sync::Arc;

use chrono::{Datelike, Local};

use crate::config::HERO_LINE_BREAK;
use crate::locale::{self, Locale, LocaleError, LocaleStore};
use crate::nav::{NavState, SectionId};
use crate::profile::{ContentDocument, LocaleBundle, ProfileError};
use crate::reveal::RevealTracker;
use crate::stack::{StackError, StackSelector};
use crate::tilt::TiltState;

/// Whether the page has content to render yet.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ContentState {
    #[default]
    Loading,
    Ready(Arc<ContentDocument>),
}

impl ContentState {
    /// A failed load never leaves the loading state.
    pub fn from_load(load: Option<&Result<Arc<ContentDocument>, ProfileError>>) -> Self {
        match load {
            Some(Ok(doc)) => ContentState::Ready(doc.clone()),
            Some(Err(_)) | None => ContentState::Loading,
        }
    }

    pub fn document(&self) -> Option<&Arc<ContentDocument>> {
        match self {
            ContentState::Ready(doc) => Some(doc),
            ContentState::Loading => None,
        }
    }
}

/// Interaction state that lives as long as the page is open.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageState {
    pub locale: Locale,
    pub stack: StackSelector,
    pub nav: NavState,
    pub tilt: TiltState,
}

impl PageState {
    pub fn new<S: LocaleStore + ?Sized>(doc: &ContentDocument, store: &S) -> Self {
        Self {
            locale: locale::restore(store),
            stack: StackSelector::new(&doc.tech_stack),
            nav: NavState::default(),
            tilt: TiltState::default(),
        }
    }

    /// Applies a locale pick. Returns whether the active locale changed; only
    /// then is the content re-rendered, so only then are the fading blocks
    /// forgotten for re-registration.
    pub fn select_locale<S: LocaleStore + ?Sized>(
        &mut self,
        store: &mut S,
        reveal: &mut RevealTracker,
        code: &str,
    ) -> Result<bool, LocaleError> {
        let previous = self.locale;
        let locale = locale::select(store, &mut self.locale, code)?;
        let changed = locale != previous;
        if changed {
            reveal.rescan();
        }
        Ok(changed)
    }

    pub fn select_category(
        &mut self,
        doc: &ContentDocument,
        name: &str,
    ) -> Result<(), StackError> {
        self.stack.select(&doc.tech_stack, name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub section: SectionId,
    pub label: String,
}

/// Pairs navbar labels with sections by position. Surplus labels or
/// sections are dropped.
pub fn nav_links(bundle: &LocaleBundle) -> Vec<NavLink> {
    bundle
        .nav
        .iter()
        .zip(SectionId::ALL)
        .map(|(label, section)| NavLink {
            section,
            label: label.clone(),
        })
        .collect()
}

pub fn hero_lines(title: &str) -> Vec<&str> {
    title.split(HERO_LINE_BREAK).collect()
}

/// Two-digit, 1-based label for specialization and project cards.
pub fn card_number(index: usize) -> String {
    format!("{:02}", index + 1)
}

/// 1-based label for experience bullet points.
pub fn bullet_number(index: usize) -> String {
    format!("[{}]", index + 1)
}

pub fn current_year() -> i32 {
    Local::now().year()
}

pub fn footer_line(doc: &ContentDocument, bundle: &LocaleBundle, year: i32) -> String {
    let mut parts = vec![doc.name.to_uppercase()];
    if let Some(role) = bundle.roles.first() {
        parts.push(role.to_uppercase());
    }
    if !bundle.location.is_empty() {
        parts.push(bundle.location.to_uppercase());
    }
    format!("© {year} {}", parts.join(" — "))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::locale::MemoryStore;
    use crate::nav::fake::FakeViewport;
    use crate::profile::{fixtures, parse_profile};
    use crate::stack::StackCard;

    fn doc() -> ContentDocument {
        parse_profile(&fixtures::document()).unwrap()
    }

    #[test]
    fn test_stack_scenario() {
        let raw = fixtures::document_with_stack(
            json!({ "Android": ["Kotlin — primary language", "Jetpack Compose"] }),
        );
        let doc = parse_profile(&raw).unwrap();
        let mut state = PageState::new(&doc, &MemoryStore::default());
        state.select_category(&doc, "Android").unwrap();

        let cards = state.stack.cards(&doc.tech_stack);
        assert_eq!(
            cards,
            vec![
                StackCard {
                    name: "Kotlin".to_string(),
                    description: "primary language".to_string(),
                },
                StackCard {
                    name: "Jetpack Compose".to_string(),
                    description: "Core implementation and delivery.".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_first_load_scenario() {
        let doc = doc();
        let store = MemoryStore::default();
        let state = PageState::new(&doc, &store);
        assert_eq!(state.locale, Locale::En);

        let links = nav_links(doc.bundle(state.locale));
        let pairs: Vec<(&str, &str)> = links
            .iter()
            .map(|l| (l.section.id(), l.label.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("about", "About en"),
                ("experience", "Experience en"),
                ("projects", "Projects en"),
                ("stack", "Stack en"),
                ("contact", "Contact en"),
            ]
        );
        assert!(!state.nav.menu_open());
        assert!(!state.tilt.hovering());
    }

    #[test]
    fn test_failed_load_scenario() {
        let failed: Result<Arc<ContentDocument>, ProfileError> =
            Err(ProfileError::Fetch("HTTP 404".to_string()));
        let state = ContentState::from_load(Some(&failed));
        assert_eq!(state, ContentState::Loading);
        assert!(state.document().is_none());

        assert_eq!(ContentState::from_load(None), ContentState::Loading);

        let loaded = Ok(Arc::new(doc()));
        assert!(ContentState::from_load(Some(&loaded)).document().is_some());
    }

    #[test]
    fn test_restores_persisted_locale() {
        let doc = doc();
        let mut store = MemoryStore(Some("uk".to_string()));
        let mut state = PageState::new(&doc, &store);
        assert_eq!(state.locale, Locale::Uk);
        assert_eq!(nav_links(doc.bundle(state.locale))[0].label, "About uk");

        let mut reveal = RevealTracker::default();
        assert_eq!(state.select_locale(&mut store, &mut reveal, "ru"), Ok(true));
        assert_eq!(store.0.as_deref(), Some("ru"));
        assert!(state.select_locale(&mut store, &mut reveal, "xx").is_err());
        assert_eq!(state.locale, Locale::Ru);

        // a reload picks the last choice back up
        assert_eq!(PageState::new(&doc, &store).locale, Locale::Ru);
    }

    #[test]
    fn test_reselecting_active_locale_keeps_pending_blocks() {
        let doc = doc();
        let mut store = MemoryStore::default();
        let mut state = PageState::new(&doc, &store);
        let mut reveal = RevealTracker::default();
        reveal.mark("hero-title");
        reveal.mark("exp-0");
        assert!(reveal.record("hero-title", 1.0));

        // nothing re-renders, so the marked blocks must survive
        assert_eq!(state.select_locale(&mut store, &mut reveal, "en"), Ok(false));
        assert_eq!(reveal.pending(), 1);
        assert!(reveal.record("exp-0", 0.5));
        assert!(reveal.is_visible("exp-0"));
    }

    #[test]
    fn test_locale_switch_rescans_blocks() {
        let doc = doc();
        let mut store = MemoryStore::default();
        let mut state = PageState::new(&doc, &store);
        let mut reveal = RevealTracker::default();
        reveal.mark("hero-title");
        reveal.mark("exp-0");
        assert!(reveal.record("hero-title", 1.0));

        assert_eq!(state.select_locale(&mut store, &mut reveal, "uk"), Ok(true));
        assert_eq!(state.locale, Locale::Uk);
        assert_eq!(reveal.pending(), 0);
        assert!(reveal.is_visible("hero-title"));
        // unmarked until the re-rendered block registers again
        assert!(!reveal.record("exp-0", 1.0));
        reveal.mark("exp-0");
        assert!(reveal.record("exp-0", 1.0));
    }

    #[test]
    fn test_unsupported_locale_leaves_blocks_alone() {
        let doc = doc();
        let mut store = MemoryStore::default();
        let mut state = PageState::new(&doc, &store);
        let mut reveal = RevealTracker::default();
        reveal.mark("exp-0");

        assert_eq!(
            state.select_locale(&mut store, &mut reveal, "de"),
            Err(LocaleError::Unsupported("de".to_string()))
        );
        assert_eq!(state.locale, Locale::En);
        assert_eq!(store.0, None);
        assert!(reveal.record("exp-0", 1.0));
    }

    #[test]
    fn test_navigation_from_menu() {
        let doc = doc();
        let mut state = PageState::new(&doc, &MemoryStore::default());
        let mut viewport = FakeViewport::with_sections(&[(SectionId::Projects, 2500.0)]);
        state.nav.open_menu();
        let links = nav_links(doc.bundle(state.locale));
        assert_eq!(links[2].section, SectionId::Projects);
        assert_eq!(
            state.nav.navigate_to(&mut viewport, links[2].section),
            Ok(2400.0)
        );
        assert!(!state.nav.menu_open());
    }

    #[test]
    fn test_nav_links_mismatched_lengths() {
        let mut bundle = doc().bundle(Locale::En).clone();
        bundle.nav.truncate(3);
        assert_eq!(nav_links(&bundle).len(), 3);

        bundle.nav.extend(["a", "b", "c", "d"].map(String::from));
        let links = nav_links(&bundle);
        assert_eq!(links.len(), 5);
        assert_eq!(links[4].section, SectionId::Contact);
        assert_eq!(links[4].label, "b");
    }

    #[test]
    fn test_hero_lines() {
        assert_eq!(
            hero_lines("BUILDING<br/>MOBILE<br/>PRODUCTS"),
            vec!["BUILDING", "MOBILE", "PRODUCTS"]
        );
        assert_eq!(hero_lines("ONE LINE"), vec!["ONE LINE"]);
    }

    #[test]
    fn test_numbering() {
        assert_eq!(card_number(0), "01");
        assert_eq!(card_number(9), "10");
        assert_eq!(bullet_number(0), "[1]");
        assert_eq!(bullet_number(4), "[5]");
    }

    #[test]
    fn test_footer_line() {
        let doc = doc();
        assert_eq!(
            footer_line(&doc, doc.bundle(Locale::En), 2031),
            "© 2031 NAZAR KUZENKO — MOBILE LEAD — KYIV EN"
        );
        assert!(current_year() >= 2024);
    }
}

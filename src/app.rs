mod avatar;
mod content;
mod footer;
mod header;
mod homepage;
mod resume;
mod stack;

use std::sync::Arc;

use codee::string::FromToStringCodec;
use leptos::{ev::MouseEvent, html, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::storage::use_local_storage;
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::config::LOCALE_STORAGE_KEY;
use crate::locale::{Locale, LocaleStore};
use crate::nav::SectionId;
use crate::page::PageState;
use crate::profile::{ContentDocument, LocaleBundle};
use crate::reveal::{self, Observe, RevealTracker};

use header::WindowViewport;
use homepage::HomePage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="bg-black text-white antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

/// Locale slot in the browser's local storage.
#[derive(Debug, Clone, Copy)]
pub struct BrowserLocaleStore {
    stored: Signal<String>,
    set_stored: WriteSignal<String>,
}

impl BrowserLocaleStore {
    pub fn new() -> Self {
        let (stored, set_stored, _) =
            use_local_storage::<String, FromToStringCodec>(LOCALE_STORAGE_KEY);
        Self { stored, set_stored }
    }
}

impl LocaleStore for BrowserLocaleStore {
    fn get(&self) -> Option<String> {
        let code = self.stored.get_untracked();
        if code.is_empty() {
            None
        } else {
            Some(code)
        }
    }

    fn set(&mut self, code: &str) {
        self.set_stored.set(code.to_string());
    }
}

/// Intersection observer backed by `leptos-use`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntersectionObserve;

impl Observe<NodeRef<html::Div>> for IntersectionObserve {
    fn observe<F>(&self, target: NodeRef<html::Div>, threshold: f64, mut on_ratio: F)
    where
        F: FnMut(f64) + 'static,
    {
        use_intersection_observer_with_options(
            target,
            move |entries, _| {
                for entry in entries {
                    on_ratio(entry.intersection_ratio());
                }
            },
            UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
        );
    }
}

/// Everything the sections share once the document has loaded.
#[derive(Debug, Clone, Copy)]
pub struct Page {
    doc: StoredValue<Arc<ContentDocument>>,
    pub state: RwSignal<PageState>,
    pub reveal: RwSignal<RevealTracker>,
    pub locale: Memo<Locale>,
    store: BrowserLocaleStore,
}

impl Page {
    pub fn new(doc: Arc<ContentDocument>) -> Self {
        let store = BrowserLocaleStore::new();
        let state = RwSignal::new(PageState::new(&doc, &store));
        let locale = Memo::new(move |_| state.with(|s| s.locale));
        Self {
            doc: StoredValue::new(doc),
            state,
            reveal: RwSignal::new(RevealTracker::default()),
            locale,
            store,
        }
    }

    pub fn document(&self) -> Arc<ContentDocument> {
        self.doc.get_value()
    }

    /// Bundle for the active locale. Sections are rebuilt by the page when the
    /// locale changes, so this doesn't subscribe.
    pub fn bundle(&self) -> LocaleBundle {
        let locale = self.locale.get_untracked();
        self.doc.with_value(|doc| doc.bundle(locale).clone())
    }

    pub fn select_locale(&self, code: &str) {
        let mut store = self.store;
        let state = self.state;
        // state is written once the tracker guard is released
        let picked = self.reveal.try_update_untracked(|reveal| {
            let mut next = state.get_untracked();
            next.select_locale(&mut store, reveal, code)
                .map(|changed| changed.then_some(next))
        });
        match picked {
            Some(Ok(Some(next))) => {
                log::debug!("locale switched to {}", next.locale);
                state.set(next);
            }
            Some(Ok(None)) | None => {}
            Some(Err(e)) => log::warn!("{e}"),
        }
    }

    pub fn select_category(&self, name: &str) {
        let doc = self.document();
        if let Some(Err(e)) = self.state.try_update(|s| s.select_category(&doc, name)) {
            log::warn!("{e}");
        }
    }

    pub fn navigate(&self, ev: MouseEvent, section: SectionId) {
        ev.prevent_default();
        if let Some(Err(e)) = self
            .state
            .try_update(|s| s.nav.navigate_to(&mut WindowViewport, section))
        {
            log::debug!("{e}");
        }
    }
}

/// Block that fades in the first time it scrolls into view.
#[component]
pub fn Fade(
    #[prop(into)] name: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let reveal = expect_context::<Page>().reveal;
    let node = NodeRef::<html::Div>::new();
    reveal.update_untracked(|tracker| {
        reveal::watch(
            &IntersectionObserve,
            tracker,
            node,
            name.clone(),
            move |key, ratio| {
                reveal.maybe_update(|r| r.record(key, ratio));
            },
        )
    });
    let class = move || {
        if reveal.with(|r| r.is_visible(&name)) {
            format!("section-fade visible {class}")
        } else {
            format!("section-fade {class}")
        }
    };
    view! {
        <div node_ref=node class=class>
            {children()}
        </div>
    }
}

use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::locale::Locale;
use crate::nav::{SectionId, Viewport};
use crate::page::nav_links;

use super::Page;

/// The browser window as a scrolling surface.
pub struct WindowViewport;

impl Viewport for WindowViewport {
    fn section_top(&self, section: SectionId) -> Option<f64> {
        let el = document().get_element_by_id(section.id())?;
        let body_top = document().body()?.get_bounding_client_rect().top();
        Some(el.get_bounding_client_rect().top() - body_top)
    }

    fn scroll_to(&mut self, top: f64) {
        let opts = ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&opts);
    }
}

#[component]
pub fn ProgressBar() -> impl IntoView {
    let state = expect_context::<Page>().state;
    view! {
        <div
            class="fixed top-0 left-0 h-[2px] bg-white z-[200] transition-all duration-300"
            style:width=move || state.with(|s| s.nav.progress_width())
        ></div>
    }
}

#[component]
fn LocaleButtons(#[prop(optional)] in_menu: bool) -> impl IntoView {
    let page = expect_context::<Page>();
    Locale::ALL
        .into_iter()
        .map(|locale| {
            let class = move || {
                let active = page.locale.get() == locale;
                match (in_menu, active) {
                    (false, true) => "text-[9px] font-bold px-2 py-1 border rounded-sm border-white text-white",
                    (false, false) => "text-[9px] font-bold px-2 py-1 border rounded-sm border-white/10 text-zinc-600 hover:text-zinc-400",
                    (true, true) => "px-4 py-2 border rounded-full text-xs font-bold bg-white text-black",
                    (true, false) => "px-4 py-2 border rounded-full text-xs font-bold border-white/10 text-white",
                }
            };
            view! {
                <button
                    class=class
                    on:click=move |_| {
                        page.select_locale(locale.code());
                        if in_menu {
                            page.state.update(|s| s.nav.close_menu());
                        }
                    }
                >
                    {locale.label()}
                </button>
            }
        })
        .collect_view()
}

#[component]
pub fn Navbar() -> impl IntoView {
    let page = expect_context::<Page>();
    let doc = page.document();
    let links = nav_links(&page.bundle())
        .into_iter()
        .map(|link| {
            view! {
                <a
                    href=link.section.href()
                    on:click=move |ev| page.navigate(ev, link.section)
                    class="text-[10px] font-bold uppercase tracking-[0.4em] text-zinc-500 hover:text-white transition-all"
                >
                    {link.label}
                </a>
            }
        })
        .collect_view();
    let initials = doc
        .name
        .split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect::<String>();
    let surname = doc
        .name
        .split_whitespace()
        .last()
        .map(str::to_uppercase)
        .unwrap_or_default();

    let nav_class = move || {
        if page.state.with(|s| s.nav.scrolled()) {
            "fixed top-0 w-full z-[150] transition-all duration-500 px-6 lg:px-12 bg-black/80 backdrop-blur-md border-b border-white/5 py-4"
        } else {
            "fixed top-0 w-full z-[150] transition-all duration-500 px-6 lg:px-12 py-10"
        }
    };

    view! {
        <nav class=nav_class>
            <div class="max-w-[1600px] mx-auto flex justify-between items-center">
                <div class="flex items-center gap-12">
                    <a
                        href="#"
                        on:click=move |ev| page.navigate(ev, SectionId::About)
                        class="font-black tracking-tighter text-2xl flex items-center gap-2"
                    >
                        <span class="font-mono bg-white text-black px-1.5 py-0.5 rounded-sm">
                            {initials}
                        </span>
                        <span class="hidden sm:inline-block">{surname}</span>
                    </a>
                    <div class="hidden lg:flex space-x-8 items-center">{links}</div>
                </div>
                <div class="flex items-center gap-8">
                    <div class="hidden md:flex gap-4 items-center">
                        <LocaleButtons />
                    </div>
                    <button
                        on:click=move |_| page.state.update(|s| s.nav.open_menu())
                        class="lg:hidden text-2xl"
                        aria-label="Open menu"
                    >
                        "☰"
                    </button>
                    <a
                        href=doc.contacts.telegram.url.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="hidden sm:flex items-center gap-2 px-6 py-2.5 bg-white text-black text-[10px] font-black uppercase tracking-widest rounded-full hover:scale-105 transition-transform"
                    >
                        "Direct"
                    </a>
                </div>
            </div>
        </nav>
    }
}

#[component]
pub fn MobileMenu() -> impl IntoView {
    let page = expect_context::<Page>();
    let open = Memo::new(move |_| page.state.with(|s| s.nav.menu_open()));
    let close = move |_| page.state.update(|s| s.nav.close_menu());
    let links = nav_links(&page.bundle())
        .into_iter()
        .map(|link| {
            view! {
                <a
                    href=link.section.href()
                    on:click=move |ev| page.navigate(ev, link.section)
                    class="text-6xl font-bold tracking-tighter hover:text-zinc-600 transition-colors"
                >
                    {link.label}
                </a>
            }
        })
        .collect_view();

    view! {
        <div class=move || {
            if open.get() {
                "fixed inset-0 z-[200] transition-all duration-700 visible opacity-100"
            } else {
                "fixed inset-0 z-[200] transition-all duration-700 invisible opacity-0 pointer-events-none"
            }
        }>
            <div class="absolute inset-0 bg-black/95 backdrop-blur-3xl" on:click=close></div>
            <div class=move || {
                if open.get() {
                    "absolute right-0 top-0 h-full w-full max-w-md bg-zinc-950 p-12 flex flex-col justify-center gap-12 transition-transform duration-700 translate-x-0"
                } else {
                    "absolute right-0 top-0 h-full w-full max-w-md bg-zinc-950 p-12 flex flex-col justify-center gap-12 transition-transform duration-700 translate-x-full"
                }
            }>
                <button on:click=close class="absolute top-12 right-12 text-3xl" aria-label="Close menu">
                    "✕"
                </button>
                {links}
                <div class="flex gap-4 mt-20">
                    <LocaleButtons in_menu=true />
                </div>
            </div>
        </div>
    }
}

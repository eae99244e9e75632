use std::sync::Arc;

use leptos::{either::Either, prelude::*};
use leptos_meta::{Meta, Title};
use leptos_use::use_window_scroll;

use crate::nav::SectionId;
use crate::page::{hero_lines, ContentState};
use crate::profile::ContentDocument;

use super::avatar::TiltPhoto;
use super::content::load_profile;
use super::footer::Footer;
use super::header::{MobileMenu, Navbar, ProgressBar};
use super::resume::{ExperienceList, Expertise, ProjectGrid};
use super::stack::StackPanel;
use super::{Fade, Page};

#[component]
pub fn HomePage() -> impl IntoView {
    let profile = LocalResource::new(load_profile);
    let content = Memo::new(move |_| ContentState::from_load(profile.get().as_ref()));

    move || match content.get() {
        ContentState::Loading => Either::Left(view! { <Loader /> }),
        ContentState::Ready(doc) => Either::Right(view! { <Portfolio doc=doc /> }),
    }
}

#[component]
fn Loader() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-black flex items-center justify-center">
            <div class="w-8 h-8 border-2 border-white/20 border-t-white rounded-full animate-spin"></div>
        </div>
    }
}

#[component]
fn Portfolio(doc: Arc<ContentDocument>) -> impl IntoView {
    let page = Page::new(doc);
    provide_context(page);

    let state = page.state;
    let (_, scroll_y) = use_window_scroll();
    Effect::new(move |_| {
        let y = scroll_y.get();
        state.maybe_update(|s| s.nav.on_scroll(y));
    });

    view! {
        <div class="relative z-10">
            <ProgressBar />
            {move || {
                page.locale.track();
                let bundle = page.bundle();
                view! {
                    <Title text=bundle.seo.title.clone() />
                    <Meta name="description" content=bundle.seo.description.clone() />
                    <Navbar />
                    <Hero />
                    <Expertise />
                    <ExperienceList />
                    <ProjectGrid />
                    <StackPanel />
                    <Footer />
                    <MobileMenu />
                }
            }}
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let page = expect_context::<Page>();
    let doc = page.document();
    let bundle = page.bundle();
    let lines = hero_lines(&bundle.hero_title)
        .into_iter()
        .map(|line| view! { <span class="block">{line.to_string()}</span> })
        .collect_view();
    let roles = bundle
        .roles
        .iter()
        .map(|role| {
            view! {
                <span class="font-mono text-zinc-400 text-sm border border-white/10 px-4 py-2 rounded-full">
                    {role.clone()}
                </span>
            }
        })
        .collect_view();

    view! {
        <section id={SectionId::About.id()} class="min-h-screen flex flex-col justify-center px-6 lg:px-12 pt-40">
            <div class="max-w-[1600px] mx-auto w-full">
                <Fade name="hero-status" class="flex items-center gap-3 mb-8">
                    <div class="w-2 h-2 rounded-full bg-green-500 animate-pulse"></div>
                    <span class="font-mono text-[10px] text-zinc-500 tracking-widest uppercase">
                        {format!("{} — ACTIVE NOW", bundle.location)}
                    </span>
                </Fade>
                <div class="grid grid-cols-1 lg:grid-cols-12 gap-12 items-center mb-16">
                    <div class="lg:col-span-8">
                        <Fade name="hero-title">
                            <h1 class="text-6xl md:text-8xl font-bold leading-[0.85] tracking-tighter">
                                {lines}
                            </h1>
                        </Fade>
                    </div>
                    <Fade name="hero-photo" class="lg:col-span-4 flex justify-center lg:justify-end">
                        <TiltPhoto name=doc.name.clone() />
                    </Fade>
                </div>
                <Fade name="hero-intro" class="grid grid-cols-1 lg:grid-cols-12 gap-12 items-start">
                    <div class="lg:col-span-7 space-y-12">
                        <div class="flex flex-wrap gap-4">{roles}</div>
                        <p class="text-3xl md:text-5xl text-zinc-500 leading-tight font-light">
                            {bundle.hero_desc.clone()} " "
                            <span class="text-white italic">{bundle.hero_focus.clone()}</span>
                        </p>
                    </div>
                    <div class="lg:col-span-5 lg:pl-20 space-y-8">
                        <p class="text-zinc-400 text-lg leading-relaxed font-light">
                            {bundle.about.clone()}
                        </p>
                        <div class="flex gap-6">
                            <a
                                href=doc.contacts.github.url.clone()
                                target="_blank"
                                rel="noopener noreferrer"
                                class="p-4 border border-white/5 rounded-full hover:bg-white hover:text-black transition-all"
                                aria-label="GitHub Profile"
                            >
                                <i class="devicon-github-plain text-2xl"></i>
                            </a>
                            <a
                                href=doc.contacts.email.url.clone()
                                class="p-4 border border-white/5 rounded-full hover:bg-white hover:text-black transition-all"
                                aria-label=doc.contacts.email.display.clone()
                            >
                                "✉"
                            </a>
                        </div>
                    </div>
                </Fade>
            </div>
        </section>
    }
}

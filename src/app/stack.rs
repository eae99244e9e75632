use leptos::prelude::*;

use crate::nav::SectionId;

use super::{Fade, Page};

#[component]
pub fn StackPanel() -> impl IntoView {
    let page = expect_context::<Page>();
    let bundle = page.bundle();
    let doc = page.document();
    let state = page.state;

    let active = Memo::new(move |_| state.with(|s| s.stack.active().map(str::to_string)));
    let cards = {
        let doc = doc.clone();
        Memo::new(move |_| {
            active.track();
            state.with_untracked(|s| s.stack.cards(&doc.tech_stack))
        })
    };

    let categories = doc
        .tech_stack
        .categories()
        .map(|name| {
            let name = name.to_string();
            let is_active = {
                let name = name.clone();
                move || active.with(|a| a.as_deref() == Some(name.as_str()))
            };
            let select = {
                let name = name.clone();
                move |_| page.select_category(&name)
            };
            let class = {
                let is_active = is_active.clone();
                move || {
                    if is_active() {
                        "flex items-center justify-between px-6 py-4 rounded-xl text-left transition-all bg-black text-white shadow-2xl"
                    } else {
                        "flex items-center justify-between px-6 py-4 rounded-xl text-left transition-all text-zinc-400 hover:text-black hover:bg-zinc-100"
                    }
                }
            };
            view! {
                <button class=class on:click=select>
                    <span class="text-sm font-bold uppercase tracking-widest">{name}</span>
                    <span class=move || if is_active() { "opacity-100" } else { "opacity-0" }>"›"</span>
                </button>
            }
        })
        .collect_view();

    view! {
        <section
            id={SectionId::Stack.id()}
            class="py-40 px-6 lg:px-12 bg-white text-black rounded-t-[4rem]"
        >
            <Fade name="stack" class="max-w-[1600px] mx-auto">
                <div class="grid grid-cols-1 lg:grid-cols-12 gap-20">
                    <div class="lg:col-span-4">
                        <div class="sticky top-40 space-y-12">
                            <div class="space-y-4">
                                <div class="font-mono text-[10px] text-zinc-400 tracking-[0.5em] uppercase">
                                    {bundle.sections.stack}
                                </div>
                                <h2 class="text-6xl font-bold tracking-tighter leading-[0.9]">
                                    "TECHNICAL ARCHITECTURE."
                                </h2>
                            </div>
                            <div class="flex flex-col gap-2">{categories}</div>
                        </div>
                    </div>
                    <div class="lg:col-span-8">
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                            {move || {
                                cards
                                    .get()
                                    .into_iter()
                                    .map(|card| {
                                        view! {
                                            <div class="bg-zinc-50 p-10 rounded-2xl border border-zinc-100 hover:border-black transition-all group">
                                                <div class="flex items-center gap-4 mb-4">
                                                    <div class="w-8 h-8 rounded-lg bg-white shadow-sm flex items-center justify-center text-zinc-400 group-hover:text-black transition-colors">
                                                        "</>"
                                                    </div>
                                                    <span class="text-xl font-bold tracking-tighter">{card.name}</span>
                                                </div>
                                                <p class="text-sm text-zinc-500 leading-relaxed font-light">
                                                    {card.description}
                                                </p>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </div>
                </div>
            </Fade>
        </section>
    }
}

use leptos::prelude::*;

use crate::nav::SectionId;
use crate::page::{current_year, footer_line};

use super::{Fade, Page};

#[component]
pub fn Footer() -> impl IntoView {
    let page = expect_context::<Page>();
    let doc = page.document();
    let bundle = page.bundle();
    let copyright = footer_line(&doc, &bundle, current_year());
    let languages = bundle
        .lang_levels
        .iter()
        .map(|lang| {
            view! {
                <div class="space-y-1">
                    <div class="text-3xl font-bold tracking-tighter">{lang.name.clone()}</div>
                    <div class="font-mono text-[9px] text-zinc-600 uppercase tracking-widest">
                        {lang.level.clone()}
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <footer
            id={SectionId::Contact.id()}
            class="py-40 px-6 lg:px-12 bg-black relative overflow-hidden"
        >
            <Fade name="footer" class="max-w-[1600px] mx-auto text-center">
                <div class="font-mono text-[10px] text-zinc-600 tracking-[0.5em] uppercase mb-8">
                    {bundle.sections.languages.clone()}
                </div>
                <div class="flex flex-wrap justify-center gap-12 mb-32">{languages}</div>
                <h2 class="text-6xl md:text-8xl font-bold tracking-tighter leading-[0.8] mb-32">
                    {bundle.sections.cta_title.clone()}
                </h2>
                <div class="flex flex-wrap justify-center gap-6 mb-40">
                    <a
                        href=doc.contacts.telegram.url.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="px-16 py-8 bg-white text-black text-2xl font-bold rounded-2xl hover:scale-105 transition-transform"
                    >
                        "Telegram"
                    </a>
                    <a
                        href=doc.contacts.email.url.clone()
                        class="px-16 py-8 border border-white/10 text-2xl font-bold rounded-2xl hover:bg-white hover:text-black transition-all"
                    >
                        "Email"
                    </a>
                    <a
                        href=doc.contacts.phone.url.clone()
                        class="px-16 py-8 border border-white/10 text-2xl font-bold rounded-2xl hover:bg-white hover:text-black transition-all"
                    >
                        {doc.contacts.phone.display.clone()}
                    </a>
                </div>
                <div class="flex flex-col md:flex-row justify-between items-center py-12 border-t border-white/5">
                    <div class="font-mono text-[9px] text-zinc-600 tracking-widest uppercase mb-8 md:mb-0">
                        {copyright}
                    </div>
                    <div class="flex gap-12">
                        <a
                            href=doc.contacts.github.url.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="font-mono text-[9px] text-zinc-500 hover:text-white tracking-widest uppercase transition-colors"
                        >
                            "GitHub"
                        </a>
                        <div class="font-mono text-[9px] text-zinc-800 tracking-widest uppercase">
                            "Available for remote"
                        </div>
                    </div>
                </div>
            </Fade>
        </footer>
    }
}

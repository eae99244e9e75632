use leptos::prelude::*;

use crate::nav::SectionId;
use crate::page::{bullet_number, card_number};

use super::{Fade, Page};

#[component]
pub fn Expertise() -> impl IntoView {
    let bundle = expect_context::<Page>().bundle();
    let cards = bundle
        .specialization
        .into_iter()
        .enumerate()
        .map(|(i, spec)| {
            view! {
                <Fade
                    name=format!("spec-{i}")
                    class="group p-12 border border-white/5 hover:bg-white/[0.02] transition-all flex flex-col justify-between h-[450px]"
                >
                    <div class="space-y-12">
                        <div class="font-mono text-[10px] text-zinc-700">
                            {format!("{} / DOMAIN", card_number(i))}
                        </div>
                        <h3 class="text-3xl font-bold tracking-tighter leading-none">{spec.title}</h3>
                    </div>
                    <div class="space-y-6">
                        <div class="w-12 h-[1px] bg-zinc-800 group-hover:w-full transition-all duration-700"></div>
                        <p class="text-zinc-500 text-sm leading-relaxed">{spec.desc}</p>
                    </div>
                </Fade>
            }
        })
        .collect_view();

    view! {
        <section class="py-40 px-6 lg:px-12">
            <div class="max-w-[1600px] mx-auto">
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-1">{cards}</div>
            </div>
        </section>
    }
}

#[component]
pub fn ExperienceList() -> impl IntoView {
    let bundle = expect_context::<Page>().bundle();
    let jobs = bundle
        .experience
        .into_iter()
        .enumerate()
        .map(|(i, job)| {
            let details = job
                .details
                .into_iter()
                .enumerate()
                .map(|(j, detail)| {
                    view! {
                        <li class="flex gap-6 group/item">
                            <span class="font-mono text-zinc-800 mt-1.5 flex-shrink-0 text-[10px]">
                                {bullet_number(j)}
                            </span>
                            <p class="text-xl text-zinc-400 font-light leading-relaxed group-hover/item:text-zinc-200 transition-colors">
                                {detail}
                            </p>
                        </li>
                    }
                })
                .collect_view();
            view! {
                <Fade
                    name=format!("exp-{i}")
                    class="group grid grid-cols-1 lg:grid-cols-12 bg-black p-8 lg:p-20 hover:bg-zinc-950/50 transition-all"
                >
                    <div class="lg:col-span-4 mb-12 lg:mb-0">
                        <div class="font-mono text-[10px] text-zinc-600 mb-4">{job.period}</div>
                        <h3 class="text-4xl lg:text-6xl font-bold tracking-tighter mb-2">{job.company}</h3>
                        <div class="text-zinc-500 uppercase text-[10px] font-bold tracking-widest">
                            {job.role}
                        </div>
                    </div>
                    <div class="lg:col-span-8 lg:pl-20">
                        <ul class="space-y-8">{details}</ul>
                    </div>
                </Fade>
            }
        })
        .collect_view();

    view! {
        <section id={SectionId::Experience.id()} class="py-40 px-6 lg:px-12 bg-zinc-950/30">
            <div class="max-w-[1600px] mx-auto">
                <Fade name="exp-heading" class="space-y-4 mb-32">
                    <div class="font-mono text-[10px] text-zinc-600 tracking-[0.5em] uppercase">
                        {bundle.sections.experience}
                    </div>
                    <h2 class="text-5xl md:text-7xl font-bold tracking-tighter">"THE TRACK RECORD."</h2>
                </Fade>
                <div class="space-y-px bg-zinc-900 border border-zinc-900">{jobs}</div>
            </div>
        </section>
    }
}

#[component]
pub fn ProjectGrid() -> impl IntoView {
    let bundle = expect_context::<Page>().bundle();
    let projects = bundle
        .projects
        .into_iter()
        .enumerate()
        .map(|(i, project)| {
            view! {
                <Fade
                    name=format!("project-{i}")
                    class="group relative bg-zinc-950 border border-white/5 p-12 lg:p-16 overflow-hidden"
                >
                    <div class="relative z-10 space-y-12">
                        <div class="flex justify-between items-start">
                            <div class="font-mono text-[10px] text-zinc-700">{project.company}</div>
                            <div class="w-10 h-10 border border-white/10 rounded-full flex items-center justify-center group-hover:bg-white group-hover:text-black transition-all">
                                "›"
                            </div>
                        </div>
                        <h3 class="text-4xl lg:text-5xl font-bold tracking-tighter">{project.name}</h3>
                        <p class="text-zinc-500 text-lg font-light leading-relaxed max-w-lg">
                            {project.desc}
                        </p>
                        <div class="font-mono text-[10px] text-zinc-600 border-t border-zinc-900 pt-8 uppercase tracking-widest">
                            {project.tech}
                        </div>
                    </div>
                    <div class="absolute -bottom-20 -right-20 text-[15rem] font-black text-white/[0.01] pointer-events-none select-none">
                        {card_number(i)}
                    </div>
                </Fade>
            }
        })
        .collect_view();

    view! {
        <section id={SectionId::Projects.id()} class="py-40 px-6 lg:px-12 overflow-hidden">
            <div class="max-w-[1600px] mx-auto">
                <Fade name="projects-heading" class="flex items-center gap-6 mb-24">
                    <h2 class="text-[10px] font-mono text-zinc-500 uppercase tracking-[0.5em]">
                        {bundle.sections.projects}
                    </h2>
                    <div class="h-[1px] flex-grow bg-zinc-900"></div>
                </Fade>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">{projects}</div>
            </div>
        </section>
    }
}

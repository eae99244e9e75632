use leptos::{ev::MouseEvent, html, prelude::*};

use crate::config::PROFILE_PHOTO_URL;
use crate::tilt::Bounds;

use super::Page;

#[component]
pub fn TiltPhoto(name: String) -> impl IntoView {
    let state = expect_context::<Page>().state;
    let tilt = Memo::new(move |_| state.with(|s| s.tilt));
    let card_ref = NodeRef::<html::Div>::new();

    let on_move = move |ev: MouseEvent| {
        let Some(el) = card_ref.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let bounds = Bounds {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        };
        let (x, y) = (f64::from(ev.client_x()), f64::from(ev.client_y()));
        state.update(|s| s.tilt.pointer_move(bounds, x, y));
    };

    view! {
        <div
            node_ref=card_ref
            on:mousemove=on_move
            on:mouseenter=move |_| state.update(|s| s.tilt.pointer_enter())
            on:mouseleave=move |_| state.update(|s| s.tilt.pointer_leave())
            class="relative w-full aspect-square max-w-[500px] mx-auto lg:mx-0 group"
            style="perspective: 1000px"
        >
            <div
                class="relative w-full h-full transition-transform duration-200 ease-out"
                style:transform-style="preserve-3d"
                style:transform=move || tilt.get().card_transform()
            >
                <div class="absolute inset-0 bg-white/10 blur-[100px] rounded-full opacity-0 group-hover:opacity-100 transition-opacity duration-500"></div>
                <div class="relative w-full h-full rounded-2xl overflow-hidden border border-white/10 bg-zinc-900 shadow-2xl">
                    <img
                        src=PROFILE_PHOTO_URL
                        alt=name
                        class="w-full h-full object-cover grayscale group-hover:grayscale-0 transition-all duration-700"
                    />
                    <div class="absolute inset-0 bg-gradient-to-t from-black/80 via-transparent to-transparent opacity-60"></div>
                </div>
                <div
                    class="absolute -top-4 -right-4 bg-white text-black font-mono text-[10px] font-bold px-4 py-2 rounded-full shadow-xl transition-transform duration-300"
                    style:transform=move || tilt.get().badge_transform(50.0, 30.0)
                >
                    "SENIOR LEAD"
                </div>
                <div
                    class="absolute -bottom-4 -left-4 border border-white/20 bg-black/50 backdrop-blur-md font-mono text-[10px] px-4 py-2 rounded-full shadow-xl transition-transform duration-300"
                    style:transform=move || tilt.get().badge_transform(30.0, -20.0)
                >
                    "AVAILABLE"
                </div>
            </div>
        </div>
    }
}

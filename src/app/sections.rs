use leptos::{ev, html, prelude::*};
use web_sys::{HtmlDivElement, ScrollBehavior, ScrollToOptions};

use super::hooks::{use_entered, use_in_view, use_layout};
use super::icons::{Icon, IconKind};
use crate::motion::{
    card_motion, header_motion, scroll_step, styled, track_gap, track_padding, EasedScroll, Phase,
    ScrollState, ScrollStyle, SectionKind,
};

/// Section title with prev/next buttons, dimmed when they can't scroll.
#[component]
pub fn SectionHeader(
    title: &'static str,
    icon: IconKind,
    #[prop(optional)] on_prev: Option<Callback<()>>,
    #[prop(optional)] on_next: Option<Callback<()>>,
    #[prop(into)] can_prev: Signal<bool>,
    #[prop(into)] can_next: Signal<bool>,
) -> impl IntoView {
    let dim = |enabled: bool| {
        if enabled {
            "opacity-100"
        } else {
            "opacity-30 pointer-events-none"
        }
    };
    // without a callback the button still shows, dimmed
    let can_prev = Signal::derive(move || on_prev.is_some() && can_prev.get());
    let can_next = Signal::derive(move || on_next.is_some() && can_next.get());
    let buttons = view! {
        <div class="flex items-center gap-2">
            <button
                aria-label="Previous"
                disabled=move || !can_prev.get()
                on:click=move |_| {
                    if let Some(prev) = on_prev {
                        prev.run(());
                    }
                }
                class=move || {
                    format!(
                        "w-10 h-10 flex items-center justify-center rounded-full bg-white shadow-sm hover:shadow-md transition-all {}",
                        dim(can_prev.get()),
                    )
                }
            >
                <Icon kind=IconKind::ChevronLeft class="w-5 h-5" />
            </button>
            <button
                aria-label="Next"
                disabled=move || !can_next.get()
                on:click=move |_| {
                    if let Some(next) = on_next {
                        next.run(());
                    }
                }
                class=move || {
                    format!(
                        "w-10 h-10 flex items-center justify-center rounded-full bg-white shadow-sm hover:shadow-md transition-all {}",
                        dim(can_next.get()),
                    )
                }
            >
                <Icon kind=IconKind::ChevronRight class="w-5 h-5" />
            </button>
        </div>
    };

    view! {
        <div class="flex items-center justify-between max-w-[1440px] mx-auto px-4 md:px-10 mb-6">
            <div class="flex items-center gap-3">
                <span class="w-10 h-10 flex items-center justify-center rounded-full bg-slate-900 text-white">
                    <Icon kind=icon class="w-5 h-5" />
                </span>
                <h2 class="text-3xl md:text-4xl font-bold tracking-tight">{title}</h2>
            </div>
            {buttons}
        </div>
    }
}

fn now() -> Option<f64> {
    window().performance().map(|p| p.now())
}

/// Steps an eased scroll one animation frame at a time until it lands.
fn eased_scroll(el: HtmlDivElement, scroll: EasedScroll, started: f64) {
    request_animation_frame(move || {
        let elapsed = now().map_or(scroll.duration, |t| t - started);
        let (left, done) = scroll.position_at(elapsed);
        el.scroll_to_with_x_and_y(left, el.scroll_top() as f64);
        if !done {
            eased_scroll(el, scroll, started);
        }
    });
}

/// A horizontally scrolling deck of cards.
///
/// Cards start stacked into a deck and slide in after the entrance delay. Once
/// most of the section has been on screen they fan out into a row, and the row
/// stays fanned from then on.
#[component]
pub fn StackSection(
    kind: SectionKind,
    title: &'static str,
    icon: IconKind,
    cards: Vec<AnyView>,
) -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let track_ref = NodeRef::<html::Div>::new();
    let in_view = use_in_view(section_ref, kind.trigger());
    let entered = use_entered();
    let (width, layout) = use_layout();
    let (scroll, set_scroll) = signal(ScrollState::default());

    let check_scroll = move || {
        let Some(el) = track_ref.get_untracked() else {
            return;
        };
        let next = ScrollState::measure(
            el.scroll_left() as f64,
            el.scroll_width() as f64,
            el.client_width() as f64,
        );
        if next != scroll.get_untracked() {
            set_scroll.set(next);
        }
    };

    Effect::new(move |_| {
        if track_ref.get().is_some() {
            check_scroll();
        }
    });
    let on_resize = window_event_listener(ev::resize, move |_| check_scroll());
    on_cleanup(move || on_resize.remove());

    let scroll_by = move |direction: f64| {
        let Some(el) = track_ref.get_untracked() else {
            return;
        };
        let amount = direction * scroll_step(kind, layout.get_untracked(), width.get_untracked());
        match kind.scroll_style() {
            ScrollStyle::Native => {
                let options = ScrollToOptions::new();
                options.set_left(amount);
                options.set_behavior(ScrollBehavior::Smooth);
                el.scroll_by_with_scroll_to_options(&options);
            }
            ScrollStyle::Eased => {
                let Some(started) = now() else {
                    return;
                };
                let start = el.scroll_left() as f64;
                eased_scroll(el, EasedScroll::new(start, amount), started);
            }
        }
    };

    let header_style = move || {
        let (state, transition) = header_motion(layout.get(), in_view.get());
        styled(state, transition)
    };
    let track_style = move || {
        let padding = track_padding(kind, width.get());
        format!("padding-left: {padding}; padding-right: {padding};")
    };

    let total = cards.len();
    let cards = cards
        .into_iter()
        .enumerate()
        .map(|(index, card)| {
            let style = move || {
                let phase = Phase {
                    entered: entered.get(),
                    in_view: in_view.get(),
                };
                card_motion(kind, layout.get(), phase, index, total).css()
            };
            view! {
                <div class="relative flex-shrink-0 will-change-transform" style=style>
                    {card}
                </div>
            }
        })
        .collect_view();

    view! {
        <section
            id=kind.anchor_id()
            node_ref=section_ref
            class="w-full py-12 md:py-20 scroll-mt-12 overflow-visible"
        >
            <div style=header_style>
                <SectionHeader
                    title
                    icon
                    on_prev=Callback::new(move |_| scroll_by(-1.0))
                    on_next=Callback::new(move |_| scroll_by(1.0))
                    can_prev=Signal::derive(move || scroll.get().can_prev)
                    can_next=Signal::derive(move || scroll.get().can_next)
                />
            </div>
            // top padding leaves room for the deck's entrance without clipping
            <div
                node_ref=track_ref
                on:scroll=move |_| check_scroll()
                class="w-full overflow-x-auto overflow-y-visible scrollbar-hide pt-20 -mt-20 pb-6"
                style=track_style
            >
                <div class=format!("flex items-start w-max {}", track_gap(kind))>{cards}</div>
            </div>
        </section>
    }
}

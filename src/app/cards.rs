use std::time::Duration;

use leptos::{either::Either, ev::MouseEvent, html, prelude::*};

use crate::motion::{nudge, Spring, Transition, NUDGE_RESET_MS};
use crate::profile::{Education, Entry};

/// Hover push away from the pointer that springs back shortly after.
#[derive(Clone, Copy)]
struct Nudge {
    node_ref: NodeRef<html::Div>,
    offset: ReadSignal<(f64, f64)>,
    set_offset: WriteSignal<(f64, f64)>,
    divisor: f64,
}

impl Nudge {
    fn new(divisor: f64) -> Self {
        let (offset, set_offset) = signal((0.0, 0.0));
        Self {
            node_ref: NodeRef::new(),
            offset,
            set_offset,
            divisor,
        }
    }

    fn push(self, ev: &MouseEvent) {
        let Some(el) = self.node_ref.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        self.set_offset.set(nudge(
            (ev.client_x() as f64, ev.client_y() as f64),
            (rect.left(), rect.top()),
            (rect.width(), rect.height()),
            self.divisor,
        ));
        set_timeout(
            move || self.reset(),
            Duration::from_millis(NUDGE_RESET_MS),
        );
    }

    fn reset(self) {
        self.set_offset.set((0.0, 0.0));
    }

    fn style(self) -> impl Fn() -> String {
        let transition = Transition::spring(Spring::SLIDE).css();
        move || {
            let (x, y) = self.offset.get();
            format!("transform: translate3d({x}px, {y}px, 0); transition: {transition};")
        }
    }
}

/// Card for the experience and projects decks. Links to its detail page when it has one.
#[component]
pub fn ExperienceCard(entry: Entry) -> impl IntoView {
    let colors = entry.color.palette();
    let nudge = Nudge::new(8.0);

    let card = view! {
        <div
            node_ref=nudge.node_ref
            on:mouseenter=move |ev| nudge.push(&ev)
            on:mouseleave=move |_| nudge.reset()
            style=nudge.style()
            class=format!(
                "relative flex flex-col justify-between w-[88vw] h-[460px] md:w-[430px] md:h-[580px] p-6 md:p-8 rounded-card shadow-md overflow-hidden {} {}",
                colors.bg,
                colors.text,
            )
        >
            <div>
                <span class=format!(
                    "inline-block px-3 py-1 rounded-full text-sm font-medium {}",
                    colors.badge,
                )>{entry.date}</span>
                <h3 class="mt-6 text-3xl md:text-4xl font-bold leading-tight">{entry.title}</h3>
                <p class=format!("mt-2 text-lg font-medium {}", colors.text_secondary)>
                    {entry.role}
                </p>
            </div>
            <div>
                <p class=format!("text-base md:text-lg leading-relaxed {}", colors.text_secondary)>
                    {entry.description}
                </p>
                <span class=format!(
                    "mt-6 inline-flex items-center px-5 py-2 rounded-full text-sm font-semibold {}",
                    colors.button,
                )>"Read More"</span>
            </div>
        </div>
    };

    match entry.link {
        Some(href) => Either::Left(view! {
            <a href=href class="block cursor-pointer">
                {card}
            </a>
        }),
        None => Either::Right(card),
    }
}

#[component]
pub fn EducationCard(education: Education) -> impl IntoView {
    let colors = education.color.palette();
    let nudge = Nudge::new(10.0);

    let logo = match education.logo {
        Some(src) => Either::Left(view! {
            <img src=src alt=education.school class="w-16 h-16 object-contain" />
        }),
        None => Either::Right(view! {
            <span class="text-3xl font-bold">{education.initial()}</span>
        }),
    };

    view! {
        <div
            node_ref=nudge.node_ref
            on:mouseenter=move |ev| nudge.push(&ev)
            on:mouseleave=move |_| nudge.reset()
            style=nudge.style()
            class=format!(
                "relative flex flex-col justify-between w-[89vw] aspect-[3/4] md:w-[430px] md:h-[573px] md:aspect-auto p-6 md:p-8 rounded-card shadow-md overflow-hidden {} {}",
                colors.bg,
                colors.text,
            )
        >
            <div class="flex items-start justify-between">
                <div class=format!(
                    "w-24 h-24 flex items-center justify-center rounded-2xl {}",
                    colors.logo_bg,
                )>{logo}</div>
                <span class=format!(
                    "px-3 py-1 rounded-full text-sm font-medium {}",
                    colors.badge,
                )>{education.year}</span>
            </div>
            <div>
                <h3 class="text-3xl md:text-4xl font-bold leading-tight">{education.school}</h3>
                <p class=format!("mt-2 text-lg {}", colors.text_secondary)>{education.degree}</p>
            </div>
        </div>
    }
}

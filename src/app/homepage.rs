use leptos::{ev, html, prelude::*};
use leptos_meta::Title;
use leptos_use::use_interval_fn;

use super::cards::{EducationCard, ExperienceCard};
use super::footer::Footer;
use super::hooks::{use_in_view, use_mounted, viewport_height};
use super::icons::IconKind;
use super::navbar::Navbar;
use super::sections::{SectionHeader, StackSection};
use crate::motion::{
    is_halfway_past, pop_up_motion, rise_motion, styled, SectionKind, Spring, ViewTrigger,
    WordCycle,
};
use crate::profile::{
    ABOUT, CREDENTIALS, EDUCATION, EXPERIENCE, GHOST_WORD, HERO_LEAD, HERO_SUBTITLE, HERO_TAIL,
    MANIFESTO, OWNER, PRE_FOOTER, PROJECTS, ROTATE_INTERVAL_MS, ROTATING_WORDS,
};

#[component]
pub fn HomePage() -> impl IntoView {
    let education_ref = NodeRef::<html::Div>::new();
    let (dark_bg, set_dark_bg) = signal(false);

    // darken once the education deck is more than half scrolled away
    let check_background = move || {
        let Some(el) = education_ref.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let dark = is_halfway_past(rect.top(), rect.bottom(), viewport_height());
        if dark != dark_bg.get_untracked() {
            set_dark_bg.set(dark);
        }
    };
    Effect::new(move |_| {
        if education_ref.get().is_some() {
            check_background();
        }
    });
    let on_scroll = window_event_listener(ev::scroll, move |_| check_background());
    on_cleanup(move || on_scroll.remove());

    let experience = EXPERIENCE
        .iter()
        .map(|entry| view! { <ExperienceCard entry=*entry /> }.into_any())
        .collect::<Vec<_>>();
    let projects = PROJECTS
        .iter()
        .map(|entry| view! { <ExperienceCard entry=*entry /> }.into_any())
        .collect::<Vec<_>>();
    let education = EDUCATION
        .iter()
        .map(|education| view! { <EducationCard education=*education /> }.into_any())
        .collect::<Vec<_>>();

    view! {
        <Title text=OWNER />
        <div class=move || {
            format!(
                "min-h-screen overflow-x-clip transition-colors duration-700 {}",
                if dark_bg.get() { "bg-violet-300" } else { "bg-bg-main" },
            )
        }>
            <Navbar dark_bg />
            <main>
                <Hero />
                <div class="pb-20">
                    <StackSection
                        kind=SectionKind::Experience
                        title="Experience"
                        icon=IconKind::Briefcase
                        cards=experience
                    />
                    <LogoRow />
                    <StackSection
                        kind=SectionKind::Projects
                        title="Projects"
                        icon=IconKind::Rocket
                        cards=projects
                    />
                    <div node_ref=education_ref>
                        <StackSection
                            kind=SectionKind::Education
                            title="Education"
                            icon=IconKind::GraduationCap
                            cards=education
                        />
                    </div>
                </div>
                <About />
                <PreFooter />
            </main>
            <Footer />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let mounted = use_mounted();
    let (cycle, set_cycle) = signal(WordCycle::default());
    use_interval_fn(
        move || set_cycle.update(|cycle| cycle.advance(ROTATING_WORDS.len())),
        ROTATE_INTERVAL_MS,
    );
    let word_animation = |keyframes: &str| {
        format!(
            "animation: {keyframes} {}ms {} both;",
            Spring::FALLING.duration_ms(),
            Spring::FALLING.css_easing()
        )
    };
    let fall = word_animation("word-fall");
    let exit = word_animation("word-exit");

    view! {
        <section class="w-full pt-28 md:pt-40 pb-2 overflow-visible">
            <div class="w-full max-w-[1440px] mx-auto px-4 lg:px-10 text-center">
                <h1 class="text-5xl md:text-7xl font-bold tracking-tight text-slate-900">
                    {HERO_LEAD}
                    " "
                    <span class="inline-block relative overflow-hidden align-bottom h-[1.1em]">
                        // keeps the slot as wide as the longest word
                        <span class="opacity-0" aria-hidden="true">
                            {GHOST_WORD}
                        </span>
                        {move || {
                            let WordCycle { current, leaving } = cycle.get();
                            // the first word is already in place
                            let enter = leaving.map(|_| fall.clone());
                            view! {
                                {leaving
                                    .map(|index| {
                                        view! {
                                            <span
                                                class="absolute top-0 left-0 text-indigo-600"
                                                aria-hidden="true"
                                                style=exit.clone()
                                            >
                                                {ROTATING_WORDS[index]}
                                            </span>
                                        }
                                    })}
                                <span class="absolute top-0 left-0 text-indigo-600" style=enter>
                                    {ROTATING_WORDS[current]}
                                </span>
                            }
                        }}
                    </span>
                    " "
                    {HERO_TAIL}
                </h1>
                <h2 class="text-5xl md:text-7xl font-bold tracking-tight text-slate-900 mt-2">
                    {HERO_SUBTITLE}
                </h2>
                <div class="mt-16 max-w-[700px] mx-auto">
                    {MANIFESTO
                        .iter()
                        .enumerate()
                        .map(|(index, line)| {
                            let style = move || {
                                let (state, transition) = pop_up_motion(mounted.get(), index, 0.5);
                                styled(state, transition)
                            };
                            view! {
                                <p
                                    class="text-lg md:text-xl font-medium text-slate-500 text-center mb-4"
                                    style=style
                                >
                                    {*line}
                                </p>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// Credential logos that pop up one after another.
#[component]
fn LogoRow() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let in_view = use_in_view(section_ref, ViewTrigger::once(0.5));

    view! {
        <section node_ref=section_ref class="max-w-[1440px] mx-auto px-4 md:px-10 py-10">
            <div class="flex flex-wrap items-center justify-center gap-10 md:gap-20">
                {CREDENTIALS
                    .iter()
                    .enumerate()
                    .map(|(index, credential)| {
                        let style = move || {
                            let (mut state, transition) = pop_up_motion(in_view.get(), index, 0.0);
                            // logos rest dimmed until hovered
                            if in_view.get() {
                                state.opacity = 0.5;
                            }
                            styled(state, transition)
                        };
                        view! {
                            <img
                                src=credential.src
                                alt=credential.label
                                title=credential.label
                                style=style
                                class="h-12 md:h-16 w-auto grayscale hover:grayscale-0 hover:!opacity-100"
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let in_view = use_in_view(section_ref, ViewTrigger::once(0.3));
    let style = move || {
        let (state, transition) = rise_motion(in_view.get(), 30.0);
        styled(state, transition)
    };

    view! {
        <section id="about" node_ref=section_ref class="py-12 md:py-20 scroll-mt-12">
            <SectionHeader title="About" icon=IconKind::User can_prev=false can_next=false />
            <div class="max-w-[1440px] mx-auto px-4 md:px-10" style=style>
                <div class="max-w-3xl space-y-6 text-xl md:text-2xl leading-relaxed text-slate-700">
                    {ABOUT.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PreFooter() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let in_view = use_in_view(section_ref, ViewTrigger::once(0.3));
    let style = move || {
        let (state, transition) = rise_motion(in_view.get(), 40.0);
        styled(state, transition)
    };
    let [first, second] = PRE_FOOTER;

    view! {
        <section node_ref=section_ref class="w-full py-24 md:py-32">
            <div class="w-full max-w-[1330px] mx-auto px-4 md:px-6 lg:px-0">
                <div class="text-center" style=style>
                    <h2 class="text-4xl md:text-6xl lg:text-7xl font-bold text-slate-800 leading-tight">
                        <span class="whitespace-nowrap">{first}</span>
                        <br />
                        {second}
                    </h2>
                </div>
            </div>
        </section>
    }
}

//! Card stacking engine.
//!
//! Every carousel section on the home page moves its cards between a stacked
//! "deck" and a fanned out row. This module holds the arithmetic for that:
//! stacked offsets, per-phase target states, spring easings rendered as CSS,
//! smart scroll button state and the visibility thresholds that trigger the
//! reveal. Nothing in here touches the DOM so it is shared by the server
//! render, the hydrated client and the tests.

use std::fmt::Write;

/// Desktop card width used for the stacked offset.
pub const CARD_WIDTH: f64 = 450.0;
/// Stepped peek between stacked desktop cards.
pub const STEP_OFFSET: f64 = 15.0;
/// Pixels scrolled per prev/next click on desktop.
pub const SCROLL_AMOUNT: f64 = 400.0;
/// Duration of the eased scroll, in milliseconds.
pub const SCROLL_DURATION: f64 = 450.0;

pub const MOBILE_CARD_WIDTH: f64 = 330.0;
pub const MOBILE_GAP: f64 = 16.0;
/// Negative so mobile cards overlap more when stacked.
pub const MOBILE_STEP_OFFSET: f64 = -3.0;

pub const MOBILE_BREAKPOINT: f64 = 768.0;
pub const LARGE_BREAKPOINT: f64 = 1024.0;

/// Delay between mount and the entrance animation, in milliseconds.
pub const ENTRANCE_DELAY_MS: u64 = 300;
/// Hover nudge snaps back after this many milliseconds.
pub const NUDGE_RESET_MS: u64 = 100;

const STACK_Z_BASE: i32 = 50;

/// Offset that parks card `index` on top of the card at index 1 (desktop).
pub fn stacked_offset(index: usize) -> f64 {
    let index = index as f64;
    (1.0 - index) * CARD_WIDTH + index * STEP_OFFSET
}

/// Offset that parks card `index` behind the card at index 0 (mobile).
pub fn mobile_stacked_offset(index: usize) -> f64 {
    -(index as f64) * (MOBILE_CARD_WIDTH + MOBILE_GAP - MOBILE_STEP_OFFSET)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Mobile,
    Desktop,
}

impl Layout {
    pub fn from_width(width: f64) -> Self {
        if width < MOBILE_BREAKPOINT {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        self == Self::Mobile
    }
}

pub fn is_large(width: f64) -> bool {
    width >= LARGE_BREAKPOINT
}

/// Damped harmonic spring, parameterised the way framer-motion is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

/// Residual amplitude below which a spring counts as settled.
const REST_AMPLITUDE: f64 = 1e-3;
const EASING_SAMPLES: usize = 48;
const MAX_SETTLE_SECS: f64 = 4.0;

impl Spring {
    /// Fast and tight, the default for fan-out.
    pub const PREMIUM: Spring = Spring::new(90.0, 14.0, 1.0);
    /// Headers and pop-up text.
    pub const POP: Spring = Spring::new(500.0, 25.0, 0.8);
    /// Cards sliding up into the deck.
    pub const ENTRANCE: Spring = Spring::new(120.0, 14.0, 1.0);
    /// Under-damped so a hover nudge rebounds a couple of times.
    pub const SLIDE: Spring = Spring::new(120.0, 8.0, 1.0);
    /// Bouncy drop for the hero's rotating word.
    pub const FALLING: Spring = Spring::new(200.0, 10.0, 1.0);
    /// Mobile menu panel.
    pub const MENU: Spring = Spring::new(400.0, 25.0, 0.8);

    pub const fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Position at `t` seconds of a spring released at rest from 0 towards 1.
    pub fn position(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();
        if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let decay = (-zeta * w0 * t).exp();
            1.0 - decay * ((wd * t).cos() + (zeta * w0 / wd) * (wd * t).sin())
        } else if zeta == 1.0 {
            1.0 - (-w0 * t).exp() * (1.0 + w0 * t)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - root);
            let r2 = -w0 * (zeta + root);
            1.0 + (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r1 - r2)
        }
    }

    /// Seconds until the oscillation envelope falls under the rest amplitude.
    pub fn settle_time(&self) -> f64 {
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();
        let rate = if zeta <= 1.0 {
            zeta * w0
        } else {
            w0 * (zeta - (zeta * zeta - 1.0).sqrt())
        };
        if rate <= 0.0 {
            return MAX_SETTLE_SECS;
        }
        ((1.0 / REST_AMPLITUDE).ln() / rate).min(MAX_SETTLE_SECS)
    }

    /// CSS `linear()` easing that traces this spring over `settle_time`.
    pub fn css_easing(&self) -> String {
        let duration = self.settle_time();
        let mut out = String::from("linear(0");
        for i in 1..EASING_SAMPLES {
            let t = duration * i as f64 / EASING_SAMPLES as f64;
            let _ = write!(out, ", {:.4}", self.position(t));
        }
        out.push_str(", 1)");
        out
    }

    pub fn duration_ms(&self) -> f64 {
        (self.settle_time() * 1000.0).round()
    }
}

/// Transform and opacity of a moving element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    pub x: f64,
    pub y: f64,
    pub rotate: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl MotionState {
    /// Resting, fully revealed position.
    pub const VISIBLE: MotionState = MotionState {
        x: 0.0,
        y: 0.0,
        rotate: 0.0,
        scale: 1.0,
        opacity: 1.0,
    };

    pub const fn at(x: f64, y: f64, opacity: f64) -> Self {
        Self {
            x,
            y,
            rotate: 0.0,
            scale: 1.0,
            opacity,
        }
    }

    pub const fn scaled(scale: f64, opacity: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            rotate: 0.0,
            scale,
            opacity,
        }
    }

    pub fn css_transform(&self) -> String {
        format!(
            "translate3d({}px, {}px, 0) rotate({}deg) scale({})",
            self.x, self.y, self.rotate, self.scale
        )
    }

    pub fn css(&self) -> String {
        format!(
            "transform: {}; opacity: {};",
            self.css_transform(),
            self.opacity
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    /// Jump straight to the target.
    Instant,
    Spring { spring: Spring, delay: f64 },
}

impl Transition {
    pub const fn spring(spring: Spring) -> Self {
        Self::Spring { spring, delay: 0.0 }
    }

    pub const fn delayed(spring: Spring, delay: f64) -> Self {
        Self::Spring { spring, delay }
    }

    /// Value of the CSS `transition` property for transform and opacity.
    pub fn css(&self) -> String {
        match self {
            Self::Instant => "none".to_string(),
            Self::Spring { spring, delay } => {
                let duration = spring.duration_ms();
                let easing = spring.css_easing();
                let delay = (delay * 1000.0).round();
                format!(
                    "transform {duration}ms {easing} {delay}ms, opacity {duration}ms {easing} {delay}ms"
                )
            }
        }
    }
}

/// Which carousel a card belongs to. Each differs in entrance and scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Experience,
    Projects,
    Education,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollStyle {
    /// Browser smooth scrolling.
    Native,
    /// `ease_in_out_cubic` over `SCROLL_DURATION`.
    Eased,
}

impl SectionKind {
    pub fn anchor_id(self) -> &'static str {
        match self {
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Education => "education",
        }
    }

    /// Late trigger: cards stay stacked until most of the section is visible.
    pub fn trigger(self) -> ViewTrigger {
        ViewTrigger::once(0.7)
    }

    pub fn scroll_style(self) -> ScrollStyle {
        match self {
            Self::Projects => ScrollStyle::Eased,
            _ => ScrollStyle::Native,
        }
    }
}

/// Where a section is in its reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Phase {
    /// The entrance delay has elapsed.
    pub entered: bool,
    /// The trigger ratio has been reached.
    pub in_view: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardMotion {
    pub target: MotionState,
    pub transition: Transition,
    pub z_index: i32,
}

impl CardMotion {
    /// Inline style for the card wrapper.
    pub fn css(&self) -> String {
        format!(
            "{} z-index: {}; transform-origin: center bottom;",
            styled(self.target, self.transition),
            self.z_index
        )
    }
}

/// Inline style moving an element to `state` with `transition`.
pub fn styled(state: MotionState, transition: Transition) -> String {
    format!("{} transition: {};", state.css(), transition.css())
}

/// Starting state, before the entrance timer fires.
pub fn initial_motion(kind: SectionKind, layout: Layout, index: usize) -> MotionState {
    match (kind, layout) {
        (_, Layout::Mobile) => MotionState::at(mobile_stacked_offset(index), 600.0, 0.0),
        (SectionKind::Experience, Layout::Desktop) => {
            MotionState::at(stacked_offset(index), 800.0, 0.0)
        }
        (_, Layout::Desktop) => MotionState::at(stacked_offset(index), 0.0, 1.0),
    }
}

/// Target state, transition and stacking order of card `index`.
pub fn card_motion(
    kind: SectionKind,
    layout: Layout,
    phase: Phase,
    index: usize,
    total: usize,
) -> CardMotion {
    let z_index = if phase.in_view {
        total as i32 - index as i32
    } else {
        STACK_Z_BASE - index as i32
    };

    let target = if !phase.entered {
        initial_motion(kind, layout, index)
    } else if phase.in_view {
        MotionState::VISIBLE
    } else if layout.is_mobile() {
        MotionState::at(mobile_stacked_offset(index), 0.0, 1.0)
    } else {
        MotionState::at(stacked_offset(index), 0.0, 1.0)
    };

    let transition = if !phase.entered {
        Transition::Instant
    } else if phase.in_view {
        Transition::spring(Spring::PREMIUM)
    } else {
        match (layout, kind) {
            (Layout::Mobile, _) => Transition::delayed(Spring::ENTRANCE, index as f64 * 0.1),
            (Layout::Desktop, SectionKind::Experience) => {
                Transition::delayed(Spring::ENTRANCE, index as f64 * 0.12)
            }
            (Layout::Desktop, _) => Transition::spring(Spring::PREMIUM),
        }
    };

    CardMotion {
        target,
        transition,
        z_index,
    }
}

/// Section header: pops on mobile, rises on desktop.
pub fn header_motion(layout: Layout, in_view: bool) -> (MotionState, Transition) {
    match (layout, in_view) {
        (Layout::Mobile, true) => (MotionState::VISIBLE, Transition::spring(Spring::POP)),
        (Layout::Mobile, false) => (MotionState::scaled(0.9, 0.0), Transition::spring(Spring::POP)),
        (Layout::Desktop, true) => (MotionState::VISIBLE, Transition::spring(Spring::PREMIUM)),
        (Layout::Desktop, false) => (
            MotionState::at(0.0, 20.0, 0.0),
            Transition::spring(Spring::PREMIUM),
        ),
    }
}

/// Fade and rise into place, for blocks without cards.
pub fn rise_motion(visible: bool, distance: f64) -> (MotionState, Transition) {
    let target = if visible {
        MotionState::VISIBLE
    } else {
        MotionState::at(0.0, distance, 0.0)
    };
    (target, Transition::spring(Spring::PREMIUM))
}

/// Staggered pop-up used by the hero manifesto and the logo row.
pub fn pop_up_motion(visible: bool, index: usize, base_delay: f64) -> (MotionState, Transition) {
    let target = if visible {
        MotionState::VISIBLE
    } else {
        MotionState {
            x: 0.0,
            y: 30.0,
            rotate: 0.0,
            scale: 0.9,
            opacity: 0.0,
        }
    };
    (
        target,
        Transition::delayed(Spring::POP, base_delay + index as f64 * 0.1),
    )
}

/// Which directions the track can still scroll in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub can_prev: bool,
    pub can_next: bool,
}

impl ScrollState {
    pub fn measure(scroll_left: f64, scroll_width: f64, client_width: f64) -> Self {
        Self {
            can_prev: scroll_left > 0.0,
            // One pixel of slack for fractional widths.
            can_next: scroll_left < scroll_width - client_width - 1.0,
        }
    }
}

/// Pixels moved by one prev/next click.
pub fn scroll_step(kind: SectionKind, layout: Layout, viewport_width: f64) -> f64 {
    match (kind, layout) {
        // Mobile project cards are `100vw - 38px` wide plus a 16px gap.
        (SectionKind::Projects, Layout::Mobile) => viewport_width - 22.0,
        (SectionKind::Education, Layout::Mobile) => MOBILE_CARD_WIDTH + MOBILE_GAP,
        _ => SCROLL_AMOUNT,
    }
}

/// Horizontal padding of the scroll track, aligning the first card with the header.
pub fn track_padding(kind: SectionKind, viewport_width: f64) -> &'static str {
    let large = is_large(viewport_width);
    match kind {
        SectionKind::Experience => "max(16px, calc((100vw - 1440px) / 2 + 40px))",
        SectionKind::Projects if large => "max(0px, calc((100vw - 1330px) / 2))",
        SectionKind::Projects => "19px",
        SectionKind::Education if large => "40px",
        SectionKind::Education => "16px",
    }
}

/// Gap between cards on the scroll track. Project cards sit closer together.
pub fn track_gap(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Projects => "gap-4 md:gap-5",
        SectionKind::Experience | SectionKind::Education => "gap-4 md:gap-8",
    }
}

/// Rotating word slot: the word on show and the one falling out below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WordCycle {
    pub current: usize,
    /// `None` until the first swap, so the first word renders without animating.
    pub leaving: Option<usize>,
}

impl WordCycle {
    pub fn advance(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.leaving = Some(self.current);
        self.current = (self.current + 1) % len;
    }
}

pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// A horizontal scroll animated frame by frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EasedScroll {
    pub start: f64,
    pub amount: f64,
    pub duration: f64,
}

impl EasedScroll {
    pub fn new(start: f64, amount: f64) -> Self {
        Self {
            start,
            amount,
            duration: SCROLL_DURATION,
        }
    }

    /// Scroll position after `elapsed` ms and whether the animation is done.
    pub fn position_at(&self, elapsed: f64) -> (f64, bool) {
        let progress = if self.duration <= 0.0 {
            1.0
        } else {
            (elapsed / self.duration).clamp(0.0, 1.0)
        };
        (
            self.start + self.amount * ease_in_out_cubic(progress),
            progress >= 1.0,
        )
    }
}

/// Latching visibility threshold, like an intersection observer with `once`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTrigger {
    pub amount: f64,
    pub once: bool,
}

impl ViewTrigger {
    pub const fn once(amount: f64) -> Self {
        Self { amount, once: true }
    }

    /// New in-view state given the previous one and the visible ratio.
    pub fn observe(&self, was_in_view: bool, ratio: f64) -> bool {
        if self.once && was_in_view {
            return true;
        }
        ratio >= self.amount
    }
}

/// Share of an element between `top` and `bottom` inside the viewport.
pub fn visible_ratio(top: f64, bottom: f64, viewport_height: f64) -> f64 {
    let height = bottom - top;
    if height <= 0.0 {
        return 0.0;
    }
    let visible = (bottom.min(viewport_height) - top.max(0.0)).max(0.0);
    (visible / height).min(1.0)
}

/// The page darkens once a section has been scrolled more than halfway past.
pub fn is_halfway_past(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top < 0.0 && visible_ratio(top, bottom, viewport_height) < 0.5
}

/// Push applied to a card when the pointer enters it: away from the entry point.
pub fn nudge(
    pointer: (f64, f64),
    rect_origin: (f64, f64),
    rect_size: (f64, f64),
    divisor: f64,
) -> (f64, f64) {
    let dx = pointer.0 - rect_origin.0 - rect_size.0 / 2.0;
    let dy = pointer.1 - rect_origin.1 - rect_size.1 / 2.0;
    (-dx / divisor, -dy / divisor)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTERED: Phase = Phase {
        entered: true,
        in_view: false,
    };
    const REVEALED: Phase = Phase {
        entered: true,
        in_view: true,
    };

    #[test]
    fn test_stacked_offsets_anchor_on_second_card() {
        assert_eq!(stacked_offset(0), 450.0);
        assert_eq!(stacked_offset(1), 15.0);
        assert_eq!(stacked_offset(2), -420.0);
        assert_eq!(stacked_offset(4), -1290.0);
    }

    #[test]
    fn test_mobile_offsets_anchor_on_first_card() {
        assert_eq!(mobile_stacked_offset(0), 0.0);
        assert_eq!(mobile_stacked_offset(1), -349.0);
        assert_eq!(mobile_stacked_offset(3), -1047.0);
    }

    #[test]
    fn test_layout_breakpoints() {
        assert_eq!(Layout::from_width(767.0), Layout::Mobile);
        assert_eq!(Layout::from_width(768.0), Layout::Desktop);
        assert_eq!(Layout::from_width(f64::INFINITY), Layout::Desktop);
        assert!(!is_large(1023.0));
        assert!(is_large(1024.0));
    }

    #[test]
    fn test_spring_starts_at_rest_and_settles() {
        for spring in [
            Spring::PREMIUM,
            Spring::POP,
            Spring::ENTRANCE,
            Spring::SLIDE,
            Spring::FALLING,
            Spring::MENU,
        ] {
            assert_eq!(spring.position(0.0), 0.0);
            let end = spring.position(spring.settle_time());
            assert!((end - 1.0).abs() < 0.01, "{spring:?} ended at {end}");
        }
    }

    #[test]
    fn test_underdamped_spring_overshoots() {
        let peak = (1..200)
            .map(|i| Spring::SLIDE.position(i as f64 * 0.01))
            .fold(0.0, f64::max);
        assert!(peak > 1.1);
    }

    #[test]
    fn test_overdamped_spring_never_overshoots() {
        let spring = Spring::new(100.0, 40.0, 1.0);
        assert!((1..300).all(|i| spring.position(i as f64 * 0.01) <= 1.0));
        let critical = Spring::new(100.0, 20.0, 1.0);
        assert!((critical.position(critical.settle_time()) - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_premium_spring_settles_in_about_a_second() {
        let secs = Spring::PREMIUM.settle_time();
        assert!(secs > 0.9 && secs < 1.1, "{secs}");
    }

    #[test]
    fn test_css_easing_shape() {
        let easing = Spring::PREMIUM.css_easing();
        assert!(easing.starts_with("linear(0, "));
        assert!(easing.ends_with(", 1)"));
        assert_eq!(easing.matches(',').count(), EASING_SAMPLES);
    }

    #[test]
    fn test_transition_css() {
        assert_eq!(Transition::Instant.css(), "none");
        let css = Transition::delayed(Spring::PREMIUM, 0.12).css();
        assert!(css.starts_with("transform "));
        assert!(css.contains(" 120ms, opacity "));
        assert!(css.ends_with(" 120ms"));
    }

    #[test]
    fn test_cards_wait_off_screen_before_entrance() {
        let phase = Phase::default();
        let m = card_motion(SectionKind::Experience, Layout::Desktop, phase, 2, 5);
        assert_eq!(m.target, MotionState::at(-420.0, 800.0, 0.0));
        assert_eq!(m.transition, Transition::Instant);
        assert_eq!(m.z_index, 48);

        let m = card_motion(SectionKind::Education, Layout::Mobile, phase, 1, 4);
        assert_eq!(m.target, MotionState::at(-349.0, 600.0, 0.0));

        // Desktop projects and education start already stacked.
        let m = card_motion(SectionKind::Projects, Layout::Desktop, phase, 0, 5);
        assert_eq!(m.target, MotionState::at(450.0, 0.0, 1.0));
    }

    #[test]
    fn test_entered_cards_slide_into_the_deck() {
        let m = card_motion(SectionKind::Experience, Layout::Desktop, ENTERED, 3, 5);
        assert_eq!(m.target, MotionState::at(stacked_offset(3), 0.0, 1.0));
        match m.transition {
            Transition::Spring { spring, delay } => {
                assert_eq!(spring, Spring::ENTRANCE);
                assert!((delay - 0.36).abs() < 1e-9);
            }
            other => panic!("unexpected transition {other:?}"),
        }

        let m = card_motion(SectionKind::Projects, Layout::Mobile, ENTERED, 2, 5);
        assert_eq!(m.target, MotionState::at(mobile_stacked_offset(2), 0.0, 1.0));
        assert_eq!(m.transition, Transition::delayed(Spring::ENTRANCE, 0.2));

        let m = card_motion(SectionKind::Education, Layout::Desktop, ENTERED, 2, 4);
        assert_eq!(m.transition, Transition::spring(Spring::PREMIUM));
    }

    #[test]
    fn test_revealed_cards_fan_out_together() {
        for kind in [
            SectionKind::Experience,
            SectionKind::Projects,
            SectionKind::Education,
        ] {
            for layout in [Layout::Mobile, Layout::Desktop] {
                let m = card_motion(kind, layout, REVEALED, 1, 4);
                assert_eq!(m.target, MotionState::VISIBLE);
                assert_eq!(m.transition, Transition::spring(Spring::PREMIUM));
                assert_eq!(m.z_index, 3);
            }
        }
    }

    #[test]
    fn test_rise_and_pop_up() {
        let (hidden, transition) = rise_motion(false, 40.0);
        assert_eq!(hidden, MotionState::at(0.0, 40.0, 0.0));
        assert_eq!(transition, Transition::spring(Spring::PREMIUM));
        assert_eq!(rise_motion(true, 40.0).0, MotionState::VISIBLE);

        let (state, transition) = pop_up_motion(false, 0, 0.5);
        assert_eq!(state.scale, 0.9);
        assert_eq!(state.y, 30.0);
        assert_eq!(transition, Transition::delayed(Spring::POP, 0.5));
    }

    #[test]
    fn test_card_style() {
        let m = card_motion(SectionKind::Projects, Layout::Desktop, REVEALED, 0, 5);
        let css = m.css();
        assert!(css.starts_with("transform: translate3d(0px, 0px, 0) rotate(0deg) scale(1); opacity: 1;"));
        assert!(css.contains("z-index: 5;"));
        assert!(css.ends_with("transform-origin: center bottom;"));
    }

    #[test]
    fn test_header_motion() {
        let (state, transition) = header_motion(Layout::Mobile, false);
        assert_eq!(state.scale, 0.9);
        assert_eq!(transition, Transition::spring(Spring::POP));
        let (state, transition) = header_motion(Layout::Desktop, false);
        assert_eq!(state.y, 20.0);
        assert_eq!(transition, Transition::spring(Spring::PREMIUM));
        assert_eq!(header_motion(Layout::Desktop, true).0, MotionState::VISIBLE);
    }

    #[test]
    fn test_scroll_buttons() {
        assert_eq!(
            ScrollState::measure(0.0, 2000.0, 800.0),
            ScrollState {
                can_prev: false,
                can_next: true
            }
        );
        // Within a pixel of the end counts as the end.
        assert_eq!(
            ScrollState::measure(1199.5, 2000.0, 800.0),
            ScrollState {
                can_prev: true,
                can_next: false
            }
        );
        assert_eq!(ScrollState::measure(0.0, 800.0, 800.0), ScrollState::default());
    }

    #[test]
    fn test_scroll_step_per_section() {
        assert_eq!(scroll_step(SectionKind::Experience, Layout::Mobile, 390.0), 400.0);
        assert_eq!(scroll_step(SectionKind::Projects, Layout::Mobile, 390.0), 368.0);
        assert_eq!(scroll_step(SectionKind::Projects, Layout::Desktop, 1440.0), 400.0);
        assert_eq!(scroll_step(SectionKind::Education, Layout::Mobile, 390.0), 346.0);
        assert_eq!(SectionKind::Projects.scroll_style(), ScrollStyle::Eased);
        assert_eq!(SectionKind::Education.scroll_style(), ScrollStyle::Native);
    }

    #[test]
    fn test_track_padding() {
        assert_eq!(track_padding(SectionKind::Education, 1200.0), "40px");
        assert_eq!(track_padding(SectionKind::Education, 800.0), "16px");
        assert_eq!(track_padding(SectionKind::Projects, 800.0), "19px");
        assert!(track_padding(SectionKind::Experience, 800.0).starts_with("max(16px"));
    }

    #[test]
    fn test_track_gap() {
        assert_eq!(track_gap(SectionKind::Projects), "gap-4 md:gap-5");
        assert_eq!(track_gap(SectionKind::Experience), "gap-4 md:gap-8");
        assert_eq!(track_gap(SectionKind::Education), "gap-4 md:gap-8");
    }

    #[test]
    fn test_word_cycle() {
        let mut cycle = WordCycle::default();
        assert_eq!(cycle.leaving, None);
        cycle.advance(2);
        assert_eq!((cycle.current, cycle.leaving), (1, Some(0)));
        cycle.advance(2);
        assert_eq!((cycle.current, cycle.leaving), (0, Some(1)));
        cycle.advance(0);
        assert_eq!((cycle.current, cycle.leaving), (0, Some(1)));
    }

    #[test]
    fn test_eased_scroll() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(0.5), 0.5);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);

        let scroll = EasedScroll::new(100.0, -400.0);
        assert_eq!(scroll.position_at(0.0), (100.0, false));
        assert_eq!(scroll.position_at(225.0), (-100.0, false));
        assert_eq!(scroll.position_at(900.0), (-300.0, true));
    }

    #[test]
    fn test_view_trigger_latches() {
        let trigger = SectionKind::Experience.trigger();
        assert!(!trigger.observe(false, 0.69));
        assert!(trigger.observe(false, 0.7));
        assert!(trigger.observe(true, 0.0));

        let live = ViewTrigger {
            amount: 0.5,
            once: false,
        };
        assert!(!live.observe(true, 0.2));
    }

    #[test]
    fn test_visible_ratio_and_dark_background() {
        assert_eq!(visible_ratio(100.0, 300.0, 800.0), 1.0);
        assert_eq!(visible_ratio(-100.0, 300.0, 800.0), 0.75);
        assert_eq!(visible_ratio(900.0, 1200.0, 800.0), 0.0);
        assert_eq!(visible_ratio(10.0, 10.0, 800.0), 0.0);

        assert!(!is_halfway_past(100.0, 500.0, 800.0));
        assert!(!is_halfway_past(-100.0, 300.0, 800.0));
        assert!(is_halfway_past(-300.0, 100.0, 800.0));
    }

    #[test]
    fn test_nudge_pushes_away_from_pointer() {
        let (x, y) = nudge((10.0, 20.0), (0.0, 0.0), (400.0, 560.0), 8.0);
        assert_eq!(x, 23.75);
        assert_eq!(y, 32.5);
        let centred = nudge((200.0, 280.0), (0.0, 0.0), (400.0, 560.0), 8.0);
        assert_eq!(centred, (0.0, 0.0));
    }
}

use std::time::Duration;

use leptos::{ev, html, prelude::*};
use leptos_use::{use_window_size, UseWindowSizeReturn};

use crate::motion::{visible_ratio, Layout, ViewTrigger, ENTRANCE_DELAY_MS};

pub fn viewport_height() -> f64 {
    window()
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

/// Viewport width and the layout it selects. Desktop until measured.
pub fn use_layout() -> (Signal<f64>, Signal<Layout>) {
    let UseWindowSizeReturn { width, .. } = use_window_size();
    (width, Signal::derive(move || Layout::from_width(width.get())))
}

/// Flips to true once `target` has been visible past the trigger ratio.
pub fn use_in_view(target: NodeRef<html::Section>, trigger: ViewTrigger) -> ReadSignal<bool> {
    let (in_view, set_in_view) = signal(false);

    let check = move || {
        let Some(el) = target.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        let ratio = visible_ratio(rect.top(), rect.bottom(), viewport_height());
        let was = in_view.get_untracked();
        let now = trigger.observe(was, ratio);
        if now != was {
            set_in_view.set(now);
        }
    };

    Effect::new(move |_| {
        if target.get().is_some() {
            check();
        }
    });
    let on_scroll = window_event_listener(ev::scroll, move |_| check());
    let on_resize = window_event_listener(ev::resize, move |_| check());
    on_cleanup(move || {
        on_scroll.remove();
        on_resize.remove();
    });

    in_view
}

/// True once the entrance delay has passed after mount.
pub fn use_entered() -> ReadSignal<bool> {
    let (entered, set_entered) = signal(false);
    Effect::new(move |_| {
        if let Ok(handle) = set_timeout_with_handle(
            move || set_entered.set(true),
            Duration::from_millis(ENTRANCE_DELAY_MS),
        ) {
            on_cleanup(move || handle.clear());
        }
    });
    entered
}

/// True after hydration, for elements that animate in on load.
pub fn use_mounted() -> ReadSignal<bool> {
    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| set_mounted.set(true));
    mounted
}

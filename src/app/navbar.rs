use leptos::prelude::*;

use super::icons::{Icon, IconKind};
use crate::motion::Spring;
use crate::profile::{LOGO_SRC, NAV_LINKS, OWNER};

/// Fixed top bar: logo, centred section links and a contact button.
///
/// Below the `md` breakpoint the links move into a dropdown panel. The contact
/// button inverts while the page background is dark.
#[component]
pub fn Navbar(#[prop(into)] dark_bg: Signal<bool>) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let menu_animation = format!(
        "animation: menu-in {}ms {} both;",
        Spring::MENU.duration_ms(),
        Spring::MENU.css_easing()
    );

    view! {
        <header class="fixed top-0 inset-x-0 z-[100]">
            <nav class="max-w-[1440px] mx-auto flex items-center justify-between px-4 md:px-10 py-4">
                <a href="/" class="flex items-center gap-2" aria-label=OWNER>
                    <img src=LOGO_SRC alt="" class="w-10 h-10 rounded-full" />
                </a>
                <div class="hidden md:flex items-center gap-1 px-2 py-1 rounded-full bg-white/80 backdrop-blur shadow-sm">
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    class="px-4 py-2 rounded-full text-sm font-medium text-slate-700 hover:bg-slate-100 transition-colors"
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="flex items-center gap-3">
                    <a href="#contact" class=move || contact_class(dark_bg.get(), menu_open.get())>
                        "Contact"
                    </a>
                    <button
                        class="md:hidden flex items-center justify-center w-12 h-12 rounded-full bg-slate-100 hover:bg-slate-200 transition-colors duration-300 relative z-[60]"
                        aria-label=move || if menu_open.get() { "Close menu" } else { "Open menu" }
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || {
                            if menu_open.get() {
                                view! { <Icon kind=IconKind::X class="w-6 h-6 text-slate-800" /> }
                            } else {
                                view! { <Icon kind=IconKind::Menu class="w-6 h-6 text-slate-800" /> }
                            }
                        }}
                    </button>
                </div>
            </nav>
            <Show when=move || menu_open.get()>
                <div
                    class="md:hidden fixed inset-0 -z-10 bg-slate-900/20 backdrop-blur-sm"
                    on:click=move |_| set_menu_open.set(false)
                ></div>
                <div
                    class="md:hidden mx-4 p-4 rounded-3xl bg-white shadow-lg flex flex-col gap-1"
                    style=menu_animation.clone()
                >
                    {NAV_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    on:click=move |_| set_menu_open.set(false)
                                    class="px-4 py-3 rounded-2xl text-lg font-medium text-slate-800 hover:bg-slate-100"
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                    <a
                        href="#contact"
                        on:click=move |_| set_menu_open.set(false)
                        class="mt-2 px-4 py-3 rounded-2xl text-lg font-semibold text-center bg-slate-900 text-white"
                    >
                        "Contact"
                    </a>
                </div>
            </Show>
        </header>
    }
}

/// Contact button classes. It stays visible on mobile but ignores clicks while
/// the dropdown covers the page.
fn contact_class(dark_bg: bool, menu_open: bool) -> String {
    let pointer = if menu_open {
        "pointer-events-none"
    } else {
        "pointer-events-auto"
    };
    let colors = if dark_bg {
        "bg-[#3D3A50] text-white hover:bg-violet-200 hover:text-violet-900"
    } else {
        "bg-violet-300 text-violet-900 hover:bg-violet-200"
    };
    format!(
        "font-medium rounded-full px-6 h-12 md:h-auto md:px-8 md:py-4 transition-all duration-300 text-sm md:text-base flex items-center justify-center {pointer} {colors}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_button_shows_on_mobile() {
        let class = contact_class(false, false);
        assert!(!class.split(' ').any(|c| c == "hidden"));
        assert!(class.contains("flex items-center"));
        assert!(class.contains("bg-violet-300 text-violet-900"));
    }

    #[test]
    fn test_contact_button_states() {
        assert!(contact_class(true, false).contains("bg-[#3D3A50] text-white"));
        assert!(contact_class(false, true).contains("pointer-events-none"));
        assert!(contact_class(false, false).contains("pointer-events-auto"));
    }
}

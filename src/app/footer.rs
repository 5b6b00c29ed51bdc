use std::time::Duration;

use leptos::{ev::SubmitEvent, prelude::*};

use super::icons::{BrandIcon, LINKEDIN_PATH, X_PATH};
use crate::contact::{mailto_link, ContactForm, SendStatus, STATUS_RESET_MS};
use crate::profile::{
    copyright_year, AVAILABILITY, CONTACT_EMAIL, CONTACT_PROMPT, LINKEDIN_URL, LOGO_SRC, OWNER,
    X_URL,
};

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-white rounded-full text-slate-800 placeholder-slate-400 outline-none focus:ring-2 focus:ring-violet-400 transition-all";
const ROW_INPUT_CLASS: &str = "flex-1 px-4 py-3 bg-white rounded-full text-slate-800 placeholder-slate-400 outline-none focus:ring-2 focus:ring-violet-400 transition-all";
const TEXTAREA_CLASS: &str = "w-full px-4 py-3 bg-white rounded-2xl text-slate-800 placeholder-slate-400 outline-none focus:ring-2 focus:ring-violet-400 transition-all resize-none";

#[component]
pub fn Footer() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (status, set_status) = signal(SendStatus::Idle);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_status.set(SendStatus::Sending);
        let form = ContactForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        let link = mailto_link(CONTACT_EMAIL, &form);
        match window().location().set_href(&link) {
            Ok(()) => {
                set_status.set(SendStatus::Sent);
                set_name.set(String::new());
                set_email.set(String::new());
                set_message.set(String::new());
            }
            Err(e) => {
                log::error!("couldn't open mail client: {e:?}");
                set_status.set(SendStatus::Error);
            }
        }
        set_timeout(
            move || set_status.set(SendStatus::Idle),
            Duration::from_millis(STATUS_RESET_MS),
        );
    };

    let send_button = move || {
        view! {
            <button
                type="submit"
                disabled=move || status.get().is_busy()
                class="w-full px-8 py-3 bg-violet-200 text-slate-700 font-medium rounded-full hover:bg-[#3D3A50] hover:text-white transition-all duration-300 disabled:opacity-50"
            >
                {move || status.get().label()}
            </button>
        }
    };
    let email_input = move |class: &'static str| {
        view! {
            <input
                type="email"
                name="email"
                required
                placeholder="Your email"
                class=class
                prop:value=email
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
        }
    };
    let message_input = move |rows: &'static str| {
        view! {
            <textarea
                name="message"
                required
                rows=rows
                placeholder="Your message"
                class=TEXTAREA_CLASS
                prop:value=message
                on:input=move |ev| set_message.set(event_target_value(&ev))
            ></textarea>
        }
    };

    view! {
        <footer
            id="contact"
            class="w-full px-4 md:px-6 pb-6 scroll-mt-24"
            style="padding-bottom: max(1.5rem, env(safe-area-inset-bottom));"
        >
            <div class="w-full max-w-[1440px] mx-auto bg-white rounded-[2rem] md:rounded-[3rem] px-6 md:px-12 py-10 md:py-16">
                <div class="flex flex-col md:flex-row md:items-start md:justify-between gap-8 md:gap-12">
                    <div class="flex-shrink-0">
                        <img src=LOGO_SRC alt=format!("{OWNER} logo") class="h-12 md:h-16 w-auto object-contain" />
                    </div>
                    <div class="flex-1 max-w-2xl">
                        <div class="bg-violet-50/80 backdrop-blur-sm rounded-2xl md:rounded-3xl p-6 md:p-8">
                            <form on:submit=on_submit>
                                <p class="mb-4 text-sm text-slate-500 text-center md:text-left">
                                    {CONTACT_PROMPT}
                                </p>
                                // mobile stacks email, message and send
                                <div class="flex flex-col gap-4 md:hidden">
                                    {email_input(INPUT_CLASS)}
                                    {message_input("5")}
                                    {send_button()}
                                </div>
                                <div class="hidden md:flex md:flex-col gap-4">
                                    <div class="flex gap-4">
                                        <input
                                            type="text"
                                            name="name"
                                            placeholder="Your name"
                                            class=ROW_INPUT_CLASS
                                            prop:value=name
                                            on:input=move |ev| set_name.set(event_target_value(&ev))
                                        />
                                        {email_input(ROW_INPUT_CLASS)}
                                    </div>
                                    {message_input("4")}
                                    {send_button()}
                                </div>
                                {move || {
                                    (status.get() == SendStatus::Error)
                                        .then(|| {
                                            view! {
                                                <p class="mt-4 text-sm text-red-500">
                                                    "Couldn't open your mail client. Email "
                                                    <a href=format!("mailto:{CONTACT_EMAIL}") class="underline">
                                                        {CONTACT_EMAIL}
                                                    </a>
                                                    " directly."
                                                </p>
                                            }
                                        })
                                }}
                            </form>
                        </div>
                    </div>
                </div>
                <div class="mt-12 md:mt-16">
                    <div class="flex items-center gap-4">
                        <div class="inline-flex items-center gap-2 px-4 py-2 bg-violet-100 rounded-full">
                            <span class="w-2 h-2 bg-green-500 rounded-full animate-pulse"></span>
                            <span class="text-sm text-slate-600">{AVAILABILITY}</span>
                        </div>
                        <div class="flex items-center gap-3">
                            <a
                                href=LINKEDIN_URL
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label="LinkedIn"
                                class="text-slate-600 hover:text-slate-900 transition-colors"
                            >
                                <BrandIcon path=LINKEDIN_PATH class="w-6 h-6" />
                            </a>
                            <a
                                href=X_URL
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label="X"
                                class="text-slate-600 hover:text-slate-900 transition-colors"
                            >
                                <BrandIcon path=X_PATH class="w-6 h-6" />
                            </a>
                        </div>
                    </div>
                </div>
            </div>
            <div class="w-full max-w-[1440px] mx-auto mt-6 text-center">
                <p class="text-sm text-slate-500">{format!("© {OWNER} {}", copyright_year())}</p>
            </div>
        </footer>
    }
}

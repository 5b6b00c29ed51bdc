mod cards;
mod content_page;
mod footer;
mod homepage;
mod hooks;
mod icons;
mod navbar;
mod sections;

use content_page::{ContentDetail, NotFound};
use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path, SsrMode};

use crate::content::ContentType;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light" />
                <link rel="icon" type="image/svg+xml" href="/tt-logo.svg" />
                <link rel="alternate" type="application/rss+xml" href="/rss.xml" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased bg-bg-main text-slate-900">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{title} | Portfolio") />
        <Meta
            name="description"
            content="Product manager portfolio: work history, projects and education."
        />

        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomePage />
                // resolved before streaming so a missing page can answer 404
                <Route
                    path=path!("/work/:slug")
                    view=|| view! { <ContentDetail kind=ContentType::Work /> }
                    ssr=SsrMode::Async
                />
                <Route
                    path=path!("/project/:slug")
                    view=|| view! { <ContentDetail kind=ContentType::Project /> }
                    ssr=SsrMode::Async
                />
                <Route
                    path=path!("/program/:slug")
                    view=|| view! { <ContentDetail kind=ContentType::Program /> }
                    ssr=SsrMode::Async
                />
            </Routes>
        </Router>
    }
}

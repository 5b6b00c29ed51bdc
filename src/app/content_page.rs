use leptos::{either::Either, prelude::*, server_fn::codec::GetUrl};
use leptos_meta::{Meta, Title};
use leptos_router::hooks::use_params_map;

use super::icons::{Icon, IconKind};
#[cfg(feature = "ssr")]
use crate::content::content_page;
use crate::content::{cache_key, ContentPage, ContentType, Frontmatter, GLOBAL_PAGE_CACHE};
use crate::profile::tech_label;

#[server(input = GetUrl)]
pub async fn get_content_server(kind: String, slug: String) -> Result<ContentPage, ServerFnError> {
    content_page(&kind, &slug).map_err(|e| {
        tracing::warn!(%kind, %slug, error = %e, "content page unavailable");
        ServerFnError::new(e.to_string())
    })
}

#[component]
fn BackLink() -> impl IntoView {
    view! {
        <a
            href="/"
            class="inline-flex items-center gap-2 text-sm font-medium text-slate-500 hover:text-slate-900 transition-colors"
        >
            <Icon kind=IconKind::ArrowLeft class="w-4 h-4" />
            "Back to Home"
        </a>
    }
}

/// 404 page. Sets the response status when rendered on the server.
#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Not Found" />
        <div class="min-h-screen bg-bg-main flex flex-col items-center justify-center gap-6 px-6 text-center">
            <p class="text-sm font-semibold tracking-widest text-slate-400">"404"</p>
            <h1 class="text-4xl md:text-5xl font-bold tracking-tight">"Page not found"</h1>
            <p class="text-lg text-slate-600 max-w-md">
                "This page doesn't exist or has moved."
            </p>
            <BackLink />
        </div>
    }
}

#[component]
fn TechLabels(tech: Vec<String>) -> impl IntoView {
    let labels = tech
        .iter()
        .filter_map(|key| tech_label(key))
        .collect::<Vec<_>>();
    (!labels.is_empty()).then(|| {
        view! {
            <div class="flex flex-wrap gap-2 mt-6">
                {labels
                    .into_iter()
                    .map(|label| {
                        view! {
                            <span class="px-3 py-1 rounded-lg bg-white border border-slate-200 text-sm font-medium text-slate-700">
                                {label}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        }
    })
}

#[component]
fn PageBody(page: ContentPage) -> impl IntoView {
    let ContentPage {
        frontmatter, html, ..
    } = page;
    let Frontmatter {
        title,
        subtitle,
        date,
        kind,
        tags,
        tech,
        ..
    } = frontmatter;
    let page_title = title.clone();
    let description = subtitle.clone();

    view! {
        <Title text=page_title />
        <Meta name="description" content=description />
        <div class="min-h-screen bg-bg-main">
            <article class="max-w-2xl mx-auto px-6 py-16 md:py-24">
                <BackLink />
                <header class="mt-10 mb-12">
                    <div class="flex items-center gap-3 text-sm">
                        <span class="px-3 py-1 rounded-full bg-slate-900 text-white font-medium capitalize">
                            {kind.as_str()}
                        </span>
                        <span class="text-slate-500">{date}</span>
                    </div>
                    <h1 class="mt-6 text-4xl md:text-5xl font-bold tracking-tight leading-tight">
                        {title}
                    </h1>
                    <p class="mt-4 text-xl text-slate-600">{subtitle}</p>
                    <TechLabels tech />
                    <div class="flex flex-wrap gap-2 mt-4">
                        {tags
                            .into_iter()
                            .map(|tag| {
                                view! {
                                    <span class="px-3 py-1 rounded-full bg-slate-100 text-xs font-medium text-slate-600">
                                        {tag}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </header>
                <div class="prose-content" inner_html=html></div>
            </article>
        </div>
    }
}

/// Markdown detail page for `/{kind}/{slug}`. Each content type has its own route.
#[component]
pub fn ContentDetail(kind: ContentType) -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.get().get("slug").unwrap_or_default();
    let page = Resource::new(slug, move |slug| async move {
        let kind = kind.to_string();
        let key = cache_key(&kind, &slug);
        if let Some(cached) = GLOBAL_PAGE_CACHE.get(&key) {
            return (*cached)
                .clone()
                .ok_or(ServerFnError::new("Couldn't get content page"));
        }
        let page = get_content_server(kind, slug).await;
        // misses are only remembered in the browser
        if page.is_ok() || cfg!(feature = "hydrate") {
            GLOBAL_PAGE_CACHE.insert(key, page.clone().ok());
        }
        page
    });

    view! {
        <Suspense>
            {move || Suspend::new(async move {
                match page.await {
                    Ok(page) => Either::Left(view! { <PageBody page /> }),
                    Err(_) => Either::Right(view! { <NotFound /> }),
                }
            })}
        </Suspense>
    }
}

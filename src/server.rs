use axum::{routing::get, Router};
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};

use crate::app::{shell, App};
use crate::sitemap::sitemap;

/// The site's axum router: app routes, `/sitemap.xml`, and static files from
/// the site root for everything else.
pub fn router(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);

    Router::new()
        .route("/sitemap.xml", get(sitemap))
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::{Path, PathBuf};

    use axum::body::{to_bytes, Body};
    use http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;

    /// A throwaway site root holding a stylesheet and one logo.
    fn site_root(name: &str) -> PathBuf {
        let root = std::env::temp_dir().join(format!(
            "portfolio-site-{name}-{}",
            std::process::id()
        ));
        fs::create_dir_all(root.join("pkg")).unwrap();
        fs::create_dir_all(root.join("logos")).unwrap();
        fs::write(root.join("pkg/portfolio-site.css"), "body{}").unwrap();
        fs::write(root.join("logos/sdschool.svg"), "<svg></svg>").unwrap();
        root
    }

    fn options(root: &Path) -> LeptosOptions {
        LeptosOptions::builder()
            .output_name("portfolio-site")
            .site_root(root.to_string_lossy().into_owned())
            .build()
    }

    async fn fetch(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8_lossy(&body).into_owned())
    }

    #[tokio::test]
    async fn test_static_assets_are_served() {
        let root = site_root("assets");
        let app = router(options(&root));

        let (status, body) = fetch(app.clone(), "/pkg/portfolio-site.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "body{}");

        let (status, _) = fetch(app, "/logos/sdschool.svg").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_detail_pages_render() {
        let root = site_root("detail");
        let app = router(options(&root));

        let (status, body) = fetch(app.clone(), "/work/product-manager").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Product Manager"));

        let (status, body) = fetch(app, "/program/stanford-dschool").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Stanford d.school"));
    }

    #[tokio::test]
    async fn test_missing_or_mismatched_pages_are_not_found() {
        let root = site_root("missing");
        let app = router(options(&root));

        let (status, _) = fetch(app.clone(), "/work/missing").await;
        assert_eq!(status, StatusCode::NOT_FOUND);

        // a project slug under the work route
        let (status, _) = fetch(app, "/work/portfolio-2026").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_home_page_copy() {
        let root = site_root("home");
        let app = router(options(&root));

        let (status, body) = fetch(app, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Design Thinker"));
        assert!(body.contains("amazing together."));
        assert!(body.contains("Available for work"));
        // every section header, About included, carries both scroll buttons
        assert_eq!(body.matches("aria-label=\"Previous\"").count(), 4);
        assert_eq!(body.matches("aria-label=\"Next\"").count(), 4);
    }
}

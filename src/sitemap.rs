use std::fmt::Write;

use axum::response::IntoResponse;
use http::{header, StatusCode};

use crate::content::{static_params, ContentType};
use crate::profile::SITE_URL;

/// Sitemap listing the home page and every content detail route.
pub fn sitemap_xml(params: &[(ContentType, String)]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    let _ = writeln!(xml, "  <url><loc>{SITE_URL}/</loc></url>");
    for (kind, slug) in params {
        let _ = writeln!(xml, "  <url><loc>{SITE_URL}/{kind}/{slug}</loc></url>");
    }
    xml.push_str("</urlset>\n");
    xml
}

pub async fn sitemap() -> impl IntoResponse {
    match static_params() {
        Ok(params) => Ok((
            [(header::CONTENT_TYPE, "application/xml")],
            sitemap_xml(&params),
        )),
        Err(e) => {
            tracing::error!(error = %e, "failed to build sitemap");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sitemap_lists_routes() {
        let xml = sitemap_xml(&[
            (ContentType::Work, "product-manager".to_string()),
            (ContentType::Project, "portfolio-2026".to_string()),
        ]);
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset"));
        assert!(xml.contains("<loc>https://tomatomonari.com/</loc>"));
        assert!(xml.contains("<loc>https://tomatomonari.com/work/product-manager</loc>"));
        assert!(xml.contains("<loc>https://tomatomonari.com/project/portfolio-2026</loc>"));
        assert!(xml.ends_with("</urlset>\n"));
    }

    #[test]
    fn test_sitemap_covers_embedded_content() {
        let params = static_params().expect("content should parse");
        let xml = sitemap_xml(&params);
        assert_eq!(xml.matches("<url>").count(), params.len() + 1);
        assert!(xml.contains("/program/stanford-dschool</loc>"));
    }
}

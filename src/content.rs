use std::{collections::BTreeSet, fmt, str::FromStr, sync::LazyLock};

use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(any(feature = "ssr", feature = "rss"))]
use gray_matter::{engine::YAML, Matter};

use crate::palette::CardColor;

/// Rendered pages keyed by `type/slug`, shared between server and browser.
pub static GLOBAL_PAGE_CACHE: LazyLock<DashMap<String, Option<ContentPage>>> =
    LazyLock::new(DashMap::new);
#[cfg(any(feature = "ssr", feature = "rss"))]
static ITEM_CACHE: LazyLock<DashMap<String, ContentItem>> = LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "content"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct Assets;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Work,
    Project,
    Program,
}

impl ContentType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Work => "work",
            Self::Project => "project",
            Self::Program => "program",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "work" => Ok(Self::Work),
            "project" => Ok(Self::Project),
            "program" => Ok(Self::Program),
            _ => Err(ContentError::NotFound(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frontmatter {
    pub title: String,
    pub subtitle: String,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: ContentType,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub color: Option<CardColor>,
    #[serde(default)]
    pub tech: Vec<String>,
}

impl Frontmatter {
    /// Leading year of `date` ("2021 - 2024" is 2021), used for ordering.
    pub fn year(&self) -> Option<u32> {
        let digits = self
            .date
            .trim()
            .chars()
            .take_while(char::is_ascii_digit)
            .collect::<String>();
        if digits.len() == 4 {
            digits.parse().ok()
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub slug: String,
    pub frontmatter: Frontmatter,
    /// Raw markdown body, frontmatter stripped.
    pub content: String,
}

impl ContentItem {
    pub fn href(&self) -> String {
        format!("/{}/{}", self.frontmatter.kind, self.slug)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentPage {
    pub slug: String,
    pub frontmatter: Frontmatter,
    pub html: String,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("content not found: {0}")]
    NotFound(String),
    #[error("{slug} is {found}, not {expected}")]
    TypeMismatch {
        slug: String,
        expected: ContentType,
        found: ContentType,
    },
    #[error("couldn't parse content {0}")]
    Parse(String),
}

pub fn cache_key(kind: &str, slug: &str) -> String {
    format!("{kind}/{slug}")
}

/// Slugs are file stems: lowercase ascii, digits, `-` and `_`.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}

/// Every content slug, sorted.
pub fn all_slugs() -> Vec<String> {
    let mut slugs = Assets::iter()
        .filter_map(|name| name.strip_suffix(".md").map(str::to_string))
        .filter(|slug| is_valid_slug(slug))
        .collect::<Vec<_>>();
    slugs.sort();
    slugs
}

#[cfg(any(feature = "ssr", feature = "rss"))]
fn parse_item(slug: &str, raw: &str) -> Result<ContentItem, ContentError> {
    let matter = Matter::<YAML>::new();
    let parsed = matter
        .parse_with_struct::<Frontmatter>(raw)
        .ok_or_else(|| ContentError::Parse(slug.to_string()))?;
    Ok(ContentItem {
        slug: slug.to_string(),
        frontmatter: parsed.data,
        content: parsed.content,
    })
}

/// Frontmatter and raw markdown of one item.
#[cfg(any(feature = "ssr", feature = "rss"))]
pub fn content_by_slug(slug: &str) -> Result<ContentItem, ContentError> {
    if let Some(item) = ITEM_CACHE.get(slug) {
        return Ok(item.clone());
    }
    if !is_valid_slug(slug) {
        return Err(ContentError::NotFound(slug.to_string()));
    }
    let file = Assets::get(&format!("{slug}.md"))
        .ok_or_else(|| ContentError::NotFound(slug.to_string()))?;
    let raw = std::str::from_utf8(&file.data).map_err(|_| ContentError::Parse(slug.to_string()))?;
    let item = parse_item(slug, raw)?;
    ITEM_CACHE.insert(slug.to_string(), item.clone());
    Ok(item)
}

/// All items, newest first, then by slug.
#[cfg(any(feature = "ssr", feature = "rss"))]
pub fn all_content() -> Result<Vec<ContentItem>, ContentError> {
    let mut items = all_slugs()
        .iter()
        .map(|slug| content_by_slug(slug))
        .collect::<Result<Vec<_>, _>>()?;
    items.sort_by(|a, b| {
        b.frontmatter
            .year()
            .cmp(&a.frontmatter.year())
            .then_with(|| a.slug.cmp(&b.slug))
    });
    tracing::debug!(count = items.len(), "loaded content");
    Ok(items)
}

#[cfg(any(feature = "ssr", feature = "rss"))]
pub fn content_by_type(kind: ContentType) -> Result<Vec<ContentItem>, ContentError> {
    Ok(all_content()?
        .into_iter()
        .filter(|item| item.frontmatter.kind == kind)
        .collect())
}

#[cfg(any(feature = "ssr", feature = "rss"))]
pub fn featured_content() -> Result<Vec<ContentItem>, ContentError> {
    Ok(all_content()?
        .into_iter()
        .filter(|item| item.frontmatter.featured)
        .collect())
}

/// Every tag in use, sorted and deduplicated.
#[cfg(any(feature = "ssr", feature = "rss"))]
pub fn all_tags() -> Result<Vec<String>, ContentError> {
    Ok(all_content()?
        .into_iter()
        .flat_map(|item| item.frontmatter.tags)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect())
}

#[cfg(any(feature = "ssr", feature = "rss"))]
pub fn content_by_tag(tag: &str) -> Result<Vec<ContentItem>, ContentError> {
    Ok(all_content()?
        .into_iter()
        .filter(|item| item.frontmatter.tags.iter().any(|t| t == tag))
        .collect())
}

/// `(type, slug)` pairs for every detail route.
#[cfg(any(feature = "ssr", feature = "rss"))]
pub fn static_params() -> Result<Vec<(ContentType, String)>, ContentError> {
    Ok(all_content()?
        .into_iter()
        .map(|item| (item.frontmatter.kind, item.slug))
        .collect())
}

/// Rendered detail page for `/{kind}/{slug}`. The route type must match the item.
#[cfg(feature = "ssr")]
pub fn content_page(kind: &str, slug: &str) -> Result<ContentPage, ContentError> {
    let expected = kind.parse::<ContentType>()?;
    let item = content_by_slug(slug)?;
    if item.frontmatter.kind != expected {
        return Err(ContentError::TypeMismatch {
            slug: slug.to_string(),
            expected,
            found: item.frontmatter.kind,
        });
    }
    Ok(ContentPage {
        html: crate::markdown::render(&item.content),
        slug: item.slug,
        frontmatter: item.frontmatter,
    })
}

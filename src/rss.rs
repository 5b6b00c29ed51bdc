use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rss::{
    extension::atom::{AtomExtensionBuilder, Link},
    CategoryBuilder, Channel, ChannelBuilder, GuidBuilder, Item, ItemBuilder,
};

use crate::content::ContentItem;
use crate::profile::{CONTACT_EMAIL, OWNER, SITE_URL};

pub const FEED_PATH: &str = "public/rss.xml";

/// Publication date for an item: January 1st of the leading year of its date.
fn pub_date(item: &ContentItem) -> Option<String> {
    let year = item.frontmatter.year()?;
    let date = NaiveDate::from_ymd_opt(year as i32, 1, 1)?.and_hms_opt(0, 0, 0)?;
    Some(Utc.from_utc_datetime(&date).to_rfc2822())
}

/// When this binary was built, as the channel's last build date.
fn last_build_date() -> Option<String> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|built| built.to_rfc2822())
}

fn build_item(item: ContentItem) -> Item {
    let link = format!("{SITE_URL}{}", item.href());
    let guid = GuidBuilder::default().value(&link).permalink(true).build();
    let categories = item
        .frontmatter
        .tags
        .iter()
        .map(|tag| CategoryBuilder::default().name(tag.as_str()).build())
        .collect::<Vec<_>>();
    ItemBuilder::default()
        .title(item.frontmatter.title.clone())
        .description(item.frontmatter.subtitle.clone())
        .author(format!("{CONTACT_EMAIL} ({OWNER})"))
        .pub_date(pub_date(&item))
        .categories(categories)
        .link(link)
        .guid(guid)
        .build()
}

/// Feed of every detail page, in the order given.
pub fn build_channel(items: Vec<ContentItem>) -> Channel {
    let items = items.into_iter().map(build_item).collect::<Vec<_>>();

    let mut atom_link = Link::default();
    atom_link.set_rel("self");
    atom_link.set_href(format!("{SITE_URL}/rss.xml"));
    atom_link.set_mime_type("application/rss+xml".to_string());

    ChannelBuilder::default()
        .title(format!("{OWNER} - Work & Projects"))
        .description("Case studies, projects and programmes from my portfolio.")
        .link(SITE_URL)
        .language("en-us".to_string())
        .ttl("60".to_string())
        .last_build_date(last_build_date())
        .atom_ext(AtomExtensionBuilder::default().links(vec![atom_link]).build())
        .items(items)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::all_content;

    #[test]
    fn test_channel_lists_every_item() {
        let items = all_content().unwrap();
        let count = items.len();
        let channel = build_channel(items);
        assert_eq!(channel.items().len(), count);
        assert_eq!(channel.link(), SITE_URL);

        let first = &channel.items()[0];
        assert_eq!(first.title(), Some("Portfolio 2026"));
        assert_eq!(
            first.link(),
            Some("https://tomatomonari.com/project/portfolio-2026")
        );
        assert_eq!(first.pub_date(), Some("Thu, 1 Jan 2026 00:00:00 +0000"));
        assert!(first.categories().iter().any(|c| c.name() == "Web"));
        assert!(channel.last_build_date().is_some());
    }
}

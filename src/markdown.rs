use std::sync::LazyLock;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use syntect::highlighting::ThemeSet;
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

const THEME: &str = "InspiredGitHub";

static RENDERER: LazyLock<ContentRenderer> = LazyLock::new(ContentRenderer::new);

/// Renders detail-page markdown to HTML.
///
/// Block elements get the `content-*` classes the stylesheet targets and fenced
/// code blocks are highlighted with syntect. Loading the syntax and theme sets is
/// slow, so one renderer is shared by every page.
pub struct ContentRenderer {
    syntaxset: SyntaxSet,
    themeset: ThemeSet,
}

impl Default for ContentRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentRenderer {
    pub fn new() -> ContentRenderer {
        ContentRenderer {
            syntaxset: SyntaxSet::load_defaults_newlines(),
            themeset: ThemeSet::load_defaults(),
        }
    }

    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, Options::all());
        let mut html = String::new();
        pulldown_cmark::html::push_html(&mut html, self.transform(parser).into_iter());
        html
    }

    fn transform<'a, It>(&self, events: It) -> Vec<Event<'a>>
    where
        It: Iterator<Item = Event<'a>>,
    {
        let mut code_block: Option<CodeBlockKind<'a>> = None;
        let mut to_highlight = String::new();
        let mut out_events = Vec::new();

        for event in events {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    code_block = Some(kind);
                }
                Event::End(TagEnd::CodeBlock) => {
                    let kind = code_block.take().unwrap_or(CodeBlockKind::Indented);
                    match self.highlight(&kind, &to_highlight) {
                        Some(html) => out_events.push(Event::Html(CowStr::from(html))),
                        None => {
                            out_events.push(Event::Start(Tag::CodeBlock(kind)));
                            out_events.push(Event::Text(CowStr::from(to_highlight.clone())));
                            out_events.push(Event::End(TagEnd::CodeBlock));
                        }
                    }
                    to_highlight.clear();
                }
                Event::Text(t) if code_block.is_some() => to_highlight.push_str(&t),
                Event::Start(tag) => out_events.push(open_tag(tag)),
                Event::End(tag) => out_events.push(close_tag(tag)),
                Event::Rule => out_events.push(html("<hr class=\"content-hr\" />\n")),
                e => out_events.push(e),
            }
        }

        out_events
    }

    fn highlight(&self, kind: &CodeBlockKind<'_>, code: &str) -> Option<String> {
        let plain = self.syntaxset.find_syntax_plain_text();
        let syntax = match kind {
            CodeBlockKind::Fenced(lang) => self.syntaxset.find_syntax_by_token(lang),
            CodeBlockKind::Indented => None,
        }
        .unwrap_or(plain);
        let theme = self.themeset.themes.get(THEME)?;
        highlighted_html_for_string(code, &self.syntaxset, syntax, theme).ok()
    }
}

fn html<'a>(s: &'static str) -> Event<'a> {
    Event::Html(CowStr::Borrowed(s))
}

fn open_tag(tag: Tag<'_>) -> Event<'_> {
    match tag {
        Tag::Heading {
            level: HeadingLevel::H2,
            ..
        } => html("<h2 class=\"content-h2\">"),
        Tag::Heading {
            level: HeadingLevel::H3,
            ..
        } => html("<h3 class=\"content-h3\">"),
        Tag::Paragraph => html("<p class=\"content-p\">"),
        Tag::List(None) => html("<ul class=\"content-ul\">\n"),
        Tag::Item => html("<li class=\"content-li\">"),
        Tag::Strong => html("<strong class=\"content-strong\">"),
        tag @ Tag::Link { .. } => with_class(tag, "a", "content-link"),
        tag @ Tag::BlockQuote(None) => with_class(tag, "blockquote", "content-blockquote"),
        tag => Event::Start(tag),
    }
}

/// Writes `tag` through the stock HTML writer, so attributes stay escaped, then
/// adds `class` to it. The matching end tag is left to the writer.
fn with_class<'a>(tag: Tag<'a>, name: &str, class: &str) -> Event<'a> {
    let mut start = String::new();
    pulldown_cmark::html::push_html(&mut start, std::iter::once(Event::Start(tag)));
    let open = format!("<{name}");
    let classed = start.replacen(&open, &format!("{open} class=\"{class}\""), 1);
    Event::Html(CowStr::from(classed))
}

fn close_tag<'a>(tag: TagEnd) -> Event<'a> {
    match tag {
        TagEnd::Heading(HeadingLevel::H2) => html("</h2>\n"),
        TagEnd::Heading(HeadingLevel::H3) => html("</h3>\n"),
        TagEnd::Paragraph => html("</p>\n"),
        TagEnd::List(false) => html("</ul>\n"),
        TagEnd::Item => html("</li>\n"),
        TagEnd::Strong => html("</strong>"),
        tag => Event::End(tag),
    }
}

/// Render markdown with the shared renderer.
pub fn render(markdown: &str) -> String {
    RENDERER.render(markdown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_classes() {
        let html = render("## Goals\n\nShip **fast**.\n\n---\n\n### Notes\n");
        assert!(html.contains("<h2 class=\"content-h2\">Goals</h2>"));
        assert!(html.contains(
            "<p class=\"content-p\">Ship <strong class=\"content-strong\">fast</strong>.</p>"
        ));
        assert!(html.contains("<hr class=\"content-hr\" />"));
        assert!(html.contains("<h3 class=\"content-h3\">Notes</h3>"));
    }

    #[test]
    fn test_unordered_lists_get_classes() {
        let html = render("- one\n- two\n");
        assert!(html.contains("<ul class=\"content-ul\">"));
        assert_eq!(html.matches("<li class=\"content-li\">").count(), 2);
        assert!(html.contains("</ul>"));
    }

    #[test]
    fn test_other_elements_render_normally() {
        let html = render("# Title\n\n1. first\n");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<ol>"));
    }

    #[test]
    fn test_links_and_blockquotes_get_classes() {
        let html = render("> quoted\n\n[link](https://example.com \"Home\")\n");
        assert!(html.contains("<blockquote class=\"content-blockquote\">"));
        assert!(html.contains("</blockquote>"));
        assert!(html.contains(
            "<a class=\"content-link\" href=\"https://example.com\" title=\"Home\">link</a>"
        ));
    }

    #[test]
    fn test_link_targets_stay_escaped() {
        let html = render("[q](https://example.com/?a=1&b=2)\n");
        assert!(html.contains(
            "<a class=\"content-link\" href=\"https://example.com/?a=1&amp;b=2\">q</a>"
        ));
    }

    #[test]
    fn test_code_blocks_are_highlighted() {
        let html = render("```rust\nfn main() {}\n```\n");
        assert!(html.contains("<pre style="));
        assert!(!html.contains("<code"));
        assert!(html.contains("main"));
    }

    #[test]
    fn test_unknown_language_still_renders() {
        let html = render("```nosuchlang\nplain words\n```\n");
        assert!(html.contains("plain words"));
    }
}

//! Static HTML projection of a [`View`].

use std::fmt::Write;

use super::view::{Card, Notice, NoticeKind, Section, View};

/// Stylesheet embedded in exported pages.
const PAGE_STYLE: &str = "body{margin:0;font-family:system-ui,sans-serif;background:#1e1e2e;color:#cdd6f4}\
main{max-width:1100px;margin:0 auto;padding:24px}\
h1{font-size:1.4rem;margin:0 0 8px}\
.meta{color:#a6adc8;font-size:.85rem;margin-bottom:16px}\
.section-title{color:#cba6f7;margin:24px 0 8px}\
.grid{display:grid;grid-template-columns:repeat(auto-fill,minmax(220px,1fr));gap:12px}\
.card{display:block;padding:12px;border-radius:10px;background:#313244;color:inherit;text-decoration:none}\
.card:hover{background:#45475a}\
.row{display:flex;align-items:center;gap:8px}\
.favicon{width:20px;height:20px}\
.name{font-weight:600}\
.desc{color:#a6adc8;font-size:.85rem;margin-top:6px}\
.tags{margin-top:8px;display:flex;flex-wrap:wrap;gap:4px}\
.tag{font-size:.75rem;color:#74c7ec}\
.error strong{color:#f38ba8}";

/// What: Escape text for safe insertion into HTML content or quoted attributes.
///
/// Inputs:
/// - `s`: Untrusted text.
///
/// Output:
/// - Text with `&`, `<`, `>`, `"`, and `'` replaced by entities.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// What: Render one card anchor.
fn card_html(out: &mut String, card: &Card) {
    let _ = write!(
        out,
        "<a class=\"card\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\"><div class=\"row\">",
        escape_html(&card.url)
    );
    if let Some(icon) = &card.icon {
        let _ = write!(
            out,
            "<img class=\"favicon\" src=\"{}\" alt=\"\" loading=\"lazy\" />",
            escape_html(icon)
        );
    }
    let _ = write!(
        out,
        "<span class=\"name\">{}</span></div><div class=\"desc\">{}</div>",
        escape_html(&card.name),
        escape_html(&card.desc)
    );
    if !card.tags.is_empty() {
        out.push_str("<div class=\"tags\">");
        for tag in &card.tags {
            let _ = write!(out, "<span class=\"tag\">#{}</span>", escape_html(tag));
        }
        out.push_str("</div>");
    }
    out.push_str("</a>");
}

/// What: Render one titled section with its grid.
fn section_html(out: &mut String, section: &Section) {
    let _ = write!(
        out,
        "<h3 class=\"section-title\">{}</h3><div class=\"grid\">",
        escape_html(&section.title)
    );
    for card in &section.cards {
        card_html(out, card);
    }
    out.push_str("</div>");
}

/// What: Render a notice card.
fn notice_html(out: &mut String, notice: &Notice) {
    let class = if notice.kind == NoticeKind::Error {
        "card error"
    } else {
        "card"
    };
    let _ = write!(
        out,
        "<article class=\"{class}\"><strong>{}</strong><div class=\"desc\">{}</div></article>",
        escape_html(&notice.title),
        escape_html(&notice.body)
    );
}

/// What: Render the page body for a view.
///
/// Inputs:
/// - `view`: Grid or notice to render.
///
/// Output:
/// - HTML fragment: section titles and card grids, or exactly one notice `<article>`.
#[must_use]
pub fn render_fragment(view: &View) -> String {
    let mut out = String::new();
    match view {
        View::Grid(sections) => {
            for section in sections {
                section_html(&mut out, section);
            }
        }
        View::Notice(notice) => notice_html(&mut out, notice),
    }
    out
}

/// What: Render a complete standalone HTML document.
///
/// Inputs:
/// - `view`: Body content.
/// - `title`: Document and heading title.
/// - `keyword`: Active filter, shown under the heading when non-empty.
///
/// Output:
/// - UTF-8 HTML page with an embedded stylesheet and no scripts.
#[must_use]
pub fn render_page(view: &View, title: &str, keyword: &str) -> String {
    let title = escape_html(title);
    let mut meta = format!("{} links", view.card_count());
    if !keyword.trim().is_empty() {
        let _ = write!(meta, " matching \u{201c}{}\u{201d}", escape_html(keyword.trim()));
    }
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\" />\n\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n\
<title>{title}</title>\n<style>{PAGE_STYLE}</style>\n</head>\n<body>\n<main>\n\
<h1>{title}</h1>\n<div class=\"meta\">{meta}</div>\n<div id=\"app\">{}</div>\n\
</main>\n</body>\n</html>\n",
        render_fragment(view)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{Entry, NoIcons};
    use crate::ui::view::build_view;

    fn entry(name: &str, tags: &[&str]) -> Entry {
        Entry {
            category: "Tools".to_string(),
            name: name.to_string(),
            url: "https://a.example/?q='x'".to_string(),
            desc: "fast & small".to_string(),
            tags: tags.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    /// What: All five special characters are escaped.
    ///
    /// Inputs:
    /// - String containing `& < > " '`.
    ///
    /// Output:
    /// - Entity-encoded string.
    fn escape_html_covers_specials() {
        assert_eq!(
            escape_html(r#"a&b<c>d"e'f"#),
            "a&amp;b&lt;c&gt;d&quot;e&#39;f"
        );
        assert_eq!(escape_html("plain 文本"), "plain 文本");
    }

    #[test]
    /// What: Markup in entry names is shown literally, never interpreted.
    ///
    /// Inputs:
    /// - Entry named `<b>X</b>`.
    ///
    /// Output:
    /// - Escaped name in the fragment and no raw `<b>` tag.
    fn names_are_escaped() {
        let html = render_fragment(&build_view(&[entry("<b>X</b>", &[])], &NoIcons));
        assert!(html.contains("&lt;b&gt;X&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("fast &amp; small"));
        assert!(html.contains("href=\"https://a.example/?q=&#39;x&#39;\""));
    }

    #[test]
    /// What: Tag container only appears for tagged cards; icons only when derived.
    ///
    /// Inputs:
    /// - One tagged and one untagged entry without an icon provider.
    ///
    /// Output:
    /// - Exactly one `tags` container with `#` badges, no `<img>`.
    fn tags_and_icons_are_optional() {
        let html = render_fragment(&build_view(
            &[entry("One", &["cli", "rust"]), entry("Two", &[])],
            &NoIcons,
        ));
        assert_eq!(html.matches("class=\"tags\"").count(), 1);
        assert!(html.contains("<span class=\"tag\">#cli</span><span class=\"tag\">#rust</span>"));
        assert!(!html.contains("<img"));
        assert_eq!(html.matches("<h3 class=\"section-title\">Tools</h3>").count(), 1);
    }

    #[test]
    /// What: Notices render as exactly one card and no grid.
    ///
    /// Inputs:
    /// - Empty view and an error view whose message contains markup.
    ///
    /// Output:
    /// - Single `<article>`, no `grid` div, escaped message.
    fn notices_replace_grid() {
        let empty = render_fragment(&build_view(&[], &NoIcons));
        assert_eq!(empty.matches("<article").count(), 1);
        assert!(empty.contains("No results"));
        assert!(!empty.contains("class=\"grid\""));

        let err = render_fragment(&View::load_failed("failed to fetch data: 500 <oops>"));
        assert_eq!(err.matches("<article").count(), 1);
        assert!(err.contains("failed to fetch data: 500 &lt;oops&gt;"));
        assert!(!err.contains("class=\"grid\""));
    }

    #[test]
    /// What: Full pages embed the fragment and describe the filter.
    ///
    /// Inputs:
    /// - Single-entry view, a title with markup, and a keyword.
    ///
    /// Output:
    /// - Doctype, escaped title, link count, and keyword line.
    fn render_page_wraps_fragment() {
        let view = build_view(&[entry("One", &[])], &NoIcons);
        let page = render_page(&view, "Links <home>", "one");
        assert!(page.starts_with("<!doctype html>"));
        assert!(page.contains("<title>Links &lt;home&gt;</title>"));
        assert!(page.contains("1 links matching"));
        assert!(page.contains(&render_fragment(&view)));
    }
}

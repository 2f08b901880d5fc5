//! Attachment link extraction from rendered article markup.

use anyhow::{anyhow, Result};
use scraper::{Html, Selector};
use url::Url;

/// Extract attachment URLs from `html`, in document order.
///
/// Keeps every `<a>` whose class list contains `marker_class` and whose href
/// starts with `path_prefix`, rewritten to an absolute URL against `origin`.
/// Anchors sharing the marker class but pointing elsewhere (navigation,
/// external links) are dropped. Duplicates are retained; the caller's ledger
/// decides what actually gets downloaded.
pub fn extract_attachment_urls(
    html: &str,
    origin: &str,
    marker_class: &str,
    path_prefix: &str,
) -> Result<Vec<String>> {
    let selector = Selector::parse(&format!("a.{marker_class}"))
        .map_err(|e| anyhow!("invalid attachment selector: {e}"))?;
    let base = Url::parse(origin).map_err(|e| anyhow!("invalid site origin {origin}: {e}"))?;

    let document = Html::parse_document(html);
    let mut urls = Vec::new();
    for anchor in document.select(&selector) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };
        let href = href.trim();
        if !href.starts_with(path_prefix) {
            continue;
        }
        if let Ok(absolute) = base.join(href) {
            urls.push(absolute.to_string());
        }
    }
    Ok(urls)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: &str = "https://iflightrc.freshdesk.com";
    const MARKER: &str = "filename";
    const PREFIX: &str = "/helpdesk/attachments/";

    fn extract(html: &str) -> Vec<String> {
        extract_attachment_urls(html, ORIGIN, MARKER, PREFIX).unwrap()
    }

    #[test]
    fn test_keeps_prefix_matches_and_drops_the_rest() {
        let html = r#"
            <a class="filename" href="/helpdesk/attachments/100/manual.pdf">manual</a>
            <a class="filename" href="/other/path/x">elsewhere</a>
        "#;
        assert_eq!(
            extract(html),
            vec!["https://iflightrc.freshdesk.com/helpdesk/attachments/100/manual.pdf"]
        );
    }

    #[test]
    fn test_ignores_anchors_without_marker_class() {
        let html = r#"
            <a href="/helpdesk/attachments/100/manual.pdf">no class</a>
            <a class="other" href="/helpdesk/attachments/200/fw.zip">wrong class</a>
        "#;
        assert!(extract(html).is_empty());
    }

    #[test]
    fn test_preserves_document_order() {
        let html = r#"
            <div><a class="filename" href="/helpdesk/attachments/2/b.zip">b</a></div>
            <a class="filename" href="/helpdesk/attachments/1/a.pdf">a</a>
        "#;
        assert_eq!(
            extract(html),
            vec![
                "https://iflightrc.freshdesk.com/helpdesk/attachments/2/b.zip",
                "https://iflightrc.freshdesk.com/helpdesk/attachments/1/a.pdf",
            ]
        );
    }

    #[test]
    fn test_retains_duplicates_across_pages() {
        // The dump file concatenates several article pages; the same
        // attachment may be linked from more than one of them.
        let page = r#"<a class="filename" href="/helpdesk/attachments/7/tune.txt">t</a>"#;
        let dump = format!("{page}\n{page}");
        assert_eq!(extract(&dump).len(), 2);
    }

    #[test]
    fn test_marker_class_among_others_still_matches() {
        let html =
            r#"<a class="ellipsis filename bold" href="/helpdesk/attachments/3/c.pdf">c</a>"#;
        assert_eq!(
            extract(html),
            vec!["https://iflightrc.freshdesk.com/helpdesk/attachments/3/c.pdf"]
        );
    }

    #[test]
    fn test_missing_href_is_skipped() {
        let html = r#"<a class="filename">no href</a>"#;
        assert!(extract(html).is_empty());
    }
}

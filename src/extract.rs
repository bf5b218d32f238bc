use crate::renderer::RenderedPage;
use crate::results::PageExtraction;
use scraper::{Html, Selector};
use url::Url;

/// Pulls paragraph texts and outbound links from a rendered page.
///
/// Paragraph text is whitespace-normalized; anchor hrefs are resolved to
/// absolute URLs against the page URL. A page with no body or no matching
/// elements yields empty sequences, never an error.
pub fn extract(page: &RenderedPage) -> PageExtraction {
    let doc = Html::parse_document(&page.html);

    // Extract paragraph text
    let paragraph_selector = Selector::parse("p").unwrap();
    let paragraphs = doc
        .select(&paragraph_selector)
        .map(|p| {
            p.text()
                .collect::<Vec<_>>()
                .join(" ")
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|text| !text.is_empty())
        .collect::<Vec<String>>();

    // Extract links, resolved against the page URL
    let base = Url::parse(&page.url).ok();
    let link_selector = Selector::parse("a").unwrap();
    let links = doc
        .select(&link_selector)
        .filter_map(|e| e.value().attr("href"))
        .filter_map(|href| resolve(base.as_ref(), href))
        .collect::<Vec<String>>();

    ::log::debug!(
        "Extracted {} paragraphs and {} links from {}",
        paragraphs.len(),
        links.len(),
        page.url
    );

    PageExtraction::new(page.url.clone(), paragraphs, links)
}

/// Resolves an href to an absolute URL, dropping hrefs that cannot be parsed
fn resolve(base: Option<&Url>, href: &str) -> Option<String> {
    match base {
        Some(base) => base.join(href).ok().map(|u| u.to_string()),
        None => Url::parse(href).ok().map(|u| u.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(url: &str, html: &str) -> RenderedPage {
        RenderedPage {
            url: url.to_string(),
            html: html.to_string(),
        }
    }

    #[test]
    fn test_extracts_paragraphs_and_links() {
        let html = r#"
            <html><body>
                <p>First   paragraph
                with   odd whitespace</p>
                <p>Second paragraph</p>
                <a href="https://example.com/about">About</a>
            </body></html>
        "#;
        let result = extract(&page("https://example.com/", html));

        assert_eq!(
            result.paragraphs,
            vec![
                "First paragraph with odd whitespace".to_string(),
                "Second paragraph".to_string()
            ]
        );
        assert_eq!(result.links, vec!["https://example.com/about".to_string()]);
        assert_eq!(result.url, "https://example.com/");
    }

    #[test]
    fn test_relative_links_resolve_against_page_url() {
        let html = r#"<body><a href="/docs">Docs</a><a href="faq.html">FAQ</a></body>"#;
        let result = extract(&page("https://example.com/help/", html));

        assert_eq!(
            result.links,
            vec![
                "https://example.com/docs".to_string(),
                "https://example.com/help/faq.html".to_string()
            ]
        );
    }

    #[test]
    fn test_page_without_paragraphs_yields_empty_sequence() {
        let html = "<html><body><div>No paragraphs here</div></body></html>";
        let result = extract(&page("https://example.com/", html));

        assert!(result.paragraphs.is_empty());
        assert!(result.links.is_empty());
    }

    #[test]
    fn test_empty_document() {
        let result = extract(&page("https://example.com/", ""));

        assert!(result.paragraphs.is_empty());
        assert!(result.links.is_empty());
    }

    #[test]
    fn test_unparseable_href_is_dropped() {
        // Without a parseable base URL, only absolute hrefs survive
        let html = r#"<body><a href="relative/path">x</a><a href="https://example.com/a">y</a></body>"#;
        let result = extract(&page("not a url", html));

        assert_eq!(result.links, vec!["https://example.com/a".to_string()]);
    }

    #[test]
    fn test_nested_paragraph_text_is_flattened() {
        let html = "<body><p>Hello <b>bold</b> world</p></body>";
        let result = extract(&page("https://example.com/", html));

        assert_eq!(result.paragraphs, vec!["Hello bold world".to_string()]);
    }
}

//! HTML to plain text helpers built on `scraper`.
//!
//! Text is emitted one text node per line, each trimmed, blanks dropped.
//! Script and style bodies never count as text.

use scraper::{ElementRef, Html, Selector};

/// Containers that hold the product copy on Shopify themes, in priority order
pub const DESCRIPTION_SELECTORS: [&str; 3] = [
    "div.product-description",
    "div.rte",
    "div.product__description",
];

/// Plain text of an HTML fragment (e.g. a product's `body_html`)
pub fn fragment_text(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    element_text(fragment.root_element())
}

/// Text of an element's descendants, newline-separated
pub fn element_text(element: ElementRef) -> String {
    element
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let in_code = node
                .parent()
                .and_then(|p| p.value().as_element().map(|e| e.name().to_string()))
                .map(|name| matches!(name.as_str(), "script" | "style" | "noscript"))
                .unwrap_or(false);
            if in_code {
                return None;
            }
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Trimmed text of the first `<h1>`. An empty heading still counts and gives `Some("")`.
pub fn first_heading(document: &Html) -> Option<String> {
    let selector = Selector::parse("h1").ok()?;
    document
        .select(&selector)
        .next()
        .map(|h1| h1.text().collect::<String>().trim().to_string())
}

/// Text of the first description container found, trying selectors in order.
/// `None` when no selector matches; a matching but empty container gives `Some("")`.
pub fn description_text(document: &Html) -> Option<String> {
    DESCRIPTION_SELECTORS.iter().find_map(|selector_str| {
        let selector = Selector::parse(selector_str).ok()?;
        document.select(&selector).next().map(element_text)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_text_one_line_per_node() {
        let html = "<p>Hourglass <strong>corsetry</strong></p>\n<ul><li>Boning</li><li>  Silk lining </li></ul>";
        assert_eq!(fragment_text(html), "Hourglass\ncorsetry\nBoning\nSilk lining");
    }

    #[test]
    fn test_script_and_style_are_ignored() {
        let html = "<div><style>.x{color:red}</style><p>Visible copy</p><script>track()</script></div>";
        assert_eq!(fragment_text(html), "Visible copy");
    }

    #[test]
    fn test_first_heading() {
        let doc = Html::parse_document("<body><h1>  The Aria Gown </h1><h1>Other</h1></body>");
        assert_eq!(first_heading(&doc), Some("The Aria Gown".to_string()));

        let none = Html::parse_document("<body><h2>Sub</h2></body>");
        assert_eq!(first_heading(&none), None);

        let blank = Html::parse_document("<body><h1>   </h1></body>");
        assert_eq!(first_heading(&blank), Some(String::new()));
    }

    #[test]
    fn test_description_selector_priority() {
        // div.rte appears first in the document, but product-description wins on priority
        let doc = Html::parse_document(
            r#"<div class="rte">Theme text block</div>
               <div class="product-description wide"><p>Structured bodice detail</p></div>"#,
        );
        assert_eq!(
            description_text(&doc),
            Some("Structured bodice detail".to_string())
        );
    }

    #[test]
    fn test_description_missing_and_empty() {
        let missing = Html::parse_document("<div class='other'>Nope</div>");
        assert_eq!(description_text(&missing), None);

        let empty = Html::parse_document("<div class='product__description'>   </div>");
        assert_eq!(description_text(&empty), Some(String::new()));
    }
}

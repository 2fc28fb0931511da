use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::ListingError;

const HEADER_TEXT: &str = "Complete listing";

/// Pulls the data file links out of a landing page.
///
/// Finds the first `th` whose own text contains "Complete listing", then
/// collects every `a[href]` inside the `td` cells of that header's row, in
/// document order and keeping duplicates. Each href is joined onto
/// `base_url`, so relative links become absolute and absolute ones pass
/// through.
pub fn extract_links(html: &str, base_url: &Url) -> Result<Vec<Url>, ListingError> {
    let document = Html::parse_document(html);
    let th_selector = selector("th");
    let a_selector = selector("a[href]");

    let header = document
        .select(&th_selector)
        .find(|th| first_text_contains(th, HEADER_TEXT))
        .ok_or(ListingError::NoCompleteListing)?;

    let row = header
        .parent()
        .and_then(ElementRef::wrap)
        .ok_or(ListingError::NoCompleteListing)?;

    let mut links = Vec::new();
    for cell in row.children().filter_map(ElementRef::wrap).filter(|e| e.value().name() == "td") {
        for anchor in cell.select(&a_selector) {
            let Some(href) = anchor.value().attr("href") else { continue };
            let url = base_url.join(href).map_err(|source| ListingError::InvalidHref {
                href: href.to_string(),
                source,
            })?;
            links.push(url);
        }
    }

    if links.is_empty() {
        return Err(ListingError::EmptyListing);
    }
    Ok(links)
}

fn selector(css: &'static str) -> Selector {
    Selector::parse(css).expect("static selector")
}

// first direct text child only, the way xpath's contains(text(), ..) reads it
fn first_text_contains(element: &ElementRef, needle: &str) -> bool {
    element
        .children()
        .find_map(|node| node.value().as_text())
        .is_some_and(|text| text.contains(needle))
}

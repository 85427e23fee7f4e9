// src/extract/listing.rs
// =============================================================================
// This module extracts restaurants from a city listing page.
//
// A listing page shows at most 20 restaurants; the header carries the
// city's total restaurant count (e.g. "/ 134"), from which the number of
// pages follows as ceil(count / 20). Follow-up pages live at
// <city-url>/2, <city-url>/3 and so on.
//
// Each restaurant row links to its review page through a data-review-href
// attribute; the second-to-last path segment of that URL is the
// restaurant's slug, and <site-origin>/<slug> is the restaurant's own
// page, which is the one we actually want to visit.
//
// Rust concepts:
// - Result<T, E>: The count is load-bearing, so failing to find or parse
//   it is an error the caller must decide about
// - Integer arithmetic: div_ceil for the pagination math
// =============================================================================

use anyhow::{anyhow, Context, Result};
use scraper::{Html, Selector};

// Restaurants shown per listing page
pub const PAGE_SIZE: u32 = 20;

// Reads the city's total restaurant count from the listing header
//
// Parameters:
//   html: the listing page HTML
//
// Returns: the parsed count, or an error if the header is missing or
// does not contain a number
//
// Example header markup:
//   <div class="wrap_top_title"><span class="grey">/ 134</span></div>
pub fn restaurant_count(html: &str) -> Result<u32> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("div.wrap_top_title span.grey").unwrap();

    let span = document
        .select(&selector)
        .next()
        .ok_or_else(|| anyhow!("restaurant count not found on listing page"))?;

    let text = span.text().collect::<String>();

    // The header reads "/ 134": drop the slash, trim, parse the rest
    let digits = text.trim().replace('/', "");
    digits
        .trim()
        .parse::<u32>()
        .with_context(|| format!("could not parse restaurant count from '{}'", text.trim()))
}

// Computes how many listing pages a city has
//
// ceil(count / PAGE_SIZE), but never less than one: even a city with
// zero listed restaurants still has the page we just fetched.
pub fn page_count(restaurant_count: u32) -> u32 {
    restaurant_count.div_ceil(PAGE_SIZE).max(1)
}

// Builds the URL of a specific listing page
//
// Page 1 is the city URL itself; later pages append /<page>.
pub fn listing_page_url(city_url: &str, page: u32) -> String {
    format!("{}/{}", city_url.trim_end_matches('/'), page)
}

// Extracts restaurant page URLs from one listing page
//
// Parameters:
//   html: the listing page HTML
//   origin: the site origin, e.g. "https://ru.restaurantguru.com"
//
// Returns: Vec<String> of restaurant page URLs in row order
pub fn restaurant_urls(html: &str, origin: &str) -> Vec<String> {
    let mut urls = Vec::new();

    let document = Html::parse_document(html);
    let selector = Selector::parse("div.restaurant_container div.restaurant_row").unwrap();

    for row in document.select(&selector) {
        if let Some(href) = row.value().attr("data-review-href") {
            if let Some(url) = restaurant_page_url(origin, href) {
                urls.push(url);
            }
        }
    }

    urls
}

// Turns a review URL into the restaurant's own page URL
//
// The slug is the second-to-last path segment of the review URL:
//   "https://host/Old-Tavern-Tbilisi/reviews" -> "Old-Tavern-Tbilisi"
//
// Returns None when the href has fewer than two segments.
fn restaurant_page_url(origin: &str, review_href: &str) -> Option<String> {
    let slug = review_href
        .rsplit('/')
        .filter(|segment| !segment.is_empty())
        .nth(1)?;
    Some(format!("{}/{}", origin.trim_end_matches('/'), slug))
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is div_ceil?
//    - Integer division that rounds up instead of down
//    - 21.div_ceil(20) == 2, 40.div_ceil(20) == 2, 41.div_ceil(20) == 3
//    - Exactly the "how many pages do I need" calculation
//
// 2. What does rsplit('/').filter(..).nth(1) do?
//    - rsplit walks the segments from the end of the string
//    - filter drops empty segments (trailing slashes produce those)
//    - nth(1) is the second segment from the end: the slug
//
// 3. Why with_context?
//    - anyhow's way to wrap an error with a human-readable message
//    - The original header text ends up in the warning, which makes
//      markup drift much easier to diagnose from a log
// -----------------------------------------------------------------------------

// src/extract/letters.rs
// =============================================================================
// This module extracts the alphabet navigation from the directory index.
//
// The index page groups cities under one heading per initial letter
// (<div class="part_title">). Each heading leads to a letter page at
// <index-url>/<letter>-t, where <letter> is the (usually Cyrillic)
// character itself. Browsers percent-encode such characters in URLs, and
// so does the url crate when we round-trip through Url::parse.
//
// Rust concepts:
// - Iterators: chars().next() to get the first character of a string
// - Option: Headings can be empty, so "first character" might not exist
// =============================================================================

use scraper::{Html, Selector};
use url::Url;

// Extracts letter-page URLs from the alphabet index page
//
// Parameters:
//   html: the index page HTML
//   index_url: the URL the index page was fetched from
//
// Returns: Vec<String> with one absolute URL per letter heading
//
// Example:
//   html = "<div class='part_title'>Д</div>"
//   index_url = "https://ru.restaurantguru.com/cities-Georgia-c"
//   result = ["https://ru.restaurantguru.com/cities-Georgia-c/%D0%94-t"]
pub fn letter_page_urls(html: &str, index_url: &str) -> Vec<String> {
    let mut urls = Vec::new();

    // Parse the HTML into a document
    let document = Html::parse_document(html);

    // Our selector is a constant and known to be valid, so unwrap is OK
    let selector = Selector::parse("div.part_title").unwrap();

    let base = index_url.trim_end_matches('/');

    for heading in document.select(&selector) {
        // Collect the heading text and take its first character
        let text = heading.text().collect::<String>();
        let letter = match text.trim().chars().next() {
            Some(ch) => ch,
            None => continue, // empty heading, nothing to link to
        };

        // Round-trip through Url so the letter gets percent-encoded
        // exactly the way the site expects it in the path
        match Url::parse(&format!("{}/{}-t", base, letter)) {
            Ok(url) => urls.push(url.to_string()),
            Err(_) => {
                eprintln!("Warning: could not build letter URL for '{}'", letter);
            }
        }
    }

    urls
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why chars().next() instead of indexing?
//    - Rust strings are UTF-8; s[0] would not even compile
//    - chars() iterates over whole characters, so a Cyrillic 'Д'
//      (two bytes) comes out as one char
//
// 2. What does text().collect::<String>() do?
//    - An element's text() is an iterator over its text nodes
//    - Collecting them into a String gives us the visible text
//
// 3. Why round-trip through Url::parse?
//    - The url crate normalizes and percent-encodes the path for us
//    - "Д-t" becomes "%D0%94-t", which is what the server expects
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const INDEX_URL: &str = "https://ru.restaurantguru.com/cities-Georgia-c";

    #[test]
    fn test_single_letter() {
        let html = r#"<div class="part_title">Д</div>"#;
        let urls = letter_page_urls(html, INDEX_URL);
        assert_eq!(
            urls,
            vec!["https://ru.restaurantguru.com/cities-Georgia-c/%D0%94-t"]
        );
    }

    #[test]
    fn test_multiple_letters_keep_page_order() {
        let html = r#"
            <div class="part_title">А</div>
            <div class="part_title">Б</div>
            <div class="part_title">В</div>
        "#;
        let urls = letter_page_urls(html, INDEX_URL);
        assert_eq!(urls.len(), 3);
        assert!(urls[0].ends_with("/%D0%90-t"));
        assert!(urls[1].ends_with("/%D0%91-t"));
        assert!(urls[2].ends_with("/%D0%92-t"));
    }

    #[test]
    fn test_heading_text_is_trimmed_to_first_char() {
        // Headings sometimes carry whitespace or a count after the letter
        let html = r#"<div class="part_title">  Т (12) </div>"#;
        let urls = letter_page_urls(html, INDEX_URL);
        assert_eq!(urls.len(), 1);
        assert!(urls[0].ends_with("/%D0%A2-t"));
    }

    #[test]
    fn test_ascii_letter_stays_literal() {
        let html = r#"<div class="part_title">K</div>"#;
        let urls = letter_page_urls(html, "https://restaurantguru.com/cities-Georgia-c/");
        assert_eq!(
            urls,
            vec!["https://restaurantguru.com/cities-Georgia-c/K-t"]
        );
    }

    #[test]
    fn test_empty_heading_is_skipped() {
        let html = r#"<div class="part_title">  </div><div class="part_title">Г</div>"#;
        let urls = letter_page_urls(html, INDEX_URL);
        assert_eq!(urls.len(), 1);
    }

    #[test]
    fn test_no_headings() {
        let html = "<html><body><p>nothing here</p></body></html>";
        assert!(letter_page_urls(html, INDEX_URL).is_empty());
    }
}

// src/extract/restaurant.rs
// =============================================================================
// This module extracts the name and description from a restaurant page.
//
// The name lives inside the title block (the h1 is marked "notranslate"
// so translation widgets leave it alone). The description block is
// optional: plenty of small-town restaurants simply don't have one, and
// in that case the guide stores an empty string rather than dropping the
// restaurant.
//
// Rust concepts:
// - Result vs plain values: A missing name is an error (it's the map
//   key), a missing description is a normal, expected case
// =============================================================================

use anyhow::{anyhow, Result};
use scraper::{Html, Selector};

// Extracts the restaurant's display name
//
// Parameters:
//   html: the restaurant page HTML
//
// Returns: the name, or an error if the title block is missing
//
// The name becomes the key in the per-city guide map, so a page without
// one cannot be stored and the caller skips it.
pub fn restaurant_name(html: &str) -> Result<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("div.title_container h1.notranslate a").unwrap();

    let anchor = document
        .select(&selector)
        .next()
        .ok_or_else(|| anyhow!("restaurant name not found on page"))?;

    let name = anchor.text().collect::<String>().trim().to_string();
    if name.is_empty() {
        return Err(anyhow!("restaurant name is empty"));
    }

    Ok(name)
}

// Extracts the restaurant's description, if it has one
//
// Parameters:
//   html: the restaurant page HTML
//
// Returns: the description text, or "" when the page has no
// description block
pub fn restaurant_description(html: &str) -> String {
    let document = Html::parse_document(html);
    let selector = Selector::parse("div.description div").unwrap();

    match document.select(&selector).next() {
        Some(block) => block.text().collect::<String>().trim().to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_name() {
        let html = r#"
            <div class="title_container">
                <h1 class="notranslate"><a href="/Old-Tavern-Tbilisi">Старая Таверна</a></h1>
            </div>
        "#;
        assert_eq!(restaurant_name(html).unwrap(), "Старая Таверна");
    }

    #[test]
    fn test_name_is_trimmed() {
        let html = r#"
            <div class="title_container">
                <h1 class="notranslate"><a>
                    Чвени
                </a></h1>
            </div>
        "#;
        assert_eq!(restaurant_name(html).unwrap(), "Чвени");
    }

    #[test]
    fn test_missing_title_block_is_an_error() {
        let html = "<html><body><h1>Не то</h1></body></html>";
        assert!(restaurant_name(html).is_err());
    }

    #[test]
    fn test_extract_description() {
        let html = r#"
            <div class="description">
                <div>Грузинская кухня в старом городе.</div>
            </div>
        "#;
        assert_eq!(
            restaurant_description(html),
            "Грузинская кухня в старом городе."
        );
    }

    #[test]
    fn test_missing_description_falls_back_to_empty() {
        let html = r#"
            <div class="title_container">
                <h1 class="notranslate"><a>Чвени</a></h1>
            </div>
        "#;
        assert_eq!(restaurant_description(html), "");
    }
}

// src/extract/cities.rs
// =============================================================================
// This module extracts the city list from a letter page.
//
// Each letter page carries one <ul class="cities-list"> whose <li> items
// link to the restaurant listing of a city. We keep both the visible city
// name (used as the grouping key in the final guide) and the absolute
// listing URL.
//
// Rust concepts:
// - Structs with derive macros: City is both Debug-printable and
//   JSON-serializable (the `cities --json` subcommand relies on that)
// - Option chaining: Not every <li> necessarily contains a usable link
// =============================================================================

use scraper::{Html, Selector};
use serde::Serialize;
use url::Url;

// One city discovered on a letter page
#[derive(Debug, Clone, Serialize)]
pub struct City {
    /// Visible city name, e.g. "Тбилиси"
    pub name: String,
    /// Absolute URL of the city's restaurant listing
    pub url: String,
}

// Extracts all cities from a letter page
//
// Parameters:
//   html: the letter page HTML
//   page_url: the URL the page was fetched from (for resolving relative hrefs)
//
// Returns: Vec<City> in page order
//
// The site emits absolute hrefs today, but resolving against the page URL
// keeps relative ones working too, the way a browser would.
pub fn extract_cities(html: &str, page_url: &str) -> Vec<City> {
    let mut cities = Vec::new();

    let document = Html::parse_document(html);
    let selector = Selector::parse("ul.cities-list li a").unwrap();

    // Parse the page URL once so we can resolve relative links
    let base = match Url::parse(page_url) {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Warning: invalid letter page URL: {}", page_url);
            return cities;
        }
    };

    for anchor in document.select(&selector) {
        let href = match anchor.value().attr("href") {
            Some(href) => href,
            None => continue,
        };

        // Resolve to an absolute URL; skip anything unparseable
        let url = match base.join(href) {
            Ok(url) => url.to_string(),
            Err(_) => continue,
        };

        let name = anchor.text().collect::<String>().trim().to_string();
        if name.is_empty() {
            continue; // a nameless city could never be a guide key
        }

        cities.push(City { name, url });
    }

    cities
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE_URL: &str = "https://ru.restaurantguru.com/cities-Georgia-c/%D0%A2-t";

    #[test]
    fn test_extract_cities() {
        let html = r#"
            <ul class="cities-list clearfix clear scroll-container">
                <li><a href="https://ru.restaurantguru.com/restaurant-Tbilisi-t">Тбилиси</a></li>
                <li><a href="https://ru.restaurantguru.com/restaurant-Telavi-t">Телави</a></li>
            </ul>
        "#;
        let cities = extract_cities(html, PAGE_URL);
        assert_eq!(cities.len(), 2);
        assert_eq!(cities[0].name, "Тбилиси");
        assert_eq!(
            cities[0].url,
            "https://ru.restaurantguru.com/restaurant-Tbilisi-t"
        );
        assert_eq!(cities[1].name, "Телави");
    }

    #[test]
    fn test_relative_href_resolves_against_page_url() {
        let html = r#"
            <ul class="cities-list">
                <li><a href="/restaurant-Tbilisi-t">Тбилиси</a></li>
            </ul>
        "#;
        let cities = extract_cities(html, PAGE_URL);
        assert_eq!(
            cities[0].url,
            "https://ru.restaurantguru.com/restaurant-Tbilisi-t"
        );
    }

    #[test]
    fn test_city_name_is_trimmed() {
        let html = r#"
            <ul class="cities-list">
                <li><a href="/restaurant-Telavi-t">
                    Телави
                </a></li>
            </ul>
        "#;
        let cities = extract_cities(html, PAGE_URL);
        assert_eq!(cities[0].name, "Телави");
    }

    #[test]
    fn test_anchor_without_href_is_skipped() {
        let html = r#"
            <ul class="cities-list">
                <li><a>Безссылочный</a></li>
                <li><a href="/restaurant-Batumi-t">Батуми</a></li>
            </ul>
        "#;
        let cities = extract_cities(html, PAGE_URL);
        assert_eq!(cities.len(), 1);
        assert_eq!(cities[0].name, "Батуми");
    }

    #[test]
    fn test_links_outside_the_city_list_are_ignored() {
        let html = r#"
            <a href="/somewhere">Навигация</a>
            <ul class="cities-list">
                <li><a href="/restaurant-Gori-t">Гори</a></li>
            </ul>
        "#;
        let cities = extract_cities(html, PAGE_URL);
        assert_eq!(cities.len(), 1);
    }

    #[test]
    fn test_missing_list() {
        let html = "<html><body></body></html>";
        assert!(extract_cities(html, PAGE_URL).is_empty());
    }
}

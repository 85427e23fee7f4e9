// src/crawl/pipeline.rs
// =============================================================================
// This module implements the four-tier crawl over the directory:
//
//   alphabet index -> letter pages -> city listings (paginated)
//                  -> restaurant pages
//
// Execution is strictly sequential: one page in flight at a time, with
// the fetcher's randomized delay between requests. The directory rate
// limits aggressively, so the delay IS the concurrency policy here.
//
// Failure policy:
// - The index page is the root of everything, so losing it is fatal
// - Any other page that fails to download or parse is reported on
//   stderr, counted, and skipped; the crawl keeps going
//
// Rust concepts:
// - Tuples as return values: (data, skipped) pairs let the caller decide
//   what a partial run means for the exit code
// - Borrowing: every stage borrows the same PageFetcher
// =============================================================================

use anyhow::{anyhow, Context, Result};
use url::Url;

use crate::extract::{self, City};
use crate::fetch::PageFetcher;
use crate::report::{Guide, GuideReport, RestaurantEntry};

// A city together with every restaurant page URL found in its listing
#[derive(Debug, Clone)]
pub struct CityRoster {
    pub city: City,
    pub restaurant_urls: Vec<String>,
}

// Derives the site origin (scheme + host) from the index URL
//
// Restaurant slugs and letter pages hang off the origin, not off the
// index path, so we compute it once up front.
//
// Example:
//   "https://ru.restaurantguru.com/cities-Georgia-c"
//   -> "https://ru.restaurantguru.com"
pub fn site_origin(index_url: &str) -> Result<String> {
    let url = Url::parse(index_url)
        .with_context(|| format!("invalid index URL '{}'", index_url))?;

    if url.host_str().is_none() {
        return Err(anyhow!("index URL has no host: {}", index_url));
    }

    Ok(url.origin().ascii_serialization())
}

// Tier 1: fetches the alphabet index and derives the letter-page URLs
//
// This is the only stage where failure is fatal; without the index there
// is nothing to crawl.
pub async fn collect_letter_pages(fetcher: &PageFetcher, index_url: &str) -> Result<Vec<String>> {
    let html = fetcher
        .fetch(index_url)
        .await
        .with_context(|| format!("could not fetch the alphabet index at {}", index_url))?;

    let urls = extract::letter_page_urls(&html, index_url);
    if urls.is_empty() {
        return Err(anyhow!("no letter headings found on {}", index_url));
    }

    Ok(urls)
}

// Tier 2: fetches every letter page and accumulates the cities
//
// Returns: (cities in discovery order, number of letter pages skipped)
pub async fn collect_cities(fetcher: &PageFetcher, letter_urls: &[String]) -> (Vec<City>, usize) {
    let mut cities = Vec::new();
    let mut skipped = 0;

    for (index, url) in letter_urls.iter().enumerate() {
        println!("  Letter {}/{}: {}", index + 1, letter_urls.len(), url);

        match fetcher.fetch(url).await {
            Ok(html) => {
                let found = extract::extract_cities(&html, url);
                println!("     {} city(ies) found", found.len());
                cities.extend(found);
            }
            Err(e) => {
                eprintln!("  Warning: skipping letter page {}: {}", url, e);
                skipped += 1;
            }
        }
    }

    (cities, skipped)
}

// Tier 3: walks every city listing, pagination included
//
// For each city: fetch the listing, read the restaurant count, harvest
// the rows of page 1, then pages 2..=ceil(count/20).
//
// Returns: (rosters for cities that produced URLs, pages skipped)
pub async fn collect_city_restaurants(
    fetcher: &PageFetcher,
    cities: &[City],
    origin: &str,
) -> (Vec<CityRoster>, usize) {
    let mut rosters = Vec::new();
    let mut skipped = 0;

    for (index, city) in cities.iter().enumerate() {
        println!("  City {}/{}: {}", index + 1, cities.len(), city.name);

        let html = match fetcher.fetch(&city.url).await {
            Ok(html) => html,
            Err(e) => {
                eprintln!("  Warning: skipping city '{}': {}", city.name, e);
                skipped += 1;
                continue;
            }
        };

        // Without the count we can't know how many pages the city has
        let count = match extract::restaurant_count(&html) {
            Ok(count) => count,
            Err(e) => {
                eprintln!("  Warning: skipping city '{}': {}", city.name, e);
                skipped += 1;
                continue;
            }
        };

        let pages = extract::page_count(count);
        println!("     {} restaurant(s) across {} page(s)", count, pages);

        // Page 1 is the listing we already hold
        let mut restaurant_urls = extract::restaurant_urls(&html, origin);

        for page in 2..=pages {
            let page_url = extract::listing_page_url(&city.url, page);
            println!("     Page {}/{}: {}", page, pages, page_url);

            match fetcher.fetch(&page_url).await {
                Ok(html) => {
                    restaurant_urls.extend(extract::restaurant_urls(&html, origin));
                }
                Err(e) => {
                    // One lost page should not cost us the whole city
                    eprintln!("  Warning: skipping page {} of '{}': {}", page, city.name, e);
                    skipped += 1;
                }
            }
        }

        rosters.push(CityRoster {
            city: city.clone(),
            restaurant_urls,
        });
    }

    (rosters, skipped)
}

// Tier 4: visits every restaurant page and assembles the guide
//
// A page with no name cannot be stored (the name is the map key) and is
// skipped; a page with no description is stored with an empty one.
//
// Returns: (the finished report, restaurant pages skipped)
pub async fn collect_guide(
    fetcher: &PageFetcher,
    rosters: &[CityRoster],
) -> (GuideReport, usize) {
    let mut guide = Guide::new();
    let mut collected = 0;
    let mut skipped = 0;

    for (index, roster) in rosters.iter().enumerate() {
        println!(
            "  City {}/{}: {} ({} restaurant(s))",
            index + 1,
            rosters.len(),
            roster.city.name,
            roster.restaurant_urls.len()
        );

        let city_guide = guide.entry(roster.city.name.clone()).or_default();

        for (r_index, url) in roster.restaurant_urls.iter().enumerate() {
            println!(
                "     Restaurant {}/{}: {}",
                r_index + 1,
                roster.restaurant_urls.len(),
                url
            );

            let html = match fetcher.fetch(url).await {
                Ok(html) => html,
                Err(e) => {
                    eprintln!("  Warning: skipping restaurant {}: {}", url, e);
                    skipped += 1;
                    continue;
                }
            };

            let name = match extract::restaurant_name(&html) {
                Ok(name) => name,
                Err(e) => {
                    eprintln!("  Warning: skipping restaurant {}: {}", url, e);
                    skipped += 1;
                    continue;
                }
            };

            let description = extract::restaurant_description(&html);

            city_guide.insert(
                name,
                RestaurantEntry {
                    url: url.clone(),
                    description,
                },
            );
            collected += 1;
        }
    }

    (GuideReport(collected, guide), skipped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_origin() {
        assert_eq!(
            site_origin("https://ru.restaurantguru.com/cities-Georgia-c").unwrap(),
            "https://ru.restaurantguru.com"
        );
    }

    #[test]
    fn test_site_origin_drops_path_and_query() {
        assert_eq!(
            site_origin("https://restaurantguru.com/cities-Georgia-c/%D0%A2-t?page=2").unwrap(),
            "https://restaurantguru.com"
        );
    }

    #[test]
    fn test_site_origin_rejects_garbage() {
        assert!(site_origin("not a url").is_err());
    }
}

// src/crawl/mod.rs
// =============================================================================
// This module handles the crawl itself.
//
// Features:
// - Four sequential tiers: index -> letters -> city listings -> restaurants
// - Pagination over city listings (20 restaurants per page)
// - Randomized delay between every two requests (via fetch::PageFetcher)
// - Warn-and-skip on individual page failures, with a skipped-page count
//
// Why tiers instead of a generic queue?
// - The directory is a strict hierarchy; each tier needs a different
//   extraction step and feeds the next one
// - Keeping the stages explicit makes the progress output match what the
//   crawl is actually doing
// =============================================================================

mod pipeline;

// Re-export the pipeline stages and their data types
pub use pipeline::{
    collect_cities, collect_city_restaurants, collect_guide, collect_letter_pages, site_origin,
    CityRoster,
};

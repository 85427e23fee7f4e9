// src/fetch/page.rs
// =============================================================================
// This module downloads directory pages over HTTP.
//
// Key functionality:
// - One reqwest Client shared by the whole crawl (connection pooling)
// - Treats non-2xx responses as errors so callers can skip bad pages
// - Applies the politeness throttle after every successful download
//
// The original data source is rendered server-side, so a plain HTTP GET
// is enough; no browser automation is involved.
//
// Rust concepts:
// - Structs with methods: PageFetcher bundles the client and the throttle
// - async/await: Network I/O without blocking
// - Result<T, E>: For operations that can fail
// =============================================================================

use anyhow::{anyhow, Result};
use reqwest::Client;
use std::time::Duration;

use super::throttle::Throttle;

// Downloads pages and paces itself between requests
//
// The whole pipeline funnels through fetch(), which is what guarantees
// the delay applies uniformly to every tier of the crawl.
pub struct PageFetcher {
    client: Client,
    throttle: Throttle,
}

impl PageFetcher {
    // Creates a fetcher with reasonable client settings
    //
    // Parameters:
    //   throttle: the delay policy to apply after each fetch
    pub fn new(throttle: Throttle) -> Result<Self> {
        // Reuse this client for all requests (connection pooling)
        let client = Client::builder()
            .timeout(Duration::from_secs(30)) // directory pages can be slow
            .build()?;

        Ok(Self { client, throttle })
    }

    // Fetches a page and returns its HTML content
    //
    // Parameters:
    //   url: the page to download
    //
    // Returns: the response body as a String
    //
    // A non-success status code (404, 500, ...) becomes an error here,
    // so callers never have to inspect status codes themselves.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(anyhow!("HTTP {} for {}", response.status(), url));
        }

        let html = response.text().await?;

        // Polite crawling: wait before whoever calls us fetches again
        self.throttle.wait().await;

        Ok(html)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why one Client for the whole crawl?
//    - reqwest::Client keeps a connection pool internally
//    - Reusing it avoids a new TLS handshake for every page
//    - Creating one per request is a common performance mistake
//
// 2. Why does fetch() sleep on success but not on failure?
//    - On success we just loaded the server, so we back off
//    - On failure the caller logs a warning and moves on; the next
//      successful fetch will pace itself again
//
// 3. What is anyhow!?
//    - A macro that builds an ad-hoc error from a format string
//    - Perfect for application-level errors like "HTTP 404 for <url>"
// -----------------------------------------------------------------------------

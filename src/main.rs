// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Dispatch to the appropriate subcommand handler
// 3. Run the crawl stages in order, narrating progress as we go
// 4. Exit with proper code (0 = clean run, 1 = pages skipped, 2 = error)
//
// Rust concepts used:
// - async/await: Because the crawl is built on async network I/O
// - Result<T, E>: For error handling (T = success type, E = error type)
// - match: Pattern matching to handle different subcommands
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;           // src/cli.rs - command-line parsing
mod crawl;         // src/crawl/ - the four-tier crawl pipeline
mod extract;       // src/extract/ - DOM extraction per tier
mod fetch;         // src/fetch/ - HTTP fetching and the politeness delay
mod report;        // src/report.rs - the JSON guide document

// Import items we need from our modules
use chrono::Local;
use clap::Parser;  // Parser trait enables the parse() method
use cli::{Cli, Commands};
use fetch::{PageFetcher, Throttle};
use std::path::PathBuf;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main function
// It creates a tokio runtime and runs our async code inside it
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = clean run
//   Ok(1) = finished, but some pages were skipped
//   Ok(2) = internal error
//   Err = unexpected error
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    // Match on which subcommand was used
    match cli.command {
        Commands::Crawl {
            index_url,
            delay_min,
            delay_max,
            output_dir,
            limit_cities,
        } => handle_crawl(&index_url, delay_min, delay_max, output_dir, limit_cities).await,
        Commands::Cities {
            index_url,
            json,
            delay_min,
            delay_max,
        } => handle_cities(&index_url, json, delay_min, delay_max).await,
    }
}

// Handles the 'crawl' subcommand: the full four-tier crawl
//
// Parameters:
//   index_url: the alphabet index page to start from
//   delay_min/delay_max: politeness delay bounds in seconds
//   output_dir: where to write the guide file (None = current directory)
//   limit_cities: optional cap on the number of cities to visit
async fn handle_crawl(
    index_url: &str,
    delay_min: u64,
    delay_max: u64,
    output_dir: Option<PathBuf>,
    limit_cities: Option<usize>,
) -> Result<i32> {
    let start_time = Local::now();
    println!("🔍 Crawling directory: {}", index_url);
    println!("🕑 Started at {}", start_time.format("%H:%M"));

    let fetcher = PageFetcher::new(Throttle::new(delay_min, delay_max)?)?;
    let origin = crawl::site_origin(index_url)?;

    // Tier 1: alphabet index -> letter pages
    println!("\n🔤 Collecting the alphabet index...");
    let letter_urls = crawl::collect_letter_pages(&fetcher, index_url).await?;
    println!("🔤 {} letter page(s) to visit", letter_urls.len());

    // Tier 2: letter pages -> cities
    println!("\n🏙️  Collecting cities from letter pages...");
    let (mut cities, skipped_letters) = crawl::collect_cities(&fetcher, &letter_urls).await;
    println!("🏙️  {} city(ies) collected", cities.len());

    // Honor --limit-cities before we commit to hours of listing fetches
    if let Some(limit) = limit_cities {
        if cities.len() > limit {
            cities.truncate(limit);
            println!("✂️  Limited to the first {} city(ies)", limit);
        }
    }

    // Tier 3: city listings (paginated) -> restaurant page URLs
    println!("\n🍽️  Collecting restaurant listings...");
    let (rosters, skipped_listings) =
        crawl::collect_city_restaurants(&fetcher, &cities, &origin).await;
    let queued: usize = rosters.iter().map(|r| r.restaurant_urls.len()).sum();
    println!("🍽️  {} restaurant page(s) queued", queued);

    // Tier 4: restaurant pages -> the guide
    println!("\n📖 Collecting restaurant details...");
    let (report, skipped_restaurants) = crawl::collect_guide(&fetcher, &rosters).await;

    // Persist and summarize
    let path = report::save(&report, output_dir.as_deref(), &start_time)?;
    let skipped = skipped_letters + skipped_listings + skipped_restaurants;

    let end_time = Local::now();
    println!("\n📊 Summary:");
    println!("   📖 Restaurants collected: {}", report.restaurant_count());
    println!("   🏙️  Cities visited: {}", rosters.len());
    println!("   ⚠️  Pages skipped: {}", skipped);
    println!("   💾 Guide written to {}", path.display());
    println!("   🕑 Finished at {}", end_time.format("%H:%M"));
    println!("   ⏱️  Elapsed: {}", format_elapsed(end_time - start_time));

    if skipped > 0 {
        Ok(1)  // Exit code 1 = finished, but with holes
    } else {
        Ok(0)  // Exit code 0 = all good
    }
}

// Handles the 'cities' subcommand: tiers 1-2 only
//
// Parameters:
//   index_url: the alphabet index page to start from
//   json: whether to output JSON instead of a table
//   delay_min/delay_max: politeness delay bounds in seconds
async fn handle_cities(
    index_url: &str,
    json: bool,
    delay_min: u64,
    delay_max: u64,
) -> Result<i32> {
    println!("🔍 Collecting cities from: {}", index_url);

    let fetcher = PageFetcher::new(Throttle::new(delay_min, delay_max)?)?;

    let letter_urls = crawl::collect_letter_pages(&fetcher, index_url).await?;
    println!("🔤 {} letter page(s) to visit\n", letter_urls.len());

    let (cities, skipped) = crawl::collect_cities(&fetcher, &letter_urls).await;

    if json {
        // Serialize the city list to JSON and print
        let json_output = serde_json::to_string_pretty(&cities)?;
        println!("{}", json_output);
    } else {
        print_cities_table(&cities);
    }

    if skipped > 0 {
        Ok(1)
    } else {
        Ok(0)
    }
}

// Prints the discovered cities as a human-readable table in the terminal
fn print_cities_table(cities: &[extract::City]) {
    // Print table header
    println!("{:<30} {:<60}", "CITY", "LISTING URL");
    println!("{}", "=".repeat(90));

    // Print each city
    for city in cities {
        // Truncate URL if too long for display
        let url_display = if city.url.len() > 57 {
            format!("{}...", &city.url[..57])
        } else {
            city.url.clone()
        };

        println!("{:<30} {:<60}", city.name, url_display);
    }

    println!();
    println!("📊 Total: {} city(ies)", cities.len());
}

// Formats an elapsed chrono Duration as hours/minutes/seconds
fn format_elapsed(elapsed: chrono::Duration) -> String {
    let total_secs = elapsed.num_seconds().max(0);
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, minutes, seconds)
    } else if minutes > 0 {
        format!("{}m {}s", minutes, seconds)
    } else {
        format!("{}s", seconds)
    }
}

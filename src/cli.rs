// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Two subcommands:
// - crawl: the full four-tier crawl, ending in a JSON guide file
// - cities: tiers 1-2 only, to preview which cities a crawl would visit
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Enums: Types that can be one of several variants
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// The directory index crawled when no URL is given on the command line
pub const DEFAULT_INDEX_URL: &str = "https://ru.restaurantguru.com/cities-Georgia-c";

// Default politeness delay bounds, in seconds
pub const DEFAULT_DELAY_MIN: u64 = 35;
pub const DEFAULT_DELAY_MAX: u64 = 45;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "guide-harvester",
    version = "0.1.0",
    about = "A CLI tool to crawl a restaurant directory city by city and export a JSON guide",
    long_about = "guide-harvester walks a restaurant directory hierarchically (alphabet index, \
                  letter pages, paginated city listings, restaurant pages) and writes the \
                  collected names, URLs and descriptions to a timestamped JSON file."
)]
pub struct Cli {
    // The #[command(subcommand)] attribute tells clap that this field
    // will hold one of the subcommands defined in the Commands enum
    #[command(subcommand)]
    pub command: Commands,
}

// This enum defines our subcommands (crawl, cities)
//
// Each variant represents a different subcommand the user can run
// The fields inside each variant become the arguments for that subcommand
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the full crawl and write the JSON guide file
    ///
    /// Example: guide-harvester crawl --delay-min 35 --delay-max 45
    Crawl {
        /// Alphabet index URL to start from
        ///
        /// This is a positional argument with a default, so a bare
        /// `guide-harvester crawl` targets the stock directory
        #[arg(default_value = DEFAULT_INDEX_URL)]
        index_url: String,

        /// Minimum delay between two page fetches, in seconds
        #[arg(long, default_value_t = DEFAULT_DELAY_MIN)]
        delay_min: u64,

        /// Maximum delay between two page fetches, in seconds
        #[arg(long, default_value_t = DEFAULT_DELAY_MAX)]
        delay_max: u64,

        /// Directory to write the guide file into (default: current directory)
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// Crawl at most this many cities (useful for trial runs)
        ///
        /// With 35-45 second delays a full region takes many hours, so
        /// being able to stop after a handful of cities matters
        #[arg(long)]
        limit_cities: Option<usize>,
    },

    /// Collect and print the city list without crawling restaurants
    ///
    /// Example: guide-harvester cities --json
    Cities {
        /// Alphabet index URL to start from
        #[arg(default_value = DEFAULT_INDEX_URL)]
        index_url: String,

        /// Output the cities as JSON instead of a table
        ///
        /// This is an optional flag: --json
        #[arg(long)]
        json: bool,

        /// Minimum delay between two page fetches, in seconds
        #[arg(long, default_value_t = DEFAULT_DELAY_MIN)]
        delay_min: u64,

        /// Maximum delay between two page fetches, in seconds
        #[arg(long, default_value_t = DEFAULT_DELAY_MAX)]
        delay_max: u64,
    },
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a positional argument WITH a default?
//    - The original use case always targets the same directory index
//    - A default keeps `guide-harvester crawl` working out of the box
//      while still letting you point it at another language mirror
//
// 2. What is default_value vs default_value_t?
//    - default_value takes a string that clap parses like user input
//    - default_value_t takes a typed Rust value directly
//    - We use the _t form for the numeric delay bounds
//
// 3. Why PathBuf for output_dir?
//    - PathBuf is the owned form of a filesystem path
//    - clap converts the argument string into it automatically
//
// 4. Why Option<usize> for limit_cities?
//    - None means "no limit was given", which is different from 0
//    - Option models exactly that presence/absence distinction
// -----------------------------------------------------------------------------

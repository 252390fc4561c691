// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// site-mapper is a single-purpose tool, so there are no subcommands:
// one positional seed URL plus a handful of optional flags.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "site-mapper",
    version = "0.1.0",
    about = "Map every URL reachable on a single website",
    long_about = "site-mapper crawls a website starting from a seed URL and collects every \
                  in-scope URL reachable by following hyperlinks. It honors robots.txt, \
                  skips nofollow links, and waits between requests so the target server \
                  is never hammered."
)]
pub struct Cli {
    /// Seed URL to start crawling from (e.g., https://example.com/blog/)
    ///
    /// The seed doubles as the scope boundary: only URLs that start with
    /// this exact string are collected.
    ///
    /// This is a positional argument (required, no flag needed)
    pub seed_url: String,

    /// User-Agent header sent with every request
    ///
    /// Site operators use this to identify crawlers, so put contact
    /// information here if you run this against a site you don't own.
    ///
    /// #[arg(long)] creates a --user-agent flag from the field name
    #[arg(long, default_value = "site-mapper/0.1")]
    pub user_agent: String,

    /// Maximum frontier size before the crawl stops (default: 100)
    ///
    /// This is a soft cap: the page being processed when the cap is hit
    /// still contributes its links, so the result can exceed the limit.
    #[arg(long, default_value_t = 100)]
    pub limit: usize,

    /// Politeness delay between consecutive requests, in milliseconds
    ///
    /// Applied before every fetch except the first one.
    #[arg(long, default_value_t = 2000)]
    pub delay_ms: u64,

    /// Output the final URL list as JSON instead of a table
    ///
    /// This is an optional flag: --json
    #[arg(long)]
    pub json: bool,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why no subcommands?
//    - link checkers and scrapers often need several modes (scan a repo,
//      scan a site, ...), but this tool does exactly one thing
//    - clap handles a flat struct just as well as a Subcommand enum
//
// 2. What are derive macros?
//    - #[derive(...)] automatically generates code for common operations
//    - Parser: generates CLI parsing logic
//    - Debug: generates code to print the struct for debugging
//
// 3. Why String instead of &str?
//    - String is owned (the struct owns the data)
//    - &str is borrowed (references data owned elsewhere)
//    - We use String here because we need to own the CLI arguments
//
// 4. What is default_value vs default_value_t?
//    - default_value takes a string that clap parses into the field type
//    - default_value_t takes an actual value of the field type
// -----------------------------------------------------------------------------

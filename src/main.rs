// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Build the HTTP fetcher and the crawl engine
// 3. Run the crawl (the engine prints progress as it goes)
// 4. Print the final URL list as a table or as JSON
// 5. Exit with proper code (0 = success, 2 = error)
//
// Rust concepts used:
// - async/await: The crawl loop sleeps and fetches without blocking a thread
// - Result<T, E>: For error handling (T = success type, E = error type)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;       // src/cli.rs - command-line parsing
mod crawl;     // src/crawl/ - the crawl engine
mod fetch;     // src/fetch/ - HTTP fetching
mod frontier;  // src/frontier/ - frontier store and link extraction
mod policy;    // src/policy/ - robots.txt handling

use std::time::Duration;

use cli::Cli;
use clap::Parser;  // Parser trait enables the parse() method
use crawl::CrawlEngine;
use fetch::HttpFetcher;
use serde::Serialize;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The final crawl report, shaped for --json output
#[derive(Debug, Serialize)]
struct CrawlReport {
    /// The seed URL the crawl started from (also the scope prefix)
    seed_url: String,
    /// The User-Agent every request carried
    user_agent: String,
    /// The frontier size limit that was in effect
    limit: usize,
    /// Every discovered in-scope URL, in first-seen order
    urls: Vec<String>,
}

// The #[tokio::main] attribute transforms our async main into a real main
// function. It creates a tokio runtime and runs our async code inside it.
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = crawl completed
//   Err = setup error (invalid seed URL, client build failure)
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();

    println!("🕸️  Mapping site: {}", cli.seed_url);
    println!("📊 Frontier limit: {}, delay: {} ms", cli.limit, cli.delay_ms);

    // Build the real HTTP fetcher and hand everything to the engine
    let fetcher = HttpFetcher::new()?;
    let engine = CrawlEngine::new(
        fetcher,
        cli.seed_url.clone(),
        cli.user_agent.clone(),
        cli.limit,
        Duration::from_millis(cli.delay_ms),
    );

    // Run the crawl - fetch failures are handled inside the loop, so this
    // only errors on setup problems
    let urls = engine.crawl().await?;

    let report = CrawlReport {
        seed_url: cli.seed_url,
        user_agent: cli.user_agent,
        limit: cli.limit,
        urls,
    };

    print_report(&report, cli.json)?;

    Ok(0)
}

// Prints the report either as a numbered list or as JSON
fn print_report(report: &CrawlReport, json: bool) -> Result<()> {
    if json {
        // Serialize the report to JSON and print
        let json_output = serde_json::to_string_pretty(report)?;
        println!("{}", json_output);
    } else {
        print_list(report);
    }
    Ok(())
}

// Prints the discovered URLs as a human-readable numbered list
fn print_list(report: &CrawlReport) {
    println!();
    println!("🗺️  Site map for {} ({} URL(s)):", report.seed_url, report.urls.len());
    for (index, url) in report.urls.iter().enumerate() {
        println!("{:>4}. {}", index + 1, url);
    }
}

// src/crawl/mod.rs
// =============================================================================
// This module drives the crawl itself.
//
// Submodules:
// - engine: The CrawlEngine - the sequential loop that walks the frontier,
//   applies the robots checks, fetches each page, and feeds extracted
//   links back into the frontier
//
// Termination:
// - The crawl ends when the cursor runs off the end of the frontier
//   (nothing new was discovered) or the frontier outgrows the limit
// - Both are normal completion, not errors
//
// Rust concepts:
// - Generics: The engine is generic over the Fetcher trait so tests can
//   run it against canned pages
// =============================================================================

mod engine;

// Re-export the engine
pub use engine::CrawlEngine;

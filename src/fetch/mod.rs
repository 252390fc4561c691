// src/fetch/mod.rs
// =============================================================================
// This module handles HTTP fetching.
//
// Submodules:
// - http: The Fetcher trait, its error type, and the reqwest-backed
//   implementation used in production
//
// Why a trait?
// - The crawl engine only needs "give me the body for this URL, or tell
//   me why you couldn't"
// - Putting that behind a trait lets the engine tests swap in a stub
//   fetcher with canned pages instead of hitting the network
//
// Rust concepts:
// - Traits: Define shared behavior that multiple types can implement
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod http;

// Re-export public items from the submodule
pub use http::{FetchError, Fetcher, HttpFetcher};

// src/policy/mod.rs
// =============================================================================
// This module handles the site's crawl-access policy (robots.txt).
//
// Submodules:
// - gate: Loads robots.txt once per crawl and answers "may this agent
//   fetch this URL?" queries for the rest of the run
//
// Why respect robots.txt?
// - Site operators use it to keep crawlers away from expensive or private
//   paths; a polite crawler checks it before every fetch
//
// Rust concepts:
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod gate;

// Re-export the public item from the submodule
pub use gate::PolicyGate;

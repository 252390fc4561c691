// src/frontier/mod.rs
// =============================================================================
// This module owns the crawl frontier: the ordered list of every URL we
// have discovered so far, plus the bookkeeping around it.
//
// Submodules:
// - store: The Frontier struct (entries + visitation cursor) and the
//   stable dedup pass
// - extract: Pulling candidate links out of a parsed page and normalizing
//   them (nofollow exclusion, relative-URL resolution, scope filtering,
//   fragment stripping)
//
// Design notes:
// - The frontier is traversed by index, not by popping: entries the cursor
//   has already passed stay in the list, because the dedup pass after every
//   page runs over the whole accumulated frontier
// - Dedup is stable: first occurrence wins, order is preserved
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod extract;
mod store;

// Re-export public items from submodules
pub use extract::{extract_candidate_links, robots_meta_nofollow, scope_filter, strip_fragment};
pub use store::{dedup, Frontier};

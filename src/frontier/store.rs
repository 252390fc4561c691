// src/frontier/store.rs
// =============================================================================
// This module implements the frontier store: the insertion-ordered list of
// discovered URLs and the cursor that walks it.
//
// How the crawl uses it:
// 1. The frontier starts with exactly one entry - the seed URL
// 2. The engine asks for the entry at the cursor, processes it, and
//    appends whatever links the page produced
// 3. After every append, the WHOLE frontier is deduplicated (stable,
//    first occurrence wins), so a URL found twice from different pages
//    collapses no matter when it was first seen
// 4. The cursor advances by exactly one per loop iteration and never
//    goes backwards
//
// Rust concepts:
// - HashSet: To track seen URLs during dedup (O(1) lookup)
// - Vec: The frontier itself - order matters, so no set type here
// =============================================================================

use std::collections::HashSet;

// The crawl frontier: every discovered URL in first-seen order, plus the
// index of the next entry to visit.
#[derive(Debug, Clone)]
pub struct Frontier {
    /// Discovered URLs in first-seen order, unique after every mutation
    entries: Vec<String>,
    /// Index of the next entry to hand to the engine
    cursor: usize,
}

impl Frontier {
    /// Creates a frontier holding only the seed URL.
    ///
    /// The seed is stored verbatim - it is both the starting point and
    /// the scope prefix, so we never normalize it.
    pub fn new(seed_url: &str) -> Self {
        Self {
            entries: vec![seed_url.to_string()],
            cursor: 0,
        }
    }

    /// Index of the next entry to visit.
    pub fn next_index(&self) -> usize {
        self.cursor
    }

    /// Moves the cursor forward by one.
    ///
    /// Called exactly once per crawl-loop iteration, even when the page
    /// was skipped - a skipped URL stays in the frontier but is never
    /// revisited.
    pub fn advance(&mut self) {
        self.cursor += 1;
    }

    /// Number of URLs discovered so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns the entry at `index`, or None past the end.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Appends newly discovered links, then re-deduplicates the whole
    /// accumulated frontier.
    ///
    /// Running dedup over everything (not just the new slice) is
    /// intentional: a URL discovered from two different pages collapses
    /// onto its first occurrence regardless of when each copy arrived.
    pub fn append_and_dedup(&mut self, links: Vec<String>) {
        self.entries.extend(links);
        self.entries = dedup(std::mem::take(&mut self.entries));
    }

    /// Consumes the frontier, yielding the final URL list.
    pub fn into_urls(self) -> Vec<String> {
        self.entries
    }
}

// Returns the unique elements of the input in order of first occurrence
//
// This is a stable dedup, not a sort-based one: for duplicate entries only
// the earliest survives, and surviving entries keep their relative order.
// Equality is exact string equality - no case-folding, no trailing-slash
// normalization, no query-parameter reordering.
pub fn dedup(urls: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    urls.into_iter()
        .filter(|url| seen.insert(url.clone()))
        .collect()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why Vec + cursor instead of VecDeque + pop_front?
//    - A breadth-first crawler usually pops URLs off a queue
//    - Here the dedup pass needs to see entries the cursor already passed,
//      so nothing is ever removed from the front
//    - The cursor walking a growing Vec gives the same traversal order
//      while keeping the full history around
//
// 2. What does seen.insert() return?
//    - true if the value was NOT in the set (it was just added)
//    - false if it was already there
//    - That bool is exactly the "keep this element?" answer filter() needs
//
// 3. What is std::mem::take?
//    - Swaps the field with an empty Vec and hands us the old contents
//    - Lets us move entries into dedup() without fighting the borrow
//      checker over self
// -----------------------------------------------------------------------------

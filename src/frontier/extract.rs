// src/frontier/extract.rs
// =============================================================================
// This module extracts candidate links from a parsed HTML page and
// normalizes them before they enter the frontier.
//
// The pipeline (run by the engine for every fetched page):
// 1. extract_candidate_links: every <a> whose rel does not say nofollow,
//    with its href resolved against the CURRENT page URL (not the seed)
// 2. scope_filter: keep only URLs that start with the seed URL string
// 3. strip_fragment: drop everything from the first '#' onwards
//
// There is also robots_meta_nofollow, the page-level check: if any
// <meta name="robots"> carries the nofollow token, the engine skips link
// extraction for the whole page.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// We also use the `url` crate to resolve relative URLs to absolute URLs.
// =============================================================================

use scraper::{Html, Selector};
use url::Url;

// Extracts followable candidate links from a parsed page
//
// Parameters:
//   document: the parsed HTML document
//   base_url: the URL of the page itself (for resolving relative links)
//
// Returns: Vec<String> of absolute URLs, in document order
//
// Rules:
// - An <a> without an href contributes nothing
// - An <a> whose rel attribute contains the token "nofollow" is excluded;
//   a missing rel attribute counts as followable
// - hrefs are resolved with standard relative-URL resolution, which
//   handles absolute, protocol-relative, and path-relative targets
// - Unresolvable hrefs are skipped, never fatal
pub fn extract_candidate_links(document: &Html, base_url: &str) -> Vec<String> {
    let mut links = Vec::new();

    // Selector::parse returns Result, so we use .unwrap() which panics on
    // error. This is OK here because our selector is a constant and known
    // to be valid.
    let selector = Selector::parse("a").unwrap();

    // Parse the base URL once - we resolve every href against it
    let base = match Url::parse(base_url) {
        Ok(url) => url,
        Err(_) => {
            // Without a valid base we can't resolve relative links
            eprintln!("Warning: invalid base URL: {}", base_url);
            return links;
        }
    };

    for element in document.select(&selector) {
        // Per-link nofollow: rel="nofollow" (possibly among other tokens)
        // tells crawlers not to follow this particular link
        if rel_contains_nofollow(element.value().attr("rel")) {
            continue;
        }

        let Some(href) = element.value().attr("href") else {
            continue;
        };

        // Resolve against the current page, the way a browser would
        if let Ok(resolved) = base.join(href) {
            links.push(resolved.to_string());
        }
        // A href that won't resolve is just a malformed element - skip it
    }

    links
}

// Checks whether a rel attribute contains the "nofollow" token
//
// rel is a space-separated token list ("nofollow noopener external"),
// and HTML link types are ASCII case-insensitive.
fn rel_contains_nofollow(rel: Option<&str>) -> bool {
    rel.map_or(false, |value| {
        value
            .split_whitespace()
            .any(|token| token.eq_ignore_ascii_case("nofollow"))
    })
}

// Keeps only URLs that belong to the target site
//
// "Belongs" means: the URL string starts with the seed URL string. That is
// the sole criterion - no host comparison, no path-boundary awareness.
// Order is preserved.
pub fn scope_filter(urls: Vec<String>, seed_url: &str) -> Vec<String> {
    urls.into_iter()
        .filter(|url| url.starts_with(seed_url))
        .collect()
}

// Removes the fragment from a URL
//
// Everything from the first '#' (inclusive) is dropped; a URL without a
// fragment comes back unchanged. Two links differing only in fragment
// point at the same page, so this runs before dedup.
pub fn strip_fragment(url: &str) -> String {
    match url.find('#') {
        Some(position) => url[..position].to_string(),
        None => url.to_string(),
    }
}

// Checks whether the page opts out of link following entirely
//
// Any <meta name="robots"> whose content contains the "nofollow" token
// (content is a comma-separated list, e.g. "noindex, nofollow") means no
// link on this page may be followed. The page itself stays in the
// frontier - only its outbound links are suppressed.
pub fn robots_meta_nofollow(document: &Html) -> bool {
    let selector = Selector::parse(r#"meta[name="robots"]"#).unwrap();

    document.select(&selector).any(|element| {
        element.value().attr("content").map_or(false, |content| {
            content
                .split(',')
                .any(|token| token.trim().eq_ignore_ascii_case("nofollow"))
        })
    })
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why select "a" and not "a[href]"?
//    - We need to look at the rel attribute even on anchors that have no
//      href, and checking href ourselves keeps the two rules (rel token,
//      missing href) in one visible place
//
// 2. What does base.join(href) do?
//    - Resolves a reference the way a browser resolves a link:
//      "b.html" -> sibling of the current page
//      "/docs"  -> root of the current host
//      "//cdn.example.com/x" -> same scheme, different host
//      "https://other.com" -> already absolute, returned as-is
//
// 3. What is let-else?
//    - `let Some(href) = ... else { continue; }` binds on success and
//      diverges (here: skips the element) on failure
//    - Reads better than a nested if-let when the failure path is short
// -----------------------------------------------------------------------------

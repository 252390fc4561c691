// src/policy/gate.rs
// =============================================================================
// This module loads and answers robots.txt queries for one origin.
//
// How it works:
// 1. load() derives <scheme>://<host>/robots.txt from the seed URL and
//    fetches it exactly once, before the crawl loop starts
// 2. can_fetch() answers per-URL queries against the stored rules with no
//    further network access
//
// If robots.txt cannot be fetched at all, the gate is permissive: every
// URL is allowed. That mirrors how most crawlers treat a missing policy
// file, but it is a debatable default, so load() prints a warning to
// stderr instead of succeeding silently.
//
// We use the `robotstxt` crate, a Rust port of Google's robots.txt parser,
// so user-agent group selection and Allow/Disallow matching behave the way
// the big crawlers behave.
// =============================================================================

use anyhow::{anyhow, Result};
use robotstxt::DefaultMatcher;
use url::Url;

use crate::fetch::Fetcher;

// The loaded access policy for one origin
//
// Holds the raw robots.txt body; matching happens per query so the same
// gate can answer for any user agent.
#[derive(Debug, Clone)]
pub struct PolicyGate {
    /// Raw robots.txt body, or None when the file was unreadable
    rules: Option<String>,
}

impl PolicyGate {
    /// Fetches and stores the robots.txt for the seed URL's origin.
    ///
    /// Errors only when the seed URL itself cannot be parsed - an
    /// unreadable robots.txt yields a permissive gate plus a warning,
    /// never a failed crawl.
    pub async fn load<F: Fetcher>(
        fetcher: &F,
        seed_url: &str,
        user_agent: &str,
    ) -> Result<Self> {
        let robots_url = robots_url_for(seed_url)?;

        let rules = match fetcher.get(robots_url.as_str(), user_agent).await {
            Ok(body) => Some(body),
            Err(e) => {
                eprintln!(
                    "⚠️  Warning: could not read {} ({}); crawling as if everything is allowed",
                    robots_url, e
                );
                None
            }
        };

        Ok(Self { rules })
    }

    /// Answers whether `user_agent` may fetch `url` under the loaded rules.
    ///
    /// Pure lookup - no network access happens here.
    pub fn can_fetch(&self, user_agent: &str, url: &str) -> bool {
        match &self.rules {
            Some(body) => {
                DefaultMatcher::default().one_agent_allowed_by_robots(body, user_agent, url)
            }
            // No readable policy file: permissive by default
            None => true,
        }
    }
}

// Derives the robots.txt URL for the origin of the given URL
//
// Example: "https://example.test/a/b?q=1" -> "https://example.test/robots.txt"
fn robots_url_for(url: &str) -> Result<Url> {
    let mut robots_url =
        Url::parse(url).map_err(|e| anyhow!("Invalid URL '{}': {}", url, e))?;

    // robots.txt lives at the root of the origin, nothing else carries over
    robots_url.set_path("/robots.txt");
    robots_url.set_query(None);
    robots_url.set_fragment(None);

    Ok(robots_url)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why store the raw body instead of a parsed structure?
//    - robotstxt's matcher takes (body, agent, url) per query, matching
//      Google's original C++ API
//    - Parsing is cheap relative to the politeness delay between fetches,
//      and keeping the body makes the gate trivially cloneable
//
// 2. Why does load() take the Fetcher instead of making its own request?
//    - The robots.txt fetch should carry the same User-Agent and timeout
//      as every other request
//    - It also means tests can serve a canned robots.txt from the stub
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const ROBOTS: &str = "User-agent: *\nDisallow: /private\n\nUser-agent: greedy-bot\nDisallow: /\n";

    fn gate_with(rules: Option<&str>) -> PolicyGate {
        PolicyGate {
            rules: rules.map(str::to_string),
        }
    }

    #[test]
    fn test_disallowed_path_is_blocked() {
        let gate = gate_with(Some(ROBOTS));
        assert!(!gate.can_fetch("test-bot", "https://example.test/private/page"));
    }

    #[test]
    fn test_allowed_path_passes() {
        let gate = gate_with(Some(ROBOTS));
        assert!(gate.can_fetch("test-bot", "https://example.test/public/page"));
    }

    #[test]
    fn test_specific_agent_group_applies() {
        let gate = gate_with(Some(ROBOTS));
        assert!(!gate.can_fetch("greedy-bot", "https://example.test/anything"));
        assert!(gate.can_fetch("test-bot", "https://example.test/anything"));
    }

    #[test]
    fn test_missing_rules_allow_everything() {
        let gate = gate_with(None);
        assert!(gate.can_fetch("test-bot", "https://example.test/private/page"));
    }

    #[test]
    fn test_robots_url_for_strips_path_query_fragment() {
        let robots = robots_url_for("https://example.test/a/b?q=1#frag").unwrap();
        assert_eq!(robots.as_str(), "https://example.test/robots.txt");
    }

    #[test]
    fn test_robots_url_for_rejects_garbage() {
        assert!(robots_url_for("not a url").is_err());
    }
}

// src/crawl/engine.rs
// =============================================================================
// This module implements the crawl engine: the loop that turns one seed
// URL into the full list of in-scope URLs reachable from it.
//
// How one iteration works:
// 1. Termination check: stop when the cursor runs off the frontier or the
//    frontier has outgrown the limit (checked BEFORE any work, so a URL
//    at the boundary index is never fetched)
// 2. Politeness delay (skipped for the very first fetch)
// 3. robots.txt check - a disallowed URL is skipped, not fetched
// 4. Fetch the page; any fetch failure degrades this iteration to "no
//    links found" and the crawl moves on (no retry)
// 5. Page-level <meta name="robots"> nofollow suppresses link extraction
//    for the whole page
// 6. Extract followable links, resolve them against the CURRENT page,
//    keep the in-scope ones, strip fragments
// 7. Append to the frontier and re-dedup the whole thing
// 8. Advance the cursor by exactly one
//
// Politeness:
// - A fixed delay before every fetch except the first
// - One request in flight at a time, always
//
// Rust concepts:
// - Generics with trait bounds: CrawlEngine<F: Fetcher>
// - Ownership: all crawl state lives in one engine instance, no globals
// =============================================================================

use std::time::Duration;

use anyhow::Result;
use scraper::Html;

use crate::fetch::Fetcher;
use crate::frontier::{
    extract_candidate_links, robots_meta_nofollow, scope_filter, strip_fragment, Frontier,
};
use crate::policy::PolicyGate;

// Drives one crawl: holds the configuration and the fetcher, owns the
// frontier for the duration of a crawl() call.
pub struct CrawlEngine<F: Fetcher> {
    fetcher: F,
    seed_url: String,
    user_agent: String,
    /// Soft cap on the frontier size: the page being processed when the
    /// cap is reached still contributes its links
    limit: usize,
    /// Politeness delay before every fetch except the first
    delay: Duration,
}

impl<F: Fetcher> CrawlEngine<F> {
    pub fn new(
        fetcher: F,
        seed_url: String,
        user_agent: String,
        limit: usize,
        delay: Duration,
    ) -> Self {
        Self {
            fetcher,
            seed_url,
            user_agent,
            limit,
            delay,
        }
    }

    /// Crawls from the seed URL and returns every discovered in-scope URL
    /// in first-seen order (the seed is always the first entry).
    ///
    /// Only a setup failure (an unparseable seed URL) is an error; fetch
    /// failures during the crawl are skipped, never fatal.
    pub async fn crawl(&self) -> Result<Vec<String>> {
        // The access policy is loaded once, before the loop
        let policy = PolicyGate::load(&self.fetcher, &self.seed_url, &self.user_agent).await?;

        let mut frontier = Frontier::new(&self.seed_url);

        loop {
            let cursor = frontier.next_index();

            // Termination: frontier outgrown the limit, or cursor past the
            // end. Checked before any work for this index.
            if frontier.len() > self.limit {
                println!(
                    "🛑 Frontier limit reached ({} > {}), stopping",
                    frontier.len(),
                    self.limit
                );
                break;
            }
            let Some(url) = frontier.get(cursor).map(str::to_string) else {
                break;
            };

            // Politeness: wait before every fetch except the first
            if cursor > 0 {
                tokio::time::sleep(self.delay).await;
            }

            println!("  Visiting [{}/{}]: {}", cursor + 1, frontier.len(), url);

            let links = self.visit_page(&policy, &url).await;
            frontier.append_and_dedup(links);
            frontier.advance();
        }

        Ok(frontier.into_urls())
    }

    // Processes a single frontier entry and returns the in-scope,
    // fragment-free links it contributed.
    //
    // Every skip condition (robots denial, fetch failure, page-level
    // nofollow) comes back as an empty Vec: the URL stays in the frontier,
    // the cursor moves past it, the crawl continues.
    async fn visit_page(&self, policy: &PolicyGate, url: &str) -> Vec<String> {
        // Policy check: a disallowed URL is never fetched
        if !policy.can_fetch(&self.user_agent, url) {
            println!("  ⛔ Disallowed by robots.txt, skipping: {}", url);
            return Vec::new();
        }

        // Fetch: any failure means this page contributes nothing
        let html = match self.fetcher.get(url, &self.user_agent).await {
            Ok(body) => body,
            Err(e) => {
                eprintln!("  Warning: failed to fetch {}: {}", url, e);
                return Vec::new();
            }
        };

        let document = Html::parse_document(&html);

        // Page-level nofollow: keep the page, drop all its outbound links
        if robots_meta_nofollow(&document) {
            println!("  ⛔ Page is marked nofollow, not following its links: {}", url);
            return Vec::new();
        }

        // Extract, filter to scope, strip fragments - in that order, and
        // all of it before the frontier-wide dedup
        let candidates = extract_candidate_links(&document, url);
        let in_scope = scope_filter(candidates, &self.seed_url);
        in_scope.iter().map(|link| strip_fragment(link)).collect()
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why does the engine never retry a failed fetch?
//    - The cursor only moves forward, so each frontier entry gets exactly
//      one chance; a flaky page simply contributes no links
//
// 2. Why is the limit a soft cap?
//    - The check runs at the TOP of the loop, before fetching
//    - The page fetched while still under the cap may push the frontier
//      over it; the overshoot is returned as-is
//
// 3. Why can't this loop run forever on a link cycle?
//    - dedup means a URL enters the frontier at most once
//    - the cursor advances every iteration, so it must eventually reach
//      the end of a frontier that has stopped growing
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchError;
    use std::cell::RefCell;
    use std::collections::HashMap;

    // A canned-page fetcher: serves bodies or errors from a map and
    // records every URL it was asked for.
    struct StubFetcher {
        pages: HashMap<String, Result<String, FetchError>>,
        requested: RefCell<Vec<String>>,
    }

    impl StubFetcher {
        fn new(pages: Vec<(&str, Result<&str, FetchError>)>) -> Self {
            Self {
                pages: pages
                    .into_iter()
                    .map(|(url, body)| (url.to_string(), body.map(str::to_string)))
                    .collect(),
                requested: RefCell::new(Vec::new()),
            }
        }

        fn requested(&self) -> Vec<String> {
            self.requested.borrow().clone()
        }
    }

    impl Fetcher for StubFetcher {
        async fn get(&self, url: &str, _user_agent: &str) -> Result<String, FetchError> {
            self.requested.borrow_mut().push(url.to_string());
            match self.pages.get(url) {
                Some(Ok(body)) => Ok(body.clone()),
                Some(Err(e)) => Err(e.clone()),
                // Unknown URL: behave like an unreachable host
                None => Err(FetchError::Connect),
            }
        }
    }

    const SEED: &str = "https://example.test/a";
    const ROBOTS_URL: &str = "https://example.test/robots.txt";

    fn engine(fetcher: StubFetcher, limit: usize) -> CrawlEngine<StubFetcher> {
        CrawlEngine::new(
            fetcher,
            SEED.to_string(),
            "test-bot/1.0".to_string(),
            limit,
            Duration::ZERO,
        )
    }

    #[tokio::test]
    async fn test_fragment_and_scope_scenario() {
        // Seed page links to /a/b (followable), the same target with a
        // fragment, and an out-of-scope site
        let fetcher = StubFetcher::new(vec![
            (ROBOTS_URL, Err(FetchError::Status(404))),
            (
                SEED,
                Ok(r#"<a href="/a/b">b</a>
                      <a href="/a/b#frag">b again</a>
                      <a href="https://other.test/x">external</a>"#),
            ),
            ("https://example.test/a/b", Ok("<html></html>")),
        ]);

        let urls = engine(fetcher, 10).crawl().await.unwrap();

        assert_eq!(
            urls,
            vec![SEED.to_string(), "https://example.test/a/b".to_string()]
        );
    }

    #[tokio::test]
    async fn test_http_error_skips_page_but_continues() {
        // The page at index 1 answers 500: it contributes nothing, yet the
        // crawl reaches index 2
        let fetcher = StubFetcher::new(vec![
            (ROBOTS_URL, Err(FetchError::Status(404))),
            (
                SEED,
                Ok(r#"<a href="/a/broken">broken</a><a href="/a/fine">fine</a>"#),
            ),
            (
                "https://example.test/a/broken",
                Err(FetchError::Status(500)),
            ),
            ("https://example.test/a/fine", Ok("<html></html>")),
        ]);

        let engine = engine(fetcher, 10);
        let urls = engine.crawl().await.unwrap();

        assert_eq!(
            urls,
            vec![
                SEED.to_string(),
                "https://example.test/a/broken".to_string(),
                "https://example.test/a/fine".to_string(),
            ]
        );
        // The broken page was attempted and the crawl still fetched /a/fine
        assert!(engine
            .fetcher
            .requested()
            .contains(&"https://example.test/a/fine".to_string()));
    }

    #[tokio::test]
    async fn test_limit_is_a_soft_cap() {
        // limit=1 with five outbound in-scope links: only the seed is
        // fetched, but its links still land in the result
        let fetcher = StubFetcher::new(vec![
            (ROBOTS_URL, Err(FetchError::Status(404))),
            (
                SEED,
                Ok(r#"<a href="/a/1">1</a><a href="/a/2">2</a><a href="/a/3">3</a>
                      <a href="/a/4">4</a><a href="/a/5">5</a>"#),
            ),
        ]);

        let engine = engine(fetcher, 1);
        let urls = engine.crawl().await.unwrap();

        assert_eq!(urls.len(), 6);
        // robots.txt + seed page, nothing else
        assert_eq!(engine.fetcher.requested().len(), 2);
    }

    #[tokio::test]
    async fn test_robots_disallowed_url_is_never_fetched() {
        let fetcher = StubFetcher::new(vec![
            (ROBOTS_URL, Ok("User-agent: *\nDisallow: /a/private\n")),
            (
                SEED,
                Ok(r#"<a href="/a/private">secret</a><a href="/a/open">open</a>"#),
            ),
            ("https://example.test/a/open", Ok("<html></html>")),
        ]);

        let engine = engine(fetcher, 10);
        let urls = engine.crawl().await.unwrap();

        // The disallowed URL stays in the frontier...
        assert_eq!(
            urls,
            vec![
                SEED.to_string(),
                "https://example.test/a/private".to_string(),
                "https://example.test/a/open".to_string(),
            ]
        );
        // ...but no request was ever made for it
        assert!(!engine
            .fetcher
            .requested()
            .contains(&"https://example.test/a/private".to_string()));
    }

    #[tokio::test]
    async fn test_meta_nofollow_suppresses_all_links() {
        let fetcher = StubFetcher::new(vec![
            (ROBOTS_URL, Err(FetchError::Status(404))),
            (
                SEED,
                Ok(r#"<html><head><meta name="robots" content="noindex, nofollow"></head>
                      <body><a href="/a/b">b</a></body></html>"#),
            ),
        ]);

        let urls = engine(fetcher, 10).crawl().await.unwrap();

        assert_eq!(urls, vec![SEED.to_string()]);
    }

    #[tokio::test]
    async fn test_terminates_on_link_cycle() {
        // /a and /a/b link to each other; dedup keeps the frontier finite
        let fetcher = StubFetcher::new(vec![
            (ROBOTS_URL, Err(FetchError::Status(404))),
            (SEED, Ok(r#"<a href="/a/b">b</a>"#)),
            ("https://example.test/a/b", Ok(r#"<a href="/a">back</a>"#)),
        ]);

        let engine = engine(fetcher, 10);
        let urls = engine.crawl().await.unwrap();

        assert_eq!(
            urls,
            vec![SEED.to_string(), "https://example.test/a/b".to_string()]
        );
        // robots + two pages, each fetched exactly once
        assert_eq!(engine.fetcher.requested().len(), 3);
    }

    #[tokio::test]
    async fn test_transport_error_on_seed_still_returns_seed() {
        let fetcher = StubFetcher::new(vec![
            (ROBOTS_URL, Err(FetchError::Status(404))),
            (SEED, Err(FetchError::Connect)),
        ]);

        let urls = engine(fetcher, 10).crawl().await.unwrap();

        assert_eq!(urls, vec![SEED.to_string()]);
    }

    #[tokio::test]
    async fn test_invalid_seed_url_is_a_setup_error() {
        let fetcher = StubFetcher::new(vec![]);
        let engine = CrawlEngine::new(
            fetcher,
            "not a url".to_string(),
            "test-bot/1.0".to_string(),
            10,
            Duration::ZERO,
        );
        assert!(engine.crawl().await.is_err());
    }
}

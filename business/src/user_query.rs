//! Paginated page cache for the user directory.
//!
//! ## Why this file exists
//! Fetching a page is a side effect (network IO), but the UI renders at
//! frame rate and must never block on it. [`UserQuery`] therefore keeps an
//! explicit in-memory cache keyed by page number and exposes a polling
//! contract: the caller sets inputs (`set_page`, `set_enabled`) whenever they
//! change and calls [`UserQuery::poll`] once per frame. `poll` drains
//! completed transport callbacks from a channel, applies retries, and issues
//! at most one request for the current page when it actually needs one.
//!
//! Policies, matching the behavior of the query cache the directory was
//! originally built on:
//! - a cached page is fresh for five minutes; fresh hits issue no request
//! - a stale hit keeps showing its data while a background refresh runs
//! - while a new page loads, the previous page's rows stay visible
//!   (keep-previous-data; no flash-to-empty)
//! - failures are retried with exponential backoff, five attempts total
//! - a page that exhausted its attempts reports its error (even when stale
//!   cached rows are still shown); the error expires after the staleness
//!   window and the page becomes fetchable again
//! - each request carries a generation number; a completion whose generation
//!   no longer matches the page's in-flight entry is discarded, so the most
//!   recently issued request always wins

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use log::{debug, error, info, warn};

use crate::fetch_service::FetchService;
use crate::user::{User, UsersResponse};
use crate::DirectoryConfig;

/// Records per page; fixed so a page's content is stable under the seed.
pub const PAGE_SIZE: u32 = 20;

/// Deterministic seed: the generator returns the same synthetic users for
/// the same (seed, page) pair.
pub const PAGE_SEED: &str = "kira";

/// How long a cached page counts as fresh.
pub const STALE_TIME_SECS: i64 = 5 * 60;

/// Total transport attempts per fetch cycle before the page is marked failed.
pub const MAX_ATTEMPTS: u8 = 5;

/// Backoff ceiling between retry attempts.
const MAX_BACKOFF_MS: i64 = 30_000;

/// What went wrong with a fetch. All variants surface identically to the UI
/// after retry exhaustion; the split only feeds logging and tests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Lifecycle of the current page's data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryStatus {
    /// Disabled and nothing cached.
    Idle,
    /// No data for the current page yet; a request is (or will be) running.
    Pending,
    /// The current page is cached.
    Success,
    /// The current page failed after exhausting its attempts.
    Error,
}

/// Snapshot handed to the UI each frame.
#[derive(Debug)]
pub struct UserQueryResult<'a> {
    pub status: QueryStatus,
    /// Rows to display. Falls back to the most recent successful page while
    /// the current one is loading or errored (keep-previous-data).
    pub users: &'a [User],
    /// Terminal error for the current page, if any.
    pub error: Option<&'a FetchError>,
    /// True when rows are shown while a request for the current page runs.
    pub refreshing: bool,
}

#[derive(Debug)]
struct CachedPage {
    users: Vec<User>,
    fetched_at: DateTime<Utc>,
}

#[derive(Debug)]
struct PageError {
    error: FetchError,
    /// When the final attempt failed; the error expires one staleness window
    /// after this, making the page fetchable again.
    failed_at: DateTime<Utc>,
}

#[derive(Debug)]
struct Inflight {
    generation: u64,
    /// Failed attempts so far in this cycle.
    failures: u8,
    /// When set, nothing is on the wire; re-issue once `now` passes it.
    retry_at: Option<DateTime<Utc>>,
}

/// One completed transport callback, sent back to the UI thread.
#[derive(Debug)]
struct FetchOutcome {
    page: u32,
    generation: u64,
    result: Result<Vec<User>, FetchError>,
}

/// See the module docs. One instance lives in the app state for the whole
/// application lifetime.
pub struct UserQuery {
    fetcher: Arc<dyn FetchService>,
    api_url: String,

    page: u32,
    enabled: bool,

    /// Monotonic request counter; newest request wins per page.
    generation: u64,
    cache: HashMap<u32, CachedPage>,
    inflight: HashMap<u32, Inflight>,
    errors: HashMap<u32, PageError>,
    /// Page whose data was most recently shown successfully; the
    /// keep-previous-data fallback.
    last_success: Option<u32>,

    outcome_tx: flume::Sender<FetchOutcome>,
    outcome_rx: flume::Receiver<FetchOutcome>,
}

impl std::fmt::Debug for UserQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserQuery")
            .field("page", &self.page)
            .field("enabled", &self.enabled)
            .field("cached_pages", &self.cache.keys().collect::<Vec<_>>())
            .field("inflight_pages", &self.inflight.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl UserQuery {
    pub fn new(config: &DirectoryConfig, fetcher: Arc<dyn FetchService>) -> Self {
        let (outcome_tx, outcome_rx) = flume::unbounded();
        Self {
            fetcher,
            api_url: config.api_url(),
            page: 1,
            enabled: true,
            generation: 0,
            cache: HashMap::new(),
            inflight: HashMap::new(),
            errors: HashMap::new(),
            last_success: None,
            outcome_tx,
            outcome_rx,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Switch to `page`. Non-positive input clamps to 1: the remote API is
    /// 1-based and its behavior below that is unspecified.
    ///
    /// Moving onto a page clears any terminal error recorded for it, so
    /// navigating away and back acts as a retry.
    pub fn set_page(&mut self, page: u32) {
        let page = page.max(1);
        if page == self.page {
            return;
        }
        debug!("UserQuery: page {} -> {}", self.page, page);
        self.page = page;
        self.errors.remove(&page);
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Gate fetching. Disabling suppresses future requests only; anything
    /// already on the wire completes and is still cached.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Drive the query: drain completed fetches, schedule retries, and issue
    /// a request for the current page if it needs one. Call once per frame.
    ///
    /// `now` is a parameter (rather than read from the clock) so tests can
    /// step through the staleness window and backoff schedule.
    pub fn poll(&mut self, now: DateTime<Utc>) {
        self.drain_outcomes(now);

        // Terminal errors expire on the same schedule as cached data; an
        // expired one frees its page for a fresh fetch cycle below.
        self.errors
            .retain(|_, failed| now - failed.failed_at < Duration::seconds(STALE_TIME_SECS));

        if !self.enabled {
            return;
        }

        // Re-issue any attempt whose backoff delay has elapsed. Retries keep
        // running even if the user has paged away; the cycle was already paid
        // for and the result lands in the cache either way.
        let due: Vec<u32> = self
            .inflight
            .iter()
            .filter(|(_, f)| f.retry_at.is_some_and(|at| at <= now))
            .map(|(page, _)| *page)
            .collect();
        for page in due {
            self.issue(page);
        }

        // One outstanding request per page key at a time.
        if self.needs_fetch(now) {
            self.inflight.insert(
                self.page,
                Inflight {
                    generation: 0, // placeholder, set by issue()
                    failures: 0,
                    retry_at: None,
                },
            );
            self.issue(self.page);
        }
    }

    /// Tri-state view for the UI. Borrows from the cache, so take it after
    /// [`Self::poll`] within a frame.
    pub fn result(&self) -> UserQueryResult<'_> {
        let refreshing = self
            .inflight
            .get(&self.page)
            .is_some_and(|f| f.retry_at.is_none());

        // Keep-previous-data: show the last page that rendered successfully.
        let previous = self
            .last_success
            .and_then(|page| self.cache.get(&page))
            .map(|cached| cached.users.as_slice())
            .unwrap_or_default();

        // A terminal error wins over a leftover (stale) cache entry: the page
        // just failed a full fetch cycle and the UI must say so, even while
        // the old rows keep rendering underneath.
        if let Some(failed) = self.errors.get(&self.page) {
            let users = self
                .cache
                .get(&self.page)
                .map(|cached| cached.users.as_slice())
                .unwrap_or(previous);
            return UserQueryResult {
                status: QueryStatus::Error,
                users,
                error: Some(&failed.error),
                refreshing: false,
            };
        }

        if let Some(cached) = self.cache.get(&self.page) {
            return UserQueryResult {
                status: QueryStatus::Success,
                users: &cached.users,
                error: None,
                refreshing,
            };
        }

        if self.enabled {
            UserQueryResult {
                status: QueryStatus::Pending,
                users: previous,
                error: None,
                refreshing,
            }
        } else {
            UserQueryResult {
                status: QueryStatus::Idle,
                users: previous,
                error: None,
                refreshing: false,
            }
        }
    }

    /// True while any request or retry timer is outstanding. The UI uses
    /// this to keep scheduling frames so `poll` keeps running.
    pub fn is_active(&self) -> bool {
        !self.inflight.is_empty()
    }

    fn needs_fetch(&self, now: DateTime<Utc>) -> bool {
        if self.inflight.contains_key(&self.page) || self.errors.contains_key(&self.page) {
            return false;
        }
        match self.cache.get(&self.page) {
            Some(cached) => now - cached.fetched_at >= Duration::seconds(STALE_TIME_SECS),
            None => true,
        }
    }

    /// Put a request for `page` on the wire under a fresh generation.
    fn issue(&mut self, page: u32) {
        self.generation += 1;
        let generation = self.generation;
        let Some(flight) = self.inflight.get_mut(&page) else {
            // Callers register the in-flight entry before issuing.
            return;
        };
        flight.generation = generation;
        flight.retry_at = None;

        let url = format!(
            "{}?page={}&results={}&seed={}",
            self.api_url, page, PAGE_SIZE, PAGE_SEED
        );
        debug!("UserQuery: GET {url} (generation {generation})");

        let tx = self.outcome_tx.clone();
        let request = ehttp::Request::get(&url);
        self.fetcher.fetch(
            request,
            Box::new(move |result| {
                let result = match result {
                    Ok(response) if response.ok => {
                        serde_json::from_slice::<UsersResponse>(&response.bytes)
                            .map(|body| body.results)
                            .map_err(|e| FetchError::Decode(e.to_string()))
                    }
                    Ok(response) => Err(FetchError::Status(response.status)),
                    Err(err) => Err(FetchError::Transport(err)),
                };
                // The receiver only drops on shutdown; nothing to do then.
                let _ = tx.send(FetchOutcome {
                    page,
                    generation,
                    result,
                });
            }),
        );
    }

    fn drain_outcomes(&mut self, now: DateTime<Utc>) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            let Some(flight) = self.inflight.get_mut(&outcome.page) else {
                debug!(
                    "UserQuery: dropping outcome for page {} with no in-flight entry",
                    outcome.page
                );
                continue;
            };
            if flight.generation != outcome.generation {
                debug!(
                    "UserQuery: dropping stale outcome for page {} (generation {} != {})",
                    outcome.page, outcome.generation, flight.generation
                );
                continue;
            }

            match outcome.result {
                Ok(users) => {
                    info!(
                        "UserQuery: page {} fetched, {} users",
                        outcome.page,
                        users.len()
                    );
                    self.inflight.remove(&outcome.page);
                    self.errors.remove(&outcome.page);
                    self.cache.insert(
                        outcome.page,
                        CachedPage {
                            users,
                            fetched_at: now,
                        },
                    );
                    self.last_success = Some(outcome.page);
                }
                Err(err) => {
                    flight.failures += 1;
                    if flight.failures >= MAX_ATTEMPTS {
                        error!(
                            "UserQuery: page {} failed after {} attempts: {err}",
                            outcome.page, flight.failures
                        );
                        self.inflight.remove(&outcome.page);
                        self.errors.insert(
                            outcome.page,
                            PageError {
                                error: err,
                                failed_at: now,
                            },
                        );
                    } else {
                        let delay = retry_delay(flight.failures);
                        warn!(
                            "UserQuery: page {} attempt {} failed ({err}), retrying in {}ms",
                            outcome.page,
                            flight.failures,
                            delay.num_milliseconds()
                        );
                        flight.retry_at = Some(now + delay);
                    }
                }
            }
        }
    }
}

/// Exponential backoff, `min(1s << failures-1, 30s)`.
fn retry_delay(failures: u8) -> Duration {
    let exp = u32::from(failures.saturating_sub(1)).min(16);
    Duration::milliseconds((1000i64 << exp).min(MAX_BACKOFF_MS))
}

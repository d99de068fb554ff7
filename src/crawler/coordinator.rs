//! Crawl coordination
//!
//! The coordinator owns the clock. It seeds the frontier, spawns the worker
//! pool, waits for the wall-clock deadline or for the frontier to drain
//! naturally, then walks the run through a bounded shutdown:
//!
//! Idle -> Running -> Draining -> Done
//!
//! Draining stops new claims immediately and grants whatever is mid-fetch a
//! grace period to finish; anything still running after that is aborted, so
//! the run ends within duration + grace no matter how servers behave. The
//! report is assembled strictly after Done, which is what keeps its count
//! consistent with the set it ships with.

use crate::config::{validate, CrawlConfig};
use crate::crawler::extractor::extract_links;
use crate::crawler::fetcher::{build_http_client, fetch_page, FetchError};
use crate::crawler::frontier::Frontier;
use crate::url::{canonicalize, host_in_scope};
use crate::{ConfigError, LinkharvestError};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use url::Url;

/// How long an idle worker sleeps before re-checking the queue
const IDLE_POLL: Duration = Duration::from_millis(20);

/// How often the coordinator re-checks for natural completion
const COMPLETION_POLL: Duration = Duration::from_millis(25);

/// How often crawl progress is logged
const PROGRESS_INTERVAL: Duration = Duration::from_secs(2);

/// Lifecycle of a crawl run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrawlPhase {
    /// Constructed but not started
    Idle,
    /// Workers are claiming and fetching
    Running,
    /// No new claims; in-flight fetches get the grace period
    Draining,
    /// Workers stopped, report available
    Done,
}

/// Final result of a crawl run
#[derive(Debug, Clone, Serialize)]
pub struct CrawlReport {
    /// Every unique URL discovered, sorted
    pub unique_links: Vec<String>,
    /// Cardinality of `unique_links`
    pub count: usize,
    /// Wall-clock seconds from start to Done
    pub elapsed_seconds: f64,
}

/// Shared handles each worker runs with
#[derive(Clone)]
struct WorkerContext {
    frontier: Arc<Frontier>,
    client: reqwest::Client,
    connections: Arc<Semaphore>,
    stop: CancellationToken,
    scope: Option<String>,
}

/// Main crawl coordinator structure
pub struct Coordinator {
    config: CrawlConfig,
    frontier: Arc<Frontier>,
    phase: CrawlPhase,
}

impl Coordinator {
    /// Creates a coordinator in the Idle phase
    ///
    /// Fails only on configuration problems; network trouble is a per-page
    /// concern once the crawl runs.
    pub fn new(config: CrawlConfig) -> Result<Self, LinkharvestError> {
        validate(&config)?;

        Ok(Self {
            config,
            frontier: Arc::new(Frontier::new()),
            phase: CrawlPhase::Idle,
        })
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> CrawlPhase {
        self.phase
    }

    /// Runs the crawl to completion and assembles the report
    ///
    /// Returns once the frontier drained naturally or the deadline and
    /// grace period have passed, whichever comes first.
    pub async fn run(&mut self) -> Result<CrawlReport, LinkharvestError> {
        let seed = Url::parse(&self.config.seed)?;
        let seed = canonicalize(&seed).ok_or_else(|| {
            ConfigError::InvalidSeed(format!("'{}' is not a fetchable URL", self.config.seed))
        })?;

        let client = build_http_client(
            self.config.max_connections,
            Duration::from_millis(self.config.fetch_timeout_ms),
        )?;

        let started = Instant::now();
        let deadline = started + Duration::from_millis(self.config.duration_ms);

        self.set_phase(CrawlPhase::Running);
        tracing::info!(
            "Starting crawl from {} with {} workers, {}ms budget",
            seed,
            self.config.max_workers,
            self.config.duration_ms
        );

        // The seed is the first discovery; it counts even if its fetch fails
        self.frontier.try_enqueue(&seed);

        let ctx = WorkerContext {
            frontier: Arc::clone(&self.frontier),
            client,
            connections: Arc::new(Semaphore::new(self.config.max_connections)),
            stop: CancellationToken::new(),
            scope: self.config.scope.clone(),
        };

        let mut workers = JoinSet::new();
        for id in 0..self.config.max_workers {
            workers.spawn(worker_loop(id, ctx.clone()));
        }

        let progress = tokio::spawn(report_progress(
            Arc::clone(&self.frontier),
            ctx.stop.clone(),
        ));

        // Wait for the deadline or for the frontier to drain on its own
        tokio::select! {
            _ = tokio::time::sleep_until(deadline) => {
                tracing::info!("Deadline reached after {:?}", started.elapsed());
            }
            _ = wait_for_idle(Arc::clone(&self.frontier)) => {
                tracing::info!("Frontier drained naturally after {:?}", started.elapsed());
            }
        }

        self.set_phase(CrawlPhase::Draining);
        ctx.stop.cancel();
        drain_workers(&mut workers, Duration::from_millis(self.config.grace_ms)).await;
        let _ = progress.await;

        self.set_phase(CrawlPhase::Done);
        let elapsed = started.elapsed();

        let unique_links = self.frontier.seen_snapshot();
        let count = unique_links.len();
        tracing::info!(
            "Crawl done: {} unique links in {:.2}s",
            count,
            elapsed.as_secs_f64()
        );

        Ok(CrawlReport {
            unique_links,
            count,
            elapsed_seconds: elapsed.as_secs_f64(),
        })
    }

    fn set_phase(&mut self, next: CrawlPhase) {
        tracing::debug!("Phase transition: {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }
}

/// One fetch/extract pipeline
///
/// Runs until the stop token fires. An empty queue is never a reason to
/// exit: the worker naps briefly and looks again, because a sibling may be
/// mid-fetch and about to refill the queue.
async fn worker_loop(id: usize, ctx: WorkerContext) {
    tracing::trace!("Worker {} started", id);

    loop {
        if ctx.stop.is_cancelled() {
            break;
        }

        match ctx.frontier.claim() {
            Some(url) => {
                process_page(&ctx, &url).await;
                ctx.frontier.task_done();
            }
            None => {
                tokio::select! {
                    _ = ctx.stop.cancelled() => break,
                    _ = tokio::time::sleep(IDLE_POLL) => {}
                }
            }
        }
    }

    tracing::trace!("Worker {} stopped", id);
}

/// Fetches one claimed page and feeds its links back into the frontier
async fn process_page(ctx: &WorkerContext, url: &Url) {
    // The connection cap is enforced here; a worker holding a claim but no
    // permit yet backs out cleanly if the crawl starts draining
    let _permit = tokio::select! {
        _ = ctx.stop.cancelled() => return,
        permit = ctx.connections.acquire() => match permit {
            Ok(permit) => permit,
            Err(_) => return,
        },
    };

    let body = match fetch_page(&ctx.client, url.as_str()).await {
        Ok(body) => body,
        Err(e) => {
            // Failed pages stay in the report; they just contribute no links
            match e {
                FetchError::Timeout => tracing::debug!("Fetch timed out: {}", url),
                FetchError::HttpStatus(code) => tracing::debug!("HTTP {} for {}", code, url),
                FetchError::UnsupportedContent(content_type) => {
                    tracing::debug!("Skipping non-HTML content ({}) at {}", content_type, url)
                }
                FetchError::Network(msg) => tracing::debug!("Network error for {}: {}", url, msg),
            }
            return;
        }
    };

    let mut discovered = 0usize;
    for link in extract_links(&body, url) {
        if let Some(scope) = ctx.scope.as_deref() {
            if !host_in_scope(&link, scope) {
                continue;
            }
        }
        if ctx.frontier.try_enqueue(&link) {
            discovered += 1;
        }
    }

    if discovered > 0 {
        tracing::trace!("{} new links from {}", discovered, url);
    }
}

/// Resolves once the frontier is empty with nothing in flight
///
/// Claiming and finishing both happen under the frontier lock, so once the
/// predicate holds it stays held; polling it cheaply is enough.
async fn wait_for_idle(frontier: Arc<Frontier>) {
    loop {
        if frontier.is_idle() {
            return;
        }
        tokio::time::sleep(COMPLETION_POLL).await;
    }
}

/// Gives running workers up to `grace` to finish, then aborts the rest
///
/// Workers stop claiming as soon as the stop token fires, so this wait only
/// covers fetches already in flight. Links they extract before the abort
/// still land in the frontier and count toward the report.
async fn drain_workers(workers: &mut JoinSet<()>, grace: Duration) {
    let drained = tokio::time::timeout(grace, async {
        while workers.join_next().await.is_some() {}
    })
    .await;

    if drained.is_err() {
        tracing::warn!(
            "{} workers still busy after grace period, aborting them",
            workers.len()
        );
        workers.shutdown().await;
    }
}

/// Logs crawl progress until the stop token fires
async fn report_progress(frontier: Arc<Frontier>, stop: CancellationToken) {
    let mut ticker = tokio::time::interval(PROGRESS_INTERVAL);
    // The first tick completes immediately; skip it
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = stop.cancelled() => return,
            _ = ticker.tick() => {
                tracing::info!(
                    "Progress: {} unique links, {} queued",
                    frontier.seen_count(),
                    frontier.queued_count()
                );
            }
        }
    }
}

/// Runs a crawl for the given configuration
///
/// This is the main library entry point. It validates the configuration,
/// performs the bounded-time crawl, and returns the report of everything
/// discovered. Individual fetch failures never surface here; the only error
/// paths are configuration problems and report assembly.
///
/// # Example
///
/// ```no_run
/// use linkharvest::config::CrawlConfig;
/// use linkharvest::crawler::run_crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let report = run_crawl(CrawlConfig::new("https://example.com/")).await?;
/// println!("{} links in {:.1}s", report.count, report.elapsed_seconds);
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: CrawlConfig) -> Result<CrawlReport, LinkharvestError> {
    let mut coordinator = Coordinator::new(config)?;
    coordinator.run().await
}

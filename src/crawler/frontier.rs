//! Crawl frontier and dedup set
//!
//! The frontier owns three things behind one lock: the FIFO queue of pages
//! waiting to be fetched, the set of every URL the crawl has ever seen, and
//! the count of claims currently being processed. Keeping all three under a
//! single mutex makes the two compound operations atomic:
//!
//! - `try_enqueue` is membership-check + insert + append as one step, so two
//!   workers discovering the same URL at the same moment can never both
//!   enqueue it
//! - `claim` is pop + mark-in-flight as one step, so an empty queue with a
//!   zero in-flight count really does mean the crawl has nothing left to do
//!
//! Lock hold times are a few map operations; nothing async ever runs under
//! the lock.

use std::collections::{HashSet, VecDeque};
use std::sync::Mutex;
use url::Url;

#[derive(Debug, Default)]
struct FrontierInner {
    seen: HashSet<String>,
    queue: VecDeque<Url>,
    in_flight: usize,
}

/// Shared work queue and seen-set for one crawl run
#[derive(Debug, Default)]
pub struct Frontier {
    inner: Mutex<FrontierInner>,
}

impl Frontier {
    /// Creates an empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a URL if it has never been seen, queueing it for a visit
    ///
    /// Returns true only for the call that inserted the URL; every later
    /// call with the same URL returns false, and membership never shrinks
    /// for the lifetime of the crawl. The URL must already be normalized;
    /// dedup is exact string equality on the serialized form.
    ///
    /// # Example
    ///
    /// ```
    /// use linkharvest::crawler::Frontier;
    /// use url::Url;
    ///
    /// let frontier = Frontier::new();
    /// let url = Url::parse("https://example.com/").unwrap();
    /// assert!(frontier.try_enqueue(&url));
    /// assert!(!frontier.try_enqueue(&url));
    /// ```
    pub fn try_enqueue(&self, url: &Url) -> bool {
        let mut inner = self.inner.lock().unwrap();
        if inner.seen.insert(url.as_str().to_string()) {
            inner.queue.push_back(url.clone());
            true
        } else {
            false
        }
    }

    /// Takes the next queued URL, marking it in-flight
    ///
    /// Returns None when the queue is currently empty. That is not a
    /// completion signal on its own: another worker may be mid-fetch and
    /// about to enqueue more.
    pub fn claim(&self) -> Option<Url> {
        let mut inner = self.inner.lock().unwrap();
        let url = inner.queue.pop_front()?;
        inner.in_flight += 1;
        Some(url)
    }

    /// Releases a claim taken by [`claim`]
    ///
    /// Must be called exactly once per claim, after every link from that
    /// page has been offered to `try_enqueue`.
    pub fn task_done(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.in_flight -= 1;
    }

    /// True when the queue is empty and nothing is in flight
    ///
    /// Workers only enqueue from within a claim, so once this holds it keeps
    /// holding: the crawl is naturally complete.
    pub fn is_idle(&self) -> bool {
        let inner = self.inner.lock().unwrap();
        inner.queue.is_empty() && inner.in_flight == 0
    }

    /// Number of unique URLs discovered so far
    pub fn seen_count(&self) -> usize {
        self.inner.lock().unwrap().seen.len()
    }

    /// Number of URLs waiting to be fetched
    pub fn queued_count(&self) -> usize {
        self.inner.lock().unwrap().queue.len()
    }

    /// Sorted copy of every URL seen so far
    ///
    /// The coordinator takes this snapshot once, after the workers have
    /// stopped, to build the final report.
    pub fn seen_snapshot(&self) -> Vec<String> {
        let inner = self.inner.lock().unwrap();
        let mut links: Vec<String> = inner.seen.iter().cloned().collect();
        links.sort();
        links
    }
}

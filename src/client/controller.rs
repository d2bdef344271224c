//! Request-lifecycle state machine behind the search box.
//!
//! Keystrokes update the raw term immediately but only reach the network
//! after a 300 ms quiet period; page changes and resets bypass the debounce.
//! Every outbound request carries a sequence number and only the most
//! recently issued one may land, so two in-flight requests can never leave a
//! stale page on screen.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::client::debounce::Debouncer;
use crate::dto::api::AdvocatesResponse;
use crate::pagination::DEFAULT_PAGE_SIZE;

/// Quiet period before a typed term is committed.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Error,
}

/// A fetch the embedding layer should issue against `GET /api/advocates`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Monotonically increasing tag; pass it back to
    /// [`SearchController::complete`] with the outcome.
    pub seq: u64,
    pub search: String,
    pub page: usize,
    pub page_size: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct QueryParams<'a> {
    search: &'a str,
    page: usize,
    page_size: usize,
}

impl FetchRequest {
    /// URL-encoded query string for the advocates endpoint.
    pub fn query_string(&self) -> String {
        let params = QueryParams {
            search: &self.search,
            page: self.page,
            page_size: self.page_size,
        };
        // Serialization of three flat fields cannot fail.
        serde_html_form::to_string(&params).unwrap_or_default()
    }
}

pub struct SearchController {
    raw_search_term: String,
    committed_search_term: String,
    current_page: usize,
    page_size: usize,
    debouncer: Debouncer,
    next_seq: u64,
    in_flight: Option<u64>,
    phase: Phase,
    last_response: Option<AdvocatesResponse>,
    last_error: Option<String>,
}

impl SearchController {
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            raw_search_term: String::new(),
            committed_search_term: String::new(),
            current_page: 1,
            page_size,
            debouncer: Debouncer::new(DEBOUNCE_DELAY),
            next_seq: 0,
            in_flight: None,
            phase: Phase::Idle,
            last_response: None,
            last_error: None,
        }
    }

    /// A keystroke: the raw term updates immediately, the quiet-period timer
    /// restarts, and nothing goes to the network yet.
    pub fn input(&mut self, term: impl Into<String>) {
        self.input_at(term, Instant::now());
    }

    pub fn input_at(&mut self, term: impl Into<String>, now: Instant) {
        self.raw_search_term = term.into();
        self.debouncer.arm(now);
    }

    /// Drives the debounce timer. Once the quiet period has elapsed the raw
    /// term is committed and, if it actually changed, the page resets to 1
    /// and a fetch is due.
    pub fn poll(&mut self) -> Option<FetchRequest> {
        self.poll_at(Instant::now())
    }

    pub fn poll_at(&mut self, now: Instant) -> Option<FetchRequest> {
        if !self.debouncer.fire_ready(now) {
            return None;
        }
        if self.raw_search_term == self.committed_search_term {
            return None;
        }
        self.committed_search_term = self.raw_search_term.clone();
        self.current_page = 1;
        Some(self.issue())
    }

    /// A pagination control picked a page. Not text input, so the debounce
    /// timer is bypassed entirely.
    pub fn set_page(&mut self, page: usize) -> Option<FetchRequest> {
        let page = page.max(1);
        if page == self.current_page {
            return None;
        }
        self.current_page = page;
        Some(self.issue())
    }

    /// Clears both terms, returns to page 1 and always refetches.
    pub fn reset(&mut self) -> FetchRequest {
        self.raw_search_term.clear();
        self.committed_search_term.clear();
        self.current_page = 1;
        self.debouncer.cancel();
        self.issue()
    }

    /// Unconditional fetch of the current committed state. Used for the
    /// initial load.
    pub fn refresh(&mut self) -> FetchRequest {
        self.issue()
    }

    /// Delivers the outcome of a previously issued request. Responses whose
    /// tag is not the most recently issued, still-pending request are
    /// discarded — the tag is consumed on delivery, so a duplicate of the
    /// same outcome is dropped too. Returns whether the outcome was applied.
    pub fn complete(
        &mut self,
        seq: u64,
        result: Result<AdvocatesResponse, String>,
    ) -> bool {
        if self.in_flight != Some(seq) {
            return false;
        }
        self.in_flight = None;
        match result {
            Ok(response) => {
                self.last_response = Some(response);
                self.last_error = None;
                self.phase = Phase::Success;
            }
            Err(message) => {
                // Previously displayed data stays; only the phase flips.
                self.last_error = Some(message);
                self.phase = Phase::Error;
            }
        }
        true
    }

    fn issue(&mut self) -> FetchRequest {
        self.next_seq += 1;
        self.in_flight = Some(self.next_seq);
        self.phase = Phase::Loading;
        FetchRequest {
            seq: self.next_seq,
            search: self.committed_search_term.clone(),
            page: self.current_page,
            page_size: self.page_size,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn raw_search_term(&self) -> &str {
        &self.raw_search_term
    }

    pub fn committed_search_term(&self) -> &str {
        &self.committed_search_term
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn response(&self) -> Option<&AdvocatesResponse> {
        self.last_response.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

impl Default for SearchController {
    fn default() -> Self {
        Self::new()
    }
}

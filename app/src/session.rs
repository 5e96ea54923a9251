//! FILENAME: app/src/session.rs
//! Per-view interaction state: debounce, request sequencing, page clamping.
//!
//! Each dashboard area owns one ViewSession. Filter edits arm a quiet window;
//! when it elapses the session issues a pair of sequence-numbered queries (the
//! table page and the capped chart sample). Responses arriving out of order
//! are dropped unless they carry the latest issued sequence number, so the
//! rendered state always reflects the newest selection.

use crate::config::DashboardConfig;
use hierarchy::Level;
use query_engine::{AttributeKey, FilterSet, PageMeta};
use std::time::{Duration, Instant};

// ============================================================================
// AREAS
// ============================================================================

/// The three dashboard areas, each with independent filter state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewArea {
    User,
    Admin,
    Structure,
}

// ============================================================================
// REQUEST SEQUENCING
// ============================================================================

/// Monotonic sequence numbers for one in-flight request slot.
///
/// `issue` hands out the next number; `accept` admits a response only when it
/// carries the latest issued number and has not been applied yet. Responses
/// for superseded requests are silently dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestTracker {
    issued: u64,
    applied: u64,
}

impl RequestTracker {
    pub fn new() -> RequestTracker {
        RequestTracker::default()
    }

    /// Stamps a new outgoing request, superseding any in flight.
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    /// Whether a response with this stamp should be applied.
    pub fn accept(&mut self, seq: u64) -> bool {
        if seq == self.issued && seq > self.applied {
            self.applied = seq;
            true
        } else {
            false
        }
    }

    /// Whether a request is in flight with no applied response yet.
    pub fn pending(&self) -> bool {
        self.issued > self.applied
    }
}

// ============================================================================
// DEBOUNCE
// ============================================================================

/// A restartable quiet window. Each edit pushes the deadline out; the window
/// fires once when polled past its deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebounceWindow {
    window: Duration,
    deadline: Option<Instant>,
}

impl DebounceWindow {
    pub fn new(window: Duration) -> DebounceWindow {
        DebounceWindow { window, deadline: None }
    }

    /// Records an edit at `now`, restarting the window.
    pub fn note(&mut self, now: Instant) {
        self.deadline = Some(now + self.window);
    }

    /// True exactly once per armed window, when `now` has passed the deadline.
    pub fn poll_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn armed(&self) -> bool {
        self.deadline.is_some()
    }
}

// ============================================================================
// VIEW SESSION
// ============================================================================

/// The dual queries the session wants issued once a window fires: the table
/// page and the chart sample run in parallel, each with its own stamp.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPlan {
    pub filters: FilterSet,
    pub page: usize,
    pub table_seq: u64,
    pub chart_seq: u64,
}

/// Interaction state for one dashboard area.
pub struct ViewSession {
    pub area: ViewArea,
    filters: FilterSet,
    page: usize,
    last_total_pages: usize,
    default_organization: String,
    debounce: DebounceWindow,
    table_requests: RequestTracker,
    chart_requests: RequestTracker,
}

impl ViewSession {
    pub fn new(area: ViewArea, config: &DashboardConfig) -> ViewSession {
        ViewSession {
            area,
            filters: FilterSet::reset_all(&config.default_organization),
            page: 1,
            last_total_pages: 1,
            default_organization: config.default_organization.clone(),
            debounce: DebounceWindow::new(Duration::from_millis(config.debounce_ms)),
            table_requests: RequestTracker::new(),
            chart_requests: RequestTracker::new(),
        }
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Selects a hierarchy level. Deeper levels cascade clear, the page
    /// rewinds to 1, and the quiet window restarts.
    pub fn select_level(&mut self, level: Level, value: impl Into<String>, now: Instant) {
        self.filters = self.filters.with_level(level, value);
        self.page = 1;
        self.debounce.note(now);
    }

    /// Sets or clears one attribute filter. Page rewinds, window restarts.
    pub fn set_attribute(&mut self, key: AttributeKey, value: impl Into<String>, now: Instant) {
        self.filters = self.filters.with_attribute(key, value);
        self.page = 1;
        self.debounce.note(now);
    }

    /// Clears everything back to the pinned organization.
    pub fn reset_filters(&mut self, now: Instant) {
        self.filters = FilterSet::reset_all(&self.default_organization);
        self.page = 1;
        self.debounce.note(now);
    }

    /// Moves to a page, clamped into the last known page range. Returns the
    /// page actually selected. Page moves are not debounced; the caller
    /// issues queries immediately via [`ViewSession::issue`].
    pub fn go_to_page(&mut self, page: usize) -> usize {
        self.page = page.clamp(1, self.last_total_pages.max(1));
        self.page
    }

    /// Polls the quiet window; when it fires, stamps and returns the dual
    /// query plan.
    pub fn poll_due(&mut self, now: Instant) -> Option<QueryPlan> {
        if self.debounce.poll_due(now) {
            Some(self.issue())
        } else {
            None
        }
    }

    /// Stamps a query pair for the current state, superseding any in flight.
    pub fn issue(&mut self) -> QueryPlan {
        QueryPlan {
            filters: self.filters.clone(),
            page: self.page,
            table_seq: self.table_requests.issue(),
            chart_seq: self.chart_requests.issue(),
        }
    }

    /// Applies a table response. Returns false for superseded stamps. On
    /// accept, the known page range updates and the current page is clamped
    /// into it (matches shrinking under a narrower filter can strand the
    /// cursor past the end).
    pub fn apply_table(&mut self, seq: u64, meta: &PageMeta) -> bool {
        if !self.table_requests.accept(seq) {
            return false;
        }
        self.last_total_pages = meta.total_pages.max(1);
        if self.page > self.last_total_pages {
            self.page = self.last_total_pages;
        }
        true
    }

    /// Applies a chart response. Returns false for superseded stamps.
    pub fn apply_chart(&mut self, seq: u64) -> bool {
        self.chart_requests.accept(seq)
    }
}

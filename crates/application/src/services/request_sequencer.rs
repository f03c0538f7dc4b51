//! Request-generation tagging
//!
//! Every outgoing request of a given kind takes a ticket carrying a
//! monotonically increasing sequence number. When the response arrives it is
//! applied only if its ticket is still the latest issued for that kind;
//! anything older is discarded.

use std::sync::atomic::{AtomicU64, Ordering};

/// Independent request streams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    /// Autocomplete suggestion fetches
    Suggestion,
    /// Origin geocoding plus directions
    Route,
}

/// Proof of issue for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket {
    kind: RequestKind,
    sequence: u64,
}

impl RequestTicket {
    /// Which stream the ticket belongs to
    #[must_use]
    pub const fn kind(&self) -> RequestKind {
        self.kind
    }

    /// Sequence number within the stream
    #[must_use]
    pub const fn sequence(&self) -> u64 {
        self.sequence
    }
}

/// Issues and checks request tickets
#[derive(Debug, Default)]
pub struct RequestSequencer {
    suggestion: AtomicU64,
    route: AtomicU64,
}

impl RequestSequencer {
    /// Create a sequencer with both streams at zero
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    const fn counter(&self, kind: RequestKind) -> &AtomicU64 {
        match kind {
            RequestKind::Suggestion => &self.suggestion,
            RequestKind::Route => &self.route,
        }
    }

    /// Issue a ticket newer than every ticket issued before for `kind`
    pub fn issue(&self, kind: RequestKind) -> RequestTicket {
        let sequence = self.counter(kind).fetch_add(1, Ordering::AcqRel) + 1;
        RequestTicket { kind, sequence }
    }

    /// Whether `ticket` is still the latest of its kind
    #[must_use]
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.counter(ticket.kind).load(Ordering::Acquire) == ticket.sequence
    }

    /// Make every outstanding ticket of `kind` stale
    pub fn invalidate(&self, kind: RequestKind) {
        self.counter(kind).fetch_add(1, Ordering::AcqRel);
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Staleness control for searches that finish after the input moved on.
//!
//! A search is pure and runs to completion once started, so nothing is ever
//! interrupted. Instead, every request is issued a [`SearchTicket`] with a
//! monotonically increasing generation. When a result comes back it is applied
//! only if its ticket is still the latest one *and* the document it ran against
//! is still the loaded one; anything else is dropped on the floor.
//!
//! ```text
//!   begin("wha")  → gen 7 ──────────── compute ──────────── complete → dropped (gen 8 issued)
//!   begin("whale")      → gen 8 ── compute ── complete → applied
//! ```
//!
//! Generation bumps and result application both happen under the same write
//! lock, so a stale result can never land after a newer request was issued.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::trace;

use crate::config::Config;
use crate::document::Document;
use crate::search::search;
use crate::types::SearchOutcome;

/// One search request, bound to the document it was issued against.
#[derive(Debug, Clone)]
pub struct SearchTicket {
    generation: u64,
    fingerprint: u32,
    query: String,
    document: Arc<Document>,
}

impl SearchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Run the search this ticket describes. Safe to call from any thread.
    pub fn execute(&self, config: &Config) -> SearchOutcome {
        search(&self.document, &self.query, config)
    }
}

/// The latest applied search for one loaded document.
pub struct SearchSession {
    config: Config,
    document: RwLock<Arc<Document>>,
    generation: AtomicU64,
    applied: RwLock<Option<SearchOutcome>>,
}

impl SearchSession {
    pub fn new(document: Document, config: Config) -> Self {
        SearchSession {
            config,
            document: RwLock::new(Arc::new(document)),
            generation: AtomicU64::new(0),
            applied: RwLock::new(None),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn document(&self) -> Arc<Document> {
        Arc::clone(&self.document.read())
    }

    /// Latest generation issued.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Swap in a new document. Every outstanding ticket becomes stale and the
    /// applied results are cleared.
    pub fn replace_document(&self, document: Document) {
        let mut applied = self.applied.write();
        *self.document.write() = Arc::new(document);
        self.generation.fetch_add(1, Ordering::AcqRel);
        *applied = None;
    }

    /// Issue a ticket for `query`, superseding every earlier ticket.
    ///
    /// An empty query clears the applied results right away.
    pub fn begin(&self, query: &str) -> SearchTicket {
        let mut applied = self.applied.write();
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        if query.is_empty() {
            *applied = None;
        }
        let document = self.document();
        SearchTicket {
            generation,
            fingerprint: document.fingerprint(),
            query: query.to_string(),
            document,
        }
    }

    /// Whether `ticket` is still the latest request for the loaded document.
    pub fn is_current(&self, ticket: &SearchTicket) -> bool {
        ticket.generation == self.generation()
            && ticket.fingerprint == self.document.read().fingerprint()
    }

    /// Apply `outcome` if its ticket is still current. Returns whether it was.
    pub fn complete(&self, ticket: &SearchTicket, outcome: SearchOutcome) -> bool {
        let mut applied = self.applied.write();
        if !self.is_current(ticket) {
            trace!(
                generation = ticket.generation,
                latest = self.generation(),
                query = ticket.query.as_str(),
                "discarding stale search result"
            );
            return false;
        }
        *applied = Some(outcome);
        true
    }

    /// Issue, run and apply a search in one go.
    pub fn search(&self, query: &str) -> Option<SearchOutcome> {
        let ticket = self.begin(query);
        if query.is_empty() {
            return None;
        }
        let outcome = ticket.execute(&self.config);
        self.complete(&ticket, outcome.clone()).then_some(outcome)
    }

    /// The currently applied outcome, if any.
    pub fn results(&self) -> Option<SearchOutcome> {
        self.applied.read().clone()
    }
}

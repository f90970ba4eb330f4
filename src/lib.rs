// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Paginate long plain-text works and search them in linear time.
//!
//! Two independent passes over the same raw text, fused afterwards:
//!
//! # Architecture
//!
//! ```text
//!                ┌──────────────┐   pages, offsets   ┌──────────────┐
//!   raw text ───▶│ paginate.rs  │───────────────────▶│  offsets.rs  │──┐
//!      │         └──────────────┘                    │(page_for_pos)│  │
//!      │         ┌──────────────┐   positions        └──────────────┘  │  ┌───────────┐
//!      └────────▶│  zsearch.rs  │────────────────────────────┬─────────┴─▶│ search.rs │──▶ hits
//!     query ────▶│ (Z-function) │                            │  ┌────────▶│           │
//!                └──────────────┘                   ┌────────▼──┴──┐     └───────────┘
//!                                                   │  snippet.rs  │
//!                                                   └──────────────┘
//! ```
//!
//! All positions are **character offsets** into the raw text, so a match
//! position feeds straight into the page lookup.
//!
//! | Module       | Role                                               |
//! |--------------|----------------------------------------------------|
//! | `paginate`   | Greedy paragraph packing with exact start offsets  |
//! | `offsets`    | Binary search from position to page                |
//! | `zsearch`    | Case-insensitive exact matching, O(n + m)          |
//! | `snippet`    | Clamped context windows                            |
//! | `search`     | Fuses the above, applies the display cap           |
//! | `session`    | Generation counter that drops stale results        |
//! | `contracts`  | Debug-build invariant checks                       |
//!
//! # Usage
//!
//! ```
//! use folio::{search, Config, Document};
//!
//! let config = Config::default();
//! let doc = Document::load("Alpha bravo.\n\nCharlie delta alpha.", &config.pagination);
//! let outcome = search(&doc, "alpha", &config);
//!
//! assert_eq!(outcome.total_matches, 2);
//! assert_eq!(outcome.hits[1].page_index, 0);
//! ```

// Module declarations
pub mod config;
pub mod contracts;
mod document;
mod error;
mod offsets;
mod paginate;
mod search;
mod session;
mod snippet;
mod types;
pub mod utils;
pub mod zsearch;

// Re-exports for public API
pub use config::{Config, MatchMode, PaginationConfig, SearchOptions};
pub use document::Document;
pub use error::{ConfigError, InvariantError};
pub use offsets::{page_for_position, page_range};
pub use paginate::paginate;
pub use search::{find_matches, search};
pub use session::{SearchSession, SearchTicket};
pub use snippet::{snippet, snippet_str};
pub use types::{Match, Page, Pagination, RawText, SearchHit, SearchOutcome, Snippet};
pub use zsearch::{filter_whole_words, find_all, find_all_with, z_function, ZMatcher};

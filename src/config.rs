// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Explicit configuration threaded into pagination and search.
//!
//! Every knob has a documented default, and a JSON file only needs the keys it
//! wants to change:
//!
//! ```json
//! { "pagination": { "targetChars": 1200 }, "maxResults": null }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default page size target, in characters.
pub const DEFAULT_TARGET_CHARS: usize = 1800;
/// Default slack above the target before a page is closed.
pub const DEFAULT_TOLERANCE: usize = 200;
/// Default snippet context on each side of a match.
pub const DEFAULT_SNIPPET_RADIUS: usize = 60;
/// Default cap on hits presented to the caller.
pub const DEFAULT_MAX_RESULTS: usize = 500;

/// Page sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PaginationConfig {
    pub target_chars: usize,
    pub tolerance: usize,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        PaginationConfig {
            target_chars: DEFAULT_TARGET_CHARS,
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl PaginationConfig {
    /// Largest page the greedy accumulator will build.
    #[inline]
    pub fn max_page_chars(&self) -> usize {
        self.target_chars.saturating_add(self.tolerance)
    }

    /// Whether a paragraph of `len` chars is oversized (`len > target * 1.5`).
    /// Oversized paragraphs are split at sentence boundaries.
    #[inline]
    pub fn is_oversized(&self, len: usize) -> bool {
        // len > 1.5 * target  <=>  2 * len > 3 * target
        len.saturating_mul(2) > self.target_chars.saturating_mul(3)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_chars == 0 {
            return Err(ConfigError::ZeroTargetChars);
        }
        Ok(())
    }
}

/// How a query occurrence has to sit in the text to count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchMode {
    /// Any occurrence.
    #[default]
    Substring,
    /// Occurrences not flanked by word characters.
    WholeWord,
}

/// Search knobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub match_mode: MatchMode,
    pub strip_diacritics: bool,
}

/// The complete configuration surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub pagination: PaginationConfig,
    pub snippet_radius: usize,
    /// Cap on hits handed to the caller. `None` presents every match.
    pub max_results: Option<usize>,
    pub match_mode: MatchMode,
    /// Fold accented characters to their base letter when matching.
    pub strip_diacritics: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            pagination: PaginationConfig::default(),
            snippet_radius: DEFAULT_SNIPPET_RADIUS,
            max_results: Some(DEFAULT_MAX_RESULTS),
            match_mode: MatchMode::Substring,
            strip_diacritics: false,
        }
    }
}

impl Config {
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            match_mode: self.match_mode,
            strip_diacritics: self.strip_diacritics,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.pagination.validate()?;
        if self.max_results == Some(0) {
            return Err(ConfigError::ZeroMaxResults);
        }
        Ok(())
    }

    /// Load and validate a JSON config file.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }
}

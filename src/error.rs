// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types.
//!
//! The core operations are total, so errors only come from the edges:
//! configuration that cannot work, and structures that fail validation.

use std::fmt;
use std::path::PathBuf;

/// A configuration that cannot be used.
#[derive(Debug)]
pub enum ConfigError {
    /// `target_chars` must be positive or no paragraph ever fits.
    ZeroTargetChars,
    /// A display cap of zero would hide every result.
    ZeroMaxResults,
    /// The config file could not be read.
    Io { path: PathBuf, source: std::io::Error },
    /// The config file is not valid JSON for [`crate::Config`].
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroTargetChars => write!(f, "targetChars must be greater than 0"),
            ConfigError::ZeroMaxResults => {
                write!(f, "maxResults must be greater than 0 (omit it for no cap)")
            }
            ConfigError::Io { path, source } => {
                write!(f, "failed to read config {}: {}", path.display(), source)
            }
            ConfigError::Parse { path, source } => {
                write!(f, "invalid config {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Parse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A violated pagination invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// Pages and offsets arrays have different lengths.
    MismatchedPagesOffsets { pages_len: usize, offsets_len: usize },
    /// `pages[position].index != position`.
    MisnumberedPage { position: usize, index: usize },
    /// A page with no content.
    EmptyPage { index: usize },
    /// Offset points past the end of the text.
    OffsetOutOfBounds {
        index: usize,
        offset: usize,
        text_len: usize,
    },
    /// Offsets are not strictly increasing.
    UnsortedOffsets { position: usize },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::MismatchedPagesOffsets {
                pages_len,
                offsets_len,
            } => write!(f, "pages.len() {} != offsets.len() {}", pages_len, offsets_len),
            InvariantError::MisnumberedPage { position, index } => {
                write!(f, "page at position {} has index {}", position, index)
            }
            InvariantError::EmptyPage { index } => write!(f, "page {} is empty", index),
            InvariantError::OffsetOutOfBounds {
                index,
                offset,
                text_len,
            } => write!(
                f,
                "offsets[{}] = {} >= text length {}",
                index, offset, text_len
            ),
            InvariantError::UnsortedOffsets { position } => {
                write!(f, "offsets not strictly increasing at position {}", position)
            }
        }
    }
}

impl std::error::Error for InvariantError {}

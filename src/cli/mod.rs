// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the folio command-line interface.
//!
//! Three subcommands: `paginate` to list or print pages, `search` to find a
//! phrase and show where it lands, and `inspect` to print pagination stats and
//! validate the page structure. Every command reads a plain-text file, or
//! stdin when the path is `-`.

pub mod display;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "folio",
    about = "Paginate plain-text books and search them in linear time",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub layout: LayoutArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Default)]
pub struct LayoutArgs {
    /// JSON config file (camelCase keys, every field optional)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Target characters per page (overrides the config file)
    #[arg(long, global = true)]
    pub target_chars: Option<usize>,

    /// Characters a page may exceed the target by
    #[arg(long, global = true)]
    pub tolerance: Option<usize>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a text into pages
    Paginate {
        /// Text file to paginate, or - for stdin
        file: String,

        /// Print only this page (1-based)
        #[arg(short, long)]
        page: Option<usize>,

        /// Emit pages and offsets as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find every occurrence of a phrase, case-insensitively
    Search {
        /// Text file to search, or - for stdin
        file: String,

        /// Search query
        query: String,

        /// Maximum number of hits to display (total is always reported)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Characters of context on each side of a hit
        #[arg(short, long)]
        radius: Option<usize>,

        /// Only report matches bounded by non-word characters
        #[arg(short, long)]
        whole_word: bool,

        /// Treat accented letters as their base letter
        #[arg(long)]
        fold_diacritics: bool,

        /// Emit the search outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print pagination stats and validate the page structure
    Inspect {
        /// Text file to inspect, or - for stdin
        file: String,
    },
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::io::{self, Read};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use folio::{search, Config, Document, MatchMode, RawText};

mod cli;
use cli::display::{
    hit_line, pad_right, progress_pct, row, section_bot, section_top, themed, timing_ms, BOLD, CYAN, GRAY,
    GREEN, RED, YELLOW,
};
use cli::{Cli, Commands, LayoutArgs};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = load_config(&cli.layout)?;

    match cli.command {
        Commands::Paginate { file, page, json } => run_paginate(&file, page, json, &config),
        Commands::Search {
            file,
            query,
            limit,
            radius,
            whole_word,
            fold_diacritics,
            json,
        } => {
            if let Some(limit) = limit {
                config.max_results = Some(limit);
            }
            if let Some(radius) = radius {
                config.snippet_radius = radius;
            }
            if whole_word {
                config.match_mode = MatchMode::WholeWord;
            }
            if fold_diacritics {
                config.strip_diacritics = true;
            }
            config.validate()?;
            run_search(&file, &query, json, &config)
        }
        Commands::Inspect { file } => run_inspect(&file, &config),
    }
}

/// Config file first, then command-line overrides on top.
fn load_config(layout: &LayoutArgs) -> Result<Config> {
    let mut config = match &layout.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };
    if let Some(target) = layout.target_chars {
        config.pagination.target_chars = target;
    }
    if let Some(tolerance) = layout.tolerance {
        config.pagination.tolerance = tolerance;
    }
    config.validate()?;
    debug!(?config, "configuration resolved");
    Ok(config)
}

fn read_text(file: &str) -> Result<RawText> {
    let content = if file == "-" {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read stdin")?;
        buf
    } else {
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file))?
    };
    Ok(RawText::from(content))
}

fn load_document(file: &str, config: &Config) -> Result<Document> {
    let text = read_text(file)?;
    let doc = Document::load(text, &config.pagination);
    info!(
        file,
        chars = doc.text().len(),
        pages = doc.page_count(),
        "document loaded"
    );
    Ok(doc)
}

fn run_paginate(file: &str, page: Option<usize>, json: bool, config: &Config) -> Result<()> {
    let doc = load_document(file, config)?;

    if let Some(number) = page {
        let Some(selected) = number.checked_sub(1).and_then(|i| doc.page(i)) else {
            bail!(
                "Page {} out of range (document has {} pages)",
                number,
                doc.page_count()
            );
        };
        if json {
            println!("{}", serde_json::to_string_pretty(selected)?);
        } else {
            println!("{}", selected.content);
        }
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(doc.pagination())?);
        return Ok(());
    }

    for (page, offset) in doc.pages().iter().zip(doc.offsets()) {
        let preview: String = page
            .content
            .lines()
            .next()
            .unwrap_or_default()
            .chars()
            .take(56)
            .collect();
        println!(
            "{} {} {:>6}  {}",
            pad_right(&themed(CYAN, &[], &format!("p.{}", page.index + 1)), 7),
            pad_right(&themed(GRAY, &[], &format!("@{}", offset)), 9),
            page.char_len(),
            preview
        );
    }
    Ok(())
}

fn run_search(file: &str, query: &str, json: bool, config: &Config) -> Result<()> {
    let doc = load_document(file, config)?;
    let outcome = search(&doc, query, config);

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    let elapsed_ms = outcome.elapsed.as_secs_f64() * 1000.0;
    let summary = if outcome.truncated {
        format!(
            "{} matches (showing {})",
            outcome.total_matches,
            outcome.hits.len()
        )
    } else {
        format!("{} matches", outcome.total_matches)
    };
    println!(
        "{} for {} in {}",
        themed(GREEN, &[BOLD], &summary),
        themed(YELLOW, &[], &format!("\"{}\"", query)),
        timing_ms(elapsed_ms)
    );

    for (ordinal, hit) in outcome.hits.iter().enumerate() {
        println!("{}", hit_line(ordinal, hit));
    }
    Ok(())
}

fn run_inspect(file: &str, config: &Config) -> Result<()> {
    let doc = load_document(file, config)?;
    let lengths: Vec<usize> = doc.pages().iter().map(|p| p.char_len()).collect();
    let total: usize = lengths.iter().sum();
    let max_page = config.pagination.max_page_chars();

    section_top("DOCUMENT");
    row(&format!(" Characters   {}", doc.text().len()));
    row(&format!(" Fingerprint  {:08x}", doc.fingerprint()));
    row(&format!(
        " Layout       target {} + tolerance {}",
        config.pagination.target_chars, config.pagination.tolerance
    ));
    section_bot();

    section_top("PAGES");
    row(&format!(" Count        {}", doc.page_count()));
    if let (Some(min), Some(max)) = (lengths.iter().min(), lengths.iter().max()) {
        row(&format!(" Shortest     {}", min));
        row(&format!(" Longest      {}", max));
        row(&format!(" Mean         {:.1}", total as f64 / lengths.len() as f64));
        let over = lengths.iter().filter(|&&len| len > max_page).count();
        row(&format!(" Over bound   {} (sentence-split overflow)", over));
        let middle = doc.page_count() / 2;
        row(&format!(
            " Progress at p.{}  {}",
            middle + 1,
            progress_pct(doc.progress(Some(middle)))
        ));
    }
    section_bot();

    section_top("INVARIANTS");
    let verdict = doc.pagination().validate(doc.text().len());
    match &verdict {
        Ok(()) => row(&format!(" {}", themed(GREEN, &[], "pages and offsets well-formed"))),
        Err(e) => row(&format!(" {}", themed(RED, &[BOLD], &e.to_string()))),
    }
    section_bot();

    verdict.context("Pagination failed validation")?;
    Ok(())
}

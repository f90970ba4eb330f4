// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the folio CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `FOLIO_THEME` first, then `COLORFGBG`, then defaults to dark. Respects
//! `NO_COLOR` and drops styling when stdout is not a TTY, so piping results
//! into another tool gives plain text.

use std::sync::OnceLock;

use folio::{SearchHit, Snippet};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    /// `FOLIO_THEME` wins; otherwise guess from the `COLORFGBG` background.
    fn from_env() -> Theme {
        let explicit = std::env::var("FOLIO_THEME").ok();
        match explicit.as_deref().map(str::to_ascii_lowercase).as_deref() {
            Some("light" | "l") => return Theme::Light,
            Some("dark" | "d") => return Theme::Dark,
            _ => {}
        }

        // "fg;bg" or "fg;default;bg": light backgrounds are 7 and 9..=15
        let background = std::env::var("COLORFGBG")
            .ok()
            .and_then(|v| v.rsplit(';').next().and_then(|bg| bg.parse::<u8>().ok()));
        match background {
            Some(7) | Some(9..=15) => Theme::Light,
            _ => Theme::Dark,
        }
    }

    fn palette(self) -> &'static Palette {
        match self {
            Theme::Dark => &ONE_DARK,
            Theme::Light => &ONE_LIGHT,
        }
    }
}

static THEME: OnceLock<Theme> = OnceLock::new();

pub fn theme() -> Theme {
    *THEME.get_or_init(Theme::from_env)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

type Rgb = (u8, u8, u8);

/// The handful of colors folio output uses.
struct Palette {
    slow: Rgb,
    fast: Rgb,
    medium: Rgb,
    accent: Rgb,
    muted: Rgb,
    highlight: Rgb,
}

const ONE_DARK: Palette = Palette {
    slow: (224, 108, 117),     // #e06c75
    fast: (152, 195, 121),     // #98c379
    medium: (229, 192, 123),   // #e5c07b
    accent: (86, 182, 194),    // #56b6c2
    muted: (92, 99, 112),      // #5c6370
    highlight: (255, 215, 0),
};

const ONE_LIGHT: Palette = Palette {
    slow: (228, 86, 73),       // #e45649
    fast: (80, 161, 79),       // #50a14f
    medium: (193, 132, 1),     // #c18401
    accent: (1, 132, 188),     // #0184bc
    muted: (160, 161, 167),    // #a0a1a7
    highlight: (152, 104, 1),
};

fn rgb((r, g, b): Rgb) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

// Color accessors take no arguments so they can be passed to `themed`.
#[allow(non_snake_case)]
pub fn RED() -> String {
    rgb(theme().palette().slow)
}
#[allow(non_snake_case)]
pub fn GREEN() -> String {
    rgb(theme().palette().fast)
}
#[allow(non_snake_case)]
pub fn YELLOW() -> String {
    rgb(theme().palette().medium)
}
#[allow(non_snake_case)]
pub fn CYAN() -> String {
    rgb(theme().palette().accent)
}
#[allow(non_snake_case)]
pub fn GRAY() -> String {
    rgb(theme().palette().muted)
}
#[allow(non_snake_case)]
pub fn BRIGHT_YELLOW() -> String {
    rgb(theme().palette().highlight)
}

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = themed(GRAY, &[], "│");
    println!("{}{}{}", border, pad_right(content, BOX_WIDTH), border);
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        themed(GRAY, &[], "┌"),
        label_part,
        themed(GRAY, &[], &format!("{}┐", "─".repeat(remaining)))
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}", themed(GRAY, &[], &format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// One-line snippet with the match highlighted and the edges elided.
pub fn highlight_snippet(snippet: &Snippet) -> String {
    let flat = snippet.single_line();
    format!(
        "…{}{}{}…",
        themed(GRAY, &[], &flat.before),
        themed(BRIGHT_YELLOW, &[BOLD], &flat.matched),
        themed(GRAY, &[], &flat.after)
    )
}

/// `  #12  p.4    @18342  …context…`
pub fn hit_line(ordinal: usize, hit: &SearchHit) -> String {
    format!(
        "{} {} {} {}",
        pad_right(&themed(GRAY, &[], &format!("#{}", ordinal + 1)), 6),
        pad_right(&themed(CYAN, &[], &format!("p.{}", hit.page_index + 1)), 7),
        pad_right(&themed(GRAY, &[DIM], &format!("@{}", hit.position)), 9),
        highlight_snippet(&hit.snippet)
    )
}

/// Color-coded timing value in ms (green=fast, yellow=medium, red=slow)
pub fn timing_ms(value: f64) -> String {
    let text = format!("{:.3} ms", value);
    if value < 5.0 {
        themed(GREEN, &[], &text)
    } else if value < 20.0 {
        themed(YELLOW, &[], &text)
    } else {
        themed(RED, &[], &text)
    }
}

/// Reading progress as a percentage.
pub fn progress_pct(fraction: f64) -> String {
    format!("{:>5.1}%", fraction * 100.0)
}

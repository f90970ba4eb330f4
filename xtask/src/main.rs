//! Custom cargo commands for folio.
//!
//! Usage:
//!   cargo xtask verify            - Run full verification suite
//!   cargo xtask test              - Run all tests
//!   cargo xtask check             - Quick check (check + test + clippy)
//!   cargo xtask bench             - Run benchmarks
//!   cargo xtask fuzz [TARGET] [S] - Run fuzz targets for S seconds each

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Fuzz targets declared in fuzz/Cargo.toml.
const FUZZ_TARGETS: &[&str] = &["zsearch_oracle", "pagination_invariants", "search_queries"];

/// Debug-build contracts that must stay wired in.
const CONTRACTS: &[&str] = &[
    "check_pagination_well_formed",
    "check_matches_sorted",
    "check_page_lookup",
];

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => {
            let target = args.get(1).map(String::as_str);
            let seconds = match args.get(2) {
                Some(s) => s.parse().with_context(|| format!("Invalid duration: {}", s))?,
                None => 30,
            };
            fuzz(target, seconds)?
        }
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify              Run full verification suite (contracts + tests + clippy + fuzz smoke)
  test                Run all Rust tests
  check               Quick check (cargo check + test + clippy)
  bench               Run benchmarks
  fuzz [TARGET] [S]   Run one or all fuzz targets for S seconds (default 30)
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("folio Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking contracts are wired in...");
    check_contract_calls()?;
    println!("✓ Contracts called from library code\n");

    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Fuzz smoke run...");
    if cargo_fuzz_available() {
        fuzz(None, 10)?;
        println!("✓ Fuzz targets survived\n");
    } else {
        println!("  (cargo-fuzz not installed, skipping)\n");
    }

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"])?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"])
}

/// Run fuzz targets (requires nightly and cargo-fuzz)
fn fuzz(target: Option<&str>, seconds: u64) -> Result<()> {
    let targets: Vec<&str> = match target {
        Some(t) if FUZZ_TARGETS.contains(&t) => vec![t],
        Some(t) => bail!("Unknown fuzz target '{}'. Known: {}", t, FUZZ_TARGETS.join(", ")),
        None => FUZZ_TARGETS.to_vec(),
    };

    let max_time = format!("-max_total_time={}", seconds);
    for target in targets {
        println!("  fuzzing {} for {}s...", target, seconds);
        run_cargo(&["+nightly", "fuzz", "run", target, "--", &max_time])?;
    }
    Ok(())
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str]) -> Result<()> {
    let root = project_root()?;

    let status = Command::new("cargo")
        .args(args)
        .current_dir(&root)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn cargo_fuzz_available() -> bool {
    Command::new("cargo")
        .args(["fuzz", "--version"])
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// Each contract must be defined in contracts.rs and called from at least one
/// other library module. A contract nobody calls checks nothing.
fn check_contract_calls() -> Result<()> {
    let src_dir = project_root()?.join("src");
    let mut callers = String::new();
    for entry in std::fs::read_dir(&src_dir).context("Failed to read src/")? {
        let path = entry?.path();
        let is_rust = path.extension().is_some_and(|e| e == "rs");
        if is_rust && path.file_name().is_some_and(|n| n != "contracts.rs") {
            callers.push_str(
                &std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
            );
        }
    }

    for contract in CONTRACTS {
        if !callers.contains(&format!("{}(", contract)) {
            bail!("Contract {} is never called. Someone unwired a safety check!", contract);
        }
    }
    Ok(())
}

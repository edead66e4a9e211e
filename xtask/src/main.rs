//! Custom cargo commands for the devcheck crate.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask features  - Run tests once per check family configuration
//!   cargo xtask check     - Quick check (test + clippy)
//!   cargo xtask kani      - Run Kani proofs
//!   cargo xtask bench     - Run benchmarks

use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Cargo features, one per check family. Kept in sync with Cargo.toml.
const FAMILY_FEATURES: &[&str] = &[
    "bool-checks",
    "null-checks",
    "file-path-checks",
    "bounds-checks",
    "subarray-checks",
    "equality-checks",
    "compare-checks",
    "bit-shift-checks",
];

fn main() -> Result<()> {
    let task = env::args().nth(1);
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("features") => features()?,
        Some("check") => check()?,
        Some("kani") => kani()?,
        Some("bench") => bench()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify    Run full verification suite (markers + tests + feature matrix + clippy)
  test      Run all Rust tests
  features  Run the test suite with each family alone, with none, and in release
  check     Quick check (cargo test + clippy)
  kani      Run Kani model checking proofs
  bench     Run benchmarks
"#
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("devcheck Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet", "--all-features"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running feature matrix...");
    features()?;
    println!("✓ Every family configuration passed\n");

    println!("[4/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--all-features", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("==========================================");
    println!("✓ ALL VERIFICATION CHECKS PASSED");
    println!("==========================================");

    Ok(())
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"])
}

/// Each family on its own, then no families, then a release build.
///
/// The tests are written so they pass whether a family is active or elided,
/// which is exactly what this matrix exercises.
fn features() -> Result<()> {
    for (i, feature) in FAMILY_FEATURES.iter().enumerate() {
        println!(
            "  [{}/{}] only {}",
            i + 1,
            FAMILY_FEATURES.len() + 2,
            feature
        );
        run_cargo(&[
            "test",
            "--quiet",
            "--no-default-features",
            "--features",
            feature,
        ])?;
    }

    println!("  [{0}/{0}] no families", FAMILY_FEATURES.len() + 1);
    run_cargo(&["test", "--quiet", "--no-default-features"])?;

    println!(
        "  [{0}/{0}] release (all families elided)",
        FAMILY_FEATURES.len() + 2
    );
    run_cargo(&["test", "--quiet", "--release"])?;

    Ok(())
}

/// Quick check
fn check() -> Result<()> {
    println!("Running quick checks...\n");

    println!("[1/2] cargo test...");
    run_cargo(&["test", "--quiet"])?;

    println!("[2/2] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Kani proofs live in a standalone crate
fn kani() -> Result<()> {
    let proofs_dir = project_root()?.join("kani-proofs");

    let status = Command::new("cargo")
        .arg("kani")
        .current_dir(&proofs_dir)
        .status()
        .context("Failed to run cargo kani (is kani-verifier installed?)")?;

    if !status.success() {
        bail!("Kani proofs failed");
    }

    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench", "--features", "force-checks"])
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

/// Every check with a non-obvious guarantee documents it with an `INVARIANT:`
/// marker. Losing them usually means someone rewrote a check without thinking
/// about its edge cases.
fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;
    let src_dir = root.join("src");

    let output = Command::new("grep")
        .args(["-r", "INVARIANT:", "--include=*.rs"])
        .current_dir(&src_dir)
        .output()
        .context("Failed to run grep")?;

    let count = output
        .stdout
        .split(|&b| b == b'\n')
        .filter(|l| !l.is_empty())
        .count();

    if count < 4 {
        bail!(
            "Expected at least 4 INVARIANT markers, found {}. Someone may have removed safety comments!",
            count
        );
    }

    Ok(())
}

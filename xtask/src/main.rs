//! Custom cargo commands for acekit.
//!
//! Usage:
//!   cargo xtask verify    - Run full verification suite
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz <t>  - Run one fuzz target (needs cargo-fuzz)
//!   cargo xtask kani      - Run Kani proofs (needs cargo-kani)

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Constants that must agree between the codec and the proof crate.
const ALIGNED_CONSTANTS: &[&str] = &[
    "BASE",
    "T_MIN",
    "T_MAX",
    "SKEW",
    "DAMP",
    "INITIAL_BIAS",
    "INITIAL_N",
];

const FUZZ_TARGETS: &[&str] = &["decode_input", "encode_roundtrip", "hostname_labels"];

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("verify") => verify()?,
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz(args.next().as_deref())?,
        Some("kani") => kani()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  verify         Run full verification suite (markers + tests + clippy + constant alignment)
  test           Run all Rust tests
  check          Quick check (cargo check + test + clippy)
  bench          Run benchmarks
  fuzz <target>  Run a fuzz target for 60s ({})
  kani           Run Kani proofs in kani-proofs/
"#,
        FUZZ_TARGETS.join(", ")
    );
}

/// Full verification suite
fn verify() -> Result<()> {
    println!("==========================================");
    println!("acekit Verification Suite");
    println!("==========================================\n");

    println!("[1/4] Checking invariant markers...");
    check_invariant_markers()?;
    println!("✓ Invariant markers present\n");

    println!("[2/4] Running Rust tests...");
    run_cargo(&["test", "--quiet"])?;
    println!("✓ All Rust tests passed\n");

    println!("[3/4] Running clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"])?;
    println!("✓ Clippy passed\n");

    println!("[4/4] Verifying codec/proof constant alignment...");
    verify_constants()?;
    println!("✓ Constants aligned\n");

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
    run_cargo(&["check"])?;

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

/// Run one fuzz target for a bounded time
fn fuzz(target: Option<&str>) -> Result<()> {
    let Some(target) = target else {
        bail!("usage: cargo xtask fuzz <{}>", FUZZ_TARGETS.join("|"));
    };
    if !FUZZ_TARGETS.contains(&target) {
        bail!("unknown fuzz target {:?}, expected one of {:?}", target, FUZZ_TARGETS);
    }

    run_cargo_in(
        &project_root()?,
        &["+nightly", "fuzz", "run", target, "--", "-max_total_time=60"],
    )
}

/// Run Kani proofs
fn kani() -> Result<()> {
    let root = project_root()?;
    run_cargo_in(&root.join("kani-proofs"), &["kani"])?;
    // Proofs embedded next to the codec itself
    run_cargo_in(&root, &["kani", "--lib"])
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
    run_cargo_in(&project_root()?, args)
}

fn run_cargo_in(dir: &Path, args: &[&str]) -> Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .current_dir(dir)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}

fn check_invariant_markers() -> Result<()> {
    let root = project_root()?;
    let src_dir = root.join("src");

    let output = Command::new("grep")
        .args(["-r", "INVARIANT:", "--include=*.rs"])
        .current_dir(&src_dir)
        .output()
        .context("Failed to run grep")?;

    let count = output.stdout.split(|&b| b == b'\n').filter(|l| !l.is_empty()).count();

    if count < 5 {
        bail!(
            "Expected at least 5 INVARIANT markers, found {}. Someone may have removed safety comments!",
            count
        );
    }

    Ok(())
}

fn verify_constants() -> Result<()> {
    let root = project_root()?;

    let params_rs = std::fs::read_to_string(root.join("src/punycode/params.rs"))
        .context("Failed to read src/punycode/params.rs")?;

    let proofs_path = root.join("kani-proofs/src/lib.rs");
    if !proofs_path.exists() {
        println!("  (no kani-proofs crate, skipping constant check)");
        return Ok(());
    }
    let proofs_rs = std::fs::read_to_string(&proofs_path)
        .context("Failed to read kani-proofs/src/lib.rs")?;

    for name in ALIGNED_CONSTANTS {
        let codec = extract_const(&params_rs, name)
            .with_context(|| format!("{} not found in params.rs", name))?;
        let proof = extract_const(&proofs_rs, name)
            .with_context(|| format!("{} not found in kani-proofs", name))?;

        if codec != proof {
            bail!("{}: codec has {} but kani-proofs has {}", name, codec, proof);
        }
        println!("  {} = {}", name, codec);
    }

    Ok(())
}

/// Parse `pub const NAME: u32 = VALUE;`, accepting decimal or `0x` hex.
fn extract_const(content: &str, name: &str) -> Option<u64> {
    let needle = format!("pub const {}:", name);
    for line in content.lines() {
        let line = line.trim();
        if !line.starts_with(&needle) {
            continue;
        }

        let value = line
            .split('=')
            .nth(1)?
            .split("//")
            .next()?
            .trim()
            .trim_end_matches(';')
            .replace('_', "");

        return match value.strip_prefix("0x") {
            Some(hex) => u64::from_str_radix(hex, 16).ok(),
            None => value.parse().ok(),
        };
    }
    None
}

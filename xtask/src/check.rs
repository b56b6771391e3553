use anyhow::{Context, Result};
use colored::Colorize;
use std::process::Command;
use std::time::Instant;

pub fn run() -> Result<()> {
    println!();
    println!("{}", "🔍 Checking workspace...".cyan().bold());
    println!();

    let total_start = Instant::now();

    // Check 1: full workspace build
    println!("{}", "  Checking all crates...".cyan());
    let check_start = Instant::now();

    let check_output = Command::new("cargo")
        .args(["check", "--workspace", "--all-targets"])
        .output()
        .context("Failed to run cargo check")?;

    if !check_output.status.success() {
        eprintln!("{}", "  ✗ Check failed".red().bold());
        eprintln!();
        eprintln!("{}", String::from_utf8_lossy(&check_output.stderr));
        anyhow::bail!("Check failed");
    }

    println!(
        "{}",
        format!(
            "  ✓ Check passed in {:.2}s",
            check_start.elapsed().as_secs_f64()
        )
        .green()
    );
    println!();

    // Check 2: clippy with warnings denied
    println!("{}", "  Running clippy...".cyan());
    let clippy_start = Instant::now();

    let clippy_output = Command::new("cargo")
        .args([
            "clippy",
            "--workspace",
            "--all-targets",
            "--",
            "-D",
            "warnings",
        ])
        .output()
        .context("Failed to run clippy")?;

    if !clippy_output.status.success() {
        eprintln!("{}", "  ✗ Clippy failed".red().bold());
        eprintln!();
        eprintln!("{}", String::from_utf8_lossy(&clippy_output.stderr));
        anyhow::bail!("Clippy failed");
    }

    println!(
        "{}",
        format!(
            "  ✓ Clippy passed in {:.2}s",
            clippy_start.elapsed().as_secs_f64()
        )
        .green()
    );
    println!();

    println!(
        "{}",
        format!(
            "✅ All checks passed in {:.2}s",
            total_start.elapsed().as_secs_f64()
        )
        .green()
        .bold()
    );
    println!();
    Ok(())
}

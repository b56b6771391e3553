use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::Command;

pub fn run(config: Option<&Path>, verbose: bool) -> Result<()> {
    println!();
    println!("{}", "🖥  Launching order terminal...".cyan().bold());
    println!();

    let mut cmd = Command::new("cargo");
    cmd.args(["run", "--package", "terminal", "--bin", "order-terminal"]);
    if let Some(path) = config {
        cmd.env("ORDER_TERMINAL_CONFIG", path);
    }
    if verbose {
        cmd.env("RUST_LOG", "debug");
    }

    let status = cmd.status().context("Failed to launch the terminal")?;
    if !status.success() {
        anyhow::bail!("terminal exited with {status}");
    }
    Ok(())
}

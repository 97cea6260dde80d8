use anyhow::Result;
use xshell::{Shell, cmd};

/// Directory holding the bundled tracker logs
pub const TEST_DATA_DIR: &str = "crates/kinetrack-log/test-data";

/// Run rustfmt check (does not modify files)
pub fn run_fmt_check(sh: &Shell) -> Result<()> {
    eprintln!("Running cargo fmt check...");
    cmd!(sh, "cargo fmt --all -- --check").run()?;
    Ok(())
}

/// Apply rustfmt to all files
pub fn run_fmt(sh: &Shell) -> Result<()> {
    eprintln!("Applying cargo fmt...");
    cmd!(sh, "cargo fmt --all").run()?;
    Ok(())
}

/// Run clippy with all warnings treated as errors
pub fn run_clippy(sh: &Shell) -> Result<()> {
    eprintln!("Running cargo clippy...");
    cmd!(sh, "cargo clippy --all-targets --workspace -- -D warnings").run()?;
    Ok(())
}

/// Install a cargo subcommand if `cargo <name> --version` fails
pub fn ensure_cargo_tool(sh: &Shell, name: &str, package: &str) -> Result<()> {
    if cmd!(sh, "cargo {name} --version").quiet().run().is_err() {
        eprintln!("Installing {package}...");
        cmd!(sh, "cargo install {package} --locked").run()?;
    }
    Ok(())
}

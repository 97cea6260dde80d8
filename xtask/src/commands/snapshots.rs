use anyhow::Result;
use clap::Args;
use xshell::{Shell, cmd};

use super::common;

#[derive(Args)]
pub struct Snapshots {
    /// Accept every pending snapshot without reviewing
    #[arg(long)]
    accept: bool,
}

impl Snapshots {
    pub fn run(&self, sh: &Shell) -> Result<()> {
        common::ensure_cargo_tool(sh, "insta", "cargo-insta")?;
        if self.accept {
            cmd!(sh, "cargo insta test --workspace --accept").run()?;
        } else {
            cmd!(sh, "cargo insta test --workspace --review").run()?;
        }
        Ok(())
    }
}

use anyhow::{Context, Result};
use clap::Args;
use xshell::{Shell, cmd};

use super::common::TEST_DATA_DIR;

#[derive(Args)]
pub struct Samples {
    /// Recording start time passed to every run, in seconds
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    start: f64,

    /// Recording length passed to every run, in seconds
    #[arg(long, default_value_t = 60.0)]
    duration: f64,
}

impl Samples {
    pub fn run(&self, sh: &Shell) -> Result<()> {
        cmd!(sh, "cargo build -p kinetrack").run()?;
        sh.create_dir("target/samples")?;

        let start = self.start.to_string();
        let duration = self.duration.to_string();
        for path in sh.read_dir(TEST_DATA_DIR)? {
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .context("tracker log without a file name")?;
            let csv = cmd!(sh, "target/debug/kinetrack {path} {start} {duration}")
                .read()
                .with_context(|| format!("kinetrack failed on {}", path.display()))?;
            let dest = format!("target/samples/{stem}.csv");
            sh.write_file(&dest, csv + "\n")?;
            eprintln!("Wrote {dest}");
        }
        Ok(())
    }
}

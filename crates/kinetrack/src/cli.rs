use crate::{config::PipelineConfig, output};
use anyhow::{Context, Result};
use clap::Parser;
use kinetrack_core::{Pipeline, Timeline};
use std::{
    io::{self, BufWriter, Write},
    path::PathBuf,
};

/// Smooth a tracker log and print per-frame kinematics as CSV.
#[derive(Debug, Parser)]
#[command(name = "kinetrack", allow_negative_numbers = true)]
pub struct SmoothArgs {
    /// Path to the tracker log (JSON).
    pub input: PathBuf,

    /// Wall-clock time at the first frame, in seconds.
    pub start_timestamp: f64,

    /// Length of the recording, in seconds.
    pub duration: f64,
}

impl SmoothArgs {
    pub fn run(&self) -> Result<()> {
        let config = PipelineConfig::from_env()?;

        let stdout = io::stdout().lock();
        let mut writer = BufWriter::new(stdout);
        self.run_with(&config, &mut writer)?;
        writer.flush().context("failed to flush output")?;
        Ok(())
    }

    /// Run the whole pipeline, writing CSV to `writer`.
    ///
    /// Nothing is written unless the input loads successfully.
    pub fn run_with<W: Write>(&self, config: &PipelineConfig, writer: W) -> Result<usize> {
        let document = kinetrack_log::load_path(&self.input)
            .with_context(|| format!("failed to load {}", self.input.display()))?;

        tracing::info!(
            input = %self.input.display(),
            num_frames = document.num_frames,
            trackers = document.trackers.len(),
            "loaded tracker log"
        );

        let timeline = Timeline::new(document.num_frames, self.start_timestamp, self.duration);
        let table = Pipeline::new(config.smoother.params()).run(document);

        let rows = output::write_rows(writer, &table, &timeline).context("failed to write rows")?;
        tracing::info!(rows, "wrote frame rows");
        Ok(rows)
    }
}

use anyhow::{Context, Result};
use clap::Parser;
use kinetrack::align::align_timestamps;
use kinetrack_core::Timeline;
use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::PathBuf,
};

/// Tag timestamped positions with the video frame they fall on.
#[derive(Parser)]
#[command(name = "timestamp-to-frame", allow_negative_numbers = true)]
struct Args {
    /// CSV of `timestamp, x, y` records with a header line.
    input: PathBuf,

    /// Total frames in the video.
    num_frames: u64,

    /// Wall-clock time at the first frame, in seconds.
    start_timestamp: f64,

    /// Length of the recording, in seconds.
    duration: f64,
}

fn main() -> Result<()> {
    kinetrack::init_tracing();
    let args = Args::parse();

    let file = File::open(&args.input)
        .with_context(|| format!("failed to open {}", args.input.display()))?;
    let timeline = Timeline::new(args.num_frames, args.start_timestamp, args.duration);

    let mut writer = BufWriter::new(io::stdout().lock());
    let count = align_timestamps(BufReader::new(file), &mut writer, &timeline)
        .with_context(|| format!("failed to convert {}", args.input.display()))?;
    writer.flush().context("failed to flush output")?;

    tracing::info!(records = count, "aligned timestamps");
    Ok(())
}

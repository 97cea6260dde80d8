//! Alignment of timestamped positions with video frames.
//!
//! Ground-truth logs record `timestamp, x, y` per line; matching them against
//! tracker output needs the frame each timestamp falls on.

use anyhow::{Context, Result, bail};
use kinetrack_core::Timeline;
use std::io;

const HEADER: [&str; 4] = ["timestamp", "x", "y", "frame"];

/// Read `timestamp, x, y` records and write `timestamp, x, y, frame` records.
///
/// The first line of the input is a header and is skipped. `x` and `y` are
/// truncated to whole pixels. Returns the number of records written.
pub fn align_timestamps<R: io::Read, W: io::Write>(
    reader: R,
    writer: W,
    timeline: &Timeline,
) -> Result<usize> {
    let mut input = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut output = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    output.write_record(HEADER)?;

    let mut count = 0usize;
    for record in input.records() {
        let record = record.context("failed to read timestamp record")?;
        let line = record.position().map_or(0, |p| p.line());

        // Stray one-character lines (a lone carriage return residue, EOF marks).
        if record.len() == 1 && record[0].len() <= 1 {
            continue;
        }
        if record.len() != 3 {
            bail!("line {line}: expected 3 fields, found {}", record.len());
        }

        let (timestamp, x, y): (f64, f64, f64) = record
            .deserialize(None)
            .with_context(|| format!("line {line}: fields must be numbers"))?;
        let frame = timeline
            .frame_for(timestamp)
            .with_context(|| format!("line {line}: cannot place timestamp {timestamp}"))?;

        output.serialize((timestamp, x.trunc() as i64, y.trunc() as i64, frame))?;
        count += 1;
    }

    output.flush()?;
    Ok(count)
}

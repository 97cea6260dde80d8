/// End-to-end tests: tracker log on disk in, CSV rows out.
use anyhow::Result;
use kinetrack::{
    cli::SmoothArgs,
    config::{PipelineConfig, SmootherConfig},
};
use std::{io::Write, path::PathBuf};

fn test_log(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../kinetrack-log/test-data")
        .join(name)
}

fn render(input: PathBuf, start: f64, duration: f64, config: &PipelineConfig) -> Result<String> {
    let args = SmoothArgs {
        input,
        start_timestamp: start,
        duration,
    };
    let mut out = Vec::new();
    args.run_with(config, &mut out)?;
    Ok(String::from_utf8(out)?)
}

// A kernel this narrow leaves positions untouched.
fn unsmoothed() -> PipelineConfig {
    PipelineConfig {
        smoother: SmootherConfig {
            sigma: 0.1,
            ..SmootherConfig::default()
        },
    }
}

/// (frame, timestamp, trackerId, trackerIndex) per row.
fn row_keys(csv: &str) -> Vec<(i64, f64, String, usize)> {
    csv.lines()
        .skip(1)
        .map(|line| {
            let fields: Vec<&str> = line.split(',').collect();
            (
                fields[0].parse().unwrap(),
                fields[1].parse().unwrap(),
                fields[11].to_string(),
                fields[12].parse().unwrap(),
            )
        })
        .collect()
}

#[test]
fn scenario_rows_follow_frames() -> Result<()> {
    let csv = render(test_log("scenario.json"), 100.0, 10.0, &PipelineConfig::default())?;

    let keys = row_keys(&csv);
    assert_eq!(
        keys,
        vec![
            (0, 100.0, "A".to_string(), 0),
            (5, 105.0, "A".to_string(), 0),
            (9, 109.0, "A".to_string(), 0),
        ]
    );
    Ok(())
}

#[test]
fn header_names_every_column() -> Result<()> {
    let csv = render(test_log("no_trackers.json"), 0.0, 1.0, &PipelineConfig::default())?;
    assert_eq!(
        csv,
        "frame,timestamp,x,y,xVel,yVel,velMag,xAcc,yAcc,accMag,curvature,trackerId,trackerIndex\n"
    );
    Ok(())
}

#[test]
fn interleaved_unsmoothed() -> Result<()> {
    let csv = render(test_log("interleaved.json"), 1000.0, 8.0, &unsmoothed())?;
    insta::assert_snapshot!("interleaved_unsmoothed", csv.trim_end());
    Ok(())
}

#[test]
fn shared_frame_rows_order_by_tracker_index() -> Result<()> {
    let csv = render(test_log("interleaved.json"), 0.0, 8.0, &PipelineConfig::default())?;
    let keys: Vec<(i64, usize)> = row_keys(&csv)
        .into_iter()
        .map(|(frame, _, _, index)| (frame, index))
        .collect();
    assert_eq!(keys, vec![(3, 0), (4, 0), (5, 0), (5, 1), (6, 1)]);
    Ok(())
}

#[test]
fn uncompressed_log_with_metadata() -> Result<()> {
    let csv = render(test_log("uncompressed.json"), 0.0, 12.0, &PipelineConfig::default())?;
    let keys = row_keys(&csv);
    let frames: Vec<i64> = keys.iter().map(|k| k.0).collect();
    let ids: Vec<&str> = keys.iter().map(|k| k.2.as_str()).collect();
    assert_eq!(frames, vec![4, 5, 6, 7]);
    assert_eq!(ids, vec!["17", "17", "3", "17"]);
    assert!((keys[2].1 - 0.6).abs() < 1e-12);
    Ok(())
}

#[test]
fn out_of_range_frames_are_not_emitted() -> Result<()> {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile()?;
    write!(
        file,
        r#"{{"numFrames": 3, "trackers": [{{"trackerId": 1, "track": [[0, 0, 1], [1, 1, 2], [2, 2, 3]]}}]}}"#
    )?;

    let csv = render(file.path().to_path_buf(), 0.0, 3.0, &PipelineConfig::default())?;
    let frames: Vec<i64> = row_keys(&csv).into_iter().map(|k| k.0).collect();
    assert_eq!(frames, vec![1, 2]);
    Ok(())
}

#[test]
fn degenerate_tracks_still_render() -> Result<()> {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile()?;
    write!(
        file,
        r#"{{"numFrames": 10, "trackers": [
            {{"trackerId": "empty", "track": []}},
            {{"trackerId": "one", "track": [[5, 5, 1]]}},
            {{"trackerId": "two", "track": [[5, 5, 2], [6, 6, 3]]}}
        ]}}"#
    )?;

    let csv = render(file.path().to_path_buf(), 0.0, 1.0, &unsmoothed())?;
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[1],
        "1,0.1,5.0,295.0,5.0,295.0,295.0423698386386,5.0,295.0,295.0423698386386,0.0,one,1"
    );
    Ok(())
}

#[test]
fn malformed_log_writes_nothing() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"numFrames": 3, "trackers": [{{"trackerId": 1, "track": [[0, 0]]}}]}}"#)
        .unwrap();

    let args = SmoothArgs {
        input: file.path().to_path_buf(),
        start_timestamp: 0.0,
        duration: 1.0,
    };
    let mut out = Vec::new();
    let err = args.run_with(&PipelineConfig::default(), &mut out).unwrap_err();
    assert!(out.is_empty());
    assert!(format!("{err:#}").contains("malformed tracker log"));
}

#[test]
fn missing_log_is_an_error() {
    let args = SmoothArgs {
        input: test_log("does-not-exist.json"),
        start_timestamp: 0.0,
        duration: 1.0,
    };
    let mut out = Vec::new();
    assert!(args.run_with(&PipelineConfig::default(), &mut out).is_err());
    assert!(out.is_empty());
}

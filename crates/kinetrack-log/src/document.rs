use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity the upstream tracker assigned to one object.
///
/// Trackers emit either integers or strings; the value is carried through
/// untouched and printed verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TrackerId {
    Int(i64),
    Text(String),
}

impl fmt::Display for TrackerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackerId::Int(id) => write!(f, "{id}"),
            TrackerId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for TrackerId {
    fn from(id: i64) -> Self {
        TrackerId::Int(id)
    }
}

impl From<&str> for TrackerId {
    fn from(id: &str) -> Self {
        TrackerId::Text(id.to_string())
    }
}

/// One observed position of a tracked object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "SampleRepr")]
pub struct RawSample {
    pub x: f64,
    pub y: f64,
    /// Video frame index. Fractional frames are truncated on load.
    pub frame: i64,
}

impl RawSample {
    pub fn new(x: f64, y: f64, frame: i64) -> Self {
        Self { x, y, frame }
    }
}

// The tracker writes `[x, y, frame]` when compressing its log and
// `{"x", "y", "frame"}` objects otherwise.
#[derive(Deserialize)]
#[serde(untagged)]
enum SampleRepr {
    Triple([f64; 3]),
    Object { x: f64, y: f64, frame: f64 },
}

impl From<SampleRepr> for RawSample {
    fn from(repr: SampleRepr) -> Self {
        let (x, y, frame) = match repr {
            SampleRepr::Triple([x, y, frame]) => (x, y, frame),
            SampleRepr::Object { x, y, frame } => (x, y, frame),
        };
        Self {
            x,
            y,
            frame: frame.trunc() as i64,
        }
    }
}

/// The full recorded path of one tracked object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTrack {
    #[serde(rename = "trackerId")]
    pub tracker_id: TrackerId,

    /// First frame the tracker saw this object, when the log records it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth: Option<i64>,

    #[serde(rename = "track")]
    pub samples: Vec<RawSample>,
}

impl RawTrack {
    pub fn new(tracker_id: impl Into<TrackerId>, samples: Vec<RawSample>) -> Self {
        Self {
            tracker_id: tracker_id.into(),
            birth: None,
            samples,
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// A complete tracker log for one recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Total number of frames in the source video.
    #[serde(rename = "numFrames")]
    pub num_frames: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// Tracks in the order the log lists them.
    pub trackers: Vec<RawTrack>,
}

impl Document {
    pub fn new(num_frames: u64, trackers: Vec<RawTrack>) -> Self {
        Self {
            num_frames,
            width: None,
            height: None,
            trackers,
        }
    }

    pub fn sample_count(&self) -> usize {
        self.trackers.iter().map(RawTrack::len).sum()
    }
}

//! Mapping between video frames and wall-clock time.
//!
//! Frames are assumed to be evenly spread over the recording, so both
//! directions are plain linear interpolation.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum TimelineError {
    #[error("recording duration must be non-zero")]
    ZeroDuration,

    #[error("timestamp {timestamp} does not map onto a frame")]
    Unrepresentable { timestamp: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timeline {
    num_frames: u64,
    start: f64,
    duration: f64,
}

impl Timeline {
    pub fn new(num_frames: u64, start: f64, duration: f64) -> Self {
        Self {
            num_frames,
            start,
            duration,
        }
    }

    pub fn num_frames(&self) -> u64 {
        self.num_frames
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Estimated wall-clock time of `frame`.
    pub fn timestamp(&self, frame: i64) -> f64 {
        self.start + (frame as f64 / self.num_frames as f64) * self.duration
    }

    /// Frame shown at `timestamp`, truncated toward zero.
    pub fn frame_for(&self, timestamp: f64) -> Result<i64, TimelineError> {
        if self.duration == 0.0 {
            return Err(TimelineError::ZeroDuration);
        }

        let frame = (timestamp - self.start) / self.duration * self.num_frames as f64;
        if !frame.is_finite() || frame.abs() >= i64::MAX as f64 {
            return Err(TimelineError::Unrepresentable { timestamp });
        }
        Ok(frame.trunc() as i64)
    }
}

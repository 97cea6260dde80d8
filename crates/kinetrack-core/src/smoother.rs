//! Gaussian low-pass filtering of raw tracks.
//!
//! Coordinates are filtered independently per axis with a sampled Gaussian
//! kernel. The sequence is mirrored at both ends (`d c b a | a b c d | d c b a`)
//! so the output always has the same length as the input, and the frame axis
//! is never touched.
//!
//! The y axis is reflected about the configured extent before filtering so
//! that displayed y grows upward. The reflection is kept in the output.

use kinetrack_log::{RawTrack, TrackerId};
use nalgebra::Vector2;

/// Kernel standard deviation, in samples.
pub const DEFAULT_SIGMA: f64 = 51.0;
/// Largest frame dimension the tracker ran at; y is reflected about it.
pub const DEFAULT_EXTENT: f64 = 300.0;
/// Kernel half-width, in standard deviations.
pub const DEFAULT_TRUNCATE: f64 = 4.0;

/// Largest kernel half-width; wider kernels are cut off here.
pub const MAX_RADIUS: usize = 1 << 20;

// Below this the filter is the identity.
const MIN_SIGMA: f64 = 1e-15;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmootherParams {
    pub sigma: f64,
    pub extent: f64,
    pub truncate: f64,
}

impl Default for SmootherParams {
    fn default() -> Self {
        Self {
            sigma: DEFAULT_SIGMA,
            extent: DEFAULT_EXTENT,
            truncate: DEFAULT_TRUNCATE,
        }
    }
}

/// Normalized, symmetric Gaussian weights over `-radius..=radius`.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianKernel {
    radius: usize,
    weights: Vec<f64>,
}

impl GaussianKernel {
    pub fn new(sigma: f64, truncate: f64) -> Self {
        if sigma.is_nan() || sigma <= MIN_SIGMA {
            return Self::identity();
        }

        let reach = truncate * sigma + 0.5;
        if reach > MAX_RADIUS as f64 {
            tracing::warn!(sigma, truncate, max_radius = MAX_RADIUS, "kernel radius capped");
        }
        // NaN clamps to NaN, which casts to zero.
        let radius = reach.clamp(0.0, MAX_RADIUS as f64) as usize;
        let scale = -0.5 / (sigma * sigma);
        let mut weights: Vec<f64> = (0..=2 * radius)
            .map(|i| {
                let x = i as f64 - radius as f64;
                (scale * x * x).exp()
            })
            .collect();
        let total: f64 = weights.iter().sum();
        for w in &mut weights {
            *w /= total;
        }

        Self { radius, weights }
    }

    pub fn identity() -> Self {
        Self {
            radius: 0,
            weights: vec![1.0],
        }
    }

    pub fn radius(&self) -> usize {
        self.radius
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Filter `input`, mirroring it at the edges. Output length equals input length.
    pub fn apply(&self, input: &[f64]) -> Vec<f64> {
        let len = input.len();
        let radius = self.radius as isize;
        (0..len as isize)
            .map(|center| {
                self.weights
                    .iter()
                    .zip(center - radius..=center + radius)
                    .map(|(w, idx)| w * input[reflect_index(idx, len)])
                    .sum::<f64>()
            })
            .collect()
    }
}

/// Map any index onto `0..len` by repeated half-sample mirroring.
fn reflect_index(idx: isize, len: usize) -> usize {
    let period = 2 * len as isize;
    let m = idx.rem_euclid(period) as usize;
    if m < len { m } else { 2 * len - 1 - m }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothedSample {
    pub position: Vector2<f64>,
    pub frame: i64,
}

/// A track after filtering. Index `i` corresponds to sample `i` of the raw track.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothedTrack {
    pub tracker_id: TrackerId,
    pub samples: Vec<SmoothedSample>,
}

impl SmoothedTrack {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn frames(&self) -> impl Iterator<Item = i64> + '_ {
        self.samples.iter().map(|s| s.frame)
    }
}

#[derive(Debug, Clone)]
pub struct Smoother {
    kernel: GaussianKernel,
    extent: f64,
}

impl Default for Smoother {
    fn default() -> Self {
        Self::new(SmootherParams::default())
    }
}

impl Smoother {
    pub fn new(params: SmootherParams) -> Self {
        Self {
            kernel: GaussianKernel::new(params.sigma, params.truncate),
            extent: params.extent,
        }
    }

    pub fn kernel(&self) -> &GaussianKernel {
        &self.kernel
    }

    /// Replace a raw track with its filtered counterpart.
    pub fn smooth(&self, track: RawTrack) -> SmoothedTrack {
        let xs: Vec<f64> = track.samples.iter().map(|s| s.x).collect();
        let ys: Vec<f64> = track.samples.iter().map(|s| self.extent - s.y).collect();

        let xs = self.kernel.apply(&xs);
        let ys = self.kernel.apply(&ys);

        let samples = track
            .samples
            .iter()
            .zip(xs.into_iter().zip(ys))
            .map(|(raw, (x, y))| SmoothedSample {
                position: Vector2::new(x, y),
                frame: raw.frame,
            })
            .collect();

        SmoothedTrack {
            tracker_id: track.tracker_id,
            samples,
        }
    }
}

//! Finite-difference kinematics over a smoothed track.
//!
//! Derivatives are taken with respect to the frame index, which may be
//! unevenly spaced. Short tracks never fail: a lone sample reports its own
//! position as its velocity, and tracks with fewer than three samples report
//! their position as acceleration. Repeated frames within a track divide by a
//! zero spacing and yield non-finite values rather than an error.

use crate::smoother::{SmoothedSample, SmoothedTrack};
use nalgebra::Vector2;

/// Motion state of one tracked object at one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicSample {
    pub frame: i64,
    pub position: Vector2<f64>,
    pub velocity: Vector2<f64>,
    pub acceleration: Vector2<f64>,
    pub vel_mag: f64,
    pub acc_mag: f64,
    pub curvature: f64,
}

/// Backward difference at `i`; the first sample shares the second's velocity.
///
/// Panics if `i` is out of bounds.
pub fn velocity(samples: &[SmoothedSample], i: usize) -> Vector2<f64> {
    if samples.len() <= 1 {
        return samples[i].position;
    }

    let i = i.max(1);
    let (prev, cur) = (&samples[i - 1], &samples[i]);
    let h = spacing(prev, cur);
    (cur.position - prev.position) / h
}

/// Second difference at `i` for unevenly spaced frames; each endpoint
/// shares the value of its interior neighbour.
///
/// Panics if `i` is out of bounds.
pub fn acceleration(samples: &[SmoothedSample], i: usize) -> Vector2<f64> {
    let len = samples.len();
    if len <= 2 {
        return samples[i].position;
    }

    let i = i.clamp(1, len - 2);
    let (prev, cur, next) = (&samples[i - 1], &samples[i], &samples[i + 1]);
    let h1 = spacing(prev, cur);
    let h2 = spacing(cur, next);
    (next.position - cur.position * 2.0 + prev.position) / (h1 * h2)
}

// Taken in f64 so frames at the ends of the i64 range cannot overflow.
fn spacing(from: &SmoothedSample, to: &SmoothedSample) -> f64 {
    to.frame as f64 - from.frame as f64
}

/// Signed curvature of a planar path. Zero when the object is at rest.
pub fn curvature(velocity: &Vector2<f64>, acceleration: &Vector2<f64>) -> f64 {
    if velocity.x == 0.0 && velocity.y == 0.0 {
        return 0.0;
    }

    let cross = velocity.x * acceleration.y - velocity.y * acceleration.x;
    cross / velocity.norm_squared().powf(1.5)
}

/// One [`KinematicSample`] per sample of `track`, in track order.
pub fn derive(track: &SmoothedTrack) -> Vec<KinematicSample> {
    let samples = &track.samples;
    (0..samples.len())
        .map(|i| {
            let velocity = velocity(samples, i);
            let acceleration = acceleration(samples, i);
            KinematicSample {
                frame: samples[i].frame,
                position: samples[i].position,
                velocity,
                acceleration,
                vel_mag: velocity.norm(),
                acc_mag: acceleration.norm(),
                curvature: curvature(&velocity, &acceleration),
            }
        })
        .collect()
}

//! Smoothing and kinematics over recorded tracker logs.
//!
//! Everything here is pure batch computation over an in-memory
//! [`kinetrack_log::Document`]; reading inputs and writing rows is left to
//! the caller.

pub mod aggregate;
pub mod kinematics;
pub mod pipeline;
pub mod smoother;
pub mod timeline;

pub use aggregate::{FrameRow, FrameTable};
pub use kinematics::KinematicSample;
pub use pipeline::Pipeline;
pub use smoother::{Smoother, SmootherParams, SmoothedTrack};
pub use timeline::Timeline;

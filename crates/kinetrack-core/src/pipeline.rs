use crate::{
    aggregate::{FrameTable, index_trackers},
    kinematics::{self, KinematicSample},
    smoother::{SmoothedTrack, Smoother, SmootherParams},
};
use kinetrack_log::Document;

/// Runs a tracker log through smoothing, kinematics and frame aggregation.
///
/// Each stage finishes for every track before the next one starts.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    smoother: Smoother,
}

impl Pipeline {
    pub fn new(params: SmootherParams) -> Self {
        Self {
            smoother: Smoother::new(params),
        }
    }

    pub fn run(&self, document: Document) -> FrameTable {
        let Document {
            num_frames,
            trackers,
            ..
        } = document;

        let trackers = index_trackers(trackers);

        let smoothed: Vec<SmoothedTrack> = trackers
            .into_iter()
            .map(|track| self.smoother.smooth(track))
            .collect();
        tracing::info!(
            tracks = smoothed.len(),
            kernel_radius = self.smoother.kernel().radius(),
            "smoothed tracks"
        );

        let derived: Vec<Vec<KinematicSample>> =
            smoothed.iter().map(kinematics::derive).collect();

        let mut table = FrameTable::new(num_frames);
        for (track, samples) in smoothed.into_iter().zip(derived) {
            tracing::debug!(
                tracker_id = %track.tracker_id,
                samples = samples.len(),
                "aggregating track"
            );
            table.push_track(track.tracker_id, samples);
        }
        tracing::info!(
            frames = table.frames().count(),
            rows = table.row_count(),
            "aggregated frames"
        );

        table
    }
}

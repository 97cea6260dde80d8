//! Per-frame view over every tracker's kinematics.

use crate::{kinematics::KinematicSample, timeline::Timeline};
use kinetrack_log::{RawTrack, TrackerId};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, hash_map::Entry};

/// Output column names, in row order.
pub const COLUMNS: [&str; 13] = [
    "frame",
    "timestamp",
    "x",
    "y",
    "xVel",
    "yVel",
    "velMag",
    "xAcc",
    "yAcc",
    "accMag",
    "curvature",
    "trackerId",
    "trackerIndex",
];

/// One output line: a tracker's kinematics at one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameRow<'a> {
    pub frame: i64,
    pub timestamp: f64,
    pub x: f64,
    pub y: f64,
    pub x_vel: f64,
    pub y_vel: f64,
    pub vel_mag: f64,
    pub x_acc: f64,
    pub y_acc: f64,
    pub acc_mag: f64,
    pub curvature: f64,
    pub tracker_id: &'a TrackerId,
    pub tracker_index: usize,
}

impl<'a> FrameRow<'a> {
    fn new(
        sample: &KinematicSample,
        timestamp: f64,
        tracker_id: &'a TrackerId,
        tracker_index: usize,
    ) -> Self {
        Self {
            frame: sample.frame,
            timestamp,
            x: sample.position.x,
            y: sample.position.y,
            x_vel: sample.velocity.x,
            y_vel: sample.velocity.y,
            vel_mag: sample.vel_mag,
            x_acc: sample.acceleration.x,
            y_acc: sample.acceleration.y,
            acc_mag: sample.acc_mag,
            curvature: sample.curvature,
            tracker_id,
            tracker_index,
        }
    }
}

/// Collapse repeated tracker ids so each id owns exactly one track.
///
/// The returned position of a track is its tracker index: ids keep the slot
/// where they first appeared, and a later record with the same id replaces
/// the earlier samples.
pub fn index_trackers(trackers: Vec<RawTrack>) -> Vec<RawTrack> {
    let mut slots: Vec<RawTrack> = Vec::with_capacity(trackers.len());
    let mut index_for_id: HashMap<TrackerId, usize> = HashMap::new();

    for track in trackers {
        match index_for_id.entry(track.tracker_id.clone()) {
            Entry::Occupied(entry) => {
                let index = *entry.get();
                tracing::warn!(
                    tracker_id = %track.tracker_id,
                    tracker_index = index,
                    "duplicate tracker id, later track replaces earlier one"
                );
                slots[index] = track;
            }
            Entry::Vacant(entry) => {
                entry.insert(slots.len());
                slots.push(track);
            }
        }
    }

    slots
}

/// Kinematic samples regrouped by frame.
///
/// Within a frame, samples stay ordered by tracker index, and for a single
/// tracker by their position in its track.
#[derive(Debug, Clone, Default)]
pub struct FrameTable {
    num_frames: u64,
    tracker_ids: Vec<TrackerId>,
    by_frame: BTreeMap<i64, Vec<(usize, KinematicSample)>>,
}

impl FrameTable {
    pub fn new(num_frames: u64) -> Self {
        Self {
            num_frames,
            tracker_ids: Vec::new(),
            by_frame: BTreeMap::new(),
        }
    }

    /// Add the next tracker's samples and return the index assigned to it.
    pub fn push_track(
        &mut self,
        tracker_id: TrackerId,
        samples: Vec<KinematicSample>,
    ) -> usize {
        let index = self.tracker_ids.len();
        let mut dropped = 0usize;
        for sample in samples {
            if !self.contains_frame(sample.frame) {
                dropped += 1;
                continue;
            }
            // Indices only grow, so appending keeps each frame sorted.
            self.by_frame
                .entry(sample.frame)
                .or_default()
                .push((index, sample));
        }

        if dropped > 0 {
            tracing::warn!(
                %tracker_id,
                dropped,
                num_frames = self.num_frames,
                "samples outside the recording were dropped"
            );
        }

        self.tracker_ids.push(tracker_id);
        index
    }

    pub fn num_frames(&self) -> u64 {
        self.num_frames
    }

    pub fn tracker_ids(&self) -> &[TrackerId] {
        &self.tracker_ids
    }

    /// Frames with at least one sample, ascending.
    pub fn frames(&self) -> impl Iterator<Item = i64> + '_ {
        self.by_frame.keys().copied()
    }

    pub fn row_count(&self) -> usize {
        self.by_frame.values().map(Vec::len).sum()
    }

    /// Rows ordered by frame, then tracker index.
    pub fn rows<'a>(
        &'a self,
        timeline: &'a Timeline,
    ) -> impl Iterator<Item = FrameRow<'a>> + 'a {
        self.by_frame.iter().flat_map(move |(&frame, entries)| {
            let timestamp = timeline.timestamp(frame);
            entries.iter().map(move |(index, sample)| {
                FrameRow::new(sample, timestamp, &self.tracker_ids[*index], *index)
            })
        })
    }

    fn contains_frame(&self, frame: i64) -> bool {
        u64::try_from(frame).is_ok_and(|frame| frame < self.num_frames)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinetrack_log::RawSample;
    use nalgebra::Vector2;

    fn sample(frame: i64, x: f64) -> KinematicSample {
        KinematicSample {
            frame,
            position: Vector2::new(x, 0.0),
            velocity: Vector2::zeros(),
            acceleration: Vector2::zeros(),
            vel_mag: 0.0,
            acc_mag: 0.0,
            curvature: 0.0,
        }
    }

    #[test]
    fn columns_match_row_fields() {
        assert_eq!(COLUMNS.len(), 13);
        assert_eq!(COLUMNS[0], "frame");
        assert_eq!(COLUMNS[12], "trackerIndex");
    }

    #[test]
    fn rows_follow_frame_then_tracker_order() {
        let mut table = FrameTable::new(10);
        let first = table.push_track(TrackerId::from("a"), vec![sample(5, 1.0), sample(7, 2.0)]);
        let second = table.push_track(TrackerId::Int(9), vec![sample(2, 3.0), sample(5, 4.0)]);
        assert_eq!((first, second), (0, 1));

        let timeline = Timeline::new(10, 0.0, 10.0);
        let rows: Vec<(i64, usize, f64)> = table
            .rows(&timeline)
            .map(|r| (r.frame, r.tracker_index, r.x))
            .collect();
        assert_eq!(rows, vec![(2, 1, 3.0), (5, 0, 1.0), (5, 1, 4.0), (7, 0, 2.0)]);
    }

    #[test]
    fn frames_outside_recording_are_dropped() {
        let mut table = FrameTable::new(4);
        table.push_track(
            TrackerId::Int(1),
            vec![sample(-1, 0.0), sample(3, 0.0), sample(4, 0.0)],
        );
        assert_eq!(table.frames().collect::<Vec<_>>(), vec![3]);
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn empty_frames_produce_no_rows() {
        let mut table = FrameTable::new(100);
        table.push_track(TrackerId::Int(1), vec![sample(10, 0.0), sample(90, 0.0)]);
        let timeline = Timeline::new(100, 0.0, 1.0);
        assert_eq!(table.rows(&timeline).count(), 2);
        assert_eq!(table.frames().collect::<Vec<_>>(), vec![10, 90]);
    }

    #[test]
    fn repeated_frame_within_track_keeps_track_order() {
        let mut table = FrameTable::new(10);
        table.push_track(TrackerId::Int(1), vec![sample(4, 1.0), sample(4, 2.0)]);
        let timeline = Timeline::new(10, 0.0, 1.0);
        let xs: Vec<f64> = table.rows(&timeline).map(|r| r.x).collect();
        assert_eq!(xs, vec![1.0, 2.0]);
    }

    #[test]
    fn rows_carry_timestamp_and_id() {
        let mut table = FrameTable::new(10);
        table.push_track(TrackerId::from("car"), vec![sample(5, 0.0)]);
        let timeline = Timeline::new(10, 100.0, 10.0);
        let row = table.rows(&timeline).next().unwrap();
        assert_eq!(row.timestamp, 105.0);
        assert_eq!(row.tracker_id, &TrackerId::from("car"));
    }

    #[test]
    fn index_trackers_keeps_first_seen_slot() {
        let tracks = vec![
            RawTrack::new(TrackerId::Int(7), vec![RawSample::new(0.0, 0.0, 0)]),
            RawTrack::new("b", vec![]),
            RawTrack::new(
                TrackerId::Int(7),
                vec![RawSample::new(1.0, 1.0, 1), RawSample::new(2.0, 2.0, 2)],
            ),
        ];
        let indexed = index_trackers(tracks);
        assert_eq!(indexed.len(), 2);
        assert_eq!(indexed[0].tracker_id, TrackerId::Int(7));
        assert_eq!(indexed[0].len(), 2);
        assert_eq!(indexed[1].tracker_id, TrackerId::from("b"));
    }

    #[test]
    fn index_trackers_preserves_document_order() {
        let tracks = vec![
            RawTrack::new(TrackerId::Int(30), vec![]),
            RawTrack::new(TrackerId::Int(10), vec![]),
            RawTrack::new(TrackerId::Int(20), vec![]),
        ];
        let ids: Vec<TrackerId> = index_trackers(tracks)
            .into_iter()
            .map(|t| t.tracker_id)
            .collect();
        assert_eq!(
            ids,
            vec![TrackerId::Int(30), TrackerId::Int(10), TrackerId::Int(20)]
        );
    }
}

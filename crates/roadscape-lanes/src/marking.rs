//! Lane boundary markings from centerline samples.

use crate::graph::LaneRecord;
use crate::sampler::LaneSamples;
use roadscape_core::{Location, Waypoint};

/// Left boundary of a lane at `w`: half a lane width to the left.
pub fn left_marking(w: &Waypoint) -> Location {
    w.transform.lateral_shift(-w.lane_width * 0.5)
}

/// Right boundary of a lane at `w`: half a lane width to the right.
pub fn right_marking(w: &Waypoint) -> Location {
    w.transform.lateral_shift(w.lane_width * 0.5)
}

impl From<LaneSamples> for LaneRecord {
    fn from(samples: LaneSamples) -> Self {
        let waypoints = samples.into_waypoints();
        let left_marking = waypoints.iter().map(left_marking).collect();
        let right_marking = waypoints.iter().map(right_marking).collect();
        LaneRecord {
            waypoints,
            left_marking,
            right_marking,
        }
    }
}

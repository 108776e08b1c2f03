//! The [`Waypoint`] record read from the map service.

use crate::geom::Transform;
use crate::id::{LaneId, RoadId, WaypointId};
use smallvec::SmallVec;

/// A point on a lane centerline, as reported by the map service.
///
/// Plain value type: the map service produces it, the sampler copies it
/// into lane sequences, and nothing mutates it afterwards.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Waypoint {
    /// Map-unique identity.
    pub id: WaypointId,
    /// Road the waypoint lies on.
    pub road_id: RoadId,
    /// Lane the waypoint lies on. Never the centerline.
    pub lane_id: LaneId,
    /// Centerline pose at this point.
    pub transform: Transform,
    /// Lane width at this point, metres.
    pub lane_width: f64,
}

/// Candidates returned by a forward query.
///
/// Almost always zero or one element; two inline slots cover a simple
/// fork without spilling to the heap.
pub type Successors = SmallVec<[Waypoint; 2]>;

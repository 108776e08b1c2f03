//! Strongly-typed identifiers for roads, lanes, waypoints and actors.

use std::fmt;

/// Identifies a sampled waypoint.
///
/// Opaque to this crate: the map service allocates it and guarantees
/// uniqueness across the whole map. Only equality, ordering and hashing
/// are relied upon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WaypointId(pub u64);

impl fmt::Display for WaypointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for WaypointId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Identifies a road in the road network.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct RoadId(pub u32);

impl fmt::Display for RoadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RoadId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Signed lane index relative to the road centerline.
///
/// The sign encodes the side of the road, the magnitude the offset from
/// the centerline. `0` is the centerline itself and is never assigned to
/// a drivable lane, which is why [`left`](LaneId::left) and
/// [`right`](LaneId::right) step over it. Both return `None` when the
/// neighbour index would fall outside `i32`.
///
/// # Examples
///
/// ```
/// use roadscape_core::LaneId;
///
/// assert_eq!(LaneId(1).left(), Some(LaneId(-1)));
/// assert_eq!(LaneId(-1).right(), Some(LaneId(1)));
/// assert_eq!(LaneId(2).right(), Some(LaneId(3)));
/// assert_eq!(LaneId(i32::MAX).right(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LaneId(pub i32);

impl LaneId {
    /// The reserved centerline index.
    pub const CENTERLINE: LaneId = LaneId(0);

    /// Returns `true` for the reserved centerline index.
    pub fn is_centerline(self) -> bool {
        self.0 == 0
    }

    /// Lane id of the left neighbour: `L - 1`, or `L - 2` when `L - 1`
    /// would be the centerline.
    pub fn left(self) -> Option<LaneId> {
        match self.0.checked_sub(1)? {
            0 => Some(LaneId(-1)),
            l => Some(LaneId(l)),
        }
    }

    /// Lane id of the right neighbour: `L + 1`, or `L + 2` when `L + 1`
    /// would be the centerline.
    pub fn right(self) -> Option<LaneId> {
        match self.0.checked_add(1)? {
            0 => Some(LaneId(1)),
            l => Some(LaneId(l)),
        }
    }
}

impl fmt::Display for LaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for LaneId {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

/// Identifies a live actor in the simulated world.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ActorId(pub u32);

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ActorId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

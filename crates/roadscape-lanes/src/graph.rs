//! Lane records, road groups, and the exported [`LaneGraph`].

use indexmap::IndexMap;
use roadscape_core::{GeoLocation, LaneId, Location, RoadId, Rotation, Waypoint, WaypointId};

/// One sampled lane with its boundary markings.
///
/// `left_marking[i]` and `right_marking[i]` belong to `waypoints[i]`;
/// the three sequences always have the same, non-zero length.
#[derive(Clone, Debug, PartialEq)]
pub struct LaneRecord {
    pub(crate) waypoints: Vec<Waypoint>,
    pub(crate) left_marking: Vec<Location>,
    pub(crate) right_marking: Vec<Location>,
}

impl LaneRecord {
    /// Road of every waypoint in the lane.
    pub fn road_id(&self) -> RoadId {
        self.waypoints[0].road_id
    }

    /// Lane of the seed waypoint.
    pub fn lane_id(&self) -> LaneId {
        self.waypoints[0].lane_id
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Always `false`: a lane holds at least its seed.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Centerline samples in traversal order.
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Left boundary, index-aligned with [`waypoints`](Self::waypoints).
    pub fn left_marking(&self) -> &[Location] {
        &self.left_marking
    }

    /// Right boundary, index-aligned with [`waypoints`](Self::waypoints).
    pub fn right_marking(&self) -> &[Location] {
        &self.right_marking
    }
}

/// All sampled lanes of one road, keyed by lane id.
#[derive(Clone, Debug, PartialEq)]
pub struct RoadGroup {
    road_id: RoadId,
    lanes: IndexMap<LaneId, LaneRecord>,
}

impl RoadGroup {
    /// An empty group for `road_id`.
    pub fn new(road_id: RoadId) -> Self {
        Self {
            road_id,
            lanes: IndexMap::new(),
        }
    }

    /// The shared road.
    pub fn road_id(&self) -> RoadId {
        self.road_id
    }

    /// Insert a lane, returning the one it replaced.
    ///
    /// A replaced lane keeps its position in iteration order. Returns the
    /// record back as `Err` if it belongs to a different road.
    pub fn insert(&mut self, lane: LaneRecord) -> Result<Option<LaneRecord>, LaneRecord> {
        if lane.road_id() != self.road_id {
            return Err(lane);
        }
        Ok(self.replace(lane))
    }

    /// Insert a lane already known to be on this group's road.
    pub(crate) fn replace(&mut self, lane: LaneRecord) -> Option<LaneRecord> {
        debug_assert_eq!(lane.road_id(), self.road_id);
        self.lanes.insert(lane.lane_id(), lane)
    }

    /// Look up a lane.
    pub fn lane(&self, lane_id: LaneId) -> Option<&LaneRecord> {
        self.lanes.get(&lane_id)
    }

    /// Lanes in insertion order.
    pub fn lanes(&self) -> impl Iterator<Item = &LaneRecord> {
        self.lanes.values()
    }

    /// Number of lanes.
    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    /// `true` if no lane has been inserted.
    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }
}

/// Road groups keyed by road id, in first-seen order.
pub type RoadGroups = IndexMap<RoadId, RoadGroup>;

/// One exported graph node: a waypoint with geodetic geometry and links.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeRecord {
    /// Road of the waypoint.
    pub road_id: RoadId,
    /// Lane of the waypoint.
    pub lane_id: LaneId,
    /// Geodetic centerline position.
    pub position: GeoLocation,
    /// Orientation, unprojected.
    pub orientation: Rotation,
    /// Geodetic left boundary position.
    pub left_margin_position: GeoLocation,
    /// Geodetic right boundary position.
    pub right_margin_position: GeoLocation,
    /// Every later waypoint of the same lane sequence, nearest first.
    pub next_waypoints_ids: Vec<WaypointId>,
    /// Same-road waypoint in the lane to the left, if any.
    pub left_lane_waypoint_id: Option<WaypointId>,
    /// Same-road waypoint in the lane to the right, if any.
    pub right_lane_waypoint_id: Option<WaypointId>,
}

impl NodeRecord {
    /// The immediately following waypoint of the lane, if any.
    pub fn next_waypoint_id(&self) -> Option<WaypointId> {
        self.next_waypoints_ids.first().copied()
    }
}

/// The flat lane-waypoint graph, keyed by waypoint id.
///
/// Nodes iterate in build order: road groups in first-seen order, lanes
/// within a road in insertion order, waypoints along the lane.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LaneGraph {
    nodes: IndexMap<WaypointId, NodeRecord>,
}

impl LaneGraph {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            nodes: IndexMap::with_capacity(n),
        }
    }

    /// Insert a node, returning `false` (and leaving the graph untouched)
    /// if the id is already present.
    pub(crate) fn insert_new(&mut self, id: WaypointId, node: NodeRecord) -> bool {
        match self.nodes.entry(id) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(node);
                true
            }
        }
    }

    /// Look up a node.
    pub fn get(&self, id: WaypointId) -> Option<&NodeRecord> {
        self.nodes.get(&id)
    }

    /// `true` if `id` is a node of the graph.
    pub fn contains(&self, id: WaypointId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// `true` for a graph built from an empty map.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in build order.
    pub fn iter(&self) -> impl Iterator<Item = (WaypointId, &NodeRecord)> {
        self.nodes.iter().map(|(id, node)| (*id, node))
    }

    /// Node ids in build order.
    pub fn ids(&self) -> impl Iterator<Item = WaypointId> + '_ {
        self.nodes.keys().copied()
    }

    /// Take the underlying map.
    pub fn into_nodes(self) -> IndexMap<WaypointId, NodeRecord> {
        self.nodes
    }
}

impl<'a> IntoIterator for &'a LaneGraph {
    type Item = (&'a WaypointId, &'a NodeRecord);
    type IntoIter = indexmap::map::Iter<'a, WaypointId, NodeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

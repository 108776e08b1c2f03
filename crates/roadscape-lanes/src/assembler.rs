//! Graph assembly: road groups to a flat, geodetic lane graph.

use crate::config::NeighbourMatching;
use crate::graph::{LaneGraph, LaneRecord, NodeRecord, RoadGroup, RoadGroups};
use roadscape_core::{GeoProjector, MapError, Waypoint, WaypointId};
use tracing::debug;

/// Group lane records by road, in first-seen road order.
///
/// A later lane with the same `(road, lane)` pair replaces the earlier
/// one in place.
pub fn group_lanes(lanes: impl IntoIterator<Item = LaneRecord>) -> RoadGroups {
    let mut groups = RoadGroups::new();
    for lane in lanes {
        let road_id = lane.road_id();
        let lane_id = lane.lane_id();
        let group = groups
            .entry(road_id)
            .or_insert_with(|| RoadGroup::new(road_id));
        if let Some(replaced) = group.replace(lane) {
            debug!(
                road = %road_id,
                lane = %lane_id,
                replaced_samples = replaced.len(),
                "lane sampled twice, keeping the later walk"
            );
        }
    }
    groups
}

/// Turns road groups into a [`LaneGraph`].
pub struct GraphAssembler<'a> {
    projector: &'a dyn GeoProjector,
    matching: NeighbourMatching,
}

impl<'a> GraphAssembler<'a> {
    /// Create an assembler projecting through `projector`.
    pub fn new(projector: &'a dyn GeoProjector, matching: NeighbourMatching) -> Self {
        Self {
            projector,
            matching,
        }
    }

    /// Build the graph.
    ///
    /// Fails only if two nodes share a waypoint id.
    pub fn assemble(&self, groups: &RoadGroups) -> Result<LaneGraph, MapError> {
        let total = groups
            .values()
            .flat_map(|group| group.lanes())
            .map(LaneRecord::len)
            .sum();
        let mut graph = LaneGraph::with_capacity(total);
        for group in groups.values() {
            for lane in group.lanes() {
                self.assemble_lane(group, lane, &mut graph)?;
            }
            debug!(road = %group.road_id(), lanes = group.len(), "assembled road group");
        }
        Ok(graph)
    }

    fn assemble_lane(
        &self,
        group: &RoadGroup,
        lane: &LaneRecord,
        graph: &mut LaneGraph,
    ) -> Result<(), MapError> {
        let lane_id = lane.lane_id();
        let left_lane = lane_id.left().and_then(|l| group.lane(l));
        let right_lane = lane_id.right().and_then(|l| group.lane(l));
        let ids: Vec<WaypointId> = lane.waypoints().iter().map(|w| w.id).collect();

        for (i, w) in lane.waypoints().iter().enumerate() {
            let node = NodeRecord {
                road_id: group.road_id(),
                lane_id,
                position: self.projector.to_geolocation(&w.transform.location),
                orientation: w.transform.rotation,
                left_margin_position: self.projector.to_geolocation(&lane.left_marking()[i]),
                right_margin_position: self.projector.to_geolocation(&lane.right_marking()[i]),
                next_waypoints_ids: ids[i + 1..].to_vec(),
                left_lane_waypoint_id: left_lane.and_then(|l| self.neighbour(l, i, w)),
                right_lane_waypoint_id: right_lane.and_then(|l| self.neighbour(l, i, w)),
            };
            if !graph.insert_new(w.id, node) {
                return Err(MapError::DuplicateWaypoint { waypoint: w.id });
            }
        }
        Ok(())
    }

    /// The waypoint of `other` paired with `w`, the `index`-th sample of
    /// its own lane.
    fn neighbour(&self, other: &LaneRecord, index: usize, w: &Waypoint) -> Option<WaypointId> {
        match self.matching {
            NeighbourMatching::Index => other.waypoints().get(index).map(|n| n.id),
            NeighbourMatching::Nearest => {
                let here = &w.transform.location;
                let mut best: Option<(f64, WaypointId)> = None;
                for n in other.waypoints() {
                    let d = n.transform.location.distance_squared(here);
                    if best.is_none_or(|(bd, _)| d < bd) {
                        best = Some((d, n.id));
                    }
                }
                best.map(|(_, id)| id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::TopologySampler;
    use roadscape_core::{LaneId, Location, RoadId};
    use roadscape_test_utils::{waypoint, FlatProjector, ScriptedMap, StraightRoadMap};

    fn groups_for(map: &dyn roadscape_core::MapService, precision: f64) -> RoadGroups {
        let sampler = TopologySampler::new(map, precision, 100_000);
        group_lanes(
            sampler
                .sample_all()
                .unwrap()
                .into_iter()
                .map(LaneRecord::from),
        )
    }

    fn two_lane_road(lane_a: i32, lane_b: i32, len_a: f64, len_b: f64) -> StraightRoadMap {
        StraightRoadMap::new()
            .with_road(RoadId(1), Location::ZERO, 0.0)
            .with_lane(RoadId(1), LaneId(lane_a), 3.0, len_a)
            .with_lane(RoadId(1), LaneId(lane_b), 3.0, len_b)
    }

    #[test]
    fn successors_are_full_tail() {
        let map = two_lane_road(1, 2, 0.2, 0.2);
        let groups = groups_for(&map, 0.05);
        let graph = GraphAssembler::new(&FlatProjector, NeighbourMatching::Index)
            .assemble(&groups)
            .unwrap();
        let lane = groups[&RoadId(1)].lane(LaneId(1)).unwrap();
        let n = lane.len();
        assert_eq!(n, 5);
        for (i, w) in lane.waypoints().iter().enumerate() {
            let node = graph.get(w.id).unwrap();
            assert_eq!(node.next_waypoints_ids.len(), n - 1 - i);
            let expected: Vec<WaypointId> =
                lane.waypoints()[i + 1..].iter().map(|w| w.id).collect();
            assert_eq!(node.next_waypoints_ids, expected);
        }
        let last = graph.get(lane.waypoints()[n - 1].id).unwrap();
        assert!(last.next_waypoints_ids.is_empty());
        assert_eq!(last.next_waypoint_id(), None);
    }

    #[test]
    fn lanes_one_and_two_are_mutual_neighbours() {
        let map = two_lane_road(1, 2, 0.5, 0.5);
        let groups = groups_for(&map, 0.05);
        let graph = GraphAssembler::new(&FlatProjector, NeighbourMatching::Index)
            .assemble(&groups)
            .unwrap();
        let one = groups[&RoadId(1)].lane(LaneId(1)).unwrap();
        let two = groups[&RoadId(1)].lane(LaneId(2)).unwrap();
        assert_eq!(one.len(), two.len());
        for i in 0..one.len() {
            let a = one.waypoints()[i].id;
            let b = two.waypoints()[i].id;
            assert_eq!(graph.get(a).unwrap().right_lane_waypoint_id, Some(b));
            assert_eq!(graph.get(b).unwrap().left_lane_waypoint_id, Some(a));
            // left(1) = -1 and right(2) = 3 are absent.
            assert_eq!(graph.get(a).unwrap().left_lane_waypoint_id, None);
            assert_eq!(graph.get(b).unwrap().right_lane_waypoint_id, None);
        }
    }

    #[test]
    fn lanes_one_and_minus_one_link_across_centerline() {
        let map = two_lane_road(1, -1, 0.3, 0.3);
        let groups = groups_for(&map, 0.05);
        let graph = GraphAssembler::new(&FlatProjector, NeighbourMatching::Index)
            .assemble(&groups)
            .unwrap();
        let plus = groups[&RoadId(1)].lane(LaneId(1)).unwrap();
        let minus = groups[&RoadId(1)].lane(LaneId(-1)).unwrap();
        for i in 0..plus.len() {
            let p = graph.get(plus.waypoints()[i].id).unwrap();
            let m = graph.get(minus.waypoints()[i].id).unwrap();
            // right(1) = 2 and left(-1) = -2: absent.
            assert_eq!(p.right_lane_waypoint_id, None);
            assert_eq!(m.left_lane_waypoint_id, None);
            // left(1) = -1 and right(-1) = 1: present.
            assert_eq!(p.left_lane_waypoint_id, Some(minus.waypoints()[i].id));
            assert_eq!(m.right_lane_waypoint_id, Some(plus.waypoints()[i].id));
        }
    }

    #[test]
    fn single_lane_has_no_neighbours() {
        let map = StraightRoadMap::new()
            .with_road(RoadId(5), Location::ZERO, 0.0)
            .with_lane(RoadId(5), LaneId(-1), 3.5, 1.0);
        let graph = GraphAssembler::new(&FlatProjector, NeighbourMatching::Index)
            .assemble(&groups_for(&map, 0.05))
            .unwrap();
        assert_eq!(graph.len(), 21);
        for (_, node) in graph.iter() {
            assert_eq!(node.left_lane_waypoint_id, None);
            assert_eq!(node.right_lane_waypoint_id, None);
        }
    }

    #[test]
    fn shorter_neighbour_runs_out_by_index() {
        let map = two_lane_road(1, 2, 1.0, 0.5);
        let groups = groups_for(&map, 0.05);
        let graph = GraphAssembler::new(&FlatProjector, NeighbourMatching::Index)
            .assemble(&groups)
            .unwrap();
        let one = groups[&RoadId(1)].lane(LaneId(1)).unwrap();
        let two = groups[&RoadId(1)].lane(LaneId(2)).unwrap();
        assert_eq!(one.len(), 21);
        assert_eq!(two.len(), 11);
        for (i, w) in one.waypoints().iter().enumerate() {
            let right = graph.get(w.id).unwrap().right_lane_waypoint_id;
            if i < two.len() {
                assert_eq!(right, Some(two.waypoints()[i].id));
            } else {
                assert_eq!(right, None);
            }
        }
    }

    #[test]
    fn nearest_matching_clamps_to_closest() {
        let map = two_lane_road(1, 2, 1.0, 0.5);
        let groups = groups_for(&map, 0.05);
        let graph = GraphAssembler::new(&FlatProjector, NeighbourMatching::Nearest)
            .assemble(&groups)
            .unwrap();
        let one = groups[&RoadId(1)].lane(LaneId(1)).unwrap();
        let two = groups[&RoadId(1)].lane(LaneId(2)).unwrap();
        let last_of_two = two.waypoints()[two.len() - 1].id;
        for (i, w) in one.waypoints().iter().enumerate() {
            let right = graph.get(w.id).unwrap().right_lane_waypoint_id;
            if i < two.len() {
                assert_eq!(right, Some(two.waypoints()[i].id));
            } else {
                assert_eq!(right, Some(last_of_two));
            }
        }
    }

    #[test]
    fn positions_are_projected_and_orientation_passed_through() {
        let map = StraightRoadMap::new()
            .with_road(RoadId(2), Location::new(10.0, 20.0, 1.0), 0.0)
            .with_lane(RoadId(2), LaneId(1), 4.0, 0.1);
        let groups = groups_for(&map, 0.05);
        let graph = GraphAssembler::new(&FlatProjector, NeighbourMatching::Index)
            .assemble(&groups)
            .unwrap();
        let lane = groups[&RoadId(2)].lane(LaneId(1)).unwrap();
        let w = &lane.waypoints()[0];
        let node = graph.get(w.id).unwrap();
        let loc = w.transform.location;
        assert_eq!(node.position.to_array(), [loc.x, loc.y, loc.z]);
        assert_eq!(node.orientation, w.transform.rotation);
        assert!((node.left_margin_position.longitude - (loc.y - 2.0)).abs() < 1e-9);
        assert!((node.right_margin_position.longitude - (loc.y + 2.0)).abs() < 1e-9);
        assert_eq!(node.road_id, RoadId(2));
        assert_eq!(node.lane_id, LaneId(1));
    }

    #[test]
    fn duplicate_ids_reported() {
        // Two roads whose map service hands out the same waypoint id.
        let a = waypoint(42, 1, 1, 0.0);
        let b = waypoint(42, 2, 1, 0.0);
        let map = ScriptedMap::new().with_seed(a).with_seed(b);
        let result = GraphAssembler::new(&FlatProjector, NeighbourMatching::Index)
            .assemble(&groups_for(&map, 1.0));
        assert_eq!(
            result,
            Err(MapError::DuplicateWaypoint {
                waypoint: WaypointId(42)
            })
        );
    }

    #[test]
    fn resampled_lane_replaces_in_place() {
        let first = waypoint(1, 1, 1, 0.0);
        let other = waypoint(2, 1, 2, 0.0);
        let again = waypoint(3, 1, 1, 5.0);
        let map = ScriptedMap::new()
            .with_seed(first)
            .with_seed(other)
            .with_seed(again);
        let groups = groups_for(&map, 1.0);
        let road = &groups[&RoadId(1)];
        let lanes: Vec<LaneId> = road.lanes().map(LaneRecord::lane_id).collect();
        assert_eq!(lanes, vec![LaneId(1), LaneId(2)]);
        assert_eq!(road.lane(LaneId(1)).unwrap().waypoints()[0].id, WaypointId(3));
    }

    #[test]
    fn empty_groups_give_empty_graph() {
        let graph = GraphAssembler::new(&FlatProjector, NeighbourMatching::Index)
            .assemble(&RoadGroups::new())
            .unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn road_group_rejects_foreign_lane() {
        let map = StraightRoadMap::new()
            .with_road(RoadId(8), Location::ZERO, 0.0)
            .with_lane(RoadId(8), LaneId(1), 3.0, 0.1);
        let mut groups = groups_for(&map, 0.05);
        let lane = groups.shift_remove(&RoadId(8)).unwrap().lanes().next().cloned().unwrap();
        let mut group = RoadGroup::new(RoadId(9));
        assert!(group.insert(lane).is_err());
        assert!(group.is_empty());
    }

    #[test]
    fn interleaved_roads_group_by_own_road() {
        let map = ScriptedMap::new()
            .with_seed(waypoint(1, 1, 1, 0.0))
            .with_seed(waypoint(2, 2, 1, 0.0))
            .with_seed(waypoint(3, 1, 2, 0.0))
            .with_seed(waypoint(4, 2, 1, 9.0));
        let groups = groups_for(&map, 1.0);
        let roads: Vec<RoadId> = groups.keys().copied().collect();
        assert_eq!(roads, vec![RoadId(1), RoadId(2)]);
        for (road, group) in &groups {
            assert!(group.lanes().all(|l| l.road_id() == *road));
        }
        assert_eq!(groups[&RoadId(1)].len(), 2);
        assert_eq!(groups[&RoadId(2)].len(), 1);
        let kept = groups[&RoadId(2)].lane(LaneId(1)).unwrap();
        assert_eq!(kept.waypoints()[0].id, WaypointId(4));
    }

    #[test]
    fn extreme_lane_ids_assemble_without_outward_neighbours() {
        let map = ScriptedMap::new()
            .with_seed(waypoint(1, 1, i32::MAX, 0.0))
            .with_seed(waypoint(2, 1, i32::MAX - 1, 0.0))
            .with_seed(waypoint(3, 2, i32::MIN, 0.0));
        let graph = GraphAssembler::new(&FlatProjector, NeighbourMatching::Index)
            .assemble(&groups_for(&map, 1.0))
            .unwrap();
        let top = graph.get(WaypointId(1)).unwrap();
        assert_eq!(top.right_lane_waypoint_id, None);
        assert_eq!(top.left_lane_waypoint_id, Some(WaypointId(2)));
        let bottom = graph.get(WaypointId(3)).unwrap();
        assert_eq!(bottom.left_lane_waypoint_id, None);
        assert_eq!(bottom.right_lane_waypoint_id, None);
    }
}

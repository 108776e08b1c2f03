//! One-call lane graph construction.
//!
//! [`LaneGraphBuilder`] runs the whole pipeline against a map service:
//! sample every topology seed, derive lane markings, group lanes by
//! road, and assemble the geodetic graph.

use std::error::Error;
use std::fmt;

use crate::assembler::{group_lanes, GraphAssembler};
use crate::config::{ConfigError, GraphConfig};
use crate::graph::{LaneGraph, LaneRecord, RoadGroups};
use crate::sampler::TopologySampler;
use roadscape_core::{GeoProjector, MapError, MapService};
use tracing::info;

// ── BuildError ─────────────────────────────────────────────────────

/// Errors from [`LaneGraphBuilder`].
#[derive(Debug, Clone, PartialEq)]
pub enum BuildError {
    /// The configuration is invalid.
    Config(ConfigError),
    /// The map service broke its contract.
    Map(MapError),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Map(e) => write!(f, "map: {e}"),
        }
    }
}

impl Error for BuildError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Map(e) => Some(e),
        }
    }
}

impl From<ConfigError> for BuildError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<MapError> for BuildError {
    fn from(e: MapError) -> Self {
        Self::Map(e)
    }
}

// ── LaneGraphBuilder ───────────────────────────────────────────────

/// Builds [`LaneGraph`]s from a validated [`GraphConfig`].
///
/// Holds no state between builds: two builds against an unchanged map
/// return equal graphs.
#[derive(Clone, Debug, Default)]
pub struct LaneGraphBuilder {
    config: GraphConfig,
}

impl LaneGraphBuilder {
    /// Validate `config` and create a builder.
    pub fn new(config: GraphConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Sample the map and group lanes by road, without projecting.
    ///
    /// Useful for consumers that want the local-frame lane geometry.
    pub fn road_groups(&self, map: &dyn MapService) -> Result<RoadGroups, MapError> {
        let sampler = TopologySampler::new(
            map,
            self.config.precision,
            self.config.max_lane_samples,
        );
        let lanes = sampler.sample_all()?;
        Ok(group_lanes(lanes.into_iter().map(LaneRecord::from)))
    }

    /// Build the full lane graph.
    pub fn build(
        &self,
        map: &dyn MapService,
        projector: &dyn GeoProjector,
    ) -> Result<LaneGraph, MapError> {
        let groups = self.road_groups(map)?;
        let graph = GraphAssembler::new(projector, self.config.neighbour_matching)
            .assemble(&groups)?;
        info!(
            roads = groups.len(),
            lanes = groups.values().map(|g| g.len()).sum::<usize>(),
            nodes = graph.len(),
            "lane graph built"
        );
        Ok(graph)
    }
}

/// Build a lane graph with `config`.
///
/// Convenience wrapper over [`LaneGraphBuilder`] for one-off builds.
pub fn build_lane_graph(
    map: &dyn MapService,
    projector: &dyn GeoProjector,
    config: GraphConfig,
) -> Result<LaneGraph, BuildError> {
    Ok(LaneGraphBuilder::new(config)?.build(map, projector)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roadscape_core::{LaneId, Location, RoadId};
    use roadscape_test_utils::{waypoint, FlatProjector, ScriptedMap, StraightRoadMap};

    #[test]
    fn empty_map_builds_empty_graph() {
        let graph = build_lane_graph(&ScriptedMap::new(), &FlatProjector, GraphConfig::default())
            .unwrap();
        assert!(graph.is_empty());
    }

    #[test]
    fn invalid_config_rejected_before_sampling() {
        let config = GraphConfig {
            precision: -1.0,
            ..GraphConfig::default()
        };
        let err = build_lane_graph(&ScriptedMap::new(), &FlatProjector, config).unwrap_err();
        assert!(matches!(err, BuildError::Config(ConfigError::InvalidPrecision { .. })));
        assert!(err.source().is_some());
    }

    #[test]
    fn map_errors_wrapped() {
        let map = ScriptedMap::new().with_seed(waypoint(1, 1, 0, 0.0));
        let err = build_lane_graph(&map, &FlatProjector, GraphConfig::default()).unwrap_err();
        assert!(matches!(err, BuildError::Map(MapError::ZeroLaneId { .. })));
        assert!(err.to_string().starts_with("map: "));
    }

    #[test]
    fn lane_ids_at_integer_limits_build() {
        for lane in [i32::MAX, i32::MIN] {
            let map = ScriptedMap::new().with_seed(waypoint(1, 1, lane, 0.0));
            let graph = build_lane_graph(&map, &FlatProjector, GraphConfig::default()).unwrap();
            let node = graph.get(roadscape_core::WaypointId(1)).unwrap();
            assert_eq!(node.lane_id, LaneId(lane));
            assert_eq!(node.left_lane_waypoint_id, None);
            assert_eq!(node.right_lane_waypoint_id, None);
        }
    }

    #[test]
    fn road_groups_partition_lanes() {
        let map = StraightRoadMap::new()
            .with_road(RoadId(1), Location::ZERO, 0.0)
            .with_lane(RoadId(1), LaneId(-1), 3.5, 0.5)
            .with_lane(RoadId(1), LaneId(1), 3.5, 0.5)
            .with_road(RoadId(2), Location::new(0.0, 100.0, 0.0), 0.0)
            .with_lane(RoadId(2), LaneId(1), 3.5, 0.5);
        let builder = LaneGraphBuilder::default();
        let groups = builder.road_groups(&map).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&RoadId(1)].len(), 2);
        assert_eq!(groups[&RoadId(2)].len(), 1);
        for (road, group) in &groups {
            assert_eq!(*road, group.road_id());
            assert!(group.lanes().all(|l| l.road_id() == *road));
        }
    }

    #[test]
    fn builder_is_stateless() {
        let map = StraightRoadMap::new()
            .with_road(RoadId(1), Location::ZERO, 15.0)
            .with_lane(RoadId(1), LaneId(1), 3.0, 1.0)
            .with_lane(RoadId(1), LaneId(2), 3.0, 1.0);
        let builder = LaneGraphBuilder::default();
        let a = builder.build(&map, &FlatProjector).unwrap();
        let b = builder.build(&map, &FlatProjector).unwrap();
        assert_eq!(a, b);
        assert!(a.ids().eq(b.ids()));
    }
}

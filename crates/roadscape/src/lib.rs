//! Roadscape: scene layout extraction for driving simulators.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Roadscape sub-crates. For most users, adding `roadscape` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use roadscape::prelude::*;
//! use roadscape_test_utils::{hero_vehicle, pose, MockWorld, StraightRoadMap};
//!
//! // A 10 m two-lane road heading east from the origin.
//! let map = StraightRoadMap::new()
//!     .with_road(RoadId(1), Location::ZERO, 0.0)
//!     .with_lane(RoadId(1), LaneId(1), 3.5, 10.0)
//!     .with_lane(RoadId(1), LaneId(2), 3.5, 10.0);
//! let projector = MercatorProjector::new(GeoLocation::new(49.0, 8.0, 0.0)).unwrap();
//!
//! let graph = build_lane_graph(&map, &projector, GraphConfig::default()).unwrap();
//! assert_eq!(graph.len(), 2 * 201);
//!
//! let world = MockWorld::new().with_actor(hero_vehicle(7, pose(5.0, 1.75, 0.0)));
//! let snapshot = SnapshotExporter::default()
//!     .snapshot(&world, &map, &projector)
//!     .unwrap();
//! let hero = snapshot.hero_vehicle.unwrap();
//! assert_eq!(hero.lane_id, Some(LaneId(1)));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `roadscape-core` | IDs, geometry, projection, errors, collaborator traits |
//! | [`lanes`] | `roadscape-lanes` | Lane sampling, markings and graph assembly |
//! | [`actors`] | `roadscape-actors` | Actor classification and dynamic snapshots |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`roadscape-core`).
///
/// Contains the id newtypes, local-frame geometry, the Mercator
/// projector, and the collaborator traits ([`types::MapService`],
/// [`types::GeoProjector`], [`types::WorldService`]).
pub use roadscape_core as types;

/// Lane-waypoint graph extraction (`roadscape-lanes`).
///
/// [`lanes::LaneGraphBuilder`] runs the pipeline; the stages
/// ([`lanes::TopologySampler`], [`lanes::GraphAssembler`]) are public for
/// callers that need the intermediate lane geometry.
pub use roadscape_lanes as lanes;

/// Dynamic actor snapshots (`roadscape-actors`).
///
/// [`actors::SnapshotExporter`] turns a world's actors into a
/// [`actors::DynamicSnapshot`].
pub use roadscape_actors as actors;

/// Common imports for typical Roadscape usage.
///
/// ```rust
/// use roadscape::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use roadscape_core::{
        Actor, ActorId, GeoLocation, GeoProjector, LaneId, Location, MapService,
        MercatorProjector, RoadId, Rotation, Transform, Waypoint, WaypointId, WorldService,
    };

    // Errors
    pub use roadscape_core::{MapError, ProjectionError, SnapshotError};

    // Lane graph
    pub use roadscape_lanes::{
        build_lane_graph, BuildError, GraphConfig, LaneGraph, LaneGraphBuilder,
        NeighbourMatching, NodeRecord,
    };

    // Actors
    pub use roadscape_actors::{DynamicSnapshot, SnapshotConfig, SnapshotExporter};
}

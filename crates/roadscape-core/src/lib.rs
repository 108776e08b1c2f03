//! Core types and traits for the Roadscape scene-layout toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by the lane-graph builder and the actor
//! snapshot exporter: strongly-typed ids, local-frame geometry, the
//! geodetic projection, error types, and the collaborator traits
//! through which map and world data are read.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod actor;
pub mod error;
pub mod geo;
pub mod geom;
pub mod id;
pub mod traits;
pub mod waypoint;

pub use actor::{Actor, TrafficLightState, UnknownLightCode};
pub use error::{MapError, ProjectionError, SnapshotError};
pub use geo::{GeoLocation, GeoReference, MercatorProjector};
pub use geom::{BoundingBox, Location, Rotation, Transform};
pub use id::{ActorId, LaneId, RoadId, WaypointId};
pub use traits::{GeoProjector, MapService, WorldService};
pub use waypoint::{Successors, Waypoint};

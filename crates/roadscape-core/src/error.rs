//! Error types for Roadscape.
//!
//! [`MapError`] and [`SnapshotError`] describe upstream contract
//! violations: data the map or world service should never have produced.
//! Ordinary absences (end of a lane, a missing neighbour, an empty map)
//! are not errors. [`ProjectionError`] rejects an unusable projection
//! anchor.

use crate::geo::GeoReference;
use crate::id::{ActorId, LaneId, RoadId, WaypointId};
use std::error::Error;
use std::fmt;

/// Map data that breaks the map service contract.
#[derive(Clone, Debug, PartialEq)]
pub enum MapError {
    /// A waypoint was reported on the reserved centerline lane.
    ZeroLaneId {
        /// The offending waypoint.
        waypoint: WaypointId,
        /// Road it was reported on.
        road: RoadId,
    },
    /// A waypoint pose contains NaN or infinity.
    NonFiniteTransform {
        /// The offending waypoint.
        waypoint: WaypointId,
    },
    /// A waypoint lane width is NaN, infinite or negative.
    InvalidLaneWidth {
        /// The offending waypoint.
        waypoint: WaypointId,
        /// The reported width.
        width: f64,
    },
    /// Two sampled waypoints share an identity.
    DuplicateWaypoint {
        /// The repeated identity.
        waypoint: WaypointId,
    },
    /// A lane kept producing samples on the same road past the cap.
    SampleLimitExceeded {
        /// Road being sampled.
        road: RoadId,
        /// Lane being sampled.
        lane: LaneId,
        /// The configured cap.
        limit: usize,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroLaneId { waypoint, road } => {
                write!(f, "waypoint {waypoint} on road {road} has lane id 0")
            }
            Self::NonFiniteTransform { waypoint } => {
                write!(f, "waypoint {waypoint} has a non-finite transform")
            }
            Self::InvalidLaneWidth { waypoint, width } => {
                write!(f, "waypoint {waypoint} has invalid lane width {width}")
            }
            Self::DuplicateWaypoint { waypoint } => {
                write!(f, "waypoint id {waypoint} sampled more than once")
            }
            Self::SampleLimitExceeded { road, lane, limit } => {
                write!(
                    f,
                    "lane {lane} on road {road} exceeded {limit} samples without leaving the road"
                )
            }
        }
    }
}

impl Error for MapError {}

/// World data that cannot be turned into an actor record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SnapshotError {
    /// An actor of a category that is exported with geometry has none.
    MissingGeometry {
        /// The offending actor.
        actor: ActorId,
        /// Which geometry was expected (`bounding_box` or `trigger_volume`).
        geometry: &'static str,
    },
    /// A traffic light actor did not report its signal state.
    MissingLightState {
        /// The offending actor.
        actor: ActorId,
    },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingGeometry { actor, geometry } => {
                write!(f, "actor {actor} has no {geometry}")
            }
            Self::MissingLightState { actor } => {
                write!(f, "traffic light {actor} has no state")
            }
        }
    }
}

impl Error for SnapshotError {}

/// A projection anchor that cannot produce finite coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum ProjectionError {
    /// Latitude at or beyond a pole, or a non-finite component.
    InvalidReference {
        /// The rejected anchor.
        reference: GeoReference,
    },
}

impl fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidReference { reference } => write!(
                f,
                "invalid geodetic reference ({}, {}, {}): latitude must lie strictly between -90 and 90 and every component must be finite",
                reference.latitude, reference.longitude, reference.altitude
            ),
        }
    }
}

impl Error for ProjectionError {}

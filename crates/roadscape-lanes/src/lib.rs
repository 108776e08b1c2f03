//! Lane-waypoint graph extraction.
//!
//! Converts a road network's centerline geometry, read through a
//! [`MapService`](roadscape_core::MapService), into a flat graph of
//! waypoints with forward successors, left/right lane neighbours and
//! geodetic positions.
//!
//! # Pipeline
//!
//! - [`TopologySampler`]: fixed-step walk of every lane segment
//! - [`marking`]: left/right lane boundaries by lateral shift
//! - [`group_lanes`] and [`GraphAssembler`]: road groups to [`LaneGraph`]
//!
//! [`LaneGraphBuilder`] runs all three.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod assembler;
pub mod builder;
pub mod config;
pub mod graph;
pub mod marking;
pub mod sampler;

pub use assembler::{group_lanes, GraphAssembler};
pub use builder::{build_lane_graph, BuildError, LaneGraphBuilder};
pub use config::{ConfigError, GraphConfig, NeighbourMatching};
pub use graph::{LaneGraph, LaneRecord, NodeRecord, RoadGroup, RoadGroups};
pub use sampler::{LaneSamples, TopologySampler};

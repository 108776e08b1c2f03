//! Dynamic actor snapshots.
//!
//! Reads the live actors of a world through a
//! [`WorldService`](roadscape_core::WorldService), sorts them into the
//! exported categories and projects their poses, footprints and trigger
//! areas to geodetic coordinates.
//!
//! [`SnapshotExporter::snapshot`] is the entry point; [`ActorCategory`]
//! decides which actors are exported at all.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod category;
pub mod config;
pub mod exporter;
pub mod records;

pub use category::ActorCategory;
pub use config::{ConfigError, SnapshotConfig, DEFAULT_HERO_ROLE};
pub use exporter::{speed_from_tag, SnapshotExporter};
pub use records::{
    BodyRecord, DynamicSnapshot, HeroRecord, SpeedLimitRecord, StaticObstacleRecord,
    StopSignRecord, TrafficLightRecord, VehicleRecord, WalkerRecord,
};

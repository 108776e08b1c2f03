//! Collaborator traits: where map, world and projection data come from.
//!
//! Roadscape never talks to a simulator directly. Callers hand in
//! implementations of these traits (a client binding, a recorded map,
//! a synthetic fixture) and the builders read through `&dyn` references.

use crate::actor::Actor;
use crate::geo::GeoLocation;
use crate::geom::Location;
use crate::waypoint::{Successors, Waypoint};

/// Read access to a road network.
///
/// Every query is expected to be deterministic: the same question
/// against an unchanged map returns the same answer.
pub trait MapService {
    /// Directed lane segments as `(entry, exit)` waypoint pairs.
    ///
    /// Only the entry waypoint is used, as the seed for sampling.
    fn topology(&self) -> Vec<(Waypoint, Waypoint)>;

    /// Waypoints `distance` metres further along the lane of `waypoint`.
    ///
    /// Empty at the end of the network. More than one element means the
    /// lane forks; callers that walk a single path take the first.
    fn next(&self, waypoint: &Waypoint, distance: f64) -> Successors;

    /// The lane waypoint nearest to `location`, if it is on a road.
    fn waypoint_at(&self, location: &Location) -> Option<Waypoint>;
}

/// Local frame to geodetic conversion.
pub trait GeoProjector {
    /// Project a local position to latitude, longitude and altitude.
    fn to_geolocation(&self, location: &Location) -> GeoLocation;
}

/// Read access to the live actors of a simulated world.
pub trait WorldService {
    /// All actors currently in the world, in a stable order.
    fn actors(&self) -> Vec<Actor>;
}

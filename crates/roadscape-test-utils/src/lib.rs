//! Test utilities and mock collaborators for Roadscape development.
//!
//! Provides mock implementations of the collaborator traits
//! ([`MapService`], [`GeoProjector`], [`WorldService`]):
//!
//! - [`StraightRoadMap`]: synthetic straight roads with parallel lanes
//! - [`ScriptedMap`]: hand-wired seeds and forward answers, for edge cases
//! - [`FlatProjector`]: identity projection (`lat = x`, `lon = y`, `alt = z`)
//! - [`MockWorld`]: a fixed actor list

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::collections::HashMap;

use roadscape_core::{
    Actor, GeoLocation, GeoProjector, LaneId, Location, MapService, RoadId, Rotation, Successors,
    Transform, Waypoint, WaypointId, WorldService,
};
use smallvec::smallvec;

pub use fixtures::*;

/// Build a waypoint at `(x, 0, 0)` heading along `+x`, 3 m wide.
pub fn waypoint(id: u64, road: u32, lane: i32, x: f64) -> Waypoint {
    Waypoint {
        id: WaypointId(id),
        road_id: RoadId(road),
        lane_id: LaneId(lane),
        transform: Transform::new(Location::new(x, 0.0, 0.0), Rotation::default()),
        lane_width: 3.0,
    }
}

// ── FlatProjector ───────────────────────────────────────────────────

/// Identity projection: `latitude = x`, `longitude = y`, `altitude = z`.
///
/// Keeps assertions on projected positions readable.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlatProjector;

impl GeoProjector for FlatProjector {
    fn to_geolocation(&self, location: &Location) -> GeoLocation {
        GeoLocation::new(location.x, location.y, location.z)
    }
}

// ── StraightRoadMap ─────────────────────────────────────────────────

/// Station resolution of [`StraightRoadMap`], metres.
pub const STATION_RESOLUTION: f64 = 0.01;

struct LaneSpec {
    id: LaneId,
    width: f64,
    ticks: u64,
}

struct RoadSpec {
    id: RoadId,
    origin: Location,
    yaw: f64,
    lanes: Vec<LaneSpec>,
    successors: Vec<RoadId>,
}

/// Synthetic map of straight roads with parallel lanes.
///
/// Every lane of a road runs from the road origin along the road heading.
/// Lane `L` sits `(L - sign(L) / 2) * width` metres to the right of the
/// road axis, so `-1` and `1` straddle the axis and `2` is right of `1`.
/// Stations are quantized to [`STATION_RESOLUTION`], and waypoint ids
/// encode `(road, lane, station)` so they are stable across queries.
///
/// At the end of a lane, [`next`](MapService::next) returns the first
/// waypoint of the same lane id on every successor road, in the order
/// the successors were added.
///
/// Builder methods panic on unknown roads; this is test scaffolding.
#[derive(Default)]
pub struct StraightRoadMap {
    roads: Vec<RoadSpec>,
}

impl StraightRoadMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a road starting at `origin` and heading `yaw` degrees.
    pub fn with_road(mut self, id: RoadId, origin: Location, yaw: f64) -> Self {
        self.roads.push(RoadSpec {
            id,
            origin,
            yaw,
            lanes: Vec::new(),
            successors: Vec::new(),
        });
        self
    }

    /// Add a lane of `width` and `length` metres to `road`.
    pub fn with_lane(mut self, road: RoadId, lane: LaneId, width: f64, length: f64) -> Self {
        let ticks = (length / STATION_RESOLUTION).round() as u64;
        self.road_mut(road).lanes.push(LaneSpec {
            id: lane,
            width,
            ticks,
        });
        self
    }

    /// Connect the end of `from` to the start of `to`.
    pub fn with_successor(mut self, from: RoadId, to: RoadId) -> Self {
        self.road_mut(from).successors.push(to);
        self
    }

    /// The id this map gives the waypoint at `station` ticks along a lane.
    pub fn waypoint_id(road: RoadId, lane: LaneId, station: u64) -> WaypointId {
        let lane_bits = ((lane.0 + 0x8000) as u64) & 0xFFFF;
        WaypointId(((road.0 as u64) << 40) | (lane_bits << 24) | (station & 0xFF_FFFF))
    }

    fn decode(id: WaypointId) -> (RoadId, LaneId, u64) {
        let road = RoadId((id.0 >> 40) as u32);
        let lane = LaneId((((id.0 >> 24) & 0xFFFF) as i32) - 0x8000);
        (road, lane, id.0 & 0xFF_FFFF)
    }

    fn road_mut(&mut self, id: RoadId) -> &mut RoadSpec {
        self.roads
            .iter_mut()
            .find(|r| r.id == id)
            .unwrap_or_else(|| panic!("road {id} not defined"))
    }

    fn road(&self, id: RoadId) -> Option<&RoadSpec> {
        self.roads.iter().find(|r| r.id == id)
    }

    fn lane_offset(lane: &LaneSpec) -> f64 {
        (lane.id.0 as f64 - 0.5 * lane.id.0.signum() as f64) * lane.width
    }

    fn axes(road: &RoadSpec) -> (Location, Location) {
        let forward = Rotation::new(0.0, road.yaw, 0.0).forward_vector();
        let right = Rotation::new(0.0, road.yaw + 90.0, 0.0).forward_vector();
        (forward, right)
    }

    fn make(road: &RoadSpec, lane: &LaneSpec, station: u64) -> Waypoint {
        let (forward, right) = Self::axes(road);
        let s = station as f64 * STATION_RESOLUTION;
        let location = road.origin + s * forward + Self::lane_offset(lane) * right;
        Waypoint {
            id: Self::waypoint_id(road.id, lane.id, station),
            road_id: road.id,
            lane_id: lane.id,
            transform: Transform::new(location, Rotation::new(0.0, road.yaw, 0.0)),
            lane_width: lane.width,
        }
    }
}

fn dot(a: Location, b: Location) -> f64 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

impl MapService for StraightRoadMap {
    fn topology(&self) -> Vec<(Waypoint, Waypoint)> {
        self.roads
            .iter()
            .flat_map(|road| {
                road.lanes
                    .iter()
                    .map(move |lane| (Self::make(road, lane, 0), Self::make(road, lane, lane.ticks)))
            })
            .collect()
    }

    fn next(&self, waypoint: &Waypoint, distance: f64) -> Successors {
        let (road_id, lane_id, station) = Self::decode(waypoint.id);
        let Some(road) = self.road(road_id) else {
            return Successors::new();
        };
        let Some(lane) = road.lanes.iter().find(|l| l.id == lane_id) else {
            return Successors::new();
        };
        let step = ((distance / STATION_RESOLUTION).round() as u64).max(1);
        let target = station + step;
        if target <= lane.ticks {
            return smallvec![Self::make(road, lane, target)];
        }
        road.successors
            .iter()
            .filter_map(|id| self.road(*id))
            .filter_map(|next_road| {
                next_road
                    .lanes
                    .iter()
                    .find(|l| l.id == lane_id)
                    .map(|l| Self::make(next_road, l, 0))
            })
            .collect()
    }

    fn waypoint_at(&self, location: &Location) -> Option<Waypoint> {
        const EPS: f64 = 1e-9;
        for road in &self.roads {
            let (forward, right) = Self::axes(road);
            let rel = *location - road.origin;
            let s = dot(rel, forward);
            let lateral = dot(rel, right);
            for lane in &road.lanes {
                let length = lane.ticks as f64 * STATION_RESOLUTION;
                let on_lane = (lateral - Self::lane_offset(lane)).abs() <= lane.width * 0.5 + EPS;
                if on_lane && s >= -EPS && s <= length + EPS {
                    let station = ((s.max(0.0) / STATION_RESOLUTION).round() as u64).min(lane.ticks);
                    return Some(Self::make(road, lane, station));
                }
            }
        }
        None
    }
}

// ── ScriptedMap ─────────────────────────────────────────────────────

/// A map whose topology and forward answers are wired by hand.
///
/// `next` ignores the distance and returns whatever was registered for
/// the waypoint id, or nothing. `waypoint_at` returns the first known
/// waypoint within 1 m.
#[derive(Default)]
pub struct ScriptedMap {
    seeds: Vec<Waypoint>,
    next: HashMap<WaypointId, Vec<Waypoint>>,
}

impl ScriptedMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a topology seed.
    pub fn with_seed(mut self, seed: Waypoint) -> Self {
        self.seeds.push(seed);
        self
    }

    /// Register the forward answer for `from`.
    pub fn with_next(mut self, from: &Waypoint, to: Vec<Waypoint>) -> Self {
        self.next.insert(from.id, to);
        self
    }
}

impl MapService for ScriptedMap {
    fn topology(&self) -> Vec<(Waypoint, Waypoint)> {
        self.seeds.iter().map(|w| (w.clone(), w.clone())).collect()
    }

    fn next(&self, waypoint: &Waypoint, _distance: f64) -> Successors {
        self.next
            .get(&waypoint.id)
            .map(|v| v.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn waypoint_at(&self, location: &Location) -> Option<Waypoint> {
        self.seeds
            .iter()
            .chain(self.next.values().flatten())
            .find(|w| w.transform.location.distance(location) <= 1.0)
            .cloned()
    }
}

// ── MockWorld ───────────────────────────────────────────────────────

/// A world with a fixed list of actors.
#[derive(Default)]
pub struct MockWorld {
    actors: Vec<Actor>,
}

impl MockWorld {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an actor.
    pub fn with_actor(mut self, actor: Actor) -> Self {
        self.actors.push(actor);
        self
    }
}

impl WorldService for MockWorld {
    fn actors(&self) -> Vec<Actor> {
        self.actors.clone()
    }
}

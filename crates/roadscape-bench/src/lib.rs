//! Benchmark profiles for the Roadscape scene-layout toolkit.
//!
//! Provides pre-built synthetic maps and worlds for benchmarking:
//!
//! - [`reference_town`]: 20 chained roads of 4 lanes, 50 m each
//! - [`stress_town`]: 100 chained roads of 6 lanes, 100 m each
//! - [`corridor`]: the parametric builder behind both
//! - [`crowd`]: a seeded world of mixed actors scattered over a square

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use roadscape_core::{LaneId, Location, RoadId, TrafficLightState};
use roadscape_test_utils::{
    hero_vehicle, pose, speed_limit, static_prop, stop_sign, traffic_light, vehicle, walker,
    MockWorld, StraightRoadMap,
};

/// Lane width used by every profile, metres.
pub const LANE_WIDTH: f64 = 3.5;

/// Build a corridor of `roads` straight roads laid end to end along `+x`.
///
/// Each road carries `lanes_per_side` lanes on either side of its axis
/// (ids `-n..=-1` and `1..=n`) and connects to the next road.
pub fn corridor(roads: u32, lanes_per_side: i32, road_length: f64) -> StraightRoadMap {
    let mut map = StraightRoadMap::new();
    for r in 0..roads {
        let id = RoadId(r + 1);
        let origin = Location::new(r as f64 * road_length, 0.0, 0.0);
        map = map.with_road(id, origin, 0.0);
        for lane in (-lanes_per_side..=lanes_per_side).filter(|&l| l != 0) {
            map = map.with_lane(id, LaneId(lane), LANE_WIDTH, road_length);
        }
    }
    for r in 1..roads {
        map = map.with_successor(RoadId(r), RoadId(r + 1));
    }
    map
}

/// Reference profile: 20 roads x 4 lanes x 50 m (~80K waypoints at 0.05 m).
pub fn reference_town() -> StraightRoadMap {
    corridor(20, 2, 50.0)
}

/// Stress profile: 100 roads x 6 lanes x 100 m (~1.2M waypoints at 0.05 m).
pub fn stress_town() -> StraightRoadMap {
    corridor(100, 3, 100.0)
}

/// A world of `n` actors cycling through every exported category, at
/// seeded random poses within a `side` metre square.
///
/// Actor 0 is always the hero.
pub fn crowd(n: u32, side: f64, seed: u64) -> MockWorld {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut world = MockWorld::new();
    for id in 0..n {
        let at = pose(
            rng.random_range(0.0..side),
            rng.random_range(0.0..side),
            rng.random_range(-180.0..180.0),
        );
        let actor = match id % 6 {
            _ if id == 0 => hero_vehicle(id, at),
            0 => vehicle(id, at),
            1 => walker(id, at),
            2 => traffic_light(id, at, TrafficLightState::Red),
            3 => stop_sign(id, at),
            4 => speed_limit(id, at, 30 + 10 * (id % 9)),
            _ => static_prop(id, at),
        };
        world = world.with_actor(actor);
    }
    world
}

//! Reusable actor fixtures.
//!
//! One constructor per exported actor category, each with the geometry
//! and attributes that category needs:
//!
//! - [`vehicle`] / [`hero_vehicle`]: box extent, optional `role_name`.
//! - [`walker`]: box extent.
//! - [`traffic_light`] / [`stop_sign`]: trigger volume.
//! - [`speed_limit`]: speed encoded in the type tag.
//! - [`static_prop`]: no geometry.

use roadscape_core::{
    Actor, ActorId, BoundingBox, Location, Rotation, TrafficLightState, Transform,
};

/// Pose at `(x, y, 0)` with heading `yaw` degrees.
pub fn pose(x: f64, y: f64, yaw: f64) -> Transform {
    Transform::new(Location::new(x, y, 0.0), Rotation::new(0.0, yaw, 0.0))
}

fn boxed(extent_x: f64, extent_y: f64) -> Option<BoundingBox> {
    Some(BoundingBox::new(
        Location::ZERO,
        Location::new(extent_x, extent_y, 1.0),
    ))
}

/// A 4.6 m x 2 m car with no role.
pub fn vehicle(id: u32, transform: Transform) -> Actor {
    let mut a = Actor::new(ActorId(id), "vehicle.audi.a2", transform);
    a.bounding_box = boxed(2.3, 1.0);
    a.attributes.insert("role_name".into(), "autopilot".into());
    a
}

/// A car tagged `role_name = hero`.
pub fn hero_vehicle(id: u32, transform: Transform) -> Actor {
    let mut a = vehicle(id, transform);
    a.attributes.insert("role_name".into(), "hero".into());
    a
}

/// A pedestrian with a 0.6 m square footprint.
pub fn walker(id: u32, transform: Transform) -> Actor {
    let mut a = Actor::new(ActorId(id), "walker.pedestrian.0001", transform);
    a.bounding_box = boxed(0.3, 0.3);
    a
}

/// A traffic light with a 2 m x 1 m trigger area 5 m ahead of its pole.
pub fn traffic_light(id: u32, transform: Transform, state: TrafficLightState) -> Actor {
    let mut a = Actor::new(ActorId(id), "traffic.traffic_light", transform);
    a.trigger_volume = Some(BoundingBox::new(
        Location::new(5.0, 0.0, 0.0),
        Location::new(2.0, 1.0, 1.0),
    ));
    a.traffic_light_state = Some(state);
    a
}

/// A stop sign with a 1 m square trigger area at its base.
pub fn stop_sign(id: u32, transform: Transform) -> Actor {
    let mut a = Actor::new(ActorId(id), "traffic.stop", transform);
    a.trigger_volume = Some(BoundingBox::new(
        Location::ZERO,
        Location::new(1.0, 1.0, 1.0),
    ));
    a
}

/// A speed-limit sign tagged `traffic.speed_limit.<speed>`.
pub fn speed_limit(id: u32, transform: Transform, speed: u32) -> Actor {
    Actor::new(ActorId(id), format!("traffic.speed_limit.{speed}"), transform)
}

/// A static prop (`static.prop.streetbarrier`).
pub fn static_prop(id: u32, transform: Transform) -> Actor {
    Actor::new(ActorId(id), "static.prop.streetbarrier", transform)
}

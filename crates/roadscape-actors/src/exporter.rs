//! Snapshot export of the world's actors.

use crate::category::ActorCategory;
use crate::config::{ConfigError, SnapshotConfig};
use crate::records::{
    BodyRecord, DynamicSnapshot, HeroRecord, SpeedLimitRecord, StaticObstacleRecord,
    StopSignRecord, TrafficLightRecord,
};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use roadscape_core::{
    Actor, GeoLocation, GeoProjector, MapService, SnapshotError, WorldService,
};
use tracing::{debug, info, warn};

/// Speed parsed from a `traffic.speed_limit.<speed>` tag.
///
/// Returns `None` when the tag has fewer than three segments or the
/// third is not an unsigned integer.
///
/// # Examples
///
/// ```
/// use roadscape_actors::speed_from_tag;
///
/// assert_eq!(speed_from_tag("traffic.speed_limit.90"), Some(90));
/// assert_eq!(speed_from_tag("traffic.speed_limit"), None);
/// ```
pub fn speed_from_tag(type_id: &str) -> Option<u32> {
    type_id.split('.').nth(2)?.parse().ok()
}

/// Turns the actors of a world into a [`DynamicSnapshot`].
#[derive(Clone, Debug, Default)]
pub struct SnapshotExporter {
    config: SnapshotConfig,
}

impl SnapshotExporter {
    /// Validate `config` and create an exporter.
    pub fn new(config: SnapshotConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in use.
    pub fn config(&self) -> &SnapshotConfig {
        &self.config
    }

    /// Classify and project every actor of `world`.
    ///
    /// Actors whose tag matches no category are ignored, as are speed
    /// limits with an unparsable tag. The hero choice is reproducible:
    /// the same world and seed always pick the same vehicle.
    pub fn snapshot(
        &self,
        world: &dyn WorldService,
        map: &dyn MapService,
        projector: &dyn GeoProjector,
    ) -> Result<DynamicSnapshot, SnapshotError> {
        let actors = world.actors();
        let mut snapshot = DynamicSnapshot::default();
        let mut heroes: Vec<&Actor> = Vec::new();
        let project = |actor: &Actor| projector.to_geolocation(&actor.transform.location);

        for actor in &actors {
            let Some(category) = ActorCategory::classify(&actor.type_id) else {
                continue;
            };
            match category {
                ActorCategory::Vehicle => {
                    if actor.attribute("role_name") == Some(self.config.hero_role_name.as_str()) {
                        heroes.push(actor);
                    }
                    snapshot
                        .vehicles
                        .insert(actor.id, body_record(actor, projector)?);
                }
                ActorCategory::Walker => {
                    snapshot
                        .walkers
                        .insert(actor.id, body_record(actor, projector)?);
                }
                ActorCategory::TrafficLight => {
                    let state = actor
                        .traffic_light_state
                        .ok_or(SnapshotError::MissingLightState { actor: actor.id })?;
                    let record = TrafficLightRecord {
                        id: actor.id,
                        state,
                        position: project(actor),
                        trigger_volume: trigger_volume(actor, projector)?,
                    };
                    snapshot.traffic_lights.insert(actor.id, record);
                }
                ActorCategory::Stop => {
                    let record = StopSignRecord {
                        id: actor.id,
                        position: project(actor),
                        trigger_volume: trigger_volume(actor, projector)?,
                    };
                    snapshot.stop_signs.insert(actor.id, record);
                }
                ActorCategory::SpeedLimit => {
                    let Some(speed) = speed_from_tag(&actor.type_id) else {
                        warn!(actor = %actor.id, type_id = %actor.type_id, "unparsable speed limit tag");
                        continue;
                    };
                    let record = SpeedLimitRecord {
                        id: actor.id,
                        position: project(actor),
                        speed,
                    };
                    snapshot.speed_limits.insert(actor.id, record);
                }
                ActorCategory::StaticObstacle => {
                    let record = StaticObstacleRecord {
                        id: actor.id,
                        position: project(actor),
                    };
                    snapshot.static_obstacles.insert(actor.id, record);
                }
            }
        }

        snapshot.hero_vehicle = self.choose_hero(&heroes, map, projector);
        info!(
            actors = actors.len(),
            exported = snapshot.len(),
            hero = snapshot.hero_vehicle.is_some(),
            "dynamic snapshot taken"
        );
        Ok(snapshot)
    }

    fn choose_hero(
        &self,
        candidates: &[&Actor],
        map: &dyn MapService,
        projector: &dyn GeoProjector,
    ) -> Option<HeroRecord> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        let hero = *candidates.choose(&mut rng)?;
        if candidates.len() > 1 {
            debug!(candidates = candidates.len(), chosen = %hero.id, "several hero vehicles");
        }
        let waypoint = map.waypoint_at(&hero.transform.location);
        Some(HeroRecord {
            id: hero.id,
            position: projector.to_geolocation(&hero.transform.location),
            road_id: waypoint.as_ref().map(|w| w.road_id),
            lane_id: waypoint.as_ref().map(|w| w.lane_id),
        })
    }
}

fn body_record(actor: &Actor, projector: &dyn GeoProjector) -> Result<BodyRecord, SnapshotError> {
    let bb = actor.bounding_box.ok_or(SnapshotError::MissingGeometry {
        actor: actor.id,
        geometry: "bounding_box",
    })?;
    Ok(BodyRecord {
        id: actor.id,
        position: projector.to_geolocation(&actor.transform.location),
        orientation: actor.transform.rotation,
        bounding_box: bb
            .footprint()
            .map(|p| projector.to_geolocation(&actor.transform.transform_point(p))),
    })
}

fn trigger_volume(
    actor: &Actor,
    projector: &dyn GeoProjector,
) -> Result<[GeoLocation; 5], SnapshotError> {
    let tv = actor.trigger_volume.ok_or(SnapshotError::MissingGeometry {
        actor: actor.id,
        geometry: "trigger_volume",
    })?;
    Ok(tv
        .closed_polygon()
        .map(|p| projector.to_geolocation(&actor.transform.transform_point(p))))
}

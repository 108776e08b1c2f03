//! Exported actor records.
//!
//! Every position is geodetic. Polygons are listed in corner order, and
//! trigger volumes repeat their first corner to close the ring.
//!
//! With the `serde` feature, single positions serialize as
//! `[latitude, longitude, altitude]` while polygon corners serialize as
//! `[longitude, latitude, altitude]`, the order consumers of the exported
//! polygons read.

use indexmap::IndexMap;
use roadscape_core::{ActorId, GeoLocation, LaneId, RoadId, Rotation, TrafficLightState};

/// A vehicle or walker: anything exported with a footprint.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BodyRecord {
    /// Actor identity.
    pub id: ActorId,
    /// Projected origin.
    pub position: GeoLocation,
    /// Local-frame orientation.
    pub orientation: Rotation,
    /// Projected footprint corners, serialized `[lon, lat, alt]`.
    #[cfg_attr(feature = "serde", serde(with = "lon_lat_alt"))]
    pub bounding_box: [GeoLocation; 4],
}

/// Exported vehicle.
pub type VehicleRecord = BodyRecord;

/// Exported pedestrian.
pub type WalkerRecord = BodyRecord;

/// A traffic light and the area it controls.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrafficLightRecord {
    /// Actor identity.
    pub id: ActorId,
    /// Signal state at snapshot time.
    pub state: TrafficLightState,
    /// Projected origin.
    pub position: GeoLocation,
    /// Projected trigger area, closed, serialized `[lon, lat, alt]`.
    #[cfg_attr(feature = "serde", serde(with = "lon_lat_alt"))]
    pub trigger_volume: [GeoLocation; 5],
}

/// A stop sign and the area it controls.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StopSignRecord {
    /// Actor identity.
    pub id: ActorId,
    /// Projected origin.
    pub position: GeoLocation,
    /// Projected trigger area, closed, serialized `[lon, lat, alt]`.
    #[cfg_attr(feature = "serde", serde(with = "lon_lat_alt"))]
    pub trigger_volume: [GeoLocation; 5],
}

/// A speed-limit sign.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeedLimitRecord {
    /// Actor identity.
    pub id: ActorId,
    /// Projected origin.
    pub position: GeoLocation,
    /// Posted limit, km/h.
    pub speed: u32,
}

/// A static prop.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StaticObstacleRecord {
    /// Actor identity.
    pub id: ActorId,
    /// Projected origin.
    pub position: GeoLocation,
}

/// The ego vehicle and the lane it occupies.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeroRecord {
    /// Actor identity.
    pub id: ActorId,
    /// Projected origin.
    pub position: GeoLocation,
    /// Road under the vehicle, if it is on one.
    pub road_id: Option<RoadId>,
    /// Lane under the vehicle, if it is on one.
    pub lane_id: Option<LaneId>,
}

/// Everything exported about the world's actors at one instant.
///
/// Each map is keyed by actor id and keeps the order the world service
/// listed the actors in.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DynamicSnapshot {
    /// All vehicles, the hero included.
    pub vehicles: IndexMap<ActorId, VehicleRecord>,
    /// The chosen hero vehicle, if any vehicle carries the hero role.
    pub hero_vehicle: Option<HeroRecord>,
    /// Pedestrians.
    pub walkers: IndexMap<ActorId, WalkerRecord>,
    /// Traffic lights.
    pub traffic_lights: IndexMap<ActorId, TrafficLightRecord>,
    /// Stop signs.
    pub stop_signs: IndexMap<ActorId, StopSignRecord>,
    /// Speed-limit signs.
    pub speed_limits: IndexMap<ActorId, SpeedLimitRecord>,
    /// Static props.
    pub static_obstacles: IndexMap<ActorId, StaticObstacleRecord>,
}

impl DynamicSnapshot {
    /// Total number of exported actors.
    pub fn len(&self) -> usize {
        self.vehicles.len()
            + self.walkers.len()
            + self.traffic_lights.len()
            + self.stop_signs.len()
            + self.speed_limits.len()
            + self.static_obstacles.len()
    }

    /// `true` if no actor was exported.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ── Polygon corner order ───────────────────────────────────────────

#[cfg(feature = "serde")]
mod lon_lat_alt {
    use roadscape_core::GeoLocation;
    use serde::de::{self, Deserialize, Deserializer};
    use serde::Serializer;

    pub fn serialize<S, const N: usize>(
        corners: &[GeoLocation; N],
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(corners.iter().map(|g| [g.longitude, g.latitude, g.altitude]))
    }

    pub fn deserialize<'de, D, const N: usize>(
        deserializer: D,
    ) -> Result<[GeoLocation; N], D::Error>
    where
        D: Deserializer<'de>,
    {
        let points = Vec::<[f64; 3]>::deserialize(deserializer)?;
        let len = points.len();
        let corners: Vec<GeoLocation> = points
            .into_iter()
            .map(|[longitude, latitude, altitude]| GeoLocation::new(latitude, longitude, altitude))
            .collect();
        corners
            .try_into()
            .map_err(|_| de::Error::invalid_length(len, &"a closed set of polygon corners"))
    }
}

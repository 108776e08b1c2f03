//! The [`Actor`] record read from the world service.

use crate::geom::{BoundingBox, Transform};
use crate::id::ActorId;
use std::collections::BTreeMap;
use std::fmt;

/// Signal state of a traffic light.
///
/// Discriminants match the simulator's numeric encoding, which is what
/// gets exported.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "u8", try_from = "u8"))]
#[repr(u8)]
pub enum TrafficLightState {
    /// Stop.
    Red = 0,
    /// Prepare to stop.
    Yellow = 1,
    /// Go.
    Green = 2,
    /// Light is switched off.
    Off = 3,
    /// State could not be determined.
    Unknown = 4,
}

impl TrafficLightState {
    /// Numeric code of the state.
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<TrafficLightState> for u8 {
    fn from(s: TrafficLightState) -> Self {
        s.code()
    }
}

/// A numeric traffic light code outside `0..=4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownLightCode(pub u8);

impl fmt::Display for UnknownLightCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown traffic light code {}", self.0)
    }
}

impl std::error::Error for UnknownLightCode {}

impl TryFrom<u8> for TrafficLightState {
    type Error = UnknownLightCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Red),
            1 => Ok(Self::Yellow),
            2 => Ok(Self::Green),
            3 => Ok(Self::Off),
            4 => Ok(Self::Unknown),
            other => Err(UnknownLightCode(other)),
        }
    }
}

/// A live actor at the moment the world was queried.
#[derive(Clone, Debug, PartialEq)]
pub struct Actor {
    /// World-unique identity.
    pub id: ActorId,
    /// Dotted blueprint tag, e.g. `vehicle.tesla.model3`.
    pub type_id: String,
    /// Current pose.
    pub transform: Transform,
    /// Physical extent, if the actor has one.
    pub bounding_box: Option<BoundingBox>,
    /// Trigger area for traffic controls.
    pub trigger_volume: Option<BoundingBox>,
    /// Blueprint attributes such as `role_name`.
    pub attributes: BTreeMap<String, String>,
    /// Present for traffic lights only.
    pub traffic_light_state: Option<TrafficLightState>,
}

impl Actor {
    /// A bare actor with no geometry or attributes.
    pub fn new(id: ActorId, type_id: impl Into<String>, transform: Transform) -> Self {
        Self {
            id,
            type_id: type_id.into(),
            transform,
            bounding_box: None,
            trigger_volume: None,
            attributes: BTreeMap::new(),
            traffic_light_state: None,
        }
    }

    /// Look up a blueprint attribute.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

//! Actor classification by blueprint tag.

use std::fmt;

/// The exported actor categories.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActorCategory {
    /// Any `vehicle.*` blueprint.
    Vehicle,
    /// Traffic light poles.
    TrafficLight,
    /// Speed-limit signs; the limit is the last tag segment.
    SpeedLimit,
    /// Pedestrians.
    Walker,
    /// Stop signs.
    Stop,
    /// Static props such as barriers and cones.
    StaticObstacle,
}

/// Tag patterns in match priority order.
///
/// A tag may contain several patterns; the first listed wins.
const PATTERNS: [(&str, ActorCategory); 6] = [
    ("vehicle", ActorCategory::Vehicle),
    ("traffic_light", ActorCategory::TrafficLight),
    ("speed_limit", ActorCategory::SpeedLimit),
    ("walker", ActorCategory::Walker),
    ("stop", ActorCategory::Stop),
    ("static.prop", ActorCategory::StaticObstacle),
];

impl ActorCategory {
    /// Classify a dotted blueprint tag, or `None` if it is not exported.
    ///
    /// The first pattern contained anywhere in the tag wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use roadscape_actors::ActorCategory;
    ///
    /// assert_eq!(
    ///     ActorCategory::classify("traffic.speed_limit.60"),
    ///     Some(ActorCategory::SpeedLimit)
    /// );
    /// assert_eq!(ActorCategory::classify("sensor.camera.rgb"), None);
    /// ```
    pub fn classify(type_id: &str) -> Option<Self> {
        PATTERNS
            .iter()
            .find(|(pattern, _)| type_id.contains(pattern))
            .map(|&(_, category)| category)
    }

    /// Short lowercase name, used in log fields.
    pub fn name(self) -> &'static str {
        match self {
            Self::Vehicle => "vehicle",
            Self::TrafficLight => "traffic_light",
            Self::SpeedLimit => "speed_limit",
            Self::Walker => "walker",
            Self::Stop => "stop",
            Self::StaticObstacle => "static_obstacle",
        }
    }
}

impl fmt::Display for ActorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! Topology sampling: fixed-step walks along every lane segment.
//!
//! Each topology seed is walked forward `precision` metres at a time
//! until the walk would leave the seed's road or the network ends. Only
//! the first candidate of a forward query is followed, so forks are not
//! explored; the other branches are reached from their own seeds.

use roadscape_core::{LaneId, MapError, MapService, RoadId, Waypoint};
use tracing::debug;

/// An ordered, non-empty run of waypoints on one lane of one road.
///
/// Only the sampler constructs these, so the first element always
/// exists and every element shares the seed's road.
#[derive(Clone, Debug, PartialEq)]
pub struct LaneSamples {
    waypoints: Vec<Waypoint>,
}

impl LaneSamples {
    fn new(seed: Waypoint) -> Self {
        Self {
            waypoints: vec![seed],
        }
    }

    /// The seed waypoint.
    pub fn seed(&self) -> &Waypoint {
        &self.waypoints[0]
    }

    /// Road shared by every sample.
    pub fn road_id(&self) -> RoadId {
        self.seed().road_id
    }

    /// Lane of the seed.
    pub fn lane_id(&self) -> LaneId {
        self.seed().lane_id
    }

    /// Number of samples (at least 1).
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Always `false`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The samples in traversal order.
    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    /// Take ownership of the samples.
    pub fn into_waypoints(self) -> Vec<Waypoint> {
        self.waypoints
    }
}

/// Walks lanes of a [`MapService`] at a fixed step.
pub struct TopologySampler<'a> {
    map: &'a dyn MapService,
    precision: f64,
    max_lane_samples: usize,
}

impl<'a> TopologySampler<'a> {
    /// Create a sampler over `map`.
    ///
    /// `precision` and `max_lane_samples` are taken as given; validate
    /// them through [`GraphConfig`](crate::GraphConfig) first.
    pub fn new(map: &'a dyn MapService, precision: f64, max_lane_samples: usize) -> Self {
        Self {
            map,
            precision,
            max_lane_samples,
        }
    }

    /// Entry waypoints of every topology segment, lowest elevation first.
    ///
    /// The sort is stable, so seeds at equal elevation keep the map
    /// service's order.
    pub fn seeds(&self) -> Vec<Waypoint> {
        let mut seeds: Vec<Waypoint> = self
            .map
            .topology()
            .into_iter()
            .map(|(entry, _exit)| entry)
            .collect();
        seeds.sort_by(|a, b| a.transform.location.z.total_cmp(&b.transform.location.z));
        seeds
    }

    /// Walk one lane from `seed` until it leaves the seed's road.
    pub fn sample_lane(&self, seed: Waypoint) -> Result<LaneSamples, MapError> {
        check_waypoint(&seed)?;
        let road = seed.road_id;
        let mut samples = LaneSamples::new(seed);
        loop {
            let current = &samples.waypoints[samples.waypoints.len() - 1];
            let Some(next) = self.map.next(current, self.precision).into_iter().next() else {
                break;
            };
            if next.road_id != road {
                break;
            }
            if samples.waypoints.len() >= self.max_lane_samples {
                return Err(MapError::SampleLimitExceeded {
                    road,
                    lane: samples.lane_id(),
                    limit: self.max_lane_samples,
                });
            }
            check_waypoint(&next)?;
            samples.waypoints.push(next);
        }
        debug!(
            road = %road,
            lane = %samples.lane_id(),
            samples = samples.len(),
            "sampled lane"
        );
        Ok(samples)
    }

    /// Sample every seed, in [`seeds`](Self::seeds) order.
    pub fn sample_all(&self) -> Result<Vec<LaneSamples>, MapError> {
        self.seeds()
            .into_iter()
            .map(|seed| self.sample_lane(seed))
            .collect()
    }
}

/// Reject waypoints that break the map service contract.
fn check_waypoint(w: &Waypoint) -> Result<(), MapError> {
    if w.lane_id.is_centerline() {
        return Err(MapError::ZeroLaneId {
            waypoint: w.id,
            road: w.road_id,
        });
    }
    if !w.transform.is_finite() {
        return Err(MapError::NonFiniteTransform { waypoint: w.id });
    }
    if !w.lane_width.is_finite() || w.lane_width < 0.0 {
        return Err(MapError::InvalidLaneWidth {
            waypoint: w.id,
            width: w.lane_width,
        });
    }
    Ok(())
}

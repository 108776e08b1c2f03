//! Geodetic coordinates and the reference Mercator projection.

use crate::error::ProjectionError;
use crate::geom::Location;
use crate::traits::GeoProjector;
use std::f64::consts::PI;

/// Equatorial earth radius in metres (WGS84).
pub const EARTH_RADIUS_EQUA: f64 = 6_378_137.0;

/// A geodetic position.
///
/// Serialized (with the `serde` feature) as `[latitude, longitude, altitude]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[f64; 3]", into = "[f64; 3]"))]
pub struct GeoLocation {
    /// Degrees north.
    pub latitude: f64,
    /// Degrees east.
    pub longitude: f64,
    /// Metres above the reference.
    pub altitude: f64,
}

impl GeoLocation {
    /// Construct from latitude, longitude (degrees) and altitude (metres).
    pub const fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }

    /// `[latitude, longitude, altitude]`, the export order.
    pub fn to_array(&self) -> [f64; 3] {
        [self.latitude, self.longitude, self.altitude]
    }
}

impl From<[f64; 3]> for GeoLocation {
    fn from([latitude, longitude, altitude]: [f64; 3]) -> Self {
        Self::new(latitude, longitude, altitude)
    }
}

impl From<GeoLocation> for [f64; 3] {
    fn from(g: GeoLocation) -> Self {
        g.to_array()
    }
}

/// Geodetic anchor of the local frame's origin.
pub type GeoReference = GeoLocation;

/// Spherical-Mercator projection anchored at a [`GeoReference`].
///
/// Local `x` maps to east and local `y` to south (the simulator frame is
/// left-handed), so a point at `y = +d` lies `d` metres south of the
/// reference. Altitude is the reference altitude plus local `z`.
///
/// # Examples
///
/// ```
/// use roadscape_core::{GeoProjector, GeoReference, Location, MercatorProjector};
///
/// let proj = MercatorProjector::new(GeoReference::new(49.0, 8.0, 100.0)).unwrap();
/// let origin = proj.to_geolocation(&Location::ZERO);
/// assert!((origin.latitude - 49.0).abs() < 1e-9);
/// assert!((origin.longitude - 8.0).abs() < 1e-9);
/// assert!((origin.altitude - 100.0).abs() < 1e-9);
///
/// assert!(MercatorProjector::new(GeoReference::new(90.0, 0.0, 0.0)).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MercatorProjector {
    reference: GeoReference,
    scale: f64,
    origin_mx: f64,
    origin_my: f64,
}

impl MercatorProjector {
    /// Build a projector anchored at `reference`.
    ///
    /// The latitude must lie strictly between the poles, where the
    /// Mercator scale vanishes, and every component must be finite.
    pub fn new(reference: GeoReference) -> Result<Self, ProjectionError> {
        let usable = reference.latitude.abs() < 90.0
            && reference.longitude.is_finite()
            && reference.altitude.is_finite();
        if !usable {
            return Err(ProjectionError::InvalidReference { reference });
        }
        let scale = reference.latitude.to_radians().cos();
        let origin_mx = scale * reference.longitude.to_radians() * EARTH_RADIUS_EQUA;
        let origin_my =
            scale * EARTH_RADIUS_EQUA * ((90.0 + reference.latitude) * PI / 360.0).tan().ln();
        Ok(Self {
            reference,
            scale,
            origin_mx,
            origin_my,
        })
    }

    /// The anchor this projector was built with.
    pub fn reference(&self) -> GeoReference {
        self.reference
    }
}

impl GeoProjector for MercatorProjector {
    fn to_geolocation(&self, location: &Location) -> GeoLocation {
        let mx = self.origin_mx + location.x;
        let my = self.origin_my - location.y;
        let radius = EARTH_RADIUS_EQUA * self.scale;
        let longitude = mx * 180.0 / (PI * radius);
        let latitude = 360.0 * (my / radius).exp().atan() / PI - 90.0;
        GeoLocation::new(
            latitude,
            longitude,
            self.reference.altitude + location.z,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_maps_to_reference() {
        let reference = GeoReference::new(42.0, 2.0, 0.0);
        let proj = MercatorProjector::new(reference).unwrap();
        let g = proj.to_geolocation(&Location::ZERO);
        assert!((g.latitude - 42.0).abs() < 1e-9);
        assert!((g.longitude - 2.0).abs() < 1e-9);
        assert_eq!(g.altitude, 0.0);
    }

    #[test]
    fn east_increases_longitude() {
        let proj = MercatorProjector::new(GeoReference::new(0.0, 0.0, 0.0)).unwrap();
        let g = proj.to_geolocation(&Location::new(1000.0, 0.0, 0.0));
        assert!(g.longitude > 0.0);
        assert!(g.latitude.abs() < 1e-9);
        // At the equator one degree of longitude is ~111.32 km.
        let expected = 1000.0 * 180.0 / (PI * EARTH_RADIUS_EQUA);
        assert!((g.longitude - expected).abs() < 1e-12);
    }

    #[test]
    fn positive_y_is_south() {
        let proj = MercatorProjector::new(GeoReference::new(10.0, 10.0, 0.0)).unwrap();
        let g = proj.to_geolocation(&Location::new(0.0, 500.0, 0.0));
        assert!(g.latitude < 10.0);
        assert!((g.longitude - 10.0).abs() < 1e-9);
    }

    #[test]
    fn altitude_adds_z() {
        let proj = MercatorProjector::new(GeoReference::new(0.0, 0.0, 12.5)).unwrap();
        let g = proj.to_geolocation(&Location::new(0.0, 0.0, 3.0));
        assert!((g.altitude - 15.5).abs() < 1e-12);
    }

    #[test]
    fn unusable_references_rejected() {
        for reference in [
            GeoReference::new(90.0, 0.0, 0.0),
            GeoReference::new(-90.0, 0.0, 0.0),
            GeoReference::new(f64::NAN, 0.0, 0.0),
            GeoReference::new(0.0, f64::INFINITY, 0.0),
            GeoReference::new(0.0, 0.0, f64::NAN),
        ] {
            assert!(matches!(
                MercatorProjector::new(reference),
                Err(ProjectionError::InvalidReference { .. })
            ));
        }
        assert!(MercatorProjector::new(GeoReference::new(89.9, -180.0, -400.0)).is_ok());
    }

    #[test]
    fn array_order_is_lat_lon_alt() {
        let g = GeoLocation::new(1.0, 2.0, 3.0);
        assert_eq!(g.to_array(), [1.0, 2.0, 3.0]);
        assert_eq!(GeoLocation::from([1.0, 2.0, 3.0]), g);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_triple() {
        let g = GeoLocation::new(1.5, -2.0, 3.0);
        assert_eq!(serde_json::to_string(&g).unwrap(), "[1.5,-2.0,3.0]");
    }
}

//! Local-frame geometry: positions, orientations, poses and boxes.
//!
//! All quantities live in the simulator's planar frame (metres, degrees).
//! The frame is left-handed: `x` forward/east, `y` right/south, `z` up.
//! Rotation conventions follow the simulator: yaw about `z`, pitch about
//! `y`, roll about `x`, applied yaw → pitch → roll.

use std::ops::{Add, Mul, Sub};

/// A position in the local frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Metres along `x`.
    pub x: f64,
    /// Metres along `y`.
    pub y: f64,
    /// Metres along `z` (elevation).
    pub z: f64,
}

impl Location {
    /// The origin.
    pub const ZERO: Location = Location {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Construct from components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance to `other`.
    pub fn distance(&self, other: &Location) -> f64 {
        self.distance_squared(other).sqrt()
    }

    /// Squared Euclidean distance to `other`.
    pub fn distance_squared(&self, other: &Location) -> f64 {
        let d = *self - *other;
        d.x * d.x + d.y * d.y + d.z * d.z
    }

    /// `true` if every component is finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Location {
    type Output = Location;

    fn add(self, rhs: Location) -> Location {
        Location::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Location {
    type Output = Location;

    fn sub(self, rhs: Location) -> Location {
        Location::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<Location> for f64 {
    type Output = Location;

    fn mul(self, rhs: Location) -> Location {
        Location::new(self * rhs.x, self * rhs.y, self * rhs.z)
    }
}

/// An orientation in degrees.
///
/// Serialized (with the `serde` feature) as `[roll, pitch, yaw]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[f64; 3]", into = "[f64; 3]"))]
pub struct Rotation {
    /// Rotation about `y`, degrees.
    pub pitch: f64,
    /// Rotation about `z`, degrees.
    pub yaw: f64,
    /// Rotation about `x`, degrees.
    pub roll: f64,
}

impl Rotation {
    /// Construct from pitch, yaw and roll in degrees.
    pub const fn new(pitch: f64, yaw: f64, roll: f64) -> Self {
        Self { pitch, yaw, roll }
    }

    /// Unit vector pointing along the rotated `x` axis.
    pub fn forward_vector(&self) -> Location {
        let (sp, cp) = self.pitch.to_radians().sin_cos();
        let (sy, cy) = self.yaw.to_radians().sin_cos();
        Location::new(cp * cy, cp * sy, sp)
    }

    /// Apply this rotation to a vector (yaw → pitch → roll).
    pub fn rotate_vector(&self, v: Location) -> Location {
        let (sp, cp) = self.pitch.to_radians().sin_cos();
        let (sy, cy) = self.yaw.to_radians().sin_cos();
        let (sr, cr) = self.roll.to_radians().sin_cos();
        Location::new(
            v.x * (cp * cy) + v.y * (cy * sp * sr - sy * cr) + v.z * (-cy * sp * cr - sy * sr),
            v.x * (cp * sy) + v.y * (sy * sp * sr + cy * cr) + v.z * (-sy * sp * cr + cy * sr),
            v.x * sp + v.y * (-cp * sr) + v.z * (cp * cr),
        )
    }

    /// `[roll, pitch, yaw]`, the export order.
    pub fn to_array(&self) -> [f64; 3] {
        [self.roll, self.pitch, self.yaw]
    }

    /// `true` if every component is finite.
    pub fn is_finite(&self) -> bool {
        self.pitch.is_finite() && self.yaw.is_finite() && self.roll.is_finite()
    }
}

impl From<[f64; 3]> for Rotation {
    fn from([roll, pitch, yaw]: [f64; 3]) -> Self {
        Self { pitch, yaw, roll }
    }
}

impl From<Rotation> for [f64; 3] {
    fn from(r: Rotation) -> Self {
        r.to_array()
    }
}

/// A pose: position plus orientation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    /// Position.
    pub location: Location,
    /// Orientation.
    pub rotation: Rotation,
}

impl Transform {
    /// Construct from a location and rotation.
    pub const fn new(location: Location, rotation: Rotation) -> Self {
        Self { location, rotation }
    }

    /// Unit vector along the pose's heading.
    pub fn forward_vector(&self) -> Location {
        self.rotation.forward_vector()
    }

    /// Shift the position sideways by `offset` metres.
    ///
    /// The heading is turned 90° to the right and the position moved
    /// along the resulting forward vector, so negative offsets go left
    /// and positive offsets go right. Only the position is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use roadscape_core::{Location, Rotation, Transform};
    ///
    /// let t = Transform::new(Location::ZERO, Rotation::default());
    /// let right = t.lateral_shift(2.0);
    /// assert!((right.y - 2.0).abs() < 1e-9);
    /// assert!(right.x.abs() < 1e-9);
    /// ```
    pub fn lateral_shift(&self, offset: f64) -> Location {
        let mut turned = self.rotation;
        turned.yaw += 90.0;
        self.location + offset * turned.forward_vector()
    }

    /// Map a point from this pose's local frame into the world frame.
    pub fn transform_point(&self, point: Location) -> Location {
        self.rotation.rotate_vector(point) + self.location
    }

    /// `true` if position and orientation are all finite.
    pub fn is_finite(&self) -> bool {
        self.location.is_finite() && self.rotation.is_finite()
    }
}

/// An oriented box given by its centre offset and half-extents.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    /// Centre offset from the owning actor's origin.
    pub location: Location,
    /// Half-extent along each axis.
    pub extent: Location,
}

impl BoundingBox {
    /// Construct from a centre offset and half-extents.
    pub const fn new(location: Location, extent: Location) -> Self {
        Self { location, extent }
    }

    /// The four ground-plane corners of the extent, counter-clockwise
    /// from `(-x, -y)`. The centre offset is not applied.
    pub fn footprint(&self) -> [Location; 4] {
        let Location { x, y, .. } = self.extent;
        [
            Location::new(-x, -y, 0.0),
            Location::new(x, -y, 0.0),
            Location::new(x, y, 0.0),
            Location::new(-x, y, 0.0),
        ]
    }

    /// The footprint as a closed polygon (first corner repeated), shifted
    /// by the centre offset.
    pub fn closed_polygon(&self) -> [Location; 5] {
        let [a, b, c, d] = self.footprint();
        [a, b, c, d, a].map(|p| p + self.location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn close(a: Location, b: Location) -> bool {
        a.distance(&b) < EPS
    }

    #[test]
    fn forward_vector_cardinal_yaws() {
        assert!(close(
            Rotation::new(0.0, 0.0, 0.0).forward_vector(),
            Location::new(1.0, 0.0, 0.0)
        ));
        assert!(close(
            Rotation::new(0.0, 90.0, 0.0).forward_vector(),
            Location::new(0.0, 1.0, 0.0)
        ));
        assert!(close(
            Rotation::new(0.0, 180.0, 0.0).forward_vector(),
            Location::new(-1.0, 0.0, 0.0)
        ));
    }

    #[test]
    fn forward_vector_pitch_up() {
        assert!(close(
            Rotation::new(90.0, 0.0, 0.0).forward_vector(),
            Location::new(0.0, 0.0, 1.0)
        ));
    }

    #[test]
    fn lateral_shift_heading_east() {
        let t = Transform::new(Location::new(10.0, 5.0, 1.0), Rotation::default());
        assert!(close(t.lateral_shift(-1.5), Location::new(10.0, 3.5, 1.0)));
        assert!(close(t.lateral_shift(1.5), Location::new(10.0, 6.5, 1.0)));
    }

    #[test]
    fn lateral_shift_heading_north() {
        // yaw = -90 points along -y; right of that is +x.
        let t = Transform::new(Location::ZERO, Rotation::new(0.0, -90.0, 0.0));
        assert!(close(t.lateral_shift(2.0), Location::new(2.0, 0.0, 0.0)));
    }

    #[test]
    fn lateral_shift_does_not_touch_input() {
        let t = Transform::new(Location::ZERO, Rotation::new(0.0, 30.0, 0.0));
        let _ = t.lateral_shift(1.0);
        assert_eq!(t.rotation.yaw, 30.0);
    }

    #[test]
    fn transform_point_yaw_only() {
        let t = Transform::new(Location::new(1.0, 2.0, 3.0), Rotation::new(0.0, 90.0, 0.0));
        let p = t.transform_point(Location::new(1.0, 0.0, 0.0));
        assert!(close(p, Location::new(1.0, 3.0, 3.0)));
    }

    #[test]
    fn transform_point_identity() {
        let t = Transform::default();
        let p = Location::new(4.0, -2.0, 0.5);
        assert!(close(t.transform_point(p), p));
    }

    #[test]
    fn footprint_corner_order() {
        let bb = BoundingBox::new(Location::ZERO, Location::new(2.0, 1.0, 0.7));
        assert_eq!(
            bb.footprint(),
            [
                Location::new(-2.0, -1.0, 0.0),
                Location::new(2.0, -1.0, 0.0),
                Location::new(2.0, 1.0, 0.0),
                Location::new(-2.0, 1.0, 0.0),
            ]
        );
    }

    #[test]
    fn closed_polygon_repeats_first_and_offsets() {
        let bb = BoundingBox::new(Location::new(0.0, 0.0, 1.0), Location::new(1.0, 1.0, 1.0));
        let poly = bb.closed_polygon();
        assert_eq!(poly[0], poly[4]);
        assert_eq!(poly[0], Location::new(-1.0, -1.0, 1.0));
    }

    #[test]
    fn rotation_array_order() {
        let r = Rotation::new(1.0, 2.0, 3.0);
        assert_eq!(r.to_array(), [3.0, 1.0, 2.0]);
        assert_eq!(Rotation::from(r.to_array()), r);
    }

    #[test]
    fn non_finite_detected() {
        let mut t = Transform::default();
        assert!(t.is_finite());
        t.rotation.yaw = f64::NAN;
        assert!(!t.is_finite());
    }

    proptest! {
        #[test]
        fn lateral_shift_distance_is_offset(
            yaw in -360.0f64..360.0,
            offset in -10.0f64..10.0,
        ) {
            let t = Transform::new(Location::new(3.0, -4.0, 0.0), Rotation::new(0.0, yaw, 0.0));
            let shifted = t.lateral_shift(offset);
            prop_assert!((shifted.distance(&t.location) - offset.abs()).abs() < 1e-9);
            // Sideways: orthogonal to the heading.
            let d = shifted - t.location;
            let f = t.forward_vector();
            prop_assert!((d.x * f.x + d.y * f.y + d.z * f.z).abs() < 1e-9);
        }

        #[test]
        fn rotation_preserves_length(
            pitch in -90.0f64..90.0,
            yaw in -180.0f64..180.0,
            roll in -180.0f64..180.0,
            x in -5.0f64..5.0,
            y in -5.0f64..5.0,
            z in -5.0f64..5.0,
        ) {
            let r = Rotation::new(pitch, yaw, roll);
            let v = Location::new(x, y, z);
            let rv = r.rotate_vector(v);
            prop_assert!((rv.distance(&Location::ZERO) - v.distance(&Location::ZERO)).abs() < 1e-9);
        }
    }
}

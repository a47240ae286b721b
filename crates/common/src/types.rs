use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A point or extent in scene space, authored as `{ x, y, z }`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

impl From<Vec3> for Point3 {
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Point3> for Vec3 {
    fn from(p: Point3) -> Self {
        p.to_vec3()
    }
}

/// An inclusive `{ min, max }` range used by procedural parameters.
///
/// Ordering is not enforced on construction; authored data is checked by the
/// registry validation pass instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Span<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd + Copy> Span<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// `min <= max`.
    pub fn is_ordered(&self) -> bool {
        self.min <= self.max
    }

    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value <= self.max
    }
}

impl Span<f32> {
    /// Linear interpolation from `min` (t = 0) to `max` (t = 1).
    pub fn lerp(&self, t: f32) -> f32 {
        self.min + (self.max - self.min) * t
    }

    pub fn width(&self) -> f32 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_vec3_conversion() {
        let p = Point3::new(0.0, 9.5, -150.0);
        let v: Vec3 = p.into();
        assert_eq!(v, Vec3::new(0.0, 9.5, -150.0));
        assert_eq!(Point3::from(v), p);
    }

    #[test]
    fn point_rejects_extra_fields() {
        assert!(serde_json::from_str::<Point3>(r#"{"x":1,"y":2,"z":3,"w":4}"#).is_err());
        let p: Point3 = serde_json::from_str(r#"{"x":1,"y":2,"z":3}"#).unwrap();
        assert_eq!(p, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn span_ordering() {
        assert!(Span::new(30.0, 60.0).is_ordered());
        assert!(!Span::new(60.0, 30.0).is_ordered());
        assert!(Span::new(5.0, 5.0).is_ordered());
    }

    #[test]
    fn span_lerp_endpoints() {
        let s = Span::new(20.0_f32, 40.0);
        assert_eq!(s.lerp(0.0), 20.0);
        assert_eq!(s.lerp(1.0), 40.0);
        assert_eq!(s.lerp(0.5), 30.0);
        assert!(s.contains(s.lerp(0.25)));
    }
}

use glam::{EulerRot, Quat, Vec3};
use portalworld_common::{Color, Point3};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Axis-aligned box: `size` is width (x), height (y) and depth (z).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoxShape {
    pub position: Point3,
    pub size: Point3,
    pub color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Point3>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<Point3>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SphereShape {
    pub position: Point3,
    pub radius: f32,
    pub color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Point3>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<Point3>,
}

/// Shared field set of cylinders and cones: a base radius and a height
/// along the local Y axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ColumnShape {
    pub position: Point3,
    pub radius: f32,
    pub height: f32,
    pub color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Point3>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<Point3>,
}

/// A static primitive placed in a world, tagged by `type` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Obstacle {
    Box(BoxShape),
    Sphere(SphereShape),
    Cylinder(ColumnShape),
    Cone(ColumnShape),
}

/// Discriminant of an `Obstacle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    Box,
    Sphere,
    Cylinder,
    Cone,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [Self::Box, Self::Sphere, Self::Cylinder, Self::Cone];

    /// The `type` tag used in definition files.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Box => "box",
            Self::Sphere => "sphere",
            Self::Cylinder => "cylinder",
            Self::Cone => "cone",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl Obstacle {
    pub fn cuboid(position: Point3, size: Point3, color: Color) -> Self {
        Self::Box(BoxShape {
            position,
            size,
            color,
            rotation: None,
            offset: None,
        })
    }

    pub fn sphere(position: Point3, radius: f32, color: Color) -> Self {
        Self::Sphere(SphereShape {
            position,
            radius,
            color,
            rotation: None,
            offset: None,
        })
    }

    pub fn cylinder(position: Point3, radius: f32, height: f32, color: Color) -> Self {
        Self::Cylinder(ColumnShape {
            position,
            radius,
            height,
            color,
            rotation: None,
            offset: None,
        })
    }

    pub fn cone(position: Point3, radius: f32, height: f32, color: Color) -> Self {
        Self::Cone(ColumnShape {
            position,
            radius,
            height,
            color,
            rotation: None,
            offset: None,
        })
    }

    /// Euler rotation in radians (applied X, then Y, then Z).
    pub fn with_rotation(mut self, rotation: Point3) -> Self {
        *self.rotation_slot() = Some(rotation);
        self
    }

    /// Displacement from `position`, used by composite shapes such as a
    /// cactus arm hanging off its trunk.
    pub fn with_offset(mut self, offset: Point3) -> Self {
        *self.offset_slot() = Some(offset);
        self
    }

    pub fn shape(&self) -> ShapeKind {
        match self {
            Self::Box(_) => ShapeKind::Box,
            Self::Sphere(_) => ShapeKind::Sphere,
            Self::Cylinder(_) => ShapeKind::Cylinder,
            Self::Cone(_) => ShapeKind::Cone,
        }
    }

    pub fn position(&self) -> Point3 {
        match self {
            Self::Box(b) => b.position,
            Self::Sphere(s) => s.position,
            Self::Cylinder(c) | Self::Cone(c) => c.position,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Self::Box(b) => b.color,
            Self::Sphere(s) => s.color,
            Self::Cylinder(c) | Self::Cone(c) => c.color,
        }
    }

    pub fn rotation(&self) -> Option<Point3> {
        match self {
            Self::Box(b) => b.rotation,
            Self::Sphere(s) => s.rotation,
            Self::Cylinder(c) | Self::Cone(c) => c.rotation,
        }
    }

    pub fn offset(&self) -> Option<Point3> {
        match self {
            Self::Box(b) => b.offset,
            Self::Sphere(s) => s.offset,
            Self::Cylinder(c) | Self::Cone(c) => c.offset,
        }
    }

    /// Final placement: `position + offset`.
    pub fn world_position(&self) -> Vec3 {
        let base = self.position().to_vec3();
        match self.offset() {
            Some(offset) => base + offset.to_vec3(),
            None => base,
        }
    }

    /// Rotation as a quaternion, identity when none is authored.
    pub fn rotation_quat(&self) -> Quat {
        match self.rotation() {
            Some(r) => Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z),
            None => Quat::IDENTITY,
        }
    }

    /// Half extents of the unrotated shape.
    pub fn half_extents(&self) -> Vec3 {
        match self {
            Self::Box(b) => b.size.to_vec3() * 0.5,
            Self::Sphere(s) => Vec3::splat(s.radius),
            Self::Cylinder(c) | Self::Cone(c) => Vec3::new(c.radius, c.height * 0.5, c.radius),
        }
    }

    fn rotation_slot(&mut self) -> &mut Option<Point3> {
        match self {
            Self::Box(b) => &mut b.rotation,
            Self::Sphere(s) => &mut s.rotation,
            Self::Cylinder(c) | Self::Cone(c) => &mut c.rotation,
        }
    }

    fn offset_slot(&mut self) -> &mut Option<Point3> {
        match self {
            Self::Box(b) => &mut b.offset,
            Self::Sphere(s) => &mut s.offset,
            Self::Cylinder(c) | Self::Cone(c) => &mut c.offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn shape_tag_on_wire() {
        let o = Obstacle::cone(Point3::new(70.0, 57.0, 64.0), 1.0, 5.0, Color::hex(0xff6600));
        let v = serde_json::to_value(o).unwrap();
        assert_eq!(v["type"], "cone");
        assert_eq!(v["radius"], 1.0);
        assert_eq!(v["height"], 5.0);
        assert!(v.get("rotation").is_none());
    }

    #[test]
    fn decode_each_shape() {
        let box_: Obstacle = serde_json::from_value(json!({
            "type": "box",
            "position": {"x": 50, "y": 15, "z": 50},
            "size": {"x": 20, "y": 30, "z": 20},
            "color": 0x888888
        }))
        .unwrap();
        assert_eq!(box_.shape(), ShapeKind::Box);

        let sphere: Obstacle = serde_json::from_value(json!({
            "type": "sphere",
            "position": {"x": 0, "y": 0, "z": 0},
            "radius": 20,
            "color": 0x336633
        }))
        .unwrap();
        assert_eq!(sphere.half_extents(), Vec3::splat(20.0));

        let cyl: Obstacle = serde_json::from_value(json!({
            "type": "cylinder",
            "position": {"x": 60, "y": 15, "z": 60},
            "radius": 2,
            "height": 10,
            "color": 0x66aa66,
            "rotation": {"x": 0, "y": 0, "z": FRAC_PI_2},
            "offset": {"x": 0, "y": 20, "z": 8}
        }))
        .unwrap();
        assert_eq!(cyl.shape(), ShapeKind::Cylinder);
        assert_eq!(cyl.world_position(), Vec3::new(60.0, 35.0, 68.0));
    }

    #[test]
    fn shape_fields_must_match_type() {
        // A sphere has no height.
        assert!(serde_json::from_value::<Obstacle>(json!({
            "type": "sphere",
            "position": {"x": 0, "y": 0, "z": 0},
            "radius": 1,
            "height": 2,
            "color": 0
        }))
        .is_err());
        // A cylinder needs a height.
        assert!(serde_json::from_value::<Obstacle>(json!({
            "type": "cylinder",
            "position": {"x": 0, "y": 0, "z": 0},
            "radius": 1,
            "color": 0
        }))
        .is_err());
        // A box is sized, not radial.
        assert!(serde_json::from_value::<Obstacle>(json!({
            "type": "box",
            "position": {"x": 0, "y": 0, "z": 0},
            "radius": 1,
            "color": 0
        }))
        .is_err());
        assert!(serde_json::from_value::<Obstacle>(json!({
            "type": "torus",
            "position": {"x": 0, "y": 0, "z": 0},
            "color": 0
        }))
        .is_err());
    }

    #[test]
    fn rotation_quat_quarter_turn() {
        let arm = Obstacle::cylinder(Point3::ZERO, 2.0, 10.0, Color::BLACK)
            .with_rotation(Point3::new(0.0, 0.0, FRAC_PI_2));
        let up = arm.rotation_quat() * Vec3::Y;
        assert!(up.abs_diff_eq(Vec3::NEG_X, 1e-5));
        assert_eq!(
            Obstacle::sphere(Point3::ZERO, 1.0, Color::BLACK).rotation_quat(),
            Quat::IDENTITY
        );
    }

    #[test]
    fn world_position_without_offset() {
        let o = Obstacle::cuboid(Point3::new(-50.0, 15.0, -50.0), Point3::new(10.0, 60.0, 10.0), Color::BLACK);
        assert_eq!(o.world_position(), Vec3::new(-50.0, 15.0, -50.0));
        assert_eq!(o.half_extents(), Vec3::new(5.0, 30.0, 5.0));
    }

    #[test]
    fn shape_names() {
        let names: Vec<&str> = ShapeKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(names, ["box", "sphere", "cylinder", "cone"]);
    }
}

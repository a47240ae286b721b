use glam::Vec2;
use portalworld_common::Color;
use serde::{Deserialize, Serialize};

use crate::feature::{Cacti, Dunes, Feature, Lake, Snowfall, Trees};
use crate::obstacle::Obstacle;

/// Linear distance fog.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Fog {
    pub color: Color,
    /// Distance at which fog starts.
    pub near: f32,
    /// Distance at which fog reaches full opacity.
    pub far: f32,
}

impl Fog {
    /// Fog blend factor at `distance`: 0 up to `near`, 1 from `far` on,
    /// linear in between.
    pub fn factor(&self, distance: f32) -> f32 {
        if distance <= self.near {
            return 0.0;
        }
        if distance >= self.far {
            return 1.0;
        }
        (distance - self.near) / (self.far - self.near)
    }

    /// `near < far`.
    pub fn is_ordered(&self) -> bool {
        self.near < self.far
    }
}

/// Two-tone hemisphere lighting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Ambient {
    pub sky_color: Color,
    pub ground_color: Color,
}

/// A point on the ground plane that sends the viewer to another world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Portal {
    pub x: f32,
    pub z: f32,
    /// Registry key of the target world.
    pub destination: String,
}

impl Portal {
    pub fn new(x: f32, z: f32, destination: impl Into<String>) -> Self {
        Self {
            x,
            z,
            destination: destination.into(),
        }
    }

    /// Planar distance from `(x, z)` to this portal.
    pub fn distance_to(&self, x: f32, z: f32) -> f32 {
        Vec2::new(self.x, self.z).distance(Vec2::new(x, z))
    }
}

/// A complete world preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WorldDefinition {
    pub name: String,
    pub background: Color,
    pub grid_color: Color,
    pub fog: Fog,
    pub ambient: Ambient,
    /// Order is preserved from the authored data.
    pub portal_positions: Vec<Portal>,
    /// Order is preserved from the authored data.
    pub obstacles: Vec<Obstacle>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trees: Option<Trees>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cacti: Option<Cacti>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dunes: Option<Dunes>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snowfall: Option<Snowfall>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lake: Option<Lake>,
}

impl WorldDefinition {
    /// First portal leading to `destination`.
    pub fn portal_to(&self, destination: &str) -> Option<&Portal> {
        self.portal_positions
            .iter()
            .find(|p| p.destination == destination)
    }

    /// Closest portal within `radius` of the viewer at `(x, z)`.
    ///
    /// Ties keep the earlier portal in authored order.
    pub fn portal_near(&self, x: f32, z: f32, radius: f32) -> Option<&Portal> {
        let mut best: Option<(&Portal, f32)> = None;
        for portal in &self.portal_positions {
            let d = portal.distance_to(x, z);
            if d > radius {
                continue;
            }
            match best {
                Some((_, best_d)) if best_d <= d => {}
                _ => best = Some((portal, d)),
            }
        }
        best.map(|(p, _)| p)
    }

    /// Portal destinations in authored order.
    pub fn destinations(&self) -> impl Iterator<Item = &str> {
        self.portal_positions.iter().map(|p| p.destination.as_str())
    }

    /// Optional feature records present on this world.
    pub fn features(&self) -> Vec<Feature> {
        let mut out = Vec::new();
        if self.trees.is_some() {
            out.push(Feature::Trees);
        }
        if self.cacti.is_some() {
            out.push(Feature::Cacti);
        }
        if self.dunes.is_some() {
            out.push(Feature::Dunes);
        }
        if self.snowfall.is_some() {
            out.push(Feature::Snowfall);
        }
        if self.lake.is_some() {
            out.push(Feature::Lake);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portalworld_common::Point3;

    fn sample() -> WorldDefinition {
        WorldDefinition {
            name: "Sample".into(),
            background: Color::hex(0x102030),
            grid_color: Color::BLACK,
            fog: Fog {
                color: Color::hex(0x102030),
                near: 10.0,
                far: 110.0,
            },
            ambient: Ambient {
                sky_color: Color::WHITE,
                ground_color: Color::hex(0x444444),
            },
            portal_positions: vec![
                Portal::new(0.0, 0.0, "default"),
                Portal::new(50.0, 0.0, "forest"),
                Portal::new(-50.0, 0.0, "desert"),
            ],
            obstacles: vec![Obstacle::sphere(
                Point3::new(1.0, 2.0, 3.0),
                4.0,
                Color::WHITE,
            )],
            trees: None,
            cacti: None,
            dunes: None,
            snowfall: None,
            lake: None,
        }
    }

    #[test]
    fn fog_factor_is_linear_between_planes() {
        let fog = sample().fog;
        assert_eq!(fog.factor(0.0), 0.0);
        assert_eq!(fog.factor(10.0), 0.0);
        assert_eq!(fog.factor(60.0), 0.5);
        assert_eq!(fog.factor(110.0), 1.0);
        assert_eq!(fog.factor(5000.0), 1.0);
    }

    #[test]
    fn fog_degenerate_planes_step() {
        let fog = Fog {
            color: Color::BLACK,
            near: 20.0,
            far: 20.0,
        };
        assert!(!fog.is_ordered());
        assert_eq!(fog.factor(19.0), 0.0);
        assert_eq!(fog.factor(21.0), 1.0);
    }

    #[test]
    fn portal_lookup_by_destination() {
        let world = sample();
        assert_eq!(world.portal_to("forest").map(|p| p.x), Some(50.0));
        assert!(world.portal_to("snow").is_none());
    }

    #[test]
    fn portal_near_picks_closest_in_radius() {
        let world = sample();
        assert_eq!(
            world.portal_near(45.0, 3.0, 10.0).map(|p| p.destination.as_str()),
            Some("forest")
        );
        assert!(world.portal_near(25.0, 0.0, 10.0).is_none());
        // Both inside the radius; the nearer one wins.
        assert_eq!(
            world.portal_near(20.0, 0.0, 40.0).map(|p| p.destination.as_str()),
            Some("default")
        );
    }

    #[test]
    fn destinations_keep_order() {
        let world = sample();
        let dests: Vec<&str> = world.destinations().collect();
        assert_eq!(dests, ["default", "forest", "desert"]);
    }

    #[test]
    fn camel_case_wire_names() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("gridColor").is_some());
        assert!(json.get("portalPositions").is_some());
        assert_eq!(json["ambient"]["skyColor"], 0xffffff);
        // Absent features are omitted, not written as null.
        assert!(json.get("trees").is_none());
    }

    #[test]
    fn unknown_top_level_field_rejected() {
        let mut json = serde_json::to_value(sample()).unwrap();
        json["weather"] = serde_json::json!("rain");
        assert!(serde_json::from_value::<WorldDefinition>(json).is_err());
    }

    #[test]
    fn json_roundtrip_is_identity() {
        let world = sample();
        let text = serde_json::to_string(&world).unwrap();
        let back: WorldDefinition = serde_json::from_str(&text).unwrap();
        assert_eq!(back, world);
    }

    #[test]
    fn no_features_by_default() {
        assert!(sample().features().is_empty());
    }
}

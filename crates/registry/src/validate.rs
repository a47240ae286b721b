//! Load-time checks for world definitions.
//!
//! Definitions are trusted by lookup; this pass is run explicitly (at CLI
//! startup, after loading files) to catch broken cross-references and
//! inconsistent parameters before a renderer sees them.

use portalworld_common::Span;
use portalworld_kernel::{Obstacle, WorldDefinition};
use std::collections::HashMap;

use crate::registry::WorldRegistry;

/// A single problem found in a registry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationIssue {
    #[error("world {world:?} has an empty name")]
    EmptyName { world: String },
    #[error("worlds {world:?} and {other:?} share the name {name:?}")]
    DuplicateName {
        world: String,
        other: String,
        name: String,
    },
    #[error("world {world:?}: portal #{index} leads to unknown world {destination:?}")]
    BrokenPortal {
        world: String,
        index: usize,
        destination: String,
    },
    #[error("world {world:?}: fog near {near} is not before far {far}")]
    FogRange { world: String, near: f32, far: f32 },
    #[error("world {world:?}: {field} range is inverted ({min} > {max})")]
    InvertedRange {
        world: String,
        field: &'static str,
        min: f32,
        max: f32,
    },
    #[error("world {world:?}: {field} opacity {value} outside 0..=1")]
    OpacityOutOfRange {
        world: String,
        field: &'static str,
        value: f32,
    },
    #[error("world {world:?}: obstacle #{index} ({shape}) has a non-positive dimension")]
    DegenerateObstacle {
        world: String,
        index: usize,
        shape: &'static str,
    },
}

/// Every issue found by a validation pass.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{} world validation issue(s); first: {}", .issues.len(), .issues.first().map(ToString::to_string).unwrap_or_default())]
pub struct ValidationReport {
    pub issues: Vec<ValidationIssue>,
}

/// Validate every world in `registry` against the registry's own keys.
pub fn validate(registry: &WorldRegistry) -> Result<(), ValidationReport> {
    let mut issues = Vec::new();
    let mut names: HashMap<&str, &str> = HashMap::new();

    for (key, world) in registry.iter() {
        if let Some(other) = names.insert(world.name.as_str(), key) {
            issues.push(ValidationIssue::DuplicateName {
                world: key.to_string(),
                other: other.to_string(),
                name: world.name.clone(),
            });
        }
        validate_world(key, world, |dest| registry.contains(dest), &mut issues);
    }

    if issues.is_empty() {
        return Ok(());
    }
    for issue in &issues {
        tracing::warn!("{issue}");
    }
    Err(ValidationReport { issues })
}

/// Validate one world. `resolves` decides whether a portal destination exists.
pub fn validate_world(
    key: &str,
    world: &WorldDefinition,
    resolves: impl Fn(&str) -> bool,
    issues: &mut Vec<ValidationIssue>,
) {
    let name = || key.to_string();

    if world.name.trim().is_empty() {
        issues.push(ValidationIssue::EmptyName { world: name() });
    }

    for (index, portal) in world.portal_positions.iter().enumerate() {
        if !resolves(&portal.destination) {
            issues.push(ValidationIssue::BrokenPortal {
                world: name(),
                index,
                destination: portal.destination.clone(),
            });
        }
    }

    if !world.fog.is_ordered() {
        issues.push(ValidationIssue::FogRange {
            world: name(),
            near: world.fog.near,
            far: world.fog.far,
        });
    }

    let mut check_span = |field: &'static str, span: Span<f32>| {
        if !span.is_ordered() {
            issues.push(ValidationIssue::InvertedRange {
                world: name(),
                field,
                min: span.min,
                max: span.max,
            });
        }
    };
    if let Some(trees) = &world.trees {
        check_span("trees.distance", trees.distance());
        check_span("trees.height", trees.height);
    }
    if let Some(cacti) = &world.cacti {
        check_span("cacti.distance", cacti.distance());
        check_span("cacti.height", cacti.height);
    }
    if let Some(dunes) = &world.dunes {
        check_span("dunes.distance", dunes.distance());
        check_span("dunes.size", dunes.size);
        check_span("dunes.height", dunes.height);
    }

    if let Some(lake) = &world.lake {
        if !(0.0..=1.0).contains(&lake.opacity) {
            issues.push(ValidationIssue::OpacityOutOfRange {
                world: name(),
                field: "lake",
                value: lake.opacity,
            });
        }
    }

    for (index, obstacle) in world.obstacles.iter().enumerate() {
        if !has_positive_dimensions(obstacle) {
            issues.push(ValidationIssue::DegenerateObstacle {
                world: name(),
                index,
                shape: obstacle.shape().as_str(),
            });
        }
    }
}

fn has_positive_dimensions(obstacle: &Obstacle) -> bool {
    match obstacle {
        Obstacle::Box(b) => b.size.x > 0.0 && b.size.y > 0.0 && b.size.z > 0.0,
        Obstacle::Sphere(s) => s.radius > 0.0,
        Obstacle::Cylinder(c) | Obstacle::Cone(c) => c.radius > 0.0 && c.height > 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portalworld_common::Point3;
    use portalworld_kernel::Portal;

    fn registry_with(key: &str, edit: impl FnOnce(&mut WorldDefinition)) -> WorldRegistry {
        let mut reg = WorldRegistry::builtin().clone();
        let mut world = reg.get(key).unwrap().clone();
        edit(&mut world);
        reg.insert(key, world);
        reg
    }

    #[test]
    fn broken_portal_is_reported() {
        let reg = registry_with("default", |w| {
            w.portal_positions.push(Portal::new(0.0, -100.0, "volcano"));
        });
        let report = reg.validate().unwrap_err();
        assert_eq!(
            report.issues,
            vec![ValidationIssue::BrokenPortal {
                world: "default".into(),
                index: 3,
                destination: "volcano".into(),
            }]
        );
    }

    #[test]
    fn removing_a_world_breaks_incoming_portals() {
        let mut reg = WorldRegistry::new();
        reg.insert("forest", crate::get("forest").unwrap().clone());
        let report = reg.validate().unwrap_err();
        // forest links to default, desert and snow.
        assert_eq!(report.issues.len(), 3);
        assert!(report
            .issues
            .iter()
            .all(|i| matches!(i, ValidationIssue::BrokenPortal { .. })));
    }

    #[test]
    fn inverted_ranges_are_reported() {
        let reg = registry_with("desert", |w| {
            let dunes = w.dunes.as_mut().unwrap();
            dunes.min_distance = 600.0;
            dunes.height = Span::new(15.0, 5.0);
        });
        let report = reg.validate().unwrap_err();
        let fields: Vec<&str> = report
            .issues
            .iter()
            .filter_map(|i| match i {
                ValidationIssue::InvertedRange { field, .. } => Some(*field),
                _ => None,
            })
            .collect();
        assert_eq!(fields, ["dunes.distance", "dunes.height"]);
    }

    #[test]
    fn fog_and_opacity_checks() {
        let reg = registry_with("snow", |w| {
            w.fog.near = 100.0;
            w.lake.as_mut().unwrap().opacity = 1.5;
        });
        let report = reg.validate().unwrap_err();
        assert_eq!(report.issues.len(), 2);
        assert!(matches!(report.issues[0], ValidationIssue::FogRange { .. }));
        assert!(matches!(
            report.issues[1],
            ValidationIssue::OpacityOutOfRange { .. }
        ));
    }

    #[test]
    fn duplicate_and_empty_names() {
        let mut reg = WorldRegistry::builtin().clone();
        let mut copy = crate::get("snow").unwrap().clone();
        reg.insert("tundra", copy.clone());
        copy.name = "  ".into();
        reg.insert("void", copy);
        let report = reg.validate().unwrap_err();
        assert!(report.issues.iter().any(|i| matches!(
            i,
            ValidationIssue::DuplicateName { world, .. } if world == "tundra"
        )));
        assert!(report
            .issues
            .iter()
            .any(|i| matches!(i, ValidationIssue::EmptyName { world } if world == "void")));
    }

    #[test]
    fn degenerate_obstacle() {
        let reg = registry_with("forest", |w| {
            w.obstacles
                .push(Obstacle::sphere(Point3::ZERO, 0.0, w.background));
        });
        let report = reg.validate().unwrap_err();
        assert!(matches!(
            &report.issues[..],
            [ValidationIssue::DegenerateObstacle { index: 4, shape: "sphere", .. }]
        ));
    }

    #[test]
    fn report_display_mentions_first_issue() {
        let reg = registry_with("default", |w| w.name.clear());
        let text = reg.validate().unwrap_err().to_string();
        assert!(text.starts_with("1 world validation issue(s)"));
        assert!(text.contains("empty name"));
    }

    #[test]
    fn validated_passes_clean_registry_through() {
        let reg = WorldRegistry::builtin().clone().validated().unwrap();
        assert_eq!(reg.len(), 4);
    }
}

use portalworld_common::Color;
use portalworld_kernel::{Feature, Obstacle, ShapeKind, WorldDefinition};
use portalworld_registry::WorldFingerprint;
use std::collections::BTreeMap;

/// World inspector for developer tooling.
///
/// Provides read-only queries against a world definition for debugging and
/// the command-line front end.
pub struct WorldInspector;

impl WorldInspector {
    /// Produce a summary of a world.
    pub fn summary(key: &str, world: &WorldDefinition) -> WorldSummary {
        let mut obstacle_counts = BTreeMap::new();
        for obstacle in &world.obstacles {
            *obstacle_counts.entry(obstacle.shape()).or_insert(0) += 1;
        }
        WorldSummary {
            key: key.to_string(),
            name: world.name.clone(),
            fingerprint: WorldFingerprint::of(world),
            destinations: world.destinations().map(str::to_string).collect(),
            obstacle_counts,
            features: world.features(),
            fog: [world.fog.near, world.fog.far],
        }
    }

    /// Per-obstacle details in authored order.
    pub fn obstacles(world: &WorldDefinition) -> Vec<ObstacleInfo> {
        world
            .obstacles
            .iter()
            .enumerate()
            .map(|(index, obstacle)| ObstacleInfo::new(index, obstacle))
            .collect()
    }
}

/// Summary of a world for the inspector.
#[derive(Debug, Clone)]
pub struct WorldSummary {
    pub key: String,
    pub name: String,
    pub fingerprint: WorldFingerprint,
    pub destinations: Vec<String>,
    pub obstacle_counts: BTreeMap<ShapeKind, usize>,
    pub features: Vec<Feature>,
    pub fog: [f32; 2],
}

impl WorldSummary {
    pub fn obstacle_total(&self) -> usize {
        self.obstacle_counts.values().sum()
    }
}

impl std::fmt::Display for WorldSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shapes: Vec<String> = self
            .obstacle_counts
            .iter()
            .map(|(shape, n)| format!("{shape}={n}"))
            .collect();
        let features: Vec<&str> = self.features.iter().map(|f| f.as_str()).collect();
        write!(
            f,
            "World [{}] {:?} fingerprint={} fog={}..{} portals->[{}] obstacles={} ({}) features=[{}]",
            self.key,
            self.name,
            self.fingerprint,
            self.fog[0],
            self.fog[1],
            self.destinations.join(", "),
            self.obstacle_total(),
            shapes.join(" "),
            features.join(", "),
        )
    }
}

/// Detailed info about a single obstacle.
#[derive(Debug, Clone)]
pub struct ObstacleInfo {
    pub index: usize,
    pub shape: ShapeKind,
    /// Position with the offset applied.
    pub position: [f32; 3],
    pub half_extents: [f32; 3],
    pub color: Color,
    pub rotated: bool,
}

impl ObstacleInfo {
    fn new(index: usize, obstacle: &Obstacle) -> Self {
        Self {
            index,
            shape: obstacle.shape(),
            position: obstacle.world_position().to_array(),
            half_extents: obstacle.half_extents().to_array(),
            color: obstacle.color(),
            rotated: obstacle.rotation().is_some(),
        }
    }
}

impl std::fmt::Display for ObstacleInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{:<2} {:<8} pos=({:.2}, {:.2}, {:.2}) half=({:.2}, {:.2}, {:.2}) color={}{}",
            self.index,
            self.shape,
            self.position[0],
            self.position[1],
            self.position[2],
            self.half_extents[0],
            self.half_extents[1],
            self.half_extents[2],
            self.color,
            if self.rotated { " rotated" } else { "" },
        )
    }
}

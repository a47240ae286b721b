//! Deterministic scatter of procedural scenery.
//!
//! Expands the `trees`, `cacti`, `dunes` and `snowfall` parameters of a world
//! into concrete placements. Given the same seed and parameters the output is
//! identical on every platform.
//!
//! # Invariants
//! - Placements honour the authored distance and size spans.
//! - Each feature draws from its own stream, so adding or removing one feature
//!   never moves the placements of another.

mod layout;
mod rng;

pub use layout::{CactusPlacement, DunePlacement, ScatterLayout, TreePlacement};
pub use rng::SplitMix64;

use portalworld_common::{Point3, Span};
use portalworld_kernel::{Cacti, Dunes, Snowfall, Trees, WorldDefinition};

const TREES_SALT: u64 = 0x7472_6565_7300_0001;
const CACTI_SALT: u64 = 0x6361_6374_6900_0002;
const DUNES_SALT: u64 = 0x6475_6e65_7300_0003;
const SNOW_SALT: u64 = 0x736e_6f77_0000_0004;

/// Seeded placement generator.
#[derive(Debug, Clone)]
pub struct Scatter {
    rng: SplitMix64,
}

impl Scatter {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SplitMix64::new(seed),
        }
    }

    /// Scatter every feature present on `world`.
    ///
    /// Snow fills the volume inside the fog's far plane: `[-far, far]` on X
    /// and Z, `[0, far]` on Y.
    pub fn world(seed: u64, world: &WorldDefinition) -> ScatterLayout {
        let _span = tracing::info_span!("scatter_world", world = %world.name, seed).entered();
        let mut layout = ScatterLayout::default();
        if let Some(trees) = &world.trees {
            layout.trees = Self::new(seed ^ TREES_SALT).trees(trees);
        }
        if let Some(cacti) = &world.cacti {
            layout.cacti = Self::new(seed ^ CACTI_SALT).cacti(cacti);
        }
        if let Some(dunes) = &world.dunes {
            layout.dunes = Self::new(seed ^ DUNES_SALT).dunes(dunes);
        }
        if let Some(snowfall) = &world.snowfall {
            let far = world.fog.far;
            layout.snow = Self::new(seed ^ SNOW_SALT).snowfall(snowfall, far, far);
        }
        tracing::debug!(
            trees = layout.trees.len(),
            cacti = layout.cacti.len(),
            dunes = layout.dunes.len(),
            snow = layout.snow.len(),
            "scatter complete"
        );
        layout
    }

    pub fn trees(&mut self, params: &Trees) -> Vec<TreePlacement> {
        (0..params.count)
            .map(|_| {
                let (x, z) = self.polar(params.distance());
                TreePlacement {
                    x,
                    z,
                    height: self.within(params.height),
                    trunk_color: params.trunk_color,
                    leaves_color: params.leaves_color,
                }
            })
            .collect()
    }

    pub fn cacti(&mut self, params: &Cacti) -> Vec<CactusPlacement> {
        (0..params.count)
            .map(|_| {
                let (x, z) = self.polar(params.distance());
                CactusPlacement {
                    x,
                    z,
                    height: self.within(params.height),
                    color: params.color,
                }
            })
            .collect()
    }

    pub fn dunes(&mut self, params: &Dunes) -> Vec<DunePlacement> {
        (0..params.count)
            .map(|_| {
                let (x, z) = self.polar(params.distance());
                DunePlacement {
                    x,
                    z,
                    size: self.within(params.size),
                    height: self.within(params.height),
                    color: params.color,
                }
            })
            .collect()
    }

    /// Initial particle positions inside a box of half-width `extent`
    /// standing on the ground up to `ceiling`. Empty when disabled.
    pub fn snowfall(&mut self, params: &Snowfall, extent: f32, ceiling: f32) -> Vec<Point3> {
        if !params.enabled {
            return Vec::new();
        }
        let planar = Span::new(-extent, extent);
        let vertical = Span::new(0.0, ceiling);
        (0..params.particle_count)
            .map(|_| {
                let x = self.within(planar);
                let y = self.within(vertical);
                let z = self.within(planar);
                Point3::new(x, y, z)
            })
            .collect()
    }

    /// Uniform angle, uniform distance within `distance`.
    fn polar(&mut self, distance: Span<f32>) -> (f32, f32) {
        let angle = self.rng.next_f32() * std::f32::consts::TAU;
        let r = self.within(distance);
        (r * angle.cos(), r * angle.sin())
    }

    fn within(&mut self, span: Span<f32>) -> f32 {
        span.lerp(self.rng.next_f32())
    }
}

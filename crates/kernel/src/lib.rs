//! World Kernel: the typed definition of a world preset.
//!
//! A `WorldDefinition` bundles the look of a scene (background, grid, fog,
//! hemisphere light), its portals to other worlds, static obstacles and the
//! optional procedural parameters of its theme.
//!
//! # Invariants
//! - Definitions are plain immutable data; nothing here mutates after load.
//! - Obstacle shape and shape fields always match (enforced by `Obstacle`).
//! - Field names on the wire are camelCase, obstacles carry a `type` tag.

pub mod feature;
pub mod obstacle;
pub mod world;

pub use feature::{Cacti, Dunes, Feature, Lake, Snowfall, Trees};
pub use obstacle::{BoxShape, ColumnShape, Obstacle, ShapeKind, SphereShape};
pub use world::{Ambient, Fog, Portal, WorldDefinition};

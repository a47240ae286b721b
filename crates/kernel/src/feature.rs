//! Procedural parameters attached to themed worlds.
//!
//! These describe how much scenery to scatter and within which bounds; the
//! placement itself lives in `portalworld-scatter`.

use portalworld_common::{Color, Point3, Span};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Trees {
    pub count: u32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub height: Span<f32>,
    pub trunk_color: Color,
    pub leaves_color: Color,
}

impl Trees {
    pub fn distance(&self) -> Span<f32> {
        Span::new(self.min_distance, self.max_distance)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Cacti {
    pub count: u32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub height: Span<f32>,
    pub color: Color,
}

impl Cacti {
    pub fn distance(&self) -> Span<f32> {
        Span::new(self.min_distance, self.max_distance)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Dunes {
    pub count: u32,
    pub min_distance: f32,
    pub max_distance: f32,
    /// Footprint diameter.
    pub size: Span<f32>,
    pub height: Span<f32>,
    pub color: Color,
}

impl Dunes {
    pub fn distance(&self) -> Span<f32> {
        Span::new(self.min_distance, self.max_distance)
    }
}

/// Falling-particle parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Snowfall {
    pub enabled: bool,
    pub particle_count: u32,
    /// Particle size in scene units.
    pub size: f32,
    pub color: Color,
    pub speed_factor: f32,
}

/// A flat translucent slab.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Lake {
    pub position: Point3,
    pub size: Point3,
    pub color: Color,
    /// `0.0` fully transparent, `1.0` opaque.
    pub opacity: f32,
}

/// Names of the optional feature records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Feature {
    Trees,
    Cacti,
    Dunes,
    Snowfall,
    Lake,
}

impl Feature {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trees => "trees",
            Self::Cacti => "cacti",
            Self::Dunes => "dunes",
            Self::Snowfall => "snowfall",
            Self::Lake => "lake",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use portalworld_common::{Color, Point3};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TreePlacement {
    pub x: f32,
    pub z: f32,
    pub height: f32,
    pub trunk_color: Color,
    pub leaves_color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CactusPlacement {
    pub x: f32,
    pub z: f32,
    pub height: f32,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DunePlacement {
    pub x: f32,
    pub z: f32,
    pub size: f32,
    pub height: f32,
    pub color: Color,
}

/// Everything scattered for one world. Features the world lacks stay empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScatterLayout {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub trees: Vec<TreePlacement>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cacti: Vec<CactusPlacement>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dunes: Vec<DunePlacement>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub snow: Vec<Point3>,
}

impl ScatterLayout {
    pub fn total(&self) -> usize {
        self.trees.len() + self.cacti.len() + self.dunes.len() + self.snow.len()
    }
}

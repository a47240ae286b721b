//! Built-in world presets.
//!
//! Literal values are design intent (fog planes, placements, colors) and are
//! reproduced exactly. Portal and obstacle order is significant.

mod default;
mod desert;
mod forest;
mod snow;

use portalworld_kernel::WorldDefinition;

pub const DEFAULT: &str = "default";
pub const FOREST: &str = "forest";
pub const DESERT: &str = "desert";
pub const SNOW: &str = "snow";

/// Keys of the built-in registry, in authoring order.
pub const BUILTIN_KEYS: [&str; 4] = [DEFAULT, FOREST, DESERT, SNOW];

/// Build every built-in preset, paired with its registry key.
pub fn all() -> [(&'static str, WorldDefinition); 4] {
    [
        (DEFAULT, default::definition()),
        (FOREST, forest::definition()),
        (DESERT, desert::definition()),
        (SNOW, snow::definition()),
    ]
}

//! World registry: built-in presets, lookup, validation and definition files.
//!
//! The built-in registry maps `default`, `forest`, `desert` and `snow` to
//! their definitions. It is built once on first access and never mutated.
//! Lookups never fail: an unknown key is simply `None`.
//!
//! # Layout
//! Registries persist either as a single file holding the whole map or as a
//! directory with one `<key>.<ext>` file per world.

pub mod format;
pub mod presets;
pub mod registry;
pub mod validate;

pub use format::Format;
pub use presets::BUILTIN_KEYS;
pub use registry::{RegistryError, WorldFingerprint, WorldRegistry};
pub use validate::{ValidationIssue, ValidationReport};

/// Look up a built-in world by key.
pub fn get(name: &str) -> Option<&'static portalworld_kernel::WorldDefinition> {
    WorldRegistry::builtin().get(name)
}

pub fn crate_info() -> &'static str {
    "portalworld-registry v0.1.0"
}

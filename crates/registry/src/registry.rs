use portalworld_kernel::WorldDefinition;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;

use crate::format::Format;
use crate::presets;
use crate::validate::{self, ValidationReport};

static BUILTIN: LazyLock<WorldRegistry> = LazyLock::new(|| {
    let registry: WorldRegistry = presets::all().into_iter().collect();
    tracing::debug!(worlds = registry.len(), "built-in world registry ready");
    registry
});

/// Errors from registry file operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("CBOR serialization error: {0}")]
    CborEncode(String),
    #[error("CBOR deserialization error: {0}")]
    CborDecode(String),
    #[error("unknown definition format: {0}")]
    UnknownFormat(String),
    #[error("cannot derive a world key from {0}")]
    InvalidKey(String),
    #[error(transparent)]
    Validation(#[from] ValidationReport),
}

/// Content-addressed fingerprint of a world definition.
///
/// First 8 bytes of the SHA-256 of the definition's JSON encoding. Two
/// definitions with equal fields have equal fingerprints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorldFingerprint(pub u64);

impl WorldFingerprint {
    pub fn of(world: &WorldDefinition) -> Self {
        let mut hasher = Sha256::new();
        // Struct serialization is infallible: no maps with non-string keys.
        let bytes = serde_json::to_vec(world).unwrap_or_default();
        hasher.update(&bytes);
        let result = hasher.finalize();
        let mut out = [0u8; 8];
        out.copy_from_slice(&result[..8]);
        Self(u64::from_le_bytes(out))
    }
}

impl fmt::Display for WorldFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Mapping from world key to definition.
///
/// Uses BTreeMap so iteration and file output are in stable key order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorldRegistry {
    worlds: BTreeMap<String, WorldDefinition>,
}

impl WorldRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry of built-in presets.
    pub fn builtin() -> &'static WorldRegistry {
        &BUILTIN
    }

    /// Look up a world. Unknown keys yield `None`; no error is raised.
    pub fn get(&self, name: &str) -> Option<&WorldDefinition> {
        self.worlds.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.worlds.contains_key(name)
    }

    /// Insert or replace a world. Returns the previous definition if any.
    pub fn insert(&mut self, key: impl Into<String>, world: WorldDefinition) -> Option<WorldDefinition> {
        self.worlds.insert(key.into(), world)
    }

    /// Merge `other` into `self`; entries of `other` win on key collisions.
    pub fn merge(&mut self, other: WorldRegistry) {
        for (key, world) in other.worlds {
            if self.worlds.contains_key(&key) {
                tracing::debug!(%key, "overriding world definition");
            } else {
                tracing::debug!(%key, "adding world definition");
            }
            self.worlds.insert(key, world);
        }
    }

    pub fn len(&self) -> usize {
        self.worlds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.worlds.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.worlds.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &WorldDefinition)> {
        self.worlds.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Check every world; collects all issues rather than stopping at the first.
    pub fn validate(&self) -> Result<(), ValidationReport> {
        validate::validate(self)
    }

    /// Consume the registry, returning it only if it validates.
    pub fn validated(self) -> Result<Self, ValidationReport> {
        self.validate()?;
        Ok(self)
    }

    pub fn fingerprint(&self, name: &str) -> Option<WorldFingerprint> {
        self.get(name).map(WorldFingerprint::of)
    }

    /// Save the whole registry as a single file.
    pub fn save(&self, path: impl AsRef<Path>, format: Format) -> Result<(), RegistryError> {
        let file = std::fs::File::create(path)?;
        format.write(self, file)
    }

    /// Load a registry written by [`WorldRegistry::save`].
    pub fn load(path: impl AsRef<Path>, format: Format) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let registry: Self = format.read(file)?;
        tracing::debug!(path = %path.display(), worlds = registry.len(), "loaded world registry");
        Ok(registry)
    }

    /// Write one `<key>.<ext>` file per world into `dir`, creating it if needed.
    pub fn export_dir(&self, dir: impl AsRef<Path>, format: Format) -> Result<Vec<std::path::PathBuf>, RegistryError> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        let mut written = Vec::with_capacity(self.len());
        for (key, world) in &self.worlds {
            let path = dir.join(format!("{key}.{}", format.extension()));
            format.write(world, std::fs::File::create(&path)?)?;
            written.push(path);
        }
        Ok(written)
    }

    /// Load every definition file in `dir`. The file stem is the world key
    /// and the extension selects the format; other files are skipped.
    pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let mut paths: Vec<_> = std::fs::read_dir(dir.as_ref())?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<_, _>>()?;
        paths.sort();

        let mut registry = Self::new();
        for path in paths {
            if !path.is_file() {
                continue;
            }
            let Some(format) = Format::from_path(&path) else {
                tracing::debug!(path = %path.display(), "skipping non-definition file");
                continue;
            };
            let key = path
                .file_stem()
                .and_then(|s| s.to_str())
                .filter(|s| !s.is_empty())
                .ok_or_else(|| RegistryError::InvalidKey(path.display().to_string()))?
                .to_string();
            let world: WorldDefinition = format.read(std::fs::File::open(&path)?)?;
            tracing::debug!(%key, path = %path.display(), "loaded world definition");
            registry.insert(key, world);
        }
        Ok(registry)
    }
}

impl<K: Into<String>> FromIterator<(K, WorldDefinition)> for WorldRegistry {
    fn from_iter<I: IntoIterator<Item = (K, WorldDefinition)>>(iter: I) -> Self {
        Self {
            worlds: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

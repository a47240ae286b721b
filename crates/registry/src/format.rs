use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::io::{Read, Write};
use std::path::Path;
use std::str::FromStr;

use crate::registry::RegistryError;

/// On-disk encoding of definition files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Yaml,
    Cbor,
}

impl Format {
    /// Pick a format from a file extension (`json`, `yaml`/`yml`, `cbor`).
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            "cbor" => Some(Self::Cbor),
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Cbor => "cbor",
        }
    }

    /// Encode `value` into `writer`. JSON is pretty-printed.
    pub fn write<T: Serialize + ?Sized>(self, value: &T, writer: impl Write) -> Result<(), RegistryError> {
        match self {
            Self::Json => serde_json::to_writer_pretty(writer, value)?,
            Self::Yaml => serde_yaml::to_writer(writer, value)?,
            Self::Cbor => ciborium::into_writer(value, writer)
                .map_err(|e| RegistryError::CborEncode(e.to_string()))?,
        }
        Ok(())
    }

    pub fn read<T: DeserializeOwned>(self, reader: impl Read) -> Result<T, RegistryError> {
        let value = match self {
            Self::Json => serde_json::from_reader(reader)?,
            Self::Yaml => serde_yaml::from_reader(reader)?,
            Self::Cbor => ciborium::from_reader(reader)
                .map_err(|e| RegistryError::CborDecode(e.to_string()))?,
        };
        Ok(value)
    }

    pub fn to_vec<T: Serialize + ?Sized>(self, value: &T) -> Result<Vec<u8>, RegistryError> {
        let mut buf = Vec::new();
        self.write(value, &mut buf)?;
        Ok(buf)
    }

    pub fn from_slice<T: DeserializeOwned>(self, data: &[u8]) -> Result<T, RegistryError> {
        self.read(data)
    }
}

impl FromStr for Format {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "cbor" => Ok(Self::Cbor),
            _ => Err(RegistryError::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;

    #[test]
    fn format_from_extension() {
        assert_eq!(Format::from_path("worlds/snow.json"), Some(Format::Json));
        assert_eq!(Format::from_path("snow.YML"), Some(Format::Yaml));
        assert_eq!(Format::from_path("snow.cbor"), Some(Format::Cbor));
        assert_eq!(Format::from_path("snow.toml"), None);
        assert_eq!(Format::from_path("snow"), None);
    }

    #[test]
    fn format_parse() {
        assert_eq!("YAML".parse::<Format>().unwrap(), Format::Yaml);
        assert!(matches!(
            "xml".parse::<Format>(),
            Err(RegistryError::UnknownFormat(_))
        ));
    }

    #[test]
    fn every_preset_roundtrips_in_every_format() {
        for (key, world) in presets::all() {
            for format in [Format::Json, Format::Yaml, Format::Cbor] {
                let bytes = format.to_vec(&world).unwrap();
                let back: portalworld_kernel::WorldDefinition = format.from_slice(&bytes).unwrap();
                assert_eq!(back, world, "{key} via {format}");
            }
        }
    }

    #[test]
    fn yaml_uses_authored_field_names() {
        let text = String::from_utf8(Format::Yaml.to_vec(&presets::all()[2].1).unwrap()).unwrap();
        assert!(text.contains("gridColor:"));
        assert!(text.contains("minDistance:"));
        assert!(text.contains("type: cylinder"));
    }
}

//! The `"icons"` object of a browser extension `manifest.json`
//!
//! Maps each icon edge length to its path, e.g. `"16": "icons/icon16.png"`.
//! Keys keep the order of the icon set rather than sorting as strings.

use crate::icon_gen::IconSpec;
use anyhow::{Context, Result};
use serde::ser::{Serialize, SerializeMap, Serializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestIcons {
    entries: Vec<IconEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct IconEntry {
    size: u32,
    path: String,
}

impl ManifestIcons {
    /// Build the icon map for files living in `dir_name` next to the manifest
    pub fn from_specs(dir_name: &str, specs: &[IconSpec]) -> Self {
        let entries = specs
            .iter()
            .map(|spec| IconEntry {
                size: spec.size,
                path: format!("{}/{}", dir_name, spec.filename),
            })
            .collect();

        Self { entries }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize manifest icons")
    }
}

impl Serialize for ManifestIcons {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.size.to_string(), &entry.path)?;
        }
        map.end()
    }
}

// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Entry document serialization and deserialization.
//!
//! An entry document maps field names to JSON values. This module reads
//! and writes such documents in YAML and JSON formats.

use anyhow::{bail, Context, Result};
use serde_json::{Map, Value};
use std::path::Path;

/// Fields of an entry, keyed by field name.
pub type EntryFields = Map<String, Value>;

/// On-disk format of an entry document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryFormat {
    Json,
    Yaml,
}

impl EntryFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path.extension().and_then(|s| s.to_str());
        match extension {
            Some("yaml") | Some("yml") => Ok(EntryFormat::Yaml),
            Some("json") => Ok(EntryFormat::Json),
            _ => bail!("Unsupported file extension: {:?}", extension),
        }
    }
}

/// Export entry fields to YAML format.
pub fn export_yaml(fields: &EntryFields, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(fields)?;
    std::fs::write(path, yaml).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Export entry fields to JSON format.
pub fn export_json(fields: &EntryFields, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(fields)?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Import entry fields from YAML format.
pub fn import_yaml(path: &Path) -> Result<EntryFields> {
    let yaml =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    if yaml.trim().is_empty() {
        return Ok(EntryFields::new());
    }
    let fields = serde_yaml::from_str(&yaml)
        .with_context(|| format!("parsing YAML entry {}", path.display()))?;
    Ok(fields)
}

/// Import entry fields from JSON format.
pub fn import_json(path: &Path) -> Result<EntryFields> {
    let json =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    if json.trim().is_empty() {
        return Ok(EntryFields::new());
    }
    let fields = serde_json::from_str(&json)
        .with_context(|| format!("parsing JSON entry {}", path.display()))?;
    Ok(fields)
}

/// Export in the given format.
pub fn export(fields: &EntryFields, path: &Path, format: EntryFormat) -> Result<()> {
    match format {
        EntryFormat::Json => export_json(fields, path),
        EntryFormat::Yaml => export_yaml(fields, path),
    }
}

/// Import in the given format.
pub fn import(path: &Path, format: EntryFormat) -> Result<EntryFields> {
    match format {
        EntryFormat::Json => import_json(path),
        EntryFormat::Yaml => import_yaml(path),
    }
}

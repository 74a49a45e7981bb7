// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Field store backed by an entry document on disk.
//!
//! The whole document is kept in memory and rewritten on every field
//! write, in the format implied by the file extension. Fields the form does
//! not know about are carried through untouched.

use super::{Field, FieldStore};
use crate::io::serialization::{self, EntryFields, EntryFormat};
use anyhow::Result;
use serde_json::Value;
use std::path::PathBuf;

pub struct EntryFile {
    path: PathBuf,
    format: EntryFormat,
    fields: EntryFields,
}

impl EntryFile {
    /// Open the entry at `path`. A file that does not exist yet is an
    /// empty entry and is created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let format = EntryFormat::from_path(&path)?;
        let fields = if path.exists() {
            serialization::import(&path, format)?
        } else {
            log::info!("Entry {} does not exist yet, starting empty", path.display());
            EntryFields::new()
        };

        log::info!("Opened entry {} ({} fields)", path.display(), fields.len());
        Ok(Self {
            path,
            format,
            fields,
        })
    }

    fn save(&self) -> Result<()> {
        serialization::export(&self.fields, &self.path, self.format)
    }
}

impl FieldStore for EntryFile {
    fn get_value(&self, field: Field) -> Option<Value> {
        self.fields.get(field.name()).cloned()
    }

    fn set_value(&mut self, field: Field, value: Value) {
        self.fields.insert(field.name().to_string(), value);
        match self.save() {
            Ok(()) => log::debug!("Saved field {} to {}", field, self.path.display()),
            Err(e) => log::error!("Failed to save entry {}: {:#}", self.path.display(), e),
        }
    }
}

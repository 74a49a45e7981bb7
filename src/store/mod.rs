// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Field storage provided by the host.
//!
//! The host exposes the entry being edited as a set of named fields, each
//! holding a JSON value. The form reads every field once when it mounts and
//! writes a field back whenever its value changes. Writes are fire-and-forget:
//! a store that fails to persist a value reports it through its own logging.

pub mod entry_file;

use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

pub use entry_file::EntryFile;

/// Fields of a quiz entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Title,
    Projects,
    Questions,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Title, Field::Projects, Field::Questions];

    /// Name of the field in the entry.
    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Projects => "projects",
            Field::Questions => "questions",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Read/write access to the fields of the entry being edited.
pub trait FieldStore {
    /// Current value of `field`, or `None` if the entry has never set it.
    fn get_value(&self, field: Field) -> Option<Value>;

    /// Replace the value of `field`.
    fn set_value(&mut self, field: Field, value: Value);
}

impl<T: FieldStore + ?Sized> FieldStore for Box<T> {
    fn get_value(&self, field: Field) -> Option<Value> {
        (**self).get_value(field)
    }

    fn set_value(&mut self, field: Field, value: Value) {
        (**self).set_value(field, value)
    }
}

/// A field store held entirely in memory.
///
/// Under test every write is also appended to a log, which shows what the
/// form pushed to the host and in which order.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: BTreeMap<Field, Value>,
    #[cfg(test)]
    writes: Vec<(Field, Value)>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl MemoryStore {
    /// Seed a field without recording it as a write.
    pub fn with_value(mut self, field: Field, value: Value) -> Self {
        self.values.insert(field, value);
        self
    }

    /// All writes made so far, oldest first.
    pub fn writes(&self) -> &[(Field, Value)] {
        &self.writes
    }

    /// The most recent value written to `field`.
    pub fn last_write(&self, field: Field) -> Option<&Value> {
        self.writes
            .iter()
            .rev()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v)
    }
}

impl FieldStore for MemoryStore {
    fn get_value(&self, field: Field) -> Option<Value> {
        self.values.get(&field).cloned()
    }

    fn set_value(&mut self, field: Field, value: Value) {
        #[cfg(test)]
        self.writes.push((field, value.clone()));
        self.values.insert(field, value);
    }
}

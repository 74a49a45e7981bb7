// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Host locations and the mount decision.
//!
//! The host decides where an extension surface appears. The quiz form is
//! only meaningful as a full entry editor; anywhere else it renders nothing.

use crate::form::QuizForm;
use crate::store::FieldStore;

/// Surfaces a host can ask the extension to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Location {
    EntryEditor,
    EntrySidebar,
    EntryField,
    Dialog,
    Page,
}

/// What the host tells the extension about the current surface.
#[derive(Debug, Clone, Copy)]
pub struct HostContext {
    location: Location,
}

impl HostContext {
    pub fn new(location: Location) -> Self {
        Self { location }
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn is(&self, location: Location) -> bool {
        self.location == location
    }
}

/// Mount the quiz form on `store` if the host is showing an entry editor.
pub fn mount<S: FieldStore>(host: &HostContext, store: S) -> Option<QuizForm<S>> {
    if !host.is(Location::EntryEditor) {
        log::info!("Not mounting quiz form at {:?}", host.location());
        return None;
    }
    Some(QuizForm::mount(store))
}

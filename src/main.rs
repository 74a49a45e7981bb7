// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Quiz contents editor
//!
//! A form for authoring personality quiz entries: a title, a list of
//! projects, and questions whose answers count towards some of those
//! projects. Every change is written straight through to the entry's fields.

mod app;
mod form;
mod host;
mod io;
mod models;
mod store;
mod ui;

use anyhow::Result;
use app::QuizEditorApp;
use clap::Parser;
use host::{HostContext, Location};
use std::path::PathBuf;
use store::{EntryFile, FieldStore, MemoryStore};

#[derive(Parser, Debug)]
#[command(about = "Edit the contents of a quiz entry")]
struct Args {
    /// Entry file holding the quiz fields (.json, .yaml or .yml)
    #[arg(short, long)]
    entry: Option<PathBuf>,

    /// Host location the editor is shown in
    #[arg(short, long, value_enum, default_value_t = Location::EntryEditor)]
    location: Location,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let store: Box<dyn FieldStore> = match &args.entry {
        Some(path) => Box::new(EntryFile::open(path)?),
        None => Box::new(MemoryStore::new()),
    };

    let context = HostContext::new(args.location);
    let Some(form) = host::mount(&context, store) else {
        return Ok(());
    };

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 860.0])
            .with_min_inner_size([480.0, 400.0])
            .with_title("Quiz Contents Editor"),
        ..Default::default()
    };

    // Run the application
    let entry = args.entry;
    eframe::run_native(
        "Quiz Contents Editor",
        options,
        Box::new(move |_cc| Ok(Box::new(QuizEditorApp::new(form, entry)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}

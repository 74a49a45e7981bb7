// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! The application plays the part of the host: it owns the field store of
//! the entry being edited, mounts the quiz form on it and gives the form
//! a window to render into.

use crate::form::QuizForm;
use crate::store::{EntryFile, FieldStore};
use crate::ui;
use std::path::PathBuf;

type Form = QuizForm<Box<dyn FieldStore>>;

/// Main application state.
pub struct QuizEditorApp {
    /// Mounted form; only empty while being remounted
    form: Option<Form>,

    /// Entry file backing the store, if any
    entry_path: Option<PathBuf>,
}

impl QuizEditorApp {
    /// Create the application around an already mounted form.
    pub fn new(form: Form, entry_path: Option<PathBuf>) -> Self {
        Self {
            form: Some(form),
            entry_path,
        }
    }

    /// Open an entry file and mount a fresh form on it.
    fn open_entry(&mut self, path: PathBuf) {
        match EntryFile::open(&path) {
            Ok(store) => {
                let store: Box<dyn FieldStore> = Box::new(store);
                self.form = Some(QuizForm::mount(store));
                self.entry_path = Some(path);
            }
            Err(e) => log::error!("Failed to open entry {}: {:#}", path.display(), e),
        }
    }

    /// Remount the form, rebuilding every editor from the stored fields.
    fn reload_entry(&mut self) {
        if let Some(path) = self.entry_path.clone() {
            self.open_entry(path);
            return;
        }
        if let Some(form) = self.form.take() {
            self.form = Some(QuizForm::mount(form.into_store()));
            log::info!("Reloaded in-memory entry");
        }
    }
}

impl eframe::App for QuizEditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Entry...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Entries", &["json", "yaml", "yml"])
                            .pick_file()
                        {
                            self.open_entry(path);
                        }
                        ui.close_menu();
                    }
                    if ui.button("Reload Entry").clicked() {
                        self.reload_entry();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            let status = match &self.entry_path {
                Some(path) => format!("Editing {}", path.display()),
                None => "Editing an in-memory entry".to_string(),
            };
            ui.label(egui::RichText::new(status).weak());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    if let Some(form) = self.form.as_mut() {
                        ui::quiz::show(ui, form);
                    }
                });
        });
    }
}

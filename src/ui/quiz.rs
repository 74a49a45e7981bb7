// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Quiz form layout.
//!
//! Title input, project input with removable project pills, and the list
//! of question panels.

use super::question;
use crate::form::QuizForm;
use crate::store::FieldStore;

/// A labelled chip with a close button. Returns true when closed.
fn pill(ui: &mut egui::Ui, label: &str) -> bool {
    egui::Frame::group(ui.style())
        .rounding(10.0)
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(label);
                ui.small_button("✕").on_hover_text("Remove project").clicked()
            })
            .inner
        })
        .inner
}

/// Display the whole quiz form.
pub fn show<S: FieldStore>(ui: &mut egui::Ui, form: &mut QuizForm<S>) {
    ui.heading("Quiz");
    ui.label("This form is for creating a new personality quiz.");
    ui.add_space(12.0);

    ui.label("Quiz Title");
    let mut title = form.title().to_owned();
    if ui
        .add(egui::TextEdit::singleline(&mut title).desired_width(f32::INFINITY))
        .changed()
    {
        form.set_title(title);
    }
    ui.add_space(8.0);

    ui.label("Projects");
    let mut input = form.project_input().to_owned();
    let response = ui.add(egui::TextEdit::singleline(&mut input).desired_width(f32::INFINITY));
    if response.changed() {
        form.set_project_input(input);
    }
    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
        form.commit_project_input();
        response.request_focus();
    }
    ui.label(egui::RichText::new("Type a project name and then press enter!").weak());

    let mut removed = None;
    ui.horizontal_wrapped(|ui| {
        for project in form.projects() {
            if pill(ui, project) {
                removed = Some(project.clone());
            }
        }
    });
    if let Some(project) = removed {
        form.remove_project(&project);
    }
    ui.add_space(8.0);

    ui.strong(format!("Questions ({})", form.questions().len()));
    if ui.button("Add question").clicked() {
        form.add_question();
    }
    ui.add_space(8.0);

    for id in form.question_ids() {
        form.update_question(id, |editor, projects| question::show(ui, editor, projects));
    }
}

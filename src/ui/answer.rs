// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Answer row.
//!
//! A text input with expand and delete buttons, followed by a collapsible
//! list of project checkboxes.

use crate::form::{AnswerAction, AnswerEditor};

/// Display one answer and return the change the author made, if any.
pub fn show(ui: &mut egui::Ui, editor: &mut AnswerEditor) -> Option<AnswerAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        let mut text = editor.text().to_owned();
        let response = ui.add(
            egui::TextEdit::singleline(&mut text)
                .hint_text("Type your answer here")
                .desired_width(280.0),
        );
        if response.changed() {
            AnswerAction::merge(&mut action, editor.set_text(text));
        }

        let (icon, hover) = if editor.is_expanded() {
            ("⏶", "Hide projects")
        } else {
            ("⏷", "Show projects")
        };
        if ui.small_button(icon).on_hover_text(hover).clicked() {
            editor.toggle_expanded();
        }

        let delete = egui::Button::new(egui::RichText::new("✖").color(egui::Color32::LIGHT_RED)).small();
        if ui.add(delete).on_hover_text("Delete answer").clicked() {
            AnswerAction::merge(&mut action, Some(editor.delete()));
        }
    });

    if editor.is_expanded() {
        ui.indent("projects", |ui| {
            if editor.selection().is_empty() {
                ui.label(egui::RichText::new("No projects yet").italics().weak());
                return;
            }

            let mut toggled = None;
            for (project, checked) in editor.selection() {
                let mut checked = *checked;
                if ui.checkbox(&mut checked, project.as_str()).changed() {
                    toggled = Some(project.clone());
                }
            }
            if let Some(project) = toggled {
                AnswerAction::merge(&mut action, editor.toggle_project(&project));
            }
        });
    }

    ui.add_space(8.0);
    action
}

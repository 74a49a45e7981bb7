// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Collapsible question panel with its answer list.

use super::answer;
use crate::form::{QuestionAction, QuestionEditor};
use crate::models::quiz::QUESTION_DEFAULT;

/// Display one question and return the change the author made, if any.
pub fn show(
    ui: &mut egui::Ui,
    editor: &mut QuestionEditor,
    projects: &[String],
) -> Option<QuestionAction> {
    let mut action = None;

    egui::CollapsingHeader::new(editor.title().to_owned())
        .id_source(("question", editor.id()))
        .show(ui, |ui| {
            ui.label("Question");
            let mut text = editor.text().to_owned();
            let response = ui.add(
                egui::TextEdit::singleline(&mut text)
                    .hint_text(QUESTION_DEFAULT)
                    .desired_width(f32::INFINITY),
            );
            if response.changed() {
                QuestionAction::merge(&mut action, editor.set_text(text));
            }
            ui.label(egui::RichText::new("Type your question here").weak());

            ui.add_space(8.0);
            ui.strong("Answers");
            for id in editor.answer_ids() {
                ui.push_id(id, |ui| {
                    QuestionAction::merge(&mut action, editor.update_answer(id, |a| answer::show(ui, a)));
                });
            }

            ui.horizontal(|ui| {
                if ui.button("Add answer").clicked() {
                    QuestionAction::merge(&mut action, editor.add_answer(projects));
                }
                let delete = egui::Button::new(
                    egui::RichText::new("Delete question").color(egui::Color32::LIGHT_RED),
                );
                if ui.add(delete).clicked() {
                    QuestionAction::merge(&mut action, Some(editor.delete()));
                }
            });
        });

    action
}

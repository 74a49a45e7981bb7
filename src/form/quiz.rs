// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Top-level quiz form.
//!
//! The form owns the quiz and the field store it was mounted on. After every
//! operation each of the three fields is compared with the value last known
//! to the store and written through in full if it differs. Mounting records
//! the loaded values as known, so a freshly mounted form writes nothing.
//!
//! Stored values are read leniently: a question, answer or project that
//! cannot be read is skipped on its own and everything else is kept.

use super::ids::IdAllocator;
use super::question::{QuestionAction, QuestionEditor};
use crate::models::quiz::{decode_entries, decode_strings, ItemId, Question, Quiz};
use crate::store::{Field, FieldStore};
use serde_json::Value;
use std::collections::BTreeMap;

pub struct QuizForm<S: FieldStore> {
    store: S,
    quiz: Quiz,
    editors: BTreeMap<ItemId, QuestionEditor>,
    question_ids: IdAllocator,
    /// Text typed into the project input, not yet committed.
    project_input: String,
    /// Value of each field as last read from or written to the store.
    synced: BTreeMap<Field, Value>,
}

/// Read the stored title; anything but text reads as empty.
fn read_title<S: FieldStore>(store: &S) -> String {
    match store.get_value(Field::Title) {
        Some(Value::String(title)) => title,
        None | Some(Value::Null) => String::new(),
        Some(other) => {
            log::warn!("Ignoring malformed value of field {}: {}", Field::Title, other);
            String::new()
        }
    }
}

impl<S: FieldStore> QuizForm<S> {
    pub fn mount(store: S) -> Self {
        let quiz = Quiz {
            title: read_title(&store),
            projects: store
                .get_value(Field::Projects)
                .map(decode_strings)
                .unwrap_or_default(),
            questions: store
                .get_value(Field::Questions)
                .map(decode_entries)
                .unwrap_or_default(),
        };

        let editors = quiz
            .questions
            .iter()
            .map(|(&id, question)| (id, QuestionEditor::new(id, question, &quiz.projects)))
            .collect();
        let question_ids = IdAllocator::seeded(quiz.questions.keys().copied());

        log::info!(
            "Mounted quiz form: {} projects, {} questions",
            quiz.projects.len(),
            quiz.questions.len()
        );

        let mut form = Self {
            store,
            quiz,
            editors,
            question_ids,
            project_input: String::new(),
            synced: BTreeMap::new(),
        };
        for field in Field::ALL {
            if let Some(value) = form.encode(field) {
                form.synced.insert(field, value);
            }
        }
        form
    }

    pub fn title(&self) -> &str {
        &self.quiz.title
    }

    pub fn projects(&self) -> &[String] {
        &self.quiz.projects
    }

    pub fn questions(&self) -> &BTreeMap<ItemId, Question> {
        &self.quiz.questions
    }

    pub fn project_input(&self) -> &str {
        &self.project_input
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn question_ids(&self) -> Vec<ItemId> {
        self.editors.keys().copied().collect()
    }

    #[cfg(test)]
    pub fn question_editor(&self, id: ItemId) -> Option<&QuestionEditor> {
        self.editors.get(&id)
    }

    fn encode(&self, field: Field) -> Option<Value> {
        let encoded = match field {
            Field::Title => Ok(Value::String(self.quiz.title.clone())),
            Field::Projects => serde_json::to_value(&self.quiz.projects),
            Field::Questions => serde_json::to_value(&self.quiz.questions),
        };
        match encoded {
            Ok(value) => Some(value),
            Err(e) => {
                log::error!("Failed to encode field {}: {}", field, e);
                None
            }
        }
    }

    /// Write every field whose value moved away from what the store holds.
    fn sync(&mut self) {
        for field in Field::ALL {
            let Some(value) = self.encode(field) else {
                continue;
            };
            if self.synced.get(&field) == Some(&value) {
                continue;
            }
            log::debug!("Writing field {}", field);
            self.store.set_value(field, value.clone());
            self.synced.insert(field, value);
        }
    }

    pub fn set_title(&mut self, title: String) {
        self.quiz.title = title;
        self.sync();
    }

    pub fn set_project_input(&mut self, input: String) {
        self.project_input = input;
    }

    /// Commit the project input, as when the author presses Enter.
    pub fn commit_project_input(&mut self) {
        let name = std::mem::take(&mut self.project_input);
        self.add_project(name);
    }

    pub fn add_project(&mut self, name: String) {
        self.quiz.projects.push(name);
        self.sync();
    }

    /// Remove the first project called `name`; later duplicates stay.
    ///
    /// Answers that selected the project keep it in their stored list.
    pub fn remove_project(&mut self, name: &str) {
        let Some(idx) = self.quiz.projects.iter().position(|p| p == name) else {
            log::debug!("No project {:?} to remove", name);
            return;
        };
        self.quiz.projects.remove(idx);
        self.sync();
    }

    /// Add a default question and return its id, or `None` once every id
    /// has been used.
    pub fn add_question(&mut self) -> Option<ItemId> {
        let Some(id) = self.question_ids.next_id() else {
            log::warn!("No question ids left");
            return None;
        };
        let question = Question::default();
        self.editors
            .insert(id, QuestionEditor::new(id, &question, &self.quiz.projects));
        self.quiz.questions.insert(id, question);
        log::info!("Added question {}, total: {}", id, self.quiz.questions.len());
        self.sync();
        Some(id)
    }

    pub fn delete_question(&mut self, id: ItemId) {
        self.editors.remove(&id);
        if self.quiz.questions.remove(&id).is_none() {
            log::debug!("No question {} to delete", id);
            return;
        }
        log::info!("Deleted question {}, total: {}", id, self.quiz.questions.len());
        self.sync();
    }

    /// Replace the question at `id` in full. Ids that are no longer present
    /// are ignored.
    pub fn edit_question(&mut self, id: ItemId, question: Question) {
        let Some(slot) = self.quiz.questions.get_mut(&id) else {
            log::debug!("No question {} to edit", id);
            return;
        };
        *slot = question.clone();
        if let Some(editor) = self.editors.get_mut(&id) {
            editor.receive(question, &self.quiz.projects);
        }
        self.sync();
    }

    pub fn apply(&mut self, action: QuestionAction) {
        match action {
            QuestionAction::Edit(id, question) => self.edit_question(id, question),
            QuestionAction::Delete(id) => self.delete_question(id),
        }
    }

    /// Run `f` against the editor of question `id`, handing it the current
    /// project list, and apply what it asks for.
    pub fn update_question<F>(&mut self, id: ItemId, f: F)
    where
        F: FnOnce(&mut QuestionEditor, &[String]) -> Option<QuestionAction>,
    {
        let Some(editor) = self.editors.get_mut(&id) else {
            return;
        };
        if let Some(action) = f(editor, &self.quiz.projects) {
            self.apply(action);
        }
    }
}

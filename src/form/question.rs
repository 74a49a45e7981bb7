// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Editor state for a single question and its answers.
//!
//! The editor keeps its own copy of the question text and answer map. Any
//! change to either is reported to the quiz as a complete snapshot of both,
//! always taken from the editor's current state.

use super::answer::{AnswerAction, AnswerEditor};
use super::ids::IdAllocator;
use crate::models::quiz::{Answer, ItemId, Question};
use std::collections::BTreeMap;

/// Change requested by a question editor, applied by the quiz form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionAction {
    Edit(ItemId, Question),
    Delete(ItemId),
}

impl QuestionAction {
    /// Fold `action` into the request already collected this frame, with
    /// the same rules as [`AnswerAction::merge`].
    pub fn merge(slot: &mut Option<QuestionAction>, action: Option<QuestionAction>) {
        if matches!(slot, Some(QuestionAction::Delete(_))) {
            return;
        }
        if let Some(action) = action {
            *slot = Some(action);
        }
    }
}

#[derive(Debug, Clone)]
pub struct QuestionEditor {
    id: ItemId,
    /// Question as last received from the quiz.
    question: Question,
    text: String,
    answers: BTreeMap<ItemId, Answer>,
    editors: BTreeMap<ItemId, AnswerEditor>,
    answer_ids: IdAllocator,
}

impl QuestionEditor {
    pub fn new(id: ItemId, question: &Question, projects: &[String]) -> Self {
        let editors = question
            .answers
            .iter()
            .map(|(&answer_id, answer)| (answer_id, AnswerEditor::new(answer_id, answer, projects)))
            .collect();

        Self {
            id,
            question: question.clone(),
            text: question.text.clone(),
            answers: question.answers.clone(),
            editors,
            answer_ids: IdAllocator::seeded(question.answers.keys().copied()),
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Question text as last committed to the quiz.
    pub fn title(&self) -> &str {
        &self.question.text
    }

    #[cfg(test)]
    pub fn answers(&self) -> &BTreeMap<ItemId, Answer> {
        &self.answers
    }

    pub fn answer_ids(&self) -> Vec<ItemId> {
        self.editors.keys().copied().collect()
    }

    /// Take in the question the quiz now holds for this id.
    ///
    /// Normally this is the editor's own last snapshot. When the quiz was
    /// handed a different question, the local text and answers follow it and
    /// editors are rebuilt for every answer that changed.
    pub fn receive(&mut self, question: Question, projects: &[String]) {
        self.text = question.text.clone();
        if question.answers != self.answers {
            let mut editors = BTreeMap::new();
            for (&id, answer) in &question.answers {
                self.answer_ids.observe(id);
                let editor = match self.editors.remove(&id) {
                    Some(editor) if self.answers.get(&id) == Some(answer) => editor,
                    _ => AnswerEditor::new(id, answer, projects),
                };
                editors.insert(id, editor);
            }
            self.editors = editors;
            self.answers = question.answers.clone();
        }
        self.question = question;
    }

    fn snapshot(&self) -> QuestionAction {
        QuestionAction::Edit(
            self.id,
            Question {
                text: self.text.clone(),
                answers: self.answers.clone(),
            },
        )
    }

    pub fn set_text(&mut self, text: String) -> Option<QuestionAction> {
        if text == self.text {
            return None;
        }
        self.text = text;
        if self.text == self.question.text {
            return None;
        }
        Some(self.snapshot())
    }

    /// Add an empty answer. `projects` is the quiz's current project list,
    /// used to build the new answer's checkboxes.
    pub fn add_answer(&mut self, projects: &[String]) -> Option<QuestionAction> {
        let Some(id) = self.answer_ids.next_id() else {
            log::warn!("Question {}: no answer ids left", self.id);
            return None;
        };
        let answer = Answer::default();
        self.editors
            .insert(id, AnswerEditor::new(id, &answer, projects));
        self.answers.insert(id, answer);
        Some(self.snapshot())
    }

    pub fn delete_answer(&mut self, id: ItemId) -> Option<QuestionAction> {
        self.editors.remove(&id);
        if self.answers.remove(&id).is_none() {
            log::debug!("Question {}: no answer {} to delete", self.id, id);
            return None;
        }
        Some(self.snapshot())
    }

    /// Replace the answer at `id` in full. Ids that are no longer present
    /// are ignored so a late edit cannot bring a deleted answer back.
    pub fn edit_answer(&mut self, id: ItemId, answer: Answer) -> Option<QuestionAction> {
        let Some(slot) = self.answers.get_mut(&id) else {
            log::debug!("Question {}: no answer {} to edit", self.id, id);
            return None;
        };
        if *slot == answer {
            return None;
        }
        *slot = answer.clone();
        if let Some(editor) = self.editors.get_mut(&id) {
            editor.receive(answer);
        }
        Some(self.snapshot())
    }

    pub fn apply(&mut self, action: AnswerAction) -> Option<QuestionAction> {
        match action {
            AnswerAction::Edit(id, answer) => self.edit_answer(id, answer),
            AnswerAction::Delete(id) => self.delete_answer(id),
        }
    }

    /// Run `f` against the editor of answer `id` and apply what it asks for.
    pub fn update_answer<F>(&mut self, id: ItemId, f: F) -> Option<QuestionAction>
    where
        F: FnOnce(&mut AnswerEditor) -> Option<AnswerAction>,
    {
        let action = f(self.editors.get_mut(&id)?)?;
        self.apply(action)
    }

    pub fn delete(&self) -> QuestionAction {
        QuestionAction::Delete(self.id)
    }
}

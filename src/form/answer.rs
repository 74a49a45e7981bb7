// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Editor state for a single answer.
//!
//! The project checkboxes are derived once, when the editor is built, from
//! the quiz's project list and the answer's stored projects. Every outward
//! edit reports the project list from those checkboxes, so text edits and
//! checkbox edits can never disagree about which projects are selected.
//!
//! Projects stored on the answer that are no longer part of the quiz are
//! kept as they are and reported after the checked ones.

use crate::models::quiz::{Answer, ItemId};

/// Change requested by an answer editor, applied by its question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerAction {
    Edit(ItemId, Answer),
    Delete(ItemId),
}

impl AnswerAction {
    /// Fold `action` into the request already collected this frame. Every
    /// edit is a full snapshot, so a later edit replaces an earlier one; a
    /// delete wins over any edit.
    pub fn merge(slot: &mut Option<AnswerAction>, action: Option<AnswerAction>) {
        if matches!(slot, Some(AnswerAction::Delete(_))) {
            return;
        }
        if let Some(action) = action {
            *slot = Some(action);
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnswerEditor {
    id: ItemId,
    /// Answer as last received from the question.
    answer: Answer,
    text: String,
    /// One checkbox per known project, in quiz order.
    selected: Vec<(String, bool)>,
    /// Stored projects the quiz no longer lists.
    dangling: Vec<String>,
    expanded: bool,
}

impl AnswerEditor {
    pub fn new(id: ItemId, answer: &Answer, projects: &[String]) -> Self {
        let mut selected: Vec<(String, bool)> = Vec::with_capacity(projects.len());
        for project in projects {
            if selected.iter().any(|(p, _)| p == project) {
                continue;
            }
            let checked = answer.projects.contains(project);
            selected.push((project.clone(), checked));
        }

        let mut dangling = Vec::new();
        for project in &answer.projects {
            if !projects.contains(project) && !dangling.contains(project) {
                dangling.push(project.clone());
            }
        }

        Self {
            id,
            answer: answer.clone(),
            text: answer.text.clone(),
            selected,
            dangling,
            expanded: true,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Checkbox state for each known project.
    pub fn selection(&self) -> &[(String, bool)] {
        &self.selected
    }

    #[cfg(test)]
    pub fn is_selected(&self, project: &str) -> bool {
        self.selected
            .iter()
            .any(|(p, checked)| p == project && *checked)
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Take in the answer the question now holds for this id.
    pub fn receive(&mut self, answer: Answer) {
        self.answer = answer;
    }

    /// Projects to report upward: checked ones in quiz order, then dangling.
    pub fn selected_projects(&self) -> Vec<String> {
        self.selected
            .iter()
            .filter(|(_, checked)| *checked)
            .map(|(p, _)| p.clone())
            .chain(self.dangling.iter().cloned())
            .collect()
    }

    fn snapshot(&self) -> Answer {
        Answer {
            text: self.text.clone(),
            projects: self.selected_projects(),
        }
    }

    pub fn set_text(&mut self, text: String) -> Option<AnswerAction> {
        if text == self.text {
            return None;
        }
        self.text = text;
        if self.text == self.answer.text {
            return None;
        }
        Some(AnswerAction::Edit(self.id, self.snapshot()))
    }

    /// Flip the checkbox for `project`. Unknown projects are ignored.
    pub fn toggle_project(&mut self, project: &str) -> Option<AnswerAction> {
        let (_, checked) = self.selected.iter_mut().find(|(p, _)| p == project)?;
        *checked = !*checked;
        Some(AnswerAction::Edit(self.id, self.snapshot()))
    }

    pub fn delete(&self) -> AnswerAction {
        AnswerAction::Delete(self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projects(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_selection_derived_from_stored_projects() {
        let answer = Answer::new("", projects(&["B"]));
        let editor = AnswerEditor::new(1, &answer, &projects(&["A", "B"]));

        assert!(!editor.is_selected("A"));
        assert!(editor.is_selected("B"));
        assert!(editor.is_expanded());
    }

    #[test]
    fn test_toggle_reports_full_selection() {
        let answer = Answer::new("", projects(&["B"]));
        let mut editor = AnswerEditor::new(1, &answer, &projects(&["A", "B"]));

        let Some(AnswerAction::Edit(id, edited)) = editor.toggle_project("A") else {
            panic!("expected an edit");
        };
        assert_eq!(id, 1);
        assert!(edited.projects.contains(&"A".to_string()));
        assert!(edited.projects.contains(&"B".to_string()));
        assert_eq!(edited.projects.len(), 2);
    }

    #[test]
    fn test_toggle_unknown_project_is_ignored() {
        let mut editor = AnswerEditor::new(1, &Answer::default(), &projects(&["A"]));
        assert_eq!(editor.toggle_project("Z"), None);
    }

    #[test]
    fn test_text_edit_uses_local_selection() {
        let answer = Answer::new("old", vec![]);
        let mut editor = AnswerEditor::new(2, &answer, &projects(&["A"]));
        editor.toggle_project("A");

        let action = editor.set_text("new".to_string());
        assert_eq!(
            action,
            Some(AnswerAction::Edit(2, Answer::new("new", projects(&["A"]))))
        );
    }

    #[test]
    fn test_text_back_to_received_value_is_silent() {
        let answer = Answer::new("same", vec![]);
        let mut editor = AnswerEditor::new(1, &answer, &[]);

        assert!(editor.set_text("other".to_string()).is_some());
        assert_eq!(editor.set_text("other".to_string()), None);
        assert_eq!(editor.set_text("same".to_string()), None);
        assert_eq!(editor.text(), "same");
    }

    #[test]
    fn test_received_answer_moves_comparison_point() {
        let mut editor = AnswerEditor::new(1, &Answer::default(), &[]);
        let Some(AnswerAction::Edit(_, edited)) = editor.set_text("x".to_string()) else {
            panic!("expected an edit");
        };
        editor.receive(edited);

        assert!(editor.set_text(String::new()).is_some());
    }

    #[test]
    fn test_duplicate_projects_get_one_checkbox() {
        let editor = AnswerEditor::new(1, &Answer::default(), &projects(&["A", "B", "A"]));
        let names: Vec<_> = editor.selection().iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[test]
    fn test_dangling_projects_are_kept() {
        let answer = Answer::new("", projects(&["Gone", "B"]));
        let mut editor = AnswerEditor::new(1, &answer, &projects(&["A", "B"]));

        let Some(AnswerAction::Edit(_, edited)) = editor.toggle_project("A") else {
            panic!("expected an edit");
        };
        assert_eq!(edited.projects, projects(&["A", "B", "Gone"]));
    }

    #[test]
    fn test_delete_and_collapse() {
        let mut editor = AnswerEditor::new(5, &Answer::default(), &[]);
        editor.toggle_expanded();
        assert!(!editor.is_expanded());
        assert_eq!(editor.delete(), AnswerAction::Delete(5));
    }

    #[test]
    fn test_merge_delete_wins() {
        let edit = AnswerAction::Edit(1, Answer::new("x", vec![]));

        let mut slot = None;
        AnswerAction::merge(&mut slot, Some(edit.clone()));
        AnswerAction::merge(&mut slot, Some(AnswerAction::Delete(1)));
        assert_eq!(slot, Some(AnswerAction::Delete(1)));

        AnswerAction::merge(&mut slot, Some(edit));
        assert_eq!(slot, Some(AnswerAction::Delete(1)));
    }

    #[test]
    fn test_merge_later_edit_replaces_earlier() {
        let mut slot = None;
        AnswerAction::merge(&mut slot, Some(AnswerAction::Edit(1, Answer::new("a", vec![]))));
        AnswerAction::merge(&mut slot, Some(AnswerAction::Edit(1, Answer::new("ab", vec![]))));
        AnswerAction::merge(&mut slot, None);
        assert_eq!(slot, Some(AnswerAction::Edit(1, Answer::new("ab", vec![]))));
    }
}

// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Editing state for the quiz form.
//!
//! Three levels of editors mirror the quiz: one [`QuizForm`], a
//! [`QuestionEditor`] per question and an [`AnswerEditor`] per answer.
//! Parents hand data down; children hand back an action describing the
//! change they want, which the parent applies to its own copy.

pub mod answer;
pub mod ids;
pub mod question;
pub mod quiz;

pub use answer::{AnswerAction, AnswerEditor};
pub use question::{QuestionAction, QuestionEditor};
pub use quiz::QuizForm;

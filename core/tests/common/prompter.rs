// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! A prompter that answers questions from a script and records every dialog.

use std::collections::VecDeque;

use salonbook_core::{Notice, Prompter, Question};

/// Answers questions in order, falling back to a default answer once the script runs out.
#[derive(Debug)]
pub struct ScriptedPrompter {
    answers: VecDeque<bool>,
    default_answer: bool,

    /// Questions asked so far.
    pub questions: Vec<Question>,

    /// Notices shown so far.
    pub notices: Vec<Notice>,
}

impl ScriptedPrompter {
    /// Agrees to every question.
    #[must_use]
    pub fn yes() -> Self {
        Self::with_default(true)
    }

    /// Declines every question.
    #[must_use]
    pub fn no() -> Self {
        Self::with_default(false)
    }

    /// Answers with the given script, then declines.
    #[must_use]
    #[allow(dead_code)]
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            ..Self::no()
        }
    }

    fn with_default(default_answer: bool) -> Self {
        Self {
            answers: VecDeque::new(),
            default_answer,
            questions: Vec::new(),
            notices: Vec::new(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&mut self, question: &Question) -> bool {
        self.questions.push(question.clone());
        self.answers.pop_front().unwrap_or(self.default_answer)
    }

    fn acknowledge(&mut self, notice: &Notice) {
        self.notices.push(notice.clone());
    }
}

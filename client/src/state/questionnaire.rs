//! Questionnaire pagination, answers, and submission lifecycle.
//!
//! DESIGN
//! ======
//! Questions are fetched one at a time. Each fetch is issued as a
//! [`LoadTicket`] carrying a sequence number; only the response for the
//! newest ticket may replace the view, so rapid prev/next clicks never show
//! a stale question. Submission is a small state machine so a failed POST
//! leaves the page usable with a retry control.

#[cfg(test)]
#[path = "questionnaire_test.rs"]
mod questionnaire_test;

use crate::consts::MATCHING_PATH;
use crate::error::ClientError;
use crate::net::types::Question;
use crate::state::answers::AnswerSet;

/// What the question area currently shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuestionView {
    Loading,
    Ready(Question),
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Failed(String),
    /// Answers stored; the browser is navigating away.
    Done,
}

/// An issued question fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    pub index: usize,
    pub seq: u64,
}

/// Side effect requested by a navigation click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavAction {
    Load(LoadTicket),
    Submit(AnswerSet),
    None,
}

#[derive(Clone, Debug)]
pub struct QuestionnaireState {
    total: usize,
    current: usize,
    answers: AnswerSet,
    view: QuestionView,
    latest_seq: u64,
    submit: SubmitStatus,
}

impl QuestionnaireState {
    /// `total` is clamped to at least one question.
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            total: total.max(1),
            current: 0,
            answers: AnswerSet::new(),
            view: QuestionView::Loading,
            latest_seq: 0,
            submit: SubmitStatus::Idle,
        }
    }

    /// Ticket for the first question.
    pub fn start(&mut self) -> LoadTicket {
        self.begin_load()
    }

    fn begin_load(&mut self) -> LoadTicket {
        self.latest_seq += 1;
        self.view = QuestionView::Loading;
        LoadTicket { index: self.current, seq: self.latest_seq }
    }

    /// Apply a fetch result. Returns `false` when the ticket is stale and the
    /// result was discarded.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Question, ClientError>) -> bool {
        if ticket.seq != self.latest_seq {
            return false;
        }
        self.view = match result {
            Ok(question) => QuestionView::Ready(question),
            Err(err) => QuestionView::Failed(err.to_string()),
        };
        true
    }

    /// Re-issue the fetch for the current question.
    pub fn retry_load(&mut self) -> LoadTicket {
        self.begin_load()
    }

    /// Toggle `option` on the current question. Returns whether it is now selected.
    pub fn toggle(&mut self, option: &str) -> bool {
        self.answers.toggle(self.current, option)
    }

    pub fn next(&mut self) -> NavAction {
        if self.is_busy() {
            return NavAction::None;
        }
        if self.current + 1 < self.total {
            self.current += 1;
            return NavAction::Load(self.begin_load());
        }
        self.submit = SubmitStatus::Submitting;
        NavAction::Submit(self.answers.clone())
    }

    pub fn prev(&mut self) -> NavAction {
        if self.is_busy() || self.current == 0 {
            return NavAction::None;
        }
        self.current -= 1;
        self.submit = SubmitStatus::Idle;
        NavAction::Load(self.begin_load())
    }

    /// Apply the submission result. Returns the path to navigate to on success.
    pub fn finish_submit(&mut self, result: Result<(), ClientError>) -> Option<&'static str> {
        match result {
            Ok(()) => {
                self.submit = SubmitStatus::Done;
                Some(MATCHING_PATH)
            }
            Err(err) => {
                self.submit = SubmitStatus::Failed(err.to_string());
                None
            }
        }
    }

    fn is_busy(&self) -> bool {
        matches!(self.submit, SubmitStatus::Submitting | SubmitStatus::Done)
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    #[must_use]
    pub fn view(&self) -> &QuestionView {
        &self.view
    }

    #[must_use]
    pub fn submit_status(&self) -> &SubmitStatus {
        &self.submit
    }

    #[must_use]
    pub fn is_selected(&self, option: &str) -> bool {
        self.answers.is_selected(self.current, option)
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current + 1 == self.total
    }

    #[must_use]
    pub fn prev_visible(&self) -> bool {
        self.current > 0
    }

    #[must_use]
    pub fn next_label(&self) -> &'static str {
        match self.submit {
            SubmitStatus::Submitting | SubmitStatus::Done => "Submitting...",
            SubmitStatus::Failed(_) => "Retry Submit",
            SubmitStatus::Idle if self.is_last() => "Submit & Find Match",
            SubmitStatus::Idle => "→",
        }
    }

    #[must_use]
    pub fn next_enabled(&self) -> bool {
        !self.is_busy()
    }

    /// One-based progress label, e.g. `Question 2 of 10`.
    #[must_use]
    pub fn progress_label(&self) -> String {
        format!("Question {} of {}", self.current + 1, self.total)
    }
}

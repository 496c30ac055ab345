use crate::model::{Phase, Question, QuizBank, QuizSettings};
use crate::storage::ScoreStore;
use crate::timer::{Scheduler, TimerHandle};

// Submodules
pub mod actions;
pub mod queries;

pub use queries::percent_score;

/// Mutable state of the game being played.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuizSession {
    pub(crate) current_index: usize,
    pub(crate) correct_count: usize,
    pub(crate) remaining_seconds: u32,
    pub(crate) active_timer: Option<TimerHandle>, // None = no countdown running
}

impl QuizSession {
    fn reset(&mut self, seconds: u32) {
        self.current_index = 0;
        self.correct_count = 0;
        self.remaining_seconds = seconds;
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn active_timer(&self) -> Option<TimerHandle> {
        self.active_timer
    }
}

/// Drives a quiz from the start screen through every question and back.
///
/// The engine is the only owner of the scheduler: every countdown it starts
/// is cancelled by the engine itself before another one is created.
pub struct QuizEngine<S: Scheduler, K: ScoreStore> {
    questions: Vec<Question>,
    settings: QuizSettings,
    session: QuizSession,
    phase: Phase,
    scheduler: S,
    store: K,
}

impl<S: Scheduler, K: ScoreStore> QuizEngine<S, K> {
    pub fn new(bank: QuizBank, scheduler: S, store: K) -> Self {
        let session = QuizSession {
            remaining_seconds: bank.settings.seconds_per_question,
            ..QuizSession::default()
        };
        Self {
            questions: bank.questions,
            settings: bank.settings,
            session,
            phase: Phase::Start,
            scheduler,
            store,
        }
    }
}

#[cfg(test)]
mod tests;

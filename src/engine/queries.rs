use super::*;
use crate::model::Action;
use crate::view_models::{ButtonView, QuestionView, StartView, View};
use std::time::Duration;

/// Rounded percentage of correct answers; an empty quiz scores 0.
pub fn percent_score(correct: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = (correct.min(total) as f64 / total as f64 * 100.0).round();
    pct as u8
}

impl<S: Scheduler, K: ScoreStore> QuizEngine<S, K> {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn store(&self) -> &K {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut K {
        &mut self.store
    }

    pub fn previous_score(&self) -> Option<String> {
        self.store.get(&self.settings.score_key)
    }

    /// When the live countdown fires next, if one is running.
    pub fn next_tick_at(&self) -> Option<Duration> {
        self.scheduler.next_due()
    }

    /// Describes the current screen. The UI draws it from scratch every time.
    pub fn view(&self) -> View {
        match self.phase {
            Phase::Start => View::Start(self.start_view()),
            Phase::Question(idx) => {
                let Some(q) = self.questions.get(idx) else {
                    return View::Start(self.start_view());
                };
                View::Question(QuestionView {
                    text: q.text.clone(),
                    options: q
                        .options
                        .iter()
                        .map(|o| ButtonView {
                            label: o.clone(),
                            action: Action::Select(o.clone()),
                        })
                        .collect(),
                    remaining_seconds: self.session.remaining_seconds,
                })
            }
        }
    }

    fn start_view(&self) -> StartView {
        StartView {
            previous_score_label: self
                .previous_score()
                .map(|s| format!("Previous Score: {s}%")),
            start: ButtonView {
                label: "Start Quiz!".to_string(),
                action: Action::Begin,
            },
        }
    }
}

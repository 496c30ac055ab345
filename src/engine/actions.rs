use super::*;
use crate::model::Action;
use std::time::Duration;

impl<S: Scheduler, K: ScoreStore> QuizEngine<S, K> {
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Begin => self.begin(),
            Action::Select(option) => self.select(&option),
        }
    }

    /// Start screen -> first question, with a fresh session.
    pub fn begin(&mut self) {
        if let Phase::Question(idx) = self.phase {
            log::debug!("begin ignored, question {idx} is on screen");
            return;
        }
        self.session.reset(self.settings.seconds_per_question);
        log::info!("quiz started ({} questions)", self.questions.len());
        self.show_question();
    }

    /// Resolves the current question with the clicked option.
    pub fn select(&mut self, option: &str) {
        let Phase::Question(idx) = self.phase else {
            log::debug!("option {option:?} clicked outside a question, ignored");
            return;
        };

        self.cancel_countdown();

        let correct = self
            .questions
            .get(idx)
            .is_some_and(|q| q.is_correct(option));
        if correct {
            self.session.correct_count += 1;
        }
        log::debug!("question {idx} answered, correct: {correct}");

        self.session.current_index += 1;
        self.show_question();
    }

    /// One countdown tick. Ticks from a handle that is no longer live are dropped.
    pub fn on_tick(&mut self, handle: TimerHandle) {
        if self.session.active_timer != Some(handle) {
            log::trace!("stale tick {handle:?} ignored");
            return;
        }

        self.session.remaining_seconds = self.session.remaining_seconds.saturating_sub(1);
        if self.session.remaining_seconds > 0 {
            return;
        }

        // timed out: never counts as correct
        self.cancel_countdown();
        log::debug!("question {} timed out", self.session.current_index);
        self.session.current_index += 1;
        self.show_question();
    }

    /// Feeds the clock into the scheduler and handles every tick that fell due.
    pub fn poll_timers(&mut self, now: Duration) {
        for handle in self.scheduler.due(now) {
            self.on_tick(handle);
        }
    }

    fn show_question(&mut self) {
        if self.session.current_index >= self.questions.len() {
            self.end_game();
            return;
        }
        self.session.remaining_seconds = self.settings.seconds_per_question;
        self.phase = Phase::Question(self.session.current_index);
        self.start_countdown();
    }

    fn start_countdown(&mut self) {
        self.cancel_countdown();
        let every = Duration::from_millis(self.settings.tick_interval_ms);
        self.session.active_timer = Some(self.scheduler.schedule_repeating(every));
    }

    fn cancel_countdown(&mut self) {
        if let Some(handle) = self.session.active_timer.take() {
            self.scheduler.cancel(handle);
        }
    }

    fn end_game(&mut self) {
        self.cancel_countdown();

        let score = percent_score(self.session.correct_count, self.questions.len());
        self.store.set(&self.settings.score_key, score.to_string());
        log::info!(
            "quiz finished: {}/{} correct, {score}%",
            self.session.correct_count,
            self.questions.len()
        );

        self.phase = Phase::Start;
    }
}

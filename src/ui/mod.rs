pub mod layout;
pub mod views;

use crate::app::QuizApp;
use crate::view_models::View;
use eframe::{App, Frame};
use egui::Context;
use std::time::Duration;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        // Ticks first, so the frame shows the state after any timeout
        let now = Duration::from_secs_f64(ctx.input(|i| i.time));
        self.engine.poll_timers(now);

        // One view per phase, each redraws its whole panel
        let clicked = match self.engine.view() {
            View::Start(view) => views::start::ui_start(ctx, &view),
            View::Question(view) => views::question::ui_question(ctx, &view),
        };

        if let Some(action) = clicked {
            self.engine.dispatch(action);
            ctx.request_repaint();
        }

        // A session can end from a click or from a timeout
        if let Some(storage) = frame.storage_mut() {
            self.persist(storage);
        }

        // Keep frames coming while a countdown runs, even without input
        if let Some(at) = self.engine.next_tick_at() {
            ctx.request_repaint_after(at.saturating_sub(now));
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.persist(storage);
    }
}

use crate::model::Action;
use crate::ui::layout::{centered_panel, sized_button};
use crate::view_models::QuestionView;
use egui::{Context, RichText};

pub fn ui_question(ctx: &Context, view: &QuestionView) -> Option<Action> {
    let mut clicked = None;

    centered_panel(ctx, 220.0, 640.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(view.text.as_str()).heading());
            ui.add_space(14.0);

            // Option buttons, in bank order
            let button_width = ((ui.available_width() - 24.0) / 2.0).max(120.0);
            ui.horizontal_wrapped(|ui| {
                for option in &view.options {
                    if sized_button(ui, &option.label, button_width) {
                        clicked = Some(option.action.clone());
                    }
                }
            });

            ui.add_space(14.0);
            ui.label(RichText::new(view.remaining_seconds.to_string()).monospace().size(22.0));
        });
    });

    clicked
}

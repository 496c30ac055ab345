use crate::model::Action;
use crate::ui::layout::{centered_panel, sized_button};
use crate::view_models::StartView;
use egui::{Context, RichText};

pub fn ui_start(ctx: &Context, view: &StartView) -> Option<Action> {
    let mut clicked = None;

    centered_panel(ctx, 140.0, 480.0, |ui| {
        ui.vertical_centered(|ui| {
            // Only present once a session has been completed
            if let Some(label) = &view.previous_score_label {
                ui.label(RichText::new(label.as_str()).size(18.0));
                ui.add_space(12.0);
            }

            if sized_button(ui, &view.start.label, 220.0) {
                clicked = Some(view.start.action.clone());
            }
        });
    });

    clicked
}

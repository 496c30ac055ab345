use egui::{Button, CentralPanel, Context, Frame, Ui};

pub const BUTTON_HEIGHT: f32 = 36.0;

/// Panel centered both vertically and horizontally, with a maximum content
/// width and an inner block `inner`.
pub fn centered_panel(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        // vertical space to center the frame
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(16, 16))
            .show(ui, |ui| {
                let w = ui.available_width().min(max_width);
                ui.set_width(w);
                inner(ui);
            });
        ui.add_space(extra);
    });
}

/// Fixed-size button, returns whether it was clicked this frame.
pub fn sized_button(ui: &mut Ui, label: &str, width: f32) -> bool {
    ui.add_sized([width, BUTTON_HEIGHT], Button::new(label))
        .clicked()
}

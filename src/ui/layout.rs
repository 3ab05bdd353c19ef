use crate::QuizApp;
use egui::{Button, CentralPanel, Context, Frame, RichText, Ui, Visuals};

/// Restart button, and the exam clock with its pause toggle.
pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if ui.button("🔄 Restart").clicked() {
                app.controller.reset();
            }

            if let Some(elapsed) = app.controller.elapsed_label() {
                ui.separator();
                ui.label(RichText::new(format!("⏱ Time spent: {elapsed}")).monospace());

                if app.controller.is_timer_running() {
                    let label = if app.controller.is_timer_paused() {
                        "▶ Resume"
                    } else {
                        "⏸ Pause"
                    };
                    if ui.button(label).clicked() {
                        app.controller.toggle_timer();
                    }
                }
            }
        });
    });
}

pub fn bottom_panel(ctx: &Context, dark_mode: &mut bool) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Dark mode").clicked() {
                *dark_mode = true;
            }
            if ui.button("☀ Light mode").clicked() {
                *dark_mode = false;
            }
        });
    });

    ctx.set_visuals(if *dark_mode {
        Visuals::dark()
    } else {
        Visuals::light()
    });
}

/// Panel centred both ways, content capped at `max_width`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
        ui.add_space(extra);
    });
}

/// Two equally sized buttons on one row; a missing label leaves its slot
/// empty. Returns (left clicked, right clicked).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: Option<&str>,
    right_label: Option<&str>,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        match left_label {
            Some(label) => {
                clicked_left = ui.add_sized([btn_w, 36.0], Button::new(label)).clicked();
            }
            None => ui.add_space(btn_w),
        }
        if let Some(label) = right_label {
            clicked_right = ui.add_sized([btn_w, 36.0], Button::new(label)).clicked();
        }
    });
    (clicked_left, clicked_right)
}

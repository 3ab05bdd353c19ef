use crate::QuizApp;
use crate::ui::presenter::NoticeKind;
use egui::{Align2, Color32, Context, RichText};

/// Dialog for warnings and the exam verdict.
pub fn ui_notice(app: &mut QuizApp, ctx: &Context) {
    let Some(notice) = app.controller.presenter().notice.clone() else {
        return;
    };

    let (icon, color) = match notice.kind {
        NoticeKind::Warning => ("⚠", Color32::from_rgb(230, 160, 30)),
        NoticeKind::Success => ("✔", Color32::from_rgb(40, 160, 70)),
        NoticeKind::Failure => ("✖", Color32::from_rgb(210, 50, 50)),
    };

    egui::Window::new(RichText::new(format!("{icon} {}", notice.title)).color(color))
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(&notice.text);
            ui.add_space(10.0);
            ui.vertical_centered(|ui| {
                if ui.button(notice.button).clicked() {
                    app.controller.presenter_mut().dismiss_notice();
                }
            });
        });
}

use crate::QuizApp;
use crate::model::QuizMode;
use crate::ui::helpers::big_list_button;
use crate::ui::layout::centered_panel;
use egui::{Context, RichText, TextEdit};

pub fn ui_setup(app: &mut QuizApp, ctx: &Context, bank_size: usize) {
    centered_panel(ctx, 320.0, 540.0, |ui| {
        let content_width = ui.available_width();

        ui.vertical_centered(|ui| {
            ui.heading("📝 Multiple-choice quiz");
            ui.add_space(12.0);
            ui.label(format!(
                "Total number of questions in the bank: {bank_size}"
            ));
            ui.add_space(18.0);

            let has_questions = bank_size > 0;
            let button_width = ((content_width - 40.0) / 2.0).clamp(120.0, 280.0);

            ui.horizontal(|ui| {
                ui.label(format!("Questions (1 - {bank_size}):"));
                ui.add(
                    TextEdit::singleline(&mut app.prefs.count_input)
                        .desired_width(60.0)
                        .hint_text("10"),
                );
            });
            ui.add_space(8.0);

            if big_list_button(ui, "✍ Practice", button_width, 40.0, has_questions) {
                let _ = app
                    .controller
                    .start_from_input(&app.prefs.count_input, QuizMode::Practice);
            }
            ui.add_space(5.0);

            let exam_label = format!(
                "⏱ Exam ({} questions)",
                app.controller.config().exam_size(bank_size)
            );
            if big_list_button(ui, &exam_label, button_width, 40.0, has_questions) {
                let _ = app.controller.start_from_input("", QuizMode::Exam);
            }

            if !has_questions {
                ui.add_space(16.0);
                ui.label(
                    RichText::new("No question could be loaded, check the logs.")
                        .color(egui::Color32::YELLOW)
                        .strong(),
                );
            }
        });
    });
}

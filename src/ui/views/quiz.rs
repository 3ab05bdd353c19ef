use crate::QuizApp;
use crate::model::QuizMode;
use crate::ui::helpers::option_radio;
use crate::ui::layout::two_button_row;
use crate::view_models::QuestionView;
use egui::{Align, CentralPanel, Context, RichText, ScrollArea};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context, view: &QuestionView) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);
        let total_height = 150.0 + 40.0 * view.options.len() as f32 + 48.0 + 48.0 + 24.0;
        let extra_space = (ui.available_height() - total_height).max(0.0) / 2.0;
        ui.add_space(extra_space / 4.0);

        ui.vertical_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(24, 20))
                .show(ui, |ui| {
                    ui.set_width(panel_width);

                    ui.heading(view.number_label());
                    ui.add_space(10.0);

                    ui.with_layout(egui::Layout::top_down(Align::Min), |ui| {
                        ScrollArea::vertical()
                            .max_height(150.0)
                            .show(ui, |ui| {
                                ui.label(
                                    RichText::new(format!(
                                        "Question {}:\n\n{}",
                                        view.index + 1,
                                        view.prompt
                                    ))
                                    .size(16.0),
                                );
                            });

                        ui.add_space(8.0);
                        for (i, option) in view.options.iter().enumerate() {
                            if option_radio(ui, option, !view.locked) {
                                let _ = app.controller.record_current_answer(i);
                            }
                            ui.add_space(4.0);
                        }
                    });

                    ui.add_space(12.0);
                    let (previous, next) = two_button_row(
                        ui,
                        panel_width,
                        view.has_previous.then_some("⬅ Previous"),
                        view.has_next.then_some("Next ➡"),
                    );
                    if previous {
                        app.controller.previous();
                    }
                    if next {
                        app.controller.next();
                    }

                    ui.add_space(8.0);
                    match view.mode {
                        QuizMode::Practice => {
                            if ui.button("✅ Correct").clicked() {
                                let _ = app.controller.grade();
                            }
                        }
                        // hidden once submitted, no second grading
                        QuizMode::Exam if !view.locked => {
                            if ui.button("🏁 Finish exam").clicked() {
                                let _ = app.controller.submit_exam();
                            }
                        }
                        QuizMode::Exam => {}
                    }

                    if let Some(result) = &app.controller.presenter().result {
                        ui.add_space(12.0);
                        ui.label(
                            RichText::new(format!("✅ {}", result.score_label()))
                                .heading()
                                .strong(),
                        );
                    }
                });
        });

        ui.add_space(extra_space);
    });
}

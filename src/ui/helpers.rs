// src/ui/helpers.rs
use crate::view_models::{OptionMark, OptionView};
use egui::{Button, Color32, RadioButton, RichText, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: &str, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// One answer as a radio button, coloured after a correction.
/// Returns true when the user picks it.
pub fn option_radio(ui: &mut Ui, option: &OptionView, enabled: bool) -> bool {
    let mut text = RichText::new(&option.text);
    if option.selected {
        text = text.strong();
    }
    text = match option.mark {
        Some(OptionMark::Correct) => text.color(Color32::from_rgb(40, 160, 70)),
        Some(OptionMark::Incorrect) => text.color(Color32::from_rgb(210, 50, 50)),
        None => text,
    };

    let response = ui.add_enabled(enabled, RadioButton::new(option.selected, text));
    match option.mark {
        Some(OptionMark::Correct) => response.on_hover_text("Correct answer").clicked(),
        Some(OptionMark::Incorrect) => response.on_hover_text("Your answer").clicked(),
        None => response.clicked(),
    }
}

mod helpers;
pub mod layout;
pub mod presenter;
pub mod views;

use crate::app::QuizController;
use crate::config::QuizConfig;
use crate::data::load_bank;
use crate::storage::{PlatformAnswerStore, platform_store};
use eframe::{APP_KEY, App, CreationContext, Frame, get_value, set_value};
use egui::Context;
use layout::{bottom_panel, top_panel};
use presenter::{EguiPresenter, Screen};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Setup-screen preferences kept between runs.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Preferences {
    pub count_input: String,
    pub dark_mode: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            count_input: "10".to_string(),
            dark_mode: true,
        }
    }
}

pub struct QuizApp {
    pub controller: QuizController<EguiPresenter, PlatformAnswerStore>,
    pub prefs: Preferences,
    last_frame_time: Option<f64>,
}

impl QuizApp {
    pub fn new(cc: &CreationContext<'_>) -> Self {
        let prefs = cc
            .storage
            .and_then(|storage| get_value::<Preferences>(storage, APP_KEY))
            .unwrap_or_default();
        Self::with_config(QuizConfig::from_env(), prefs)
    }

    pub fn with_config(config: QuizConfig, prefs: Preferences) -> Self {
        let bank = load_bank(config.bank_path.as_deref());
        let store = platform_store(&config);
        Self {
            controller: QuizController::new(bank, config, EguiPresenter::default(), store),
            prefs,
            last_frame_time: None,
        }
    }

    /// Feeds the frame-to-frame time to the exam clock.
    fn tick(&mut self, ctx: &Context) {
        let now = ctx.input(|i| i.time);
        if let Some(last) = self.last_frame_time.replace(now) {
            self.controller
                .tick(Duration::from_secs_f64((now - last).max(0.0)));
        }
        if self.controller.is_timer_running() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.tick(ctx);

        let screen = self.controller.presenter().screen.clone();
        if let Screen::Question(_) = screen {
            top_panel(self, ctx);
        }

        bottom_panel(ctx, &mut self.prefs.dark_mode);

        match &screen {
            Screen::Setup { bank_size } => views::setup::ui_setup(self, ctx, *bank_size),
            Screen::Question(view) => views::quiz::ui_quiz(self, ctx, view),
        }

        views::notice::ui_notice(self, ctx);
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, &self.prefs);
    }
}

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod presenter;
pub mod storage;
pub mod timer;
pub mod ui;
pub mod view_models;

pub use app::QuizController;
pub use ui::QuizApp;

use crate::config::QuizConfig;
use crate::data::QuestionBank;
use crate::error::QuizError;
use crate::presenter::Presenter;
use crate::storage::AnswerStore;

// Submodules
pub mod actions;
pub mod navigation;
pub mod queries;
pub mod resets;
pub mod session;

pub use session::QuizSession;


/// Owns the bank and the single active session, and drives the presenter
/// and the answer store. `session == None` is the setup state.
pub struct QuizController<P: Presenter, S: AnswerStore> {
    pub(crate) bank: QuestionBank,
    pub(crate) config: QuizConfig,
    pub(crate) session: Option<QuizSession>,
    pub(crate) presenter: P,
    pub(crate) store: S,
}

impl<P: Presenter, S: AnswerStore> QuizController<P, S> {
    pub fn new(bank: QuestionBank, config: QuizConfig, mut presenter: P, store: S) -> Self {
        presenter.show_setup(bank.len());
        Self {
            bank,
            config,
            session: None,
            presenter,
            store,
        }
    }

    /// Rejects `error` through the presenter and hands it back to the caller.
    pub(crate) fn warn<T>(&mut self, error: QuizError) -> Result<T, QuizError> {
        log::debug!("rejected: {error}");
        self.presenter.show_warning(&error);
        Err(error)
    }

    /// Best-effort write; failures only reach the log.
    pub(crate) fn persist_answers(&mut self) {
        let Some(session) = &self.session else {
            return;
        };
        if let Err(e) = self.store.save_answers(session.answers()) {
            log::warn!("{e}");
        }
    }

    pub(crate) fn render_current(&mut self) {
        if let Some(view) = self.session.as_ref().and_then(QuizSession::current_view) {
            self.presenter.render(&view);
        }
    }
}

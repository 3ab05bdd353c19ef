use super::*;

impl<P: Presenter, S: AnswerStore> QuizController<P, S> {
    /// Drops the session (answers, result, lock) and its timer, and goes
    /// back to the setup screen.
    pub fn reset(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.timer.reset();
            log::info!(
                "quiz reset after {} of {} answers",
                session.len() - session.unanswered_count(),
                session.len()
            );
        }
        self.presenter.show_setup(self.bank.len());
    }
}

use super::*;
use crate::model::QuizState;

impl<P: Presenter, S: AnswerStore> QuizController<P, S> {
    pub fn state(&self) -> QuizState {
        match &self.session {
            None => QuizState::Setup,
            Some(s) if s.is_locked() => QuizState::Graded,
            Some(_) => QuizState::InProgress,
        }
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn bank_size(&self) -> usize {
        self.bank.len()
    }

    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// `mm:ss` while an exam is on screen.
    pub fn elapsed_label(&self) -> Option<String> {
        self.session
            .as_ref()
            .filter(|s| s.mode() == crate::model::QuizMode::Exam)
            .map(|s| s.timer().label())
    }

    pub fn is_timer_paused(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.timer().is_paused())
    }

    /// Timer still counting (exam not yet submitted).
    pub fn is_timer_running(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.timer().is_running())
    }
}

use super::*;
use crate::model::{QuestionCount, QuizMode};
use crate::view_models::GradeReport;
use std::time::Duration;

impl<P: Presenter, S: AnswerStore> QuizController<P, S> {
    /// Starts a new session over the first `count` questions of the bank,
    /// discarding the previous one (timer included).
    pub fn start(&mut self, count: QuestionCount, mode: QuizMode) -> Result<(), QuizError> {
        let max = self.bank.len();
        if max == 0 {
            return self.warn(QuizError::EmptyBank);
        }

        let size = match count {
            QuestionCount::All if mode == QuizMode::Exam => self.config.exam_size(max),
            QuestionCount::All => max,
            QuestionCount::Exactly(n) if (1..=max).contains(&n) => n,
            QuestionCount::Exactly(_) => {
                return self.warn(QuizError::InvalidQuestionCount { max });
            }
        };

        self.session = Some(QuizSession::new(self.bank.take(size), mode));
        log::info!("started {mode} quiz with {size} of {max} questions");

        self.persist_answers();
        self.render_current();
        Ok(())
    }

    /// Setup form entry point. Exams always take every question, so `raw`
    /// is only read in practice mode.
    pub fn start_from_input(&mut self, raw: &str, mode: QuizMode) -> Result<(), QuizError> {
        let count = match mode {
            QuizMode::Exam => QuestionCount::All,
            QuizMode::Practice => match raw.trim().parse::<usize>() {
                Ok(n) => QuestionCount::Exactly(n),
                Err(_) => {
                    let max = self.bank.len();
                    return self.warn(QuizError::InvalidQuestionCount { max });
                }
            },
        };
        self.start(count, mode)
    }

    /// Overwrites the answer to `question`. The option index is trusted.
    /// Ignored once an exam has been submitted.
    pub fn record_answer(&mut self, question: usize, option: usize) -> Result<(), QuizError> {
        let (total, locked, current) = match self
            .session
            .as_ref()
            .map(|s| (s.len(), s.is_locked(), s.current_index()))
        {
            Some(snapshot) => snapshot,
            None => return self.warn(QuizError::NoActiveSession),
        };

        if locked {
            log::debug!("answer to question {question} ignored, exam already submitted");
            return Err(QuizError::SessionLocked);
        }
        if question >= total {
            return self.warn(QuizError::QuestionOutOfRange {
                index: question,
                total,
            });
        }

        if let Some(session) = self.session.as_mut() {
            session.answers[question] = Some(option);
        }
        self.persist_answers();
        if question == current {
            self.render_current();
        }
        Ok(())
    }

    pub fn record_current_answer(&mut self, option: usize) -> Result<(), QuizError> {
        match self.session.as_ref().map(QuizSession::current_index) {
            Some(current) => self.record_answer(current, option),
            None => self.warn(QuizError::NoActiveSession),
        }
    }

    /// Practice correction: scores the whole session and reveals the
    /// question on screen. Can be repeated.
    pub fn grade(&mut self) -> Result<GradeReport, QuizError> {
        let (mode, report) = match self
            .session
            .as_ref()
            .map(|s| (s.mode(), s.grade_report()))
        {
            Some(snapshot) => snapshot,
            None => return self.warn(QuizError::NoActiveSession),
        };

        if mode == QuizMode::Exam {
            return self.warn(QuizError::UnavailableInMode {
                action: "correct",
                mode,
            });
        }

        log::debug!("practice correction: {}", report.score_label());
        self.reveal(report.clone());
        Ok(report)
    }

    /// Final exam grading. Refused while any question is unanswered; the
    /// session then stays in progress with its timer running.
    pub fn submit_exam(&mut self) -> Result<GradeReport, QuizError> {
        let (mode, locked, unanswered) = match self
            .session
            .as_ref()
            .map(|s| (s.mode(), s.is_locked(), s.unanswered_count()))
        {
            Some(snapshot) => snapshot,
            None => return self.warn(QuizError::NoActiveSession),
        };

        if mode != QuizMode::Exam {
            return self.warn(QuizError::UnavailableInMode {
                action: "finish exam",
                mode,
            });
        }
        if locked {
            return self.warn(QuizError::SessionLocked);
        }
        if unanswered > 0 {
            return self.warn(QuizError::IncompleteExam { unanswered });
        }

        let threshold = self.config.pass_threshold;
        let Some(session) = self.session.as_mut() else {
            return Err(QuizError::NoActiveSession);
        };
        session.timer.stop();
        session.locked = true;
        let report = session.grade_report().with_verdict(threshold);

        log::info!(
            "exam submitted: {} in {}, verdict {:?}",
            report.score_label(),
            session.timer().label(),
            report.verdict
        );
        self.reveal(report.clone());
        Ok(report)
    }

    fn reveal(&mut self, report: GradeReport) {
        if let Some(session) = self.session.as_mut() {
            session.revealed = Some(session.current);
            session.result = Some(report.clone());
        }
        self.presenter.show_result(&report);
        self.render_current();
    }

    /// Pauses or resumes the exam timer.
    pub fn toggle_timer(&mut self) {
        if let Some(session) = self.session.as_mut() {
            if session.mode == QuizMode::Exam && session.timer.is_running() {
                session.timer.toggle_pause();
            }
        }
    }

    /// Feeds elapsed wall time to the exam timer.
    pub fn tick(&mut self, dt: Duration) {
        if let Some(session) = self.session.as_mut() {
            session.timer.advance(dt);
        }
    }
}

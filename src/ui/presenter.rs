use crate::error::QuizError;
use crate::presenter::Presenter;
use crate::view_models::{GradeReport, QuestionView, Verdict};

#[derive(Clone, Debug, PartialEq)]
pub enum Screen {
    Setup { bank_size: usize },
    Question(QuestionView),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Warning,
    Success,
    Failure,
}

/// Modal message, dismissed with its button.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub title: String,
    pub text: String,
    pub kind: NoticeKind,
    pub button: &'static str,
}

/// Retained state read by the egui views every frame.
#[derive(Debug)]
pub struct EguiPresenter {
    pub screen: Screen,
    pub result: Option<GradeReport>,
    pub notice: Option<Notice>,
}

impl Default for EguiPresenter {
    fn default() -> Self {
        Self {
            screen: Screen::Setup { bank_size: 0 },
            result: None,
            notice: None,
        }
    }
}

impl EguiPresenter {
    pub fn question(&self) -> Option<&QuestionView> {
        match &self.screen {
            Screen::Question(view) => Some(view),
            Screen::Setup { .. } => None,
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

impl Presenter for EguiPresenter {
    fn show_setup(&mut self, bank_size: usize) {
        self.screen = Screen::Setup { bank_size };
        self.result = None;
        self.notice = None;
    }

    fn render(&mut self, question: &QuestionView) {
        if let Screen::Setup { .. } = self.screen {
            self.result = None;
        }
        self.screen = Screen::Question(question.clone());
    }

    fn show_result(&mut self, report: &GradeReport) {
        self.result = Some(report.clone());

        if let Some(title) = report.verdict_title() {
            let kind = match report.verdict {
                Some(Verdict::Pass) => NoticeKind::Success,
                _ => NoticeKind::Failure,
            };
            self.notice = Some(Notice {
                title: title.to_string(),
                text: format!(
                    "Percentage: {}% - questions found: {} / {}",
                    report.percentage_label(),
                    report.score,
                    report.total
                ),
                kind,
                button: "See the results",
            });
        }
    }

    fn show_warning(&mut self, warning: &QuizError) {
        let button = match warning {
            QuizError::IncompleteExam { .. } => "Continue the exam!",
            _ => "OK",
        };
        self.notice = Some(Notice {
            title: warning.title().to_string(),
            text: warning.to_string(),
            kind: NoticeKind::Warning,
            button,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuizMode;
    use crate::view_models::OptionView;

    fn view(index: usize) -> QuestionView {
        QuestionView {
            index,
            total: 2,
            prompt: "P".into(),
            options: vec![OptionView {
                text: "o".into(),
                selected: false,
                mark: None,
            }],
            mode: QuizMode::Practice,
            has_previous: index > 0,
            has_next: index == 0,
            locked: false,
        }
    }

    #[test]
    fn exam_result_opens_verdict_dialog() {
        let mut p = EguiPresenter::default();
        p.show_result(&GradeReport::new(8, 10).with_verdict(75.0));
        let notice = p.notice.expect("verdict dialog");
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.title, "Exam passed!");
        assert!(notice.text.contains("80.0"));
    }

    #[test]
    fn practice_result_has_no_dialog() {
        let mut p = EguiPresenter::default();
        p.show_result(&GradeReport::new(1, 2));
        assert!(p.notice.is_none());
        assert!(p.result.is_some());
    }

    #[test]
    fn incomplete_exam_warning_keeps_exam_going() {
        let mut p = EguiPresenter::default();
        p.show_warning(&QuizError::IncompleteExam { unanswered: 2 });
        let notice = p.notice.expect("warning");
        assert_eq!(notice.button, "Continue the exam!");
        assert!(notice.text.contains("2 question(s)"));
    }

    #[test]
    fn setup_clears_screen_and_banner() {
        let mut p = EguiPresenter::default();
        p.render(&view(1));
        p.show_result(&GradeReport::new(1, 2));
        p.show_setup(12);
        assert_eq!(p.screen, Screen::Setup { bank_size: 12 });
        assert!(p.result.is_none());
        assert!(p.question().is_none());
    }
}

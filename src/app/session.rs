use crate::model::{Question, QuizMode};
use crate::timer::ExamTimer;
use crate::view_models::{GradeReport, OptionMark, OptionView, QuestionView};

/// One run through a prefix of the bank.
#[derive(Debug, Clone)]
pub struct QuizSession {
    pub(crate) questions: Vec<Question>,
    pub(crate) answers: Vec<Option<usize>>,
    pub(crate) current: usize,
    pub(crate) mode: QuizMode,
    pub(crate) timer: ExamTimer,
    /// Last grade shown; once set, answered questions render with marks.
    pub(crate) result: Option<GradeReport>,
    /// Question revealed by the last correction, answered or not.
    pub(crate) revealed: Option<usize>,
    /// Exam submitted: terminal, answers frozen.
    pub(crate) locked: bool,
}

impl QuizSession {
    pub(crate) fn new(questions: Vec<Question>, mode: QuizMode) -> Self {
        let answers = vec![None; questions.len()];
        let mut timer = ExamTimer::default();
        if mode == QuizMode::Exam {
            timer.start();
        }
        Self {
            questions,
            answers,
            current: 0,
            mode,
            timer,
            result: None,
            revealed: None,
            locked: false,
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    pub fn answer(&self, index: usize) -> Option<usize> {
        self.answers.get(index).copied().flatten()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn mode(&self) -> QuizMode {
        self.mode
    }

    pub fn timer(&self) -> &ExamTimer {
        &self.timer
    }

    pub fn result(&self) -> Option<&GradeReport> {
        self.result.as_ref()
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn unanswered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_none()).count()
    }

    pub fn score(&self) -> usize {
        self.questions
            .iter()
            .zip(&self.answers)
            .filter(|(q, a)| q.is_correct(**a))
            .count()
    }

    pub fn grade_report(&self) -> GradeReport {
        GradeReport::new(self.score(), self.len())
    }

    fn marks_visible(&self, index: usize) -> bool {
        self.result.is_some() && (self.answer(index).is_some() || self.revealed == Some(index))
    }

    pub fn question_view(&self, index: usize) -> Option<QuestionView> {
        let question = self.questions.get(index)?;
        let answer = self.answer(index);
        let show_marks = self.marks_visible(index);

        let options = question
            .options
            .iter()
            .enumerate()
            .map(|(i, text)| {
                let mark = if !show_marks {
                    None
                } else if i == question.correct_option {
                    Some(OptionMark::Correct)
                } else if Some(i) == answer {
                    Some(OptionMark::Incorrect)
                } else {
                    None
                };
                OptionView {
                    text: text.clone(),
                    selected: Some(i) == answer,
                    mark,
                }
            })
            .collect();

        Some(QuestionView {
            index,
            total: self.len(),
            prompt: question.prompt.clone(),
            options,
            mode: self.mode,
            has_previous: index > 0,
            has_next: index + 1 < self.len(),
            locked: self.locked,
        })
    }

    pub fn current_view(&self) -> Option<QuestionView> {
        self.question_view(self.current)
    }
}

// src/view_models.rs

use crate::model::QuizMode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    Correct,
    Incorrect,
}

#[derive(Clone, Debug, PartialEq)]
pub struct OptionView {
    pub text: String,
    pub selected: bool,
    pub mark: Option<OptionMark>,
}

/// Everything the presenter needs to draw the current question.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionView {
    pub index: usize, // 0-based
    pub total: usize,
    pub prompt: String,
    pub options: Vec<OptionView>,
    pub mode: QuizMode,
    pub has_previous: bool,
    pub has_next: bool,
    /// Answers can no longer change (exam submitted).
    pub locked: bool,
}

impl QuestionView {
    pub fn number_label(&self) -> String {
        format!("Question {} / {}", self.index + 1, self.total)
    }

    pub fn selected_option(&self) -> Option<usize> {
        self.options.iter().position(|o| o.selected)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GradeReport {
    pub score: usize,
    pub total: usize,
    /// Rounded to one decimal.
    pub percentage: f64,
    /// Only set when an exam is submitted.
    pub verdict: Option<Verdict>,
}

impl GradeReport {
    pub fn new(score: usize, total: usize) -> Self {
        let raw = if total == 0 {
            0.0
        } else {
            score as f64 / total as f64 * 100.0
        };
        Self {
            score,
            total,
            percentage: (raw * 10.0).round() / 10.0,
            verdict: None,
        }
    }

    pub fn with_verdict(mut self, pass_threshold: f64) -> Self {
        self.verdict = Some(if self.percentage > pass_threshold {
            Verdict::Pass
        } else {
            Verdict::Fail
        });
        self
    }

    pub fn percentage_label(&self) -> String {
        format!("{:.1}", self.percentage)
    }

    pub fn score_label(&self) -> String {
        format!(
            "Your score is {} / {} ({}%)",
            self.score,
            self.total,
            self.percentage_label()
        )
    }

    pub fn verdict_title(&self) -> Option<&'static str> {
        match self.verdict? {
            Verdict::Pass => Some("Exam passed!"),
            Verdict::Fail => Some("Exam failed!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentage_is_rounded_to_one_decimal() {
        assert_eq!(GradeReport::new(3, 3).percentage_label(), "100.0");
        assert_eq!(GradeReport::new(1, 3).percentage_label(), "33.3");
        assert_eq!(GradeReport::new(2, 3).percentage_label(), "66.7");
        assert_eq!(GradeReport::new(0, 0).percentage_label(), "0.0");
    }

    #[test]
    fn verdict_needs_strictly_more_than_threshold() {
        assert_eq!(
            GradeReport::new(3, 4).with_verdict(75.0).verdict,
            Some(Verdict::Fail)
        );
        assert_eq!(
            GradeReport::new(8, 10).with_verdict(75.0).verdict,
            Some(Verdict::Pass)
        );
    }

    #[test]
    fn verdict_title_only_for_exams() {
        assert_eq!(GradeReport::new(1, 2).verdict_title(), None);
        assert_eq!(
            GradeReport::new(0, 2).with_verdict(75.0).verdict_title(),
            Some("Exam failed!")
        );
    }
}

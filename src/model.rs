use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    #[serde(rename = "question", alias = "prompt")]
    pub prompt: String,
    pub options: Vec<String>,
    #[serde(rename = "answer", alias = "correct")]
    pub correct_option: usize,
}

impl Question {
    pub fn new(prompt: impl Into<String>, options: &[&str], correct_option: usize) -> Self {
        Self {
            prompt: prompt.into(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_option,
        }
    }

    pub fn is_correct(&self, answer: Option<usize>) -> bool {
        answer == Some(self.correct_option)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum QuizMode {
    /// Self-check: can be corrected at any time, answers stay editable.
    #[default]
    Practice,
    /// Timed: graded once, after every question is answered.
    Exam,
}

impl fmt::Display for QuizMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizMode::Practice => f.write_str("practice"),
            QuizMode::Exam => f.write_str("exam"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuestionCount {
    Exactly(usize),
    All,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizState {
    Setup,
    InProgress,
    Graded,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

use crate::model::QuizMode;
use thiserror::Error;

/// Errors raised by the quiz controller. All of them are recoverable: the
/// session stays where it was and the presenter gets a warning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    #[error("Enter a valid number of questions (between 1 and {max})")]
    InvalidQuestionCount { max: usize },

    #[error("The question bank is empty, no quiz can be started")]
    EmptyBank,

    #[error(
        "You must answer every question to finish the exam! {unanswered} question(s) still unanswered"
    )]
    IncompleteExam { unanswered: usize },

    #[error("No quiz is in progress")]
    NoActiveSession,

    #[error("The exam has been submitted, answers can no longer change")]
    SessionLocked,

    #[error("Question {index} does not exist (the quiz has {total})")]
    QuestionOutOfRange { index: usize, total: usize },

    #[error("'{action}' is not available in {mode} mode")]
    UnavailableInMode { action: &'static str, mode: QuizMode },
}

impl QuizError {
    /// Short dialog title for the warning.
    pub fn title(&self) -> &'static str {
        match self {
            QuizError::InvalidQuestionCount { .. } => "Bad configuration",
            QuizError::EmptyBank => "No questions",
            QuizError::IncompleteExam { .. } => "Incomplete exam",
            QuizError::SessionLocked => "Exam finished",
            _ => "Warning",
        }
    }
}

#[derive(Debug, Error)]
pub enum BankError {
    #[error("could not read question bank: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse question bank: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not write answers: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not serialize answers: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("answer storage unavailable: {0}")]
    Unavailable(String),
}

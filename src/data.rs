// src/data.rs

use crate::error::BankError;
use crate::model::Question;
use rand::Rng;
use rand::seq::SliceRandom;
use std::path::Path;

/// Question bank embedded in the binary
const EMBEDDED_BANK: &str = include_str!("data/questions.yaml");

/// Questions available to every session. Shuffled once when loaded; options
/// keep their order.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Keeps the given order (tests, pre-shuffled banks).
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn shuffled<R: Rng + ?Sized>(mut questions: Vec<Question>, rng: &mut R) -> Self {
        questions.shuffle(rng);
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// First `count` questions of the bank, never more than it holds.
    pub fn take(&self, count: usize) -> Vec<Question> {
        self.questions.iter().take(count).cloned().collect()
    }
}

/// Parses a YAML (or JSON) sequence of questions.
pub fn parse_questions(text: &str) -> Result<Vec<Question>, BankError> {
    Ok(serde_yaml::from_str(text)?)
}

pub fn read_questions_embedded() -> Result<Vec<Question>, BankError> {
    parse_questions(EMBEDDED_BANK)
}

pub fn read_questions_from_file(path: &Path) -> Result<Vec<Question>, BankError> {
    let text = std::fs::read_to_string(path)?;
    parse_questions(&text)
}

/// Loads and shuffles the bank. A bank that cannot be read is logged and
/// left empty; the setup view then refuses to start.
pub fn load_bank(path: Option<&Path>) -> QuestionBank {
    let loaded = match path {
        Some(path) => read_questions_from_file(path),
        None => read_questions_embedded(),
    };

    match loaded {
        Ok(questions) => {
            log::info!("loaded {} questions", questions.len());
            QuestionBank::shuffled(questions, &mut rand::thread_rng())
        }
        Err(e) => {
            log::error!("error loading questions: {e}");
            QuestionBank::default()
        }
    }
}

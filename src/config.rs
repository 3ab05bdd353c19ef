use std::path::PathBuf;

pub const DEFAULT_ANSWERS_KEY: &str = "userAnswers";
pub const DEFAULT_PASS_THRESHOLD: f64 = 75.0;

#[derive(Debug, Clone, PartialEq)]
pub struct QuizConfig {
    /// Question bank file; `None` uses the embedded bank.
    pub bank_path: Option<PathBuf>,
    /// Native answer file.
    pub answers_path: PathBuf,
    /// Browser `localStorage` key.
    pub answers_key: String,
    /// An exam passes when its percentage is strictly above this.
    pub pass_threshold: f64,
    /// Exam size; `None` means every question in the bank.
    pub exam_questions: Option<usize>,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            bank_path: None,
            answers_path: PathBuf::from(format!("{DEFAULT_ANSWERS_KEY}.json")),
            answers_key: DEFAULT_ANSWERS_KEY.to_string(),
            pass_threshold: DEFAULT_PASS_THRESHOLD,
            exam_questions: None,
        }
    }
}

impl QuizConfig {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads `?exam_questions=N` and friends from the page URL.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        let search = web_sys::window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }

    /// Config from a URL query string. Filesystem paths mean nothing in a
    /// browser, so `bank_path` and `answers_path` are never taken from it.
    pub fn from_query(search: &str) -> Self {
        let query = search.strip_prefix('?').unwrap_or(search);
        Self::from_lookup(|key| {
            if matches!(key, "QUIZ_BANK_PATH" | "QUIZ_ANSWERS_PATH") {
                return None;
            }
            query.split('&').find_map(|pair| {
                let (k, v) = pair.split_once('=')?;
                let k = format!("QUIZ_{}", k.to_ascii_uppercase());
                (k == key).then(|| v.to_string())
            })
        })
    }

    /// Builds a config from `QUIZ_*` variables, ignoring blank or invalid
    /// values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|s| !s.trim().is_empty());
        let mut config = Self::default();

        if let Some(path) = get("QUIZ_BANK_PATH") {
            config.bank_path = Some(PathBuf::from(path));
        }
        if let Some(path) = get("QUIZ_ANSWERS_PATH") {
            config.answers_path = PathBuf::from(path);
        }
        if let Some(key) = get("QUIZ_ANSWERS_KEY") {
            config.answers_key = key;
        }
        if let Some(raw) = get("QUIZ_PASS_THRESHOLD") {
            match raw.trim().parse::<f64>() {
                Ok(t) if (0.0..=100.0).contains(&t) => config.pass_threshold = t,
                _ => log::warn!("ignoring QUIZ_PASS_THRESHOLD={raw}"),
            }
        }
        if let Some(raw) = get("QUIZ_EXAM_QUESTIONS") {
            match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => config.exam_questions = Some(n),
                _ => log::warn!("ignoring QUIZ_EXAM_QUESTIONS={raw}"),
            }
        }
        config
    }

    /// Number of questions an exam takes from a bank of `bank_size`.
    pub fn exam_size(&self, bank_size: usize) -> usize {
        self.exam_questions
            .map_or(bank_size, |n| n.min(bank_size))
    }
}

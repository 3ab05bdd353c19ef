use crate::config::QuizConfig;
use crate::error::StorageError;
#[cfg(not(target_arch = "wasm32"))]
use std::path::PathBuf;

/// Durable copy of the answer array: `[0, null, 2]`, one entry per question.
pub trait AnswerStore {
    fn save_answers(&mut self, answers: &[Option<usize>]) -> Result<(), StorageError>;
}

pub fn encode_answers(answers: &[Option<usize>]) -> Result<String, StorageError> {
    Ok(serde_json::to_string(answers)?)
}

/// Keeps the last written array in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryAnswerStore {
    pub last: Option<String>,
    pub writes: usize,
}

impl AnswerStore for MemoryAnswerStore {
    fn save_answers(&mut self, answers: &[Option<usize>]) -> Result<(), StorageError> {
        self.last = Some(encode_answers(answers)?);
        self.writes += 1;
        Ok(())
    }
}

/// Native store: overwrites a JSON file on every write.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone)]
pub struct FileAnswerStore {
    path: PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileAnswerStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl AnswerStore for FileAnswerStore {
    fn save_answers(&mut self, answers: &[Option<usize>]) -> Result<(), StorageError> {
        std::fs::write(&self.path, encode_answers(answers)?)?;
        Ok(())
    }
}

/// Browser store: one `localStorage` key.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct LocalStorageAnswerStore {
    key: String,
}

#[cfg(target_arch = "wasm32")]
impl LocalStorageAnswerStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

#[cfg(target_arch = "wasm32")]
impl AnswerStore for LocalStorageAnswerStore {
    fn save_answers(&mut self, answers: &[Option<usize>]) -> Result<(), StorageError> {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| StorageError::Unavailable("no localStorage".into()))?;
        storage
            .set_item(&self.key, &encode_answers(answers)?)
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))
    }
}

/// Store used by the app for the current target.
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformAnswerStore = FileAnswerStore;
#[cfg(target_arch = "wasm32")]
pub type PlatformAnswerStore = LocalStorageAnswerStore;

#[cfg(not(target_arch = "wasm32"))]
pub fn platform_store(config: &QuizConfig) -> PlatformAnswerStore {
    FileAnswerStore::new(config.answers_path.clone())
}

#[cfg(target_arch = "wasm32")]
pub fn platform_store(config: &QuizConfig) -> PlatformAnswerStore {
    LocalStorageAnswerStore::new(config.answers_key.clone())
}

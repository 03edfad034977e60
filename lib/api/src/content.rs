// Static quiz and college content served next to the recommendations
use anyhow::{anyhow, Context, Result};
use careerpath_core::AnswerCategory;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;

pub const QUIZ_FILE: &str = "quiz_data.json";
pub const COLLEGES_FILE: &str = "colleges_data.json";

#[derive(Debug, Clone, Deserialize)]
pub struct QuizData {
    pub questions: Vec<serde_json::Value>,
    pub stream_suggestions: HashMap<String, serde_json::Value>,
}

/// Read-only content loaded once at startup
#[derive(Debug, Clone)]
pub struct ContentStore {
    quiz: QuizData,
    colleges: serde_json::Value,
}

impl ContentStore {
    pub fn new(quiz: QuizData, colleges: serde_json::Value) -> Self {
        Self { quiz, colleges }
    }

    pub fn load<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.as_ref();
        let quiz: QuizData = load_json(data_dir, QUIZ_FILE)?;
        let colleges: serde_json::Value = load_json(data_dir, COLLEGES_FILE)?;

        for category in AnswerCategory::ALL {
            if !quiz.stream_suggestions.contains_key(category.as_str()) {
                tracing::warn!("{} has no suggestion for stream '{}'", QUIZ_FILE, category);
            }
        }

        Ok(Self { quiz, colleges })
    }

    #[inline]
    pub fn questions(&self) -> &[serde_json::Value] {
        &self.quiz.questions
    }

    #[inline]
    pub fn suggestion(&self, category: AnswerCategory) -> Option<&serde_json::Value> {
        self.quiz.stream_suggestions.get(category.as_str())
    }

    #[inline]
    pub fn colleges(&self) -> &serde_json::Value {
        &self.colleges
    }
}

fn load_json<T: DeserializeOwned>(data_dir: &Path, filename: &str) -> Result<T> {
    let path = data_dir.join(filename);
    let data = match std::fs::read(&path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(anyhow!("{} not found in {}", filename, data_dir.display()));
        }
        Err(e) => return Err(e).with_context(|| format!("reading {}", path.display())),
    };
    serde_json::from_slice(&data).with_context(|| format!("Invalid JSON format in {}", filename))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_content(dir: &Path, quiz: &str) {
        std::fs::write(dir.join(QUIZ_FILE), quiz).unwrap();
        std::fs::write(dir.join(COLLEGES_FILE), r#"[{"name": "Test College"}]"#).unwrap();
    }

    #[test]
    fn test_load() {
        let dir = tempfile::tempdir().unwrap();
        write_content(
            dir.path(),
            r#"{"questions": [{"question": "Q1"}],
                "stream_suggestions": {"arts": {"stream": "Arts"}}}"#,
        );

        let content = ContentStore::load(dir.path()).unwrap();
        assert_eq!(content.questions().len(), 1);
        assert_eq!(
            content.suggestion(AnswerCategory::Arts).unwrap()["stream"],
            "Arts"
        );
        assert!(content.suggestion(AnswerCategory::Science).is_none());
        assert_eq!(content.colleges()[0]["name"], "Test College");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = ContentStore::load(dir.path()).unwrap_err();
        assert!(err.to_string().contains(QUIZ_FILE));
    }

    #[test]
    fn test_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        write_content(dir.path(), "{ not json");
        let err = ContentStore::load(dir.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid JSON format"));
    }

    #[test]
    fn test_missing_questions_key() {
        let dir = tempfile::tempdir().unwrap();
        write_content(dir.path(), r#"{"stream_suggestions": {}}"#);
        assert!(ContentStore::load(dir.path()).is_err());
    }
}

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VocabError {
    /// JSON (word entries, model responses, lemma overrides) that could not be decoded.
    #[error("Decode failure: {0}")]
    DecodeFailure(String),

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Unknown exercise kind: {0}")]
    UnknownExerciseKind(String),
}

impl VocabError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        VocabError::Io { path: path.into(), source }
    }
}

impl From<serde_json::Error> for VocabError {
    fn from(err: serde_json::Error) -> Self {
        VocabError::DecodeFailure(err.to_string())
    }
}

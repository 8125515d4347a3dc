//*** START FILE: src/lib.rs ***//

// Declare all modules that are part of this library
pub mod config;
pub mod error;
pub mod types {
    pub mod exercise_data;
    pub mod word_entry;
}
pub mod nlp;
pub mod parsing;
pub mod substitution;
pub mod exercise;
pub mod entries_io;

pub use config::Config;
pub use error::VocabError;
pub use exercise::gatherer::ExerciseGatherer;
pub use exercise::{Exercise, ExerciseKind, ExerciseSheet};
pub use nlp::{Lemmatizer, RuleTokenizer, Token, Tokenize};
pub use substitution::{Marker, Substitution, TermSubstitutor};

/// Builds the rule-based substitutor, layering any lemma overrides named in the config.
pub fn substitutor_from_config(config: &Config) -> Result<TermSubstitutor<RuleTokenizer>, VocabError> {
    let lemmatizer = match &config.lemma_overrides {
        Some(path) => Lemmatizer::new().with_overrides_file(path)?,
        None => Lemmatizer::new(),
    };
    Ok(TermSubstitutor::new(RuleTokenizer::new(lemmatizer)))
}

//*** END FILE: src/lib.rs ***//

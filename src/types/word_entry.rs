//*** START FILE: src/types/word_entry.rs ***//
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Example sentences are stored either as bare strings or as
/// `{"English": ..., "Chinese": ...}` objects.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Example {
    Plain(String),
    Bilingual {
        #[serde(rename = "English")]
        english: String,
        #[serde(rename = "Chinese", default)]
        chinese: Option<String>,
    },
}

impl Example {
    pub fn english(&self) -> &str {
        match self {
            Example::Plain(s) => s,
            Example::Bilingual { english, .. } => english,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Collocation {
    pub key: String,
    #[serde(default)]
    pub example: Option<Example>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct DefinitionEntry {
    #[serde(default)]
    pub definition: String,
    #[serde(rename = "part of speech", default)]
    pub part_of_speech: Option<String>,
    #[serde(default)]
    pub forms: Option<String>,
    #[serde(rename = "Chinese", default)]
    pub chinese: Option<String>,
    #[serde(rename = "British received pronunciation", default)]
    pub pronunciation: Option<String>,
    #[serde(default)]
    pub examples: Vec<Example>,
    /// Category (e.g. "verb", "adjective") -> collocations.
    #[serde(default)]
    pub collocations: BTreeMap<String, Vec<Collocation>>,
}

/// Headword -> senses. Ordered so word banks and listings are stable.
pub type WordEntries = BTreeMap<String, Vec<DefinitionEntry>>;
//*** END FILE: src/types/word_entry.rs ***//

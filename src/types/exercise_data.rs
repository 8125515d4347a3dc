//*** START FILE: src/types/exercise_data.rs ***//
// Records the language model sends back for each exercise kind.
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct GapDialogueRecord {
    /// `[prompt word, target word]`; the second is blanked in line B.
    pub words: Vec<String>,
    pub definitions: Vec<String>,
    pub conversation: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct MultipleChoiceRecord {
    pub word: String,
    pub sentence: String,
    #[serde(default)]
    pub definition: String,
    #[serde(rename = "British received pronunciation")]
    pub pronunciation: String,
    #[serde(rename = "similar received pronunciations", default)]
    pub distractors: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CollocationRecord {
    #[serde(default)]
    pub word: String,
    pub key: String,
    #[serde(default)]
    pub category: String,
    #[serde(rename = "new example")]
    pub new_example: String,
    #[serde(rename = "matching part")]
    pub matching_part: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct DialogueCompletionRecord {
    pub dialogue: Vec<String>,
    #[serde(rename = "matching part")]
    pub matching_part: String,
    #[serde(default)]
    pub hint: String,
    #[serde(rename = "Chinese", default)]
    pub topic: String,
}
/// An English sentence and its Chinese translation. The Chinese side is the prompt.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TranslationRecord {
    #[serde(rename = "English")]
    pub english: String,
    #[serde(rename = "Chinese")]
    pub chinese: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SentenceCorrectionRecord {
    #[serde(rename = "new example")]
    pub new_example: String,
    /// The sentence with a `[gap]` where the usage goes.
    pub question: String,
    /// `[correct, incorrect]`; the incorrect one fills the gap when the wrong version is shown.
    #[serde(default)]
    pub options: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct UsagePatternRecord {
    pub term: String,
    #[serde(default)]
    pub elements: Vec<String>,
    #[serde(rename = "additional elements", default)]
    pub additional_elements: Vec<String>,
    pub sentence: String,
}
//*** END FILE: src/types/exercise_data.rs ***//

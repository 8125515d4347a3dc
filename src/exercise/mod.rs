//*** START FILE: src/exercise/mod.rs ***//
pub mod collocation;
pub mod dialogue;
pub mod gap_fill;
pub mod gatherer;
pub mod latex;
pub mod multiple_choice;
pub mod sentence_correction;
pub mod translation;
pub mod usage_pattern;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::config::MarkerConfig;
use crate::error::VocabError;
use crate::nlp::Tokenize;
use crate::parsing::parse_records;
use crate::substitution::TermSubstitutor;
use crate::types::exercise_data::{
    CollocationRecord, DialogueCompletionRecord, GapDialogueRecord, MultipleChoiceRecord,
    SentenceCorrectionRecord, TranslationRecord, UsagePatternRecord,
};
use crate::types::word_entry::WordEntries;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseKind {
    FillInTheGap,
    MultipleChoice,
    Collocation,
    DialogueCompletion,
    Translation,
    SentenceCorrection,
    UsagePattern,
}

impl ExerciseKind {
    pub const ALL: [ExerciseKind; 7] = [
        ExerciseKind::FillInTheGap,
        ExerciseKind::MultipleChoice,
        ExerciseKind::Collocation,
        ExerciseKind::DialogueCompletion,
        ExerciseKind::Translation,
        ExerciseKind::SentenceCorrection,
        ExerciseKind::UsagePattern,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ExerciseKind::FillInTheGap => "fill-in-the-gap",
            ExerciseKind::MultipleChoice => "multiple-choice",
            ExerciseKind::Collocation => "collocation",
            ExerciseKind::DialogueCompletion => "dialogue-completion",
            ExerciseKind::Translation => "translation",
            ExerciseKind::SentenceCorrection => "sentence-correction",
            ExerciseKind::UsagePattern => "usage-pattern",
        }
    }

    /// Section heading used when sheets are gathered.
    pub fn title(&self) -> &'static str {
        match self {
            ExerciseKind::FillInTheGap => "Fill in the gap",
            ExerciseKind::MultipleChoice => "Spelling multiple choice",
            ExerciseKind::Collocation => "Collocation fill in the gap",
            ExerciseKind::DialogueCompletion => "Dialogue completion",
            ExerciseKind::Translation => "Translation",
            ExerciseKind::SentenceCorrection => "Sentence correction",
            ExerciseKind::UsagePattern => "Usage pattern",
        }
    }
}

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ExerciseKind {
    type Err = VocabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace([' ', '_'], "-");
        ExerciseKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == wanted || kind.title().to_lowercase().replace(' ', "-") == wanted)
            .ok_or_else(|| VocabError::UnknownExerciseKind(s.to_string()))
    }
}

/// LaTeX for the question sheet and the matching answer key.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct ExerciseSheet {
    pub exercise: String,
    pub solution: String,
    pub questions: usize,
}

/// One exercise, carrying the decoded model response for its kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Exercise {
    FillInTheGap(Vec<GapDialogueRecord>),
    MultipleChoice(Vec<MultipleChoiceRecord>),
    Collocation(Vec<CollocationRecord>),
    DialogueCompletion(Vec<DialogueCompletionRecord>),
    Translation(Vec<TranslationRecord>),
    SentenceCorrection(Vec<SentenceCorrectionRecord>),
    UsagePattern(Vec<UsagePatternRecord>),
}

impl Exercise {
    pub fn from_response(kind: ExerciseKind, response: &str) -> Result<Self, VocabError> {
        let exercise = match kind {
            ExerciseKind::FillInTheGap => Exercise::FillInTheGap(parse_records(response)?),
            ExerciseKind::MultipleChoice => Exercise::MultipleChoice(parse_records(response)?),
            ExerciseKind::Collocation => Exercise::Collocation(parse_records(response)?),
            ExerciseKind::DialogueCompletion => Exercise::DialogueCompletion(parse_records(response)?),
            ExerciseKind::Translation => Exercise::Translation(parse_records(response)?),
            ExerciseKind::SentenceCorrection => Exercise::SentenceCorrection(parse_records(response)?),
            ExerciseKind::UsagePattern => Exercise::UsagePattern(parse_records(response)?),
        };
        tracing::debug!(kind = %kind, records = exercise.len(), "decoded exercise response");
        Ok(exercise)
    }

    /// Translation needs no model response: its sentences come from the entry store.
    pub fn translation_from_entries(entries: &WordEntries) -> Self {
        Exercise::Translation(translation::records_from_entries(entries))
    }

    pub fn kind(&self) -> ExerciseKind {
        match self {
            Exercise::FillInTheGap(_) => ExerciseKind::FillInTheGap,
            Exercise::MultipleChoice(_) => ExerciseKind::MultipleChoice,
            Exercise::Collocation(_) => ExerciseKind::Collocation,
            Exercise::DialogueCompletion(_) => ExerciseKind::DialogueCompletion,
            Exercise::Translation(_) => ExerciseKind::Translation,
            Exercise::SentenceCorrection(_) => ExerciseKind::SentenceCorrection,
            Exercise::UsagePattern(_) => ExerciseKind::UsagePattern,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Exercise::FillInTheGap(r) => r.len(),
            Exercise::MultipleChoice(r) => r.len(),
            Exercise::Collocation(r) => r.len(),
            Exercise::DialogueCompletion(r) => r.len(),
            Exercise::Translation(r) => r.len(),
            Exercise::SentenceCorrection(r) => r.len(),
            Exercise::UsagePattern(r) => r.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn render<T: Tokenize>(&self, substitutor: &TermSubstitutor<T>, markers: &MarkerConfig) -> ExerciseSheet {
        let sheet = match self {
            Exercise::FillInTheGap(records) => gap_fill::render(records, substitutor, markers),
            Exercise::MultipleChoice(records) => multiple_choice::render(records, substitutor, markers),
            Exercise::Collocation(records) => collocation::render(records, substitutor, markers),
            Exercise::DialogueCompletion(records) => dialogue::render(records, markers),
            Exercise::Translation(records) => translation::render(records),
            Exercise::SentenceCorrection(records) => sentence_correction::render(records),
            Exercise::UsagePattern(records) => usage_pattern::render(records),
        };
        if sheet.questions < self.len() {
            tracing::info!(
                "{}: {} of {} records produced a question",
                self.kind(),
                sheet.questions,
                self.len()
            );
        }
        sheet
    }
}

//*** END FILE: src/exercise/mod.rs ***//

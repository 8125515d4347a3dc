use super::latex::{enumerate, prepare_for_latex};
use super::ExerciseSheet;
use crate::types::exercise_data::TranslationRecord;
use crate::types::word_entry::{Example, WordEntries};

/// Chinese prompt with an answer box; the English sentence goes in the key.
pub fn render(records: &[TranslationRecord]) -> ExerciseSheet {
    let mut exercise = String::new();
    let mut solutions: Vec<String> = Vec::new();

    for record in records {
        if record.english.trim().is_empty() || record.chinese.trim().is_empty() {
            tracing::warn!("Translation record needs both English and Chinese; skipping");
            continue;
        }
        let english = prepare_for_latex(&record.english);
        exercise.push_str(&format!(
            "\\question {}\n\\begin{{solutionbox}}{{10ex}}\n{}\n\\end{{solutionbox}}\n",
            record.chinese, english
        ));
        solutions.push(english);
    }

    ExerciseSheet {
        questions: solutions.len(),
        exercise,
        solution: enumerate(&solutions),
    }
}

fn bilingual(example: &Example) -> Option<TranslationRecord> {
    match example {
        Example::Bilingual { english, chinese: Some(chinese) } if !chinese.trim().is_empty() => {
            Some(TranslationRecord { english: english.clone(), chinese: chinese.clone() })
        }
        _ => None,
    }
}

/// One sentence per headword, taken from the entry store rather than a model response.
/// Sense examples come first, then noun and idiom collocation examples.
pub fn records_from_entries(entries: &WordEntries) -> Vec<TranslationRecord> {
    let mut records = Vec::new();
    for (word, senses) in entries {
        let from_examples = senses.iter().flat_map(|sense| sense.examples.iter());
        let from_collocations = senses.iter().flat_map(|sense| {
            ["noun", "idiom"]
                .into_iter()
                .filter_map(move |category| sense.collocations.get(category))
                .flatten()
                .filter_map(|collocation| collocation.example.as_ref())
        });

        match from_examples.chain(from_collocations).find_map(bilingual) {
            Some(record) => records.push(record),
            None => tracing::debug!("'{}' has no translated example; left out", word),
        }
    }
    records
}

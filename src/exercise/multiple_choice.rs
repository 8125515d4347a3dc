use super::latex::{enumerate, prepare_for_latex};
use super::ExerciseSheet;
use crate::config::MarkerConfig;
use crate::nlp::Tokenize;
use crate::substitution::{Marker, TermSubstitutor};
use crate::types::exercise_data::MultipleChoiceRecord;

pub fn render<T: Tokenize>(
    records: &[MultipleChoiceRecord],
    substitutor: &TermSubstitutor<T>,
    markers: &MarkerConfig,
) -> ExerciseSheet {
    let mut exercise = String::new();
    let mut solutions: Vec<String> = Vec::new();

    for record in records {
        // Gap the raw sentence; LaTeX quoting is applied to the result.
        let marker = Marker::FillInBlank.render(&record.word, markers);
        let gapped = substitutor.substitute(&record.sentence, &record.word, &marker);
        if !gapped.is_match() {
            tracing::warn!("'{}' not found in '{}'; skipping", record.word, record.sentence);
            continue;
        }

        // Sorted rather than shuffled so the same response always renders the same sheet.
        let mut options: Vec<&str> = record.distractors.iter().map(String::as_str).collect();
        options.push(&record.pronunciation);
        options.sort_unstable();
        options.dedup();
        let correct_index = options.iter().position(|o| *o == record.pronunciation).unwrap_or(0);
        let label = match option_label(correct_index) {
            Some(label) if options.len() <= 26 => label,
            _ => {
                tracing::warn!(
                    "'{}' has {} options, more than can be lettered; skipping",
                    record.word,
                    options.len()
                );
                continue;
            }
        };

        exercise.push_str(&format!(
            "\\question {}\n\n\\begin{{choices}}\n",
            prepare_for_latex(&gapped.text)
        ));
        for option in &options {
            if *option == record.pronunciation {
                exercise.push_str(&format!("\\CorrectChoice {} ", option));
            } else {
                exercise.push_str(&format!("\\choice {} ", option));
            }
        }
        exercise.push_str("\\end{choices}\n\\answerline\n");

        solutions.push(format!(
            "{} \\qquad {}. \n\n\\textit{{{}}}",
            label,
            gapped.matched_forms[0],
            prepare_for_latex(&record.definition)
        ));
    }

    ExerciseSheet {
        questions: solutions.len(),
        exercise,
        solution: enumerate(&solutions),
    }
}

/// `A` for the first option, `B` for the second, up to `Z`.
fn option_label(index: usize) -> Option<char> {
    u8::try_from(index).ok().filter(|i| *i < 26).map(|i| char::from(b'A' + i))
}

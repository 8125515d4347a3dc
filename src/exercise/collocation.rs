use super::latex::{enumerate, prepare_for_latex};
use super::ExerciseSheet;
use crate::config::MarkerConfig;
use crate::nlp::Tokenize;
use crate::substitution::{Marker, TermSubstitutor};
use crate::types::exercise_data::CollocationRecord;

/// The collocation's key word is blanked inside the matching part, and the
/// gapped part is spliced back into the example sentence.
pub fn render<T: Tokenize>(
    records: &[CollocationRecord],
    substitutor: &TermSubstitutor<T>,
    markers: &MarkerConfig,
) -> ExerciseSheet {
    let mut exercise = String::new();
    let mut solutions: Vec<String> = Vec::new();

    for record in records {
        let marker = Marker::FillIn.render(&record.key, markers);
        let gapped = substitutor.substitute(&record.matching_part, &record.key, &marker);
        if !gapped.is_match() {
            tracing::debug!("key '{}' not in '{}'; skipping", record.key, record.matching_part);
            continue;
        }
        if !record.new_example.contains(&record.matching_part) {
            tracing::warn!(
                "matching part '{}' does not occur in example '{}'; skipping",
                record.matching_part,
                record.new_example
            );
            continue;
        }

        let question = prepare_for_latex(&record.new_example.replace(&record.matching_part, &gapped.text));
        if record.category.is_empty() {
            exercise.push_str(&format!("\\question {}\n", question));
        } else {
            exercise.push_str(&format!("\\question \\textit{{[{}]}} {}\n", record.category, question));
        }
        solutions.push(gapped.matched_forms.join(", "));
    }

    ExerciseSheet {
        questions: solutions.len(),
        exercise,
        solution: enumerate(&solutions),
    }
}

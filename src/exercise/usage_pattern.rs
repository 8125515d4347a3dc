use super::latex::{enumerate, prepare_for_latex};
use super::ExerciseSheet;
use crate::types::exercise_data::UsagePatternRecord;

/// The term followed by the sentence's building blocks; the learner writes the
/// sentence, which is the answer.
pub fn render(records: &[UsagePatternRecord]) -> ExerciseSheet {
    let mut exercise = String::new();
    let mut solutions: Vec<String> = Vec::new();

    for record in records {
        if record.term.trim().is_empty() || record.sentence.trim().is_empty() {
            tracing::warn!("Usage pattern record needs a term and a sentence; skipping");
            continue;
        }

        // Sorted so the prompt doesn't give away the word order.
        let mut elements: Vec<&str> = record
            .elements
            .iter()
            .chain(&record.additional_elements)
            .map(String::as_str)
            .collect();
        elements.sort_unstable_by_key(|e| e.to_lowercase());
        elements.insert(0, &record.term);

        exercise.push_str(&format!("\\question {}\n\n\\vspace*{{10ex}}\n\n", elements.join(r" \qquad ")));
        solutions.push(prepare_for_latex(&record.sentence));
    }

    ExerciseSheet {
        questions: solutions.len(),
        exercise,
        solution: enumerate(&solutions),
    }
}

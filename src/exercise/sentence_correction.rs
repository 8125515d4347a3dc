use super::latex::{enumerate, prepare_for_latex};
use super::ExerciseSheet;
use crate::types::exercise_data::SentenceCorrectionRecord;

const GAP: &str = "[gap]";

/// Correct/incorrect judgement. Questions alternate between the model's correct
/// sentence and the question with the wrong option filled in, starting with the
/// correct one.
pub fn render(records: &[SentenceCorrectionRecord]) -> ExerciseSheet {
    let mut exercise = String::new();
    let mut solutions: Vec<String> = Vec::new();

    for record in records {
        let Some(wrong_option) = record.options.get(1) else {
            tracing::warn!("Sentence correction record has fewer than two options; skipping");
            continue;
        };
        if !record.question.contains(GAP) || record.new_example.trim().is_empty() {
            tracing::warn!("'{}' has no {} or no correct sentence; skipping", record.question, GAP);
            continue;
        }

        let correct = prepare_for_latex(&record.new_example);
        if solutions.len() % 2 == 0 {
            exercise.push_str(&format!(
                "\\question {}\n\n \\begin{{oneparcheckboxes}} \\correctchoice Correct \\end{{oneparcheckboxes}} \\vspace{{10ex}}\n",
                correct
            ));
            solutions.push("Correct".to_string());
        } else {
            let incorrect = prepare_for_latex(&record.question.replace(GAP, wrong_option));
            exercise.push_str(&format!(
                "\\question {}\n\n \\begin{{oneparcheckboxes}} \\choice Correct \\end{{oneparcheckboxes}} \\vspace{{10ex}}\n",
                incorrect
            ));
            solutions.push(correct);
        }
    }

    ExerciseSheet {
        questions: solutions.len(),
        exercise,
        solution: enumerate(&solutions),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(example: &str, question: &str, options: &[&str]) -> SentenceCorrectionRecord {
        SentenceCorrectionRecord {
            new_example: example.to_string(),
            question: question.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }

    #[test]
    fn alternates_correct_and_incorrect_versions() {
        let records = [
            record("She insisted on paying.", "She insisted [gap] paying.", &["on", "to"]),
            record("He is good at maths.", "He is good [gap] maths.", &["at", "in"]),
        ];
        let sheet = render(&records);

        assert_eq!(sheet.questions, 2);
        assert!(sheet
            .exercise
            .starts_with("\\question She insisted on paying.\n\n \\begin{oneparcheckboxes} \\correctchoice Correct"));
        assert!(sheet
            .exercise
            .contains("\\question He is good in maths.\n\n \\begin{oneparcheckboxes} \\choice Correct"));
        assert_eq!(
            sheet.solution,
            "\\begin{enumerate}\n\\item Correct\n\\item He is good at maths.\n\\end{enumerate}\n"
        );
    }

    #[test]
    fn malformed_records_are_skipped() {
        let records = [
            record("She insisted on paying.", "She insisted [gap] paying.", &["on"]),
            record("She insisted on paying.", "She insisted on paying.", &["on", "to"]),
        ];
        assert_eq!(render(&records).questions, 0);
    }
}

use super::latex::{enumerate, prepare_for_latex};
use super::ExerciseSheet;
use crate::config::MarkerConfig;
use crate::substitution::Marker;
use crate::types::exercise_data::DialogueCompletionRecord;

/// Dialogue completion blanks a whole phrase by literal replacement in both
/// lines; no tokenization is involved.
pub fn render(records: &[DialogueCompletionRecord], markers: &MarkerConfig) -> ExerciseSheet {
    let mut exercise = String::new();
    let mut solutions: Vec<String> = Vec::new();

    for record in records {
        if record.dialogue.len() < 2 || record.matching_part.trim().is_empty() {
            tracing::warn!("Dialogue record needs two lines and a matching part; skipping");
            continue;
        }
        let part = &record.matching_part;
        let marker = Marker::FillIn.render(part, markers);
        let line_a = record.dialogue[0].replace(part, &marker);
        let line_b = record.dialogue[1].replace(part, &marker);
        if line_a == record.dialogue[0] && line_b == record.dialogue[1] {
            tracing::warn!("Replacement of '{}' failed in both lines; skipping", part);
            continue;
        }

        let mut question = format!(
            "\\begin{{dialogue}} \\speak{{A}} {} \\speak{{B}} {} \\end{{dialogue}}",
            prepare_for_latex(&line_a),
            prepare_for_latex(&line_b)
        );
        if !record.hint.is_empty() {
            question.push_str(&format!(" \\textit{{Hint: {}}}", record.hint));
        }
        if record.topic.is_empty() {
            exercise.push_str(&format!("\\question {}\n", question));
        } else {
            exercise.push_str(&format!("\\question \u{FF08}{}\u{FF09}\\par {}\n", record.topic, question));
        }
        solutions.push(part.clone());
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

    #[test]
    fn phrase_blanked_in_either_line() {
        let record = DialogueCompletionRecord {
            dialogue: vec!["I'm over the moon!".to_string(), "Why so happy?".to_string()],
            matching_part: "over the moon".to_string(),
            hint: "very happy".to_string(),
            topic: String::new(),
        };
        let sheet = render(&[record], &MarkerConfig::default());
        assert_eq!(sheet.questions, 1);
        assert!(sheet.exercise.contains("\\speak{A} I'm \\fillin[over the moon][1.56in]! \\speak{B}"));
        assert!(sheet.exercise.contains("\\textit{Hint: very happy}"));
        assert!(sheet.solution.contains("\\item over the moon"));
    }

    #[test]
    fn unchanged_dialogue_is_skipped() {
        let record = DialogueCompletionRecord {
            dialogue: vec!["Hello.".to_string(), "Hi.".to_string()],
            matching_part: "over the moon".to_string(),
            ..Default::default()
        };
        assert_eq!(render(&[record], &MarkerConfig::default()).questions, 0);
    }
}

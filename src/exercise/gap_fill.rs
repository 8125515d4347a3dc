//*** START FILE: src/exercise/gap_fill.rs ***//
use super::latex::{enumerate, prepare_for_latex, strip_speaker};
use super::ExerciseSheet;
use crate::config::MarkerConfig;
use crate::nlp::Tokenize;
use crate::substitution::{Marker, TermSubstitutor};
use crate::types::exercise_data::GapDialogueRecord;

/// Two-line dialogues where the target word is blanked in B's reply.
pub fn render<T: Tokenize>(
    records: &[GapDialogueRecord],
    substitutor: &TermSubstitutor<T>,
    markers: &MarkerConfig,
) -> ExerciseSheet {
    let mut exercise = String::new();
    let mut solutions: Vec<String> = Vec::new();

    for (index, record) in records.iter().enumerate() {
        if record.words.len() < 2 || record.conversation.len() < 2 {
            tracing::warn!("Gap dialogue record {} needs two words and two lines; skipping", index + 1);
            continue;
        }
        let word = &record.words[1];
        let line_a = prepare_for_latex(&strip_speaker(&record.conversation[0], "A"));
        let line_b = prepare_for_latex(&strip_speaker(&record.conversation[1], "B"));

        let marker = Marker::FillIn.render(word, markers);
        let gapped = substitutor.substitute(&line_b, word, &marker);
        if !gapped.is_match() {
            tracing::warn!("'{}' not found in reply of record {}; skipping", word, index + 1);
            continue;
        }

        exercise.push_str(&format!(
            "\\question\\ \\begin{{dialogue}} \\speak{{A}} {} \\speak{{B}} {} \\end{{dialogue}}\n",
            line_a, gapped.text
        ));

        let definition = record.definitions.get(1).map(String::as_str).unwrap_or_default();
        solutions.push(format!(
            "{}. \\textit{{{}}}",
            gapped.matched_forms.join(", "),
            prepare_for_latex(definition)
        ));
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
    use crate::nlp::RuleTokenizer;

    fn record(word: &str, reply: &str) -> GapDialogueRecord {
        GapDialogueRecord {
            words: vec!["forget".to_string(), word.to_string()],
            definitions: vec!["not remember".to_string(), "make someone remember".to_string()],
            conversation: vec!["A: Did you call Mum?".to_string(), reply.to_string()],
        }
    }

    #[test]
    fn blanks_target_word_in_reply() {
        let substitutor = TermSubstitutor::new(RuleTokenizer::default());
        let sheet = render(
            &[record("remind", "B: No, thanks for reminding me!")],
            &substitutor,
            &MarkerConfig::default(),
        );
        assert_eq!(sheet.questions, 1);
        assert_eq!(
            sheet.exercise,
            "\\question\\ \\begin{dialogue} \\speak{A} Did you call Mum? \\speak{B} No, thanks for \\fillin[remind][0.72in] me! \\end{dialogue}\n"
        );
        assert!(sheet.solution.contains("\\item reminding. \\textit{make someone remember}"));
    }

    #[test]
    fn records_without_match_or_fields_are_skipped() {
        let substitutor = TermSubstitutor::new(RuleTokenizer::default());
        let broken = GapDialogueRecord { words: vec!["x".to_string()], ..Default::default() };
        let sheet = render(
            &[record("remind", "B: Sure."), broken],
            &substitutor,
            &MarkerConfig::default(),
        );
        assert_eq!(sheet.questions, 0);
        assert!(sheet.exercise.is_empty());
        assert_eq!(sheet.solution, "\\begin{enumerate}\n\\end{enumerate}\n");
    }
}
//*** END FILE: src/exercise/gap_fill.rs ***//

use super::latex::int_to_roman;
use super::{ExerciseKind, ExerciseSheet};

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub kind: ExerciseKind,
    pub sheet: ExerciseSheet,
}

/// Collects rendered sheets into one worksheet, numbering the parts I, II, III...
#[derive(Debug, Clone, Default)]
pub struct ExerciseGatherer {
    sections: Vec<Section>,
}

impl ExerciseGatherer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a sheet as the next part. Sheets without questions are dropped so
    /// part numbers stay contiguous; returns whether the sheet was kept.
    pub fn push(&mut self, kind: ExerciseKind, sheet: ExerciseSheet) -> bool {
        if sheet.questions == 0 {
            tracing::warn!("{} sheet has no questions; not adding it", kind);
            return false;
        }
        self.sections.push(Section { kind, sheet });
        true
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Part numeral and section for a 1-based index.
    pub fn section(&self, index: usize) -> Option<(String, &Section)> {
        let section = self.sections.get(index.checked_sub(1)?)?;
        Some((int_to_roman(index), section))
    }

    pub fn assemble(&self) -> ExerciseSheet {
        let mut assembled = ExerciseSheet::default();
        for (i, section) in self.sections.iter().enumerate() {
            let heading = format!("\\section*{{Part {}: {}}}\n", int_to_roman(i + 1), section.kind.title());
            assembled.exercise.push_str(&heading);
            assembled.exercise.push_str("\\begin{questions}\n");
            assembled.exercise.push_str(&section.sheet.exercise);
            assembled.exercise.push_str("\\end{questions}\n");
            assembled.solution.push_str(&heading);
            assembled.solution.push_str(&section.sheet.solution);
            assembled.questions += section.sheet.questions;
        }
        tracing::debug!("Assembled {} parts, {} questions", self.sections.len(), assembled.questions);
        assembled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(exercise: &str, solution: &str, questions: usize) -> ExerciseSheet {
        ExerciseSheet { exercise: exercise.to_string(), solution: solution.to_string(), questions }
    }

    #[test]
    fn parts_are_numbered_in_order() {
        let mut gatherer = ExerciseGatherer::new();
        assert!(gatherer.push(ExerciseKind::Translation, sheet("\\question a\n", "S1\n", 1)));
        assert!(!gatherer.push(ExerciseKind::Collocation, sheet("", "", 0)));
        assert!(gatherer.push(ExerciseKind::UsagePattern, sheet("\\question b\n\\question c\n", "S2\n", 2)));

        let assembled = gatherer.assemble();
        assert_eq!(gatherer.len(), 2);
        assert_eq!(assembled.questions, 3);
        assert_eq!(
            assembled.exercise,
            "\\section*{Part I: Translation}\n\\begin{questions}\n\\question a\n\\end{questions}\n\
             \\section*{Part II: Usage pattern}\n\\begin{questions}\n\\question b\n\\question c\n\\end{questions}\n"
        );
        assert_eq!(
            assembled.solution,
            "\\section*{Part I: Translation}\nS1\n\\section*{Part II: Usage pattern}\nS2\n"
        );
    }

    #[test]
    fn sections_are_looked_up_from_one() {
        let mut gatherer = ExerciseGatherer::new();
        gatherer.push(ExerciseKind::FillInTheGap, sheet("q", "s", 1));
        let (numeral, section) = gatherer.section(1).unwrap();
        assert_eq!(numeral, "I");
        assert_eq!(section.kind, ExerciseKind::FillInTheGap);
        assert!(gatherer.section(0).is_none());
        assert!(gatherer.section(2).is_none());
    }
}

use crate::config::MarkerConfig;

/// The blank spliced in place of a matched term. Widths scale with the
/// number of characters in the answer.
#[derive(Debug, Clone, PartialEq)]
pub enum Marker {
    /// `\fillin[answer][W in]`: a blank that prints the answer on the solution sheet.
    FillIn,
    /// `\fillin[]` with no stored answer.
    FillInBlank,
    /// `\rule{L cm}{0.15mm}`
    Rule,
    Underscore,
    Literal(String),
}

pub fn gap_length_inches(term: &str, config: &MarkerConfig) -> f64 {
    let chars = term.chars().count() as f64;
    (chars * config.inches_per_char).max(config.min_inches)
}

impl Marker {
    pub fn from_style(style: &str) -> Option<Marker> {
        match style.trim().to_lowercase().as_str() {
            "fill-in" | "fillin" => Some(Marker::FillIn),
            "fill-in-blank" => Some(Marker::FillInBlank),
            "rule" => Some(Marker::Rule),
            "underscore" => Some(Marker::Underscore),
            _ => None,
        }
    }

    pub fn render(&self, term: &str, config: &MarkerConfig) -> String {
        let chars = term.chars().count();
        match self {
            Marker::FillIn => format!("\\fillin[{}][{:.2}in]", term, gap_length_inches(term, config)),
            Marker::FillInBlank => "\\fillin[]".to_string(),
            Marker::Rule => format!("\\rule{{{}cm}}{{0.15mm}}", config.rule_cm_per_char * chars as f64),
            Marker::Underscore => "_".repeat(chars.max(config.min_underscores)),
            Marker::Literal(s) => s.clone(),
        }
    }
}

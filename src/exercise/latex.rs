/// Normalizes model output for LaTeX: straight quotes, `--` for en dashes,
/// TeX-style opening/closing quotes and `\pounds`.
pub fn prepare_for_latex(text: &str) -> String {
    let unified = text
        .replace(['\u{2019}', '\u{2018}'], "'")
        .replace(['\u{201C}', '\u{201D}'], "\"")
        .replace('\u{2013}', "--");

    let words: Vec<String> = unified
        .split(' ')
        .map(|word| {
            let mut word = word.to_string();
            if let Some(rest) = word.strip_prefix('\'') {
                word = format!("`{}", rest);
            }
            if let Some(rest) = word.strip_prefix('"') {
                word = format!("``{}", rest);
            }
            if let Some(rest) = word.strip_suffix('"') {
                word = format!("{}''", rest);
            }
            word
        })
        .collect();

    words.join(" ").replace('\u{00A3}', "\\pounds")
}

/// Drops a leading `A:` / `B:` speaker label.
pub fn strip_speaker(line: &str, speaker: &str) -> String {
    let label = format!("{}:", speaker);
    let line = line.trim_start();
    line.strip_prefix(&label).unwrap_or(line).trim().to_string()
}

/// Roman numeral for section numbering; `0` gives an empty string.
pub fn int_to_roman(mut num: usize) -> String {
    const NUMERALS: [(usize, &str); 13] = [
        (1000, "M"), (900, "CM"), (500, "D"), (400, "CD"),
        (100, "C"), (90, "XC"), (50, "L"), (40, "XL"),
        (10, "X"), (9, "IX"), (5, "V"), (4, "IV"),
        (1, "I"),
    ];
    let mut roman = String::new();
    for (value, symbol) in NUMERALS {
        while num >= value {
            roman.push_str(symbol);
            num -= value;
        }
    }
    roman
}

pub fn enumerate(items: &[String]) -> String {
    let mut out = String::from("\\begin{enumerate}\n");
    for item in items {
        out.push_str("\\item ");
        out.push_str(item);
        out.push('\n');
    }
    out.push_str("\\end{enumerate}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_and_dashes() {
        assert_eq!(
            prepare_for_latex("\u{201C}Hi,\u{201D} she said \u{2013} \u{2018}really\u{2019}."),
            "``Hi,'' she said -- `really'."
        );
    }

    #[test]
    fn pounds() {
        assert_eq!(prepare_for_latex("It costs \u{00A3}5."), "It costs \\pounds5.");
    }

    #[test]
    fn speaker_labels() {
        assert_eq!(strip_speaker("A: Are you coming?", "A"), "Are you coming?");
        assert_eq!(strip_speaker("  B:Sure.", "B"), "Sure.");
    }

    #[test]
    fn speaker_label_inside_the_line_is_kept() {
        assert_eq!(strip_speaker("Plan A: leave now.", "A"), "Plan A: leave now.");
        assert_eq!(strip_speaker("A: Plan A: stay.", "A"), "Plan A: stay.");
    }

    #[test]
    fn roman_numerals() {
        assert_eq!(int_to_roman(0), "");
        assert_eq!(int_to_roman(4), "IV");
        assert_eq!(int_to_roman(9), "IX");
        assert_eq!(int_to_roman(14), "XIV");
        assert_eq!(int_to_roman(1994), "MCMXCIV");
    }

    #[test]
    fn enumerate_wraps_items() {
        assert_eq!(
            enumerate(&["one".to_string()]),
            "\\begin{enumerate}\n\\item one\n\\end{enumerate}\n"
        );
    }
}

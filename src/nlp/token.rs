use serde::Serialize;

/// One token of a sentence. Concatenating `text` and `whitespace` over all
/// tokens gives back the source text unchanged.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Token {
    pub text: String,
    /// Lowercase dictionary form.
    pub lemma: String,
    /// Whitespace that followed the token in the source.
    pub whitespace: String,
}

impl Token {
    pub fn new(text: &str, lemma: &str, whitespace: &str) -> Self {
        Token {
            text: text.to_string(),
            lemma: lemma.to_string(),
            whitespace: whitespace.to_string(),
        }
    }

    pub fn text_with_ws(&self) -> String {
        format!("{}{}", self.text, self.whitespace)
    }

    /// Case-insensitive match against either the lemma or the surface form.
    pub fn matches(&self, needle_lower: &str) -> bool {
        !needle_lower.is_empty()
            && (self.lemma.to_lowercase() == needle_lower || self.text.to_lowercase() == needle_lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_on_lemma_or_surface() {
        let token = Token::new("Reminded", "remind", " ");
        assert!(token.matches("remind"));
        assert!(token.matches("reminded"));
        assert!(!token.matches("remin"));
        assert!(!token.matches(""));
    }

    #[test]
    fn text_with_ws_keeps_trailing_space() {
        assert_eq!(Token::new("me", "I", "  ").text_with_ws(), "me  ");
    }
}

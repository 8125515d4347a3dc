//*** START FILE: src/substitution/substitutor.rs ***//
use rayon::prelude::*;
use serde::Serialize;

use crate::nlp::{Token, Tokenize};

/// Result of replacing a term in a sentence.
///
/// When nothing matched, both fields are empty rather than `text` holding the
/// untouched sentence. Exercise builders rely on that to skip the sentence;
/// use [`Substitution::is_match`] instead of comparing against `""`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Substitution {
    pub text: String,
    /// Surface forms that were removed, in reading order. This is the answer key.
    pub matched_forms: Vec<String>,
}

impl Substitution {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_match(&self) -> bool {
        !self.matched_forms.is_empty()
    }
}

/// Locates a term in a sentence (by surface form or lemma) and splices a marker
/// over every occurrence.
#[derive(Debug, Clone)]
pub struct TermSubstitutor<T: Tokenize> {
    tokenizer: T,
}

impl<T: Tokenize> TermSubstitutor<T> {
    pub fn new(tokenizer: T) -> Self {
        TermSubstitutor { tokenizer }
    }

    pub fn tokenizer(&self) -> &T {
        &self.tokenizer
    }

    pub fn substitute(&self, sentence: &str, term: &str, marker: &str) -> Substitution {
        let term = term.trim();
        if sentence.is_empty() || term.is_empty() {
            return Substitution::none();
        }

        let result = if term.contains('-') {
            // Hyphenated compounds don't lemmatize reliably; match on whitespace units instead.
            substitute_hyphenated(sentence, term, marker)
        } else {
            let term_words: Vec<String> = self
                .tokenizer
                .tokenize(term)
                .into_iter()
                .map(|t| t.text.trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect();
            let tokens = self.tokenizer.tokenize(sentence);
            if term_words.len() > 1 {
                substitute_phrase(&tokens, &term_words, marker)
            } else {
                substitute_tokens(&tokens, &term.to_lowercase(), marker)
            }
        };

        tracing::debug!(term, matches = result.matched_forms.len(), "substituted term");
        result
    }

    /// Runs [`substitute`](Self::substitute) over many `(sentence, term)` pairs in parallel.
    /// `marker_for` builds the marker from the term, e.g. to size the blank. Output order
    /// follows input order.
    pub fn substitute_batch<S, F>(&self, pairs: &[(S, S)], marker_for: F) -> Vec<Substitution>
    where
        S: AsRef<str> + Sync,
        F: Fn(&str) -> String + Sync,
    {
        pairs
            .par_iter()
            .map(|(sentence, term)| {
                let marker = marker_for(term.as_ref());
                self.substitute(sentence.as_ref(), term.as_ref(), &marker)
            })
            .collect()
    }
}

fn substitute_tokens(tokens: &[Token], term_lower: &str, marker: &str) -> Substitution {
    let mut pieces = Vec::with_capacity(tokens.len());
    let mut matched_forms = Vec::new();

    for token in tokens {
        if token.matches(term_lower) {
            pieces.push(format!("{}{}", marker, token.whitespace));
            matched_forms.push(token.text.clone());
        } else {
            pieces.push(token.text_with_ws());
        }
    }

    if pieces.is_empty() || matched_forms.is_empty() {
        return Substitution::none();
    }
    Substitution { text: pieces.concat(), matched_forms }
}

/// Multi-token terms: a window of consecutive tokens matches when each token
/// matches the corresponding term word. The whole window gets one marker.
fn substitute_phrase(tokens: &[Token], term_words: &[String], marker: &str) -> Substitution {
    let width = term_words.len();
    let mut pieces = Vec::with_capacity(tokens.len());
    let mut matched_forms = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let window_matches = i + width <= tokens.len()
            && tokens[i..i + width]
                .iter()
                .zip(term_words)
                .all(|(token, word)| token.matches(word));

        if window_matches {
            let window = &tokens[i..i + width];
            let last = &window[width - 1];
            let mut form: String = window[..width - 1].iter().map(Token::text_with_ws).collect();
            form.push_str(&last.text);

            pieces.push(format!("{}{}", marker, last.whitespace));
            matched_forms.push(form);
            i += width;
        } else {
            pieces.push(tokens[i].text_with_ws());
            i += 1;
        }
    }

    if matched_forms.is_empty() {
        return Substitution::none();
    }
    Substitution { text: pieces.concat(), matched_forms }
}

fn substitute_hyphenated(sentence: &str, term: &str, marker: &str) -> Substitution {
    let term_lower = term.to_ascii_lowercase();
    let mut units = Vec::new();
    let mut matched_forms = Vec::new();

    for unit in sentence.split(' ') {
        // ASCII lowercasing keeps byte offsets, so indices into `lower` are valid in `unit`.
        let lower = unit.to_ascii_lowercase();
        if lower.contains(&term_lower) {
            let mut replaced = String::with_capacity(unit.len());
            let mut last = 0;
            for (start, _) in lower.match_indices(&term_lower) {
                replaced.push_str(&unit[last..start]);
                replaced.push_str(marker);
                last = start + term_lower.len();
            }
            replaced.push_str(&unit[last..]);
            units.push(replaced);
            matched_forms.push(term.to_string());
        } else {
            units.push(unit.to_string());
        }
    }

    if units.is_empty() || matched_forms.is_empty() {
        return Substitution::none();
    }
    Substitution { text: units.join(" "), matched_forms }
}

//*** END FILE: src/substitution/substitutor.rs ***//

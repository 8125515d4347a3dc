//*** START FILE: src/nlp/tokenizer.rs ***//
use once_cell::sync::Lazy;
use regex::Regex;

use super::lemmatizer::Lemmatizer;
use super::token::Token;

/// Anything that can split a sentence into lemmatized tokens.
/// Implementations must keep `text + whitespace` lossless over the sentence.
pub trait Tokenize: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

// A word (letters/digits with internal apostrophes) or any single non-space character,
// followed by the whitespace run after it.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([\p{L}\p{N}]+(?:['\x{2019}][\p{L}\p{N}]+)*|\S)(\s*)").expect("valid token regex")
});

static LEADING_WS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s+").expect("valid whitespace regex"));

const CLITICS: &[&str] = &["n't", "'s", "'re", "'ve", "'ll", "'d", "'m"];

/// Splits an English clitic off the end of a word: `don't` -> (`do`, `n't`),
/// `Tom's` -> (`Tom`, `'s`). Words like `o'clock` are left whole.
fn split_clitic(word: &str) -> Option<(&str, &str)> {
    let normalized = word.to_lowercase().replace('\u{2019}', "'");
    for clitic in CLITICS {
        if normalized.ends_with(clitic) && normalized.chars().count() > clitic.chars().count() {
            // `’` is 3 bytes and `'` is 1, so find the split point by chars.
            let keep = word.chars().count() - clitic.chars().count();
            let byte_idx = word.char_indices().nth(keep).map(|(i, _)| i)?;
            return Some((&word[..byte_idx], &word[byte_idx..]));
        }
    }
    None
}

/// Regex tokenizer backed by the rule-based [`Lemmatizer`].
#[derive(Debug, Clone, Default)]
pub struct RuleTokenizer {
    lemmatizer: Lemmatizer,
}

impl RuleTokenizer {
    pub fn new(lemmatizer: Lemmatizer) -> Self {
        RuleTokenizer { lemmatizer }
    }

    pub fn lemmatizer(&self) -> &Lemmatizer {
        &self.lemmatizer
    }

    fn push_word(&self, tokens: &mut Vec<Token>, word: &str, whitespace: &str) {
        match split_clitic(word) {
            Some((stem, clitic)) => {
                tokens.push(Token::new(stem, &self.lemmatizer.lemmatize(stem), ""));
                tokens.push(Token::new(clitic, &self.lemmatizer.lemmatize(clitic), whitespace));
            }
            None => tokens.push(Token::new(word, &self.lemmatizer.lemmatize(word), whitespace)),
        }
    }
}

impl Tokenize for RuleTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        if text.is_empty() {
            return tokens;
        }

        // Leading whitespace becomes its own token so the sentence can be rebuilt exactly.
        if let Some(ws) = LEADING_WS_RE.find(text) {
            tokens.push(Token::new(ws.as_str(), ws.as_str(), ""));
        }

        for caps in TOKEN_RE.captures_iter(text) {
            let word = caps.get(1).map_or("", |m| m.as_str());
            let whitespace = caps.get(2).map_or("", |m| m.as_str());
            self.push_word(&mut tokens, word, whitespace);
        }
        tokens
    }
}

//*** END FILE: src/nlp/tokenizer.rs ***//

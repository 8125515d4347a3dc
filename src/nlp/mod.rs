pub mod lemmatizer;
pub mod token;
pub mod tokenizer;

pub use lemmatizer::Lemmatizer;
pub use token::Token;
pub use tokenizer::{RuleTokenizer, Tokenize};

// Text processing shared across scoring stages.

pub mod tokenize;

pub use tokenize::{content_tokens, is_punctuation, is_stop_word, tokenize};

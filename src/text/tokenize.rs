// Word tokenizer shared by bias scoring, keyword counting and sentiment.
//
// Text is lowercased and split into word tokens and single-character
// punctuation tokens. Apostrophes and hyphens stay inside a word when they
// sit between two alphanumeric characters, and dotted abbreviations such as
// "u.s." stay whole. Clitics are then split off the way the embedding corpus
// was tokenized ("don't" -> "do" + "n't", "senate's" -> "senate" + "'s"), so
// the tokens line up with its vocabulary. Stop words are NLTK's English list.

use std::collections::HashSet;
use std::sync::LazyLock;

use stop_words::{get, LANGUAGE};

static ENGLISH_STOP_WORDS: LazyLock<HashSet<String>> =
    LazyLock::new(|| get(LANGUAGE::English).into_iter().collect());

/// Split text into lowercase word and punctuation tokens, in reading order.
pub fn tokenize(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.to_lowercase().chars().map(normalize_quote).collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if !c.is_alphanumeric() {
            tokens.push(c.to_string());
            i += 1;
            continue;
        }

        let start = i;
        let mut abbreviation = false;
        i += 1;
        while i < chars.len() {
            if chars[i].is_alphanumeric() {
                i += 1;
            } else if is_joiner(chars[i])
                && chars.get(i + 1).is_some_and(|next| next.is_alphanumeric())
            {
                i += 2;
            } else if is_abbreviation_dot(&chars, i) {
                abbreviation = true;
                i += 2;
            } else {
                break;
            }
        }
        // "u.s." keeps its final dot; a plain "senate." does not.
        if abbreviation && chars.get(i) == Some(&'.') {
            i += 1;
        }

        let word: String = chars[start..i].iter().collect();
        push_word(&mut tokens, word);
    }

    tokens
}

/// Tokens worth embedding: no stop-words, no punctuation.
pub fn content_tokens(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| !is_punctuation(t) && !is_stop_word(t))
        .collect()
}

/// True for tokens with no letters or digits at all.
pub fn is_punctuation(token: &str) -> bool {
    !token.chars().any(char::is_alphanumeric)
}

/// True if the token is on the English stop-word list.
pub fn is_stop_word(token: &str) -> bool {
    ENGLISH_STOP_WORDS.contains(token)
}

fn normalize_quote(c: char) -> char {
    match c {
        '\u{2018}' | '\u{2019}' | '\u{02bc}' => '\'',
        other => other,
    }
}

fn is_joiner(c: char) -> bool {
    c == '\'' || c == '-'
}

// A dot inside an abbreviation: followed by a single letter and another dot.
fn is_abbreviation_dot(chars: &[char], i: usize) -> bool {
    chars[i] == '.'
        && chars.get(i + 1).is_some_and(|c| c.is_alphabetic())
        && chars.get(i + 2) == Some(&'.')
}

fn push_word(tokens: &mut Vec<String>, word: String) {
    if let Some(stem) = word.strip_suffix("n't") {
        if !stem.is_empty() && !stem.contains('\'') {
            tokens.push(stem.to_string());
            tokens.push("n't".to_string());
            return;
        }
    }

    match word.rfind('\'') {
        Some(pos) => {
            tokens.push(word[..pos].to_string());
            tokens.push(word[pos..].to_string());
        }
        None => tokens.push(word),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_splits_punctuation() {
        let tokens = tokenize("Congress passed the Bill, finally!");
        assert_eq!(
            tokens,
            vec!["congress", "passed", "the", "bill", ",", "finally", "!"]
        );
    }

    #[test]
    fn test_contraction_split() {
        assert_eq!(tokenize("Don't"), vec!["do", "n't"]);
        assert_eq!(tokenize("the senate's vote"), vec!["the", "senate", "'s", "vote"]);
    }

    #[test]
    fn test_dotted_abbreviations_kept_whole() {
        assert_eq!(tokenize("The U.S. Senate"), vec!["the", "u.s.", "senate"]);
        assert_eq!(tokenize("in washington, d.c."), vec!["in", "washington", ",", "d.c."]);
        assert_eq!(tokenize("the u.s.a. team"), vec!["the", "u.s.a.", "team"]);
    }

    #[test]
    fn test_sentence_final_dot_is_punctuation() {
        assert_eq!(tokenize("It passed the senate."), vec!["it", "passed", "the", "senate", "."]);
        assert_eq!(tokenize("a.b"), vec!["a", ".", "b"]);
    }

    #[test]
    fn test_curly_apostrophe_normalized() {
        assert_eq!(tokenize("nation\u{2019}s"), vec!["nation", "'s"]);
    }

    #[test]
    fn test_hyphenated_word_kept() {
        assert_eq!(tokenize("well-known pro-choice"), vec!["well-known", "pro-choice"]);
    }

    #[test]
    fn test_dangling_joiners_are_punctuation() {
        assert_eq!(tokenize("'quoted' -x"), vec!["'", "quoted", "'", "-", "x"]);
    }

    #[test]
    fn test_unicode_letters_stay_in_words() {
        assert_eq!(tokenize("Café policy"), vec!["café", "policy"]);
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \n\t ").is_empty());
    }

    #[test]
    fn test_is_punctuation() {
        assert!(is_punctuation(","));
        assert!(is_punctuation("..."));
        assert!(!is_punctuation("n't"));
        assert!(!is_punctuation("2024"));
    }

    #[test]
    fn test_seed_words_survive_stop_word_filter() {
        use crate::bias::seeds::{LEFT_SEEDS, RIGHT_SEEDS};

        for seed in LEFT_SEEDS.iter().chain(RIGHT_SEEDS) {
            assert_eq!(content_tokens(seed), vec![seed.to_string()], "seed {seed} was filtered");
        }
    }

    #[test]
    fn test_loaded_content_words_are_not_stop_words() {
        for word in ["order", "right", "state", "world", "group", "interest", "work", "members"] {
            assert!(!is_stop_word(word), "{word} is treated as a stop word");
        }
    }

    #[test]
    fn test_content_tokens_drop_stop_words() {
        let tokens = content_tokens("The senator and the union, of course.");
        assert!(tokens.contains(&"senator".to_string()));
        assert!(tokens.contains(&"union".to_string()));
        assert!(!tokens.contains(&"the".to_string()));
        assert!(!tokens.contains(&"and".to_string()));
        assert!(!tokens.iter().any(|t| is_punctuation(t)));
    }
}

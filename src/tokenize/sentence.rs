use std::collections::HashSet;

use lazy_static::lazy_static;

/// Closing punctuation that may trail a sentence-final mark: `said."`, `(yes!)`.
const CLOSERS: &[char] = &['"', '\'', ')', ']', '}', '\u{2019}', '\u{201d}'];

lazy_static! {
    /// Lowercased, period-free abbreviations that rarely end a sentence.
    static ref ABBREVIATIONS: HashSet<&'static str> = [
        "mr", "mrs", "ms", "dr", "prof", "rev", "fr", "hon", "st", "sr", "jr",
        "gen", "gov", "sen", "rep", "lt", "col", "capt", "sgt", "cmdr", "adm",
        "mt", "ft", "ave", "blvd", "dept", "univ", "assn", "bros", "corp",
        "vs", "no", "nos", "vol", "fig", "approx", "est", "cf",
        "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept",
        "oct", "nov", "dec",
    ]
    .into_iter()
    .collect();

    /// Words that usually open a sentence, even right after an abbreviation.
    static ref SENTENCE_STARTERS: HashSet<&'static str> = [
        "i", "he", "she", "it", "we", "they", "you", "his", "her", "its", "our",
        "their", "my", "your", "the", "a", "an", "this", "that", "these",
        "those", "there", "here", "but", "and", "so", "or", "yet", "then",
        "now", "however", "meanwhile", "still", "also", "today", "tomorrow",
        "yesterday", "if", "when", "while", "after", "before", "as", "in",
        "on", "at", "for", "what", "why", "how", "where", "who", "not", "no",
        "some", "many", "most", "all", "each", "both",
    ]
    .into_iter()
    .collect();
}

/// Splits running text into sentences the way Punkt does without a trained
/// model.
///
/// Every token ending in `.`, `?` or `!` (optionally followed by closing
/// quotes or brackets) ends a sentence, whatever the case of the next word.
/// The exceptions are abbreviations, initials, dotted acronyms and ellipses:
/// after those the sentence continues unless the next word looks like a
/// sentence opener. That means either a common starter (`He`, `Then`,
/// `Tomorrow`), or a capitalized word that appears in lowercase elsewhere in
/// the text. Newlines are ordinary whitespace.
#[derive(Debug, Default, Clone, Copy)]
pub struct SentenceTokenizer;

impl SentenceTokenizer {
    pub fn new() -> Self {
        SentenceTokenizer
    }

    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let tokens = tokens_with_offsets(text);
        let lowercase = lowercase_forms(&tokens);

        let mut sentences = Vec::new();
        let mut begin: Option<usize> = None;

        for (i, &(start, token)) in tokens.iter().enumerate() {
            let first = *begin.get_or_insert(start);
            let ends = match tokens.get(i + 1) {
                Some(&(_, next)) => breaks_between(token, next, &lowercase),
                None => true,
            };
            if ends {
                sentences.push(text[first..start + token.len()].to_string());
                begin = None;
            }
        }

        sentences
    }
}

fn tokens_with_offsets(text: &str) -> Vec<(usize, &str)> {
    let mut out = Vec::new();
    let mut start = None;

    for (i, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if let Some(s) = start.take() {
                out.push((s, &text[s..i]));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        out.push((s, &text[s..]));
    }
    out
}

fn bare_word(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric())
}

/// Lowercased forms of every word the text itself writes in lowercase.
fn lowercase_forms(tokens: &[(usize, &str)]) -> HashSet<String> {
    tokens
        .iter()
        .map(|&(_, token)| bare_word(token))
        .filter(|word| word.chars().next().is_some_and(char::is_lowercase))
        .map(str::to_lowercase)
        .collect()
}

fn breaks_between(token: &str, next: &str, lowercase: &HashSet<String>) -> bool {
    let core = token.trim_end_matches(CLOSERS);
    if core.ends_with(|c: char| c == '?' || c == '!') {
        return true;
    }
    let Some(stem) = core.strip_suffix('.') else {
        return false;
    };

    let ellipsis = stem.ends_with('.');
    let word = stem.trim_start_matches(|c: char| !c.is_alphanumeric());
    if ellipsis || is_abbreviation(word) {
        return starts_sentence(next, lowercase);
    }
    true
}

fn is_abbreviation(word: &str) -> bool {
    if word.is_empty() {
        return false;
    }

    // Initials and dotted acronyms: "J", "U.S", "p.m"
    if word
        .split('.')
        .all(|part| part.chars().count() == 1 && part.chars().all(char::is_alphabetic))
    {
        return true;
    }

    ABBREVIATIONS.contains(word.to_lowercase().as_str())
}

fn starts_sentence(next: &str, lowercase: &HashSet<String>) -> bool {
    let word = bare_word(next);
    if !word.chars().next().is_some_and(char::is_uppercase) {
        return false;
    }

    let lower = word.to_lowercase();
    SENTENCE_STARTERS.contains(lower.as_str()) || lowercase.contains(&lower)
}

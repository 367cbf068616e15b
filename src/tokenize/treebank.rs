use lazy_static::lazy_static;
use regex::Regex;

/// A regex and the replacement applied to every match of it.
struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

fn rules(table: &[(&str, &'static str)]) -> Vec<Rule> {
    table
        .iter()
        .map(|&(pattern, replacement)| Rule {
            pattern: Regex::new(pattern).expect("treebank rule must be a valid regex"),
            replacement,
        })
        .collect()
}

lazy_static! {
    static ref STARTING_QUOTES: Vec<Rule> = rules(&[
        (r#"^""#, "``"),
        (r"(``)", " ${1} "),
        (r#"([ (\[{<])("|'{2})"#, "${1} `` "),
    ]);

    static ref PUNCTUATION: Vec<Rule> = rules(&[
        (r"([:,])([^\d])", " ${1} ${2}"),
        (r"([:,])$", " ${1} "),
        (r"\.\.\.", " ... "),
        (r"[;@#$%&]", " ${0} "),
        (r#"([^\.])(\.)([\]\)}>"']*)\s*$"#, "${1} ${2}${3} "),
        (r"[?!]", " ${0} "),
        (r"([^'])' ", "${1} ' "),
    ]);

    static ref BRACKETS: Vec<Rule> = rules(&[
        (r"[\]\[\(\)\{\}<>]", " ${0} "),
        (r"--", " -- "),
    ]);

    static ref ENDING_QUOTES: Vec<Rule> = rules(&[
        (r"''", " '' "),
        (r#"""#, " '' "),
        (r"([^' ])('[sS]|'[mM]|'[dD]|') ", "${1} ${2} "),
        (r"([^' ])('ll|'LL|'re|'RE|'ve|'VE|n't|N'T) ", "${1} ${2} "),
    ]);

    // Robert MacIntyre's contraction list from the original Treebank sed script.
    static ref CONTRACTIONS: Vec<Rule> = rules(&[
        (r"(?i)\b(can)(not)\b", " ${1} ${2} "),
        (r"(?i)\b(d)('ye)\b", " ${1} ${2} "),
        (r"(?i)\b(gim)(me)\b", " ${1} ${2} "),
        (r"(?i)\b(gon)(na)\b", " ${1} ${2} "),
        (r"(?i)\b(got)(ta)\b", " ${1} ${2} "),
        (r"(?i)\b(lem)(me)\b", " ${1} ${2} "),
        (r"(?i)\b(more)('n)\b", " ${1} ${2} "),
        (r"(?i)\b(wan)(na)\s", " ${1} ${2} "),
        (r"(?i) ('t)(is)\b", " ${1} ${2} "),
        (r"(?i) ('t)(was)\b", " ${1} ${2} "),
    ]);
}

fn apply(text: String, table: &[Rule]) -> String {
    table.iter().fold(text, |text, rule| {
        rule.pattern.replace_all(&text, rule.replacement).into_owned()
    })
}

/// Word tokenizer following the Penn Treebank conventions: punctuation is
/// split from words, double quotes become ``` `` ``` and `''`, and clitics
/// such as `n't`, `'s` and `'ll` become tokens of their own.
///
/// The tokenizer expects a single sentence; only a final period is split off.
#[derive(Debug, Default, Clone, Copy)]
pub struct TreebankWordTokenizer;

impl TreebankWordTokenizer {
    pub fn new() -> Self {
        TreebankWordTokenizer
    }

    pub fn tokenize(&self, sentence: &str) -> Vec<String> {
        let mut text = apply(sentence.to_string(), &STARTING_QUOTES);
        text = apply(text, &PUNCTUATION);
        text = apply(text, &BRACKETS);

        text = format!(" {} ", text);
        text = apply(text, &ENDING_QUOTES);
        text = apply(text, &CONTRACTIONS);

        text.split_whitespace().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tokens(sentence: &str) -> Vec<String> {
        TreebankWordTokenizer::new().tokenize(sentence)
    }

    #[test]
    fn splits_final_period_and_clitic() {
        assert_eq!(tokens("It's fine."), ["It", "'s", "fine", "."]);
    }

    #[test]
    fn splits_negation() {
        assert_eq!(
            tokens("You don't know."),
            ["You", "do", "n't", "know", "."]
        );
    }

    #[test]
    fn splits_will_and_am() {
        assert_eq!(
            tokens("They'll save and invest more."),
            ["They", "'ll", "save", "and", "invest", "more", "."]
        );
        assert_eq!(
            tokens("I'm gonna win."),
            ["I", "'m", "gon", "na", "win", "."]
        );
    }

    #[test]
    fn splits_cannot() {
        assert_eq!(tokens("I cannot go."), ["I", "can", "not", "go", "."]);
    }

    #[test]
    fn separates_commas_but_not_thousands() {
        assert_eq!(tokens("Hello, world!"), ["Hello", ",", "world", "!"]);
        assert_eq!(tokens("1,000 people."), ["1,000", "people", "."]);
    }

    #[test]
    fn converts_double_quotes() {
        assert_eq!(
            tokens("\"Stop,\" she said."),
            ["``", "Stop", ",", "''", "she", "said", "."]
        );
    }

    #[test]
    fn splits_brackets_and_dashes() {
        assert_eq!(
            tokens("Wait (really)--yes."),
            ["Wait", "(", "really", ")", "--", "yes", "."]
        );
    }

    #[test]
    fn splits_ellipsis_and_symbols() {
        assert_eq!(tokens("Well... maybe."), ["Well", "...", "maybe", "."]);
        assert_eq!(tokens("$5 & 10%"), ["$", "5", "&", "10", "%"]);
    }

    #[test]
    fn keeps_internal_periods() {
        assert_eq!(
            tokens("Mr. Smith paid 3.50 dollars."),
            ["Mr.", "Smith", "paid", "3.50", "dollars", "."]
        );
    }

    #[test]
    fn empty_sentence_has_no_tokens() {
        assert!(tokens("   ").is_empty());
    }
}

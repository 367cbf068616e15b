//! Sentence splitting and Penn Treebank word tokenization.

mod sentence;
mod treebank;

pub use sentence::SentenceTokenizer;
pub use treebank::TreebankWordTokenizer;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::fixtures;

/// Sentences flattened across every input text, with the word tokens of
/// each one. `words[i]` is always the tokenization of `sents[i]`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Treebank {
    pub sents: Vec<String>,
    pub words: Vec<Vec<String>>,
}

impl Treebank {
    /// Split each input into sentences, in input order, and tokenize each sentence.
    pub fn build<S: AsRef<str>>(inputs: &[S]) -> Treebank {
        let sentences = SentenceTokenizer::new();
        let words = TreebankWordTokenizer::new();

        let mut out = Treebank::default();
        for (idx, text) in inputs.iter().enumerate() {
            let split = sentences.tokenize(text.as_ref());
            debug!(input = idx, sentences = split.len(), "split input");

            for sent in split {
                out.words.push(words.tokenize(&sent));
                out.sents.push(sent);
            }
        }
        out
    }

    pub fn check_alignment(&self) -> Result<()> {
        if self.words.len() != self.sents.len() {
            return Err(Error::Misaligned {
                words: self.words.len(),
                sents: self.sents.len(),
            });
        }
        Ok(())
    }
}

/// Tokenize `config.tokenize_input_path()` and write the word and sentence fixtures.
pub fn generate_treebank(config: &Config) -> Result<Treebank> {
    let input_path = config.tokenize_input_path();
    let inputs = fixtures::read_inputs(&input_path)?;
    info!(path = %input_path.display(), texts = inputs.len(), "tokenizing");

    let treebank = Treebank::build(&inputs);
    treebank.check_alignment()?;

    fixtures::write_json(&config.treebank_words_path(), &treebank.words)?;
    fixtures::write_json(&config.treebank_sents_path(), &treebank.sents)?;
    info!(sentences = treebank.sents.len(), "wrote treebank fixtures");

    Ok(treebank)
}

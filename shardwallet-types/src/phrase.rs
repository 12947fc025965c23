//! The wallet recovery phrase.
//!
//! The phrase is the user's proof of wallet ownership during device
//! authorization. It lives only in memory for the duration of one
//! activation attempt and is zeroized on drop; this subsystem never
//! persists it.

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Accepted phrase lengths (BIP-39 mnemonic word counts in use).
const VALID_WORD_COUNTS: &[usize] = &[12, 24];

/// Errors from recovery phrase parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhraseError {
    /// The phrase is empty after normalization.
    #[error("recovery phrase is empty")]
    Empty,

    /// The phrase does not have an accepted word count.
    #[error("recovery phrase must have 12 or 24 words, got {0}")]
    WordCount(usize),
}

/// A normalized recovery phrase, held only in memory.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct RecoveryPhrase {
    words: String,
}

impl RecoveryPhrase {
    /// Parses a phrase from user input.
    ///
    /// Normalizes to lowercase with single spaces and validates the word
    /// count. Word-list membership is not checked here; an invalid phrase
    /// is rejected by the device-authorization exchange.
    pub fn parse(input: &str) -> Result<Self, PhraseError> {
        let words: Vec<&str> = input.split_whitespace().collect();
        if words.is_empty() {
            return Err(PhraseError::Empty);
        }
        if !VALID_WORD_COUNTS.contains(&words.len()) {
            return Err(PhraseError::WordCount(words.len()));
        }
        Ok(Self {
            words: words.join(" ").to_lowercase(),
        })
    }

    /// Returns the normalized phrase for submission to the backend.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.words
    }

    /// Returns the number of words in the phrase.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.split(' ').count()
    }
}

impl std::fmt::Debug for RecoveryPhrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecoveryPhrase")
            .field("words", &"[REDACTED]")
            .field("word_count", &self.word_count())
            .finish()
    }
}

//! Pure guess evaluation.
//!
//! [`evaluate`] never mutates anything; [`GameSession`](super::GameSession)
//! applies the result to its own counters.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

/// A normalized guess: trimmed, lowercased, and split by length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guess {
    Letter(char),
    Word(String),
}

impl Guess {
    /// Normalizes raw chat input. Returns `None` for empty or whitespace-only
    /// input.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        let mut chars = normalized.chars();
        match (chars.next(), chars.next()) {
            (None, _) => None,
            (Some(letter), None) => Some(Guess::Letter(letter)),
            (Some(_), Some(_)) => Some(Guess::Word(normalized)),
        }
    }
}

/// Per-position view of the secret word: `Some(c)` once `c` has been guessed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RevealMask(Vec<Option<char>>);

impl RevealMask {
    pub fn compute(secret: &str, guessed: &BTreeSet<char>) -> Self {
        Self(
            secret
                .chars()
                .map(|c| guessed.contains(&c).then_some(c))
                .collect(),
        )
    }

    pub fn fully_revealed(secret: &str) -> Self {
        Self(secret.chars().map(Some).collect())
    }

    pub fn hidden(len: usize) -> Self {
        Self(vec![None; len])
    }

    pub fn positions(&self) -> &[Option<char>] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn revealed_count(&self) -> usize {
        self.0.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }
}

impl fmt::Display for RevealMask {
    /// Renders as `c _ t`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match slot {
                Some(c) => write!(f, "{c}")?,
                None => f.write_str("_")?,
            }
        }
        Ok(())
    }
}

/// Result of evaluating one guess against the secret word.
///
/// `reveal_mask` and `correct_positions` describe the board *after* the guess
/// would be recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub guess: Guess,
    pub is_word_match: bool,
    pub is_letter_present: bool,
    /// The letter was already in the guessed set before this guess.
    pub is_repeat: bool,
    pub reveal_mask: RevealMask,
    pub correct_positions: usize,
}

/// Evaluates `raw` against `secret` given the letters guessed so far.
///
/// Returns `None` when the input normalizes to nothing.
pub fn evaluate(secret: &str, guessed: &BTreeSet<char>, raw: &str) -> Option<Evaluation> {
    let guess = Guess::parse(raw)?;

    let evaluation = match &guess {
        Guess::Word(word) => {
            let is_word_match = word == secret;
            let reveal_mask = if is_word_match {
                RevealMask::fully_revealed(secret)
            } else {
                RevealMask::compute(secret, guessed)
            };
            Evaluation {
                is_word_match,
                is_letter_present: false,
                is_repeat: false,
                correct_positions: reveal_mask.revealed_count(),
                reveal_mask,
                guess,
            }
        }
        Guess::Letter(letter) => {
            let letter = *letter;
            let is_repeat = guessed.contains(&letter);
            let mut after = guessed.clone();
            after.insert(letter);
            let reveal_mask = RevealMask::compute(secret, &after);
            Evaluation {
                is_word_match: false,
                is_letter_present: secret.contains(letter),
                is_repeat,
                correct_positions: reveal_mask.revealed_count(),
                reveal_mask,
                guess,
            }
        }
    };

    Some(evaluation)
}

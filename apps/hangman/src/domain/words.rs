//! Secret word supply.

use std::path::Path;

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::error::AppError;

pub trait WordSource: Send + Sync {
    /// A uniformly random, non-empty, lowercase alphabetic word.
    fn random_word(&self) -> String;
}

const BUILTIN_WORDS: &str = "
    apple banana bridge candle castle cherry circus cobweb dragon engine
    falcon forest galaxy garden guitar hammer harbor island jacket jungle
    kettle ladder lantern magnet marble meadow mirror monkey needle orange
    oxygen palace pencil pepper pillow planet pocket puzzle rabbit rocket
    saddle shadow silver spider statue summer tunnel turtle velvet violin
    walnut window winter wizard yellow zipper
";

/// A fixed vocabulary with its own RNG.
pub struct WordList {
    words: Vec<String>,
    rng: Mutex<StdRng>,
}

impl std::fmt::Debug for WordList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordList")
            .field("len", &self.words.len())
            .finish_non_exhaustive()
    }
}

impl WordList {
    /// Builds a list from whitespace-separated text. Entries are lowercased;
    /// anything that is not purely alphabetic is skipped.
    pub fn from_text(text: &str, seed: Option<u64>) -> Result<Self, AppError> {
        let mut skipped = 0usize;
        let words: Vec<String> = text
            .split_whitespace()
            .filter_map(|raw| {
                let word = raw.to_lowercase();
                if word.chars().all(char::is_alphabetic) {
                    Some(word)
                } else {
                    skipped += 1;
                    None
                }
            })
            .collect();

        if skipped > 0 {
            debug!(skipped, "word list entries skipped (non-alphabetic)");
        }
        Self::from_words(words, seed)
    }

    pub fn from_words<I, S>(words: I, seed: Option<u64>) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words
            .into_iter()
            .map(Into::into)
            .filter(|w| !w.is_empty())
            .collect();
        if words.is_empty() {
            return Err(AppError::word_list("vocabulary is empty"));
        }
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            words,
            rng: Mutex::new(rng),
        })
    }

    pub fn load(path: &Path, seed: Option<u64>) -> Result<Self, AppError> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| AppError::word_list_io(format!("reading {}", path.display()), e))?;
        let list = Self::from_text(&text, seed)?;
        info!(path = %path.display(), words = list.len(), "word list loaded");
        Ok(list)
    }

    pub fn builtin(seed: Option<u64>) -> Result<Self, AppError> {
        Self::from_text(BUILTIN_WORDS, seed)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

impl WordSource for WordList {
    fn random_word(&self) -> String {
        let mut rng = self.rng.lock();
        // Construction guarantees at least one word.
        self.words
            .choose(&mut *rng)
            .cloned()
            .unwrap_or_default()
    }
}

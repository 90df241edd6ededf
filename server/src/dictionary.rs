//! Optional word list used to check runs on the board.
//!
//! The dictionary is read once at startup. A missing file is not an error:
//! it yields an absent dictionary, which turns word checking off.

use log::info;
use shared::WORD_LIMIT;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Option<HashSet<String>>,
}

impl Dictionary {
    /// A dictionary that disables word checking.
    pub fn absent() -> Self {
        Self { words: None }
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: Some(words.into_iter().map(Into::into).collect()),
        }
    }

    /// Builds a present dictionary from whitespace-separated text.
    ///
    /// Tokens longer than [`WORD_LIMIT`] are cut into consecutive pieces of
    /// at most that length and each piece is kept as a word.
    pub fn parse(contents: &[u8]) -> Self {
        let words = contents
            .split(|b| b.is_ascii_whitespace())
            .filter(|token| !token.is_empty())
            .flat_map(|token| token.chunks(WORD_LIMIT))
            .map(|piece| String::from_utf8_lossy(piece).into_owned());
        Self::from_words(words)
    }

    /// Loads the word list at `path`, or an absent dictionary if the file
    /// does not exist. Any other read failure is returned.
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        match fs::read(path) {
            Ok(contents) => {
                let dictionary = Self::parse(&contents);
                info!(
                    "Loaded {} words from {}",
                    dictionary.len(),
                    path.display()
                );
                Ok(dictionary)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                info!(
                    "No dictionary at {}, word checking disabled",
                    path.display()
                );
                Ok(Self::absent())
            }
            Err(e) => Err(e),
        }
    }

    pub fn is_present(&self) -> bool {
        self.words.is_some()
    }

    /// Exact, case-sensitive membership. Always false when absent.
    pub fn contains(&self, word: &str) -> bool {
        self.words
            .as_ref()
            .map_or(false, |words| words.contains(word))
    }

    pub fn len(&self) -> usize {
        self.words.as_ref().map_or(0, HashSet::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

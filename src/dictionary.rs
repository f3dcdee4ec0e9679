//! Word lists for the suggestion engine.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::{AutocorrectError, Result};

const MAX_PREALLOCATED_WORDS: usize = 1 << 16;

/// An ordered, immutable list of accepted words.
///
/// Words are stored in the order they were supplied and are matched
/// case-sensitively. A hash set mirrors the list for constant-time
/// membership checks. Duplicates are not rejected.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    /// Length of each word in `char`s, parallel to `words`.
    char_lens: Vec<usize>,
    lookup: HashSet<String>,
}

impl Dictionary {
    pub fn new(words: Vec<String>) -> Self {
        let lookup = words.iter().cloned().collect();
        let char_lens = words.iter().map(|w| w.chars().count()).collect();
        Dictionary {
            words,
            char_lens,
            lookup,
        }
    }

    /// Load a word list from a file. See [`Dictionary::from_reader`] for the
    /// accepted layouts.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let dictionary = Self::from_reader(BufReader::new(File::open(path)?))?;
        debug!(
            "Loaded {} words from {}",
            dictionary.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Read a word list, one word per line.
    ///
    /// If the first non-blank line is a bare integer `n`, it is taken as a
    /// word count and exactly `n` words are read after it; a shorter file is
    /// an error and anything past the `n`th word is ignored. Otherwise every
    /// non-blank line is a word. Lines are trimmed.
    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut lines = reader
            .lines()
            .enumerate()
            .map(|(idx, line)| line.map(|l| (idx + 1, l.trim().to_string())))
            .filter(|entry| !matches!(entry, Ok((_, l)) if l.is_empty()));

        let Some(first) = lines.next() else {
            return Ok(Self::default());
        };
        let (first_line, first) = first?;

        let Ok(expected) = first.parse::<usize>() else {
            let mut words = vec![first];
            for entry in lines {
                words.push(entry?.1);
            }
            return Ok(Self::new(words));
        };

        // The header is untrusted; only preallocate a bounded amount.
        let mut words = Vec::with_capacity(expected.min(MAX_PREALLOCATED_WORDS));
        let mut last_line = first_line;
        for entry in lines.take(expected) {
            let (line, word) = entry?;
            last_line = line;
            words.push(word);
        }
        if words.len() < expected {
            return Err(AutocorrectError::malformed(
                last_line,
                format!("header declares {expected} words, found {}", words.len()),
            ));
        }
        Ok(Self::new(words))
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(word)
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Each word paired with its length in `char`s.
    pub fn entries(&self) -> impl Iterator<Item = (&str, usize)> {
        self.words
            .iter()
            .map(String::as_str)
            .zip(self.char_lens.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl From<Vec<String>> for Dictionary {
    fn from(words: Vec<String>) -> Self {
        Self::new(words)
    }
}

impl<'a> FromIterator<&'a str> for Dictionary {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(str::to_string).collect())
    }
}

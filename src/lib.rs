//! Dictionary-based spelling suggestions.
//!
//! A [`SuggestionEngine`] holds a [`Dictionary`] and an edit-distance
//! threshold. For a misspelled word it returns every dictionary word within
//! the threshold, ordered by Levenshtein distance and then alphabetically:
//!
//! ```
//! use autocorrect::{Correction, Dictionary, SuggestionEngine};
//!
//! let dictionary: Dictionary = ["cat", "cot", "cow", "dog"].into_iter().collect();
//! let engine = SuggestionEngine::new(dictionary, 2).unwrap();
//!
//! assert_eq!(engine.suggest("cwt").words(), ["cat", "cot", "cow"]);
//! assert_eq!(engine.suggest("dog"), Correction::ExactMatch);
//! ```

pub mod dictionary;
pub mod distance;
pub mod engine;
pub mod error;
pub mod repl;

pub use dictionary::Dictionary;
pub use distance::distance;
pub use engine::{Correction, Suggestion, SuggestionEngine};
pub use error::{AutocorrectError, Result};
pub use repl::{OutputFormat, Repl};

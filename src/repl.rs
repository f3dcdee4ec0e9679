//! Interactive read-eval-print loop over a [`SuggestionEngine`].
//!
//! The loop is generic over its input and output streams so it can be driven
//! by stdin/stdout in the binary and by in-memory buffers in tests.

use std::io::{BufRead, Write};

use log::info;
use serde::Serialize;

use crate::engine::{Correction, SuggestionEngine};
use crate::error::Result;

const PROMPT: &str = "Please enter a word:";
const QUIT: &str = "q";

/// How each correction is written to the output stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Sentences meant for a person at a terminal.
    #[default]
    Human,
    /// One JSON object per query.
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    word: &'a str,
    #[serde(flatten)]
    correction: &'a Correction,
}

pub struct Repl<'a> {
    engine: &'a SuggestionEngine,
    format: OutputFormat,
    limit: usize,
}

impl<'a> Repl<'a> {
    pub fn new(engine: &'a SuggestionEngine, format: OutputFormat) -> Self {
        Repl {
            engine,
            format,
            limit: 0,
        }
    }

    /// Cap the number of suggestions shown per query. 0 shows all of them.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Prompt, read and answer until `q` is entered or the input runs dry.
    pub fn run(&self, mut input: impl BufRead, mut output: impl Write) -> Result<()> {
        let mut line = String::new();
        let mut queries = 0usize;
        loop {
            writeln!(output, "{PROMPT}")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            let word = line.trim_end_matches(['\n', '\r']);
            if word == QUIT {
                writeln!(output, "Bye!")?;
                break;
            }

            let correction = self.engine.suggest_top(word, self.limit);
            self.render(word, &correction, &mut output)?;
            queries += 1;
        }
        output.flush()?;
        info!("Session ended after {queries} queries");
        Ok(())
    }

    /// Write a single correction in the configured format.
    pub fn render(
        &self,
        word: &str,
        correction: &Correction,
        output: &mut impl Write,
    ) -> Result<()> {
        match self.format {
            OutputFormat::Human => render_human(word, correction, output),
            OutputFormat::Json => {
                serde_json::to_writer(&mut *output, &JsonReport { word, correction })?;
                writeln!(output)?;
                Ok(())
            }
        }
    }
}

fn render_human(word: &str, correction: &Correction, output: &mut impl Write) -> Result<()> {
    match correction {
        Correction::ExactMatch => writeln!(output, "{word} is spelled correctly")?,
        Correction::NoMatch => writeln!(output, "No matches found.")?,
        Correction::Suggestions(list) => {
            let words: Vec<&str> = list.iter().map(|s| s.word.as_str()).collect();
            writeln!(output, "Did you mean:")?;
            writeln!(output, "{}", words.join(", "))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;
    use std::io::Cursor;

    fn engine() -> SuggestionEngine {
        let dict: Dictionary = ["cat", "cot", "cow", "dog"].into_iter().collect();
        SuggestionEngine::new(dict, 2).unwrap()
    }

    fn run(repl: &Repl, input: &str) -> String {
        let mut out = Vec::new();
        repl.run(Cursor::new(input), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_human_session() {
        let engine = engine();
        let repl = Repl::new(&engine, OutputFormat::Human);
        let out = run(&repl, "dog\ncwt\nxyzxyz\nq\nnever read\n");
        assert_eq!(
            out,
            "Please enter a word:\n\
             dog is spelled correctly\n\
             Please enter a word:\n\
             Did you mean:\n\
             cat, cot, cow\n\
             Please enter a word:\n\
             No matches found.\n\
             Please enter a word:\n\
             Bye!\n"
        );
    }

    #[test]
    fn test_eof_ends_session() {
        let engine = engine();
        let repl = Repl::new(&engine, OutputFormat::Human);
        let out = run(&repl, "cat\r\n");
        assert_eq!(
            out,
            "Please enter a word:\ncat is spelled correctly\nPlease enter a word:\n"
        );
    }

    #[test]
    fn test_limit() {
        let engine = engine();
        let repl = Repl::new(&engine, OutputFormat::Human).with_limit(1);
        let out = run(&repl, "cwt\nq\n");
        assert!(out.contains("Did you mean:\ncat\n"), "{out}");
    }

    #[test]
    fn test_json_no_match_report() {
        let engine = engine();
        let repl = Repl::new(&engine, OutputFormat::Json);
        let mut out = Vec::new();
        repl.render("xyzxyz", &Correction::NoMatch, &mut out).unwrap();
        let report: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            report,
            serde_json::json!({"word": "xyzxyz", "outcome": "no_match"})
        );
    }

    #[test]
    fn test_json_session() {
        let engine = engine();
        let repl = Repl::new(&engine, OutputFormat::Json);
        let out = run(&repl, "cat\ncwt\nq\n");
        let reports: Vec<serde_json::Value> = out
            .lines()
            .filter(|l| l.starts_with('{'))
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(
            reports,
            [
                serde_json::json!({"word": "cat", "outcome": "exact_match"}),
                serde_json::json!({
                    "word": "cwt",
                    "outcome": "suggestions",
                    "suggestions": [
                        {"word": "cat", "distance": 1},
                        {"word": "cot", "distance": 1},
                        {"word": "cow", "distance": 2}
                    ]
                }),
            ]
        );
    }
}

/*
    This module builds grammar tables from rule descriptions
*/

mod splitter;

use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::grammar::*;
use crate::error_handling::*;
use itertools::Itertools;
pub use splitter::{split, split_grouped};

#[derive(Debug)]
pub enum BuildErrorType {
    // A non-blank line does not split into a nonterminal and its alternatives
    MalformedRule { line: String, arrow: String },
    // There was an issue with reading a file
    FileError(std::io::Error),
}

impl ErrorType for BuildErrorType {}

impl PartialEq for BuildErrorType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (BuildErrorType::FileError(a), BuildErrorType::FileError(b)) => a.kind() == b.kind(),
            (
                BuildErrorType::MalformedRule { line: a, arrow: a_arrow },
                BuildErrorType::MalformedRule { line: b, arrow: b_arrow }
            ) => a == b && a_arrow == b_arrow,
            _ => false,
        }
    }
}

impl Display for BuildErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildErrorType::MalformedRule { line, arrow } => write!(
                f,
                "Expected a rule of the form `LHS{}ALTERNATIVES`, found `{}`",
                arrow, line
            ),
            BuildErrorType::FileError(e) => write!(f, "File error: {}", e),
        }
    }
}

pub type BuildError = Error<BuildErrorType>;

pub type Result<T> = std::result::Result<T, BuildErrorType>;
pub type LineResult<T> = std::result::Result<T, BuildError>;

fn io_error(error: std::io::Error, file: &Path) -> BuildError {
    BuildError {
        location: Location::in_file(file.to_path_buf()),
        error: BuildErrorType::FileError(error)
    }
}

/// The separators a description is written with. Both are matched
/// literally, surrounding spaces included. With `grouped` set, whitespace
/// inside `[...]` and `{...}` does not end a symbol token.
#[derive(Debug, PartialEq, Clone)]
pub struct Notation {
    pub arrow: String,
    pub alternation: String,
    pub grouped: bool,
}

impl Notation {
    /// `Exp => Term [+-] Exp | Term`
    pub fn arrow() -> Self {
        Notation {
            arrow: " => ".to_string(),
            alternation: " | ".to_string(),
            grouped: false
        }
    }

    /// `stmt ::= kw [ident {, ident}] | kw`, keeping optional and repeated
    /// groups as single symbols
    pub fn bnf() -> Self {
        Notation {
            arrow: " ::= ".to_string(),
            alternation: " | ".to_string(),
            grouped: true
        }
    }
}

impl Default for Notation {
    fn default() -> Self {
        Notation::arrow()
    }
}

// Splits a rule line into its nonterminal and the text of its alternatives
fn split_rule(line: &str, notation: &Notation) -> Result<(String, String)> {
    split(line, Some(notation.arrow.as_str()), Some(1))
        .into_iter()
        .collect_tuple()
        .ok_or_else(|| BuildErrorType::MalformedRule {
            line: line.to_string(),
            arrow: notation.arrow.clone()
        })
}

fn split_alternatives(rewrite: &str, notation: &Notation) -> Alternatives {
    split(rewrite, Some(notation.alternation.as_str()), None)
        .iter()
        .map(|alternative| match notation.grouped {
            true => split_grouped(alternative),
            false => split(alternative, None, None),
        })
        .collect_vec()
}

// Returns the non-blank, trimmed lines of a description with their 1-based
// line numbers. Tabs become spaces so they can sit next to a separator.
fn rule_lines(description: &str) -> impl Iterator<Item = (usize, String)> + '_ {
    description
        .split('\n')
        .enumerate()
        .filter_map(|(num, line)| {
            Some(line.trim())
                .filter(|line| !line.is_empty())
                .map(|line| (num + 1, line.replace('\t', " ")))
        })
}

/// Builds a grammar table from `description`. The first malformed line
/// aborts the whole build; `source` only labels diagnostics.
pub fn build_grammar(description: &str, notation: &Notation, source: &Location) -> LineResult<Grammar> {
    let mut grammar = Grammar::new();

    for (num, line) in rule_lines(description) {
        let (nonterminal, rewrite) = split_rule(&line, notation)
            .map_err(|error| BuildError { location: source.at_line(num), error })?;

        grammar.insert(nonterminal, split_alternatives(&rewrite, notation));
    }

    return Ok(grammar);
}

/// Builds a grammar table from a description in the default `=>` notation.
pub fn grammar(description: &str) -> LineResult<Grammar> {
    build_grammar(description, &Notation::default(), &Location::default())
}

pub fn parse_file(path: &PathBuf, notation: &Notation) -> LineResult<Grammar> {
    let description = std::fs::read_to_string(path).map_err(|e| io_error(e, path))?;

    return build_grammar(&description, notation, &Location::in_file(path.clone()));
}

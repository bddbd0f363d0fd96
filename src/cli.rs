use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use splitgram::Notation;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// File containing the grammar description (default: built-in arithmetic grammar)
    pub file: Option<PathBuf>,

    /// Separator style the description is written in
    #[arg(long, value_enum, default_value_t = NotationStyle::Arrow)]
    pub notation: NotationStyle,

    /// Separator between a nonterminal and its alternatives, spaces included
    #[arg(long, value_name = "SEP")]
    pub arrow: Option<String>,

    /// Separator between alternatives, spaces included
    #[arg(long, value_name = "SEP")]
    pub alternation: Option<String>,

    /// Keep `[...]` and `{...}` groups as single symbols (on for `bnf`)
    #[arg(long)]
    pub grouped: bool,

    /// How to print the grammar table
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    pub format: Format
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum NotationStyle {
    /// `A => b c | d`
    Arrow,
    /// `A ::= b c | d`
    Bnf
}

#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum Format {
    /// A mapping from nonterminal to its productions
    Table,
    /// One rule per line
    Rules
}

impl Cli {
    // The preset notation with any separators given on the command line
    pub fn notation(&self) -> Notation {
        let preset = match self.notation {
            NotationStyle::Arrow => Notation::arrow(),
            NotationStyle::Bnf => Notation::bnf(),
        };

        Notation {
            arrow: self.arrow.clone().unwrap_or(preset.arrow),
            alternation: self.alternation.clone().unwrap_or(preset.alternation),
            grouped: preset.grouped || self.grouped
        }
    }
}

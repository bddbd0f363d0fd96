pub mod error_handling;
pub mod grammar;
pub mod parser;

pub use crate::grammar::Grammar;
pub use crate::parser::{grammar, build_grammar, parse_file, split, split_grouped, Notation};

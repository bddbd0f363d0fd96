/*
    This module is for storing and rendering grammar tables
*/

use std::fmt::Display;

use indexmap::IndexMap;
use itertools::Itertools;

// The grammar every run falls back on when no file is given
pub const SAMPLE_DESCRIPTION: &str = r"
Exp   => Term [+-] Exp | Term
Term  => Factor [*/] Term | Factor
Factor => Funcall | Var | Num | [(] Exp [)]
Funcall => Funname [(] Exps [)]
Exps => Exp [,] Exps | Exp
Var => [a-zA-Z_]\w*
Num => [+-]?[0-9]+([.][0-9]*)?
";

// The symbol tokens in a single production. Tokens are kept as written:
// nonterminal names, literals and bracketed patterns all look the same here.
pub type Production = Vec<String>;

// The productions of one nonterminal, in the order they were written
pub type Alternatives = Vec<Production>;

#[derive(Debug, PartialEq, Clone, Default)]
pub struct Grammar {
    rules: IndexMap<String, Alternatives>,
}

impl Grammar {
    pub fn new() -> Self {
        Grammar::default()
    }

    // Redefining a nonterminal replaces its alternatives but keeps its place
    pub(crate) fn insert(&mut self, nonterminal: String, alternatives: Alternatives) {
        self.rules.insert(nonterminal, alternatives);
    }

    pub fn get(&self, nonterminal: &str) -> Option<&Alternatives> {
        self.rules.get(nonterminal)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Alternatives)> {
        self.rules.iter()
    }

    /// Renders the grammar as a mapping, e.g. `{"A": (["b", "c"],)}`.
    pub fn table(&self) -> String {
        let entries = self
            .iter()
            .map(|(nonterminal, alternatives)| {
                let productions = alternatives.iter().map(|p| format!("{:?}", p)).join(", ");
                // A one-element tuple keeps its trailing comma
                let trailer = if alternatives.len() == 1 { "," } else { "" };
                format!("{:?}: ({}{})", nonterminal, productions, trailer)
            })
            .join(", ");

        format!("{{{}}}", entries)
    }
}

// Renders one rule per line in the default description notation
impl Display for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (nonterminal, alternatives) in self.iter() {
            let rewrite = alternatives.iter().map(|p| p.join(" ")).join(" | ");
            writeln!(f, "{} => {}", nonterminal, rewrite)?;
        }
        Ok(())
    }
}

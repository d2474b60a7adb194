/*
    This module is for storing and inspecting unrestricted grammars
*/

mod tokenizer;

use std::collections::BTreeSet;

use itertools::Itertools;

pub use tokenizer::{tokenize, Alphabet, TokenizeError};

// Separates symbols inside a form key. Symbols may never contain it
pub const KEY_SEPARATOR: char = '\u{1F}';

// The base unit in a grammar rule. Whether it is a terminal or a
// nonterminal is decided by the grammar's alphabets
pub type Symbol = String;

// One step of a derivation
pub type SententialForm = Vec<Symbol>;

// A rewrite rule. The left side is never empty, an empty right side is an
// epsilon rule
#[derive(Debug, PartialEq, Clone)]
pub struct Production {
    pub lhs: Vec<Symbol>,
    pub rhs: Vec<Symbol>,
}

impl Production {
    pub fn is_epsilon(&self) -> bool {
        self.rhs.is_empty()
    }

    // Offsets in `form` where the left side matches symbol by symbol.
    // An empty left side never matches
    pub fn match_offsets<'a>(&'a self, form: &'a [Symbol]) -> impl Iterator<Item = usize> + 'a {
        form.windows(self.lhs.len().max(1))
            .positions(move |window| window == self.lhs.as_slice())
    }

    // Builds prefix + rhs + suffix without touching `form`
    pub fn apply_at(&self, form: &[Symbol], offset: usize) -> SententialForm {
        let mut next = Vec::with_capacity(form.len() - self.lhs.len() + self.rhs.len());
        next.extend_from_slice(&form[..offset]);
        next.extend_from_slice(&self.rhs);
        next.extend_from_slice(&form[offset + self.lhs.len()..]);
        next
    }
}

impl std::fmt::Display for Production {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_epsilon() {
            write!(f, "{} -> e", self.lhs.concat())
        } else {
            write!(f, "{} -> {}", self.lhs.concat(), self.rhs.concat())
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Grammar {
    pub terminals: BTreeSet<Symbol>,
    pub nonterminals: BTreeSet<Symbol>,
    pub start_symbol: Symbol,
    pub productions: Vec<Production>,
}

impl Grammar {
    pub fn is_terminal(&self, symbol: &str) -> bool {
        self.terminals.contains(symbol)
    }

    pub fn is_all_terminals(&self, form: &[Symbol]) -> bool {
        form.iter().all(|symbol| self.is_terminal(symbol))
    }

    // Sum of the byte lengths of the terminals in the form
    pub fn terminal_bytes(&self, form: &[Symbol]) -> usize {
        form.iter()
            .filter(|symbol| self.is_terminal(symbol))
            .map(String::len)
            .sum()
    }

    pub fn start_form(&self) -> SententialForm {
        vec![self.start_symbol.clone()]
    }
}

// The derived text of a form
pub fn spelling(form: &[Symbol]) -> String {
    form.concat()
}

// A form key, equal exactly when the symbol sequences are equal
pub fn form_key(form: &[Symbol]) -> String {
    let mut key = String::with_capacity(form.iter().map(|s| s.len() + 1).sum());
    for symbol in form {
        key.push(KEY_SEPARATOR);
        key.push_str(symbol);
    }
    key
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub fn symbols(spellings: &[&str]) -> Vec<Symbol> {
        spellings.iter().map(|s| s.to_string()).collect()
    }

    pub fn production(lhs: &[&str], rhs: &[&str]) -> Production {
        Production {
            lhs: symbols(lhs),
            rhs: symbols(rhs),
        }
    }

    pub fn grammar(terminals: &[&str], nonterminals: &[&str], start: &str, productions: Vec<Production>) -> Grammar {
        let mut nonterminals: BTreeSet<Symbol> = nonterminals.iter().map(|s| s.to_string()).collect();
        nonterminals.insert(start.to_string());

        Grammar {
            terminals: terminals.iter().map(|s| s.to_string()).collect(),
            nonterminals,
            start_symbol: start.to_string(),
            productions,
        }
    }

    #[test]
    fn match_offsets_finds_every_position() {
        let rule = production(&["A", "A"], &["b"]);
        let form = symbols(&["A", "A", "A", "c", "A", "A"]);

        assert_eq!(rule.match_offsets(&form).collect_vec(), vec![0, 1, 4]);
        assert_eq!(rule.match_offsets(&symbols(&["A"])).count(), 0);
    }

    #[test]
    fn apply_splices_rhs() {
        let rule = production(&["S"], &["a", "S", "b"]);
        let form = symbols(&["a", "S", "b"]);

        assert_eq!(rule.apply_at(&form, 1), symbols(&["a", "a", "S", "b", "b"]));
        // The source form is left alone
        assert_eq!(form, symbols(&["a", "S", "b"]));
    }

    #[test]
    fn epsilon_removes_match() {
        let g = grammar(&["a", "b"], &["S", "B"], "S", vec![]);
        let rule = production(&["B", "b"], &[]);
        let form = symbols(&["a", "B", "b", "S"]);

        let next = rule.apply_at(&form, 1);
        assert_eq!(next, symbols(&["a", "S"]));
        assert!(g.terminal_bytes(&next) <= g.terminal_bytes(&form));
    }

    #[test]
    fn terminal_bytes_ignores_nonterminals() {
        let g = grammar(&["ab", "c"], &["S", "Long"], "S", vec![]);
        let form = symbols(&["ab", "Long", "c", "S"]);

        assert_eq!(g.terminal_bytes(&form), 3);
        assert!(!g.is_all_terminals(&form));
        assert!(g.is_all_terminals(&symbols(&["ab", "c"])));
        assert!(g.is_all_terminals(&[]));
    }

    #[test]
    fn keys_distinguish_symbol_boundaries() {
        // Same spelling, different symbols
        assert_ne!(form_key(&symbols(&["ab", "c"])), form_key(&symbols(&["a", "bc"])));
        assert_eq!(form_key(&symbols(&["a", "b"])), form_key(&symbols(&["a", "b"])));
        assert_eq!(spelling(&symbols(&["ab", "c"])), "abc");
    }

    #[test]
    fn display_production() {
        assert_eq!(production(&["S"], &["a", "S", "b"]).to_string(), "S -> aSb");
        assert_eq!(production(&["A", "B"], &[]).to_string(), "AB -> e");
    }
}

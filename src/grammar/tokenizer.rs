use std::collections::BTreeSet;
use std::fmt::Display;

use super::Symbol;

// No known symbol starts at the beginning of `remainder`
#[derive(Debug, PartialEq, Clone)]
pub struct TokenizeError {
    pub remainder: String,
}

impl Display for TokenizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "No known symbol at the start of `{}`", self.remainder)
    }
}

// The combined terminal and nonterminal spellings, with the longest spelling
// measured once
pub struct Alphabet<'a> {
    terminals: &'a BTreeSet<Symbol>,
    nonterminals: &'a BTreeSet<Symbol>,
    max_len: usize,
}

impl<'a> Alphabet<'a> {
    pub fn new(terminals: &'a BTreeSet<Symbol>, nonterminals: &'a BTreeSet<Symbol>) -> Self {
        let max_len = terminals.iter()
            .chain(nonterminals.iter())
            .map(String::len)
            .max()
            .unwrap_or(0);

        Alphabet {
            terminals,
            nonterminals,
            max_len,
        }
    }

    pub fn contains(&self, spelling: &str) -> bool {
        self.terminals.contains(spelling) || self.nonterminals.contains(spelling)
    }

    // Greedy longest match, left to right. Lengths are in bytes, candidate
    // slices that would split a character are skipped
    pub fn tokenize(&self, raw: &str) -> Result<Vec<Symbol>, TokenizeError> {
        let mut symbols = Vec::new();
        let mut position = 0;

        while position < raw.len() {
            let rest = &raw[position..];
            // An empty alphabet falls back to trying the whole remainder
            let upper = if self.max_len == 0 {
                rest.len()
            } else {
                rest.len().min(self.max_len)
            };

            let matched = (1..=upper)
                .rev()
                .filter_map(|len| rest.get(..len))
                .find(|candidate| self.contains(candidate));

            match matched {
                Some(symbol) => {
                    position += symbol.len();
                    symbols.push(symbol.to_string());
                }
                None => return Err(TokenizeError { remainder: rest.to_string() }),
            }
        }

        Ok(symbols)
    }
}

pub fn tokenize(raw: &str, terminals: &BTreeSet<Symbol>, nonterminals: &BTreeSet<Symbol>) -> Result<Vec<Symbol>, TokenizeError> {
    Alphabet::new(terminals, nonterminals).tokenize(raw)
}

use std::collections::BTreeSet;

use crate::grammar::KEY_SEPARATOR;
use super::lexer::Token;
use super::CompileErrorType::{EmptySymbol, Overlap, ReservedSeparator};
use super::{CompileError, CompileErrors, FileResult, Location};

fn get_spelling_errors(symbol: &Token, location: Location) -> CompileErrors {
    let mut errors = Vec::new();

    if symbol.text.is_empty() {
        errors.push(CompileError::new(location.clone(), EmptySymbol));
    }
    if symbol.text.contains(KEY_SEPARATOR) {
        errors.push(CompileError::new(location, ReservedSeparator(symbol.text.escape_default().to_string())));
    }

    errors
}

fn get_overlapping_symbols(terminals: &[Token], nonterminals: &[Token], file: &Location) -> CompileErrors {
    // A spelling reported once even if it is declared several times
    let terminal_set: BTreeSet<&str> = terminals.iter().map(|t| t.text.as_str()).collect();
    let mut reported = BTreeSet::new();

    nonterminals.iter()
        .filter(|symbol| terminal_set.contains(symbol.text.as_str()))
        .filter(|symbol| reported.insert(symbol.text.clone()))
        .map(|symbol| CompileError::new(
            Location { line: symbol.line, ..file.clone() },
            Overlap(symbol.text.clone())
        ))
        .collect()
}

// Checks that the declared alphabets can be tokenized against and keyed.
// `nonterminals` includes the start symbol
pub fn verify_alphabets(terminals: &[Token], nonterminals: &[Token], file: &Location) -> FileResult<()> {
    let mut errors = Vec::new();

    errors.extend(terminals.iter()
        .chain(nonterminals.iter())
        .flat_map(|symbol| get_spelling_errors(symbol, Location { line: symbol.line, ..file.clone() })));
    errors.extend(get_overlapping_symbols(terminals, nonterminals, file));

    if errors.len() > 0 {
        Err(errors)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn token(text: &str, line: usize) -> Token {
        Token { text: text.to_string(), line }
    }

    fn file() -> Location {
        Location::whole_file(&PathBuf::from("g.txt"))
    }

    #[test]
    fn verify_disjoint_alphabets() {
        let terminals = vec![token("a", 1), token("b", 1)];
        let nonterminals = vec![token("S", 2), token("T", 2), token("S", 3)];

        assert_eq!(verify_alphabets(&terminals, &nonterminals, &file()), Ok(()));
    }

    #[test]
    fn verify_overlap() {
        let terminals = vec![token("a", 1), token("S", 1)];
        // The start symbol on line 3 repeats the terminal too
        let nonterminals = vec![token("a", 2), token("S", 3)];

        assert_eq!(verify_alphabets(&terminals, &nonterminals, &file()), Err(vec![
            CompileError::new(Location::at(&PathBuf::from("g.txt"), 2), Overlap("a".to_string())),
            CompileError::new(Location::at(&PathBuf::from("g.txt"), 3), Overlap("S".to_string())),
        ]));
    }

    #[test]
    fn verify_bad_spellings() {
        let terminals = vec![token("", 1)];
        let nonterminals = vec![token("S\u{1F}", 2)];

        assert_eq!(verify_alphabets(&terminals, &nonterminals, &file()), Err(vec![
            CompileError::new(Location::at(&PathBuf::from("g.txt"), 1), EmptySymbol),
            CompileError::new(Location::at(&PathBuf::from("g.txt"), 2), ReservedSeparator("S\\u{1f}".to_string())),
        ]));
    }
}

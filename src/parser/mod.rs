/*
    This module parses grammar files: counted lists of terminals and
    nonterminals, the start symbol, `LHS->RHS` rules and the words to check
*/

mod lexer;
mod verifier;

use std::collections::BTreeSet;
use std::fmt::Display;
use std::path::{Path, PathBuf};

use crate::grammar::*;
use crate::error_handling::*;
use itertools::Itertools;
use lexer::Token;
use verifier::verify_alphabets;

// Splits a rule into its left and right side
pub const RULE_ARROW: &str = "->";
// A right side spelled like this is the empty sequence
pub const EPSILON: &str = "e";

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Section {
    Terminals,
    Nonterminals,
    StartSymbol,
    Rules,
    Words,
}

impl Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Section::Terminals => write!(f, "terminals"),
            Section::Nonterminals => write!(f, "nonterminals"),
            Section::StartSymbol => write!(f, "start symbol"),
            Section::Rules => write!(f, "rules"),
            Section::Words => write!(f, "words"),
        }
    }
}

#[derive(Debug)]
pub enum CompileErrorType {
    // The file ended where a section count was expected
    MissingCount(Section),
    // A section count is not a non-negative number
    InvalidCount(Section, String),
    // The file ended before a section had all of its entries
    UnexpectedEnd(Section),
    // A rule does not contain `->`
    MissingArrow(String),
    // A rule side is not made of declared symbols
    UnknownSymbol(TokenizeError),
    // A rule has nothing to rewrite
    EmptyLhs(String),
    // A symbol is declared both terminal and nonterminal
    Overlap(String),
    // A declared symbol has no spelling
    EmptySymbol,
    // A declared symbol contains the form key separator
    ReservedSeparator(String),
    // There was an issue with reading a file
    FileError(std::io::Error),
}

impl ErrorType for CompileErrorType {}

impl PartialEq for CompileErrorType {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CompileErrorType::FileError(a), CompileErrorType::FileError(b)) => a.kind() == b.kind(),
            (CompileErrorType::MissingCount(a), CompileErrorType::MissingCount(b)) => a == b,
            (CompileErrorType::InvalidCount(a, x), CompileErrorType::InvalidCount(b, y)) => a == b && x == y,
            (CompileErrorType::UnexpectedEnd(a), CompileErrorType::UnexpectedEnd(b)) => a == b,
            (CompileErrorType::MissingArrow(a), CompileErrorType::MissingArrow(b)) => a == b,
            (CompileErrorType::UnknownSymbol(a), CompileErrorType::UnknownSymbol(b)) => a == b,
            (CompileErrorType::EmptyLhs(a), CompileErrorType::EmptyLhs(b)) => a == b,
            (CompileErrorType::Overlap(a), CompileErrorType::Overlap(b)) => a == b,
            (CompileErrorType::EmptySymbol, CompileErrorType::EmptySymbol) => true,
            (CompileErrorType::ReservedSeparator(a), CompileErrorType::ReservedSeparator(b)) => a == b,
            _ => false,
        }
    }
}

impl Display for CompileErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileErrorType::MissingCount(section) => write!(f, "Expected the number of {}", section),
            CompileErrorType::InvalidCount(section, text) => write!(f, "`{}` is not a valid number of {}", text, section),
            CompileErrorType::UnexpectedEnd(section) => write!(f, "File ended in the middle of the {}", section),
            CompileErrorType::MissingArrow(rule) => write!(f, "Rule `{}` has no `{}`", rule, RULE_ARROW),
            CompileErrorType::UnknownSymbol(e) => write!(f, "Tokenization failed: {}", e),
            CompileErrorType::EmptyLhs(rule) => write!(f, "Rule `{}` has an empty left side", rule),
            CompileErrorType::Overlap(symbol) => write!(f, "`{}` is declared both terminal and nonterminal", symbol),
            CompileErrorType::EmptySymbol => write!(f, "Symbols cannot be empty"),
            CompileErrorType::ReservedSeparator(symbol) => write!(f, "Symbol `{}` contains a reserved character", symbol),
            CompileErrorType::FileError(e) => write!(f, "File error: {}", e),
        }
    }
}

pub type CompileError = Error<CompileErrorType>;
pub type CompileErrors = Errors<CompileErrorType>;

fn io_error(error: std::io::Error, file: &Path) -> CompileError {
    CompileError::new(Location::whole_file(file), CompileErrorType::FileError(error))
}

pub type Result<T> = std::result::Result<T, CompileErrorType>;
pub type LineResult<T> = std::result::Result<T, CompileError>;
pub type FileResult<T> = std::result::Result<T, CompileErrors>;

// A loaded grammar file
#[derive(Debug, PartialEq)]
pub struct GrammarFile {
    pub grammar: Grammar,
    pub words: Vec<String>,
}

// Walks the lexed file section by section
struct Sections<'a> {
    tokens: std::vec::IntoIter<Token>,
    file: &'a Path,
}

impl<'a> Sections<'a> {
    fn error(&self, line: usize, error: CompileErrorType) -> CompileError {
        CompileError::new(Location::at(self.file, line), error)
    }

    fn count(&mut self, section: Section) -> LineResult<usize> {
        let token = self.tokens
            .next()
            .ok_or_else(|| CompileError::new(Location::whole_file(self.file), CompileErrorType::MissingCount(section)))?;

        token.text
            .parse::<usize>()
            .map_err(|_| self.error(token.line, CompileErrorType::InvalidCount(section, token.text.clone())))
    }

    fn entries(&mut self, section: Section, amount: usize) -> LineResult<Vec<Token>> {
        let entries = self.tokens.by_ref().take(amount).collect_vec();

        if entries.len() < amount {
            return Err(CompileError::new(Location::whole_file(self.file), CompileErrorType::UnexpectedEnd(section)));
        }
        Ok(entries)
    }

    fn counted(&mut self, section: Section) -> LineResult<Vec<Token>> {
        let amount = self.count(section)?;
        self.entries(section, amount)
    }
}

fn split_rule(rule: &str) -> Result<(&str, &str)> {
    rule.split_once(RULE_ARROW)
        .ok_or_else(|| CompileErrorType::MissingArrow(rule.to_string()))
}

fn parse_rule(rule: &str, alphabet: &Alphabet) -> Result<Production> {
    let (lhs_raw, rhs_raw) = split_rule(rule)?;

    let lhs = alphabet.tokenize(lhs_raw).map_err(CompileErrorType::UnknownSymbol)?;
    if lhs.is_empty() {
        return Err(CompileErrorType::EmptyLhs(rule.to_string()));
    }

    // The epsilon marker is recognised before tokenizing, so it needs no
    // declaration
    let mut rhs = if rhs_raw == EPSILON {
        Vec::new()
    } else {
        alphabet.tokenize(rhs_raw).map_err(CompileErrorType::UnknownSymbol)?
    };
    if rhs.len() == 1 && rhs[0] == EPSILON {
        rhs.clear();
    }

    Ok(Production { lhs, rhs })
}

fn parse_rules(rules: &[Token], alphabet: &Alphabet, file: &Path) -> FileResult<Vec<Production>> {
    let parsed_rules = rules.iter().map(|rule| {
        parse_rule(&rule.text, alphabet)
            .map_err(|error| CompileError::new(Location::at(file, rule.line), error))
    });

    let (productions, errors): (Vec<_>, Vec<_>) = parsed_rules.partition_result();
    if errors.len() > 0 {
        return Err(errors);
    }

    Ok(productions)
}

fn symbol_set(tokens: &[Token]) -> BTreeSet<Symbol> {
    tokens.iter().map(|t| t.text.clone()).collect()
}

pub fn parse_source(source: &str, path: &Path) -> FileResult<GrammarFile> {
    let mut sections = Sections {
        tokens: lexer::lex_source(source).into_iter(),
        file: path,
    };
    let file = Location::whole_file(path);

    let terminal_tokens = sections.counted(Section::Terminals).map_err(|e| vec![e])?;
    let mut nonterminal_tokens = sections.counted(Section::Nonterminals).map_err(|e| vec![e])?;
    let start_token = sections.entries(Section::StartSymbol, 1).map_err(|e| vec![e])?;
    nonterminal_tokens.extend(start_token.iter().cloned());

    verify_alphabets(&terminal_tokens, &nonterminal_tokens, &file)?;

    let rule_tokens = sections.counted(Section::Rules).map_err(|e| vec![e])?;
    let word_tokens = sections.counted(Section::Words).map_err(|e| vec![e])?;

    let terminals = symbol_set(&terminal_tokens);
    let nonterminals = symbol_set(&nonterminal_tokens);
    let productions = parse_rules(&rule_tokens, &Alphabet::new(&terminals, &nonterminals), path)?;

    let start_symbol = start_token
        .into_iter()
        .next()
        .map(|t| t.text)
        .unwrap_or_default();

    log::info!(
        "Loaded {}: {} terminals, {} nonterminals, {} rules, {} words",
        path.display(),
        terminals.len(),
        nonterminals.len(),
        productions.len(),
        word_tokens.len()
    );

    Ok(GrammarFile {
        grammar: Grammar {
            terminals,
            nonterminals,
            start_symbol,
            productions,
        },
        words: word_tokens.into_iter().map(|t| t.text).collect(),
    })
}

pub fn parse_file(path: &PathBuf) -> FileResult<GrammarFile> {
    let source = std::fs::read_to_string(path).map_err(|e| vec![io_error(e, path)])?;

    parse_source(&source, path)
}

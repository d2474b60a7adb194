//! Membership checks for unrestricted (type-0) grammars.
//!
//! Grammar files are loaded by [`parser`], rule text is split into symbols by
//! the greedy longest-match [`grammar::tokenize`], and [`search`] explores the
//! rewrite closure of the start symbol breadth first to decide whether a
//! word is derivable.

pub mod cli;
pub mod error_handling;
pub mod generator;
pub mod grammar;
pub mod parser;
pub mod search;

pub use grammar::{tokenize, Grammar, Production, TokenizeError};
pub use search::{is_derivable, search, Outcome, SearchLimits, Verdict};

/*
    This module generates words by applying random rewrites
*/

use rand::prelude::*;
use std::fmt::Display;
use std::path::Path;

use itertools::Itertools;

use crate::grammar::*;
use crate::error_handling::*;

pub const DEFAULT_MAX_STEPS: usize = 1000;

#[derive(Debug, PartialEq)]
pub enum GenerateErrorType {
    // A form with nonterminals that no rule can rewrite
    Stuck(String),
    // The derivation was still unfinished after this many rewrites
    StepLimit(usize),
}

impl ErrorType for GenerateErrorType {}

impl Display for GenerateErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GenerateErrorType::Stuck(form) => write!(f, "No rule applies to `{}`", form),
            GenerateErrorType::StepLimit(steps) => write!(f, "No word derived within {} rewrites", steps),
        }
    }
}

pub type GenerateError = Error<GenerateErrorType>;
pub type GenResult = Result<String, GenerateError>;

// Every way a rule can rewrite the form
fn applicable<'g>(grammar: &'g Grammar, form: &[Symbol]) -> Vec<(&'g Production, usize)> {
    grammar.productions
        .iter()
        .flat_map(|production| production
            .match_offsets(form)
            .map(move |offset| (production, offset))
            .collect_vec())
        .collect()
}

// Derives a word from the start symbol, choosing uniformly among all
// applicable rewrites at every step
pub fn generate(grammar: &Grammar, rng: &mut impl Rng, max_steps: usize, file: &Path) -> GenResult {
    let error = |kind| GenerateError::new(Location::whole_file(file), kind);
    let mut form = grammar.start_form();
    let mut steps = 0;

    loop {
        if grammar.is_all_terminals(&form) {
            log::debug!("Generated a word in {} rewrites", steps);
            return Ok(spelling(&form));
        }
        if steps == max_steps {
            return Err(error(GenerateErrorType::StepLimit(max_steps)));
        }

        let (production, offset) = *applicable(grammar, &form)
            .choose(rng)
            .ok_or_else(|| error(GenerateErrorType::Stuck(form.iter().join(" "))))?;

        form = production.apply_at(&form, offset);
        steps += 1;
    }
}

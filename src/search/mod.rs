/*
    This module decides whether a word is derivable from a grammar by a
    bounded breadth-first search over sentential forms
*/

use std::collections::HashSet;
use std::fmt::Display;

use itertools::Itertools;
use log::{debug, trace, warn};

use crate::grammar::*;

// Largest number of distinct forms a single search may record
pub const DEFAULT_MAX_STATES: usize = 2_000_000;

// Taken forms are dropped from the front of the arena once this many pile up
const COMPACT_AFTER: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchLimits {
    pub max_states: usize,
}

impl Default for SearchLimits {
    fn default() -> Self {
        SearchLimits {
            max_states: DEFAULT_MAX_STATES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    // A terminal form spelling the word was reached
    Found,
    // Every reachable form within the length bound was explored
    Exhausted,
    // The state cap stopped the search before it could finish
    LimitReached,
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Found => write!(f, "found"),
            Outcome::Exhausted => write!(f, "exhausted"),
            Outcome::LimitReached => write!(f, "limit reached"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Verdict {
    pub outcome: Outcome,
    // Forms taken off the queue
    pub explored: usize,
    // Distinct forms recorded, including the start form
    pub seen: usize,
}

impl Verdict {
    pub fn is_derivable(&self) -> bool {
        self.outcome == Outcome::Found
    }
}

// FIFO queue of forms stored in a growing arena, plus the keys of every form
// ever queued
struct Frontier {
    forms: Vec<SententialForm>,
    next: usize,
    seen: HashSet<String>,
}

impl Frontier {
    fn seeded(start: SententialForm) -> Self {
        let mut frontier = Frontier {
            forms: Vec::new(),
            next: 0,
            seen: HashSet::new(),
        };
        frontier.push(start);
        frontier
    }

    // Queues the form unless an equal one was queued before
    fn push(&mut self, form: SententialForm) -> bool {
        if !self.seen.insert(form_key(&form)) {
            return false;
        }
        self.forms.push(form);
        true
    }

    fn pop(&mut self) -> Option<SententialForm> {
        if self.next >= COMPACT_AFTER && self.next * 2 >= self.forms.len() {
            self.forms.drain(..self.next);
            self.next = 0;
        }

        let form = std::mem::take(self.forms.get_mut(self.next)?);
        self.next += 1;
        Some(form)
    }

    fn seen(&self) -> usize {
        self.seen.len()
    }
}

pub fn search(target: &str, grammar: &Grammar, limits: &SearchLimits) -> Verdict {
    // Forms are assumed never to lose terminal bytes, so longer ones are dropped
    let budget = target.len();
    let mut frontier = Frontier::seeded(grammar.start_form());
    let mut explored = 0;

    debug!(
        "Searching for {:?} with {} rules, at most {} states",
        target,
        grammar.productions.len(),
        limits.max_states
    );

    let verdict = |outcome, explored, frontier: &Frontier| Verdict {
        outcome,
        explored,
        seen: frontier.seen(),
    };

    while let Some(form) = frontier.pop() {
        explored += 1;
        trace!("Exploring [{}]", form.iter().join(" "));

        if grammar.terminal_bytes(&form) > budget {
            continue;
        }

        if grammar.is_all_terminals(&form) {
            if spelling(&form) == target {
                debug!("Found {:?} after exploring {} forms", target, explored);
                return verdict(Outcome::Found, explored, &frontier);
            }
            continue;
        }

        for production in &grammar.productions {
            for offset in production.match_offsets(&form) {
                let next = production.apply_at(&form, offset);
                if grammar.terminal_bytes(&next) > budget {
                    continue;
                }

                if frontier.push(next) && frontier.seen() > limits.max_states {
                    warn!(
                        "Search limit reached for {:?}: more than {} states, reporting not derivable",
                        target,
                        limits.max_states
                    );
                    return verdict(Outcome::LimitReached, explored, &frontier);
                }
            }
        }
    }

    debug!("Exhausted {} forms without deriving {:?}", explored, target);
    verdict(Outcome::Exhausted, explored, &frontier)
}

pub fn is_derivable(target: &str, grammar: &Grammar) -> bool {
    search(target, grammar, &SearchLimits::default()).is_derivable()
}

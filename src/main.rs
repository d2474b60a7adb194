use std::process::ExitCode;

use clap::Parser;
use rand::prelude::*;

use derivator::cli::Cli;
use derivator::error_handling::report_errors;
use derivator::{generator, parser, search};
use derivator::{Grammar, Outcome, SearchLimits, Verdict};

fn verdict_line(word: &str, verdict: &Verdict) -> String {
    match verdict.outcome {
        Outcome::Found => format!("Word \"{}\": derivable", word),
        Outcome::Exhausted => format!("Word \"{}\": not derivable", word),
        Outcome::LimitReached => format!("Word \"{}\": not derivable (search limit reached)", word),
    }
}

fn check_words(grammar: &Grammar, words: &[String], limits: &SearchLimits) {
    for word in words {
        let verdict = search::search(word, grammar, limits);
        log::info!(
            "{:?}: {} after exploring {} of {} recorded forms",
            word,
            verdict.outcome,
            verdict.explored,
            verdict.seen
        );
        println!("{}", verdict_line(word, &verdict));
    }
}

fn generate_words(grammar: &Grammar, cli: &Cli) -> ExitCode {
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut status = ExitCode::SUCCESS;

    for _ in 0..cli.generate.unwrap_or(1) {
        match generator::generate(grammar, &mut rng, cli.max_steps, &cli.file) {
            Ok(word) => println!("{}", word),
            Err(error) => {
                report_errors(&vec![error]);
                status = ExitCode::FAILURE;
            }
        }
    }

    status
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let parsed = match parser::parse_file(&cli.file) {
        Ok(parsed) => parsed,
        Err(errors) => {
            report_errors(&errors);
            return ExitCode::FAILURE;
        }
    };

    if cli.generate.is_some() {
        return generate_words(&parsed.grammar, &cli);
    }

    let words = if cli.words.is_empty() { &parsed.words } else { &cli.words };
    check_words(&parsed.grammar, words, &cli.search_limits());

    ExitCode::SUCCESS
}

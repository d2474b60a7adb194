use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::generator::DEFAULT_MAX_STEPS;
use crate::search::{SearchLimits, DEFAULT_MAX_STATES};

#[derive(Parser, Debug)]
#[command(version, about = "Checks which words an unrestricted grammar derives")]
pub struct Cli {
    /// File containing the grammar and the words to check
    pub file: PathBuf,

    /// Check this word instead of the file's words (repeatable)
    #[arg(short, long = "word", value_name = "WORD")]
    pub words: Vec<String>,

    /// Most distinct forms a single search may visit
    #[arg(short, long, value_name = "STATES", default_value_t = DEFAULT_MAX_STATES)]
    pub max_states: usize,

    /// Print this many random words of the grammar instead of checking words
    #[arg(short, long, value_name = "AMOUNT")]
    pub generate: Option<u32>,

    /// Most rewrites spent on one generated word
    #[arg(long, value_name = "STEPS", default_value_t = DEFAULT_MAX_STEPS)]
    pub max_steps: usize,

    /// Seed for generation (default: random)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn search_limits(&self) -> SearchLimits {
        SearchLimits {
            max_states: self.max_states,
        }
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults() {
        let cli = Cli::try_parse_from(["derivator", "grammar.txt"]).unwrap();

        assert_eq!(cli.file, PathBuf::from("grammar.txt"));
        assert!(cli.words.is_empty());
        assert_eq!(cli.search_limits(), SearchLimits::default());
        assert_eq!(cli.generate, None);
        assert_eq!(cli.max_steps, DEFAULT_MAX_STEPS);
        assert_eq!(cli.log_level(), log::LevelFilter::Warn);
    }

    #[test]
    fn parse_options() {
        let cli = Cli::try_parse_from([
            "derivator", "-w", "aabb", "--word", "", "-m", "50", "-vv", "g.txt"
        ]).unwrap();

        assert_eq!(cli.words, vec!["aabb".to_string(), String::new()]);
        assert_eq!(cli.search_limits().max_states, 50);
        assert_eq!(cli.log_level(), log::LevelFilter::Debug);
    }

    #[test]
    fn parse_generate() {
        let cli = Cli::try_parse_from([
            "derivator", "g.txt", "-g", "3", "--seed", "9", "--max-steps", "20"
        ]).unwrap();

        assert_eq!(cli.generate, Some(3));
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.max_steps, 20);
    }

    #[test]
    fn parse_missing_file() {
        assert!(Cli::try_parse_from(["derivator"]).is_err());
    }
}

//! AUGURY CLI
//!
//! Explore built-in scenarios exhaustively, print behavior profiles, and
//! diff saved profiles.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod scenarios;

use augury_core::{ExploreConfig, Fate, Fates, TreeExploration};
use augury_theory::{BehaviorProfile, ProfileComparison, behavior_profile, run_theory};
use clap::{Args, Parser, Subcommand};
use color_eyre::Result;
use scenarios::{ScenarioId, converge_lists};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "augury")]
#[command(about = "AUGURY - deterministic exhaustive choice exploration", long_about = None)]
struct Cli {
    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the behavior profile of a scenario
    Profile {
        /// Scenario to explore
        #[arg(short, long, value_enum)]
        scenario: ScenarioId,
        #[command(flatten)]
        source: SourceArgs,
        /// Also write the profile to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Run a scenario as a theory and report the outcome
    Theory {
        /// Scenario to explore
        #[arg(short, long, value_enum)]
        scenario: ScenarioId,
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Check that two list implementations converge
    Converge {
        /// Maximum number of 1-bits per explored mask
        #[arg(long, default_value_t = 1)]
        max_bits: u32,
    },
    /// Diff two saved behavior profiles
    Compare {
        /// Earlier profile
        #[arg(long)]
        before: PathBuf,
        /// Later profile
        #[arg(long)]
        after: PathBuf,
    },
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
struct SourceArgs {
    /// Maximum number of 1-bits per explored mask
    #[arg(long, default_value_t = 3)]
    max_bits: u32,
    /// Maximum number of fates to explore (0 = unlimited)
    #[arg(long, default_value_t = 0)]
    fate_limit: usize,
    /// Replay a single integer seed instead of exploring
    #[arg(long, conflicts_with = "max_bits")]
    seed: Option<u64>,
}

impl SourceArgs {
    fn fates(&self) -> Box<dyn Fates> {
        match self.seed {
            Some(seed) => Box::new(Fate::seeded(seed).as_fates()),
            None => Box::new(TreeExploration::new(
                ExploreConfig::new(self.max_bits).with_fate_limit(self.fate_limit),
            )),
        }
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn profile(scenario: ScenarioId, source: &SourceArgs) -> Result<BehaviorProfile> {
    tracing::info!(scenario = scenario.name(), "profiling");
    let fates = source.fates();
    Ok(behavior_profile(&*fates, |adv| scenario.run(adv))?)
}

fn theory(scenario: ScenarioId, source: &SourceArgs) -> Result<usize> {
    tracing::info!(scenario = scenario.name(), "running theory");
    let fates = source.fates();
    let evidence = run_theory(&*fates, |adv| {
        scenario.run(adv)?;
        Ok(())
    })?;
    Ok(evidence.len())
}

fn compare(before: &Path, after: &Path) -> Result<ProfileComparison> {
    let before = BehaviorProfile::load(before)?;
    let after = BehaviorProfile::load(after)?;
    Ok(ProfileComparison::compare(&before, &after))
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Commands::Profile { scenario, source, output } => {
            let profile = profile(scenario, &source)?;
            let json = profile.to_json()?;
            println!("{}", json);
            if let Some(path) = output {
                profile.save(&path)?;
                println!("Saved profile to {}", path.display());
            }
            Ok(())
        }
        Commands::Theory { scenario, source } => {
            let retained = theory(scenario, &source)?;
            println!("Theory {} held: {} adventures retained", scenario.name(), retained);
            Ok(())
        }
        Commands::Converge { max_bits } => {
            let exploration = TreeExploration::new(ExploreConfig::new(max_bits));
            let evidence = converge_lists(&exploration)?;
            println!("Candidates converged over {} adventures", evidence.len());
            Ok(())
        }
        Commands::Compare { before, after } => {
            let comparison = compare(&before, &after)?;
            println!("{}", comparison.report().trim_end());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(max_bits: u32) -> SourceArgs {
        SourceArgs {
            max_bits,
            fate_limit: 0,
            seed: None,
        }
    }

    #[test]
    fn test_cli_parses_profile() {
        let cli = Cli::try_parse_from(["augury", "profile", "--scenario", "ones", "--max-bits", "2"]).unwrap();
        match cli.command {
            Commands::Profile { scenario, source, output } => {
                assert_eq!(scenario, ScenarioId::Ones);
                assert_eq!(source.max_bits, 2);
                assert_eq!(source.seed, None);
                assert!(output.is_none());
            }
            _ => panic!("expected profile command"),
        }
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn test_cli_parses_seed() {
        let cli = Cli::try_parse_from(["augury", "theory", "-s", "short-ones", "--seed", "63"]).unwrap();
        match cli.command {
            Commands::Theory { scenario, source } => {
                assert_eq!(scenario, ScenarioId::ShortOnes);
                assert_eq!(source.seed, Some(63));
            }
            _ => panic!("expected theory command"),
        }
    }

    #[test]
    fn test_cli_rejects_seed_with_max_bits() {
        let result = Cli::try_parse_from(["augury", "theory", "-s", "ones", "--seed", "1", "--max-bits", "2"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_profile_command() {
        let profile = profile(ScenarioId::Ones, &source(2)).unwrap();
        assert_eq!(profile.answers(), vec!["", "1", "11"]);
    }

    #[test]
    fn test_profile_from_seed() {
        let args = SourceArgs { seed: Some(7), ..source(3) };
        let profile = profile(ScenarioId::Ones, &args).unwrap();
        assert_eq!(profile.answers(), vec!["111"]);
    }

    #[test]
    fn test_theory_command_reports_failure() {
        let err = theory(ScenarioId::ShortOnes, &source(7)).unwrap_err();
        assert!(err.to_string().contains("treeFate(31)"));
    }

    #[test]
    fn test_compare_saved_profiles() {
        let dir = tempfile::tempdir().unwrap();
        let before_path = dir.path().join("before.json");
        let after_path = dir.path().join("after.json");
        profile(ScenarioId::Ones, &source(2)).unwrap().save(&before_path).unwrap();
        profile(ScenarioId::Ones, &source(3)).unwrap().save(&after_path).unwrap();

        let same = compare(&before_path, &before_path).unwrap();
        assert!(same.identical);

        let changed = compare(&before_path, &after_path).unwrap();
        assert!(!changed.identical);
        assert!(changed.report().contains("3 adventures"));
    }
}

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use wheelbet::config::{Config, DEFAULT_CONFIG_FILE};
use wheelbet::{Bet, Session};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file [default: wheelbet.json, if present]
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Random seed, overrides the config file
    #[arg(short, long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bet on a number and its neighbors, then spin once
    Play {
        #[arg(short, long)]
        number: u8,
        /// Neighbors on each side (defaults to the configured radius)
        #[arg(short, long)]
        radius: Option<usize>,
        /// Print the round as JSON
        #[arg(long)]
        json: bool,
    },
    /// Repeat the same bet many times and report the win rate
    Simulate {
        #[arg(short, long)]
        number: u8,
        #[arg(short, long)]
        radius: Option<usize>,
        #[arg(short = 'k', long, default_value_t = 1000)]
        rounds: u32,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    run(args, &mut io::stdout().lock())
}

fn load_config(args: &Args) -> Result<Config> {
    // Only the implicit default file may be absent.
    let mut config = match &args.config {
        Some(path) => {
            Config::load(path).with_context(|| format!("loading {}", path.display()))?
        }
        None => Config::load_or_default(DEFAULT_CONFIG_FILE)
            .with_context(|| format!("loading {DEFAULT_CONFIG_FILE}"))?,
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    Ok(config)
}

fn run(args: Args, out: &mut impl Write) -> Result<()> {
    let mut session = Session::new(load_config(&args)?);

    match args.command {
        Commands::Play {
            number,
            radius,
            json,
        } => {
            let record = match radius {
                Some(radius) => session.play(number, radius)?,
                None => session.play_default(number)?,
            };
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(record)?)?;
                return Ok(());
            }
            writeln!(out, "Bet numbers: {:?}", record.bet.numbers)?;
            writeln!(out, "Winning number: {}", record.winning_number())?;
            writeln!(out, "{}", if record.is_win() { "WIN" } else { "LOSE" })?;
        }
        Commands::Simulate {
            number,
            radius,
            rounds,
        } => {
            let radius = radius.unwrap_or(session.config().default_radius);
            let expected = Bet::new(session.wheel(), number, radius)?.win_probability();
            for _ in 0..rounds {
                session.play(number, radius)?;
            }
            info!("simulated {} rounds on {} r{}", rounds, number, radius);
            writeln!(out, "Rounds: {}", session.rounds())?;
            writeln!(out, "Wins: {}", session.wins())?;
            writeln!(out, "Observed win rate: {:.4}", session.win_rate())?;
            writeln!(out, "Expected win rate: {:.4}", expected)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;

    fn scratch_config(name: &str, body: &str) -> PathBuf {
        let path =
            std::env::temp_dir().join(format!("wheelbet-cli-{}-{}.json", name, std::process::id()));
        fs::write(&path, body).unwrap();
        path
    }

    fn run_with(config: &Path, rest: &[&str]) -> Result<String> {
        let mut argv = vec!["wheelbet", "--config", config.to_str().unwrap()];
        argv.extend_from_slice(rest);
        let args = Args::try_parse_from(argv)?;
        let mut out = Vec::new();
        run(args, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    fn seeded_round(seed: u64, number: u8) -> u8 {
        let mut session = Session::new(Config {
            seed: Some(seed),
            ..Config::default()
        });
        session.play_default(number).unwrap().winning_number()
    }

    #[test]
    fn seed_flag_beats_config_seed() {
        let config = scratch_config("seed", r#"{ "seed": 1 }"#);
        let flagged = run_with(&config, &["--seed", "2", "play", "-n", "0", "--json"]).unwrap();
        let plain = run_with(&config, &["play", "-n", "0", "--json"]).unwrap();
        fs::remove_file(&config).unwrap();

        let flagged: serde_json::Value = serde_json::from_str(&flagged).unwrap();
        let plain: serde_json::Value = serde_json::from_str(&plain).unwrap();
        assert_eq!(flagged["winning_number"], seeded_round(2, 0));
        assert_eq!(plain["winning_number"], seeded_round(1, 0));
    }

    #[test]
    fn json_output_is_the_flat_record() {
        let config = scratch_config("json", "{}");
        let out = run_with(&config, &["--seed", "5", "play", "-n", "0", "-r", "2", "--json"]).unwrap();
        fs::remove_file(&config).unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys.len(), 4);
        for key in ["bet_number", "bets", "winning_number", "win"] {
            assert!(keys.contains(&key), "missing {key} in {out}");
        }
        assert_eq!(value["bet_number"], 0);
        assert_eq!(value["bets"], serde_json::json!([0, 3, 15, 26, 32]));
    }

    #[test]
    fn losing_round_still_succeeds() {
        let config = scratch_config("loss", "{}");
        let mut losses = 0;
        for seed in 0..100 {
            let seed = seed.to_string();
            let out = run_with(&config, &["--seed", &seed, "play", "-n", "7", "-r", "1"]).unwrap();
            assert!(out.starts_with("Bet numbers: "));
            if out.trim_end().ends_with("LOSE") {
                losses += 1;
            } else {
                assert!(out.trim_end().ends_with("WIN"));
            }
        }
        fs::remove_file(&config).unwrap();
        assert!(losses > 0);
    }

    #[test]
    fn simulate_reports_both_rates() {
        let config = scratch_config("simulate", "{}");
        let out = run_with(
            &config,
            &["--seed", "3", "simulate", "-n", "0", "-r", "2", "-k", "500"],
        )
        .unwrap();
        fs::remove_file(&config).unwrap();

        assert!(out.contains("Rounds: 500"));
        assert!(out.contains("Expected win rate: 0.1351"));
        let observed: f64 = out
            .lines()
            .find_map(|l| l.strip_prefix("Observed win rate: "))
            .unwrap()
            .parse()
            .unwrap();
        assert!((0.0..=1.0).contains(&observed));
    }

    #[test]
    fn mistyped_config_path_is_an_error() {
        let missing = std::env::temp_dir()
            .join(format!("wheelbet-cli-nodir-{}", std::process::id()))
            .join("typo.json");
        let err = run_with(&missing, &["--seed", "1", "play", "-n", "0"]).unwrap_err();
        assert!(format!("{err:#}").contains("typo.json"));
    }

    #[test]
    fn radius_outside_config_bounds_fails() {
        let config = scratch_config("bounds", "{}");
        let err = run_with(&config, &["play", "-n", "0", "-r", "9"]).unwrap_err();
        fs::remove_file(&config).unwrap();
        assert!(err.to_string().contains("radius 9"));
    }
}

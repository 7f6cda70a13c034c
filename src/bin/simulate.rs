//! Reel balance simulator CLI.
//!
//! Run Monte Carlo reels against a scripted player to tune difficulty.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                     # Default: 1000 reels
//!   cargo run --bin simulate -- -n 200 --seed 42 # Reproducible batch
//!   cargo run --bin simulate -- --threshold 0.6  # Lazier player

use reel::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║                  REEL BALANCE SIMULATOR                       ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Frame:          {:.4}s", config.frame_dt);
    println!("  Max Seconds:    {}", config.max_secs_per_run);
    println!("  Bot Threshold:  {:.2}", config.bot.push_threshold);
    println!("  Bot Reaction:   {:.2}s", config.bot.reaction_secs);
    println!("  Push Scale:     {}", config.minigame.push_scale);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = match run_simulation(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    println!("{}", report.to_text());

    if args.iter().any(|a| a == "--json") {
        let json = report.to_json();
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        match std::fs::write(&filename, json) {
            Ok(()) => println!("JSON report saved to: {}", filename),
            Err(e) => eprintln!("Failed to write JSON report: {}", e),
        }
    }
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(1000);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--dt" => {
                if i + 1 < args.len() {
                    config.frame_dt = args[i + 1].parse().unwrap_or(config.frame_dt);
                    i += 1;
                }
            }
            "--max-secs" => {
                if i + 1 < args.len() {
                    config.max_secs_per_run = args[i + 1].parse().unwrap_or(120.0);
                    i += 1;
                }
            }
            "--threshold" => {
                if i + 1 < args.len() {
                    config.bot.push_threshold =
                        args[i + 1].parse().unwrap_or(config.bot.push_threshold);
                    i += 1;
                }
            }
            "--reaction" => {
                if i + 1 < args.len() {
                    config.bot.reaction_secs =
                        args[i + 1].parse().unwrap_or(config.bot.reaction_secs);
                    i += 1;
                }
            }
            "--push-scale" => {
                if i + 1 < args.len() {
                    config.minigame.push_scale =
                        args[i + 1].parse().unwrap_or(config.minigame.push_scale);
                    i += 1;
                }
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "--quick" => {
                config = SimConfig::quick(config.seed.unwrap_or(1));
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Reel Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>        Number of reels (default: 1000)");
    println!("    -s, --seed <S>        Random seed for reproducibility");
    println!("    --dt <SECS>           Frame step (default: 1/60)");
    println!("    --max-secs <SECS>     Give up on a reel after this long (default: 120)");
    println!("    --threshold <POS>     Cursor position that triggers a push (default: 0.55)");
    println!("    --reaction <SECS>     Bot reaction delay (default: 0.2)");
    println!("    --push-scale <X>      Override the minigame push scale");
    println!("    -v, --verbose         Print every run");
    println!("    --json                Save JSON report");
    println!("    --quick               100 seeded reels");
    println!("    -h, --help            Show this help");
}

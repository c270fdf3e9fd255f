//! Boss rush balance simulator CLI.
//!
//! Plays many fresh games headlessly to see how long each boss takes to learn.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                    # Default: 100 runs
//!   cargo run --bin simulate -- -n 20 -t 50000 # 20 short runs
//!   cargo run --bin simulate -- --seed 42      # Reproducible run

use bossrush::simulator::{run_simulation, SimConfig};
use bossrush::utils::logging;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    logging::init_stderr_logging();

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              BOSS RUSH BALANCE SIMULATOR                      ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Max Ticks:      {}", config.max_ticks_per_run);
    println!("  Tick Interval:  {}ms", config.engine.tick_interval_ms);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = match run_simulation(&config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Cannot simulate: {}", e);
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
            Err(e) => {
                eprintln!("Failed to write JSON report: {}", e);
                std::process::exit(1);
            }
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
                    config.num_runs = args[i + 1].parse().unwrap_or(100);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-t" | "--ticks" => {
                if i + 1 < args.len() {
                    config.max_ticks_per_run = args[i + 1].parse().unwrap_or(360_000);
                    i += 1;
                }
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "--quick" => {
                let seed = config.seed.unwrap_or(0);
                config = SimConfig::quick(seed);
                config.verbosity = 1;
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Boss Rush Balance Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>      Number of simulated games (default: 100)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    -t, --ticks <T>     Max ticks per game (default: 360,000)");
    println!("    -v, --verbose       Print a line per game");
    println!("    --json              Save JSON report");
    println!("    --quick             Quick seeded check (5 short games)");
    println!("    -h, --help          Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                    # Default run");
    println!("    cargo run --bin simulate -- -n 20 -t 50000 # 20 short games");
    println!("    cargo run --bin simulate -- --seed 42      # Reproducible");
}

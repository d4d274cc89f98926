//! Headless stay-vs-switch simulator.
//!
//! Runs the same comparison as the interactive report and prints it.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                     # 1000 trials per strategy
//!   cargo run --bin simulate -- -n 100000        # Large run
//!   cargo run --bin simulate -- --seed 42 --json # Reproducible, as JSON

use montyhall::build_info;
use montyhall::logging;
use montyhall::simulator::{run_comparison, SimConfig, TrialSettings};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let (config, json) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!("Run 'simulate --help' for usage.");
            std::process::exit(1);
        }
    };

    logging::init_stderr(config.verbosity);

    if !json {
        println!("╔═══════════════════════════════════════════════════════════════╗");
        println!("║              MONTY HALL SIMULATOR                             ║");
        println!("╚═══════════════════════════════════════════════════════════════╝");
        println!();
        println!("Configuration:");
        println!("  Trials:         {}", config.trials());
        match config.seed {
            Some(seed) => println!("  Seed:           {}", seed),
            None => println!("  Seed:           random"),
        }
        println!(
            "  Started:        {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        );
        println!();
    }

    let report = run_comparison(&config);

    if json {
        println!("{}", report.to_json());
    } else {
        println!("{}", report.to_text());
    }
}

fn parse_args(args: &[String]) -> Result<(SimConfig, bool), String> {
    let mut config = SimConfig::default();
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--trials" => {
                let value = value_after(args, i)?;
                let trials: u32 = value
                    .parse()
                    .map_err(|_| format!("invalid trial count: {}", value))?;
                config.settings = TrialSettings::new(trials).map_err(|e| e.to_string())?;
                i += 1;
            }
            "-s" | "--seed" => {
                let value = value_after(args, i)?;
                config.seed = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid seed: {}", value))?,
                );
                i += 1;
            }
            "--json" => json = true,
            "-v" | "--verbose" => config.verbosity = 1,
            "-q" | "--quiet" => config.verbosity = 0,
            "--version" => {
                println!("{}", build_info::version_line("simulate"));
                std::process::exit(0);
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            other => return Err(format!("unknown argument: {}", other)),
        }
        i += 1;
    }

    Ok((config, json))
}

fn value_after(args: &[String], i: usize) -> Result<&str, String> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| format!("{} requires a value", args[i]))
}

fn print_help() {
    println!("Monty Hall Simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --trials <N>    Trials per strategy, 100-100000 in steps of 100 (default: 1000)");
    println!("    -s, --seed <S>      Random seed for reproducibility");
    println!("    --json              Print the report as JSON");
    println!("    -v, --verbose       Debug logging on stderr");
    println!("    -q, --quiet         Only warnings on stderr");
    println!("    --version           Show version information");
    println!("    -h, --help          Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    cargo run --bin simulate                     # Default run");
    println!("    cargo run --bin simulate -- -n 100000        # Converge on 1/3 vs 2/3");
    println!("    cargo run --bin simulate -- --seed 42        # Reproducible");
}

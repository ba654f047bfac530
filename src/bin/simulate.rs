//! Monte Carlo blackjack simulation binary.
//!
//! Usage:
//!   cargo run --release --bin simulate -- [OPTIONS]
//!
//! Options:
//!   -n, --hands <N>      Number of initial hands to simulate (default: 300000)
//!   --s17                Dealer stands on soft 17 (default is H17)
//!   -s, --seed <N>       RNG seed for reproducibility (default: 7)
//!   -t, --threads <N>    Number of threads (default: auto)
//!   -o, --output <FILE>  Report JSON file (default: report.json)

use std::env;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};

use blackjack_sim::{Rules, SimConfig, SimReport, Simulator};

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut hands: u64 = 300_000;
    let mut s17 = false;
    let mut seed: u64 = 7;
    let mut threads: usize = 0;
    let mut output_file = "report.json".to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--hands" | "-n" => {
                i += 1;
                if i < args.len() {
                    hands = args[i].parse().unwrap_or(hands);
                }
            }
            "--s17" => {
                s17 = true;
            }
            "--seed" | "-s" => {
                i += 1;
                if i < args.len() {
                    seed = args[i].parse().unwrap_or(seed);
                }
            }
            "--threads" | "-t" => {
                i += 1;
                if i < args.len() {
                    threads = args[i].parse().unwrap_or(0);
                }
            }
            "--output" | "-o" => {
                i += 1;
                if i < args.len() {
                    output_file = args[i].clone();
                }
            }
            "--help" | "-h" => {
                print_help();
                return;
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                print_help();
                return;
            }
        }
        i += 1;
    }

    println!("=================================================");
    println!("  Monte Carlo Blackjack Simulator");
    println!("=================================================");
    println!();

    let rules = if s17 { Rules::s17() } else { Rules::h17() };
    let mut config = SimConfig::default()
        .with_hands(hands)
        .with_rules(rules)
        .with_seed(seed);
    if threads > 0 {
        config = config.with_threads(threads);
    }

    println!("Rule: {}", rules.label());
    println!("Hands: {}", hands);
    println!("Seed: {}", seed);
    println!(
        "Threads: {}",
        if threads == 0 {
            "auto".to_string()
        } else {
            threads.to_string()
        }
    );
    println!("Output: {}", output_file);
    println!();

    let bar = ProgressBar::new(hands);
    if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} hands ({eta})") {
        bar.set_style(style);
    }

    let start = Instant::now();
    let report = match Simulator::new(config).run_with_progress(|done| bar.inc(done)) {
        Ok(report) => report,
        Err(e) => {
            bar.abandon();
            eprintln!("Simulation failed: {}", e);
            std::process::exit(1);
        }
    };
    bar.finish_and_clear();
    let elapsed = start.elapsed();

    let summary = &report.summary;
    println!("Rule: {}", summary.rule);
    println!("Hands simulated: {}", summary.hands_simulated);
    println!("Win:  {:.2}%", summary.win_rate * 100.0);
    println!("Loss: {:.2}%", summary.loss_rate * 100.0);
    println!("Push: {:.2}%", summary.push_rate * 100.0);
    println!("EV per initial bet: {:.3}%", summary.ev_per_hand * 100.0);
    println!(
        "Splits: {}  Doubles: {}  Player busts: {}  Dealer busts: {}",
        report.trackers.counters.splits,
        report.trackers.counters.doubles,
        report.trackers.counters.player_bust,
        report.trackers.counters.dealer_bust
    );
    println!(
        "Time: {:.2}s ({:.0} hands/s)",
        elapsed.as_secs_f64(),
        summary.hands_simulated as f64 / elapsed.as_secs_f64()
    );
    println!();

    println!("Exporting report to {}...", output_file);
    match save_report(&report, &output_file) {
        Ok(_) => println!("Report saved successfully!"),
        Err(e) => eprintln!("Error saving report: {}", e),
    }
}

fn save_report(report: &SimReport, path: &str) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(report).map_err(std::io::Error::from)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())
}

fn print_help() {
    println!("Monte Carlo Blackjack Simulator");
    println!();
    println!("Usage: simulate [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -n, --hands <N>      Number of initial hands to simulate (default: 300000)");
    println!("  --s17                Dealer stands on soft 17 (default is H17)");
    println!("  -s, --seed <N>       RNG seed for reproducibility (default: 7)");
    println!("  -t, --threads <N>    Number of threads (default: auto)");
    println!("  -o, --output <FILE>  Report JSON file (default: report.json)");
    println!("  -h, --help           Show this help");
    println!();
    println!("Examples:");
    println!("  # One million H17 hands");
    println!("  simulate --hands 1000000");
    println!();
    println!("  # Compare S17 with a fixed seed");
    println!("  simulate --s17 --seed 42 --output s17.json");
}

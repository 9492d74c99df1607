//! Boarding simulator CLI

use anyhow::Context;
use boarding_simulator_core_rs::orchestrator::monotonicity_violations;
use boarding_simulator_core_rs::{boarding_time_by_size, BoardingConfig, Plane, PolicyConfig};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "boarding-sim")]
#[command(about = "Simulate single-aisle airplane boarding")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Board one plane and print the elapsed ticks
    Run {
        /// Number of seat rows
        #[arg(short, long, required_unless_present = "config")]
        length: Option<usize>,

        /// JSON BoardingConfig file (overrides --length/--policy)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Stop as soon as this passenger (e.g. name_12) is seated
        #[arg(short, long)]
        passenger: Option<String>,

        /// Boarding order heuristic
        #[arg(long, value_enum, default_value = "steffen")]
        policy: PolicyArg,

        /// Print the full event log
        #[arg(long)]
        events: bool,
    },

    /// Print the boarding order of a plane
    Order {
        /// Number of seat rows
        #[arg(short, long)]
        length: usize,

        /// Boarding order heuristic
        #[arg(long, value_enum, default_value = "steffen")]
        policy: PolicyArg,

        /// Show airline seat labels (e.g. 12F) instead of (row,side,distance)
        #[arg(long)]
        classic: bool,
    },

    /// Board planes of increasing size and tabulate the times
    Sweep {
        /// Largest plane to board
        #[arg(short, long, default_value = "59")]
        max_length: usize,

        /// Smallest plane to board
        #[arg(long, default_value = "1")]
        min_length: usize,

        /// Boarding order heuristic
        #[arg(long, value_enum, default_value = "steffen")]
        policy: PolicyArg,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    Steffen,
    BackToFront,
}

impl From<PolicyArg> for PolicyConfig {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Steffen => PolicyConfig::Steffen,
            PolicyArg::BackToFront => PolicyConfig::BackToFront,
        }
    }
}

fn load_config(path: &Path) -> anyhow::Result<BoardingConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            length,
            config,
            passenger,
            policy,
            events,
        } => {
            let config = match (config, length) {
                (Some(path), _) => load_config(&path)?,
                (None, Some(length)) => BoardingConfig {
                    length,
                    policy: policy.into(),
                },
                (None, None) => anyhow::bail!("either --length or --config is required"),
            };

            let plane = Plane::from_config(&config)?;
            let stop = passenger.as_deref().map(|name| plane.passenger(name)).transpose()?;
            let outcome = plane.simulate(stop)?;

            if events {
                for event in outcome.event_log.events() {
                    println!("{}", serde_json::to_string(event)?);
                }
            }

            match stop {
                Some(p) => {
                    let seat = plane.seat_of(p)?;
                    println!(
                        "{} (seat {}, called {} of {}) seated after {} ticks",
                        p,
                        plane.classic_position(seat)?,
                        plane.passenger_boarding_rank(p)? + 1,
                        plane.registry().len(),
                        outcome.ticks
                    );
                }
                None => println!(
                    "{} rows, {} passengers: boarded in {} ticks",
                    plane.length(),
                    plane.registry().len(),
                    outcome.ticks
                ),
            }
        }

        Commands::Order {
            length,
            policy,
            classic,
        } => {
            let plane = Plane::with_policy(length, policy.into())?;
            for (rank, seat) in plane.boarding_order().iter().enumerate() {
                let passenger = plane
                    .registry()
                    .passenger_at(seat)
                    .context("seat without passenger")?;
                let label = if classic {
                    plane.classic_position(seat)?
                } else {
                    seat.to_string()
                };
                println!("{:>4}  {:<10} {}", rank + 1, passenger, label);
            }
        }

        Commands::Sweep {
            max_length,
            min_length,
            policy,
            json,
        } => {
            let table = boarding_time_by_size(min_length..=max_length, policy.into())?;

            if json {
                println!("{}", serde_json::to_string_pretty(&table)?);
            } else {
                println!("{:>6}  {:>6}", "rows", "ticks");
                for row in &table {
                    println!("{:>6}  {:>6}", row.length, row.ticks);
                }
            }

            for length in monotonicity_violations(&table) {
                eprintln!("warning: length {} boarded faster than length {}", length, length - 1);
            }
        }
    }

    Ok(())
}

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use u_fleetmix::constructive::{FleetSavings, MergeEvent, MergeObserver};
use u_fleetmix::evaluation::RouteEvaluator;
use u_fleetmix::instances::{kuala_belait, random_instance};
use u_fleetmix::models::Instance;
use u_fleetmix::report::SolutionReport;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve an instance and print the routes
    Solve {
        /// JSON instance file (defaults to the bundled Kuala Belait data)
        #[arg(short, long, conflicts_with = "random")]
        input: Option<PathBuf>,

        /// Solve a random instance with this many customers instead
        #[arg(short, long)]
        random: Option<usize>,

        /// Seed for --random
        #[arg(short, long, default_value_t = 42)]
        seed: u64,

        /// Print the solution as JSON
        #[arg(long)]
        json: bool,

        /// Re-check coverage, capacity and vehicle choice after solving
        #[arg(long)]
        verify: bool,
    },
    /// Print a random instance as JSON
    Generate {
        #[arg(short, long, default_value_t = 25)]
        customers: usize,

        #[arg(short, long, default_value_t = 42)]
        seed: u64,
    },
}

/// Logs every accepted merge as it happens.
struct MergeLog<'a> {
    instance: &'a Instance,
}

impl MergeObserver for MergeLog<'_> {
    fn on_merge(&mut self, event: &MergeEvent<'_>) {
        let stops: Vec<&str> = event
            .merged
            .customers()
            .iter()
            .map(|&c| self.instance.location(c).id())
            .collect();
        info!(
            step = event.step,
            vehicle = self.instance.catalog().get(event.merged.vehicle()).name(),
            cost = event.merged.cost(),
            "merge {}",
            stops.join(" -> ")
        );
    }
}

fn load(input: Option<PathBuf>, random: Option<usize>, seed: u64) -> anyhow::Result<Instance> {
    let instance = match (input, random) {
        (Some(path), _) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            Instance::from_json(&json)?
        }
        (None, Some(customers)) => random_instance(customers, seed)?,
        (None, None) => kuala_belait()?,
    };
    Ok(instance)
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Solve {
            input,
            random,
            seed,
            json,
            verify,
        } => {
            let instance = load(input, random, seed)?;
            let mut log = MergeLog {
                instance: &instance,
            };
            let (solution, stats) = FleetSavings::new(&instance)?.run(&mut log)?;
            info!(
                evaluated = stats.evaluated,
                stale = stats.stale,
                over_capacity = stats.over_capacity,
                not_cheaper = stats.not_cheaper,
                "candidates consumed"
            );

            if verify {
                let violations = RouteEvaluator::new(&instance).verify(&solution);
                for v in &violations {
                    warn!("{:?}", v.kind);
                }
                if !violations.is_empty() {
                    bail!("solution has {} violations", violations.len());
                }
            }

            let report = SolutionReport::new(&instance, &solution);
            if json {
                println!("{}", report.to_json()?);
            } else {
                print!("{report}");
            }
        }
        Commands::Generate { customers, seed } => {
            let instance = random_instance(customers, seed)?;
            println!("{}", serde_json::to_string_pretty(&instance.to_document())?);
        }
    }

    Ok(())
}

//! life3d - command-line driver for the stochastic 3D automaton.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use stochastic_life3d::{
    run, DiagonalProbe, Grid, LogReporter, Observer, Report, ScanMode, SimConfig,
};

#[derive(Parser)]
#[command(name = "life3d")]
#[command(version)]
#[command(about = "Probabilistic 3D cellular automaton on a cubic lattice")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed a grid and advance it, reporting after every generation
    Run {
        /// Configuration file (JSON); defaults are used if it does not exist
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,

        /// Number of generations to advance
        #[arg(short, long)]
        generations: Option<u32>,

        /// Interior scan strategy
        #[arg(long, value_enum)]
        scan: Option<ScanArg>,

        /// Diagonal neighbor sampling
        #[arg(long, value_enum)]
        probe: Option<ProbeArg>,

        /// Print each report to stdout in addition to the log
        #[arg(short, long)]
        print: bool,
    },

    /// Generate default configuration file
    Init {
        /// Output path
        #[arg(short, long, default_value = "life3d.json")]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ScanArg {
    InPlace,
    Snapshot,
}

impl From<ScanArg> for ScanMode {
    fn from(arg: ScanArg) -> Self {
        match arg {
            ScanArg::InPlace => ScanMode::InPlace,
            ScanArg::Snapshot => ScanMode::Snapshot,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ProbeArg {
    Paired,
    Shifted,
}

impl From<ProbeArg> for DiagonalProbe {
    fn from(arg: ProbeArg) -> Self {
        match arg {
            ProbeArg::Paired => DiagonalProbe::Paired,
            ProbeArg::Shifted => DiagonalProbe::Shifted,
        }
    }
}

/// Logs every report and optionally echoes it to stdout.
struct Console {
    print: bool,
}

impl Observer for Console {
    fn observe(&mut self, grid: &Grid, report: &Report) {
        LogReporter.observe(grid, report);
        if self.print {
            println!("{report}");
            println!();
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            seed,
            generations,
            scan,
            probe,
            print,
        } => {
            let mut sim = match config {
                Some(path) if path.exists() => {
                    log::info!("Loading config from {}", path.display());
                    SimConfig::from_file(&path)?
                }
                Some(path) => {
                    log::warn!("{} not found, using default configuration", path.display());
                    SimConfig::default()
                }
                None => SimConfig::default(),
            };

            if seed.is_some() {
                sim.seed = seed;
            }
            if let Some(generations) = generations {
                sim.generations = generations;
            }
            if let Some(scan) = scan {
                sim.engine.scan = scan.into();
            }
            if let Some(probe) = probe {
                sim.engine.diagonal_probe = probe.into();
            }

            let summary = run(&sim, &mut Console { print })?;
            println!("seed: {}", summary.seed);
            println!("{}", summary.final_report);
            Ok(())
        }

        Commands::Init { output } => {
            SimConfig::default().to_file(&output)?;
            println!("Wrote default configuration to {}", output.display());
            Ok(())
        }
    }
}

/*!
 * CPU Scheduling Simulator - Command Line Entry Point
 *
 * Pulls a workload from a process feed, runs one policy (or all of them
 * for comparison), prints the report and writes the export files.
 */

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io;
use std::path::PathBuf;
use tracing::{info, warn};

use cpu_sched_sim::{
    compare, export_outcome, init_tracing, simulate, ComparisonReport, ExportConfig, FileFeed,
    InteractiveFeed, ProcessDescriptor, ProcessFeed, RunReport, SchedulingPolicy,
    SimulationConfig, SystemProcessFeed, TimeQuantum,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Source {
    /// Live processes from /proc with synthetic timings
    System,
    /// Prompted on the terminal
    Interactive,
    /// Delimited text file (see --input)
    File,
}

#[derive(Debug, Parser)]
#[command(name = "cpu-sched-sim", version, about = "Discrete-time CPU scheduling simulator")]
struct Cli {
    /// Scheduling policy: round_robin, fcfs or priority [env: SCHED_POLICY]
    #[arg(short, long, value_name = "POLICY")]
    algorithm: Option<SchedulingPolicy>,

    /// Round-robin time quantum in ticks [env: SCHED_QUANTUM]
    #[arg(short, long, value_name = "TICKS")]
    quantum: Option<u64>,

    /// Where the workload comes from
    #[arg(short, long, value_enum, default_value_t = Source::System)]
    source: Source,

    /// Workload file; implies --source file
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Maximum number of processes to take from the feed [env: SCHED_PROCESS_LIMIT]
    #[arg(short = 'n', long, value_name = "N")]
    count: Option<usize>,

    /// Seed for the synthetic timings of the system feed [env: SCHED_SEED]
    #[arg(long)]
    seed: Option<u64>,

    /// Directory for the CSV exports [env: SCHED_OUTPUT_DIR]
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Also write a JSON summary of the run to PATH
    #[arg(long, value_name = "PATH")]
    summary: Option<PathBuf>,

    /// Run every policy over the same workload and print a comparison
    #[arg(long)]
    compare: bool,

    /// Skip writing export files
    #[arg(long)]
    no_export: bool,
}

impl Cli {
    fn source(&self) -> Source {
        if self.input.is_some() {
            Source::File
        } else {
            self.source
        }
    }

    /// Layer the command line over the environment-derived config
    fn apply(&self, mut config: SimulationConfig) -> Result<SimulationConfig> {
        if let Some(policy) = self.algorithm {
            config.policy = policy;
        }
        if let Some(quantum) = self.quantum {
            config.quantum = TimeQuantum::new(quantum)?;
        }
        if let Some(count) = self.count {
            config.process_limit = count;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(dir) = &self.output_dir {
            config.exports = ExportConfig::in_dir(dir);
        }
        if let Some(path) = &self.summary {
            config.exports = config.exports.with_summary(path);
        }
        Ok(config)
    }

    /// The system feed is bounded by the configured limit; files and
    /// prompts are only bounded when --count is given
    fn feed_limit(&self, config: &SimulationConfig) -> usize {
        match self.source() {
            Source::System => config.process_limit,
            Source::Interactive | Source::File => self.count.unwrap_or(usize::MAX),
        }
    }
}

fn acquire(cli: &Cli, config: &SimulationConfig) -> Result<Vec<ProcessDescriptor>> {
    let limit = cli.feed_limit(config);

    let descriptors = match cli.source() {
        Source::System => {
            let feed = SystemProcessFeed::new();
            let mut feed = match config.seed {
                Some(seed) => feed.with_seed(seed),
                None => feed,
            };
            feed.acquire(limit)
                .context("failed to read the live process list")?
        }
        Source::Interactive => {
            let stdin = io::stdin();
            InteractiveFeed::new(stdin.lock(), io::stdout())
                .acquire(limit)
                .context("failed to read processes from the terminal")?
        }
        Source::File => {
            let path = cli
                .input
                .clone()
                .context("--source file requires --input <PATH>")?;
            FileFeed::new(&path)
                .acquire(limit)
                .with_context(|| format!("failed to load processes from {}", path.display()))?
        }
    };

    info!(count = descriptors.len(), source = ?cli.source(), "workload acquired");
    Ok(descriptors)
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = cli.apply(SimulationConfig::from_env()?)?;

    let descriptors = acquire(&cli, &config)?;

    if cli.compare {
        let outcomes = compare(&descriptors, config.quantum)?;
        print!("{}", ComparisonReport(&outcomes));
        return Ok(());
    }

    let outcome = simulate(descriptors, config.policy, config.quantum)?;
    print!("{}", RunReport::new(&outcome));

    if cli.no_export {
        return Ok(());
    }

    let report = export_outcome(&outcome, &config.exports);
    if let Ok(path) = &report.process_table {
        println!("Process table saved to {}", path.display());
    }
    if let Ok(path) = &report.switch_log {
        println!("Context switch log saved to {}", path.display());
    }
    if let Some(Ok(path)) = &report.summary {
        println!("Run summary saved to {}", path.display());
    }
    for failure in report.failures() {
        warn!(error = %failure, "export incomplete");
        eprintln!("warning: {}", failure);
    }

    Ok(())
}

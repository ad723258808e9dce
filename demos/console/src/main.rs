//! sugarscape — console runner for the sugarscape engine.
//!
//! Steps the model and prints the agent grid after every step, pausing
//! between frames.  Runs until interrupted unless `--steps` is given.
//!
//! ```text
//! sugarscape                                  # 35×35, 25 agents, forever
//! sugarscape --steps 100 --seed 7 --quiet --csv output/run1
//! sugarscape --config demos/console/configs/large.json --interval-ms 0
//! RUST_LOG=sugar_sim=debug sugarscape --steps 20
//! ```

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use sugar_core::SugarscapeConfig;
use sugar_output::{CsvWriter, SimOutputObserver, write_frame};
use sugar_sim::{SimBuilder, SimObserver};

#[derive(Parser, Debug)]
#[command(
    name = "sugarscape",
    version,
    about = "Run the Sugarscape model and print the agent grid each step"
)]
struct Cli {
    /// JSON configuration file.  Missing fields take their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width (overrides the config file).
    #[arg(long)]
    width: Option<u32>,

    /// Grid height (overrides the config file).
    #[arg(long)]
    height: Option<u32>,

    /// Target population (overrides the config file).
    #[arg(long)]
    agents: Option<usize>,

    /// Per-step resource regrowth (overrides the config file).
    #[arg(long)]
    growth_rate: Option<u32>,

    /// Fixed RNG seed.  Unseeded runs differ every time.
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many steps instead of running forever.
    #[arg(long)]
    steps: Option<u64>,

    /// Pause between steps, in milliseconds.
    #[arg(long, default_value_t = 250)]
    interval_ms: u64,

    /// Do not print frames.
    #[arg(long)]
    quiet: bool,

    /// Write step_summaries.csv into this directory.
    #[arg(long)]
    csv: Option<PathBuf>,
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init();
}

fn load_config(cli: &Cli) -> Result<SugarscapeConfig> {
    let mut config: SugarscapeConfig = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("parsing config {}", path.display()))?
        }
        None => SugarscapeConfig::default(),
    };

    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    if let Some(agents) = cli.agents {
        config.agent_count = agents;
    }
    if let Some(rate) = cli.growth_rate {
        config.growth_rate = rate;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    Ok(config)
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    let mut sim = SimBuilder::new(config).build().context("building simulation")?;

    let mut output = match &cli.csv {
        Some(dir) => Some(SimOutputObserver::new(
            CsvWriter::new(dir).with_context(|| format!("opening {}", dir.display()))?,
        )),
        None => None,
    };

    let interval = Duration::from_millis(cli.interval_ms);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let t0 = Instant::now();

    while cli.steps.is_none_or(|n| sim.tick().0 < n) {
        sim.step()
            .with_context(|| format!("step {} aborted", sim.tick().0))?;

        if let Some(obs) = output.as_mut() {
            obs.on_step_end(&sim.summary());
        }
        if !cli.quiet {
            write_frame(&mut out, &sim)?;
            out.flush()?;
        }
        if !interval.is_zero() {
            thread::sleep(interval);
        }
    }

    if let Some(mut obs) = output {
        obs.on_sim_end(sim.tick());
        if let Some(e) = obs.take_error() {
            return Err(e).context("writing step summaries");
        }
    }

    let summary = sim.summary();
    info!(
        steps = summary.tick.0,
        population = summary.population,
        total_wealth = summary.total_wealth,
        elapsed_secs = t0.elapsed().as_secs_f64(),
        "run finished"
    );
    Ok(())
}

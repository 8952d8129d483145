use std::io;
use std::process::ExitCode;

use tracing::{error, info};

use cpu_sched_sim::config::SimulationConfig;
use cpu_sched_sim::loader;
use cpu_sched_sim::report::{report_run, ConsoleReport};
use cpu_sched_sim::scheduler::simulate_all;
use cpu_sched_sim::telemetry::init_tracing;
use cpu_sched_sim::validation::validate_batch;
use cpu_sched_sim::{Result, SchedError};

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "aborting");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let path = loader::input_path(std::env::args())?;
    let config = SimulationConfig::from_env()?;
    info!(path = %path.display(), ?config, "starting simulation");

    // Everything is loaded and checked before the first byte of output.
    let processes = loader::load_file(&path)?;
    validate_batch(&processes).map_err(SchedError::Validation)?;

    let runs = simulate_all(&processes, &config);

    let mut report = ConsoleReport::new(io::stdout().lock());
    for run in &runs {
        report_run(&mut report, run)?;
    }
    Ok(())
}

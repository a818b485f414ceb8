//! Loading inputs and running scenarios.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use arbo_config::load_scenario;
use arbo_core::Parameters;
use arbo_env::{AdjacencyOptions, Environment, GeoJsonOptions, load_adjacency_csv, load_geojson};
use arbo_output::{CsvWriter, JsonResultsWriter, SnapshotObserver, Tee};
use arbo_sim::{MonteCarlo, RunOutcome, SimBuilder, SimObserver, Simulation};

use crate::args::Cli;

/// Looked up in this order inside each batch subdirectory.
pub const ENVIRONMENT_FILES: [&str; 3] = ["environment.geojson", "environment.json", "environment.csv"];
pub const PARAMETERS_FILE: &str = "parameters.json";

/// Pick the loader from the file extension.
pub fn load_environment(path: &Path) -> Result<Environment> {
    let ext = path.extension().and_then(OsStr::to_str).map(str::to_ascii_lowercase);
    let env = match ext.as_deref() {
        Some("geojson" | "json") => load_geojson(path, GeoJsonOptions::default())?,
        Some("csv") => load_adjacency_csv(path, AdjacencyOptions::default())?,
        _ => bail!("cannot tell the format of {} (expected .geojson, .json or .csv)", path.display()),
    };
    Ok(env)
}

pub fn run_single(args: &Cli) -> Result<()> {
    let environment = args.environment.as_deref().context("--environment is required")?;
    let parameters = args.parameters.as_deref().context("--parameters is required")?;
    run_scenario(environment, parameters, &args.output_dir, args)
}

/// Every subdirectory of `input` with an environment file and a
/// `parameters.json` is one scenario; its results go to
/// `<output-dir>/<subdirectory>/`.  Failed scenarios do not stop the batch.
pub fn run_batch(input: &Path, args: &Cli) -> Result<()> {
    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(input).with_context(|| format!("failed to list {}", input.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();

    let (mut ran, mut failed) = (0usize, 0usize);
    for dir in &dirs {
        let Some(name) = dir.file_name() else { continue };
        let parameters = dir.join(PARAMETERS_FILE);
        let Some(environment) = find_environment(dir) else {
            log::warn!("skipping {}: no environment file", dir.display());
            continue;
        };
        if !parameters.is_file() {
            log::warn!("skipping {}: no {PARAMETERS_FILE}", dir.display());
            continue;
        }

        ran += 1;
        log::info!("scenario {}", name.to_string_lossy());
        if let Err(error) = run_scenario(&environment, &parameters, &args.output_dir.join(name), args) {
            log::error!("scenario {} failed: {error:#}", name.to_string_lossy());
            failed += 1;
        }
    }

    if ran == 0 {
        log::warn!("no scenarios found in {}", input.display());
    }
    if failed > 0 {
        bail!("{failed} of {ran} scenario(s) failed");
    }
    Ok(())
}

pub fn find_environment(dir: &Path) -> Option<PathBuf> {
    ENVIRONMENT_FILES.iter().map(|f| dir.join(f)).find(|p| p.is_file())
}

/// Load one environment and scenario, run every repetition and write the
/// results into `output_dir`.
pub fn run_scenario(environment: &Path, parameters: &Path, output_dir: &Path, args: &Cli) -> Result<()> {
    let env = load_environment(environment)
        .with_context(|| format!("failed to load environment {}", environment.display()))?;
    let scenario = load_scenario(parameters)
        .with_context(|| format!("failed to load parameters {}", parameters.display()))?;

    let runs = args.runs.unwrap_or(scenario.runs);
    let base_seed = args.seed.unwrap_or(scenario.params.seed);
    let mc = MonteCarlo::new(runs, base_seed);
    if runs == 0 {
        log::warn!("scenario asks for zero runs");
    }

    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;
    let mut sink = SnapshotObserver::new(writers(output_dir, args)?);
    let config = args.sim_config();

    for run in 0..runs {
        let params = Parameters { seed: mc.seed_for(run), ..scenario.params.clone() };
        let mut sim = SimBuilder::new(&env, params, config.clone())
            .build()
            .with_context(|| format!("failed to set up run {run}"))?;

        sink.start_run(run);
        let outcome = drive(&mut sim, &mut sink, args);
        log::info!(
            "run {}/{runs} (seed {}): {}; peak {} infected humans at cycle {}",
            run + 1,
            outcome.seed,
            outcome.last,
            outcome.peak.infected_humans,
            outcome.peak.cycle,
        );
        sink.write_outcome(&outcome);
    }

    sink.finish();
    if let Some(error) = sink.take_error() {
        return Err(error).with_context(|| format!("failed to write results to {}", output_dir.display()));
    }
    log::info!("results written to {}", output_dir.display());
    Ok(())
}

fn writers(dir: &Path, args: &Cli) -> Result<Tee> {
    let mut tee = Tee::new().with(CsvWriter::new(dir).context("failed to open CSV output")?);
    if args.json {
        tee.push(JsonResultsWriter::new(dir));
    }
    #[cfg(feature = "sqlite")]
    if args.sqlite {
        tee.push(arbo_output::SqliteWriter::new(dir).context("failed to open SQLite output")?);
    }
    Ok(tee)
}

/// Step `sim` cycle by cycle so progress can be logged between cycles.
pub(crate) fn drive(sim: &mut Simulation<'_>, sink: &mut impl SimObserver, args: &Cli) -> RunOutcome {
    let initial = sim.prepare();
    sink.on_prepared(&initial);

    while sim.cycle().0 < sim.params().cycles {
        sink.on_cycle_start(sim.cycle());
        let Some(snapshot) = sim.iterate() else { break };
        if args.full_trajectory || snapshot.progress.is_complete() {
            sink.on_snapshot(&snapshot);
        }
        if args.progress_every > 0 && snapshot.cycle() % args.progress_every == 0 {
            log::info!("{snapshot}");
        }
    }

    sink.on_sim_end(sim.latest());
    sim.outcome()
}

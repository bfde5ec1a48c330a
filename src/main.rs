//! `compare` — drive the full subset-sum algorithm comparison.
//!
//! Runs both genetic-algorithm sweeps, the best-configuration run of every
//! algorithm family, aggregates the results, and writes a self-contained
//! Plotly HTML report. Any spawn, exit, or decode failure aborts the whole
//! comparison with a diagnostic on stderr and a non-zero exit status.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use subset_harness::prelude::*;

#[derive(Debug, Parser)]
#[command(name = "compare", version, about = "Compare subset-sum solver executables")]
struct Args {
    /// Directory containing the solver executables.
    #[arg(long, default_value = "build/bin")]
    executables_dir: PathBuf,

    /// Directory containing the problem-instance files.
    #[arg(long, default_value = "sets")]
    sets_dir: PathBuf,

    /// Instance file name within the sets directory.
    #[arg(long, default_value = "small_test_set")]
    set_name: String,

    /// The subset-sum target value.
    #[arg(long, default_value_t = 2500)]
    target: i64,

    /// Where to write the HTML report.
    #[arg(long, default_value = "comparison.html")]
    output: PathBuf,

    /// Maximum tabu-list size for the bounded tabu-search run.
    #[arg(long, default_value_t = 50)]
    tabu_size: u32,
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .try_init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("comparison aborted: {err}");
            if let Error::NonZeroExit { program, args, status, stderr, .. } = &err {
                eprintln!("  program: {}", program.display());
                eprintln!("  args:    {args:?}");
                eprintln!("  status:  {status}");
                if !stderr.is_empty() {
                    eprintln!("  stderr:  {stderr}");
                }
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = HarnessConfig {
        executables_dir: args.executables_dir.clone(),
        sets_dir: args.sets_dir.clone(),
        set_name: args.set_name.clone(),
        target: args.target,
    };
    let instance = config.instance_path();
    let target = config.target;

    // The two GA sweeps, 12 tuples each.
    let ga_fitness_threshold = run_sweep(
        &SweepDefinition::standard(GaVariant::Sequential, Termination::FitnessThreshold),
        &config,
    )?;
    let ga_max_generations = run_sweep(
        &SweepDefinition::standard(GaVariant::Sequential, Termination::MaxGenerations),
        &config,
    )?;

    // Best-configuration runs per family. "Best" is the documented constant
    // table, not a search over the sweep results.
    let run_one = |algorithm: Algorithm| -> Result<RunResult> {
        tracing::info!(algorithm = algorithm.name(), "running");
        run_spec(&AlgorithmRunSpec::new(algorithm, instance.clone(), target), &config)
    };

    let ga_best = run_one(Algorithm::Genetic(BEST_GA_CONFIG))?;
    let ga_parallel_best = run_one(Algorithm::ParallelGenetic(BEST_GA_CONFIG))?;
    let full_search = run_one(Algorithm::FullSearch)?;
    let hill_climbing = run_one(Algorithm::HillClimbing)?;
    let annealing_linear = run_one(Algorithm::SimulatedAnnealing(CoolingSchedule::Linear))?;
    let annealing_logarithmic =
        run_one(Algorithm::SimulatedAnnealing(CoolingSchedule::Logarithmic))?;
    let tabu_bounded = run_one(Algorithm::TabuSearch {
        max_tabu_size: Some(args.tabu_size),
    })?;
    let tabu_best = run_one(Algorithm::TabuSearch {
        max_tabu_size: BEST_TABU_MAX_SIZE,
    })?;

    let mut annealing = ComparisonSet::new();
    annealing.insert("Simulated Annealing (Linear Cooling)", annealing_linear.clone());
    annealing.insert(
        "Simulated Annealing (Logarithmic Cooling)",
        annealing_logarithmic.clone(),
    );

    let mut tabu = ComparisonSet::new();
    tabu.insert("Tabu Search (Max Tabu)", tabu_bounded);
    tabu.insert("Tabu Search (Unlimited Tabu)", tabu_best.clone());

    let mut comparison = ComparisonSet::new();
    comparison.insert("full_search", full_search.clone());
    comparison.insert("hill_climbing", hill_climbing.clone());
    comparison.insert("simulated_annealing_linear", annealing_linear.clone());
    comparison.insert("simulated_annealing_logarithmic", annealing_logarithmic.clone());
    comparison.insert("tabu_best", tabu_best.clone());
    comparison.insert("ga_best", ga_best.clone());

    let execution_times = vec![
        ("Full Search".to_string(), full_search.time_ms),
        ("Hill Climbing".to_string(), hill_climbing.time_ms),
        ("Simulated Annealing (Linear)".to_string(), annealing_linear.time_ms),
        (
            "Simulated Annealing (Logarithmic)".to_string(),
            annealing_logarithmic.time_ms,
        ),
        ("Tabu Search (Best)".to_string(), tabu_best.time_ms),
        ("Genetic Algorithm (Best)".to_string(), ga_best.time_ms),
        (
            "Parallel Genetic Algorithm (Best)".to_string(),
            ga_parallel_best.time_ms,
        ),
    ];

    let inputs = ReportInputs {
        ga_fitness_threshold,
        ga_max_generations,
        annealing,
        tabu,
        comparison,
        execution_times,
    };
    generate_html_report(&inputs, &args.output)?;
    tracing::info!(output = %args.output.display(), "report written");
    Ok(())
}

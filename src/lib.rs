#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Experiment-orchestration harness for comparing subset-sum solvers.
//!
//! The solvers — full search, hill climbing, simulated annealing, tabu
//! search, and two genetic-algorithm variants — are pre-built executables;
//! this crate contains no optimization logic of its own. It generates
//! parameter sweeps, invokes each solver one process at a time, decodes the
//! JSON result payload from stdout, aggregates the runs, and renders a
//! self-contained Plotly HTML report.
//!
//! # Getting Started
//!
//! ```no_run
//! use subset_harness::prelude::*;
//!
//! let config = HarnessConfig::default();
//! let sweep = SweepDefinition::standard(GaVariant::Sequential, Termination::FitnessThreshold);
//! let results = run_sweep(&sweep, &config)?;
//!
//! let inputs = ReportInputs {
//!     ga_fitness_threshold: results,
//!     ..ReportInputs::default()
//! };
//! generate_html_report(&inputs, "comparison.html")?;
//! # Ok::<_, subset_harness::Error>(())
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`Algorithm`] | The closed set of solver configurations and their positional argument schemas. |
//! | [`RunResult`] | The decoded JSON payload of one solver run. |
//! | [`SweepDefinition`] | An ordered GA parameter grid sharing one termination policy. |
//! | [`AnnotatedResult`] | A run result tagged with the sweep tuple that produced it. |
//! | [`ComparisonSet`] | Insertion-ordered display-name → result mapping for the cross-algorithm charts. |
//!
//! # Failure model
//!
//! Invocation and decode failures are fatal to the comparison: there is no
//! retry (a retried stochastic solver could produce a different result and
//! corrupt the sweep's reproducibility) and no partial-results mode.
//! Arithmetic inconsistencies inside an otherwise well-formed payload are
//! logged as warnings and do not abort.

pub mod algorithm;
pub mod config;
mod error;
pub mod invoke;
pub mod report;
pub mod run;
pub mod sweep;
pub mod visualization;

pub use algorithm::{
    Algorithm, AlgorithmRunSpec, CoolingSchedule, Crossover, GaConfig, Mutation, Termination,
};
pub use config::HarnessConfig;
pub use error::{Error, Result};
pub use report::{ComparisonSet, LineWeight, BEST_GA_CONFIG, BEST_TABU_MAX_SIZE};
pub use run::RunResult;
pub use sweep::{run_spec, run_sweep, AnnotatedResult, GaAxes, GaVariant, SweepDefinition};
pub use visualization::{generate_html_report, ReportInputs};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use subset_harness::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algorithm::{
        Algorithm, AlgorithmRunSpec, CoolingSchedule, Crossover, GaConfig, Mutation, Termination,
    };
    pub use crate::config::HarnessConfig;
    pub use crate::error::{Error, Result};
    pub use crate::report::{
        group_by_line_weight, ComparisonSet, LineWeight, BEST_GA_CONFIG, BEST_TABU_MAX_SIZE,
    };
    pub use crate::run::RunResult;
    pub use crate::sweep::{run_spec, run_sweep, AnnotatedResult, GaAxes, GaVariant, SweepDefinition};
    pub use crate::visualization::{generate_html_report, ReportInputs};
}

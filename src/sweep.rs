//! Parameter-sweep generation and execution.
//!
//! A sweep is the full Cartesian product of the genetic-algorithm parameter
//! axes for one fixed termination policy, executed in a fixed nested order:
//! population count varies slowest, then crossover, then mutation. Nothing
//! downstream depends on tuple position functionally, but chart legends and
//! line styling are reproducible only if the run order is stable, so the
//! generator is fully deterministic.

use crate::algorithm::{Algorithm, AlgorithmRunSpec, Crossover, GaConfig, Mutation, Termination};
use crate::config::HarnessConfig;
use crate::error::Result;
use crate::invoke::invoke;
use crate::run::RunResult;

/// Whether a sweep drives the sequential or the parallel GA executable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GaVariant {
    /// `subset_sum_genetic_algorithm`
    Sequential,
    /// `subset_sum_genetic_algorithm_parallel`
    Parallel,
}

/// Explicit enumerations of the swept genetic-algorithm axes.
///
/// [`GaAxes::standard`] is the grid the comparison uses: populations
/// {100, 200, 300} x both crossovers x both mutations, i.e. 12 tuples per
/// termination policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GaAxes {
    /// Population sizes, outermost axis.
    pub population_counts: Vec<u32>,
    /// Crossover strategies, middle axis.
    pub crossovers: Vec<Crossover>,
    /// Mutation strategies, innermost axis.
    pub mutations: Vec<Mutation>,
}

impl GaAxes {
    /// The literal grid used by the genetic-algorithm sweeps.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            population_counts: vec![100, 200, 300],
            crossovers: vec![Crossover::SinglePoint, Crossover::TwoPoint],
            mutations: vec![Mutation::SingleBitFlip, Mutation::ProbableBitFlip],
        }
    }

    /// Expands the axes into the ordered tuple sequence for one termination
    /// policy. Left-to-right nested order, outer axis slowest; no randomness.
    #[must_use]
    pub fn tuples(&self, termination: Termination) -> Vec<GaConfig> {
        let mut tuples =
            Vec::with_capacity(self.population_counts.len() * self.crossovers.len() * self.mutations.len());
        for &population_count in &self.population_counts {
            for &crossover in &self.crossovers {
                for &mutation in &self.mutations {
                    tuples.push(GaConfig {
                        population_count,
                        crossover,
                        mutation,
                        termination,
                    });
                }
            }
        }
        tuples
    }
}

/// An ordered sequence of parameter tuples sharing one GA variant and one
/// termination policy. Constructed once, consumed read-only by [`run_sweep`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SweepDefinition {
    /// Which GA executable the sweep drives.
    pub variant: GaVariant,
    /// The stopping rule shared by every tuple.
    pub termination: Termination,
    /// The tuples, in generation order.
    pub tuples: Vec<GaConfig>,
}

impl SweepDefinition {
    /// A sweep over [`GaAxes::standard`] for the given variant and policy.
    #[must_use]
    pub fn standard(variant: GaVariant, termination: Termination) -> Self {
        Self {
            variant,
            termination,
            tuples: GaAxes::standard().tuples(termination),
        }
    }
}

/// A decoded run together with the parameter tuple that produced it.
///
/// Created by [`run_sweep`] immediately after decode and never mutated;
/// the params feed chart legends and line-weight styling.
#[derive(Clone, Debug, PartialEq)]
pub struct AnnotatedResult {
    /// The originating sweep parameters.
    pub params: GaConfig,
    /// The decoded payload.
    pub result: RunResult,
}

/// Runs every tuple of a sweep, in order, one child process at a time.
///
/// Each tuple is resolved to an executable via `config`, invoked against the
/// configured instance and target, decoded, consistency-checked (warn-only),
/// and wrapped with its parameters. The returned sequence has exactly one
/// element per tuple, in generation order.
///
/// # Errors
///
/// Fail-fast: the first spawn, exit, or decode failure aborts the whole
/// sweep and propagates — partial sweeps are not a supported state, because
/// aggregation assumes every declared tuple produced a result.
pub fn run_sweep(sweep: &SweepDefinition, config: &HarnessConfig) -> Result<Vec<AnnotatedResult>> {
    let instance = config.instance_path();
    let mut results = Vec::with_capacity(sweep.tuples.len());

    tracing::info!(
        variant = ?sweep.variant,
        termination = sweep.termination.as_str(),
        tuples = sweep.tuples.len(),
        "running sweep"
    );

    for (index, &params) in sweep.tuples.iter().enumerate() {
        let algorithm = match sweep.variant {
            GaVariant::Sequential => Algorithm::Genetic(params),
            GaVariant::Parallel => Algorithm::ParallelGenetic(params),
        };
        let spec = AlgorithmRunSpec::new(algorithm, instance.clone(), config.target);
        tracing::info!(index, %params, "sweep step");

        let result = run_spec(&spec, config)?;
        results.push(AnnotatedResult { params, result });
    }

    Ok(results)
}

/// Invokes and decodes one fully specified run.
///
/// Shared by the sweep runner and the single best-configuration runs of the
/// top-level driver.
///
/// # Errors
///
/// Propagates any spawn, exit, or decode failure unchanged.
pub fn run_spec(spec: &AlgorithmRunSpec, config: &HarnessConfig) -> Result<RunResult> {
    let program = config.executable_path(&spec.algorithm);
    let raw = invoke(&program, &spec.args())?;
    let result = RunResult::decode(&raw, spec.algorithm.name())?.warn_on_inconsistency();
    Ok(result)
}

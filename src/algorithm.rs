//! The closed set of solver configurations the harness can invoke.
//!
//! Each solver is a pre-built executable selected by name. Modelling the
//! solvers as an enum (rather than open-ended string concatenation) means a
//! configuration with a schema mismatch cannot be constructed at all: the
//! crossover, mutation, termination, and cooling vocabularies are their own
//! types, and [`Algorithm::args`] assembles the positional argument list in
//! the exact order each executable expects.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Cooling schedule accepted by the simulated-annealing solver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoolingSchedule {
    /// Temperature decreases linearly per iteration.
    Linear,
    /// Temperature decreases logarithmically per iteration.
    Logarithmic,
}

impl CoolingSchedule {
    /// The wire name passed as a positional argument.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Logarithmic => "logarithmic",
        }
    }
}

/// Crossover strategy accepted by the genetic-algorithm solvers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Crossover {
    /// One cut point per recombination.
    SinglePoint,
    /// Two cut points per recombination.
    TwoPoint,
}

impl Crossover {
    /// The wire name passed as a positional argument.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SinglePoint => "single_point",
            Self::TwoPoint => "two_point",
        }
    }
}

/// Mutation strategy accepted by the genetic-algorithm solvers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mutation {
    /// Flip exactly one bit of the mask.
    SingleBitFlip,
    /// Flip each bit independently with some probability.
    ProbableBitFlip,
}

impl Mutation {
    /// The wire name passed as a positional argument.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SingleBitFlip => "single_bit_flip",
            Self::ProbableBitFlip => "probable_bit_flip",
        }
    }
}

/// Stopping rule accepted by the genetic-algorithm solvers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    /// Stop once the best fitness crosses a threshold.
    FitnessThreshold,
    /// Stop after a fixed number of generations.
    MaxGenerations,
}

impl Termination {
    /// The wire name passed as a positional argument.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FitnessThreshold => "fitness_threshold",
            Self::MaxGenerations => "max_generations",
        }
    }
}

/// One genetic-algorithm parameter combination from a sweep grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GaConfig {
    /// Population size per generation.
    pub population_count: u32,
    /// Recombination strategy.
    pub crossover: Crossover,
    /// Mutation strategy.
    pub mutation: Mutation,
    /// Stopping rule.
    pub termination: Termination,
}

impl core::fmt::Display for GaConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "GA {} {} {} {}",
            self.population_count,
            self.crossover.as_str(),
            self.mutation.as_str(),
            self.termination.as_str()
        )
    }
}

/// A solver family together with its family-specific parameters.
///
/// The variants mirror the executables shipped alongside the harness; the
/// mapping from variant to executable file name is [`Algorithm::executable_stem`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    /// Exhaustive enumeration of all subsets.
    FullSearch,
    /// Greedy single-bit-flip ascent.
    HillClimbing,
    /// Simulated annealing with a configurable cooling schedule.
    SimulatedAnnealing(CoolingSchedule),
    /// Tabu search; `max_tabu_size: None` means an unlimited tabu list.
    TabuSearch {
        /// Upper bound on the tabu list length, `None` for unlimited.
        max_tabu_size: Option<u32>,
    },
    /// Sequential genetic algorithm.
    Genetic(GaConfig),
    /// Multi-threaded genetic algorithm; invoked and awaited exactly like
    /// the sequential one, its internal parallelism is opaque here.
    ParallelGenetic(GaConfig),
}

impl Algorithm {
    /// File-name stem of the executable implementing this solver.
    #[must_use]
    pub fn executable_stem(&self) -> &'static str {
        match self {
            Self::FullSearch => "subset_sum_full_search",
            Self::HillClimbing => "subset_sum_hill_climbing",
            Self::SimulatedAnnealing(_) => "subset_sum_sim_annealing",
            Self::TabuSearch { .. } => "subset_sum_tabu_search",
            Self::Genetic(_) => "subset_sum_genetic_algorithm",
            Self::ParallelGenetic(_) => "subset_sum_genetic_algorithm_parallel",
        }
    }

    /// Human-readable family name, used in logs and error reports.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::FullSearch => "full search",
            Self::HillClimbing => "hill climbing",
            Self::SimulatedAnnealing(_) => "simulated annealing",
            Self::TabuSearch { .. } => "tabu search",
            Self::Genetic(_) => "genetic algorithm",
            Self::ParallelGenetic(_) => "parallel genetic algorithm",
        }
    }

    /// Builds the full positional argument list for one invocation.
    ///
    /// Every solver takes the instance file path and the target first; the
    /// family-specific arguments follow in the order the executable expects.
    #[must_use]
    pub fn args(&self, instance: &Path, target: i64) -> Vec<String> {
        let mut args = vec![instance.display().to_string(), target.to_string()];
        match self {
            Self::FullSearch | Self::HillClimbing => {}
            Self::SimulatedAnnealing(cooling) => {
                args.push(cooling.as_str().to_string());
            }
            Self::TabuSearch { max_tabu_size } => {
                // Omitting the argument entirely means "unlimited".
                if let Some(size) = max_tabu_size {
                    args.push(size.to_string());
                }
            }
            Self::Genetic(config) | Self::ParallelGenetic(config) => {
                args.push(config.population_count.to_string());
                args.push(config.crossover.as_str().to_string());
                args.push(config.mutation.as_str().to_string());
                args.push(config.termination.as_str().to_string());
            }
        }
        args
    }
}

/// One fully specified invocation: a solver, a problem instance, a target.
///
/// Immutable once constructed; [`AlgorithmRunSpec::args`] and the resolver in
/// [`HarnessConfig`](crate::config::HarnessConfig) turn it into a spawnable
/// command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlgorithmRunSpec {
    /// The solver to invoke.
    pub algorithm: Algorithm,
    /// Path of the opaque problem-instance file.
    pub instance: PathBuf,
    /// The subset-sum target value.
    pub target: i64,
}

impl AlgorithmRunSpec {
    /// Creates a run spec for one invocation.
    #[must_use]
    pub fn new(algorithm: Algorithm, instance: impl Into<PathBuf>, target: i64) -> Self {
        Self {
            algorithm,
            instance: instance.into(),
            target,
        }
    }

    /// The full positional argument list for this invocation.
    #[must_use]
    pub fn args(&self) -> Vec<String> {
        self.algorithm.args(&self.instance, self.target)
    }
}

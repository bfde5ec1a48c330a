//! Aggregation of finished runs into chart-ready shapes.
//!
//! Nothing here searches for a winner: the "best" configurations are the
//! empirically-determined constants below, kept as literals so the
//! comparison semantics cannot drift silently (see `BEST_GA_CONFIG`).

use crate::algorithm::{Crossover, GaConfig, Mutation, Termination};
use crate::run::RunResult;
use crate::sweep::AnnotatedResult;

/// The empirically best genetic-algorithm configuration.
///
/// A deliberate constant, not computed from collected results: population
/// 300, two-point crossover, single-bit-flip mutation, fitness-threshold
/// termination. Used for both the sequential and the parallel GA's
/// best-configuration runs.
pub const BEST_GA_CONFIG: GaConfig = GaConfig {
    population_count: 300,
    crossover: Crossover::TwoPoint,
    mutation: Mutation::SingleBitFlip,
    termination: Termination::FitnessThreshold,
};

/// The empirically best tabu-search setting: an unlimited tabu list,
/// expressed as the absent optional argument.
pub const BEST_TABU_MAX_SIZE: Option<u32> = None;

/// Presentation weight of a sweep line, keyed to population size.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LineWeight {
    /// Populations below 200.
    Light,
    /// Populations of at least 200.
    Medium,
    /// Populations of at least 300.
    Heavy,
}

impl LineWeight {
    /// Classifies a population count; boundaries are inclusive
    /// (exactly 200 is `Medium`, exactly 300 is `Heavy`).
    #[must_use]
    pub fn for_population(population_count: u32) -> Self {
        if population_count >= 300 {
            Self::Heavy
        } else if population_count >= 200 {
            Self::Medium
        } else {
            Self::Light
        }
    }

    /// The line width, in pixels, used when plotting.
    #[must_use]
    pub fn width_px(self) -> u32 {
        match self {
            Self::Light => 1,
            Self::Medium => 2,
            Self::Heavy => 3,
        }
    }
}

/// Groups annotated sweep results by their presentation weight, preserving
/// sweep order within each group.
#[must_use]
pub fn group_by_line_weight(
    results: &[AnnotatedResult],
) -> Vec<(LineWeight, Vec<&AnnotatedResult>)> {
    let mut groups: Vec<(LineWeight, Vec<&AnnotatedResult>)> = Vec::new();
    for result in results {
        let weight = LineWeight::for_population(result.params.population_count);
        match groups.iter_mut().find(|(w, _)| *w == weight) {
            Some((_, members)) => members.push(result),
            None => groups.push((weight, vec![result])),
        }
    }
    groups
}

/// An insertion-ordered mapping of display name to run result, consumed by
/// the cross-algorithm charts. Assembled after all runs complete; read-only
/// thereafter.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComparisonSet {
    entries: Vec<(String, RunResult)>,
}

impl ComparisonSet {
    /// An empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one named result; names are expected to be unique, order is
    /// preserved for the chart legend.
    pub fn insert(&mut self, name: impl Into<String>, result: RunResult) {
        self.entries.push((name.into(), result));
    }

    /// The entries, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[(String, RunResult)] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The execution-time scalar per entry, in insertion order — the input
    /// of the timing bar chart.
    #[must_use]
    pub fn execution_times(&self) -> Vec<(&str, f64)> {
        self.entries
            .iter()
            .map(|(name, result)| (name.as_str(), result.time_ms))
            .collect()
    }
}

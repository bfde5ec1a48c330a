//! The decoded result payload of one solver run.
//!
//! Every solver prints exactly one JSON document to stdout:
//!
//! ```json
//! {
//!   "algorithm": "hill_climbing",
//!   "time_ms": 123.456,
//!   "iterations": 100,
//!   "best_subset": [1, 2, 3],
//!   "final_value": 42,
//!   "target": 50,
//!   "loss": 8,
//!   "fitness_history": [40.0, 41.0, 42.0]
//! }
//! ```
//!
//! `fitness_history` is present only for iterative solvers (genetic
//! algorithm, simulated annealing, tabu search). Decoding validates
//! structure — required keys present, values of the right kind — but trusts
//! the producing process's arithmetic; [`RunResult::consistency_warnings`]
//! re-checks the arithmetic separately and reports violations without
//! failing the run.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The decoded payload from one solver invocation. Immutable after decode.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// Solver-reported algorithm name.
    pub algorithm: String,
    /// Wall-clock execution time in milliseconds.
    pub time_ms: f64,
    /// Number of iterations (or generations) performed.
    pub iterations: u64,
    /// The selected subset elements.
    pub best_subset: Vec<i64>,
    /// Sum of `best_subset`, as reported by the solver.
    pub final_value: i64,
    /// The target value the solver was given.
    pub target: i64,
    /// `|target - final_value|`, as reported by the solver.
    pub loss: i64,
    /// Best fitness per iteration; absent for one-shot solvers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fitness_history: Option<Vec<f64>>,
}

impl RunResult {
    /// Decodes one solver's captured stdout.
    ///
    /// `algorithm` is only used to label the error; the payload's own
    /// `algorithm` field is taken as-is.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the text is not a well-formed payload or
    /// a required field is absent or of the wrong kind, and
    /// [`Error::InvalidField`] for structurally invalid values (negative
    /// `time_ms`, empty `fitness_history`).
    pub fn decode(raw: &str, algorithm: &str) -> Result<Self> {
        let result: Self = serde_json::from_str(raw).map_err(|source| Error::Decode {
            algorithm: algorithm.to_string(),
            source,
        })?;

        if result.time_ms.is_nan() || result.time_ms < 0.0 {
            return Err(Error::InvalidField {
                field: "time_ms",
                reason: format!("must be a non-negative number, got {}", result.time_ms),
            });
        }
        if matches!(result.fitness_history.as_deref(), Some([])) {
            return Err(Error::InvalidField {
                field: "fitness_history",
                reason: "present but empty".to_string(),
            });
        }

        Ok(result)
    }

    /// Re-checks the arithmetic the solver reported.
    ///
    /// Returns one message per violated invariant (`loss` vs
    /// `|target - final_value|`, `final_value` vs `sum(best_subset)`).
    /// Violations are data-quality findings, not failures: callers log them
    /// via [`warn_on_inconsistency`](RunResult::warn_on_inconsistency) and
    /// keep going.
    #[must_use]
    pub fn consistency_warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        let expected_loss = (self.target - self.final_value).abs();
        if self.loss != expected_loss {
            warnings.push(format!(
                "loss {} != |target - final_value| = {}",
                self.loss, expected_loss
            ));
        }

        let subset_sum: i64 = self.best_subset.iter().sum();
        if self.final_value != subset_sum {
            warnings.push(format!(
                "final_value {} != sum(best_subset) = {}",
                self.final_value, subset_sum
            ));
        }

        warnings
    }

    /// Logs each consistency violation at `warn` level and returns `self`
    /// unchanged, so it chains after [`RunResult::decode`].
    #[must_use]
    pub fn warn_on_inconsistency(self) -> Self {
        for warning in self.consistency_warnings() {
            tracing::warn!(algorithm = %self.algorithm, "inconsistent payload: {warning}");
        }
        self
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    const STUB: &str = r#"{"algorithm":"stub","time_ms":1.0,"iterations":1,"best_subset":[1,2],"final_value":3,"target":3,"loss":0}"#;

    #[test]
    fn decodes_minimal_payload() {
        let result = RunResult::decode(STUB, "stub").unwrap();
        assert_eq!(result.algorithm, "stub");
        assert_eq!(result.time_ms, 1.0);
        assert_eq!(result.iterations, 1);
        assert_eq!(result.best_subset, vec![1, 2]);
        assert_eq!(result.final_value, 3);
        assert_eq!(result.target, 3);
        assert_eq!(result.loss, 0);
        assert!(result.fitness_history.is_none());
    }

    #[test]
    fn missing_required_field_is_a_decode_error() {
        let raw = r#"{"algorithm":"stub","iterations":1,"best_subset":[],"final_value":0,"target":0,"loss":0}"#;
        let err = RunResult::decode(raw, "stub").unwrap_err();
        assert!(matches!(err, Error::Decode { .. }), "got {err:?}");
    }

    #[test]
    fn mistyped_field_is_a_decode_error() {
        let raw = STUB.replace("\"time_ms\":1.0", "\"time_ms\":\"fast\"");
        let err = RunResult::decode(&raw, "stub").unwrap_err();
        assert!(matches!(err, Error::Decode { .. }), "got {err:?}");
    }

    #[test]
    fn negative_time_is_rejected() {
        let raw = STUB.replace("\"time_ms\":1.0", "\"time_ms\":-0.5");
        let err = RunResult::decode(&raw, "stub").unwrap_err();
        assert!(matches!(err, Error::InvalidField { field: "time_ms", .. }));
    }

    #[test]
    fn empty_fitness_history_is_rejected() {
        let raw = STUB.replace(",\"loss\":0", ",\"loss\":0,\"fitness_history\":[]");
        let err = RunResult::decode(&raw, "stub").unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidField {
                field: "fitness_history",
                ..
            }
        ));
    }

    #[test]
    fn consistent_payload_yields_no_warnings() {
        let result = RunResult::decode(STUB, "stub").unwrap();
        assert!(result.consistency_warnings().is_empty());
    }

    #[test]
    fn loss_mismatch_is_a_warning_not_an_error() {
        let raw = STUB.replace("\"loss\":0", "\"loss\":7");
        let result = RunResult::decode(&raw, "stub").unwrap();
        let warnings = result.consistency_warnings();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("loss 7"), "got {warnings:?}");
    }

    #[test]
    fn subset_sum_mismatch_is_a_warning() {
        let raw = STUB.replace("\"best_subset\":[1,2]", "\"best_subset\":[1,1]");
        let result = RunResult::decode(&raw, "stub").unwrap();
        let warnings = result.consistency_warnings();
        // final_value no longer matches the subset, and the loss stays
        // consistent with final_value, so exactly one finding.
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("sum(best_subset)"), "got {warnings:?}");
    }
}

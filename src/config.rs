//! Harness configuration: where the solvers and problem instances live.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::algorithm::Algorithm;

/// Locations and the shared target value for a comparison run.
///
/// The defaults mirror the layout the solver build produces: executables
/// under `build/bin`, instance files under `sets`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Directory containing the solver executables.
    pub executables_dir: PathBuf,
    /// Directory containing the problem-instance files.
    pub sets_dir: PathBuf,
    /// Instance file name within `sets_dir`.
    pub set_name: String,
    /// The subset-sum target shared by every invocation.
    pub target: i64,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            executables_dir: PathBuf::from("build/bin"),
            sets_dir: PathBuf::from("sets"),
            set_name: "small_test_set".to_string(),
            target: 2500,
        }
    }
}

impl HarnessConfig {
    /// Resolves a solver to its executable path:
    /// `{executables_dir}/{stem}{EXE_SUFFIX}`.
    #[must_use]
    pub fn executable_path(&self, algorithm: &Algorithm) -> PathBuf {
        let file = format!(
            "{}{}",
            algorithm.executable_stem(),
            std::env::consts::EXE_SUFFIX
        );
        self.executables_dir.join(file)
    }

    /// Path of the configured problem-instance file.
    #[must_use]
    pub fn instance_path(&self) -> PathBuf {
        self.sets_dir.join(&self.set_name)
    }
}

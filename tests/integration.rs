//! End-to-end tests driving real child processes via stub solver scripts.
//!
//! Each stub is a tiny shell script installed under a temp directory that
//! stands in for the executables directory, so the full
//! resolve → spawn → capture → decode → annotate pipeline is exercised.

#![cfg(unix)]

use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use subset_harness::prelude::*;

const STUB_PAYLOAD: &str = r#"{"algorithm":"stub","time_ms":1.0,"iterations":1,"best_subset":[1,2],"final_value":3,"target":3,"loss":0}"#;

/// Installs an executable shell script named like the GA solver.
fn install_stub(dir: &Path, name: &str, body: &str) {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "#!/bin/sh").unwrap();
    file.write_all(body.as_bytes()).unwrap();
    drop(file);
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
}

fn config_for(dir: &Path) -> HarnessConfig {
    HarnessConfig {
        executables_dir: dir.to_path_buf(),
        sets_dir: "sets".into(),
        set_name: "small_test_set".into(),
        target: 3,
    }
}

#[test]
fn stub_payload_round_trips_through_run_spec() {
    let dir = tempfile::tempdir().unwrap();
    install_stub(
        dir.path(),
        "subset_sum_full_search",
        &format!("echo '{STUB_PAYLOAD}'\n"),
    );

    let config = config_for(dir.path());
    let spec = AlgorithmRunSpec::new(Algorithm::FullSearch, config.instance_path(), config.target);
    let result = run_spec(&spec, &config).unwrap();

    assert_eq!(result.algorithm, "stub");
    assert!((result.time_ms - 1.0).abs() < f64::EPSILON);
    assert_eq!(result.iterations, 1);
    assert_eq!(result.best_subset, vec![1, 2]);
    assert_eq!(result.final_value, 3);
    assert_eq!(result.target, 3);
    assert_eq!(result.loss, 0);
    assert!(result.fitness_history.is_none());
    assert!(result.consistency_warnings().is_empty());
}

#[test]
fn sweep_annotates_every_tuple_in_order() {
    let dir = tempfile::tempdir().unwrap();
    // Echo the population argument back as the iteration count so each
    // tuple's result is distinguishable.
    install_stub(
        dir.path(),
        "subset_sum_genetic_algorithm",
        "printf '{\"algorithm\":\"ga\",\"time_ms\":1.0,\"iterations\":%s,\"best_subset\":[3],\"final_value\":3,\"target\":3,\"loss\":0,\"fitness_history\":[1.0,2.0,3.0]}' \"$3\"\n",
    );

    let config = config_for(dir.path());
    let sweep = SweepDefinition::standard(GaVariant::Sequential, Termination::FitnessThreshold);
    let results = run_sweep(&sweep, &config).unwrap();

    assert_eq!(results.len(), 12);
    for (annotated, tuple) in results.iter().zip(&sweep.tuples) {
        assert_eq!(annotated.params, *tuple);
        assert_eq!(annotated.result.iterations, u64::from(tuple.population_count));
        assert_eq!(
            annotated.result.fitness_history.as_deref(),
            Some(&[1.0, 2.0, 3.0][..])
        );
    }
}

#[test]
fn sweep_fails_fast_on_nonzero_exit() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("invocations.log");
    // Record every invocation, fail on population 300 (the 3rd of 5 tuples).
    install_stub(
        dir.path(),
        "subset_sum_genetic_algorithm",
        &format!(
            "echo \"$3\" >> '{log}'\n\
             if [ \"$3\" = \"300\" ]; then echo 'boom' >&2; exit 1; fi\n\
             echo '{STUB_PAYLOAD}'\n",
            log = log.display(),
        ),
    );

    let config = config_for(dir.path());
    let sweep = SweepDefinition {
        variant: GaVariant::Sequential,
        termination: Termination::FitnessThreshold,
        tuples: GaAxes {
            population_counts: vec![100, 200, 300, 400, 500],
            crossovers: vec![Crossover::SinglePoint],
            mutations: vec![Mutation::SingleBitFlip],
        }
        .tuples(Termination::FitnessThreshold),
    };
    assert_eq!(sweep.tuples.len(), 5);

    let err = run_sweep(&sweep, &config).unwrap_err();
    match err {
        Error::NonZeroExit { status, stderr, .. } => {
            assert_eq!(status.code(), Some(1));
            assert!(stderr.contains("boom"));
        }
        other => panic!("expected NonZeroExit, got {other:?}"),
    }

    // Tuples 4 and 5 were never invoked.
    let invoked = std::fs::read_to_string(&log).unwrap();
    let populations: Vec<&str> = invoked.lines().collect();
    assert_eq!(populations, vec!["100", "200", "300"]);
}

#[test]
fn sweep_fails_fast_on_malformed_payload() {
    let dir = tempfile::tempdir().unwrap();
    install_stub(
        dir.path(),
        "subset_sum_genetic_algorithm",
        "echo 'not json at all'\n",
    );

    let config = config_for(dir.path());
    let sweep = SweepDefinition::standard(GaVariant::Sequential, Termination::MaxGenerations);
    let err = run_sweep(&sweep, &config).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }), "got {err:?}");
}

#[test]
fn missing_executable_aborts_with_spawn_error() {
    let dir = tempfile::tempdir().unwrap();

    let config = config_for(dir.path());
    let spec = AlgorithmRunSpec::new(Algorithm::HillClimbing, config.instance_path(), config.target);
    let err = run_spec(&spec, &config).unwrap_err();
    assert!(matches!(err, Error::Spawn { .. }), "got {err:?}");
}

#[test]
fn inconsistent_payload_is_surfaced_but_does_not_abort() {
    let dir = tempfile::tempdir().unwrap();
    // loss should be |3 - 3| = 0; the stub reports 9.
    install_stub(
        dir.path(),
        "subset_sum_tabu_search",
        "echo '{\"algorithm\":\"tabu\",\"time_ms\":2.0,\"iterations\":4,\"best_subset\":[1,2],\"final_value\":3,\"target\":3,\"loss\":9,\"fitness_history\":[0.5]}'\n",
    );

    let config = config_for(dir.path());
    let spec = AlgorithmRunSpec::new(
        Algorithm::TabuSearch { max_tabu_size: None },
        config.instance_path(),
        config.target,
    );
    let result = run_spec(&spec, &config).unwrap();
    assert_eq!(result.loss, 9);
    assert_eq!(result.consistency_warnings().len(), 1);
}

#[test]
fn stderr_diagnostics_do_not_corrupt_decode() {
    let dir = tempfile::tempdir().unwrap();
    install_stub(
        dir.path(),
        "subset_sum_sim_annealing",
        &format!("echo 'cooling schedule selected' >&2\necho '{STUB_PAYLOAD}'\n"),
    );

    let config = config_for(dir.path());
    let spec = AlgorithmRunSpec::new(
        Algorithm::SimulatedAnnealing(CoolingSchedule::Linear),
        config.instance_path(),
        config.target,
    );
    let result = run_spec(&spec, &config).unwrap();
    assert_eq!(result.algorithm, "stub");
}

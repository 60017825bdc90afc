use binbalance::config::ConfigSection;
use binbalance::{
    AppConfig, BinBalanceError, ConfigManager, EvolutionConfig, ItemSet, MutationGate,
    ReplacementPolicy,
};
use config::Environment;
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("binbalance-{}-{}.toml", name, std::process::id()))
}

fn env_source(vars: &[(&str, &str)]) -> Environment {
    Environment::with_prefix("BINBALANCE").source(Some(
        vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
    ))
}

#[test]
fn test_defaults_are_valid() {
    let config = AppConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.problem.bin_count, 10);
    assert_eq!(config.evolution.evaluation_budget, 10_000);
    assert_eq!(config.evolution.replacement, ReplacementPolicy::AcceptOnTie);
    assert_eq!(config.evolution.mutation_gate, MutationGate::WhenPositive);
    assert_eq!(EvolutionConfig::section_name(), "evolution");
}

#[test]
fn test_save_and_load_round_trip() {
    let path = temp_path("round-trip");
    let mut manager = ConfigManager::new();
    manager
        .update(|c| {
            c.problem.bin_count = 7;
            c.problem.item_set = ItemSet::Quadratic {
                count: 12,
                factor: 3.0,
            };
            c.evolution.seed = Some(99);
            c.evolution.replacement = ReplacementPolicy::StrictImprovement;
            c.experiment.mutation_rates = vec![1, 4];
        })
        .unwrap();
    manager.save_to_file(&path).unwrap();

    let mut from_toml = ConfigManager::new();
    from_toml.load_from_file(&path).unwrap();
    assert_eq!(from_toml.get(), manager.get());

    let mut layered = ConfigManager::new();
    layered
        .load_with_env(Some(&path), env_source(&[]))
        .unwrap();
    assert_eq!(layered.get(), manager.get());

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_partial_file_uses_defaults() {
    let path = temp_path("partial");
    std::fs::write(&path, "[evolution]\npopulation_size = 30\nuse_crossover = false\n").unwrap();

    let mut manager = ConfigManager::new();
    manager.load_with_env(Some(&path), env_source(&[])).unwrap();

    let config = manager.get();
    assert_eq!(config.evolution.population_size, 30);
    assert!(!config.evolution.use_crossover);
    assert_eq!(config.evolution.mutation_rate, 1);
    assert_eq!(config.problem, AppConfig::default().problem);

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_environment_overrides() {
    let mut manager = ConfigManager::new();
    manager
        .load_with_env(
            None,
            env_source(&[
                ("BINBALANCE__EVOLUTION__POPULATION_SIZE", "42"),
                ("BINBALANCE__EVOLUTION__USE_CROSSOVER", "false"),
                ("BINBALANCE__PROBLEM__BIN_COUNT", "3"),
            ]),
        )
        .unwrap();

    let config = manager.get();
    assert_eq!(config.evolution.population_size, 42);
    assert!(!config.evolution.use_crossover);
    assert_eq!(config.problem.bin_count, 3);
}

#[test]
fn test_environment_sets_sweep_budget() {
    let mut manager = ConfigManager::new();
    manager.load_with_env(None, env_source(&[])).unwrap();
    assert_eq!(manager.get().experiment.evaluation_budget, None);
    assert_eq!(manager.get().experiment.budget_or(10_000), 10_000);

    manager
        .load_with_env(
            None,
            env_source(&[("BINBALANCE__EXPERIMENT__EVALUATION_BUDGET", "250")]),
        )
        .unwrap();

    let config = manager.get();
    assert_eq!(config.experiment.evaluation_budget, Some(250));
    assert_eq!(config.experiment.budget_or(config.evolution.evaluation_budget), 250);
    assert_eq!(config.evolution.evaluation_budget, 10_000);

    let result = manager.load_with_env(
        None,
        env_source(&[("BINBALANCE__EXPERIMENT__EVALUATION_BUDGET", "0")]),
    );
    assert!(matches!(result, Err(BinBalanceError::Configuration(_))));
}

#[test]
fn test_rejects_invalid_values() {
    let path = temp_path("invalid");
    std::fs::write(&path, "[problem]\nbin_count = 0\n").unwrap();

    let mut manager = ConfigManager::new();
    let result = manager.load_from_file(&path);
    assert!(matches!(result, Err(BinBalanceError::Configuration(_))));
    assert_eq!(manager.get(), &AppConfig::default());

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_rejects_crossover_on_short_item_list() {
    let mut manager = ConfigManager::new();
    let result = manager.update(|c| {
        c.problem.item_set = ItemSet::Explicit {
            weights: vec![5.0, 5.0],
        };
    });
    assert!(matches!(result, Err(BinBalanceError::Configuration(_))));
    // A rejected update leaves the previous configuration in place.
    assert_eq!(manager.get(), &AppConfig::default());

    manager
        .update(|c| {
            c.problem.item_set = ItemSet::Explicit {
                weights: vec![5.0, 5.0],
            };
            c.evolution.use_crossover = false;
            c.experiment.crossover_modes = vec![false];
        })
        .unwrap();
}

#[test]
fn test_missing_file_is_an_error() {
    let mut manager = ConfigManager::new();
    let result = manager.load_with_env(Some(&temp_path("does-not-exist")), env_source(&[]));
    assert!(matches!(result, Err(BinBalanceError::ConfigLoad(_))));
}

#[test]
fn test_problem_config_builds_problem() {
    let config = AppConfig::default();
    let problem = config.problem.build().unwrap();
    assert_eq!(problem.bin_count(), 10);
    assert_eq!(problem.item_count(), 500);
    assert_eq!(problem.weights()[499], 1000.0);
}

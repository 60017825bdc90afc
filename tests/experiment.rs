use binbalance::engines::experiment::Combination;
use binbalance::{EvolutionConfig, ExperimentConfig, ExperimentRunner, ItemSet, Problem};

fn problem() -> Problem<f64> {
    let items = ItemSet::Linear {
        count: 20,
        factor: 2.0,
    };
    Problem::new(4, items.generate()).unwrap()
}

fn base_config() -> EvolutionConfig {
    EvolutionConfig {
        evaluation_budget: 300,
        ..EvolutionConfig::default()
    }
}

fn experiment(parallel: bool) -> ExperimentConfig {
    ExperimentConfig {
        mutation_rates: vec![0, 2],
        population_sizes: vec![5, 10],
        crossover_modes: vec![true, false],
        trials: 3,
        evaluation_budget: None,
        base_seed: Some(17),
        parallel,
    }
}

#[test]
fn test_combinations_cover_grid_in_order() {
    let runner = ExperimentRunner::new(problem(), base_config(), experiment(false)).unwrap();
    let combinations = runner.combinations();

    assert_eq!(combinations.len(), 8);
    assert_eq!(
        combinations[0],
        Combination {
            mutation_rate: 0,
            population_size: 5,
            use_crossover: true
        }
    );
    assert_eq!(
        combinations[7],
        Combination {
            mutation_rate: 2,
            population_size: 10,
            use_crossover: false
        }
    );
}

#[test]
fn test_sweep_report() {
    let runner = ExperimentRunner::new(problem(), base_config(), experiment(false)).unwrap();
    let report = runner.run().unwrap();

    assert_eq!(report.trials.len(), 24);
    assert_eq!(report.summaries.len(), 8);
    assert_eq!(report.bin_count, 4);
    assert_eq!(report.item_count, 20);
    assert_eq!(report.evaluation_budget, 300);

    for trial in &report.trials {
        assert!(trial.evaluations >= 300);
        assert!(trial.best_fitness <= trial.starting_average);
        assert!(trial.seed.is_some());
    }
    for summary in &report.summaries {
        assert_eq!(summary.trials, 3);
        assert!(summary.min_best_fitness <= summary.mean_best_fitness);
        assert!(summary.mean_best_fitness <= summary.max_best_fitness);
    }

    let best = report.best_combination().unwrap();
    assert!(report
        .summaries
        .iter()
        .all(|s| best.mean_best_fitness <= s.mean_best_fitness));
}

#[test]
fn test_parallel_matches_sequential() {
    let sequential = ExperimentRunner::new(problem(), base_config(), experiment(false))
        .unwrap()
        .run()
        .unwrap();
    let parallel = ExperimentRunner::new(problem(), base_config(), experiment(true))
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(sequential.trials, parallel.trials);
    assert_eq!(sequential.summaries, parallel.summaries);
}

#[test]
fn test_report_serializes() {
    let mut config = experiment(false);
    config.mutation_rates = vec![1];
    config.population_sizes = vec![5];
    config.crossover_modes = vec![true];
    config.trials = 1;

    let report = ExperimentRunner::new(problem(), base_config(), config)
        .unwrap()
        .run()
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert!(json["generated_at"].is_string());
    assert_eq!(json["trials"].as_array().unwrap().len(), 1);
    assert_eq!(json["summaries"][0]["combination"]["population_size"], 5);
}

#[test]
fn test_invalid_experiment_config() {
    let mut empty_axis = experiment(false);
    empty_axis.mutation_rates.clear();
    assert!(ExperimentRunner::new(problem(), base_config(), empty_axis).is_err());

    let mut no_trials = experiment(false);
    no_trials.trials = 0;
    assert!(ExperimentRunner::new(problem(), base_config(), no_trials).is_err());

    let mut zero_population = experiment(false);
    zero_population.population_sizes = vec![0, 5];
    assert!(ExperimentRunner::new(problem(), base_config(), zero_population).is_err());

    let mut zero_budget = experiment(false);
    zero_budget.evaluation_budget = Some(0);
    assert!(ExperimentRunner::new(problem(), base_config(), zero_budget).is_err());
}

#[test]
fn test_experiment_budget_overrides_evolution_budget() {
    let mut config = experiment(false);
    config.evaluation_budget = Some(120);
    let report = ExperimentRunner::new(problem(), base_config(), config)
        .unwrap()
        .run()
        .unwrap();

    assert_eq!(report.evaluation_budget, 120);
    for trial in &report.trials {
        assert!(trial.evaluations >= 120);
        assert!(trial.evaluations < 300);
    }
}

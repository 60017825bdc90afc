use anyhow::{Context, Result};
use binbalance::{
    ConfigManager, ConsoleProgressCallback, EvolutionEngine, ExperimentRunner,
};
use clap::{arg, Arg, ArgMatches, Command};
use log::info;
use serde::Serialize;
use std::path::PathBuf;

fn cli() -> Command {
    let config_arg = || {
        arg!(--config [CONFIG] "Path to a TOML config file; BINBALANCE__* env vars override it")
            .value_parser(clap::value_parser!(PathBuf))
    };
    let output_arg = || {
        arg!(--output [OUTPUT_FILE] "Write the JSON result here instead of stdout")
            .value_parser(clap::value_parser!(PathBuf))
    };

    Command::new("binbalance")
        .about("Balances weighted items across bins with a steady-state genetic algorithm")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("run")
                .about("Runs a single evolution and prints the best allocation")
                .arg(config_arg())
                .arg(output_arg())
                .arg(
                    arg!(--seed [SEED] "Overrides the configured random seed")
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(
                    Arg::new("log-every")
                        .long("log-every")
                        .value_name("STEPS")
                        .help("Log progress every N steps")
                        .default_value("500")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
        .subcommand(
            Command::new("sweep")
                .about("Runs every experiment parameter combination and prints a report")
                .arg(config_arg())
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("init-config")
                .about("Writes the default configuration as TOML")
                .arg(arg!(<PATH> "Destination file").value_parser(clap::value_parser!(PathBuf))),
        )
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = cli().get_matches();
    match matches.subcommand() {
        Some(("run", sub)) => run(sub),
        Some(("sweep", sub)) => sweep(sub),
        Some(("init-config", sub)) => init_config(sub),
        _ => unreachable!("subcommand required"),
    }
}

fn load_config(matches: &ArgMatches) -> Result<ConfigManager> {
    let mut manager = ConfigManager::new();
    manager
        .load(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))
        .context("failed to load configuration")?;
    Ok(manager)
}

fn run(matches: &ArgMatches) -> Result<()> {
    let mut manager = load_config(matches)?;
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        manager.update(|c| c.evolution.seed = Some(seed))?;
    }
    let config = manager.get();

    let problem = config.problem.build()?;
    let mut engine = EvolutionEngine::new(config.evolution.clone(), problem)?;
    let log_every = matches.get_one::<usize>("log-every").copied().unwrap_or(500);
    let outcome = engine.run(&mut ConsoleProgressCallback::new(log_every))?;

    info!(
        "Best fitness {} (starting average {:.2}, final average {:.2})",
        outcome.best.fitness, outcome.starting_average, outcome.final_average
    );
    write_output(matches, &outcome)
}

fn sweep(matches: &ArgMatches) -> Result<()> {
    let manager = load_config(matches)?;
    let config = manager.get();

    let runner = ExperimentRunner::new(
        config.problem.build()?,
        config.evolution.clone(),
        config.experiment.clone(),
    )?;
    let report = runner.run()?;

    if let Some(best) = report.best_combination() {
        info!(
            "Best combination: m = {}, p = {}, crossover = {} with mean fitness {:.2}",
            best.combination.mutation_rate,
            best.combination.population_size,
            best.combination.use_crossover,
            best.mean_best_fitness
        );
    }
    write_output(matches, &report)
}

fn init_config(matches: &ArgMatches) -> Result<()> {
    let path = matches
        .get_one::<PathBuf>("PATH")
        .context("missing destination path")?;
    ConfigManager::new().save_to_file(path)?;
    info!("Wrote default configuration to {}", path.display());
    Ok(())
}

fn write_output<T: Serialize>(matches: &ArgMatches, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    match matches.get_one::<PathBuf>("output") {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("Wrote result to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

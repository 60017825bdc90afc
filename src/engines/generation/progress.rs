use super::evolution_engine::ProgressCallback;
use log::info;

/// Logs progress through the `log` facade every `log_every` steps.
pub struct ConsoleProgressCallback {
    log_every: usize,
}

impl ConsoleProgressCallback {
    pub fn new(log_every: usize) -> Self {
        Self {
            log_every: log_every.max(1),
        }
    }
}

impl Default for ConsoleProgressCallback {
    fn default() -> Self {
        Self::new(500)
    }
}

impl ProgressCallback for ConsoleProgressCallback {
    fn on_run_start(&mut self, population_size: usize, starting_average: f64) {
        info!(
            "Initial population of {} ready. Average fitness: {:.4}",
            population_size, starting_average
        );
    }

    fn on_step_complete(&mut self, step: usize, evaluations: usize, best_fitness: f64) {
        if step % self.log_every == 0 {
            info!(
                "Step {}: {} evaluations used, best fitness {:.4}",
                step, evaluations, best_fitness
            );
        }
    }

    fn on_run_complete(&mut self, steps: usize, evaluations: usize, best_fitness: f64) {
        info!(
            "Run finished after {} steps and {} evaluations. Best fitness: {:.4}",
            steps, evaluations, best_fitness
        );
    }
}

/// Ignores every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgressCallback;

impl ProgressCallback for NoopProgressCallback {
    fn on_run_start(&mut self, _population_size: usize, _starting_average: f64) {}

    fn on_step_complete(&mut self, _step: usize, _evaluations: usize, _best_fitness: f64) {}

    fn on_run_complete(&mut self, _steps: usize, _evaluations: usize, _best_fitness: f64) {}
}

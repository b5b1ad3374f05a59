//! Pathfinder CLI
//!
//! Command-line interface for running and evaluating the grid world.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::HashMap;
use tracing_subscriber::EnvFilter;

use pathfinder::env::{EpisodeStats, Environment};
use pathfinder::grid::GridWorld;
use pathfinder::log::{ConsoleLogger, MetricLogger};
use pathfinder::policy::Policy;
use pathfinder::render::{AsciiRenderer, Renderer};

mod args;

use args::{GridArgs, PolicyKind};

#[derive(Parser)]
#[command(name = "pathfinder")]
#[command(version, about = "Pathfinder - grid-world environment for RL agents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the grid world with a terminal renderer
    Demo {
        #[command(flatten)]
        grid: GridArgs,

        /// Number of steps
        #[arg(long, default_value = "200")]
        steps: usize,

        /// Policy driving the actor
        #[arg(long, value_enum, default_value = "greedy")]
        policy: PolicyKind,

        /// Clear the terminal between frames
        #[arg(long)]
        clear: bool,
    },

    /// Run headless episodes and report scores
    Eval {
        #[command(flatten)]
        grid: GridArgs,

        /// Number of episodes
        #[arg(long, default_value = "10")]
        episodes: usize,

        /// Policy driving the actor
        #[arg(long, value_enum, default_value = "random")]
        policy: PolicyKind,
    },

    /// Print the effective configuration as JSON
    Config {
        #[command(flatten)]
        grid: GridArgs,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Demo {
            grid,
            steps,
            policy,
            clear,
        } => {
            demo(&grid, steps, policy, clear)?;
        }
        Commands::Eval {
            grid,
            episodes,
            policy,
        } => {
            eval(&grid, episodes, policy)?;
        }
        Commands::Config { grid } => {
            let config = grid.resolve()?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

fn demo(grid: &GridArgs, steps: usize, policy_kind: PolicyKind, clear: bool) -> Result<()> {
    let config = grid.resolve()?;
    tracing::info!(
        width = config.width,
        height = config.height,
        steps,
        policy = ?policy_kind,
        "Running demo"
    );

    let renderer = AsciiRenderer::stdout(config.tick_rate).with_clear_screen(clear);
    let close = renderer.close_handle();
    ctrlc::set_handler(move || close.request())
        .context("Failed to install Ctrl-C handler")?;

    let mut policy = policy_kind.build(config.seed);
    let mut env = GridWorld::with_renderer(config, renderer)?;

    let taken = run_demo(&mut env, policy.as_mut(), steps);
    tracing::info!(steps = taken, "Demo finished");

    env.close();
    Ok(())
}

/// Drive `env` for up to `steps` steps, resetting finished episodes.
/// Stops early on a close request and returns the number of steps taken.
fn run_demo<R: Renderer>(
    env: &mut GridWorld<R>,
    policy: &mut dyn Policy,
    steps: usize,
) -> usize {
    for step in 0..steps {
        let action = policy.act(&env.snapshot());
        let result = env.step(&action);

        if result.close_requested {
            tracing::info!(step, "Close requested, stopping");
            return step;
        }

        if result.done() {
            tracing::info!(
                step,
                score = result.score,
                out_of_bounds = result.terminated,
                "Episode ended, resetting"
            );
            env.reset(None);
        }
    }

    steps
}

fn eval(grid: &GridArgs, episodes: usize, policy_kind: PolicyKind) -> Result<()> {
    let config = grid.resolve()?;
    tracing::info!(episodes, policy = ?policy_kind, "Starting evaluation");

    let mut policy = policy_kind.build(config.seed);
    let mut env = EpisodeStats::new(GridWorld::new(config)?);
    let logger = ConsoleLogger::default();

    let mut total_score = 0u64;
    let mut total_length = 0u64;

    for episode in 0..episodes {
        env.reset(None);

        let result = loop {
            let action = policy.act(&env.inner().snapshot());
            let result = env.step(&action);
            if result.done() {
                break result;
            }
        };

        let mut metrics = HashMap::new();
        metrics.insert("score".to_string(), result.score as f64);
        if let Some(length) = result.info.episode_length {
            metrics.insert("length".to_string(), length as f64);
            total_length += length as u64;
        }
        if let Some(ret) = result.info.episode_return {
            metrics.insert("return".to_string(), ret as f64);
        }
        logger.log_metrics(&metrics, episode as u64);

        total_score += result.score as u64;
    }
    logger.close();

    if episodes > 0 {
        let avg_score = total_score as f64 / episodes as f64;
        let avg_length = total_length as f64 / episodes as f64;
        tracing::info!(avg_score, avg_length, "Evaluation complete");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathfinder::grid::GridConfig;
    use pathfinder::policy::GreedyPolicy;

    fn world() -> GridWorld<AsciiRenderer<Vec<u8>>> {
        let renderer = AsciiRenderer::new(Vec::new(), 0);
        GridWorld::with_renderer(GridConfig::default().with_seed(3), renderer).unwrap()
    }

    #[test]
    fn test_run_demo_takes_all_steps() {
        let mut env = world();
        assert_eq!(run_demo(&mut env, &mut GreedyPolicy, 25), 25);
        assert_eq!(env.renderer().frames(), 25);
    }

    #[test]
    fn test_run_demo_stops_on_close_request() {
        let mut env = world();
        let close = env.renderer().close_handle();
        run_demo(&mut env, &mut GreedyPolicy, 4);

        close.request();
        assert_eq!(run_demo(&mut env, &mut GreedyPolicy, 100), 0);
        assert_eq!(env.renderer().frames(), 4);
    }
}

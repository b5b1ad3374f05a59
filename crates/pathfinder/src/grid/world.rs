//! The grid world environment.

use super::{Direction, GridConfig, Position, Snapshot, CELL_SIZE, OBSERVATION_SIZE};
use crate::env::{EnvInfo, Environment, StepResult};
use crate::render::{draw_frame, NullRenderer, Renderer};
use crate::spaces::{Bounded, DynSpace, OneHot};
use crate::Result;
use ndarray::ArrayD;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Reward for reaching the target
pub const TARGET_REWARD: i32 = 10;
/// Reward on the step that ends an episode
pub const END_REWARD: i32 = -10;

/// Single-actor grid world
///
/// The actor starts in the middle of the grid heading right and moves one
/// cell per step. Reaching the target scores a point and moves the target;
/// leaving the grid or running past the step limit ends the episode.
///
/// Observation: `[actor_x, actor_y, target_x, target_y]` scaled by the grid
/// size, then the one-hot heading.
/// Action: one-hot `[up, right, down, left]`; anything else keeps the heading.
pub struct GridWorld<R: Renderer = NullRenderer> {
    config: GridConfig,
    actor: Position,
    direction: Direction,
    target: Position,
    score: u32,
    step_count: u32,
    terminated: bool,
    truncated: bool,
    rng: StdRng,
    renderer: R,
}

impl GridWorld<NullRenderer> {
    /// Create a headless grid world
    pub fn new(config: GridConfig) -> Result<Self> {
        Self::with_renderer(config, NullRenderer)
    }
}

impl<R: Renderer> GridWorld<R> {
    /// Create a grid world that presents each step to `renderer`
    pub fn with_renderer(config: GridConfig, renderer: R) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        let start = start_position(&config);

        let mut env = Self {
            config,
            actor: start,
            direction: Direction::Right,
            target: start,
            score: 0,
            step_count: 0,
            terminated: false,
            truncated: false,
            rng,
            renderer,
        };
        env.start_episode();
        Ok(env)
    }

    /// Configuration the world was built with
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Actor position; may lie outside the grid on the final step
    pub fn actor(&self) -> Position {
        self.actor
    }

    /// Target position
    pub fn target(&self) -> Position {
        self.target
    }

    /// Current heading
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Targets reached this episode
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Steps taken this episode, including close-request steps
    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    /// Get a reference to the renderer
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Get a mutable reference to the renderer
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Current state as seen by renderers
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            actor: self.actor,
            target: self.target,
            direction: self.direction,
            score: self.score,
            step_count: self.step_count,
            width: self.config.width,
            height: self.config.height,
        }
    }

    /// Whether `pos` lies outside the grid
    pub fn hits_boundary(&self, pos: Position) -> bool {
        !pos.in_bounds(self.config.width, self.config.height)
    }

    fn start_episode(&mut self) {
        self.direction = Direction::Right;
        self.actor = start_position(&self.config);
        self.score = 0;
        self.step_count = 0;
        self.terminated = false;
        self.truncated = false;
        self.place_target();
    }

    /// Uniform over lattice cells, resampled until off the actor
    fn place_target(&mut self) {
        let max_col = (self.config.width - CELL_SIZE) / CELL_SIZE;
        let max_row = (self.config.height - CELL_SIZE) / CELL_SIZE;

        loop {
            let x = self.rng.gen_range(0..=max_col) * CELL_SIZE;
            let y = self.rng.gen_range(0..=max_row) * CELL_SIZE;
            let candidate = Position::new(x, y);
            if candidate != self.actor {
                self.target = candidate;
                return;
            }
        }
    }

    fn result(&self, reward: i32, close_requested: bool) -> StepResult {
        let mut info = EnvInfo::new().with_extra("step_count", self.step_count as f32);
        if self.terminated || self.truncated {
            info = info.with_extra("score", self.score as f32);
        }

        StepResult {
            observation: self.snapshot().to_observation(),
            reward,
            terminated: self.terminated,
            truncated: self.truncated,
            score: self.score,
            close_requested,
            info,
        }
    }
}

/// Grid centre, snapped down to the cell lattice
fn start_position(config: &GridConfig) -> Position {
    Position::new(
        (config.width / 2) / CELL_SIZE * CELL_SIZE,
        (config.height / 2) / CELL_SIZE * CELL_SIZE,
    )
}

/// Only a 1-D vector of length 4 can select a direction; other shapes keep
/// the heading even when their flattened values look one-hot.
fn decode_action(action: &ArrayD<f32>) -> Option<Direction> {
    if action.ndim() != 1 || action.len() != Direction::ALL.len() {
        return None;
    }
    match action.as_slice() {
        Some(values) => Direction::from_one_hot(values),
        // Strided 1-D views
        None => Direction::from_one_hot(&action.iter().copied().collect::<Vec<_>>()),
    }
}

impl<R: Renderer> Environment for GridWorld<R> {
    fn observation_space(&self) -> DynSpace {
        DynSpace::Bounded(Bounded::new(&[OBSERVATION_SIZE], -1.0, 1.0))
    }

    fn action_space(&self) -> DynSpace {
        DynSpace::OneHot(OneHot::new(Direction::ALL.len()))
    }

    fn reset(&mut self, seed: Option<u64>) -> (ArrayD<f32>, EnvInfo) {
        if let Some(s) = seed {
            self.rng = StdRng::seed_from_u64(s);
        }
        self.start_episode();
        tracing::debug!(actor = %self.actor, target = %self.target, "Episode reset");

        (self.snapshot().to_observation(), EnvInfo::new())
    }

    fn step(&mut self, action: &ArrayD<f32>) -> StepResult {
        if self.is_done() {
            tracing::warn!("step() called on a finished episode; call reset() first");
            return self.result(0, false);
        }

        self.step_count += 1;

        // A close-request step counts toward the limit but never truncates;
        // the next normal step does.
        if self.renderer.poll_close() {
            tracing::info!(step = self.step_count, "Close requested by renderer");
            return self.result(0, true);
        }

        if let Some(direction) = decode_action(action) {
            self.direction = direction;
        }
        self.actor = self.actor.moved(self.direction);

        self.terminated = self.hits_boundary(self.actor);
        self.truncated = !self.terminated && self.step_count > self.config.step_limit;
        if self.terminated || self.truncated {
            tracing::debug!(
                actor = %self.actor,
                step = self.step_count,
                score = self.score,
                out_of_bounds = self.terminated,
                "Episode over"
            );
            return self.result(END_REWARD, false);
        }

        let reward = if self.actor == self.target {
            self.score += 1;
            self.place_target();
            tracing::debug!(score = self.score, next_target = %self.target, "Target reached");
            TARGET_REWARD
        } else {
            0
        };

        let snapshot = self.snapshot();
        self.renderer.present(&snapshot);

        self.result(reward, false)
    }

    fn render(&self) -> Option<String> {
        Some(draw_frame(&self.snapshot()))
    }

    fn close(&mut self) {
        self.renderer.close()
    }

    fn is_done(&self) -> bool {
        self.terminated || self.truncated
    }
}

//! Environment wrappers for common functionality.

use super::{EnvInfo, Environment, StepResult};
use crate::spaces::DynSpace;
use ndarray::ArrayD;

/// Wrapper that tracks episode statistics (return and length).
///
/// Adds `episode_return` and `episode_length` to info on episode completion.
/// Steps that only report a close request are not counted.
pub struct EpisodeStats<E: Environment> {
    env: E,
    episode_return: f32,
    episode_length: u32,
}

impl<E: Environment> EpisodeStats<E> {
    /// Wrap an environment with episode statistics tracking
    pub fn new(env: E) -> Self {
        Self {
            env,
            episode_return: 0.0,
            episode_length: 0,
        }
    }

    /// Get a reference to the inner environment
    pub fn inner(&self) -> &E {
        &self.env
    }

    /// Get a mutable reference to the inner environment
    pub fn inner_mut(&mut self) -> &mut E {
        &mut self.env
    }

    /// Unwrap into the inner environment
    pub fn into_inner(self) -> E {
        self.env
    }
}

impl<E: Environment> Environment for EpisodeStats<E> {
    fn observation_space(&self) -> DynSpace {
        self.env.observation_space()
    }

    fn action_space(&self) -> DynSpace {
        self.env.action_space()
    }

    fn reset(&mut self, seed: Option<u64>) -> (ArrayD<f32>, EnvInfo) {
        self.episode_return = 0.0;
        self.episode_length = 0;
        self.env.reset(seed)
    }

    fn step(&mut self, action: &ArrayD<f32>) -> StepResult {
        let mut result = self.env.step(action);
        if result.close_requested {
            return result;
        }

        self.episode_return += result.reward as f32;
        self.episode_length += 1;

        if result.done() {
            result.info = result
                .info
                .with_episode_stats(self.episode_return, self.episode_length);

            // Reset internal counters (env will be reset externally)
            self.episode_return = 0.0;
            self.episode_length = 0;
        }

        result
    }

    fn render(&self) -> Option<String> {
        self.env.render()
    }

    fn close(&mut self) {
        self.env.close()
    }

    fn is_done(&self) -> bool {
        self.env.is_done()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spaces::{Bounded, OneHot};
    use ndarray::IxDyn;

    // Pays 10 per step and terminates on the fifth
    struct SimpleEnv {
        step_count: u32,
        close_on: Option<u32>,
    }

    impl Environment for SimpleEnv {
        fn observation_space(&self) -> DynSpace {
            DynSpace::Bounded(Bounded::new(&[2], 0.0, 1.0))
        }

        fn action_space(&self) -> DynSpace {
            DynSpace::OneHot(OneHot::new(4))
        }

        fn reset(&mut self, _seed: Option<u64>) -> (ArrayD<f32>, EnvInfo) {
            self.step_count = 0;
            (ArrayD::zeros(IxDyn(&[2])), EnvInfo::new())
        }

        fn step(&mut self, _action: &ArrayD<f32>) -> StepResult {
            self.step_count += 1;
            let close_requested = self.close_on == Some(self.step_count);
            StepResult {
                observation: ArrayD::zeros(IxDyn(&[2])),
                reward: if close_requested { 0 } else { 10 },
                terminated: self.step_count >= 5,
                truncated: false,
                score: self.step_count,
                close_requested,
                info: EnvInfo::new(),
            }
        }
    }

    #[test]
    fn test_episode_stats() {
        let env = SimpleEnv {
            step_count: 0,
            close_on: None,
        };
        let mut wrapped = EpisodeStats::new(env);

        wrapped.reset(None);

        let action = ArrayD::zeros(IxDyn(&[4]));
        for _ in 0..4 {
            let result = wrapped.step(&action);
            assert!(!result.done());
            assert!(result.info.get("episode_return").is_none());
        }

        // 5th step should terminate
        let result = wrapped.step(&action);
        assert!(result.done());
        assert_eq!(result.info.get("episode_return"), Some(50.0));
        assert_eq!(result.info.get("episode_length"), Some(5.0));
    }

    #[test]
    fn test_close_request_not_counted() {
        let env = SimpleEnv {
            step_count: 0,
            close_on: Some(2),
        };
        let mut wrapped = EpisodeStats::new(env);
        wrapped.reset(None);

        let action = ArrayD::zeros(IxDyn(&[4]));
        let mut last = None;
        for _ in 0..5 {
            last = Some(wrapped.step(&action));
        }

        let result = last.unwrap();
        assert!(result.done());
        assert_eq!(result.info.get("episode_length"), Some(4.0));
        assert_eq!(result.info.get("episode_return"), Some(40.0));
    }

    #[test]
    fn test_extra_lookup() {
        let info = EnvInfo::new().with_extra("score", 3.0);
        assert_eq!(info.get("score"), Some(3.0));
        assert_eq!(info.get("missing"), None);
    }
}

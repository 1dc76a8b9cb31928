//! Deterministic, finite random source.

use std::collections::VecDeque;

use super::RandomSource;
use crate::types::RngError;

/// Replays a fixed sequence of "normal" draws, then fails.
///
/// Used to pin the idiosyncratic noise or the raw shock draws in tests and
/// scripted replays. Asking for more draws than were supplied returns
/// [`RngError::Exhausted`] on every subsequent call.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    draws: VecDeque<f64>,
    supplied: usize,
}

impl ScriptedSource {
    /// Creates a source that yields `draws` in order.
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        let draws: Vec<f64> = draws.into();
        Self {
            supplied: draws.len(),
            draws: draws.into(),
        }
    }

    /// Creates a source yielding `count` zero draws (noise-free pricing).
    pub fn zeros(count: usize) -> Self {
        Self::new(vec![0.0; count])
    }

    /// Number of draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }

    /// Total number of draws the source was created with.
    pub fn supplied(&self) -> usize {
        self.supplied
    }
}

impl RandomSource for ScriptedSource {
    fn next_normal(&mut self) -> Result<f64, RngError> {
        self.draws.pop_front().ok_or(RngError::Exhausted {
            supplied: self.supplied,
        })
    }
}

//! Sources of randomness for question generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Picks indexes for the question generator.
pub trait RandomSource {
    /// A value in `0..upper`. `upper` is never zero.
    fn below(&mut self, upper: usize) -> usize;
}

/// Adapter over any [`rand::Rng`].
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> RngSource<R> {
        RngSource { rng }
    }
}

impl RngSource<StdRng> {
    /// Reproducible stream when `seed` is set, OS entropy otherwise.
    pub fn seeded(seed: Option<u64>) -> RngSource<StdRng> {
        let rng = match seed {
            Some(seed) => {
                log::info!("Question generator seeded with {seed}");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        RngSource { rng }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn below(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }
}

/// Replays a fixed list of picks, each reduced modulo `upper`.
///
/// Once the list runs out every pick is 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    picks: VecDeque<usize>,
}

impl ScriptedSource {
    pub fn new<I: IntoIterator<Item = usize>>(picks: I) -> ScriptedSource {
        ScriptedSource {
            picks: picks.into_iter().collect(),
        }
    }
}

impl RandomSource for ScriptedSource {
    fn below(&mut self, upper: usize) -> usize {
        self.picks.pop_front().unwrap_or(0) % upper
    }
}

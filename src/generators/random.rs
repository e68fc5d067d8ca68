use std::collections::VecDeque;

use rand::{
    Rng, SeedableRng,
    rngs::StdRng,
    seq::{IndexedRandom, SliceRandom},
};

/// Uniform randomness consumed by the maze generators.
pub trait RandomSource {
    /// A uniformly random integer in `0..bound`. `bound` is always at least 1.
    fn below(&mut self, bound: usize) -> usize;

    /// A fair coin toss.
    fn flip(&mut self) -> bool;

    /// Puts `items` in uniformly random order.
    fn shuffle<T>(&mut self, items: &mut [T]);

    /// A uniformly random element, `None` if `items` is empty.
    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>;
}

impl RandomSource for StdRng {
    fn below(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }

    fn flip(&mut self) -> bool {
        self.random_bool(0.5)
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(self);
    }

    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(self)
    }
}

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Replays a fixed list of choices. Once the script runs out every draw is 0.
///
/// Values larger than a requested bound are clamped to `bound - 1`; `flip` treats any
/// non-zero value as `true`. `shuffle` is a Fisher-Yates pass drawing `below(i + 1)` for
/// each index `i` from the last down to 1, and `choose` draws one `below(len)`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    script: VecDeque<usize>,
}

impl ScriptedRandom {
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        ScriptedRandom {
            script: script.into_iter().collect(),
        }
    }

    /// Number of scripted values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn below(&mut self, bound: usize) -> usize {
        self.script
            .pop_front()
            .unwrap_or(0)
            .min(bound.saturating_sub(1))
    }

    fn flip(&mut self) -> bool {
        self.script.pop_front().unwrap_or(0) != 0
    }

    fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below(i + 1);
            items.swap(i, j);
        }
    }

    fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        items.get(self.below(items.len()))
    }
}

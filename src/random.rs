use crate::words::WordEntry;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Source of randomness for list selection and word order
pub trait RandomSource {
    /// Uniform index in `0..len`. Never called with `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
    /// Reorders the words in place
    fn shuffle(&mut self, words: &mut [WordEntry]);
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }

    fn shuffle(&mut self, words: &mut [WordEntry]) {
        (**self).shuffle(words)
    }
}

/// Thread-local RNG, fresh entropy every game
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }

    fn shuffle(&mut self, words: &mut [WordEntry]) {
        words.shuffle(&mut rand::thread_rng());
    }
}

/// Reproducible games from a fixed seed
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }

    fn shuffle(&mut self, words: &mut [WordEntry]) {
        words.shuffle(&mut self.rng);
    }
}

/// Always picks the same list and keeps the document order
#[derive(Debug, Default, Clone, Copy)]
pub struct Unshuffled {
    pub list: usize,
}

impl RandomSource for Unshuffled {
    fn pick(&mut self, len: usize) -> usize {
        self.list.min(len - 1)
    }

    fn shuffle(&mut self, _words: &mut [WordEntry]) {}
}

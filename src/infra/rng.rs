use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, SeedableRng};

use crate::engine::RandomSource;

/// Боевой RNG: равномерная перетасовка через `thread_rng`.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut thread_rng());
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Позволяет воспроизводить одни и те же раздачи при одинаковом seed.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

/// "RNG", который ничего не перемешивает: колода остаётся в стандартном порядке.
/// Раздача при этом полностью предсказуема (карты идут с конца: As, Ks, Qs, ...).
#[derive(Clone, Copy, Debug, Default)]
pub struct UnshuffledRng;

impl RandomSource for UnshuffledRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {}
}

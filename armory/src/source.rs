use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::firearm::FirearmKind;

/// Supplies the discriminants used to pick which firearm to build
pub trait DiscriminantSource {
    fn next_discriminant(&mut self) -> u8;
}

/// Uniform random choice among the known firearm kinds
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a given seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl DiscriminantSource for RandomSource {
    fn next_discriminant(&mut self) -> u8 {
        let index = self.rng.gen_range(0..FirearmKind::ALL.len());
        FirearmKind::ALL[index].discriminant()
    }
}

/// Replays a fixed list of discriminants, wrapping around at the end
///
/// An empty script yields 0, which no firearm kind uses.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    script: Vec<u8>,
    position: usize,
}

impl ScriptedSource {
    #[must_use]
    pub fn new(script: impl Into<Vec<u8>>) -> Self {
        Self {
            script: script.into(),
            position: 0,
        }
    }
}

impl DiscriminantSource for ScriptedSource {
    fn next_discriminant(&mut self) -> u8 {
        if self.script.is_empty() {
            return 0;
        }
        let discriminant = self.script[self.position % self.script.len()];
        self.position += 1;
        discriminant
    }
}

//! Spawn randomness
//!
//! A small xorshift generator owned by the game session. Keeping the state
//! local (instead of reaching for a global generator inside the spawn code)
//! means spawn sequences are reproducible from a seed, which the tests rely
//! on. The session seeds it from `macroquad::rand` at startup.

/// Fast xorshift PRNG, deterministic for a given seed.
#[derive(Debug, Clone)]
pub struct SpawnRng {
    state: u32,
}

impl SpawnRng {
    /// A zero seed would make xorshift emit zeros forever, so it is
    /// replaced with a fixed nonzero constant.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 0x9e37_79b9 } else { seed },
        }
    }

    fn next_u32(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }

    /// Uniform float in [min, max].
    pub fn range_f32(&mut self, min: f32, max: f32) -> f32 {
        let unit = self.next_u32() as f32 / u32::MAX as f32;
        min + unit * (max - min)
    }

    /// Uniform integer in [min, max], both ends included.
    pub fn range_i32(&mut self, min: i32, max: i32) -> i32 {
        let span = (max - min) as u32 + 1;
        min + (self.next_u32() % span) as i32
    }
}

// cycle.rs - Detects still lifes and short oscillators from recent fingerprints

use crate::world::World;

/// How many recent generations are remembered.
pub const HISTORY_LEN: usize = 10;

#[derive(Debug, Clone, Default)]
pub struct CycleDetector {
    history: [u64; HISTORY_LEN],
    count: usize,
}

impl CycleDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the world's current generation. Returns true if the same grid
    /// was seen within the last `HISTORY_LEN` observations.
    pub fn observe(&mut self, world: &World) -> bool {
        let hash = world.fingerprint();
        let seen = self.count.min(HISTORY_LEN);
        if self.history[..seen].contains(&hash) {
            return true;
        }
        self.history[self.count % HISTORY_LEN] = hash;
        self.count += 1;
        false
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

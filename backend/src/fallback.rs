use crate::personas::Persona;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::sync::Mutex;
use std::time::Duration;

/// Approximates provider latency so the consumer's loading states behave the
/// same in both modes. Cosmetic, not a contract.
const SIMULATED_LATENCY: Duration = Duration::from_millis(1500);

/// Fallback generation path: a uniform pick from the persona's canned pool.
/// Never fails, whatever the submitted code looks like.
pub struct FallbackRoaster {
    rng: Mutex<StdRng>,
    delay: Duration,
}

impl FallbackRoaster {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_os_rng()),
            delay: SIMULATED_LATENCY,
        }
    }

    /// Deterministic selection with no delay, for tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            delay: Duration::ZERO,
        }
    }

    pub async fn pick(&self, persona: &Persona) -> String {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let index = {
            // Lock held only for the draw, never across an await.
            let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            rng.random_range(0..persona.fallback_pool.len())
        };
        persona.fallback_pool[index].to_string()
    }
}

impl Default for FallbackRoaster {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::personas::PersonaRegistry;

    #[tokio::test]
    async fn picks_come_from_the_pool() {
        let registry = PersonaRegistry::new();
        let (_, persona) = registry.resolve("yoda");
        let fallback = FallbackRoaster::seeded(7);
        for _ in 0..20 {
            let roast = fallback.pick(&persona).await;
            assert!(persona.fallback_pool.contains(&roast.as_str()));
        }
    }

    #[tokio::test]
    async fn same_seed_gives_same_sequence() {
        let registry = PersonaRegistry::new();
        let (_, persona) = registry.resolve("pirate");
        let a = FallbackRoaster::seeded(42);
        let b = FallbackRoaster::seeded(42);
        for _ in 0..10 {
            assert_eq!(a.pick(&persona).await, b.pick(&persona).await);
        }
    }
}

//! `EngineConfig`: the one configuration surface the engine has (spec.md
//! §9 Design Note: "expose a way to inject the RNG seed for
//! reproducibility; default to a nondeterministic seed"). No network, no
//! persistence configuration exists, matching spec.md's Non-goals.

/// Configuration for a new [`crate::Engine`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineConfig {
    /// Seed for the per-step actuator shuffle. `None` seeds from entropy
    /// (nondeterministic runs); `Some(seed)` makes `step()`'s shuffle
    /// order reproducible across runs (spec.md §8, "Determinism under
    /// fixed RNG seed").
    pub seed: Option<u64>,
}

impl EngineConfig {
    /// A config with a fixed seed, for reproducible runs and tests.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}

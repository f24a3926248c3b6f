use rand::{rngs::StdRng, SeedableRng};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Random source shared by the services that sample names, codes and probabilities.
/// Lock it only around the sampling call.
pub type SharedRng = Arc<Mutex<StdRng>>;

pub fn rng_from_entropy() -> SharedRng {
    Arc::new(Mutex::new(StdRng::from_entropy()))
}

#[cfg(test)]
pub fn seeded_rng(seed: u64) -> SharedRng {
    Arc::new(Mutex::new(StdRng::seed_from_u64(seed)))
}

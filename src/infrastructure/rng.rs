//! Random engine construction
//!
//! One engine is created per run and handed to the renderer by reference.

use rand::rngs::{OsRng, StdRng};
use rand::SeedableRng;
use tracing::debug;

use crate::infrastructure::{InfraError, InfraResult};

/// Create the engine for a run.
///
/// With a seed the output is reproducible; without one the engine is seeded
/// once from the operating system's entropy source.
pub fn engine(seed: Option<u64>) -> InfraResult<StdRng> {
    match seed {
        Some(seed) => {
            debug!(seed, "seeding engine from fixed seed");
            Ok(StdRng::seed_from_u64(seed))
        }
        None => {
            debug!("seeding engine from OS entropy");
            StdRng::from_rng(OsRng).map_err(InfraError::Entropy)
        }
    }
}

//! Name lookup service.
//!
//! Resolves a name against the static table and falls back to a generated
//! record for unknown names. Lookups never fail; input validation belongs to
//! the HTTP layer.

mod fallback;
mod syllables;
mod table;

use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::Mutex;

use crate::models::NameRecord;
use table::{KnownName, FEATURED_KEY, KNOWN_NAMES};

/// Delay applied before every lookup resolves, standing in for a remote call.
pub const DEFAULT_LOOKUP_DELAY: Duration = Duration::from_millis(1000);

/// Lookup service with an injected random source.
pub struct NameLookup {
    delay: Duration,
    /// Held for the whole lookup, so concurrent submissions run one at a time.
    rng: Mutex<StdRng>,
}

impl NameLookup {
    /// Create a service seeded from OS entropy.
    pub fn new(delay: Duration) -> Self {
        Self::with_rng(delay, StdRng::from_entropy())
    }

    /// Create a service with a caller-supplied random source.
    pub fn with_rng(delay: Duration, rng: StdRng) -> Self {
        Self {
            delay,
            rng: Mutex::new(rng),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Resolve `name` to a record after the configured delay.
    ///
    /// Table hits are case-insensitive and return the stored record verbatim;
    /// misses produce a generated record that keeps `name` exactly as given.
    pub async fn lookup(&self, name: &str) -> NameRecord {
        let mut rng = self.rng.lock().await;
        tokio::time::sleep(self.delay).await;

        let key = name.to_lowercase();
        match table::find(&key) {
            Some(known) => {
                tracing::debug!("Lookup hit for {:?}", known.name);
                known.to_record()
            }
            None => {
                tracing::debug!("Lookup miss for {:?}, generating record", name);
                fallback::generate(name, &mut *rng)
            }
        }
    }

    /// Display names of the documented entries, in table order.
    pub fn known_names(&self) -> Vec<String> {
        KNOWN_NAMES.iter().map(|k| k.name.to_string()).collect()
    }

    /// Record highlighted on the client's About screen.
    pub fn featured(&self) -> Option<NameRecord> {
        table::find(FEATURED_KEY).map(KnownName::to_record)
    }
}

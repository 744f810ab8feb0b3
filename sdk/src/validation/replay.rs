// Copyright 2024 Adobe. All rights reserved.
// This file is licensed to you under the Apache License,
// Version 2.0 (http://www.apache.org/licenses/LICENSE-2.0)
// or the MIT license (http://opensource.org/licenses/MIT),
// at your option.

// Unless required by applicable law or agreed to in writing,
// this software is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR REPRESENTATIONS OF ANY KIND, either express or
// implied. See the LICENSE-MIT and LICENSE-APACHE files for the
// specific language governing permissions and limitations under
// each license.

use std::{
    collections::{hash_map::Entry, HashMap},
    sync::Mutex,
};

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Describes errors that can occur while consulting a replay cache.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReplayCacheError {
    /// The underlying storage could not be read or written.
    #[error("replay cache storage failure: {0}")]
    Storage(String),
}

/// Contract for the replay-suppression store consulted by the one-time-use
/// condition validator.
///
/// The durable storage engine behind the cache is out of scope for this
/// crate; implement this trait over whatever store the deployment uses.
pub trait ReplayCache: Send + Sync {
    /// Atomically tests whether `key` has been seen before within `context`
    /// and, if not, records it until `expires`.
    ///
    /// Returns `true` iff the key was previously unseen (i.e. not a replay).
    /// The presence test and the insertion must happen with no race window
    /// between them: this atomicity is the sole correctness guarantee
    /// against replay.
    fn check(
        &self,
        context: &str,
        key: &str,
        expires: DateTime<Utc>,
    ) -> Result<bool, ReplayCacheError>;
}

/// In-process [`ReplayCache`] over a mutex-protected map.
///
/// Entries lapse at their expiration time, after which the same key is
/// accepted again. Suitable for single-process deployments and tests;
/// multi-node deployments need a shared store behind their own
/// [`ReplayCache`] impl.
#[derive(Debug, Default)]
pub struct InMemoryReplayCache {
    entries: Mutex<HashMap<(String, String), DateTime<Utc>>>,
}

impl InMemoryReplayCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReplayCache for InMemoryReplayCache {
    fn check(
        &self,
        context: &str,
        key: &str,
        expires: DateTime<Utc>,
    ) -> Result<bool, ReplayCacheError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| ReplayCacheError::Storage("cache mutex poisoned".to_string()))?;

        let now = Utc::now();
        entries.retain(|_, expiration| *expiration > now);

        match entries.entry((context.to_string(), key.to_string())) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(vacant) => {
                vacant.insert(expires);
                Ok(true)
            }
        }
    }
}

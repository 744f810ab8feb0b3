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

use chrono::{Duration, Utc};
use saml_status_tracker::{log_item, validation_codes};

use crate::{
    model::{one_time_use_name, Assertion, Condition, QName},
    validation::{
        conditions::ConditionValidator, params, ReplayCache, ValidationContext, ValidationResult,
    },
    Error,
};

/// Placeholder used in the cache key when the assertion has no issuer.
const NO_ISSUER: &str = "NoIssuer";

/// Placeholder used in the cache key when the assertion has no ID.
const NO_ID: &str = "NoID";

/// Default replay-cache entry lifetime.
fn default_cache_expires() -> Duration {
    Duration::hours(8)
}

/// Validates `OneTimeUse` conditions by recording each assertion in a replay
/// cache and rejecting assertions that have been seen before.
///
/// This is the only validator that owns a collaborator: its replay cache
/// handle and a configured default entry lifetime.
pub struct OneTimeUseConditionValidator {
    replay_cache: Box<dyn ReplayCache>,
    replay_cache_expires: Duration,
}

impl OneTimeUseConditionValidator {
    /// Context label under which this validator records cache entries.
    pub const CACHE_CONTEXT: &'static str = "OneTimeUseConditionValidator";

    /// Creates a validator over the given replay cache.
    ///
    /// `replay_cache_expires` is the default lifetime of a cache entry;
    /// absent or non-positive values fall back to 8 hours.
    pub fn new(replay_cache: Box<dyn ReplayCache>, replay_cache_expires: Option<Duration>) -> Self {
        let replay_cache_expires = match replay_cache_expires {
            Some(expires) if expires > Duration::zero() => expires,
            _ => default_cache_expires(),
        };

        OneTimeUseConditionValidator {
            replay_cache,
            replay_cache_expires,
        }
    }

    /// Cache key for an assertion: `"<issuer>--<id>"` with literal
    /// placeholders when either value is absent.
    ///
    /// The placeholders mean that two issuer-less, ID-less assertions share
    /// one replay bucket. Existing deployments depend on this documented
    /// key shape, so it is kept as is.
    fn cache_value(assertion: &Assertion) -> String {
        let issuer = assertion
            .issuer
            .as_deref()
            .map(str::trim)
            .filter(|issuer| !issuer.is_empty())
            .unwrap_or(NO_ISSUER);

        let id = assertion
            .id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .unwrap_or(NO_ID);

        format!("{issuer}--{id}")
    }

    /// Effective cache-entry lifetime for one validation run: the per-run
    /// override when positive, the configured default otherwise.
    fn expires(&self, context: &ValidationContext) -> Duration {
        match context.static_params.one_time_use_expires {
            Some(expires) if expires > Duration::zero() => expires,
            Some(expires) if expires < Duration::zero() => {
                log::warn!(
                    "negative one-time-use expiration override {expires}, using configured default"
                );
                self.replay_cache_expires
            }
            _ => self.replay_cache_expires,
        }
    }
}

impl ConditionValidator for OneTimeUseConditionValidator {
    fn serviced_condition(&self) -> QName {
        one_time_use_name()
    }

    fn validate(
        &self,
        condition: &Condition,
        assertion: &Assertion,
        context: &mut ValidationContext,
    ) -> Result<ValidationResult, Error> {
        let Condition::OneTimeUse = condition else {
            log_item!(
                params::COND_ONE_TIME_USE_EXPIRES,
                format!(
                    "condition '{}' is not a OneTimeUse",
                    condition.element_name()
                ),
                "validate"
            )
            .validation_status(validation_codes::CONDITION_TYPE_MISMATCH)
            .failure_no_throw(&mut context.validation_log, ValidationResult::Indeterminate);
            return Ok(ValidationResult::Indeterminate);
        };

        let expiration = Utc::now() + self.expires(context);
        let key = Self::cache_value(assertion);

        match self
            .replay_cache
            .check(Self::CACHE_CONTEXT, &key, expiration)
        {
            Ok(true) => Ok(ValidationResult::Valid),

            Ok(false) => {
                log_item!(
                    params::COND_ONE_TIME_USE_EXPIRES,
                    format!(
                        "one-time-use assertion '{}' has been used before",
                        assertion.id_for_logging()
                    ),
                    "validate"
                )
                .validation_status(validation_codes::CONDITION_ONE_TIME_USE_REPLAYED)
                .failure_no_throw(&mut context.validation_log, ValidationResult::Invalid);
                Ok(ValidationResult::Invalid)
            }

            Err(err) => {
                log_item!(
                    params::COND_ONE_TIME_USE_EXPIRES,
                    format!(
                        "replay cache could not be consulted for assertion '{}'",
                        assertion.id_for_logging()
                    ),
                    "validate"
                )
                .validation_status(validation_codes::CONDITION_ONE_TIME_USE_CACHE_ERROR)
                .failure_no_throw(&mut context.validation_log, err);
                Ok(ValidationResult::Indeterminate)
            }
        }
    }
}

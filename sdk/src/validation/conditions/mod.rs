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

//! Validators for individual conditions within an assertion's `Conditions`
//! element.

use crate::{
    model::{Assertion, Condition, QName},
    validation::{ValidationContext, ValidationResult},
    Error,
};

mod audience_restriction;
mod one_time_use;
mod proxy_restriction;

pub use audience_restriction::AudienceRestrictionConditionValidator;
pub use one_time_use::OneTimeUseConditionValidator;
pub use proxy_restriction::ProxyRestrictionConditionValidator;

/// Evaluates one kind of condition.
///
/// Implementations are registered with the orchestrator keyed by
/// [`serviced_condition`](Self::serviced_condition) and must be stateless
/// apart from configuration fixed at construction time.
pub trait ConditionValidator: Send + Sync {
    /// The qualified element (or schema type) name of the condition this
    /// validator services.
    fn serviced_condition(&self) -> QName;

    /// Validates `condition` against the policy carried by `context`.
    ///
    /// Returns `Err` only for conditions that make the validation process
    /// itself unsound; an invalid or unevaluable condition is expressed
    /// through the returned [`ValidationResult`].
    fn validate(
        &self,
        condition: &Condition,
        assertion: &Assertion,
        context: &mut ValidationContext,
    ) -> Result<ValidationResult, Error>;
}

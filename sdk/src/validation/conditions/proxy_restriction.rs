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

use saml_status_tracker::{log_item, validation_codes};

use crate::{
    model::{proxy_restriction_name, Assertion, Condition, QName},
    validation::{conditions::ConditionValidator, ValidationContext, ValidationResult},
    Error,
};

/// Accepts `ProxyRestriction` conditions.
///
/// The policy implication of proxying is deferred to the relying party;
/// this validator only satisfies the dispatch contract so that the
/// condition does not count as unknown.
#[derive(Debug, Default)]
pub struct ProxyRestrictionConditionValidator;

impl ProxyRestrictionConditionValidator {
    /// Creates a new proxy restriction validator.
    pub fn new() -> Self {
        Self
    }
}

impl ConditionValidator for ProxyRestrictionConditionValidator {
    fn serviced_condition(&self) -> QName {
        proxy_restriction_name()
    }

    fn validate(
        &self,
        condition: &Condition,
        _assertion: &Assertion,
        context: &mut ValidationContext,
    ) -> Result<ValidationResult, Error> {
        match condition {
            Condition::ProxyRestriction(_) => Ok(ValidationResult::Valid),
            other => {
                log_item!(
                    proxy_restriction_name().to_string(),
                    format!("condition '{}' is not a ProxyRestriction", other.element_name()),
                    "validate"
                )
                .validation_status(validation_codes::CONDITION_TYPE_MISMATCH)
                .failure_no_throw(&mut context.validation_log, ValidationResult::Indeterminate);
                Ok(ValidationResult::Indeterminate)
            }
        }
    }
}

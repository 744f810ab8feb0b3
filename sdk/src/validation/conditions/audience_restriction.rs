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
    model::{audience_restriction_name, Assertion, Condition, QName},
    validation::{conditions::ConditionValidator, params, ValidationContext, ValidationResult},
    Error,
};

/// Validates `AudienceRestriction` conditions against the configured set of
/// audience URIs the relying party answers to.
#[derive(Debug, Default)]
pub struct AudienceRestrictionConditionValidator;

impl AudienceRestrictionConditionValidator {
    /// Creates a new audience restriction validator.
    pub fn new() -> Self {
        Self
    }
}

impl ConditionValidator for AudienceRestrictionConditionValidator {
    fn serviced_condition(&self) -> QName {
        audience_restriction_name()
    }

    fn validate(
        &self,
        condition: &Condition,
        assertion: &Assertion,
        context: &mut ValidationContext,
    ) -> Result<ValidationResult, Error> {
        let Condition::AudienceRestriction(restriction) = condition else {
            log_item!(
                params::COND_VALID_AUDIENCES,
                format!(
                    "condition '{}' is not an AudienceRestriction",
                    condition.element_name()
                ),
                "validate"
            )
            .validation_status(validation_codes::CONDITION_TYPE_MISMATCH)
            .failure_no_throw(&mut context.validation_log, ValidationResult::Indeterminate);
            return Ok(ValidationResult::Indeterminate);
        };

        let matched = match &context.static_params.valid_audiences {
            Some(valid_audiences) if !valid_audiences.is_empty() => {
                if restriction.audiences.is_empty() {
                    log_item!(
                        params::COND_VALID_AUDIENCES,
                        format!(
                            "malformed AudienceRestriction in assertion '{}': no audiences",
                            assertion.id_for_logging()
                        ),
                        "validate"
                    )
                    .validation_status(validation_codes::CONDITION_AUDIENCE_MISSING)
                    .failure_no_throw(&mut context.validation_log, ValidationResult::Invalid);
                    return Ok(ValidationResult::Invalid);
                }

                restriction
                    .audiences
                    .iter()
                    .map(|audience| audience.trim())
                    .any(|audience| !audience.is_empty() && valid_audiences.contains(audience))
            }
            _ => {
                log_item!(
                    params::COND_VALID_AUDIENCES,
                    "set of valid audiences is absent or empty, unable to evaluate \
                     AudienceRestriction",
                    "validate"
                )
                .validation_status(validation_codes::CONDITION_AUDIENCE_INDETERMINATE)
                .failure_no_throw(&mut context.validation_log, ValidationResult::Indeterminate);
                return Ok(ValidationResult::Indeterminate);
            }
        };

        if matched {
            Ok(ValidationResult::Valid)
        } else {
            log_item!(
                params::COND_VALID_AUDIENCES,
                format!(
                    "no audience in assertion '{}' matched any valid audience",
                    assertion.id_for_logging()
                ),
                "validate"
            )
            .validation_status(validation_codes::CONDITION_AUDIENCE_MISMATCH)
            .failure_no_throw(&mut context.validation_log, ValidationResult::Invalid);
            Ok(ValidationResult::Invalid)
        }
    }
}

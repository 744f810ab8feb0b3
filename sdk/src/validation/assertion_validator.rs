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

use std::collections::HashMap;

use chrono::Utc;
use saml_status_tracker::{log_item, validation_codes};

use crate::{
    model::{Assertion, Conditions, QName, SamlVersion},
    validation::{
        conditions::{
            AudienceRestrictionConditionValidator, ConditionValidator, OneTimeUseConditionValidator,
            ProxyRestrictionConditionValidator,
        },
        params,
        statements::{AuthnStatementValidator, StatementValidator},
        subject_confirmation::{
            BearerSubjectConfirmationValidator, HolderOfKeySubjectConfirmationValidator,
            SubjectConfirmationValidator,
        },
        ReplayCache, ValidationContext, ValidationResult,
    },
    Error,
};

/// Top-level SAML 2.0 assertion validator.
///
/// Dispatches each of the assertion's conditions, subject confirmations, and
/// statements to the validator registered for its declared type or method
/// URI, and combines the tri-state outcomes: all conditions must be `Valid`,
/// at least one subject confirmation must be `Valid`, and all statements
/// must be `Valid`.
///
/// The validator holds no per-run state and may be shared across threads;
/// each run's state lives in the caller's [`ValidationContext`].
pub struct Saml20AssertionValidator {
    condition_validators: HashMap<QName, Box<dyn ConditionValidator>>,
    subject_confirmation_validators: HashMap<String, Box<dyn SubjectConfirmationValidator>>,
    statement_validators: HashMap<QName, Box<dyn StatementValidator>>,
}

impl Saml20AssertionValidator {
    /// Creates a validator with the given registries.
    pub fn new(
        condition_validators: Vec<Box<dyn ConditionValidator>>,
        subject_confirmation_validators: Vec<Box<dyn SubjectConfirmationValidator>>,
        statement_validators: Vec<Box<dyn StatementValidator>>,
    ) -> Self {
        Saml20AssertionValidator {
            condition_validators: condition_validators
                .into_iter()
                .map(|v| (v.serviced_condition(), v))
                .collect(),
            subject_confirmation_validators: subject_confirmation_validators
                .into_iter()
                .map(|v| (v.serviced_method().to_string(), v))
                .collect(),
            statement_validators: statement_validators
                .into_iter()
                .map(|v| (v.serviced_statement(), v))
                .collect(),
        }
    }

    /// Creates a validator with every validator in this crate registered:
    /// audience restriction, one-time-use (over `replay_cache`), proxy
    /// restriction, bearer and holder-of-key confirmation, and
    /// authentication statements.
    pub fn with_default_validators(replay_cache: Box<dyn ReplayCache>) -> Self {
        Self::new(
            vec![
                Box::new(AudienceRestrictionConditionValidator::new()),
                Box::new(OneTimeUseConditionValidator::new(replay_cache, None)),
                Box::new(ProxyRestrictionConditionValidator::new()),
            ],
            vec![
                Box::new(BearerSubjectConfirmationValidator::new()),
                Box::new(HolderOfKeySubjectConfirmationValidator::new()),
            ],
            vec![Box::new(AuthnStatementValidator::new())],
        )
    }

    /// Validates `assertion` against the policy carried by `context`.
    ///
    /// Returns `Err` only when the validation process itself is unsound;
    /// every verdict about the assertion is expressed through the returned
    /// [`ValidationResult`] plus the context's validation log.
    pub fn validate(
        &self,
        assertion: &Assertion,
        context: &mut ValidationContext,
    ) -> Result<ValidationResult, Error> {
        context
            .validation_log
            .push_current_assertion_id(assertion.id_for_logging());

        let result = self.validate_inner(assertion, context);

        context.validation_log.pop_current_assertion_id();
        result
    }

    fn validate_inner(
        &self,
        assertion: &Assertion,
        context: &mut ValidationContext,
    ) -> Result<ValidationResult, Error> {
        let phases = [
            Self::validate_version,
            Self::validate_issue_instant,
            Self::validate_issuer,
            Self::validate_required_conditions,
        ];
        for phase in phases {
            let result = phase(self, assertion, context);
            if result != ValidationResult::Valid {
                return Ok(result);
            }
        }

        let result = self.validate_conditions(assertion, context)?;
        if result != ValidationResult::Valid {
            return Ok(result);
        }

        let result = self.validate_subject_confirmation(assertion, context)?;
        if result != ValidationResult::Valid {
            return Ok(result);
        }

        let result = self.validate_statements(assertion, context)?;
        if result != ValidationResult::Valid {
            return Ok(result);
        }

        log_item!(
            "Assertion",
            format!("assertion '{}' validated", assertion.id_for_logging()),
            "validate"
        )
        .validation_status(validation_codes::ASSERTION_VALIDATED)
        .success(&mut context.validation_log);

        Ok(ValidationResult::Valid)
    }

    fn validate_version(
        &self,
        assertion: &Assertion,
        context: &mut ValidationContext,
    ) -> ValidationResult {
        if assertion.version == SamlVersion::V2_0 {
            return ValidationResult::Valid;
        }

        log_item!(
            "Assertion",
            format!(
                "assertion '{}' is not a SAML 2.0 assertion",
                assertion.id_for_logging()
            ),
            "validate_version"
        )
        .validation_status(validation_codes::ASSERTION_VERSION_INVALID)
        .failure_no_throw(&mut context.validation_log, ValidationResult::Invalid);
        ValidationResult::Invalid
    }

    fn validate_issue_instant(
        &self,
        assertion: &Assertion,
        context: &mut ValidationContext,
    ) -> ValidationResult {
        let Some(issue_instant) = assertion.issue_instant else {
            log_item!(
                "Assertion",
                format!(
                    "assertion '{}' does not carry the required IssueInstant",
                    assertion.id_for_logging()
                ),
                "validate_issue_instant"
            )
            .validation_status(validation_codes::ASSERTION_ISSUE_INSTANT_MISSING)
            .failure_no_throw(&mut context.validation_log, ValidationResult::Invalid);
            return ValidationResult::Invalid;
        };

        let now = Utc::now();
        let clock_skew = context.static_params.effective_clock_skew();
        let lifetime = context.static_params.effective_lifetime();

        if issue_instant > now + clock_skew {
            log_item!(
                params::CLOCK_SKEW,
                format!(
                    "assertion '{}' with IssueInstant '{}' was issued in the future",
                    assertion.id_for_logging(),
                    issue_instant
                ),
                "validate_issue_instant"
            )
            .validation_status(validation_codes::ASSERTION_ISSUE_INSTANT_IN_FUTURE)
            .failure_no_throw(&mut context.validation_log, ValidationResult::Invalid);
            return ValidationResult::Invalid;
        }

        if issue_instant + clock_skew + lifetime < now {
            log_item!(
                params::LIFETIME,
                format!(
                    "assertion '{}' with IssueInstant '{}' has exceeded its lifetime",
                    assertion.id_for_logging(),
                    issue_instant
                ),
                "validate_issue_instant"
            )
            .validation_status(validation_codes::ASSERTION_ISSUE_INSTANT_EXPIRED)
            .failure_no_throw(&mut context.validation_log, ValidationResult::Invalid);
            return ValidationResult::Invalid;
        }

        ValidationResult::Valid
    }

    fn validate_issuer(
        &self,
        assertion: &Assertion,
        context: &mut ValidationContext,
    ) -> ValidationResult {
        let issuer = assertion
            .issuer
            .as_deref()
            .map(str::trim)
            .filter(|issuer| !issuer.is_empty());

        let Some(issuer) = issuer else {
            log_item!(
                params::VALID_ISSUERS,
                format!(
                    "assertion '{}' does not carry the required Issuer",
                    assertion.id_for_logging()
                ),
                "validate_issuer"
            )
            .validation_status(validation_codes::ASSERTION_ISSUER_MISSING)
            .failure_no_throw(&mut context.validation_log, ValidationResult::Invalid);
            return ValidationResult::Invalid;
        };

        // TODO: decide whether an absent issuer set should hard-fail instead
        // of passing once all embedding call sites supply one.
        let trusted = match &context.static_params.valid_issuers {
            Some(valid_issuers) if !valid_issuers.is_empty() => valid_issuers.contains(issuer),
            _ => {
                log::debug!("no valid issuers configured, skipping issuer check");
                true
            }
        };

        if trusted {
            ValidationResult::Valid
        } else {
            log_item!(
                params::VALID_ISSUERS,
                format!(
                    "issuer of assertion '{}' did not match any valid issuer",
                    assertion.id_for_logging()
                ),
                "validate_issuer"
            )
            .validation_status(validation_codes::ASSERTION_ISSUER_UNTRUSTED)
            .failure_no_throw(&mut context.validation_log, ValidationResult::Invalid);
            ValidationResult::Invalid
        }
    }

    fn validate_required_conditions(
        &self,
        assertion: &Assertion,
        context: &mut ValidationContext,
    ) -> ValidationResult {
        let Some(required) = context.static_params.required_conditions.clone() else {
            return ValidationResult::Valid;
        };

        let present: Vec<QName> = assertion
            .conditions
            .as_ref()
            .map(|conditions| {
                conditions
                    .conditions
                    .iter()
                    .map(|condition| condition.element_name())
                    .collect()
            })
            .unwrap_or_default();

        for required_condition in &required {
            if !present.contains(required_condition) {
                log_item!(
                    params::COND_REQUIRED_CONDITIONS,
                    format!(
                        "assertion '{}' does not carry the required condition '{}'",
                        assertion.id_for_logging(),
                        required_condition
                    ),
                    "validate_required_conditions"
                )
                .validation_status(validation_codes::CONDITIONS_REQUIRED_MISSING)
                .failure_no_throw(&mut context.validation_log, ValidationResult::Invalid);
                return ValidationResult::Invalid;
            }
        }

        ValidationResult::Valid
    }

    fn validate_conditions(
        &self,
        assertion: &Assertion,
        context: &mut ValidationContext,
    ) -> Result<ValidationResult, Error> {
        let Some(conditions) = &assertion.conditions else {
            log::debug!("assertion has no conditions, nothing to validate");
            return Ok(ValidationResult::Valid);
        };

        let result = self.validate_conditions_time_bounds(conditions, assertion, context);
        if result != ValidationResult::Valid {
            return Ok(result);
        }

        for condition in &conditions.conditions {
            let element_name = condition.element_name();

            let Some(validator) = self.condition_validators.get(&element_name) else {
                if context.static_params.unknown_condition_fatal {
                    log_item!(
                        "Conditions",
                        format!(
                            "no validator registered for condition '{element_name}' in \
                             assertion '{}'",
                            assertion.id_for_logging()
                        ),
                        "validate_conditions"
                    )
                    .validation_status(validation_codes::CONDITION_UNKNOWN)
                    .failure_no_throw(&mut context.validation_log, ValidationResult::Indeterminate);
                    return Ok(ValidationResult::Indeterminate);
                }

                log_item!(
                    "Conditions",
                    format!("skipping condition '{element_name}' with no registered validator"),
                    "validate_conditions"
                )
                .validation_status(validation_codes::CONDITION_UNKNOWN)
                .informational(&mut context.validation_log);
                continue;
            };

            let result = validator.validate(condition, assertion, context)?;
            if result != ValidationResult::Valid {
                log_item!(
                    "Conditions",
                    format!(
                        "condition '{element_name}' in assertion '{}' was not valid",
                        assertion.id_for_logging()
                    ),
                    "validate_conditions"
                )
                .failure_no_throw(&mut context.validation_log, result);
                return Ok(result);
            }
        }

        Ok(ValidationResult::Valid)
    }

    fn validate_conditions_time_bounds(
        &self,
        conditions: &Conditions,
        assertion: &Assertion,
        context: &mut ValidationContext,
    ) -> ValidationResult {
        let now = Utc::now();
        let clock_skew = context.static_params.effective_clock_skew();

        if let Some(not_before) = conditions.not_before {
            if not_before > now + clock_skew {
                log_item!(
                    params::CLOCK_SKEW,
                    format!(
                        "Conditions in assertion '{}' with NotBefore '{}' are not yet valid",
                        assertion.id_for_logging(),
                        not_before
                    ),
                    "validate_conditions_time_bounds"
                )
                .validation_status(validation_codes::CONDITIONS_NOT_YET_VALID)
                .failure_no_throw(&mut context.validation_log, ValidationResult::Invalid);
                return ValidationResult::Invalid;
            }
        }

        if let Some(not_on_or_after) = conditions.not_on_or_after {
            if not_on_or_after < now - clock_skew {
                log_item!(
                    params::CLOCK_SKEW,
                    format!(
                        "Conditions in assertion '{}' with NotOnOrAfter '{}' are no longer valid",
                        assertion.id_for_logging(),
                        not_on_or_after
                    ),
                    "validate_conditions_time_bounds"
                )
                .validation_status(validation_codes::CONDITIONS_EXPIRED)
                .failure_no_throw(&mut context.validation_log, ValidationResult::Invalid);
                return ValidationResult::Invalid;
            }
        }

        ValidationResult::Valid
    }

    fn validate_subject_confirmation(
        &self,
        assertion: &Assertion,
        context: &mut ValidationContext,
    ) -> Result<ValidationResult, Error> {
        let confirmations = assertion
            .subject
            .as_ref()
            .map(|subject| &subject.subject_confirmations[..])
            .unwrap_or(&[]);

        if confirmations.is_empty() {
            log::debug!("assertion has no subject confirmations, nothing to validate");
            return Ok(ValidationResult::Valid);
        }

        for confirmation in confirmations {
            let Some(validator) = self.subject_confirmation_validators.get(&confirmation.method)
            else {
                log::debug!(
                    "no validator registered for confirmation method '{}', skipping",
                    confirmation.method
                );
                continue;
            };

            match validator.validate(confirmation, assertion, context) {
                Ok(ValidationResult::Valid) => {
                    context.dynamic_params.confirmed_subject_confirmation =
                        Some(confirmation.clone());

                    log_item!(
                        params::CONFIRMED_SUBJECT_CONFIRMATION,
                        format!(
                            "subject of assertion '{}' confirmed via method '{}'",
                            assertion.id_for_logging(),
                            confirmation.method
                        ),
                        "validate_subject_confirmation"
                    )
                    .validation_status(validation_codes::SUBJECT_CONFIRMATION_CONFIRMED)
                    .success(&mut context.validation_log);

                    return Ok(ValidationResult::Valid);
                }

                Ok(_) => {}

                Err(err) => {
                    log::warn!(
                        "error validating confirmation method '{}': {err}",
                        confirmation.method
                    );
                }
            }
        }

        log_item!(
            params::CONFIRMED_SUBJECT_CONFIRMATION,
            format!(
                "no subject confirmation in assertion '{}' could be confirmed",
                assertion.id_for_logging()
            ),
            "validate_subject_confirmation"
        )
        .validation_status(validation_codes::SUBJECT_CONFIRMATION_NONE_CONFIRMED)
        .failure_no_throw(&mut context.validation_log, ValidationResult::Invalid);
        Ok(ValidationResult::Invalid)
    }

    fn validate_statements(
        &self,
        assertion: &Assertion,
        context: &mut ValidationContext,
    ) -> Result<ValidationResult, Error> {
        for statement in &assertion.statements {
            let element_name = statement.element_name();

            let Some(validator) = self.statement_validators.get(&element_name) else {
                if context.static_params.unknown_statement_fatal {
                    log_item!(
                        "Statement",
                        format!(
                            "no validator registered for statement '{element_name}' in \
                             assertion '{}'",
                            assertion.id_for_logging()
                        ),
                        "validate_statements"
                    )
                    .validation_status(validation_codes::STATEMENT_UNKNOWN)
                    .failure_no_throw(&mut context.validation_log, ValidationResult::Indeterminate);
                    return Ok(ValidationResult::Indeterminate);
                }

                log::debug!("skipping statement '{element_name}' with no registered validator");
                continue;
            };

            let result = validator.validate(statement, assertion, context)?;
            if result != ValidationResult::Valid {
                return Ok(result);
            }
        }

        Ok(ValidationResult::Valid)
    }
}

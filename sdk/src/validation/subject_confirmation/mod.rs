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

//! Validators for subject confirmations, dispatched by confirmation method
//! URI.
//!
//! All methods share the confirmation-data checks in
//! [`validate_confirmation_data`]: NotBefore, NotOnOrAfter, Recipient,
//! Address, then InResponseTo, short-circuiting on the first non-`Valid`
//! result. Each method validator runs those checks first and then applies
//! its method-specific logic.

use chrono::Utc;
use saml_status_tracker::{log_item, validation_codes};

use crate::{
    model::{Assertion, SubjectConfirmation, SubjectConfirmationData},
    validation::{
        check_address, params, AddressResolver, AddressSetKey, ValidationContext, ValidationResult,
    },
    Error,
};

mod bearer;
mod holder_of_key;

pub use bearer::BearerSubjectConfirmationValidator;
pub use holder_of_key::HolderOfKeySubjectConfirmationValidator;

/// Evaluates one subject confirmation method.
///
/// Implementations are registered with the orchestrator keyed by
/// [`serviced_method`](Self::serviced_method).
pub trait SubjectConfirmationValidator: Send + Sync {
    /// The confirmation method URI this validator services.
    fn serviced_method(&self) -> &str;

    /// Validates `confirmation` against the policy carried by `context`.
    ///
    /// Returns `Err` only for conditions that make the validation process
    /// itself unsound.
    fn validate(
        &self,
        confirmation: &SubjectConfirmation,
        assertion: &Assertion,
        context: &mut ValidationContext,
    ) -> Result<ValidationResult, Error>;
}

/// Runs the method-independent confirmation-data checks.
///
/// When confirmation data is absent entirely, the confirmation is acceptable
/// only if no individual field is flagged as required by policy.
pub(crate) fn validate_confirmation_data(
    confirmation: &SubjectConfirmation,
    assertion: &Assertion,
    context: &mut ValidationContext,
    resolver: &dyn AddressResolver,
) -> ValidationResult {
    let Some(data) = &confirmation.subject_confirmation_data else {
        let policy = &context.static_params;
        let any_field_required = policy.not_before_required
            || policy.not_on_or_after_required
            || policy.recipient_required
            || policy.address_required
            || (!policy.ignore_in_response_to && policy.in_response_to_required);

        if any_field_required {
            log_item!(
                "SubjectConfirmationData",
                format!(
                    "assertion '{}' has no confirmation data but policy requires \
                     confirmation data fields",
                    assertion.id_for_logging()
                ),
                "validate_confirmation_data"
            )
            .validation_status(validation_codes::SUBJECT_CONFIRMATION_DATA_MISSING)
            .failure_no_throw(&mut context.validation_log, ValidationResult::Invalid);
            return ValidationResult::Invalid;
        }

        return ValidationResult::Valid;
    };

    let checks = [
        validate_not_before,
        validate_not_on_or_after,
        validate_recipient,
    ];
    for check in checks {
        let result = check(data, assertion, context);
        if result != ValidationResult::Valid {
            return result;
        }
    }

    let result = validate_address(data, assertion, context, resolver);
    if result != ValidationResult::Valid {
        return result;
    }

    validate_in_response_to(data, assertion, context)
}

fn validate_not_before(
    data: &SubjectConfirmationData,
    assertion: &Assertion,
    context: &mut ValidationContext,
) -> ValidationResult {
    let skewed_now = Utc::now() + context.static_params.effective_clock_skew();

    match data.not_before {
        Some(not_before) if not_before > skewed_now => {
            log_item!(
                params::SC_NOT_BEFORE_REQUIRED,
                format!(
                    "confirmation data in assertion '{}' with NotBefore '{}' is not yet valid",
                    assertion.id_for_logging(),
                    not_before
                ),
                "validate_not_before"
            )
            .validation_status(validation_codes::SUBJECT_CONFIRMATION_NOT_YET_VALID)
            .failure_no_throw(&mut context.validation_log, ValidationResult::Invalid);
            ValidationResult::Invalid
        }

        None if context.static_params.not_before_required => {
            field_required(context, assertion, "NotBefore")
        }

        _ => ValidationResult::Valid,
    }
}

fn validate_not_on_or_after(
    data: &SubjectConfirmationData,
    assertion: &Assertion,
    context: &mut ValidationContext,
) -> ValidationResult {
    let skewed_now = Utc::now() - context.static_params.effective_clock_skew();

    match data.not_on_or_after {
        Some(not_on_or_after) if not_on_or_after < skewed_now => {
            log_item!(
                params::SC_NOT_ON_OR_AFTER_REQUIRED,
                format!(
                    "confirmation data in assertion '{}' with NotOnOrAfter '{}' is no longer \
                     valid",
                    assertion.id_for_logging(),
                    not_on_or_after
                ),
                "validate_not_on_or_after"
            )
            .validation_status(validation_codes::SUBJECT_CONFIRMATION_EXPIRED)
            .failure_no_throw(&mut context.validation_log, ValidationResult::Invalid);
            ValidationResult::Invalid
        }

        None if context.static_params.not_on_or_after_required => {
            field_required(context, assertion, "NotOnOrAfter")
        }

        _ => ValidationResult::Valid,
    }
}

fn validate_recipient(
    data: &SubjectConfirmationData,
    assertion: &Assertion,
    context: &mut ValidationContext,
) -> ValidationResult {
    let Some(recipient) = trim_or_none(&data.recipient) else {
        if context.static_params.recipient_required {
            return field_required(context, assertion, "Recipient");
        }
        return ValidationResult::Valid;
    };

    let matched = match &context.static_params.valid_recipients {
        Some(valid_recipients) if !valid_recipients.is_empty() => {
            valid_recipients.contains(recipient)
        }
        _ => {
            log_item!(
                params::SC_VALID_RECIPIENTS,
                "set of valid recipients is absent or empty, unable to evaluate Recipient",
                "validate_recipient"
            )
            .validation_status(validation_codes::SUBJECT_CONFIRMATION_RECIPIENT_INDETERMINATE)
            .failure_no_throw(&mut context.validation_log, ValidationResult::Indeterminate);
            return ValidationResult::Indeterminate;
        }
    };

    if matched {
        ValidationResult::Valid
    } else {
        log_item!(
            params::SC_VALID_RECIPIENTS,
            format!(
                "confirmation recipient for assertion '{}' did not match any valid recipient",
                assertion.id_for_logging()
            ),
            "validate_recipient"
        )
        .validation_status(validation_codes::SUBJECT_CONFIRMATION_RECIPIENT_MISMATCH)
        .failure_no_throw(&mut context.validation_log, ValidationResult::Invalid);
        ValidationResult::Invalid
    }
}

fn validate_address(
    data: &SubjectConfirmationData,
    assertion: &Assertion,
    context: &mut ValidationContext,
    resolver: &dyn AddressResolver,
) -> ValidationResult {
    if !context.static_params.check_address {
        log::debug!("confirmation data address check is disabled, skipping");
        return ValidationResult::Valid;
    }

    let Some(address) = trim_or_none(&data.address) else {
        if context.static_params.address_required {
            return field_required(context, assertion, "Address");
        }
        return ValidationResult::Valid;
    };

    check_address(
        resolver,
        address,
        AddressSetKey::SubjectConfirmation,
        assertion.id_for_logging(),
        context,
    )
}

fn validate_in_response_to(
    data: &SubjectConfirmationData,
    assertion: &Assertion,
    context: &mut ValidationContext,
) -> ValidationResult {
    if context.static_params.ignore_in_response_to {
        return ValidationResult::Valid;
    }

    let Some(in_response_to) = trim_or_none(&data.in_response_to) else {
        if context.static_params.in_response_to_required {
            return field_required(context, assertion, "InResponseTo");
        }
        return ValidationResult::Valid;
    };

    let matched = trim_or_none(&context.static_params.valid_in_response_to)
        .is_some_and(|expected| expected == in_response_to);

    if matched {
        ValidationResult::Valid
    } else {
        log_item!(
            params::SC_VALID_IN_RESPONSE_TO,
            format!(
                "confirmation data in assertion '{}' had unexpected InResponseTo value",
                assertion.id_for_logging()
            ),
            "validate_in_response_to"
        )
        .validation_status(validation_codes::SUBJECT_CONFIRMATION_IN_RESPONSE_TO_MISMATCH)
        .failure_no_throw(&mut context.validation_log, ValidationResult::Invalid);
        ValidationResult::Invalid
    }
}

fn field_required(
    context: &mut ValidationContext,
    assertion: &Assertion,
    field: &'static str,
) -> ValidationResult {
    log_item!(
        "SubjectConfirmationData",
        format!(
            "confirmation data in assertion '{}' does not carry the required {field}",
            assertion.id_for_logging()
        ),
        "validate_confirmation_data"
    )
    .validation_status(validation_codes::SUBJECT_CONFIRMATION_FIELD_REQUIRED)
    .failure_no_throw(&mut context.validation_log, ValidationResult::Invalid);
    ValidationResult::Invalid
}

fn trim_or_none(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|trimmed| !trimmed.is_empty())
}

/// Fixed address resolver used when a validator is built without an explicit
/// resolver.
pub(crate) fn default_resolver() -> std::sync::Arc<dyn AddressResolver> {
    std::sync::Arc::new(crate::validation::SystemAddressResolver)
}

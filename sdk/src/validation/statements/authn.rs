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

use std::sync::Arc;

use chrono::Utc;
use saml_status_tracker::{log_item, validation_codes};

use crate::{
    model::{authn_statement_name, Assertion, AuthnStatement, QName, Statement},
    validation::{
        check_address, params, statements::StatementValidator,
        subject_confirmation::default_resolver, AddressResolver, AddressSetKey, ValidationContext,
        ValidationResult,
    },
    Error,
};

/// Deployment-supplied check of an AuthnStatement's authentication context.
pub type AuthnContextCheck = Box<
    dyn Fn(&AuthnStatement, &Assertion, &mut ValidationContext) -> Result<ValidationResult, Error>
        + Send
        + Sync,
>;

/// Validates `AuthnStatement`s: the age of the authentication event and the
/// subject-locality address.
///
/// Authentication-context policy is an extension point that defaults to
/// always-`Valid`; deployments with context-class requirements supply their
/// own check via [`with_authn_context_check`](Self::with_authn_context_check).
pub struct AuthnStatementValidator {
    address_resolver: Arc<dyn AddressResolver>,
    authn_context_check: Option<AuthnContextCheck>,
}

impl AuthnStatementValidator {
    /// Creates a validator using the operating system's address resolver.
    pub fn new() -> Self {
        Self::with_resolver(default_resolver())
    }

    /// Creates a validator using the given address resolver.
    pub fn with_resolver(address_resolver: Arc<dyn AddressResolver>) -> Self {
        AuthnStatementValidator {
            address_resolver,
            authn_context_check: None,
        }
    }

    /// Adds a deployment-specific authentication-context check, run after
    /// the built-in checks pass.
    #[must_use]
    pub fn with_authn_context_check(mut self, check: AuthnContextCheck) -> Self {
        self.authn_context_check = Some(check);
        self
    }

    fn do_validate(
        &self,
        statement: &AuthnStatement,
        assertion: &Assertion,
        context: &mut ValidationContext,
    ) -> Result<ValidationResult, Error> {
        let result = self.validate_authn_instant(statement, assertion, context);
        if result != ValidationResult::Valid {
            return Ok(result);
        }

        let result = self.validate_subject_locality(statement, assertion, context);
        if result != ValidationResult::Valid {
            return Ok(result);
        }

        self.validate_authn_context(statement, assertion, context)
    }

    fn validate_authn_instant(
        &self,
        statement: &AuthnStatement,
        assertion: &Assertion,
        context: &mut ValidationContext,
    ) -> ValidationResult {
        let Some(max_time_since_authn) = context.static_params.max_time_since_authn else {
            return ValidationResult::Valid;
        };

        let Some(authn_instant) = statement.authn_instant else {
            log_item!(
                params::STMT_AUTHN_MAX_TIME,
                format!(
                    "AuthnStatement in assertion '{}' does not carry the required AuthnInstant",
                    assertion.id_for_logging()
                ),
                "validate_authn_instant"
            )
            .validation_status(validation_codes::STATEMENT_AUTHN_INSTANT_MISSING)
            .failure_no_throw(&mut context.validation_log, ValidationResult::Invalid);
            return ValidationResult::Invalid;
        };

        let latest_valid =
            authn_instant + max_time_since_authn + context.static_params.effective_clock_skew();

        if Utc::now() > latest_valid {
            log_item!(
                params::STMT_AUTHN_MAX_TIME,
                format!(
                    "authentication in assertion '{}' at '{}' is older than the maximum \
                     permitted age",
                    assertion.id_for_logging(),
                    authn_instant
                ),
                "validate_authn_instant"
            )
            .validation_status(validation_codes::STATEMENT_AUTHN_INSTANT_EXPIRED)
            .failure_no_throw(&mut context.validation_log, ValidationResult::Invalid);
            return ValidationResult::Invalid;
        }

        ValidationResult::Valid
    }

    fn validate_subject_locality(
        &self,
        statement: &AuthnStatement,
        assertion: &Assertion,
        context: &mut ValidationContext,
    ) -> ValidationResult {
        if !context.static_params.authn_check_address {
            log::debug!("AuthnStatement subject locality address check is disabled, skipping");
            return ValidationResult::Valid;
        }

        let address = statement
            .subject_locality
            .as_ref()
            .and_then(|locality| locality.address.as_deref())
            .map(str::trim)
            .filter(|address| !address.is_empty());

        let Some(address) = address else {
            log::debug!("AuthnStatement has no subject locality address, skipping");
            return ValidationResult::Valid;
        };

        check_address(
            self.address_resolver.as_ref(),
            address,
            AddressSetKey::AuthnStatement,
            assertion.id_for_logging(),
            context,
        )
    }

    fn validate_authn_context(
        &self,
        statement: &AuthnStatement,
        assertion: &Assertion,
        context: &mut ValidationContext,
    ) -> Result<ValidationResult, Error> {
        match &self.authn_context_check {
            Some(check) => check(statement, assertion, context),
            None => Ok(ValidationResult::Valid),
        }
    }
}

impl Default for AuthnStatementValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl StatementValidator for AuthnStatementValidator {
    fn serviced_statement(&self) -> QName {
        authn_statement_name()
    }

    fn validate(
        &self,
        statement: &Statement,
        assertion: &Assertion,
        context: &mut ValidationContext,
    ) -> Result<ValidationResult, Error> {
        let Statement::Authn(authn_statement) = statement else {
            log_item!(
                params::STMT_AUTHN_MAX_TIME,
                format!(
                    "statement '{}' is not an AuthnStatement",
                    statement.element_name()
                ),
                "validate"
            )
            .validation_status(validation_codes::STATEMENT_TYPE_MISMATCH)
            .failure_no_throw(&mut context.validation_log, ValidationResult::Indeterminate);
            return Ok(ValidationResult::Indeterminate);
        };

        // Internal failures during evaluation are not a verdict about the
        // assertion; surface them as Indeterminate with the cause logged.
        match self.do_validate(authn_statement, assertion, context) {
            Ok(result) => Ok(result),
            Err(err) => {
                log_item!(
                    params::STMT_AUTHN_MAX_TIME,
                    format!(
                        "error evaluating AuthnStatement in assertion '{}'",
                        assertion.id_for_logging()
                    ),
                    "validate"
                )
                .validation_status(validation_codes::STATEMENT_EVALUATION_ERROR)
                .failure_no_throw(&mut context.validation_log, err);
                Ok(ValidationResult::Indeterminate)
            }
        }
    }
}

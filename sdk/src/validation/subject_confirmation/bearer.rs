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

use saml_status_tracker::{log_item, validation_codes};

use crate::{
    model::{Assertion, SubjectConfirmation, METHOD_BEARER},
    validation::{
        subject_confirmation::{
            default_resolver, validate_confirmation_data, SubjectConfirmationValidator,
        },
        AddressResolver, ValidationContext, ValidationResult,
    },
    Error,
};

/// Validates bearer subject confirmations.
///
/// Bearer confirmation carries no method-specific proof: once the shared
/// confirmation-data checks pass, the confirmation is valid.
pub struct BearerSubjectConfirmationValidator {
    address_resolver: Arc<dyn AddressResolver>,
}

impl BearerSubjectConfirmationValidator {
    /// Creates a validator using the operating system's address resolver.
    pub fn new() -> Self {
        Self::with_resolver(default_resolver())
    }

    /// Creates a validator using the given address resolver.
    pub fn with_resolver(address_resolver: Arc<dyn AddressResolver>) -> Self {
        BearerSubjectConfirmationValidator { address_resolver }
    }
}

impl Default for BearerSubjectConfirmationValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl SubjectConfirmationValidator for BearerSubjectConfirmationValidator {
    fn serviced_method(&self) -> &str {
        METHOD_BEARER
    }

    fn validate(
        &self,
        confirmation: &SubjectConfirmation,
        assertion: &Assertion,
        context: &mut ValidationContext,
    ) -> Result<ValidationResult, Error> {
        if confirmation.method != METHOD_BEARER {
            log_item!(
                "SubjectConfirmation",
                format!(
                    "confirmation method '{}' is not bearer",
                    confirmation.method
                ),
                "validate"
            )
            .validation_status(validation_codes::SUBJECT_CONFIRMATION_TYPE_MISMATCH)
            .failure_no_throw(&mut context.validation_log, ValidationResult::Indeterminate);
            return Ok(ValidationResult::Indeterminate);
        }

        Ok(validate_confirmation_data(
            confirmation,
            assertion,
            context,
            self.address_resolver.as_ref(),
        ))
    }
}

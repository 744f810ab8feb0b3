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
    crypto::{cert_public_key, spki_equal},
    model::{
        key_info_confirmation_data_type_name, Assertion, KeyInfo, SubjectConfirmation,
        METHOD_HOLDER_OF_KEY,
    },
    validation::{
        params,
        subject_confirmation::{
            default_resolver, validate_confirmation_data, SubjectConfirmationValidator,
        },
        AddressResolver, ValidationContext, ValidationResult,
    },
    Error,
};

/// Validates holder-of-key subject confirmations by matching the
/// presenter's key material against the KeyInfo records in the confirmation
/// data.
///
/// This is value-equality matching of key material already present in the
/// assertion against key material presented out-of-band by the caller. It
/// is **not** a cryptographic challenge proving possession of the private
/// key; combine it with an independent possession proof (channel binding,
/// mutual TLS) where that guarantee is required.
pub struct HolderOfKeySubjectConfirmationValidator {
    address_resolver: Arc<dyn AddressResolver>,
}

impl HolderOfKeySubjectConfirmationValidator {
    /// Creates a validator using the operating system's address resolver.
    pub fn new() -> Self {
        Self::with_resolver(default_resolver())
    }

    /// Creates a validator using the given address resolver.
    pub fn with_resolver(address_resolver: Arc<dyn AddressResolver>) -> Self {
        HolderOfKeySubjectConfirmationValidator { address_resolver }
    }

    /// Establishes the presenter's public key from the supplied key and/or
    /// certificate.
    ///
    /// When both are supplied they must agree, else the trust inputs are
    /// ambiguous and the outcome is `Indeterminate`.
    fn presenter_key(
        &self,
        context: &mut ValidationContext,
    ) -> Result<Option<Vec<u8>>, ValidationResult> {
        let supplied_key = context.static_params.presenter_key.clone();
        let supplied_cert = context.static_params.presenter_cert.clone();

        let Some(cert) = supplied_cert else {
            return Ok(supplied_key);
        };

        let cert_key = match cert_public_key(&cert) {
            Ok(cert_key) => cert_key,
            Err(err) => {
                log_item!(
                    params::SC_HOK_PRESENTER_CERT,
                    "presenter certificate could not be parsed",
                    "presenter_key"
                )
                .validation_status(validation_codes::HOK_PRESENTER_MISSING)
                .failure_no_throw(&mut context.validation_log, err);
                return Err(ValidationResult::Indeterminate);
            }
        };

        if let Some(key) = supplied_key {
            match spki_equal(&cert_key, &key) {
                Ok(true) => Ok(Some(key)),
                Ok(false) => {
                    log_item!(
                        params::SC_HOK_PRESENTER_CERT,
                        "supplied presenter key and certificate disagree",
                        "presenter_key"
                    )
                    .validation_status(validation_codes::HOK_PRESENTER_CONFLICT)
                    .failure_no_throw(&mut context.validation_log, ValidationResult::Indeterminate);
                    Err(ValidationResult::Indeterminate)
                }
                Err(err) => {
                    log_item!(
                        params::SC_HOK_PRESENTER_KEY,
                        "supplied presenter key could not be parsed",
                        "presenter_key"
                    )
                    .validation_status(validation_codes::HOK_PRESENTER_MISSING)
                    .failure_no_throw(&mut context.validation_log, err);
                    Err(ValidationResult::Indeterminate)
                }
            }
        } else {
            Ok(Some(cert_key))
        }
    }

    fn do_validate(
        &self,
        confirmation: &SubjectConfirmation,
        assertion: &Assertion,
        context: &mut ValidationContext,
    ) -> ValidationResult {
        if let Some(data) = &confirmation.subject_confirmation_data {
            if let Some(xsi_type) = &data.xsi_type {
                if *xsi_type != key_info_confirmation_data_type_name() {
                    log_item!(
                        "SubjectConfirmationData",
                        format!(
                            "holder-of-key confirmation data in assertion '{}' has type '{}', \
                             not KeyInfoConfirmationDataType",
                            assertion.id_for_logging(),
                            xsi_type
                        ),
                        "do_validate"
                    )
                    .validation_status(validation_codes::SUBJECT_CONFIRMATION_TYPE_MISMATCH)
                    .failure_no_throw(&mut context.validation_log, ValidationResult::Invalid);
                    return ValidationResult::Invalid;
                }
            }
        }

        let key_infos: Vec<&KeyInfo> = confirmation
            .subject_confirmation_data
            .as_ref()
            .map(|data| data.key_infos.iter().collect())
            .unwrap_or_default();

        if key_infos.is_empty() {
            log_item!(
                params::SC_HOK_CONFIRMED_KEYINFO,
                format!(
                    "holder-of-key confirmation in assertion '{}' carries no KeyInfo",
                    assertion.id_for_logging()
                ),
                "do_validate"
            )
            .validation_status(validation_codes::HOK_KEY_INFO_MISSING)
            .failure_no_throw(&mut context.validation_log, ValidationResult::Invalid);
            return ValidationResult::Invalid;
        }

        let presenter_cert = context.static_params.presenter_cert.clone();
        let presenter_key = match self.presenter_key(context) {
            Ok(key) => key,
            Err(result) => return result,
        };

        if presenter_key.is_none() && presenter_cert.is_none() {
            log_item!(
                params::SC_HOK_PRESENTER_KEY,
                "neither a presenter key nor a presenter certificate was supplied",
                "do_validate"
            )
            .validation_status(validation_codes::HOK_PRESENTER_MISSING)
            .failure_no_throw(&mut context.validation_log, ValidationResult::Indeterminate);
            return ValidationResult::Indeterminate;
        }

        for key_info in key_infos {
            if let Some(key) = &presenter_key {
                if Self::matches_key(key_info, key) {
                    context.dynamic_params.confirmed_key_info = Some(key_info.clone());
                    return ValidationResult::Valid;
                }
            }

            if let Some(cert) = &presenter_cert {
                if key_info
                    .x509_certificates
                    .iter()
                    .any(|candidate| candidate == cert)
                {
                    context.dynamic_params.confirmed_key_info = Some(key_info.clone());
                    return ValidationResult::Valid;
                }
            }
        }

        log_item!(
            params::SC_HOK_CONFIRMED_KEYINFO,
            format!(
                "no KeyInfo in assertion '{}' matched the presenter's key material",
                assertion.id_for_logging()
            ),
            "do_validate"
        )
        .validation_status(validation_codes::HOK_NO_KEY_MATCH)
        .failure_no_throw(&mut context.validation_log, ValidationResult::Invalid);
        ValidationResult::Invalid
    }

    /// Matches the presenter key against the KeyValue and DEREncodedKeyValue
    /// children of one KeyInfo by value equality of the decoded keys.
    fn matches_key(key_info: &KeyInfo, presenter_key: &[u8]) -> bool {
        key_info
            .key_values
            .iter()
            .chain(key_info.der_encoded_key_values.iter())
            .any(|candidate| match spki_equal(candidate, presenter_key) {
                Ok(matched) => matched,
                Err(err) => {
                    log::warn!("skipping unparseable key value in KeyInfo: {err}");
                    false
                }
            })
    }
}

impl Default for HolderOfKeySubjectConfirmationValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl SubjectConfirmationValidator for HolderOfKeySubjectConfirmationValidator {
    fn serviced_method(&self) -> &str {
        METHOD_HOLDER_OF_KEY
    }

    fn validate(
        &self,
        confirmation: &SubjectConfirmation,
        assertion: &Assertion,
        context: &mut ValidationContext,
    ) -> Result<ValidationResult, Error> {
        if confirmation.method != METHOD_HOLDER_OF_KEY {
            log_item!(
                "SubjectConfirmation",
                format!(
                    "confirmation method '{}' is not holder-of-key",
                    confirmation.method
                ),
                "validate"
            )
            .validation_status(validation_codes::SUBJECT_CONFIRMATION_TYPE_MISMATCH)
            .failure_no_throw(&mut context.validation_log, ValidationResult::Indeterminate);
            return Ok(ValidationResult::Indeterminate);
        }

        let result = validate_confirmation_data(
            confirmation,
            assertion,
            context,
            self.address_resolver.as_ref(),
        );
        if result != ValidationResult::Valid {
            return Ok(result);
        }

        Ok(self.do_validate(confirmation, assertion, context))
    }
}

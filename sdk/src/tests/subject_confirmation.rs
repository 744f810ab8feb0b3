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
use saml_status_tracker::validation_codes;

use crate::{
    model::SubjectConfirmationData,
    tests::fixtures::{bearer_confirmation, minimal_assertion},
    validation::{
        subject_confirmation::{
            BearerSubjectConfirmationValidator, SubjectConfirmationValidator,
        },
        StaticParameters, ValidationContext, ValidationResult,
    },
};

fn validate_bearer(
    data: Option<SubjectConfirmationData>,
    static_params: StaticParameters,
) -> (ValidationResult, ValidationContext) {
    let validator = BearerSubjectConfirmationValidator::new();
    let mut context = ValidationContext::new(static_params);

    let result = validator
        .validate(&bearer_confirmation(data), &minimal_assertion(), &mut context)
        .unwrap();

    (result, context)
}

mod confirmation_data {
    use super::*;

    #[test]
    fn absent_data_with_no_required_fields_is_valid() {
        let (result, _) = validate_bearer(None, StaticParameters::default());
        assert_eq!(result, ValidationResult::Valid);
    }

    #[test]
    fn absent_data_with_a_required_field_is_invalid() {
        let (result, context) = validate_bearer(
            None,
            StaticParameters {
                recipient_required: true,
                ..Default::default()
            },
        );

        assert_eq!(result, ValidationResult::Invalid);
        assert!(context
            .validation_log
            .has_status(validation_codes::SUBJECT_CONFIRMATION_DATA_MISSING));
    }

    #[test]
    fn absent_data_with_only_ignored_in_response_to_required_is_valid() {
        let (result, _) = validate_bearer(
            None,
            StaticParameters {
                in_response_to_required: true,
                ignore_in_response_to: true,
                ..Default::default()
            },
        );

        assert_eq!(result, ValidationResult::Valid);
    }

    #[test]
    fn future_not_before_beyond_skew_is_invalid() {
        let (result, context) = validate_bearer(
            Some(SubjectConfirmationData {
                not_before: Some(Utc::now() + Duration::minutes(1)),
                ..Default::default()
            }),
            StaticParameters {
                clock_skew: Some(Duration::zero()),
                ..Default::default()
            },
        );

        assert_eq!(result, ValidationResult::Invalid);
        assert!(context
            .validation_log
            .has_status(validation_codes::SUBJECT_CONFIRMATION_NOT_YET_VALID));
    }

    #[test]
    fn future_not_before_within_skew_is_tolerated() {
        let (result, _) = validate_bearer(
            Some(SubjectConfirmationData {
                not_before: Some(Utc::now() + Duration::minutes(1)),
                ..Default::default()
            }),
            StaticParameters {
                clock_skew: Some(Duration::minutes(5)),
                ..Default::default()
            },
        );

        assert_eq!(result, ValidationResult::Valid);
    }

    #[test]
    fn past_not_on_or_after_beyond_skew_is_invalid() {
        let (result, context) = validate_bearer(
            Some(SubjectConfirmationData {
                not_on_or_after: Some(Utc::now() - Duration::minutes(1)),
                ..Default::default()
            }),
            StaticParameters {
                clock_skew: Some(Duration::zero()),
                ..Default::default()
            },
        );

        assert_eq!(result, ValidationResult::Invalid);
        assert!(context
            .validation_log
            .has_status(validation_codes::SUBJECT_CONFIRMATION_EXPIRED));
    }

    #[test]
    fn past_not_on_or_after_within_skew_is_tolerated() {
        let (result, _) = validate_bearer(
            Some(SubjectConfirmationData {
                not_on_or_after: Some(Utc::now() - Duration::minutes(1)),
                ..Default::default()
            }),
            StaticParameters {
                clock_skew: Some(Duration::minutes(5)),
                ..Default::default()
            },
        );

        assert_eq!(result, ValidationResult::Valid);
    }

    #[test]
    fn missing_required_not_before_is_invalid() {
        let (result, context) = validate_bearer(
            Some(SubjectConfirmationData::default()),
            StaticParameters {
                not_before_required: true,
                ..Default::default()
            },
        );

        assert_eq!(result, ValidationResult::Invalid);
        assert!(context
            .validation_log
            .has_status(validation_codes::SUBJECT_CONFIRMATION_FIELD_REQUIRED));
    }

    #[test]
    fn checks_short_circuit_on_first_failure() {
        // expired NotOnOrAfter and a bad recipient: only the time failure
        // may be reported
        let (result, context) = validate_bearer(
            Some(SubjectConfirmationData {
                not_on_or_after: Some(Utc::now() - Duration::hours(1)),
                recipient: Some("https://elsewhere.example".to_string()),
                ..Default::default()
            }),
            StaticParameters {
                clock_skew: Some(Duration::zero()),
                valid_recipients: Some(["https://sp.example/acs".to_string()].into()),
                ..Default::default()
            },
        );

        assert_eq!(result, ValidationResult::Invalid);
        assert!(context
            .validation_log
            .has_status(validation_codes::SUBJECT_CONFIRMATION_EXPIRED));
        assert!(!context
            .validation_log
            .has_status(validation_codes::SUBJECT_CONFIRMATION_RECIPIENT_MISMATCH));
    }
}

mod recipient {
    use super::*;

    fn with_recipient(recipient: &str, valid: &[&str]) -> (ValidationResult, ValidationContext) {
        validate_bearer(
            Some(SubjectConfirmationData {
                recipient: Some(recipient.to_string()),
                ..Default::default()
            }),
            StaticParameters {
                valid_recipients: Some(valid.iter().map(|r| r.to_string()).collect()),
                ..Default::default()
            },
        )
    }

    #[test]
    fn member_recipient_is_valid() {
        let (result, _) = with_recipient("https://sp.example/acs", &["https://sp.example/acs"]);
        assert_eq!(result, ValidationResult::Valid);
    }

    #[test]
    fn recipient_is_trimmed_before_matching() {
        let (result, _) = with_recipient("  https://sp.example/acs  ", &["https://sp.example/acs"]);
        assert_eq!(result, ValidationResult::Valid);
    }

    #[test]
    fn recipient_match_is_case_sensitive() {
        let (result, context) =
            with_recipient("https://SP.example/acs", &["https://sp.example/acs"]);

        assert_eq!(result, ValidationResult::Invalid);
        assert!(context
            .validation_log
            .has_status(validation_codes::SUBJECT_CONFIRMATION_RECIPIENT_MISMATCH));
    }

    #[test]
    fn missing_valid_recipient_set_is_indeterminate() {
        let (result, context) = validate_bearer(
            Some(SubjectConfirmationData {
                recipient: Some("https://sp.example/acs".to_string()),
                ..Default::default()
            }),
            StaticParameters::default(),
        );

        assert_eq!(result, ValidationResult::Indeterminate);
        assert!(context
            .validation_log
            .has_status(validation_codes::SUBJECT_CONFIRMATION_RECIPIENT_INDETERMINATE));
    }

    #[test]
    fn absent_recipient_is_valid_when_not_required() {
        let (result, _) = validate_bearer(
            Some(SubjectConfirmationData::default()),
            StaticParameters {
                valid_recipients: Some(["https://sp.example/acs".to_string()].into()),
                ..Default::default()
            },
        );

        assert_eq!(result, ValidationResult::Valid);
    }
}

mod in_response_to {
    use super::*;

    #[test]
    fn exact_match_is_valid() {
        let (result, _) = validate_bearer(
            Some(SubjectConfirmationData {
                in_response_to: Some("req-1".to_string()),
                ..Default::default()
            }),
            StaticParameters {
                valid_in_response_to: Some("req-1".to_string()),
                ..Default::default()
            },
        );

        assert_eq!(result, ValidationResult::Valid);
    }

    #[test]
    fn mismatch_is_invalid() {
        let (result, context) = validate_bearer(
            Some(SubjectConfirmationData {
                in_response_to: Some("req-2".to_string()),
                ..Default::default()
            }),
            StaticParameters {
                valid_in_response_to: Some("req-1".to_string()),
                ..Default::default()
            },
        );

        assert_eq!(result, ValidationResult::Invalid);
        assert!(context
            .validation_log
            .has_status(validation_codes::SUBJECT_CONFIRMATION_IN_RESPONSE_TO_MISMATCH));
    }

    #[test]
    fn unexpected_value_with_no_expected_value_is_invalid() {
        let (result, _) = validate_bearer(
            Some(SubjectConfirmationData {
                in_response_to: Some("req-1".to_string()),
                ..Default::default()
            }),
            StaticParameters::default(),
        );

        assert_eq!(result, ValidationResult::Invalid);
    }

    #[test]
    fn ignored_check_accepts_any_value() {
        let (result, _) = validate_bearer(
            Some(SubjectConfirmationData {
                in_response_to: Some("req-2".to_string()),
                ..Default::default()
            }),
            StaticParameters {
                valid_in_response_to: Some("req-1".to_string()),
                ignore_in_response_to: true,
                ..Default::default()
            },
        );

        assert_eq!(result, ValidationResult::Valid);
    }

    #[test]
    fn absent_required_value_is_invalid() {
        let (result, context) = validate_bearer(
            Some(SubjectConfirmationData::default()),
            StaticParameters {
                in_response_to_required: true,
                ..Default::default()
            },
        );

        assert_eq!(result, ValidationResult::Invalid);
        assert!(context
            .validation_log
            .has_status(validation_codes::SUBJECT_CONFIRMATION_FIELD_REQUIRED));
    }
}

mod address {
    use super::*;
    use std::sync::Arc;

    use crate::tests::fixtures::FixedResolver;

    #[test]
    fn disabled_address_check_skips_evaluation() {
        let (result, _) = validate_bearer(
            Some(SubjectConfirmationData {
                address: Some("client.example".to_string()),
                ..Default::default()
            }),
            StaticParameters {
                check_address: false,
                ..Default::default()
            },
        );

        assert_eq!(result, ValidationResult::Valid);
    }

    #[test]
    fn member_address_is_valid() {
        let validator = BearerSubjectConfirmationValidator::with_resolver(Arc::new(
            FixedResolver(vec!["192.0.2.7".parse().unwrap()]),
        ));
        let mut context = ValidationContext::new(StaticParameters {
            valid_addresses: Some(["192.0.2.7".parse().unwrap()].into()),
            ..Default::default()
        });

        let confirmation = bearer_confirmation(Some(SubjectConfirmationData {
            address: Some("client.example".to_string()),
            ..Default::default()
        }));

        let result = validator
            .validate(&confirmation, &minimal_assertion(), &mut context)
            .unwrap();

        assert_eq!(result, ValidationResult::Valid);
    }

    #[test]
    fn non_member_address_is_invalid() {
        let validator = BearerSubjectConfirmationValidator::with_resolver(Arc::new(
            FixedResolver(vec!["198.51.100.1".parse().unwrap()]),
        ));
        let mut context = ValidationContext::new(StaticParameters {
            valid_addresses: Some(["192.0.2.7".parse().unwrap()].into()),
            ..Default::default()
        });

        let confirmation = bearer_confirmation(Some(SubjectConfirmationData {
            address: Some("client.example".to_string()),
            ..Default::default()
        }));

        let result = validator
            .validate(&confirmation, &minimal_assertion(), &mut context)
            .unwrap();

        assert_eq!(result, ValidationResult::Invalid);
        assert!(context
            .validation_log
            .has_status(validation_codes::ADDRESS_MISMATCH));
    }
}

mod holder_of_key {
    use super::*;
    use crate::{
        model::{
            key_info_confirmation_data_type_name, KeyInfo, QName, SubjectConfirmation,
            METHOD_HOLDER_OF_KEY, SAML20_NS,
        },
        tests::fixtures::{ed25519_cert, ed25519_spki},
        validation::subject_confirmation::HolderOfKeySubjectConfirmationValidator,
    };

    fn hok_confirmation(key_infos: Vec<KeyInfo>, xsi_type: Option<QName>) -> SubjectConfirmation {
        SubjectConfirmation {
            method: METHOD_HOLDER_OF_KEY.to_string(),
            subject_confirmation_data: Some(SubjectConfirmationData {
                xsi_type,
                key_infos,
                ..Default::default()
            }),
        }
    }

    fn validate(
        confirmation: &SubjectConfirmation,
        static_params: StaticParameters,
    ) -> (ValidationResult, ValidationContext) {
        let validator = HolderOfKeySubjectConfirmationValidator::new();
        let mut context = ValidationContext::new(static_params);

        let result = validator
            .validate(confirmation, &minimal_assertion(), &mut context)
            .unwrap();

        (result, context)
    }

    #[test]
    fn presenter_key_matches_key_value() {
        let key = ed25519_spki([7u8; 32]);
        let confirmation = hok_confirmation(
            vec![KeyInfo {
                key_values: vec![key.clone()],
                ..Default::default()
            }],
            None,
        );

        let (result, context) = validate(
            &confirmation,
            StaticParameters {
                presenter_key: Some(key),
                ..Default::default()
            },
        );

        assert_eq!(result, ValidationResult::Valid);
        assert!(context.dynamic_params.confirmed_key_info.is_some());
    }

    #[test]
    fn presenter_key_matches_der_encoded_key_value() {
        let key = ed25519_spki([7u8; 32]);
        let confirmation = hok_confirmation(
            vec![KeyInfo {
                der_encoded_key_values: vec![key.clone()],
                ..Default::default()
            }],
            None,
        );

        let (result, _) = validate(
            &confirmation,
            StaticParameters {
                presenter_key: Some(key),
                ..Default::default()
            },
        );

        assert_eq!(result, ValidationResult::Valid);
    }

    #[test]
    fn presenter_certificate_matches_certificate_value() {
        let cert = ed25519_cert([9u8; 32]);
        let confirmation = hok_confirmation(
            vec![KeyInfo {
                x509_certificates: vec![cert.clone()],
                ..Default::default()
            }],
            None,
        );

        let (result, context) = validate(
            &confirmation,
            StaticParameters {
                presenter_cert: Some(cert),
                ..Default::default()
            },
        );

        assert_eq!(result, ValidationResult::Valid);
        assert!(context.dynamic_params.confirmed_key_info.is_some());
    }

    #[test]
    fn presenter_certificate_key_matches_key_value() {
        // cert supplied, but the assertion wraps only the bare key
        let confirmation = hok_confirmation(
            vec![KeyInfo {
                key_values: vec![ed25519_spki([9u8; 32])],
                ..Default::default()
            }],
            None,
        );

        let (result, _) = validate(
            &confirmation,
            StaticParameters {
                presenter_cert: Some(ed25519_cert([9u8; 32])),
                ..Default::default()
            },
        );

        assert_eq!(result, ValidationResult::Valid);
    }

    #[test]
    fn no_presenter_material_is_indeterminate() {
        let confirmation = hok_confirmation(
            vec![KeyInfo {
                key_values: vec![ed25519_spki([7u8; 32])],
                ..Default::default()
            }],
            None,
        );

        let (result, context) = validate(&confirmation, StaticParameters::default());

        assert_eq!(result, ValidationResult::Indeterminate);
        assert!(context
            .validation_log
            .has_status(validation_codes::HOK_PRESENTER_MISSING));
    }

    #[test]
    fn conflicting_presenter_key_and_certificate_is_indeterminate() {
        let confirmation = hok_confirmation(
            vec![KeyInfo {
                key_values: vec![ed25519_spki([7u8; 32])],
                ..Default::default()
            }],
            None,
        );

        let (result, context) = validate(
            &confirmation,
            StaticParameters {
                presenter_key: Some(ed25519_spki([7u8; 32])),
                presenter_cert: Some(ed25519_cert([9u8; 32])),
                ..Default::default()
            },
        );

        assert_eq!(result, ValidationResult::Indeterminate);
        assert!(context
            .validation_log
            .has_status(validation_codes::HOK_PRESENTER_CONFLICT));
    }

    #[test]
    fn unmatched_presenter_key_is_invalid() {
        let confirmation = hok_confirmation(
            vec![KeyInfo {
                key_values: vec![ed25519_spki([7u8; 32])],
                ..Default::default()
            }],
            None,
        );

        let (result, context) = validate(
            &confirmation,
            StaticParameters {
                presenter_key: Some(ed25519_spki([8u8; 32])),
                ..Default::default()
            },
        );

        assert_eq!(result, ValidationResult::Invalid);
        assert!(context
            .validation_log
            .has_status(validation_codes::HOK_NO_KEY_MATCH));
    }

    #[test]
    fn missing_key_infos_is_invalid() {
        let confirmation = hok_confirmation(vec![], None);

        let (result, context) = validate(
            &confirmation,
            StaticParameters {
                presenter_key: Some(ed25519_spki([7u8; 32])),
                ..Default::default()
            },
        );

        assert_eq!(result, ValidationResult::Invalid);
        assert!(context
            .validation_log
            .has_status(validation_codes::HOK_KEY_INFO_MISSING));
    }

    #[test]
    fn key_info_confirmation_data_type_is_accepted() {
        let key = ed25519_spki([7u8; 32]);
        let confirmation = hok_confirmation(
            vec![KeyInfo {
                key_values: vec![key.clone()],
                ..Default::default()
            }],
            Some(key_info_confirmation_data_type_name()),
        );

        let (result, _) = validate(
            &confirmation,
            StaticParameters {
                presenter_key: Some(key),
                ..Default::default()
            },
        );

        assert_eq!(result, ValidationResult::Valid);
    }

    #[test]
    fn other_confirmation_data_type_is_invalid() {
        let confirmation = hok_confirmation(
            vec![KeyInfo {
                key_values: vec![ed25519_spki([7u8; 32])],
                ..Default::default()
            }],
            Some(QName::new(SAML20_NS, "SubjectConfirmationDataType")),
        );

        let (result, context) = validate(
            &confirmation,
            StaticParameters {
                presenter_key: Some(ed25519_spki([7u8; 32])),
                ..Default::default()
            },
        );

        assert_eq!(result, ValidationResult::Invalid);
        assert!(context
            .validation_log
            .has_status(validation_codes::SUBJECT_CONFIRMATION_TYPE_MISMATCH));
    }

    #[test]
    fn unparseable_candidate_key_is_skipped() {
        let key = ed25519_spki([7u8; 32]);
        let confirmation = hok_confirmation(
            vec![KeyInfo {
                key_values: vec![vec![0xde, 0xad], key.clone()],
                ..Default::default()
            }],
            None,
        );

        let (result, _) = validate(
            &confirmation,
            StaticParameters {
                presenter_key: Some(key),
                ..Default::default()
            },
        );

        assert_eq!(result, ValidationResult::Valid);
    }
}

mod method_dispatch {
    use super::*;
    use crate::model::{SubjectConfirmation, METHOD_SENDER_VOUCHES};

    #[test]
    fn wrong_method_is_indeterminate() {
        let validator = BearerSubjectConfirmationValidator::new();
        let mut context = ValidationContext::default();

        let confirmation = SubjectConfirmation {
            method: METHOD_SENDER_VOUCHES.to_string(),
            subject_confirmation_data: None,
        };

        let result = validator
            .validate(&confirmation, &minimal_assertion(), &mut context)
            .unwrap();

        assert_eq!(result, ValidationResult::Indeterminate);
        assert!(context
            .validation_log
            .has_status(validation_codes::SUBJECT_CONFIRMATION_TYPE_MISMATCH));
    }
}

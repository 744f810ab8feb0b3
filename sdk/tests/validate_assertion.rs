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

//! End-to-end run of the public validation API against a bearer-confirmed,
//! audience-restricted assertion.

use chrono::{DateTime, Duration, Utc};
use saml2::{
    model::{
        AudienceRestriction, Condition, Conditions, Subject, SubjectConfirmation,
        SubjectConfirmationData, METHOD_BEARER,
    },
    validation::{
        InMemoryReplayCache, Saml20AssertionValidator, StaticParameters, ValidationContext,
        ValidationResult,
    },
    Assertion,
};
use saml_status_tracker::validation_codes;

const AUDIENCE: &str = "https://sp.example";
const RECIPIENT: &str = "https://sp.example/acs";

fn bearer_assertion(issued_at: DateTime<Utc>) -> Assertion {
    Assertion {
        id: Some("_e5c01b2f".to_string()),
        issue_instant: Some(issued_at),
        issuer: Some("https://idp.example".to_string()),
        subject: Some(Subject {
            name_id: Some("jdoe".to_string()),
            subject_confirmations: vec![SubjectConfirmation {
                method: METHOD_BEARER.to_string(),
                subject_confirmation_data: Some(SubjectConfirmationData {
                    not_on_or_after: Some(issued_at + Duration::minutes(5)),
                    recipient: Some(RECIPIENT.to_string()),
                    ..Default::default()
                }),
            }],
        }),
        conditions: Some(Conditions {
            conditions: vec![Condition::AudienceRestriction(AudienceRestriction {
                audiences: vec![AUDIENCE.to_string()],
            })],
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn strict_params() -> StaticParameters {
    StaticParameters {
        valid_audiences: Some([AUDIENCE.to_string()].into()),
        valid_recipients: Some([RECIPIENT.to_string()].into()),
        clock_skew: Some(Duration::zero()),
        lifetime: Some(Duration::minutes(10)),
        ..Default::default()
    }
}

#[test]
fn assertion_inside_its_window_is_valid() {
    let validator =
        Saml20AssertionValidator::with_default_validators(Box::new(InMemoryReplayCache::new()));

    let assertion = bearer_assertion(Utc::now() - Duration::minutes(1));
    let mut context = ValidationContext::new(strict_params());

    let result = validator.validate(&assertion, &mut context).unwrap();

    assert_eq!(result, ValidationResult::Valid);
    assert!(context
        .validation_log
        .has_status(validation_codes::ASSERTION_VALIDATED));
    assert!(context
        .dynamic_params
        .confirmed_subject_confirmation
        .is_some());
}

#[test]
fn assertion_past_its_confirmation_window_is_invalid() {
    let validator =
        Saml20AssertionValidator::with_default_validators(Box::new(InMemoryReplayCache::new()));

    // NotOnOrAfter lands one minute in the past; with zero skew the bearer
    // confirmation can no longer be confirmed.
    let assertion = bearer_assertion(Utc::now() - Duration::minutes(6));
    let mut context = ValidationContext::new(strict_params());

    let result = validator.validate(&assertion, &mut context).unwrap();

    assert_eq!(result, ValidationResult::Invalid);
    assert!(context
        .validation_log
        .has_status(validation_codes::SUBJECT_CONFIRMATION_EXPIRED));
    assert!(context
        .validation_log
        .has_status(validation_codes::SUBJECT_CONFIRMATION_NONE_CONFIRMED));
    assert!(context
        .dynamic_params
        .confirmed_subject_confirmation
        .is_none());
}

#[test]
fn replayed_one_time_use_assertion_is_rejected_on_second_presentation() {
    let validator =
        Saml20AssertionValidator::with_default_validators(Box::new(InMemoryReplayCache::new()));

    let mut assertion = bearer_assertion(Utc::now() - Duration::minutes(1));
    if let Some(conditions) = assertion.conditions.as_mut() {
        conditions.conditions.push(Condition::OneTimeUse);
    }

    let mut context = ValidationContext::new(strict_params());
    assert_eq!(
        validator.validate(&assertion, &mut context).unwrap(),
        ValidationResult::Valid
    );

    let mut context = ValidationContext::new(strict_params());
    assert_eq!(
        validator.validate(&assertion, &mut context).unwrap(),
        ValidationResult::Invalid
    );
    assert!(context
        .validation_log
        .has_status(validation_codes::CONDITION_ONE_TIME_USE_REPLAYED));
}

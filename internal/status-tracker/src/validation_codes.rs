// Copyright 2022 Adobe. All rights reserved.
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

//! Stable status codes attached to validation log items for each check the
//! assertion validation engine performs.
//!
//! Codes are stable identifiers: match on these rather than on the
//! human-readable description of a log item.

// -- success codes --

/// The assertion passed all registered validation checks.
pub const ASSERTION_VALIDATED: &str = "assertion.validated";

/// A subject confirmation method was successfully confirmed.
pub const SUBJECT_CONFIRMATION_CONFIRMED: &str = "subjectConfirmation.confirmed";

// -- failure codes: assertion basic data --

/// The assertion was not a SAML 2.0 assertion.
pub const ASSERTION_VERSION_INVALID: &str = "assertion.version.invalid";

/// The assertion did not carry the required IssueInstant.
pub const ASSERTION_ISSUE_INSTANT_MISSING: &str = "assertion.issueInstant.missing";

/// The assertion's IssueInstant was later than the skew-adjusted current time.
pub const ASSERTION_ISSUE_INSTANT_IN_FUTURE: &str = "assertion.issueInstant.inFuture";

/// The assertion's IssueInstant plus the configured lifetime has passed.
pub const ASSERTION_ISSUE_INSTANT_EXPIRED: &str = "assertion.issueInstant.expired";

/// The assertion did not carry the required Issuer.
pub const ASSERTION_ISSUER_MISSING: &str = "assertion.issuer.missing";

/// The assertion's Issuer did not match any configured valid issuer.
pub const ASSERTION_ISSUER_UNTRUSTED: &str = "assertion.issuer.untrusted";

// -- failure codes: conditions --

/// A condition named as required by policy was absent from the assertion.
pub const CONDITIONS_REQUIRED_MISSING: &str = "conditions.required.missing";

/// The Conditions element's NotBefore lies in the future.
pub const CONDITIONS_NOT_YET_VALID: &str = "conditions.notYetValid";

/// The Conditions element's NotOnOrAfter has passed.
pub const CONDITIONS_EXPIRED: &str = "conditions.expired";

/// No validator was registered for a condition present in the assertion.
pub const CONDITION_UNKNOWN: &str = "condition.unknown";

/// A condition was dispatched to a validator that does not service its type.
pub const CONDITION_TYPE_MISMATCH: &str = "condition.typeMismatch";

/// The audience restriction carried no audience values.
pub const CONDITION_AUDIENCE_MISSING: &str = "condition.audience.missing";

/// No audience in the restriction matched the configured valid audiences.
pub const CONDITION_AUDIENCE_MISMATCH: &str = "condition.audience.mismatch";

/// The set of valid audiences was absent or empty; policy cannot be evaluated.
pub const CONDITION_AUDIENCE_INDETERMINATE: &str = "condition.audience.indeterminate";

/// The assertion carries a one-time-use condition and has been seen before.
pub const CONDITION_ONE_TIME_USE_REPLAYED: &str = "condition.oneTimeUse.replayed";

/// The replay cache could not be consulted.
pub const CONDITION_ONE_TIME_USE_CACHE_ERROR: &str = "condition.oneTimeUse.cacheError";

// -- failure codes: subject confirmation --

/// No subject confirmation method in the assertion could be confirmed.
pub const SUBJECT_CONFIRMATION_NONE_CONFIRMED: &str = "subjectConfirmation.noneConfirmed";

/// Subject confirmation data was absent but one of its fields was required.
pub const SUBJECT_CONFIRMATION_DATA_MISSING: &str = "subjectConfirmation.data.missing";

/// The confirmation data's NotBefore lies in the future.
pub const SUBJECT_CONFIRMATION_NOT_YET_VALID: &str = "subjectConfirmation.notYetValid";

/// The confirmation data's NotOnOrAfter has passed.
pub const SUBJECT_CONFIRMATION_EXPIRED: &str = "subjectConfirmation.expired";

/// A required confirmation data field was absent.
pub const SUBJECT_CONFIRMATION_FIELD_REQUIRED: &str = "subjectConfirmation.field.required";

/// The confirmation data's Recipient did not match any valid recipient.
pub const SUBJECT_CONFIRMATION_RECIPIENT_MISMATCH: &str = "subjectConfirmation.recipient.mismatch";

/// The set of valid recipients was absent or empty; policy cannot be
/// evaluated.
pub const SUBJECT_CONFIRMATION_RECIPIENT_INDETERMINATE: &str =
    "subjectConfirmation.recipient.indeterminate";

/// The confirmation data's InResponseTo did not match the expected value.
pub const SUBJECT_CONFIRMATION_IN_RESPONSE_TO_MISMATCH: &str =
    "subjectConfirmation.inResponseTo.mismatch";

/// The confirmation data's xsi:type was not valid for the method.
pub const SUBJECT_CONFIRMATION_TYPE_MISMATCH: &str = "subjectConfirmation.typeMismatch";

/// Holder-of-key confirmation data carried no KeyInfo children.
pub const HOK_KEY_INFO_MISSING: &str = "subjectConfirmation.hok.keyInfo.missing";

/// Neither a presenter key nor a presenter certificate was supplied.
pub const HOK_PRESENTER_MISSING: &str = "subjectConfirmation.hok.presenter.missing";

/// The supplied presenter key and certificate disagree with each other.
pub const HOK_PRESENTER_CONFLICT: &str = "subjectConfirmation.hok.presenter.conflict";

/// No KeyInfo in the confirmation data matched the presenter's key material.
pub const HOK_NO_KEY_MATCH: &str = "subjectConfirmation.hok.noMatch";

// -- failure codes: statements --

/// No validator was registered for a statement present in the assertion.
pub const STATEMENT_UNKNOWN: &str = "statement.unknown";

/// A statement was dispatched to a validator that does not service its type.
pub const STATEMENT_TYPE_MISMATCH: &str = "statement.typeMismatch";

/// The authentication statement did not carry the required AuthnInstant.
pub const STATEMENT_AUTHN_INSTANT_MISSING: &str = "statement.authnInstant.missing";

/// Too much time has passed since the authentication instant.
pub const STATEMENT_AUTHN_INSTANT_EXPIRED: &str = "statement.authnInstant.expired";

/// An internal error interrupted the evaluation of a statement.
pub const STATEMENT_EVALUATION_ERROR: &str = "statement.evaluationError";

// -- failure codes: address checks --

/// A textual address could not be resolved to any network address.
pub const ADDRESS_UNRESOLVABLE: &str = "address.unresolvable";

/// The set of permitted addresses was absent or empty; policy cannot be
/// evaluated.
pub const ADDRESS_SET_MISSING: &str = "address.setMissing";

/// No resolved address was a member of the permitted address set.
pub const ADDRESS_MISMATCH: &str = "address.mismatch";

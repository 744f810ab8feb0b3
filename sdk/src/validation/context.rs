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

use std::{collections::HashSet, net::IpAddr};

use chrono::Duration;
use saml_status_tracker::StatusTracker;

use crate::model::{KeyInfo, QName, SubjectConfirmation};

/// Default clock skew applied to all time-window checks.
pub fn default_clock_skew() -> Duration {
    Duration::minutes(5)
}

/// Default assertion lifetime measured from IssueInstant.
pub fn default_lifetime() -> Duration {
    Duration::minutes(5)
}

/// Per-run state for one validation attempt.
///
/// Create one per assertion to validate, pass it by reference through
/// [`Saml20AssertionValidator::validate`], then inspect its
/// [`validation_log`] and [`dynamic_params`] once the call returns.
///
/// [`Saml20AssertionValidator::validate`]:
///     crate::validation::Saml20AssertionValidator::validate
/// [`validation_log`]: Self::validation_log
/// [`dynamic_params`]: Self::dynamic_params
#[derive(Debug, Default)]
pub struct ValidationContext {
    /// Caller-supplied policy inputs. Read-only for the duration of the run.
    pub static_params: StaticParameters,

    /// Outputs written during validation.
    pub dynamic_params: DynamicParameters,

    /// Ordered, append-only log of validation outcomes across all checks
    /// performed, regardless of short-circuiting.
    pub validation_log: StatusTracker,
}

impl ValidationContext {
    /// Creates a context for one validation run with the given policy
    /// inputs.
    pub fn new(static_params: StaticParameters) -> Self {
        ValidationContext {
            static_params,
            dynamic_params: DynamicParameters::default(),
            validation_log: StatusTracker::default(),
        }
    }
}

/// Caller-supplied policy inputs for one validation run.
///
/// Each field's doc comment names the documented validation parameter it
/// corresponds to (see [`params`](crate::validation::params)); those names
/// appear as log-item labels.
#[derive(Debug)]
pub struct StaticParameters {
    /// Clock skew tolerance ([`params::CLOCK_SKEW`]).
    ///
    /// Applied asymmetrically: added to "now" for lower-bound checks,
    /// subtracted for upper-bound checks. Absent falls back to the 5-minute
    /// default; a negative value is used by absolute value.
    ///
    /// [`params::CLOCK_SKEW`]: crate::validation::params::CLOCK_SKEW
    pub clock_skew: Option<Duration>,

    /// Assertion lifetime from IssueInstant ([`params::LIFETIME`]). Same
    /// absent/negative normalization as `clock_skew`.
    ///
    /// [`params::LIFETIME`]: crate::validation::params::LIFETIME
    pub lifetime: Option<Duration>,

    /// Trusted issuer values ([`params::VALID_ISSUERS`]). When absent, the
    /// issuer check is skipped.
    ///
    /// [`params::VALID_ISSUERS`]: crate::validation::params::VALID_ISSUERS
    pub valid_issuers: Option<HashSet<String>>,

    /// Condition types that must be present
    /// ([`params::COND_REQUIRED_CONDITIONS`]).
    ///
    /// [`params::COND_REQUIRED_CONDITIONS`]:
    ///     crate::validation::params::COND_REQUIRED_CONDITIONS
    pub required_conditions: Option<HashSet<QName>>,

    /// Audience URIs the relying party answers to
    /// ([`params::COND_VALID_AUDIENCES`]).
    ///
    /// [`params::COND_VALID_AUDIENCES`]:
    ///     crate::validation::params::COND_VALID_AUDIENCES
    pub valid_audiences: Option<HashSet<String>>,

    /// Per-run override of the one-time-use replay entry lifetime
    /// ([`params::COND_ONE_TIME_USE_EXPIRES`]). Absent or zero falls back to
    /// the validator's configured default; a negative value does too, with a
    /// warning.
    ///
    /// [`params::COND_ONE_TIME_USE_EXPIRES`]:
    ///     crate::validation::params::COND_ONE_TIME_USE_EXPIRES
    pub one_time_use_expires: Option<Duration>,

    /// Whether confirmation data must carry NotBefore
    /// ([`params::SC_NOT_BEFORE_REQUIRED`]).
    ///
    /// [`params::SC_NOT_BEFORE_REQUIRED`]:
    ///     crate::validation::params::SC_NOT_BEFORE_REQUIRED
    pub not_before_required: bool,

    /// Whether confirmation data must carry NotOnOrAfter
    /// ([`params::SC_NOT_ON_OR_AFTER_REQUIRED`]).
    ///
    /// [`params::SC_NOT_ON_OR_AFTER_REQUIRED`]:
    ///     crate::validation::params::SC_NOT_ON_OR_AFTER_REQUIRED
    pub not_on_or_after_required: bool,

    /// Whether confirmation data must carry Recipient
    /// ([`params::SC_RECIPIENT_REQUIRED`]).
    ///
    /// [`params::SC_RECIPIENT_REQUIRED`]:
    ///     crate::validation::params::SC_RECIPIENT_REQUIRED
    pub recipient_required: bool,

    /// Valid confirmation recipient endpoints
    /// ([`params::SC_VALID_RECIPIENTS`]).
    ///
    /// [`params::SC_VALID_RECIPIENTS`]:
    ///     crate::validation::params::SC_VALID_RECIPIENTS
    pub valid_recipients: Option<HashSet<String>>,

    /// Whether confirmation data must carry Address
    /// ([`params::SC_ADDRESS_REQUIRED`]).
    ///
    /// [`params::SC_ADDRESS_REQUIRED`]:
    ///     crate::validation::params::SC_ADDRESS_REQUIRED
    pub address_required: bool,

    /// Whether the confirmation data Address is checked at all
    /// ([`params::SC_CHECK_ADDRESS`]). Defaults to `true`.
    ///
    /// [`params::SC_CHECK_ADDRESS`]:
    ///     crate::validation::params::SC_CHECK_ADDRESS
    pub check_address: bool,

    /// Network addresses the presenter may confirm from
    /// ([`params::SC_VALID_ADDRESSES`]).
    ///
    /// [`params::SC_VALID_ADDRESSES`]:
    ///     crate::validation::params::SC_VALID_ADDRESSES
    pub valid_addresses: Option<HashSet<IpAddr>>,

    /// Whether confirmation data must carry InResponseTo
    /// ([`params::SC_IN_RESPONSE_TO_REQUIRED`]).
    ///
    /// [`params::SC_IN_RESPONSE_TO_REQUIRED`]:
    ///     crate::validation::params::SC_IN_RESPONSE_TO_REQUIRED
    pub in_response_to_required: bool,

    /// Skips the InResponseTo check entirely when `true`.
    pub ignore_in_response_to: bool,

    /// The single request ID a confirmation InResponseTo must equal
    /// ([`params::SC_VALID_IN_RESPONSE_TO`]).
    ///
    /// [`params::SC_VALID_IN_RESPONSE_TO`]:
    ///     crate::validation::params::SC_VALID_IN_RESPONSE_TO
    pub valid_in_response_to: Option<String>,

    /// The presenter's public key as DER-encoded SubjectPublicKeyInfo
    /// ([`params::SC_HOK_PRESENTER_KEY`]).
    ///
    /// [`params::SC_HOK_PRESENTER_KEY`]:
    ///     crate::validation::params::SC_HOK_PRESENTER_KEY
    pub presenter_key: Option<Vec<u8>>,

    /// The presenter's certificate as DER-encoded X.509
    /// ([`params::SC_HOK_PRESENTER_CERT`]).
    ///
    /// [`params::SC_HOK_PRESENTER_CERT`]:
    ///     crate::validation::params::SC_HOK_PRESENTER_CERT
    pub presenter_cert: Option<Vec<u8>>,

    /// Whether the AuthnStatement SubjectLocality address is checked
    /// ([`params::STMT_AUTHN_CHECK_ADDRESS`]). Defaults to `true`.
    ///
    /// [`params::STMT_AUTHN_CHECK_ADDRESS`]:
    ///     crate::validation::params::STMT_AUTHN_CHECK_ADDRESS
    pub authn_check_address: bool,

    /// Network addresses the subject may have authenticated from
    /// ([`params::STMT_AUTHN_VALID_ADDRESSES`]).
    ///
    /// [`params::STMT_AUTHN_VALID_ADDRESSES`]:
    ///     crate::validation::params::STMT_AUTHN_VALID_ADDRESSES
    pub authn_valid_addresses: Option<HashSet<IpAddr>>,

    /// Maximum age of the authentication event
    /// ([`params::STMT_AUTHN_MAX_TIME`]). When configured, AuthnInstant
    /// becomes required.
    ///
    /// [`params::STMT_AUTHN_MAX_TIME`]:
    ///     crate::validation::params::STMT_AUTHN_MAX_TIME
    pub max_time_since_authn: Option<Duration>,

    /// When `true` (the default), a condition with no registered validator
    /// makes the run `Indeterminate`; when `false` it is logged and skipped.
    pub unknown_condition_fatal: bool,

    /// When `true`, a statement with no registered validator makes the run
    /// `Indeterminate`; when `false` (the default) it is logged and skipped.
    pub unknown_statement_fatal: bool,
}

impl StaticParameters {
    /// Clock skew with absent/negative normalization applied.
    pub fn effective_clock_skew(&self) -> Duration {
        self.clock_skew
            .map(|skew| skew.abs())
            .unwrap_or_else(default_clock_skew)
    }

    /// Lifetime with absent/negative normalization applied.
    pub fn effective_lifetime(&self) -> Duration {
        self.lifetime
            .map(|lifetime| lifetime.abs())
            .unwrap_or_else(default_lifetime)
    }
}

impl Default for StaticParameters {
    fn default() -> Self {
        StaticParameters {
            clock_skew: None,
            lifetime: None,
            valid_issuers: None,
            required_conditions: None,
            valid_audiences: None,
            one_time_use_expires: None,
            not_before_required: false,
            not_on_or_after_required: false,
            recipient_required: false,
            valid_recipients: None,
            address_required: false,
            check_address: true,
            valid_addresses: None,
            in_response_to_required: false,
            ignore_in_response_to: false,
            valid_in_response_to: None,
            presenter_key: None,
            presenter_cert: None,
            authn_check_address: true,
            authn_valid_addresses: None,
            max_time_since_authn: None,
            unknown_condition_fatal: true,
            unknown_statement_fatal: false,
        }
    }
}

/// Outputs written during a validation run.
#[derive(Debug, Default)]
pub struct DynamicParameters {
    /// The subject confirmation that was successfully confirmed
    /// ([`params::CONFIRMED_SUBJECT_CONFIRMATION`]).
    ///
    /// [`params::CONFIRMED_SUBJECT_CONFIRMATION`]:
    ///     crate::validation::params::CONFIRMED_SUBJECT_CONFIRMATION
    pub confirmed_subject_confirmation: Option<SubjectConfirmation>,

    /// The KeyInfo that matched the presenter's key material during
    /// holder-of-key confirmation ([`params::SC_HOK_CONFIRMED_KEYINFO`]).
    ///
    /// [`params::SC_HOK_CONFIRMED_KEYINFO`]:
    ///     crate::validation::params::SC_HOK_CONFIRMED_KEYINFO
    pub confirmed_key_info: Option<KeyInfo>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn absent_skew_falls_back_to_default() {
        let params = StaticParameters::default();
        assert_eq!(params.effective_clock_skew(), Duration::minutes(5));
        assert_eq!(params.effective_lifetime(), Duration::minutes(5));
    }

    #[test]
    fn negative_skew_is_used_by_absolute_value() {
        let params = StaticParameters {
            clock_skew: Some(Duration::seconds(-30)),
            lifetime: Some(Duration::minutes(-10)),
            ..Default::default()
        };
        assert_eq!(params.effective_clock_skew(), Duration::seconds(30));
        assert_eq!(params.effective_lifetime(), Duration::minutes(10));
    }

    #[test]
    fn configured_skew_is_used_as_is() {
        let params = StaticParameters {
            clock_skew: Some(Duration::zero()),
            ..Default::default()
        };
        assert_eq!(params.effective_clock_skew(), Duration::zero());
    }
}

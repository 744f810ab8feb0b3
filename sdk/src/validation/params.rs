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

//! Documented validation parameter names.
//!
//! Policy inputs are carried in the strongly-typed
//! [`StaticParameters`](crate::validation::StaticParameters) struct, but the
//! names established by existing SAML deployments remain the external
//! contract surface: they appear as the labels of validation log items so
//! that operators can correlate a failure with the parameter that governs
//! it.

/// Clock skew applied to all time-window checks.
pub const CLOCK_SKEW: &str = "saml2.ClockSkew";

/// Assertion lifetime measured from IssueInstant.
pub const LIFETIME: &str = "saml2.Lifetime";

/// Set of issuer values the relying party trusts.
pub const VALID_ISSUERS: &str = "saml2.ValidIssuers";

/// Dynamic output: the subject confirmation that was successfully confirmed.
pub const CONFIRMED_SUBJECT_CONFIRMATION: &str = "saml2.ConfirmedSubjectConfirmation";

/// Condition types that must be present in the assertion.
pub const COND_REQUIRED_CONDITIONS: &str = "saml2.Conditions.RequiredConditions";

/// Set of audience URIs the relying party answers to.
pub const COND_VALID_AUDIENCES: &str = "saml2.Conditions.ValidAudiences";

/// Per-run override of the one-time-use replay entry lifetime.
pub const COND_ONE_TIME_USE_EXPIRES: &str = "saml2.Conditions.OneTimeUseExpires";

/// Whether subject confirmation data must carry NotBefore.
pub const SC_NOT_BEFORE_REQUIRED: &str = "saml2.SubjectConfirmation.NotBeforeRequired";

/// Whether subject confirmation data must carry NotOnOrAfter.
pub const SC_NOT_ON_OR_AFTER_REQUIRED: &str = "saml2.SubjectConfirmation.NotOnOrAfterRequired";

/// Whether subject confirmation data must carry Recipient.
pub const SC_RECIPIENT_REQUIRED: &str = "saml2.SubjectConfirmation.RecipientRequired";

/// Set of endpoint URIs that are valid confirmation recipients.
pub const SC_VALID_RECIPIENTS: &str = "saml2.SubjectConfirmation.ValidRecipients";

/// Whether subject confirmation data must carry Address.
pub const SC_ADDRESS_REQUIRED: &str = "saml2.SubjectConfirmation.AddressRequired";

/// Whether the confirmation data Address is checked at all.
pub const SC_CHECK_ADDRESS: &str = "saml2.SubjectConfirmation.CheckAddress";

/// Set of network addresses the presenter may confirm from.
pub const SC_VALID_ADDRESSES: &str = "saml2.SubjectConfirmation.ValidAddresses";

/// Whether subject confirmation data must carry InResponseTo.
pub const SC_IN_RESPONSE_TO_REQUIRED: &str = "saml2.SubjectConfirmation.InResponseToRequired";

/// The single request ID a confirmation InResponseTo must equal.
pub const SC_VALID_IN_RESPONSE_TO: &str = "saml2.SubjectConfirmation.ValidInResponseTo";

/// The presenter's public key (DER-encoded SubjectPublicKeyInfo).
pub const SC_HOK_PRESENTER_KEY: &str = "saml2.SubjectConfirmation.HoK.PresenterKey";

/// The presenter's certificate (DER-encoded X.509).
pub const SC_HOK_PRESENTER_CERT: &str = "saml2.SubjectConfirmation.HoK.PresenterCertificate";

/// Dynamic output: the KeyInfo that matched the presenter's key material.
pub const SC_HOK_CONFIRMED_KEYINFO: &str = "saml2.SubjectConfirmation.HoK.ConfirmedKeyInfo";

/// Whether the authentication statement SubjectLocality address is checked.
pub const STMT_AUTHN_CHECK_ADDRESS: &str = "saml2.Statement.Authn.SubjectLocality.CheckAddress";

/// Set of network addresses the subject may have authenticated from.
pub const STMT_AUTHN_VALID_ADDRESSES: &str = "saml2.Statement.Authn.SubjectLocality.ValidAddresses";

/// Maximum age of the authentication event described by an AuthnStatement.
pub const STMT_AUTHN_MAX_TIME: &str = "saml2.Statement.Authn.MaxTimeSinceAuthn";

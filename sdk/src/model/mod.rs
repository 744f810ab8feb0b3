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

//! Read-only SAML 2.0 assertion object model consumed by the validation
//! engine.
//!
//! These types are the output of an out-of-scope unmarshalling layer. The
//! engine never mutates them.

mod assertion;
mod conditions;
mod key_info;
mod qname;
mod statement;
mod subject;

pub use assertion::{Assertion, SamlVersion};
pub use conditions::{AudienceRestriction, Condition, Conditions, ProxyRestriction};
pub use key_info::KeyInfo;
pub use qname::QName;
pub use statement::{AuthnStatement, Statement, SubjectLocality};
pub use subject::{Subject, SubjectConfirmation, SubjectConfirmationData};

/// XML namespace URI of the SAML 2.0 assertion schema.
pub const SAML20_NS: &str = "urn:oasis:names:tc:SAML:2.0:assertion";

/// Subject confirmation method URI for bearer confirmation.
pub const METHOD_BEARER: &str = "urn:oasis:names:tc:SAML:2.0:cm:bearer";

/// Subject confirmation method URI for holder-of-key confirmation.
pub const METHOD_HOLDER_OF_KEY: &str = "urn:oasis:names:tc:SAML:2.0:cm:holder-of-key";

/// Subject confirmation method URI for sender-vouches confirmation.
pub const METHOD_SENDER_VOUCHES: &str = "urn:oasis:names:tc:SAML:2.0:cm:sender-vouches";

/// Qualified name of the `AudienceRestriction` condition element.
pub fn audience_restriction_name() -> QName {
    QName::new(SAML20_NS, "AudienceRestriction")
}

/// Qualified name of the `OneTimeUse` condition element.
pub fn one_time_use_name() -> QName {
    QName::new(SAML20_NS, "OneTimeUse")
}

/// Qualified name of the `ProxyRestriction` condition element.
pub fn proxy_restriction_name() -> QName {
    QName::new(SAML20_NS, "ProxyRestriction")
}

/// Qualified name of the `AuthnStatement` element.
pub fn authn_statement_name() -> QName {
    QName::new(SAML20_NS, "AuthnStatement")
}

/// Qualified schema type name of `KeyInfoConfirmationDataType`.
pub fn key_info_confirmation_data_type_name() -> QName {
    QName::new(SAML20_NS, "KeyInfoConfirmationDataType")
}

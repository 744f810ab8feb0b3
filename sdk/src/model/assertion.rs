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

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{Conditions, Statement, Subject};

/// SAML version of an assertion.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum SamlVersion {
    /// SAML 1.0.
    #[serde(rename = "1.0")]
    V1_0,

    /// SAML 1.1.
    #[serde(rename = "1.1")]
    V1_1,

    /// SAML 2.0.
    #[serde(rename = "2.0")]
    V2_0,
}

impl Default for SamlVersion {
    fn default() -> Self {
        Self::V2_0
    }
}

/// A SAML 2.0 `Assertion`: a signed statement binding a subject, a validity
/// window, an audience, and authentication/attribute facts.
///
/// The validation engine consumes this tree read-only.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Assertion {
    /// The assertion's `ID` attribute.
    pub id: Option<String>,

    /// The assertion's `Version` attribute.
    pub version: SamlVersion,

    /// The assertion's `IssueInstant` attribute.
    pub issue_instant: Option<DateTime<Utc>>,

    /// Value of the assertion's `Issuer` element.
    pub issuer: Option<String>,

    /// The assertion's `Subject` element.
    pub subject: Option<Subject>,

    /// The assertion's `Conditions` element.
    pub conditions: Option<Conditions>,

    /// The assertion's statements, in document order.
    pub statements: Vec<Statement>,
}

impl Assertion {
    /// Returns the assertion `ID`, or `"(unknown)"` if absent, for use in
    /// diagnostic messages.
    pub fn id_for_logging(&self) -> &str {
        self.id.as_deref().unwrap_or("(unknown)")
    }
}

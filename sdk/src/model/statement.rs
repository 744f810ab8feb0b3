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

use crate::model::{authn_statement_name, QName};

/// A statement within an assertion.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Statement {
    /// An `AuthnStatement`.
    Authn(AuthnStatement),

    /// A statement of a type this crate does not model, identified by its
    /// qualified element (or schema type) name.
    Other(QName),
}

impl Statement {
    /// Returns the qualified element name that declares this statement's
    /// type.
    pub fn element_name(&self) -> QName {
        match self {
            Statement::Authn(_) => authn_statement_name(),
            Statement::Other(name) => name.clone(),
        }
    }
}

/// An `AuthnStatement`: a record of an authentication act performed for the
/// assertion's subject.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct AuthnStatement {
    /// The statement's `AuthnInstant` attribute.
    pub authn_instant: Option<DateTime<Utc>>,

    /// The statement's `SessionIndex` attribute.
    pub session_index: Option<String>,

    /// The statement's `SessionNotOnOrAfter` attribute.
    pub session_not_on_or_after: Option<DateTime<Utc>>,

    /// The statement's `SubjectLocality` child.
    pub subject_locality: Option<SubjectLocality>,

    /// Value of the `AuthnContextClassRef` within the statement's
    /// `AuthnContext`, if present.
    pub authn_context_class_ref: Option<String>,
}

/// A `SubjectLocality` element: where the subject authenticated from.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct SubjectLocality {
    /// The element's `Address` attribute.
    pub address: Option<String>,

    /// The element's `DNSName` attribute.
    pub dns_name: Option<String>,
}

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

use crate::model::{
    audience_restriction_name, one_time_use_name, proxy_restriction_name, QName,
};

/// The `Conditions` element of an assertion: constraints on the assertion's
/// usability.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Conditions {
    /// The element's `NotBefore` attribute.
    pub not_before: Option<DateTime<Utc>>,

    /// The element's `NotOnOrAfter` attribute.
    pub not_on_or_after: Option<DateTime<Utc>>,

    /// Individual condition children, in document order.
    pub conditions: Vec<Condition>,
}

/// A single condition within an assertion's `Conditions` element.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Condition {
    /// An `AudienceRestriction` condition.
    AudienceRestriction(AudienceRestriction),

    /// A `OneTimeUse` condition.
    OneTimeUse,

    /// A `ProxyRestriction` condition.
    ProxyRestriction(ProxyRestriction),

    /// A condition of a type this crate does not model, identified by its
    /// qualified element (or schema type) name.
    Other(QName),
}

impl Condition {
    /// Returns the qualified element name that declares this condition's
    /// type.
    pub fn element_name(&self) -> QName {
        match self {
            Condition::AudienceRestriction(_) => audience_restriction_name(),
            Condition::OneTimeUse => one_time_use_name(),
            Condition::ProxyRestriction(_) => proxy_restriction_name(),
            Condition::Other(name) => name.clone(),
        }
    }
}

/// An `AudienceRestriction` condition: the assertion is addressed to one or
/// more specific audiences.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct AudienceRestriction {
    /// `Audience` URI values carried by the restriction.
    pub audiences: Vec<String>,
}

/// A `ProxyRestriction` condition: limitations on how the assertion may be
/// re-asserted by intermediaries.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ProxyRestriction {
    /// Maximum number of indirections permitted.
    pub count: Option<u32>,

    /// Audiences to which resulting assertions may be addressed.
    pub audiences: Vec<String>,
}

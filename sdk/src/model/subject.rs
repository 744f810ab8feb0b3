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

use crate::model::{KeyInfo, QName};

/// The `Subject` element of an assertion.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Subject {
    /// Value of the subject's `NameID` element, if present.
    pub name_id: Option<String>,

    /// `SubjectConfirmation` children, in document order.
    pub subject_confirmations: Vec<SubjectConfirmation>,
}

/// A `SubjectConfirmation` element: one means by which a relying party may
/// confirm the assertion's subject.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct SubjectConfirmation {
    /// The confirmation's `Method` attribute (a URI).
    pub method: String,

    /// The confirmation's `SubjectConfirmationData` child.
    pub subject_confirmation_data: Option<SubjectConfirmationData>,
}

/// A `SubjectConfirmationData` element.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct SubjectConfirmationData {
    /// The element's declared `xsi:type`, if any. Holder-of-key confirmations
    /// carry `KeyInfoConfirmationDataType` here.
    pub xsi_type: Option<QName>,

    /// The element's `NotBefore` attribute.
    pub not_before: Option<DateTime<Utc>>,

    /// The element's `NotOnOrAfter` attribute.
    pub not_on_or_after: Option<DateTime<Utc>>,

    /// The element's `Recipient` attribute.
    pub recipient: Option<String>,

    /// The element's `Address` attribute.
    pub address: Option<String>,

    /// The element's `InResponseTo` attribute.
    pub in_response_to: Option<String>,

    /// `KeyInfo` children, in document order. Only meaningful for
    /// holder-of-key confirmations.
    pub key_infos: Vec<KeyInfo>,
}

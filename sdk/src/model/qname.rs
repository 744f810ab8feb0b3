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

use std::{
    borrow::Cow,
    fmt::{self, Display, Formatter},
};

use serde::{Deserialize, Serialize};

/// A qualified XML element or schema type name.
///
/// Used as the registry key for dispatching conditions and statements to the
/// validator that services them.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct QName {
    /// Namespace URI of the name.
    pub namespace_uri: Cow<'static, str>,

    /// Local part of the name.
    pub local_name: Cow<'static, str>,
}

impl QName {
    /// Creates a new `QName` from a namespace URI and a local name.
    pub fn new(
        namespace_uri: impl Into<Cow<'static, str>>,
        local_name: impl Into<Cow<'static, str>>,
    ) -> Self {
        QName {
            namespace_uri: namespace_uri.into(),
            local_name: local_name.into(),
        }
    }
}

impl Display for QName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}{}", self.namespace_uri, self.local_name)
    }
}

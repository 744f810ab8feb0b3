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

use serde::{Deserialize, Serialize};

/// A `ds:KeyInfo` element carried inside holder-of-key subject confirmation
/// data.
///
/// All key material is kept as DER byte strings. The validation engine only
/// compares values; it never performs cryptographic operations with them.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct KeyInfo {
    /// Public keys carried as `KeyValue` children, each already converted to
    /// DER-encoded `SubjectPublicKeyInfo` form.
    pub key_values: Vec<Vec<u8>>,

    /// Public keys carried as `DEREncodedKeyValue` children (DER-encoded
    /// `SubjectPublicKeyInfo`).
    pub der_encoded_key_values: Vec<Vec<u8>>,

    /// Certificates carried as `X509Data/X509Certificate` children
    /// (DER-encoded X.509).
    pub x509_certificates: Vec<Vec<u8>>,
}

impl KeyInfo {
    /// Returns `true` if this `KeyInfo` carries no key or certificate
    /// material at all.
    pub fn is_empty(&self) -> bool {
        self.key_values.is_empty()
            && self.der_encoded_key_values.is_empty()
            && self.x509_certificates.is_empty()
    }
}

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

//! Shared fixtures: hand-built DER key material, assertion builders, and
//! collaborator test doubles.

use std::{io, net::IpAddr};

use chrono::{DateTime, Utc};

use crate::{
    model::{
        Assertion, SubjectConfirmation, SubjectConfirmationData, METHOD_BEARER,
    },
    validation::{AddressResolver, ReplayCache, ReplayCacheError},
};

/// Encodes one DER TLV.
pub(crate) fn der(tag: u8, content: &[u8]) -> Vec<u8> {
    let mut out = vec![tag];
    let len = content.len();
    if len < 128 {
        out.push(len as u8);
    } else if len < 256 {
        out.extend([0x81, len as u8]);
    } else {
        out.extend([0x82, (len >> 8) as u8, (len & 0xff) as u8]);
    }
    out.extend_from_slice(content);
    out
}

/// DER-encoded SubjectPublicKeyInfo for an Ed25519 key with the given raw
/// key bytes.
pub(crate) fn ed25519_spki(key: [u8; 32]) -> Vec<u8> {
    let algorithm = der(0x30, &der(0x06, &[0x2b, 0x65, 0x70]));

    let mut bit_string_content = vec![0u8];
    bit_string_content.extend(key);
    let subject_public_key = der(0x03, &bit_string_content);

    der(0x30, &[algorithm, subject_public_key].concat())
}

/// Minimal DER-encoded X.509 v3 certificate carrying the given Ed25519 key.
///
/// The signature is a placeholder; the validation engine never verifies it.
pub(crate) fn ed25519_cert(key: [u8; 32]) -> Vec<u8> {
    let version = der(0xa0, &der(0x02, &[0x02]));
    let serial = der(0x02, &[0x01]);
    let signature_algorithm = der(0x30, &der(0x06, &[0x2b, 0x65, 0x70]));
    let empty_name = der(0x30, &[]);

    let utc_time = |s: &str| der(0x17, s.as_bytes());
    let validity = der(
        0x30,
        &[utc_time("260101000000Z"), utc_time("360101000000Z")].concat(),
    );

    let tbs_certificate = der(
        0x30,
        &[
            version,
            serial,
            signature_algorithm.clone(),
            empty_name.clone(),
            validity,
            empty_name,
            ed25519_spki(key),
        ]
        .concat(),
    );

    let mut signature_content = vec![0u8];
    signature_content.extend([0u8; 64]);
    let signature = der(0x03, &signature_content);

    der(
        0x30,
        &[tbs_certificate, signature_algorithm, signature].concat(),
    )
}

/// An assertion that passes the orchestrator's basic-data checks.
pub(crate) fn minimal_assertion() -> Assertion {
    Assertion {
        id: Some("a1".to_string()),
        issue_instant: Some(Utc::now()),
        issuer: Some("https://idp.example".to_string()),
        ..Default::default()
    }
}

/// A bearer subject confirmation with the given confirmation data.
pub(crate) fn bearer_confirmation(
    data: Option<SubjectConfirmationData>,
) -> SubjectConfirmation {
    SubjectConfirmation {
        method: METHOD_BEARER.to_string(),
        subject_confirmation_data: data,
    }
}

/// Replay cache double whose storage is always unavailable.
pub(crate) struct FailingReplayCache;

impl ReplayCache for FailingReplayCache {
    fn check(
        &self,
        _context: &str,
        _key: &str,
        _expires: DateTime<Utc>,
    ) -> Result<bool, ReplayCacheError> {
        Err(ReplayCacheError::Storage("backend offline".to_string()))
    }
}

/// Address resolver double returning a fixed answer for every host.
pub(crate) struct FixedResolver(pub(crate) Vec<IpAddr>);

impl AddressResolver for FixedResolver {
    fn resolve(&self, _host: &str) -> io::Result<Vec<IpAddr>> {
        Ok(self.0.clone())
    }
}

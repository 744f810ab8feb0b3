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

//! Key and certificate comparison primitives for holder-of-key matching.
//!
//! These are value-equality comparisons only. No signature verification or
//! possession proof happens here.

use thiserror::Error;
use x509_parser::prelude::*;

/// Key material that could not be interpreted.
#[derive(Debug, Error)]
pub(crate) enum KeyMaterialError {
    #[error("unparseable SubjectPublicKeyInfo value")]
    BadSubjectPublicKeyInfo,

    #[error("unparseable X.509 certificate")]
    BadCertificate,
}

/// Compares two DER-encoded `SubjectPublicKeyInfo` values for equality of
/// the decoded key.
pub(crate) fn spki_equal(a: &[u8], b: &[u8]) -> Result<bool, KeyMaterialError> {
    let spki_a = parse_spki(a)?;
    let spki_b = parse_spki(b)?;
    Ok(spki_a == spki_b)
}

/// Extracts a certificate's public key as DER-encoded
/// `SubjectPublicKeyInfo` bytes.
pub(crate) fn cert_public_key(cert_der: &[u8]) -> Result<Vec<u8>, KeyMaterialError> {
    let (rem, cert) =
        X509Certificate::from_der(cert_der).map_err(|_| KeyMaterialError::BadCertificate)?;
    if !rem.is_empty() {
        return Err(KeyMaterialError::BadCertificate);
    }
    Ok(cert.tbs_certificate.subject_pki.raw.to_vec())
}

fn parse_spki(der: &[u8]) -> Result<SubjectPublicKeyInfo<'_>, KeyMaterialError> {
    let (rem, spki) = SubjectPublicKeyInfo::from_der(der)
        .map_err(|_| KeyMaterialError::BadSubjectPublicKeyInfo)?;
    if !rem.is_empty() {
        return Err(KeyMaterialError::BadSubjectPublicKeyInfo);
    }
    Ok(spki)
}

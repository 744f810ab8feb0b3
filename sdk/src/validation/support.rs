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
    collections::HashSet,
    io,
    net::{IpAddr, ToSocketAddrs},
};

use saml_status_tracker::{log_item, validation_codes};

use crate::validation::{params, StaticParameters, ValidationContext, ValidationResult};

/// Resolves a textual host or address to its network addresses.
///
/// Resolution is a blocking, failable I/O operation; callers that cannot
/// tolerate a slow lookup should wrap their resolver with a timeout.
pub trait AddressResolver: Send + Sync {
    /// Resolves `host` to all of its network addresses (possibly both IPv4
    /// and IPv6).
    fn resolve(&self, host: &str) -> io::Result<Vec<IpAddr>>;
}

/// [`AddressResolver`] backed by the operating system's resolver.
///
/// A literal IP address is returned without a lookup.
#[derive(Debug, Default)]
pub struct SystemAddressResolver;

impl AddressResolver for SystemAddressResolver {
    fn resolve(&self, host: &str) -> io::Result<Vec<IpAddr>> {
        if let Ok(addr) = host.parse::<IpAddr>() {
            return Ok(vec![addr]);
        }

        Ok((host, 0u16)
            .to_socket_addrs()?
            .map(|socket_addr| socket_addr.ip())
            .collect())
    }
}

/// Selects which configured address set an address check consults.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AddressSetKey {
    /// The subject-confirmation address set.
    SubjectConfirmation,

    /// The authentication-statement subject-locality address set.
    AuthnStatement,
}

impl AddressSetKey {
    /// Name of the validation parameter this key selects, used as the log
    /// label.
    pub fn param_name(&self) -> &'static str {
        match self {
            AddressSetKey::SubjectConfirmation => params::SC_VALID_ADDRESSES,
            AddressSetKey::AuthnStatement => params::STMT_AUTHN_VALID_ADDRESSES,
        }
    }

    fn permitted_set<'a>(&self, params: &'a StaticParameters) -> Option<&'a HashSet<IpAddr>> {
        match self {
            AddressSetKey::SubjectConfirmation => params.valid_addresses.as_ref(),
            AddressSetKey::AuthnStatement => params.authn_valid_addresses.as_ref(),
        }
    }
}

/// Checks a textual address or hostname against the permitted address set
/// selected by `set_key`.
///
/// Resolution failure is a lookup problem, not a policy failure: it yields
/// `Indeterminate`, as does an absent or empty permitted set. Otherwise the
/// result is `Valid` iff any resolved address is a member of the set.
pub fn check_address(
    resolver: &dyn AddressResolver,
    address: &str,
    set_key: AddressSetKey,
    assertion_id: &str,
    context: &mut ValidationContext,
) -> ValidationResult {
    let resolved = match resolver.resolve(address) {
        Ok(resolved) if !resolved.is_empty() => resolved,
        Ok(_) => {
            log_item!(
                set_key.param_name(),
                format!("address '{address}' did not resolve to any network address"),
                "check_address"
            )
            .validation_status(validation_codes::ADDRESS_UNRESOLVABLE)
            .failure_no_throw(&mut context.validation_log, ValidationResult::Indeterminate);
            return ValidationResult::Indeterminate;
        }
        Err(err) => {
            log_item!(
                set_key.param_name(),
                format!("address '{address}' could not be resolved"),
                "check_address"
            )
            .validation_status(validation_codes::ADDRESS_UNRESOLVABLE)
            .failure_no_throw(&mut context.validation_log, err);
            return ValidationResult::Indeterminate;
        }
    };

    log::debug!("resolved address '{address}' to {resolved:?}");

    let matched = match set_key.permitted_set(&context.static_params) {
        Some(permitted) if !permitted.is_empty() => {
            resolved.iter().any(|addr| permitted.contains(addr))
        }
        _ => {
            log_item!(
                set_key.param_name(),
                "set of permitted addresses is absent or empty, unable to evaluate address",
                "check_address"
            )
            .validation_status(validation_codes::ADDRESS_SET_MISSING)
            .failure_no_throw(&mut context.validation_log, ValidationResult::Indeterminate);
            return ValidationResult::Indeterminate;
        }
    };

    if matched {
        ValidationResult::Valid
    } else {
        log_item!(
            set_key.param_name(),
            format!(
                "address '{address}' in assertion '{assertion_id}' did not match any permitted address"
            ),
            "check_address"
        )
        .validation_status(validation_codes::ADDRESS_MISMATCH)
        .failure_no_throw(&mut context.validation_log, ValidationResult::Invalid);
        ValidationResult::Invalid
    }
}

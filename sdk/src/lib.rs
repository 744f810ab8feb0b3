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

//! Policy-driven validation engine for SAML 2.0 assertions.
//!
//! This crate decides whether a received SAML 2.0 assertion may be trusted
//! and consumed by a relying party: time-window checks with clock-skew
//! tolerance, exact-match policy checks against caller-supplied trust
//! parameters, key/certificate matching for holder-of-key subject
//! confirmation, and replay suppression for one-time-use assertions.
//!
//! The engine consumes an already-unmarshalled, read-only [`Assertion`]
//! tree; parsing wire XML, verifying XML signatures, and durable replay
//! storage are collaborator concerns outside this crate.
//!
//! # Example
//!
//! ```
//! use saml2::{
//!     model::Assertion,
//!     validation::{
//!         InMemoryReplayCache, Saml20AssertionValidator, StaticParameters, ValidationContext,
//!         ValidationResult,
//!     },
//! };
//!
//! # fn assertion_from_somewhere() -> Assertion { Assertion::default() }
//! let validator =
//!     Saml20AssertionValidator::with_default_validators(Box::new(InMemoryReplayCache::new()));
//!
//! let assertion = assertion_from_somewhere();
//! let mut context = ValidationContext::new(StaticParameters {
//!     valid_audiences: Some(["https://sp.example".to_string()].into()),
//!     valid_recipients: Some(["https://sp.example/acs".to_string()].into()),
//!     ..Default::default()
//! });
//!
//! let result = validator.validate(&assertion, &mut context)?;
//! if result != ValidationResult::Valid {
//!     for item in context.validation_log.logged_items() {
//!         eprintln!("{}: {}", item.label, item.description);
//!     }
//! }
//! # Ok::<(), saml2::Error>(())
//! ```

#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![deny(warnings)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg, doc_cfg_hide))]

pub(crate) mod crypto;
mod error;
pub mod model;
pub mod validation;

pub use error::Error;
pub use model::Assertion;

#[cfg(test)]
pub(crate) mod tests;

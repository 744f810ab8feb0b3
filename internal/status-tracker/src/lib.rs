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

//! Validation log primitives used by the `saml2` assertion validation engine.
//!
//! A [`StatusTracker`] accumulates an ordered list of [`LogItem`]s as the
//! engine runs its checks. Failure items carry a stable status code from
//! [`validation_codes`] so callers can match on outcomes without parsing
//! human-readable text.

#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unwrap_used)]
#![deny(missing_docs)]
#![deny(warnings)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg, doc_cfg_hide))]

mod log;
mod status_tracker;
pub mod validation_codes;

pub use log::{LogItem, LogKind};
pub use status_tracker::{ErrorBehavior, StatusTracker};

#[cfg(test)]
pub(crate) mod tests;

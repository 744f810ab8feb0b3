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

//! The assertion validation engine.
//!
//! [`Saml20AssertionValidator`] is the top-level entry point. It dispatches
//! the assertion's conditions, subject confirmations, and statements to the
//! validator registered for each item's declared type or method URI, and
//! combines the tri-state outcomes.
//!
//! Validators are stateless and safe to share across threads. All per-run
//! state lives in the caller's [`ValidationContext`].

use serde::{Deserialize, Serialize};

pub mod conditions;
pub mod params;
pub mod statements;
pub mod subject_confirmation;

mod assertion_validator;
mod context;
mod replay;
mod support;

pub use assertion_validator::Saml20AssertionValidator;
pub use conditions::ConditionValidator;
pub use context::{DynamicParameters, StaticParameters, ValidationContext};
pub use replay::{InMemoryReplayCache, ReplayCache, ReplayCacheError};
pub use statements::StatementValidator;
pub use subject_confirmation::SubjectConfirmationValidator;
pub use support::{check_address, AddressResolver, AddressSetKey, SystemAddressResolver};

/// Tri-state outcome of a validation check.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ValidationResult {
    /// The check ran to completion and passed.
    Valid,

    /// The check ran to completion and the assertion violates policy.
    Invalid,

    /// The check could not be completed: a required trust input was missing,
    /// malformed, or of the wrong shape, or a dependent I/O operation
    /// failed.
    ///
    /// `Indeterminate` is never a pass.
    Indeterminate,
}

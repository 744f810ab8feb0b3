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

//! Validators for statements within an assertion, dispatched by declared
//! statement type.

use crate::{
    model::{Assertion, QName, Statement},
    validation::{ValidationContext, ValidationResult},
    Error,
};

mod authn;

pub use authn::AuthnStatementValidator;

/// Evaluates one kind of statement.
///
/// Implementations are registered with the orchestrator keyed by
/// [`serviced_statement`](Self::serviced_statement).
pub trait StatementValidator: Send + Sync {
    /// The qualified element (or schema type) name of the statement this
    /// validator services.
    fn serviced_statement(&self) -> QName;

    /// Validates `statement` against the policy carried by `context`.
    ///
    /// Returns `Err` only for conditions that make the validation process
    /// itself unsound.
    fn validate(
        &self,
        statement: &Statement,
        assertion: &Assertion,
        context: &mut ValidationContext,
    ) -> Result<ValidationResult, Error>;
}

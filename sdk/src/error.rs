// Copyright 2022 Adobe. All rights reserved.
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

use thiserror::Error;

/// `Error` enumerates fatal errors that make the validation process itself
/// unsound.
///
/// Ordinary "assertion is invalid" outcomes are never expressed as an
/// `Error`: they flow through
/// [`ValidationResult`](crate::validation::ValidationResult) plus the failure
/// messages accumulated on the
/// [`ValidationContext`](crate::validation::ValidationContext).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A caller-supplied parameter was unusable.
    #[error("bad parameter: {0}")]
    BadParam(String),

    /// An unexpected internal error occurred.
    #[error("internal error: {0}")]
    InternalError(String),
}

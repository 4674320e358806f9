// Copyright 2021 Datafuse Labs
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::ids::DescId;
use crate::ids::DescVersion;

/// SQLSTATE `reserved_name`.
pub const RESERVED_NAME_CODE: &str = "42939";

/// A schema name is rejected by the naming policy.
///
/// It is returned to the issuing statement; the transaction is not aborted.
#[derive(Clone, PartialEq, Eq, thiserror::Error, Debug)]
#[error("unacceptable schema name {name:?}")]
pub struct InvalidNameError {
    pub name: String,
    pub hint: String,
}

impl InvalidNameError {
    pub fn new(name: impl ToString, hint: impl ToString) -> Self {
        Self {
            name: name.to_string(),
            hint: hint.to_string(),
        }
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn code(&self) -> &'static str {
        RESERVED_NAME_CODE
    }
}

/// The version a transaction read a descriptor at is no longer the persisted one.
///
/// Raised by the transaction layer at commit time when a competing transaction
/// committed a newer version first. The whole transaction must be retried.
#[derive(Clone, PartialEq, Eq, thiserror::Error, Debug)]
#[error("descriptor {id} version conflict: expected {expected}, got {actual}; restart transaction")]
pub struct OptimisticConflictError {
    pub id: DescId,
    /// The version observed when the transaction read the descriptor.
    pub expected: DescVersion,
    /// The version currently persisted.
    pub actual: DescVersion,
}

impl OptimisticConflictError {
    pub fn new(id: DescId, expected: DescVersion, actual: DescVersion) -> Self {
        Self {
            id,
            expected,
            actual,
        }
    }
}

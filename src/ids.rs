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

//! Identifier and version types shared by all descriptor kinds.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// The ID of a descriptor.
///
/// An ID is assigned once when a descriptor is created and is never reused,
/// even after the descriptor is dropped.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DescId(pub u32);

impl DescId {
    /// The zero ID. No descriptor is ever assigned this ID.
    pub const INVALID: DescId = DescId(0);

    /// The root namespace of a database.
    ///
    /// Schemas never nest inside other schemas, so this is the parent schema of every schema.
    pub const ROOT_NAMESPACE: DescId = DescId(29);

    pub fn is_valid(&self) -> bool {
        *self != Self::INVALID
    }
}

impl From<u32> for DescId {
    fn from(id: u32) -> Self {
        DescId(id)
    }
}

impl fmt::Display for DescId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The version of a descriptor.
///
/// A created descriptor starts at [`DescVersion::INITIAL`] and every committed
/// mutating transaction advances it by exactly one.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DescVersion(pub u64);

impl DescVersion {
    /// Returned as the original version of a descriptor that has never been persisted.
    pub const ZERO: DescVersion = DescVersion(0);

    pub const INITIAL: DescVersion = DescVersion(1);

    /// Return the version after this one.
    ///
    /// # Panics
    ///
    /// Panics if this is `u64::MAX`: a version never wraps around.
    pub fn next(&self) -> DescVersion {
        let Some(v) = self.0.checked_add(1) else {
            panic!("descriptor version overflow: {} has no next version", self.0);
        };
        DescVersion(v)
    }
}

impl From<u64> for DescVersion {
    fn from(v: u64) -> Self {
        DescVersion(v)
    }
}

impl fmt::Display for DescVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desc_id() {
        assert!(!DescId::INVALID.is_valid());
        assert!(DescId::ROOT_NAMESPACE.is_valid());
        assert_eq!(DescId::INVALID, DescId::default());
        assert_eq!("29", DescId::ROOT_NAMESPACE.to_string());
    }

    #[test]
    fn test_desc_version_next() {
        assert_eq!(DescVersion(0), DescVersion::default());
        assert_eq!(DescVersion::INITIAL, DescVersion::ZERO.next());
        assert_eq!(DescVersion(4), DescVersion(3).next());
        assert!(DescVersion(3) < DescVersion(3).next());
        assert_eq!(DescVersion(u64::MAX), DescVersion(u64::MAX - 1).next());
    }

    #[test]
    #[should_panic(expected = "descriptor version overflow")]
    fn test_desc_version_next_at_max_panics() {
        let _ = DescVersion(u64::MAX).next();
    }
}

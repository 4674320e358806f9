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

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::ids::DescId;

/// The identity a descriptor is resolved by: `(parent, parent schema, name)`.
///
/// A descriptor records the identities it no longer answers to as draining names.
/// Every node must stop serving a cached binding for a draining name, and the name
/// must not be reused, until the lease epoch that could still observe it has drained.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NameInfo {
    pub parent_id: DescId,
    pub parent_schema_id: DescId,
    pub name: String,
}

impl NameInfo {
    pub fn new(parent_id: DescId, parent_schema_id: DescId, name: impl ToString) -> Self {
        Self {
            parent_id,
            parent_schema_id,
            name: name.to_string(),
        }
    }
}

impl fmt::Display for NameInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}/{}", self.parent_id, self.parent_schema_id, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_info_display() {
        let ni = NameInfo::new(DescId(7), DescId::ROOT_NAMESPACE, "s");
        assert_eq!("7/29/s", ni.to_string());
    }
}

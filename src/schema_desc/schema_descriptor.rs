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

use serde::Deserialize;
use serde::Serialize;

use crate::hlc::Timestamp;
use crate::ids::DescId;
use crate::ids::DescVersion;
use crate::name_info::NameInfo;
use crate::privilege::PrivilegeDescriptor;

/// The persisted record of a schema.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct SchemaDescriptor {
    pub id: DescId,

    /// The database that owns this schema.
    pub parent_id: DescId,

    pub name: String,

    pub version: DescVersion,

    /// Unset after a version bump until the persistence layer stamps the commit time.
    pub modification_time: Timestamp,

    /// Identities this schema was known by before being renamed, oldest first.
    ///
    /// Entries are only removed by the cache invalidation layer once they are drained.
    pub draining_names: Vec<NameInfo>,

    pub privileges: PrivilegeDescriptor,
}

impl SchemaDescriptor {
    /// Create a record for a schema that does not exist yet.
    pub fn new(id: DescId, parent_id: DescId, name: impl ToString) -> Self {
        Self {
            id,
            parent_id,
            name: name.to_string(),
            version: DescVersion::INITIAL,
            modification_time: Timestamp::default(),
            draining_names: vec![],
            privileges: PrivilegeDescriptor::default(),
        }
    }

    pub fn with_version(mut self, version: DescVersion) -> Self {
        self.version = version;
        self
    }

    pub fn with_modification_time(mut self, ts: Timestamp) -> Self {
        self.modification_time = ts;
        self
    }

    pub fn with_privileges(mut self, privileges: PrivilegeDescriptor) -> Self {
        self.privileges = privileges;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_descriptor_new() {
        let s = SchemaDescriptor::new(DescId(52), DescId(7), "s");

        assert_eq!(DescId(52), s.id);
        assert_eq!(DescId(7), s.parent_id);
        assert_eq!("s", s.name);
        assert_eq!(DescVersion::INITIAL, s.version);
        assert!(s.modification_time.is_empty());
        assert!(s.draining_names.is_empty());
    }
}

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

use crate::schema_desc::SchemaDescriptor;

/// The tagged union of descriptor records, as written to storage and sent over RPC.
///
/// Descriptor kinds other than schemas are defined outside this crate.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[non_exhaustive]
pub enum DescriptorEnvelope {
    Schema(SchemaDescriptor),
}

impl DescriptorEnvelope {
    pub fn as_schema(&self) -> Option<&SchemaDescriptor> {
        match self {
            DescriptorEnvelope::Schema(s) => Some(s),
        }
    }

    pub fn into_schema(self) -> Option<SchemaDescriptor> {
        match self {
            DescriptorEnvelope::Schema(s) => Some(s),
        }
    }
}

impl From<SchemaDescriptor> for DescriptorEnvelope {
    fn from(s: SchemaDescriptor) -> Self {
        DescriptorEnvelope::Schema(s)
    }
}

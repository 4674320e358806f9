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

use crate::descriptor::AuditMode;
use crate::descriptor::Descriptor;
use crate::descriptor::DescriptorEnvelope;
use crate::hlc::Timestamp;
use crate::ids::DescId;
use crate::ids::DescVersion;
use crate::name_info::NameInfo;
use crate::privilege::PrivilegeDescriptor;
use crate::schema_desc::SchemaDescriptor;

/// A read-only snapshot of one version of a schema descriptor.
///
/// It is never modified after construction, so the descriptor cache can share
/// it between readers, e.g., behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImmutableSchema {
    desc: SchemaDescriptor,
}

impl ImmutableSchema {
    pub fn new(desc: SchemaDescriptor) -> Self {
        Self { desc }
    }

    /// Return the underlying record.
    pub fn schema_desc(&self) -> &SchemaDescriptor {
        &self.desc
    }

    pub fn into_schema_desc(self) -> SchemaDescriptor {
        self.desc
    }
}

impl From<SchemaDescriptor> for ImmutableSchema {
    fn from(desc: SchemaDescriptor) -> Self {
        Self::new(desc)
    }
}

impl fmt::Display for ImmutableSchema {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "schema {:?} (id={}, version={})",
            self.desc.name, self.desc.id, self.desc.version
        )
    }
}

impl Descriptor for ImmutableSchema {
    fn id(&self) -> DescId {
        self.desc.id
    }

    fn name(&self) -> &str {
        &self.desc.name
    }

    fn parent_id(&self) -> DescId {
        self.desc.parent_id
    }

    fn parent_schema_id(&self) -> DescId {
        DescId::ROOT_NAMESPACE
    }

    fn version(&self) -> DescVersion {
        self.desc.version
    }

    fn modification_time(&self) -> Timestamp {
        self.desc.modification_time
    }

    fn draining_names(&self) -> &[NameInfo] {
        &self.desc.draining_names
    }

    fn privileges(&self) -> &PrivilegeDescriptor {
        &self.desc.privileges
    }

    fn audit_mode(&self) -> AuditMode {
        AuditMode::Disabled
    }

    fn type_name(&self) -> &'static str {
        "schema"
    }

    // A schema is created in a single step and is never taken offline.

    fn adding(&self) -> bool {
        false
    }

    fn offline(&self) -> bool {
        false
    }

    fn offline_reason(&self) -> &str {
        ""
    }

    fn descriptor_envelope(&self) -> DescriptorEnvelope {
        DescriptorEnvelope::Schema(self.desc.clone())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample() -> SchemaDescriptor {
        let mut s = SchemaDescriptor::new(DescId(52), DescId(7), "s")
            .with_version(DescVersion(3))
            .with_modification_time(Timestamp::new(100, 1))
            .with_privileges(PrivilegeDescriptor::new("admin"));
        s.draining_names
            .push(NameInfo::new(DescId(7), DescId::ROOT_NAMESPACE, "old"));
        s
    }

    #[test]
    fn test_immutable_schema_accessors() {
        let imm = ImmutableSchema::new(sample());

        assert_eq!(DescId(52), imm.id());
        assert_eq!("s", imm.name());
        assert_eq!(DescId(7), imm.parent_id());
        assert_eq!(DescVersion(3), imm.version());
        assert_eq!(Timestamp::new(100, 1), imm.modification_time());
        assert_eq!(
            &[NameInfo::new(DescId(7), DescId::ROOT_NAMESPACE, "old")],
            imm.draining_names()
        );
        assert_eq!("admin", imm.privileges().owner());
        assert_eq!(&sample(), imm.schema_desc());
    }

    #[test]
    fn test_immutable_schema_fixed_capabilities() {
        let imm = ImmutableSchema::new(sample());

        assert_eq!(DescId::ROOT_NAMESPACE, imm.parent_schema_id());
        assert_eq!(AuditMode::Disabled, imm.audit_mode());
        assert_eq!("schema", imm.type_name());
        assert!(!imm.adding());
        assert!(!imm.offline());
        assert_eq!("", imm.offline_reason());
    }

    #[test]
    fn test_immutable_schema_envelope() {
        let imm = ImmutableSchema::from(sample());

        assert_eq!(DescriptorEnvelope::Schema(sample()), imm.descriptor_envelope());
        assert_eq!(sample(), imm.into_schema_desc());
    }

    #[test]
    fn test_immutable_schema_display() {
        let imm = ImmutableSchema::new(sample());
        assert_eq!(r#"schema "s" (id=52, version=3)"#, imm.to_string());
    }

    #[test]
    fn test_immutable_schema_as_dyn_descriptor() {
        let descs: Vec<Box<dyn Descriptor>> = vec![Box::new(ImmutableSchema::new(sample()))];

        let kinds = descs.iter().map(|d| d.type_name()).collect::<Vec<_>>();
        assert_eq!(vec!["schema"], kinds);
    }
}

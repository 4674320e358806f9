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

use log::debug;
use log::warn;

use crate::descriptor::AuditMode;
use crate::descriptor::Descriptor;
use crate::descriptor::DescriptorEnvelope;
use crate::descriptor::MutableDescriptor;
use crate::hlc::Timestamp;
use crate::ids::DescId;
use crate::ids::DescVersion;
use crate::name_info::NameInfo;
use crate::privilege::PrivilegeDescriptor;
use crate::schema_desc::ImmutableSchema;
use crate::schema_desc::SchemaDescriptor;

/// The working copy of a schema descriptor inside one DDL transaction.
///
/// It is the only way to change the identity of a schema, and it decides when
/// the version advances. Mutations require `&mut self`: an instance belongs to
/// exactly one transaction and is never shared.
///
/// # Baseline
///
/// `cluster_version` is the record as it was read from storage. The transaction
/// layer compares its version with the persisted one at commit and rejects the
/// commit with [`OptimisticConflictError`](crate::errors::OptimisticConflictError)
/// if another transaction committed first.
/// A schema created in this transaction has no baseline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutableSchema {
    desc: SchemaDescriptor,
    cluster_version: Option<ImmutableSchema>,
}

impl MutableSchema {
    /// Build a working copy of a schema read from storage.
    pub fn from_existing(desc: SchemaDescriptor) -> Self {
        Self {
            desc: desc.clone(),
            cluster_version: Some(ImmutableSchema::new(desc)),
        }
    }

    /// Build a working copy of a schema created in the current transaction.
    pub fn from_scratch(desc: SchemaDescriptor) -> Self {
        Self {
            desc,
            cluster_version: None,
        }
    }

    /// The record as read from storage, if any.
    pub fn cluster_version(&self) -> Option<&ImmutableSchema> {
        self.cluster_version.as_ref()
    }

    /// The in-progress record.
    pub fn schema_desc(&self) -> &SchemaDescriptor {
        &self.desc
    }

    /// Rename the schema.
    ///
    /// The current identity is appended to the draining names, so that caches
    /// stop resolving the old name to this schema before it can be reused.
    /// The name must be checked with
    /// [`validate_schema_name()`](crate::schema_desc::validate_schema_name) first.
    ///
    /// # Panics
    ///
    /// Panics if the schema has no parent database.
    pub fn set_name(&mut self, name: impl ToString) {
        assert!(
            self.desc.parent_id.is_valid(),
            "can not rename schema {} without a parent database",
            self.desc.id
        );

        let name = name.to_string();
        let old = NameInfo::new(
            self.desc.parent_id,
            DescId::ROOT_NAMESPACE,
            std::mem::take(&mut self.desc.name),
        );

        debug!(
            "MutableSchema::set_name: id: {}, {} -> {:?}",
            self.desc.id, old, name
        );

        self.desc.draining_names.push(old);
        self.desc.name = name;
    }

    /// Replace the ownership and privilege metadata, e.g., for `ALTER SCHEMA ... OWNER TO`.
    ///
    /// Whether the change is allowed is decided by the authorization layer.
    pub fn set_privileges(&mut self, privileges: PrivilegeDescriptor) {
        debug!(
            "MutableSchema::set_privileges: id: {}, owner: {:?} -> {:?}",
            self.desc.id, self.desc.privileges.owner, privileges.owner
        );
        self.desc.privileges = privileges;
    }

    /// Return the draining names appended in this transaction that are absent from `names`.
    ///
    /// Names after the baseline's ledger are the ones added by this transaction.
    fn dropped_pending_names<'a>(&'a self, names: &[NameInfo]) -> Vec<&'a NameInfo> {
        let original_len = self
            .cluster_version
            .as_ref()
            .map_or(0, |c| c.draining_names().len());

        let pending = self
            .desc
            .draining_names
            .get(original_len..)
            .unwrap_or_default();

        pending.iter().filter(|n| !names.contains(n)).collect()
    }
}

impl Descriptor for MutableSchema {
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

impl MutableDescriptor for MutableSchema {
    type Immutable = ImmutableSchema;

    fn set_draining_names(&mut self, names: Vec<NameInfo>) {
        let dropped = self.dropped_pending_names(&names);

        if dropped.is_empty() {
            debug!(
                "MutableSchema::set_draining_names: id: {}, {:?} -> {:?}",
                self.desc.id, self.desc.draining_names, names
            );
        } else {
            warn!(
                "MutableSchema::set_draining_names: id: {}, drops names added in this transaction: {:?}; {:?} -> {:?}",
                self.desc.id, dropped, self.desc.draining_names, names
            );
        }

        self.desc.draining_names = names;
    }

    fn maybe_increment_version(&mut self) {
        let Some(cluster_version) = &self.cluster_version else {
            debug!(
                "MutableSchema::maybe_increment_version: id: {}, new descriptor, skip",
                self.desc.id
            );
            return;
        };

        // Already incremented in this transaction.
        if self.desc.version == cluster_version.version().next() {
            debug!(
                "MutableSchema::maybe_increment_version: id: {}, already at {}, skip",
                self.desc.id, self.desc.version
            );
            return;
        }

        self.desc.version = self.desc.version.next();
        self.desc.modification_time = Timestamp::default();

        debug!(
            "MutableSchema::maybe_increment_version: id: {}, version become: {}",
            self.desc.id, self.desc.version
        );
    }

    fn original_name(&self) -> &str {
        self.cluster_version.as_ref().map_or("", |c| c.name())
    }

    fn original_id(&self) -> DescId {
        self.cluster_version
            .as_ref()
            .map_or(DescId::INVALID, |c| c.id())
    }

    fn original_version(&self) -> DescVersion {
        self.cluster_version
            .as_ref()
            .map_or(DescVersion::ZERO, |c| c.version())
    }

    fn immutable_copy(&self) -> ImmutableSchema {
        ImmutableSchema::new(self.desc.clone())
    }

    fn is_new(&self) -> bool {
        self.cluster_version.is_none()
    }
}

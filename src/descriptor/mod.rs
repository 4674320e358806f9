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

//! Capability traits shared by every kind of catalog descriptor.
//!
//! Generic catalog code handles schemas, tables, types and databases through
//! [`Descriptor`]; a DDL transaction drives its working copies through
//! [`MutableDescriptor`]. Each descriptor kind returns fixed defaults for the
//! capabilities that are meaningless to it.

mod envelope;

use serde::Deserialize;
use serde::Serialize;

pub use self::envelope::DescriptorEnvelope;
use crate::hlc::Timestamp;
use crate::ids::DescId;
use crate::ids::DescVersion;
use crate::name_info::NameInfo;
use crate::privilege::PrivilegeDescriptor;

/// Audit logging mode of a descriptor. Only tables can enable it.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum AuditMode {
    #[default]
    Disabled,
    ReadWrite,
}

/// The read-only capability set of a catalog descriptor.
///
/// All methods are pure accessors.
pub trait Descriptor: Send + Sync {
    fn id(&self) -> DescId;

    fn name(&self) -> &str;

    /// The database this descriptor belongs to.
    fn parent_id(&self) -> DescId;

    fn parent_schema_id(&self) -> DescId;

    fn version(&self) -> DescVersion;

    /// The commit time of this version, or an unset timestamp if not yet committed.
    fn modification_time(&self) -> Timestamp;

    /// Names this descriptor was previously known by, oldest first.
    fn draining_names(&self) -> &[NameInfo];

    fn privileges(&self) -> &PrivilegeDescriptor;

    fn audit_mode(&self) -> AuditMode;

    /// Human readable kind of this descriptor, such as `"schema"`.
    fn type_name(&self) -> &'static str;

    /// Whether the descriptor is still being created by a multi-phase schema change.
    fn adding(&self) -> bool;

    fn offline(&self) -> bool;

    fn offline_reason(&self) -> &str;

    /// Wrap a copy of the record in the envelope used for storage and RPC.
    fn descriptor_envelope(&self) -> DescriptorEnvelope;
}

/// A working copy of a descriptor, owned by a single DDL transaction.
///
/// It keeps the version read from storage, the baseline, so the transaction
/// layer can detect at commit whether another transaction committed first.
/// A descriptor created in the current transaction has no baseline.
pub trait MutableDescriptor: Descriptor {
    /// The published, read-only form of this descriptor.
    type Immutable: Descriptor;

    /// Replace the draining names with `names`.
    fn set_draining_names(&mut self, names: Vec<NameInfo>);

    /// Bump the version by one, unless it is already bumped in this transaction
    /// or the descriptor has no baseline.
    ///
    /// It can be called any number of times in a transaction.
    fn maybe_increment_version(&mut self);

    /// Name of the baseline, or `""` if there is none.
    fn original_name(&self) -> &str;

    /// ID of the baseline, or [`DescId::INVALID`] if there is none.
    fn original_id(&self) -> DescId;

    /// Version of the baseline, or [`DescVersion::ZERO`] if there is none.
    fn original_version(&self) -> DescVersion;

    /// Build a snapshot from a deep copy of the working state.
    fn immutable_copy(&self) -> Self::Immutable;

    /// Return true if the descriptor is created in the current transaction.
    fn is_new(&self) -> bool;
}

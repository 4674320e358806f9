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

//! # Schema Descriptors
//!
//! Versioned schema descriptors for a distributed SQL catalog, with safe rename.
//!
//! Every node caches descriptors and the name bindings that resolve to them.
//! A DDL transaction changes a descriptor through a working copy, which advances
//! the version by exactly one per transaction and records every name it gives up
//! as a draining name. The lease layer uses the version and the draining names
//! to decide which cached bindings must be dropped before an old name is reused.
//!
//! Persisting a descriptor, checking for conflicting commits, granting leases and
//! evaluating privileges are all done outside this crate.
//!
//! ## Core Components
//!
//! - [`Descriptor`]: Read-only capabilities shared by all descriptor kinds
//! - [`MutableDescriptor`]: Version coordination of a working copy in a transaction
//! - [`ImmutableSchema`]: A published snapshot of a schema
//! - [`MutableSchema`]: The working copy of a schema
//! - [`validate_schema_name`]: The naming policy for user defined schemas
//!
//! ## Usage Example
//!
//! ```rust
//! use schema_desc::DescId;
//! use schema_desc::DescVersion;
//! use schema_desc::Descriptor;
//! use schema_desc::MutableDescriptor;
//! use schema_desc::MutableSchema;
//! use schema_desc::SchemaDescriptor;
//!
//! # fn main() -> Result<(), schema_desc::InvalidNameError> {
//! let stored = SchemaDescriptor::new(DescId(52), DescId(7), "s").with_version(DescVersion(3));
//!
//! let mut m = MutableSchema::from_existing(stored);
//!
//! schema_desc::validate_schema_name("s2")?;
//! m.set_name("s2");
//! m.maybe_increment_version();
//!
//! let published = m.immutable_copy();
//! assert_eq!(DescVersion(4), published.version());
//! assert_eq!("s", published.draining_names()[0].name);
//! # Ok(())
//! # }
//! ```

pub mod descriptor;
pub mod errors;
pub mod hlc;
pub mod ids;
pub mod name_info;
pub mod privilege;
pub mod schema_desc;

pub use crate::descriptor::AuditMode;
pub use crate::descriptor::Descriptor;
pub use crate::descriptor::DescriptorEnvelope;
pub use crate::descriptor::MutableDescriptor;
pub use crate::errors::InvalidNameError;
pub use crate::errors::OptimisticConflictError;
pub use crate::hlc::Timestamp;
pub use crate::ids::DescId;
pub use crate::ids::DescVersion;
pub use crate::name_info::NameInfo;
pub use crate::privilege::PrivilegeDescriptor;
pub use crate::schema_desc::validate_schema_name;
pub use crate::schema_desc::ImmutableSchema;
pub use crate::schema_desc::MutableSchema;
pub use crate::schema_desc::SchemaDescriptor;

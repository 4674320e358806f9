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

//! Schema descriptors.
//!
//! A schema has two views:
//! - [`ImmutableSchema`]: a published snapshot that any number of readers may hold.
//! - [`MutableSchema`]: the working copy of the single DDL transaction that changes it.
//!
//! A snapshot is only ever produced by deep-copying the working state, never by
//! sharing a reference into it.

#[cfg(test)]
mod schema_desc_test;

mod immutable;
mod mutable;
mod name;
mod schema_descriptor;

pub use self::immutable::ImmutableSchema;
pub use self::mutable::MutableSchema;
pub use self::name::validate_schema_name;
pub use self::name::PG_SCHEMA_PREFIX;
pub use self::schema_descriptor::SchemaDescriptor;

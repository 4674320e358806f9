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

//! End-to-end DDL flows over a schema descriptor: validate, mutate, bump, publish.

use pretty_assertions::assert_eq;

use crate::descriptor::Descriptor;
use crate::descriptor::MutableDescriptor;
use crate::errors::InvalidNameError;
use crate::ids::DescId;
use crate::ids::DescVersion;
use crate::name_info::NameInfo;
use crate::schema_desc::validate_schema_name;
use crate::schema_desc::MutableSchema;
use crate::schema_desc::SchemaDescriptor;

fn root_name(parent: u32, name: &str) -> NameInfo {
    NameInfo::new(DescId(parent), DescId::ROOT_NAMESPACE, name)
}

#[test]
fn test_create_schema_is_not_bumped() {
    let mut m = MutableSchema::from_scratch(SchemaDescriptor::new(DescId(52), DescId(7), "s"));

    m.maybe_increment_version();

    assert!(m.is_new());
    assert_eq!(DescVersion::INITIAL, m.version());
    assert_eq!(DescId::INVALID, m.original_id());
}

#[test]
fn test_rename_existing_schema() -> anyhow::Result<()> {
    let stored = SchemaDescriptor::new(DescId(52), DescId(7), "s").with_version(DescVersion(3));
    let mut m = MutableSchema::from_existing(stored);

    validate_schema_name("s2")?;
    m.set_name("s2");
    m.maybe_increment_version();

    assert_eq!(DescVersion(4), m.version());
    assert_eq!(vec![root_name(7, "s")], m.draining_names());
    assert_eq!("s", m.original_name());
    assert_eq!("s2", m.name());

    // More statements in the same transaction do not bump it again.
    m.maybe_increment_version();
    assert_eq!(DescVersion(4), m.version());

    let published = m.immutable_copy();
    assert_eq!(DescVersion(4), published.version());
    assert_eq!(vec![root_name(7, "s")], published.draining_names());

    Ok(())
}

#[test]
fn test_rename_rejected_applies_nothing() {
    let stored = SchemaDescriptor::new(DescId(52), DescId(7), "s").with_version(DescVersion(3));
    let mut m = MutableSchema::from_existing(stored.clone());

    let res = validate_schema_name("pg_extra").map(|_| m.set_name("pg_extra"));

    let err = res.unwrap_err();
    assert_eq!(
        InvalidNameError::new(
            "pg_extra",
            r#"The prefix "pg_" is reserved for system schemas."#
        ),
        err
    );
    assert_eq!(&stored, m.schema_desc());
}

#[test]
fn test_reconcile_draining_names_after_rename() {
    let stored = SchemaDescriptor::new(DescId(52), DescId(7), "s").with_version(DescVersion(3));
    let mut m = MutableSchema::from_existing(stored);

    m.set_name("s2");
    m.set_draining_names(vec![]);

    assert!(m.draining_names().is_empty());
    assert_eq!("s2", m.name());
}

#[test]
fn test_is_new_matches_original_id() {
    let stored = SchemaDescriptor::new(DescId(52), DescId(7), "s");

    let created = MutableSchema::from_scratch(stored.clone());
    let existing = MutableSchema::from_existing(stored);

    assert_eq!(created.is_new(), created.original_id() == DescId::INVALID);
    assert_eq!(existing.is_new(), existing.original_id() == DescId::INVALID);
    assert!(created.is_new());
    assert!(!existing.is_new());
}

/// A second transaction reading the committed record starts a new version round.
#[test]
fn test_two_transactions_bump_twice() {
    let stored = SchemaDescriptor::new(DescId(52), DescId(7), "a").with_version(DescVersion(3));

    let mut t1 = MutableSchema::from_existing(stored);
    t1.set_name("b");
    t1.maybe_increment_version();
    let committed = t1.immutable_copy().into_schema_desc();

    let mut t2 = MutableSchema::from_existing(committed);
    t2.set_name("c");
    t2.maybe_increment_version();

    assert_eq!(DescVersion(4), t2.original_version());
    assert_eq!(DescVersion(5), t2.version());
    assert_eq!(
        vec![root_name(7, "a"), root_name(7, "b")],
        t2.draining_names()
    );
}

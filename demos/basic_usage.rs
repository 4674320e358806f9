use std::collections::BTreeMap;

use schema_desc::DescId;
use schema_desc::DescVersion;
use schema_desc::Descriptor;
use schema_desc::MutableDescriptor;
use schema_desc::MutableSchema;
use schema_desc::OptimisticConflictError;
use schema_desc::SchemaDescriptor;
use schema_desc::Timestamp;

/// A toy transaction layer: stores descriptors and checks the baseline version at commit.
#[derive(Default)]
struct Store {
    now: i64,
    descs: BTreeMap<DescId, SchemaDescriptor>,
}

impl Store {
    fn read(&self, id: DescId) -> Option<MutableSchema> {
        self.descs.get(&id).cloned().map(MutableSchema::from_existing)
    }

    fn commit(&mut self, m: &MutableSchema) -> Result<(), OptimisticConflictError> {
        if !m.is_new() {
            let actual = self
                .descs
                .get(&m.original_id())
                .map_or(DescVersion::ZERO, |d| d.version);

            if actual != m.original_version() {
                return Err(OptimisticConflictError::new(
                    m.id(),
                    m.original_version(),
                    actual,
                ));
            }
        }

        self.now += 1;
        let desc = m
            .immutable_copy()
            .into_schema_desc()
            .with_modification_time(Timestamp::new(self.now, 0));
        self.descs.insert(desc.id, desc);
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let mut store = Store::default();

    // CREATE SCHEMA s
    let created = MutableSchema::from_scratch(SchemaDescriptor::new(DescId(52), DescId(7), "s"));
    store.commit(&created)?;

    // Two concurrent ALTER SCHEMA ... RENAME TO
    let mut t1 = store.read(DescId(52)).expect("schema exists");
    let mut t2 = store.read(DescId(52)).expect("schema exists");

    schema_desc::validate_schema_name("s2")?;
    t1.set_name("s2");
    t1.maybe_increment_version();
    store.commit(&t1)?;

    t2.set_name("s3");
    t2.maybe_increment_version();
    match store.commit(&t2) {
        Ok(()) => println!("unexpected commit of t2"),
        Err(e) => println!("t2 rejected: {}", e),
    }

    if let Err(e) = schema_desc::validate_schema_name("pg_extra") {
        println!("{} ({}): {}", e, e.code(), e.hint());
    }

    let committed = store.read(DescId(52)).expect("schema exists").immutable_copy();
    println!("committed: {}", committed);
    for n in committed.draining_names() {
        println!("  draining: {}", n);
    }

    Ok(())
}

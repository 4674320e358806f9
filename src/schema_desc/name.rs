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

use crate::errors::InvalidNameError;

/// Names with this prefix belong to system schemas.
pub const PG_SCHEMA_PREFIX: &str = "pg_";

/// Check if `name` can be used for a user defined schema.
///
/// Callers must check a name before passing it to
/// [`MutableSchema::set_name()`](crate::schema_desc::MutableSchema::set_name).
pub fn validate_schema_name(name: &str) -> Result<(), InvalidNameError> {
    if name.starts_with(PG_SCHEMA_PREFIX) {
        return Err(InvalidNameError::new(
            name,
            format!(
                "The prefix {:?} is reserved for system schemas.",
                PG_SCHEMA_PREFIX
            ),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_schema_name() {
        assert_eq!(Ok(()), validate_schema_name("myschema"));
        assert_eq!(Ok(()), validate_schema_name(""));
        assert_eq!(Ok(()), validate_schema_name("pg"));
        assert_eq!(Ok(()), validate_schema_name("my_pg_schema"));
        // Case sensitive, as name normalization happens before.
        assert_eq!(Ok(()), validate_schema_name("PG_extra"));

        let err = validate_schema_name("pg_extra").unwrap_err();
        assert_eq!("pg_extra", err.name);
        assert_eq!(
            r#"The prefix "pg_" is reserved for system schemas."#,
            err.hint()
        );

        assert!(validate_schema_name("pg_").is_err());
        assert!(validate_schema_name("pg_catalog").is_err());
    }
}

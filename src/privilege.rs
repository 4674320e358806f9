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

//! Ownership and privilege metadata carried by a descriptor.
//!
//! This crate only stores these fields as part of the versioned record.
//! Role membership, ownership transfer checks and privilege evaluation are done
//! by the authorization layer, which reads them from a published snapshot.

use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Privilege {
    All,
    Create,
    Usage,
}

/// Privileges granted to one user or role.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct UserPrivileges {
    pub user: String,
    pub privileges: BTreeSet<Privilege>,
}

impl UserPrivileges {
    pub fn new(user: impl ToString, privileges: impl IntoIterator<Item = Privilege>) -> Self {
        Self {
            user: user.to_string(),
            privileges: privileges.into_iter().collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct PrivilegeDescriptor {
    pub owner: String,
    pub users: Vec<UserPrivileges>,
}

impl PrivilegeDescriptor {
    pub fn new(owner: impl ToString) -> Self {
        Self {
            owner: owner.to_string(),
            users: vec![],
        }
    }

    pub fn with_user(mut self, user: UserPrivileges) -> Self {
        self.users.push(user);
        self
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Return the privileges granted to `user`, if any.
    pub fn user(&self, user: &str) -> Option<&UserPrivileges> {
        self.users.iter().find(|u| u.user == user)
    }
}

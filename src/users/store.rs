use std::collections::HashMap;

use parking_lot::RwLock;
use time::OffsetDateTime;

use super::repo_types::{User, UserPatch};
use crate::error::{ServiceError, ServiceResult};

/// Process-wide map of users guarded by a single reader/writer lock.
///
/// Reads share the lock; every write holds it exclusively for one atomic
/// step, so a failed operation never leaves a partial mutation behind.
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<HashMap<i64, User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `user` under its id, replacing any record already there.
    pub fn insert(&self, user: User) {
        self.users.write().insert(user.id, user);
    }

    pub fn get(&self, id: i64) -> ServiceResult<User> {
        self.users
            .read()
            .get(&id)
            .cloned()
            .ok_or(ServiceError::NotFound(id))
    }

    pub fn update(&self, id: i64, patch: UserPatch, now: OffsetDateTime) -> ServiceResult<()> {
        let mut users = self.users.write();
        let user = users.get_mut(&id).ok_or(ServiceError::NotFound(id))?;
        patch.apply(user, now);
        Ok(())
    }

    pub fn delete(&self, id: i64) -> ServiceResult<()> {
        self.users
            .write()
            .remove(&id)
            .map(|_| ())
            .ok_or(ServiceError::NotFound(id))
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.users.read().len()
    }
}

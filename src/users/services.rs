use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use super::{
    clock::{Clock, SystemClock},
    dto::UserInfo,
    ids::{IdGenerator, OsRngIds},
    repo_types::{User, UserPatch},
    store::UserStore,
    validation::check_password_confirm,
};
use crate::error::{ServiceError, ServiceResult};

/// The four user RPCs, implemented once per storage backend.
#[async_trait]
pub trait UserService: Send + Sync {
    async fn create(&self, info: UserInfo) -> ServiceResult<i64>;
    async fn get(&self, id: i64) -> ServiceResult<User>;
    async fn update(&self, id: i64, patch: UserPatch) -> ServiceResult<()>;
    async fn delete(&self, id: i64) -> ServiceResult<()>;
}

/// Backend keeping users in a process-local [`UserStore`].
pub struct InMemoryUserService {
    store: UserStore,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl InMemoryUserService {
    pub fn new(ids: Arc<dyn IdGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self {
            store: UserStore::new(),
            ids,
            clock,
        }
    }
}

impl Default for InMemoryUserService {
    fn default() -> Self {
        Self::new(Arc::new(OsRngIds), Arc::new(SystemClock))
    }
}

#[async_trait]
impl UserService for InMemoryUserService {
    async fn create(&self, info: UserInfo) -> ServiceResult<i64> {
        check_password_confirm(&info.password, &info.password_confirm)?;

        let id = self.ids.new_id().map_err(|e| {
            error!(error = %e, "id generation failed");
            ServiceError::IdGeneration(e)
        })?;

        self.store.insert(User {
            id,
            name: info.name,
            email: info.email,
            role: info.role,
            created_at: self.clock.now(),
            updated_at: None,
        });

        info!(user_id = id, "user created");
        Ok(id)
    }

    async fn get(&self, id: i64) -> ServiceResult<User> {
        self.store.get(id)
    }

    async fn update(&self, id: i64, patch: UserPatch) -> ServiceResult<()> {
        self.store.update(id, patch, self.clock.now())?;
        info!(user_id = id, "user updated");
        Ok(())
    }

    async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.store.delete(id)?;
        info!(user_id = id, "user deleted");
        Ok(())
    }
}

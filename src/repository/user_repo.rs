use crate::model::user::{NewUser, User, UserPatch};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use crate::repository::seed;
use crate::util::avatar;
use crate::util::ids;
use crate::util::kv::KvStore;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Store key holding the serialized users collection.
pub const USERS_KEY: &str = "dashboard_users_db";

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn list_all(&self) -> RepositoryResult<Vec<User>>;
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<User>>;
    async fn insert(&self, new_user: NewUser) -> RepositoryResult<User>;
    async fn update_merge(&self, patch: UserPatch) -> RepositoryResult<User>;
    async fn delete_by_id(&self, id: &str) -> RepositoryResult<()>;
}

/// The canonical users collection, serialized as one JSON array under
/// [`USERS_KEY`]. Every mutation reads the whole collection, changes it in
/// memory and writes it back: overlapping mutations race and the last write
/// wins. Accepted for a single interactive client; do not reuse this
/// repository with real concurrent callers.
pub struct KvUserRepository {
    store: Arc<dyn KvStore>,
}

impl KvUserRepository {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// Loads the collection, seeding the store with the bootstrap dataset on
    /// first access. Stored records are returned as-is beyond JSON decoding.
    async fn load_or_seed(&self) -> RepositoryResult<Vec<User>> {
        match self.store.get_string(USERS_KEY).await? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => {
                info!("Users collection absent, seeding bootstrap dataset");
                let users = seed::bootstrap_users();
                self.persist(&users).await?;
                Ok(users)
            }
        }
    }

    async fn persist(&self, users: &[User]) -> RepositoryResult<()> {
        let raw = serde_json::to_string(users)?;
        self.store.set_string(USERS_KEY, &raw).await?;
        Ok(())
    }
}

#[async_trait]
impl UserRepository for KvUserRepository {
    #[instrument(skip(self))]
    async fn list_all(&self) -> RepositoryResult<Vec<User>> {
        self.load_or_seed().await
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
        let users = self.load_or_seed().await?;
        Ok(users.into_iter().find(|u| u.email == email))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &str) -> RepositoryResult<Option<User>> {
        let users = self.load_or_seed().await?;
        Ok(users.into_iter().find(|u| u.id == id))
    }

    #[instrument(skip(self, new_user), fields(email = %new_user.email))]
    async fn insert(&self, new_user: NewUser) -> RepositoryResult<User> {
        let mut users = self.load_or_seed().await?;
        let avatar = new_user
            .avatar
            .unwrap_or_else(|| avatar::derive_avatar_url(&new_user.name));
        let user = User {
            id: ids::random_id(),
            name: new_user.name,
            email: new_user.email,
            role: new_user.role,
            status: new_user.status,
            avatar: Some(avatar),
            password: new_user.password,
        };
        users.push(user.clone());
        self.persist(&users).await?;
        info!("Inserted user {}", user.id);
        Ok(user)
    }

    #[instrument(skip(self, patch), fields(id = %patch.id))]
    async fn update_merge(&self, patch: UserPatch) -> RepositoryResult<User> {
        let mut users = self.load_or_seed().await?;
        let existing = match users.iter_mut().find(|u| u.id == patch.id) {
            Some(u) => u,
            None => {
                warn!("Update targeted unknown user id {}", patch.id);
                return Err(RepositoryError::not_found(format!(
                    "No user found to update for id: {}",
                    patch.id
                )));
            }
        };

        let name_changed = patch.name.is_some();
        if let Some(name) = patch.name {
            existing.name = name;
        }
        if let Some(email) = patch.email {
            existing.email = email;
        }
        if let Some(role) = patch.role {
            existing.role = role;
        }
        if let Some(status) = patch.status {
            existing.status = status;
        }
        if let Some(av) = patch.avatar {
            existing.avatar = Some(av);
        }
        if let Some(password) = patch.password {
            existing.password = Some(password);
        }

        // A renamed record keeps a manually-set remote avatar; anything else
        // is regenerated from the new name.
        let avatar_is_remote = existing
            .avatar
            .as_deref()
            .map(avatar::is_remote_url)
            .unwrap_or(false);
        if name_changed && !avatar_is_remote {
            existing.avatar = Some(avatar::derive_avatar_url(&existing.name));
        }

        let merged = existing.clone();
        self.persist(&users).await?;
        debug!("Merged update into user {}", merged.id);
        Ok(merged)
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: &str) -> RepositoryResult<()> {
        let mut users = self.load_or_seed().await?;
        let before = users.len();
        users.retain(|u| u.id != id);
        if users.len() == before {
            // Deleting a nonexistent id is a silent no-op.
            debug!("Delete targeted unknown user id {}", id);
        }
        self.persist(&users).await?;
        Ok(())
    }
}

use std::sync::Arc;
use tracing::info;

use crate::config::{AdminUserConfig, ConfigError, LatencyConfig, StoreConfig};
use crate::model::reports::ReportsPayload;
use crate::model::stats::StatsSnapshot;
use crate::model::user::{NewUser, User, UserPatch};
use crate::repository::repository_error::RepositoryResult;
use crate::repository::user_repo::{KvUserRepository, UserRepository};
use crate::service::auth_service::{AuthError, AuthService, AuthServiceImpl, SignupRequest};
use crate::service::reports_service::ReportsService;
use crate::service::session_service::SessionStore;
use crate::service::stats_service::StatsService;
use crate::util::kv::{FileKvStore, KvError, KvStore};

/// The in-process facade the presentation layer talks to.
///
/// Each operation awaits its configured artificial delay before touching the
/// store, one delay per call, so consumers see the timing profile of a small
/// hosted API. There is no cancellation: every pending call eventually
/// resolves or rejects, and stale results are the caller's problem.
pub struct App {
    latency: LatencyConfig,
    pub user_repo: Arc<dyn UserRepository>,
    pub auth_service: Arc<AuthServiceImpl>,
    pub stats_service: Arc<StatsService>,
    pub reports_service: Arc<ReportsService>,
    pub session: Arc<SessionStore>,
}

impl App {
    /// Wires the whole backend from environment configuration, backed by the
    /// durable file store.
    pub fn from_env() -> Result<Self, ConfigError> {
        let store_config = StoreConfig::from_env()?;
        let latency = LatencyConfig::from_env()?;
        let admin = AdminUserConfig::from_env();
        let store: Arc<dyn KvStore> = Arc::new(FileKvStore::new(&store_config));
        info!("Backend wired against {}", store_config.path.display());
        Ok(Self::with_store(store, admin, latency))
    }

    /// Wires the backend against an injected store. Tests pass a
    /// [`crate::util::kv::MemoryKvStore`] and [`LatencyConfig::disabled`].
    pub fn with_store(
        store: Arc<dyn KvStore>,
        admin: AdminUserConfig,
        latency: LatencyConfig,
    ) -> Self {
        let user_repo: Arc<dyn UserRepository> = Arc::new(KvUserRepository::new(Arc::clone(&store)));
        let auth_service = Arc::new(AuthServiceImpl::new(Arc::clone(&user_repo), admin));
        let stats_service = Arc::new(StatsService::new(Arc::clone(&user_repo)));
        let reports_service = Arc::new(ReportsService::new());
        let session = Arc::new(SessionStore::new(store));
        App {
            latency,
            user_repo,
            auth_service,
            stats_service,
            reports_service,
            session,
        }
    }

    // --- auth ---

    pub async fn login(&self, email: &str, password: &str) -> Result<User, AuthError> {
        self.latency.simulate_default().await;
        self.auth_service.login(email, password).await
    }

    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<User, AuthError> {
        self.latency.simulate_default().await;
        self.auth_service
            .signup(SignupRequest {
                name: name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
            })
            .await
    }

    // --- users collection ---

    pub async fn list_users(&self) -> RepositoryResult<Vec<User>> {
        self.latency.simulate_default().await;
        self.user_repo.list_all().await
    }

    pub async fn create_user(&self, new_user: NewUser) -> RepositoryResult<User> {
        self.latency.simulate_default().await;
        self.user_repo.insert(new_user).await
    }

    pub async fn update_user(&self, patch: UserPatch) -> RepositoryResult<User> {
        self.latency.simulate_default().await;
        self.user_repo.update_merge(patch).await
    }

    pub async fn delete_user(&self, id: &str) -> RepositoryResult<()> {
        self.latency.simulate_delete().await;
        self.user_repo.delete_by_id(id).await
    }

    // --- derived views ---

    pub async fn get_stats(&self) -> RepositoryResult<StatsSnapshot> {
        self.latency.simulate_stats().await;
        self.stats_service.compute().await
    }

    pub async fn get_reports(&self) -> ReportsPayload {
        self.latency.simulate_reports().await;
        self.reports_service.fetch()
    }

    // --- session (consulted at startup, updated on login/logout/profile-save) ---

    pub async fn restore_session(&self) -> Result<Option<User>, KvError> {
        self.session.restore().await
    }

    pub async fn establish_session(&self, user: &User) -> Result<(), KvError> {
        self.session.establish(user).await
    }

    pub async fn clear_session(&self) -> Result<(), KvError> {
        self.session.clear().await
    }
}

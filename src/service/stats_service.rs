use crate::model::stats::{StatDescriptions, StatsSnapshot};
use crate::model::user::User;
use crate::repository::repository_error::RepositoryResult;
use crate::repository::user_repo::UserRepository;
use crate::util::currency;
use std::sync::Arc;
use tracing::instrument;

// Fabricated business math: more users means more of everything.
const SALES_PER_USER: u64 = 1250;
const ORDERS_PER_ACTIVE_USER: usize = 3;
const BASELINE_PENDING_ISSUES: usize = 2;

pub struct StatsService {
    user_repo: Arc<dyn UserRepository>,
}

impl StatsService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// Computes the snapshot from the current collection. Pure derivation,
    /// nothing is persisted.
    #[instrument(skip(self))]
    pub async fn compute(&self) -> RepositoryResult<StatsSnapshot> {
        let users = self.user_repo.list_all().await?;
        Ok(Self::from_collection(&users))
    }

    pub fn from_collection(users: &[User]) -> StatsSnapshot {
        let total = users.len();
        let active = users.iter().filter(|u| u.is_active()).count();
        StatsSnapshot {
            total_users: total,
            total_sales: currency::format_usd(total as u64 * SALES_PER_USER),
            active_orders: active * ORDERS_PER_ACTIVE_USER,
            pending_issues: (total - active) + BASELINE_PENDING_ISSUES,
            descriptions: StatDescriptions::default(),
        }
    }
}

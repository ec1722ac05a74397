use serde::Serialize;

/// Derived dashboard metrics, recomputed from the users collection on every
/// request and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    pub total_users: usize,
    /// Fabricated revenue figure, formatted for display (e.g. "$7,500").
    pub total_sales: String,
    pub active_orders: usize,
    pub pending_issues: usize,
    pub descriptions: StatDescriptions,
}

/// Fixed flip-side copy for each stat card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatDescriptions {
    pub total_users: &'static str,
    pub total_sales: &'static str,
    pub active_orders: &'static str,
    pub pending_issues: &'static str,
}

impl Default for StatDescriptions {
    fn default() -> Self {
        StatDescriptions {
            total_users: "Total registered accounts on the platform.",
            total_sales: "Revenue generated in the current fiscal month.",
            active_orders: "Orders currently being processed or shipped.",
            pending_issues: "Support tickets requiring immediate attention.",
        }
    }
}

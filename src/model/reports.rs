use serde::Serialize;

/// The canned analytics payload backing the reports view. Entirely static;
/// the shape matters to consumers, the numbers do not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportsPayload {
    /// Seven data points, one per weekday label.
    pub revenue_data: Vec<u32>,
    pub labels: Vec<&'static str>,
    pub top_products: Vec<TopProduct>,
    pub recent_transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopProduct {
    pub name: &'static str,
    pub sales: u32,
    /// Pre-formatted revenue figure, e.g. "$14,200".
    pub revenue: String,
    /// Signed percentage string, e.g. "+12%" or "-2%".
    pub growth: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    pub id: &'static str,
    pub user: &'static str,
    /// Pre-formatted amount, e.g. "$129.00".
    pub amount: &'static str,
    pub status: TransactionStatus,
    /// Relative timestamp copy, e.g. "15 min ago".
    pub date: &'static str,
}

use crate::model::reports::{ReportsPayload, TopProduct, Transaction, TransactionStatus};
use tracing::instrument;

/// Serves the static analytics payload for the reports view. No store
/// interaction and no inputs; other views only depend on its shape.
pub struct ReportsService;

impl ReportsService {
    pub fn new() -> Self {
        ReportsService
    }

    #[instrument(skip(self))]
    pub fn fetch(&self) -> ReportsPayload {
        ReportsPayload {
            revenue_data: vec![35, 60, 45, 80, 55, 75, 90],
            labels: vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
            top_products: vec![
                TopProduct {
                    name: "Pro Dashboard License",
                    sales: 142,
                    revenue: "$14,200".to_string(),
                    growth: "+12%",
                },
                TopProduct {
                    name: "UI Kit Bundle",
                    sales: 89,
                    revenue: "$4,450".to_string(),
                    growth: "+5%",
                },
                TopProduct {
                    name: "Consulting Hour",
                    sales: 24,
                    revenue: "$3,600".to_string(),
                    growth: "-2%",
                },
            ],
            recent_transactions: vec![
                Transaction {
                    id: "TRX-8859",
                    user: "Alice Freeman",
                    amount: "$129.00",
                    status: TransactionStatus::Completed,
                    date: "Just now",
                },
                Transaction {
                    id: "TRX-8860",
                    user: "Robert Wolf",
                    amount: "$59.00",
                    status: TransactionStatus::Pending,
                    date: "15 min ago",
                },
                Transaction {
                    id: "TRX-8861",
                    user: "James Smith",
                    amount: "$299.00",
                    status: TransactionStatus::Completed,
                    date: "2 hours ago",
                },
                Transaction {
                    id: "TRX-8862",
                    user: "Morgan Lee",
                    amount: "$25.00",
                    status: TransactionStatus::Failed,
                    date: "5 hours ago",
                },
            ],
        }
    }
}

impl Default for ReportsService {
    fn default() -> Self {
        Self::new()
    }
}

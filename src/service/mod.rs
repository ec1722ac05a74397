pub mod auth_service;
pub mod reports_service;
pub mod session_service;
pub mod stats_service;

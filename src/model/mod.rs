pub mod reports;
pub mod stats;
pub mod user;

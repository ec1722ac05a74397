pub mod repository_error;
pub mod seed;
pub mod user_repo;

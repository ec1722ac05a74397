pub mod avatar;
pub mod currency;
pub mod ids;
pub mod kv;
pub mod logger;

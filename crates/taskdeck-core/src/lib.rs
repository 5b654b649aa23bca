pub mod api;
pub mod config;
pub mod constants;
pub mod models;
pub mod projection;
pub mod session;
pub mod stats;
pub mod store;
pub mod validate;

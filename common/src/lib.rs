pub mod cache;
pub mod config;
pub mod display;
pub mod error_info;
pub mod models;
pub mod ticket;

//! CLI command implementations

pub mod alternatives;
pub mod completions;
pub mod config;
pub mod cook;
pub mod init;
pub mod near_miss;
pub mod stock;

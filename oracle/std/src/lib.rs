// Re-exports
pub use fluster_oracle_core::*;

pub mod config;
pub mod decode;
pub mod err;
pub mod registry;

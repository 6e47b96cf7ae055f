// Core types for the GCLS MCP gateway

pub mod rbac;
pub mod types;

pub use types::*;

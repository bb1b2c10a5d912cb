//! Infrastructure layer for the Pina app.
//!
//! Concrete implementations of the adapter contracts defined in
//! `pina_core::feed`, plus configuration loading and path management. The
//! in-memory feeds are used by tests and the CLI demo; a hosted-backend
//! binding would live here too, behind the same traits.

pub mod config_service;
pub mod memory_feeds;
pub mod paths;
pub mod role_cache;

pub use config_service::ConfigService;
pub use memory_feeds::{MemoryAuthFeed, MemoryProfileFeed, MemoryRecordFeed};
pub use role_cache::{MemoryRoleCache, TomlRoleCache};

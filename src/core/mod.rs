// Core business logic module

pub mod alias;
pub mod alias_store;
pub mod config;
pub mod metadata;
pub mod path_registry;

// Re-export commonly used items
pub use alias::AliasRecord;
pub use alias_store::{AliasStore, AppendOutcome, Entry};
pub use config::Config;
pub use metadata::Metadata;
pub use path_registry::{Category, PathEntry, PathRegistry};

// Rust guideline compliant 2026-10-19

//! Abundant Core Library
//!
//! This crate provides the foundational components for the Abundant issue tracker:
//! - Unique-prefix resolution (prefix index, aliases, prefix display)
//! - Issue records and change descriptions
//! - Issue directory storage and the users file
//! - Hash ID generation
//! - Layered configuration
//! - Error types and result handling

pub mod alias;
pub mod config;
pub mod error;
pub mod identity;
pub mod issue;
pub mod prefix;
pub mod storage;
pub mod users;

pub use alias::AliasTable;
pub use config::{Config, ConfigLoader, MetaField, MetaKind};
pub use error::{Error, Result};
pub use issue::{Change, Comment, Field, Issue, Value};
pub use prefix::{Match, PrefixIndex};
pub use storage::Storage;
pub use users::UserEntry;

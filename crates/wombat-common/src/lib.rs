//! Common utilities for the Wombat style resolver.
//!
//! This crate provides shared infrastructure used by all Wombat components:
//! - **Warning System** - deduplicated terminal output for input the resolver
//!   recognizes but cannot honor

pub mod warning;

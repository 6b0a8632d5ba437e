//! Cascade resolution: which declaration wins for each property name.

pub mod config;
pub mod resolver;
pub mod shared;

pub use config::{ResolverConfig, ScanMode};
pub use resolver::{CascadeResolver, Generation};
pub use shared::SharedResolver;

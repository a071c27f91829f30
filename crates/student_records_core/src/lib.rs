//! Shared student-records domain primitives.
//!
//! This crate owns the seed literals, secret-metadata sampling, configuration
//! parsing, response contracts and console report formatting. It intentionally
//! excludes AWS SDK and Lambda runtime concerns.

pub mod config;
pub mod contract;
pub mod record;
pub mod report;
pub mod secret;

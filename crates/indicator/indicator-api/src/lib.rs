//! Streaming Indicator API
//!
//! Serializable configuration for every indicator, plus [`FilterConfig`],
//! a tagged union that describes any one of them.

pub mod config;

pub use config::*;

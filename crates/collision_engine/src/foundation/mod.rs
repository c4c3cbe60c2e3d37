//! Foundation module - Core utilities and types
//!
//! This module provides the small set of utilities the collision code
//! builds on:
//! - Math types and operations
//! - Logging utilities

pub mod logging;
pub mod math;

//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Report model and per-line error records
//! - Fatal error type
//! - Line ingest shared by every tool
//! - Rendering to console and result file
//! - Logging setup

pub mod error;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod render;

//! Flows module - The three analyzers
//!
//! Provides:
//! - stats: Descriptive statistics over numbers
//! - convert: Binary/hexadecimal conversion with 0-100 scaling
//! - words: Word frequency counting

pub mod convert;
pub mod stats;
pub mod words;

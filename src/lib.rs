//! Selector-fixer library crate
//!
//! Exposes the extraction, mapping, patching, and reporting modules so the
//! full pipeline can be exercised in tests without going through CLI startup.

pub mod config;
pub mod extract;
pub mod llm;
pub mod patch;
pub mod report;
pub mod workflow;

//! Ollama-backed selector mapping
//!
//! One prompt in, one JSON mapping out. `client` owns the transport,
//! `prompts` builds the request text, `parse` turns the raw response into a
//! [`MappingSet`].

pub mod client;
pub mod parse;
pub mod prompts;

pub use client::{Generate, OllamaClient};
pub use parse::{MappingEntry, MappingSet};

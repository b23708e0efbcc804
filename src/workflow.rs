//! End-to-end fix pipeline
//!
//! Prompt construction, one generation call, normalization, and patching,
//! behind a transport seam so the whole flow runs against a stub in tests.

use crate::llm::client::{request_mapping, Generate};
use crate::llm::{parse, prompts, MappingSet};
use crate::patch;
use anyhow::Context;

/// Result of a successful mapping run.
#[derive(Debug)]
pub struct FixOutcome {
    pub mapping: MappingSet,
    pub patched: String,
}

/// Run the full pipeline over the two test file bodies.
///
/// Transport failures degrade to an empty response inside the requester and
/// surface here as a normalization error; there is no partial-success mode.
pub fn run(
    transport: &dyn Generate,
    selenium_code: &str,
    playwright_code: &str,
    test_results: Option<&str>,
) -> anyhow::Result<FixOutcome> {
    let prompt = prompts::build_mapping_prompt(selenium_code, playwright_code, test_results);
    let response = request_mapping(transport, &prompt);
    let mapping =
        parse::parse_mapping_set(&response).context("Failed to analyze and map selectors")?;
    let patched = patch::apply_mappings(selenium_code, &mapping.mappings);
    Ok(FixOutcome { mapping, patched })
}
